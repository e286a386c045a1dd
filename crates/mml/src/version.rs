use std::fmt;

/// Version of this library.
///
/// `major`, `minor` and `patch` follow the crate version. `build` is taken from the `MML_BUILD`
/// environment variable at compile time and is 0 when that is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    /// Incremented on breaking changes.
    pub major: u32,
    /// Incremented on backwards-compatible additions.
    pub minor: u32,
    /// Incremented on fixes.
    pub patch: u32,
    /// Build number, 0 for local builds.
    pub build: u32,
}

/// The version of the `mml` crate in use.
pub const VERSION: Version = Version {
    major: parse(env!("CARGO_PKG_VERSION_MAJOR")),
    minor: parse(env!("CARGO_PKG_VERSION_MINOR")),
    patch: parse(env!("CARGO_PKG_VERSION_PATCH")),
    build: match option_env!("MML_BUILD") {
        Some(build) => parse(build),
        None => 0,
    },
};

/// Returns the version of the `mml` crate in use.
///
/// # Examples
///
/// ```
/// let version = mml::version();
/// assert_eq!(version.to_string(), format!("{}.{}.{}({})", version.major, version.minor, version.patch, version.build));
/// ```
pub fn version() -> Version {
    VERSION
}

/// Parses a decimal number, stopping at the first non-digit.
const fn parse(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let mut value = 0u32;
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        value = value * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    value
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}({})",
            self.major, self.minor, self.patch, self.build
        )
    }
}
