//! A fixed-size linear algebra library for graphics code.
//!
//! # Motivation
//!
//! Rendering and geometry code mostly deals with a handful of small vectors and matrices: 2D/3D
//! points, homogeneous 4-vectors and the 3x3/4x4 matrices transforming them. `mml` provides those
//! types with their sizes encoded in the type, so that mismatched dimensions are caught by the
//! compiler instead of at runtime.
//!
//! # Goals & Non-Goals
//!
//! - Only support fixed-size vectors and matrices. Sizes are const generics; conversions that
//!   would silently drop elements require an explicitly named method ([`Vector::resize`],
//!   [`Matrix::resize`]).
//! - Store matrices row-major as a vector of row vectors, so row operations reuse the vector
//!   arithmetic.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types.
//!   Operations needing a square root or trigonometry require a floating-point [`Real`] type.
//! - Keep every value inline. Nothing in this crate allocates.
//! - Don't provide matrix inversion, decompositions, or SIMD-specialized code paths.
//!
//! # Coordinates
//!
//! Vectors are column vectors and matrices multiply them from the left (`matrix * vector`). An
//! affine [`Transform`] of `N`-dimensional space is a `(N + 1)`x`(N + 1)` matrix whose last
//! column holds the translation. Points are lifted into [`Homogeneous`] coordinates with `w = 1`,
//! directions with `w = 0`.
//!
//! # Environment Variables
//!
//! * `RUST_LOG`: overrides the log filter set up by [`init_logger!`].
//! * `MML_BUILD` (compile time): the build number reported by [`version()`].

#![warn(missing_docs)]

mod approx;
mod dim;
mod error;
mod homogeneous;
mod matrix;
mod traits;
mod transform;
mod vector;
mod version;

use log::LevelFilter;

pub use error::*;
pub use homogeneous::*;
pub use matrix::*;
pub use traits::*;
pub use transform::*;
pub use vector::*;
pub use version::*;

/// Macro-use only, not part of the public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and `mml` will log at *trace* level.
/// Otherwise, they will log at *debug* level. `RUST_LOG` takes precedence over both.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_logger_twice() {
        crate::init_logger!();
        crate::init_logger!();
        log::trace!("logger initialized");
    }
}
