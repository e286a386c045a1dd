/// Errors returned by fallible element access, construction and projection builders.
///
/// The panicking operator forms ([`Index`][std::ops::Index] and friends) panic with the
/// [`Display`][std::fmt::Display] message of the matching variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A vector slot outside of `0..len` was accessed, or more than `len` values were supplied.
    #[error("vector index {index} out of bounds for length {len}")]
    VectorIndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The number of elements of the vector.
        len: usize,
    },

    /// A matrix element outside of the `rows`x`cols` shape was accessed, or more values than fit
    /// were supplied.
    #[error("matrix index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    MatrixIndexOutOfBounds {
        /// The offending row index.
        row: usize,
        /// The offending column index.
        col: usize,
        /// The number of rows of the matrix.
        rows: usize,
        /// The number of columns of the matrix.
        cols: usize,
    },

    /// A transformation could not be built from the given parameters.
    #[error("invalid transformation: {reason}")]
    Transformation {
        /// What is wrong with the parameters.
        reason: &'static str,
    },
}

/// Result alias using [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::VectorIndexOutOfBounds { index: 3, len: 3 }.to_string(),
            "vector index 3 out of bounds for length 3"
        );
        assert_eq!(
            Error::MatrixIndexOutOfBounds {
                row: 0,
                col: 4,
                rows: 2,
                cols: 4
            }
            .to_string(),
            "matrix index (0, 4) out of bounds for 2x4 matrix"
        );
        assert_eq!(
            Error::Transformation {
                reason: "left and right planes coincide"
            }
            .to_string(),
            "invalid transformation: left and right planes coincide"
        );
    }
}
