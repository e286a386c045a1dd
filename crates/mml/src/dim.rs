//! Dimension checks evaluated during monomorphization.
//!
//! Referencing one of these constants from a generic function turns a dimension mismatch into a
//! compile error at the call site that instantiates it:
//!
//! ```compile_fail
//! # use mml::*;
//! let v = vec3(1, 2, 3).widen::<2>();
//! ```

pub(crate) struct Dims<const A: usize, const B: usize>;

impl<const A: usize, const B: usize> Dims<A, B> {
    /// `A` fits into `B`.
    pub(crate) const FITS: () = assert!(A <= B, "dimension does not fit into the target size");

    /// `A` is strictly smaller than `B`.
    pub(crate) const BELOW: () = assert!(A < B, "dimension must be smaller than the target size");

    /// `B` is exactly one larger than `A` (payload and storage dimension of homogeneous types).
    pub(crate) const HOMOGENEOUS: () = assert!(
        A + 1 == B,
        "homogeneous storage must be one larger than the payload"
    );
}

/// The larger of two sizes.
pub(crate) const fn max(a: usize, b: usize) -> usize {
    if a > b {
        a
    } else {
        b
    }
}

pub(crate) struct Promotion<const A: usize, const B: usize, const K: usize>;

impl<const A: usize, const B: usize, const K: usize> Promotion<A, B, K> {
    /// `K` is the larger of `A` and `B`.
    pub(crate) const LARGER: () = assert!(
        K == max(A, B),
        "result size must be the size of the larger operand"
    );
}
