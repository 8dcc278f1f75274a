//! # Matrix type storing only the upper-triangular part
//!
//! A square matrix composed of [`BoundedVector`](crate::vector::BoundedVector) rows. Row `i` of
//! a matrix of dimension `N` holds the `N - i` entries on or right of the diagonal and carries
//! start index `i`, so elements are addressed by true matrix column throughout. All storage,
//! bounds checking and per-row arithmetic is delegated to the vector type.

pub use triangular::Triangular as TriangularMatrix;

mod triangular;

use crate::vector::MAX_VECTOR_SIZE;

/// Largest dimension a matrix may have.
///
/// Validated before any row is allocated.
pub const MAX_MATRIX_SIZE: usize = 10_000;

// Row zero of a maximally sized matrix is a vector of maximal dimension.
const _: () = assert!(MAX_MATRIX_SIZE <= MAX_VECTOR_SIZE);
