//! # Vector type with a capped size and an index offset
//!
//! A dense vector written by hand, because the copy and failure behavior needs to be exact:
//! deep copies on clone and assignment, and eager validation of every size and position. The
//! index offset lets a vector address positions starting at a nonzero value, which is what the
//! triangular matrix rows use to keep their column numbering aligned with the full matrix.

pub use bounded::Bounded as BoundedVector;

mod bounded;

/// Largest number of elements a vector may hold.
///
/// Construction validates against this cap before allocating, so a wildly oversized request is
/// rejected without touching the allocator. The same cap bounds start indices.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;
