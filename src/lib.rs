//! # Bounds-checked numeric containers
//!
//! Vectors with a capped size and an index offset, and square matrices that store only their
//! upper-triangular part. These were written by hand, because the value semantics need to be
//! exact: every copy and assignment duplicates the backing storage, every size and index is
//! validated eagerly at the offending call, and matrix rows keep their column numbering aligned
//! with the full matrix through a per-row index offset.
#![warn(missing_docs)]

pub mod error;
pub mod matrix;
pub mod vector;
