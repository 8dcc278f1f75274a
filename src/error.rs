//! # Error reporting for container construction and access
//!
//! A single enum describing every way a size, index or operand shape can be rejected. All checks
//! happen at the offending call and are reported synchronously to the immediate caller; nothing
//! is deferred or silently downgraded. Equality comparison is the one deliberate exception: it
//! never produces an error, differently-sized containers simply compare unequal.
use std::error;
use std::fmt;

/// Shorthand for the outcome of any fallible container operation.
pub type Result<T> = std::result::Result<T, Error>;

/// An `Error` is created when a requested size, start index, element position or operand pairing
/// is rejected.
///
/// The variants carry the rejected value together with the bound it violated, so the message can
/// state both without the call site re-deriving them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A requested element count exceeds the relevant cap.
    ///
    /// The cap is [`MAX_VECTOR_SIZE`](crate::vector::MAX_VECTOR_SIZE) for vectors and
    /// [`MAX_MATRIX_SIZE`](crate::matrix::MAX_MATRIX_SIZE) for matrices. Sizes are `usize`, so
    /// the negative sizes the caps also guard against in other implementations are
    /// unrepresentable here.
    InvalidSize {
        /// The rejected element count or matrix dimension.
        size: usize,
        /// The cap it exceeds.
        maximum: usize,
    },
    /// A requested start index exceeds the vector size cap.
    InvalidStartIndex {
        /// The rejected start index.
        start_index: usize,
        /// The cap it exceeds.
        maximum: usize,
    },
    /// An element position or row index falls outside the addressable window.
    ///
    /// Both underflowing (below the start index) and overflowing positions map to this one
    /// variant; callers have no use for a finer distinction.
    IndexOutOfRange {
        /// The position as given by the caller.
        index: usize,
        /// First addressable position. Zero for row indexing and plain vectors.
        start_index: usize,
        /// Number of addressable positions.
        len: usize,
    },
    /// A binary operation was attempted between operands of differing size.
    ///
    /// Raised by elementwise addition, subtraction and the dot product on vectors of unequal
    /// length, and by addition and subtraction of matrices of unequal dimension.
    SizeMismatch {
        /// Size of the left-hand operand.
        left: usize,
        /// Size of the right-hand operand.
        right: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSize { size, maximum } => {
                write!(f, "size {} exceeds the maximum of {}", size, maximum)
            }
            Error::InvalidStartIndex { start_index, maximum } => {
                write!(f, "start index {} exceeds the maximum of {}", start_index, maximum)
            }
            Error::IndexOutOfRange { index, start_index, len } => {
                write!(
                    f,
                    "index {} out of range for positions {}..{}",
                    index, start_index, start_index + len,
                )
            }
            Error::SizeMismatch { left, right } => {
                write!(f, "operand sizes {} and {} differ", left, right)
            }
        }
    }
}

impl error::Error for Error {
}

#[cfg(test)]
mod test {
    use crate::error::Error;

    #[test]
    fn display() {
        let error = Error::InvalidSize { size: 11, maximum: 10 };
        assert_eq!(error.to_string(), "size 11 exceeds the maximum of 10");

        let error = Error::InvalidStartIndex { start_index: 7, maximum: 5 };
        assert_eq!(error.to_string(), "start index 7 exceeds the maximum of 5");

        let error = Error::IndexOutOfRange { index: 1, start_index: 2, len: 3 };
        assert_eq!(error.to_string(), "index 1 out of range for positions 2..5");

        let error = Error::SizeMismatch { left: 2, right: 5 };
        assert_eq!(error.to_string(), "operand sizes 2 and 5 differ");
    }
}
