//! # Triangular matrix
//!
//! A square matrix keeping only the entries at or above the diagonal, halving memory relative
//! to a full square layout. Rows are bounded vectors sized and offset by an explicit rule fixed
//! at construction: row `i` of a matrix of dimension `N` has length `N - i` and start index
//! `i`. Nothing here reaches into a row's backing store; every element access goes through the
//! row's own checks.
use std::fmt;
use std::ops::{Add, Index, IndexMut, Sub};

use itertools::Itertools;
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::matrix::MAX_MATRIX_SIZE;
use crate::vector::BoundedVector;

/// Uses a `Vec` of [`BoundedVector`] rows as underlying data structure. Dimension is fixed at
/// creation.
///
/// The element at `(i, j)` with `j >= i` lives in row `i` at position `j`; the row's start
/// index maps the true column to the right slot. Positions with `j < i` are not represented
/// and are rejected as out of range by the row itself.
///
/// Cloning deep-copies every row; two instances never alias storage.
#[derive(Debug)]
pub struct Triangular<T> {
    rows: Vec<BoundedVector<T>>,
}

impl<T> Triangular<T> {
    /// Create a zero-filled matrix of the given dimension.
    ///
    /// # Arguments
    ///
    /// * `order`: Number of rows and columns. May be zero.
    ///
    /// # Errors
    ///
    /// `InvalidSize` when `order` exceeds [`MAX_MATRIX_SIZE`]. Validation happens before any
    /// row is allocated. Row construction itself cannot fail for an accepted `order`, since
    /// the matrix cap never exceeds the vector cap.
    pub fn new(order: usize) -> Result<Self>
    where
        T: Zero + Clone,
    {
        if order > MAX_MATRIX_SIZE {
            return Err(Error::InvalidSize { size: order, maximum: MAX_MATRIX_SIZE, });
        }

        let rows = (0..order)
            .map(|i| BoundedVector::with_start_index(order - i, i))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rows, })
    }

    /// The dimension: the number of rows and columns of the full square matrix.
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    /// Retrieve a row.
    ///
    /// The returned row addresses its elements by true matrix column, from the diagonal
    /// rightward.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `row` is not below the dimension.
    pub fn row(&self, row: usize) -> Result<&BoundedVector<T>> {
        self.rows.get(row).ok_or(Error::IndexOutOfRange {
            index: row,
            start_index: 0,
            len: self.rows.len(),
        })
    }

    /// Retrieve a row mutably.
    ///
    /// Replacing the row wholesale is the caller's responsibility to do shape-preservingly: a
    /// row of dimension `N - i` with start index `i`. Shape is checked again, in debug builds,
    /// by the next whole-matrix operation.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `row` is not below the dimension.
    pub fn row_mut(&mut self, row: usize) -> Result<&mut BoundedVector<T>> {
        let len = self.rows.len();

        self.rows.get_mut(row).ok_or(Error::IndexOutOfRange {
            index: row,
            start_index: 0,
            len,
        })
    }

    /// Retrieve the element at true matrix coordinates.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `row` is not below the dimension, or when `column` is outside
    /// `row..dimension`, the represented region of that row.
    pub fn get(&self, row: usize, column: usize) -> Result<&T> {
        self.row(row)?.get(column)
    }

    /// Overwrite the element at true matrix coordinates.
    ///
    /// # Errors
    ///
    /// As for [`Triangular::get`]; the matrix is unchanged on any error.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        self.row_mut(row)?.set(column, value)
    }

    /// Elementwise sum of two matrices of equal dimension.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` when the dimensions differ.
    pub fn try_add(&self, other: &Self) -> Result<Self>
    where
        T: Add<Output = T> + Clone,
    {
        self.zip_rows_with(other, BoundedVector::try_add)
    }

    /// Elementwise difference of two matrices of equal dimension.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` when the dimensions differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self>
    where
        T: Sub<Output = T> + Clone,
    {
        self.zip_rows_with(other, BoundedVector::try_sub)
    }

    fn zip_rows_with(
        &self,
        other: &Self,
        operation: impl Fn(&BoundedVector<T>, &BoundedVector<T>) -> Result<BoundedVector<T>>,
    ) -> Result<Self> {
        debug_assert!(self.shape_is_consistent());
        debug_assert!(other.shape_is_consistent());

        if self.order() != other.order() {
            return Err(Error::SizeMismatch { left: self.order(), right: other.order(), });
        }

        // Corresponding rows share their length by the construction rule, so the per-row
        // operation can only fail on rows a caller reshaped through `row_mut`.
        let rows = self.rows.iter()
            .zip_eq(other.rows.iter())
            .map(|(left, right)| operation(left, right))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rows, })
    }

    fn shape_is_consistent(&self) -> bool {
        let order = self.rows.len();

        self.rows.iter()
            .enumerate()
            .all(|(i, row)| row.len() == order - i && row.start_index() == i)
    }
}

impl<T: Clone> Clone for Triangular<T> {
    fn clone(&self) -> Self {
        Self { rows: self.rows.clone(), }
    }

    /// Overwrite this matrix with a deep copy of `source`, row by row, reusing row allocations
    /// where the dimensions line up.
    fn clone_from(&mut self, source: &Self) {
        self.rows.clone_from(&source.rows);
    }
}

impl<T: PartialEq> PartialEq for Triangular<T> {
    /// Equal dimension and all corresponding rows equal. Different dimensions are never equal.
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<T: Eq> Eq for Triangular<T> {}

impl<T> Index<usize> for Triangular<T> {
    type Output = BoundedVector<T>;

    /// # Panics
    ///
    /// When `row` is not below the dimension. Use [`Triangular::row`] for a checked variant.
    fn index(&self, row: usize) -> &Self::Output {
        match self.row(row) {
            Ok(row) => row,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> IndexMut<usize> for Triangular<T> {
    /// # Panics
    ///
    /// When `row` is not below the dimension. Use [`Triangular::row_mut`] for a checked
    /// variant.
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        match self.row_mut(row) {
            Ok(row) => row,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Add<Output = T> + Clone> Add for &Triangular<T> {
    type Output = Triangular<T>;

    /// # Panics
    ///
    /// When the dimensions differ. Use [`Triangular::try_add`] for a checked variant.
    fn add(self, rhs: Self) -> Self::Output {
        match self.try_add(rhs) {
            Ok(sum) => sum,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Sub<Output = T> + Clone> Sub for &Triangular<T> {
    type Output = Triangular<T>;

    /// # Panics
    ///
    /// When the dimensions differ. Use [`Triangular::try_sub`] for a checked variant.
    fn sub(self, rhs: Self) -> Self::Output {
        match self.try_sub(rhs) {
            Ok(difference) => difference,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Triangular<T> {
    /// One row per line, stored elements only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use num_rational::Rational32;

    use crate::error::Error;
    use crate::matrix::{MAX_MATRIX_SIZE, TriangularMatrix};

    /// Build a matrix from per-row values, row `i` starting at the diagonal.
    fn from_test_rows(rows: Vec<Vec<i32>>) -> TriangularMatrix<i32> {
        let order = rows.len();
        let mut m = TriangularMatrix::new(order).unwrap();
        for (i, values) in rows.into_iter().enumerate() {
            assert_eq!(values.len(), order - i);
            for (offset, value) in values.into_iter().enumerate() {
                m.set(i, i + offset, value).unwrap();
            }
        }

        m
    }

    #[test]
    fn new() {
        let m = TriangularMatrix::<i32>::new(5).unwrap();

        assert_eq!(m.order(), 5);
        for i in 0..5 {
            let row = m.row(i).unwrap();
            assert_eq!(row.len(), 5 - i);
            assert_eq!(row.start_index(), i);
            assert!(row.iter().all(|&value| value == 0));
        }
    }

    #[test]
    fn new_empty() {
        let m = TriangularMatrix::<i32>::new(0).unwrap();

        assert_eq!(m.order(), 0);
        assert_eq!(
            m.row(0).map(|_| ()),
            Err(Error::IndexOutOfRange { index: 0, start_index: 0, len: 0, }),
        );
    }

    #[test]
    fn new_too_large() {
        let result = TriangularMatrix::<i32>::new(MAX_MATRIX_SIZE + 1);

        assert_eq!(
            result.unwrap_err(),
            Error::InvalidSize { size: MAX_MATRIX_SIZE + 1, maximum: MAX_MATRIX_SIZE, },
        );
    }

    #[test]
    fn get_set() {
        let mut m = TriangularMatrix::<i32>::new(10).unwrap();

        m.set(1, 1, 10).unwrap();
        assert_eq!(m.get(1, 1), Ok(&10));
        assert_eq!(m[1][1], 10);

        m[2][3] = 7;
        assert_eq!(m.get(2, 3), Ok(&7));
    }

    #[test]
    fn get_outside_represented_region() {
        let m = TriangularMatrix::<i32>::new(3).unwrap();

        // Below the diagonal
        assert_eq!(
            m.get(2, 0),
            Err(Error::IndexOutOfRange { index: 0, start_index: 2, len: 1, }),
        );
        // Past the last column
        assert_eq!(
            m.get(1, 3),
            Err(Error::IndexOutOfRange { index: 3, start_index: 1, len: 2, }),
        );
        // Past the last row
        assert_eq!(
            m.get(3, 3),
            Err(Error::IndexOutOfRange { index: 3, start_index: 0, len: 3, }),
        );
    }

    #[test]
    #[should_panic]
    fn index_below_diagonal() {
        let m = TriangularMatrix::<i32>::new(3).unwrap();

        let _ = m[2][0];
    }

    #[test]
    fn clone_has_its_own_memory() {
        let m = from_test_rows(vec![
            vec![0, 1, 2],
            vec![3, 4],
            vec![5],
        ]);
        let copy = m.clone();
        assert_eq!(copy, m);

        // Mutating a row of the source diverges the two
        let mut m = m;
        let bumped = m[0].clone() + 1;
        m[0] = bumped;
        assert_ne!(m, copy);
        assert_eq!(m.get(0, 1), Ok(&2));
        assert_eq!(copy.get(0, 1), Ok(&1));
    }

    #[test]
    fn clone_from_changes_order() {
        let source = from_test_rows(vec![
            vec![1, 2],
            vec![3],
        ]);

        // Shrinking
        let mut m = TriangularMatrix::<i32>::new(10).unwrap();
        m.clone_from(&source);
        assert_eq!(m, source);
        assert_eq!(m.order(), 2);

        // Growing
        let mut m = TriangularMatrix::<i32>::new(1).unwrap();
        m.clone_from(&source);
        assert_eq!(m, source);

        // Applying twice observes the same state as once
        m.clone_from(&source);
        assert_eq!(m, source);
    }

    #[test]
    fn eq() {
        let m = from_test_rows(vec![
            vec![0, 1],
            vec![2],
        ]);

        assert_eq!(m, m);
        assert_eq!(m, from_test_rows(vec![vec![0, 1], vec![2]]));
        assert_ne!(m, from_test_rows(vec![vec![0, 9], vec![2]]));
        // Different dimensions are never equal
        assert_ne!(m, TriangularMatrix::<i32>::new(3).unwrap());
        assert_ne!(m, TriangularMatrix::<i32>::new(0).unwrap());
    }

    #[test]
    fn add_sub() {
        let mut m = TriangularMatrix::<i32>::new(2).unwrap();
        let mut doubled = TriangularMatrix::<i32>::new(2).unwrap();
        for i in 0..2 {
            for j in i..2 {
                m.set(i, j, (i + j) as i32).unwrap();
                doubled.set(i, j, 2 * (i + j) as i32).unwrap();
            }
        }

        assert_eq!(m.try_add(&m).unwrap(), doubled);
        assert_eq!(&m + &m, doubled);

        assert_eq!(doubled.try_sub(&m).unwrap(), m);
        assert_eq!(&doubled - &m, m);
    }

    #[test]
    fn add_preserves_row_shape() {
        let m = TriangularMatrix::<i32>::new(3).unwrap();

        let sum = m.try_add(&m).unwrap();
        for i in 0..3 {
            assert_eq!(sum.row(i).unwrap().len(), 3 - i);
            assert_eq!(sum.row(i).unwrap().start_index(), i);
        }
    }

    #[test]
    fn add_size_mismatch() {
        let m = TriangularMatrix::<i32>::new(10).unwrap();
        let smaller = TriangularMatrix::<i32>::new(5).unwrap();

        assert_eq!(m.try_add(&smaller), Err(Error::SizeMismatch { left: 10, right: 5, }));
        assert_eq!(smaller.try_sub(&m), Err(Error::SizeMismatch { left: 5, right: 10, }));
    }

    #[test]
    #[should_panic]
    fn add_operator_size_mismatch() {
        let m = TriangularMatrix::<i32>::new(10).unwrap();
        let smaller = TriangularMatrix::<i32>::new(5).unwrap();

        let _ = &m + &smaller;
    }

    #[test]
    fn rational_elements() {
        let mut m = TriangularMatrix::<Rational32>::new(2).unwrap();
        m.set(0, 1, Rational32::new(1, 2)).unwrap();

        let sum = m.try_add(&m).unwrap();
        assert_eq!(sum.get(0, 1), Ok(&Rational32::from_integer(1)));
    }

    #[test]
    fn display() {
        let m = from_test_rows(vec![
            vec![0, 1],
            vec![3],
        ]);

        assert_eq!(m.to_string(), "0 1\n3\n");
    }
}
