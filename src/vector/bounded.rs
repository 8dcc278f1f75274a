//! # Bounded vector
//!
//! Wrapping a `Vec` such that its length is validated at creation and element positions can
//! start at a nonzero offset. The backing store always holds exactly as many values as the
//! vector is long; positions outside the addressable window are rejected, never wrapped.
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::Iter;

use itertools::Itertools;
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::vector::MAX_VECTOR_SIZE;

/// Uses a `Vec` as underlying data structure. Length is fixed at creation.
///
/// Addressable positions run from `start_index` up to but excluding `start_index + len`; a
/// position `p` maps to slot `p - start_index` of the backing store. Plain vectors keep the
/// default start index of zero, making the addressable window the usual `0..len`. Rows of a
/// triangular matrix use the offset to address elements by true matrix column.
///
/// Cloning duplicates the backing store; two instances never alias storage.
#[derive(Debug)]
pub struct Bounded<T> {
    data: Vec<T>,
    start_index: usize,
}

impl<T> Bounded<T> {
    /// Create a zero-filled vector with the default start index of zero.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of elements. May be zero.
    ///
    /// # Errors
    ///
    /// `InvalidSize` when `len` exceeds [`MAX_VECTOR_SIZE`].
    pub fn new(len: usize) -> Result<Self>
    where
        T: Zero + Clone,
    {
        Self::with_start_index(len, 0)
    }

    /// Create a zero-filled vector whose first addressable position is `start_index`.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of elements. May be zero.
    /// * `start_index`: First addressable position.
    ///
    /// # Errors
    ///
    /// `InvalidSize` when `len` exceeds [`MAX_VECTOR_SIZE`], `InvalidStartIndex` when
    /// `start_index` does. Validation happens before the backing store is allocated.
    pub fn with_start_index(len: usize, start_index: usize) -> Result<Self>
    where
        T: Zero + Clone,
    {
        Self::check_shape(len, start_index)?;

        Ok(Self { data: vec![T::zero(); len], start_index, })
    }

    /// Create a vector with all values being equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value which all elements of this vector are equal to.
    /// * `len`: Length of the vector, number of elements.
    ///
    /// # Errors
    ///
    /// `InvalidSize` when `len` exceeds [`MAX_VECTOR_SIZE`].
    pub fn constant(value: T, len: usize) -> Result<Self>
    where
        T: Clone,
    {
        Self::check_shape(len, 0)?;

        Ok(Self { data: vec![value; len], start_index: 0, })
    }

    /// Create a vector from prepared values.
    ///
    /// # Arguments
    ///
    /// * `values`: Element values. Will not be changed and directly used for creation.
    /// * `start_index`: First addressable position.
    ///
    /// # Errors
    ///
    /// `InvalidSize` when `values` holds more than [`MAX_VECTOR_SIZE`] elements,
    /// `InvalidStartIndex` when `start_index` exceeds that same cap.
    pub fn from_values(values: Vec<T>, start_index: usize) -> Result<Self> {
        Self::check_shape(values.len(), start_index)?;

        Ok(Self { data: values, start_index, })
    }

    fn check_shape(len: usize, start_index: usize) -> Result<()> {
        if len > MAX_VECTOR_SIZE {
            return Err(Error::InvalidSize { size: len, maximum: MAX_VECTOR_SIZE, });
        }
        if start_index > MAX_VECTOR_SIZE {
            return Err(Error::InvalidStartIndex { start_index, maximum: MAX_VECTOR_SIZE, });
        }

        Ok(())
    }

    /// The number of elements in this vector.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The first addressable position.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Retrieve the element at a position.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `position` lies outside `start_index..(start_index + len)`.
    pub fn get(&self, position: usize) -> Result<&T> {
        self.slot(position).map(|slot| &self.data[slot])
    }

    /// Retrieve the element at a position mutably.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `position` lies outside the addressable window.
    pub fn get_mut(&mut self, position: usize) -> Result<&mut T> {
        let slot = self.slot(position)?;

        Ok(&mut self.data[slot])
    }

    /// Overwrite the element at a position.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `position` lies outside the addressable window; the vector is
    /// unchanged in that case.
    pub fn set(&mut self, position: usize, value: T) -> Result<()> {
        let slot = self.slot(position)?;
        self.data[slot] = value;

        Ok(())
    }

    /// Translate a caller position to a slot of the backing store.
    fn slot(&self, position: usize) -> Result<usize> {
        match position.checked_sub(self.start_index) {
            Some(slot) if slot < self.data.len() => Ok(slot),
            _ => Err(Error::IndexOutOfRange {
                index: position,
                start_index: self.start_index,
                len: self.data.len(),
            }),
        }
    }

    /// Iterate over the element values in storage order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate over `(position, value)` pairs, positions in addressable numbering.
    pub fn positions(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        let start_index = self.start_index;

        self.data.iter()
            .enumerate()
            .map(move |(slot, value)| (start_index + slot, value))
    }

    /// Elementwise sum of two vectors of equal length.
    ///
    /// The result has the length and start index of the receiver.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` when the lengths differ.
    pub fn try_add(&self, other: &Self) -> Result<Self>
    where
        T: Add<Output = T> + Clone,
    {
        self.zip_with(other, |left, right| left + right)
    }

    /// Elementwise difference of two vectors of equal length.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` when the lengths differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self>
    where
        T: Sub<Output = T> + Clone,
    {
        self.zip_with(other, |left, right| left - right)
    }

    /// Sum of the elementwise products of two vectors of equal length.
    ///
    /// The start indices of the operands do not participate; elements are paired in storage
    /// order. An empty pair of vectors yields zero.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` when the lengths differ.
    pub fn dot(&self, other: &Self) -> Result<T>
    where
        T: Zero + Mul<Output = T> + Clone,
    {
        self.check_same_len(other)?;

        Ok(self.data.iter()
            .zip_eq(other.data.iter())
            .fold(T::zero(), |total, (left, right)| total + left.clone() * right.clone()))
    }

    fn zip_with(&self, other: &Self, mut operation: impl FnMut(T, T) -> T) -> Result<Self>
    where
        T: Clone,
    {
        self.check_same_len(other)?;

        Ok(Self {
            data: self.data.iter()
                .zip_eq(other.data.iter())
                .map(|(left, right)| operation(left.clone(), right.clone()))
                .collect(),
            start_index: self.start_index,
        })
    }

    fn check_same_len(&self, other: &Self) -> Result<()> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(Error::SizeMismatch { left: self.len(), right: other.len(), })
        }
    }
}

impl<T: Clone> Clone for Bounded<T> {
    fn clone(&self) -> Self {
        Self { data: self.data.clone(), start_index: self.start_index, }
    }

    /// Overwrite this vector with a deep copy of `source`, reusing the existing allocation
    /// where possible. The receiver takes on the source's length, start index and elements.
    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.start_index = source.start_index;
    }
}

impl<T: PartialEq> PartialEq for Bounded<T> {
    /// Equal length and all corresponding elements equal. The start index is bookkeeping, not
    /// content, and does not participate. Different lengths are never equal.
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for Bounded<T> {}

impl<T> Index<usize> for Bounded<T> {
    type Output = T;

    /// # Panics
    ///
    /// When `position` lies outside the addressable window. Use [`Bounded::get`] for a checked
    /// variant.
    fn index(&self, position: usize) -> &Self::Output {
        match self.get(position) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> IndexMut<usize> for Bounded<T> {
    /// # Panics
    ///
    /// When `position` lies outside the addressable window. Use [`Bounded::get_mut`] for a
    /// checked variant.
    fn index_mut(&mut self, position: usize) -> &mut Self::Output {
        match self.get_mut(position) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Add<Output = T> + Clone> Add<T> for Bounded<T> {
    type Output = Self;

    /// Add a scalar to every element. The result keeps the length and start index.
    fn add(self, rhs: T) -> Self::Output {
        self.map(|value| value + rhs.clone())
    }
}

impl<T: Sub<Output = T> + Clone> Sub<T> for Bounded<T> {
    type Output = Self;

    /// Subtract a scalar from every element. The result keeps the length and start index.
    fn sub(self, rhs: T) -> Self::Output {
        self.map(|value| value - rhs.clone())
    }
}

impl<T: Mul<Output = T> + Clone> Mul<T> for Bounded<T> {
    type Output = Self;

    /// Scale every element by a scalar. The result keeps the length and start index.
    fn mul(self, rhs: T) -> Self::Output {
        self.map(|value| value * rhs.clone())
    }
}

impl<T> Bounded<T> {
    fn map(self, operation: impl FnMut(T) -> T) -> Self {
        Self {
            data: self.data.into_iter().map(operation).collect(),
            start_index: self.start_index,
        }
    }
}

impl<T: Add<Output = T> + Clone> Add for &Bounded<T> {
    type Output = Bounded<T>;

    /// # Panics
    ///
    /// When the lengths differ. Use [`Bounded::try_add`] for a checked variant.
    fn add(self, rhs: Self) -> Self::Output {
        match self.try_add(rhs) {
            Ok(sum) => sum,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Sub<Output = T> + Clone> Sub for &Bounded<T> {
    type Output = Bounded<T>;

    /// # Panics
    ///
    /// When the lengths differ. Use [`Bounded::try_sub`] for a checked variant.
    fn sub(self, rhs: Self) -> Self::Output {
        match self.try_sub(rhs) {
            Ok(difference) => difference,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Zero + Mul<Output = T> + Clone> Mul for &Bounded<T> {
    type Output = T;

    /// The dot product.
    ///
    /// # Panics
    ///
    /// When the lengths differ. Use [`Bounded::dot`] for a checked variant.
    fn mul(self, rhs: Self) -> Self::Output {
        match self.dot(rhs) {
            Ok(product) => product,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Bounded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (slot, value) in self.data.iter().enumerate() {
            if slot > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }

        Ok(())
    }
}
