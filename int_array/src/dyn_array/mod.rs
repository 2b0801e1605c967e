use std::fmt::{Debug, Display, Formatter};

use itertools::Itertools;

use self::backing::Backing;
pub use self::backing::DEFAULT_CAPACITY;
use crate::error::Result;
use crate::traits::IntAccess;

mod backing;
mod sequence;

///
/// A growable array of signed integers.
///
/// The elements live in a fixed-size backing store which is replaced by one twice its size
/// whenever an append finds it full.
///
/// # Examples
///
/// ```
/// use int_array::DynamicIntArray;
///
/// let mut ar = DynamicIntArray::new();
/// ar.add(3);
/// ar.add(7);
/// ar.add(6);
/// ar.add(-2);
///
/// ar.sort();
///
/// assert_eq!(Ok(-2), ar.get(0));
/// assert_eq!("[-2, 3, 6, 7]", ar.to_string());
/// ```
///
#[derive(Clone, Default)]
pub struct DynamicIntArray {
    data: Backing,
    size: usize,
}

static_assertions::assert_impl_all!(DynamicIntArray: Send, Sync, Clone, Default);

impl DynamicIntArray {
    /// Creates an empty array. Nothing is allocated until the first element is added.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_array::DynamicIntArray;
    ///
    /// let ar = DynamicIntArray::new();
    ///
    /// assert_eq!(0, ar.size());
    /// assert_eq!(0, ar.capacity());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty array whose backing store already fits `capacity` integers.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The number of integers which should fit into this array without
    /// reallocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_array::DynamicIntArray;
    ///
    /// let ar = DynamicIntArray::with_capacity(20);
    ///
    /// assert!(ar.is_empty());
    /// assert_eq!(20, ar.capacity());
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Backing::with_capacity(capacity),
            size: 0,
        }
    }

    /// Returns the amount of integers that fit into the currently allocated backing store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The amount of integers saved in this array.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_array::DynamicIntArray;
    ///
    /// let mut ar = DynamicIntArray::new();
    /// for i in 0..20 {
    ///     ar.add(i);
    /// }
    ///
    /// assert_eq!(20, ar.size());
    /// ```
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Same as [`DynamicIntArray::size`].
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Checks whether this has no integers saved.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Gets the integer at an index.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`](crate::IntArrayError::OutOfBounds) if `index` is not less than
    /// [`DynamicIntArray::size`].
    ///
    /// # Examples
    ///
    /// ```
    /// use int_array::{DynamicIntArray, IntArrayError};
    ///
    /// let mut ar = DynamicIntArray::new();
    /// ar.add(25);
    ///
    /// assert_eq!(Ok(25), ar.get(0));
    /// assert_eq!(Err(IntArrayError::OutOfBounds { index: 1, len: 1 }), ar.get(1));
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<i64> {
        IntAccess::get(self, index)
    }

    /// Overwrites the integer at an index. No other slot changes.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`](crate::IntArrayError::OutOfBounds) if `index` is not less than
    /// [`DynamicIntArray::size`]. The array is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_array::DynamicIntArray;
    ///
    /// let mut ar = DynamicIntArray::from(vec![1, 2, 3]);
    /// ar.set(1, 20).unwrap();
    ///
    /// assert_eq!("[1, 20, 3]", ar.to_string());
    /// assert!(ar.set(3, 40).is_err());
    /// ```
    #[inline]
    pub fn set(&mut self, index: usize, value: i64) -> Result<()> {
        IntAccess::set(self, index, value)
    }

    /// Adds an integer to the end of the array, growing the backing store if it is full.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to append.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_array::DynamicIntArray;
    ///
    /// let mut ar = DynamicIntArray::new();
    /// ar.add(25);
    /// ar.add(-8);
    ///
    /// assert_eq!(Ok(25), ar.get(0));
    /// assert_eq!(Ok(-8), ar.get(1));
    /// ```
    pub fn add(&mut self, value: i64) {
        if self.size == self.capacity() {
            self.data = self.data.reallocate(self.size, self.data.grown_capacity());
        }
        self.data[self.size] = value;
        self.size += 1;
    }

    /// Shrinks the backing store to hold exactly the saved integers.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_array::DynamicIntArray;
    ///
    /// let mut ar = DynamicIntArray::with_capacity(200);
    /// for i in 0..50 {
    ///     ar.add(i);
    /// }
    ///
    /// ar.shrink_to_fit();
    ///
    /// assert_eq!(50, ar.capacity());
    /// ```
    pub fn shrink_to_fit(&mut self) {
        if self.size < self.capacity() {
            self.data = self.data.reallocate(self.size, self.size);
        }
    }

    /// Removes all integers, keeping the backing store.
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// A view of the saved integers in their current order.
    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.data[..self.size]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [i64] {
        &mut self.data[..self.size]
    }
}

impl IntAccess for DynamicIntArray {
    #[inline]
    fn len(&self) -> usize {
        self.size
    }

    #[inline]
    unsafe fn get_unchecked(&self, index: usize) -> i64 {
        *self.data.get_unchecked(index)
    }

    #[inline]
    unsafe fn set_unchecked(&mut self, index: usize, value: i64) {
        *self.data.get_unchecked_mut(index) = value
    }
}

impl Display for DynamicIntArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.as_slice().iter().join(", "))
    }
}

impl Debug for DynamicIntArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl PartialEq for DynamicIntArray {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for DynamicIntArray {}

impl FromIterator<i64> for DynamicIntArray {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut ar = Self::with_capacity(iter.size_hint().0);
        for v in iter {
            ar.add(v);
        }
        ar
    }
}

impl From<&[i64]> for DynamicIntArray {
    fn from(values: &[i64]) -> Self {
        values.iter().copied().collect()
    }
}

impl From<Vec<i64>> for DynamicIntArray {
    fn from(values: Vec<i64>) -> Self {
        let size = values.len();
        Self {
            data: Backing::from(values.into_boxed_slice()),
            size,
        }
    }
}
