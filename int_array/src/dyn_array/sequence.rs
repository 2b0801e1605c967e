use super::DynamicIntArray;
use crate::error::{IntArrayError, Result};
use crate::traits::check_bounds;

impl DynamicIntArray {
    /// Removes the integer at an index and returns it.
    ///
    /// All following integers are moved one slot towards the front, keeping their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`](IntArrayError::OutOfBounds) if `index` is not less than
    /// [`DynamicIntArray::size`]. The array is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_array::DynamicIntArray;
    ///
    /// let mut ar = DynamicIntArray::from(vec![-2, 3, 6, 7]);
    ///
    /// assert_eq!(Ok(3), ar.remove_at(1));
    /// assert_eq!("[-2, 6, 7]", ar.to_string());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<i64> {
        check_bounds(index, self.size)?;
        let removed = self.data[index];
        self.data.copy_within(index + 1..self.size, index);
        self.size -= 1;
        Ok(removed)
    }

    /// Removes the first integer equal to `value` and returns the index it was removed from.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`](IntArrayError::NotFound) if no integer equals `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_array::{DynamicIntArray, IntArrayError};
    ///
    /// let mut ar = DynamicIntArray::from(vec![-2, 3, 6, 7]);
    ///
    /// assert_eq!(Ok(2), ar.remove(6));
    /// assert_eq!(Err(IntArrayError::NotFound(100)), ar.remove(100));
    /// assert_eq!("[-2, 3, 7]", ar.to_string());
    /// ```
    pub fn remove(&mut self, value: i64) -> Result<usize> {
        let index = self.index_of(value).ok_or(IntArrayError::NotFound(value))?;
        self.remove_at(index)?;
        Ok(index)
    }

    /// The index of the first integer equal to `value`, scanning from the front.
    #[inline]
    pub fn index_of(&self, value: i64) -> Option<usize> {
        self.as_slice().iter().position(|&v| v == value)
    }

    /// Checks whether any integer equals `value`.
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.index_of(value).is_some()
    }

    /// Reverses the order of the integers in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_array::DynamicIntArray;
    ///
    /// let mut ar = DynamicIntArray::from(vec![1, 2, 3]);
    /// ar.reverse();
    ///
    /// assert_eq!("[3, 2, 1]", ar.to_string());
    /// ```
    pub fn reverse(&mut self) {
        let Some(mut back) = self.size.checked_sub(1) else {
            return;
        };
        let mut front = 0;
        while front < back {
            self.data.swap(front, back);
            front += 1;
            back -= 1;
        }
    }

    /// Sorts the integers into non-decreasing order. Equal integers may be reordered.
    #[inline]
    pub fn sort(&mut self) {
        self.as_mut_slice().sort_unstable()
    }

    /// Whether the integers are in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        self.as_slice().windows(2).all(|w| w[0] <= w[1])
    }

    /// Searches for `key` in an array sorted in ascending order.
    ///
    /// Returns the index of the first integer equal to `key`, or `None` if there is none.
    /// If the array is not sorted, the result is unspecified. This is only checked in debug builds.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_array::DynamicIntArray;
    ///
    /// let mut ar = DynamicIntArray::from(vec![3, 7, 6, -2]);
    /// ar.sort();
    ///
    /// assert_eq!(Some(2), ar.binary_search(6));
    /// assert_eq!(None, ar.binary_search(5));
    /// ```
    pub fn binary_search(&self, key: i64) -> Option<usize> {
        debug_assert!(self.is_sorted(), "binary search on unsorted array {self}");
        let elements = self.as_slice();

        // Narrow [lo, hi) down to the first position holding a value >= key
        let (mut lo, mut hi) = (0, elements.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if elements[mid] < key {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        (lo < elements.len() && elements[lo] == key).then_some(lo)
    }
}
