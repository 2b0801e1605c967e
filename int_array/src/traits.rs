use crate::error::{IntArrayError, Result};

/// Allows indexed access to integers in a datastructure
pub trait IntAccess {
    /// The amount of integers saved in this datastructure.
    fn len(&self) -> usize;

    /// Checks whether this has no integers saved.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_array::{DynamicIntArray, IntAccess};
    ///
    /// let mut v = DynamicIntArray::new();
    ///
    /// assert!(IntAccess::is_empty(&v));
    ///
    /// v.add(125);
    ///
    /// assert!(!IntAccess::is_empty(&v));
    /// ```
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets an integer without making any checks for bounds.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`IntAccess::len`].
    unsafe fn get_unchecked(&self, index: usize) -> i64;

    /// Sets an integer to the given value without making any checks for bounds.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`IntAccess::len`].
    unsafe fn set_unchecked(&mut self, index: usize, value: i64);

    /// Gets the integer at an index while checking for bounds.
    ///
    /// # Errors
    ///
    /// Returns [`IntArrayError::OutOfBounds`] if `index` is not less than the length.
    #[inline]
    fn get(&self, index: usize) -> Result<i64> {
        check_bounds(index, self.len())?;
        // SAFETY: we checked the index is in bounds
        Ok(unsafe { self.get_unchecked(index) })
    }

    /// Sets the integer at an index to the given value while checking for bounds.
    ///
    /// # Errors
    ///
    /// Returns [`IntArrayError::OutOfBounds`] if `index` is not less than the length.
    #[inline]
    fn set(&mut self, index: usize, value: i64) -> Result<()> {
        check_bounds(index, self.len())?;
        // SAFETY: we checked the index is in bounds
        unsafe { self.set_unchecked(index, value) };
        Ok(())
    }
}

impl<T: IntAccess> IntAccess for &'_ mut T {
    #[inline]
    fn len(&self) -> usize {
        <T as IntAccess>::len(self)
    }

    #[inline]
    unsafe fn get_unchecked(&self, index: usize) -> i64 {
        <T as IntAccess>::get_unchecked(self, index)
    }

    #[inline]
    unsafe fn set_unchecked(&mut self, index: usize, value: i64) {
        <T as IntAccess>::set_unchecked(self, index, value)
    }
}

/// Fails with [`IntArrayError::OutOfBounds`] unless `index < len`.
#[inline]
pub(crate) fn check_bounds(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(IntArrayError::OutOfBounds { index, len });
    }
    Ok(())
}
