//! The fixed-size store behind a [`DynamicIntArray`](super::DynamicIntArray).

use std::ops::{Deref, DerefMut};

/// The number of slots allocated by the first append into an empty array.
pub const DEFAULT_CAPACITY: usize = 8;

/// A heap allocated slice of slots that never changes its size.
///
/// Growing an array means allocating a larger [`Backing`] and moving the live prefix over.
#[derive(Clone, Default)]
pub(crate) struct Backing {
    slots: Box<[i64]>,
}

impl Backing {
    /// Allocates a store with exactly `capacity` zeroed slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity].into_boxed_slice(),
        }
    }

    /// The number of slots in this store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The capacity the next store should have once this one is full.
    ///
    /// An empty store grows to [`DEFAULT_CAPACITY`], a non-empty one doubles.
    #[inline]
    pub fn grown_capacity(&self) -> usize {
        match self.capacity() {
            0 => DEFAULT_CAPACITY,
            cap => match cap.checked_mul(2) {
                Some(grown) => grown,
                None => panic!("capacity overflow growing from {cap} slots"),
            },
        }
    }

    /// Allocates a new store of `capacity` slots, holding the first `len` slots of this one.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds either capacity.
    pub fn reallocate(&self, len: usize, capacity: usize) -> Self {
        let mut new = Self::with_capacity(capacity);
        new.slots[..len].copy_from_slice(&self.slots[..len]);
        new
    }
}

impl From<Box<[i64]>> for Backing {
    fn from(slots: Box<[i64]>) -> Self {
        Self { slots }
    }
}

impl Deref for Backing {
    type Target = [i64];

    fn deref(&self) -> &Self::Target {
        &self.slots
    }
}

impl DerefMut for Backing {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.slots
    }
}
