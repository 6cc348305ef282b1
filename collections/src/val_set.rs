use crate::error::SetError;
use crate::params::INITIAL_CAPACITY;
use itertools::Itertools;
use std::fmt::{Debug, Display, Formatter};

/// A set of values that only requires an equality comparison on its elements.
///
/// Elements are stored contiguously, in insertion order, in a buffer exclusively owned by the set.
/// Membership is tested with a linear scan, which makes it a good fit for small sets or for
/// element types that cannot be hashed or ordered.
///
/// ```
/// use valset::ValSet;
/// let mut set = ValSet::new();
/// assert!(set.add("a"));
/// assert!(!set.add("a"));
/// assert!(set.contains(&"a"));
/// assert_eq!(set.len(), 1);
/// ```
pub struct ValSet<T> {
    /// Live elements of the set. The buffer's capacity is the capacity of the set.
    items: Vec<T>,
}

impl<T> ValSet<T> {
    /// Creates an empty set with room for 10 elements, or for the number given by the
    /// `VALSET_INITIAL_CAPACITY` parameter when it is set to a value in `10..=65536`.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY.get())
    }

    /// Creates an empty set that can hold at least `capacity` elements before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        ValSet {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub(crate) fn items(&self) -> &[T] {
        &self.items
    }

    /// Removes all elements, keeping the allocated buffer.
    pub fn clear(&mut self) {
        self.items.clear()
    }

    /// Consumes the set and returns its elements in storage order.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Returns a copy of all elements in storage order, i.e., insertion order with the gaps
    /// left by removals closed.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Number of additional slots requested when the buffer is full.
    fn growth_step(&self) -> usize {
        self.items.capacity().max(1)
    }

    fn grow(&mut self) {
        let previous = self.items.capacity();
        self.items.reserve_exact(self.growth_step());
        tracing::trace!(from = previous, to = self.items.capacity(), "grew set buffer");
    }

    /// Requests `step` additional slots, leaving the set untouched on failure.
    fn try_grow_by(&mut self, step: usize) -> Result<(), SetError> {
        let previous = self.items.capacity();
        self.items
            .try_reserve_exact(step)
            .map_err(|source| SetError::Allocation {
                requested: previous.saturating_add(step),
                source,
            })?;
        tracing::trace!(from = previous, to = self.items.capacity(), "grew set buffer");
        Ok(())
    }

    fn is_full(&self) -> bool {
        self.items.len() == self.items.capacity()
    }
}

impl<T: PartialEq> ValSet<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.items.iter().any(|v| v == value)
    }

    /// Adds the value to the set if no equal value is already present.
    /// Returns true if the set was modified.
    ///
    /// When the buffer is full, its capacity is doubled before inserting.
    pub fn add(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        if self.is_full() {
            self.grow();
        }
        self.items.push(value);
        true
    }

    /// Same as [`ValSet::add`] but reports a failure to grow the buffer instead of aborting.
    /// On error, the set is left unchanged and the value is dropped.
    pub fn try_add(&mut self, value: T) -> Result<bool, SetError> {
        let step = self.growth_step();
        self.try_add_growing_by(value, step)
    }

    fn try_add_growing_by(&mut self, value: T, step: usize) -> Result<bool, SetError> {
        if self.contains(&value) {
            return Ok(false);
        }
        if self.is_full() {
            self.try_grow_by(step)?;
        }
        self.items.push(value);
        Ok(true)
    }

    /// Removes the value from the set, shifting all subsequent elements to close the gap.
    /// Returns true if the value was present.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.items.iter().position(|v| v == value) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }
}

impl<T> Default for ValSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ValSet<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.items.capacity());
        items.extend_from_slice(&self.items);
        ValSet { items }
    }

    /// Overwrites this set with a copy of `source`, reusing the current buffer when possible.
    fn clone_from(&mut self, source: &Self) {
        self.items.clone_from(&source.items);
        if self.items.capacity() < source.items.capacity() {
            self.items.reserve_exact(source.items.capacity() - self.items.len());
        }
    }
}

impl<T: PartialEq> PartialEq for ValSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.items.iter().all(|v| other.contains(v))
    }
}

impl<T: Eq> Eq for ValSet<T> {}

impl<T: PartialEq> Extend<T> for ValSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.add(v);
        }
    }
}

impl<T: PartialEq> FromIterator<T> for ValSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = ValSet::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for ValSet<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Debug> Debug for ValSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: Display> Display for ValSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.items.iter().format(", "))
    }
}
