// SPDX-License-Identifier: MPL-2.0
//! Bounded ring buffer backing the diagnostics collector.

use crate::config::{
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, MAX_DIAGNOSTICS_BUFFER_CAPACITY,
    MIN_DIAGNOSTICS_BUFFER_CAPACITY,
};
use std::collections::VecDeque;

/// Number of events the collector keeps, always within
/// `MIN_DIAGNOSTICS_BUFFER_CAPACITY..=MAX_DIAGNOSTICS_BUFFER_CAPACITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a capacity, clamping out-of-range values.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(
            MIN_DIAGNOSTICS_BUFFER_CAPACITY,
            MAX_DIAGNOSTICS_BUFFER_CAPACITY,
        ))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}

impl From<Option<usize>> for BufferCapacity {
    fn from(value: Option<usize>) -> Self {
        value.map_or_else(Self::default, Self::new)
    }
}

/// A ring buffer with fixed capacity. Pushing into a full buffer evicts the
/// oldest element; iteration is oldest first.
///
/// # Example
///
/// ```
/// use iced_folio::diagnostics::CircularBuffer;
///
/// let mut buffer: CircularBuffer<i32> = CircularBuffer::with_raw_capacity(2);
/// buffer.push(1);
/// buffer.push(2);
/// buffer.push(3);
///
/// let items: Vec<_> = buffer.iter().copied().collect();
/// assert_eq!(items, vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a buffer with an unchecked capacity (at least 1). Meant for tests.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_clamps_to_bounds() {
        assert_eq!(
            BufferCapacity::new(0).value(),
            MIN_DIAGNOSTICS_BUFFER_CAPACITY
        );
        assert_eq!(
            BufferCapacity::new(1_000_000).value(),
            MAX_DIAGNOSTICS_BUFFER_CAPACITY
        );
        assert_eq!(BufferCapacity::new(500).value(), 500);
    }

    #[test]
    fn capacity_from_config_value() {
        assert_eq!(BufferCapacity::from(None), BufferCapacity::default());
        assert_eq!(BufferCapacity::from(Some(250)).value(), 250);
    }

    #[test]
    fn overflow_evicts_oldest() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::with_raw_capacity(3);
        for value in 1..=5 {
            buffer.push(value);
        }

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![3, 4, 5]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn zero_raw_capacity_keeps_one_element() {
        let mut buffer: CircularBuffer<&str> = CircularBuffer::with_raw_capacity(0);
        assert_eq!(buffer.capacity(), 1);
        buffer.push("a");
        buffer.push("b");
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn new_uses_buffer_capacity() {
        let buffer: CircularBuffer<i32> = CircularBuffer::new(BufferCapacity::new(500));
        assert_eq!(buffer.capacity(), 500);
        assert!(buffer.is_empty());
    }
}
