/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use crate::error::SimError;

const NAME: &str = "queue";

/// Strict FIFO queue over a fixed-capacity ring buffer.
///
/// `head` is the slot of the oldest item; the next free slot is
/// `(head + len) % capacity`.  Pushing into a full ring is a
/// [`SimError::CapacityExceeded`] rather than a silent overwrite.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> Queue<T> {
    /// Creates an empty queue holding at most `capacity` items.
    ///
    /// # Errors
    /// [`SimError::ZeroCapacity`] when `capacity == 0`.
    pub fn with_capacity(capacity: usize) -> Result<Self, SimError> {
        if capacity == 0 {
            return Err(SimError::ZeroCapacity { structure: NAME });
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Ok(Self {
            slots,
            head: 0,
            len: 0,
        })
    }

    pub fn push(&mut self, item: T) -> Result<(), SimError> {
        let capacity = self.capacity();
        if self.len == capacity {
            return Err(SimError::CapacityExceeded {
                structure: NAME,
                capacity,
            });
        }
        let tail = (self.head + self.len) % capacity;
        self.slots[tail] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the oldest item.
    pub fn pop(&mut self) -> Result<T, SimError> {
        if self.len == 0 {
            return Err(SimError::EmptyStructure { structure: NAME });
        }
        let item = self.slots[self.head]
            .take()
            .ok_or(SimError::EmptyStructure { structure: NAME })?;
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        Ok(item)
    }

    /// Returns the oldest item without removing it.
    pub fn front(&self) -> Result<&T, SimError> {
        if self.len == 0 {
            return Err(SimError::EmptyStructure { structure: NAME });
        }
        self.slots[self.head]
            .as_ref()
            .ok_or(SimError::EmptyStructure { structure: NAME })
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(Queue::<u16>::with_capacity(0).is_err());
    }

    #[test]
    fn pops_in_push_order() {
        let mut q = Queue::with_capacity(3).unwrap();
        q.push(10).unwrap();
        q.push(20).unwrap();
        assert_eq!(*q.front().unwrap(), 10);
        assert_eq!(q.pop().unwrap(), 10);
        assert_eq!(q.pop().unwrap(), 20);
        assert!(q.is_empty());
    }

    #[test]
    fn wraps_around_the_ring() {
        let mut q = Queue::with_capacity(2).unwrap();
        for round in 0..5u16 {
            q.push(round).unwrap();
            q.push(round + 100).unwrap();
            assert_eq!(q.len(), 2);
            assert_eq!(q.pop().unwrap(), round);
            assert_eq!(q.pop().unwrap(), round + 100);
        }
    }

    #[test]
    fn full_queue_rejects_push() {
        let mut q = Queue::with_capacity(1).unwrap();
        q.push(1).unwrap();
        assert_eq!(
            q.push(2).unwrap_err(),
            SimError::CapacityExceeded {
                structure: "queue",
                capacity: 1
            }
        );
        // the rejected push left the queue untouched
        assert_eq!(q.pop().unwrap(), 1);
    }

    #[test]
    fn empty_queue_reads_are_invariant_violations() {
        let mut q = Queue::<u8>::with_capacity(4).unwrap();
        assert!(q.front().is_err());
        assert_eq!(
            q.pop().unwrap_err(),
            SimError::EmptyStructure { structure: "queue" }
        );
    }
}
