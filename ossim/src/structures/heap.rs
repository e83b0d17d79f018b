/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Binary min-heap over entity handles.
//!
//! The heap stores handles (an index or an id), never the entities
//! themselves, so the engine can keep mutating the entity a handle refers to.
//! Every operation that needs ordering takes the three-way comparator as an
//! argument, the same shape as [`slice::sort_by`]: the comparator usually
//! borrows the entity table, and that borrow must end between heap calls.
//!
//! When a key changes while its handle is inside the heap (an `LFU` hit
//! increments `times_used`), the heap order is stale until
//! [`MinHeap::reheapify`] is called.
//!
//! Ties are resolved by whatever the comparator returns; callers that need
//! reproducible output compare a secondary key (the engines use the id).

use std::cmp::Ordering;

use crate::error::SimError;

const NAME: &str = "heap";

#[derive(Debug, Clone)]
pub struct MinHeap<H> {
    items: Vec<H>,
}

impl<H> MinHeap<H> {
    /// Creates an empty heap with room for `capacity` handles.
    ///
    /// # Errors
    /// [`SimError::ZeroCapacity`] when `capacity == 0`.
    pub fn with_capacity(capacity: usize) -> Result<Self, SimError> {
        if capacity == 0 {
            return Err(SimError::ZeroCapacity { structure: NAME });
        }
        Ok(Self {
            items: Vec::with_capacity(capacity),
        })
    }

    pub fn push<F>(&mut self, handle: H, cmp: F)
    where
        F: Fn(&H, &H) -> Ordering,
    {
        self.items.push(handle);
        let last = self.items.len() - 1;
        self.sift_up(last, &cmp);
    }

    /// Removes and returns the minimum handle under `cmp`.
    pub fn pop<F>(&mut self, cmp: F) -> Result<H, SimError>
    where
        F: Fn(&H, &H) -> Ordering,
    {
        if self.items.is_empty() {
            return Err(SimError::EmptyStructure { structure: NAME });
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self
            .items
            .pop()
            .ok_or(SimError::EmptyStructure { structure: NAME })?;
        if !self.items.is_empty() {
            self.sift_down(0, &cmp);
        }
        Ok(min)
    }

    /// Returns the root handle without removing it.
    ///
    /// Only the minimum if no key changed since the last mutation.
    pub fn peek(&self) -> Result<&H, SimError> {
        self.items
            .first()
            .ok_or(SimError::EmptyStructure { structure: NAME })
    }

    /// Restores heap order after keys changed outside the heap.
    pub fn reheapify<F>(&mut self, cmp: F)
    where
        F: Fn(&H, &H) -> Ordering,
    {
        let n = self.items.len();
        for i in (0..n / 2).rev() {
            self.sift_down(i, &cmp);
        }
    }

    /// Every stored handle, in heap (not sorted) order.
    pub fn handles(&self) -> &[H] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ── Internal sifting ──────────────────────────────────────────────────────

    fn sift_up<F>(&mut self, mut i: usize, cmp: &F)
    where
        F: Fn(&H, &H) -> Ordering,
    {
        while i > 0 {
            let parent = (i - 1) / 2;
            if cmp(&self.items[i], &self.items[parent]) != Ordering::Less {
                break;
            }
            self.items.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down<F>(&mut self, mut i: usize, cmp: &F)
    where
        F: Fn(&H, &H) -> Ordering,
    {
        let n = self.items.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < n && cmp(&self.items[left], &self.items[smallest]) == Ordering::Less {
                smallest = left;
            }
            if right < n && cmp(&self.items[right], &self.items[smallest]) == Ordering::Less {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.items.swap(i, smallest);
            i = smallest;
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
