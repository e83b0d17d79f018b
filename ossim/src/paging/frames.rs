/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Resident/swapped partition of every page a reference pattern touches.
//!
//! Each page lives in exactly one of the two maps.  A fault moves it
//! swapped → resident, an eviction moves it back; nothing else changes
//! membership, so `resident.len() + swapped.len()` is constant.

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::error::SimError;
use crate::page::Page;

#[derive(Debug, Clone)]
pub struct FrameSet {
    capacity: usize,

    /// Reset `times_used` on every swap-in and eviction.
    reset_usage: bool,

    resident: BTreeMap<u16, Page>,
    swapped: BTreeMap<u16, Page>,
}

impl FrameSet {
    /// Builds a frame set with all of `ids` swapped out.
    ///
    /// `history` pre-sizes each page's tick vectors (the pattern length is a
    /// safe upper bound).
    ///
    /// # Errors
    /// [`SimError::ZeroCapacity`] when `capacity == 0`.
    pub fn new(
        capacity: usize,
        ids: &BTreeSet<u16>,
        history: usize,
        reset_usage: bool,
    ) -> Result<Self, SimError> {
        if capacity == 0 {
            return Err(SimError::ZeroCapacity {
                structure: "frame set",
            });
        }
        let swapped = ids.iter().map(|&id| (id, Page::new(id, history))).collect();
        Ok(Self {
            capacity,
            reset_usage,
            resident: BTreeMap::new(),
            swapped,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_resident(&self, id: u16) -> bool {
        self.resident.contains_key(&id)
    }

    pub fn is_full(&self) -> bool {
        self.resident.len() >= self.capacity
    }

    pub fn resident_len(&self) -> usize {
        self.resident.len()
    }

    pub fn swapped_len(&self) -> usize {
        self.swapped.len()
    }

    /// Resident pages by id.
    pub fn resident(&self) -> &BTreeMap<u16, Page> {
        &self.resident
    }

    /// Records one reference to a resident page.
    pub fn touch(&mut self, id: u16) -> Result<(), SimError> {
        let page = self
            .resident
            .get_mut(&id)
            .ok_or(SimError::PageNotResident { id })?;
        page.times_used = page.times_used.saturating_add(1);
        Ok(())
    }

    /// Moves `id` swapped → resident and logs the fault at `tick`.
    ///
    /// # Errors
    /// * [`SimError::FrameOverflow`] if every frame is already taken.
    /// * [`SimError::PageNotSwapped`] if `id` is not in the swapped set.
    pub fn swap_in(&mut self, id: u16, tick: u16) -> Result<(), SimError> {
        if self.is_full() {
            return Err(SimError::FrameOverflow {
                resident: self.resident.len() + 1,
                capacity: self.capacity,
            });
        }
        let mut page = self
            .swapped
            .remove(&id)
            .ok_or(SimError::PageNotSwapped { id })?;
        page.page_fault_at.push(tick);
        if self.reset_usage {
            page.times_used = 0;
        }
        trace!(id, tick, "swapped in");
        self.resident.insert(id, page);
        Ok(())
    }

    /// Moves `id` resident → swapped and logs the eviction at `tick`.
    ///
    /// # Errors
    /// [`SimError::PageNotResident`] if `id` is not resident.
    pub fn swap_out(&mut self, id: u16, tick: u16) -> Result<(), SimError> {
        let mut page = self
            .resident
            .remove(&id)
            .ok_or(SimError::PageNotResident { id })?;
        page.swapped_out_at.push(tick);
        if self.reset_usage {
            page.times_used = 0;
        }
        trace!(id, tick, "swapped out");
        self.swapped.insert(id, page);
        Ok(())
    }

    /// Consumes the set and returns every page ordered by id.
    pub fn into_pages(self) -> Vec<Page> {
        let mut all: BTreeMap<u16, Page> = self.swapped;
        all.extend(self.resident);
        all.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[u16]) -> BTreeSet<u16> {
        list.iter().copied().collect()
    }

    #[test]
    fn starts_with_everything_swapped() {
        let frames = FrameSet::new(2, &ids(&[3, 1, 2]), 4, true).unwrap();
        assert_eq!(frames.resident_len(), 0);
        assert_eq!(frames.swapped_len(), 3);
        assert!(!frames.is_full());
    }

    #[test]
    fn swap_in_and_out_transfer_membership() {
        let mut frames = FrameSet::new(2, &ids(&[1, 2]), 4, true).unwrap();
        frames.swap_in(1, 0).unwrap();
        assert!(frames.is_resident(1));
        assert_eq!(frames.resident_len() + frames.swapped_len(), 2);

        frames.swap_out(1, 5).unwrap();
        assert!(!frames.is_resident(1));

        let pages = frames.into_pages();
        assert_eq!(pages[0].page_fault_at, vec![0]);
        assert_eq!(pages[0].swapped_out_at, vec![5]);
    }

    #[test]
    fn swap_in_past_capacity_is_rejected() {
        let mut frames = FrameSet::new(1, &ids(&[1, 2]), 2, true).unwrap();
        frames.swap_in(1, 0).unwrap();
        assert_eq!(
            frames.swap_in(2, 1).unwrap_err(),
            SimError::FrameOverflow {
                resident: 2,
                capacity: 1
            }
        );
    }

    #[test]
    fn misplaced_pages_are_invariant_violations() {
        let mut frames = FrameSet::new(2, &ids(&[1]), 2, true).unwrap();
        assert_eq!(
            frames.swap_out(1, 0).unwrap_err(),
            SimError::PageNotResident { id: 1 }
        );
        assert_eq!(
            frames.swap_in(9, 0).unwrap_err(),
            SimError::PageNotSwapped { id: 9 }
        );
        assert!(frames.touch(1).is_err());
    }

    #[test]
    fn usage_reset_depends_on_mode() {
        for (reset, expected) in [(true, 0), (false, 2)] {
            let mut frames = FrameSet::new(1, &ids(&[7]), 2, reset).unwrap();
            frames.swap_in(7, 0).unwrap();
            frames.touch(7).unwrap();
            frames.touch(7).unwrap();
            frames.swap_out(7, 1).unwrap();
            assert_eq!(frames.into_pages()[0].times_used, expected);
        }
    }

    #[test]
    fn into_pages_is_sorted_by_id() {
        let mut frames = FrameSet::new(2, &ids(&[5, 1, 3]), 1, true).unwrap();
        frames.swap_in(3, 0).unwrap();
        let got: Vec<u16> = frames.into_pages().iter().map(|p| p.id).collect();
        assert_eq!(got, vec![1, 3, 5]);
    }
}
