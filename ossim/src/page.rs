/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Page entity for the Paging Engine.

use std::cmp::Ordering;

use crate::record::{FieldValue, Fields};

/// One virtual page and its residency history.
///
/// Tick indices are positions in the reference pattern.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    pub id: u16,

    /// Usage counter.  Windowed policies reset it on every swap-in and
    /// eviction; the persistent LFU variant never resets it.
    pub times_used: u16,

    /// Every tick at which the page was brought into a frame.
    pub page_fault_at: Vec<u16>,

    /// Every tick at which the page was evicted.
    pub swapped_out_at: Vec<u16>,
}

impl Page {
    /// A never-referenced page; `history` pre-sizes both tick vectors.
    pub fn new(id: u16, history: usize) -> Self {
        Self {
            id,
            times_used: 0,
            page_fault_at: Vec::with_capacity(history),
            swapped_out_at: Vec::with_capacity(history),
        }
    }

    pub fn fault_count(&self) -> usize {
        self.page_fault_at.len()
    }

    pub fn eviction_count(&self) -> usize {
        self.swapped_out_at.len()
    }

    /// Whether the page occupied a frame right after tick `tick` was served.
    #[cfg(test)]
    pub(crate) fn resident_after(&self, tick: u16) -> bool {
        let faults = self.page_fault_at.iter().filter(|&&t| t <= tick).count();
        let evictions = self.swapped_out_at.iter().filter(|&&t| t <= tick).count();
        faults > evictions
    }
}

impl Fields for Page {
    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("id", FieldValue::Scalar(self.id)),
            ("timesUsed", FieldValue::Scalar(self.times_used)),
            ("pageFaultAt", FieldValue::Series(self.page_fault_at.clone())),
            (
                "swappedOutAt",
                FieldValue::Series(self.swapped_out_at.clone()),
            ),
        ]
    }
}

/// Least-used order with the id as a deterministic tie-break.
pub(crate) fn by_times_used(a: &Page, b: &Page) -> Ordering {
    a.times_used.cmp(&b.times_used).then(a.id.cmp(&b.id))
}
