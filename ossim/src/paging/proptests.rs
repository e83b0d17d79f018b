/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::collections::BTreeSet;

use proptest::prelude::*;

use super::*;

fn pattern() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(0u16..40, 1..400)
}

proptest! {
    /// Residency never exceeds the frame count, and every distinct id has
    /// exactly one record.
    #[test]
    fn prop_resident_set_is_bounded(refs in pattern()) {
        let distinct: BTreeSet<u16> = refs.iter().copied().collect();
        for policy in Policy::ALL {
            let pages = evict(policy, &refs).unwrap();
            prop_assert_eq!(pages.len(), distinct.len());
            for tick in 0..refs.len() as u16 {
                let resident = pages.iter().filter(|p| p.resident_after(tick)).count();
                prop_assert!(resident <= FRAME_COUNT);
            }
        }
    }

    /// Each reference is either a hit or a fault, and every fault is
    /// logged on exactly one page at the tick of the reference.
    #[test]
    fn prop_fault_history_matches_counts(refs in pattern()) {
        for policy in Policy::ALL {
            let run = evict_with_frames(policy, &refs, FRAME_COUNT).unwrap();
            prop_assert_eq!(run.hits + run.faults, refs.len());

            let logged: usize = run.pages.iter().map(Page::fault_count).sum();
            prop_assert_eq!(logged, run.faults);
            let evicted: usize = run.pages.iter().map(Page::eviction_count).sum();
            prop_assert_eq!(evicted, run.evictions);

            for p in &run.pages {
                for &t in &p.page_fault_at {
                    prop_assert_eq!(refs[usize::from(t)], p.id);
                }
            }
        }
    }

    /// A page referenced on every other tick always out-counts the pages
    /// sharing the remaining ticks, so LFU never evicts it.
    #[test]
    fn prop_lfu_keeps_page_used_every_other_tick(cold in prop::collection::vec(1u16..200, 1..200)) {
        let refs: Vec<u16> = cold.iter().flat_map(|&c| [0, c]).collect();
        let pages = evict(Policy::LFU, &refs).unwrap();
        let hot = pages.iter().find(|p| p.id == 0).unwrap();
        prop_assert!(hot.swapped_out_at.is_empty());
    }

    /// Replaying the same pattern twice gives identical output.
    #[test]
    fn prop_runs_are_idempotent(refs in pattern()) {
        let copy = refs.clone();
        for policy in Policy::ALL {
            prop_assert_eq!(evict(policy, &refs).unwrap(), evict(policy, &copy).unwrap());
        }
    }
}
