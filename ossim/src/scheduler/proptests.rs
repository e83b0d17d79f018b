/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use proptest::prelude::*;

use super::*;

/// Random workloads: up to 40 processes, arrivals in `0..60`, bursts in
/// `1..=12`, sorted by arrival with ids in sorted order.
fn workload() -> impl Strategy<Value = Vec<Process>> {
    prop::collection::vec((0u16..60, 1u16..=12), 1..40).prop_map(|mut pairs| {
        pairs.sort_by_key(|&(arrive, _)| arrive);
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (arrive, exec))| Process::new(i as u16, arrive, exec))
            .collect()
    })
}

proptest! {
    /// Every process finishes and no wait is negative (u16 subtraction
    /// would have panicked).
    #[test]
    fn prop_all_processes_finish(input in workload()) {
        for alg in Algorithm::ALL {
            let done = schedule(alg, &input).unwrap();
            prop_assert_eq!(done.len(), input.len());
            prop_assert!(done.iter().all(|p| p.execution_time_left == 0));
        }
    }

    /// Busy ticks equal the total burst demand.
    #[test]
    fn prop_busy_ticks_match_total_burst(input in workload()) {
        let total: usize = input.iter().map(|p| usize::from(p.execution_time)).sum();
        for alg in Algorithm::ALL {
            let s = schedule_with_timeline(alg, &input).unwrap();
            prop_assert_eq!(s.busy_ticks(), total);
            for p in &input {
                let served = s.timeline.iter().filter(|t| **t == Some(p.id)).count();
                prop_assert_eq!(served, usize::from(p.execution_time));
            }
        }
    }

    /// No process runs before it arrives, and the recorded wait matches the
    /// completion tick in the timeline.
    #[test]
    fn prop_wait_time_matches_timeline(input in workload()) {
        for alg in Algorithm::ALL {
            let s = schedule_with_timeline(alg, &input).unwrap();
            for p in &s.processes {
                let first = s.timeline.iter().position(|t| *t == Some(p.id)).unwrap();
                let last = s.timeline.iter().rposition(|t| *t == Some(p.id)).unwrap();
                prop_assert!(first >= usize::from(p.arrive_time));
                prop_assert_eq!(last as u32 + 1, p.completion_time());
            }
        }
    }

    /// Two runs over identical input give identical output.
    #[test]
    fn prop_runs_are_idempotent(input in workload()) {
        let copy = input.clone();
        for alg in Algorithm::ALL {
            prop_assert_eq!(
                schedule_with_timeline(alg, &input).unwrap(),
                schedule_with_timeline(alg, &copy).unwrap()
            );
        }
    }
}
