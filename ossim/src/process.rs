/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Process entity for the Scheduling Engine.
//!
//! ```text
//! workload::generate_processes ──► Vec<Process> ──(scheduler, deep copy)──► Vec<Process>
//!                                   ↑ sorted by arrive_time              ↑ wait_time filled,
//!                                                                         execution_time_left == 0
//! ```
//!
//! # Ownership model
//! The caller keeps its `&[Process]`.  Every scheduling run clones the slice
//! into a `Vec<Process>` it owns, so runs over the same workload never alias
//! mutable state and can be executed on separate threads.

use std::cmp::Ordering;

use crate::error::SimError;
use crate::record::{FieldValue, Fields};

/// One schedulable job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Process {
    pub id: u16,

    /// Tick at which the process becomes eligible for admission.
    pub arrive_time: u16,

    /// Total CPU burst in ticks.  Always `>= 1`.
    pub execution_time: u16,

    /// Ticks of burst still owed.  Starts at `execution_time`, never grows,
    /// and is `0` once the process has finished.
    pub execution_time_left: u16,

    /// Ticks spent admitted but not running.  Final once
    /// `execution_time_left == 0`.
    pub wait_time: u16,
}

impl Process {
    /// A fresh, not yet scheduled process.
    pub fn new(id: u16, arrive_time: u16, execution_time: u16) -> Self {
        Self {
            id,
            arrive_time,
            execution_time,
            execution_time_left: execution_time,
            wait_time: 0,
        }
    }

    /// Returns `true` once the full burst has been served.
    pub fn is_finished(&self) -> bool {
        self.execution_time_left == 0
    }

    /// Tick at which the process completed: arrival + wait + burst.
    ///
    /// Only meaningful for finished processes.
    pub fn completion_time(&self) -> u32 {
        u32::from(self.arrive_time) + u32::from(self.wait_time) + u32::from(self.execution_time)
    }
}

impl Fields for Process {
    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("id", FieldValue::Scalar(self.id)),
            ("arriveTime", FieldValue::Scalar(self.arrive_time)),
            ("executionTime", FieldValue::Scalar(self.execution_time)),
            (
                "executionTimeLeft",
                FieldValue::Scalar(self.execution_time_left),
            ),
            ("waitTime", FieldValue::Scalar(self.wait_time)),
        ]
    }
}

/// Checks the scheduling precondition: non-empty and sorted by `arrive_time`.
///
/// # Errors
/// * [`SimError::EmptyInput`] for an empty slice.
/// * [`SimError::UnsortedInput`] naming the first out-of-order position.
pub fn check_sorted(processes: &[Process]) -> Result<(), SimError> {
    if processes.is_empty() {
        return Err(SimError::EmptyInput);
    }
    match processes
        .windows(2)
        .position(|w| w[0].arrive_time > w[1].arrive_time)
    {
        Some(i) => Err(SimError::UnsortedInput { index: i + 1 }),
        None => Ok(()),
    }
}

/// Everything a scheduling run requires of its input: [`check_sorted`], plus
/// every process fresh (`execution_time_left == execution_time`) with a
/// burst of at least one tick.
///
/// # Errors
/// As [`check_sorted`], then [`SimError::ZeroExecutionTime`] or
/// [`SimError::PartiallyExecuted`] for the first offending process.
pub fn check_schedulable(processes: &[Process]) -> Result<(), SimError> {
    check_sorted(processes)?;
    for p in processes {
        if p.execution_time == 0 {
            return Err(SimError::ZeroExecutionTime);
        }
        if p.execution_time_left != p.execution_time {
            return Err(SimError::PartiallyExecuted {
                id: p.id,
                left: p.execution_time_left,
                total: p.execution_time,
            });
        }
    }
    Ok(())
}

/// Shortest-remaining-time order with the id as a deterministic tie-break.
pub(crate) fn by_remaining_time(a: &Process, b: &Process) -> Ordering {
    a.execution_time_left
        .cmp(&b.execution_time_left)
        .then(a.id.cmp(&b.id))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_process_owes_its_full_burst() {
        let p = Process::new(7, 3, 5);
        assert_eq!(p.execution_time_left, 5);
        assert_eq!(p.wait_time, 0);
        assert!(!p.is_finished());
    }

    #[test]
    fn completion_time_adds_wait_and_burst() {
        let p = Process {
            execution_time_left: 0,
            wait_time: 4,
            ..Process::new(0, 10, 3)
        };
        assert!(p.is_finished());
        assert_eq!(p.completion_time(), 17);
    }

    #[test]
    fn check_sorted_rejects_empty_input() {
        assert_eq!(check_sorted(&[]), Err(SimError::EmptyInput));
    }

    #[test]
    fn check_sorted_reports_first_out_of_order_index() {
        let procs = [
            Process::new(0, 0, 1),
            Process::new(1, 5, 1),
            Process::new(2, 2, 1),
        ];
        assert_eq!(
            check_sorted(&procs),
            Err(SimError::UnsortedInput { index: 2 })
        );
    }

    #[test]
    fn check_sorted_accepts_equal_arrivals() {
        let procs = [Process::new(0, 1, 1), Process::new(1, 1, 2)];
        assert!(check_sorted(&procs).is_ok());
    }

    #[test]
    fn check_schedulable_rejects_zero_burst() {
        let procs = [Process::new(0, 0, 2), Process::new(1, 0, 0)];
        assert_eq!(check_schedulable(&procs), Err(SimError::ZeroExecutionTime));
    }

    #[test]
    fn check_schedulable_rejects_partly_served_process() {
        let procs = [Process {
            execution_time_left: 1,
            ..Process::new(4, 0, 3)
        }];
        assert_eq!(
            check_schedulable(&procs),
            Err(SimError::PartiallyExecuted {
                id: 4,
                left: 1,
                total: 3
            })
        );
    }

    #[test]
    fn check_schedulable_checks_order_first() {
        let procs = [Process::new(0, 3, 0), Process::new(1, 1, 1)];
        assert_eq!(
            check_schedulable(&procs),
            Err(SimError::UnsortedInput { index: 1 })
        );
        assert!(check_schedulable(&[Process::new(0, 0, 1)]).is_ok());
    }

    #[test]
    fn remaining_time_order_breaks_ties_by_id() {
        let a = Process::new(3, 0, 2);
        let b = Process::new(1, 0, 2);
        let c = Process::new(0, 0, 5);
        assert_eq!(by_remaining_time(&b, &a), Ordering::Less);
        assert_eq!(by_remaining_time(&a, &c), Ordering::Less);
    }

    #[test]
    fn field_table_is_in_declaration_order() {
        let names: Vec<_> = Process::new(0, 0, 1)
            .fields()
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(
            names,
            [
                "id",
                "arriveTime",
                "executionTime",
                "executionTimeLeft",
                "waitTime"
            ]
        );
    }
}
