/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Scheduling Engine.
//!
//! Runs a tick-driven simulation of one CPU serving a [`Process`] collection
//! under one of four dispatch disciplines and fills in every process's
//! `wait_time`.
//!
//! | Algorithm | Waiting structure | Selection | Preemption | `wait_time` |
//! |---|---|---|---|---|
//! | `LCFS` | [`Stack`] | most recently pushed | none | `dispatch - arrive` |
//! | `PreemptiveLCFS` | [`Stack`] | most recently pushed | every tick | `completion - arrive - execution` |
//! | `SJF` | [`MinHeap`] on `execution_time_left` | shortest remaining | none | `dispatch - arrive` |
//! | `PreemptiveSJF` | [`MinHeap`] on `execution_time_left` | shortest remaining | every tick | `completion - arrive - execution` |
//!
//! # Tick loop
//! 1. **Admission** – every not-yet-admitted process with
//!    `arrive_time <= time` is pushed, in input order.
//! 2. **Dispatch** – one process is taken from the waiting structure and
//!    either served for one tick (preemptive, re-pushed if unfinished) or
//!    run to completion (non-preemptive).
//! 3. **Idle** – nothing waiting but arrivals pending: `time += 1`.
//!
//! The loop ends once all processes are admitted and nothing waits.
//!
//! # Design decisions
//!
//! | Topic | Decision |
//! |---|---|
//! | Caller's input | Borrowed; every run clones it, so runs never alias |
//! | Heap ties | Equal remaining time is broken by ascending id |
//! | Clock width | `u16`, overflow is [`SimError::ClockOverflow`] |
//! | Observability | Per-tick timeline (`None` = idle) returned with the processes |
//!
//! # Example
//! ```rust
//! use ossim::process::Process;
//! use ossim::scheduler::{schedule, Algorithm};
//!
//! let input = vec![
//!     Process::new(0, 0, 3),
//!     Process::new(1, 0, 1),
//!     Process::new(2, 0, 2),
//! ];
//! let done = schedule(Algorithm::Sjf, &input).unwrap();
//! let waits: Vec<u16> = done.iter().map(|p| p.wait_time).collect();
//! assert_eq!(waits, vec![3, 0, 1]);
//! ```

#[cfg(test)]
mod proptests;

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info, trace};

use crate::error::SimError;
use crate::process::{by_remaining_time, check_schedulable, Process};
use crate::structures::{MinHeap, Stack};

// ── Algorithm selection ───────────────────────────────────────────────────────

/// The four dispatch disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Last-come-first-served, run to completion.
    Lcfs,
    /// Last-come-first-served, one tick at a time.
    PreemptiveLcfs,
    /// Shortest-job-first, run to completion.
    Sjf,
    /// Shortest-remaining-time-first, one tick at a time.
    PreemptiveSjf,
}

impl Algorithm {
    /// Every algorithm, in the order results are reported.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Lcfs,
        Algorithm::PreemptiveLcfs,
        Algorithm::Sjf,
        Algorithm::PreemptiveSjf,
    ];

    /// Name used in logs and output directory names.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Lcfs => "LCFS",
            Algorithm::PreemptiveLcfs => "PreemptiveLCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::PreemptiveSjf => "PreemptiveSJF",
        }
    }

    pub fn is_preemptive(self) -> bool {
        matches!(self, Algorithm::PreemptiveLcfs | Algorithm::PreemptiveSjf)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SimError;

    /// Case-insensitive match on [`Algorithm::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SimError::UnknownAlgorithm(s.to_string()))
    }
}

// ── Result type ───────────────────────────────────────────────────────────────

/// Outcome of one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub algorithm: Algorithm,

    /// The input processes, in input order, with `wait_time` filled in and
    /// `execution_time_left == 0`.
    pub processes: Vec<Process>,

    /// Process id served at each tick; `None` marks an idle tick.
    pub timeline: Vec<Option<u16>>,
}

impl Schedule {
    /// Ticks on which some process was running.
    pub fn busy_ticks(&self) -> usize {
        self.timeline.iter().filter(|t| t.is_some()).count()
    }

    /// Tick at which the last process finished.
    pub fn makespan(&self) -> usize {
        self.timeline.len()
    }

    /// Process ids in the order they received the CPU, with consecutive
    /// ticks of the same process collapsed.
    pub fn dispatch_order(&self) -> Vec<u16> {
        let mut order: Vec<u16> = Vec::new();
        for id in self.timeline.iter().flatten() {
            if order.last() != Some(id) {
                order.push(*id);
            }
        }
        order
    }

    pub fn average_wait(&self) -> f64 {
        if self.processes.is_empty() {
            return 0.0;
        }
        let total: u64 = self.processes.iter().map(|p| u64::from(p.wait_time)).sum();
        total as f64 / self.processes.len() as f64
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Schedule an independent copy of `processes` and return the finished
/// processes.
///
/// # Errors
/// * [`SimError::EmptyInput`], [`SimError::UnsortedInput`],
///   [`SimError::ZeroExecutionTime`] or [`SimError::PartiallyExecuted`]
///   when the input breaks the precondition.
/// * [`SimError::ClockOverflow`] when the run needs more than `u16::MAX` ticks.
pub fn schedule(algorithm: Algorithm, processes: &[Process]) -> Result<Vec<Process>, SimError> {
    schedule_with_timeline(algorithm, processes).map(|s| s.processes)
}

/// Like [`schedule`], but also returns the per-tick timeline.
pub fn schedule_with_timeline(
    algorithm: Algorithm,
    processes: &[Process],
) -> Result<Schedule, SimError> {
    check_schedulable(processes)?;

    let mut procs = processes.to_vec();

    info!(
        algorithm = %algorithm,
        process_count = procs.len(),
        "=== scheduling run ==="
    );

    let timeline = match algorithm {
        Algorithm::Lcfs => run(Stack::with_capacity(procs.len())?, &mut procs, false)?,
        Algorithm::PreemptiveLcfs => run(Stack::with_capacity(procs.len())?, &mut procs, true)?,
        Algorithm::Sjf => run(MinHeap::with_capacity(procs.len())?, &mut procs, false)?,
        Algorithm::PreemptiveSjf => run(MinHeap::with_capacity(procs.len())?, &mut procs, true)?,
    };

    let result = Schedule {
        algorithm,
        processes: procs,
        timeline,
    };

    info!(
        algorithm = %algorithm,
        makespan = result.makespan(),
        busy_ticks = result.busy_ticks(),
        average_wait = result.average_wait(),
        "=== scheduling complete ==="
    );

    Ok(result)
}

/// Run every algorithm in `algorithms` on its own copy of `processes`.
///
/// Results are returned in the order of `algorithms`.
///
/// # Errors
/// [`SimError::NoAlgorithms`] for an empty list, otherwise the first error
/// any run returns.
pub fn simulate(
    processes: &[Process],
    algorithms: &[Algorithm],
) -> Result<Vec<Schedule>, SimError> {
    if algorithms.is_empty() {
        return Err(SimError::NoAlgorithms);
    }
    algorithms
        .iter()
        .map(|&alg| schedule_with_timeline(alg, processes))
        .collect()
}

// ── Waiting structures ────────────────────────────────────────────────────────

/// What the tick loop needs from a waiting structure.
///
/// Handles are positions in the working process vector.
trait ReadyQueue {
    fn admit(&mut self, idx: usize, procs: &[Process]);
    fn take(&mut self, procs: &[Process]) -> Result<usize, SimError>;
    fn is_empty(&self) -> bool;
}

impl ReadyQueue for Stack<usize> {
    fn admit(&mut self, idx: usize, _procs: &[Process]) {
        self.push(idx);
    }

    fn take(&mut self, _procs: &[Process]) -> Result<usize, SimError> {
        self.pop()
    }

    fn is_empty(&self) -> bool {
        Stack::is_empty(self)
    }
}

impl ReadyQueue for MinHeap<usize> {
    fn admit(&mut self, idx: usize, procs: &[Process]) {
        self.push(idx, |a, b| by_remaining_time(&procs[*a], &procs[*b]));
    }

    fn take(&mut self, procs: &[Process]) -> Result<usize, SimError> {
        self.pop(|a, b| by_remaining_time(&procs[*a], &procs[*b]))
    }

    fn is_empty(&self) -> bool {
        MinHeap::is_empty(self)
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

fn tick(time: u16) -> Result<u16, SimError> {
    time.checked_add(1).ok_or(SimError::ClockOverflow)
}

/// Shared tick loop of all four disciplines.
///
/// `procs` must already be sorted by `arrive_time`.
fn run<Q: ReadyQueue>(
    mut ready: Q,
    procs: &mut [Process],
    preemptive: bool,
) -> Result<Vec<Option<u16>>, SimError> {
    let mut time: u16 = 0;
    let mut admitted = 0usize;
    let mut timeline: Vec<Option<u16>> = Vec::new();

    while admitted < procs.len() || !ready.is_empty() {
        // ── Admission ─────────────────────────────────────────────────────────
        while admitted < procs.len() && procs[admitted].arrive_time <= time {
            trace!(id = procs[admitted].id, time, "admitted");
            ready.admit(admitted, procs);
            admitted += 1;
        }

        // ── Idle ──────────────────────────────────────────────────────────────
        if ready.is_empty() {
            timeline.push(None);
            time = tick(time)?;
            continue;
        }

        // ── Dispatch ──────────────────────────────────────────────────────────
        let idx = ready.take(procs)?;

        if preemptive {
            let p = &mut procs[idx];
            p.execution_time_left -= 1;
            timeline.push(Some(p.id));
            time = tick(time)?;

            if p.is_finished() {
                p.wait_time = time - p.arrive_time - p.execution_time;
                debug!(id = p.id, time, wait_time = p.wait_time, "finished");
            } else {
                ready.admit(idx, procs);
            }
        } else {
            let p = &mut procs[idx];
            // waiting ends when the burst starts
            p.wait_time = time - p.arrive_time;
            debug!(id = p.id, time, wait_time = p.wait_time, "dispatched");
            while p.execution_time_left > 0 {
                timeline.push(Some(p.id));
                time = tick(time)?;
                p.execution_time_left -= 1;
            }
        }
    }

    Ok(timeline)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
