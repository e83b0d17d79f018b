/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Paging Engine.
//!
//! Replays a page reference pattern against [`FRAME_COUNT`] memory frames and
//! records, for every distinct page, each tick at which it faulted in and
//! each tick at which it was evicted.  The tick of a reference is its
//! position in the pattern.
//!
//! | Policy | Victim | Usage counter |
//! |---|---|---|
//! | `FIFO` | oldest resident ([`Queue`] of ids in residency order) | since last swap-in |
//! | `LFU` | smallest `times_used` ([`MinHeap`], re-heapified before each pop) | since last swap-in |
//! | `PersistentFrequencyLFU` | smallest `times_used` | lifetime, never reset |
//!
//! Equal usage counts are broken by ascending page id.

pub mod frames;

#[cfg(test)]
mod proptests;

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use tracing::{debug, info, trace};

use crate::error::SimError;
use crate::page::{by_times_used, Page};
use crate::structures::{MinHeap, Queue};

pub use frames::FrameSet;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Number of physical frames.
pub const FRAME_COUNT: usize = 16;

/// Longest reference pattern; tick indices are `u16`.
pub const MAX_REFERENCES: usize = u16::MAX as usize;

// ── Policy selection ──────────────────────────────────────────────────────────

/// Frame-eviction policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Evict the page that has been resident longest.
    Fifo,
    /// Evict the least-used resident page.
    ///
    /// With `reset_on_swap` the counter only covers the current residency
    /// period (`LFU`); without it the counter is a lifetime access count
    /// (`PersistentFrequencyLFU`).
    Lfu { reset_on_swap: bool },
}

impl Policy {
    pub const LFU: Policy = Policy::Lfu {
        reset_on_swap: true,
    };
    pub const PERSISTENT_LFU: Policy = Policy::Lfu {
        reset_on_swap: false,
    };

    /// Every policy, in the order results are reported.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::LFU, Policy::PERSISTENT_LFU];

    /// Name used in logs and output directory names.
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lfu {
                reset_on_swap: true,
            } => "LFU",
            Policy::Lfu {
                reset_on_swap: false,
            } => "PersistentFrequencyLFU",
        }
    }

    /// Whether `times_used` restarts at every swap-in and eviction.
    pub fn resets_usage(self) -> bool {
        match self {
            Policy::Fifo => true,
            Policy::Lfu { reset_on_swap } => reset_on_swap,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Policy::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SimError::UnknownAlgorithm(s.to_string()))
    }
}

// ── Result type ───────────────────────────────────────────────────────────────

/// Outcome of one paging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingRun {
    pub policy: Policy,

    /// One record per distinct referenced id, ordered by id.
    pub pages: Vec<Page>,

    pub hits: usize,
    pub faults: usize,
    pub evictions: usize,
}

impl PagingRun {
    /// Fraction of references that faulted.
    pub fn fault_rate(&self) -> f64 {
        let total = self.hits + self.faults;
        if total == 0 {
            0.0
        } else {
            self.faults as f64 / total as f64
        }
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Replay `pattern` under `policy` with [`FRAME_COUNT`] frames and return
/// the page records.
///
/// # Errors
/// * [`SimError::EmptyReferencePattern`] for an empty pattern.
/// * [`SimError::ReferencePatternTooLong`] above [`MAX_REFERENCES`] entries.
pub fn evict(policy: Policy, pattern: &[u16]) -> Result<Vec<Page>, SimError> {
    evict_with_frames(policy, pattern, FRAME_COUNT).map(|run| run.pages)
}

/// Like [`evict`], with an explicit frame count and the hit/fault totals.
///
/// # Errors
/// As [`evict`], plus [`SimError::ZeroCapacity`] when `frame_count == 0`.
pub fn evict_with_frames(
    policy: Policy,
    pattern: &[u16],
    frame_count: usize,
) -> Result<PagingRun, SimError> {
    if pattern.is_empty() {
        return Err(SimError::EmptyReferencePattern);
    }
    if pattern.len() > MAX_REFERENCES {
        return Err(SimError::ReferencePatternTooLong {
            len: pattern.len(),
            max: MAX_REFERENCES,
        });
    }

    let ids: BTreeSet<u16> = pattern.iter().copied().collect();
    let mut frames = FrameSet::new(frame_count, &ids, pattern.len(), policy.resets_usage())?;

    info!(
        policy = %policy,
        reference_count = pattern.len(),
        distinct_pages = ids.len(),
        frame_count,
        "=== paging run ==="
    );

    let counts = match policy {
        Policy::Fifo => replay(FifoVictims::new(frame_count)?, pattern, &mut frames)?,
        Policy::Lfu { .. } => replay(LfuVictims::new(frame_count)?, pattern, &mut frames)?,
    };

    info!(
        policy = %policy,
        hits = counts.hits,
        faults = counts.faults,
        evictions = counts.evictions,
        "=== paging complete ==="
    );

    Ok(PagingRun {
        policy,
        pages: frames.into_pages(),
        hits: counts.hits,
        faults: counts.faults,
        evictions: counts.evictions,
    })
}

/// Run every policy in `policies` against the same `pattern`.
///
/// # Errors
/// [`SimError::NoAlgorithms`] for an empty list, otherwise the first error
/// any run returns.
pub fn simulate(pattern: &[u16], policies: &[Policy]) -> Result<Vec<PagingRun>, SimError> {
    if policies.is_empty() {
        return Err(SimError::NoAlgorithms);
    }
    policies
        .iter()
        .map(|&policy| evict_with_frames(policy, pattern, FRAME_COUNT))
        .collect()
}

// ── Victim selection ──────────────────────────────────────────────────────────

/// Policy-specific bookkeeping around the shared replay loop.
trait VictimSelector {
    /// `id` has just become resident.
    fn admitted(&mut self, id: u16, frames: &FrameSet) -> Result<(), SimError>;

    /// Choose and forget the page to evict.  Called only when every frame
    /// is taken.
    fn victim(&mut self, frames: &FrameSet) -> Result<u16, SimError>;
}

/// Ids in the order they became resident.
struct FifoVictims {
    order: Queue<u16>,
}

impl FifoVictims {
    fn new(frame_count: usize) -> Result<Self, SimError> {
        Ok(Self {
            order: Queue::with_capacity(frame_count)?,
        })
    }
}

impl VictimSelector for FifoVictims {
    fn admitted(&mut self, id: u16, _frames: &FrameSet) -> Result<(), SimError> {
        self.order.push(id)
    }

    fn victim(&mut self, _frames: &FrameSet) -> Result<u16, SimError> {
        self.order.pop()
    }
}

/// Resident ids keyed by `times_used`.
///
/// Hits bump counters without touching the heap, so it is re-heapified
/// before every pop.
struct LfuVictims {
    heap: MinHeap<u16>,
}

impl LfuVictims {
    fn new(frame_count: usize) -> Result<Self, SimError> {
        Ok(Self {
            heap: MinHeap::with_capacity(frame_count)?,
        })
    }
}

/// Comparator over resident ids.
///
/// [`LfuVictims::victim`] checks residency of every handle first, so the
/// fallback arm is unreachable there.
fn usage_order(resident: &BTreeMap<u16, Page>) -> impl Fn(&u16, &u16) -> Ordering + '_ {
    move |a: &u16, b: &u16| match (resident.get(a), resident.get(b)) {
        (Some(pa), Some(pb)) => by_times_used(pa, pb),
        _ => a.cmp(b),
    }
}

impl VictimSelector for LfuVictims {
    fn admitted(&mut self, id: u16, frames: &FrameSet) -> Result<(), SimError> {
        self.heap.push(id, usage_order(frames.resident()));
        Ok(())
    }

    fn victim(&mut self, frames: &FrameSet) -> Result<u16, SimError> {
        if let Some(&id) = self.heap.handles().iter().find(|&&id| !frames.is_resident(id)) {
            return Err(SimError::PageNotResident { id });
        }
        let order = usage_order(frames.resident());
        self.heap.reheapify(&order);
        self.heap.pop(&order)
    }
}

// ── Replay loop ───────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Counts {
    hits: usize,
    faults: usize,
    evictions: usize,
}

fn replay<V: VictimSelector>(
    mut selector: V,
    pattern: &[u16],
    frames: &mut FrameSet,
) -> Result<Counts, SimError> {
    let mut counts = Counts::default();

    for (i, &id) in pattern.iter().enumerate() {
        let tick = u16::try_from(i).map_err(|_| SimError::ReferencePatternTooLong {
            len: pattern.len(),
            max: MAX_REFERENCES,
        })?;

        if frames.is_resident(id) {
            trace!(id, tick, "hit");
            counts.hits += 1;
        } else {
            if frames.is_full() {
                let victim = selector.victim(frames)?;
                frames.swap_out(victim, tick)?;
                counts.evictions += 1;
                debug!(victim, faulting = id, tick, "evicted");
            }
            frames.swap_in(id, tick)?;
            selector.admitted(id, frames)?;
            counts.faults += 1;
        }

        frames.touch(id)?;
    }

    Ok(counts)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
