/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error types for the simulation engines.
//!
//! Every failure belongs to one of two layers, reported by
//! [`SimError::kind()`]:
//!
//! | Kind | Meaning | Variants |
//! |---|---|---|
//! | [`ErrorKind::PreconditionViolation`] | the caller broke the input contract | `EmptyInput`, `UnsortedInput`, `NoAlgorithms`, `EmptyReferencePattern`, `ReferencePatternTooLong`, `ZeroPages`, `ZeroExecutionTime`, `PartiallyExecuted`, `ZeroCapacity`, `ClockOverflow`, `UnknownAlgorithm` |
//! | [`ErrorKind::StructuralInvariantViolation`] | an engine-internal invariant broke | `EmptyStructure`, `CapacityExceeded`, `PageNotSwapped`, `PageNotResident`, `FrameOverflow` |
//!
//! Neither kind is retryable.  An engine call that fails returns no partial
//! result.
//!
//! Application glue (config file, output files, CLI) wraps these in
//! `anyhow::Error`; the engines themselves only ever return [`SimError`].

use thiserror::Error;

/// Failure layer of a [`SimError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Nil/empty/zero-sized/unsorted input or zero capacity.
    PreconditionViolation,
    /// Operating on an empty waiting structure, a capacity mismatch, or a
    /// page found in the wrong half of the frame set.
    StructuralInvariantViolation,
}

/// Error type returned by every engine and waiting-structure operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    // ── Preconditions ─────────────────────────────────────────────────────────
    /// The process collection to simulate or generate was empty.
    #[error("input is empty; at least one process is required")]
    EmptyInput,

    /// The process collection is not sorted by `arrive_time`.
    ///
    /// `index` is the first position whose arrival precedes its predecessor.
    #[error("processes must be sorted by arrive_time (first out-of-order position: {index})")]
    UnsortedInput { index: usize },

    /// A simulation was requested with an empty algorithm/policy list.
    #[error("no algorithms given; at least one is required")]
    NoAlgorithms,

    /// The page reference pattern was empty.
    #[error("the page reference pattern is empty")]
    EmptyReferencePattern,

    /// The reference pattern is longer than a tick index can address.
    #[error("reference pattern has {len} entries, the maximum is {max}")]
    ReferencePatternTooLong { len: usize, max: usize },

    /// A page workload was requested over zero pages.
    #[error("the number of pages must be greater than zero")]
    ZeroPages,

    /// A process (or a workload's maximum) has a zero execution time.
    #[error("execution time must be at least one tick")]
    ZeroExecutionTime,

    /// A process handed to the scheduler has already been partly served.
    #[error("process {id} has execution_time_left {left} but execution_time {total}")]
    PartiallyExecuted { id: u16, left: u16, total: u16 },

    /// A waiting structure was created with zero capacity.
    #[error("a {structure} cannot be created with zero capacity")]
    ZeroCapacity { structure: &'static str },

    /// The logical clock would pass `u16::MAX`.
    #[error("logical clock overflowed the 16-bit tick range")]
    ClockOverflow,

    /// An algorithm or policy name was not recognised.
    #[error("unknown algorithm: '{0}'")]
    UnknownAlgorithm(String),

    // ── Structural invariants ─────────────────────────────────────────────────
    /// `pop`/`top`/`front` on an empty stack, queue or heap.
    #[error("{structure} is empty")]
    EmptyStructure { structure: &'static str },

    /// A push would exceed a fixed-capacity structure.
    #[error("{structure} is full (capacity {capacity})")]
    CapacityExceeded {
        structure: &'static str,
        capacity: usize,
    },

    /// A page expected in the swapped set was not there.
    #[error("page {id} is not in the swapped set")]
    PageNotSwapped { id: u16 },

    /// A page expected in the resident set was not there.
    #[error("page {id} is not resident")]
    PageNotResident { id: u16 },

    /// The resident set grew past the frame count.
    #[error("resident set holds {resident} pages but only {capacity} frames exist")]
    FrameOverflow { resident: usize, capacity: usize },
}

impl SimError {
    /// Returns the failure layer this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimError::EmptyInput
            | SimError::UnsortedInput { .. }
            | SimError::NoAlgorithms
            | SimError::EmptyReferencePattern
            | SimError::ReferencePatternTooLong { .. }
            | SimError::ZeroPages
            | SimError::ZeroExecutionTime
            | SimError::PartiallyExecuted { .. }
            | SimError::ZeroCapacity { .. }
            | SimError::ClockOverflow
            | SimError::UnknownAlgorithm(_) => ErrorKind::PreconditionViolation,

            SimError::EmptyStructure { .. }
            | SimError::CapacityExceeded { .. }
            | SimError::PageNotSwapped { .. }
            | SimError::PageNotResident { .. }
            | SimError::FrameOverflow { .. } => ErrorKind::StructuralInvariantViolation,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
