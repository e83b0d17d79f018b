/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! ossim – tick-driven CPU scheduling and paging simulator
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── error         – SimError / ErrorKind shared by both engines
//! ├── structures/   – bounded stack, ring queue, comparator-driven min-heap
//! ├── process       – Process record, arrival-order precondition
//! ├── page          – Page record and its fault / eviction history
//! ├── scheduler/    – LCFS, PreemptiveLCFS, SJF, PreemptiveSJF
//! ├── paging/       – FIFO, LFU, PersistentFrequencyLFU over 16 frames
//! ├── workload      – seeded process and reference-pattern generation
//! ├── record        – CSV / aligned-text rendering of results
//! └── config/       – YAML run configuration + CLI overrides
//! ```

pub mod config;
pub mod error;
pub mod page;
pub mod paging;
pub mod process;
pub mod record;
pub mod scheduler;
pub mod structures;
pub mod workload;
