/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Bounded waiting structures shared by both engines.
//!
//! | Structure | Order | Used by |
//! |---|---|---|
//! | [`Stack`] | LIFO | `LCFS`, `PreemptiveLCFS` |
//! | [`Queue`] | FIFO, fixed-capacity ring | `FIFO` eviction |
//! | [`MinHeap`] | smallest key first | `SJF`, `PreemptiveSJF`, `LFU` |
//!
//! Reading from an empty structure is an engine defect, so every accessor
//! returns [`SimError::EmptyStructure`](crate::error::SimError::EmptyStructure)
//! instead of `Option`.

pub mod heap;
pub mod queue;
pub mod stack;

pub use heap::MinHeap;
pub use queue::Queue;
pub use stack::Stack;
