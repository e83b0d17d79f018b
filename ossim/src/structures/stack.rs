/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use crate::error::SimError;

const NAME: &str = "stack";

/// Strict LIFO stack over a pre-sized `Vec`.
///
/// The initial capacity is a sizing hint; the stack grows past it if needed.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack with room for `capacity` items.
    ///
    /// # Errors
    /// [`SimError::ZeroCapacity`] when `capacity == 0`.
    pub fn with_capacity(capacity: usize) -> Result<Self, SimError> {
        if capacity == 0 {
            return Err(SimError::ZeroCapacity { structure: NAME });
        }
        Ok(Self {
            items: Vec::with_capacity(capacity),
        })
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the most recently pushed item.
    pub fn pop(&mut self) -> Result<T, SimError> {
        self.items
            .pop()
            .ok_or(SimError::EmptyStructure { structure: NAME })
    }

    /// Returns the most recently pushed item without removing it.
    pub fn top(&self) -> Result<&T, SimError> {
        self.items
            .last()
            .ok_or(SimError::EmptyStructure { structure: NAME })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
