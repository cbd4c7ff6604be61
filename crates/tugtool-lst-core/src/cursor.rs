// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Transient ancestor stack.
//!
//! Nodes never store parent pointers. While a visitor or printer descends it
//! pushes each node it enters onto a [`Cursor`] and pops it on the way out, so
//! ancestor-sensitive decisions read the live chain from here.

/// The chain of nodes from the root to the node currently being processed.
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    stack: Vec<T>,
}

impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<T> Cursor<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: T) {
        self.stack.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }

    /// The node currently being processed.
    pub fn value(&self) -> Option<&T> {
        self.stack.last()
    }

    /// The direct ancestor of [`value`](Self::value).
    pub fn parent(&self) -> Option<&T> {
        self.parent_at(1)
    }

    /// The ancestor `levels` steps above the current node.
    pub fn parent_at(&self, levels: usize) -> Option<&T> {
        self.stack
            .len()
            .checked_sub(levels + 1)
            .and_then(|index| self.stack.get(index))
    }

    /// Ancestors from the direct parent up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = &T> {
        self.stack.iter().rev().skip(1)
    }

    /// The nearest ancestor (excluding the current node) matching `predicate`.
    pub fn first_enclosing(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.ancestors().find(|value| predicate(value))
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
