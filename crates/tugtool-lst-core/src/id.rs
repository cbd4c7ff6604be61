// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Stable node identity.
//!
//! Every tree node carries a [`NodeId`] that survives functional updates: a
//! visitor that rewrites a node's fields keeps its id, so side tables keyed by
//! id stay valid across passes.
//!
//! Parsers allocate ids from a [`NodeIdGenerator`] so the same source always
//! produces the same ids. Nodes synthesized by a visitor use
//! [`NodeId::fresh`], which draws from a separate, process-wide range that
//! never collides with generator output.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Ids handed out by [`NodeId::fresh`] start here; generators count up from zero.
const FRESH_BASE: u64 = 1 << 63;

static NEXT_FRESH: AtomicU64 = AtomicU64::new(FRESH_BASE);

/// A stable, unique identifier for a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Create a NodeId with the given value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Allocate an id for a node created outside of parsing.
    pub fn fresh() -> Self {
        Self(NEXT_FRESH.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Whether this id came from [`NodeId::fresh`].
    pub fn is_synthesized(&self) -> bool {
        self.0 >= FRESH_BASE
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Generator for assigning sequential [`NodeId`]s while a tree is built.
#[derive(Debug, Default)]
pub struct NodeIdGenerator {
    next_id: u64,
}

impl NodeIdGenerator {
    /// Create a new generator starting from NodeId(0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the next NodeId.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Get the current count of generated NodeIds.
    pub fn count(&self) -> u64 {
        self.next_id
    }
}
