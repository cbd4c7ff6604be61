// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Sequential passes over a source file.
//!
//! Each [`Pass`] sees the tree the previous pass produced. Trees are
//! immutable snapshots, so a pass that changes nothing hands back the same
//! root and the run records it as unchanged by identity alone.
//!
//! ```
//! use tugtool_lst::pipeline::{PassStatus, Pipeline, RunContext};
//! use tugtool_lst::java::builder::TreeBuilder;
//! use tugtool_lst::J;
//!
//! let b = TreeBuilder::new();
//! let tree: J = b.identifier("", "x").into();
//!
//! let mut pipeline = Pipeline::new();
//! let mut ctx = RunContext::new();
//! let result = pipeline.run(&tree, &mut ctx).unwrap();
//! assert!(result.is_some());
//! assert!(!ctx.changed());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use tugtool_lst_core::{RefEq, Result};
use tugtool_lst_java::visitor::JavaVisitor;
use tugtool_lst_java::J;

/// One step of a [`Pipeline`].
pub trait Pass {
    /// Name recorded in the [`RunContext`].
    fn name(&self) -> &str;

    /// Transform `tree`. Returning the same root means no change; `None`
    /// deletes the source file.
    fn run(&mut self, tree: &J) -> Result<Option<J>>;
}

/// Runs a [`JavaVisitor`] (or a dialect visitor built on it) as a pass.
pub struct VisitorPass<V> {
    name: String,
    visitor: V,
}

impl<V> VisitorPass<V> {
    pub fn new(name: impl Into<String>, visitor: V) -> Self {
        Self {
            name: name.into(),
            visitor,
        }
    }

    pub fn visitor(&self) -> &V {
        &self.visitor
    }
}

impl<V: JavaVisitor<()>> Pass for VisitorPass<V> {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&mut self, tree: &J) -> Result<Option<J>> {
        self.visitor.visit_source(tree, &mut ())
    }
}

/// What a pass did to the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "error")]
pub enum PassStatus {
    Changed,
    Unchanged,
    Deleted,
    /// The pass failed and the run continued with its input.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassOutcome {
    pub pass: String,
    #[serde(flatten)]
    pub status: PassStatus,
}

/// State scoped to one [`Pipeline::run`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunContext {
    outcomes: Vec<PassOutcome>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcomes(&self) -> &[PassOutcome] {
        &self.outcomes
    }

    /// Whether any pass changed or deleted the tree.
    pub fn changed(&self) -> bool {
        self.outcomes
            .iter()
            .any(|o| matches!(o.status, PassStatus::Changed | PassStatus::Deleted))
    }

    /// Names of the passes that changed the tree, in run order.
    pub fn changed_passes(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|o| o.status == PassStatus::Changed)
            .map(|o| o.pass.as_str())
    }

    fn record(&mut self, pass: &str, status: PassStatus) {
        self.outcomes.push(PassOutcome {
            pass: pass.to_string(),
            status,
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Abort the run on the first failing pass. When unset, the failure is
    /// recorded and the next pass receives the failing pass's input.
    ///
    /// Default: `true`
    pub stop_on_error: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            stop_on_error: true,
        }
    }
}

#[derive(Default)]
pub struct Pipeline {
    passes: Vec<Box<dyn Pass>>,
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_pass(mut self, pass: impl Pass + 'static) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    #[must_use]
    pub fn with_visitor<V: JavaVisitor<()> + 'static>(
        self,
        name: impl Into<String>,
        visitor: V,
    ) -> Self {
        self.with_pass(VisitorPass::new(name, visitor))
    }

    pub fn options(&self) -> PipelineOptions {
        self.options
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Run every pass in order. Stops early, returning `None`, when a pass
    /// deletes the source file.
    pub fn run(&mut self, tree: &J, ctx: &mut RunContext) -> Result<Option<J>> {
        let mut current = tree.clone();
        for pass in &mut self.passes {
            let name = pass.name().to_string();
            match pass.run(&current) {
                Ok(Some(next)) => {
                    let changed = !next.ref_eq(&current);
                    debug!(pass = %name, changed, "pass finished");
                    let status = if changed {
                        PassStatus::Changed
                    } else {
                        PassStatus::Unchanged
                    };
                    ctx.record(&name, status);
                    current = next;
                }
                Ok(None) => {
                    debug!(pass = %name, "pass deleted the source file");
                    ctx.record(&name, PassStatus::Deleted);
                    return Ok(None);
                }
                Err(err) if !self.options.stop_on_error => {
                    warn!(pass = %name, error = %err, "pass failed; continuing");
                    ctx.record(&name, PassStatus::Failed(err.to_string()));
                }
                Err(err) => {
                    warn!(pass = %name, error = %err, "pass failed");
                    ctx.record(&name, PassStatus::Failed(err.to_string()));
                    return Err(err);
                }
            }
        }
        Ok(Some(current))
    }
}
