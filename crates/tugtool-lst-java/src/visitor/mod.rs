// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor infrastructure for the host family.
//!
//! - [`JavaVisitor`]: the rewriting visitor trait, one `visit_*` per node kind
//!   plus category hooks and padding visits.
//! - [`walk`]: the default traversal behind every `visit_*` method, and the
//!   child-visiting helpers dialect crates reuse for their own nodes.
//!
//! # Example
//!
//! ```ignore
//! use tugtool_lst_java::visitor::{JavaVisitor, walk_literal};
//!
//! struct Bump {
//!     cursor: Cursor<J>,
//! }
//!
//! impl JavaVisitor<()> for Bump {
//!     fn cursor(&mut self) -> &mut Cursor<J> {
//!         &mut self.cursor
//!     }
//!
//!     fn visit_literal(&mut self, node: &Arc<Literal>, p: &mut ()) -> Result<Option<J>> {
//!         walk_literal(self, node, p)
//!     }
//! }
//!
//! let rewritten = Bump { cursor: Cursor::new() }.visit_source(&tree, &mut ())?;
//! ```

mod traits;
pub mod walk;

pub use traits::{Element, JavaVisitor};
pub use walk::*;
