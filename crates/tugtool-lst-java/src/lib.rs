// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The C-family host node family.
//!
//! This crate provides:
//!
//! - [`J`], the closed set of host nodes, with [`Extension`] as the hook for
//!   dialect nodes
//! - [`visitor::JavaVisitor`], the rewriting visitor with its walk functions
//! - [`printer::JavaPrinter`] and the [`printer::JavaPrintCallbacks`]
//!   capability dialect printers implement to drive it
//! - [`builder::TreeBuilder`] for constructing trees by hand
//!
//! # Example
//!
//! ```ignore
//! use tugtool_lst_core::SanitizedMarkerPrinter;
//! use tugtool_lst_java::{builder::TreeBuilder, printer::print_java, J};
//!
//! let b = TreeBuilder::new();
//! let call = b.method_invocation(
//!     "",
//!     Some(b.right(b.identifier("", "a"), "")),
//!     b.identifier("", "b"),
//!     b.container("", vec![(b.literal("", "1"), ""), (b.literal("  ", "2"), "")]),
//! );
//! assert_eq!(print_java(&J::from(call), &SanitizedMarkerPrinter)?, "a.b(1,  2)");
//! ```

pub mod builder;
pub mod location;
pub mod printer;
pub mod tree;
pub mod visitor;

pub use tree::*;
