// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The C# dialect.
//!
//! C# trees are host ([`J`](tugtool_lst_java::J)) trees with C# nodes mixed
//! in as `J::Extension`. This crate provides:
//!
//! - the C# nodes and their closed view [`Cs`]
//! - [`visitor::CSharpVisitor`], which extends the host visitor
//! - [`printer::CSharpPrinter`], which drives the host printer with C#
//!   tokens and C# statement terminators
//! - [`builder::CSharpTreeBuilder`] for constructing C# nodes by hand

pub mod builder;
pub mod location;
pub mod printer;
pub mod tree;
pub mod visitor;

pub use tree::*;

#[doc(hidden)]
pub use tugtool_lst_core as lst;
#[doc(hidden)]
pub use tugtool_lst_java as host;
