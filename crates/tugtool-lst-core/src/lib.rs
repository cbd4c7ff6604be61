// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Language-neutral building blocks for lossless semantic trees (LSTs).
//!
//! An LST keeps every byte of its source: whitespace and comments live in
//! [`Space`] values owned by nodes (as their prefix) and by the padding
//! wrappers ([`LeftPadded`], [`RightPadded`], [`Container`]) that sit next to
//! fixed tokens. Printing a tree nobody touched reproduces the source exactly.
//!
//! This crate holds the pieces every language family shares:
//!
//! - trivia: [`Space`], [`Comment`]
//! - metadata: [`Marker`], [`Markers`]
//! - padding: [`LeftPadded`], [`RightPadded`], [`Container`]
//! - identity: [`NodeId`], [`RefEq`], [`rebuild!`]
//! - traversal state: [`Cursor`], [`Location`]
//! - printing: [`PrintOutput`], [`MarkerPrinter`]
//! - errors: [`LstError`], [`Result`]
//!
//! Node families (`tugtool-lst-java`, `tugtool-lst-csharp`) define the
//! concrete node types, visitors and printers on top of these.

pub mod cursor;
pub mod error;
pub mod id;
pub mod identity;
pub mod location;
pub mod markers;
pub mod padding;
pub mod print;
pub mod space;

pub use cursor::Cursor;
pub use error::{LstError, Result};
pub use id::{NodeId, NodeIdGenerator};
pub use identity::RefEq;
pub use location::{ContainerLocation, Location};
pub use markers::{Marker, Markers};
pub use padding::{Container, LeftPadded, RightPadded};
pub use print::{
    CommentWrapper, DefaultMarkerPrinter, FencedMarkerPrinter, MarkerPrinter, PrintOutput,
    SanitizedMarkerPrinter,
};
pub use space::{Comment, Space};
