// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Lossless semantic trees.
//!
//! A lossless semantic tree keeps every byte of its source: whitespace and
//! comments live in each node's prefix, separators in padding, and printing
//! an unmodified tree reproduces the source exactly. This crate ties the
//! language families together:
//!
//! - [`lst`]: space, markers, padding, identity and the cursor
//! - [`java`]: the C-family host nodes, their visitor and the Java printer
//! - [`csharp`]: C# nodes composed over the host family
//!
//! and adds dialect-aware printing, [`pipeline`]s of passes and
//! [`verify`]ing round trips.

pub mod options;
pub mod pipeline;
pub mod verify;

pub use tugtool_lst_core as lst;
pub use tugtool_lst_csharp as csharp;
pub use tugtool_lst_java as java;

pub use options::{Dialect, MarkerPrinting, PrintOptions};
pub use pipeline::{Pass, Pipeline, PipelineOptions, RunContext, VisitorPass};
pub use tugtool_lst_core::{LstError, Result};
pub use tugtool_lst_java::J;
pub use verify::verify_round_trip;

use tracing::debug;
use tugtool_lst_csharp::printer::print_csharp;
use tugtool_lst_java::printer::print_java;

/// Print `tree` with the printer of its root's dialect.
pub fn print(tree: &J) -> Result<String> {
    print_with(tree, &PrintOptions::default())
}

/// Print `tree` under `options`.
pub fn print_with(tree: &J, options: &PrintOptions) -> Result<String> {
    let dialect = options.dialect_for(tree);
    debug!(dialect = dialect.name(), kind = tree.kind(), "printing");
    let marker_printer = options.marker_printing.printer();
    match dialect {
        Dialect::Java => print_java(tree, marker_printer),
        Dialect::CSharp => print_csharp(tree, marker_printer),
    }
}

/// Print a tree freshly parsed from `source`.
///
/// With [`PrintOptions::verify_round_trip`] set, the tree must first reprint
/// `source` exactly, or [`LstError::RoundTripMismatch`] is returned.
pub fn print_parsed(source: &str, tree: &J, options: &PrintOptions) -> Result<String> {
    if options.verify_round_trip {
        let sanitized = options
            .clone()
            .with_marker_printing(MarkerPrinting::Sanitized);
        verify::compare(source, &print_with(tree, &sanitized)?)?;
    }
    print_with(tree, options)
}
