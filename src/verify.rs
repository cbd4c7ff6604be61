// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Strict round-trip verification.
//!
//! A parser is correct when the tree it produces prints back to its input
//! byte for byte. The comparison is exact: trailing whitespace and line
//! endings count.

use tugtool_lst_core::{LstError, Result};
use tugtool_lst_java::J;

use crate::options::{MarkerPrinting, PrintOptions};

/// Characters of context reported on each side of a mismatch.
const SNIPPET_CHARS: usize = 16;

/// Check that `tree` prints exactly `source`, ignoring marker text.
pub fn verify_round_trip(source: &str, tree: &J) -> Result<()> {
    let options = PrintOptions::new().with_marker_printing(MarkerPrinting::Sanitized);
    let printed = crate::print_with(tree, &options)?;
    compare(source, &printed)
}

/// `Ok` when `actual == expected`, otherwise the first point of difference.
pub fn compare(expected: &str, actual: &str) -> Result<()> {
    match first_difference(expected, actual) {
        None => Ok(()),
        Some(offset) => Err(LstError::RoundTripMismatch {
            offset,
            expected: snippet(expected, offset),
            actual: snippet(actual, offset),
        }),
    }
}

/// Byte offset of the first character where `a` and `b` differ.
pub fn first_difference(a: &str, b: &str) -> Option<usize> {
    let mut a_chars = a.char_indices();
    let mut b_chars = b.chars();
    loop {
        match (a_chars.next(), b_chars.next()) {
            (Some((offset, x)), Some(y)) if x != y => return Some(offset),
            (Some(_), Some(_)) => {}
            (Some((offset, _)), None) => return Some(offset),
            (None, Some(_)) => return Some(a.len()),
            (None, None) => return None,
        }
    }
}

fn snippet(text: &str, offset: usize) -> String {
    text.get(offset..)
        .unwrap_or_default()
        .chars()
        .take(SNIPPET_CHARS)
        .collect()
}
