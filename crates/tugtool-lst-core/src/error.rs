// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Error type shared by visitors and printers.
//!
//! Only conditions that indicate a corrupted tree or an authoring error in a
//! visitor are errors. A category hook that replaces a node with another kind
//! is *not* an error: the replacement simply becomes the final value for that
//! position.

use thiserror::Error;

/// Errors raised while visiting or printing a lossless semantic tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LstError {
    /// An operator or keyword enum value has no surface token in the printing dialect.
    #[error("{dialect} printer has no token for {kind}::{value}")]
    UnmappedToken {
        dialect: &'static str,
        kind: &'static str,
        value: String,
    },

    /// A visitor returned nothing for a child the grammar requires.
    #[error("{parent}.{field} is required but the visitor removed it")]
    MissingRequiredChild {
        parent: &'static str,
        field: &'static str,
    },

    /// A typed child slot received a node of another kind.
    #[error("{parent}.{field} expects {expected} but the visitor returned {found}")]
    UnexpectedKind {
        parent: &'static str,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A printer met a node family it cannot print.
    #[error("{printer} printer cannot print {kind} nodes")]
    UnsupportedDialect {
        printer: &'static str,
        kind: &'static str,
    },

    /// Printed output differs from the source it was parsed from.
    #[error("round trip mismatch at byte {offset}: expected {expected:?}, printed {actual:?}")]
    RoundTripMismatch {
        offset: usize,
        expected: String,
        actual: String,
    },
}

impl LstError {
    pub fn unmapped(dialect: &'static str, kind: &'static str, value: impl std::fmt::Debug) -> Self {
        Self::UnmappedToken {
            dialect,
            kind,
            value: format!("{value:?}"),
        }
    }

    pub fn missing(parent: &'static str, field: &'static str) -> Self {
        Self::MissingRequiredChild { parent, field }
    }
}

/// Result alias used throughout the LST crates.
pub type Result<T> = std::result::Result<T, LstError>;
