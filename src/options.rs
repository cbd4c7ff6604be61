// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Print configuration.

use serde::{Deserialize, Serialize};
use tugtool_lst_core::{
    DefaultMarkerPrinter, FencedMarkerPrinter, MarkerPrinter, SanitizedMarkerPrinter,
};
use tugtool_lst_csharp::CSHARP;
use tugtool_lst_java::J;

/// The printers a tree can be printed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Java,
    CSharp,
}

impl Dialect {
    /// The dialect that owns `tree`'s root.
    pub fn of(tree: &J) -> Self {
        if tree.dialect() == CSHARP {
            Dialect::CSharp
        } else {
            Dialect::Java
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dialect::Java => "java",
            Dialect::CSharp => CSHARP,
        }
    }
}

/// How markers are rendered in printed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerPrinting {
    /// Search results as `/*~~>*/` comments.
    #[default]
    Default,
    /// No marker text; output is exactly the source.
    Sanitized,
    /// Search results between `{{` and `}}`.
    Fenced,
}

impl MarkerPrinting {
    pub fn printer(self) -> &'static dyn MarkerPrinter<J> {
        match self {
            MarkerPrinting::Default => &DefaultMarkerPrinter,
            MarkerPrinting::Sanitized => &SanitizedMarkerPrinter,
            MarkerPrinting::Fenced => &FencedMarkerPrinter,
        }
    }
}

/// Options for [`print_with`](crate::print_with) and
/// [`print_parsed`](crate::print_parsed).
///
/// # Example
///
/// ```
/// use tugtool_lst::{Dialect, MarkerPrinting, PrintOptions};
///
/// let options = PrintOptions::new()
///     .with_marker_printing(MarkerPrinting::Sanitized)
///     .with_dialect(Dialect::CSharp);
/// assert_eq!(options.dialect, Some(Dialect::CSharp));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintOptions {
    pub marker_printing: MarkerPrinting,

    /// Check that the tree reprints its source byte for byte before printing.
    /// Only [`print_parsed`](crate::print_parsed) has a source to check against.
    pub verify_round_trip: bool,

    /// Printer to use. `None` picks the dialect of the root node, so a host
    /// subtree cut from a C# file needs `Some(Dialect::CSharp)`.
    pub dialect: Option<Dialect>,
}

impl PrintOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_marker_printing(mut self, marker_printing: MarkerPrinting) -> Self {
        self.marker_printing = marker_printing;
        self
    }

    #[must_use]
    pub fn with_round_trip_verification(mut self, verify: bool) -> Self {
        self.verify_round_trip = verify;
        self
    }

    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = Some(dialect);
        self
    }

    /// The dialect `tree` is printed in under these options.
    pub fn dialect_for(&self, tree: &J) -> Dialect {
        self.dialect.unwrap_or_else(|| Dialect::of(tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = PrintOptions::default();
        assert_eq!(options.marker_printing, MarkerPrinting::Default);
        assert!(!options.verify_round_trip);
        assert_eq!(options.dialect, None);
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let options: PrintOptions =
            serde_json::from_str(r#"{"marker_printing": "sanitized", "dialect": "csharp"}"#)
                .expect("valid options");
        assert_eq!(
            options,
            PrintOptions::new()
                .with_marker_printing(MarkerPrinting::Sanitized)
                .with_dialect(Dialect::CSharp)
        );
    }

    #[test]
    fn serializes_snake_case() {
        let options = PrintOptions::new().with_round_trip_verification(true);
        let json = serde_json::to_value(&options).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({
                "marker_printing": "default",
                "verify_round_trip": true,
                "dialect": null,
            })
        );
    }
}
