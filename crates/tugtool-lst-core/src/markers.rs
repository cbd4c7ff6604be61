// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Side-channel metadata attached to nodes and padding wrappers.
//!
//! Markers never carry source text of their own except where a marker
//! records trivia the tree has no other home for (the space after a trailing
//! comma). Printers consult them to decide on optional tokens, and a
//! [`MarkerPrinter`](crate::MarkerPrinter) may render them as annotations.

use serde::{Deserialize, Serialize};

use crate::space::Space;

/// One metadata record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Marker {
    /// A separator follows the last element of a container; `suffix` is the
    /// trivia between that separator and the closing token.
    TrailingComma { suffix: Space },
    /// The container's delimiters are absent in source (`new Foo { }` in C#).
    OmitParentheses,
    /// A block that was written as a single expression body.
    SingleExpressionBlock,
    /// A search recipe matched here.
    SearchResult { description: Option<String> },
    /// The statement carries an explicit terminator in the tree rather than
    /// relying on the terminator policy.
    Semicolon,
    /// Metadata owned by a tool outside this crate.
    Custom {
        name: String,
        data: serde_json::Value,
    },
}

impl Marker {
    pub fn search_result(description: Option<&str>) -> Self {
        Self::SearchResult {
            description: description.map(str::to_string),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::TrailingComma { .. } => "trailing_comma",
            Self::OmitParentheses => "omit_parentheses",
            Self::SingleExpressionBlock => "single_expression_block",
            Self::SearchResult { .. } => "search_result",
            Self::Semicolon => "semicolon",
            Self::Custom { .. } => "custom",
        }
    }
}

/// An ordered set of [`Marker`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markers {
    markers: Vec<Marker>,
}

impl Markers {
    pub const EMPTY: Markers = Markers {
        markers: Vec::new(),
    };

    pub fn new(markers: Vec<Marker>) -> Self {
        Self { markers }
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Marker> {
        self.markers.iter()
    }

    pub fn as_slice(&self) -> &[Marker] {
        &self.markers
    }

    pub fn find(&self, predicate: impl Fn(&Marker) -> bool) -> Option<&Marker> {
        self.markers.iter().find(|marker| predicate(marker))
    }

    pub fn contains_kind(&self, kind: &str) -> bool {
        self.markers.iter().any(|marker| marker.kind_name() == kind)
    }

    /// Trivia after a trailing separator, when one is recorded.
    pub fn trailing_comma(&self) -> Option<&Space> {
        self.markers.iter().find_map(|marker| match marker {
            Marker::TrailingComma { suffix } => Some(suffix),
            _ => None,
        })
    }

    pub fn omits_parentheses(&self) -> bool {
        self.markers.contains(&Marker::OmitParentheses)
    }

    /// Returns a copy with `marker` appended.
    #[must_use]
    pub fn add(&self, marker: Marker) -> Self {
        let mut markers = self.markers.clone();
        markers.push(marker);
        Self { markers }
    }

    /// Returns a copy without the markers matching `predicate`.
    #[must_use]
    pub fn remove_if(&self, predicate: impl Fn(&Marker) -> bool) -> Self {
        Self {
            markers: self
                .markers
                .iter()
                .filter(|marker| !predicate(marker))
                .cloned()
                .collect(),
        }
    }
}

impl FromIterator<Marker> for Markers {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        Self {
            markers: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Markers {
    type Item = &'a Marker;
    type IntoIter = std::slice::Iter<'a, Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}
