// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Trivia location tags.
//!
//! Every `visit_space` call names where the space sits in the grammar
//! (`BLOCK_END`, `METHOD_INVOCATION_ARGUMENT`, ...). Each language family
//! declares its own constants; the tag is only ever compared, never parsed.

/// Where a [`Space`](crate::Space) sits relative to its fixed tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location(&'static str);

impl Location {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Locations for a [`Container`](crate::Container): its own `before` space and
/// the `after` space of each element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerLocation {
    pub before: Location,
    pub element: Location,
}

impl ContainerLocation {
    pub const fn new(before: &'static str, element: &'static str) -> Self {
        Self {
            before: Location::new(before),
            element: Location::new(element),
        }
    }
}
