// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Padding wrappers.
//!
//! Fixed tokens (keywords, punctuation, delimiters) are never stored in the
//! tree. The trivia next to them is, and these wrappers are where it lives:
//!
//! - [`LeftPadded`]: `token <before> element`, e.g. the space before `=` in an
//!   initializer or before `.` in a field access.
//! - [`RightPadded`]: `element <after> token`, e.g. the space before `,` or `;`.
//! - [`Container`]: a delimited, separated sequence. The printer supplies the
//!   opening, separator and closing tokens.
//!
//! The `map` functions follow the structural-sharing discipline: when no
//! element changes identity the borrowed original is returned.

use std::borrow::Cow;

use crate::error::Result;
use crate::identity::RefEq;
use crate::markers::Markers;
use crate::space::Space;

/// Trivia between a preceding fixed token and `element`.
#[derive(Debug, Clone)]
pub struct LeftPadded<T> {
    pub before: Space,
    pub element: T,
    pub markers: Markers,
}

impl<T> LeftPadded<T> {
    pub fn new(before: Space, element: T) -> Self {
        Self {
            before,
            element,
            markers: Markers::EMPTY,
        }
    }

    /// No trivia between the token and the element.
    pub fn build(element: T) -> Self {
        Self::new(Space::EMPTY, element)
    }

    #[must_use]
    pub fn with_element(self, element: T) -> Self {
        Self { element, ..self }
    }

    #[must_use]
    pub fn with_before(self, before: Space) -> Self {
        Self { before, ..self }
    }
}

impl<T: Clone + RefEq> LeftPadded<T> {
    /// Apply `f` to the element, keeping the original when it is unchanged.
    pub fn map(&self, f: impl FnOnce(&T) -> T) -> Cow<'_, Self> {
        let element = f(&self.element);
        if element.ref_eq(&self.element) {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(self.clone().with_element(element))
        }
    }
}

impl<T: RefEq> RefEq for LeftPadded<T> {
    fn ref_eq(&self, other: &Self) -> bool {
        self.element.ref_eq(&other.element)
            && self.before == other.before
            && self.markers == other.markers
    }
}

/// Trivia between `element` and a following fixed token.
#[derive(Debug, Clone)]
pub struct RightPadded<T> {
    pub element: T,
    pub after: Space,
    pub markers: Markers,
}

impl<T> RightPadded<T> {
    pub fn new(element: T, after: Space) -> Self {
        Self {
            element,
            after,
            markers: Markers::EMPTY,
        }
    }

    pub fn build(element: T) -> Self {
        Self::new(element, Space::EMPTY)
    }

    #[must_use]
    pub fn with_element(self, element: T) -> Self {
        Self { element, ..self }
    }

    #[must_use]
    pub fn with_after(self, after: Space) -> Self {
        Self { after, ..self }
    }

    #[must_use]
    pub fn with_markers(self, markers: Markers) -> Self {
        Self { markers, ..self }
    }
}

impl<T: Clone + RefEq> RightPadded<T> {
    /// Apply `f` to the element, keeping the original when it is unchanged.
    pub fn map(&self, f: impl FnOnce(&T) -> T) -> Cow<'_, Self> {
        let element = f(&self.element);
        if element.ref_eq(&self.element) {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(self.clone().with_element(element))
        }
    }
}

impl<T: RefEq> RefEq for RightPadded<T> {
    fn ref_eq(&self, other: &Self) -> bool {
        self.element.ref_eq(&other.element)
            && self.after == other.after
            && self.markers == other.markers
    }
}

/// A delimited, possibly empty sequence of elements.
///
/// `before` is the trivia at the opening delimiter's position (in front of
/// `(` for call arguments). Each element's `after` is the trivia before the
/// following separator or the closing delimiter.
#[derive(Debug, Clone)]
pub struct Container<T> {
    pub before: Space,
    pub elements: Vec<RightPadded<T>>,
    pub markers: Markers,
}

impl<T> Container<T> {
    pub fn new(before: Space, elements: Vec<RightPadded<T>>) -> Self {
        Self {
            before,
            elements,
            markers: Markers::EMPTY,
        }
    }

    pub fn empty() -> Self {
        Self::new(Space::EMPTY, Vec::new())
    }

    pub fn build(elements: Vec<RightPadded<T>>) -> Self {
        Self::new(Space::EMPTY, elements)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The elements without their padding.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.elements.iter().map(|padded| &padded.element)
    }

    #[must_use]
    pub fn with_before(self, before: Space) -> Self {
        Self { before, ..self }
    }

    #[must_use]
    pub fn with_markers(self, markers: Markers) -> Self {
        Self { markers, ..self }
    }
}

impl<T: Clone + RefEq> Container<T> {
    /// Apply `f` to every element. An element mapped to `None` is removed.
    ///
    /// `before` and every surviving element's `after` are kept. Returns the
    /// borrowed original when every element comes back identical.
    pub fn map(&self, mut f: impl FnMut(&T) -> Option<T>) -> Cow<'_, Self> {
        match self.try_map(|element| Ok(f(element))) {
            Ok(mapped) => mapped,
            // `f` is infallible
            Err(_) => Cow::Borrowed(self),
        }
    }

    /// Fallible form of [`map`](Self::map); the first error aborts the map.
    pub fn try_map(
        &self,
        mut f: impl FnMut(&T) -> Result<Option<T>>,
    ) -> Result<Cow<'_, Self>> {
        let mut changed = false;
        let mut elements = Vec::with_capacity(self.elements.len());
        for padded in &self.elements {
            match f(&padded.element)? {
                Some(element) => {
                    if !element.ref_eq(&padded.element) {
                        changed = true;
                    }
                    elements.push(padded.clone().with_element(element));
                }
                None => changed = true,
            }
        }
        if !changed {
            return Ok(Cow::Borrowed(self));
        }
        Ok(Cow::Owned(Self {
            before: self.before.clone(),
            elements,
            markers: self.markers.clone(),
        }))
    }
}

impl<T: RefEq> RefEq for Container<T> {
    fn ref_eq(&self, other: &Self) -> bool {
        self.elements.ref_eq(&other.elements)
            && self.before == other.before
            && self.markers == other.markers
    }
}
