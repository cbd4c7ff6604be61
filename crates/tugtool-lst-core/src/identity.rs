// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Structural sharing.
//!
//! A visitor that changes nothing must hand back the *same* `Arc`, so callers
//! can skip unchanged subtrees with a pointer comparison. [`RefEq`] is the
//! comparison every functional update uses: pointer identity for shared
//! nodes, value equality for the small leaf values (trivia, markers, flags,
//! operator enums) that are stored inline.
//!
//! [`rebuild!`](crate::rebuild) performs the field-wise update itself.

use std::sync::Arc;

use crate::markers::{Marker, Markers};
use crate::space::{Comment, Space};

/// Identity comparison used to decide whether a node must be rebuilt.
pub trait RefEq {
    fn ref_eq(&self, other: &Self) -> bool;
}

impl<T: ?Sized> RefEq for Arc<T> {
    fn ref_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: RefEq> RefEq for Option<T> {
    fn ref_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.ref_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: RefEq> RefEq for Vec<T> {
    fn ref_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.ref_eq(b))
    }
}

/// Implements [`RefEq`] as plain `==` for small inline values.
#[macro_export]
macro_rules! ref_eq_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::RefEq for $ty {
                fn ref_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

ref_eq_by_value!(bool, String, Space, Comment, Marker, Markers);

/// Field-wise functional update of an `Arc`-held node.
///
/// Each listed field must be a local binding holding the revisited value.
/// When every one of them is [`RefEq`] to the node's current field the
/// original `Arc` is returned; otherwise a new node is allocated with those
/// fields replaced and the rest (including the node id) carried over.
///
/// ```ignore
/// let prefix = v.visit_space(&node.prefix, loc::BLOCK_PREFIX, p)?;
/// let node = rebuild!(node, Block { prefix });
/// ```
#[macro_export]
macro_rules! rebuild {
    ($node:expr, $ty:ident { $($field:ident),+ $(,)? }) => {{
        let original: &::std::sync::Arc<$ty> = $node;
        if true $(&& $crate::RefEq::ref_eq(&$field, &original.$field))+ {
            ::std::sync::Arc::clone(original)
        } else {
            #[allow(clippy::needless_update)]
            let updated = $ty {
                $($field,)+
                ..(**original).clone()
            };
            ::std::sync::Arc::new(updated)
        }
    }};
}
