//! Compatibility predicates between query and target payloads.

use crate::Label;

/// A query-side payload that can accept a target-side payload.
///
/// Implemented once per pairing (pattern atom vs. atom, atom vs. atom, ...);
/// the isomorphism engine is generic over this trait and never looks at
/// chemistry directly.
pub trait Matches<T: ?Sized> {
    /// True if `target` satisfies this constraint.
    fn matches(&self, target: &T) -> bool;

    /// Ring membership the target vertex must have, if constrained.
    ///
    /// Judged by the engine from the target graph's structure, so it holds
    /// whatever state the target's own payload is in.
    fn required_ring_membership(&self) -> Option<bool> {
        None
    }
}

/// Extra capabilities the engine needs from query vertices.
pub trait QueryVertex {
    /// The ring-closure label, if any.
    fn label(&self) -> Option<Label> {
        None
    }

    /// True if some target could satisfy both `self` and `other`.
    ///
    /// Used to reject labeled patterns that can never match.
    fn overlaps(&self, other: &Self) -> bool {
        let _ = other;
        true
    }
}

impl Matches<()> for () {
    fn matches(&self, _target: &()) -> bool {
        true
    }
}

impl QueryVertex for () {}
