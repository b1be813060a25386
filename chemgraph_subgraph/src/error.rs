//! Error types for isomorphism search.

use std::time::Duration;

use thiserror::Error;

use chemgraph_core::{Label, VertexId};

/// Outcomes of a search that are neither a match nor a proven non-match.
///
/// An exhausted search without a mapping is not an error; it surfaces as
/// `Ok(false)`, `Ok(None)` or an empty enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Two query vertices share a label but no target vertex can satisfy both.
    #[error("Malformed pattern: label {label} joins incompatible {first} and {second}")]
    MalformedPattern {
        /// The shared label.
        label: Label,
        /// First vertex carrying the label.
        first: VertexId,
        /// Second vertex carrying the label.
        second: VertexId,
    },

    /// The step cap or deadline ran out before the search finished.
    ///
    /// The answer is unknown; retry with a larger budget to learn more.
    #[error("Search budget exceeded after {steps} steps ({elapsed:?})")]
    SearchBudgetExceeded {
        /// Candidate assignments attempted.
        steps: u64,
        /// Wall-clock time spent.
        elapsed: Duration,
    },
}

impl MatchError {
    /// True for [`MatchError::SearchBudgetExceeded`].
    pub fn is_budget_exceeded(&self) -> bool {
        matches!(self, Self::SearchBudgetExceeded { .. })
    }
}
