//! Configuration for the isomorphism search.
//!
//! This module exposes a minimal, stable surface for consumers (for example,
//! the `chemgraph_subgraph` crate) to parameterize how matching should behave.
//!
//! The two main concepts are:
//! - budget: how much work a single search may do before it gives up and
//!   reports that the answer is unknown.
//! - dedupe: how to deduplicate enumerated matches (every distinct mapping,
//!   or one mapping per covered set of target vertices).
//!
//! Quick examples
//!
//! Default step cap, every mapping reported:
//! ```ignore
//! use chemgraph_common::{Config, DedupeMode};
//! let cfg = Config::default();
//! ```
//!
//! Collapse pattern automorphisms with a tight step cap:
//! ```ignore
//! use chemgraph_common::{Config, DedupeMode};
//! let cfg = Config::with_max_steps(10_000).dedupe(DedupeMode::TargetSet);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default number of candidate assignments a search may attempt.
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;

/// Global search configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Work limit applied to every search started with this configuration.
    pub budget: SearchBudget,
    /// How to deduplicate matches during enumeration.
    pub dedupe: DedupeMode,
}

impl Config {
    /// Create a new configuration.
    pub const fn new(budget: SearchBudget, dedupe: DedupeMode) -> Self {
        Self { budget, dedupe }
    }

    /// Convenience: a step-capped search with full dedupe.
    pub const fn with_max_steps(max_steps: u64) -> Self {
        Self::new(
            SearchBudget {
                max_steps: Some(max_steps),
                deadline: None,
            },
            DedupeMode::Full,
        )
    }

    /// Convenience: a wall-clock bounded search with no step cap.
    pub const fn with_deadline(deadline: Duration) -> Self {
        Self::new(
            SearchBudget {
                max_steps: None,
                deadline: Some(deadline),
            },
            DedupeMode::Full,
        )
    }

    /// A search that runs until it is exhaustive.
    ///
    /// Only use this for inputs known to be small; it disables the
    /// safety net against runaway backtracking.
    pub const fn unbounded() -> Self {
        Self::new(SearchBudget::unbounded(), DedupeMode::Full)
    }

    /// Replace the dedupe mode.
    #[must_use]
    pub const fn dedupe(mut self, dedupe: DedupeMode) -> Self {
        self.dedupe = dedupe;
        self
    }
}

/// Limits on the work a single search invocation may perform.
///
/// A step is one attempt to assign a query vertex to a target vertex.
/// The deadline is measured from the moment the search is created and is
/// polled every [`SearchBudget::DEADLINE_POLL_INTERVAL`] steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchBudget {
    /// Maximum number of candidate assignments, `None` for no cap.
    pub max_steps: Option<u64>,
    /// Maximum wall-clock time, `None` for no deadline.
    pub deadline: Option<Duration>,
}

impl SearchBudget {
    /// How often, in steps, the wall clock is consulted.
    pub const DEADLINE_POLL_INTERVAL: u64 = 256;

    /// A budget with neither a step cap nor a deadline.
    pub const fn unbounded() -> Self {
        Self {
            max_steps: None,
            deadline: None,
        }
    }

    /// True once `steps` exceeds the step cap.
    pub fn steps_exhausted(&self, steps: u64) -> bool {
        self.max_steps.is_some_and(|max| steps > max)
    }

    /// True if the deadline should be checked after `steps` steps.
    pub fn should_poll_clock(&self, steps: u64) -> bool {
        self.deadline.is_some() && steps % Self::DEADLINE_POLL_INTERVAL == 0
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self {
            max_steps: Some(DEFAULT_MAX_STEPS),
            deadline: None,
        }
    }
}

/// Control how matches are deduplicated.
///
/// - Full:
///     Every distinct query-to-target mapping is reported, including
///     mappings that differ only by a symmetry of the query.
/// - TargetSet:
///     Two matches are considered the same if they cover the same SET of
///     target vertices, regardless of which query vertex maps where
///     (collapses permutations and automorphisms of the query).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DedupeMode {
    /// Report every distinct mapping.
    #[default]
    Full,
    /// Collapse matches that cover the same target vertex set.
    TargetSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_step_capped_full_dedupe() {
        let cfg = Config::default();
        assert_eq!(cfg.budget.max_steps, Some(DEFAULT_MAX_STEPS));
        assert_eq!(cfg.budget.deadline, None);
        assert_eq!(cfg.dedupe, DedupeMode::Full);
    }

    #[test]
    fn steps_exhausted_only_past_the_cap() {
        let budget = Config::with_max_steps(10).budget;
        assert!(!budget.steps_exhausted(10));
        assert!(budget.steps_exhausted(11));
        assert!(!SearchBudget::unbounded().steps_exhausted(u64::MAX));
    }

    #[test]
    fn clock_is_polled_only_with_a_deadline() {
        let budget = Config::with_deadline(Duration::from_millis(5)).budget;
        assert!(budget.should_poll_clock(SearchBudget::DEADLINE_POLL_INTERVAL));
        assert!(!budget.should_poll_clock(SearchBudget::DEADLINE_POLL_INTERVAL + 1));
        assert!(!SearchBudget::default().should_poll_clock(0));
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let cfg: Config = serde_json::from_str(r#"{ "dedupe": "TargetSet" }"#).unwrap();
        assert_eq!(cfg.dedupe, DedupeMode::TargetSet);
        assert_eq!(cfg.budget, SearchBudget::default());

        let cfg: Config = serde_json::from_str(r#"{ "budget": { "max_steps": 42 } }"#).unwrap();
        assert_eq!(cfg.budget.max_steps, Some(42));
        assert_eq!(cfg.budget.deadline, None);
    }
}
