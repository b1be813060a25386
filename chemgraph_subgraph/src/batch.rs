//! One pattern against many targets.
//!
//! Every target gets its own independent search; the pattern and targets
//! are only borrowed. With the `rayon` feature the targets are processed
//! in parallel.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use chemgraph_common::Config;
use chemgraph_core::{Graph, Matches, QueryVertex};

use crate::error::MatchError;
use crate::matcher::Matcher;
use crate::search::Mode;

/// Subgraph existence test of `pattern` in each of `targets`, in order.
pub fn match_many<QV, QE, TV, TE>(
    targets: &[Graph<TV, TE>],
    pattern: &Graph<QV, QE>,
    config: &Config,
) -> Vec<Result<bool, MatchError>>
where
    QV: Matches<TV> + QueryVertex + Sync,
    QE: Matches<TE> + Sync,
    TV: Sync,
    TE: Sync,
{
    #[cfg(feature = "rayon")]
    let targets_iter = targets.par_iter();

    #[cfg(not(feature = "rayon"))]
    let targets_iter = targets.iter();

    targets_iter
        .map(|target| {
            Matcher::new(pattern, target, config)?
                .first(Mode::Subgraph)
                .map(|m| m.is_some())
        })
        .collect()
}

/// Number of (deduplicated) embeddings of `pattern` in each of `targets`.
pub fn count_matches_many<QV, QE, TV, TE>(
    targets: &[Graph<TV, TE>],
    pattern: &Graph<QV, QE>,
    config: &Config,
) -> Vec<Result<u64, MatchError>>
where
    QV: Matches<TV> + QueryVertex + Sync,
    QE: Matches<TE> + Sync,
    TV: Sync,
    TE: Sync,
{
    #[cfg(feature = "rayon")]
    let targets_iter = targets.par_iter();

    #[cfg(not(feature = "rayon"))]
    let targets_iter = targets.iter();

    targets_iter
        .map(|target| Matcher::new(pattern, target, config)?.count(Mode::Subgraph))
        .collect()
}
