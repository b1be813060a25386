//! Subgraph isomorphism, isomorphism and automorphism counting for
//! [`chemgraph_core::Graph`]s.
//!
//! The engine is generic over vertex and edge payloads: a query payload
//! only has to implement [`Matches`] against the target payload (and
//! [`QueryVertex`] for labels). Searches are explicit-stack iterators
//! bounded by the [`SearchBudget`] of the supplied [`Config`]; running
//! out of budget is reported as [`MatchError::SearchBudgetExceeded`] and
//! never as "no match".

mod dedupe;
mod error;
mod index;
mod labels;
mod mapping;
mod matcher;
mod search;
mod state;

pub mod batch;

pub use chemgraph_common::{Config, DedupeMode, SearchBudget};
pub use error::MatchError;
pub use mapping::Mapping;
pub use matcher::Matcher;
pub use search::{Mode, Search};

use chemgraph_core::{Graph, Matches, QueryVertex};

/// True if `a` and `b` are isomorphic.
pub fn isomorphic<QV, QE, TV, TE>(
    a: &Graph<QV, QE>,
    b: &Graph<TV, TE>,
    config: &Config,
) -> Result<bool, MatchError>
where
    QV: Matches<TV> + QueryVertex,
    QE: Matches<TE>,
{
    Ok(find_isomorphism(a, b, config)?.is_some())
}

/// One isomorphism from `a` onto `b`, if any.
pub fn find_isomorphism<QV, QE, TV, TE>(
    a: &Graph<QV, QE>,
    b: &Graph<TV, TE>,
    config: &Config,
) -> Result<Option<Mapping>, MatchError>
where
    QV: Matches<TV> + QueryVertex,
    QE: Matches<TE>,
{
    Matcher::new(a, b, config)?.first(Mode::Isomorphism)
}

/// True if `pattern` embeds into `graph`.
pub fn is_subgraph_isomorphic<QV, QE, TV, TE>(
    graph: &Graph<TV, TE>,
    pattern: &Graph<QV, QE>,
    config: &Config,
) -> Result<bool, MatchError>
where
    QV: Matches<TV> + QueryVertex,
    QE: Matches<TE>,
{
    Ok(find_subgraph_isomorphism(graph, pattern, config)?.is_some())
}

/// First embedding of `pattern` into `graph`, if any.
pub fn find_subgraph_isomorphism<QV, QE, TV, TE>(
    graph: &Graph<TV, TE>,
    pattern: &Graph<QV, QE>,
    config: &Config,
) -> Result<Option<Mapping>, MatchError>
where
    QV: Matches<TV> + QueryVertex,
    QE: Matches<TE>,
{
    Matcher::new(pattern, graph, config)?.first(Mode::Subgraph)
}

/// Lazily enumerate the embeddings of `pattern` into `graph`.
///
/// Mappings go from pattern vertices to graph vertices. Label problems are
/// reported here; budget exhaustion is reported by the iterator.
pub fn find_subgraph_isomorphisms<'q, 't, QV, QE, TV, TE>(
    graph: &'t Graph<TV, TE>,
    pattern: &'q Graph<QV, QE>,
    config: &Config,
) -> Result<Search<'q, 't, QV, QE, TV, TE>, MatchError>
where
    QV: Matches<TV> + QueryVertex,
    QE: Matches<TE>,
{
    Ok(Matcher::new(pattern, graph, config)?.subgraph_matches())
}

/// Number of automorphisms of `graph`, at least 1.
///
/// Always counts every distinct mapping, whatever dedupe mode `config`
/// asks for.
pub fn count_automorphisms<V, E>(graph: &Graph<V, E>, config: &Config) -> Result<u64, MatchError>
where
    V: Matches<V> + QueryVertex,
    E: Matches<E>,
{
    let config = config.clone().dedupe(DedupeMode::Full);
    Matcher::new(graph, graph, &config)?.count(Mode::Isomorphism)
}

#[cfg(test)]
mod tests {
    use chemgraph_core::fixtures;

    use super::*;

    #[test]
    fn path3_has_two_automorphisms() {
        let g = fixtures::path_graph(3);
        assert_eq!(count_automorphisms(&g, &Config::default()), Ok(2));
    }

    #[test]
    fn empty_graph_has_identity_only() {
        let g = Graph::<(), ()>::new();
        assert_eq!(count_automorphisms(&g, &Config::default()), Ok(1));
    }

    #[test]
    fn automorphisms_ignore_target_set_dedupe() {
        let g = fixtures::cycle_graph(4);
        let cfg = Config::default().dedupe(DedupeMode::TargetSet);
        assert_eq!(count_automorphisms(&g, &cfg), Ok(8));
    }
}
