use std::sync::Arc;

use chemgraph_common::Config;
use chemgraph_core::{Graph, Matches, QueryVertex};

use crate::error::MatchError;
use crate::index::Index;
use crate::labels::LabelGroups;
use crate::mapping::Mapping;
use crate::search::{Mode, Search};

/// A prepared query/target pair.
///
/// Building the indexes and validating labels happens once; every search
/// started from the matcher shares them and owns only its own state.
pub struct Matcher<'q, 't, QV, QE, TV, TE> {
    query: Arc<Index<'q, QV, QE>>,
    target: Arc<Index<'t, TV, TE>>,
    labels: Arc<LabelGroups>,
    config: Config,
}

impl<'q, 't, QV, QE, TV, TE> Matcher<'q, 't, QV, QE, TV, TE>
where
    QV: Matches<TV> + QueryVertex,
    QE: Matches<TE>,
{
    /// Index both graphs.
    ///
    /// Fails with [`MatchError::MalformedPattern`] if two query vertices
    /// share a label but can never match the same kind of target vertex.
    pub fn new(
        query: &'q Graph<QV, QE>,
        target: &'t Graph<TV, TE>,
        config: &Config,
    ) -> Result<Self, MatchError> {
        let query = Index::build(query);
        let labels = LabelGroups::build(&query)?;
        Ok(Matcher {
            query: Arc::new(query),
            target: Arc::new(Index::build(target)),
            labels: Arc::new(labels),
            config: config.clone(),
        })
    }

    /// Start a new search in the given mode.
    pub fn search(&self, mode: Mode) -> Search<'q, 't, QV, QE, TV, TE> {
        Search::new(
            Arc::clone(&self.query),
            Arc::clone(&self.target),
            Arc::clone(&self.labels),
            mode,
            &self.config,
        )
    }

    /// Enumerate embeddings of the query in the target.
    pub fn subgraph_matches(&self) -> Search<'q, 't, QV, QE, TV, TE> {
        self.search(Mode::Subgraph)
    }

    /// Enumerate isomorphisms between query and target.
    pub fn isomorphisms(&self) -> Search<'q, 't, QV, QE, TV, TE> {
        self.search(Mode::Isomorphism)
    }

    /// First mapping in `mode`, if any.
    pub fn first(&self, mode: Mode) -> Result<Option<Mapping>, MatchError> {
        self.search(mode).next().transpose()
    }

    /// Number of mappings in `mode`, after dedupe.
    pub fn count(&self, mode: Mode) -> Result<u64, MatchError> {
        let mut n = 0;
        for mapping in self.search(mode) {
            mapping?;
            n += 1;
        }
        Ok(n)
    }

    /// The configuration searches are started with.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use chemgraph_core::fixtures;

    use super::*;

    #[test]
    fn matcher_is_reusable() {
        let pattern = fixtures::three_ring_pattern();
        let target = fixtures::methylcyclopropane();
        let matcher = Matcher::new(&pattern, &target, &Config::default()).unwrap();
        assert_eq!(matcher.count(Mode::Subgraph).unwrap(), 6);
        assert_eq!(matcher.count(Mode::Subgraph).unwrap(), 6);
        assert!(matcher.first(Mode::Isomorphism).unwrap().is_none());
    }

    #[test]
    fn first_mapping_covers_query() {
        let pattern = fixtures::wildcard_clique(3);
        let target = fixtures::carbon_clique(5);
        let matcher = Matcher::new(&pattern, &target, &Config::default()).unwrap();
        let m = matcher.first(Mode::Subgraph).unwrap().unwrap();
        assert_eq!(m.len(), 3);
        for (q, _) in m.iter() {
            assert!(pattern.has_vertex(q));
        }
    }

    #[test]
    fn isomorphisms_are_bijections() {
        use std::collections::HashSet;

        use chemgraph_common::DedupeMode;

        let a = fixtures::cycle_graph(5);
        let b = fixtures::cycle_graph(5);
        let cfg = Config::default().dedupe(DedupeMode::Full);
        let matcher = Matcher::new(&a, &b, &cfg).unwrap();
        let all: Vec<Mapping> = matcher.isomorphisms().map(Result::unwrap).collect();
        assert_eq!(all.len(), 10);
        for m in &all {
            let images: HashSet<_> = m.iter().map(|(_, t)| t).collect();
            assert_eq!(images.len(), 5);
            assert!(images.iter().all(|&t| b.has_vertex(t)));
        }
        let longer = fixtures::cycle_graph(6);
        let matcher = Matcher::new(&a, &longer, &cfg).unwrap();
        assert_eq!(matcher.isomorphisms().count(), 0);
    }
}
