use std::collections::{HashMap, HashSet};

use crate::index::NodeId;

/// Partial injective mapping from query nodes to target nodes.
///
/// Owned by exactly one search; `map` and `unmap` update the mapping and
/// the used-target set together.
#[derive(Clone, Debug, Default)]
pub(crate) struct State {
    // Query node -> target node
    mapping: HashMap<NodeId, NodeId>,
    used_t: HashSet<NodeId>,

    query_count: usize,
}

impl State {
    pub(crate) fn new(query_count: usize) -> Self {
        State {
            mapping: HashMap::with_capacity(query_count),
            used_t: HashSet::with_capacity(query_count),
            query_count,
        }
    }

    pub(crate) fn is_mapped(&self, q: NodeId) -> bool {
        self.mapping.contains_key(&q)
    }

    pub(crate) fn mapped_to(&self, q: NodeId) -> Option<NodeId> {
        self.mapping.get(&q).copied()
    }

    pub(crate) fn is_used_target(&self, t: NodeId) -> bool {
        self.used_t.contains(&t)
    }

    #[contracts::debug_requires(!self.is_mapped(q))]
    #[contracts::debug_requires(!self.is_used_target(t))]
    #[contracts::debug_ensures(self.is_mapped(q) && self.is_used_target(t))]
    #[contracts::debug_ensures(self.mapping.len() == self.used_t.len())]
    pub(crate) fn map(&mut self, q: NodeId, t: NodeId) {
        self.mapping.insert(q, t);
        self.used_t.insert(t);
    }

    #[contracts::debug_requires(self.mapped_to(q) == Some(t))]
    #[contracts::debug_ensures(!self.is_mapped(q) && !self.is_used_target(t))]
    #[contracts::debug_ensures(self.mapping.len() == self.used_t.len())]
    pub(crate) fn unmap(&mut self, q: NodeId, t: NodeId) {
        self.mapping.remove(&q);
        self.used_t.remove(&t);
    }

    pub(crate) fn clear(&mut self) {
        self.mapping.clear();
        self.used_t.clear();
    }

    pub(crate) fn done(&self) -> bool {
        self.mapping.len() == self.query_count
    }

    /// Mapped pairs sorted by query node.
    pub(crate) fn pairs(&self) -> Vec<(NodeId, NodeId)> {
        let mut pairs: Vec<(NodeId, NodeId)> = self.mapping.iter().map(|(&q, &t)| (q, t)).collect();
        pairs.sort_unstable();
        pairs
    }
}
