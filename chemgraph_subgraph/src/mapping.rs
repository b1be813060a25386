use std::fmt;

use indexmap::IndexMap;

use chemgraph_core::VertexId;

/// A complete query -> target vertex assignment produced by a search.
///
/// Pairs are kept in query insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mapping {
    pairs: IndexMap<VertexId, VertexId>,
}

impl Mapping {
    pub(crate) fn from_pairs(pairs: impl IntoIterator<Item = (VertexId, VertexId)>) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    /// Image of a query vertex.
    pub fn get(&self, query: VertexId) -> Option<VertexId> {
        self.pairs.get(&query).copied()
    }

    /// `(query, target)` pairs in query order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.pairs.iter().map(|(&q, &t)| (q, t))
    }

    /// Number of mapped query vertices.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True for the mapping of an empty query.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Target vertices covered by the mapping, sorted.
    pub fn target_vertices(&self) -> Vec<VertexId> {
        let mut targets: Vec<VertexId> = self.pairs.values().copied().collect();
        targets.sort_unstable();
        targets
    }

    /// The target -> query direction of this mapping.
    pub fn inverse(&self) -> Mapping {
        Self::from_pairs(self.pairs.iter().map(|(&q, &t)| (t, q)))
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (q, t)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} -> {}", q.raw(), t.raw())?;
        }
        write!(f, "}}")
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a VertexId, &'a VertexId);
    type IntoIter = indexmap::map::Iter<'a, VertexId, VertexId>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
