use std::collections::{HashMap, VecDeque};
use std::sync::OnceLock;

use itertools::Itertools;

use chemgraph_core::{Graph, Matches, VertexId};

pub(crate) type NodeId = u32;

/// Per-vertex structural invariants compared during pruning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Invariants {
    pub degree: usize,
    pub connectivity: usize,
    pub in_cycle: bool,
}

/// Read-only, contiguous view of a graph for the search kernel.
///
/// Vertices are renumbered `0..len` in insertion order so the search can
/// use dense ids; payloads are borrowed from the graph.
#[derive(Debug)]
pub(crate) struct Index<'g, V, E> {
    graph: &'g Graph<V, E>,
    ids: Vec<VertexId>,
    attrs: Vec<&'g V>,
    neighbors: Vec<Vec<(NodeId, &'g E)>>,
    edges: HashMap<(NodeId, NodeId), &'g E>,
    invariants: Vec<Invariants>,
    /// Breadth-first distances from each node, filled on first use.
    distances: Vec<OnceLock<Vec<Option<usize>>>>,
}

impl<'g, V, E> Index<'g, V, E> {
    pub(crate) fn build(graph: &'g Graph<V, E>) -> Self {
        let mut ids = Vec::with_capacity(graph.vertex_count());
        let mut attrs = Vec::with_capacity(graph.vertex_count());
        let mut node_of: HashMap<VertexId, NodeId> = HashMap::new();

        for (node, (id, v)) in graph.vertices().enumerate() {
            ids.push(id);
            attrs.push(v);
            node_of.insert(id, node as NodeId);
        }

        let mut neighbors: Vec<Vec<(NodeId, &'g E)>> = vec![Vec::new(); ids.len()];
        let mut edges: HashMap<(NodeId, NodeId), &'g E> = HashMap::new();
        for (_, edge) in graph.edges() {
            let (a, b) = edge.endpoints();
            let (a, b) = (node_of[&a], node_of[&b]);
            neighbors[a as usize].push((b, edge.attrs()));
            neighbors[b as usize].push((a, edge.attrs()));
            edges.insert((a, b), edge.attrs());
            edges.insert((b, a), edge.attrs());
        }

        let invariants = ids
            .iter()
            .enumerate()
            .map(|(node, &id)| Invariants {
                degree: neighbors[node].len(),
                connectivity: graph.connectivity_value(id).unwrap_or(0),
                in_cycle: graph.is_vertex_in_cycle(id).unwrap_or(false),
            })
            .collect();

        let distances = (0..ids.len()).map(|_| OnceLock::new()).collect();

        Index {
            graph,
            distances,
            ids,
            attrs,
            neighbors,
            edges,
            invariants,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn nodes(&self) -> std::ops::Range<NodeId> {
        0..self.ids.len() as NodeId
    }

    pub(crate) fn vertex_id(&self, n: NodeId) -> VertexId {
        self.ids[n as usize]
    }

    pub(crate) fn attrs(&self, n: NodeId) -> &'g V {
        self.attrs[n as usize]
    }

    pub(crate) fn neighbors(&self, n: NodeId) -> &[(NodeId, &'g E)] {
        &self.neighbors[n as usize]
    }

    pub(crate) fn edge(&self, a: NodeId, b: NodeId) -> Option<&'g E> {
        self.edges.get(&(a, b)).copied()
    }

    pub(crate) fn invariants(&self, n: NodeId) -> Invariants {
        self.invariants[n as usize]
    }

    /// Sorted multiset of vertex invariants; equal for isomorphic graphs.
    pub(crate) fn invariant_profile(&self) -> Vec<Invariants> {
        self.invariants.iter().copied().sorted_unstable().collect()
    }

    /// True if `query` accepts node `n`: its payload matches and its ring
    /// membership, read from this graph's structure, meets any requirement.
    pub(crate) fn accepts<Q>(&self, query: &Q, n: NodeId) -> bool
    where
        Q: Matches<V>,
    {
        query
            .required_ring_membership()
            .is_none_or(|required| required == self.invariants(n).in_cycle)
            && query.matches(self.attrs(n))
    }

    /// Shortest-path distance, `None` across components.
    pub(crate) fn distance(&self, a: NodeId, b: NodeId) -> Option<usize> {
        self.distances[a as usize].get_or_init(|| self.distances_from(a))[b as usize]
    }

    fn distances_from(&self, source: NodeId) -> Vec<Option<usize>> {
        let mut dist = vec![None; self.len()];
        dist[source as usize] = Some(0);
        let mut queue = VecDeque::from([(source, 0)]);
        while let Some((n, d)) = queue.pop_front() {
            for &(m, _) in self.neighbors(n) {
                if dist[m as usize].is_none() {
                    dist[m as usize] = Some(d + 1);
                    queue.push_back((m, d + 1));
                }
            }
        }
        dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chemgraph_core::fixtures;

    #[test]
    fn index_is_dense_and_symmetric() {
        let mol = fixtures::methylcyclopropane();
        let idx = Index::build(&mol);
        assert_eq!(idx.len(), 4);
        for a in idx.nodes() {
            for &(b, _) in idx.neighbors(a) {
                assert!(idx.edge(b, a).is_some());
            }
        }
        assert_eq!(idx.vertex_id(0), mol.vertex_ids().next().unwrap());
    }

    #[test]
    fn invariants_reflect_structure() {
        let mol = fixtures::methylcyclopropane();
        let idx = Index::build(&mol);
        let anchor = idx.invariants(0);
        assert_eq!(anchor.degree, 3);
        assert!(anchor.in_cycle);
        let methyl = idx.invariants(3);
        assert_eq!(methyl.degree, 1);
        assert_eq!(methyl.connectivity, 3);
        assert!(!methyl.in_cycle);
    }

    #[test]
    fn invariant_profile_ignores_insertion_order() {
        let a = fixtures::ethanol();
        let mut b = chemgraph_core::Molecule::new();
        let o = b.add_vertex(chemgraph_core::Atom::new(chemgraph_core::AtomType::Os));
        let c1 = b.add_vertex(chemgraph_core::Atom::new(chemgraph_core::AtomType::Cs));
        let c2 = b.add_vertex(chemgraph_core::Atom::new(chemgraph_core::AtomType::Cs));
        b.add_edge(o, c1, chemgraph_core::Bond::single()).unwrap();
        b.add_edge(c1, c2, chemgraph_core::Bond::single()).unwrap();
        assert_eq!(
            Index::build(&a).invariant_profile(),
            Index::build(&b).invariant_profile()
        );
    }

    #[test]
    fn cached_distances_agree_with_graph() {
        let mol = fixtures::naphthalene().merge(&fixtures::ethanol());
        let idx = Index::build(&mol);
        for a in idx.nodes() {
            for b in idx.nodes() {
                let expected = mol.distance(idx.vertex_id(a), idx.vertex_id(b)).unwrap();
                assert_eq!(idx.distance(a, b), expected);
                // Second lookup is served from the cache.
                assert_eq!(idx.distance(a, b), expected);
            }
        }
        assert_eq!(idx.distance(0, idx.len() as NodeId - 1), None);
    }

    #[test]
    fn ring_requirement_reads_structure() {
        use chemgraph_core::{AtomPattern, AtomType};

        let mol = fixtures::methylcyclopropane();
        let idx = Index::build(&mol);
        let ring_carbon = AtomPattern::of([AtomType::C]).in_ring(true);
        let chain_carbon = AtomPattern::of([AtomType::C]).in_ring(false);
        assert!(mol.vertices().all(|(_, a)| !a.in_ring));
        assert!(idx.accepts(&ring_carbon, 0));
        assert!(!idx.accepts(&ring_carbon, 3));
        assert!(!idx.accepts(&chain_carbon, 0));
        assert!(idx.accepts(&chain_carbon, 3));
    }
}
