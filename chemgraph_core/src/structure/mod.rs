//! Structural operations on [`Graph`]: copy, merge, split and components.
//!
//! Cycle queries live in [`cycle`] and ring perception in [`sssr`].

mod cycle;
mod sssr;

pub use sssr::Ring;

use std::collections::{HashMap, HashSet, VecDeque};

use crate::{Graph, VertexId};

impl<V, E> Graph<V, E> {
    /// Vertex sets of the connected components, each in breadth-first order
    /// from its earliest-inserted vertex.
    pub fn connected_components(&self) -> Vec<Vec<VertexId>> {
        let mut seen: HashSet<VertexId> = HashSet::with_capacity(self.vertex_count());
        let mut components = Vec::new();

        for start in self.vertex_ids() {
            if !seen.insert(start) {
                continue;
            }
            let mut component = vec![start];
            let mut queue = VecDeque::from([start]);
            while let Some(v) = queue.pop_front() {
                for &n in self.adjacency[&v].keys() {
                    if seen.insert(n) {
                        component.push(n);
                        queue.push_back(n);
                    }
                }
            }
            components.push(component);
        }
        components
    }

    /// True if the graph has at most one component.
    pub fn is_connected(&self) -> bool {
        self.connected_components().len() <= 1
    }
}

impl<V: Clone, E: Clone> Graph<V, E> {
    /// Deep copy with fresh identities.
    ///
    /// Returns the copy and the old-to-new vertex correspondence. The copy
    /// shares no state with `self`.
    pub fn copy(&self) -> (Self, HashMap<VertexId, VertexId>) {
        let mut out = Self::new();
        let mapping = out.absorb(self, self.vertex_ids());
        (out, mapping)
    }

    /// Disjoint union of `self` and `other` with fresh identities.
    ///
    /// Vertices of `self` come first, in order, followed by those of `other`.
    pub fn merge(&self, other: &Self) -> Self {
        let mut out = Self::new();
        out.absorb(self, self.vertex_ids());
        out.absorb(other, other.vertex_ids());
        out
    }

    /// One graph per connected component, each with fresh identities.
    pub fn split(&self) -> Vec<Self> {
        self.split_with_mapping()
            .into_iter()
            .map(|(graph, _)| graph)
            .collect()
    }

    /// Like [`Graph::split`], also returning each component's old-to-new
    /// vertex correspondence.
    pub fn split_with_mapping(&self) -> Vec<(Self, HashMap<VertexId, VertexId>)> {
        self.connected_components()
            .into_iter()
            .map(|component| {
                let mut out = Self::new();
                let mapping = out.absorb(self, component);
                (out, mapping)
            })
            .collect()
    }

    /// Copy `vertices` of `source` and every edge among them into `self`.
    fn absorb(
        &mut self,
        source: &Self,
        vertices: impl IntoIterator<Item = VertexId>,
    ) -> HashMap<VertexId, VertexId> {
        let mapping: HashMap<VertexId, VertexId> = vertices
            .into_iter()
            .map(|old| (old, self.add_vertex(source.vertices[&old].clone())))
            .collect();

        for edge in source.edges.values() {
            let (a, b) = edge.endpoints();
            if let (Some(&na), Some(&nb)) = (mapping.get(&a), mapping.get(&b)) {
                self.insert_edge(na, nb, edge.attrs().clone());
            }
        }
        mapping
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures;
    use crate::{Atom, AtomType};

    #[test]
    fn copy_is_independent() {
        let mol = fixtures::propane();
        let (mut copy, mapping) = mol.copy();
        assert_eq!(mapping.len(), mol.vertex_count());
        assert_eq!(copy.edge_count(), mol.edge_count());

        let first = mol.vertex_ids().next().unwrap();
        copy.vertex_mut(mapping[&first]).unwrap().atom_type = AtomType::Os;
        copy.remove_vertex(mapping[&first]).unwrap();

        assert_eq!(mol.vertex(first).unwrap().atom_type, AtomType::Cs);
        assert_eq!(mol.vertex_count(), 3);
        assert!(copy.is_consistent());
    }

    #[test]
    fn copy_preserves_adjacency_through_mapping() {
        let mol = fixtures::methylcyclopropane();
        let (copy, mapping) = mol.copy();
        for (_, edge) in mol.edges() {
            let (a, b) = edge.endpoints();
            let e = copy.edge_between(mapping[&a], mapping[&b]).unwrap();
            assert_eq!(copy.edge(e).unwrap().attrs(), edge.attrs());
        }
    }

    #[test]
    fn merge_then_split() {
        let ethane = fixtures::ethane();
        let cyclopropane = fixtures::cyclopropane();
        let merged = ethane.merge(&cyclopropane);
        assert_eq!(merged.vertex_count(), 5);
        assert_eq!(merged.edge_count(), 4);
        assert!(!merged.is_connected());

        let parts = merged.split();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].vertex_count(), 2);
        assert_eq!(parts[1].vertex_count(), 3);
        assert_eq!(parts[1].edge_count(), 3);
        assert!(parts.iter().all(|p| p.is_consistent()));
    }

    #[test]
    fn split_reports_isolated_vertex() {
        let mut mol = fixtures::ethane();
        let lone = mol.add_vertex(Atom::new(AtomType::H));
        let parts = mol.split_with_mapping();
        assert_eq!(parts.len(), 2);
        let (lone_graph, lone_map) = &parts[1];
        assert_eq!(lone_graph.vertex_count(), 1);
        assert!(lone_map.contains_key(&lone));
    }
}
