#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use std::collections::HashSet;

use chemgraph_core::{Graph, VertexId};
use quickcheck::{Arbitrary, Gen, quickcheck};

/// Recipe for a small random graph with labelled vertices and edges.
#[derive(Clone, Debug)]
struct GraphSpec {
    vertex_labels: Vec<u8>,
    edges: Vec<(usize, usize, u8)>,
}

impl Arbitrary for GraphSpec {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = usize::arbitrary(g) % 9;
        let vertex_labels = (0..n).map(|_| u8::arbitrary(g) % 3).collect();
        let edge_count = if n < 2 { 0 } else { usize::arbitrary(g) % (n * 2) };
        let edges = (0..edge_count)
            .map(|_| (usize::arbitrary(g) % n, usize::arbitrary(g) % n, u8::arbitrary(g) % 2))
            .collect();
        Self {
            vertex_labels,
            edges,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let labels = self.vertex_labels.clone();
        Box::new(self.edges.shrink().map(move |edges| Self {
            vertex_labels: labels.clone(),
            edges,
        }))
    }
}

impl GraphSpec {
    /// Build the graph; loops and duplicate edges in the recipe are skipped.
    fn build(&self) -> (Graph<u8, u8>, Vec<VertexId>) {
        let mut g = Graph::new();
        let ids: Vec<VertexId> = self.vertex_labels.iter().map(|&l| g.add_vertex(l)).collect();
        for &(a, b, label) in &self.edges {
            let _ = g.add_edge(ids[a], ids[b], label);
        }
        (g, ids)
    }
}

quickcheck! {
    fn prop_copy_preserves_structure(recipe: GraphSpec) -> bool {
        let (g, _) = recipe.build();
        let (copy, mapping) = g.copy();
        copy.is_consistent()
            && copy.vertex_count() == g.vertex_count()
            && copy.edge_count() == g.edge_count()
            && g.edges().all(|(_, e)| {
                let (a, b) = e.endpoints();
                copy.edge_between(mapping[&a], mapping[&b])
                    .and_then(|ce| copy.edge(ce).ok())
                    .is_some_and(|ce| ce.attrs() == e.attrs())
            })
            && g.vertices().all(|(v, l)| copy.vertex(mapping[&v]) == Ok(l))
    }

    fn prop_mutating_copy_leaves_source(recipe: GraphSpec) -> bool {
        let (g, _) = recipe.build();
        let before: Vec<(VertexId, u8)> = g.vertices().map(|(v, l)| (v, *l)).collect();
        let edges_before = g.edge_count();
        let (mut copy, _) = g.copy();
        let ids: Vec<VertexId> = copy.vertex_ids().collect();
        for v in ids {
            *copy.vertex_mut(v).unwrap() = 99;
            copy.remove_vertex(v).unwrap();
        }
        let after: Vec<(VertexId, u8)> = g.vertices().map(|(v, l)| (v, *l)).collect();
        copy.is_empty() && before == after && g.edge_count() == edges_before
    }

    fn prop_merge_split_partition(a: GraphSpec, b: GraphSpec) -> bool {
        let (ga, _) = a.build();
        let (gb, _) = b.build();
        let merged = ga.merge(&gb);
        let parts = merged.split();
        let expected = ga.connected_components().len() + gb.connected_components().len();
        parts.len() == expected
            && parts.iter().map(Graph::vertex_count).sum::<usize>() == merged.vertex_count()
            && parts.iter().map(Graph::edge_count).sum::<usize>() == merged.edge_count()
            && parts.iter().all(|p| p.is_connected() && p.is_consistent())
    }

    fn prop_remove_vertex_drops_exactly_incident(recipe: GraphSpec, pick: usize) -> bool {
        let (mut g, ids) = recipe.build();
        if ids.is_empty() {
            return true;
        }
        let v = ids[pick % ids.len()];
        let degree = g.degree(v).unwrap();
        let edges_before = g.edge_count();
        g.remove_vertex(v).unwrap();
        g.is_consistent()
            && g.edge_count() == edges_before - degree
            && g.vertex_ids().all(|u| g.neighbors(u).unwrap().all(|n| n != v))
    }

    fn prop_sssr_reaches_cycle_rank(recipe: GraphSpec) -> bool {
        let (g, _) = recipe.build();
        let rings = g.sssr();
        rings.len() == g.cycle_rank()
            && rings.iter().all(|ring| {
                let distinct: HashSet<_> = ring.iter().collect();
                distinct.len() == ring.len()
                    && ring.len() >= 3
                    && (0..ring.len()).all(|i| g.edge_between(ring[i], ring[(i + 1) % ring.len()]).is_some())
            })
    }

    fn prop_vertex_in_cycle_agrees_with_rings(recipe: GraphSpec) -> bool {
        let (g, _) = recipe.build();
        let on_ring: HashSet<VertexId> = g.sssr().into_iter().flatten().collect();
        let agrees = g.vertex_ids().all(|v| g.is_vertex_in_cycle(v).unwrap() == on_ring.contains(&v));
        agrees
    }
}
