//! Smallest set of smallest rings.
//!
//! The ring count of a graph with `V` vertices, `E` edges and `C`
//! components is `E - V + C`. Candidate rings are the shortest cycle
//! through each non-bridge edge together with the Horton cycles
//! `P(v, x) + (x, y) + P(y, v)`; they are taken smallest first whenever
//! they are linearly independent (over GF(2), on edge incidence) of the
//! rings already chosen, which yields a minimum cycle basis. Fundamental
//! cycles back the selection up if it ever falls short of the ring count.

use std::collections::{BTreeMap, HashMap, HashSet};

use itertools::Itertools;
use tracing::debug;

use super::cycle::walk_back;
use crate::{EdgeId, Graph, VertexId};

/// A ring as a closed walk; the last vertex is bonded to the first.
pub type Ring = Vec<VertexId>;

impl<V, E> Graph<V, E> {
    /// Number of independent cycles.
    pub fn cycle_rank(&self) -> usize {
        (self.edge_count() + self.connected_components().len()).saturating_sub(self.vertex_count())
    }

    /// Smallest set of smallest rings.
    pub fn sssr(&self) -> Vec<Ring> {
        let required = self.cycle_rank();
        if required == 0 {
            return Vec::new();
        }

        let edge_bits: HashMap<EdgeId, usize> = self
            .edges
            .keys()
            .enumerate()
            .map(|(i, &e)| (e, i))
            .collect();
        let mut basis = CycleBasis::new(edge_bits.len());
        let mut seen: HashSet<Vec<usize>> = HashSet::new();
        let mut rings = Vec::new();

        // Horton candidates contain a minimum cycle basis; the shortest cycle
        // through each edge is added so the common cases are found early.
        // Both go through one length-sorted greedy pass.
        let mut candidates = self.edge_cycle_candidates();
        candidates.extend(self.horton_candidates());
        self.select_independent(candidates, &edge_bits, &mut seen, &mut basis, &mut rings, required);

        // Fundamental cycles of a spanning forest always span the cycle space.
        if rings.len() < required {
            debug!(
                "sssr: {} of {} rings from horton candidates, adding fundamental cycles",
                rings.len(),
                required
            );
            let fundamental = self.fundamental_cycles();
            self.select_independent(fundamental, &edge_bits, &mut seen, &mut basis, &mut rings, required);
        }

        debug!("sssr: found {} rings (rank {})", rings.len(), required);
        rings
    }

    /// Shortest cycle through each non-bridge edge.
    fn edge_cycle_candidates(&self) -> Vec<Ring> {
        self.edges
            .iter()
            .filter_map(|(&id, edge)| {
                let (a, b) = edge.endpoints();
                self.shortest_path_avoiding(a, b, Some(id))
            })
            .collect()
    }

    /// `P(v, x) + (x, y) + P(y, v)` for every vertex `v` and edge `(x, y)`
    /// where the two tree paths meet only at `v`.
    fn horton_candidates(&self) -> Vec<Ring> {
        let mut out = Vec::new();
        for root in self.vertex_ids() {
            let parents = self.bfs_parents(root, None);
            for edge in self.edges.values() {
                let (x, y) = edge.endpoints();
                if !parents.contains_key(&x) || !parents.contains_key(&y) {
                    continue;
                }
                let px = walk_back(&parents, x);
                let py = walk_back(&parents, y);
                let px_set: HashSet<VertexId> = px.iter().copied().collect();
                if py.iter().skip(1).any(|v| px_set.contains(v)) {
                    continue;
                }
                let ring: Ring = px.into_iter().chain(py.into_iter().skip(1).rev()).collect();
                if ring.len() >= 3 {
                    out.push(ring);
                }
            }
        }
        out
    }

    /// One cycle per non-tree edge of a breadth-first spanning forest.
    fn fundamental_cycles(&self) -> Vec<Ring> {
        let mut out = Vec::new();
        for component in self.connected_components() {
            let parents = self.bfs_parents(component[0], None);
            for edge in self.edges.values() {
                let (x, y) = edge.endpoints();
                if !parents.contains_key(&x) || parents[&x] == y || parents[&y] == x {
                    continue;
                }
                let px = walk_back(&parents, x);
                let py = walk_back(&parents, y);
                let shared = px.iter().zip(&py).take_while(|(a, b)| a == b).count();
                let ring: Ring = px[shared - 1..]
                    .iter()
                    .copied()
                    .chain(py[shared..].iter().rev().copied())
                    .collect();
                out.push(ring);
            }
        }
        out
    }

    fn select_independent(
        &self,
        mut candidates: Vec<Ring>,
        edge_bits: &HashMap<EdgeId, usize>,
        seen: &mut HashSet<Vec<usize>>,
        basis: &mut CycleBasis,
        rings: &mut Vec<Ring>,
        required: usize,
    ) {
        candidates.sort_by_key(Vec::len);
        for ring in candidates {
            if rings.len() == required {
                return;
            }
            let Some(bits) = self.ring_edges(&ring, edge_bits) else {
                continue;
            };
            if !seen.insert(bits.clone()) {
                continue;
            }
            if basis.insert(&bits) {
                rings.push(ring);
            }
        }
    }

    /// Sorted edge positions of a closed walk, `None` if a step is not an edge.
    fn ring_edges(&self, ring: &[VertexId], edge_bits: &HashMap<EdgeId, usize>) -> Option<Vec<usize>> {
        ring.iter()
            .circular_tuple_windows()
            .map(|(&a, &b)| self.edge_between(a, b).map(|e| edge_bits[&e]))
            .collect::<Option<Vec<_>>>()
            .map(|bits| bits.into_iter().sorted_unstable().collect())
    }
}

/// Row-reduced GF(2) basis keyed by each row's lowest set bit.
struct CycleBasis {
    words: usize,
    rows: BTreeMap<usize, Vec<u64>>,
}

impl CycleBasis {
    fn new(edge_count: usize) -> Self {
        Self {
            words: edge_count.div_ceil(64),
            rows: BTreeMap::new(),
        }
    }

    /// Reduce `bits` against the basis; keep and return true if independent.
    fn insert(&mut self, bits: &[usize]) -> bool {
        let mut row = vec![0u64; self.words];
        for &b in bits {
            row[b / 64] ^= 1u64 << (b % 64);
        }
        while let Some(pivot) = lowest_bit(&row) {
            match self.rows.get(&pivot) {
                Some(existing) => {
                    for (w, x) in row.iter_mut().zip(existing) {
                        *w ^= x;
                    }
                }
                None => {
                    self.rows.insert(pivot, row);
                    return true;
                }
            }
        }
        false
    }
}

fn lowest_bit(row: &[u64]) -> Option<usize> {
    row.iter()
        .enumerate()
        .find(|(_, w)| **w != 0)
        .map(|(i, w)| i * 64 + w.trailing_zeros() as usize)
}
