//! Cycle membership, bridges and shortest paths.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::{EdgeId, Graph, GraphError, VertexId};

impl<V, E> Graph<V, E> {
    /// Sum of the degrees of `v`'s neighbors.
    ///
    /// A second-order invariant used to order and prune candidates during
    /// isomorphism search; it carries no chemical meaning.
    pub fn connectivity_value(&self, v: VertexId) -> Result<usize, GraphError> {
        Ok(self
            .adjacent(v)?
            .keys()
            .map(|n| self.adjacency[n].len())
            .sum())
    }

    /// True if removing `v` leaves two of its former neighbors connected.
    pub fn is_vertex_in_cycle(&self, v: VertexId) -> Result<bool, GraphError> {
        let neighbors = self.adjacent(v)?;
        if neighbors.len() < 2 {
            return Ok(false);
        }

        // Flood from each neighbor in turn; reaching a neighbor that an
        // earlier flood already covered closes a cycle through `v`.
        let mut reached: HashSet<VertexId> = HashSet::new();
        for &start in neighbors.keys() {
            if reached.contains(&start) {
                return Ok(true);
            }
            reached.insert(start);
            let mut queue = VecDeque::from([start]);
            while let Some(u) = queue.pop_front() {
                for &n in self.adjacency[&u].keys() {
                    if n != v && reached.insert(n) {
                        queue.push_back(n);
                    }
                }
            }
        }
        Ok(false)
    }

    /// True if `e` lies on some cycle, i.e. is not a bridge.
    pub fn is_edge_in_cycle(&self, e: EdgeId) -> Result<bool, GraphError> {
        let (a, b) = self.edge(e)?.endpoints();
        Ok(self.shortest_path_avoiding(a, b, Some(e)).is_some())
    }

    /// Edges whose removal disconnects their endpoints.
    pub fn find_bridges(&self) -> Vec<EdgeId> {
        self.edges
            .iter()
            .filter(|&(&id, edge)| {
                let (a, b) = edge.endpoints();
                self.shortest_path_avoiding(a, b, Some(id)).is_none()
            })
            .map(|(&id, _)| id)
            .collect()
    }

    /// True if the graph contains at least one cycle.
    pub fn is_cyclic(&self) -> bool {
        self.edge_count() + self.connected_components().len() > self.vertex_count()
    }

    /// Number of edges on a shortest path between `a` and `b`, `None` if
    /// they are disconnected.
    pub fn distance(&self, a: VertexId, b: VertexId) -> Result<Option<usize>, GraphError> {
        self.adjacent(a)?;
        self.adjacent(b)?;
        Ok(self
            .shortest_path_avoiding(a, b, None)
            .map(|path| path.len() - 1))
    }

    /// Breadth-first distances from `source` to every reachable vertex.
    pub fn distances_from(&self, source: VertexId) -> Result<HashMap<VertexId, usize>, GraphError> {
        self.adjacent(source)?;
        let mut dist = HashMap::from([(source, 0)]);
        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            let d = dist[&u];
            for &n in self.adjacency[&u].keys() {
                if !dist.contains_key(&n) {
                    dist.insert(n, d + 1);
                    queue.push_back(n);
                }
            }
        }
        Ok(dist)
    }

    /// Shortest path from `from` to `to` (both inclusive), optionally never
    /// traversing `skip`.
    pub(crate) fn shortest_path_avoiding(
        &self,
        from: VertexId,
        to: VertexId,
        skip: Option<EdgeId>,
    ) -> Option<Vec<VertexId>> {
        let parents = self.bfs_parents(from, skip);
        if !parents.contains_key(&to) {
            return None;
        }
        Some(walk_back(&parents, to))
    }

    /// Breadth-first search tree rooted at `root`, as child-to-parent links.
    /// The root maps to itself.
    pub(crate) fn bfs_parents(
        &self,
        root: VertexId,
        skip: Option<EdgeId>,
    ) -> HashMap<VertexId, VertexId> {
        let mut parents = HashMap::from([(root, root)]);
        let mut queue = VecDeque::from([root]);
        while let Some(u) = queue.pop_front() {
            let Some(adj) = self.adjacency.get(&u) else {
                continue;
            };
            for (&n, &e) in adj {
                if Some(e) == skip || parents.contains_key(&n) {
                    continue;
                }
                parents.insert(n, u);
                queue.push_back(n);
            }
        }
        parents
    }
}

/// Root-to-`to` path through a parent map built by `bfs_parents`.
pub(crate) fn walk_back(parents: &HashMap<VertexId, VertexId>, to: VertexId) -> Vec<VertexId> {
    let mut path = vec![to];
    let mut cur = to;
    while let Some(&p) = parents.get(&cur) {
        if p == cur {
            break;
        }
        path.push(p);
        cur = p;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use crate::fixtures;
    use crate::{Graph, GraphError, VertexId};

    fn path3() -> (Graph<(), ()>, Vec<VertexId>) {
        let g = fixtures::path_graph(3);
        let ids = g.vertex_ids().collect();
        (g, ids)
    }

    #[test]
    fn connectivity_value_sums_neighbor_degrees() {
        let (g, ids) = path3();
        assert_eq!(g.connectivity_value(ids[0]).unwrap(), 2);
        assert_eq!(g.connectivity_value(ids[1]).unwrap(), 2);

        let k4 = fixtures::complete_graph(4);
        for v in k4.vertex_ids() {
            assert_eq!(k4.connectivity_value(v).unwrap(), 9);
        }
    }

    #[test]
    fn vertex_in_cycle() {
        let mol = fixtures::methylcyclopropane();
        let flags: Vec<bool> = mol
            .vertex_ids()
            .map(|v| mol.is_vertex_in_cycle(v).unwrap())
            .collect();
        assert_eq!(flags, vec![true, true, true, false]);

        let (g, ids) = path3();
        assert!(ids.iter().all(|&v| !g.is_vertex_in_cycle(v).unwrap()));
    }

    #[test]
    fn vertex_in_cycle_rejects_foreign_id() {
        let (mut g, ids) = path3();
        g.remove_vertex(ids[2]).unwrap();
        assert_eq!(
            g.is_vertex_in_cycle(ids[2]),
            Err(GraphError::invalid_vertex(ids[2]))
        );
    }

    #[test]
    fn bridges_are_acyclic_edges() {
        let mol = fixtures::methylcyclopropane();
        let bridges = mol.find_bridges();
        assert_eq!(bridges.len(), 1);
        assert!(!mol.is_edge_in_cycle(bridges[0]).unwrap());
        assert!(mol.is_cyclic());
        assert!(!fixtures::propane().is_cyclic());
    }

    #[test]
    fn distances() {
        let ring = fixtures::cycle_graph(6);
        let ids: Vec<_> = ring.vertex_ids().collect();
        assert_eq!(ring.distance(ids[0], ids[3]).unwrap(), Some(3));
        assert_eq!(ring.distance(ids[0], ids[5]).unwrap(), Some(1));
        assert_eq!(ring.distance(ids[2], ids[2]).unwrap(), Some(0));

        let split = ring.merge(&fixtures::path_graph(2));
        let ids: Vec<_> = split.vertex_ids().collect();
        assert_eq!(split.distance(ids[0], ids[6]).unwrap(), None);
        assert_eq!(split.distances_from(ids[0]).unwrap().len(), 6);
    }
}
