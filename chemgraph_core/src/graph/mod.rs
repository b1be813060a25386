mod id;

pub use id::{EdgeId, ElementRef, Label, VertexId};

use indexmap::IndexMap;

use crate::GraphError;

/// An edge joining two vertices of the same graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<E> {
    endpoints: (VertexId, VertexId),
    attrs: E,
}

impl<E> Edge<E> {
    /// The two endpoints, in the order they were given on insertion.
    pub const fn endpoints(&self) -> (VertexId, VertexId) {
        self.endpoints
    }

    /// The edge payload.
    pub const fn attrs(&self) -> &E {
        &self.attrs
    }

    /// The endpoint opposite `v`, or `None` if `v` is not an endpoint.
    pub fn other(&self, v: VertexId) -> Option<VertexId> {
        match self.endpoints {
            (a, b) if a == v => Some(b),
            (a, b) if b == v => Some(a),
            _ => None,
        }
    }
}

/// An undirected simple graph with attribute payloads on vertices and edges.
///
/// Vertices and edges live in flat, insertion-ordered arenas keyed by id.
/// The adjacency index maps each vertex to its neighbors and the connecting
/// edge; every mutation keeps it consistent with the edge arena before
/// returning. Ids are never reused within one graph.
#[derive(Debug)]
pub struct Graph<V, E> {
    pub(crate) vertices: IndexMap<VertexId, V>,
    pub(crate) edges: IndexMap<EdgeId, Edge<E>>,
    pub(crate) adjacency: IndexMap<VertexId, IndexMap<VertexId, EdgeId>>,
    next_vertex: u32,
    next_edge: u32,
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Graph<V, E> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
            adjacency: IndexMap::new(),
            next_vertex: 0,
            next_edge: 0,
        }
    }

    /// Insert a vertex with no incident edges.
    pub fn add_vertex(&mut self, attrs: V) -> VertexId {
        let id = VertexId::new(self.next_vertex);
        self.next_vertex += 1;
        self.vertices.insert(id, attrs);
        self.adjacency.insert(id, IndexMap::new());
        id
    }

    /// Connect `v1` and `v2`.
    ///
    /// Fails if either vertex is absent, if `v1 == v2`, or if the pair is
    /// already connected. The graph is unchanged on failure.
    pub fn add_edge(&mut self, v1: VertexId, v2: VertexId, attrs: E) -> Result<EdgeId, GraphError> {
        self.require_vertex(v1)?;
        self.require_vertex(v2)?;
        if v1 == v2 {
            return Err(GraphError::SelfLoop(v1));
        }
        if self.edge_between(v1, v2).is_some() {
            return Err(GraphError::DuplicateEdge(v1, v2));
        }
        Ok(self.insert_edge(v1, v2, attrs))
    }

    /// Insert an edge whose endpoints are known to be valid and unconnected.
    pub(crate) fn insert_edge(&mut self, v1: VertexId, v2: VertexId, attrs: E) -> EdgeId {
        let id = EdgeId::new(self.next_edge);
        self.next_edge += 1;
        self.edges.insert(
            id,
            Edge {
                endpoints: (v1, v2),
                attrs,
            },
        );
        self.adjacency.entry(v1).or_default().insert(v2, id);
        self.adjacency.entry(v2).or_default().insert(v1, id);
        id
    }

    /// Remove an edge, returning its payload.
    pub fn remove_edge(&mut self, e: EdgeId) -> Result<E, GraphError> {
        let edge = self
            .edges
            .shift_remove(&e)
            .ok_or(GraphError::invalid_edge(e))?;
        let (v1, v2) = edge.endpoints;
        if let Some(adj) = self.adjacency.get_mut(&v1) {
            adj.shift_remove(&v2);
        }
        if let Some(adj) = self.adjacency.get_mut(&v2) {
            adj.shift_remove(&v1);
        }
        Ok(edge.attrs)
    }

    /// Remove a vertex and every edge incident to it, returning its payload.
    pub fn remove_vertex(&mut self, v: VertexId) -> Result<V, GraphError> {
        let adj = self
            .adjacency
            .shift_remove(&v)
            .ok_or(GraphError::invalid_vertex(v))?;
        for (neighbor, e) in adj {
            self.edges.shift_remove(&e);
            if let Some(n_adj) = self.adjacency.get_mut(&neighbor) {
                n_adj.shift_remove(&v);
            }
        }
        self.vertices
            .shift_remove(&v)
            .ok_or(GraphError::invalid_vertex(v))
    }

    /// True if `v` is a vertex of this graph.
    pub fn has_vertex(&self, v: VertexId) -> bool {
        self.vertices.contains_key(&v)
    }

    /// True if `e` is an edge of this graph.
    pub fn has_edge(&self, e: EdgeId) -> bool {
        self.edges.contains_key(&e)
    }

    /// Vertex payload.
    pub fn vertex(&self, v: VertexId) -> Result<&V, GraphError> {
        self.vertices.get(&v).ok_or(GraphError::invalid_vertex(v))
    }

    /// Mutable vertex payload.
    pub fn vertex_mut(&mut self, v: VertexId) -> Result<&mut V, GraphError> {
        self.vertices
            .get_mut(&v)
            .ok_or(GraphError::invalid_vertex(v))
    }

    /// Edge endpoints and payload.
    pub fn edge(&self, e: EdgeId) -> Result<&Edge<E>, GraphError> {
        self.edges.get(&e).ok_or(GraphError::invalid_edge(e))
    }

    /// The edge connecting `v1` and `v2`, if any.
    pub fn edge_between(&self, v1: VertexId, v2: VertexId) -> Option<EdgeId> {
        self.adjacency.get(&v1)?.get(&v2).copied()
    }

    /// Neighbors of `v` paired with the connecting edge, in insertion order.
    pub fn incident(
        &self,
        v: VertexId,
    ) -> Result<impl Iterator<Item = (VertexId, EdgeId)> + '_, GraphError> {
        Ok(self.adjacent(v)?.iter().map(|(&n, &e)| (n, e)))
    }

    /// Neighbors of `v`, in insertion order.
    pub fn neighbors(&self, v: VertexId) -> Result<impl Iterator<Item = VertexId> + '_, GraphError> {
        Ok(self.adjacent(v)?.keys().copied())
    }

    /// Number of edges incident to `v`.
    pub fn degree(&self, v: VertexId) -> Result<usize, GraphError> {
        Ok(self.adjacent(v)?.len())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex ids in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// Vertices with their payloads, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &V)> + '_ {
        self.vertices.iter().map(|(&id, v)| (id, v))
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<E>)> + '_ {
        self.edges.iter().map(|(&id, e)| (id, e))
    }

    /// Project every payload through `fv` / `fe`, keeping ids and topology.
    pub fn map_attrs<V2, E2>(
        &self,
        mut fv: impl FnMut(&V) -> V2,
        mut fe: impl FnMut(&E) -> E2,
    ) -> Graph<V2, E2> {
        Graph {
            vertices: self.vertices.iter().map(|(&id, v)| (id, fv(v))).collect(),
            edges: self
                .edges
                .iter()
                .map(|(&id, e)| {
                    (
                        id,
                        Edge {
                            endpoints: e.endpoints,
                            attrs: fe(&e.attrs),
                        },
                    )
                })
                .collect(),
            adjacency: self.adjacency.clone(),
            next_vertex: self.next_vertex,
            next_edge: self.next_edge,
        }
    }

    pub(crate) fn adjacent(&self, v: VertexId) -> Result<&IndexMap<VertexId, EdgeId>, GraphError> {
        self.adjacency.get(&v).ok_or(GraphError::invalid_vertex(v))
    }

    fn require_vertex(&self, v: VertexId) -> Result<(), GraphError> {
        if self.has_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::invalid_vertex(v))
        }
    }

    /// Check that the adjacency index agrees with the edge arena.
    pub fn is_consistent(&self) -> bool {
        let adjacency_matches_vertices = self.adjacency.len() == self.vertices.len()
            && self.vertices.keys().all(|v| self.adjacency.contains_key(v));
        let edges_indexed = self.edges.iter().all(|(&id, edge)| {
            let (a, b) = edge.endpoints;
            self.edge_between(a, b) == Some(id) && self.edge_between(b, a) == Some(id)
        });
        let entries: usize = self.adjacency.values().map(IndexMap::len).sum();
        adjacency_matches_vertices && edges_indexed && entries == 2 * self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> (Graph<(), ()>, [VertexId; 3]) {
        let mut g = Graph::new();
        let a = g.add_vertex(());
        let b = g.add_vertex(());
        let c = g.add_vertex(());
        g.add_edge(a, b, ()).unwrap();
        g.add_edge(b, c, ()).unwrap();
        g.add_edge(c, a, ()).unwrap();
        (g, [a, b, c])
    }

    #[test]
    fn add_edge_updates_both_endpoints() {
        let (g, [a, b, c]) = triangle();
        assert_eq!(g.degree(a).unwrap(), 2);
        assert_eq!(g.neighbors(b).unwrap().collect::<Vec<_>>(), vec![a, c]);
        assert!(g.edge_between(a, b).is_some());
        assert_eq!(g.edge_between(a, b), g.edge_between(b, a));
        assert!(g.is_consistent());
    }

    #[test]
    fn add_edge_rejects_foreign_vertex() {
        let (mut g, [a, _, _]) = triangle();
        let foreign = VertexId::new(99);
        assert_eq!(
            g.add_edge(a, foreign, ()),
            Err(GraphError::invalid_vertex(foreign))
        );
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn add_edge_rejects_loops_and_duplicates() {
        let (mut g, [a, b, _]) = triangle();
        assert_eq!(g.add_edge(a, a, ()), Err(GraphError::SelfLoop(a)));
        assert_eq!(g.add_edge(b, a, ()), Err(GraphError::DuplicateEdge(b, a)));
        assert!(g.is_consistent());
    }

    #[test]
    fn remove_vertex_drops_incident_edges() {
        let (mut g, [a, b, c]) = triangle();
        let incident: Vec<EdgeId> = g.incident(a).unwrap().map(|(_, e)| e).collect();
        g.remove_vertex(a).unwrap();
        assert!(!g.has_vertex(a));
        assert!(incident.iter().all(|&e| !g.has_edge(e)));
        assert!(g.has_edge(g.edge_between(b, c).unwrap()));
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.neighbors(b).unwrap().collect::<Vec<_>>(), vec![c]);
        assert!(g.is_consistent());
        assert_eq!(g.remove_vertex(a), Err(GraphError::invalid_vertex(a)));
    }

    #[test]
    fn remove_edge_keeps_vertices() {
        let (mut g, [a, b, _]) = triangle();
        let e = g.edge_between(a, b).unwrap();
        assert!(g.has_edge(e));
        g.remove_edge(e).unwrap();
        assert!(!g.has_edge(e));
        assert!(g.has_vertex(a) && g.has_vertex(b));
        assert_eq!(g.vertex_count(), 3);
        assert!(g.edge_between(a, b).is_none());
        assert!(g.is_consistent());
        assert_eq!(g.remove_edge(e), Err(GraphError::invalid_edge(e)));
    }

    #[test]
    fn ids_are_not_reused() {
        let (mut g, [a, _, _]) = triangle();
        g.remove_vertex(a).unwrap();
        let d = g.add_vertex(());
        assert_ne!(a, d);
    }

    #[test]
    fn map_attrs_keeps_ids() {
        let mut g: Graph<u8, u8> = Graph::new();
        let a = g.add_vertex(1);
        let b = g.add_vertex(2);
        let e = g.add_edge(a, b, 7).unwrap();
        let h = g.map_attrs(|v| u32::from(*v) * 10, |e| i64::from(*e));
        assert_eq!(*h.vertex(b).unwrap(), 20);
        assert_eq!(*h.edge(e).unwrap().attrs(), 7);
        assert!(h.is_consistent());
    }
}
