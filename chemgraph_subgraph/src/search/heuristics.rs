use crate::index::{Index, NodeId};
use crate::state::State;

/// Pick the next query node to assign.
///
/// Frontier nodes (unmapped, with at least one mapped neighbor) come first,
/// preferring the one with the most mapped neighbors since every mapped
/// neighbor is an edge the candidate must satisfy. With no frontier (the
/// first step, or a new component of a disconnected query) the unmapped
/// node of lowest connectivity value is taken. Ties go to the lower id.
pub(crate) fn choose_next<V, E>(query: &Index<'_, V, E>, st: &State) -> Option<NodeId> {
    let frontier = query
        .nodes()
        .filter(|&q| !st.is_mapped(q))
        .map(|q| (q, mapped_neighbor_count(query, st, q)))
        .filter(|&(_, mapped)| mapped > 0)
        .max_by(|(a, a_mapped), (b, b_mapped)| a_mapped.cmp(b_mapped).then(b.cmp(a)))
        .map(|(q, _)| q);

    frontier.or_else(|| {
        query
            .nodes()
            .filter(|&q| !st.is_mapped(q))
            .min_by_key(|&q| (query.invariants(q).connectivity, q))
    })
}

pub(crate) fn mapped_neighbor_count<V, E>(query: &Index<'_, V, E>, st: &State, q: NodeId) -> usize {
    query
        .neighbors(q)
        .iter()
        .filter(|&&(n, _)| st.is_mapped(n))
        .count()
}
