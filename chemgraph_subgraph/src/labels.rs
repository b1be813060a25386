//! Ring-closure label constraints.
//!
//! Query vertices sharing a label must land on target vertices that are
//! mutually compatible and that sit at the same shortest-path distance as
//! the labelled pair does in the query.

use indexmap::IndexMap;
use itertools::Itertools;

use chemgraph_core::{Label, Matches, QueryVertex};

use crate::error::MatchError;
use crate::index::{Index, NodeId};
use crate::state::State;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Partner {
    node: NodeId,
    distance: Option<usize>,
}

/// Per query node, the other nodes sharing its label.
#[derive(Clone, Debug, Default)]
pub(crate) struct LabelGroups {
    partners: Vec<Vec<Partner>>,
}

impl LabelGroups {
    pub(crate) fn build<QV, QE>(query: &Index<'_, QV, QE>) -> Result<Self, MatchError>
    where
        QV: QueryVertex,
    {
        let mut groups: IndexMap<Label, Vec<NodeId>> = IndexMap::new();
        for n in query.nodes() {
            if let Some(label) = query.attrs(n).label() {
                groups.entry(label).or_default().push(n);
            }
        }

        let mut partners = vec![Vec::new(); query.len()];
        for (&label, members) in &groups {
            for (&a, &b) in members.iter().tuple_combinations() {
                if !query.attrs(a).overlaps(query.attrs(b)) {
                    return Err(MatchError::MalformedPattern {
                        label,
                        first: query.vertex_id(a),
                        second: query.vertex_id(b),
                    });
                }
                let distance = query.distance(a, b);
                partners[a as usize].push(Partner { node: b, distance });
                partners[b as usize].push(Partner { node: a, distance });
            }
        }

        Ok(Self { partners })
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.partners.iter().all(Vec::is_empty)
    }

    /// Check candidate `t` for query node `q` against every already-mapped
    /// node sharing its label.
    pub(crate) fn consistent<QV, QE, TV, TE>(
        &self,
        q: NodeId,
        t: NodeId,
        st: &State,
        query: &Index<'_, QV, QE>,
        target: &Index<'_, TV, TE>,
    ) -> bool
    where
        QV: Matches<TV> + QueryVertex,
    {
        let Some(partners) = self.partners.get(q as usize) else {
            return true;
        };
        partners.iter().all(|p| {
            let Some(t2) = st.mapped_to(p.node) else {
                return true;
            };
            target.accepts(query.attrs(q), t2)
                && target.accepts(query.attrs(p.node), t)
                && target.distance(t, t2) == p.distance
        })
    }
}
