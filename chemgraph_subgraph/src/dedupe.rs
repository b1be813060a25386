use std::collections::HashSet;

use chemgraph_common::DedupeMode;

use crate::index::NodeId;
use crate::state::State;

/// Sorted target nodes covered by a complete state.
pub(crate) fn target_set_signature(st: &State) -> Vec<NodeId> {
    let mut sig: Vec<NodeId> = st.pairs().into_iter().map(|(_, t)| t).collect();
    sig.sort_unstable();
    sig
}

/// Filters complete states according to a [`DedupeMode`].
#[derive(Clone, Debug, Default)]
pub(crate) struct Deduper {
    mode: DedupeMode,
    seen: HashSet<Vec<NodeId>>,
}

impl Deduper {
    pub(crate) fn new(mode: DedupeMode) -> Self {
        Self {
            mode,
            seen: HashSet::new(),
        }
    }

    /// True if the mapping in `st` should be reported.
    ///
    /// The search never visits the same complete assignment twice, so
    /// `Full` needs no bookkeeping.
    pub(crate) fn admit(&mut self, st: &State) -> bool {
        match self.mode {
            DedupeMode::Full => true,
            DedupeMode::TargetSet => self.seen.insert(target_set_signature(st)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_set_collapses_permutations() {
        let mut d = Deduper::new(DedupeMode::TargetSet);
        let mut st = State::new(2);
        st.map(0, 4);
        st.map(1, 2);
        assert!(d.admit(&st));
        st.unmap(0, 4);
        st.unmap(1, 2);
        st.map(0, 2);
        st.map(1, 4);
        assert!(!d.admit(&st));
        assert_eq!(target_set_signature(&st), vec![2, 4]);
    }

    #[test]
    fn full_admits_everything() {
        let mut d = Deduper::new(DedupeMode::Full);
        let st = State::new(0);
        assert!(d.admit(&st));
        assert!(d.admit(&st));
    }
}
