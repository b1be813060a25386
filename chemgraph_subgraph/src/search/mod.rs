use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, trace, warn};

use chemgraph_common::{Config, SearchBudget};
use chemgraph_core::{Matches, QueryVertex};

use crate::dedupe::Deduper;
use crate::error::MatchError;
use crate::index::{Index, NodeId};
use crate::labels::LabelGroups;
use crate::mapping::Mapping;
use crate::state::State;

pub(crate) mod heuristics;
pub(crate) use heuristics::choose_next;

/// Completeness rule applied by a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Every query vertex mapped; the target may be larger.
    Subgraph,
    /// Query and target have the same size and every target vertex is covered.
    Isomorphism,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Subgraph => write!(f, "subgraph"),
            Mode::Isomorphism => write!(f, "isomorphism"),
        }
    }
}

/// One level of the explicit backtracking stack.
#[derive(Clone, Debug)]
struct Frame {
    query: NodeId,
    candidates: Vec<NodeId>,
    cursor: usize,
    // Candidate currently assigned to `query`, undone before the next one is tried
    bound: Option<NodeId>,
}

impl Frame {
    fn new(query: NodeId, candidates: Vec<NodeId>) -> Self {
        Frame {
            query,
            candidates,
            cursor: 0,
            bound: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Fresh,
    Running,
    Done,
}

/// Lazy enumeration of the mappings of a query graph into a target graph.
///
/// Yields `Ok(mapping)` for each match, then ends. If the budget runs
/// out first, yields a single [`MatchError::SearchBudgetExceeded`] and
/// ends; mappings already yielded remain valid. The enumeration cannot be
/// restarted; start a new search instead.
pub struct Search<'q, 't, QV, QE, TV, TE> {
    query: Arc<Index<'q, QV, QE>>,
    target: Arc<Index<'t, TV, TE>>,
    labels: Arc<LabelGroups>,
    mode: Mode,
    budget: SearchBudget,
    dedupe: Deduper,

    started: Instant,
    steps: u64,
    found: u64,
    state: State,
    stack: Vec<Frame>,
    phase: Phase,
}

impl<'q, 't, QV, QE, TV, TE> Search<'q, 't, QV, QE, TV, TE>
where
    QV: Matches<TV> + QueryVertex,
    QE: Matches<TE>,
{
    pub(crate) fn new(
        query: Arc<Index<'q, QV, QE>>,
        target: Arc<Index<'t, TV, TE>>,
        labels: Arc<LabelGroups>,
        mode: Mode,
        config: &Config,
    ) -> Self {
        let state = State::new(query.len());
        Search {
            query,
            target,
            labels,
            mode,
            budget: config.budget,
            dedupe: Deduper::new(config.dedupe),
            started: Instant::now(),
            steps: 0,
            found: 0,
            state,
            stack: Vec::new(),
            phase: Phase::Fresh,
        }
    }

    /// Candidate assignments attempted so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Mappings yielded so far.
    pub fn found(&self) -> u64 {
        self.found
    }

    /// The completeness rule of this search.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    fn start(&mut self) -> Option<Result<Mapping, MatchError>> {
        info!(
            "Starting {} search: query {} vertices / {} edges, target {} vertices / {} edges",
            self.mode,
            self.query.len(),
            self.query.edge_count(),
            self.target.len(),
            self.target.edge_count()
        );

        if !self.feasible() {
            self.finish();
            return None;
        }

        let Some(root) = choose_next(&*self.query, &self.state) else {
            // Empty query: exactly one (empty) mapping.
            self.found += 1;
            self.finish();
            return Some(Ok(Mapping::default()));
        };

        let candidates = self.candidates(root);
        if candidates.is_empty() {
            trace!("No candidates for root query node {}", root);
            self.finish();
            return None;
        }
        self.stack.push(Frame::new(root, candidates));
        self.phase = Phase::Running;
        None
    }

    /// Whole-graph checks that rule out any mapping before search begins.
    fn feasible(&self) -> bool {
        let (q, t) = (&self.query, &self.target);
        match self.mode {
            Mode::Subgraph => {
                if q.len() > t.len() || q.edge_count() > t.edge_count() {
                    debug!(
                        "Query larger than target ({}/{} vs {}/{}), no subgraph match",
                        q.len(),
                        q.edge_count(),
                        t.len(),
                        t.edge_count()
                    );
                    return false;
                }
            }
            Mode::Isomorphism => {
                if q.len() != t.len() || q.edge_count() != t.edge_count() {
                    debug!(
                        "Size mismatch ({}/{} vs {}/{}), not isomorphic",
                        q.len(),
                        q.edge_count(),
                        t.len(),
                        t.edge_count()
                    );
                    return false;
                }
                if q.invariant_profile() != t.invariant_profile() {
                    debug!("Vertex invariant multisets differ, not isomorphic");
                    return false;
                }
            }
        }
        true
    }

    /// Target nodes that `q` may be assigned to under the current state.
    fn candidates(&self, q: NodeId) -> Vec<NodeId> {
        let (query, target, st) = (&*self.query, &*self.target, &self.state);

        let mapped_neighbors: Vec<(NodeId, &QE)> = query
            .neighbors(q)
            .iter()
            .filter_map(|&(qn, qe)| st.mapped_to(qn).map(|tn| (tn, qe)))
            .collect();

        // Restrict to neighbors of an already mapped neighbor's image.
        let pool: Vec<NodeId> = match mapped_neighbors.first() {
            Some(&(tn, _)) => target.neighbors(tn).iter().map(|&(t, _)| t).collect(),
            None => target.nodes().collect(),
        };

        let q_attrs = query.attrs(q);
        pool.into_iter()
            .filter(|&t| !st.is_used_target(t))
            .filter(|&t| self.invariants_admit(q, t))
            .filter(|&t| {
                self.mode != Mode::Isomorphism
                    || used_neighbor_count(target, st, t) == mapped_neighbors.len()
            })
            .filter(|&t| target.accepts(q_attrs, t))
            .filter(|&t| {
                mapped_neighbors
                    .iter()
                    .all(|&(tn, qe)| target.edge(t, tn).is_some_and(|te| qe.matches(te)))
            })
            .filter(|&t| self.labels.is_empty() || self.labels.consistent(q, t, st, query, target))
            .collect()
    }

    fn invariants_admit(&self, q: NodeId, t: NodeId) -> bool {
        let qi = self.query.invariants(q);
        let ti = self.target.invariants(t);
        match self.mode {
            Mode::Subgraph => ti.degree >= qi.degree && (!qi.in_cycle || ti.in_cycle),
            Mode::Isomorphism => qi == ti,
        }
    }

    fn budget_exceeded(&self) -> bool {
        if self.budget.steps_exhausted(self.steps) {
            return true;
        }
        self.budget.should_poll_clock(self.steps)
            && self
                .budget
                .deadline
                .is_some_and(|deadline| self.started.elapsed() >= deadline)
    }

    fn abort(&mut self) -> MatchError {
        let elapsed = self.started.elapsed();
        warn!(
            "Search budget exhausted after {} steps ({:?}) with {} matches found",
            self.steps, elapsed, self.found
        );
        self.stack.clear();
        self.state.clear();
        self.phase = Phase::Done;
        MatchError::SearchBudgetExceeded {
            steps: self.steps,
            elapsed,
        }
    }

    fn finish(&mut self) {
        self.phase = Phase::Done;
        info!(
            "Finished {} search: {} matches in {} steps",
            self.mode, self.found, self.steps
        );
    }

    fn emit(&mut self) -> Option<Mapping> {
        if !self.dedupe.admit(&self.state) {
            return None;
        }
        self.found += 1;
        let (query, target) = (&self.query, &self.target);
        Some(Mapping::from_pairs(
            self.state
                .pairs()
                .into_iter()
                .map(|(q, t)| (query.vertex_id(q), target.vertex_id(t))),
        ))
    }

    /// Advance the search to the next complete mapping.
    fn advance(&mut self) -> Option<Result<Mapping, MatchError>> {
        loop {
            let Some(frame) = self.stack.last_mut() else {
                self.finish();
                return None;
            };

            if let Some(t) = frame.bound.take() {
                self.state.unmap(frame.query, t);
            }

            let Some(&t) = frame.candidates.get(frame.cursor) else {
                trace!("Backtracking from query node {}", frame.query);
                self.stack.pop();
                continue;
            };
            frame.cursor += 1;
            let q = frame.query;

            self.steps += 1;
            if self.budget_exceeded() {
                return Some(Err(self.abort()));
            }

            if self.state.is_used_target(t) {
                continue;
            }
            self.state.map(q, t);
            if let Some(frame) = self.stack.last_mut() {
                frame.bound = Some(t);
            }

            if self.state.done() {
                if let Some(mapping) = self.emit() {
                    return Some(Ok(mapping));
                }
                continue;
            }

            let Some(next) = choose_next(&*self.query, &self.state) else {
                continue;
            };
            let candidates = self.candidates(next);
            if candidates.is_empty() {
                trace!("No candidates for query node {}", next);
                continue;
            }
            self.stack.push(Frame::new(next, candidates));
        }
    }
}

fn used_neighbor_count<V, E>(target: &Index<'_, V, E>, st: &State, t: NodeId) -> usize {
    target
        .neighbors(t)
        .iter()
        .filter(|&&(n, _)| st.is_used_target(n))
        .count()
}

impl<'q, 't, QV, QE, TV, TE> Iterator for Search<'q, 't, QV, QE, TV, TE>
where
    QV: Matches<TV> + QueryVertex,
    QE: Matches<TE>,
{
    type Item = Result<Mapping, MatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            Phase::Done => None,
            Phase::Fresh => match self.start() {
                Some(item) => Some(item),
                None if self.phase == Phase::Running => self.advance(),
                None => None,
            },
            Phase::Running => self.advance(),
        }
    }
}

impl<QV, QE, TV, TE> fmt::Debug for Search<'_, '_, QV, QE, TV, TE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Search")
            .field("mode", &self.mode)
            .field("steps", &self.steps)
            .field("found", &self.found)
            .field("depth", &self.stack.len())
            .field("phase", &self.phase)
            .finish()
    }
}
