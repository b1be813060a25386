//! Molecular graph data model.
//!
//! A [`Graph`] is an arena of vertices and edges indexed by id, with an
//! adjacency index maintained on every mutation. Chemistry lives in two
//! instantiations of it: [`Molecule`] (concrete atoms and bonds) and
//! [`Pattern`] (sets of acceptable atom types and bond orders). The
//! [`Matches`] and [`QueryVertex`] traits are the only seam through which
//! the isomorphism engine sees chemistry.
//!
//! Structural operations (copy, merge, split, cycle membership, SSSR) are
//! implemented directly on [`Graph`] and are chemistry-agnostic.

pub mod chem;
pub mod fixtures;

mod error;
mod graph;
mod matches;
mod structure;

pub use crate::chem::{
    Atom, AtomPattern, AtomType, Bond, BondOrder, BondPattern, Molecule, Pattern,
};
pub use crate::error::GraphError;
pub use crate::graph::{Edge, EdgeId, ElementRef, Graph, Label, VertexId};
pub use crate::matches::{Matches, QueryVertex};
pub use crate::structure::Ring;
