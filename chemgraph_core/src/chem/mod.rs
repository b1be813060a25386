//! Chemistry payloads for the two graph instantiations.

mod atom_type;
mod molecule;
mod pattern;

pub use atom_type::AtomType;
pub use molecule::{Atom, Bond, BondOrder, Molecule};
pub use pattern::{AtomPattern, BondPattern, Pattern};
