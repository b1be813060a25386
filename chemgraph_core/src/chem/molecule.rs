use std::fmt;
use std::str::FromStr;

use crate::{AtomPattern, AtomType, BondPattern, Graph, GraphError, Matches, Pattern, QueryVertex};

/// A molecular graph of concrete atoms and bonds.
pub type Molecule = Graph<Atom, Bond>;

/// Bond orders, written `S`, `D`, `T` and `B`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BondOrder {
    /// Single bond.
    Single,
    /// Double bond.
    Double,
    /// Triple bond.
    Triple,
    /// Aromatic (benzene) bond.
    Benzene,
}

impl BondOrder {
    /// Every order, in display order.
    pub const ALL: [Self; 4] = [Self::Single, Self::Double, Self::Triple, Self::Benzene];

    /// One-letter code.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Single => "S",
            Self::Double => "D",
            Self::Triple => "T",
            Self::Benzene => "B",
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BondOrder {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.symbol() == s)
            .ok_or_else(|| GraphError::UnknownBondOrder(s.to_string()))
    }
}

/// A concrete atom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Atom {
    /// Atom type.
    pub atom_type: AtomType,
    /// Unpaired electrons.
    pub radical_electrons: u8,
    /// Formal charge.
    pub charge: i8,
    /// Cached ring membership, only as current as the last
    /// [`Molecule::update_ring_flags`]. Searches read ring membership from
    /// the graph itself.
    pub in_ring: bool,
}

impl Atom {
    /// A neutral, closed-shell atom.
    pub const fn new(atom_type: AtomType) -> Self {
        Self {
            atom_type,
            radical_electrons: 0,
            charge: 0,
            in_ring: false,
        }
    }

    /// Set the unpaired electron count.
    #[must_use]
    pub const fn with_radicals(mut self, radical_electrons: u8) -> Self {
        self.radical_electrons = radical_electrons;
        self
    }

    /// Set the formal charge.
    #[must_use]
    pub const fn with_charge(mut self, charge: i8) -> Self {
        self.charge = charge;
        self
    }

    /// True for hydrogen.
    pub const fn is_hydrogen(&self) -> bool {
        matches!(self.atom_type, AtomType::H)
    }
}

/// A concrete bond.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bond {
    /// Bond order.
    pub order: BondOrder,
}

impl Bond {
    /// A bond of `order`.
    pub const fn new(order: BondOrder) -> Self {
        Self { order }
    }

    /// A single bond.
    pub const fn single() -> Self {
        Self::new(BondOrder::Single)
    }

    /// A double bond.
    pub const fn double() -> Self {
        Self::new(BondOrder::Double)
    }
}

// Molecule-to-molecule comparison: the ring flag is derived from topology,
// which the search already compares, so it is not part of equality here.
impl Matches<Atom> for Atom {
    fn matches(&self, target: &Atom) -> bool {
        self.atom_type == target.atom_type
            && self.radical_electrons == target.radical_electrons
            && self.charge == target.charge
    }
}

impl Matches<Bond> for Bond {
    fn matches(&self, target: &Bond) -> bool {
        self.order == target.order
    }
}

impl QueryVertex for Atom {
    fn overlaps(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl Molecule {
    /// Recompute every atom's ring-membership flag from the topology.
    pub fn update_ring_flags(&mut self) {
        let flags: Vec<_> = self
            .vertex_ids()
            .map(|v| (v, self.is_vertex_in_cycle(v).unwrap_or(false)))
            .collect();
        for (v, in_ring) in flags {
            if let Ok(atom) = self.vertex_mut(v) {
                atom.in_ring = in_ring;
            }
        }
    }

    /// The pattern matching exactly this molecule, with the same ids.
    pub fn to_pattern(&self) -> Pattern {
        self.map_attrs(AtomPattern::exact, BondPattern::exact)
    }

    /// Count of atoms that are not hydrogen.
    pub fn heavy_atom_count(&self) -> usize {
        self.vertices().filter(|(_, a)| !a.is_hydrogen()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn bond_symbols_parse() {
        assert_eq!("D".parse::<BondOrder>().unwrap(), BondOrder::Double);
        assert!("Q".parse::<BondOrder>().is_err());
    }

    #[test]
    fn atom_equality_ignores_ring_flag() {
        let mut a = Atom::new(AtomType::Cs);
        let b = Atom::new(AtomType::Cs);
        a.in_ring = true;
        assert!(a.matches(&b));
        assert!(!a.matches(&Atom::new(AtomType::Cs).with_radicals(1)));
        assert!(!a.matches(&Atom::new(AtomType::Cd)));
    }

    #[test]
    fn ring_flags_follow_topology() {
        let mut mol = fixtures::methylcyclopropane();
        mol.update_ring_flags();
        let in_ring = mol.vertices().filter(|(_, a)| a.in_ring).count();
        assert_eq!(in_ring, 3);
        assert_eq!(mol.heavy_atom_count(), 4);
    }

    #[test]
    fn to_pattern_matches_source() {
        let mol = fixtures::propane();
        let pattern = mol.to_pattern();
        for (v, atom) in mol.vertices() {
            assert!(pattern.vertex(v).unwrap().matches(atom));
        }
        assert_eq!(pattern.edge_count(), mol.edge_count());
    }
}
