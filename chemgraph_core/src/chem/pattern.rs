use std::ops::RangeInclusive;

use itertools::Itertools;

use crate::{Atom, AtomType, Bond, BondOrder, Graph, Label, Matches, QueryVertex};

/// A molecular pattern of constrained atoms and bonds.
pub type Pattern = Graph<AtomPattern, BondPattern>;

/// Constraints on the atom a pattern vertex may map onto.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtomPattern {
    /// Acceptable types; a target matches if its type is a specific case of
    /// any of them.
    pub atom_types: Vec<AtomType>,
    /// Acceptable unpaired electron counts.
    pub radical_electrons: RangeInclusive<u8>,
    /// Acceptable formal charges.
    pub charge: RangeInclusive<i8>,
    /// Required ring membership, `None` for either. Checked against the
    /// target's structure during a search, never against [`Atom::in_ring`].
    pub in_ring: Option<bool>,
    /// Ring-closure label shared with other pattern vertices.
    pub label: Option<Label>,
}

impl AtomPattern {
    /// A pattern vertex accepting any of `atom_types` in any state.
    pub fn of(atom_types: impl IntoIterator<Item = AtomType>) -> Self {
        Self {
            atom_types: atom_types.into_iter().collect(),
            radical_electrons: 0..=u8::MAX,
            charge: i8::MIN..=i8::MAX,
            in_ring: None,
            label: None,
        }
    }

    /// The universal wildcard.
    pub fn any() -> Self {
        Self::of([AtomType::R])
    }

    /// A pattern accepting only atoms equal to `atom`.
    pub fn exact(atom: &Atom) -> Self {
        Self {
            atom_types: vec![atom.atom_type],
            radical_electrons: atom.radical_electrons..=atom.radical_electrons,
            charge: atom.charge..=atom.charge,
            in_ring: None,
            label: None,
        }
    }

    /// Tag with a ring-closure label.
    #[must_use]
    pub fn with_label(mut self, label: u32) -> Self {
        self.label = Some(Label(label));
        self
    }

    /// Restrict the unpaired electron count.
    #[must_use]
    pub fn with_radicals(mut self, radical_electrons: RangeInclusive<u8>) -> Self {
        self.radical_electrons = radical_electrons;
        self
    }

    /// Restrict the formal charge.
    #[must_use]
    pub fn with_charge(mut self, charge: RangeInclusive<i8>) -> Self {
        self.charge = charge;
        self
    }

    /// Require the matched atom to be on a ring, or off every ring.
    #[must_use]
    pub fn in_ring(mut self, in_ring: bool) -> Self {
        self.in_ring = Some(in_ring);
        self
    }

    /// True if the type set accepts every atom type.
    pub fn is_wildcard(&self) -> bool {
        self.atom_types.iter().any(|t| t.is_wildcard())
    }

    fn accepts_type(&self, atom_type: AtomType) -> bool {
        self.atom_types
            .iter()
            .any(|&allowed| atom_type.is_specific_case_of(allowed))
    }

    fn canonical_types(&self) -> Vec<AtomType> {
        self.atom_types.iter().copied().sorted().dedup().collect()
    }
}

impl From<&Atom> for AtomPattern {
    fn from(atom: &Atom) -> Self {
        Self::exact(atom)
    }
}

impl Matches<Atom> for AtomPattern {
    fn matches(&self, target: &Atom) -> bool {
        self.accepts_type(target.atom_type)
            && self.radical_electrons.contains(&target.radical_electrons)
            && self.charge.contains(&target.charge)
    }

    fn required_ring_membership(&self) -> Option<bool> {
        self.in_ring
    }
}

// Pattern-to-pattern comparison is equivalence, used when isomorphism is
// asked of two patterns.
impl Matches<AtomPattern> for AtomPattern {
    fn matches(&self, target: &AtomPattern) -> bool {
        self.canonical_types() == target.canonical_types()
            && self.radical_electrons == target.radical_electrons
            && self.charge == target.charge
            && self.in_ring == target.in_ring
            && self.label == target.label
    }
}

impl QueryVertex for AtomPattern {
    fn label(&self) -> Option<Label> {
        self.label
    }

    fn overlaps(&self, other: &Self) -> bool {
        let types_overlap = self.atom_types.iter().any(|&a| {
            other
                .atom_types
                .iter()
                .any(|&b| a.is_specific_case_of(b) || b.is_specific_case_of(a))
        });
        let rings_agree = match (self.in_ring, other.in_ring) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        };
        types_overlap
            && ranges_overlap(&self.radical_electrons, &other.radical_electrons)
            && ranges_overlap(&self.charge, &other.charge)
            && rings_agree
    }
}

fn ranges_overlap<T: Ord + Copy>(a: &RangeInclusive<T>, b: &RangeInclusive<T>) -> bool {
    let lo = (*a.start()).max(*b.start());
    let hi = (*a.end()).min(*b.end());
    lo <= hi && !a.is_empty() && !b.is_empty()
}

/// Acceptable orders for a pattern edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BondPattern {
    /// Acceptable orders.
    pub orders: Vec<BondOrder>,
}

impl BondPattern {
    /// A bond of any of `orders`.
    pub fn of(orders: impl IntoIterator<Item = BondOrder>) -> Self {
        Self {
            orders: orders.into_iter().collect(),
        }
    }

    /// A bond of any order.
    pub fn any() -> Self {
        Self::of(BondOrder::ALL)
    }

    /// A bond of exactly `bond`'s order.
    pub fn exact(bond: &Bond) -> Self {
        Self::of([bond.order])
    }

    fn canonical_orders(&self) -> Vec<BondOrder> {
        self.orders.iter().copied().sorted().dedup().collect()
    }
}

impl From<&Bond> for BondPattern {
    fn from(bond: &Bond) -> Self {
        Self::exact(bond)
    }
}

impl Matches<Bond> for BondPattern {
    fn matches(&self, target: &Bond) -> bool {
        self.orders.contains(&target.order)
    }
}

impl Matches<BondPattern> for BondPattern {
    fn matches(&self, target: &BondPattern) -> bool {
        self.canonical_orders() == target.canonical_orders()
    }
}
