//! Common molecules, patterns and test cases.
//!
//! This module builds small reference graphs and defines the substructure
//! cases (pattern, target, expected match counts) shared by the test suites
//! of every crate in the workspace.

use crate::{
    Atom, AtomPattern, AtomType, Bond, BondOrder, BondPattern, Graph, Molecule, Pattern, VertexId,
};

// #####################
// CHEMISTRY-FREE GRAPHS
// #####################

/// `n` indistinguishable vertices in a chain.
pub fn path_graph(n: usize) -> Graph<(), ()> {
    let mut g = Graph::new();
    let ids: Vec<VertexId> = (0..n).map(|_| g.add_vertex(())).collect();
    for pair in ids.windows(2) {
        g.insert_edge(pair[0], pair[1], ());
    }
    g
}

/// `n` indistinguishable vertices in a single ring, `n >= 3`.
pub fn cycle_graph(n: usize) -> Graph<(), ()> {
    let mut g = path_graph(n);
    let ids: Vec<VertexId> = g.vertex_ids().collect();
    if let (Some(&first), Some(&last)) = (ids.first(), ids.last()) {
        if n >= 3 {
            g.insert_edge(last, first, ());
        }
    }
    g
}

/// Clique on `n` indistinguishable vertices.
pub fn complete_graph(n: usize) -> Graph<(), ()> {
    clique(n, |_| (), || ())
}

/// The 3-cube: 8 vertices, 12 edges, 6 square faces.
pub fn cube_graph() -> Graph<(), ()> {
    let mut g = Graph::new();
    let ids: Vec<VertexId> = (0..8).map(|_| g.add_vertex(())).collect();
    for i in 0..8usize {
        for bit in [1, 2, 4] {
            let j = i ^ bit;
            if i < j {
                g.insert_edge(ids[i], ids[j], ());
            }
        }
    }
    g
}

fn clique<V, E>(n: usize, mut vertex: impl FnMut(usize) -> V, mut edge: impl FnMut() -> E) -> Graph<V, E> {
    let mut g = Graph::new();
    let ids: Vec<VertexId> = (0..n).map(|i| g.add_vertex(vertex(i))).collect();
    for (i, &a) in ids.iter().enumerate() {
        for &b in &ids[i + 1..] {
            g.insert_edge(a, b, edge());
        }
    }
    g
}

// #####################
// MOLECULES
// #####################

/// Heavy-atom chain of `atoms` joined by `bonds` (one fewer than atoms).
fn chain(atoms: &[AtomType], bonds: &[BondOrder]) -> Molecule {
    let mut mol = Molecule::new();
    let ids: Vec<VertexId> = atoms.iter().map(|&t| mol.add_vertex(Atom::new(t))).collect();
    for (pair, &order) in ids.windows(2).zip(bonds) {
        mol.insert_edge(pair[0], pair[1], Bond::new(order));
    }
    mol
}

/// Heavy-atom ring; bond `i` joins atom `i` to atom `i + 1 (mod n)`.
fn ring(atoms: &[AtomType], bonds: &[BondOrder]) -> Molecule {
    let mut mol = chain(atoms, bonds);
    let ids: Vec<VertexId> = mol.vertex_ids().collect();
    if let (Some(&first), Some(&last), Some(&order)) = (ids.first(), ids.last(), bonds.last()) {
        mol.insert_edge(last, first, Bond::new(order));
    }
    mol
}

/// C-C, heavy atoms only.
pub fn ethane() -> Molecule {
    chain(&[AtomType::Cs; 2], &[BondOrder::Single])
}

/// C-C-C, heavy atoms only.
pub fn propane() -> Molecule {
    chain(&[AtomType::Cs; 3], &[BondOrder::Single; 2])
}

/// C-C-O, heavy atoms only.
pub fn ethanol() -> Molecule {
    chain(
        &[AtomType::Cs, AtomType::Cs, AtomType::Os],
        &[BondOrder::Single; 2],
    )
}

/// Three sp3 carbons in a ring.
pub fn cyclopropane() -> Molecule {
    ring(&[AtomType::Cs; 3], &[BondOrder::Single; 3])
}

/// Six sp3 carbons in a ring.
pub fn cyclohexane() -> Molecule {
    ring(&[AtomType::Cs; 6], &[BondOrder::Single; 6])
}

/// Kekulé benzene: alternating double and single bonds, starting double.
pub fn benzene() -> Molecule {
    use BondOrder::{Double, Single};
    ring(&[AtomType::Cd; 6], &[Double, Single, Double, Single, Double, Single])
}

/// Cyclopropane ring (first three atoms) with a methyl on the first.
pub fn methylcyclopropane() -> Molecule {
    let mut mol = cyclopropane();
    let anchor = mol.vertex_ids().next();
    let methyl = mol.add_vertex(Atom::new(AtomType::Cs));
    if let Some(anchor) = anchor {
        mol.insert_edge(anchor, methyl, Bond::single());
    }
    mol
}

/// Two fused six-membered rings sharing one bond.
pub fn naphthalene() -> Molecule {
    let mut mol = ring(&[AtomType::Cb; 6], &[BondOrder::Benzene; 6]);
    let ids: Vec<VertexId> = mol.vertex_ids().collect();
    // Second ring: ids[0] - n1 - n2 - n3 - n4 - ids[1]
    let extra: Vec<VertexId> = (0..4).map(|_| mol.add_vertex(Atom::new(AtomType::Cb))).collect();
    let path: Vec<VertexId> = std::iter::once(ids[0])
        .chain(extra)
        .chain(std::iter::once(ids[1]))
        .collect();
    for pair in path.windows(2) {
        mol.insert_edge(pair[0], pair[1], Bond::new(BondOrder::Benzene));
    }
    mol
}

/// Clique of `n` sp3 carbons. Not chemistry, but a worst case for search.
pub fn carbon_clique(n: usize) -> Molecule {
    clique(n, |_| Atom::new(AtomType::Cs), Bond::single)
}

// #####################
// PATTERNS
// #####################

/// Clique of `n` mutually bonded wildcard atoms with wildcard bonds.
pub fn wildcard_clique(n: usize) -> Pattern {
    clique(n, |_| AtomPattern::any(), BondPattern::any)
}

/// Single atom accepting `types`.
pub fn atom_pattern(types: &[AtomType]) -> Pattern {
    let mut p = Pattern::new();
    p.add_vertex(AtomPattern::of(types.iter().copied()));
    p
}

/// Two atoms joined by a bond accepting `orders`.
pub fn bond_pattern(a: &[AtomType], b: &[AtomType], orders: &[BondOrder]) -> Pattern {
    let mut p = Pattern::new();
    let va = p.add_vertex(AtomPattern::of(a.iter().copied()));
    let vb = p.add_vertex(AtomPattern::of(b.iter().copied()));
    p.insert_edge(va, vb, BondPattern::of(orders.iter().copied()));
    p
}

/// Three-membered ring of generic carbons with any bonds.
pub fn three_ring_pattern() -> Pattern {
    clique(3, |_| AtomPattern::of([AtomType::C]), BondPattern::any)
}

// #####################
// TEST CASES
// #####################

/// A substructure search with known answers.
#[derive(Debug, Clone, Copy)]
pub struct SubstructureCase {
    /// Case name used in failure reports.
    pub name: &'static str,
    /// Builds the pattern.
    pub pattern: fn() -> Pattern,
    /// Builds the target.
    pub target: fn() -> Molecule,
    /// Number of distinct mappings.
    pub expected_matches: usize,
    /// Number of distinct covered target vertex sets.
    pub expected_unique: usize,
}

/// Every case the substructure tests run.
pub const SUBSTRUCTURE_CASES: &[SubstructureCase] = &[
    SubstructureCase {
        name: "carbon_in_propane",
        pattern: || atom_pattern(&[AtomType::C]),
        target: propane,
        expected_matches: 3,
        expected_unique: 3,
    },
    SubstructureCase {
        name: "cc_single_in_propane",
        pattern: || bond_pattern(&[AtomType::C], &[AtomType::C], &[BondOrder::Single]),
        target: propane,
        expected_matches: 4,
        expected_unique: 2,
    },
    SubstructureCase {
        name: "cc_single_in_cyclohexane",
        pattern: || bond_pattern(&[AtomType::C], &[AtomType::C], &[BondOrder::Single]),
        target: cyclohexane,
        expected_matches: 12,
        expected_unique: 6,
    },
    SubstructureCase {
        name: "three_ring_in_methylcyclopropane",
        pattern: three_ring_pattern,
        target: methylcyclopropane,
        expected_matches: 6,
        expected_unique: 1,
    },
    SubstructureCase {
        name: "cc_double_in_benzene",
        pattern: || bond_pattern(&[AtomType::C], &[AtomType::C], &[BondOrder::Double]),
        target: benzene,
        expected_matches: 6,
        expected_unique: 3,
    },
    SubstructureCase {
        name: "oxygen_in_propane",
        pattern: || atom_pattern(&[AtomType::O]),
        target: propane,
        expected_matches: 0,
        expected_unique: 0,
    },
    SubstructureCase {
        name: "wildcard_pair_in_ethanol",
        pattern: || bond_pattern(&[AtomType::R], &[AtomType::R], &BondOrder::ALL),
        target: ethanol,
        expected_matches: 4,
        expected_unique: 2,
    },
    SubstructureCase {
        name: "heavy_oxygen_pair_in_ethanol",
        pattern: || bond_pattern(&[AtomType::RNoH], &[AtomType::O], &[BondOrder::Single]),
        target: ethanol,
        expected_matches: 1,
        expected_unique: 1,
    },
    SubstructureCase {
        name: "three_ring_in_cyclohexane",
        pattern: three_ring_pattern,
        target: cyclohexane,
        expected_matches: 0,
        expected_unique: 0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_shapes() {
        assert_eq!(cycle_graph(6).edge_count(), 6);
        assert_eq!(complete_graph(4).edge_count(), 6);
        assert_eq!(cube_graph().edge_count(), 12);
        assert_eq!(naphthalene().vertex_count(), 10);
        assert_eq!(naphthalene().edge_count(), 11);
        assert_eq!(methylcyclopropane().edge_count(), 4);
        assert_eq!(wildcard_clique(4).edge_count(), 6);
        assert!(carbon_clique(5).is_consistent());
    }

    #[test]
    fn case_names_are_unique() {
        let mut names: Vec<_> = SUBSTRUCTURE_CASES.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SUBSTRUCTURE_CASES.len());
    }
}
