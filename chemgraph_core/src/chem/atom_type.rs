use std::fmt;
use std::str::FromStr;

use crate::GraphError;

/// Atom types, from fully generic (`R`) to specific hybridization states.
///
/// Every type except `R` has a more generic parent; a concrete atom of type
/// `Cs` satisfies a pattern asking for `Cs`, `C`, `R!H` or `R`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AtomType {
    /// Any atom.
    R,
    /// Any atom except hydrogen.
    RNoH,
    /// Hydrogen.
    H,
    /// Generic carbon.
    C,
    /// Carbon with four single bonds.
    Cs,
    /// Carbon with one double bond to carbon.
    Cd,
    /// Carbon with two double bonds.
    Cdd,
    /// Carbon with a triple bond.
    Ct,
    /// Carbon with a double bond to oxygen.
    Co,
    /// Benzene carbon.
    Cb,
    /// Fused benzene carbon.
    Cbf,
    /// Generic oxygen.
    O,
    /// Oxygen with two single bonds.
    Os,
    /// Oxygen with a double bond.
    Od,
    /// Aromatic oxygen.
    Oa,
    /// Nitrogen.
    N,
    /// Generic sulfur.
    S,
    /// Sulfur with two single bonds.
    Ss,
    /// Sulfur with a double bond.
    Sd,
    /// Silicon.
    Si,
    /// Chlorine.
    Cl,
}

impl AtomType {
    /// Every atom type, generic types first.
    pub const ALL: [Self; 21] = [
        Self::R,
        Self::RNoH,
        Self::H,
        Self::C,
        Self::Cs,
        Self::Cd,
        Self::Cdd,
        Self::Ct,
        Self::Co,
        Self::Cb,
        Self::Cbf,
        Self::O,
        Self::Os,
        Self::Od,
        Self::Oa,
        Self::N,
        Self::S,
        Self::Ss,
        Self::Sd,
        Self::Si,
        Self::Cl,
    ];

    /// Symbol as written in adjacency lists.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::R => "R",
            Self::RNoH => "R!H",
            Self::H => "H",
            Self::C => "C",
            Self::Cs => "Cs",
            Self::Cd => "Cd",
            Self::Cdd => "Cdd",
            Self::Ct => "Ct",
            Self::Co => "Co",
            Self::Cb => "Cb",
            Self::Cbf => "Cbf",
            Self::O => "O",
            Self::Os => "Os",
            Self::Od => "Od",
            Self::Oa => "Oa",
            Self::N => "N",
            Self::S => "S",
            Self::Ss => "Ss",
            Self::Sd => "Sd",
            Self::Si => "Si",
            Self::Cl => "Cl",
        }
    }

    /// The next more generic type, `None` for `R`.
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::R => None,
            Self::RNoH | Self::H => Some(Self::R),
            Self::C | Self::O | Self::N | Self::S | Self::Si | Self::Cl => Some(Self::RNoH),
            Self::Cs | Self::Cd | Self::Cdd | Self::Ct | Self::Co | Self::Cb | Self::Cbf => {
                Some(Self::C)
            }
            Self::Os | Self::Od | Self::Oa => Some(Self::O),
            Self::Ss | Self::Sd => Some(Self::S),
        }
    }

    /// True if `self` equals `other` or is one of its descendants.
    pub fn is_specific_case_of(self, other: Self) -> bool {
        std::iter::successors(Some(self), |t| t.parent()).any(|t| t == other)
    }

    /// True for `R`, the type that accepts everything.
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Self::R)
    }
}

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for AtomType {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.symbol() == s)
            .ok_or_else(|| GraphError::UnknownAtomType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_descends_from_wildcard() {
        for t in AtomType::ALL {
            assert!(t.is_specific_case_of(AtomType::R), "{t}");
        }
    }

    #[test]
    fn hierarchy_is_directional() {
        assert!(AtomType::Cs.is_specific_case_of(AtomType::C));
        assert!(AtomType::Cs.is_specific_case_of(AtomType::RNoH));
        assert!(!AtomType::C.is_specific_case_of(AtomType::Cs));
        assert!(!AtomType::H.is_specific_case_of(AtomType::RNoH));
        assert!(!AtomType::Os.is_specific_case_of(AtomType::C));
    }

    #[test]
    fn symbols_parse_back() {
        for t in AtomType::ALL {
            assert_eq!(t.symbol().parse::<AtomType>().unwrap(), t);
        }
        assert_eq!(
            "Xx".parse::<AtomType>(),
            Err(GraphError::UnknownAtomType("Xx".to_string()))
        );
    }
}
