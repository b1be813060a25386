use std::fmt;

/// Identity of a vertex, unique within its owning graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(u32);

/// Identity of an edge, unique within its owning graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(u32);

impl VertexId {
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Read the raw index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl EdgeId {
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Read the raw index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vertex #{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge #{}", self.0)
    }
}

/// Either kind of graph element, for error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementRef {
    /// A vertex reference.
    Vertex(VertexId),
    /// An edge reference.
    Edge(EdgeId),
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex(v) => v.fmt(f),
            Self::Edge(e) => e.fmt(f),
        }
    }
}

/// Integer tag on a pattern vertex.
///
/// Two pattern vertices carrying the same label must map onto target
/// vertices that stand in the same structural relationship as the pattern
/// vertices do (ring closure), and that each satisfy both vertices'
/// constraints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(pub u32);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*{}", self.0)
    }
}
