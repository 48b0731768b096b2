//! Component kinds addressed by symmetry tables and topology queries.

use std::fmt;

/// The three kinds of mesh component a symmetry table tracks.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum ComponentKind {
    Vertex,
    Edge,
    Face,
}

impl ComponentKind {
    /// All kinds, in dependency order (vertices first).
    pub const ALL: [ComponentKind; 3] = [
        ComponentKind::Vertex,
        ComponentKind::Edge,
        ComponentKind::Face,
    ];
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Vertex => "vertex",
            ComponentKind::Edge => "edge",
            ComponentKind::Face => "face",
        };
        f.write_str(name)
    }
}
