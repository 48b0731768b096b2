//! The caller-supplied starting pair for symmetry propagation.

use serde::{Deserialize, Serialize};

use crate::mesh_error::{MeshSymmetryError, SeedDefect};
use crate::topology::component::ComponentKind;
use crate::topology::mesh_topology::MeshTopology;

/// One known-symmetrical pair each of faces, edges and vertices.
///
/// Each vertex must lie on its paired edge, and each edge must border its
/// paired face: `vertices.0` on `edges.0` on `faces.0`, and likewise for the
/// second members. `left_vertex`, when present, is recorded in the table as a
/// vertex known to lie on the left side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentSeed {
    pub faces: (usize, usize),
    pub edges: (usize, usize),
    pub vertices: (usize, usize),
    pub left_vertex: Option<usize>,
}

impl ComponentSeed {
    pub fn new(faces: (usize, usize), edges: (usize, usize), vertices: (usize, usize)) -> Self {
        Self {
            faces,
            edges,
            vertices,
            left_vertex: None,
        }
    }

    /// Record `vertex` as lying on the left side.
    pub fn with_left_vertex(mut self, vertex: usize) -> Self {
        self.left_vertex = Some(vertex);
        self
    }

    /// Check indices against `topology`, then check incidence.
    ///
    /// Range failures are reported as [`MeshSymmetryError::OutOfRange`] before
    /// any incidence is looked at.
    pub fn validate<T: MeshTopology + ?Sized>(&self, topology: &T) -> Result<(), MeshSymmetryError> {
        for face in [self.faces.0, self.faces.1] {
            topology.check_index(ComponentKind::Face, face)?;
        }
        for edge in [self.edges.0, self.edges.1] {
            topology.check_index(ComponentKind::Edge, edge)?;
        }
        for vertex in [self.vertices.0, self.vertices.1]
            .into_iter()
            .chain(self.left_vertex)
        {
            topology.check_index(ComponentKind::Vertex, vertex)?;
        }

        let sides = [
            (self.vertices.0, self.edges.0, self.faces.0),
            (self.vertices.1, self.edges.1, self.faces.1),
        ];
        for (vertex, edge, face) in sides {
            if !topology.edge_vertices(edge)?.contains(&vertex) {
                return Err(SeedDefect::VertexNotOnEdge { vertex, edge }.into());
            }
            if !topology.face_edges(face)?.contains(&edge) {
                return Err(SeedDefect::EdgeNotOnFace { edge, face }.into());
            }
        }
        Ok(())
    }
}
