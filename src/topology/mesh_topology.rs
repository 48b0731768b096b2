//! The read-only adjacency interface consumed by symmetry propagation.
//!
//! Implementors expose a mesh as plain index mappings: edges know their two
//! vertices and their bordering faces, faces know their vertex loop and edges,
//! vertices know their neighbors, incident edges and, per face, the vertices
//! one step away along that face's boundary.
//!
//! Every query is fallible and reports [`MeshSymmetryError::OutOfRange`] for an
//! index at or past the corresponding count.

use crate::mesh_error::MeshSymmetryError;
use crate::topology::component::ComponentKind;

/// Read-only adjacency queries over a polygon mesh.
///
/// The ordering of every returned slice is meaningful: when propagation has to
/// choose between several unexamined candidates it takes the first one, so a
/// fixed ordering gives a deterministic result.
pub trait MeshTopology {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;
    /// Number of edges.
    fn edge_count(&self) -> usize;
    /// Number of faces.
    fn face_count(&self) -> usize;

    /// The two vertices of `edge`, in stored order.
    fn edge_vertices(&self, edge: usize) -> Result<[usize; 2], MeshSymmetryError>;
    /// Faces bordering `edge` (one for a boundary edge, two otherwise).
    fn edge_faces(&self, edge: usize) -> Result<&[usize], MeshSymmetryError>;

    /// Vertices of `face` in winding order.
    fn face_vertices(&self, face: usize) -> Result<&[usize], MeshSymmetryError>;
    /// Edges bounding `face`.
    fn face_edges(&self, face: usize) -> Result<&[usize], MeshSymmetryError>;

    /// Vertices sharing an edge with `vertex`.
    fn vertex_neighbors(&self, vertex: usize) -> Result<&[usize], MeshSymmetryError>;
    /// Edges incident to `vertex`.
    fn vertex_edges(&self, vertex: usize) -> Result<&[usize], MeshSymmetryError>;

    /// The one or two vertices adjacent to `vertex` along the boundary of
    /// `face`. Empty when `vertex` is not on `face`.
    fn face_local_siblings(&self, vertex: usize, face: usize)
    -> Result<&[usize], MeshSymmetryError>;

    /// Number of components of the given kind.
    fn count(&self, kind: ComponentKind) -> usize {
        match kind {
            ComponentKind::Vertex => self.vertex_count(),
            ComponentKind::Edge => self.edge_count(),
            ComponentKind::Face => self.face_count(),
        }
    }

    /// Returns `index` unchanged if it addresses a component of `kind`.
    fn check_index(&self, kind: ComponentKind, index: usize) -> Result<usize, MeshSymmetryError> {
        let count = self.count(kind);
        if index < count {
            Ok(index)
        } else {
            Err(MeshSymmetryError::out_of_range(kind, index, count))
        }
    }
}
