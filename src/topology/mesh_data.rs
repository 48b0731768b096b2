//! `MeshData`: flat adjacency arrays built from polygon vertex loops.
//!
//! This is the ingestion step. A mesh is described by a vertex count and an
//! ordered list of faces, each face being its vertex loop in winding order.
//! From that, `MeshData` derives:
//! - edges, numbered in first-encounter order while walking faces in order,
//!   each keeping the orientation it was first seen with;
//! - per-edge bordering faces and per-face edges, in discovery order;
//! - per-vertex neighbors and incident edges, in edge order;
//! - per-vertex, per-face siblings: `[previous, next]` along the face loop.
//!
//! These orderings are what makes propagation tie-breaks deterministic.

use hashbrown::HashMap;
use itertools::Itertools;

use crate::mesh_error::MeshSymmetryError;
use crate::topology::component::ComponentKind;
use crate::topology::mesh_topology::MeshTopology;
use crate::topology::validation::{
    TopologyValidationOptions, validate_face_loop, validate_non_manifold,
};

/// In-memory polygon mesh topology.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    vertex_count: usize,
    edge_vertices: Vec<[usize; 2]>,
    edge_faces: Vec<Vec<usize>>,
    face_vertices: Vec<Vec<usize>>,
    face_edges: Vec<Vec<usize>>,
    vertex_neighbors: Vec<Vec<usize>>,
    vertex_edges: Vec<Vec<usize>>,
    /// `face_siblings[v][f]` = neighbors of `v` along the loop of face `f`.
    face_siblings: Vec<HashMap<usize, Vec<usize>>>,
    edge_lookup: HashMap<(usize, usize), usize>,
}

impl MeshData {
    /// Build topology from polygon loops with the default validation options.
    ///
    /// ```rust
    /// # use mesh_symmetry::topology::{MeshData, MeshTopology};
    /// // Two triangles sharing the edge 1-2.
    /// let mesh = MeshData::from_polygons(4, [[0usize, 1, 2], [2, 1, 3]]).unwrap();
    /// assert_eq!(mesh.edge_count(), 5);
    /// let shared = mesh.edge_between(1, 2).unwrap();
    /// assert_eq!(mesh.edge_faces(shared).unwrap(), &[0, 1]);
    /// ```
    pub fn from_polygons<I, F>(vertex_count: usize, faces: I) -> Result<Self, MeshSymmetryError>
    where
        I: IntoIterator<Item = F>,
        F: AsRef<[usize]>,
    {
        Self::from_polygons_with(vertex_count, faces, TopologyValidationOptions::default())
    }

    /// Build topology from polygon loops, validating with `options`.
    pub fn from_polygons_with<I, F>(
        vertex_count: usize,
        faces: I,
        options: TopologyValidationOptions,
    ) -> Result<Self, MeshSymmetryError>
    where
        I: IntoIterator<Item = F>,
        F: AsRef<[usize]>,
    {
        let mut mesh = MeshData {
            vertex_count,
            face_siblings: vec![HashMap::new(); vertex_count],
            ..Default::default()
        };

        for (face, polygon) in faces.into_iter().enumerate() {
            let polygon = polygon.as_ref();
            validate_face_loop(face, polygon, &options)?;
            if let Some(&v) = polygon.iter().find(|&&v| v >= vertex_count) {
                return Err(MeshSymmetryError::out_of_range(
                    ComponentKind::Vertex,
                    v,
                    vertex_count,
                ));
            }

            let mut edges = Vec::with_capacity(polygon.len());
            for (a, b) in polygon.iter().copied().circular_tuple_windows() {
                let edge = mesh.intern_edge(a, b);
                if !mesh.edge_faces[edge].contains(&face) {
                    mesh.edge_faces[edge].push(face);
                }
                edges.push(edge);
            }

            let n = polygon.len();
            for (i, &v) in polygon.iter().enumerate() {
                let prev = polygon[(i + n - 1) % n];
                let next = polygon[(i + 1) % n];
                let siblings = if prev == next {
                    vec![prev]
                } else {
                    vec![prev, next]
                };
                mesh.face_siblings[v].insert(face, siblings);
            }

            mesh.face_vertices.push(polygon.to_vec());
            mesh.face_edges.push(edges);
        }

        validate_non_manifold(&mesh.edge_faces, options.non_manifold)?;

        mesh.vertex_neighbors = vec![Vec::new(); vertex_count];
        mesh.vertex_edges = vec![Vec::new(); vertex_count];
        for (edge, &[a, b]) in mesh.edge_vertices.iter().enumerate() {
            mesh.vertex_edges[a].push(edge);
            mesh.vertex_neighbors[a].push(b);
            if b != a {
                mesh.vertex_edges[b].push(edge);
                mesh.vertex_neighbors[b].push(a);
            }
        }

        log::debug!(
            "Built mesh topology: vertices={} edges={} faces={}",
            mesh.vertex_count,
            mesh.edge_vertices.len(),
            mesh.face_vertices.len()
        );
        Ok(mesh)
    }

    /// Index of the edge joining `a` and `b`, if any.
    pub fn edge_between(&self, a: usize, b: usize) -> Option<usize> {
        self.edge_lookup.get(&(a.min(b), a.max(b))).copied()
    }

    fn intern_edge(&mut self, a: usize, b: usize) -> usize {
        let edge_vertices = &mut self.edge_vertices;
        let edge_faces = &mut self.edge_faces;
        *self
            .edge_lookup
            .entry((a.min(b), a.max(b)))
            .or_insert_with(|| {
                edge_vertices.push([a, b]);
                edge_faces.push(Vec::new());
                edge_vertices.len() - 1
            })
    }
}

fn lookup<T>(items: &[T], kind: ComponentKind, index: usize) -> Result<&T, MeshSymmetryError> {
    items
        .get(index)
        .ok_or_else(|| MeshSymmetryError::out_of_range(kind, index, items.len()))
}

impl MeshTopology for MeshData {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_vertices.len()
    }

    fn face_count(&self) -> usize {
        self.face_vertices.len()
    }

    fn edge_vertices(&self, edge: usize) -> Result<[usize; 2], MeshSymmetryError> {
        lookup(&self.edge_vertices, ComponentKind::Edge, edge).copied()
    }

    fn edge_faces(&self, edge: usize) -> Result<&[usize], MeshSymmetryError> {
        lookup(&self.edge_faces, ComponentKind::Edge, edge).map(Vec::as_slice)
    }

    fn face_vertices(&self, face: usize) -> Result<&[usize], MeshSymmetryError> {
        lookup(&self.face_vertices, ComponentKind::Face, face).map(Vec::as_slice)
    }

    fn face_edges(&self, face: usize) -> Result<&[usize], MeshSymmetryError> {
        lookup(&self.face_edges, ComponentKind::Face, face).map(Vec::as_slice)
    }

    fn vertex_neighbors(&self, vertex: usize) -> Result<&[usize], MeshSymmetryError> {
        lookup(&self.vertex_neighbors, ComponentKind::Vertex, vertex).map(Vec::as_slice)
    }

    fn vertex_edges(&self, vertex: usize) -> Result<&[usize], MeshSymmetryError> {
        lookup(&self.vertex_edges, ComponentKind::Vertex, vertex).map(Vec::as_slice)
    }

    fn face_local_siblings(
        &self,
        vertex: usize,
        face: usize,
    ) -> Result<&[usize], MeshSymmetryError> {
        self.check_index(ComponentKind::Face, face)?;
        let per_face = lookup(&self.face_siblings, ComponentKind::Vertex, vertex)?;
        Ok(per_face.get(&face).map_or(&[][..], Vec::as_slice))
    }
}
