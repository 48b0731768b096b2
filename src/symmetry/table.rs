//! `SymmetryTable`: the mutable state one propagation run builds.
//!
//! For each component kind the table keeps three parallel arrays:
//! - an examined flag, set once a component's mirror has been fixed;
//! - the mirror index (`None` while unknown, `Some(i)` for `i` itself when the
//!   component lies on the symmetry plane);
//! - the side label, filled by side classification.
//!
//! Mirror entries are kept as an involution: marking `a <-> b` unlinks any
//! previous partner of `a` or `b`, so `mirror(mirror(c)) == c` holds for every
//! mapped component at all times.

use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshSymmetryError;
use crate::topology::component::ComponentKind;
use crate::topology::mesh_topology::MeshTopology;

/// Which side of the symmetry plane a component lies on.
///
/// The discriminants match the signed convention used by host applications:
/// left is `1`, center `0`, right `-1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum Side {
    Right = -1,
    Center = 0,
    Left = 1,
}

impl Side {
    /// Signed value of this side.
    #[inline]
    pub const fn value(self) -> i8 {
        self as i8
    }

    /// Inverse of [`Side::value`].
    pub const fn from_value(value: i8) -> Option<Side> {
        match value {
            -1 => Some(Side::Right),
            0 => Some(Side::Center),
            1 => Some(Side::Left),
            _ => None,
        }
    }
}

/// Examined flags, mirror indices and sides for one component kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentTable {
    examined: Vec<bool>,
    symmetry: Vec<Option<usize>>,
    sides: Vec<Option<Side>>,
}

impl ComponentTable {
    fn new(count: usize) -> Self {
        Self {
            examined: vec![false; count],
            symmetry: vec![None; count],
            sides: vec![None; count],
        }
    }

    /// Number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.symmetry.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symmetry.is_empty()
    }

    /// Mirror of `index`, or `None` if unknown or out of range.
    #[inline]
    pub fn mirror(&self, index: usize) -> Option<usize> {
        self.symmetry.get(index).copied().flatten()
    }

    /// Whether `index` has been examined. Out-of-range indices are not.
    #[inline]
    pub fn is_examined(&self, index: usize) -> bool {
        self.examined.get(index).copied().unwrap_or(false)
    }

    /// Side of `index`, or `None` if unclassified or out of range.
    #[inline]
    pub fn side(&self, index: usize) -> Option<Side> {
        self.sides.get(index).copied().flatten()
    }

    /// Whether `index` is its own mirror.
    #[inline]
    pub fn is_self_symmetric(&self, index: usize) -> bool {
        self.mirror(index) == Some(index)
    }

    pub fn symmetry_indices(&self) -> &[Option<usize>] {
        &self.symmetry
    }

    pub fn sides(&self) -> &[Option<Side>] {
        &self.sides
    }

    /// Number of components examined so far.
    pub fn examined_count(&self) -> usize {
        self.examined.iter().filter(|&&e| e).count()
    }

    /// Number of components with a known mirror.
    pub fn mapped_count(&self) -> usize {
        self.symmetry.iter().flatten().count()
    }

    /// Mirror indices with `-1` for unknown entries.
    pub fn signed_symmetry_indices(&self) -> Vec<i64> {
        self.symmetry
            .iter()
            .map(|m| m.map_or(-1, |i| i as i64))
            .collect()
    }

    /// Sides as signed integers with `-1` for unclassified entries.
    pub fn signed_sides(&self) -> Vec<i32> {
        self.sides
            .iter()
            .map(|s| s.map_or(-1, |side| i32::from(side.value())))
            .collect()
    }

    /// Record `a` and `b` as mirrors of each other and mark both examined.
    pub(crate) fn mark_pair(&mut self, a: usize, b: usize) {
        for (this, other) in [(a, b), (b, a)] {
            if let Some(previous) = self.symmetry[this] {
                if previous != other && self.symmetry[previous] == Some(this) {
                    log::trace!("Unlinking stale mirror {previous} of {this}");
                    self.symmetry[previous] = None;
                }
            }
        }
        self.symmetry[a] = Some(b);
        self.symmetry[b] = Some(a);
        self.examined[a] = true;
        self.examined[b] = true;
    }

    pub(crate) fn set_side(&mut self, index: usize, side: Side) {
        self.sides[index] = Some(side);
    }

    pub(crate) fn fill_sides(&mut self, side: Option<Side>) {
        self.sides.iter_mut().for_each(|s| *s = side);
    }

    fn validate(&self, kind: ComponentKind) -> Result<(), MeshSymmetryError> {
        for (index, mirror) in self.symmetry.iter().enumerate() {
            let Some(mirror) = *mirror else { continue };
            if self.mirror(mirror) != Some(index) || !self.examined[index] {
                return Err(MeshSymmetryError::BrokenInvolution {
                    kind,
                    index,
                    mirror,
                });
            }
        }
        Ok(())
    }
}

/// Symmetry state for one mesh, sized from its topology.
///
/// A table is created fresh per mesh and rebuilt rather than patched when the
/// mesh changes; the only way to get an empty table back is to construct one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymmetryTable {
    vertices: ComponentTable,
    edges: ComponentTable,
    faces: ComponentTable,
    left_side_vertex_indices: Vec<usize>,
}

impl SymmetryTable {
    /// A table sized to `topology`, with every entry unknown.
    pub fn new<T: MeshTopology + ?Sized>(topology: &T) -> Self {
        Self::with_counts(
            topology.vertex_count(),
            topology.edge_count(),
            topology.face_count(),
        )
    }

    /// A table for the given component counts, with every entry unknown.
    pub fn with_counts(vertices: usize, edges: usize, faces: usize) -> Self {
        Self {
            vertices: ComponentTable::new(vertices),
            edges: ComponentTable::new(edges),
            faces: ComponentTable::new(faces),
            left_side_vertex_indices: Vec::new(),
        }
    }

    /// Per-kind state.
    pub fn component(&self, kind: ComponentKind) -> &ComponentTable {
        match kind {
            ComponentKind::Vertex => &self.vertices,
            ComponentKind::Edge => &self.edges,
            ComponentKind::Face => &self.faces,
        }
    }

    pub(crate) fn component_mut(&mut self, kind: ComponentKind) -> &mut ComponentTable {
        match kind {
            ComponentKind::Vertex => &mut self.vertices,
            ComponentKind::Edge => &mut self.edges,
            ComponentKind::Face => &mut self.faces,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &ComponentTable {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &ComponentTable {
        &self.edges
    }

    #[inline]
    pub fn faces(&self) -> &ComponentTable {
        &self.faces
    }

    /// Vertices recorded as definitely on the left side.
    pub fn left_side_vertex_indices(&self) -> &[usize] {
        &self.left_side_vertex_indices
    }

    pub(crate) fn record_left_vertex(&mut self, vertex: usize) {
        self.left_side_vertex_indices.push(vertex);
    }

    /// Fails with [`MeshSymmetryError::TopologyMismatch`] unless this table was
    /// sized for a topology with the same counts as `topology`.
    pub fn ensure_matches<T: MeshTopology + ?Sized>(
        &self,
        topology: &T,
    ) -> Result<(), MeshSymmetryError> {
        for kind in ComponentKind::ALL {
            let expected = self.component(kind).len();
            let found = topology.count(kind);
            if expected != found {
                return Err(MeshSymmetryError::TopologyMismatch {
                    kind,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }

    fn checked(
        &self,
        kind: ComponentKind,
        index: usize,
    ) -> Result<&ComponentTable, MeshSymmetryError> {
        let table = self.component(kind);
        if index < table.len() {
            Ok(table)
        } else {
            Err(MeshSymmetryError::out_of_range(kind, index, table.len()))
        }
    }

    /// Mirror of component `index` of `kind`; `Ok(None)` while unknown.
    pub fn symmetry(
        &self,
        kind: ComponentKind,
        index: usize,
    ) -> Result<Option<usize>, MeshSymmetryError> {
        self.checked(kind, index).map(|t| t.mirror(index))
    }

    /// Side of component `index` of `kind`; `Ok(None)` while unclassified.
    pub fn side(&self, kind: ComponentKind, index: usize) -> Result<Option<Side>, MeshSymmetryError> {
        self.checked(kind, index).map(|t| t.side(index))
    }

    /// Whether component `index` of `kind` has been examined.
    pub fn is_examined(&self, kind: ComponentKind, index: usize) -> Result<bool, MeshSymmetryError> {
        self.checked(kind, index).map(|t| t.is_examined(index))
    }

    pub fn vertex_symmetry(&self, vertex: usize) -> Result<Option<usize>, MeshSymmetryError> {
        self.symmetry(ComponentKind::Vertex, vertex)
    }

    pub fn edge_symmetry(&self, edge: usize) -> Result<Option<usize>, MeshSymmetryError> {
        self.symmetry(ComponentKind::Edge, edge)
    }

    pub fn face_symmetry(&self, face: usize) -> Result<Option<usize>, MeshSymmetryError> {
        self.symmetry(ComponentKind::Face, face)
    }

    pub fn vertex_side(&self, vertex: usize) -> Result<Option<Side>, MeshSymmetryError> {
        self.side(ComponentKind::Vertex, vertex)
    }

    pub fn edge_side(&self, edge: usize) -> Result<Option<Side>, MeshSymmetryError> {
        self.side(ComponentKind::Edge, edge)
    }

    pub fn face_side(&self, face: usize) -> Result<Option<Side>, MeshSymmetryError> {
        self.side(ComponentKind::Face, face)
    }

    /// True once any vertex has a known mirror.
    pub fn has_vertex_symmetry(&self) -> bool {
        self.vertices.symmetry.iter().any(Option::is_some)
    }
}

impl DebugInvariants for SymmetryTable {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "SymmetryTable");
    }

    fn validate_invariants(&self) -> Result<(), MeshSymmetryError> {
        for kind in ComponentKind::ALL {
            self.component(kind).validate(kind)?;
        }
        Ok(())
    }
}
