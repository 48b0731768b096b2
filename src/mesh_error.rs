//! MeshSymmetryError: Unified error type for mesh-symmetry public APIs
//!
//! Every fallible operation in the crate (topology queries, seed validation,
//! propagation and side classification) reports through this one type so
//! callers can match on a single enum.

use thiserror::Error;

use crate::topology::component::ComponentKind;

/// Why a [`ComponentSeed`](crate::symmetry::seed::ComponentSeed) was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SeedDefect {
    /// A seed vertex does not lie on its paired seed edge.
    #[error("vertex {vertex} is not on edge {edge}")]
    VertexNotOnEdge { vertex: usize, edge: usize },
    /// A seed edge does not border its paired seed face.
    #[error("edge {edge} is not on face {face}")]
    EdgeNotOnFace { edge: usize, face: usize },
}

/// Unified error type for mesh-symmetry operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshSymmetryError {
    /// A component index is outside the bounds of its table.
    #[error("{kind} index {index} out of range (count = {count})")]
    OutOfRange {
        kind: ComponentKind,
        index: usize,
        count: usize,
    },
    /// The seed pair is not incident the way propagation needs it to be.
    #[error("Invalid seed: {0}")]
    InvalidSeed(#[from] SeedDefect),
    /// A polygon loop has too few vertices to bound a face.
    #[error("Topology error: face {face} has {found} vertices (expected at least 3)")]
    DegenerateFace { face: usize, found: usize },
    /// A polygon loop visits the same vertex twice.
    #[error("Topology error: face {face} repeats vertex {vertex}")]
    RepeatedFaceVertex { face: usize, vertex: usize },
    /// An edge borders more than two faces.
    #[error("Topology error: non-manifold edge {edge} borders {faces} faces")]
    NonManifoldEdge { edge: usize, faces: usize },
    /// A symmetry table was used with a topology of a different size.
    #[error("Topology mismatch: table holds {expected} {kind}s but topology has {found}")]
    TopologyMismatch {
        kind: ComponentKind,
        expected: usize,
        found: usize,
    },
    /// Side classification was requested before any symmetry was propagated.
    #[error("Vertex symmetry must be computed before sides can be classified")]
    SymmetryNotComputed,
    /// The mirror relation stored in a table is not an involution.
    #[error("Invariant violated: {kind} {index} maps to {mirror}, which does not map back")]
    BrokenInvolution {
        kind: ComponentKind,
        index: usize,
        mirror: usize,
    },
}

impl MeshSymmetryError {
    /// Shorthand for building an [`MeshSymmetryError::OutOfRange`].
    #[inline]
    pub fn out_of_range(kind: ComponentKind, index: usize, count: usize) -> Self {
        MeshSymmetryError::OutOfRange { kind, index, count }
    }
}
