#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-symmetry
//!
//! mesh-symmetry finds bilateral (mirror) symmetry in the connectivity of a
//! polygon mesh. Starting from one known pair of mirrored faces, edges and
//! vertices, it walks the mesh and pairs every reachable component with its
//! counterpart, then classifies each component as left, right or center of the
//! mirror plane. Only connectivity is used; vertex positions are never read.
//!
//! ## Features
//! - [`MeshTopology`](topology::MeshTopology): flat, fallible adjacency queries
//!   over vertices, edges and faces
//! - [`MeshData`](topology::MeshData): topology built from polygon vertex loops
//! - [`SymmetryTable`](symmetry::SymmetryTable): per-component mirror index,
//!   examined flag and side, serializable with serde
//! - [`PolySymmetry`](symmetry::PolySymmetry): propagation and side
//!   classification around a borrowed topology
//!
//! ## Determinism
//!
//! Ties between candidate faces and edges are broken by the order the topology
//! returns them in. [`MeshData`](topology::MeshData) numbers edges in
//! first-encounter order, so the same polygon list always yields the same table.
//!
//! ## Invariant checks
//!
//! Tables implement [`DebugInvariants`]. The checks run in debug builds, and in
//! release builds with the `strict-invariants` or `check-invariants` feature.

pub mod debug_invariants;
pub mod mesh_error;
pub mod symmetry;
pub mod topology;

pub use debug_invariants::DebugInvariants;
pub use mesh_error::MeshSymmetryError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::mesh_error::{MeshSymmetryError, SeedDefect};
    pub use crate::symmetry::{
        ComponentSeed, ComponentTable, PolySymmetry, PropagationStats, Side, SymmetryTable,
        compute_sides, compute_symmetry,
    };
    pub use crate::topology::{
        ComponentKind, MeshData, MeshTopology, NonManifoldHandling, TopologyValidationOptions,
    };
}
