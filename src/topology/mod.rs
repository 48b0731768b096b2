//! Top-level module for mesh topology abstractions.
//!
//! The symmetry engine never sees a native mesh representation. It reads
//! adjacency through the [`MeshTopology`] trait, which is a set of flat,
//! index-keyed queries over vertices, edges and faces. [`MeshData`] is the
//! in-memory implementation built from polygon vertex loops.

pub mod component;
pub mod mesh_data;
pub mod mesh_topology;
pub mod utils;
pub mod validation;

pub use component::ComponentKind;
pub use mesh_data::MeshData;
pub use mesh_topology::MeshTopology;
pub use validation::{NonManifoldHandling, TopologyValidationOptions};
