//! Bilateral symmetry tables for polygon meshes.
//!
//! Given one mirrored pair of faces, edges and vertices, [`compute_symmetry`]
//! propagates the pairing across the connected shell and returns a
//! [`SymmetryTable`]. [`compute_sides`] then labels every component left,
//! right or center. [`PolySymmetry`] bundles both steps around a borrowed
//! topology.
//!
//! ```rust
//! # use mesh_symmetry::prelude::*;
//! // Four quads in a row; the middle column 2-7 lies on the mirror plane.
//! let faces: Vec<[usize; 4]> = (0..4).map(|k| [k, k + 1, k + 6, k + 5]).collect();
//! let mesh = MeshData::from_polygons(10, &faces).unwrap();
//! let e16 = mesh.edge_between(1, 6).unwrap();
//! let e38 = mesh.edge_between(3, 8).unwrap();
//!
//! let mut symmetry = PolySymmetry::initialize(&mesh);
//! symmetry
//!     .compute_symmetry(&ComponentSeed::new((0, 3), (e16, e38), (1, 3)).with_left_vertex(0))
//!     .unwrap();
//! symmetry.compute_recorded_sides().unwrap();
//!
//! let table = symmetry.table();
//! assert_eq!(table.vertex_symmetry(0), Ok(Some(4)));
//! assert_eq!(table.vertex_side(2), Ok(Some(Side::Center)));
//! assert_eq!(table.vertex_side(4), Ok(Some(Side::Right)));
//! ```

pub mod propagate;
pub mod seed;
pub mod sides;
pub mod table;

pub use propagate::{PropagationStats, SymmetryPropagator};
pub use seed::ComponentSeed;
pub use sides::SideClassifier;
pub use table::{ComponentTable, Side, SymmetryTable};

use crate::mesh_error::MeshSymmetryError;
use crate::topology::mesh_topology::MeshTopology;

/// Propagate `seed` over `topology` into a fresh table.
pub fn compute_symmetry<T: MeshTopology + ?Sized>(
    topology: &T,
    seed: &ComponentSeed,
) -> Result<(SymmetryTable, PropagationStats), MeshSymmetryError> {
    let mut table = SymmetryTable::new(topology);
    let stats = SymmetryPropagator::new(topology, &mut table)?.run(seed)?;
    Ok((table, stats))
}

/// Classify sides in `table` from `left_seeds`.
pub fn compute_sides<T, I>(
    topology: &T,
    table: &mut SymmetryTable,
    left_seeds: I,
) -> Result<(), MeshSymmetryError>
where
    T: MeshTopology + ?Sized,
    I: IntoIterator<Item = usize>,
{
    SideClassifier::new(topology, table)?.run(left_seeds)
}

/// A topology paired with the symmetry table computed for it.
#[derive(Debug)]
pub struct PolySymmetry<'a, T: MeshTopology + ?Sized> {
    topology: &'a T,
    table: SymmetryTable,
}

impl<'a, T: MeshTopology + ?Sized> PolySymmetry<'a, T> {
    /// Size a fresh table to `topology`.
    pub fn initialize(topology: &'a T) -> Self {
        Self {
            topology,
            table: SymmetryTable::new(topology),
        }
    }

    /// Discard all results, keeping the topology.
    pub fn reset(&mut self) {
        self.table = SymmetryTable::new(self.topology);
    }

    /// Propagate from `seed`, replacing any earlier results.
    ///
    /// On error the previous table is kept as it was.
    pub fn compute_symmetry(
        &mut self,
        seed: &ComponentSeed,
    ) -> Result<PropagationStats, MeshSymmetryError> {
        let (table, stats) = compute_symmetry(self.topology, seed)?;
        self.table = table;
        Ok(stats)
    }

    /// Classify sides from `left_seeds`. Requires [`Self::compute_symmetry`].
    pub fn compute_sides<I>(&mut self, left_seeds: I) -> Result<(), MeshSymmetryError>
    where
        I: IntoIterator<Item = usize>,
    {
        compute_sides(self.topology, &mut self.table, left_seeds)
    }

    /// Classify sides from the left vertices recorded by propagation seeds.
    pub fn compute_recorded_sides(&mut self) -> Result<(), MeshSymmetryError> {
        let seeds = self.table.left_side_vertex_indices().to_vec();
        self.compute_sides(seeds)
    }

    pub fn topology(&self) -> &'a T {
        self.topology
    }

    pub fn table(&self) -> &SymmetryTable {
        &self.table
    }

    pub fn into_table(self) -> SymmetryTable {
        self.table
    }
}
