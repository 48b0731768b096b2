//! Left/right/center classification from a completed mirror table.
//!
//! Vertex sides are grown breadth-first from caller-given left seeds, then from
//! the mirrors of those seeds for the right side. Edge and face sides are then
//! derived from their vertices.

use std::collections::VecDeque;

use crate::mesh_error::MeshSymmetryError;
use crate::symmetry::table::{Side, SymmetryTable};
use crate::topology::component::ComponentKind;
use crate::topology::mesh_topology::MeshTopology;

/// Side of an edge whose endpoints lie on `s0` and `s1`.
///
/// Center only if both endpoints are center; otherwise right wins over left.
pub fn edge_side(s0: Side, s1: Side) -> Side {
    match (s0, s1) {
        (Side::Center, Side::Center) => Side::Center,
        (Side::Right, _) | (_, Side::Right) => Side::Right,
        _ => Side::Left,
    }
}

/// Side of a face whose vertices lie on `sides`.
///
/// A face touching both left and right vertices is center, as is a face
/// touching neither.
pub fn face_side<I: IntoIterator<Item = Side>>(sides: I) -> Side {
    let (mut on_left, mut on_right) = (false, false);
    for side in sides {
        on_left |= side == Side::Left;
        on_right |= side == Side::Right;
    }
    let left = if on_left { Side::Left } else { Side::Center };
    let right = if on_right { Side::Right } else { Side::Center };
    Side::from_value(left.value() + right.value()).unwrap_or(Side::Center)
}

/// Fills the side arrays of a [`SymmetryTable`].
pub struct SideClassifier<'a, T: MeshTopology + ?Sized> {
    topology: &'a T,
    table: &'a mut SymmetryTable,
}

impl<'a, T: MeshTopology + ?Sized> SideClassifier<'a, T> {
    /// Fails with [`MeshSymmetryError::TopologyMismatch`] if `table` was not
    /// sized for `topology`.
    pub fn new(topology: &'a T, table: &'a mut SymmetryTable) -> Result<Self, MeshSymmetryError> {
        table.ensure_matches(topology)?;
        Ok(Self { topology, table })
    }

    /// Classify every vertex, edge and face from `left_seeds`.
    ///
    /// Requires vertex symmetry to have been propagated. Seeds are range-checked
    /// before the table is touched.
    pub fn run<I>(mut self, left_seeds: I) -> Result<(), MeshSymmetryError>
    where
        I: IntoIterator<Item = usize>,
    {
        let seeds: Vec<usize> = left_seeds.into_iter().collect();
        for &seed in &seeds {
            self.topology.check_index(ComponentKind::Vertex, seed)?;
        }
        if !self.table.has_vertex_symmetry() {
            return Err(MeshSymmetryError::SymmetryNotComputed);
        }

        self.classify_vertices(&seeds)?;
        self.finalize()?;

        log::debug!(
            "Classified sides from {} left seed(s): left={} right={} center={}",
            seeds.len(),
            self.count_vertices(Side::Left),
            self.count_vertices(Side::Right),
            self.count_vertices(Side::Center)
        );
        Ok(())
    }

    /// Derive edge and face sides from the current vertex sides.
    ///
    /// Unclassified vertices count as center.
    pub fn finalize(&mut self) -> Result<(), MeshSymmetryError> {
        let topology = self.topology;
        let vertex_side = |v: usize| self.table.vertices().side(v).unwrap_or(Side::Center);

        let mut edge_sides = Vec::with_capacity(topology.edge_count());
        for edge in 0..topology.edge_count() {
            let [a, b] = topology.edge_vertices(edge)?;
            edge_sides.push(edge_side(vertex_side(a), vertex_side(b)));
        }

        let mut face_sides = Vec::with_capacity(topology.face_count());
        for face in 0..topology.face_count() {
            let vertices = topology.face_vertices(face)?;
            face_sides.push(face_side(vertices.iter().map(|&v| vertex_side(v))));
        }

        let edges = self.table.component_mut(ComponentKind::Edge);
        for (edge, side) in edge_sides.into_iter().enumerate() {
            edges.set_side(edge, side);
        }
        let faces = self.table.component_mut(ComponentKind::Face);
        for (face, side) in face_sides.into_iter().enumerate() {
            faces.set_side(face, side);
        }
        Ok(())
    }

    fn classify_vertices(&mut self, left_seeds: &[usize]) -> Result<(), MeshSymmetryError> {
        let mut visited = vec![false; self.topology.vertex_count()];
        let mut queue = VecDeque::new();
        self.table
            .component_mut(ComponentKind::Vertex)
            .fill_sides(Some(Side::Center));

        for &v in left_seeds {
            queue.push_back(v);
            self.set_vertex_side(v, Side::Left);
        }
        self.grow(&mut queue, &mut visited, Side::Left)?;

        for &v in left_seeds {
            let Some(mirror) = self.table.vertices().mirror(v) else {
                continue;
            };
            queue.push_back(mirror);
            // A seed on the plane is its own mirror and stays center.
            if !self.table.vertices().is_self_symmetric(mirror) {
                self.set_vertex_side(mirror, Side::Right);
            }
        }
        self.grow(&mut queue, &mut visited, Side::Right)
    }

    /// Flood `side` outward from the queued vertices.
    ///
    /// Self-symmetric vertices become center and stop the flood. Left growth
    /// never steps onto a vertex's own mirror; right growth relies on the
    /// vertices visited during left growth to stay on its side.
    fn grow(
        &mut self,
        queue: &mut VecDeque<usize>,
        visited: &mut [bool],
        side: Side,
    ) -> Result<(), MeshSymmetryError> {
        let topology = self.topology;
        let exclude_mirrors = side == Side::Left;

        while let Some(v) = queue.pop_front() {
            if visited[v] {
                continue;
            }
            visited[v] = true;

            if self.table.vertices().is_self_symmetric(v) {
                self.set_vertex_side(v, Side::Center);
                continue;
            }
            self.set_vertex_side(v, side);

            for &n in topology.vertex_neighbors(v)? {
                if visited[n] {
                    continue;
                }
                if exclude_mirrors && self.table.vertices().mirror(n) == Some(v) {
                    continue;
                }
                queue.push_back(n);
            }
        }
        Ok(())
    }

    #[inline]
    fn set_vertex_side(&mut self, vertex: usize, side: Side) {
        self.table
            .component_mut(ComponentKind::Vertex)
            .set_side(vertex, side);
    }

    fn count_vertices(&self, side: Side) -> usize {
        self.table
            .vertices()
            .sides()
            .iter()
            .filter(|&&s| s == Some(side))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symmetry::propagate::SymmetryPropagator;
    use crate::symmetry::seed::ComponentSeed;
    use crate::topology::MeshData;

    #[test]
    fn edge_side_rules() {
        use Side::*;
        assert_eq!(edge_side(Center, Center), Center);
        assert_eq!(edge_side(Left, Right), Right);
        assert_eq!(edge_side(Right, Left), Right);
        assert_eq!(edge_side(Center, Right), Right);
        assert_eq!(edge_side(Left, Center), Left);
        assert_eq!(edge_side(Left, Left), Left);
    }

    #[test]
    fn face_side_collapses_mixed_faces_to_center() {
        use Side::*;
        assert_eq!(face_side([Left, Center, Left]), Left);
        assert_eq!(face_side([Right, Center]), Right);
        assert_eq!(face_side([Left, Right, Left]), Center);
        assert_eq!(face_side([Center, Center, Center]), Center);
        assert_eq!(face_side(std::iter::empty()), Center);
    }

    // Square pyramid: base 0-3, apex 4 on the mirror plane; 0 <-> 1, 3 <-> 2.
    fn pyramid_table() -> (MeshData, SymmetryTable) {
        let faces: [&[usize]; 5] = [&[0, 3, 2, 1], &[0, 1, 4], &[1, 2, 4], &[2, 3, 4], &[3, 0, 4]];
        let mesh = MeshData::from_polygons(5, faces).unwrap();
        let mut table = SymmetryTable::new(&mesh);
        let e04 = mesh.edge_between(0, 4).unwrap();
        let e14 = mesh.edge_between(1, 4).unwrap();
        let seed = ComponentSeed::new((4, 2), (e04, e14), (4, 4));
        SymmetryPropagator::new(&mesh, &mut table)
            .unwrap()
            .run(&seed)
            .unwrap();
        (mesh, table)
    }

    #[test]
    fn requires_vertex_symmetry() {
        let mesh = MeshData::from_polygons(3, [[0usize, 1, 2]]).unwrap();
        let mut table = SymmetryTable::new(&mesh);
        let result = SideClassifier::new(&mesh, &mut table).unwrap().run([0]);
        assert_eq!(result, Err(MeshSymmetryError::SymmetryNotComputed));
    }

    #[test]
    fn rejects_out_of_range_seed() {
        let (mesh, mut table) = pyramid_table();
        let result = SideClassifier::new(&mesh, &mut table).unwrap().run([9]);
        assert!(matches!(result, Err(MeshSymmetryError::OutOfRange { index: 9, .. })));
        assert!(table.vertices().sides().iter().all(Option::is_none));
    }

    #[test]
    fn pyramid_sides() {
        let (mesh, mut table) = pyramid_table();
        SideClassifier::new(&mesh, &mut table).unwrap().run([0]).unwrap();

        assert_eq!(table.vertices().signed_sides(), vec![1, -1, -1, 1, 0]);
        // Edges in discovery order: 0-3, 3-2, 2-1, 1-0, 1-4, 4-0, 2-4, 3-4.
        assert_eq!(table.edges().signed_sides(), vec![1, -1, -1, -1, -1, 1, -1, 1]);
        assert_eq!(table.faces().signed_sides(), vec![0, 0, -1, 0, 1]);
    }

    #[test]
    fn center_seed_stays_center() {
        let (mesh, mut table) = pyramid_table();
        SideClassifier::new(&mesh, &mut table)
            .unwrap()
            .run([4, 0])
            .unwrap();
        assert_eq!(table.vertex_side(4), Ok(Some(Side::Center)));
        assert_eq!(table.vertices().signed_sides(), vec![1, -1, -1, 1, 0]);
    }

    #[test]
    fn mirror_of_left_seed_is_right_even_when_reached_from_the_left() {
        // Pairing 0 <-> 2 and 1 <-> 3 on one quad lets left growth walk
        // 0 -> 1 -> 2 before the right phase starts.
        let mesh = MeshData::from_polygons(4, [[0usize, 1, 2, 3]]).unwrap();
        let mut table = SymmetryTable::new(&mesh);
        let vertices = table.component_mut(ComponentKind::Vertex);
        vertices.mark_pair(0, 2);
        vertices.mark_pair(1, 3);

        SideClassifier::new(&mesh, &mut table).unwrap().run([0]).unwrap();
        assert_eq!(table.vertex_side(2), Ok(Some(Side::Right)));
        assert_eq!(table.vertices().signed_sides(), vec![1, 1, -1, 1]);
        // Edges 0-1, 1-2, 2-3, 3-0.
        assert_eq!(table.edges().signed_sides(), vec![1, -1, -1, 1]);
        assert_eq!(table.faces().signed_sides(), vec![0]);
    }
}
