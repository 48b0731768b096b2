//! Breadth-first symmetry propagation across one mesh shell.
//!
//! Starting from a [`ComponentSeed`], the propagator alternates two steps:
//! cross a known edge pair to the pair of faces on its far side, then walk
//! both face boundaries in lockstep to pair up their vertices and edges. Newly
//! paired edges are queued and the loop continues until the queue drains.
//!
//! Every queued edge pair corresponds to an edge that was unexamined when it
//! was found, and every face pair marked was unexamined when chosen, so the
//! examined sets only grow and the loop terminates in `O(V + E + F)` steps.
//!
//! Ambiguities (no unexamined face on one side, an edge whose mirrored
//! endpoints do not share exactly one edge) skip that branch of the traversal.
//! Components never reached keep an unknown mirror; that is a normal outcome
//! for open meshes, not an error.

use std::collections::VecDeque;

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshSymmetryError;
use crate::symmetry::seed::ComponentSeed;
use crate::symmetry::table::SymmetryTable;
use crate::topology::component::ComponentKind;
use crate::topology::mesh_topology::MeshTopology;
use crate::topology::utils::ordered_intersection;

/// Counters collected during one propagation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropagationStats {
    /// Edge pairs taken off the queue.
    pub edge_pairs_processed: usize,
    /// Edge pairs with no unexamined face on at least one side.
    pub edge_pairs_skipped: usize,
    /// Face pairs marked after crossing an edge pair (the seed faces excluded).
    pub face_pairs_marked: usize,
    pub vertices_examined: usize,
    pub edges_examined: usize,
    pub faces_examined: usize,
}

/// Fills the mirror arrays of a [`SymmetryTable`] from a seed.
pub struct SymmetryPropagator<'a, T: MeshTopology + ?Sized> {
    topology: &'a T,
    table: &'a mut SymmetryTable,
    edge_queue: VecDeque<(usize, usize)>,
    stats: PropagationStats,
}

impl<'a, T: MeshTopology + ?Sized> SymmetryPropagator<'a, T> {
    /// Fails with [`MeshSymmetryError::TopologyMismatch`] if `table` was not
    /// sized for `topology`.
    pub fn new(topology: &'a T, table: &'a mut SymmetryTable) -> Result<Self, MeshSymmetryError> {
        table.ensure_matches(topology)?;
        Ok(Self {
            topology,
            table,
            edge_queue: VecDeque::new(),
            stats: PropagationStats::default(),
        })
    }

    /// Propagate from `seed` until no queued edge pair remains.
    ///
    /// The seed is validated first; an invalid seed leaves the table untouched.
    pub fn run(mut self, seed: &ComponentSeed) -> Result<PropagationStats, MeshSymmetryError> {
        seed.validate(self.topology)?;
        log::debug!(
            "Propagating symmetry from faces {:?}, edges {:?}, vertices {:?}",
            seed.faces,
            seed.edges,
            seed.vertices
        );

        if let Some(left) = seed.left_vertex {
            self.table.record_left_vertex(left);
        }
        self.edge_queue.push_back(seed.edges);
        self.bootstrap(seed)?;

        while let Some((e0, e1)) = self.edge_queue.pop_front() {
            self.stats.edge_pairs_processed += 1;
            self.mark(ComponentKind::Edge, e0, e1);

            let (Some(f0), Some(f1)) = self.unexamined_faces(e0, e1)? else {
                if self.stats.edge_pairs_processed == 1 {
                    log::warn!("Seed edges ({e0}, {e1}) have no unexamined faces; propagation stops at the seed");
                }
                self.stats.edge_pairs_skipped += 1;
                continue;
            };

            log::trace!("Crossing edges ({e0}, {e1}) to faces ({f0}, {f1})");
            self.mark(ComponentKind::Face, f0, f1);
            self.stats.face_pairs_marked += 1;

            self.match_face_vertices(f0, f1)?;
            self.match_face_edges(f0)?;
        }

        self.stats.vertices_examined = self.table.vertices().examined_count();
        self.stats.edges_examined = self.table.edges().examined_count();
        self.stats.faces_examined = self.table.faces().examined_count();
        self.table.debug_assert_invariants();

        log::debug!(
            "Symmetry propagation finished: vertices={}/{} edges={}/{} faces={}/{}",
            self.stats.vertices_examined,
            self.topology.vertex_count(),
            self.stats.edges_examined,
            self.topology.edge_count(),
            self.stats.faces_examined,
            self.topology.face_count()
        );
        Ok(self.stats)
    }

    /// The pair of unexamined faces on the far side of edges `e0` and `e1`.
    ///
    /// When the two edges border common faces (a center edge paired with
    /// itself, or edges meeting on a shared face) the pair is drawn from those
    /// common faces; otherwise one unexamined face is taken from each edge.
    /// A side with no candidate is `None`.
    pub fn unexamined_faces(
        &self,
        e0: usize,
        e1: usize,
    ) -> Result<(Option<usize>, Option<usize>), MeshSymmetryError> {
        let topology = self.topology;
        let shared = ordered_intersection(topology.edge_faces(e0)?, topology.edge_faces(e1)?);
        if shared.is_empty() {
            return Ok((self.unexamined_face(e0)?, self.unexamined_face(e1)?));
        }
        let faces = self.table.faces();
        let mut unexamined = shared.into_iter().filter(|&f| !faces.is_examined(f));
        Ok((unexamined.next(), unexamined.next()))
    }

    fn unexamined_face(&self, edge: usize) -> Result<Option<usize>, MeshSymmetryError> {
        let faces = self.table.faces();
        Ok(self
            .topology
            .edge_faces(edge)?
            .iter()
            .copied()
            .find(|&f| !faces.is_examined(f)))
    }

    /// Pair the seed vertices and faces, then the far endpoints of the seed
    /// edges, then walk the seed faces.
    fn bootstrap(&mut self, seed: &ComponentSeed) -> Result<(), MeshSymmetryError> {
        self.mark(ComponentKind::Vertex, seed.vertices.0, seed.vertices.1);
        self.mark(ComponentKind::Face, seed.faces.0, seed.faces.1);

        let next0 = self.far_endpoint(seed.edges.0)?;
        let next1 = self.far_endpoint(seed.edges.1)?;
        self.mark(ComponentKind::Vertex, next0, next1);

        self.match_face_vertices(seed.faces.0, seed.faces.1)
    }

    /// The endpoint of `edge` not yet examined; the second endpoint when both are.
    fn far_endpoint(&self, edge: usize) -> Result<usize, MeshSymmetryError> {
        let [a, b] = self.topology.edge_vertices(edge)?;
        Ok(if self.table.vertices().is_examined(a) { b } else { a })
    }

    /// Walk the boundaries of `f0` and `f1` in lockstep, pairing each
    /// unexamined sibling of a known vertex with the unexamined sibling of
    /// its mirror.
    fn match_face_vertices(&mut self, f0: usize, f1: usize) -> Result<(), MeshSymmetryError> {
        let topology = self.topology;
        let mut queue: VecDeque<usize> = topology
            .face_vertices(f0)?
            .iter()
            .copied()
            .filter(|&v| self.table.vertices().is_examined(v))
            .collect();

        while let Some(v0) = queue.pop_front() {
            let Some(v1) = self.table.vertices().mirror(v0) else {
                continue;
            };
            let next0 = self.unexamined_sibling(v0, f0)?;
            let next1 = self.unexamined_sibling(v1, f1)?;
            let (Some(next0), Some(next1)) = (next0, next1) else {
                continue;
            };
            self.mark(ComponentKind::Vertex, next0, next1);
            queue.push_back(next0);
        }
        Ok(())
    }

    fn unexamined_sibling(&self, vertex: usize, face: usize) -> Result<Option<usize>, MeshSymmetryError> {
        let vertices = self.table.vertices();
        Ok(self
            .topology
            .face_local_siblings(vertex, face)?
            .iter()
            .copied()
            .find(|&v| !vertices.is_examined(v)))
    }

    /// Pair every unexamined edge of `face` whose mirrored endpoints are joined
    /// by exactly one edge, queueing pairs whose mirror was still unexamined.
    fn match_face_edges(&mut self, face: usize) -> Result<(), MeshSymmetryError> {
        let topology = self.topology;
        for &edge in topology.face_edges(face)? {
            if self.table.edges().is_examined(edge) {
                continue;
            }
            let [a, b] = topology.edge_vertices(edge)?;
            let vertices = self.table.vertices();
            let (Some(ma), Some(mb)) = (vertices.mirror(a), vertices.mirror(b)) else {
                continue;
            };
            let shared = ordered_intersection(topology.vertex_edges(ma)?, topology.vertex_edges(mb)?);
            let &[mirror] = shared.as_slice() else {
                continue;
            };
            if !self.table.edges().is_examined(mirror) {
                self.edge_queue.push_back((edge, mirror));
            }
            self.mark(ComponentKind::Edge, edge, mirror);
        }
        Ok(())
    }

    #[inline]
    fn mark(&mut self, kind: ComponentKind, a: usize, b: usize) {
        self.table.component_mut(kind).mark_pair(a, b);
    }
}
