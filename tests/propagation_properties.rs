mod util;

use mesh_symmetry::prelude::*;
use proptest::prelude::*;
use util::*;

proptest! {
    #[test]
    fn bipyramid_mirrors_through_ring_vertex_zero(
        half in 2usize..=10,
        k in 0usize..20,
    ) {
        let n = 2 * half;
        let k = k % n;
        // Seed faces that meet on the plane, or one that lies across it,
        // stop propagation early.
        prop_assume!(k != half - 1 && k != n - 1);

        let mesh = bipyramid(n);
        let north = n;
        let seed = ComponentSeed::new(
            (k, n - k - 1),
            (edge(&mesh, north, k + 1), edge(&mesh, north, n - k - 1)),
            (north, north),
        )
        .with_left_vertex(1);

        let mut symmetry = PolySymmetry::initialize(&mesh);
        symmetry.compute_symmetry(&seed).unwrap();
        symmetry.compute_recorded_sides().unwrap();
        let table = symmetry.table();

        for v in 0..n {
            prop_assert_eq!(table.vertex_symmetry(v).unwrap(), Some((n - v) % n));
        }
        prop_assert_eq!(table.vertex_symmetry(n).unwrap(), Some(n));
        prop_assert_eq!(table.vertex_symmetry(n + 1).unwrap(), Some(n + 1));
        prop_assert_eq!(table.faces().mapped_count(), mesh.face_count());
        assert_involution(table);

        for v in 0..mesh.vertex_count() {
            let side = table.vertex_side(v).unwrap();
            if table.vertices().is_self_symmetric(v) {
                prop_assert_eq!(side, Some(Side::Center));
            }
            if side == Some(Side::Left) {
                let mirror = table.vertices().mirror(v).unwrap();
                prop_assert_eq!(table.vertex_side(mirror).unwrap(), Some(Side::Right));
            }
        }
    }

    #[test]
    fn every_crossing_examines_fresh_faces(
        half in 2usize..=10,
        k in 0usize..20,
    ) {
        let n = 2 * half;
        let k = k % n;
        prop_assume!(k != half - 1 && k != n - 1);

        let mesh = bipyramid(n);
        let north = n;
        let seed = ComponentSeed::new(
            (k, n - k - 1),
            (edge(&mesh, north, k + 1), edge(&mesh, north, n - k - 1)),
            (north, north),
        );
        let (table, stats) = compute_symmetry(&mesh, &seed).unwrap();

        // No face of these shells is its own mirror, so the seed pair and
        // every crossed pair each add two newly examined faces.
        prop_assert!((0..mesh.face_count()).all(|f| !table.faces().is_self_symmetric(f)));
        prop_assert_eq!(stats.faces_examined, 2 * (stats.face_pairs_marked + 1));
        prop_assert_eq!(stats.faces_examined, mesh.face_count());
        prop_assert_eq!(
            stats.edge_pairs_processed - stats.edge_pairs_skipped,
            stats.face_pairs_marked
        );
        // Each queued pair leads with an edge that was unexamined when queued.
        prop_assert!(stats.edge_pairs_processed <= stats.edges_examined);
    }

    #[test]
    fn any_incident_seed_keeps_the_table_consistent(
        n in 3usize..=9,
        faces in (0usize..18, 0usize..18),
        edges in (0usize..3, 0usize..3),
        ends in (0usize..2, 0usize..2),
    ) {
        let mesh = bipyramid(n);
        let f0 = faces.0 % mesh.face_count();
        let f1 = faces.1 % mesh.face_count();
        let e0 = mesh.face_edges(f0).unwrap()[edges.0];
        let e1 = mesh.face_edges(f1).unwrap()[edges.1];
        let v0 = mesh.edge_vertices(e0).unwrap()[ends.0];
        let v1 = mesh.edge_vertices(e1).unwrap()[ends.1];

        let seed = ComponentSeed::new((f0, f1), (e0, e1), (v0, v1));
        let (table, stats) = compute_symmetry(&mesh, &seed).unwrap();

        prop_assert!(stats.edge_pairs_processed >= 1);
        prop_assert!(stats.vertices_examined <= mesh.vertex_count());
        prop_assert!(stats.edges_examined <= mesh.edge_count());
        prop_assert!(stats.faces_examined <= mesh.face_count());
        assert_involution(&table);
    }
}
