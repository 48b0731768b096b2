#![allow(dead_code)]
use mesh_symmetry::prelude::*;

/// Closed bipyramid over an `n`-vertex ring.
///
/// Ring vertices are `0..n`, the north apex is `n` and the south apex `n + 1`.
/// Faces `0..n` fan around the north apex, faces `n..2n` around the south.
pub fn bipyramid(n: usize) -> MeshData {
    let (north, south) = (n, n + 1);
    let top = (0..n).map(|k| [north, k, (k + 1) % n]);
    let bottom = (0..n).map(|k| [south, (k + 1) % n, k]);
    MeshData::from_polygons(n + 2, top.chain(bottom)).unwrap()
}

/// Square pyramid: base `0..4`, apex `4`.
pub fn pyramid() -> MeshData {
    let faces: [&[usize]; 5] = [&[0, 3, 2, 1], &[0, 1, 4], &[1, 2, 4], &[2, 3, 4], &[3, 0, 4]];
    MeshData::from_polygons(5, faces).unwrap()
}

/// Open strip of four quads over a 5 x 2 vertex grid (`0..5` above `5..10`).
pub fn strip() -> MeshData {
    let faces: Vec<[usize; 4]> = (0..4).map(|k| [k, k + 1, k + 6, k + 5]).collect();
    MeshData::from_polygons(10, &faces).unwrap()
}

/// Unit cube, bottom `0..4` and top `4..8`.
pub fn cube() -> MeshData {
    MeshData::from_polygons(
        8,
        [
            [0usize, 3, 2, 1],
            [4, 5, 6, 7],
            [0, 1, 5, 4],
            [2, 3, 7, 6],
            [0, 4, 7, 3],
            [1, 2, 6, 5],
        ],
    )
    .unwrap()
}

pub fn tetrahedron() -> MeshData {
    MeshData::from_polygons(4, [[0usize, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]]).unwrap()
}

/// Edge between `a` and `b`, panicking if the mesh has none.
pub fn edge(mesh: &MeshData, a: usize, b: usize) -> usize {
    mesh.edge_between(a, b)
        .unwrap_or_else(|| panic!("no edge {a}-{b}"))
}

/// Assert every known mirror in `table` maps back to its source.
pub fn assert_involution(table: &SymmetryTable) {
    for kind in ComponentKind::ALL {
        let component = table.component(kind);
        for (i, mirror) in component.symmetry_indices().iter().enumerate() {
            if let Some(m) = *mirror {
                assert_eq!(component.mirror(m), Some(i), "{kind} {i} -> {m} does not map back");
            }
        }
    }
    assert_eq!(table.validate_invariants(), Ok(()));
}
