//! Topology validation helpers applied while ingesting polygon loops.

use crate::mesh_error::MeshSymmetryError;

/// Optional validation toggles for polygon-loop ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopologyValidationOptions {
    /// Reject faces whose loop visits a vertex more than once.
    pub check_repeated_vertices: bool,
    /// How to handle edges bordering more than two faces.
    pub non_manifold: NonManifoldHandling,
}

impl TopologyValidationOptions {
    /// Enable all checks and treat non-manifold edges as errors.
    pub fn all() -> Self {
        Self {
            check_repeated_vertices: true,
            non_manifold: NonManifoldHandling::Error,
        }
    }

    /// Disable every optional check. Vertex indices and face sizes are still
    /// checked, since adjacency cannot be built without them.
    pub fn none() -> Self {
        Self {
            check_repeated_vertices: false,
            non_manifold: NonManifoldHandling::Ignore,
        }
    }
}

impl Default for TopologyValidationOptions {
    fn default() -> Self {
        Self {
            check_repeated_vertices: true,
            non_manifold: NonManifoldHandling::Warn,
        }
    }
}

/// Behavior for non-manifold detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonManifoldHandling {
    /// Skip non-manifold detection.
    Ignore,
    /// Log a warning on non-manifold edges.
    Warn,
    /// Return an error on non-manifold edges.
    Error,
}

/// Check a single face loop against `options`.
///
/// Loops shorter than three vertices are always rejected.
pub(crate) fn validate_face_loop(
    face: usize,
    vertices: &[usize],
    options: &TopologyValidationOptions,
) -> Result<(), MeshSymmetryError> {
    if vertices.len() < 3 {
        return Err(MeshSymmetryError::DegenerateFace {
            face,
            found: vertices.len(),
        });
    }
    if options.check_repeated_vertices {
        for (i, &v) in vertices.iter().enumerate() {
            if vertices[..i].contains(&v) {
                return Err(MeshSymmetryError::RepeatedFaceVertex { face, vertex: v });
            }
        }
    }
    Ok(())
}

/// Apply the non-manifold policy to every edge's bordering-face list.
pub(crate) fn validate_non_manifold(
    edge_faces: &[Vec<usize>],
    handling: NonManifoldHandling,
) -> Result<(), MeshSymmetryError> {
    if handling == NonManifoldHandling::Ignore {
        return Ok(());
    }
    for (edge, faces) in edge_faces.iter().enumerate() {
        let count = faces.len();
        if count > 2 {
            match handling {
                NonManifoldHandling::Warn => {
                    log::warn!("Non-manifold edge detected: edge={edge} incident_faces={count}");
                }
                NonManifoldHandling::Error => {
                    return Err(MeshSymmetryError::NonManifoldEdge { edge, faces: count });
                }
                NonManifoldHandling::Ignore => {}
            }
        }
    }
    Ok(())
}
