//! Invariant checks for symmetry state.
//!
//! Checks are always available through [`DebugInvariants::validate_invariants`];
//! the panicking form only fires in debug builds or with the
//! `strict-invariants` / `check-invariants` features.

use crate::mesh_error::MeshSymmetryError;

/// Types whose internal consistency can be verified after mutation.
pub trait DebugInvariants {
    /// Panic on the first broken invariant when invariant checking is enabled;
    /// no-op otherwise.
    fn debug_assert_invariants(&self);
    /// Check every invariant and report the first violation.
    fn validate_invariants(&self) -> Result<(), MeshSymmetryError>;
}

/// Evaluate a `Result`-returning check and panic with `context` on `Err`,
/// only when invariant checking is compiled in.
#[macro_export]
macro_rules! debug_invariants {
    ($check:expr, $($context:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(err) = $check {
            panic!(concat!("[invariants] ", $($context)*, ": {}"), err);
        }
    };
}
