//! Consistency checks for built topology snapshots.
//!
//! [`MeshTopology`](crate::topology::mesh_topology::MeshTopology) runs its
//! checks at the end of every build and rebuild. They are compiled in for
//! debug builds and behind the `check-invariants` / `strict-invariants`
//! features.

use crate::mesh_error::MeshError;

/// Cross-table consistency of a snapshot (cells, edges, cell-to-edge and
/// edge-to-cell all describe the same mesh).
pub trait DebugInvariants {
    /// Panic on the first inconsistency when checks are compiled in.
    fn debug_assert_invariants(&self);
    /// Report the first inconsistency as [`MeshError::InvariantViolation`].
    fn validate_invariants(&self) -> Result<(), MeshError>;
}

/// Run `validate_invariants()` (or any `Result` check) and panic with the
/// given context on error; expands to nothing when checks are compiled out.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
