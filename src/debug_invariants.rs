//! Invariant checking shared by the validated mesh types.

use crate::mesh_error::MeshSlabError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), MeshSlabError>;

    /// Panic on the first violated invariant in debug builds or when the
    /// `check-invariants` feature is enabled. No-op otherwise.
    fn debug_assert_invariants(&self) {
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        if let Err(e) = self.validate_invariants() {
            panic!("[invariants] {e}");
        }
    }
}
