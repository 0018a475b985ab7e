//! Ghost-layer widths on either side of a worker's slab.

use std::fmt;

/// Number of ghost cells (and ghost faces) a worker holds on each side.
///
/// Both widths are zero at a global domain boundary and for a serial run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct OverlapWidths {
    pub left: usize,
    pub right: usize,
}

impl OverlapWidths {
    pub const fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// No ghosts on either side.
    pub const fn none() -> Self {
        Self { left: 0, right: 0 }
    }

    /// Total ghost width, saturating.
    pub const fn total(&self) -> usize {
        self.left.saturating_add(self.right)
    }

    pub const fn is_none(&self) -> bool {
        self.left == 0 && self.right == 0
    }
}

impl fmt::Display for OverlapWidths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{left: {}, right: {}}}", self.left, self.right)
    }
}
