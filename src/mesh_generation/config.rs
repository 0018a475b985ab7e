//! User-facing grid configuration.

use crate::mesh_generation::spacing::Spacing;

/// Ghost width used when none is given.
pub const DEFAULT_OVERLAP: usize = 2;

/// What the user asks for: spacing, an optional cell count, and how many
/// ghost cells each worker should carry towards its neighbours.
///
/// ```
/// use mesh_slab::mesh_generation::config::GridConfig;
/// let cfg: GridConfig = serde_json::from_str(r#"{"dx": [1.0, 2.0, 3.0]}"#).unwrap();
/// assert_eq!(cfg.resolve_cell_count(), Ok(3));
/// assert_eq!(cfg.overlap, 2);
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub dx: Spacing,
    pub nx: Option<usize>,
    pub overlap: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            dx: Spacing::default(),
            nx: None,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

impl GridConfig {
    /// `nx` uniform cells of width `dx`.
    pub fn uniform(dx: f64, nx: usize) -> Self {
        Self {
            dx: Spacing::Uniform(dx),
            nx: Some(nx),
            ..Default::default()
        }
    }

    /// One cell per entry of `widths`.
    pub fn with_widths(widths: Vec<f64>) -> Self {
        Self {
            dx: Spacing::Widths(widths),
            ..Default::default()
        }
    }

    pub fn overlap(mut self, overlap: usize) -> Self {
        self.overlap = overlap;
        self
    }

    /// Global cell count, see [`Spacing::resolve_cell_count`].
    pub fn resolve_cell_count(&self) -> Result<usize, crate::mesh_error::MeshSlabError> {
        self.dx.resolve_cell_count(self.nx)
    }
}
