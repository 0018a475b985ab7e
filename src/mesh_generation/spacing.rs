//! Cell spacing of a line grid: one width for every cell, or one per cell.

use std::fmt;

use crate::mesh_error::MeshSlabError;
use crate::topology::id_range::IdRange;

/// Cell widths along the line.
///
/// Serialized untagged: a number is uniform spacing, an array lists the
/// width of each global cell. A one-element array behaves like a number.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    Uniform(f64),
    Widths(Vec<f64>),
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Uniform(1.0)
    }
}

impl From<f64> for Spacing {
    fn from(dx: f64) -> Self {
        Spacing::Uniform(dx)
    }
}

impl From<Vec<f64>> for Spacing {
    fn from(widths: Vec<f64>) -> Self {
        Spacing::Widths(widths)
    }
}

fn check_width(idx: usize, w: f64) -> Result<(), MeshSlabError> {
    if !w.is_finite() || w <= 0.0 {
        return Err(MeshSlabError::InvalidSpacing(format!(
            "cell width {idx} must be finite and positive, got {w}"
        )));
    }
    Ok(())
}

impl Spacing {
    /// Global cell count implied by this spacing and an optional explicit `nx`.
    ///
    /// Uniform spacing defaults to a single cell. A width list defaults to
    /// its own length and rejects any other explicit count.
    pub fn resolve_cell_count(&self, nx: Option<usize>) -> Result<usize, MeshSlabError> {
        match self {
            Spacing::Widths(w) if w.is_empty() => Err(MeshSlabError::InvalidSpacing(
                "cell width list is empty".into(),
            )),
            Spacing::Widths(w) => {
                for (idx, &dx) in w.iter().enumerate() {
                    check_width(idx, dx)?;
                }
                match (w.len(), nx) {
                    (1, n) => Ok(n.unwrap_or(1)),
                    (len, None) => Ok(len),
                    (len, Some(n)) if n == len => Ok(n),
                    (len, Some(n)) => Err(MeshSlabError::CellCountMismatch { nx: n, widths: len }),
                }
            }
            Spacing::Uniform(dx) => {
                check_width(0, *dx)?;
                Ok(nx.unwrap_or(1))
            }
        }
    }

    /// Widths of the global cells in `cells`.
    ///
    /// Callers pass a range inside the resolved cell count; anything past
    /// the end of a width list is ignored.
    pub fn widths(&self, cells: IdRange) -> Vec<f64> {
        match self {
            Spacing::Uniform(dx) => vec![*dx; cells.len()],
            Spacing::Widths(w) if w.len() == 1 => vec![w[0]; cells.len()],
            Spacing::Widths(w) => {
                let end = cells.end().min(w.len());
                let start = cells.start().min(end);
                w[start..end].to_vec()
            }
        }
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spacing::Uniform(dx) => write!(f, "{dx}"),
            Spacing::Widths(w) => {
                f.write_str("(")?;
                for (i, dx) in w.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{dx}")?;
                }
                f.write_str(")")
            }
        }
    }
}
