//! `ResolvedGridGeometry`: the per-worker counts the index views are built from.
//!
//! The geometry is produced once by the grid builder and never changes
//! afterwards. Its fields are private and the only constructor validates
//! them, so every value of this type satisfies:
//!
//! - `dimension == 1`
//! - `overlap.left + overlap.right <= local_cells`
//! - `local_faces == local_cells + 1` (or `0` when `local_cells == 0`)
//! - `offset + local_cells <= global_cells`
//!
//! The face bound `offset + local_faces <= global_faces` follows from the
//! last two. Those are exactly the conditions under which the partition
//! views are non-negative in length and disjoint across workers.

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshSlabError;
use crate::partitioning::mapper::PartitionIndexMapper;
use crate::topology::overlap::OverlapWidths;

/// Faces of a line of `cells` cells.
///
/// # Errors
/// [`MeshSlabError::CellCountOverflow`] when `cells + 1` is not a `usize`.
#[inline]
pub fn faces_for_cells(cells: usize) -> Result<usize, MeshSlabError> {
    if cells == 0 {
        return Ok(0);
    }
    match cells.checked_add(1) {
        Some(faces) => Ok(faces),
        None => Err(MeshSlabError::CellCountOverflow { cells }),
    }
}

/// Raw field set, as produced by the builder or read from a serialized mesh.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GeometryParts {
    pub dimension: usize,
    pub local_cells: usize,
    pub local_faces: usize,
    pub overlap: OverlapWidths,
    pub offset: usize,
    pub global_cells: usize,
    pub global_faces: usize,
}

/// Validated geometry of one worker's slab.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "GeometryParts", into = "GeometryParts")]
pub struct ResolvedGridGeometry {
    local_cells: usize,
    local_faces: usize,
    overlap: OverlapWidths,
    offset: usize,
    global_cells: usize,
    global_faces: usize,
}

impl ResolvedGridGeometry {
    /// Validate `parts` and freeze them.
    ///
    /// # Errors
    /// The first violated invariant, carrying the offending values.
    pub fn try_new(parts: GeometryParts) -> Result<Self, MeshSlabError> {
        check_parts(&parts)?;
        Ok(Self {
            local_cells: parts.local_cells,
            local_faces: parts.local_faces,
            overlap: parts.overlap,
            offset: parts.offset,
            global_cells: parts.global_cells,
            global_faces: parts.global_faces,
        })
    }

    /// Geometry of an undecomposed line of `cells` cells.
    pub fn serial(cells: usize) -> Result<Self, MeshSlabError> {
        Self::from_counts(cells, OverlapWidths::none(), 0, cells)
    }

    /// Convenience for synthetic slabs: derives face counts from cell counts.
    pub fn from_counts(
        local_cells: usize,
        overlap: OverlapWidths,
        offset: usize,
        global_cells: usize,
    ) -> Result<Self, MeshSlabError> {
        Self::try_new(GeometryParts {
            dimension: 1,
            local_cells,
            local_faces: faces_for_cells(local_cells)?,
            overlap,
            offset,
            global_cells,
            global_faces: faces_for_cells(global_cells)?,
        })
    }

    #[inline]
    pub const fn dimension(&self) -> usize {
        1
    }

    /// `nx`: cells in this worker's buffers, ghosts included.
    #[inline]
    pub const fn local_cell_count(&self) -> usize {
        self.local_cells
    }

    #[inline]
    pub const fn local_face_count(&self) -> usize {
        self.local_faces
    }

    /// Vertices coincide with faces on a line.
    #[inline]
    pub const fn local_vertex_count(&self) -> usize {
        self.local_faces
    }

    #[inline]
    pub const fn overlap(&self) -> OverlapWidths {
        self.overlap
    }

    /// Global index of local position 0.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub const fn global_cell_count(&self) -> usize {
        self.global_cells
    }

    #[inline]
    pub const fn global_face_count(&self) -> usize {
        self.global_faces
    }

    /// Cells this worker owns outright.
    #[inline]
    pub const fn owned_cell_count(&self) -> usize {
        self.local_cells - self.overlap.left - self.overlap.right
    }

    /// Read-only partition views over this geometry.
    #[inline]
    pub fn mapper(&self) -> PartitionIndexMapper<'_> {
        PartitionIndexMapper::new(self)
    }

    pub fn parts(&self) -> GeometryParts {
        GeometryParts {
            dimension: 1,
            local_cells: self.local_cells,
            local_faces: self.local_faces,
            overlap: self.overlap,
            offset: self.offset,
            global_cells: self.global_cells,
            global_faces: self.global_faces,
        }
    }
}

fn check_parts(p: &GeometryParts) -> Result<(), MeshSlabError> {
    if p.dimension != 1 {
        return Err(MeshSlabError::UnsupportedDimension(p.dimension));
    }
    let ghosts = p
        .overlap
        .left
        .checked_add(p.overlap.right)
        .filter(|&g| g <= p.local_cells);
    if ghosts.is_none() {
        return Err(MeshSlabError::OverlapExceedsCells {
            left: p.overlap.left,
            right: p.overlap.right,
            cells: p.local_cells,
        });
    }
    let expected = faces_for_cells(p.local_cells)?;
    if p.local_faces != expected {
        return Err(MeshSlabError::FaceCountMismatch {
            cells: p.local_cells,
            faces: p.local_faces,
            expected,
        });
    }
    let expected_global = faces_for_cells(p.global_cells)?;
    if p.global_faces != expected_global {
        return Err(MeshSlabError::FaceCountMismatch {
            cells: p.global_cells,
            faces: p.global_faces,
            expected: expected_global,
        });
    }
    if p
        .offset
        .checked_add(p.local_cells)
        .is_none_or(|end| end > p.global_cells)
    {
        return Err(MeshSlabError::CellRangeOutOfBounds {
            offset: p.offset,
            cells: p.local_cells,
            global: p.global_cells,
        });
    }
    Ok(())
}

impl TryFrom<GeometryParts> for ResolvedGridGeometry {
    type Error = MeshSlabError;

    fn try_from(parts: GeometryParts) -> Result<Self, Self::Error> {
        Self::try_new(parts)
    }
}

impl From<ResolvedGridGeometry> for GeometryParts {
    fn from(g: ResolvedGridGeometry) -> Self {
        g.parts()
    }
}

impl DebugInvariants for ResolvedGridGeometry {
    fn validate_invariants(&self) -> Result<(), MeshSlabError> {
        check_parts(&self.parts())
    }
}
