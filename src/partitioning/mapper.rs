//! Partition index views of a worker's slab.
//!
//! A worker's buffers hold `nx` cells and `nf = nx + 1` faces, of which the
//! first `overlap.left` and the last `overlap.right` are ghosts owned by the
//! neighbouring workers. Downstream code needs those indices in four frames:
//!
//! | frame                  | cells                    | faces                    |
//! |------------------------|--------------------------|--------------------------|
//! | local, overlapping     | `[0, nx)`                | `[0, nf)`                |
//! | local, non-overlapping | `[l, nx - r)`            | `[l, nf - r)`            |
//! | global, overlapping    | `[off, off + nx)`        | `[off, off + nf)`        |
//! | global, non-overlapping| `[off + l, off + nx - r)`| `[off + l, off + nf - r)`|
//!
//! Local-overlapping indexes the in-memory arrays. Local-non-overlapping
//! walks only the entities this worker owns. The global frames correlate
//! local entries with the numbering of the undecomposed grid.
//!
//! The non-overlapping *face* view contains both ends of the owned slab, so
//! the interface face between two workers appears in both of their views.
//! [`PartitionIndexMapper::global_owned_face_ids`] drops the left end of
//! every slab that does not start at global face 0, so the lower-ranked
//! neighbour is the single owner of each interface face.
//!
//! Nothing is cached: each accessor recomputes its range from the geometry
//! in O(1) and returns a fresh [`IdRange`].

use crate::geometry::resolved::ResolvedGridGeometry;
use crate::topology::id_range::IdRange;

/// Frame of reference for a partition view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IdFrame {
    LocalOverlapping,
    LocalNonOverlapping,
    GlobalOverlapping,
    GlobalNonOverlapping,
}

impl IdFrame {
    pub const ALL: [IdFrame; 4] = [
        IdFrame::LocalOverlapping,
        IdFrame::LocalNonOverlapping,
        IdFrame::GlobalOverlapping,
        IdFrame::GlobalNonOverlapping,
    ];

    pub const fn is_global(self) -> bool {
        matches!(self, IdFrame::GlobalOverlapping | IdFrame::GlobalNonOverlapping)
    }

    pub const fn is_overlapping(self) -> bool {
        matches!(self, IdFrame::LocalOverlapping | IdFrame::GlobalOverlapping)
    }
}

/// Read-only view over a [`ResolvedGridGeometry`].
#[derive(Copy, Clone, Debug)]
pub struct PartitionIndexMapper<'g> {
    geometry: &'g ResolvedGridGeometry,
}

impl<'g> PartitionIndexMapper<'g> {
    #[inline]
    pub fn new(geometry: &'g ResolvedGridGeometry) -> Self {
        Self { geometry }
    }

    #[inline]
    pub fn geometry(&self) -> &'g ResolvedGridGeometry {
        self.geometry
    }

    /// Cell ids in `frame`.
    #[inline]
    pub fn cell_ids(&self, frame: IdFrame) -> IdRange {
        self.view(self.geometry.local_cell_count(), frame)
    }

    /// Face ids in `frame`.
    #[inline]
    pub fn face_ids(&self, frame: IdFrame) -> IdRange {
        self.view(self.geometry.local_face_count(), frame)
    }

    fn view(&self, count: usize, frame: IdFrame) -> IdRange {
        let overlap = self.geometry.overlap();
        let local = if frame.is_overlapping() {
            IdRange::upto(count)
        } else {
            // left + right <= nx < nf for any non-empty slab; both are 0 otherwise
            IdRange::new(overlap.left, count - overlap.right)
        };
        if frame.is_global() {
            local.shifted(self.geometry.offset())
        } else {
            local
        }
    }

    /// Cells owned by this worker, in its own buffers.
    pub fn local_non_overlapping_cell_ids(&self) -> IdRange {
        self.cell_ids(IdFrame::LocalNonOverlapping)
    }

    /// Every cell slot in this worker's buffers, ghosts included.
    pub fn local_overlapping_cell_ids(&self) -> IdRange {
        self.cell_ids(IdFrame::LocalOverlapping)
    }

    /// Owned cells in the global numbering.
    pub fn global_non_overlapping_cell_ids(&self) -> IdRange {
        self.cell_ids(IdFrame::GlobalNonOverlapping)
    }

    /// All local cells, ghosts included, in the global numbering.
    pub fn global_overlapping_cell_ids(&self) -> IdRange {
        self.cell_ids(IdFrame::GlobalOverlapping)
    }

    pub fn local_non_overlapping_face_ids(&self) -> IdRange {
        self.face_ids(IdFrame::LocalNonOverlapping)
    }

    pub fn local_overlapping_face_ids(&self) -> IdRange {
        self.face_ids(IdFrame::LocalOverlapping)
    }

    pub fn global_non_overlapping_face_ids(&self) -> IdRange {
        self.face_ids(IdFrame::GlobalNonOverlapping)
    }

    pub fn global_overlapping_face_ids(&self) -> IdRange {
        self.face_ids(IdFrame::GlobalOverlapping)
    }

    /// Faces this worker is the unique owner of, local numbering.
    ///
    /// Same as the non-overlapping face view, minus its first face when the
    /// owned slab does not start at global face 0.
    pub fn local_owned_face_ids(&self) -> IdRange {
        let r = self.local_non_overlapping_face_ids();
        if !r.is_empty() && r.start() + self.geometry.offset() > 0 {
            IdRange::new(r.start() + 1, r.end())
        } else {
            r
        }
    }

    /// Faces this worker is the unique owner of, global numbering.
    pub fn global_owned_face_ids(&self) -> IdRange {
        self.local_owned_face_ids().shifted(self.geometry.offset())
    }
}
