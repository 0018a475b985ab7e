//! MeshSlabError: Unified error type for mesh-slab public APIs
//!
//! Every fallible constructor in the crate reports through this type. The
//! index accessors themselves never fail; anything that could make them
//! return a malformed range is rejected here, when the mesh is built.

use thiserror::Error;

/// Which entity family a partition check was running over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Cell,
    Face,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Cell => f.write_str("cell"),
            Entity::Face => f.write_str("face"),
        }
    }
}

/// Unified error type for mesh-slab operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshSlabError {
    /// An explicit cell count disagrees with the number of supplied widths.
    #[error("nx != len(dx): nx = {nx}, but {widths} cell widths were given")]
    CellCountMismatch { nx: usize, widths: usize },
    /// Spacing could not be turned into cell widths.
    #[error("Invalid spacing: {0}")]
    InvalidSpacing(String),
    /// Rank/size pair that cannot describe a parallel run.
    #[error("Invalid worker context: rank {rank} is not in 0..{size}")]
    InvalidWorkerContext { rank: usize, size: usize },
    /// Only line grids are handled.
    #[error("Unsupported grid dimension {0} (only 1D grids are supported)")]
    UnsupportedDimension(usize),
    /// Ghost layers wider than the slab they sit in.
    #[error(
        "Overlap exceeds local cells: left {left} + right {right} > {cells} local cells"
    )]
    OverlapExceedsCells {
        left: usize,
        right: usize,
        cells: usize,
    },
    /// Face count that does not match a 1D line of `cells` cells.
    #[error("Face count mismatch: {cells} local cells need {expected} faces, got {faces}")]
    FaceCountMismatch {
        cells: usize,
        faces: usize,
        expected: usize,
    },
    /// Local cell slab runs past the end of the global grid.
    #[error("Cell range out of bounds: offset {offset} + {cells} local cells > {global} global cells")]
    CellRangeOutOfBounds {
        offset: usize,
        cells: usize,
        global: usize,
    },
    /// A line of `cells` cells has more faces than `usize` can count.
    #[error("Cell count overflow: {cells} cells leave no room for {cells} + 1 faces")]
    CellCountOverflow { cells: usize },
    /// Owned ranges leave a hole in the global numbering.
    #[error("Partition gap in {entity} numbering: expected next owned id {expected}, found {found}")]
    PartitionGap {
        entity: Entity,
        expected: usize,
        found: usize,
    },
    /// Two workers claim the same global id.
    #[error("Partition overlap in {entity} numbering: id {index} is owned more than once")]
    PartitionOverlap { entity: Entity, index: usize },
    /// Owned ranges stop short of the global count.
    #[error("Partition incomplete for {entity}s: owned ranges cover {covered} of {global}")]
    PartitionIncomplete {
        entity: Entity,
        covered: usize,
        global: usize,
    },
    /// Two workers describe different global grids.
    #[error("Global {entity} count mismatch: expected {expected}, a worker reports {found}")]
    GlobalCountMismatch {
        entity: Entity,
        expected: usize,
        found: usize,
    },
    /// MPI could not be brought up.
    #[error("MPI error: {0}")]
    Mpi(String),
}
