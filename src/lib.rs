#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-slab
//!
//! mesh-slab computes the index geometry of a one-dimensional structured grid split across parallel workers for finite-volume PDE codes. Each worker holds a contiguous slab of cells plus ghost ("overlap") cells on the sides it shares with a neighbour, and every other part of a solver (stencil assembly, boundary conditions, halo exchange) needs to know which of those indices are whose.
//!
//! ## Features
//! - A grid builder that deals a uniform or non-uniform line of cells out to workers, with an explicit rank/size context instead of ambient global state
//! - A validated, immutable [`ResolvedGridGeometry`](geometry::ResolvedGridGeometry) that rejects inconsistent overlap/offset/count combinations at construction
//! - The four partition views (local/global x overlapping/non-overlapping) for cells and faces, as cheap restartable [`IdRange`](topology::IdRange) values
//! - A cross-worker check that owned ranges tile the global numbering
//! - Optional MPI integration (`mpi-support`) and Rayon-parallel in-process decomposition (`rayon`)
//!
//! ## Ownership convention
//!
//! A cell is owned by exactly one worker; its non-overlapping views are disjoint across workers.
//! The non-overlapping *face* view includes both ends of a worker's owned slab, so the face between two
//! neighbours is seen by both. Use `global_owned_face_ids` when a face must be counted once (the lower-ranked
//! neighbour keeps it).
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! mesh-slab = "0.3"
//! # Optional features:
//! # features = ["mpi-support", "rayon"]
//! ```
//!
//! ```
//! use mesh_slab::prelude::*;
//!
//! let cfg = GridConfig::uniform(1.0, 4).overlap(1);
//! let a = Grid1d::with_context(cfg.clone(), WorkerContext::try_new(0, 2)?)?;
//! let b = Grid1d::with_context(cfg, WorkerContext::try_new(1, 2)?)?;
//! assert_eq!(a.global_non_overlapping_cell_ids(), IdRange::new(0, 2));
//! assert_eq!(b.global_non_overlapping_cell_ids(), IdRange::new(2, 4));
//! verify_partition(&[*a.geometry(), *b.geometry()])?;
//! # Ok::<(), mesh_slab::mesh_error::MeshSlabError>(())
//! ```

pub mod algs;
pub mod debug_invariants;
pub mod geometry;
pub mod grid1d;
pub mod mesh_error;
pub mod mesh_generation;
pub mod partitioning;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    #[cfg(feature = "mpi-support")]
    pub use crate::algs::communicator::MpiComm;
    pub use crate::algs::communicator::{Communicator, NoComm, StaticComm, WorkerContext};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::resolved::{GeometryParts, ResolvedGridGeometry};
    pub use crate::grid1d::Grid1d;
    pub use crate::mesh_error::{Entity, MeshSlabError};
    pub use crate::mesh_generation::{
        GridBuilder, GridConfig, GridData, LineGridBuilder, Spacing, decompose_all,
    };
    pub use crate::partitioning::{IdFrame, PartitionIndexMapper, verify_partition};
    pub use crate::topology::{IdRange, LineConnectivity, OverlapWidths};
}
