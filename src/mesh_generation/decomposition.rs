//! Split a line of cells into per-worker slabs with ghost layers.
//!
//! Cells are dealt out in equal blocks of `cells_per_worker`, the last
//! occupied worker absorbing the remainder. A block is never narrower than
//! the ghost width, so a worker's ghosts always come from its immediate
//! neighbour; when that leaves fewer blocks than workers, the trailing
//! workers get empty slabs. Interior workers carry `overlap` ghost cells on
//! each side that has a neighbour.

use crate::algs::communicator::WorkerContext;
use crate::topology::overlap::OverlapWidths;

/// This worker's share of the global line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SlabDecomposition {
    /// Ghost widths on this worker.
    pub overlap: OverlapWidths,
    /// Global id of local cell 0 (a ghost if `overlap.left > 0`).
    pub offset: usize,
    /// Owned plus ghost cells.
    pub local_cells: usize,
    /// Block size dealt to every occupied worker but the last.
    pub cells_per_worker: usize,
    /// Workers that received at least one cell.
    pub occupied_workers: usize,
}

impl SlabDecomposition {
    pub fn owned_cells(&self) -> usize {
        self.local_cells - self.overlap.total()
    }
}

/// Decompose `global_cells` cells for worker `ctx` with `overlap` ghost
/// cells towards each neighbour.
pub fn decompose(global_cells: usize, overlap: usize, ctx: WorkerContext) -> SlabDecomposition {
    let (rank, size) = (ctx.rank(), ctx.size());

    if global_cells == 0 {
        return SlabDecomposition {
            overlap: OverlapWidths::none(),
            offset: 0,
            local_cells: 0,
            cells_per_worker: 0,
            occupied_workers: 0,
        };
    }

    let width = if overlap > global_cells {
        log::warn!("overlap {overlap} exceeds the {global_cells} global cells; clamping");
        global_cells
    } else {
        overlap
    };

    let cells_per_worker = (global_cells / size).max(width).max(1);
    let occupied = (global_cells / cells_per_worker).min(size);
    let occupied_here = rank < occupied;

    let ghosts = OverlapWidths {
        left: if rank > 0 && occupied_here { width } else { 0 },
        right: if rank + 1 < occupied { width } else { 0 },
    };

    let owned = if !occupied_here {
        log::warn!(
            "rank {rank} of {size} receives no cells: {global_cells} cells fill only {occupied} blocks of {cells_per_worker}"
        );
        0
    } else if rank + 1 == occupied {
        global_cells - cells_per_worker * (occupied - 1)
    } else {
        cells_per_worker
    };

    let first_owned = rank.min(occupied - 1) * cells_per_worker;
    let offset = first_owned - ghosts.left;
    let local_cells = owned + ghosts.total();

    log::debug!(
        "rank {rank}/{size}: offset {offset}, {local_cells} local cells ({owned} owned), overlap {ghosts}"
    );

    SlabDecomposition {
        overlap: ghosts,
        offset,
        local_cells,
        cells_per_worker,
        occupied_workers: occupied,
    }
}
