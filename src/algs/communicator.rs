//! Thin façade over the parallel execution context.
//!
//! The grid builder only needs to know *which* worker it is running on and
//! how many workers there are; it never exchanges messages. That pair is
//! carried explicitly as a [`WorkerContext`] so geometry can be built for any
//! synthetic rank without standing up MPI. A [`Communicator`] is just
//! something that can produce one.

use crate::mesh_error::MeshSlabError;

/// Rank of this worker and size of the run.
///
/// # Invariants
/// `size >= 1` and `rank < size`, enforced by [`WorkerContext::try_new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WorkerContext {
    rank: usize,
    size: usize,
}

impl WorkerContext {
    pub fn try_new(rank: usize, size: usize) -> Result<Self, MeshSlabError> {
        if size == 0 || rank >= size {
            return Err(MeshSlabError::InvalidWorkerContext { rank, size });
        }
        Ok(Self { rank, size })
    }

    /// Single worker: rank 0 of 1.
    pub const fn serial() -> Self {
        Self { rank: 0, size: 1 }
    }

    #[inline]
    pub const fn rank(&self) -> usize {
        self.rank
    }

    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub const fn is_serial(&self) -> bool {
        self.size == 1
    }

    /// Every context of a run of `size` workers, in rank order.
    pub fn all(size: usize) -> Result<Vec<Self>, MeshSlabError> {
        (0..size.max(1))
            .map(|rank| Self::try_new(rank, size))
            .collect()
    }
}

impl Default for WorkerContext {
    fn default() -> Self {
        Self::serial()
    }
}

/// Source of this process's rank/size.
pub trait Communicator {
    fn rank(&self) -> usize;
    fn size(&self) -> usize;

    /// Validated context for the grid builder.
    fn context(&self) -> Result<WorkerContext, MeshSlabError> {
        WorkerContext::try_new(self.rank(), self.size())
    }
}

/// Serial communicator for single-process runs and unit tests.
#[derive(Clone, Debug, Default)]
pub struct NoComm;

impl Communicator for NoComm {
    fn rank(&self) -> usize {
        0
    }
    fn size(&self) -> usize {
        1
    }
}

/// Fixed rank/size, for simulating one worker of a larger run in-process.
#[derive(Clone, Debug)]
pub struct StaticComm {
    rank: usize,
    size: usize,
}

impl StaticComm {
    pub fn new(rank: usize, size: usize) -> Self {
        Self { rank, size }
    }
}

impl Communicator for StaticComm {
    fn rank(&self) -> usize {
        self.rank
    }
    fn size(&self) -> usize {
        self.size
    }
}

impl Communicator for WorkerContext {
    fn rank(&self) -> usize {
        self.rank
    }
    fn size(&self) -> usize {
        self.size
    }
    fn context(&self) -> Result<WorkerContext, MeshSlabError> {
        Ok(*self)
    }
}

// --- MPI backend (feature = "mpi-support") ---
#[cfg(feature = "mpi-support")]
mod mpi_backend {
    use super::*;
    use mpi::environment::Universe;
    use mpi::topology::SimpleCommunicator;
    use mpi::traits::Communicator as _;

    /// `MPI_COMM_WORLD`, initialized on construction and finalized on drop.
    pub struct MpiComm {
        world: SimpleCommunicator,
        rank: usize,
        size: usize,
        _universe: Universe,
    }

    impl MpiComm {
        pub fn new() -> Result<Self, MeshSlabError> {
            let universe = mpi::initialize()
                .ok_or_else(|| MeshSlabError::Mpi("MPI already initialized".into()))?;
            let world = universe.world();
            let rank = world.rank() as usize;
            let size = world.size() as usize;
            log::debug!("MPI world up: rank {rank} of {size}");
            Ok(Self {
                world,
                rank,
                size,
                _universe: universe,
            })
        }

        /// The world communicator, for callers that exchange data themselves.
        pub fn world(&self) -> &SimpleCommunicator {
            &self.world
        }
    }

    impl Communicator for MpiComm {
        fn rank(&self) -> usize {
            self.rank
        }
        fn size(&self) -> usize {
            self.size
        }
    }
}

#[cfg(feature = "mpi-support")]
pub use mpi_backend::MpiComm;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_context() {
        let ctx = NoComm.context().unwrap();
        assert_eq!(ctx, WorkerContext::serial());
        assert!(ctx.is_serial());
    }

    #[test]
    fn rejects_rank_outside_run() {
        assert_eq!(
            StaticComm::new(2, 2).context().unwrap_err(),
            MeshSlabError::InvalidWorkerContext { rank: 2, size: 2 }
        );
        assert!(WorkerContext::try_new(0, 0).is_err());
    }

    #[test]
    fn all_contexts_in_rank_order() {
        let all = WorkerContext::all(3).unwrap();
        let ranks: Vec<_> = all.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
        assert!(all.iter().all(|c| c.size() == 3));
    }
}
