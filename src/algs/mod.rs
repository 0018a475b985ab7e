//! Parallel execution context.

pub mod communicator;

pub use communicator::{Communicator, NoComm, StaticComm, WorkerContext};
#[cfg(feature = "mpi-support")]
pub use communicator::MpiComm;
