//! Partition index views and their cross-worker check.

pub mod mapper;
pub mod verify;

pub use mapper::{IdFrame, PartitionIndexMapper};
pub use verify::{check_tiling, verify_partition};
