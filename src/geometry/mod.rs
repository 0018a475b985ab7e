//! Resolved per-worker grid geometry.

pub mod resolved;

pub use resolved::{GeometryParts, ResolvedGridGeometry, faces_for_cells};
