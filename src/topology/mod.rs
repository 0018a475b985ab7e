//! Index-level topology of a decomposed 1D grid.
//!
//! - [`IdRange`]: the half-open index runs returned by every partition view
//! - [`OverlapWidths`]: ghost widths on each side of a worker's slab
//! - [`LineConnectivity`]: face/cell incidence of the local slab

pub mod connectivity;
pub mod id_range;
pub mod overlap;

pub use connectivity::LineConnectivity;
pub use id_range::IdRange;
pub use overlap::OverlapWidths;
