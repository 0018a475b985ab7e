//! Grid builder for decomposed line grids.
//!
//! [`GridConfig`] says what the user wants; [`decompose`] deals the cells out
//! to workers; [`LineGridBuilder`] packages one worker's share as
//! [`GridData`] with a validated geometry.

pub mod builder;
pub mod config;
pub mod decomposition;
pub mod spacing;

pub use builder::{GridBuilder, GridData, LineGridBuilder, decompose_all};
pub use config::{DEFAULT_OVERLAP, GridConfig};
pub use decomposition::{SlabDecomposition, decompose};
pub use spacing::Spacing;
