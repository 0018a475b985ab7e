//! `Grid1d`: one worker's piece of a decomposed line mesh.
//!
//! Construction runs the grid builder once; afterwards the mesh is
//! immutable and every partition view is recomputed from its geometry on
//! demand.

use std::fmt;

use crate::algs::communicator::{Communicator, WorkerContext};
use crate::debug_invariants::DebugInvariants;
use crate::geometry::resolved::ResolvedGridGeometry;
use crate::mesh_error::MeshSlabError;
use crate::mesh_generation::builder::{GridBuilder, GridData, LineGridBuilder};
use crate::mesh_generation::config::GridConfig;
use crate::partitioning::mapper::PartitionIndexMapper;
use crate::topology::connectivity::LineConnectivity;
use crate::topology::id_range::IdRange;
use crate::topology::overlap::OverlapWidths;

/// A decomposed 1D grid as seen from one worker.
///
/// ```
/// use mesh_slab::prelude::*;
/// let mesh = Grid1d::new(GridConfig::uniform(1.0, 4).overlap(1), &StaticComm::new(1, 2))?;
/// assert_eq!(mesh.global_non_overlapping_cell_ids().to_vec(), vec![2, 3]);
/// assert_eq!(mesh.global_overlapping_cell_ids().to_vec(), vec![1, 2, 3]);
/// # Ok::<(), mesh_slab::mesh_error::MeshSlabError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Grid1d {
    config: GridConfig,
    context: WorkerContext,
    data: GridData,
}

impl Grid1d {
    /// Build this process's slab, taking rank/size from `comm`.
    pub fn new<C: Communicator + ?Sized>(config: GridConfig, comm: &C) -> Result<Self, MeshSlabError> {
        Self::with_context(config, comm.context()?)
    }

    /// Build the slab of worker `context` with the default builder.
    pub fn with_context(config: GridConfig, context: WorkerContext) -> Result<Self, MeshSlabError> {
        Self::with_builder(config, context, &LineGridBuilder)
    }

    /// Build with a caller-supplied builder. The builder's geometry is
    /// re-validated, and its widths and connectivity must match it.
    pub fn with_builder<B: GridBuilder + ?Sized>(
        config: GridConfig,
        context: WorkerContext,
        builder: &B,
    ) -> Result<Self, MeshSlabError> {
        let data = builder.build(&config, context)?;
        data.geometry.validate_invariants()?;
        let cells = data.geometry.local_cell_count();
        if data.connectivity.cell_count() != cells || data.cell_widths.len() != cells {
            return Err(MeshSlabError::InvalidSpacing(format!(
                "builder produced {} widths and {} connected cells for {cells} local cells",
                data.cell_widths.len(),
                data.connectivity.cell_count()
            )));
        }
        Ok(Self {
            config,
            context,
            data,
        })
    }

    /// Serial grid of `nx` cells of width `dx`.
    pub fn serial(dx: f64, nx: usize) -> Result<Self, MeshSlabError> {
        Self::with_context(GridConfig::uniform(dx, nx), WorkerContext::serial())
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn context(&self) -> WorkerContext {
        self.context
    }

    pub fn geometry(&self) -> &ResolvedGridGeometry {
        &self.data.geometry
    }

    pub fn mapper(&self) -> PartitionIndexMapper<'_> {
        self.data.geometry.mapper()
    }

    /// Width of each local cell, ghosts included.
    pub fn cell_widths(&self) -> &[f64] {
        &self.data.cell_widths
    }

    pub fn connectivity(&self) -> &LineConnectivity {
        &self.data.connectivity
    }

    pub fn occupied_workers(&self) -> usize {
        self.data.occupied_workers
    }

    pub fn dimension(&self) -> usize {
        self.data.geometry.dimension()
    }

    pub fn number_of_cells(&self) -> usize {
        self.data.geometry.local_cell_count()
    }

    pub fn number_of_faces(&self) -> usize {
        self.data.geometry.local_face_count()
    }

    pub fn number_of_vertices(&self) -> usize {
        self.data.geometry.local_vertex_count()
    }

    pub fn global_number_of_cells(&self) -> usize {
        self.data.geometry.global_cell_count()
    }

    pub fn global_number_of_faces(&self) -> usize {
        self.data.geometry.global_face_count()
    }

    pub fn overlap(&self) -> OverlapWidths {
        self.data.geometry.overlap()
    }

    pub fn offset(&self) -> usize {
        self.data.geometry.offset()
    }

    pub fn local_non_overlapping_cell_ids(&self) -> IdRange {
        self.mapper().local_non_overlapping_cell_ids()
    }

    pub fn local_overlapping_cell_ids(&self) -> IdRange {
        self.mapper().local_overlapping_cell_ids()
    }

    pub fn global_non_overlapping_cell_ids(&self) -> IdRange {
        self.mapper().global_non_overlapping_cell_ids()
    }

    pub fn global_overlapping_cell_ids(&self) -> IdRange {
        self.mapper().global_overlapping_cell_ids()
    }

    pub fn local_non_overlapping_face_ids(&self) -> IdRange {
        self.mapper().local_non_overlapping_face_ids()
    }

    pub fn local_overlapping_face_ids(&self) -> IdRange {
        self.mapper().local_overlapping_face_ids()
    }

    pub fn global_non_overlapping_face_ids(&self) -> IdRange {
        self.mapper().global_non_overlapping_face_ids()
    }

    pub fn global_overlapping_face_ids(&self) -> IdRange {
        self.mapper().global_overlapping_face_ids()
    }

    pub fn local_owned_face_ids(&self) -> IdRange {
        self.mapper().local_owned_face_ids()
    }

    pub fn global_owned_face_ids(&self) -> IdRange {
        self.mapper().global_owned_face_ids()
    }
}

impl fmt::Display for Grid1d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.config.nx {
            None => write!(f, "Grid1d(dx={})", self.config.dx),
            Some(nx) => write!(f, "Grid1d(dx={}, nx={nx})", self.config.dx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::communicator::{NoComm, StaticComm};
    use crate::mesh_generation::spacing::Spacing;

    #[test]
    fn serial_mesh_counts() {
        let mesh = Grid1d::new(GridConfig::uniform(1.0, 3), &NoComm).unwrap();
        assert_eq!(mesh.number_of_cells(), 3);
        assert_eq!(mesh.number_of_faces(), 4);
        assert_eq!(mesh.number_of_vertices(), 4);
        assert_eq!(mesh.dimension(), 1);
        assert_eq!(mesh.global_number_of_faces(), 4);
        assert_eq!(mesh.local_overlapping_face_ids(), IdRange::new(0, 4));
    }

    #[test]
    fn width_list_sets_cell_count() {
        let mesh = Grid1d::new(GridConfig::with_widths(vec![1.0, 2.0, 3.0]), &NoComm).unwrap();
        assert_eq!(mesh.number_of_cells(), 3);
        assert_eq!(mesh.cell_widths(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn mismatched_count_is_rejected() {
        let cfg = GridConfig {
            dx: Spacing::Widths(vec![1.0, 2.0, 3.0]),
            nx: Some(2),
            ..Default::default()
        };
        let err = Grid1d::new(cfg, &NoComm).unwrap_err();
        assert!(err.to_string().starts_with("nx != len(dx)"));
    }

    #[test]
    fn invalid_rank_is_rejected() {
        assert_eq!(
            Grid1d::new(GridConfig::default(), &StaticComm::new(3, 2)).unwrap_err(),
            MeshSlabError::InvalidWorkerContext { rank: 3, size: 2 }
        );
    }

    #[test]
    fn display_mirrors_arguments() {
        let a = Grid1d::with_context(GridConfig::with_widths(vec![1.0, 2.0]), WorkerContext::serial()).unwrap();
        assert_eq!(a.to_string(), "Grid1d(dx=(1, 2))");
        let b = Grid1d::serial(0.5, 3).unwrap();
        assert_eq!(b.to_string(), "Grid1d(dx=0.5, nx=3)");
    }

    struct LyingBuilder;

    impl GridBuilder for LyingBuilder {
        fn build(&self, config: &GridConfig, ctx: WorkerContext) -> Result<GridData, MeshSlabError> {
            let mut data = LineGridBuilder.build(config, ctx)?;
            data.cell_widths.pop();
            Ok(data)
        }
    }

    #[test]
    fn custom_builder_output_is_checked() {
        let err = Grid1d::with_builder(GridConfig::uniform(1.0, 4), WorkerContext::serial(), &LyingBuilder)
            .unwrap_err();
        assert!(matches!(err, MeshSlabError::InvalidSpacing(_)));
    }
}
