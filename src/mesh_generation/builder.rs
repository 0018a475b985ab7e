//! Grid builder: turns a [`GridConfig`] and a [`WorkerContext`] into the
//! resolved geometry, cell widths and raw connectivity of one worker's slab.

use crate::algs::communicator::WorkerContext;
use crate::debug_invariants::DebugInvariants;
use crate::geometry::resolved::{GeometryParts, ResolvedGridGeometry, faces_for_cells};
use crate::mesh_error::MeshSlabError;
use crate::mesh_generation::config::GridConfig;
use crate::mesh_generation::decomposition::decompose;
use crate::topology::connectivity::LineConnectivity;

/// Everything a mesh needs from the builder.
#[derive(Clone, Debug, PartialEq)]
pub struct GridData {
    pub geometry: ResolvedGridGeometry,
    /// Width of each local cell, ghosts included, indexed by local cell id.
    pub cell_widths: Vec<f64>,
    pub connectivity: LineConnectivity,
    /// Workers that hold at least one cell.
    pub occupied_workers: usize,
}

/// Strategy for resolving a configuration on one worker.
pub trait GridBuilder {
    fn build(&self, config: &GridConfig, ctx: WorkerContext) -> Result<GridData, MeshSlabError>;
}

/// Builder for uniform and non-uniform line grids.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineGridBuilder;

impl GridBuilder for LineGridBuilder {
    fn build(&self, config: &GridConfig, ctx: WorkerContext) -> Result<GridData, MeshSlabError> {
        let global_cells = config.resolve_cell_count()?;
        let slab = decompose(global_cells, config.overlap, ctx);

        let geometry = ResolvedGridGeometry::try_new(GeometryParts {
            dimension: 1,
            local_cells: slab.local_cells,
            local_faces: faces_for_cells(slab.local_cells)?,
            overlap: slab.overlap,
            offset: slab.offset,
            global_cells,
            global_faces: faces_for_cells(global_cells)?,
        })?;
        geometry.debug_assert_invariants();

        let local = geometry.mapper().global_overlapping_cell_ids();
        Ok(GridData {
            cell_widths: config.dx.widths(local),
            connectivity: LineConnectivity::new(geometry.local_cell_count())?,
            occupied_workers: slab.occupied_workers,
            geometry,
        })
    }
}

/// Build the slab of every rank of a `size`-worker run in this process.
///
/// Useful for checking a decomposition end to end (see
/// [`verify_partition`](crate::partitioning::verify::verify_partition))
/// without launching the workers.
pub fn decompose_all<B>(builder: &B, config: &GridConfig, size: usize) -> Result<Vec<GridData>, MeshSlabError>
where
    B: GridBuilder + Sync,
{
    let contexts = WorkerContext::all(size)?;

    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        contexts
            .into_par_iter()
            .map(|ctx| builder.build(config, ctx))
            .collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        contexts
            .into_iter()
            .map(|ctx| builder.build(config, ctx))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::id_range::IdRange;
    use crate::topology::overlap::OverlapWidths;

    #[test]
    fn nonuniform_widths_follow_the_slab() {
        let cfg = GridConfig::with_widths(vec![1.0, 2.0, 3.0, 4.0]).overlap(1);
        let b = LineGridBuilder
            .build(&cfg, WorkerContext::try_new(1, 2).unwrap())
            .unwrap();
        assert_eq!(b.geometry.offset(), 1);
        assert_eq!(b.geometry.overlap(), OverlapWidths::new(1, 0));
        assert_eq!(b.cell_widths, vec![2.0, 3.0, 4.0]);
        assert_eq!(b.connectivity.cell_count(), 3);
        assert_eq!(b.connectivity.face_count(), 4);
    }

    #[test]
    fn serial_build_matches_serial_geometry() {
        let data = LineGridBuilder
            .build(&GridConfig::uniform(0.5, 6), WorkerContext::serial())
            .unwrap();
        assert_eq!(data.geometry, ResolvedGridGeometry::serial(6).unwrap());
        assert_eq!(data.cell_widths, vec![0.5; 6]);
        assert_eq!(data.occupied_workers, 1);
    }

    #[test]
    fn count_mismatch_surfaces_before_decomposition() {
        let cfg = GridConfig {
            nx: Some(2),
            ..GridConfig::with_widths(vec![1.0, 2.0, 3.0])
        };
        let err = LineGridBuilder.build(&cfg, WorkerContext::serial()).unwrap_err();
        assert_eq!(err, MeshSlabError::CellCountMismatch { nx: 2, widths: 3 });
    }

    #[test]
    fn cell_count_without_room_for_faces_is_an_error() {
        let err = LineGridBuilder
            .build(&GridConfig::uniform(1.0, usize::MAX), WorkerContext::serial())
            .unwrap_err();
        assert_eq!(err, MeshSlabError::CellCountOverflow { cells: usize::MAX });
    }

    #[test]
    fn decompose_all_builds_every_rank() {
        let all = decompose_all(&LineGridBuilder, &GridConfig::uniform(1.0, 9).overlap(1), 3).unwrap();
        assert_eq!(all.len(), 3);
        let offsets: Vec<_> = all.iter().map(|d| d.geometry.offset()).collect();
        assert_eq!(offsets, vec![0, 2, 5]);
        assert_eq!(
            all[1].geometry.mapper().global_overlapping_cell_ids(),
            IdRange::new(2, 7)
        );
    }

    #[test]
    fn decompose_all_rejects_empty_run() {
        assert!(decompose_all(&LineGridBuilder, &GridConfig::default(), 0).is_err());
    }
}
