//! Cross-worker check that owned ranges tile the global numbering.
//!
//! Each worker can only see its own slab, but a decomposition is correct
//! only if, over all workers, every global cell (and face) is owned exactly
//! once. Given every worker's geometry, [`verify_partition`] sorts the owned
//! ranges by start and walks them, reporting the first gap, double claim,
//! or shortfall.

use itertools::Itertools;

use crate::geometry::resolved::ResolvedGridGeometry;
use crate::mesh_error::{Entity, MeshSlabError};
use crate::topology::id_range::IdRange;

/// Check that `ranges` cover `[0, global)` exactly once.
pub fn check_tiling<I>(entity: Entity, ranges: I, global: usize) -> Result<(), MeshSlabError>
where
    I: IntoIterator<Item = IdRange>,
{
    let mut next = 0usize;
    for r in ranges
        .into_iter()
        .filter(|r| !r.is_empty())
        .sorted_by_key(|r| (r.start(), r.end()))
    {
        log::trace!("{entity} tiling: next {next}, range {r}");
        if r.start() > next {
            return Err(MeshSlabError::PartitionGap {
                entity,
                expected: next,
                found: r.start(),
            });
        }
        if r.start() < next {
            return Err(MeshSlabError::PartitionOverlap {
                entity,
                index: r.start(),
            });
        }
        next = r.end();
    }
    if next != global {
        return Err(MeshSlabError::PartitionIncomplete {
            entity,
            covered: next,
            global,
        });
    }
    Ok(())
}

/// Verify that the owned cells and owned faces of `workers` partition the
/// global grid.
///
/// All geometries must describe the same global grid; a disagreement is
/// reported as [`MeshSlabError::GlobalCountMismatch`] against the first
/// worker's count.
pub fn verify_partition(workers: &[ResolvedGridGeometry]) -> Result<(), MeshSlabError> {
    let Some(first) = workers.first() else {
        return Ok(());
    };
    let (global_cells, global_faces) = (first.global_cell_count(), first.global_face_count());
    if let Some(odd) = workers
        .iter()
        .find(|g| g.global_cell_count() != global_cells)
    {
        return Err(MeshSlabError::GlobalCountMismatch {
            entity: Entity::Cell,
            expected: global_cells,
            found: odd.global_cell_count(),
        });
    }

    check_tiling(
        Entity::Cell,
        workers.iter().map(|g| g.mapper().global_non_overlapping_cell_ids()),
        global_cells,
    )?;
    check_tiling(
        Entity::Face,
        workers.iter().map(|g| g.mapper().global_owned_face_ids()),
        global_faces,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::overlap::OverlapWidths;

    fn slab(nx: usize, left: usize, right: usize, offset: usize, global: usize) -> ResolvedGridGeometry {
        ResolvedGridGeometry::from_counts(nx, OverlapWidths::new(left, right), offset, global).unwrap()
    }

    #[test]
    fn two_workers_tile() {
        let workers = [slab(3, 0, 1, 0, 4), slab(3, 1, 0, 1, 4)];
        assert_eq!(verify_partition(&workers), Ok(()));
    }

    #[test]
    fn order_of_workers_does_not_matter() {
        let workers = [slab(3, 1, 0, 1, 4), slab(3, 0, 1, 0, 4)];
        assert_eq!(verify_partition(&workers), Ok(()));
    }

    #[test]
    fn detects_double_claim() {
        // both claim cell 1
        let workers = [slab(2, 0, 0, 0, 3), slab(2, 0, 0, 1, 3)];
        assert_eq!(
            verify_partition(&workers),
            Err(MeshSlabError::PartitionOverlap {
                entity: Entity::Cell,
                index: 1
            })
        );
    }

    #[test]
    fn detects_gap() {
        let workers = [slab(1, 0, 0, 0, 4), slab(2, 0, 0, 2, 4)];
        assert_eq!(
            verify_partition(&workers),
            Err(MeshSlabError::PartitionGap {
                entity: Entity::Cell,
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn detects_shortfall() {
        let workers = [slab(2, 0, 0, 0, 4)];
        assert_eq!(
            verify_partition(&workers),
            Err(MeshSlabError::PartitionIncomplete {
                entity: Entity::Cell,
                covered: 2,
                global: 4
            })
        );
    }

    #[test]
    fn workers_must_agree_on_the_global_grid() {
        let workers = [slab(3, 0, 1, 0, 4), slab(3, 1, 0, 1, 5)];
        assert_eq!(
            verify_partition(&workers),
            Err(MeshSlabError::GlobalCountMismatch {
                entity: Entity::Cell,
                expected: 4,
                found: 5
            })
        );
    }

    #[test]
    fn raw_face_views_double_count_interfaces() {
        let workers = [slab(3, 0, 1, 0, 4), slab(3, 1, 0, 1, 4)];
        let err = check_tiling(
            Entity::Face,
            workers.iter().map(|g| g.mapper().global_non_overlapping_face_ids()),
            5,
        )
        .unwrap_err();
        assert_eq!(
            err,
            MeshSlabError::PartitionOverlap {
                entity: Entity::Face,
                index: 2
            }
        );
    }

    #[test]
    fn empty_worker_set_is_trivially_fine() {
        assert_eq!(verify_partition(&[]), Ok(()));
    }
}
