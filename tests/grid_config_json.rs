use mesh_slab::algs::communicator::{NoComm, StaticComm};
use mesh_slab::grid1d::Grid1d;
use mesh_slab::mesh_error::MeshSlabError;
use mesh_slab::mesh_generation::config::GridConfig;
use mesh_slab::topology::id_range::IdRange;

#[test]
fn nonuniform_config_from_json() {
    let cfg: GridConfig =
        serde_json::from_str(r#"{ "dx": [1.0, 2.0, 3.0, 4.0, 5.0, 6.0], "overlap": 1 }"#).unwrap();
    let mesh = Grid1d::new(cfg, &StaticComm::new(1, 3)).unwrap();
    // blocks of 2: rank 1 owns cells 2 and 3, ghosts 1 and 4
    assert_eq!(mesh.global_overlapping_cell_ids(), IdRange::new(1, 5));
    assert_eq!(mesh.cell_widths(), &[2.0, 3.0, 4.0, 5.0]);
    assert_eq!(mesh.to_string(), "Grid1d(dx=(1, 2, 3, 4, 5, 6))");
}

#[test]
fn empty_json_is_the_default_config() {
    let cfg: GridConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, GridConfig::default());
    let mesh = Grid1d::new(cfg, &NoComm).unwrap();
    assert_eq!(mesh.number_of_cells(), 1);
    assert_eq!(mesh.to_string(), "Grid1d(dx=1)");
}

#[test]
fn zero_cell_mesh_has_empty_views() {
    let mesh = Grid1d::new(GridConfig::uniform(1.0, 0), &StaticComm::new(0, 2)).unwrap();
    assert_eq!(mesh.number_of_faces(), 0);
    assert!(mesh.global_overlapping_cell_ids().is_empty());
    assert!(mesh.local_non_overlapping_face_ids().is_empty());
}

#[test]
fn errors_name_the_offending_values() {
    let cfg: GridConfig = serde_json::from_str(r#"{ "dx": [1.0, 2.0], "nx": 5 }"#).unwrap();
    let err = Grid1d::new(cfg, &NoComm).unwrap_err();
    assert_eq!(err, MeshSlabError::CellCountMismatch { nx: 5, widths: 2 });
    assert_eq!(err.to_string(), "nx != len(dx): nx = 5, but 2 cell widths were given");
}
