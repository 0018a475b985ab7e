//! Raw connectivity of a local 1D slab.
//!
//! In one dimension a face *is* a vertex, so the face/vertex map is the
//! identity and each cell `i` is bounded by faces `i` and `i + 1`. The
//! arrays are kept explicit so assembly code can consume them the same way
//! it would consume an unstructured mesh.

use crate::geometry::resolved::faces_for_cells;
use crate::mesh_error::MeshSlabError;

/// Face→vertex and cell→face incidence for a worker's local numbering.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LineConnectivity {
    face_vertices: Vec<usize>,
    cell_faces: Vec<[usize; 2]>,
}

impl LineConnectivity {
    /// Connectivity for `cells` consecutive cells. Zero cells produce no
    /// faces at all (not a lone face).
    pub fn new(cells: usize) -> Result<Self, MeshSlabError> {
        let faces = faces_for_cells(cells)?;
        Ok(Self {
            face_vertices: (0..faces).collect(),
            cell_faces: (0..cells).map(|c| [c, c + 1]).collect(),
        })
    }

    pub fn cell_count(&self) -> usize {
        self.cell_faces.len()
    }

    pub fn face_count(&self) -> usize {
        self.face_vertices.len()
    }

    /// Vertices coincide with faces in 1D.
    pub fn vertex_count(&self) -> usize {
        self.face_vertices.len()
    }

    /// Vertex of each face, indexed by local face id.
    pub fn face_vertices(&self) -> &[usize] {
        &self.face_vertices
    }

    /// `[left, right]` bounding faces of each cell, indexed by local cell id.
    pub fn cell_faces(&self) -> &[[usize; 2]] {
        &self.cell_faces
    }

    /// Cells adjacent to `face`: one on a slab end, two in the interior.
    pub fn face_cells(&self, face: usize) -> Vec<usize> {
        let n = self.cell_count();
        let mut out = Vec::with_capacity(2);
        if face >= 1 && face <= n {
            out.push(face - 1);
        }
        if face < n {
            out.push(face);
        }
        out
    }
}
