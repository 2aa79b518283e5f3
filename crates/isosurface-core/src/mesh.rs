//! Mesh output and the assembler that accumulates it.

use glam::DVec3;

use crate::fill::{Corner, Fan};
use crate::grid::Grid;
use crate::vertex_pool::VertexPool;

/// Output of one generation run.
///
/// Positions are in data coordinates. `intensity[i]` is the scalar value at
/// `positions[i]`. The first `grid.num_nodes()` vertices are the raw grid
/// points in flat index order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IsoMesh {
    pub positions: Vec<DVec3>,
    pub intensity: Vec<f64>,
    pub faces: Vec<[u32; 3]>,
}

impl IsoMesh {
    /// Returns the number of triangles in the mesh.
    #[must_use]
    pub fn num_triangles(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of vertices in the mesh.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Sorted, deduplicated indices of vertices used by at least one face.
    #[must_use]
    pub fn referenced_vertices(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.faces.iter().flatten().copied().collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

/// Owns the vertex pool and face list for the duration of a run.
#[derive(Debug, Default)]
pub struct MeshAssembler {
    pool: VertexPool,
    faces: Vec<[u32; 3]>,
}

impl MeshAssembler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every grid point, in flat index order, so that pool index and
    /// grid offset coincide for the baseline vertices.
    pub fn insert_grid_points(&mut self, grid: &Grid) {
        let index = grid.index();
        self.pool = VertexPool::with_capacity(index.num_nodes() * 2);
        for k in 0..index.depth() {
            for j in 0..index.height() {
                for i in 0..index.width() {
                    let idx = index.linear(i, j, k);
                    self.pool.push(grid.position(idx), grid.values()[idx]);
                }
            }
        }
    }

    /// Draws one triangle, unrolled into its fill fan.
    ///
    /// Opens a new pool group first: corners without ids are shared only with
    /// the other triangles of this fan.
    pub fn draw_tri(&mut self, tri: [Corner; 3], fill: f64) {
        self.pool.open_group();
        let fan = Fan::new(tri, fill);
        for &sub in fan.triangles() {
            let face = sub.map(|corner| {
                corner
                    .id
                    .unwrap_or_else(|| self.pool.find_or_add(corner.xyzv))
            });
            self.faces.push(face);
        }
    }

    /// Draws the four faces of a tetrahedron.
    pub fn draw_tetra(&mut self, corners: [Corner; 4], fill: f64) {
        for [a, b, c] in [[0, 1, 2], [3, 0, 1], [2, 3, 0], [1, 2, 3]] {
            self.draw_tri([corners[a], corners[b], corners[c]], fill);
        }
    }

    /// Draws a quad as triangles `(0, 1, 2)` and `(2, 3, 0)`.
    pub fn draw_quad(&mut self, corners: [Corner; 4], fill: f64) {
        self.draw_tri([corners[0], corners[1], corners[2]], fill);
        self.draw_tri([corners[2], corners[3], corners[0]], fill);
    }

    #[must_use]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.pool.len()
    }

    /// Hands over the finished arrays.
    #[must_use]
    pub fn finish(self) -> IsoMesh {
        let (positions, intensity) = self.pool.into_parts();
        IsoMesh {
            positions,
            intensity,
            faces: self.faces,
        }
    }
}
