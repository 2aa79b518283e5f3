//! Mapping picked mesh vertices back to grid cells.

use glam::DVec3;

use crate::error::{IsosurfaceError, Result};
use crate::grid::{Axis, Grid};
use crate::mesh::IsoMesh;

/// Index `q` of the first tick interval, scanning from the end, with
/// `w` in `(min(t[q-1], t[q]), max(t[q-1], t[q])]`. Returns 0 when no
/// interval contains `w`.
#[must_use]
pub fn find_nearest_on_axis(w: f64, ticks: &[f64]) -> usize {
    (1..ticks.len())
        .rev()
        .find(|&q| {
            let min = ticks[q].min(ticks[q - 1]);
            let max = ticks[q].max(ticks[q - 1]);
            w <= max && w > min
        })
        .unwrap_or(0)
}

/// A picked vertex snapped to a grid node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPick {
    /// Flat grid offset of the node.
    pub index: usize,
    /// `(i, j, k)` of the node.
    pub cell: (usize, usize, usize),
    /// Position of the raw grid node, not of the picked vertex.
    pub coordinate: DVec3,
    /// Scalar value at the node.
    pub value: f64,
}

/// Snaps mesh vertex `vertex` to the grid node closing its enclosing cell.
///
/// Interpolated vertices report the nearby grid node rather than their own
/// position.
pub fn pick_grid_node(grid: &Grid, mesh: &IsoMesh, vertex: usize) -> Result<GridPick> {
    let position = mesh
        .positions
        .get(vertex)
        .copied()
        .ok_or(IsosurfaceError::VertexOutOfRange {
            index: vertex,
            len: mesh.num_vertices(),
        })?;

    let i = find_nearest_on_axis(position.x, grid.ticks(Axis::X));
    let j = find_nearest_on_axis(position.y, grid.ticks(Axis::Y));
    let k = find_nearest_on_axis(position.z, grid.ticks(Axis::Z));
    let index = grid.index().linear(i, j, k);

    Ok(GridPick {
        index,
        cell: (i, j, k),
        coordinate: grid.position(index),
        value: grid.values()[index],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_isosurface_mesh;
    use crate::options::IsosurfaceOptions;

    #[test]
    fn test_find_nearest_on_axis() {
        let ticks = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(find_nearest_on_axis(2.5, &ticks), 3);
        assert_eq!(find_nearest_on_axis(1.0, &ticks), 1);
        assert_eq!(find_nearest_on_axis(0.2, &ticks), 1);
        // the first tick is never strictly inside an interval
        assert_eq!(find_nearest_on_axis(0.0, &ticks), 0);
        assert_eq!(find_nearest_on_axis(9.0, &ticks), 0);
    }

    #[test]
    fn test_find_nearest_on_descending_axis() {
        let ticks = [3.0, 2.0, 1.0];
        assert_eq!(find_nearest_on_axis(2.5, &ticks), 1);
        assert_eq!(find_nearest_on_axis(1.5, &ticks), 2);
    }

    #[test]
    fn test_interpolated_vertex_snaps_to_grid_node() {
        let ticks = vec![0.0, 1.0, 2.0];
        let grid = Grid::from_fn(ticks.clone(), ticks.clone(), ticks, |x, y, z| x + y + z).unwrap();
        let mesh =
            generate_isosurface_mesh(&grid, &IsosurfaceOptions::default().with_range(0.5, 5.5))
                .unwrap();
        let base = grid.index().num_nodes();
        assert!(mesh.num_vertices() > base);

        for vertex in base..mesh.num_vertices() {
            let pick = pick_grid_node(&grid, &mesh, vertex).unwrap();
            let p = mesh.positions[vertex];
            assert_eq!(pick.coordinate, grid.position(pick.index));
            // the snapped node closes the cell the vertex falls in
            assert!(pick.coordinate.x >= p.x && pick.coordinate.x - p.x <= 1.0);
            assert!(pick.coordinate.y >= p.y && pick.coordinate.y - p.y <= 1.0);
            assert!(pick.coordinate.z >= p.z && pick.coordinate.z - p.z <= 1.0);
        }
    }

    #[test]
    fn test_pick_out_of_range() {
        let grid = Grid::new(vec![0.0], vec![0.0], vec![0.0], vec![1.0]).unwrap();
        let err = pick_grid_node(&grid, &IsoMesh::default(), 3).unwrap_err();
        assert!(matches!(
            err,
            IsosurfaceError::VertexOutOfRange { index: 3, len: 0 }
        ));
    }
}
