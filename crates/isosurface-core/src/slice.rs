//! Axis-aligned planar sections: interior slices and boundary caps.

use crate::clip::{clip_triangle, ClipPass};
use crate::grid::{Axis, Grid};
use crate::mesh::MeshAssembler;

/// Splits the quad `a b c d` into triangles `a b c` and `c d a` and clips both.
fn add_rect(asm: &mut MeshAssembler, grid: &Grid, [a, b, c, d]: [usize; 4], pass: &ClipPass) {
    clip_triangle(asm, [grid.xyzv(a), grid.xyzv(b), grid.xyzv(c)], pass);
    clip_triangle(asm, [grid.xyzv(c), grid.xyzv(d), grid.xyzv(a)], pass);
}

/// Triangulates one plane cell, choosing the diagonal by parity so that
/// neighbouring cells alternate.
fn add_cell(
    asm: &mut MeshAssembler,
    grid: &Grid,
    [p00, p01, p10, p11]: [usize; 4],
    odd: bool,
    pass: &ClipPass,
) {
    let quad = if odd {
        [p00, p01, p11, p10]
    } else {
        [p01, p11, p10, p00]
    };
    add_rect(asm, grid, quad, pass);
}

/// Draws the sections orthogonal to `axis` at each index in `items`.
///
/// Indices must be below the axis length.
pub fn draw_sections(
    asm: &mut MeshAssembler,
    grid: &Grid,
    axis: Axis,
    items: &[usize],
    pass: &ClipPass,
) {
    let index = grid.index();
    let (width, height, depth) = (index.width(), index.height(), index.depth());
    let at = |i, j, k| index.linear(i, j, k);

    for &n in items {
        match axis {
            Axis::X => {
                let i = n;
                for k in 1..depth {
                    for j in 1..height {
                        let cell = [
                            at(i, j - 1, k - 1),
                            at(i, j - 1, k),
                            at(i, j, k - 1),
                            at(i, j, k),
                        ];
                        add_cell(asm, grid, cell, (i + j + k) % 2 == 1, pass);
                    }
                }
            }
            Axis::Y => {
                let j = n;
                for i in 1..width {
                    for k in 1..depth {
                        let cell = [
                            at(i - 1, j, k - 1),
                            at(i, j, k - 1),
                            at(i - 1, j, k),
                            at(i, j, k),
                        ];
                        add_cell(asm, grid, cell, (i + j + k) % 2 == 1, pass);
                    }
                }
            }
            Axis::Z => {
                let k = n;
                for j in 1..height {
                    for i in 1..width {
                        let cell = [
                            at(i - 1, j - 1, k),
                            at(i - 1, j, k),
                            at(i, j - 1, k),
                            at(i, j, k),
                        ];
                        add_cell(asm, grid, cell, (i + j + k) % 2 == 1, pass);
                    }
                }
            }
        }
    }
}

/// Interior indices along `axis`: `1..len - 1`.
#[must_use]
pub fn interior_indices(grid: &Grid, axis: Axis) -> Vec<usize> {
    let len = grid.index().len_along(axis);
    (1..len.saturating_sub(1)).collect()
}

/// Boundary indices along `axis`: the first and the last, once each.
#[must_use]
pub fn cap_indices(grid: &Grid, axis: Axis) -> Vec<usize> {
    let last = grid.index().len_along(axis) - 1;
    if last == 0 {
        vec![0]
    } else {
        vec![0, last]
    }
}

/// Draws slices through `axis` at `locations`.
pub fn draw_slices(
    asm: &mut MeshAssembler,
    grid: &Grid,
    axis: Axis,
    locations: &[usize],
    pass: &ClipPass,
) {
    draw_sections(asm, grid, axis, locations, pass);
}

/// Draws both boundary caps of `axis`.
pub fn draw_caps(asm: &mut MeshAssembler, grid: &Grid, axis: Axis, pass: &ClipPass) {
    draw_sections(asm, grid, axis, &cap_indices(grid, axis), pass);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::ValueRange;

    fn cube3() -> Grid {
        let ticks = vec![0.0, 1.0, 2.0];
        Grid::from_fn(ticks.clone(), ticks.clone(), ticks, |x, y, z| x + y + z).unwrap()
    }

    fn full_pass() -> ClipPass {
        ClipPass::filled(ValueRange::new(0.0, 6.0), 1.0)
    }

    #[test]
    fn test_cap_and_interior_indices() {
        let grid = cube3();
        assert_eq!(cap_indices(&grid, Axis::X), vec![0, 2]);
        assert_eq!(interior_indices(&grid, Axis::Y), vec![1]);

        let flat = Grid::from_fn(vec![0.0], vec![0.0, 1.0], vec![0.0, 1.0], |_, _, _| 0.0).unwrap();
        assert_eq!(cap_indices(&flat, Axis::X), vec![0]);
        assert!(interior_indices(&flat, Axis::X).is_empty());
    }

    #[test]
    fn test_caps_only_touch_boundary_planes() {
        let grid = cube3();
        let mut asm = MeshAssembler::new();
        draw_caps(&mut asm, &grid, Axis::X, &full_pass());
        let mesh = asm.finish();
        // 2 planes x 4 cells x 2 triangles
        assert_eq!(mesh.num_triangles(), 16);
        for p in &mesh.positions {
            assert!(p.x == 0.0 || p.x == 2.0, "cap vertex on interior plane: {p:?}");
        }
    }

    #[test]
    fn test_sections_lie_in_their_plane() {
        let grid = cube3();
        for axis in Axis::ALL {
            let mut asm = MeshAssembler::new();
            draw_slices(&mut asm, &grid, axis, &[1], &full_pass());
            let mesh = asm.finish();
            assert_eq!(mesh.num_triangles(), 8, "axis {axis}");
            for p in &mesh.positions {
                assert_eq!(p[axis.index()], 1.0);
            }
        }
    }

    #[test]
    fn test_diagonals_alternate_between_cells() {
        let grid = cube3();
        let mut asm = MeshAssembler::new();
        draw_slices(&mut asm, &grid, Axis::Z, &[0], &full_pass());
        let mesh = asm.finish();
        // each cell contributes one diagonal; collect the diagonal of each cell
        let mut diagonals = Vec::new();
        for pair in mesh.faces.chunks(2) {
            let a: Vec<_> = pair[0].iter().map(|&id| mesh.positions[id as usize]).collect();
            let b: Vec<_> = pair[1].iter().map(|&id| mesh.positions[id as usize]).collect();
            let shared: Vec<_> = a.iter().filter(|p| b.contains(p)).copied().collect();
            assert_eq!(shared.len(), 2);
            let d = shared[1] - shared[0];
            diagonals.push((d.x * d.y).signum());
        }
        assert_eq!(diagonals.len(), 4);
        // neighbouring cells use opposite diagonals
        assert_ne!(diagonals[0], diagonals[1]);
        assert_ne!(diagonals[0], diagonals[2]);
        assert_eq!(diagonals[0], diagonals[3]);
    }

    #[test]
    fn test_contour_pass_skips_interior() {
        let grid = cube3();
        let mut asm = MeshAssembler::new();
        let pass = ClipPass::contour(ValueRange::new(0.0, 6.0), 1.0, ValueRange::new(0.0, 6.0));
        draw_caps(&mut asm, &grid, Axis::Z, &pass);
        assert_eq!(asm.num_faces(), 0);
    }
}
