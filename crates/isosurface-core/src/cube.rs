//! Splitting grid cubes into tetrahedra and sweeping them over the grid.
//!
//! Cube corners are numbered by their offset bits `(di, dj, dk)`:
//! corner `4 * di + 2 * dj + dk` sits at `(i - 1 + di, j - 1 + dj, k - 1 + dk)`.

use crate::clip::{ClipOutcome, ClipPass};
use crate::grid::Grid;
use crate::mesh::MeshAssembler;
use crate::tetra::{clip_tetra, TetraMode};

/// The four tetrahedra cut off the corners of a cube.
pub const CORNER_TETRAHEDRA: [[usize; 4]; 4] =
    [[0, 1, 2, 4], [1, 2, 3, 7], [1, 4, 5, 7], [2, 4, 6, 7]];

/// The tetrahedron left in the middle once the corners are cut off.
pub const CENTER_TETRAHEDRON: [usize; 4] = [1, 2, 4, 7];

/// Grid offsets of the 8 corners of the cube whose far corner is `(i, j, k)`.
///
/// When `flip` is set the corner order is reversed, mirroring the
/// decomposition so that neighbouring cubes agree on their shared diagonals.
#[must_use]
pub fn cube_corners(grid: &Grid, i: usize, j: usize, k: usize, flip: bool) -> [usize; 8] {
    let index = grid.index();
    let mut corners = [0; 8];
    for (n, corner) in corners.iter_mut().enumerate() {
        let (di, dj, dk) = ((n >> 2) & 1, (n >> 1) & 1, n & 1);
        *corner = index.linear(i - 1 + di, j - 1 + dj, k - 1 + dk);
    }
    if flip {
        corners.reverse();
    }
    corners
}

/// Decomposes one cube into five tetrahedra and clips them.
///
/// For a shell only crossed cubes need the center tetrahedron. A filled
/// volume always draws all five.
pub fn add_cube(
    asm: &mut MeshAssembler,
    grid: &Grid,
    corners: [usize; 8],
    pass: &ClipPass,
    mode: TetraMode,
) {
    let mut crossed = false;
    for tetra in CORNER_TETRAHEDRA {
        let outcome = clip_tetra(asm, grid, tetra.map(|n| corners[n]), pass, mode);
        crossed |= outcome == ClipOutcome::Interpolated;
    }

    if crossed || mode == TetraMode::Volume {
        clip_tetra(asm, grid, CENTER_TETRAHEDRON.map(|n| corners[n]), pass, mode);
    }
}

/// Sweeps every cube of the grid.
///
/// Cubes with an even `i + j + k` (by far corner) use the mirrored order.
pub fn draw_cells(asm: &mut MeshAssembler, grid: &Grid, pass: &ClipPass, mode: TetraMode) {
    let index = grid.index();
    for k in 1..index.depth() {
        for j in 1..index.height() {
            for i in 1..index.width() {
                let flip = (i + j + k) % 2 == 0;
                add_cube(asm, grid, cube_corners(grid, i, j, k, flip), pass, mode);
            }
        }
    }
}

/// Draws the filled volume inside `pass.range`.
pub fn draw_volume(asm: &mut MeshAssembler, grid: &Grid, pass: &ClipPass) {
    draw_cells(asm, grid, pass, TetraMode::Volume);
}

/// Draws the shell where the field leaves `pass.range`.
pub fn draw_surface(asm: &mut MeshAssembler, grid: &Grid, pass: &ClipPass) {
    draw_cells(asm, grid, pass, TetraMode::Surface);
}
