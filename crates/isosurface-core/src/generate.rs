//! One full generation run: grid and options in, mesh out.

use crate::clip::ClipPass;
use crate::cube::{draw_surface, draw_volume};
use crate::error::Result;
use crate::grid::{Axis, Grid};
use crate::mesh::{IsoMesh, MeshAssembler};
use crate::options::IsosurfaceOptions;
use crate::range::ValueRange;
use crate::slice::{draw_caps, draw_slices, interior_indices};

/// Generates the isosurface mesh for `grid`.
///
/// The run inserts the raw grid points, then draws in order: the filled
/// volume, the two end shells, and three rounds of slices and caps. The first
/// round fills the selected window; the second and third only outline the
/// bands where the window's lower and upper bounds cut each plane.
///
/// An empty selection (`isomin == isomax` after clamping) yields an empty mesh.
pub fn generate_isosurface_mesh(grid: &Grid, options: &IsosurfaceOptions) -> Result<IsoMesh> {
    options.validate(grid)?;

    let Some(data) = grid.value_range() else {
        log::debug!("grid has no finite values, nothing to draw");
        return Ok(IsoMesh::default());
    };
    let Some(selection) = ValueRange::select(options.isomin, options.isomax, data) else {
        log::debug!("empty iso range, nothing to draw");
        return Ok(IsoMesh::default());
    };

    let mut asm = MeshAssembler::new();
    asm.insert_grid_points(grid);

    if let Some(fill) = options.volume.active_fill() {
        let before = asm.num_faces();
        draw_volume(&mut asm, grid, &ClipPass::filled(selection, fill));
        log::debug!("volume: {} triangles", asm.num_faces() - before);
    }

    if let Some(fill) = options.surface.active_fill() {
        let before = asm.num_faces();
        let lower = ValueRange::new(selection.min, data.max);
        let upper = ValueRange::new(data.min, selection.max);
        draw_surface(&mut asm, grid, &ClipPass::filled(lower, fill));
        draw_surface(&mut asm, grid, &ClipPass::filled(upper, fill));
        log::debug!("surface: {} triangles", asm.num_faces() - before);
    }

    let rounds = [
        (selection, None),
        (ValueRange::new(selection.min, data.max), Some(selection)),
        (ValueRange::new(data.min, selection.max), Some(selection)),
    ];
    for (range, contour) in rounds {
        let before = asm.num_faces();
        let pass_for = |fill| ClipPass {
            range,
            fill,
            contour,
        };

        for axis in Axis::ALL {
            let slices = options.slices.get(axis);
            if let Some(fill) = slices.active_fill() {
                let locations = if slices.locations.is_empty() {
                    interior_indices(grid, axis)
                } else {
                    slices.locations.clone()
                };
                draw_slices(&mut asm, grid, axis, &locations, &pass_for(fill));
            }
        }

        for axis in Axis::ALL {
            if let Some(fill) = options.caps.get(axis).active_fill() {
                draw_caps(&mut asm, grid, axis, &pass_for(fill));
            }
        }

        log::debug!(
            "sections in [{}, {}]{}: {} triangles",
            range.min,
            range.max,
            if contour.is_some() { " (contour)" } else { "" },
            asm.num_faces() - before
        );
    }

    let mesh = asm.finish();
    log::info!(
        "isosurface mesh: {} vertices, {} triangles for range [{}, {}]",
        mesh.num_vertices(),
        mesh.num_triangles(),
        selection.min,
        selection.max
    );
    Ok(mesh)
}
