//! Generates isosurfaces of a sphere-distance field and logs mesh statistics.
//!
//! Run with: `RUST_LOG=debug cargo run --example isosurface_demo`

use isosurface_rs::{
    init_logging, DefaultScene, FillOptions, Grid, HeadlessBackend, IsosurfaceData,
    IsosurfaceTrace, Result, TextLabels, Vec3,
};

fn ticks(n: usize) -> Vec<f64> {
    (0..n).map(|i| -1.0 + 2.0 * i as f64 / (n - 1) as f64).collect()
}

fn main() -> Result<()> {
    init_logging();

    let xs = ticks(16);
    let grid = Grid::from_fn(xs.clone(), xs.clone(), xs.clone(), |x, y, z| {
        (x * x + y * y + z * z).sqrt()
    })?;

    let mut data = IsosurfaceData::new(xs.clone(), xs.clone(), xs, grid.values().to_vec());
    data.text = Some(TextLabels::Single("distance".to_string()));
    data.options = data.options.with_range(0.4, 0.8);

    let scene = DefaultScene::with_scale(Vec3::new(1.0, 1.0, 0.5));
    let mut trace = IsosurfaceTrace::new(HeadlessBackend::new());

    trace.update(&scene, &data)?;
    log::info!(
        "shells only: {} vertices, {} triangles",
        trace.mesh().num_vertices(),
        trace.mesh().num_triangles()
    );

    data.options.volume = FillOptions::shown(0.6);
    data.options.slices.z.show = true;
    data.options.slices.z.locations = vec![8];
    trace.update(&scene, &data)?;
    log::info!(
        "with framed volume and a z slice: {} vertices, {} triangles",
        trace.mesh().num_vertices(),
        trace.mesh().num_triangles()
    );

    if let Some(config) = trace.backend().last() {
        log::info!(
            "upload size: {} position bytes, {} index bytes",
            config.position_bytes().len(),
            config.cell_bytes().len()
        );
    }

    let center = grid.index().linear(8, 8, 8);
    if let Some(pick) = trace.handle_pick(center) {
        log::info!(
            "picked node {} at {:?} ({})",
            pick.index,
            pick.trace_coordinate,
            pick.text_label.unwrap_or_default()
        );
    }

    trace.dispose();
    Ok(())
}
