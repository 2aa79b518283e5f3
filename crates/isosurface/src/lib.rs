//! isosurface-rs: isosurface traces for regular 3D scalar grids.
//!
//! A trace takes a grid of scalar values and a window `[isomin, isomax]`,
//! generates a triangle mesh covering the window's boundary shells, optional
//! volume fill, slices and caps, and hands the mesh to a rendering backend.
//!
//! # Quick Start
//!
//! ```no_run
//! use isosurface_rs::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let ticks = vec![0.0, 1.0, 2.0];
//!     let grid = Grid::from_fn(ticks.clone(), ticks.clone(), ticks.clone(), |x, y, z| x + y + z)?;
//!     let mut data = IsosurfaceData::new(ticks.clone(), ticks.clone(), ticks, grid.values().to_vec());
//!     data.options = data.options.with_range(1.5, 4.5);
//!
//!     let mut trace = IsosurfaceTrace::new(HeadlessBackend::new());
//!     trace.update(&DefaultScene::default(), &data)?;
//!     println!("{} triangles", trace.mesh().num_triangles());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`isosurface_core`] does all geometry in data coordinates.
//! - A [`Scene`] maps data coordinates to render space.
//! - A [`MeshBackend`] receives each regenerated mesh wholesale.

// Render space is f32
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_errors_doc)]

pub mod axis;
pub mod backend;
pub mod data;
pub mod trace;

// Re-export core types
pub use isosurface_core::{
    generate_isosurface_mesh, Axis, AxisSet, FillOptions, Grid, IsoMesh, IsosurfaceError,
    IsosurfaceOptions, Result, SliceOptions, ValueRange,
};

pub use axis::{AxisTransform, AxisType, DefaultScene, Scene};
pub use backend::{HeadlessBackend, Lighting, MeshBackend, MeshUpdateConfig};
pub use data::{ContourOptions, IsosurfaceData, TextLabels};
pub use trace::{IsosurfaceTrace, PickResult};

pub use glam::{DVec3, Vec3};

/// Initializes `env_logger` from `RUST_LOG`. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::try_init();
    log::info!("isosurface-rs logging initialized");
}
