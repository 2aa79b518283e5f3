//! Core mesh generation for isosurface-rs.
//!
//! This crate turns a regular 3D scalar grid into explicit triangle geometry
//! clipped to a scalar window `[isomin, isomax]`:
//! - [`Grid`] and [`GridIndex`] for the input field and its flat layout
//! - [`VertexPool`] and [`MeshAssembler`] for the growing output
//! - triangle and tetrahedron clipping, cube decomposition, slices and caps
//! - [`generate_isosurface_mesh`] to run everything in order
//!
//! All clipping happens in data coordinates. Mapping into render space is
//! left to the caller.

// Geometry code intentionally casts between index types
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod clip;
pub mod cube;
pub mod error;
pub mod fill;
pub mod generate;
pub mod grid;
pub mod mesh;
pub mod options;
pub mod pick;
pub mod range;
pub mod slice;
pub mod tetra;
pub mod vertex_pool;

pub use clip::{calc_intersection, clip_triangle, ClipOutcome, ClipPass};
pub use cube::{add_cube, draw_surface, draw_volume};
pub use error::{IsosurfaceError, Result};
pub use fill::{Corner, Fan};
pub use generate::generate_isosurface_mesh;
pub use grid::{Axis, Grid, GridIndex};
pub use mesh::{IsoMesh, MeshAssembler};
pub use options::{AxisSet, FillOptions, IsosurfaceOptions, SliceOptions};
pub use pick::{find_nearest_on_axis, pick_grid_node, GridPick};
pub use range::ValueRange;
pub use slice::{draw_caps, draw_slices};
pub use tetra::{clip_tetra, TetraMode};
pub use vertex_pool::VertexPool;

// Re-export glam types for convenience
pub use glam::{DVec3, DVec4};
