//! The isosurface trace: regenerates its mesh on every update and hands it to
//! a rendering backend.

use glam::{DVec3, Vec3};
use isosurface_core::{generate_isosurface_mesh, pick_grid_node, Axis, Grid, IsoMesh, Result};

use crate::axis::Scene;
use crate::backend::{MeshBackend, MeshUpdateConfig};
use crate::data::{IsosurfaceData, TextLabels};

/// Result of picking a vertex of the trace.
#[derive(Debug, Clone, PartialEq)]
pub struct PickResult {
    /// Flat grid offset of the snapped node.
    pub index: usize,
    /// Data-space position of that node.
    pub trace_coordinate: DVec3,
    pub text_label: Option<String>,
}

/// One isosurface drawn through a [`MeshBackend`].
pub struct IsosurfaceTrace<B: MeshBackend> {
    backend: B,
    grid: Option<Grid>,
    mesh: IsoMesh,
    text: Option<TextLabels>,
}

impl<B: MeshBackend> IsosurfaceTrace<B> {
    /// Creates an empty trace drawing through `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            grid: None,
            mesh: IsoMesh::default(),
            text: None,
        }
    }

    /// Rebuilds the whole mesh from `data` and pushes it to the backend.
    ///
    /// On error the previous mesh stays in place and the backend is untouched.
    pub fn update(&mut self, scene: &dyn Scene, data: &IsosurfaceData) -> Result<()> {
        let grid = data.grid()?;
        let mesh = generate_isosurface_mesh(&grid, &data.options)?;

        let scale = scene.data_scale();
        let to_local = |axis: Axis, coord: f64| {
            scene
                .axis(axis)
                .data_to_local(coord, data.calendar(axis)) as f32
        };
        let positions = mesh
            .positions
            .iter()
            .map(|p| {
                Vec3::new(
                    to_local(Axis::X, p.x),
                    to_local(Axis::Y, p.y),
                    to_local(Axis::Z, p.z),
                ) * scale
            })
            .collect();

        let [cmin, cmax] = data.color_bounds(&grid);
        let config = MeshUpdateConfig {
            positions,
            cells: mesh.faces.clone(),
            vertex_intensity: mesh.intensity.iter().map(|&v| v as f32).collect(),
            vertex_intensity_bounds: [cmin as f32, cmax as f32],
            colormap: data.colorscale.clone(),
            light_position: data.lightposition,
            lighting: data.lighting,
            opacity: 1.0,
            contour_enable: data.contour.show,
            contour_color: data.contour.color,
            contour_width: data.contour.width,
            use_facet_normals: data.flatshading,
        };
        log::debug!(
            "pushing isosurface mesh to backend: {} vertices, {} cells",
            config.positions.len(),
            config.cells.len()
        );
        self.backend.update(config);

        self.grid = Some(grid);
        self.mesh = mesh;
        self.text.clone_from(&data.text);
        Ok(())
    }

    /// Maps a picked mesh vertex to the grid node it belongs to.
    ///
    /// Returns `None` before the first update or for an unknown vertex.
    #[must_use]
    pub fn handle_pick(&self, vertex: usize) -> Option<PickResult> {
        let grid = self.grid.as_ref()?;
        let pick = pick_grid_node(grid, &self.mesh, vertex).ok()?;
        Some(PickResult {
            index: pick.index,
            trace_coordinate: pick.coordinate,
            text_label: self
                .text
                .as_ref()
                .and_then(|text| text.label(pick.index))
                .map(str::to_owned),
        })
    }

    /// The current mesh in data coordinates.
    #[must_use]
    pub fn mesh(&self) -> &IsoMesh {
        &self.mesh
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Releases the backend's resources and returns it.
    pub fn dispose(mut self) -> B {
        self.backend.dispose();
        self.backend
    }
}
