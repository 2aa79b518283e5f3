//! The rendering backend seam.
//!
//! A [`MeshBackend`] receives a complete [`MeshUpdateConfig`] after every
//! generation run and owns whatever GPU resources it builds from it.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Lighting parameters forwarded to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lighting {
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    pub roughness: f32,
    pub fresnel: f32,
    #[serde(rename = "vertexnormalsepsilon")]
    pub vertex_normals_epsilon: f32,
    #[serde(rename = "facenormalsepsilon")]
    pub face_normals_epsilon: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.8,
            diffuse: 0.8,
            specular: 0.05,
            roughness: 0.5,
            fresnel: 0.2,
            vertex_normals_epsilon: 1e-12,
            face_normals_epsilon: 0.0,
        }
    }
}

/// Everything the backend needs to redraw the mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshUpdateConfig {
    /// Vertex positions in render space.
    pub positions: Vec<Vec3>,
    /// Triangle vertex indices.
    pub cells: Vec<[u32; 3]>,
    /// Scalar value per vertex, for color mapping.
    pub vertex_intensity: Vec<f32>,
    /// Color domain `[min, max]` for `vertex_intensity`.
    pub vertex_intensity_bounds: [f32; 2],
    /// Colorscale name.
    pub colormap: String,
    pub light_position: Vec3,
    pub lighting: Lighting,
    /// Always 1: the mesh is drawn opaque.
    pub opacity: f32,
    pub contour_enable: bool,
    pub contour_color: Vec3,
    pub contour_width: f32,
    /// Flat shading when set, smooth shading otherwise.
    pub use_facet_normals: bool,
}

impl MeshUpdateConfig {
    /// Positions as raw bytes for upload.
    #[must_use]
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Cells as raw bytes for upload.
    #[must_use]
    pub fn cell_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }

    /// Intensities as raw bytes for upload.
    #[must_use]
    pub fn intensity_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertex_intensity)
    }
}

/// A rendering backend that draws one mesh.
pub trait MeshBackend {
    /// Replaces the drawn mesh wholesale.
    fn update(&mut self, config: MeshUpdateConfig);

    /// Releases backend resources.
    fn dispose(&mut self);
}

/// A backend that only keeps the last configuration it was given.
///
/// Useful for tests, batch processing and exporting meshes without a GPU.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    last: Option<MeshUpdateConfig>,
    num_updates: usize,
    disposed: bool,
}

impl HeadlessBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent configuration, if any.
    #[must_use]
    pub fn last(&self) -> Option<&MeshUpdateConfig> {
        self.last.as_ref()
    }

    #[must_use]
    pub fn num_updates(&self) -> usize {
        self.num_updates
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl MeshBackend for HeadlessBackend {
    fn update(&mut self, config: MeshUpdateConfig) {
        self.num_updates += 1;
        self.last = Some(config);
    }

    fn dispose(&mut self) {
        self.last = None;
        self.disposed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MeshUpdateConfig {
        MeshUpdateConfig {
            positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            cells: vec![[0, 1, 2]],
            vertex_intensity: vec![0.0, 0.5, 1.0],
            vertex_intensity_bounds: [0.0, 1.0],
            colormap: "viridis".to_string(),
            light_position: Vec3::ONE,
            lighting: Lighting::default(),
            opacity: 1.0,
            contour_enable: false,
            contour_color: Vec3::ZERO,
            contour_width: 2.0,
            use_facet_normals: true,
        }
    }

    #[test]
    fn test_byte_views() {
        let config = config();
        assert_eq!(config.position_bytes().len(), 3 * 3 * 4);
        assert_eq!(config.cell_bytes().len(), 3 * 4);
        assert_eq!(config.intensity_bytes().len(), 3 * 4);
    }

    #[test]
    fn test_headless_backend_records_and_disposes() {
        let mut backend = HeadlessBackend::new();
        backend.update(config());
        backend.update(config());
        assert_eq!(backend.num_updates(), 2);
        assert_eq!(backend.last(), Some(&config()));
        backend.dispose();
        assert!(backend.is_disposed());
        assert!(backend.last().is_none());
    }

    #[test]
    fn test_lighting_json_names() {
        let lighting: Lighting =
            serde_json::from_str(r#"{ "ambient": 0.3, "vertexnormalsepsilon": 0.001 }"#).unwrap();
        assert_eq!(lighting.ambient, 0.3);
        assert_eq!(lighting.vertex_normals_epsilon, 0.001);
        assert_eq!(lighting.diffuse, 0.8);
    }
}
