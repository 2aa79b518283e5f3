//! Trace-level input: the grid arrays plus styling.

use glam::Vec3;
use isosurface_core::{Axis, Grid, IsosurfaceOptions, Result};
use serde::{Deserialize, Serialize};

use crate::backend::Lighting;

/// Hover labels, either one label for every point or one per grid node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextLabels {
    Single(String),
    PerPoint(Vec<Option<String>>),
}

impl TextLabels {
    /// The label reported for grid node `index`.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        match self {
            TextLabels::Single(text) => Some(text.as_str()),
            TextLabels::PerPoint(labels) => labels.get(index)?.as_deref(),
        }
    }
}

/// Contour line styling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContourOptions {
    pub show: bool,
    pub color: Vec3,
    pub width: f32,
}

impl Default for ContourOptions {
    fn default() -> Self {
        Self {
            show: false,
            color: Vec3::splat(0.267),
            width: 2.0,
        }
    }
}

/// Everything one isosurface trace is drawn from.
///
/// Generation options are flattened in, so a JSON trace reads
/// `{ "x": [..], "value": [..], "isomin": 0.5, "caps": { "x": { "show": false } } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsosurfaceData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    /// Scalar values, x varying fastest.
    pub value: Vec<f64>,
    #[serde(flatten)]
    pub options: IsosurfaceOptions,
    pub xcalendar: Option<String>,
    pub ycalendar: Option<String>,
    pub zcalendar: Option<String>,
    pub text: Option<TextLabels>,
    /// Lower color bound. Defaults to the data minimum.
    pub cmin: Option<f64>,
    /// Upper color bound. Defaults to the data maximum.
    pub cmax: Option<f64>,
    pub colorscale: String,
    pub lighting: Lighting,
    pub lightposition: Vec3,
    pub contour: ContourOptions,
    pub flatshading: bool,
}

impl Default for IsosurfaceData {
    fn default() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            z: Vec::new(),
            value: Vec::new(),
            options: IsosurfaceOptions::default(),
            xcalendar: None,
            ycalendar: None,
            zcalendar: None,
            text: None,
            cmin: None,
            cmax: None,
            colorscale: "viridis".to_string(),
            lighting: Lighting::default(),
            lightposition: Vec3::new(1e5, 1e5, 0.0),
            contour: ContourOptions::default(),
            flatshading: true,
        }
    }
}

impl IsosurfaceData {
    /// Creates trace data from grid arrays with default styling.
    #[must_use]
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>, value: Vec<f64>) -> Self {
        Self {
            x,
            y,
            z,
            value,
            ..Self::default()
        }
    }

    /// Parses trace data from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the validated grid.
    pub fn grid(&self) -> Result<Grid> {
        Grid::new(
            self.x.clone(),
            self.y.clone(),
            self.z.clone(),
            self.value.clone(),
        )
    }

    /// The calendar for date coordinates along `axis`.
    #[must_use]
    pub fn calendar(&self, axis: Axis) -> Option<&str> {
        match axis {
            Axis::X => self.xcalendar.as_deref(),
            Axis::Y => self.ycalendar.as_deref(),
            Axis::Z => self.zcalendar.as_deref(),
        }
    }

    /// The color domain, falling back to the finite data range, then `[0, 1]`.
    #[must_use]
    pub fn color_bounds(&self, grid: &Grid) -> [f64; 2] {
        let (lo, hi) = grid.value_range().map_or((0.0, 1.0), |r| (r.min, r.max));
        [self.cmin.unwrap_or(lo), self.cmax.unwrap_or(hi)]
    }
}
