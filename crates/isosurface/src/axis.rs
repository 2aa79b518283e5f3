//! Mapping data coordinates into render space.

use glam::Vec3;
use isosurface_core::{Axis, AxisSet};
use serde::{Deserialize, Serialize};

/// Converts data coordinates along one axis to linearized local coordinates.
pub trait AxisTransform {
    /// Maps `coord` to local space. `calendar` names the calendar system for
    /// date axes and is ignored elsewhere.
    fn data_to_local(&self, coord: f64, calendar: Option<&str>) -> f64;
}

/// Scene-side placement of a trace: one transform and one scale per axis.
pub trait Scene {
    /// Returns the transform for `axis`.
    fn axis(&self, axis: Axis) -> &dyn AxisTransform;

    /// Returns the per-axis scale applied after the transform.
    fn data_scale(&self) -> Vec3;
}

/// Built-in axis types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    /// Identity mapping.
    #[default]
    Linear,
    /// Base-10 logarithm. Non-positive coordinates map to NaN.
    Log,
}

impl AxisTransform for AxisType {
    fn data_to_local(&self, coord: f64, _calendar: Option<&str>) -> f64 {
        match self {
            AxisType::Linear => coord,
            AxisType::Log => {
                if coord > 0.0 {
                    coord.log10()
                } else {
                    f64::NAN
                }
            }
        }
    }
}

/// A scene built from [`AxisType`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultScene {
    pub axes: AxisSet<AxisType>,
    pub data_scale: Vec3,
}

impl Default for DefaultScene {
    fn default() -> Self {
        Self {
            axes: AxisSet::default(),
            data_scale: Vec3::ONE,
        }
    }
}

impl DefaultScene {
    /// Creates a linear scene with the given scale.
    #[must_use]
    pub fn with_scale(data_scale: Vec3) -> Self {
        Self {
            data_scale,
            ..Self::default()
        }
    }
}

impl Scene for DefaultScene {
    fn axis(&self, axis: Axis) -> &dyn AxisTransform {
        self.axes.get(axis)
    }

    fn data_scale(&self) -> Vec3 {
        self.data_scale
    }
}
