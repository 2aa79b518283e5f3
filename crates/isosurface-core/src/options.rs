//! Configuration options for mesh generation.

use serde::{Deserialize, Serialize};

use crate::error::{IsosurfaceError, Result};
use crate::grid::{Axis, Grid};

/// Visibility and fill fraction of one render group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillOptions {
    /// Whether the group is drawn at all.
    pub show: bool,
    /// Fraction of each triangle drawn solid, in `(0, 1]`. Zero skips the group.
    pub fill: f64,
}

impl FillOptions {
    /// A shown group with the given fill.
    #[must_use]
    pub const fn shown(fill: f64) -> Self {
        Self { show: true, fill }
    }

    /// A hidden group.
    #[must_use]
    pub const fn hidden() -> Self {
        Self {
            show: false,
            fill: 1.0,
        }
    }

    /// The fill to draw with, or `None` when the group is skipped.
    #[must_use]
    pub fn active_fill(&self) -> Option<f64> {
        (self.show && self.fill > 0.0).then_some(self.fill)
    }
}

impl Default for FillOptions {
    fn default() -> Self {
        Self::shown(1.0)
    }
}

/// Slices through one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceOptions {
    pub show: bool,
    pub fill: f64,
    /// Grid indices to slice at. Empty means every interior index.
    pub locations: Vec<usize>,
}

impl SliceOptions {
    /// The fill to draw with, or `None` when the slices are skipped.
    #[must_use]
    pub fn active_fill(&self) -> Option<f64> {
        (self.show && self.fill > 0.0).then_some(self.fill)
    }
}

impl Default for SliceOptions {
    fn default() -> Self {
        Self {
            show: false,
            fill: 1.0,
            locations: Vec::new(),
        }
    }
}

/// One value per axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSet<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> AxisSet<T> {
    /// Creates a set with the same value on every axis.
    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            x: value.clone(),
            y: value.clone(),
            z: value,
        }
    }

    #[must_use]
    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    pub fn get_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

/// Everything that selects what one generation run draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsosurfaceOptions {
    /// Lower bound of the selected window. Defaults to the data minimum.
    pub isomin: Option<f64>,
    /// Upper bound of the selected window. Defaults to the data maximum.
    pub isomax: Option<f64>,
    /// Shells at both ends of the window.
    pub surface: FillOptions,
    /// Filled tetrahedra inside the window.
    pub volume: FillOptions,
    /// Interior slices per axis.
    pub slices: AxisSet<SliceOptions>,
    /// Boundary caps per axis.
    pub caps: AxisSet<FillOptions>,
}

impl Default for IsosurfaceOptions {
    fn default() -> Self {
        Self {
            isomin: None,
            isomax: None,
            surface: FillOptions::shown(1.0),
            volume: FillOptions::hidden(),
            slices: AxisSet::default(),
            caps: AxisSet::splat(FillOptions::shown(1.0)),
        }
    }
}

impl IsosurfaceOptions {
    /// Options that draw nothing until groups are switched on.
    #[must_use]
    pub fn none() -> Self {
        Self {
            surface: FillOptions::hidden(),
            caps: AxisSet::splat(FillOptions::hidden()),
            ..Self::default()
        }
    }

    /// Sets the selected scalar window.
    #[must_use]
    pub fn with_range(mut self, isomin: f64, isomax: f64) -> Self {
        self.isomin = Some(isomin);
        self.isomax = Some(isomax);
        self
    }

    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks fills and slice locations against `grid`.
    pub fn validate(&self, grid: &Grid) -> Result<()> {
        let mut fills = vec![self.surface.fill, self.volume.fill];
        for axis in Axis::ALL {
            fills.push(self.slices.get(axis).fill);
            fills.push(self.caps.get(axis).fill);
        }
        if let Some(&value) = fills.iter().find(|f| f.is_nan() || **f < 0.0) {
            return Err(IsosurfaceError::InvalidFill { value });
        }

        for axis in Axis::ALL {
            let len = grid.index().len_along(axis);
            if let Some(&index) = self.slices.get(axis).locations.iter().find(|&&n| n >= len) {
                return Err(IsosurfaceError::SliceOutOfRange { axis, index, len });
            }
        }
        Ok(())
    }
}
