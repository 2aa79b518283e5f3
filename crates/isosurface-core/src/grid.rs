//! Regular 3D scalar grids and their flat index layout.

use std::fmt;

use glam::{DVec3, DVec4};
use serde::{Deserialize, Serialize};

use crate::error::{IsosurfaceError, Result};
use crate::range::ValueRange;

/// One of the three grid axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in generation order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of this axis in an `[x, y, z]` triple.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Mapping between `(i, j, k)` grid coordinates and flat scalar offsets.
///
/// The layout is x-fastest: `i + width * j + width * height * k`. Indices
/// outside the grid are a caller error and are not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridIndex {
    width: usize,
    height: usize,
    depth: usize,
}

impl GridIndex {
    /// Creates an index for a grid of `width * height * depth` nodes.
    #[must_use]
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of ticks along `axis`.
    #[must_use]
    pub fn len_along(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
            Axis::Z => self.depth,
        }
    }

    /// Total number of grid nodes.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.width * self.height * self.depth
    }

    /// Flattens a 3D node index to a linear offset.
    #[inline]
    #[must_use]
    pub fn linear(&self, i: usize, j: usize, k: usize) -> usize {
        i + self.width * j + self.width * self.height * k
    }

    /// Inverts [`GridIndex::linear`].
    #[inline]
    #[must_use]
    pub fn unlinear(&self, idx: usize) -> (usize, usize, usize) {
        let slab = self.width * self.height;
        let k = idx / slab;
        let j = (idx - k * slab) / self.width;
        let i = idx - k * slab - j * self.width;
        (i, j, k)
    }
}

/// A regular grid: tick positions along each axis plus one scalar per node.
///
/// Ticks need not be sorted. The scalar array uses the [`GridIndex`] layout.
#[derive(Debug, Clone)]
pub struct Grid {
    xs: Vec<f64>,
    ys: Vec<f64>,
    zs: Vec<f64>,
    values: Vec<f64>,
    index: GridIndex,
}

impl Grid {
    /// Creates a grid, checking that every axis has ticks and that the scalar
    /// array has exactly one entry per node.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, zs: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        for (axis, ticks) in Axis::ALL.into_iter().zip([&xs, &ys, &zs]) {
            if ticks.is_empty() {
                return Err(IsosurfaceError::EmptyAxis { axis });
            }
        }

        let index = GridIndex::new(xs.len(), ys.len(), zs.len());
        if values.len() != index.num_nodes() {
            return Err(IsosurfaceError::SizeMismatch {
                expected: index.num_nodes(),
                actual: values.len(),
            });
        }

        Ok(Self {
            xs,
            ys,
            zs,
            values,
            index,
        })
    }

    /// Builds a grid by sampling `f` at every node.
    pub fn from_fn(
        xs: Vec<f64>,
        ys: Vec<f64>,
        zs: Vec<f64>,
        mut f: impl FnMut(f64, f64, f64) -> f64,
    ) -> Result<Self> {
        let mut values = Vec::with_capacity(xs.len() * ys.len() * zs.len());
        for &z in &zs {
            for &y in &ys {
                for &x in &xs {
                    values.push(f(x, y, z));
                }
            }
        }
        Self::new(xs, ys, zs, values)
    }

    #[must_use]
    pub fn index(&self) -> GridIndex {
        self.index
    }

    /// Tick positions along `axis`.
    #[must_use]
    pub fn ticks(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.xs,
            Axis::Y => &self.ys,
            Axis::Z => &self.zs,
        }
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Position of the node at flat offset `idx`.
    #[must_use]
    pub fn position(&self, idx: usize) -> DVec3 {
        let (i, j, k) = self.index.unlinear(idx);
        DVec3::new(self.xs[i], self.ys[j], self.zs[k])
    }

    /// Position and scalar of the node at flat offset `idx`, as `(x, y, z, v)`.
    #[must_use]
    pub fn xyzv(&self, idx: usize) -> DVec4 {
        self.position(idx).extend(self.values[idx])
    }

    /// Smallest and largest finite scalar values, or `None` when there are none.
    #[must_use]
    pub fn value_range(&self) -> Option<ValueRange> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.values {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
            }
        }
        (min <= max).then(|| ValueRange::new(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn unlinear_inverts_linear(
            (w, h, d, i, j, k) in (1usize..12, 1usize..12, 1usize..12)
                .prop_flat_map(|(w, h, d)| (Just(w), Just(h), Just(d), 0..w, 0..h, 0..d))
        ) {
            let index = GridIndex::new(w, h, d);
            prop_assert_eq!(index.unlinear(index.linear(i, j, k)), (i, j, k));
        }
    }

    #[test]
    fn test_index_layout_is_x_fastest() {
        let index = GridIndex::new(4, 3, 2);
        assert_eq!(index.linear(1, 0, 0), 1);
        assert_eq!(index.linear(0, 1, 0), 4);
        assert_eq!(index.linear(0, 0, 1), 12);
        assert_eq!(index.linear(3, 2, 1), 23);
        assert_eq!(index.num_nodes(), 24);
    }

    #[test]
    fn test_grid_rejects_size_mismatch() {
        let err = Grid::new(vec![0.0, 1.0], vec![0.0], vec![0.0], vec![1.0]).unwrap_err();
        assert!(matches!(
            err,
            IsosurfaceError::SizeMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_grid_rejects_empty_axis() {
        let err = Grid::new(vec![0.0], vec![], vec![0.0], vec![]).unwrap_err();
        assert!(matches!(err, IsosurfaceError::EmptyAxis { axis: Axis::Y }));
    }

    #[test]
    fn test_xyzv_reads_ticks_and_value() {
        let grid = Grid::from_fn(
            vec![0.0, 10.0],
            vec![0.0, 20.0],
            vec![0.0, 30.0],
            |x, y, z| x + y + z,
        )
        .unwrap();
        let idx = grid.index().linear(1, 0, 1);
        assert_eq!(grid.xyzv(idx), DVec4::new(10.0, 0.0, 30.0, 40.0));
    }

    #[test]
    fn test_value_range_skips_non_finite() {
        let grid = Grid::new(
            vec![0.0, 1.0, 2.0],
            vec![0.0],
            vec![0.0],
            vec![f64::NAN, -2.0, 5.0],
        )
        .unwrap();
        assert_eq!(grid.value_range(), Some(ValueRange::new(-2.0, 5.0)));

        let grid = Grid::new(vec![0.0], vec![0.0], vec![0.0], vec![f64::NAN]).unwrap();
        assert_eq!(grid.value_range(), None);
    }
}
