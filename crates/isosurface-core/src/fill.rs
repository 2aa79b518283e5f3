//! Partial fill: replacing a solid triangle with an inset hexagonal ring.

use glam::DVec4;

/// A triangle corner as `(x, y, z, v)`, with its pool index when the caller
/// already owns one (grid points, for instance).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    pub xyzv: DVec4,
    pub id: Option<u32>,
}

impl Corner {
    /// A corner that still has to be resolved through the vertex pool.
    #[must_use]
    pub const fn new(xyzv: DVec4) -> Self {
        Self { xyzv, id: None }
    }

    /// A corner backed by an existing vertex.
    #[must_use]
    pub const fn known(xyzv: DVec4, id: u32) -> Self {
        Self { xyzv, id: Some(id) }
    }
}

/// The triangles a single drawn triangle unrolls into.
#[derive(Debug, Clone, PartialEq)]
pub enum Fan {
    /// The triangle itself.
    Solid([Corner; 3]),
    /// Six triangles framing a hole shrunk toward the centroid.
    Ring([[Corner; 3]; 6]),
}

impl Fan {
    /// Unrolls `tri` for the given fill fraction.
    ///
    /// Fractions of 1 or more (and non-positive ones, which callers skip
    /// before reaching here) keep the triangle solid.
    #[must_use]
    pub fn new(tri: [Corner; 3], fill: f64) -> Self {
        if fill >= 1.0 || fill <= 0.0 {
            Fan::Solid(tri)
        } else {
            Fan::Ring(inset_ring(tri, fill))
        }
    }

    #[must_use]
    pub fn triangles(&self) -> &[[Corner; 3]] {
        match self {
            Fan::Solid(tri) => std::slice::from_ref(tri),
            Fan::Ring(ring) => ring,
        }
    }
}

/// Point at fraction `r` of the way from `a` to `b`, in all four components.
#[inline]
#[must_use]
pub fn between(a: DVec4, b: DVec4, r: f64) -> DVec4 {
    a * (1.0 - r) + b * r
}

/// Builds the six-triangle ring for `tri` at fill fraction `fill` in `(0, 1)`.
///
/// The inner "bridge" points sit at `sqrt(1 - fill)` of the way from the
/// centroid to each corner, so the ring covers `fill` of the original area.
/// Outer corners keep their ids. Bridge points are new.
#[must_use]
pub fn inset_ring(tri: [Corner; 3], fill: f64) -> [[Corner; 3]; 6] {
    let [a, b, c] = tri;
    let g = (a.xyzv + b.xyzv + c.xyzv) / 3.0;
    let r = (1.0 - fill).sqrt();

    let p1 = Corner::new(between(g, a.xyzv, r));
    let p2 = Corner::new(between(g, b.xyzv, r));
    let p3 = Corner::new(between(g, c.xyzv, r));

    [
        [a, b, p2],
        [p2, p1, a],
        [b, c, p3],
        [p3, p2, b],
        [c, a, p1],
        [p1, p3, c],
    ]
}
