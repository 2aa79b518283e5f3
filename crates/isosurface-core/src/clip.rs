//! Clipping triangles against a scalar range.
//!
//! Every point is an `(x, y, z, v)` tuple. Crossing points are found by
//! linear interpolation along an edge on the scalar coordinate and carry the
//! violated bound as their scalar value.

use glam::DVec4;

use crate::fill::{between, Corner};
use crate::mesh::MeshAssembler;
use crate::range::ValueRange;

/// Parameters of one clipping pass, threaded through every primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPass {
    /// The window primitives are clipped to.
    pub range: ValueRange,
    /// Fill fraction for every emitted triangle.
    pub fill: f64,
    /// Contour-only output: fully in-range triangles are skipped and partial
    /// output is restricted to corners inside this selection window.
    pub contour: Option<ValueRange>,
}

impl ClipPass {
    /// A pass that draws everything in `range`.
    #[must_use]
    pub fn filled(range: ValueRange, fill: f64) -> Self {
        Self {
            range,
            fill,
            contour: None,
        }
    }

    /// A pass that draws only the crossing band of `range`, limited to `selection`.
    #[must_use]
    pub fn contour(range: ValueRange, fill: f64, selection: ValueRange) -> Self {
        Self {
            range,
            fill,
            contour: Some(selection),
        }
    }

    fn keeps(&self, point: DVec4) -> bool {
        self.contour
            .map_or(true, |sel| !(point.w < sel.min || point.w > sel.max))
    }
}

/// How a primitive related to the clipping range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipOutcome {
    /// No corner in range. Nothing was emitted.
    Outside,
    /// Every corner in range.
    Inside,
    /// The range boundary crosses the primitive.
    Interpolated,
}

/// Point where the edge from `outside` to `inside` crosses `range`.
///
/// The result's scalar is exactly the violated bound. Equal scalars at both
/// ends give a ratio of zero. A non-finite outside scalar collapses onto the
/// inside point.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn calc_intersection(outside: DVec4, inside: DVec4, range: ValueRange) -> DVec4 {
    if !outside.w.is_finite() {
        return inside;
    }
    let bound = range.clamp(outside.w);
    let denom = outside.w - inside.w;
    let ratio = if denom == 0.0 {
        0.0
    } else {
        (outside.w - bound) / denom
    };
    let mut p = between(outside, inside, ratio);
    p.w = bound;
    p
}

/// Clips one triangle and draws what survives.
///
/// Corner ids are not carried over for planar output: every corner goes
/// through the vertex pool.
pub fn clip_triangle(asm: &mut MeshAssembler, xyzv: [DVec4; 3], pass: &ClipPass) -> ClipOutcome {
    let ok = xyzv.map(|p| pass.range.contains(p.w));
    let fill = pass.fill;

    if ok.iter().all(|&o| !o) {
        return ClipOutcome::Outside;
    }

    if ok.iter().all(|&o| o) {
        if pass.contour.is_none() {
            asm.draw_tri(xyzv.map(Corner::new), fill);
        }
        return ClipOutcome::Inside;
    }

    // two in, one out
    for [ia, ib, ic] in [[0, 1, 2], [2, 0, 1], [1, 2, 0]] {
        if ok[ia] && ok[ib] && !ok[ic] {
            let (a, b, c) = (xyzv[ia], xyzv[ib], xyzv[ic]);
            let p1 = calc_intersection(c, a, pass.range);
            let p2 = calc_intersection(c, b, pass.range);

            let draw1 = pass.keeps(p1);
            let draw2 = pass.keeps(p2);
            let draw_a = pass.keeps(a);
            let draw_b = pass.keeps(b);

            let mut draw = |tri: [DVec4; 3]| asm.draw_tri(tri.map(Corner::new), fill);
            match (draw1, draw2, draw_a, draw_b) {
                (true, true, true, true) => {
                    draw([p2, p1, a]);
                    draw([a, b, p2]);
                }
                (true, true, true, false) => draw([p2, p1, a]),
                (true, true, false, true) => draw([p1, p2, b]),
                (true, false, true, true) => draw([p1, a, b]),
                (false, true, true, true) => draw([p2, a, b]),
                _ => {}
            }
            return ClipOutcome::Interpolated;
        }
    }

    // one in, two out
    for [ia, ib, ic] in [[0, 1, 2], [1, 2, 0], [2, 0, 1]] {
        if ok[ia] && !ok[ib] && !ok[ic] {
            let (a, b, c) = (xyzv[ia], xyzv[ib], xyzv[ic]);
            let p1 = calc_intersection(b, a, pass.range);
            let p2 = calc_intersection(c, a, pass.range);

            if pass.keeps(p1) && pass.keeps(p2) && pass.keeps(a) {
                asm.draw_tri([p2, p1, a].map(Corner::new), fill);
            }
            return ClipOutcome::Interpolated;
        }
    }

    unreachable!("a partially in-range triangle has one or two corners in range")
}
