//! Clipping tetrahedra against a scalar range.
//!
//! Corners are grid points, so their pool ids are their flat grid offsets.

use crate::clip::{calc_intersection, ClipOutcome, ClipPass};
use crate::fill::Corner;
use crate::grid::Grid;
use crate::mesh::MeshAssembler;

/// What a tetrahedron pass produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TetraMode {
    /// Filled volume: faces of the retained part of each tetrahedron.
    Volume,
    /// Bounding shell: only the cut through each crossed tetrahedron.
    Surface,
}

const THREE_IN: [[usize; 4]; 4] = [[0, 1, 2, 3], [3, 0, 1, 2], [2, 3, 0, 1], [1, 2, 3, 0]];

const TWO_IN: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [1, 2, 3, 0],
    [2, 3, 0, 1],
    [3, 0, 1, 2],
    [0, 2, 3, 1],
    [1, 3, 2, 0],
];

const ONE_IN: [[usize; 4]; 4] = [[0, 1, 2, 3], [1, 2, 3, 0], [2, 3, 0, 1], [3, 0, 1, 2]];

/// Clips the tetrahedron on grid offsets `ids` and draws the result.
#[allow(clippy::cast_possible_truncation)]
pub fn clip_tetra(
    asm: &mut MeshAssembler,
    grid: &Grid,
    ids: [usize; 4],
    pass: &ClipPass,
    mode: TetraMode,
) -> ClipOutcome {
    let corners = ids.map(|id| Corner::known(grid.xyzv(id), id as u32));
    let ok = corners.map(|c| pass.range.contains(c.xyzv.w));
    let range = pass.range;
    let fill = pass.fill;

    let num_in = ok.iter().filter(|&&o| o).count();
    match num_in {
        0 => ClipOutcome::Outside,
        4 => {
            if mode == TetraMode::Volume {
                asm.draw_tetra(corners, fill);
            }
            ClipOutcome::Inside
        }
        3 => {
            let Some(&[ia, ib, ic, id]) = THREE_IN.iter().find(|e| !ok[e[3]]) else {
                unreachable!()
            };
            let (a, b, c, d) = (corners[ia], corners[ib], corners[ic], corners[id]);
            match mode {
                TetraMode::Volume => asm.draw_tri([a, b, c], fill),
                TetraMode::Surface => {
                    let p1 = calc_intersection(d.xyzv, a.xyzv, range);
                    let p2 = calc_intersection(d.xyzv, b.xyzv, range);
                    let p3 = calc_intersection(d.xyzv, c.xyzv, range);
                    asm.draw_tri([p1, p2, p3].map(Corner::new), fill);
                }
            }
            ClipOutcome::Interpolated
        }
        2 => {
            let Some(&[ia, ib, ic, id]) = TWO_IN.iter().find(|e| ok[e[0]] && ok[e[1]]) else {
                unreachable!()
            };
            let (a, b, c, d) = (corners[ia], corners[ib], corners[ic], corners[id]);
            let p1 = Corner::new(calc_intersection(c.xyzv, a.xyzv, range));
            let p2 = Corner::new(calc_intersection(c.xyzv, b.xyzv, range));
            let p3 = Corner::new(calc_intersection(d.xyzv, b.xyzv, range));
            let p4 = Corner::new(calc_intersection(d.xyzv, a.xyzv, range));
            match mode {
                TetraMode::Volume => {
                    asm.draw_tri([a, p4, p1], fill);
                    asm.draw_tri([b, p2, p3], fill);
                }
                TetraMode::Surface => asm.draw_quad([p1, p2, p3, p4], fill),
            }
            ClipOutcome::Interpolated
        }
        _ => {
            let Some(&[ia, ib, ic, id]) = ONE_IN.iter().find(|e| ok[e[0]]) else {
                unreachable!()
            };
            let (a, b, c, d) = (corners[ia], corners[ib], corners[ic], corners[id]);
            let p1 = Corner::new(calc_intersection(b.xyzv, a.xyzv, range));
            let p2 = Corner::new(calc_intersection(c.xyzv, a.xyzv, range));
            let p3 = Corner::new(calc_intersection(d.xyzv, a.xyzv, range));
            match mode {
                TetraMode::Volume => {
                    asm.draw_tri([a, p1, p2], fill);
                    asm.draw_tri([a, p2, p3], fill);
                    asm.draw_tri([a, p3, p1], fill);
                }
                TetraMode::Surface => asm.draw_tri([p1, p2, p3], fill),
            }
            ClipOutcome::Interpolated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::IsoMesh;
    use crate::range::ValueRange;
    use proptest::prelude::*;

    const RANGE: ValueRange = ValueRange::new(1.0, 2.0);

    /// A unit tetrahedron: grid offsets 0, 1, 2 and 4 of a 2x2x2 grid.
    const IDS: [usize; 4] = [0, 1, 2, 4];

    fn grid_with(v: [f64; 4]) -> Grid {
        let mut values = vec![0.0; 8];
        for (id, value) in IDS.into_iter().zip(v) {
            values[id] = value;
        }
        Grid::new(vec![0.0, 1.0], vec![0.0, 1.0], vec![0.0, 1.0], values).unwrap()
    }

    fn run(v: [f64; 4], mode: TetraMode, fill: f64) -> (ClipOutcome, IsoMesh) {
        let grid = grid_with(v);
        let mut asm = MeshAssembler::new();
        asm.insert_grid_points(&grid);
        let outcome = clip_tetra(&mut asm, &grid, IDS, &ClipPass::filled(RANGE, fill), mode);
        (outcome, asm.finish())
    }

    #[test]
    fn test_inside_volume_draws_four_faces_on_grid_points() {
        let (outcome, mesh) = run([1.0, 1.2, 1.5, 2.0], TetraMode::Volume, 1.0);
        assert_eq!(outcome, ClipOutcome::Inside);
        assert_eq!(mesh.num_triangles(), 4);
        // every face reuses the baseline grid vertices
        assert_eq!(mesh.num_vertices(), 8);
        for face in &mesh.faces {
            assert!(face.iter().all(|id| IDS.contains(&(*id as usize))));
        }
    }

    #[test]
    fn test_inside_surface_draws_nothing() {
        let (outcome, mesh) = run([1.0, 1.2, 1.5, 2.0], TetraMode::Surface, 1.0);
        assert_eq!(outcome, ClipOutcome::Inside);
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_outside_draws_nothing() {
        for mode in [TetraMode::Volume, TetraMode::Surface] {
            let (outcome, mesh) = run([0.0, 3.0, 0.5, 4.0], mode, 1.0);
            assert_eq!(outcome, ClipOutcome::Outside);
            assert!(mesh.is_empty());
        }
    }

    #[test]
    fn test_case_triangle_counts() {
        let cases = [
            ([1.5, 1.5, 1.5, 3.0], 1, 1),
            ([1.5, 1.5, 3.0, 0.0], 2, 2),
            ([1.5, 3.0, 3.0, 0.0], 3, 1),
        ];
        for (values, volume, surface) in cases {
            let (_, mesh) = run(values, TetraMode::Volume, 1.0);
            assert_eq!(mesh.num_triangles(), volume, "volume {values:?}");
            let (_, mesh) = run(values, TetraMode::Surface, 1.0);
            assert_eq!(mesh.num_triangles(), surface, "surface {values:?}");
        }
    }

    #[test]
    fn test_surface_cut_lies_on_bound() {
        let (_, mesh) = run([1.5, 3.0, 3.0, 3.0], TetraMode::Surface, 1.0);
        for id in mesh.referenced_vertices() {
            assert_eq!(mesh.intensity[id as usize], 2.0);
        }
    }

    #[test]
    fn test_partial_fill_multiplies_by_six() {
        let (_, mesh) = run([1.0, 1.2, 1.5, 2.0], TetraMode::Volume, 0.5);
        assert_eq!(mesh.num_triangles(), 24);
    }

    proptest! {
        #[test]
        fn every_partial_case_is_handled(
            v in prop::array::uniform4(prop::sample::select(vec![0.0, 1.5, 3.0])),
        ) {
            for mode in [TetraMode::Volume, TetraMode::Surface] {
                let (outcome, mesh) = run(v, mode, 1.0);
                let inside = v.iter().filter(|&&x| RANGE.contains(x)).count();
                if inside == 1 || inside == 2 || inside == 3 {
                    prop_assert_eq!(outcome, ClipOutcome::Interpolated);
                    prop_assert!(!mesh.is_empty());
                }
                for id in mesh.referenced_vertices() {
                    prop_assert!(RANGE.contains(mesh.intensity[id as usize]));
                }
            }
        }
    }
}
