// Copyright 2026 the Stele Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scanline rasterization of filled paths.
//!
//! Curves are flattened to line segments and filled one row at a time by
//! collecting edge crossings at the row's pixel-center height. Coverage is
//! binary (no antialiasing); a pixel belongs to the fill when its center
//! falls inside the region under the active fill rule.

use kurbo::{Affine, BezPath, PathEl, Point};
use peniko::Fill;

/// Default tolerance for curve flattening.
pub(crate) const DEFAULT_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone, Copy)]
struct Edge {
    /// Top endpoint (smaller y).
    top: Point,
    /// Bottom endpoint (larger y).
    bottom: Point,
    /// +1 when the original segment pointed downward, -1 when upward.
    dir: i32,
}

/// Flattens `path` under `transform` into closed-subpath line segments.
fn collect_edges(path: &BezPath, transform: Affine) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut start = Point::ZERO;
    let mut current = Point::ZERO;
    let mut push = |p0: Point, p1: Point| {
        if p0.y == p1.y {
            // Horizontal geometry never affects winding.
            return;
        }
        let (top, bottom, dir) = if p0.y < p1.y {
            (p0, p1, 1)
        } else {
            (p1, p0, -1)
        };
        edges.push(Edge { top, bottom, dir });
    };
    kurbo::flatten(
        path.elements().iter().map(|el| transform * *el),
        DEFAULT_TOLERANCE,
        |el| match el {
            PathEl::MoveTo(p) => {
                // Fills treat every subpath as closed.
                push(current, start);
                start = p;
                current = p;
            }
            PathEl::LineTo(p) => {
                push(current, p);
                current = p;
            }
            PathEl::ClosePath => {
                push(current, start);
                current = start;
            }
            // `flatten` only emits the three variants above.
            _ => unreachable!("flatten produced a curve element"),
        },
    );
    push(current, start);
    edges
}

/// Fills `path` by emitting horizontal pixel spans.
///
/// `span(y, x0, x1)` receives each covered half-open pixel range on row `y`,
/// already clipped to `0..height` vertically and to non-negative x; the
/// caller clips the right edge against its target buffer.
pub(crate) fn fill_path(
    path: &BezPath,
    transform: Affine,
    fill: Fill,
    height: u32,
    mut span: impl FnMut(u32, u32, u32),
) {
    let edges = collect_edges(path, transform);
    if edges.is_empty() {
        return;
    }
    let y_min = edges
        .iter()
        .map(|e| e.top.y)
        .fold(f64::INFINITY, f64::min)
        .floor()
        .max(0.0) as u32;
    let y_max = edges
        .iter()
        .map(|e| e.bottom.y)
        .fold(f64::NEG_INFINITY, f64::max)
        .ceil()
        .min(f64::from(height)) as u32;

    // Crossings at the current row's center, as (x, winding direction).
    let mut crossings: Vec<(f64, i32)> = Vec::new();
    for y in y_min..y_max {
        let yc = f64::from(y) + 0.5;
        crossings.clear();
        for edge in &edges {
            // Half-open span so a vertex shared by two edges counts once.
            if yc >= edge.top.y && yc < edge.bottom.y {
                let t = (yc - edge.top.y) / (edge.bottom.y - edge.top.y);
                let x = edge.top.x + t * (edge.bottom.x - edge.top.x);
                crossings.push((x, edge.dir));
            }
        }
        crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut winding = 0_i32;
        let mut span_start = 0.0_f64;
        for &(x, dir) in &crossings {
            let was_inside = inside(fill, winding);
            winding += dir;
            let is_inside = inside(fill, winding);
            if !was_inside && is_inside {
                span_start = x;
            } else if was_inside && !is_inside {
                emit(&mut span, y, span_start, x);
            }
        }
    }
}

fn inside(fill: Fill, winding: i32) -> bool {
    match fill {
        Fill::NonZero => winding != 0,
        Fill::EvenOdd => winding % 2 != 0,
    }
}

/// Converts a geometric x-range to the pixel range whose centers it covers.
fn emit(span: &mut impl FnMut(u32, u32, u32), y: u32, x0: f64, x1: f64) {
    let start = (x0 - 0.5).ceil().max(0.0) as u32;
    let end = (x1 - 0.5).ceil().max(0.0) as u32;
    if end > start {
        span(y, start, end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Circle, Rect, Shape};

    fn coverage(path: &BezPath, fill: Fill, width: u32, height: u32) -> Vec<Vec<bool>> {
        let mut grid = vec![vec![false; width as usize]; height as usize];
        fill_path(path, Affine::IDENTITY, fill, height, |y, x0, x1| {
            for x in x0..x1.min(width) {
                grid[y as usize][x as usize] = true;
            }
        });
        grid
    }

    #[test]
    fn axis_aligned_rect_covers_exact_pixels() {
        let path = Rect::new(2.0, 1.0, 6.0, 4.0).to_path(DEFAULT_TOLERANCE);
        let grid = coverage(&path, Fill::NonZero, 8, 6);
        for (y, row) in grid.iter().enumerate() {
            for (x, &on) in row.iter().enumerate() {
                let expected = (2..6).contains(&x) && (1..4).contains(&y);
                assert_eq!(on, expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn even_odd_ring_has_a_hole() {
        let mut path = Rect::new(0.0, 0.0, 10.0, 10.0).to_path(DEFAULT_TOLERANCE);
        path.extend(Rect::new(3.0, 3.0, 7.0, 7.0).to_path(DEFAULT_TOLERANCE));
        let grid = coverage(&path, Fill::EvenOdd, 10, 10);
        assert!(grid[1][1], "outer band filled");
        assert!(!grid[5][5], "hole empty");
        assert!(grid[5][1], "left band filled");
    }

    #[test]
    fn non_zero_fills_self_overlap() {
        let mut path = Rect::new(0.0, 0.0, 10.0, 10.0).to_path(DEFAULT_TOLERANCE);
        path.extend(Rect::new(3.0, 3.0, 7.0, 7.0).to_path(DEFAULT_TOLERANCE));
        let grid = coverage(&path, Fill::NonZero, 10, 10);
        assert!(grid[5][5], "overlap stays filled under non-zero");
    }

    #[test]
    fn circle_coverage_approximates_area() {
        let path = Circle::new((8.0, 8.0), 6.0).to_path(DEFAULT_TOLERANCE);
        let grid = coverage(&path, Fill::NonZero, 16, 16);
        assert!(grid[8][8], "center filled");
        assert!(!grid[0][0], "corner empty");
        let count: usize = grid.iter().flatten().filter(|&&on| on).count();
        // πr² ≈ 113 for r = 6; binary coverage lands close to it.
        assert!((100..=126).contains(&count), "covered {count} pixels");
    }

    #[test]
    fn transform_translates_coverage() {
        let path = Rect::new(0.0, 0.0, 2.0, 2.0).to_path(DEFAULT_TOLERANCE);
        let grid_at_origin = coverage(&path, Fill::NonZero, 8, 8);
        let mut grid = vec![vec![false; 8]; 8];
        fill_path(
            &path,
            Affine::translate((3.0, 4.0)),
            Fill::NonZero,
            8,
            |y, x0, x1| {
                for x in x0..x1.min(8) {
                    grid[y as usize][x as usize] = true;
                }
            },
        );
        assert!(grid_at_origin[0][0]);
        assert!(!grid[0][0]);
        assert!(grid[4][3] && grid[5][4]);
        assert!(!grid[6][3] && !grid[4][5]);
    }
}
