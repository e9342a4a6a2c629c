//! Shape rasterization.
//!
//! All routines draw through [`Surface::set`], so shapes that extend
//! past the surface edges are clipped pixel by pixel and never panic.
//! Line endpoints are inclusive.

use std::mem::swap;

use bresenham::Bresenham;

use crate::color::Color;
use crate::surface::Surface;

impl Surface {
    /// Draw a line from `(x0, y0)` to `(x1, y1)`, endpoints included.
    ///
    /// Horizontal and vertical lines take a fast path; everything else
    /// goes through Bresenham's algorithm.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        if x0 == x1 {
            for y in y0.min(y1)..=y0.max(y1) {
                self.set(x0, y, color);
            }
            return;
        }

        if y0 == y1 {
            for x in x0.min(x1)..=x0.max(x1) {
                self.set(x, y0, color);
            }
            return;
        }

        for (x, y) in Bresenham::new((x0 as isize, y0 as isize), (x1 as isize, y1 as isize)) {
            #[allow(clippy::cast_possible_truncation)]
            self.set(x as i32, y as i32, color);
        }
        // The iterator stops one short of the end point.
        self.set(x1, y1, color);
    }

    /// Draw the outline of a `width x height` rectangle with its top-left
    /// corner at `(x, y)`. Draws nothing if either dimension is not
    /// positive.
    pub fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        if width <= 0 || height <= 0 {
            return;
        }
        let right = x + width - 1;
        let bottom = y + height - 1;

        self.line(x, y, right, y, color);
        self.line(x, bottom, right, bottom, color);
        self.line(x, y, x, bottom, color);
        self.line(right, y, right, bottom, color);
    }

    /// Fill a `width x height` rectangle with its top-left corner at
    /// `(x, y)`. Draws nothing if either dimension is not positive.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        if width <= 0 || height <= 0 {
            return;
        }
        for row in y..y + height {
            self.line(x, row, x + width - 1, row, color);
        }
    }

    /// Draw a circle outline centered at `(cx, cy)` with radius `r`.
    /// Draws nothing for a non-positive radius.
    pub fn circle(&mut self, cx: i32, cy: i32, r: i32, color: Color) {
        if r <= 0 {
            return;
        }

        // Midpoint circle with 8-way symmetry.
        let mut x = 0;
        let mut y = r;
        let mut d = 3 - 2 * r;

        while y >= x {
            self.set(cx + x, cy - y, color);
            self.set(cx + y, cy - x, color);
            self.set(cx + y, cy + x, color);
            self.set(cx + x, cy + y, color);
            self.set(cx - x, cy - y, color);
            self.set(cx - y, cy - x, color);
            self.set(cx - y, cy + x, color);
            self.set(cx - x, cy + y, color);

            if d < 0 {
                d += 4 * x + 6;
                x += 1;
            } else {
                x += 1;
                y -= 1;
                d += 4 * (x - y) + 10;
            }
        }
    }

    /// Fill a circle centered at `(cx, cy)` with radius `r`. Draws
    /// nothing for a non-positive radius.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, color: Color) {
        if r <= 0 {
            return;
        }

        // Same traversal as `circle`, but spans between the symmetric
        // points instead of plotting them.
        let mut x = 0;
        let mut y = r;
        let mut d = 3 - 2 * r;

        while y >= x {
            self.line(cx - x, cy - y, cx + x, cy - y, color);
            self.line(cx - y, cy - x, cx + y, cy - x, color);
            self.line(cx - x, cy + y, cx + x, cy + y, color);
            self.line(cx - y, cy + x, cx + y, cy + x, color);

            if d < 0 {
                d += 4 * x + 6;
                x += 1;
            } else {
                x += 1;
                y -= 1;
                d += 4 * (x - y) + 10;
            }
        }
    }

    /// Draw the outline of the triangle `(x0, y0)`, `(x1, y1)`, `(x2, y2)`.
    pub fn triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    ) {
        self.line(x0, y0, x1, y1, color);
        self.line(x1, y1, x2, y2, color);
        self.line(x2, y2, x0, y0, color);
    }

    /// Fill the triangle `(x0, y0)`, `(x1, y1)`, `(x2, y2)`.
    ///
    /// Scanline rasterization: the vertices are sorted by `y`, the
    /// triangle is split into a flat-bottom and a flat-top half at the
    /// middle vertex, and each half is swept row by row.
    pub fn fill_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    ) {
        let (mut ax, mut ay) = (x0, y0);
        let (mut bx, mut by) = (x1, y1);
        let (mut cx, mut cy) = (x2, y2);

        // Sort so ay <= by <= cy.
        if ay > by {
            swap(&mut ax, &mut bx);
            swap(&mut ay, &mut by);
        }
        if ay > cy {
            swap(&mut ax, &mut cx);
            swap(&mut ay, &mut cy);
        }
        if by > cy {
            swap(&mut bx, &mut cx);
            swap(&mut by, &mut cy);
        }

        // All three vertices on one row: the triangle collapses to a
        // horizontal segment.
        if ay == cy {
            let left = ax.min(bx).min(cx);
            let right = ax.max(bx).max(cx);
            self.line(left, ay, right, ay, color);
            return;
        }

        if by == cy {
            self.fill_flat_bottom(ax, ay, bx, cx, by, color);
        } else if ay == by {
            self.fill_flat_top(ax, bx, ay, cx, cy, color);
        } else {
            // Split at the middle vertex: the long edge a-c crosses
            // row `by` at `mx`.
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            let mx = ax
                + ((by - ay) as f32 / (cy - ay) as f32 * (cx - ax) as f32).round() as i32;
            self.fill_flat_bottom(ax, ay, bx, mx, by, color);
            self.fill_flat_top(bx, mx, by, cx, cy, color);
        }
    }

    /// Fill a triangle whose flat edge is at the bottom: apex
    /// `(apex_x, apex_y)` above the base row `base_y` with corner xs
    /// `bx0` and `bx1`. Requires `apex_y < base_y`.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn fill_flat_bottom(
        &mut self,
        apex_x: i32,
        apex_y: i32,
        bx0: i32,
        bx1: i32,
        base_y: i32,
        color: Color,
    ) {
        let rows = (base_y - apex_y) as f32;
        let step0 = (bx0 - apex_x) as f32 / rows;
        let step1 = (bx1 - apex_x) as f32 / rows;

        let mut edge0 = apex_x as f32;
        let mut edge1 = apex_x as f32;
        for y in apex_y..=base_y {
            self.line(edge0.round() as i32, y, edge1.round() as i32, y, color);
            edge0 += step0;
            edge1 += step1;
        }
    }

    /// Fill a triangle whose flat edge is at the top: corner xs `tx0`
    /// and `tx1` on row `top_y`, apex `(apex_x, apex_y)` below.
    /// Requires `top_y < apex_y`.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn fill_flat_top(
        &mut self,
        tx0: i32,
        tx1: i32,
        top_y: i32,
        apex_x: i32,
        apex_y: i32,
        color: Color,
    ) {
        let rows = (apex_y - top_y) as f32;
        let step0 = (apex_x - tx0) as f32 / rows;
        let step1 = (apex_x - tx1) as f32 / rows;

        let mut edge0 = apex_x as f32;
        let mut edge1 = apex_x as f32;
        for y in (top_y..=apex_y).rev() {
            self.line(edge0.round() as i32, y, edge1.round() as i32, y, color);
            edge0 -= step0;
            edge1 -= step1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::color::{Color, WHITE};
    use crate::surface::Surface;

    fn lit(surface: &Surface) -> usize {
        surface.pixels().iter().filter(|&&p| p != 0).count()
    }

    #[test]
    fn test_horizontal_line_is_inclusive() {
        let mut surface = Surface::new(10, 10);
        surface.line(2, 5, 7, 5, WHITE);

        for x in 2..=7 {
            assert_eq!(surface.get(x, 5), Some(WHITE), "x = {x}");
        }
        assert_eq!(lit(&surface), 6);
    }

    #[test]
    fn test_vertical_line_is_inclusive() {
        let mut surface = Surface::new(10, 10);
        surface.line(3, 7, 3, 1, WHITE);

        for y in 1..=7 {
            assert_eq!(surface.get(3, y), Some(WHITE), "y = {y}");
        }
        assert_eq!(lit(&surface), 7);
    }

    #[test]
    fn test_diagonal_line_hits_both_endpoints() {
        let mut surface = Surface::new(10, 10);
        surface.line(0, 0, 3, 3, WHITE);

        for i in 0..=3 {
            assert_eq!(surface.get(i, i), Some(WHITE), "i = {i}");
        }
    }

    #[test]
    fn test_reversed_diagonal_line() {
        let mut surface = Surface::new(10, 10);
        surface.line(3, 3, 0, 0, WHITE);

        for i in 0..=3 {
            assert_eq!(surface.get(i, i), Some(WHITE), "i = {i}");
        }
    }

    #[test]
    fn test_single_pixel_line() {
        let mut surface = Surface::new(10, 10);
        surface.line(4, 4, 4, 4, WHITE);

        assert_eq!(surface.get(4, 4), Some(WHITE));
        assert_eq!(lit(&surface), 1);
    }

    #[test]
    fn test_line_off_surface_is_clipped() {
        let mut surface = Surface::new(4, 4);
        surface.line(-10, 2, 10, 2, WHITE);

        assert_eq!(lit(&surface), 4);
        for x in 0..4 {
            assert_eq!(surface.get(x, 2), Some(WHITE));
        }
    }

    #[test]
    fn test_rect_outline() {
        let mut surface = Surface::new(10, 10);
        surface.rect(1, 1, 4, 3, WHITE);

        // Corners of a 4x3 rectangle at (1, 1).
        assert_eq!(surface.get(1, 1), Some(WHITE));
        assert_eq!(surface.get(4, 1), Some(WHITE));
        assert_eq!(surface.get(1, 3), Some(WHITE));
        assert_eq!(surface.get(4, 3), Some(WHITE));
        // Interior stays empty.
        assert_eq!(surface.get(2, 2), Some(Color::rgba(0, 0, 0, 0)));
        // Perimeter of 4x3 = 10 pixels.
        assert_eq!(lit(&surface), 10);
    }

    #[test]
    fn test_rect_with_non_positive_dimensions() {
        let mut surface = Surface::new(10, 10);
        surface.rect(2, 2, 0, 5, WHITE);
        surface.rect(2, 2, 5, -1, WHITE);
        surface.fill_rect(2, 2, -3, 4, WHITE);
        assert_eq!(lit(&surface), 0);
    }

    #[test]
    fn test_fill_rect_covers_exact_area() {
        let mut surface = Surface::new(10, 10);
        surface.fill_rect(2, 3, 4, 5, WHITE);

        assert_eq!(lit(&surface), 4 * 5);
        for y in 3..8 {
            for x in 2..6 {
                assert_eq!(surface.get(x, y), Some(WHITE), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_circle_cardinal_points() {
        let mut surface = Surface::new(12, 12);
        surface.circle(5, 5, 3, WHITE);

        assert_eq!(surface.get(5, 2), Some(WHITE));
        assert_eq!(surface.get(5, 8), Some(WHITE));
        assert_eq!(surface.get(2, 5), Some(WHITE));
        assert_eq!(surface.get(8, 5), Some(WHITE));
        // Center stays empty.
        assert_eq!(surface.get(5, 5), Some(Color::rgba(0, 0, 0, 0)));
    }

    #[test]
    fn test_circle_non_positive_radius() {
        let mut surface = Surface::new(10, 10);
        surface.circle(5, 5, 0, WHITE);
        surface.circle(5, 5, -2, WHITE);
        surface.fill_circle(5, 5, 0, WHITE);
        assert_eq!(lit(&surface), 0);
    }

    #[test]
    fn test_fill_circle_spans_center_row() {
        let mut surface = Surface::new(12, 12);
        surface.fill_circle(5, 5, 3, WHITE);

        for x in 2..=8 {
            assert_eq!(surface.get(x, 5), Some(WHITE), "x = {x}");
        }
        assert_eq!(surface.get(5, 5), Some(WHITE));
    }

    #[test]
    fn test_circle_partially_off_surface() {
        let mut surface = Surface::new(6, 6);
        surface.fill_circle(0, 0, 4, WHITE);
        assert!(lit(&surface) > 0);
    }

    #[test]
    fn test_triangle_outline_hits_vertices() {
        let mut surface = Surface::new(12, 12);
        surface.triangle(1, 10, 10, 10, 5, 1, WHITE);

        assert_eq!(surface.get(1, 10), Some(WHITE));
        assert_eq!(surface.get(10, 10), Some(WHITE));
        assert_eq!(surface.get(5, 1), Some(WHITE));
    }

    #[test]
    fn test_fill_triangle_right_triangle() {
        let mut surface = Surface::new(8, 8);
        surface.fill_triangle(0, 0, 0, 4, 4, 4, WHITE);

        // Rows widen from the apex toward the base.
        for y in 0..=4 {
            for x in 0..=y {
                assert_eq!(surface.get(x, y), Some(WHITE), "({x}, {y})");
            }
        }
        // Outside the hypotenuse.
        assert_eq!(surface.get(4, 0), Some(Color::rgba(0, 0, 0, 0)));
        assert_eq!(surface.get(3, 1), Some(Color::rgba(0, 0, 0, 0)));
    }

    #[test]
    fn test_fill_triangle_flat_top() {
        let mut surface = Surface::new(10, 10);
        surface.fill_triangle(1, 1, 7, 1, 4, 6, WHITE);

        // Top edge filled end to end.
        for x in 1..=7 {
            assert_eq!(surface.get(x, 1), Some(WHITE), "x = {x}");
        }
        // Apex reached.
        assert_eq!(surface.get(4, 6), Some(WHITE));
    }

    #[test]
    fn test_fill_triangle_general_case_split() {
        let mut surface = Surface::new(16, 16);
        surface.fill_triangle(2, 2, 12, 6, 5, 13, WHITE);

        // All three vertices are covered.
        assert_eq!(surface.get(2, 2), Some(WHITE));
        assert_eq!(surface.get(12, 6), Some(WHITE));
        assert_eq!(surface.get(5, 13), Some(WHITE));
        // The split row is contiguous between the two edges.
        let row: Vec<i32> = (0..16)
            .filter(|&x| surface.get(x, 6) == Some(WHITE))
            .collect();
        assert!(!row.is_empty());
        let (first, last) = (row[0], row[row.len() - 1]);
        assert_eq!(row.len() as i32, last - first + 1);
    }

    #[test]
    fn test_fill_triangle_vertex_order_does_not_matter() {
        let mut a = Surface::new(16, 16);
        let mut b = Surface::new(16, 16);
        a.fill_triangle(2, 2, 12, 6, 5, 13, WHITE);
        b.fill_triangle(5, 13, 2, 2, 12, 6, WHITE);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fill_triangle_degenerate_collinear() {
        let mut surface = Surface::new(10, 10);
        // Horizontal segment.
        surface.fill_triangle(1, 4, 5, 4, 8, 4, WHITE);
        for x in 1..=8 {
            assert_eq!(surface.get(x, 4), Some(WHITE), "x = {x}");
        }

        // Vertical segment.
        let mut surface = Surface::new(10, 10);
        surface.fill_triangle(3, 0, 3, 2, 3, 6, WHITE);
        for y in 0..=6 {
            assert_eq!(surface.get(3, y), Some(WHITE), "y = {y}");
        }
    }

    #[test]
    fn test_fill_triangle_single_point() {
        let mut surface = Surface::new(10, 10);
        surface.fill_triangle(4, 4, 4, 4, 4, 4, WHITE);
        assert_eq!(surface.get(4, 4), Some(WHITE));
        assert_eq!(lit(&surface), 1);
    }

    #[test]
    fn test_fill_triangle_off_surface_is_safe() {
        let mut surface = Surface::new(4, 4);
        surface.fill_triangle(-10, -10, 20, -5, 5, 20, WHITE);
        // Nothing to assert beyond "does not panic"; clipping happens
        // per pixel.
    }
}
