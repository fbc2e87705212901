use super::Canvas;

/// Bresenham line, both endpoints included.
///
/// The minor coordinate of step `k` is computed in closed form, so only the steps
/// whose major coordinate lies on the canvas are visited. Endpoints may be
/// anywhere in `i32`.
pub(super) fn draw_line(canvas: &mut Canvas<'_>, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;

    // Both endpoints past the same edge: nothing can be visible.
    if (x0 < 0 && x1 < 0) || (y0 < 0 && y1 < 0) || (x0 >= w && x1 >= w) || (y0 >= h && y1 >= h) {
        return;
    }

    let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    if dx >= dy {
        let steps = Steps { start: x0, dir: sx, major: dx, minor: dy };
        for (k, x) in steps.visible(i64::from(w)) {
            canvas.put(x as i32, clamp_i32(y0 + sy * steps.minor_offset(k)), color);
        }
    } else {
        let steps = Steps { start: y0, dir: sy, major: dy, minor: dx };
        for (k, y) in steps.visible(i64::from(h)) {
            canvas.put(clamp_i32(x0 + sx * steps.minor_offset(k)), y as i32, color);
        }
    }
}

/// Walk along the major axis of a line.
#[derive(Debug, Copy, Clone)]
struct Steps {
    start: i64,
    dir: i64,
    major: i64,
    minor: i64,
}

impl Steps {
    /// `(step, major coordinate)` for the steps that land in `0..extent`.
    fn visible(self, extent: i64) -> impl Iterator<Item = (i64, i64)> {
        let (lo, hi) = if self.dir > 0 {
            ((-self.start).max(0), self.major.min(extent - 1 - self.start))
        } else {
            ((self.start - (extent - 1)).max(0), self.major.min(self.start))
        };
        (lo..=hi).map(move |k| (k, self.start + self.dir * k))
    }

    /// Minor-axis distance after `k` major steps, matching the incremental
    /// error-term walk: `floor((2 * minor * k + major - 1) / (2 * major))`.
    fn minor_offset(self, k: i64) -> i64 {
        if self.major == 0 {
            return 0;
        }
        let num = 2 * i128::from(self.minor) * i128::from(k) + i128::from(self.major) - 1;
        (num / (2 * i128::from(self.major))) as i64
    }
}

/// Off-canvas minor coordinates only need to stay off-canvas.
fn clamp_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use crate::raster::Canvas;

    const C: u32 = 0xFF12_3456;

    fn lit(buf: &[u32]) -> usize {
        buf.iter().filter(|&&p| p != 0).count()
    }

    #[test]
    fn horizontal_line_includes_both_endpoints() {
        let mut buf = vec![0u32; 8 * 8];
        let mut c = Canvas::new(&mut buf, 8, 8).unwrap();
        c.draw_line(1, 2, 6, 2, C);
        assert_eq!(c.get(1, 2), Some(C));
        assert_eq!(c.get(6, 2), Some(C));
        assert_eq!(lit(&buf), 6);
    }

    #[test]
    fn one_pixel_per_major_axis_step() {
        let mut buf = vec![0u32; 16 * 16];
        let mut c = Canvas::new(&mut buf, 16, 16).unwrap();
        c.draw_line(0, 0, 9, 4, C);
        assert_eq!(c.get(0, 0), Some(C));
        assert_eq!(c.get(9, 4), Some(C));
        // max(|dx|, |dy|) + 1 pixels, one per column.
        assert_eq!(lit(&buf), 10);
        for x in 0..10 {
            assert_eq!((0..16).filter(|&y| buf[y * 16 + x] != 0).count(), 1, "column {x}");
        }
    }

    #[test]
    fn steep_line_reversed_direction() {
        let mut buf = vec![0u32; 8 * 8];
        let mut c = Canvas::new(&mut buf, 8, 8).unwrap();
        c.draw_line(3, 7, 1, 0, C);
        assert_eq!(c.get(3, 7), Some(C));
        assert_eq!(c.get(1, 0), Some(C));
        assert_eq!(lit(&buf), 8);
    }

    #[test]
    fn single_point_line() {
        let mut buf = vec![0u32; 4 * 4];
        let mut c = Canvas::new(&mut buf, 4, 4).unwrap();
        c.draw_line(2, 2, 2, 2, C);
        assert_eq!(lit(&buf), 1);
    }

    #[test]
    fn line_outside_one_axis_writes_nothing() {
        let mut buf = vec![0u32; 4 * 4];
        let mut c = Canvas::new(&mut buf, 4, 4).unwrap();
        c.draw_line(-5, 0, -1, 3, C);
        c.draw_line(0, 4, 3, 9, C);
        c.draw_line(4, 0, 100, 2, C);
        c.draw_line(0, -3, 3, -1, C);
        assert_eq!(lit(&buf), 0);
    }

    #[test]
    fn far_endpoints_do_not_overflow() {
        let mut buf = vec![0u32; 4 * 4];
        let mut c = Canvas::new(&mut buf, 4, 4).unwrap();
        c.draw_line(i32::MIN, 1, 2, 1, C);
        assert_eq!(c.get(2, 1), Some(C));
        assert_eq!(c.get(3, 1), Some(0));
        assert_eq!(lit(&buf), 3);

        buf.fill(0);
        let mut c = Canvas::new(&mut buf, 4, 4).unwrap();
        c.draw_line(i32::MAX, i32::MIN, 0, 0, C);
        c.draw_line(1, i32::MAX, 1, i32::MIN, C);
        assert_eq!(c.get(0, 0), Some(C));
        assert_eq!((0..4).filter(|&y| c.get(1, y) == Some(C)).count(), 4);
    }

    #[test]
    fn matches_incremental_walk_for_diagonal_slopes() {
        // Reference pixels of the classic error-term walk from (0, 0) to (7, 3).
        let expected = [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2), (6, 3), (7, 3)];
        let mut buf = vec![0u32; 8 * 8];
        let mut c = Canvas::new(&mut buf, 8, 8).unwrap();
        c.draw_line(0, 0, 7, 3, C);
        for (x, y) in expected {
            assert_eq!(c.get(x, y), Some(C), "pixel ({x}, {y})");
        }
        assert_eq!(lit(&buf), expected.len());
    }

    #[test]
    fn partially_visible_line_plots_only_in_bounds() {
        let mut buf = vec![0u32; 4 * 4];
        let mut c = Canvas::new(&mut buf, 4, 4).unwrap();
        c.draw_line(-2, 1, 5, 1, C);
        assert_eq!(lit(&buf), 4);
    }
}
