use crate::coords::{PixelRect, Vec2};

use super::Canvas;

/// Twice-signed-area threshold below which a triangle is treated as degenerate.
const DEGENERATE_EPS: f32 = 1e-6;

/// Barycentric fill over the vertex bounding box, restricted to `clip` ∩ canvas.
///
/// Samples integer pixel coordinates; a pixel is covered when all three barycentric
/// weights are non-negative, so edges are inclusive. Writes `colors[0]` only.
pub(super) fn fill_triangle(
    canvas: &mut Canvas<'_>,
    [p0, p1, p2]: [Vec2; 3],
    colors: [u32; 3],
    clip: PixelRect,
) -> usize {
    let denom = (p1.y - p2.y) * (p0.x - p2.x) + (p2.x - p1.x) * (p0.y - p2.y);
    if denom.abs() <= DEGENERATE_EPS || !denom.is_finite() {
        return 0;
    }

    let Some(area) = clip.intersect(canvas.bounds()) else {
        return 0;
    };

    // `as i32` truncates toward zero and saturates, which is the box snapping we want.
    let min = p0.min(p1).min(p2);
    let max = p0.max(p1).max(p2);
    let x_start = (min.x as i32).max(area.x0);
    let x_end = (max.x as i32).min(area.x1 - 1);
    let y_start = (min.y as i32).max(area.y0);
    let y_end = (max.y as i32).min(area.y1 - 1);

    let color = colors[0];
    let mut written = 0;

    // Edge values carry the sign of `denom` inside the triangle. Comparing them
    // unnormalized keeps pixels that sit exactly on an edge.
    let sign = denom.signum();

    for y in y_start..=y_end {
        let py = y as f32;
        let row = canvas.row_mut(y);
        for x in x_start..=x_end {
            let px = x as f32;
            let w0 = (p1.y - p2.y) * (px - p2.x) + (p2.x - p1.x) * (py - p2.y);
            let w1 = (p2.y - p0.y) * (px - p2.x) + (p0.x - p2.x) * (py - p2.y);
            let w2 = (p0.y - p1.y) * (px - p0.x) + (p1.x - p0.x) * (py - p0.y);

            if w0 * sign >= 0.0 && w1 * sign >= 0.0 && w2 * sign >= 0.0 {
                row[x as usize] = color;
                written += 1;
            }
        }
    }

    written
}
