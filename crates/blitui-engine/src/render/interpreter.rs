use crate::coords::{PixelRect, Vec2};
use crate::draw::{DrawCallback, DrawCmd, DrawData, DrawList, DrawVert};
use crate::paint::gui_color_to_native;
use crate::raster::Canvas;
use crate::texture::TextureId;

use super::RenderStats;

/// Rasterizes every command of `draw_data` into `canvas`.
///
/// `font_texture` identifies atlas geometry. Atlas and non-atlas triangles are
/// filled identically (flat color, no sampling) and only counted separately.
///
/// The canvas is not cleared here.
pub fn render_draw_data(canvas: &mut Canvas<'_>, draw_data: &DrawData, font_texture: TextureId) -> RenderStats {
    let mut stats = RenderStats::default();
    for list in &draw_data.cmd_lists {
        stats += render_list(canvas, list, font_texture);
    }
    stats
}

fn render_list(canvas: &mut Canvas<'_>, list: &DrawList, font_texture: TextureId) -> RenderStats {
    let mut stats = RenderStats::default();
    let screen = canvas.bounds();
    let mut idx_offset = 0usize;

    for cmd in &list.cmd_buffer {
        match &cmd.callback {
            Some(DrawCallback::ResetRenderState) => stats.callbacks += 1,
            Some(DrawCallback::User(callback)) => {
                stats.callbacks += 1;
                callback(list, cmd);
            }
            None => match cmd.clip_rect.to_pixels().intersect(screen) {
                Some(clip) => {
                    stats.commands_drawn += 1;
                    render_cmd(canvas, list, cmd, idx_offset, clip, font_texture, &mut stats);
                }
                None => stats.commands_clipped += 1,
            },
        }

        // Advance even for skipped commands so later commands stay aligned.
        idx_offset += cmd.elem_count as usize;
    }

    stats
}

fn render_cmd(
    canvas: &mut Canvas<'_>,
    list: &DrawList,
    cmd: &DrawCmd,
    idx_offset: usize,
    clip: PixelRect,
    font_texture: TextureId,
    stats: &mut RenderStats,
) {
    let count = cmd.elem_count as usize;
    let available = list.idx_buffer.len().saturating_sub(idx_offset).min(count);
    if available < count {
        log::warn!(
            "draw command wants indices {}..{} but the index buffer holds {}",
            idx_offset,
            idx_offset + count,
            list.idx_buffer.len()
        );
        stats.triangles_malformed += ((count - available) / 3) as u32;
    }
    let indices = &list.idx_buffer[idx_offset.min(list.idx_buffer.len())..][..available];

    let is_glyph = !font_texture.is_none() && cmd.texture == font_texture;

    for tri in indices.chunks_exact(3) {
        let verts = (
            list.vtx_buffer.get(tri[0] as usize),
            list.vtx_buffer.get(tri[1] as usize),
            list.vtx_buffer.get(tri[2] as usize),
        );
        let (Some(v0), Some(v1), Some(v2)) = verts else {
            log::warn!("triangle {:?} references a missing vertex", tri);
            stats.triangles_malformed += 1;
            continue;
        };

        if outside_clip(clip, [v0.pos, v1.pos, v2.pos]) {
            stats.triangles_culled += 1;
            continue;
        }

        stats.pixels_written += fill(canvas, [v0, v1, v2], clip) as u64;
        if is_glyph {
            stats.glyph_triangles += 1;
        } else {
            stats.solid_triangles += 1;
        }
    }
}

fn fill(canvas: &mut Canvas<'_>, [v0, v1, v2]: [&DrawVert; 3], clip: PixelRect) -> usize {
    let colors = [
        gui_color_to_native(v0.col),
        gui_color_to_native(v1.col),
        gui_color_to_native(v2.col),
    ];
    canvas.fill_triangle_clipped(v0.pos, v1.pos, v2.pos, colors, clip)
}

/// All three vertices beyond the same clip edge.
fn outside_clip(clip: PixelRect, p: [Vec2; 3]) -> bool {
    let (x0, y0, x1, y1) = (clip.x0 as f32, clip.y0 as f32, clip.x1 as f32, clip.y1 as f32);
    p.iter().all(|v| v.x < x0)
        || p.iter().all(|v| v.y < y0)
        || p.iter().all(|v| v.x >= x1)
        || p.iter().all(|v| v.y >= y1)
}
