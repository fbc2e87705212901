use std::ops::AddAssign;

/// Counters collected while interpreting one frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RenderStats {
    /// Geometry commands whose clip rect overlapped the screen.
    pub commands_drawn: u32,
    /// Geometry commands skipped because their clip rect was empty or off screen.
    pub commands_clipped: u32,
    /// Callback commands, including render-state resets.
    pub callbacks: u32,

    /// Triangles rasterized from font-atlas commands.
    pub glyph_triangles: u32,
    /// Triangles rasterized from every other command.
    pub solid_triangles: u32,
    /// Triangles rejected because all vertices were outside one clip edge.
    pub triangles_culled: u32,
    /// Triangles dropped because they referenced missing vertices or indices.
    pub triangles_malformed: u32,

    /// Framebuffer writes (a pixel overwritten twice counts twice).
    pub pixels_written: u64,
}

impl RenderStats {
    #[inline]
    pub fn triangles_drawn(&self) -> u32 {
        self.glyph_triangles + self.solid_triangles
    }
}

impl AddAssign for RenderStats {
    fn add_assign(&mut self, rhs: Self) {
        self.commands_drawn += rhs.commands_drawn;
        self.commands_clipped += rhs.commands_clipped;
        self.callbacks += rhs.callbacks;
        self.glyph_triangles += rhs.glyph_triangles;
        self.solid_triangles += rhs.solid_triangles;
        self.triangles_culled += rhs.triangles_culled;
        self.triangles_malformed += rhs.triangles_malformed;
        self.pixels_written += rhs.pixels_written;
    }
}
