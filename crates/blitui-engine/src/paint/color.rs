/// Packs straight RGBA bytes into the native `0xAARRGGBB` pixel order.
#[inline]
pub const fn rgba_to_native(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Unpacks a native pixel back into `[r, g, b, a]` bytes.
#[inline]
pub const fn native_to_rgba(px: u32) -> [u8; 4] {
    [
        (px >> 16) as u8,
        (px >> 8) as u8,
        px as u8,
        (px >> 24) as u8,
    ]
}

/// Builds a GUI-library vertex color (`0xAABBGGRR`) from straight RGBA bytes.
#[inline]
pub const fn gui_color(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}

/// Converts a GUI vertex color into a displayable native pixel.
///
/// Alpha is forced opaque: there is no blending, and the display ignores the
/// reserved byte anyway.
#[inline]
pub const fn gui_color_to_native(col: u32) -> u32 {
    let r = col as u8;
    let g = (col >> 8) as u8;
    let b = (col >> 16) as u8;
    rgba_to_native(r, g, b, 0xFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_packs_into_argb_order() {
        assert_eq!(rgba_to_native(0x11, 0x22, 0x33, 0x44), 0x4411_2233);
        assert_eq!(native_to_rgba(0x4411_2233), [0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn gui_color_swaps_red_and_blue() {
        let red = gui_color(0xFF, 0, 0, 0xFF);
        assert_eq!(red, 0xFF00_00FF);
        assert_eq!(gui_color_to_native(red), 0xFFFF_0000);
    }

    #[test]
    fn gui_color_alpha_is_forced_opaque() {
        assert_eq!(gui_color_to_native(gui_color(1, 2, 3, 0)), 0xFF01_0203);
        assert_eq!(gui_color_to_native(0xFFFF_FFFF), 0xFFFF_FFFF);
    }
}
