// Scene colours.
//
// Colours are authored as sRGB hex triplets and converted to linear space
// before they reach the GPU, since all lighting happens in linear HDR.

pub const BACKGROUND: u32 = 0x050103;
pub const LEAF_BLOSSOM: u32 = 0xFFB7C5;
pub const LEAF_HOT_PINK: u32 = 0xFF69B4;
pub const ORNAMENT_WHITE: u32 = 0xFFFFFF;
pub const ORNAMENT_LAVENDER: u32 = 0xE6E6FA;
pub const RIBBON_WHITE: u32 = 0xFFFFFF;
pub const STAR_CHIFFON: u32 = 0xFFFACD;

#[inline]
pub fn hex_to_srgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    let [r, g, b] = hex_to_srgb(hex);
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)]
}
