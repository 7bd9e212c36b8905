use crate::core::random::Rng;

/// Cosmetic spawn colors (0xRRGGBB). Picked once at spawn, never mutated.
pub const PALETTE: [u32; 8] = [
    0xE74C3C, // red
    0xE67E22, // orange
    0xF1C40F, // yellow
    0x2ECC71, // green
    0x1ABC9C, // teal
    0x3498DB, // blue
    0x9B59B6, // purple
    0xECF0F1, // off-white
];

pub fn pick_color(rng: &mut Rng) -> u32 {
    PALETTE[rng.index(PALETTE.len())]
}

/// CSS hex string for the JSON snapshot ("#rrggbb").
pub fn css_hex(color: u32) -> String {
    format!("#{:06x}", color & 0xFFFFFF)
}
