// Fixed color palettes.
//
// Both palettes are closed 8-entry lookup tables indexed by a single
// `range_i32(0, 8)` draw. Entries are written as packed `0xAABBGGRR` words
// and decoded at compile time. The two tables are independent: a planet
// color draw never consumes or depletes anything from the star table.
//
// Reordering or editing an entry recolors every system in the galaxy.

use crate::types::Color;
use galaxy_prng::SectorRng;

/// Number of entries in each palette.
pub const PALETTE_SIZE: usize = 8;

/// Star colors, from white through pale yellow and blue to deep red.
pub const STAR_PALETTE: [Color; PALETTE_SIZE] = [
    Color::from_abgr(0xFFFF_FFFF),
    Color::from_abgr(0xFFD9_FFFF),
    Color::from_abgr(0xFFA3_FFFF),
    Color::from_abgr(0xFFFF_C8C8),
    Color::from_abgr(0xFFFF_CB9D),
    Color::from_abgr(0xFF9F_9FFF),
    Color::from_abgr(0xFF41_5EFF),
    Color::from_abgr(0xFF28_199D),
];

/// Planet colors: red, dark red, dark yellow, green, dark green, cyan, blue,
/// grey.
pub const PLANET_PALETTE: [Color; PALETTE_SIZE] = [
    Color::from_abgr(0xFF00_00FF),
    Color::from_abgr(0xFF00_0080),
    Color::from_abgr(0xFF00_8080),
    Color::from_abgr(0xFF00_FF00),
    Color::from_abgr(0xFF00_8000),
    Color::from_abgr(0xFFFF_FF00),
    Color::from_abgr(0xFFFF_0000),
    Color::from_abgr(0xFFC0_C0C0),
];

/// Pick one entry with a single draw.
pub fn pick(palette: &[Color; PALETTE_SIZE], rng: &mut SectorRng) -> Color {
    palette[rng.range_i32(0, PALETTE_SIZE as i32) as usize]
}
