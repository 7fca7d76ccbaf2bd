// Coordinate-seeded deterministic number stream.
//
// Implements a 32-bit Lehmer-style mixer: a Weyl increment on a single `u32`
// state followed by two multiply-and-fold rounds (high half XOR low half of a
// 64-bit product). Hand-rolled with no RNG crate so that the output sequence
// is fixed forever, bit for bit, on every platform.
//
// This crate is the single source of randomness for `galaxy_gen`. Every star
// system is regenerated from scratch by seeding a fresh `SectorRng` from the
// sector coordinate, so the draw sequence *is* the galaxy: changing a
// constant, the order of draws, or the bounded-draw arithmetic changes every
// system everywhere.
//
// **Critical constraint: determinism.** The core step uses integer arithmetic
// only. `range_f64` converts to floating point exactly once per draw, with a
// fixed operation order, and its divisor is deliberately `2^31 - 1` rather
// than `2^32 - 1` (results can overshoot `high`). Do not "fix" it.

use serde::{Deserialize, Serialize};

/// Weyl increment added to the state before each output.
const INCREMENT: u32 = 0xE120_FC15;
/// First mixing multiplier.
const MIX_A: u64 = 0x4A39_B70D;
/// Second mixing multiplier.
const MIX_B: u64 = 0x12FA_D5C9;
/// Divisor for unit-float conversion. Note: `2^31 - 1`, not `u32::MAX`.
const FLOAT_DIVISOR: f64 = 0x7FFF_FFFF as f64;

/// The per-sector number stream.
///
/// Holds exactly one `u32` of state. Two streams built from the same state
/// produce identical sequences. Streams are cheap to construct and are never
/// shared: each generation call owns its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorRng {
    state: u32,
}

impl SectorRng {
    /// Seed a stream from a sector coordinate.
    ///
    /// Only the low 16 bits of each component participate:
    /// `state = (x & 0xFFFF) << 16 | (y & 0xFFFF)`. Coordinates that agree
    /// modulo 65536 on both axes therefore produce the same stream, and the
    /// galaxy repeats with period 65536 in each direction.
    pub fn from_coordinate(x: u32, y: u32) -> Self {
        Self::from_state(((x & 0xFFFF) << 16) | (y & 0xFFFF))
    }

    /// Build a stream from a raw state word.
    pub fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Current state word (the value the next step will increment).
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance one step and return the mixed 32-bit output.
    ///
    /// Only the incremented state is kept; the intermediate mix values are
    /// discarded.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let m1 = fold(self.state as u64 * MIX_A);
        fold(m1 as u64 * MIX_B)
    }

    /// Draw an integer in `[low, high)` as `raw % (high - low) + low`.
    ///
    /// Consumes exactly one output. Plain modulo, so small ranges carry the
    /// usual bias; that bias is part of the reproducible sequence.
    ///
    /// Panics if `low >= high`.
    pub fn range_i32(&mut self, low: i32, high: i32) -> i32 {
        assert!(low < high, "range_i32: low must be less than high");
        let span = high.wrapping_sub(low) as u32;
        low.wrapping_add((self.next_u32() % span) as i32)
    }

    /// Draw a float nominally in `[low, high)`.
    ///
    /// Computed as `(raw / (2^31 - 1)) * (high - low) + low`. Because `raw`
    /// spans the full `u32` range, roughly half of all draws land above
    /// `high`, up to `low + 2 * (high - low)`.
    ///
    /// Panics if `low >= high`.
    pub fn range_f64(&mut self, low: f64, high: f64) -> f64 {
        assert!(low < high, "range_f64: low must be less than high");
        (self.next_u32() as f64 / FLOAT_DIVISOR) * (high - low) + low
    }

    /// `true` when `range_i32(0, n)` lands on exactly 1: a one-in-`n` roll.
    ///
    /// Panics if `n <= 0`.
    pub fn one_in(&mut self, n: i32) -> bool {
        self.range_i32(0, n) == 1
    }
}

/// XOR the high and low halves of a 64-bit product.
fn fold(product: u64) -> u32 {
    ((product >> 32) as u32) ^ (product as u32)
}
