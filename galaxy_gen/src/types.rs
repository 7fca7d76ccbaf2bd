// Value types produced by star system generation.
//
// `StarSystem` and `Planet` are immutable once built: their fields are
// crate-private and read through accessors, and `generation.rs` is the only
// place that constructs them. A sector without a star is `star: None` with no
// planets, so "nothing else is meaningful" is carried by the type rather than
// by convention. Moons have no identity of their own; a planet's `moons` is
// just a list of diameters.
//
// All types derive `Serialize`/`Deserialize` so the survey CLI can emit JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// A sector in the galaxy grid.
///
/// Only the low 16 bits of each component feed the seed (see
/// `galaxy_prng::SectorRng::from_coordinate`), so `(x, y)` and
/// `(x + 65536, y)` describe the same system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)` with wrapping arithmetic.
    pub const fn offset(self, dx: u32, dy: u32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An opaque 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Decode a packed `0xAABBGGRR` word (alpha high byte, red low byte).
    pub const fn from_abgr(packed: u32) -> Self {
        Self {
            r: (packed & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: ((packed >> 16) & 0xFF) as u8,
            a: (packed >> 24) as u8,
        }
    }

    /// Re-pack into `0xAABBGGRR`.
    pub const fn to_abgr(self) -> u32 {
        ((self.a as u32) << 24) | ((self.b as u32) << 16) | ((self.g as u32) << 8) | self.r as u32
    }
}

/// Formats as `#RRGGBB` (alpha omitted; every palette entry is opaque).
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// ---------------------------------------------------------------------------
// Generation mode
// ---------------------------------------------------------------------------

/// How much of a system to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// Star presence and appearance only. Used for wide views.
    ExistenceOnly,
    /// Star plus every planet and moon. Used for detail views.
    Full,
}

impl GenerationMode {
    pub fn from_full_flag(full: bool) -> Self {
        if full { Self::Full } else { Self::ExistenceOnly }
    }
}

// ---------------------------------------------------------------------------
// Star, planet, system
// ---------------------------------------------------------------------------

/// The star at the center of an occupied sector.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub(crate) diameter: f64,
    pub(crate) color: Color,
}

impl Star {
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// One planet, owned by its system.
///
/// `has_flora` is only ever true when `has_water` is true and the
/// temperature lies strictly between 0 and 50 °C.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub(crate) color: Color,
    pub(crate) distance_from_star: f64,
    pub(crate) diameter: f64,
    pub(crate) has_flora: bool,
    pub(crate) minerals: Vec<String>,
    pub(crate) has_water: bool,
    pub(crate) gasses: Vec<String>,
    pub(crate) temperature_celsius: f64,
    pub(crate) population: u32,
    pub(crate) has_ring: bool,
    pub(crate) moons: Vec<f64>,
}

impl Planet {
    pub fn color(&self) -> Color {
        self.color
    }

    /// Orbital distance. Strictly increases along a system's planet list.
    pub fn distance_from_star(&self) -> f64 {
        self.distance_from_star
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn has_flora(&self) -> bool {
        self.has_flora
    }

    /// Mineral names, in draw order. No name repeats within a system.
    pub fn minerals(&self) -> &[String] {
        &self.minerals
    }

    pub fn has_water(&self) -> bool {
        self.has_water
    }

    /// Gas names, in draw order. No name repeats within a system.
    pub fn gasses(&self) -> &[String] {
        &self.gasses
    }

    pub fn temperature_celsius(&self) -> f64 {
        self.temperature_celsius
    }

    pub fn population(&self) -> u32 {
        self.population
    }

    pub fn has_ring(&self) -> bool {
        self.has_ring
    }

    /// Moon diameters, innermost first.
    pub fn moons(&self) -> &[f64] {
        &self.moons
    }

    /// Water plus a temperature strictly inside (0, 50) °C.
    pub fn is_habitable(&self) -> bool {
        self.has_water && self.temperature_celsius > 0.0 && self.temperature_celsius < 50.0
    }
}

/// Everything generated for one sector.
///
/// The value does not record its coordinate: aliased coordinates (equal
/// modulo 65536) produce equal `StarSystem`s.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    pub(crate) mode: GenerationMode,
    pub(crate) star: Option<Star>,
    pub(crate) planets: Vec<Planet>,
}

impl StarSystem {
    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    pub fn exists(&self) -> bool {
        self.star.is_some()
    }

    pub fn star(&self) -> Option<&Star> {
        self.star.as_ref()
    }

    pub fn star_diameter(&self) -> Option<f64> {
        self.star.map(|s| s.diameter)
    }

    pub fn star_color(&self) -> Option<Color> {
        self.star.map(|s| s.color)
    }

    /// Planets, nearest first. Always empty for existence-only results and
    /// for empty sectors.
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn is_full(&self) -> bool {
        self.mode == GenerationMode::Full
    }
}
