// galaxy_gen: deterministic star system generation for Sector Galaxy.
//
// Every sector of an unbounded 2-D grid either holds a star system or is
// empty, and the answer is a pure function of the sector coordinate. Nothing
// is stored: asking again regenerates the same system from the same seed.
//
// Module overview:
// - `types.rs`:      Coordinate, Color, GenerationMode, Star, Planet, StarSystem.
// - `palette.rs`:    The fixed 8-entry star and planet color tables.
// - `pool.rs`:       Mineral/gas pools sampled without replacement, depleted
//                    across all planets of one system.
// - `generation.rs`: The draw sequence that turns a seeded stream into a system.
// - `scan.rs`:       Existence-only sweeps over rectangular windows (rayon).
// - `report.rs`:     `Display` impls for the text detail view.
//
// All randomness comes from `galaxy_prng::SectorRng`, seeded from the low 16
// bits of each coordinate component.
//
// **Critical constraint: determinism.** Generation must produce identical
// systems for identical coordinates on every platform and in every build.
// No shared mutable state, no OS entropy, no draw-order changes.

pub mod generation;
pub mod palette;
pub mod pool;
pub mod report;
pub mod scan;
pub mod types;

pub use galaxy_prng::SectorRng;
pub use scan::{Region, Sector, scan_region};
pub use types::{Color, Coordinate, GenerationMode, Planet, Star, StarSystem};

/// Generate the system at `(x, y)`.
///
/// With `full == false` only the star (if any) is rolled; with `full ==
/// true` planets and moons follow on the same stream, so both modes agree on
/// existence, star diameter, and star color.
///
/// Only the low 16 bits of `x` and `y` are significant: `(x, y)` and
/// `(x + 65536, y)` return equal systems. There are no error cases.
pub fn generate(x: u32, y: u32, full: bool) -> StarSystem {
    generate_with_mode(Coordinate::new(x, y), GenerationMode::from_full_flag(full))
}

/// As [`generate`], with explicit types.
pub fn generate_with_mode(coordinate: Coordinate, mode: GenerationMode) -> StarSystem {
    generation::generate_system(coordinate, mode)
}
