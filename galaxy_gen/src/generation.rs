// Star system generation.
//
// Builds a `StarSystem` from a fresh `SectorRng` seeded by the sector
// coordinate. The order of draws below is the contract: every value in a
// system depends on how many outputs were consumed before it, so adding,
// removing, or reordering a single draw reshuffles everything after it.
//
// Existence-only and full generation share the same prefix (existence roll,
// star diameter, star color), which is why a sector looks the same in the
// wide view and in the detail view. Full generation then continues on the
// same stream with the planet cursor, the planet count, and per-planet
// draws in a fixed order (see `roll_planet`).
//
// See also: `pool.rs` for the per-system mineral/gas depletion, `palette.rs`
// for the color tables, `lib.rs` for the public `generate` entry point.

use crate::palette::{self, PLANET_PALETTE, STAR_PALETTE};
use crate::pool::ResourcePool;
use crate::types::{Coordinate, GenerationMode, Planet, Star, StarSystem};
use galaxy_prng::SectorRng;

/// One sector in `STAR_ONE_IN` holds a star.
const STAR_ONE_IN: i32 = 20;
const STAR_DIAMETER: (f64, f64) = (10.0, 40.0);

const FIRST_ORBIT: (f64, f64) = (60.0, 200.0);
const ORBIT_SPACING: (f64, f64) = (20.0, 200.0);
/// Exclusive upper bound on the planet count.
const MAX_PLANETS: i32 = 10;
const PLANET_DIAMETER: (f64, f64) = (5.0, 20.0);

const WATER_ONE_IN: i32 = 10;
const RING_ONE_IN: i32 = 10;
const FLORA_ONE_IN: i32 = 2;
const TEMPERATURE_C: (i32, i32) = (-273, 300);
/// Habitable band for flora, exclusive at both ends.
const FLORA_TEMPERATURE_C: (f64, f64) = (0.0, 50.0);
/// Negative draws clamp to zero, leaving roughly half of all planets empty.
const POPULATION: (i32, i32) = (-10_000_000, 9_000_000);
/// Negative draws clamp to zero moons.
const MOON_COUNT: (i32, i32) = (-5, 5);
const MOON_DIAMETER: (f64, f64) = (1.0, 5.0);

/// Generate the system at `coordinate`.
pub fn generate_system(coordinate: Coordinate, mode: GenerationMode) -> StarSystem {
    let mut rng = SectorRng::from_coordinate(coordinate.x, coordinate.y);
    let star = roll_star(&mut rng);

    let planets = match (star, mode) {
        (Some(_), GenerationMode::Full) => {
            let planets = roll_planets(&mut rng);
            log::trace!("sector {coordinate}: {} planets", planets.len());
            planets
        }
        _ => Vec::new(),
    };

    StarSystem {
        mode,
        star,
        planets,
    }
}

fn roll_star(rng: &mut SectorRng) -> Option<Star> {
    if !rng.one_in(STAR_ONE_IN) {
        return None;
    }
    let diameter = rng.range_f64(STAR_DIAMETER.0, STAR_DIAMETER.1);
    let color = palette::pick(&STAR_PALETTE, rng);
    Some(Star { diameter, color })
}

/// Roll every planet of an occupied sector. The two resource pools live for
/// the whole system and deplete across planets.
fn roll_planets(rng: &mut SectorRng) -> Vec<Planet> {
    let mut minerals = ResourcePool::minerals();
    let mut gasses = ResourcePool::gasses();

    let mut orbit = rng.range_f64(FIRST_ORBIT.0, FIRST_ORBIT.1);
    let count = rng.range_i32(0, MAX_PLANETS);

    (0..count)
        .map(|_| roll_planet(rng, &mut orbit, &mut minerals, &mut gasses))
        .collect()
}

/// Roll one planet. `orbit` is the running distance cursor: this planet
/// takes its current value and pushes it outward for the next one.
fn roll_planet(
    rng: &mut SectorRng,
    orbit: &mut f64,
    minerals: &mut ResourcePool,
    gasses: &mut ResourcePool,
) -> Planet {
    let color = palette::pick(&PLANET_PALETTE, rng);

    let distance_from_star = *orbit;
    *orbit += rng.range_f64(ORBIT_SPACING.0, ORBIT_SPACING.1);

    let diameter = rng.range_f64(PLANET_DIAMETER.0, PLANET_DIAMETER.1);
    let minerals = minerals.draw(rng);
    let has_water = rng.one_in(WATER_ONE_IN);
    let gasses = gasses.draw(rng);
    let temperature_celsius = rng.range_i32(TEMPERATURE_C.0, TEMPERATURE_C.1) as f64;

    // The flora roll is only consumed on habitable planets.
    let habitable = has_water
        && temperature_celsius > FLORA_TEMPERATURE_C.0
        && temperature_celsius < FLORA_TEMPERATURE_C.1;
    let has_flora = habitable && rng.one_in(FLORA_ONE_IN);

    let population = rng.range_i32(POPULATION.0, POPULATION.1).max(0) as u32;
    let has_ring = rng.one_in(RING_ONE_IN);

    let moon_count = rng.range_i32(MOON_COUNT.0, MOON_COUNT.1).max(0);
    let moons = (0..moon_count)
        .map(|_| rng.range_f64(MOON_DIAMETER.0, MOON_DIAMETER.1))
        .collect();

    Planet {
        color,
        distance_from_star,
        diameter,
        has_flora,
        minerals,
        has_water,
        gasses,
        temperature_celsius,
        population,
        has_ring,
        moons,
    }
}
