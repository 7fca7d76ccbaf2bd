// Galaxy-wide properties of generation, checked over fixed windows.
//
// Each test sweeps a block of sectors and asserts an invariant on every
// occupied one. Windows are small enough to run in debug builds but large
// enough to contain well over a hundred star systems.

use std::collections::BTreeSet;

use galaxy_gen::{Coordinate, GenerationMode, Region, StarSystem, generate, scan_region};

const WINDOW: u32 = 60;

/// Full-mode systems for every occupied sector in the window at `(x0, y0)`.
fn full_systems(x0: u32, y0: u32) -> Vec<StarSystem> {
    let mut out = Vec::new();
    for y in y0..y0 + WINDOW {
        for x in x0..x0 + WINDOW {
            let system = generate(x, y, true);
            if system.exists() {
                out.push(system);
            }
        }
    }
    out
}

#[test]
fn generation_is_deterministic() {
    for y in 0..WINDOW {
        for x in 0..WINDOW {
            assert_eq!(generate(x, y, true), generate(x, y, true), "({x}, {y})");
            assert_eq!(generate(x, y, false), generate(x, y, false), "({x}, {y})");
        }
    }
}

#[test]
fn coordinates_alias_modulo_65536() {
    for y in 0..30 {
        for x in 0..30 {
            let base = generate(x, y, true);
            assert_eq!(base, generate(x + 65_536, y, true));
            assert_eq!(base, generate(x, y + 65_536, true));
            assert_eq!(base, generate(x + 3 * 65_536, y + 7 * 65_536, true));
        }
    }
}

#[test]
fn existence_only_agrees_with_full() {
    for y in 0..WINDOW {
        for x in 0..WINDOW {
            let quick = generate(x, y, false);
            let full = generate(x, y, true);
            assert_eq!(quick.exists(), full.exists());
            assert_eq!(quick.star_diameter(), full.star_diameter());
            assert_eq!(quick.star_color(), full.star_color());
            assert_eq!(quick.mode(), GenerationMode::ExistenceOnly);
            assert!(quick.planets().is_empty());
        }
    }
}

#[test]
fn empty_sectors_have_no_planets() {
    for y in 0..WINDOW {
        for x in 0..WINDOW {
            let system = generate(x, y, true);
            if !system.exists() {
                assert!(system.star().is_none());
                assert!(system.planets().is_empty());
            }
        }
    }
}

#[test]
fn planet_distances_strictly_increase() {
    for system in full_systems(100, 100) {
        for pair in system.planets().windows(2) {
            assert!(
                pair[0].distance_from_star() < pair[1].distance_from_star(),
                "{} !< {}",
                pair[0].distance_from_star(),
                pair[1].distance_from_star()
            );
        }
    }
}

#[test]
fn resources_are_exclusive_within_a_system() {
    for system in full_systems(0, 0) {
        let mut minerals = BTreeSet::new();
        let mut gasses = BTreeSet::new();
        for planet in system.planets() {
            for m in planet.minerals() {
                assert!(minerals.insert(m.clone()), "mineral {m} repeated");
            }
            for g in planet.gasses() {
                assert!(gasses.insert(g.clone()), "gas {g} repeated");
            }
        }
        // Each draw leaves at least one name behind.
        assert!(minerals.len() < galaxy_gen::pool::MINERALS.len());
        assert!(gasses.len() < galaxy_gen::pool::GASSES.len());
    }
}

#[test]
fn flora_requires_habitable_conditions() {
    let mut flora_seen = 0;
    for system in full_systems(0, 0)
        .into_iter()
        .chain(full_systems(200, 300))
        .chain(full_systems(4000, 9000))
    {
        for planet in system.planets() {
            if planet.has_flora() {
                flora_seen += 1;
                assert!(planet.has_water());
                assert!(planet.temperature_celsius() > 0.0);
                assert!(planet.temperature_celsius() < 50.0);
            }
        }
    }
    // Rare (water 10%, a 49-degree band, then a coin flip) but present:
    // 15 flowering planets across these three windows.
    assert_eq!(flora_seen, 15);
}

#[test]
fn counts_and_ranges_are_bounded() {
    let mut populated = 0usize;
    let mut barren = 0usize;
    for system in full_systems(300, 20) {
        let star = system.star().unwrap();
        assert!((10.0..70.1).contains(&star.diameter()));
        assert!(system.planets().len() <= 9);
        for planet in system.planets() {
            assert!(planet.moons().len() <= 4);
            assert!((-273.0..300.0).contains(&planet.temperature_celsius()));
            assert_eq!(planet.temperature_celsius().fract(), 0.0);
            assert!(planet.population() < 9_000_000);
            assert!((5.0..35.1).contains(&planet.diameter()));
            for moon in planet.moons() {
                assert!((1.0..9.1).contains(moon));
            }
            if planet.population() == 0 {
                barren += 1;
            } else {
                populated += 1;
            }
        }
    }
    // Clamped population is bimodal: both outcomes are common.
    assert_eq!((barren, populated), (454, 428));
}

#[test]
fn star_density_is_about_one_in_twenty() {
    let region = Region::new(Coordinate::new(0, 0), WINDOW, WINDOW);
    let found = scan_region(&region);
    assert_eq!(found.len(), 161);
}

#[test]
fn scan_matches_sequential_sweep() {
    let region = Region::new(Coordinate::new(65_530, 12), 40, 25);
    let scanned: Vec<Coordinate> = scan_region(&region)
        .into_iter()
        .map(|s| s.coordinate)
        .collect();
    let sequential: Vec<Coordinate> = region
        .cells()
        .filter(|c| generate(c.x, c.y, false).exists())
        .collect();
    assert_eq!(scanned, sequential);
}

#[test]
fn json_roundtrip_preserves_system() {
    let system = generate(0, 22, true);
    let json = serde_json::to_string(&system).unwrap();
    let restored: StarSystem = serde_json::from_str(&json).unwrap();
    assert_eq!(system, restored);
}
