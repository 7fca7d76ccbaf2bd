// Rectangular sector sweeps.
//
// A scan is nothing more than existence-only generation repeated over every
// cell of a window. Cells never share state, so rows fan out across the
// rayon pool. `flat_map_iter` yields an unindexed iterator, but collecting
// into a `Vec` still preserves the sequential order, so the result matches a
// row-major sweep.

use crate::generation::generate_system;
use crate::types::{Coordinate, GenerationMode, StarSystem};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A window of sectors: `width` columns by `height` rows starting at
/// `origin`. Coordinates past `u32::MAX` wrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub origin: Coordinate,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(origin: Coordinate, width: u32, height: u32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    pub fn cell_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.height)
            .flat_map(move |dy| (0..self.width).map(move |dx| self.origin.offset(dx, dy)))
    }
}

/// An occupied cell found by a scan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub coordinate: Coordinate,
    pub system: StarSystem,
}

/// Existence-only sweep of `region`. Returns the occupied sectors in
/// row-major order.
pub fn scan_region(region: &Region) -> Vec<Sector> {
    let found: Vec<Sector> = (0..region.height)
        .into_par_iter()
        .flat_map_iter(|dy| {
            (0..region.width).filter_map(move |dx| {
                let coordinate = region.origin.offset(dx, dy);
                let system = generate_system(coordinate, GenerationMode::ExistenceOnly);
                system.exists().then_some(Sector { coordinate, system })
            })
        })
        .collect();

    log::debug!(
        "scanned {} sectors from {}: {} stars",
        region.cell_count(),
        region.origin,
        found.len()
    );
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_row_major() {
        let region = Region::new(Coordinate::new(10, 20), 2, 2);
        let cells: Vec<Coordinate> = region.cells().collect();
        assert_eq!(
            cells,
            vec![
                Coordinate::new(10, 20),
                Coordinate::new(11, 20),
                Coordinate::new(10, 21),
                Coordinate::new(11, 21),
            ]
        );
        assert_eq!(region.cell_count(), 4);
    }

    #[test]
    fn empty_region_finds_nothing() {
        let region = Region::new(Coordinate::new(0, 0), 0, 50);
        assert!(scan_region(&region).is_empty());
    }

    #[test]
    fn scan_results_are_existence_only() {
        let region = Region::new(Coordinate::new(0, 0), 8, 30);
        let found = scan_region(&region);
        // (0, 2) and (0, 22) are occupied.
        assert!(found.iter().any(|s| s.coordinate == Coordinate::new(0, 2)));
        assert!(found.iter().any(|s| s.coordinate == Coordinate::new(0, 22)));
        for Sector { system, .. } in &found {
            assert!(system.exists());
            assert!(!system.is_full());
            assert!(system.planets().is_empty());
        }
    }
}
