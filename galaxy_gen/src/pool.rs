// Resource pools: sampling without replacement over finite name lists.
//
// A system builds one mineral pool and one gas pool before its first planet
// and hands the same two pools to every planet in turn. Whatever a planet
// draws is gone for the rest of the system, so inner planets tend to be rich
// and outer planets often get nothing. That depletion is the observed
// behavior of the galaxy and the reference outputs depend on it; the pools
// are not reset per planet.
//
// Draw protocol for one planet (each step is one stream output):
// 1. If fewer than two names remain, stop without touching the stream.
// 2. `count = range_i32(0, len - 1)`.
// 3. `count` times: `i = range_i32(0, len)`, take `names[i]`, remove it while
//    keeping the remaining names in order.

use galaxy_prng::SectorRng;

/// Minerals available to a freshly generated system.
pub const MINERALS: [&str; 7] = [
    "Iron",
    "Aluminum",
    "Calcium",
    "Potassium",
    "Zinc",
    "Sodium",
    "Uranium",
];

/// Atmospheric gasses available to a freshly generated system.
pub const GASSES: [&str; 6] = ["He", "O2", "N2", "H2", "CH4", "CO2"];

/// An ordered, shrinking list of distinct resource names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourcePool {
    names: Vec<&'static str>,
}

impl ResourcePool {
    /// Build a pool from a list of distinct names.
    pub fn new(names: &[&'static str]) -> Self {
        debug_assert!(
            names
                .iter()
                .enumerate()
                .all(|(i, n)| !names[..i].contains(n)),
            "resource pool names must be distinct"
        );
        Self {
            names: names.to_vec(),
        }
    }

    pub fn minerals() -> Self {
        Self::new(&MINERALS)
    }

    pub fn gasses() -> Self {
        Self::new(&GASSES)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names not yet drawn, in their original relative order.
    pub fn remaining(&self) -> &[&'static str] {
        &self.names
    }

    /// Draw a random number of distinct names for one planet.
    pub fn draw(&mut self, rng: &mut SectorRng) -> Vec<String> {
        if self.names.len() < 2 {
            return Vec::new();
        }
        let count = rng.range_i32(0, self.names.len() as i32 - 1);
        let mut drawn = Vec::with_capacity(count as usize);
        for _ in 0..count {
            // Unreachable while count <= len - 2, but an empty pool would
            // make the index draw divide by zero.
            if self.names.is_empty() {
                break;
            }
            let pick = rng.range_i32(0, self.names.len() as i32) as usize;
            // Names are distinct, so removing this index removes exactly
            // this name. `remove` (not `swap_remove`) keeps later picks
            // aligned with the reference order.
            drawn.push(self.names.remove(pick).to_string());
        }
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_draw_from_state_zero() {
        let mut rng = SectorRng::from_state(0);
        let mut pool = ResourcePool::minerals();
        let drawn = pool.draw(&mut rng);
        assert_eq!(drawn, vec!["Sodium", "Potassium", "Aluminum", "Calcium"]);
        assert_eq!(pool.remaining(), &["Iron", "Zinc", "Uranium"]);
        // One count draw plus four index draws.
        assert_eq!(rng.state(), 1_705_307_241);
    }

    #[test]
    fn draw_can_be_empty() {
        let mut rng = SectorRng::from_state(3);
        let mut pool = ResourcePool::minerals();
        assert!(pool.draw(&mut rng).is_empty());
        assert_eq!(pool.len(), MINERALS.len());
    }

    #[test]
    fn never_takes_the_last_name_in_one_draw() {
        for seed in 0..500 {
            let mut rng = SectorRng::from_state(seed);
            let mut pool = ResourcePool::gasses();
            let drawn = pool.draw(&mut rng);
            assert!(drawn.len() <= GASSES.len() - 2, "seed {seed}: {drawn:?}");
            assert_eq!(drawn.len() + pool.len(), GASSES.len());
        }
    }

    #[test]
    fn small_pool_consumes_nothing() {
        let mut pool = ResourcePool::new(&["Iron"]);
        let mut rng = SectorRng::from_state(42);
        let before = rng.clone();
        assert!(pool.draw(&mut rng).is_empty());
        assert_eq!(rng, before);

        let mut empty = ResourcePool::new(&[]);
        assert!(empty.draw(&mut rng).is_empty());
        assert_eq!(rng, before);
        assert!(empty.is_empty());
    }

    #[test]
    fn depletion_carries_across_draws() {
        let mut rng = SectorRng::from_state(9);
        let mut pool = ResourcePool::minerals();
        let mut seen = Vec::new();
        for _ in 0..10 {
            for name in pool.draw(&mut rng) {
                assert!(!seen.contains(&name), "{name} drawn twice");
                seen.push(name);
            }
        }
        assert_eq!(seen.len() + pool.len(), MINERALS.len());
        for name in pool.remaining() {
            assert!(!seen.iter().any(|s| s == name));
        }
    }
}
