//! Small seeded random source for the samples.

use std::time::{SystemTime, UNIX_EPOCH};

/// Linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform-ish value in `0..max`. `max` must be non-zero.
    pub fn next_below(&mut self, max: u32) -> u32 {
        // High bits of an LCG are the random ones.
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    pub fn next_bool(&mut self) -> bool {
        self.next_u32() & 0x8000_0000 != 0
    }
}

/// Seed derived from the wall clock.
pub fn seed_from_time() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |d| d.as_secs() as u32 ^ d.subsec_nanos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn next_below_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_below(75) < 75);
        }
    }

    #[test]
    fn time_seed_drives_the_generator() {
        let mut rng = SimpleRng::new(seed_from_time());
        assert!(rng.next_below(10) < 10);
    }

    #[test]
    fn next_bool_produces_both_values() {
        let mut rng = SimpleRng::new(3);
        let draws: Vec<bool> = (0..64).map(|_| rng.next_bool()).collect();
        assert!(draws.contains(&true));
        assert!(draws.contains(&false));
    }
}
