//! Random source used by spawners and effects
//!
//! The simulation only needs uniform floats in [0, 1). Tests swap in a
//! scripted source to pin down exact branch outcomes.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Capability returning uniform floats in [0, 1)
pub trait RandomSource {
    fn next_f32(&mut self) -> f32;

    /// Uniform sample in [lo, hi)
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }
}

impl RandomSource for Pcg32 {
    fn next_f32(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Fresh, entropy-seeded generator for live play
pub fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(rand::random())
}

/// Replays a fixed list of values, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f32>) -> Self {
        let values = if values.is_empty() { vec![0.0] } else { values };
        Self { values, cursor: 0 }
    }

    /// Always returns `value`
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f32(&mut self) -> f32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 0.999_999)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_cycles() {
        let mut rng = ScriptedRandom::new(vec![0.1, 0.5]);
        assert_eq!(rng.next_f32(), 0.1);
        assert_eq!(rng.next_f32(), 0.5);
        assert_eq!(rng.next_f32(), 0.1);
    }

    #[test]
    fn test_range() {
        let mut rng = ScriptedRandom::constant(0.5);
        assert!((rng.range(2.0, 6.0) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_pcg_in_unit_interval() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
