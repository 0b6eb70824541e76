//! Deterministic seeded RNG for noise generation.
//!
//! All randomness in the waveform backend flows through [`SeededRandom`], a
//! Park–Miller multiplicative LCG with a Box–Muller normal sampler. The whole
//! sequence is integer arithmetic plus IEEE-754 double operations in a fixed
//! order, so a seed reproduces bit-identical output on every platform.

use rand::Rng;
use std::f64::consts::TAU;

/// LCG modulus (the Mersenne prime 2^31 - 1).
pub const MODULUS: i64 = 2_147_483_647;

/// LCG multiplier (the "minimal standard" 7^5).
pub const MULTIPLIER: i64 = 16_807;

/// Seeded uniform and normal generator.
///
/// `randn` draws two uniforms per pair of normals: the cosine branch is
/// returned immediately and the sine branch is cached as the spare for the
/// next call, which then consumes no uniforms.
#[derive(Debug, Clone, PartialEq)]
pub struct SeededRandom {
    state: i64,
    spare: Option<f64>,
}

impl SeededRandom {
    /// Creates a generator from any integer seed.
    ///
    /// The seed is reduced into `[1, MODULUS - 1]`; zero and negative seeds are
    /// shifted into range because a zero state would repeat forever.
    pub fn new(seed: i64) -> Self {
        let mut state = seed % MODULUS;
        if state <= 0 {
            state += MODULUS - 1;
        }
        if state == 0 {
            state = MODULUS - 1;
        }
        Self { state, spare: None }
    }

    /// Creates a seeded generator, or one seeded from thread entropy for `None`.
    pub fn from_seed_option(seed: Option<i64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::new(entropy_seed()),
        }
    }

    /// Current LCG state, always in `[1, MODULUS - 1]`.
    pub fn state(&self) -> i64 {
        self.state
    }

    /// Next uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state * MULTIPLIER % MODULUS;
        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }

    /// Next standard-normal value (Box–Muller with spare caching).
    pub fn randn(&mut self) -> f64 {
        if let Some(spare) = self.spare.take() {
            return spare;
        }

        // ln(0) would produce an infinity; redraw the (rare) exact zero.
        let mut u = self.next_f64();
        while u == 0.0 {
            u = self.next_f64();
        }
        let v = self.next_f64();

        let magnitude = (-2.0 * u.ln()).sqrt();
        let angle = TAU * v;
        self.spare = Some(magnitude * angle.sin());
        magnitude * angle.cos()
    }

    /// Fills a new vector with `len` standard-normal draws.
    pub fn randn_vec(&mut self, len: usize) -> Vec<f64> {
        (0..len).map(|_| self.randn()).collect()
    }
}

/// Draws a fresh seed in `[1, MODULUS - 1]` from the thread-local entropy RNG.
pub fn entropy_seed() -> i64 {
    rand::thread_rng().gen_range(1..MODULUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_determinism() {
        let mut rng1 = SeededRandom::new(42);
        let mut rng2 = SeededRandom::new(42);

        let values1: Vec<f64> = (0..100).map(|_| rng1.randn()).collect();
        let values2: Vec<f64> = (0..100).map(|_| rng2.randn()).collect();

        assert_eq!(values1, values2);
    }

    #[test]
    fn test_different_seeds_produce_different_sequences() {
        let mut rng1 = SeededRandom::new(42);
        let mut rng2 = SeededRandom::new(43);

        let values1: Vec<f64> = (0..10).map(|_| rng1.next_f64()).collect();
        let values2: Vec<f64> = (0..10).map(|_| rng2.next_f64()).collect();

        assert_ne!(values1, values2);
    }

    #[test]
    fn test_first_draws_match_minimal_standard() {
        // 16807^1 and 16807^2 mod (2^31 - 1) from seed 1.
        let mut rng = SeededRandom::new(1);
        rng.next_f64();
        assert_eq!(rng.state(), 16_807);
        rng.next_f64();
        assert_eq!(rng.state(), 282_475_249);
    }

    #[test]
    fn test_seed_normalization() {
        assert_eq!(SeededRandom::new(0).state(), MODULUS - 1);
        assert_eq!(SeededRandom::new(-1).state(), MODULUS - 2);
        assert_eq!(SeededRandom::new(MODULUS).state(), MODULUS - 1);
        assert_eq!(SeededRandom::new(-(MODULUS - 1)).state(), MODULUS - 1);
        assert!(SeededRandom::new(i64::MIN).state() > 0);

        // Zero seed must not be absorbing.
        let mut rng = SeededRandom::new(0);
        let a = rng.next_f64();
        let b = rng.next_f64();
        assert_ne!(a, b);
    }

    #[test]
    fn test_uniform_range() {
        let mut rng = SeededRandom::new(7);
        for _ in 0..10_000 {
            let u = rng.next_f64();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_spare_is_cached_without_new_uniforms() {
        let mut rng = SeededRandom::new(12345);
        let mut reference = rng.clone();

        let first = rng.randn();
        let state_after_pair = rng.state();
        let second = rng.randn();
        assert_eq!(rng.state(), state_after_pair);

        let u = reference.next_f64();
        let v = reference.next_f64();
        let magnitude = (-2.0 * u.ln()).sqrt();
        assert_eq!(first, magnitude * (TAU * v).cos());
        assert_eq!(second, magnitude * (TAU * v).sin());
    }

    #[test]
    fn test_normal_moments() {
        let mut rng = SeededRandom::new(2024);
        let values = rng.randn_vec(20_000);
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        assert!(mean.abs() < 0.05, "mean {}", mean);
        assert!((var - 1.0).abs() < 0.05, "variance {}", var);
    }

    #[test]
    fn test_entropy_seed_in_range() {
        for _ in 0..100 {
            let seed = entropy_seed();
            assert!((1..MODULUS).contains(&seed));
        }
    }
}
