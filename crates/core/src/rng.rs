//! RNG module - uniform random piece generation
//!
//! Each draw picks one of the seven kinds independently, so the same kind can show
//! up several times in a row. The random source is a trait so tests and replays can
//! inject a scripted or seeded sequence; the default is a small LCG.

use crate::pieces::Tetromino;
use crate::types::PieceKind;

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Random value in range [0, max)
    fn next_range(&mut self, max: u32) -> u32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state (re-seeding with it continues the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Produces fresh spawn-positioned pieces from the catalog.
#[derive(Debug, Clone, Default)]
pub struct PieceGenerator<R = SimpleRng> {
    rng: R,
}

impl<R: RandomSource> PieceGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a uniformly random kind
    pub fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    /// Draw a new piece in base rotation at the spawn anchor
    pub fn generate(&mut self) -> Tetromino {
        Tetromino::new(self.next_kind())
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of values, wrapping around.
    struct Scripted(Vec<u32>, usize);

    impl RandomSource for Scripted {
        fn next_range(&mut self, max: u32) -> u32 {
            let v = self.0[self.1 % self.0.len()] % max;
            self.1 += 1;
            v
        }
    }

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..10_000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn generator_covers_catalog() {
        let mut generator = PieceGenerator::new(SimpleRng::new(99));
        let mut seen = [false; 7];
        for _ in 0..500 {
            let kind = generator.next_kind();
            let idx = PieceKind::ALL.iter().position(|k| *k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s), "{:?}", seen);
    }

    #[test]
    fn generator_allows_immediate_repeats() {
        let mut generator = PieceGenerator::new(Scripted(vec![2, 2, 2], 0));
        assert_eq!(generator.next_kind(), PieceKind::T);
        assert_eq!(generator.next_kind(), PieceKind::T);
        assert_eq!(generator.next_kind(), PieceKind::T);
    }

    #[test]
    fn generated_piece_is_at_spawn() {
        let mut generator = PieceGenerator::new(Scripted(vec![0], 0));
        let piece = generator.generate();
        assert_eq!(piece, Tetromino::new(PieceKind::I));
    }
}
