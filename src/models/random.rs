//! Random number sources
//!
//! Every random draw in the game goes through [`RandomSource`], which is
//! passed explicitly to whatever needs it. [`LcgRandom`] is the reference
//! generator and reproduces the classic console's sequence exactly.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;
const LCG_MODULUS: f64 = 4_294_967_296.0;

/// Bounded integer draws.
pub trait RandomSource {
    /// Uniform integer in `[min_inclusive, max_exclusive)`.
    /// Returns `min_inclusive` when the range is empty.
    fn next_int(&mut self, min_inclusive: i32, max_exclusive: i32) -> i32;
}

/// 32-bit linear congruential generator.
#[derive(Debug, Clone)]
pub struct LcgRandom {
    state: u32,
}

impl LcgRandom {
    /// Seeded generator. `None` and `Some(0)` both fall back to the clock.
    /// Only the low 32 bits of the seed are used.
    pub fn new(seed: Option<u64>) -> Self {
        let normalized = match seed {
            Some(s) if s != 0 => s,
            _ => clock_seed(),
        };
        LcgRandom {
            state: normalized as u32,
        }
    }

    fn next_float(&mut self) -> f64 {
        self.next_u32() as f64 / LCG_MODULUS
    }
}

impl RandomSource for LcgRandom {
    fn next_int(&mut self, min_inclusive: i32, max_exclusive: i32) -> i32 {
        if max_exclusive <= min_inclusive {
            return min_inclusive;
        }
        let span = (max_exclusive as i64 - min_inclusive as i64) as f64;
        let offset = (self.next_float() * span).floor() as i64;
        (min_inclusive as i64 + offset) as i32
    }
}

impl RngCore for LcgRandom {
    fn next_u32(&mut self) -> u32 {
        self.state = LCG_MULTIPLIER
            .wrapping_mul(self.state)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.next_u32() as u64;
        let hi = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl RandomSource for StdRng {
    fn next_int(&mut self, min_inclusive: i32, max_exclusive: i32) -> i32 {
        if max_exclusive <= min_inclusive {
            return min_inclusive;
        }
        self.gen_range(min_inclusive..max_exclusive)
    }
}

/// Which generator backs a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RngKind {
    /// [`LcgRandom`], reproducible across implementations.
    #[default]
    Lcg,
    /// `rand`'s [`StdRng`]. Seeded runs repeat, but not the classic sequence.
    Std,
}

impl RngKind {
    pub fn build(self, seed: Option<u64>) -> Box<dyn RandomSource> {
        match self {
            RngKind::Lcg => Box::new(LcgRandom::new(seed)),
            RngKind::Std => match seed {
                Some(s) if s != 0 => Box::new(StdRng::seed_from_u64(s)),
                _ => Box::new(StdRng::from_entropy()),
            },
        }
    }
}

/// Milliseconds since the epoch, as used for unseeded games.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1)
}

#[cfg(test)]
pub mod test_utils {
    use super::RandomSource;

    /// Always answers the same value, clamped into the requested range.
    pub struct FixedRandom(pub i32);

    impl RandomSource for FixedRandom {
        fn next_int(&mut self, min_inclusive: i32, max_exclusive: i32) -> i32 {
            if max_exclusive <= min_inclusive {
                return min_inclusive;
            }
            self.0.clamp(min_inclusive, max_exclusive - 1)
        }
    }
}
