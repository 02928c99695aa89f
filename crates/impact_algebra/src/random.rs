//! Randomness using the `SplitMix` algorithm.
//!
//! The random constructors of [`Complex`](crate::complex::Complex) and
//! [`Quaternion`](crate::quaternion::Quaternion) accept any [`rand::Rng`].
//! [`SplitMix64`] is a small seedable generator giving reproducible sequences
//! for tests and diagnostics.

use rand::{RngCore, SeedableRng};

/// A 64-bit `SplitMix` pseudo-random number generator.
///
/// Not suitable for cryptographic use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Creates a generator starting from the given state.
    pub const fn new(state: u64) -> Self {
        Self { state }
    }
}

impl RngCore for SplitMix64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        mix_u64(self.state)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        rand::rand_core::impls::fill_bytes_via_next(self, dst);
    }
}

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

/// Generates a pseudo-random `u64` from the given `u64` value.
pub fn random_u64_from_state(state: u64) -> u64 {
    mix_u64(state.wrapping_add(0x9E3779B97F4A7C15))
}

fn mix_u64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}
