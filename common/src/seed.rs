//! Render seed and the deterministic random stream.
//!
//! A [`RenderSeed`] is captured once per tick. Every consumer that needs
//! randomness for that tick (the background generator on each frame, the
//! text color pair once) opens a fresh [`RandomStream`] from the same seed,
//! so they all see the same sequence of draws from the start.

use rand_xoshiro::Xoroshiro128StarStar;
use rand_xoshiro::rand_core::{RngCore, SeedableRng};

/// Seed for one tick's worth of randomness.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct RenderSeed(pub u64);

impl RenderSeed {
    /// Derive the seed from wall-clock time (seconds since the Unix epoch).
    ///
    /// Negative times are reinterpreted bit-for-bit, which keeps distinct
    /// instants mapped to distinct seeds.
    #[inline]
    pub const fn from_unix_time(unix_seconds: i64) -> Self { Self(unix_seconds as u64) }

    /// Open a random stream positioned at the start of this seed's sequence.
    #[inline]
    pub fn stream(self) -> RandomStream { RandomStream::new(self) }
}

/// Deterministic pseudo-random sequence. Same seed, same draws, on every
/// platform and across restarts.
pub struct RandomStream {
    rng: Xoroshiro128StarStar,
}

impl RandomStream {
    pub fn new(seed: RenderSeed) -> Self {
        Self {
            rng: Xoroshiro128StarStar::seed_from_u64(seed.0),
        }
    }

    /// Next raw 32-bit draw.
    #[inline]
    pub fn next_u32(&mut self) -> u32 { self.rng.next_u32() }

    /// Draw in `0..n`. An empty range (`n == 0`) is treated as `0..1`.
    #[inline]
    pub fn below(
        &mut self,
        n: u32,
    ) -> u32 {
        self.next_u32() % n.max(1)
    }

    /// Draw one bit.
    #[inline]
    pub fn coin(&mut self) -> bool { self.next_u32() % 2 == 1 }
}
