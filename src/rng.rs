//! Random draw sources for the simulation loop.
//!
//! The simulator never touches a global generator. It consumes uniform
//! `[0, 1)` draws from an injected [`RandomSource`], exactly one per executed
//! trade, in step order — so a fixed seed (or a scripted sequence) reproduces
//! a trajectory bit-for-bit, and independent runs can use independent streams
//! with no coordination.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform draw in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Seedable pseudorandom draw source backed by ChaCha8.
///
/// ChaCha8 gives identical streams for identical seeds on every platform,
/// which is what makes seeded simulations reproducible across machines.
///
/// # Example
///
/// ```
/// use ruinbook::{RandomSource, SeededRng};
///
/// let mut a = SeededRng::seed(42);
/// let mut b = SeededRng::seed(42);
/// assert_eq!(a.next_uniform(), b.next_uniform());
/// ```
#[derive(Clone, Debug)]
pub struct SeededRng {
    inner: ChaCha8Rng,
}

impl SeededRng {
    /// Create a source from a fixed seed.
    pub fn seed(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from OS entropy (non-reproducible).
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }
}

impl RandomSource for SeededRng {
    fn next_uniform(&mut self) -> f64 {
        self.inner.random()
    }
}

/// Deterministic draw source fed an explicit sequence.
///
/// Intended for tests and cross-implementation determinism checks: the exact
/// draws are under the caller's control, and [`consumed`](Self::consumed)
/// reports how many the simulation used.
///
/// # Panics
///
/// `next_uniform` panics when the script is exhausted. An exhausted script
/// means the caller under-counted how much entropy the run needs, which is a
/// bug in the test, not a recoverable condition.
#[derive(Clone, Debug)]
pub struct ScriptedDraws {
    draws: Vec<f64>,
    pos: usize,
}

impl ScriptedDraws {
    /// Create a source that replays `draws` in order.
    ///
    /// Each draw should lie in `[0, 1)`; out-of-range values are debug-asserted.
    pub fn new(draws: Vec<f64>) -> Self {
        debug_assert!(
            draws.iter().all(|u| (0.0..1.0).contains(u)),
            "scripted draws must lie in [0, 1)"
        );
        Self { draws, pos: 0 }
    }

    /// Number of draws handed out so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Number of draws still scripted.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.draws.len() - self.pos
    }
}

impl RandomSource for ScriptedDraws {
    fn next_uniform(&mut self) -> f64 {
        let Some(&u) = self.draws.get(self.pos) else {
            panic!("scripted draws exhausted after {} draws", self.pos);
        };
        self.pos += 1;
        u
    }
}
