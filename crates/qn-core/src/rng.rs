//! Deterministic simulation-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, seeded from the configured master seed.
//! Every stochastic decision — inter-arrival gaps, service durations, random
//! lane picks — draws from it in dispatch order.  Because dispatch order is
//! itself deterministic (single-threaded, tie-broken by insertion sequence),
//! the same seed and configuration reproduce a run bit-for-bit.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded random source for one simulation run.
///
/// Wraps `SmallRng` so the sampling surface the engine relies on is explicit
/// and the underlying generator can change without touching call sites.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform draw from `[low, high]` (minutes, typically).
    ///
    /// Degenerate bounds (`high <= low`) return `low` — useful for tests that
    /// need fixed service times.
    #[inline]
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.0.gen_range(low..=high)
    }

    /// Exponential draw with the given mean (`mean > 0`).
    ///
    /// Inverse-CDF sampling: `-mean * ln(1 - U)` with `U` uniform in [0, 1),
    /// so the argument to `ln` stays in (0, 1].
    #[inline]
    pub fn exponential(&mut self, mean: f64) -> f64 {
        let u: f64 = self.0.r#gen();
        -mean * (1.0 - u).ln()
    }

    /// Uniform index in `0..n` (`n > 0`).
    #[inline]
    pub fn pick(&mut self, n: usize) -> usize {
        self.0.gen_range(0..n)
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}
