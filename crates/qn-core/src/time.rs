//! Simulated time model.
//!
//! # Design
//!
//! Time is a real-valued count of simulated minutes.  Service durations in
//! queueing models are fractional (a boarding-pass check takes 0.3–0.7 min),
//! so the canonical unit is `f64` rather than an integer tick.  The value is
//! owned by the scheduler and only ever moves forward — there is no mapping
//! to wall-clock time because a run never sleeps.
//!
//! `f64` is not `Ord`, so `SimTime` exposes [`total_cmp`][SimTime::total_cmp]
//! for heap ordering.  Schedulers must never admit NaN; delays are validated
//! as non-negative finite before any arithmetic touches the clock.

use std::cmp::Ordering;
use std::fmt;

/// An instant on the simulated clock, in minutes from run start.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// The instant `minutes` after `self`.
    #[inline]
    pub fn after(self, minutes: f64) -> SimTime {
        SimTime(self.0 + minutes)
    }

    /// Minutes elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }

    /// Total ordering for use in heaps and sorts (IEEE 754 `totalOrder`).
    #[inline]
    pub fn total_cmp(&self, other: &SimTime) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    /// The raw minute count.
    #[inline]
    pub fn minutes(self) -> f64 {
        self.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} min", self.0)
    }
}
