//! Arrival process — a non-homogeneous Poisson approximation.
//!
//! The instantaneous arrival rate is piecewise constant over simulated time.
//! Each gap is sampled from an exponential whose mean is looked up *once*,
//! at the instant the previous arrival fired.  That is an approximation of
//! the true non-homogeneous process (no thinning): acceptable here because
//! the rate changes on a tens-of-minutes scale while typical gaps are under
//! a minute, so a gap rarely straddles a breakpoint.

use qn_core::{SimRng, SimTime};

use crate::error::{EngineError, EngineResult};

// ── RateBand ──────────────────────────────────────────────────────────────────

/// One band of the piecewise rate schedule: the mean inter-arrival gap that
/// applies while `now < until` (minutes).
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateBand {
    /// Exclusive upper time bound of this band.  Use `f64::INFINITY` for the
    /// final open-ended band.
    pub until:    f64,
    /// Mean inter-arrival gap in minutes while the band applies.
    pub mean_gap: f64,
}

impl RateBand {
    pub fn new(until: f64, mean_gap: f64) -> Self {
        Self { until, mean_gap }
    }
}

// ── RateSchedule ──────────────────────────────────────────────────────────────

/// Ordered rate bands, evaluated first-match.
///
/// Breakpoints are fixed configuration — validated once at setup, never
/// re-derived mid-run.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateSchedule {
    bands: Vec<RateBand>,
}

impl RateSchedule {
    /// Validate and wrap a band list.
    ///
    /// Requirements: non-empty; strictly ascending `until` thresholds; all
    /// means positive and finite; the final band open-ended (`INFINITY`) so
    /// every instant maps to a mean.
    pub fn new(bands: Vec<RateBand>) -> EngineResult<Self> {
        if bands.is_empty() {
            return Err(EngineError::EmptyRateSchedule);
        }
        let mut prev = f64::NEG_INFINITY;
        for band in &bands {
            if !(band.mean_gap > 0.0 && band.mean_gap.is_finite()) {
                return Err(EngineError::BadRateBand {
                    detail: format!("mean gap {} is not positive finite", band.mean_gap),
                });
            }
            if band.until <= prev {
                return Err(EngineError::BadRateBand {
                    detail: format!("threshold {} not strictly ascending", band.until),
                });
            }
            prev = band.until;
        }
        if bands.last().is_some_and(|b| b.until.is_finite()) {
            return Err(EngineError::BadRateBand {
                detail: "final band must be open-ended (until = INFINITY)".into(),
            });
        }
        Ok(Self { bands })
    }

    /// The demo schedule: non-peak / peak / non-peak with breakpoints at 10
    /// and 50 minutes (the thresholds the model actually runs with).
    pub fn airport_default() -> Self {
        Self {
            bands: vec![
                RateBand::new(10.0, 1.0),
                RateBand::new(50.0, 0.5),
                RateBand::new(f64::INFINITY, 1.0),
            ],
        }
    }

    /// Mean inter-arrival gap in effect at `now`.
    pub fn mean_gap_at(&self, now: SimTime) -> f64 {
        self.bands
            .iter()
            .find(|band| now.minutes() < band.until)
            .map(|band| band.mean_gap)
            // Unreachable: the final band is open-ended by construction.
            .unwrap_or_else(|| self.bands[self.bands.len() - 1].mean_gap)
    }

    pub fn bands(&self) -> &[RateBand] {
        &self.bands
    }
}

// ── ArrivalSource ─────────────────────────────────────────────────────────────

/// The spawning side of the arrival process.
///
/// The dispatch loop owns the timing: after each arrival it asks for the
/// next gap and schedules its own wake-up.  Keeping this stateless beyond
/// the schedule makes the source trivially re-seedable.
#[derive(Debug)]
pub struct ArrivalSource {
    schedule: RateSchedule,
}

impl ArrivalSource {
    pub fn new(schedule: RateSchedule) -> Self {
        Self { schedule }
    }

    /// Sample the gap until the next arrival, evaluating the rate at `now`.
    pub fn next_gap(&self, now: SimTime, rng: &mut SimRng) -> f64 {
        rng.exponential(self.schedule.mean_gap_at(now))
    }
}
