//! `LanePolicy` — the lane-assignment extension point.
//!
//! A policy is consulted exactly once, at arrival; the chosen lane is fixed
//! for the passenger's whole journey (no mid-journey rebalancing).  All
//! methods receive the current lane states read-only plus the run RNG, so a
//! policy can be load-aware, random, or both, and stays deterministic under
//! a fixed seed.

use qn_core::{LaneId, SimRng};

use crate::lane::Lane;

/// Pluggable lane-assignment policy.
///
/// Implementations must be pure functions of `(lanes, rng)` — no interior
/// state — so that identical runs make identical assignments.
pub trait LanePolicy {
    /// Pick the lane for a newly arrived passenger.
    ///
    /// `lanes` is never empty and its length always fits in a `LaneId`
    /// (both validated at setup).
    fn assign(&self, lanes: &[Lane], rng: &mut SimRng) -> LaneId;

    /// Short name used in narration and reports.
    fn name(&self) -> &'static str;
}

// ── SingleLane ────────────────────────────────────────────────────────────────

/// Centralized configuration: one shared bundle of pools, so every passenger
/// goes to lane 0.  Requires exactly one lane (validated at setup).
pub struct SingleLane;

impl LanePolicy for SingleLane {
    fn assign(&self, _lanes: &[Lane], _rng: &mut SimRng) -> LaneId {
        LaneId(0)
    }

    fn name(&self) -> &'static str {
        "centralized"
    }
}

// ── RandomLane ────────────────────────────────────────────────────────────────

/// Uniformly random lane, regardless of current load.
pub struct RandomLane;

impl LanePolicy for RandomLane {
    fn assign(&self, lanes: &[Lane], rng: &mut SimRng) -> LaneId {
        LaneId(rng.pick(lanes.len()) as u16)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

// ── LeastLoadedLane ───────────────────────────────────────────────────────────

/// Greedy choice: the lane with the smallest combined effective load across
/// its stage pools (queue length per pool, plus one per saturated pool).
/// Ties go to the lowest lane index — strict `<` keeps the first minimum
/// found in enumeration order.
pub struct LeastLoadedLane;

impl LanePolicy for LeastLoadedLane {
    fn assign(&self, lanes: &[Lane], _rng: &mut SimRng) -> LaneId {
        let mut best = 0usize;
        let mut best_load = usize::MAX;
        for (i, lane) in lanes.iter().enumerate() {
            let load = lane.effective_load();
            if load < best_load {
                best = i;
                best_load = load;
            }
        }
        LaneId(best as u16)
    }

    fn name(&self) -> &'static str {
        "greedy-least-loaded"
    }
}
