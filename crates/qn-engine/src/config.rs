//! Simulation configuration.
//!
//! All validation happens here and in the builder, before the first event is
//! popped — a run never fails mid-flight on bad input.

use crate::arrivals::RateSchedule;
use crate::error::{EngineError, EngineResult};
use crate::policy::{LanePolicy, LeastLoadedLane, RandomLane, SingleLane};

// ── StageConfig ───────────────────────────────────────────────────────────────

/// One pipeline stage: a named resource with per-lane capacity and a uniform
/// service-time window.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageConfig {
    pub name: String,
    /// Slots per pool.  With `num_lanes` lanes, each lane gets its own pool
    /// of this size.
    pub capacity: u32,
    /// Lower bound of the uniform service duration, minutes.
    pub service_low: f64,
    /// Upper bound of the uniform service duration, minutes.  Must be
    /// strictly positive.
    pub service_high: f64,
}

impl StageConfig {
    pub fn new(name: impl Into<String>, capacity: u32, service_low: f64, service_high: f64) -> Self {
        Self {
            name: name.into(),
            capacity,
            service_low,
            service_high,
        }
    }
}

// ── LanePolicyKind ────────────────────────────────────────────────────────────

/// The closed set of built-in lane-selection policies.
///
/// Custom policies can be injected via
/// [`SimBuilder::policy`][crate::SimBuilder::policy]; this enum covers the
/// configurable surface.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LanePolicyKind {
    /// One shared pool bundle; requires exactly one lane.
    Centralized,
    /// Uniformly random lane per arrival.
    Random,
    /// Lane with the minimum combined effective load; ties to lowest index.
    GreedyLeastLoaded,
}

impl LanePolicyKind {
    pub(crate) fn instantiate(self) -> Box<dyn LanePolicy> {
        match self {
            LanePolicyKind::Centralized       => Box::new(SingleLane),
            LanePolicyKind::Random            => Box::new(RandomLane),
            LanePolicyKind::GreedyLeastLoaded => Box::new(LeastLoadedLane),
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulated minutes to run.  Events due past the horizon never fire.
    pub horizon: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Number of parallel lanes.  `1` means a centralized configuration.
    pub num_lanes: usize,

    /// Ordered stage pipeline; every lane gets one pool per stage.
    pub stages: Vec<StageConfig>,

    /// Piecewise inter-arrival rate schedule.
    pub arrivals: RateSchedule,

    /// Lane-assignment policy.
    pub policy: LanePolicyKind,

    /// Passengers injected at time 0, bypassing the arrival source.
    pub seeded_passengers: usize,
}

impl SimConfig {
    /// Check every setup-time rule.  `RateSchedule` validates itself on
    /// construction; everything else is checked here.
    pub fn validate(&self) -> EngineResult<()> {
        if !(self.horizon > 0.0 && self.horizon.is_finite()) {
            return Err(EngineError::BadHorizon { horizon: self.horizon });
        }
        if self.stages.is_empty() {
            return Err(EngineError::NoStages);
        }
        for stage in &self.stages {
            if stage.capacity == 0 {
                return Err(EngineError::NonPositiveCapacity {
                    stage: stage.name.clone(),
                });
            }
            let (low, high) = (stage.service_low, stage.service_high);
            // `high` must be strictly positive: a stage that can only serve in
            // zero time would let a passenger depart with a zero sojourn.
            if !(low.is_finite() && high.is_finite()) || low < 0.0 || high < low || high <= 0.0 {
                return Err(EngineError::BadServiceWindow {
                    stage: stage.name.clone(),
                    low,
                    high,
                });
            }
        }
        if self.num_lanes == 0 {
            return Err(EngineError::NoLanes);
        }
        if self.num_lanes > usize::from(u16::MAX) {
            return Err(EngineError::TooManyLanes { lanes: self.num_lanes });
        }
        if self.policy == LanePolicyKind::Centralized && self.num_lanes != 1 {
            return Err(EngineError::PolicyLaneMismatch {
                policy: "centralized",
                lanes:  self.num_lanes,
            });
        }
        if self.policy != LanePolicyKind::Centralized && self.num_lanes < 2 {
            return Err(EngineError::PolicyLaneMismatch {
                policy: match self.policy {
                    LanePolicyKind::Random            => "random",
                    LanePolicyKind::GreedyLeastLoaded => "greedy-least-loaded",
                    LanePolicyKind::Centralized       => unreachable!(),
                },
                lanes: self.num_lanes,
            });
        }
        Ok(())
    }

    /// The three airport security stages with the demo's service windows.
    pub fn airport_stages(officer_cap: u32, baggage_cap: u32, body_cap: u32) -> Vec<StageConfig> {
        vec![
            StageConfig::new("boarding-pass check", officer_cap, 0.3, 0.7),
            StageConfig::new("baggage screening", baggage_cap, 2.0, 3.0),
            StageConfig::new("body screening", body_cap, 0.5, 1.0),
        ]
    }
}
