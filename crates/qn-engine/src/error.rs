//! Engine error type.
//!
//! Everything here is a configuration problem caught at setup — the engine
//! performs no I/O and has no transient-failure surface, so nothing is ever
//! retried.  Invariant violations (releasing an idle pool, waking a departed
//! passenger) are engine bugs, not user errors, and panic instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("stage '{stage}' has non-positive capacity")]
    NonPositiveCapacity { stage: String },

    #[error("stage '{stage}' has a malformed service window [{low}, {high}]")]
    BadServiceWindow { stage: String, low: f64, high: f64 },

    #[error("at least one stage is required")]
    NoStages,

    #[error("at least one lane is required")]
    NoLanes,

    #[error("{lanes} lanes exceed the lane-id range")]
    TooManyLanes { lanes: usize },

    #[error("policy '{policy}' is incompatible with {lanes} lanes")]
    PolicyLaneMismatch { policy: &'static str, lanes: usize },

    #[error("rate schedule has no bands")]
    EmptyRateSchedule,

    #[error("malformed rate band: {detail}")]
    BadRateBand { detail: String },

    #[error("horizon must be positive finite, got {horizon}")]
    BadHorizon { horizon: f64 },
}

/// Shorthand result type for qn-engine.
pub type EngineResult<T> = Result<T, EngineError>;
