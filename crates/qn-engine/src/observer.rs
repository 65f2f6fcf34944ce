//! Simulation observer trait for narration and data collection.

use qn_core::{LaneId, PassengerId, SimTime};

use crate::metrics::CompletionRecord;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in a
/// passenger's lifecycle.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The engine itself never prints; all
/// human-facing narration lives behind this seam.
///
/// # Example — arrival counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct ArrivalCounter(usize);
///
/// impl SimObserver for ArrivalCounter {
///     fn on_arrival(&mut self, _t: SimTime, _p: PassengerId, _lane: LaneId) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// A passenger entered the system and was assigned a lane.
    /// Fires for seeded passengers (at time 0) and generated arrivals alike.
    fn on_arrival(&mut self, _time: SimTime, _passenger: PassengerId, _lane: LaneId) {}

    /// A passenger finished its last stage; `record` is what the metrics
    /// collector stored.
    fn on_departure(&mut self, _time: SimTime, _record: &CompletionRecord) {}

    /// The run stopped (event queue drained or horizon reached).
    fn on_run_end(&mut self, _final_time: SimTime, _completed: usize) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
