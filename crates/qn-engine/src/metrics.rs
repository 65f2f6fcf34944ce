//! Run-scoped completion metrics.
//!
//! The collector is created inside [`Sim::run`][crate::Sim::run] and handed
//! back when the run ends, so results are owned by one run invocation —
//! never a process-wide accumulator.  Passengers still suspended at the
//! horizon contribute nothing here.

use qn_core::{PassengerId, SimTime};

// ── CompletionRecord ──────────────────────────────────────────────────────────

/// The timing record one passenger emits on departure.  Immutable once
/// produced; records appear in departure order.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletionRecord {
    pub passenger: PassengerId,
    pub arrival:   SimTime,
    pub departure: SimTime,
    /// `departure - arrival`, in minutes.
    pub sojourn:   f64,
}

// ── SojournSummary ────────────────────────────────────────────────────────────

/// Aggregate over the run's completed passengers.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SojournSummary {
    pub completed:    usize,
    /// Mean sojourn time in minutes.
    pub mean_minutes: f64,
}

// ── MetricsCollector ──────────────────────────────────────────────────────────

/// Accumulates [`CompletionRecord`]s for one run.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    records: Vec<CompletionRecord>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one departure and return the stored record.
    ///
    /// # Panics
    /// Panics if the departure does not lie strictly after the arrival —
    /// every stage holds a slot for positive time, so a non-positive sojourn
    /// means the engine mis-tracked the clock.
    pub fn record(
        &mut self,
        passenger: PassengerId,
        arrival:   SimTime,
        departure: SimTime,
    ) -> CompletionRecord {
        let sojourn = departure.since(arrival);
        assert!(
            sojourn > 0.0,
            "non-positive sojourn for {passenger}: arrival {arrival}, departure {departure}"
        );
        let record = CompletionRecord {
            passenger,
            arrival,
            departure,
            sojourn,
        };
        self.records.push(record);
        record
    }

    /// Completion records in departure order.
    pub fn records(&self) -> &[CompletionRecord] {
        &self.records
    }

    /// Number of completed passengers.
    pub fn completed(&self) -> usize {
        self.records.len()
    }

    /// Mean sojourn over completed passengers, or `None` when nothing
    /// completed (the mean of an empty set is undefined, not zero).
    pub fn summary(&self) -> Option<SojournSummary> {
        if self.records.is_empty() {
            return None;
        }
        let total: f64 = self.records.iter().map(|r| r.sojourn).sum();
        Some(SojournSummary {
            completed:    self.records.len(),
            mean_minutes: total / self.records.len() as f64,
        })
    }
}
