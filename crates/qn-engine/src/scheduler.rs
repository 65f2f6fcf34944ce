//! `Scheduler` — the logical clock and time-ordered event queue.
//!
//! # Why this exists
//!
//! Nothing in a run ever sleeps.  "Waiting five simulated minutes" means
//! pushing an event five minutes in the future and handing control back to
//! the dispatch loop; the clock jumps straight to the next due time.  The
//! scheduler is the only owner of `now` and the only thing that advances it,
//! which is what makes the clock monotone by construction.
//!
//! # Ordering
//!
//! Events order by `(due, seq)`.  `seq` is a monotone insertion counter, so
//! two events scheduled for the same instant fire in the order they were
//! scheduled.  That tie-break is what makes runs reproducible: a `BinaryHeap`
//! alone gives no stable order among equal keys.

use std::cmp::Ordering;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use qn_core::{PassengerId, SimTime};

// ── Wake ──────────────────────────────────────────────────────────────────────

/// The continuation a popped event resumes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Wake {
    /// Resume one suspended passenger (end of service, or a granted slot).
    Passenger(PassengerId),
    /// Resume the arrival source: spawn a passenger and reschedule.
    ArrivalSource,
}

// ── Event ─────────────────────────────────────────────────────────────────────

/// A pending resumption.  Ephemeral: created on `schedule`, consumed on pop.
#[derive(Copy, Clone, Debug)]
pub struct Event {
    pub due:  SimTime,
    /// Insertion sequence number; breaks due-time ties in schedule order.
    pub seq:  u64,
    pub wake: Wake,
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Event {}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .total_cmp(&other.due)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// Logical clock plus min-heap of pending events.
#[derive(Debug, Default)]
pub struct Scheduler {
    now:      SimTime,
    events:   BinaryHeap<Reverse<Event>>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current simulated instant.  Never decreases.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Enqueue `wake` to fire `delay` minutes from now.
    ///
    /// # Panics
    /// Panics if `delay` is negative or not finite — a negative delay would
    /// rewind the clock, and NaN would corrupt heap ordering.
    pub fn schedule(&mut self, delay: f64, wake: Wake) {
        assert!(
            delay >= 0.0 && delay.is_finite(),
            "event delay must be finite and non-negative, got {delay}"
        );
        let event = Event {
            due: self.now.after(delay),
            seq: self.next_seq,
            wake,
        };
        self.next_seq += 1;
        self.events.push(Reverse(event));
    }

    /// Pop the earliest event if it is due at or before `horizon`, advancing
    /// the clock to its due time.
    ///
    /// Returns `None` when the queue is empty or the next event lies beyond
    /// the horizon; in the latter case the event stays queued but will never
    /// run — whatever it would have resumed is simply abandoned.
    pub fn pop_within(&mut self, horizon: SimTime) -> Option<Event> {
        let due = self.events.peek().map(|Reverse(e)| e.due)?;
        if due.total_cmp(&horizon) == Ordering::Greater {
            return None;
        }
        let Reverse(event) = self.events.pop()?;
        debug_assert!(
            event.due.total_cmp(&self.now) != Ordering::Less,
            "event due before current time"
        );
        self.now = event.due;
        Some(event)
    }

    /// Number of events still queued (including any beyond the horizon).
    pub fn pending(&self) -> usize {
        self.events.len()
    }
}
