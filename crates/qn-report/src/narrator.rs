//! `ConsoleNarrator` — per-passenger console narration.
//!
//! The engine never prints; this observer reproduces the classic trace
//! ("Passenger 12 assigned to lane 1 at 4.21 min …") for demos and
//! debugging.  Narration goes to stdout unconditionally — wrap runs in
//! [`NoopObserver`][qn_engine::NoopObserver] when you want silence.

use qn_core::{LaneId, PassengerId, SimTime};
use qn_engine::{CompletionRecord, SimObserver};

/// Prints one line per arrival and departure, plus a run footer.
#[derive(Default)]
pub struct ConsoleNarrator {
    /// When `false` (single-lane runs), arrival lines omit the lane.
    pub show_lanes: bool,
}

impl ConsoleNarrator {
    pub fn new(show_lanes: bool) -> Self {
        Self { show_lanes }
    }
}

impl SimObserver for ConsoleNarrator {
    fn on_arrival(&mut self, time: SimTime, passenger: PassengerId, lane: LaneId) {
        if self.show_lanes {
            println!(
                "Passenger {} assigned to lane {} at {:.2} min",
                passenger.0, lane.0, time.minutes()
            );
        } else {
            println!("Passenger {} arrives at {:.2} min", passenger.0, time.minutes());
        }
    }

    fn on_departure(&mut self, time: SimTime, record: &CompletionRecord) {
        println!(
            "Passenger {} departs at {:.2} min (time in system: {:.2} min)",
            record.passenger.0,
            time.minutes(),
            record.sojourn
        );
    }

    fn on_run_end(&mut self, final_time: SimTime, completed: usize) {
        println!(
            "Run ended at {:.2} min with {} passengers completed.",
            final_time.minutes(),
            completed
        );
    }
}
