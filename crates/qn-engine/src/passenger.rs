//! Passenger state — one entry per entity that ever entered the system.
//!
//! A passenger's journey is a linear state machine over stage indices:
//!
//! ```text
//! AwaitingStage(0) → InService(0) → AwaitingStage(1) → … → Departed
//! ```
//!
//! The state itself carries no timing; the dispatch loop drives transitions
//! and the suspension bookkeeping lives in the scheduler (timed waits) and
//! the pools (queued acquires).  `Departed` is terminal — a wake delivered
//! to a departed passenger means the engine double-scheduled and is treated
//! as an invariant violation by the dispatch loop.

use qn_core::{LaneId, PassengerId, SimTime};

/// Where a passenger is in its stage pipeline.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PassengerState {
    /// Acquire called on stage `k`'s pool; either about to be granted within
    /// the same dispatch, or suspended in the pool's wait queue.
    AwaitingStage(usize),
    /// Holding a slot of stage `k`'s pool; a completion event is queued.
    InService(usize),
    /// All stages done; the completion record has been emitted.
    Departed,
}

/// One passenger's run-scoped record.
#[derive(Debug)]
pub struct Passenger {
    pub id:      PassengerId,
    pub arrival: SimTime,
    /// Assigned once at arrival, fixed for the whole journey.
    pub lane:    LaneId,
    pub state:   PassengerState,
}

impl Passenger {
    pub fn new(id: PassengerId, arrival: SimTime, lane: LaneId) -> Self {
        Self {
            id,
            arrival,
            lane,
            state: PassengerState::AwaitingStage(0),
        }
    }
}
