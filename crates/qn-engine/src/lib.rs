//! `qn-engine` — discrete-event engine for the rust_qn queueing-network
//! simulator.
//!
//! # Event loop
//!
//! ```text
//! while let Some(event) = scheduler.pop_within(horizon):
//!   ① ArrivalSource wake — spawn one passenger at `now`, sample the next
//!                          exponential gap from the rate schedule, and
//!                          reschedule the source.
//!   ② Passenger wake     — advance that passenger's state machine:
//!       AwaitingStage(k) → a released slot was handed to us; begin service
//!                          (sample the stage duration, schedule completion).
//!       InService(k)     → service done; release the pool (which may wake
//!                          the next FCFS waiter at zero delay), then enter
//!                          stage k+1 or depart and record the sojourn.
//! ```
//!
//! Exactly one continuation runs per popped event and runs uninterrupted
//! until its next suspension point, so resource pools are mutated without
//! locks and never observed in a torn state.  Events at equal simulated time
//! fire in insertion order; a fixed seed and configuration reproduce the
//! completion-record sequence byte for byte.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use qn_engine::{NoopObserver, SimBuilder, SimConfig};
//!
//! let sim = SimBuilder::new(config).build()?;
//! let metrics = sim.run(&mut NoopObserver);
//! match metrics.summary() {
//!     Some(s) => println!("mean sojourn: {:.2} min over {}", s.mean_minutes, s.completed),
//!     None    => println!("no passenger completed within the horizon"),
//! }
//! ```

pub mod arrivals;
pub mod builder;
pub mod config;
pub mod error;
pub mod lane;
pub mod metrics;
pub mod observer;
pub mod passenger;
pub mod policy;
pub mod pool;
pub mod scheduler;
pub mod sim;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use arrivals::{RateBand, RateSchedule};
pub use builder::SimBuilder;
pub use config::{LanePolicyKind, SimConfig, StageConfig};
pub use error::{EngineError, EngineResult};
pub use lane::Lane;
pub use metrics::{CompletionRecord, MetricsCollector, SojournSummary};
pub use observer::{NoopObserver, SimObserver};
pub use passenger::{Passenger, PassengerState};
pub use policy::{LanePolicy, LeastLoadedLane, RandomLane, SingleLane};
pub use pool::{Acquire, ResourcePool};
pub use scheduler::{Event, Scheduler, Wake};
pub use sim::Sim;
