//! `qn-core` — foundational types for the `rust_qn` queueing-network simulator.
//!
//! This crate is a dependency of every other `qn-*` crate.  It intentionally
//! has no `qn-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                      |
//! |----------|-----------------------------------------------|
//! | [`ids`]  | `PassengerId`, `LaneId`                       |
//! | [`time`] | `SimTime` — the simulated-minutes clock value |
//! | [`rng`]  | `SimRng` — seeded deterministic random source |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{LaneId, PassengerId};
pub use rng::SimRng;
pub use time::SimTime;
