//! `qn-report` — human-facing output for the rust_qn simulator.
//!
//! The engine produces [`CompletionRecord`][qn_engine::CompletionRecord]s and
//! a mean sojourn; everything a person reads is assembled here:
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`format`]   | minutes/seconds breakdown and the summary line      |
//! | [`csv`]      | `RecordWriter` — completion records as CSV          |
//! | [`narrator`] | `ConsoleNarrator` — per-passenger arrival/departure narration |
//!
//! # Usage
//!
//! ```rust,ignore
//! use qn_report::{summary_line, ConsoleNarrator};
//!
//! let mut narrator = ConsoleNarrator::new(true);
//! let metrics = sim.run(&mut narrator);
//! println!("{}", summary_line(metrics.summary().as_ref()));
//! ```

pub mod csv;
pub mod error;
pub mod format;
pub mod narrator;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use csv::RecordWriter;
pub use error::{ReportError, ReportResult};
pub use format::{summary_line, WaitBreakdown};
pub use narrator::ConsoleNarrator;
