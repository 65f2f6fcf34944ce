//! Wait-time formatting.
//!
//! The mean sojourn is reported as whole minutes plus rounded seconds.
//! This is presentation only — nothing downstream computes with these
//! values, so rounding here is harmless.

use std::fmt;

use qn_engine::SojournSummary;

/// A duration split into whole minutes and rounded seconds for display.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct WaitBreakdown {
    pub minutes: u64,
    pub seconds: u32,
}

impl WaitBreakdown {
    /// Split `minutes` (fractional) into whole minutes + rounded seconds.
    ///
    /// The fractional part is rounded to the nearest second; 59.6 s carries
    /// into the minute count rather than printing "60 seconds".
    pub fn from_minutes(minutes: f64) -> Self {
        let whole = minutes.trunc() as u64;
        let seconds = (minutes.fract() * 60.0).round() as u32;
        if seconds == 60 {
            WaitBreakdown {
                minutes: whole + 1,
                seconds: 0,
            }
        } else {
            WaitBreakdown {
                minutes: whole,
                seconds,
            }
        }
    }
}

impl fmt::Display for WaitBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} minutes and {} seconds", self.minutes, self.seconds)
    }
}

/// The one-line run summary, covering the no-data case.
pub fn summary_line(summary: Option<&SojournSummary>) -> String {
    match summary {
        Some(s) => format!(
            "The average time in the system is {} ({} passengers completed).",
            WaitBreakdown::from_minutes(s.mean_minutes),
            s.completed
        ),
        None => "No passenger completed within the horizon; no average to report.".to_string(),
    }
}
