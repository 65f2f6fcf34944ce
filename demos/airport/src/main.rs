//! airport — the airport-security demo for the rust_qn simulator.
//!
//! Runs the same 60-minute checkpoint under three configurations and prints
//! each run's narration and average time in the system:
//!
//! 1. **centralized** — one shared queue per stage (2 officers, 6 baggage
//!    screeners, 2 body screeners).
//! 2. **random lanes** — 4 independent lanes (1 server of each type per
//!    lane), each passenger picks a lane uniformly at random.
//! 3. **least-loaded lanes** — same 4 lanes, but each passenger joins the
//!    lane with the smallest combined backlog at arrival.
//!
//! Arrivals follow the non-peak/peak/non-peak schedule (mean gap 1.0 min,
//! then 0.5 min between minutes 10 and 50, then 1.0 min again).

use anyhow::Result;

use qn_engine::{LanePolicyKind, RateSchedule, SimBuilder, SimConfig};
use qn_report::{summary_line, ConsoleNarrator, RecordWriter};

// ── Constants ─────────────────────────────────────────────────────────────────

const HORIZON_MIN: f64 = 60.0;
const SEED: u64 = 42;
const NUM_LANES: usize = 4;
const SEEDED_PASSENGERS: usize = 2;

// ── Scenarios ─────────────────────────────────────────────────────────────────

fn centralized() -> SimConfig {
    SimConfig {
        horizon: HORIZON_MIN,
        seed: SEED,
        num_lanes: 1,
        stages: SimConfig::airport_stages(2, 6, 2),
        arrivals: RateSchedule::airport_default(),
        policy: LanePolicyKind::Centralized,
        seeded_passengers: SEEDED_PASSENGERS,
    }
}

fn partitioned(policy: LanePolicyKind) -> SimConfig {
    SimConfig {
        num_lanes: NUM_LANES,
        stages: SimConfig::airport_stages(1, 1, 1),
        policy,
        // The original seeds two passengers per lane.
        seeded_passengers: 2 * NUM_LANES,
        ..centralized()
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn run_scenario(title: &str, config: SimConfig) -> Result<()> {
    println!("=== {title} ===");
    let show_lanes = config.num_lanes > 1;
    let sim = SimBuilder::new(config).build()?;

    let mut narrator = ConsoleNarrator::new(show_lanes);
    let metrics = sim.run(&mut narrator);

    println!("{}", summary_line(metrics.summary().as_ref()));

    let csv_path = std::env::temp_dir().join(format!("airport_{}.csv", title.replace(' ', "_")));
    let mut writer = RecordWriter::create(&csv_path)?;
    writer.write_records(metrics.records())?;
    writer.finish()?;
    println!("Completion records written to {}\n", csv_path.display());

    Ok(())
}

fn main() -> Result<()> {
    run_scenario("centralized", centralized())?;
    run_scenario("random lanes", partitioned(LanePolicyKind::Random))?;
    run_scenario(
        "least-loaded lanes",
        partitioned(LanePolicyKind::GreedyLeastLoaded),
    )?;
    Ok(())
}
