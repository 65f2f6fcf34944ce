//! The `Sim` struct and its dispatch loop.

use qn_core::{PassengerId, SimRng, SimTime};

use crate::arrivals::ArrivalSource;
use crate::config::SimConfig;
use crate::lane::Lane;
use crate::metrics::MetricsCollector;
use crate::observer::SimObserver;
use crate::passenger::{Passenger, PassengerState};
use crate::policy::LanePolicy;
use crate::pool::Acquire;
use crate::scheduler::{Scheduler, Wake};

/// The assembled simulation.
///
/// `Sim` owns every piece of mutable run state: the scheduler (clock + event
/// heap), the lanes with their per-stage pools, the passenger table, and the
/// run RNG.  All of it is mutated from exactly one place — the dispatch loop
/// in [`run`][Sim::run] — which is what lets pools change hands without any
/// locking.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    config:     SimConfig,
    scheduler:  Scheduler,
    lanes:      Vec<Lane>,
    policy:     Box<dyn LanePolicy>,
    arrivals:   ArrivalSource,
    rng:        SimRng,
    /// Indexed by `PassengerId`; entries are never removed, departed
    /// passengers just sit in their terminal state.
    passengers: Vec<Passenger>,
}

impl Sim {
    /// Wire together pre-validated parts.  Only the builder calls this.
    pub(crate) fn assemble(
        config:    SimConfig,
        scheduler: Scheduler,
        lanes:     Vec<Lane>,
        policy:    Box<dyn LanePolicy>,
        arrivals:  ArrivalSource,
        rng:       SimRng,
    ) -> Self {
        Self {
            config,
            scheduler,
            lanes,
            policy,
            arrivals,
            rng,
            passengers: Vec::new(),
        }
    }

    /// Read-only view of the lanes (load inspection in tests and policies).
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    /// The run configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    // ── Run loop ──────────────────────────────────────────────────────────

    /// Drive the simulation to its horizon and return the run's metrics.
    ///
    /// Consumes the sim: results belong to exactly one run invocation, and a
    /// half-drained event queue can never leak into a second run.  Seeded
    /// passengers are injected first (all at time 0, in ID order), then the
    /// arrival source is primed with its first gap; after that the loop just
    /// pops events until the queue is empty or only post-horizon events
    /// remain.  Passengers still suspended at cutoff are dropped silently
    /// and never reach the metrics.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> MetricsCollector {
        let horizon = SimTime(self.config.horizon);
        let mut metrics = MetricsCollector::new();

        for _ in 0..self.config.seeded_passengers {
            self.inject(&mut metrics, observer);
        }
        let first_gap = self.arrivals.next_gap(self.scheduler.now(), &mut self.rng);
        self.scheduler.schedule(first_gap, Wake::ArrivalSource);

        while let Some(event) = self.scheduler.pop_within(horizon) {
            match event.wake {
                Wake::ArrivalSource => {
                    self.inject(&mut metrics, observer);
                    let gap = self.arrivals.next_gap(self.scheduler.now(), &mut self.rng);
                    self.scheduler.schedule(gap, Wake::ArrivalSource);
                }
                Wake::Passenger(id) => self.advance(id, &mut metrics, observer),
            }
        }

        observer.on_run_end(self.scheduler.now(), metrics.completed());
        metrics
    }

    // ── Passenger lifecycle ───────────────────────────────────────────────

    /// Create a passenger arriving now, assign its lane, and start stage 0.
    fn inject<O: SimObserver>(&mut self, metrics: &mut MetricsCollector, observer: &mut O) {
        let id = PassengerId(self.passengers.len() as u32);
        let now = self.scheduler.now();
        let lane = self.policy.assign(&self.lanes, &mut self.rng);
        self.passengers.push(Passenger::new(id, now, lane));
        observer.on_arrival(now, id, lane);
        self.request_stage(id, 0, metrics, observer);
    }

    /// Resume a suspended passenger: either its granted slot (head of a pool
    /// queue after a release) or the end of its service hold.
    fn advance<O: SimObserver>(
        &mut self,
        id:       PassengerId,
        metrics:  &mut MetricsCollector,
        observer: &mut O,
    ) {
        match self.passengers[id.index()].state {
            // A release handed us the slot; in_use is already ours.
            PassengerState::AwaitingStage(stage) => self.begin_service(id, stage),

            PassengerState::InService(stage) => {
                let lane = self.passengers[id.index()].lane;
                if let Some(next) = self.lanes[lane.index()].pool_mut(stage).release() {
                    // Zero-delay handoff: the waiter already owns the slot,
                    // the event just resumes it at the current instant.
                    self.scheduler.schedule(0.0, Wake::Passenger(next));
                }
                self.request_stage(id, stage + 1, metrics, observer);
            }

            PassengerState::Departed => {
                panic!("wake delivered to departed passenger {id}")
            }
        }
    }

    /// Enter stage `stage`, or depart if the pipeline is exhausted.
    fn request_stage<O: SimObserver>(
        &mut self,
        id:       PassengerId,
        stage:    usize,
        metrics:  &mut MetricsCollector,
        observer: &mut O,
    ) {
        if stage == self.config.stages.len() {
            self.depart(id, metrics, observer);
            return;
        }
        self.passengers[id.index()].state = PassengerState::AwaitingStage(stage);
        let lane = self.passengers[id.index()].lane;
        match self.lanes[lane.index()].pool_mut(stage).try_acquire(id) {
            Acquire::Granted => self.begin_service(id, stage),
            // Suspended: no event exists for us until a release picks us.
            Acquire::Queued => {}
        }
    }

    /// Hold the acquired slot for a sampled service duration.
    fn begin_service(&mut self, id: PassengerId, stage: usize) {
        let window = &self.config.stages[stage];
        let duration = self.rng.uniform(window.service_low, window.service_high);
        self.passengers[id.index()].state = PassengerState::InService(stage);
        self.scheduler.schedule(duration, Wake::Passenger(id));
    }

    /// Terminal transition: record the sojourn and notify the observer.
    fn depart<O: SimObserver>(
        &mut self,
        id:       PassengerId,
        metrics:  &mut MetricsCollector,
        observer: &mut O,
    ) {
        let now = self.scheduler.now();
        let passenger = &mut self.passengers[id.index()];
        passenger.state = PassengerState::Departed;
        let record = metrics.record(id, passenger.arrival, now);
        observer.on_departure(now, &record);
    }
}

#[cfg(test)]
impl Sim {
    /// Append a passenger already in its terminal state.
    pub(crate) fn push_departed(&mut self) -> PassengerId {
        let id = PassengerId(self.passengers.len() as u32);
        let mut passenger = Passenger::new(id, self.scheduler.now(), qn_core::LaneId(0));
        passenger.state = PassengerState::Departed;
        self.passengers.push(passenger);
        id
    }

    /// Deliver a wake outside the run loop.
    pub(crate) fn deliver_wake(&mut self, id: PassengerId) {
        let mut metrics = MetricsCollector::new();
        self.advance(id, &mut metrics, &mut crate::observer::NoopObserver);
    }
}
