//! Fluent builder for constructing a [`Sim`].

use qn_core::SimRng;

use crate::arrivals::ArrivalSource;
use crate::config::SimConfig;
use crate::lane::Lane;
use crate::policy::LanePolicy;
use crate::scheduler::Scheduler;
use crate::sim::Sim;
use crate::EngineResult;

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — horizon, seed, lanes, stages, rate schedule, policy.
///
/// # Optional inputs
///
/// | Method       | Default                                      |
/// |--------------|----------------------------------------------|
/// | `.policy(p)` | Instantiated from `config.policy`            |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(config).build()?;
/// let metrics = sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config: SimConfig,
    policy: Option<Box<dyn LanePolicy>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            policy: None,
        }
    }

    /// Supply a custom lane policy instead of the built-in set.
    ///
    /// The configured [`LanePolicyKind`][crate::LanePolicyKind] is ignored
    /// for assignment but still participates in validation, so keep it
    /// coherent with `num_lanes`.
    pub fn policy(mut self, policy: Box<dyn LanePolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Validate the configuration and assemble a ready-to-run [`Sim`].
    ///
    /// Lanes and their per-stage pools are created here, once; seeded
    /// passengers are injected by [`Sim::run`] at time 0 so the observer
    /// sees their arrivals too.
    pub fn build(self) -> EngineResult<Sim> {
        self.config.validate()?;

        let capacities: Vec<u32> = self.config.stages.iter().map(|s| s.capacity).collect();
        let lanes: Vec<Lane> = (0..self.config.num_lanes)
            .map(|_| Lane::new(&capacities))
            .collect();

        let policy = self
            .policy
            .unwrap_or_else(|| self.config.policy.instantiate());
        let rng = SimRng::new(self.config.seed);
        let arrivals = ArrivalSource::new(self.config.arrivals.clone());

        Ok(Sim::assemble(
            self.config,
            Scheduler::new(),
            lanes,
            policy,
            arrivals,
            rng,
        ))
    }
}
