//! `Lane` — an independent bundle of one [`ResourcePool`] per stage.
//!
//! Lanes share nothing: a passenger assigned to lane 2 competes only with
//! other lane-2 passengers at every stage.  Membership is fixed at setup;
//! pools are created once and never destroyed mid-run.  A centralized
//! configuration is simply a single lane whose pools everyone shares.

use crate::pool::ResourcePool;

/// One parallel resource group: `pools[k]` guards stage `k`.
#[derive(Debug)]
pub struct Lane {
    pools: Vec<ResourcePool>,
}

impl Lane {
    /// Build a lane with one pool per stage capacity given.
    pub fn new(stage_capacities: &[u32]) -> Self {
        Self {
            pools: stage_capacities
                .iter()
                .map(|&cap| ResourcePool::new(cap))
                .collect(),
        }
    }

    #[inline]
    pub fn pool(&self, stage: usize) -> &ResourcePool {
        &self.pools[stage]
    }

    #[inline]
    pub fn pool_mut(&mut self, stage: usize) -> &mut ResourcePool {
        &mut self.pools[stage]
    }

    #[inline]
    pub fn stage_count(&self) -> usize {
        self.pools.len()
    }

    /// Combined effective load across all stage pools: for each pool, its
    /// queue length plus one if it is saturated.  The least-loaded policy
    /// minimizes this sum at assignment time.
    pub fn effective_load(&self) -> usize {
        self.pools.iter().map(ResourcePool::effective_load).sum()
    }
}
