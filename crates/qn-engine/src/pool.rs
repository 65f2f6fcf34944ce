//! `ResourcePool` — a capacity-limited server group with a FCFS wait queue.
//!
//! # Atomic handoff
//!
//! The subtle part of a zero-delay handoff is that the released slot must
//! not be stealable: if `release` merely decremented `in_use` and scheduled
//! the head waiter, a fresh `try_acquire` at the same instant could grab the
//! slot first, depending on event ordering.  Instead, `release` transfers
//! the slot to the waiter *before returning* — it pops the waiter and keeps
//! `in_use` counted on the waiter's behalf.  Any acquire arriving at the
//! same instant sees a saturated pool and queues behind it.  Correctness
//! does not depend on event tie-breaking at all.

use std::collections::VecDeque;

use qn_core::PassengerId;

/// Outcome of [`ResourcePool::try_acquire`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Acquire {
    /// A slot was free; `in_use` has been incremented for the caller, which
    /// proceeds immediately (zero simulated time elapses).
    Granted,
    /// The pool is saturated; the caller was appended to the wait queue and
    /// must suspend.  It will be woken by a future `release`.
    Queued,
}

/// A capacity-limited resource guarding one pipeline stage.
///
/// Invariants (checked, violations are engine bugs):
/// - `0 <= in_use <= capacity` at every instant
/// - `waiters` is non-empty only while `in_use == capacity`
#[derive(Debug)]
pub struct ResourcePool {
    capacity: u32,
    in_use:   u32,
    waiters:  VecDeque<PassengerId>,
}

impl ResourcePool {
    /// Create a pool with the given slot count.
    ///
    /// Capacity validation happens at configuration time; by the point a
    /// pool is constructed the count is known positive.
    pub fn new(capacity: u32) -> Self {
        debug_assert!(capacity > 0, "pool capacity must be positive");
        Self {
            capacity,
            in_use: 0,
            waiters: VecDeque::new(),
        }
    }

    /// Acquire a slot for `who`, or join the FCFS wait queue.
    pub fn try_acquire(&mut self, who: PassengerId) -> Acquire {
        if self.in_use < self.capacity {
            self.in_use += 1;
            Acquire::Granted
        } else {
            self.waiters.push_back(who);
            Acquire::Queued
        }
    }

    /// Release one slot.
    ///
    /// If a waiter is queued, the freed slot is handed to the earliest one:
    /// `in_use` stays counted on its behalf and its ID is returned so the
    /// caller can schedule the zero-delay resumption.  Returns `None` when
    /// the queue was empty and the slot simply became free.
    ///
    /// # Panics
    /// Panics if no slot is in use — releasing an idle pool means the engine
    /// lost track of who holds what, and the run is not trustworthy.
    pub fn release(&mut self) -> Option<PassengerId> {
        assert!(self.in_use > 0, "release on an idle resource pool");
        match self.waiters.pop_front() {
            // Slot transfers directly: decrement + increment cancel out.
            Some(next) => Some(next),
            None => {
                self.in_use -= 1;
                None
            }
        }
    }

    /// Slots currently held.
    #[inline]
    pub fn in_use(&self) -> u32 {
        self.in_use
    }

    /// Total slot count.
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Passengers suspended in the wait queue.
    #[inline]
    pub fn queue_len(&self) -> usize {
        self.waiters.len()
    }

    /// `true` when every slot is held.
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.in_use == self.capacity
    }

    /// Queue length plus one if saturated — the load term used by the
    /// least-loaded lane policy.
    #[inline]
    pub fn effective_load(&self) -> usize {
        self.queue_len() + usize::from(self.is_saturated())
    }
}
