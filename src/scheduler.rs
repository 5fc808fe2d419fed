// SPDX-License-Identifier: GPL-3.0-only

//! Deferred callbacks for timed visual effects.
//!
//! Press flashes and toast auto-hide are fire-and-forget: once scheduled, a
//! callback always runs after its delay. There is deliberately no handle that
//! could cancel it.
//!
//! Two implementations are provided:
//!
//! - [`TokioScheduler`] runs callbacks on a shared tokio `LocalSet`.
//! - [`ManualScheduler`] keeps a virtual clock that the caller advances.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tokio::task::LocalSet;

/// A callback run once its delay elapses.
pub type Callback = Box<dyn FnOnce() + 'static>;

/// Capability to run a callback after a fixed delay.
pub trait Scheduler {
    /// Runs `callback` once `delay` has elapsed.
    fn schedule(&self, delay: Duration, callback: Callback);
}

// ============================================================================
// Tokio Scheduler
// ============================================================================

/// Schedules callbacks as tasks on a shared tokio `LocalSet`.
///
/// Scheduling is valid from any context; callbacks run while the set is
/// being driven (`run_until`, `block_on` or awaiting it).
#[derive(Clone)]
pub struct TokioScheduler {
    local: Rc<LocalSet>,
}

impl TokioScheduler {
    pub fn new(local: Rc<LocalSet>) -> Self {
        Self { local }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, callback: Callback) {
        self.local.spawn_local(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
    }
}

impl std::fmt::Debug for TokioScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioScheduler").finish_non_exhaustive()
    }
}

// ============================================================================
// Manual Scheduler
// ============================================================================

struct PendingCallback {
    due: Duration,
    seq: u64,
    callback: Callback,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_seq: u64,
    pending: Vec<PendingCallback>,
}

impl ManualClock {
    /// Removes the earliest callback due at or before `deadline`.
    fn take_due(&mut self, deadline: Duration) -> Option<PendingCallback> {
        let position = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= deadline)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        Some(self.pending.swap_remove(position))
    }
}

/// A scheduler driven by an explicit virtual clock.
///
/// Clones share the same clock. Callbacks fire from [`ManualScheduler::advance`]
/// in due-time order; callbacks with the same due time fire in the order they
/// were scheduled.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    /// Creates a scheduler with its clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of callbacks not yet fired.
    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Moves the clock forward by `by`, firing every callback that comes due.
    ///
    /// Returns the number of callbacks fired. Callbacks scheduled while
    /// advancing fire too if they come due before the new time.
    pub fn advance(&self, by: Duration) -> usize {
        let deadline = self.now() + by;
        let mut fired = 0;
        loop {
            // The borrow must end before the callback runs, which may reschedule.
            let next = {
                let mut clock = self.clock.borrow_mut();
                let next = clock.take_due(deadline);
                if let Some(pending) = &next {
                    clock.now = pending.due;
                }
                next
            };
            match next {
                Some(pending) => {
                    (pending.callback)();
                    fired += 1;
                }
                None => break,
            }
        }
        self.clock.borrow_mut().now = deadline;
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, callback: Callback) {
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + delay;
        let seq = clock.next_seq;
        clock.next_seq += 1;
        clock.pending.push(PendingCallback { due, seq, callback });
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now())
            .field("pending", &self.pending())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
