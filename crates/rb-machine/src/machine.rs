//! SlotMachine — the observable widget core
//!
//! State machine: `Idle → Spinning → Idle(with results)`, entered via
//! [`SlotMachine::roll`]; [`SlotMachine::cash_out`] forcibly returns to a
//! zeroed Idle from any state.

use std::sync::Arc;

use log::{debug, trace};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, MachineConfig};
use crate::events::MachineEvent;
use crate::scheduler::{Scheduler, TimerHandle};
use crate::store::{StateHub, Subscriber, SubscriberId};
use crate::symbols::Symbol;

/// Serializable view of the machine's reactive fields.
///
/// Invariants: `results` is empty or holds exactly `reel_count` entries,
/// and `spinning` implies empty `results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    /// Spendable balance
    pub credits: u32,
    /// True between a roll and its reveal
    pub spinning: bool,
    /// Last revealed (or injected) symbol line
    pub results: Vec<Symbol>,
}

/// Errors reported by machine operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpinError {
    #[error("no credits remaining")]
    OutOfCredits,

    #[error("expected {expected} results, got {got}")]
    WrongResultCount { expected: u8, got: usize },
}

struct MachineInner {
    config: MachineConfig,
    rng: StdRng,
    credits: u32,
    spinning: bool,
    results: Vec<Symbol>,
    /// Bumped by every roll, cash-out, and injection; a reveal only applies
    /// while its generation is still current.
    spin_generation: u64,
    pending: Option<TimerHandle>,
    hub: StateHub,
}

impl MachineInner {
    fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            credits: self.credits,
            spinning: self.spinning,
            results: self.results.clone(),
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}

/// The slot machine widget core.
///
/// All mutation goes through [`roll`](Self::roll),
/// [`cash_out`](Self::cash_out), and [`set_results`](Self::set_results);
/// subscribers observe every transition through the [`StateHub`].
pub struct SlotMachine {
    inner: Arc<Mutex<MachineInner>>,
    scheduler: Arc<dyn Scheduler>,
}

impl SlotMachine {
    /// Create a machine with the standard configuration
    pub fn new(scheduler: Arc<dyn Scheduler>) -> Self {
        // Standard config is known-valid
        Self::build(MachineConfig::standard(), scheduler)
    }

    /// Create a machine with a validated configuration
    pub fn with_config(
        config: MachineConfig,
        scheduler: Arc<dyn Scheduler>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, scheduler))
    }

    fn build(config: MachineConfig, scheduler: Arc<dyn Scheduler>) -> Self {
        let inner = MachineInner {
            credits: config.initial_credits,
            config,
            rng: StdRng::from_os_rng(),
            spinning: false,
            results: Vec::new(),
            spin_generation: 0,
            pending: None,
            hub: StateHub::new(),
        };
        Self {
            inner: Arc::new(Mutex::new(inner)),
            scheduler,
        }
    }

    /// Seed the RNG for a reproducible session
    pub fn seed(&self, seed: u64) {
        self.inner.lock().rng = StdRng::seed_from_u64(seed);
    }

    /// Register a subscriber for state transitions
    pub fn subscribe(&self, subscriber: Subscriber) -> SubscriberId {
        self.inner.lock().hub.subscribe(subscriber)
    }

    /// Remove a subscriber; returns whether it was registered
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        self.inner.lock().hub.unsubscribe(id)
    }

    /// Current credit balance
    pub fn credits(&self) -> u32 {
        self.inner.lock().credits
    }

    /// Whether a reveal is pending
    pub fn is_spinning(&self) -> bool {
        self.inner.lock().spinning
    }

    /// Last revealed (or injected) symbol line
    pub fn results(&self) -> Vec<Symbol> {
        self.inner.lock().results.clone()
    }

    /// Snapshot of all reactive fields
    pub fn snapshot(&self) -> MachineSnapshot {
        self.inner.lock().snapshot()
    }

    /// Consume one credit and start a spin.
    ///
    /// Clears any previous results and schedules the reveal after the
    /// configured delay. Rolling while already spinning cancels the pending
    /// reveal and starts a fresh spin. Rolling with zero credits changes
    /// nothing and reports [`SpinError::OutOfCredits`].
    pub fn roll(&self) -> Result<(), SpinError> {
        let mut inner = self.inner.lock();
        if inner.credits == 0 {
            return Err(SpinError::OutOfCredits);
        }

        inner.credits -= 1;
        inner.spinning = true;
        inner.results.clear();
        inner.spin_generation += 1;
        inner.cancel_pending();

        let generation = inner.spin_generation;
        let delay = inner.config.timing.delay();
        let shared = Arc::clone(&self.inner);
        let handle = self
            .scheduler
            .schedule(delay, Box::new(move || complete_reveal(&shared, generation)));
        inner.pending = Some(handle);

        debug!(
            "spin {generation} started, {} credit(s) remaining",
            inner.credits
        );
        let snapshot = inner.snapshot();
        inner.hub.publish(
            &MachineEvent::SpinStarted {
                credits_remaining: inner.credits,
            },
            &snapshot,
        );
        Ok(())
    }

    /// Collect the balance and reset the machine.
    ///
    /// Cancels any pending reveal, zeroes credits, clears results, and stops
    /// spinning. Returns the collected balance.
    pub fn cash_out(&self) -> u32 {
        let mut inner = self.inner.lock();
        inner.cancel_pending();
        inner.spin_generation += 1;

        let collected = inner.credits;
        inner.credits = 0;
        inner.spinning = false;
        inner.results.clear();

        debug!("cashed out {collected} credit(s)");
        let snapshot = inner.snapshot();
        inner
            .hub
            .publish(&MachineEvent::CashedOut { collected }, &snapshot);
        collected
    }

    /// Inject a literal result line (scripted/demo outcome).
    ///
    /// The line must hold exactly `reel_count` symbols. Any pending reveal is
    /// cancelled and spinning cleared so the machine invariants hold.
    pub fn set_results(&self, results: Vec<Symbol>) -> Result<(), SpinError> {
        let mut inner = self.inner.lock();
        let expected = inner.config.reel_count;
        if results.len() != expected as usize {
            return Err(SpinError::WrongResultCount {
                expected,
                got: results.len(),
            });
        }

        inner.cancel_pending();
        inner.spin_generation += 1;
        inner.spinning = false;
        inner.results = results;

        let snapshot = inner.snapshot();
        inner.hub.publish(
            &MachineEvent::ResultsSet {
                results: inner.results.clone(),
            },
            &snapshot,
        );
        Ok(())
    }
}

/// Reveal callback: draws the result line and stops spinning.
///
/// Runs on the scheduler's thread. A reveal whose generation is no longer
/// current (re-roll, cash-out, or injection happened since) is discarded.
fn complete_reveal(inner: &Arc<Mutex<MachineInner>>, generation: u64) {
    let mut inner = inner.lock();
    if generation != inner.spin_generation || !inner.spinning {
        trace!("stale reveal for spin {generation} ignored");
        return;
    }

    let MachineInner {
        rng,
        config,
        results,
        ..
    } = &mut *inner;
    *results = config.symbols.draw_line(rng, config.reel_count as usize);
    inner.spinning = false;
    inner.pending = None;

    debug!("spin {generation} revealed {} symbol(s)", inner.results.len());
    let snapshot = inner.snapshot();
    inner.hub.publish(
        &MachineEvent::RevealCompleted {
            results: inner.results.clone(),
        },
        &snapshot,
    );
}
