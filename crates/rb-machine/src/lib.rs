//! # rb-machine — Observable slot machine widget core
//!
//! A slot machine widget as an explicit state container: credits, a spinning
//! flag, and a revealed symbol line, exposed through snapshots plus a
//! publish-subscribe hub, with the delayed reveal modeled as a one-shot
//! scheduled task with a cancel handle.
//!
//! ## Key components
//!
//! - [`SlotMachine`] — credits / spinning / results with `roll` and `cash_out`
//! - [`StateHub`] — subscriber registry for observing every transition
//! - [`Scheduler`] — deferred execution seam ([`ThreadScheduler`] for real
//!   sessions, [`ManualScheduler`] for deterministic control of time)
//! - [`MachineConfig`] / [`RevealTiming`] — initial credits, reel count,
//!   reveal delay profiles
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use rb_machine::{ManualScheduler, SlotMachine};
//!
//! let scheduler = Arc::new(ManualScheduler::new());
//! let machine = SlotMachine::new(scheduler.clone());
//!
//! machine.roll().unwrap();
//! assert_eq!(machine.credits(), 9);
//! assert!(machine.is_spinning());
//!
//! scheduler.fire_all(); // reveal
//! assert_eq!(machine.results().len(), 3);
//! assert!(!machine.is_spinning());
//!
//! assert_eq!(machine.cash_out(), 9);
//! assert_eq!(machine.credits(), 0);
//! ```

pub mod config;
pub mod events;
pub mod machine;
pub mod scheduler;
pub mod store;
pub mod symbols;
pub mod timing;

pub use config::{ConfigError, MachineConfig};
pub use events::MachineEvent;
pub use machine::{MachineSnapshot, SlotMachine, SpinError};
pub use scheduler::{ManualScheduler, Scheduler, Task, ThreadScheduler, TimerHandle};
pub use store::{StateHub, Subscriber, SubscriberId};
pub use symbols::{Symbol, SymbolSet};
pub use timing::{RevealTiming, TimingProfile};
