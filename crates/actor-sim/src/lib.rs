//! A cooperative, single-threaded actor scheduler over bounded FIFO
//! channels, plus enumerative state-space extraction that turns a
//! [`World`]'s reachable configurations into a [`kripke_graph::Graph`] for
//! CTL model checking.
//!
//! There is no real parallelism: concurrency is modeled purely by
//! interleaving one enabled step at a time, deterministically reproducible
//! given a seed. See [`world::World`] for the shared mutable state and
//! [`scheduler::run`] for the step-budgeted driver.

mod actor;
mod channel;
mod extract;
mod message;
mod scheduler;
mod world;

pub use actor::{Actor, BlockedOn, ChannelOp, Step};
pub use channel::Channel;
pub use extract::enumerate;
pub use message::{Address, Event, Message};
pub use scheduler::{run, RunOutcome};
pub use world::World;
