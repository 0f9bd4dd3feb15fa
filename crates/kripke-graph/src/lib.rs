//! Immutable-after-construction Kripke structures.
//!
//! This crate defines the [`Graph`] data structure used as the transition
//! system for CTL model checking: a finite set of states, a successor
//! relation, and a proposition-labeling function. See [`Graph`] for the
//! builder API and invariants.
//!
//! # See Also
//!
//! - `ctl-checker` — computes satisfaction sets over a [`Graph`].
//! - `actor-sim` — can produce a [`Graph`] by enumerating a world's
//!   reachable configurations.

mod error;
mod graph;

pub use error::{GraphError, Result};
pub use graph::{Graph, Proposition, StateId};
