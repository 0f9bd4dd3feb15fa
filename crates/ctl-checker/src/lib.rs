//! Fixed-point CTL model checking over finite Kripke structures.
//!
//! [`sat`] computes the set of states satisfying a formula; [`holds`]
//! checks the graph's initial state. See the `checker` module for the
//! evaluation algorithm and its edge cases (sink semantics for `EX`/`AX`/
//! `EG`, the least/greatest fixed-point iterations for `EU`/`EG`).

mod checker;
mod error;
mod state_set;

pub use checker::{holds, sat, sat_via_kernel, sorted};
pub use error::{CheckError, Result};
pub use state_set::StateSet;
