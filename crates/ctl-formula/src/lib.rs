//! The CTL formula AST and its reduction to a six-operator evaluation
//! kernel.
//!
//! See [`Formula`] for the full surface syntax (boolean connectives plus
//! the eight temporal modalities) and [`kernel_reduce`] for the mechanical
//! lowering to `{AP, ¬, ∧, EX, EU, EG}` that `ctl-checker` evaluates.

mod formula;
mod kernel;

pub use formula::Formula;
pub use kernel::{kernel_reduce, KernelFormula};

pub use kripke_graph::Proposition;
