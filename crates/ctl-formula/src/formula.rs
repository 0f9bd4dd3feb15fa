//! The CTL formula AST and its smart constructors.
//!
//! [`Formula`] is a closed, non-extensible sum type — CTL's operator
//! lattice is fixed by the logic itself, so this is deliberately not an
//! open trait hierarchy (see the kernel module for why only six of these
//! constructs are evaluated directly).

use kripke_graph::Proposition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A CTL formula: boolean constants and connectives plus the eight
/// temporal modalities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Formula {
    /// `⊤`, trivially true everywhere.
    True,
    /// `⊥`, trivially false everywhere.
    False,
    /// `AP(p)`: true at a state iff `p` is in that state's label set.
    Ap(Proposition),
    /// `¬φ`.
    Not(Box<Formula>),
    /// `φ ∧ ψ`.
    And(Box<Formula>, Box<Formula>),
    /// `φ ∨ ψ`.
    Or(Box<Formula>, Box<Formula>),
    /// `φ → ψ`.
    Implies(Box<Formula>, Box<Formula>),
    /// `EX φ`: some successor satisfies `φ`.
    Ex(Box<Formula>),
    /// `AX φ`: every successor satisfies `φ` (vacuously true at a sink).
    Ax(Box<Formula>),
    /// `EF φ`: some path eventually reaches `φ`.
    Ef(Box<Formula>),
    /// `AF φ`: every path eventually reaches `φ`.
    Af(Box<Formula>),
    /// `EG φ`: some path satisfies `φ` forever.
    Eg(Box<Formula>),
    /// `AG φ`: every path satisfies `φ` forever.
    Ag(Box<Formula>),
    /// `E[φ U ψ]`: some path satisfies `φ` until `ψ` holds.
    Eu(Box<Formula>, Box<Formula>),
    /// `A[φ U ψ]`: every path satisfies `φ` until `ψ` holds.
    Au(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// `⊤`.
    pub fn tru() -> Self {
        Formula::True
    }

    /// `⊥`.
    pub fn fls() -> Self {
        Formula::False
    }

    /// `AP(p)`.
    pub fn ap(p: impl Into<Proposition>) -> Self {
        Formula::Ap(p.into())
    }

    /// `¬φ`.
    pub fn not(self) -> Self {
        Formula::Not(Box::new(self))
    }

    /// `φ ∧ ψ`.
    pub fn and(self, other: Formula) -> Self {
        Formula::And(Box::new(self), Box::new(other))
    }

    /// `φ ∨ ψ`.
    pub fn or(self, other: Formula) -> Self {
        Formula::Or(Box::new(self), Box::new(other))
    }

    /// `φ → ψ`.
    pub fn implies(self, other: Formula) -> Self {
        Formula::Implies(Box::new(self), Box::new(other))
    }

    /// `EX φ`.
    pub fn ex(self) -> Self {
        Formula::Ex(Box::new(self))
    }

    /// `AX φ`.
    pub fn ax(self) -> Self {
        Formula::Ax(Box::new(self))
    }

    /// `EF φ`.
    pub fn ef(self) -> Self {
        Formula::Ef(Box::new(self))
    }

    /// `AF φ`.
    pub fn af(self) -> Self {
        Formula::Af(Box::new(self))
    }

    /// `EG φ`.
    pub fn eg(self) -> Self {
        Formula::Eg(Box::new(self))
    }

    /// `AG φ`.
    pub fn ag(self) -> Self {
        Formula::Ag(Box::new(self))
    }

    /// `E[φ U ψ]`.
    pub fn eu(self, other: Formula) -> Self {
        Formula::Eu(Box::new(self), Box::new(other))
    }

    /// `A[φ U ψ]`.
    pub fn au(self, other: Formula) -> Self {
        Formula::Au(Box::new(self), Box::new(other))
    }

    /// Number of nodes in the formula tree, used for the checker's
    /// `O(|φ| · (|S| + |→|))` complexity bound.
    pub fn size(&self) -> usize {
        use Formula::*;
        match self {
            True | False | Ap(_) => 1,
            Not(f) | Ex(f) | Ax(f) | Ef(f) | Af(f) | Eg(f) | Ag(f) => 1 + f.size(),
            And(a, b) | Or(a, b) | Implies(a, b) | Eu(a, b) | Au(a, b) => 1 + a.size() + b.size(),
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Formula::*;
        match self {
            True => write!(f, "⊤"),
            False => write!(f, "⊥"),
            Ap(p) => write!(f, "{}", p),
            Not(a) => write!(f, "¬{}", a),
            And(a, b) => write!(f, "({} ∧ {})", a, b),
            Or(a, b) => write!(f, "({} ∨ {})", a, b),
            Implies(a, b) => write!(f, "({} → {})", a, b),
            Ex(a) => write!(f, "EX {}", a),
            Ax(a) => write!(f, "AX {}", a),
            Ef(a) => write!(f, "EF {}", a),
            Af(a) => write!(f, "AF {}", a),
            Eg(a) => write!(f, "EG {}", a),
            Ag(a) => write!(f, "AG {}", a),
            Eu(a, b) => write!(f, "E[{} U {}]", a, b),
            Au(a, b) => write!(f, "A[{} U {}]", a, b),
        }
    }
}
