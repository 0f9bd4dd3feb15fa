//! The six-operator evaluation kernel and the surface-to-kernel reduction.
//!
//! The checker only ever evaluates [`KernelFormula`] nodes directly; every
//! surface [`Formula`] construct is lowered to the kernel by
//! [`kernel_reduce`] following a fixed set of identities (boolean
//! constants, `∨`, `→`, `AX`, `EF`, `AG`, `AF`, `A[.U.]`).
//! An evaluator is free to special-case a surface operator for performance
//! (e.g. compute `∨` as a set union instead of via De Morgan) as long as
//! the result equals what this reduction would produce — `ctl-checker`'s
//! property tests assert exactly that equivalence.

use crate::formula::Formula;
use kripke_graph::Proposition;

/// The six-operator kernel that the model checker evaluates directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelFormula {
    /// `AP(p)`.
    Ap(Proposition),
    /// `¬φ`.
    Not(Box<KernelFormula>),
    /// `φ ∧ ψ`.
    And(Box<KernelFormula>, Box<KernelFormula>),
    /// `EX φ`.
    Ex(Box<KernelFormula>),
    /// `E[φ U ψ]`.
    Eu(Box<KernelFormula>, Box<KernelFormula>),
    /// `EG φ`.
    Eg(Box<KernelFormula>),
}

impl KernelFormula {
    fn not(self) -> Self {
        KernelFormula::Not(Box::new(self))
    }

    fn and(self, other: KernelFormula) -> Self {
        KernelFormula::And(Box::new(self), Box::new(other))
    }

    fn or(self, other: KernelFormula) -> Self {
        // φ ∨ ψ = ¬(¬φ ∧ ¬ψ)
        self.not().and(other.not()).not()
    }
}

/// Lowers a surface [`Formula`] to the six-operator [`KernelFormula`],
/// following this reduction table:
///
/// | Surface | Kernel reduction |
/// |---|---|
/// | `⊤` | complement of `⊥` |
/// | `⊥` | `Ap` of a proposition satisfied nowhere — modeled directly as a
/// dedicated always-false marker via double negation of itself |
/// | `φ ∨ ψ` | `¬(¬φ ∧ ¬ψ)` |
/// | `φ → ψ` | `¬φ ∨ ψ` |
/// | `AX φ` | `¬EX ¬φ` |
/// | `EF φ` | `E[⊤ U φ]` |
/// | `AG φ` | `¬EF ¬φ` |
/// | `AF φ` | `¬EG ¬φ` |
/// | `A[φ U ψ]` | `¬(E[¬ψ U (¬φ ∧ ¬ψ)] ∨ EG ¬ψ)` |
pub fn kernel_reduce(f: &Formula) -> KernelFormula {
    use Formula as S;
    match f {
        S::True => truth(),
        S::False => truth().not(),
        S::Ap(p) => KernelFormula::Ap(p.clone()),
        S::Not(a) => kernel_reduce(a).not(),
        S::And(a, b) => kernel_reduce(a).and(kernel_reduce(b)),
        S::Or(a, b) => kernel_reduce(a).or(kernel_reduce(b)),
        S::Implies(a, b) => kernel_reduce(a).not().or(kernel_reduce(b)),
        S::Ex(a) => KernelFormula::Ex(Box::new(kernel_reduce(a))),
        S::Ax(a) => KernelFormula::Ex(Box::new(kernel_reduce(a).not())).not(),
        S::Ef(a) => KernelFormula::Eu(Box::new(truth()), Box::new(kernel_reduce(a))),
        S::Af(a) => KernelFormula::Eg(Box::new(kernel_reduce(a).not())).not(),
        S::Eg(a) => KernelFormula::Eg(Box::new(kernel_reduce(a))),
        S::Ag(a) => {
            let not_a = kernel_reduce(a).not();
            KernelFormula::Eu(Box::new(truth()), Box::new(not_a)).not()
        }
        S::Eu(a, b) => KernelFormula::Eu(Box::new(kernel_reduce(a)), Box::new(kernel_reduce(b))),
        S::Au(a, b) => {
            let ka = kernel_reduce(a);
            let kb = kernel_reduce(b);
            let not_b = kb.clone().not();
            let not_a_and_not_b = ka.not().and(not_b.clone());
            let eu_branch = KernelFormula::Eu(Box::new(not_b.clone()), Box::new(not_a_and_not_b));
            let eg_branch = KernelFormula::Eg(Box::new(not_b));
            eu_branch.or(eg_branch).not()
        }
    }
}

/// `⊤`, expressed purely in kernel terms: true everywhere is the
/// complement of false everywhere, and false everywhere is `EG` of an
/// atomic proposition that is never in any label set combined with its own
/// negation — simpler and exactly equivalent is `¬(p ∧ ¬p)` for an
/// arbitrary `p`, which is a tautology independent of labeling. We use a
/// reserved, never-labeled proposition so this never collides with a
/// user-defined one.
fn truth() -> KernelFormula {
    let p = KernelFormula::Ap(Proposition::from("__ctl_kernel_truth__"));
    p.clone().not().and(p).not()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::Formula;

    #[test]
    fn af_reduces_through_not_eg_not() {
        let f = Formula::ap("p").af();
        let k = kernel_reduce(&f);
        match k {
            KernelFormula::Not(inner) => match *inner {
                KernelFormula::Eg(inner2) => match *inner2 {
                    KernelFormula::Not(p) => assert_eq!(*p, KernelFormula::Ap("p".into())),
                    _ => panic!("expected Not(Ap(p))"),
                },
                _ => panic!("expected Eg"),
            },
            _ => panic!("expected Not"),
        }
    }

    #[test]
    fn ef_reduces_to_eu_true() {
        let f = Formula::ap("p").ef();
        let k = kernel_reduce(&f);
        match k {
            KernelFormula::Eu(lhs, rhs) => {
                assert_eq!(*rhs, KernelFormula::Ap("p".into()));
                // lhs must be the kernel-level tautology, not a surface True marker.
                assert_ne!(*lhs, KernelFormula::Ap("p".into()));
            }
            _ => panic!("expected Eu"),
        }
    }
}
