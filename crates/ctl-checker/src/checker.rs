//! Bottom-up fixed-point evaluation of CTL formulas over a [`Graph`].
//!
//! `sat` recurses over the formula tree, computing a [`StateSet`] per
//! sub-formula. Boolean connectives and `EX` are computed directly; `EU`
//! is a least fixed point and `EG` a greatest fixed point, iterated to
//! convergence in at most `|states|` rounds. Every surface
//! operator not handled directly (`AX`, `EF`, `AF`, `AG`, `A[.U.]`) is
//! computed via the exact set-algebra identity the kernel reduction table
//! specifies — an unknown atomic proposition is simply absent from every
//! state's label set, so it is always-false by construction, never an
//! error.

use crate::error::Result;
use crate::state_set::StateSet;
use ctl_formula::Formula;
use kripke_graph::{Graph, StateId};

/// Computes the set of states of `graph` satisfying `formula`.
pub fn sat(graph: &Graph, formula: &Formula) -> Result<StateSet> {
    let universe = StateSet::all(graph);
    let result = eval(graph, formula, &universe)?;
    tracing::info!(formula = %formula, satisfied = result.count(), total = universe.count(), "sat computed");
    Ok(result)
}

/// Whether `graph`'s initial state satisfies `formula`.
pub fn holds(graph: &Graph, formula: &Formula) -> Result<bool> {
    let set = sat(graph, formula)?;
    Ok(set.contains(graph.initial()))
}

fn eval(graph: &Graph, formula: &Formula, universe: &StateSet) -> Result<StateSet> {
    use Formula::*;
    let result = match formula {
        True => universe.clone(),
        False => StateSet::empty(graph.capacity()),
        Ap(p) => {
            let mut set = StateSet::empty(graph.capacity());
            for s in graph.states() {
                if graph.has_label(*s, p)? {
                    set.insert(*s);
                }
            }
            set
        }
        Not(a) => eval(graph, a, universe)?.complement_in(universe),
        And(a, b) => eval(graph, a, universe)?.intersect(&eval(graph, b, universe)?),
        Or(a, b) => eval(graph, a, universe)?.union(&eval(graph, b, universe)?),
        Implies(a, b) => eval(graph, a, universe)?
            .complement_in(universe)
            .union(&eval(graph, b, universe)?),
        Ex(a) => ex(graph, &eval(graph, a, universe)?)?,
        Ax(a) => {
            let not_a = eval(graph, a, universe)?.complement_in(universe);
            ex(graph, &not_a)?.complement_in(universe)
        }
        Ef(a) => eu(graph, universe, &eval(graph, a, universe)?)?,
        Af(a) => {
            let not_a = eval(graph, a, universe)?.complement_in(universe);
            eg(graph, &not_a)?.complement_in(universe)
        }
        Eg(a) => eg(graph, &eval(graph, a, universe)?)?,
        Ag(a) => {
            let not_a = eval(graph, a, universe)?.complement_in(universe);
            eu(graph, universe, &not_a)?.complement_in(universe)
        }
        Eu(a, b) => eu(graph, &eval(graph, a, universe)?, &eval(graph, b, universe)?)?,
        Au(a, b) => {
            let sat_a = eval(graph, a, universe)?;
            let sat_b = eval(graph, b, universe)?;
            let not_a = sat_a.complement_in(universe);
            let not_b = sat_b.complement_in(universe);
            let eu_branch = eu(graph, &not_b, &not_a.intersect(&not_b))?;
            let eg_branch = eg(graph, &not_b)?;
            eu_branch.union(&eg_branch).complement_in(universe)
        }
    };
    Ok(result)
}

/// `EX φ`: states with at least one successor satisfying `φ`.
fn ex(graph: &Graph, phi: &StateSet) -> Result<StateSet> {
    let mut out = StateSet::empty(graph.capacity());
    for s in graph.states() {
        if graph.successors(*s)?.iter().any(|t| phi.contains(*t)) {
            out.insert(*s);
        }
    }
    Ok(out)
}

/// `E[φ U ψ]` as a least fixed point: `X₀ = ψ`, `Xₙ₊₁ = Xₙ ∪ {s ∈ φ |
/// successors(s) ∩ Xₙ ≠ ∅}`, to convergence.
fn eu(graph: &Graph, phi: &StateSet, psi: &StateSet) -> Result<StateSet> {
    let mut x = psi.clone();
    let mut round = 0usize;
    loop {
        let mut next = x.clone();
        for s in phi.iter() {
            if next.contains(s) {
                continue;
            }
            if graph.successors(s)?.iter().any(|t| x.contains(*t)) {
                next.insert(s);
            }
        }
        round += 1;
        if next == x {
            tracing::debug!(rounds = round, "EU converged");
            return Ok(next);
        }
        debug_assert!(round <= graph.len() + 1, "EU failed to converge within |states| rounds");
        x = next;
    }
}

/// `EG φ` as a greatest fixed point: `Z₀ = φ`, `Zₙ₊₁ = {s ∈ Zₙ |
/// successors(s) ∩ Zₙ ≠ ∅}`, to convergence. A sink is dropped in the
/// first round it appears in `Zₙ` (standard total-path semantics — the
/// "stutter at sinks" variant, where a sink satisfying `φ` stays in `Zₙ`
/// forever, is not implemented).
fn eg(graph: &Graph, phi: &StateSet) -> Result<StateSet> {
    let mut z = phi.clone();
    let mut round = 0usize;
    loop {
        let mut next = StateSet::empty(graph.capacity());
        for s in z.iter() {
            if graph.successors(s)?.iter().any(|t| z.contains(*t)) {
                next.insert(s);
            }
        }
        round += 1;
        if next == z {
            tracing::debug!(rounds = round, "EG converged");
            return Ok(next);
        }
        debug_assert!(round <= graph.len() + 1, "EG failed to converge within |states| rounds");
        z = next;
    }
}

/// Evaluates via the kernel reduction only (no direct surface shortcuts),
/// used by tests to assert that the direct evaluator and the kernel
/// reduction always agree.
pub fn sat_via_kernel(graph: &Graph, formula: &Formula) -> Result<StateSet> {
    let kernel = ctl_formula::kernel_reduce(formula);
    let universe = StateSet::all(graph);
    eval_kernel(graph, &kernel, &universe)
}

fn eval_kernel(
    graph: &Graph,
    formula: &ctl_formula::KernelFormula,
    universe: &StateSet,
) -> Result<StateSet> {
    use ctl_formula::KernelFormula as K;
    let result = match formula {
        K::Ap(p) => {
            let mut set = StateSet::empty(graph.capacity());
            for s in graph.states() {
                if graph.has_label(*s, p)? {
                    set.insert(*s);
                }
            }
            set
        }
        K::Not(a) => eval_kernel(graph, a, universe)?.complement_in(universe),
        K::And(a, b) => eval_kernel(graph, a, universe)?.intersect(&eval_kernel(graph, b, universe)?),
        K::Ex(a) => ex(graph, &eval_kernel(graph, a, universe)?)?,
        K::Eu(a, b) => eu(
            graph,
            &eval_kernel(graph, a, universe)?,
            &eval_kernel(graph, b, universe)?,
        )?,
        K::Eg(a) => eg(graph, &eval_kernel(graph, a, universe)?)?,
    };
    Ok(result)
}

/// Sorted vector view of a satisfaction set, convenient for assertions and
/// CLI printing.
pub fn sorted(set: &StateSet) -> Vec<StateId> {
    set.to_vec()
}
