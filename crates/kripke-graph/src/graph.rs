//! Core Kripke structure: states, transitions, and atomic-proposition labels.
//!
//! A [`Graph`] is built incrementally through a mutable builder API and is
//! then handed to the model checker as a read-only structure. Nothing in
//! this module enforces immutability at the type level — mutation after
//! checking begins is undefined behavior, not a checked error — but no
//! API here is ever called by the checker in a way that mutates the
//! graph.
//!
//! # Example
//!
//! ```
//! use kripke_graph::{Graph, Proposition};
//!
//! let mut g = Graph::new(0);
//! g.add_transition(0, 1);
//! g.add_transition(1, 0);
//! g.add_label(0, Proposition::from("p"));
//!
//! assert_eq!(g.successors(1).unwrap(), &[0]);
//! assert!(g.has_label(0, &Proposition::from("p")).unwrap());
//! ```

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Opaque, dense state identifier, unique within one graph.
///
/// Assigned in insertion order starting at 0, which lets a checker index a
/// bitset by `StateId` directly rather than maintaining a separate id map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(pub u32);

impl StateId {
    /// Returns the dense index usable for bitset/array indexing.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s{}", self.0)
    }
}

impl From<u32> for StateId {
    fn from(v: u32) -> Self {
        StateId(v)
    }
}

/// An atomic proposition symbol drawn from a finite alphabet.
///
/// Interned as a cheaply-clonable `Arc<str>` since the same proposition
/// typically labels many states and is compared often during checking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Proposition(Arc<str>);

impl Proposition {
    /// Creates a new atomic proposition from its symbol name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Proposition(name.into())
    }

    /// Returns the proposition's symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Proposition {
    fn from(s: &str) -> Self {
        Proposition::new(s)
    }
}

impl From<String> for Proposition {
    fn from(s: String) -> Self {
        Proposition::new(s)
    }
}

impl std::fmt::Display for Proposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A finite Kripke structure: states, a transition relation, and a
/// proposition-labeling function.
///
/// # Invariants
///
/// - Every successor in `transitions` also appears in `states`.
/// - `initial` is a member of `states`.
/// - `labeling` is defined (possibly with an empty set) for every state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    states: Vec<StateId>,
    initial: StateId,
    transitions: HashMap<StateId, Vec<StateId>>,
    labeling: HashMap<StateId, HashSet<Proposition>>,
    next_id: u32,
}

impl Graph {
    /// Creates a new graph with a single state that is both added and
    /// marked initial.
    pub fn new(initial: impl Into<StateId>) -> Self {
        let initial = initial.into();
        let mut g = Graph {
            states: Vec::new(),
            initial,
            transitions: HashMap::new(),
            labeling: HashMap::new(),
            next_id: 0,
        };
        g.insert_state(initial);
        g
    }

    fn insert_state(&mut self, s: StateId) {
        if !self.transitions.contains_key(&s) && !self.states.contains(&s) {
            self.states.push(s);
            self.transitions.entry(s).or_default();
            self.labeling.entry(s).or_default();
            self.next_id = self.next_id.max(s.0 + 1);
        }
    }

    /// Idempotently inserts a state.
    pub fn add_state(&mut self, s: impl Into<StateId>) {
        let s = s.into();
        self.insert_state(s);
        tracing::trace!(state = %s, "added state");
    }

    /// Allocates and adds a fresh state id, returning it. Convenience for
    /// callers that don't want to manage ids themselves (the scheduler's
    /// enumerative driver uses this).
    pub fn fresh_state(&mut self) -> StateId {
        let id = StateId(self.next_id);
        self.insert_state(id);
        id
    }

    /// Inserts a transition `from -> to`, inserting either endpoint if
    /// absent. Duplicate transitions are allowed and preserved in order.
    pub fn add_transition(&mut self, from: impl Into<StateId>, to: impl Into<StateId>) {
        let from = from.into();
        let to = to.into();
        self.insert_state(from);
        self.insert_state(to);
        self.transitions.entry(from).or_default().push(to);
        tracing::trace!(from = %from, to = %to, "added transition");
    }

    /// Adds a proposition to a state's label set (idempotent set
    /// semantics). Inserts the state if absent.
    pub fn add_label(&mut self, s: impl Into<StateId>, p: impl Into<Proposition>) {
        let s = s.into();
        self.insert_state(s);
        self.labeling.entry(s).or_default().insert(p.into());
    }

    /// Returns whether `p` is in `s`'s label set.
    pub fn has_label(&self, s: impl Into<StateId>, p: &Proposition) -> Result<bool> {
        let s = s.into();
        self.labeling
            .get(&s)
            .map(|set| set.contains(p))
            .ok_or(GraphError::UnknownState(s))
    }

    /// Returns the label set of a state.
    pub fn labels(&self, s: impl Into<StateId>) -> Result<&HashSet<Proposition>> {
        let s = s.into();
        self.labeling.get(&s).ok_or(GraphError::UnknownState(s))
    }

    /// Returns the ordered successor list of a state; empty if `s` is a
    /// sink. Transition order is observable and must be preserved — it
    /// feeds the scheduler's reproducible random selection when a graph is
    /// used downstream of enumerative extraction.
    pub fn successors(&self, s: impl Into<StateId>) -> Result<&[StateId]> {
        let s = s.into();
        self.transitions
            .get(&s)
            .map(|v| v.as_slice())
            .ok_or(GraphError::UnknownState(s))
    }

    /// Returns whether `s` has no successors.
    pub fn is_sink(&self, s: impl Into<StateId>) -> Result<bool> {
        Ok(self.successors(s)?.is_empty())
    }

    /// The distinguished initial state.
    pub fn initial(&self) -> StateId {
        self.initial
    }

    /// All states, in insertion order.
    pub fn states(&self) -> &[StateId] {
        &self.states
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// The smallest capacity a dense bitset must have to index every state
    /// id this graph has ever seen (one past the largest `StateId` value
    /// used). States are not required to be contiguous — a caller may
    /// skip ids — so this can exceed [`Graph::len`].
    pub fn capacity(&self) -> usize {
        self.next_id as usize
    }

    /// Whether the graph has no states (never true after `new`, exposed
    /// for API completeness).
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns true iff `s` is a member of this graph's state set.
    pub fn contains(&self, s: impl Into<StateId>) -> bool {
        self.transitions.contains_key(&s.into())
    }

    /// Serializes the graph to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| GraphError::Serde(e.to_string()))
    }

    /// Deserializes a graph from a JSON string, as produced by [`Graph::to_json`].
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| GraphError::Serde(e.to_string()))
    }

    /// Serializes the graph to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| GraphError::Serde(e.to_string()))
    }

    /// Deserializes a graph from a YAML string, as produced by [`Graph::to_yaml`].
    pub fn from_yaml(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).map_err(|e| GraphError::Serde(e.to_string()))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Arbitrary sequence of `(from, to)` pairs over a small, fixed state
    /// universe, inserted one at a time via `add_transition`.
    fn arb_insertions() -> impl Strategy<Value = Vec<(u32, u32)>> {
        prop::collection::vec((0u32..6, 0u32..6), 0..20)
    }

    proptest! {
        /// Transition order is observable (the scheduler's enumerative
        /// extraction feeds successor order into reproducible random
        /// selection), so `successors` must replay insertions in the exact
        /// order they were added, duplicates included, regardless of how
        /// many distinct states were interleaved in between.
        #[test]
        fn successors_preserve_insertion_order(insertions in arb_insertions()) {
            let mut g = Graph::new(0);
            let mut expected: std::collections::HashMap<u32, Vec<u32>> = std::collections::HashMap::new();
            for (from, to) in &insertions {
                g.add_transition(*from, *to);
                expected.entry(*from).or_default().push(*to);
            }
            for (from, wants) in &expected {
                let got: Vec<u32> = g.successors(*from).unwrap().iter().map(|s| s.0).collect();
                prop_assert_eq!(&got, wants);
            }
        }
    }
}
