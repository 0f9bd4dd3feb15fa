//! A dense bitset of [`StateId`]s, used as the working-set representation
//! for satisfaction sets.
//!
//! A bitset indexed by a dense state id is the natural representation for
//! dense graphs; `kripke-graph` assigns ids densely by
//! default (via `fresh_state`), but the builder API also allows a caller
//! to choose arbitrary, possibly sparse ids. [`StateSet`] sizes its bitset
//! to `Graph::capacity()` (one past the largest id ever seen) rather than
//! `Graph::len()` so indexing by raw `StateId` is always safe; complement
//! is taken relative to an explicit universe (the graph's actual state
//! set), not "every index in range", so sparse ids never leak spurious
//! members into a complemented set.

use kripke_graph::{Graph, StateId};
use std::fmt;

/// A set of states represented as a dense bitset.
#[derive(Clone, PartialEq, Eq)]
pub struct StateSet {
    bits: fixedbitset::FixedBitSet,
}

impl StateSet {
    /// The empty set, sized to index any state id up to `capacity - 1`.
    pub fn empty(capacity: usize) -> Self {
        StateSet {
            bits: fixedbitset::FixedBitSet::with_capacity(capacity),
        }
    }

    /// The set of all states actually present in `graph` (not every index
    /// in `0..graph.capacity()` — those may include gaps from sparse ids).
    pub fn all(graph: &Graph) -> Self {
        let mut bits = fixedbitset::FixedBitSet::with_capacity(graph.capacity());
        for s in graph.states() {
            bits.insert(s.index());
        }
        StateSet { bits }
    }

    /// Inserts a state into the set.
    pub fn insert(&mut self, s: StateId) {
        self.bits.insert(s.index());
    }

    /// Removes a state from the set.
    pub fn remove(&mut self, s: StateId) {
        self.bits.set(s.index(), false);
    }

    /// Whether `s` is a member.
    pub fn contains(&self, s: StateId) -> bool {
        self.bits.contains(s.index())
    }

    /// Number of member states.
    pub fn count(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Set union.
    pub fn union(&self, other: &StateSet) -> StateSet {
        let mut out = self.clone();
        out.bits.union_with(&other.bits);
        out
    }

    /// Set intersection.
    pub fn intersect(&self, other: &StateSet) -> StateSet {
        let mut out = self.clone();
        out.bits.intersect_with(&other.bits);
        out
    }

    /// Complement relative to `universe` (typically [`StateSet::all`] for
    /// the graph being checked).
    pub fn complement_in(&self, universe: &StateSet) -> StateSet {
        let mut out = universe.clone();
        out.bits.difference_with(&self.bits);
        out
    }

    /// Iterates member states in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.bits.ones().map(|i| StateId(i as u32))
    }

    /// Collects member states into a `Vec`, ascending order.
    pub fn to_vec(&self) -> Vec<StateId> {
        self.iter().collect()
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
