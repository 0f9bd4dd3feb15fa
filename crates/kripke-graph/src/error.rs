//! Error types for Kripke graph queries.
//!
//! Construction (`add_state`, `add_transition`, `add_label`) is infallible —
//! missing endpoints are auto-inserted, per the graph's own contract. Only
//! queries handed a state id from elsewhere (the checker, an external
//! collaborator) can fail.

/// Result type alias for `kripke-graph` operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors produced by read operations over a [`crate::Graph`].
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GraphError {
    /// A query referenced a state id that does not exist in the graph.
    #[error("unknown state: {0:?}")]
    UnknownState(crate::StateId),

    /// A JSON or YAML round-trip failed. The underlying `serde_json`/
    /// `serde_yaml` error is not `PartialEq`, so it is flattened to its
    /// display string.
    #[error("serialization error: {0}")]
    Serde(String),
}
