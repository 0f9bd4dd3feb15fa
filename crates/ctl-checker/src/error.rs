//! Error types for the model checker.
//!
//! The checker is total over finite, well-formed inputs: the only
//! failure mode is a caller error referencing a state outside the graph.
//! An unknown atomic proposition is *not* an error — it is treated as
//! always-false.

/// Result type alias for `ctl-checker` operations.
pub type Result<T> = std::result::Result<T, CheckError>;

/// Errors produced while computing a satisfaction set.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CheckError {
    /// The graph rejected a query against an unknown state — propagated
    /// from `kripke-graph`. Can only occur if the caller asks `holds` to
    /// be evaluated against a graph whose `initial()` was somehow removed,
    /// which the builder API prevents; kept for completeness and for
    /// downstream collaborators that construct graphs directly.
    #[error("unknown state: {0}")]
    UnknownState(#[from] kripke_graph::GraphError),
}
