//! The `Actor` capability and the `Step` values it produces.
//!
//! An actor exposes a single capability, `ready`, which is a pure function
//! of observable world state: it returns the candidate steps whose
//! non-channel guards already hold. Represented as a trait rather than an
//! inheritance hierarchy — each concrete actor owns its local state behind
//! interior mutability (`Rc<RefCell<_>>`) so its steps can capture a
//! handle to that state in a closure without borrowing `&mut self` across
//! the `ready`/`apply` boundary.

use crate::message::Address;
use crate::world::World;
use serde_json::Value;

/// The channel precondition (and, for `Send`, payload) a step carries.
/// The scheduler checks this against current channel state to decide
/// enabledness; non-channel guards are the actor's own responsibility and
/// are assumed true by the time a step is returned from `ready`.
#[derive(Debug, Clone)]
pub enum ChannelOp {
    /// No channel operation — a purely local state transition.
    None,
    /// Enqueue `payload` onto `to`. Enabled iff `to.can_send()`.
    Send { to: Address, payload: Value },
    /// Dequeue the next message from `from`. Enabled iff `from.can_recv()`.
    Recv { from: Address },
}

/// A candidate atomic action: a declared channel operation (or none) plus
/// a closure performing the actor's own local-state mutation. The
/// scheduler, not the closure, performs the declared channel operation —
/// this keeps the enabledness check and the actual effect from ever
/// disagreeing.
pub struct Step {
    pub(crate) actor_id: String,
    pub(crate) label: String,
    pub(crate) op: ChannelOp,
    pub(crate) mutate: Box<dyn FnOnce(&mut World) + Send>,
}

impl Step {
    /// Builds a step with an explicit channel operation.
    pub fn new(
        actor_id: impl Into<String>,
        label: impl Into<String>,
        op: ChannelOp,
        mutate: impl FnOnce(&mut World) + Send + 'static,
    ) -> Self {
        Step {
            actor_id: actor_id.into(),
            label: label.into(),
            op,
            mutate: Box::new(mutate),
        }
    }

    /// Convenience for a step with no channel operation.
    pub fn local(
        actor_id: impl Into<String>,
        label: impl Into<String>,
        mutate: impl FnOnce(&mut World) + Send + 'static,
    ) -> Self {
        Step::new(actor_id, label, ChannelOp::None, mutate)
    }

    /// The channel precondition this step declares.
    pub fn op(&self) -> &ChannelOp {
        &self.op
    }

    /// Human-readable label, used for logging and event descriptions.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// What an actor with no enabled step this round is blocked on, used only
/// to distinguish a `Deadlock` terminal outcome from plain quiescence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedOn {
    pub actor_id: String,
    pub descriptor: String,
}

impl BlockedOn {
    /// `recv (empty)` descriptor, matching the vocabulary an explicit
    /// blocked/runnable lifecycle scheduler would use for the same state.
    pub fn recv_empty(actor_id: impl Into<String>) -> Self {
        BlockedOn {
            actor_id: actor_id.into(),
            descriptor: "recv (empty)".to_string(),
        }
    }

    /// `send-to <target> (full)` descriptor.
    pub fn send_full(actor_id: impl Into<String>, target: &Address) -> Self {
        BlockedOn {
            actor_id: actor_id.into(),
            descriptor: format!("send-to {} (full)", target),
        }
    }
}

/// A communicating state machine: local state plus a pure `ready`
/// function enumerating candidate steps.
pub trait Actor: Send {
    /// This actor's unique id.
    fn id(&self) -> &str;

    /// Returns the steps whose guards hold in `world`, in a stable order
    /// (step index order is part of the scheduler's deterministic
    /// candidate ordering).
    fn ready(&self, world: &World) -> Vec<Step>;

    /// Describes what this actor is blocked on, if anything, when it
    /// contributes no enabled step this round. Used only for classifying
    /// a terminal `Deadlock` vs. plain quiescence. Default: not blocked
    /// (an actor with no steps to offer this round isn't necessarily
    /// stuck — it may simply have nothing to do).
    fn blocked_on(&self, _world: &World) -> Option<BlockedOn> {
        None
    }

    /// A serializable snapshot of local state, used only by enumerative
    /// state-space extraction to hash a world configuration to a
    /// [`kripke_graph::StateId`]. Not called during random stepping.
    fn snapshot(&self) -> Value;

    /// Clones this actor, including local state, so the enumerative
    /// extractor can fork a world and apply every enabled step to its own
    /// independent copy.
    fn clone_actor(&self) -> Box<dyn Actor>;
}
