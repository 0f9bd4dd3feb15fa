//! Channel addresses, messages, and the post-hoc event log.

use serde::{Deserialize, Serialize};

/// A globally unique channel address: `(actor_id, channel_name)`.
///
/// By naming convention the channel is owned by its receiving actor, but
/// any actor may read another channel's metadata (`can_send`/`can_recv`/
/// `len`) to decide a guard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    /// The owning actor's id.
    pub actor_id: String,
    /// The channel's name within that actor.
    pub channel_name: String,
}

impl Address {
    /// Builds a new channel address.
    pub fn new(actor_id: impl Into<String>, channel_name: impl Into<String>) -> Self {
        Address {
            actor_id: actor_id.into(),
            channel_name: channel_name.into(),
        }
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.actor_id, self.channel_name)
    }
}

/// A message in flight or resting in a channel's queue.
///
/// `payload` is intentionally opaque (`serde_json::Value`) — actors agree
/// on its shape out of band, the scheduler never inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub from: Address,
    pub to: Address,
    pub payload: serde_json::Value,
    pub enqueue_time: u64,
}

/// A log entry recording when a message was dequeued and how long it
/// waited in its channel. Events are not part of the Kripke state — they
/// exist purely for post-hoc analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub time: u64,
    pub msg_id: u64,
    pub from: Address,
    pub to: Address,
    pub enqueue_time: u64,
}

impl Event {
    /// `queue_delay = time - enqueue_time`, always non-negative by
    /// construction since `enqueue_time <= time`.
    pub fn queue_delay(&self) -> u64 {
        self.time - self.enqueue_time
    }
}
