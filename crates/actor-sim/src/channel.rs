//! Bounded FIFO channels.
//!
//! Implemented as a fixed-capacity ring buffer (a `VecDeque` used
//! FIFO-only) with non-blocking `try_send`/`try_recv`. The scheduler's
//! enabledness check and a step's actual send/recv share this same buffer
//! without locking — the world has exactly one owner at a time in the
//! single-threaded cooperative model, so no synchronization is needed.

use crate::message::{Address, Message};
use serde::Serialize;
use std::collections::VecDeque;

/// A bounded FIFO queue of [`Message`]s, owned by its receiving actor by
/// naming convention.
#[derive(Debug, Clone, Serialize)]
pub struct Channel {
    address: Address,
    capacity: usize,
    queue: VecDeque<Message>,
}

impl Channel {
    /// Creates an empty channel with the given positive capacity.
    pub fn new(address: Address, capacity: usize) -> Self {
        assert!(capacity > 0, "channel capacity must be positive");
        Channel {
            address,
            capacity,
            queue: VecDeque::with_capacity(capacity),
        }
    }

    /// This channel's address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// This channel's fixed capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of queued messages.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// `CanSend ⇔ |queue| < capacity`.
    pub fn can_send(&self) -> bool {
        self.queue.len() < self.capacity
    }

    /// `CanRecv ⇔ |queue| > 0`.
    pub fn can_recv(&self) -> bool {
        !self.queue.is_empty()
    }

    /// The queued messages, oldest first. Used by enumerative extraction to
    /// fold channel contents into a configuration key.
    pub fn queue_contents(&self) -> impl Iterator<Item = &Message> {
        self.queue.iter()
    }

    /// Enqueues a message. Only called after `can_send` has been checked
    /// by the scheduler as part of enabledness; violating that invariant
    /// is a programmer error and panics rather than returning an error.
    pub fn try_send(&mut self, msg: Message) {
        assert!(
            self.can_send(),
            "ChannelOverflow: send to full channel {} (capacity {})",
            self.address,
            self.capacity
        );
        self.queue.push_back(msg);
    }

    /// Dequeues the oldest message (FIFO). Same non-blocking contract as
    /// [`Channel::try_send`]: calling this when `can_recv()` is false is a
    /// fatal programmer error.
    pub fn try_recv(&mut self) -> Message {
        self.queue.pop_front().unwrap_or_else(|| {
            panic!(
                "ChannelUnderflow: recv from empty channel {}",
                self.address
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr() -> Address {
        Address::new("consumer", "inbox")
    }

    fn msg(n: u64) -> Message {
        Message {
            from: Address::new("producer", "inbox"),
            to: addr(),
            payload: serde_json::json!(n),
            enqueue_time: n,
        }
    }

    #[test]
    fn respects_capacity() {
        let mut ch = Channel::new(addr(), 2);
        assert!(ch.can_send());
        ch.try_send(msg(0));
        ch.try_send(msg(1));
        assert!(!ch.can_send());
        assert_eq!(ch.len(), 2);
    }

    #[test]
    fn is_fifo() {
        let mut ch = Channel::new(addr(), 3);
        ch.try_send(msg(0));
        ch.try_send(msg(1));
        ch.try_send(msg(2));
        assert_eq!(ch.try_recv().enqueue_time, 0);
        assert_eq!(ch.try_recv().enqueue_time, 1);
        assert_eq!(ch.try_recv().enqueue_time, 2);
    }

    #[test]
    #[should_panic(expected = "ChannelOverflow")]
    fn send_to_full_channel_is_fatal() {
        let mut ch = Channel::new(addr(), 1);
        ch.try_send(msg(0));
        ch.try_send(msg(1));
    }

    #[test]
    #[should_panic(expected = "ChannelUnderflow")]
    fn recv_from_empty_channel_is_fatal() {
        let mut ch = Channel::new(addr(), 1);
        ch.try_recv();
    }
}
