//! The world: the scheduler's sole shared mutable resource.
//!
//! A `World` bundles every actor, every channel, the logical clock, the
//! event log, and the seeded PRNG driving random step selection. The
//! scheduler owns exclusive mutable access during a step; no step may
//! observe another step mid-execution, and there is no real parallelism —
//! concurrency is modeled purely by interleaving.

use crate::actor::{Actor, BlockedOn, ChannelOp, Step};
use crate::channel::Channel;
use crate::message::{Address, Event, Message};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// The mutable simulation state driven by the scheduler.
pub struct World {
    actors: Vec<Box<dyn Actor>>,
    channels: HashMap<Address, Channel>,
    time: u64,
    events: Vec<Event>,
    rng: StdRng,
    next_msg_id: u64,
}

impl World {
    /// Creates a new world with the given actors and channels, seeding a
    /// reproducible PRNG (`rand`'s `StdRng`, seeded deterministically —
    /// two worlds built with the same seed produce identical step
    /// sequences).
    pub fn new(actors: Vec<Box<dyn Actor>>, channels: Vec<Channel>, seed: u64) -> Self {
        let channels = channels
            .into_iter()
            .map(|c| (c.address().clone(), c))
            .collect();
        World {
            actors,
            channels,
            time: 0,
            events: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            next_msg_id: 0,
        }
    }

    /// The current logical clock, advanced by exactly one per executed
    /// step.
    pub fn time(&self) -> u64 {
        self.time
    }

    /// All actors, in the insertion order used to break selection ties.
    pub fn actors(&self) -> &[Box<dyn Actor>] {
        &self.actors
    }

    /// Mutable access to actors, used by a step's `mutate` closure to
    /// replace an actor's boxed local state (actors are immutable values
    /// behind the box, not `RefCell`-wrapped, so "mutating" an actor means
    /// substituting a new boxed value with updated fields).
    pub fn actors_mut(&mut self) -> &mut [Box<dyn Actor>] {
        &mut self.actors
    }

    /// Looks up a channel by address.
    pub fn channel(&self, addr: &Address) -> Option<&Channel> {
        self.channels.get(addr)
    }

    /// All channels by address, used by enumerative extraction to hash a
    /// configuration.
    pub fn channels(&self) -> &HashMap<Address, Channel> {
        &self.channels
    }

    /// Clones every actor's local state and every channel, forking a new
    /// world with the same clock, event log, and RNG stream. Used by
    /// enumerative state-space extraction, which must apply every enabled
    /// step from the same configuration without the steps interfering
    /// with one another.
    pub(crate) fn fork(&self) -> World {
        World {
            actors: self.actors.iter().map(|a| a.clone_actor()).collect(),
            channels: self.channels.clone(),
            time: self.time,
            events: self.events.clone(),
            rng: self.rng.clone(),
            next_msg_id: self.next_msg_id,
        }
    }

    /// The ordered event log accumulated so far.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Enqueues `payload` from `from` onto `to`, stamping `enqueue_time`
    /// with the current clock. Panics (`ChannelOverflow`) if the target
    /// channel is full — callers must only reach this after an
    /// enabledness check, which `step_random` guarantees.
    pub fn send_message(&mut self, from: Address, to: Address, payload: serde_json::Value) -> Message {
        let msg = Message {
            from,
            to: to.clone(),
            payload,
            enqueue_time: self.time,
        };
        let channel = self
            .channels
            .get_mut(&to)
            .unwrap_or_else(|| panic!("send to unknown channel {}", to));
        channel.try_send(msg.clone());
        msg
    }

    /// Dequeues the oldest message from `channel`, appending an [`Event`]
    /// recording its queue delay. Panics (`ChannelUnderflow`) if the
    /// channel is empty.
    pub fn recv_and_log(&mut self, channel: &Address) -> Message {
        let msg = self
            .channels
            .get_mut(channel)
            .unwrap_or_else(|| panic!("recv from unknown channel {}", channel))
            .try_recv();
        let id = self.next_msg_id;
        self.next_msg_id += 1;
        let event = Event {
            time: self.time,
            msg_id: id,
            from: msg.from.clone(),
            to: msg.to.clone(),
            enqueue_time: msg.enqueue_time,
        };
        self.events.push(event);
        msg
    }

    fn is_enabled(&self, op: &ChannelOp) -> bool {
        match op {
            ChannelOp::None => true,
            ChannelOp::Send { to, .. } => self.channel(to).map(|c| c.can_send()).unwrap_or(false),
            ChannelOp::Recv { from } => self.channel(from).map(|c| c.can_recv()).unwrap_or(false),
        }
    }

    /// Enumerates every candidate step from every actor, concatenated in
    /// actor-insertion then step-index order, and filters to those whose
    /// channel preconditions currently hold. `pub(crate)` so the
    /// enumerative state-space extractor can enumerate every enabled step
    /// rather than randomly selecting one.
    pub(crate) fn enabled_candidates(&self) -> Vec<Step> {
        let mut candidates = Vec::new();
        for actor in &self.actors {
            for step in actor.ready(self) {
                if self.is_enabled(&step.op) {
                    candidates.push(step);
                }
            }
        }
        candidates
    }

    /// Executes one step chosen uniformly at random from the enabled
    /// candidates. Returns `false` if no step is enabled (the caller
    /// distinguishes quiescence from deadlock by inspecting
    /// [`Actor::blocked_on`] across all actors).
    pub fn step_random(&mut self) -> bool {
        let mut candidates = self.enabled_candidates();
        if candidates.is_empty() {
            return false;
        }
        let idx = self.rng.gen_range(0..candidates.len());
        let step = candidates.swap_remove(idx);
        self.execute(step);
        true
    }

    /// Applies a specific step (bypassing random selection). Used by
    /// `step_random` and by the enumerative extractor, which applies every
    /// enabled step to its own cloned world rather than picking one.
    pub(crate) fn execute(&mut self, step: Step) {
        let actor_id = step.actor_id.clone();
        let label = step.label.clone();
        match step.op {
            ChannelOp::Send { to, payload } => {
                let from = Address::new(actor_id.clone(), to.channel_name.clone());
                self.send_message(from, to, payload);
            }
            ChannelOp::Recv { from } => {
                self.recv_and_log(&from);
            }
            ChannelOp::None => {}
        }
        (step.mutate)(self);
        self.time += 1;
        tracing::debug!(actor = %actor_id, step = %label, time = self.time, "step executed");
    }

    /// Actors currently blocked, per their own [`Actor::blocked_on`]
    /// report. Used by the scheduler driver to classify a run's terminal
    /// outcome once no step is enabled.
    pub fn blocked_actors(&self) -> Vec<BlockedOn> {
        self.actors.iter().filter_map(|a| a.blocked_on(self)).collect()
    }
}
