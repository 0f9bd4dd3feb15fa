//! Enumerative state-space extraction: turns a [`World`] into a
//! [`kripke_graph::Graph`] by breadth-first exploration of every reachable
//! configuration, rather than driving one random run.
//!
//! Unlike [`crate::scheduler::run`], which advances a single `World` by
//! picking one enabled step at random, extraction must apply *every*
//! enabled step from each configuration without the branches interfering
//! with one another — hence [`World::fork`] rather than in-place mutation.

use crate::world::World;
use kripke_graph::{Graph, Proposition, StateId};
use std::collections::{BTreeMap, HashMap, VecDeque};

/// Canonicalizes a world's configuration to a string key. The Kripke
/// state is built from observable world state: actor-local state and
/// channel contents, sorted for a stable key. `time`,
/// the event log, and the RNG stream are deliberately excluded — they are
/// not part of the Kripke state, and a message's `enqueue_time` is stripped
/// for the same reason (it is a function of the excluded clock).
fn configuration_key(world: &World) -> String {
    let actors: BTreeMap<&str, serde_json::Value> = world
        .actors()
        .iter()
        .map(|a| (a.id(), a.snapshot()))
        .collect();

    let channels: BTreeMap<String, Vec<serde_json::Value>> = world
        .channels()
        .iter()
        .map(|(addr, channel)| {
            let contents: Vec<serde_json::Value> = channel
                .queue_contents()
                .map(|m| serde_json::json!({"from": m.from, "to": m.to, "payload": m.payload}))
                .collect();
            (addr.to_string(), contents)
        })
        .collect();

    serde_json::to_string(&serde_json::json!({"actors": actors, "channels": channels}))
        .expect("configuration snapshot must serialize")
}

/// Explores every configuration reachable from `initial`, breadth-first,
/// building a [`Graph`] whose states are the distinct configurations and
/// whose labels come from `label_fn`.
///
/// Exploration stops once `max_states` distinct configurations have been
/// discovered; any configuration still queued at that point is left
/// unexpanded and its outgoing transitions are dropped from the result, a
/// fact logged at `warn` level since it means the returned graph is a
/// possibly-incomplete approximation of the true reachable set.
pub fn enumerate(
    initial: World,
    max_states: usize,
    label_fn: impl Fn(&World) -> Vec<Proposition>,
) -> Graph {
    let mut seen: HashMap<String, StateId> = HashMap::new();
    let mut queue: VecDeque<(World, StateId)> = VecDeque::new();

    let initial_key = configuration_key(&initial);
    let mut graph = Graph::new(0u32);
    let initial_id = graph.initial();
    seen.insert(initial_key, initial_id);
    for p in label_fn(&initial) {
        graph.add_label(initial_id, p);
    }
    queue.push_back((initial, initial_id));

    let mut dropped = 0usize;
    tracing::info!(max_states, "enumerative extraction starting");

    while let Some((world, from_id)) = queue.pop_front() {
        if seen.len() >= max_states {
            dropped += 1;
            continue;
        }

        for step in world.enabled_candidates() {
            let mut next = world.fork();
            next.execute(step);
            let next_key = configuration_key(&next);

            let next_id = match seen.get(&next_key) {
                Some(id) => *id,
                None => {
                    if seen.len() >= max_states {
                        dropped += 1;
                        continue;
                    }
                    let id = graph.fresh_state();
                    for p in label_fn(&next) {
                        graph.add_label(id, p);
                    }
                    seen.insert(next_key, id);
                    queue.push_back((next, id));
                    id
                }
            };

            graph.add_transition(from_id, next_id);
        }
    }

    if dropped > 0 {
        tracing::warn!(
            dropped,
            discovered = seen.len(),
            "extraction hit max_states; graph is a partial approximation"
        );
    }
    tracing::info!(states = seen.len(), "enumerative extraction finished");
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{Actor, BlockedOn, ChannelOp, Step};
    use crate::channel::Channel;
    use crate::message::Address;

    /// Two-state counter: idle <-> fired, toggled by a single local step.
    /// Its reachable configuration graph is a two-state cycle.
    #[derive(Clone)]
    struct Toggle {
        fired: bool,
    }

    impl Actor for Toggle {
        fn id(&self) -> &str {
            "toggle"
        }

        fn ready(&self, _world: &World) -> Vec<Step> {
            let next = !self.fired;
            vec![Step::local("toggle", "flip", move |w| {
                // The world holds actors as trait objects; extraction
                // forks per-candidate so each branch mutates its own copy.
                for a in w.actors_mut() {
                    if a.id() == "toggle" {
                        *a = Box::new(Toggle { fired: next });
                    }
                }
            })]
        }

        fn blocked_on(&self, _world: &World) -> Option<BlockedOn> {
            None
        }

        fn snapshot(&self) -> serde_json::Value {
            serde_json::json!({"fired": self.fired})
        }

        fn clone_actor(&self) -> Box<dyn Actor> {
            Box::new(self.clone())
        }
    }

    fn fired_prop() -> Proposition {
        Proposition::from("fired")
    }

    #[test]
    fn toggle_extracts_to_two_state_cycle() {
        let world = World::new(vec![Box::new(Toggle { fired: false })], vec![], 1);
        let graph = enumerate(world, 10, |w| {
            if w.actors()[0].snapshot()["fired"].as_bool().unwrap_or(false) {
                vec![fired_prop()]
            } else {
                vec![]
            }
        });

        assert_eq!(graph.len(), 2);
        assert!(!graph.is_sink(graph.initial()).unwrap());
        let succ = graph.successors(graph.initial()).unwrap();
        assert_eq!(succ.len(), 1);
    }

    #[test]
    fn deadlocked_pair_extracts_to_a_single_sink_state() {
        let a_inbox = Address::new("a", "inbox");
        let b_inbox = Address::new("b", "inbox");

        struct StuckReceiver {
            id: String,
            peer_channel: Address,
        }
        impl Actor for StuckReceiver {
            fn id(&self) -> &str {
                &self.id
            }
            fn ready(&self, world: &World) -> Vec<Step> {
                if world
                    .channel(&self.peer_channel)
                    .map(|c| c.can_recv())
                    .unwrap_or(false)
                {
                    vec![Step::new(
                        self.id.clone(),
                        "recv",
                        ChannelOp::Recv {
                            from: self.peer_channel.clone(),
                        },
                        |_w| {},
                    )]
                } else {
                    vec![]
                }
            }
            fn snapshot(&self) -> serde_json::Value {
                serde_json::json!({})
            }
            fn clone_actor(&self) -> Box<dyn Actor> {
                Box::new(StuckReceiver {
                    id: self.id.clone(),
                    peer_channel: self.peer_channel.clone(),
                })
            }
        }

        let actors: Vec<Box<dyn Actor>> = vec![
            Box::new(StuckReceiver {
                id: "a".to_string(),
                peer_channel: b_inbox.clone(),
            }),
            Box::new(StuckReceiver {
                id: "b".to_string(),
                peer_channel: a_inbox.clone(),
            }),
        ];
        let channels = vec![Channel::new(a_inbox, 1), Channel::new(b_inbox, 1)];
        let world = World::new(actors, channels, 1);

        let graph = enumerate(world, 10, |_w| vec![]);
        assert_eq!(graph.len(), 1);
        assert!(graph.is_sink(graph.initial()).unwrap());
    }
}
