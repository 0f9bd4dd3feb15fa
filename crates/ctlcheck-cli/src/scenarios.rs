//! The stock scenario catalog: small hand-built Kripke structures and
//! actor worlds used by `scenario list|check|run`.

use ctl_formula::Formula;
use kripke_graph::Graph;
use std::cell::RefCell;
use std::rc::Rc;

use actor_sim::{Actor, Address, BlockedOn, Channel, ChannelOp, Step, World};

/// A named scenario together with the stock formula battery `scenario
/// check` evaluates against it.
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
}

pub const CATALOG: &[Scenario] = &[
    Scenario {
        name: "traffic-light",
        description: "Three-state cycle red -> green -> yellow -> red",
    },
    Scenario {
        name: "mutual-exclusion",
        description: "Two processes, a shared lock, AG of no double entry",
    },
    Scenario {
        name: "three-state-cycle",
        description: "Minimal cycle used to pin AF/EG fixed-point behavior",
    },
    Scenario {
        name: "sink",
        description: "A terminal state exercising AX/EG sink semantics",
    },
    Scenario {
        name: "producer-consumer",
        description: "Bounded-channel producer/consumer actor run",
    },
    Scenario {
        name: "deadlock",
        description: "Two actors each waiting on the other's empty channel",
    },
];

/// Builds the named Kripke-graph scenario plus its stock formula battery.
/// Returns `None` for actor-only scenarios (`producer-consumer`,
/// `deadlock`), which `scenario check` has no graph to evaluate against.
pub fn graph_scenario(name: &str) -> Option<(Graph, Vec<(&'static str, Formula)>)> {
    match name {
        "traffic-light" => Some(traffic_light()),
        "mutual-exclusion" => Some(mutual_exclusion()),
        "three-state-cycle" => Some(three_state_cycle()),
        "sink" => Some(sink()),
        _ => None,
    }
}

fn traffic_light() -> (Graph, Vec<(&'static str, Formula)>) {
    let mut g = Graph::new(0u32);
    g.add_transition(0u32, 1u32);
    g.add_transition(1u32, 2u32);
    g.add_transition(2u32, 0u32);
    g.add_label(0u32, "red");
    g.add_label(1u32, "green");
    g.add_label(2u32, "yellow");

    let battery = vec![
        ("AG (red -> AF green)", Formula::ap("red").implies(Formula::ap("green").af()).ag()),
        ("EF green", Formula::ap("green").ef()),
        ("AG EX true", Formula::tru().ex().ag()),
    ];
    (g, battery)
}

fn mutual_exclusion() -> (Graph, Vec<(&'static str, Formula)>) {
    // 8 states: (p1 in {idle, waiting, critical}) x (p2 in {idle, waiting,
    // critical}), pruned to the 8 reachable under a single shared lock.
    let mut g = Graph::new(0u32);
    let idle_idle = 0u32;
    let wait_idle = 1u32;
    let idle_wait = 2u32;
    let crit_idle = 3u32;
    let idle_crit = 4u32;
    let wait_wait = 5u32;
    let crit_wait = 6u32;
    let wait_crit = 7u32;

    g.add_transition(idle_idle, wait_idle);
    g.add_transition(idle_idle, idle_wait);
    g.add_transition(wait_idle, crit_idle);
    g.add_transition(wait_idle, wait_wait);
    g.add_transition(idle_wait, idle_crit);
    g.add_transition(idle_wait, wait_wait);
    g.add_transition(crit_idle, idle_idle);
    g.add_transition(idle_crit, idle_idle);
    g.add_transition(wait_wait, crit_wait);
    g.add_transition(wait_wait, wait_crit);
    g.add_transition(crit_wait, idle_wait);
    g.add_transition(wait_crit, wait_idle);

    g.add_label(crit_idle, "critical1");
    g.add_label(crit_wait, "critical1");
    g.add_label(idle_crit, "critical2");
    g.add_label(wait_crit, "critical2");

    let battery = vec![(
        "AG !(critical1 & critical2)",
        Formula::ap("critical1").and(Formula::ap("critical2")).not().ag(),
    )];
    (g, battery)
}

fn three_state_cycle() -> (Graph, Vec<(&'static str, Formula)>) {
    let mut g = Graph::new(0u32);
    g.add_transition(0u32, 1u32);
    g.add_transition(1u32, 2u32);
    g.add_transition(2u32, 0u32);
    g.add_label(1u32, "p");

    let battery = vec![
        ("AF p", Formula::ap("p").af()),
        ("EG p", Formula::ap("p").eg()),
        ("E[true U p]", Formula::tru().eu(Formula::ap("p"))),
    ];
    (g, battery)
}

fn sink() -> (Graph, Vec<(&'static str, Formula)>) {
    let mut g = Graph::new(0u32);
    g.add_transition(0u32, 1u32);
    // state 1 is a sink: no outgoing transitions.
    g.add_label(0u32, "p");
    g.add_label(1u32, "p");

    let battery = vec![
        ("EG p", Formula::ap("p").eg()),
        ("AX p", Formula::ap("p").ax()),
    ];
    (g, battery)
}

struct Producer {
    to: Address,
    remaining: Rc<RefCell<u32>>,
}

impl Actor for Producer {
    fn id(&self) -> &str {
        "producer"
    }

    fn ready(&self, _world: &World) -> Vec<Step> {
        if *self.remaining.borrow() == 0 {
            return vec![];
        }
        let remaining = self.remaining.clone();
        let n = *remaining.borrow();
        vec![Step::new(
            "producer",
            "produce",
            ChannelOp::Send {
                to: self.to.clone(),
                payload: serde_json::json!(n),
            },
            move |_w| *remaining.borrow_mut() -= 1,
        )]
    }

    fn snapshot(&self) -> serde_json::Value {
        serde_json::json!({"remaining": *self.remaining.borrow()})
    }

    fn clone_actor(&self) -> Box<dyn Actor> {
        Box::new(Producer {
            to: self.to.clone(),
            remaining: Rc::new(RefCell::new(*self.remaining.borrow())),
        })
    }
}

struct Consumer {
    from: Address,
    expected: u32,
    received: Rc<RefCell<u32>>,
}

impl Actor for Consumer {
    fn id(&self) -> &str {
        "consumer"
    }

    fn ready(&self, world: &World) -> Vec<Step> {
        if *self.received.borrow() >= self.expected
            || !world.channel(&self.from).map(|c| c.can_recv()).unwrap_or(false)
        {
            return vec![];
        }
        let received = self.received.clone();
        vec![Step::new(
            "consumer",
            "consume",
            ChannelOp::Recv { from: self.from.clone() },
            move |_w| *received.borrow_mut() += 1,
        )]
    }

    fn blocked_on(&self, _world: &World) -> Option<BlockedOn> {
        if *self.received.borrow() < self.expected {
            Some(BlockedOn::recv_empty("consumer"))
        } else {
            None
        }
    }

    fn snapshot(&self) -> serde_json::Value {
        serde_json::json!({"received": *self.received.borrow()})
    }

    fn clone_actor(&self) -> Box<dyn Actor> {
        Box::new(Consumer {
            from: self.from.clone(),
            expected: self.expected,
            received: Rc::new(RefCell::new(*self.received.borrow())),
        })
    }
}

struct StuckReceiver {
    id: String,
    peer_channel: Address,
}

impl Actor for StuckReceiver {
    fn id(&self) -> &str {
        &self.id
    }

    fn ready(&self, world: &World) -> Vec<Step> {
        if world.channel(&self.peer_channel).map(|c| c.can_recv()).unwrap_or(false) {
            vec![Step::new(
                self.id.clone(),
                "recv",
                ChannelOp::Recv { from: self.peer_channel.clone() },
                |_w| {},
            )]
        } else {
            vec![]
        }
    }

    fn blocked_on(&self, _world: &World) -> Option<BlockedOn> {
        Some(BlockedOn::recv_empty(self.id.clone()))
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

/// Builds the named actor-world scenario. Returns `None` for the
/// graph-only scenarios.
pub fn world_scenario(name: &str, seed: u64) -> Option<World> {
    match name {
        "producer-consumer" => {
            let inbox = Address::new("consumer", "inbox");
            let actors: Vec<Box<dyn Actor>> = vec![
                Box::new(Producer {
                    to: inbox.clone(),
                    remaining: Rc::new(RefCell::new(5)),
                }),
                Box::new(Consumer {
                    from: inbox.clone(),
                    expected: 5,
                    received: Rc::new(RefCell::new(0)),
                }),
            ];
            Some(World::new(actors, vec![Channel::new(inbox, 2)], seed))
        }
        "deadlock" => {
            let a_inbox = Address::new("a", "inbox");
            let b_inbox = Address::new("b", "inbox");
            let actors: Vec<Box<dyn Actor>> = vec![
                Box::new(StuckReceiver { id: "a".to_string(), peer_channel: b_inbox.clone() }),
                Box::new(StuckReceiver { id: "b".to_string(), peer_channel: a_inbox.clone() }),
            ];
            Some(World::new(actors, vec![Channel::new(a_inbox, 1), Channel::new(b_inbox, 1)], seed))
        }
        _ => None,
    }
}
