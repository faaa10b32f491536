//! One-day evolution of an infection state.

use crate::graph::Graph;
use crate::state::State;

/// One possible next-day outcome and its probability of happening.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transition {
    pub state: State,
    pub probability: f64,
}

/// Enumerate every possible next-day state of `state`, with probabilities.
///
/// Each infected neighbor of a susceptible vertex independently
/// transmits with probability `rate`, so a vertex with `k` infected
/// neighbors stays clean with probability `(1 - rate)^k` and becomes
/// infected with probability `1 - (1 - rate)^k`. The draws are
/// independent across vertices; the joint distribution is built by a
/// cross-product expansion, doubling the branch list once per at-risk
/// vertex. Vertices already infected, or with no infected neighbor,
/// contribute no branching, so the fully-infected state (and any state
/// where infection cannot spread) yields the single self-transition
/// with probability 1.
///
/// The returned probabilities always sum to 1 (up to rounding). Branch
/// order is unspecified; only membership and probability matter.
///
/// Worst case `2^size` branches per call, which is fine at `size <= 8`.
pub fn enumerate_next_states(graph: &Graph, state: State, rate: f64) -> Vec<Transition> {
    let mut branches = vec![Transition {
        state,
        probability: 1.0,
    }];

    for v in 0..graph.size() {
        if state.contains(v) {
            continue;
        }
        let infected = graph.infected_neighbors(state, v);
        if infected == 0 {
            continue;
        }

        let clean = (1.0 - rate).powi(infected as i32);
        let mut expanded = Vec::with_capacity(branches.len() * 2);
        for b in &branches {
            expanded.push(Transition {
                state: b.state,
                probability: b.probability * clean,
            });
            expanded.push(Transition {
                state: b.state.with_infected(v),
                probability: b.probability * (1.0 - clean),
            });
        }
        branches = expanded;
    }

    branches
}
