//! Naive recursive solver.
//!
//! Recurses day by day over the transition tree with no memoization
//! across branches, so the cost is exponential in both the day count
//! and the vertex count. Kept as the correctness reference for the DP
//! solver in [`crate::dp`].

use crate::graph::Graph;
use crate::state::State;
use crate::transition::enumerate_next_states;

/// Probability that all vertices are infected within `days` days,
/// starting from a single infected vertex `start`.
pub fn probability(graph: &Graph, start: u8, days: u32, rate: f64) -> f64 {
    spread(graph, State::single(start), days, rate)
}

fn spread(graph: &Graph, state: State, days: u32, rate: f64) -> f64 {
    if state.is_full(graph.size()) {
        // every vertex infected, regardless of remaining days
        return 1.0;
    }
    if days == 0 {
        return 0.0;
    }

    enumerate_next_states(graph, state, rate)
        .into_iter()
        .map(|t| t.probability * spread(graph, t.state, days - 1, rate))
        .sum()
}
