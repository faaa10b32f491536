//! Dynamic-programming solver.
//!
//! Fills a `(days + 1) x 2^size` table bottom-up. Row `t` at column `s`
//! holds the probability that full infection is reached within `t` more
//! days given the current state `s`. The per-state transition lists are
//! computed exactly once and reused for every row; recomputing them per
//! row would forfeit the whole advantage over the recursive solver.

use log::debug;

use crate::graph::Graph;
use crate::state::State;
use crate::transition::{enumerate_next_states, Transition};

/// Bottom-up table of full-infection probabilities for one graph.
///
/// Building the table once answers the query for every initial vertex,
/// which is what the catalog search relies on.
pub struct DpTable {
    /// Row-major storage, stride `num_states`.
    probs: Vec<f64>,
    num_states: usize,
    days: u32,
}

impl DpTable {
    /// Fill the table for `graph` over `days` days.
    pub fn build(graph: &Graph, days: u32, rate: f64) -> Self {
        let num_states = 1usize << graph.size();
        let full = State::full(graph.size()).index();

        // one transition list per state, for all 2^size states
        let transitions: Vec<Vec<Transition>> = (0..num_states)
            .map(|s| enumerate_next_states(graph, State::from_bits(s as u8), rate))
            .collect();

        // row 0: zero days left, only the fully-infected state succeeds
        let mut probs = vec![0.0; num_states * (days as usize + 1)];
        probs[full] = 1.0;

        for t in 1..=days as usize {
            for s in 0..num_states {
                let p: f64 = transitions[s]
                    .iter()
                    .map(|tr| tr.probability * probs[(t - 1) * num_states + tr.state.index()])
                    .sum();
                probs[t * num_states + s] = p;
            }
        }

        debug!(
            "dp table filled: {} states x {} rows",
            num_states,
            days + 1
        );

        DpTable {
            probs,
            num_states,
            days,
        }
    }

    /// Probability of full infection within the table's full day span,
    /// given the current `state`.
    pub fn probability(&self, state: State) -> f64 {
        self.probability_within(state, self.days)
    }

    /// Probability of full infection within `days` days (at most the
    /// span the table was built for), given the current `state`.
    pub fn probability_within(&self, state: State, days: u32) -> f64 {
        assert!(days <= self.days, "table only covers {} days", self.days);
        self.probs[days as usize * self.num_states + state.index()]
    }

    /// Probability of full infection starting from a single infected
    /// `vertex` on day 0.
    pub fn probability_from(&self, vertex: u8) -> f64 {
        self.probability(State::single(vertex))
    }

    /// Number of day rows beyond the base row.
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Number of state columns.
    pub fn num_states(&self) -> usize {
        self.num_states
    }
}
