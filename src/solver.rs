//! Algorithm selection and dispatch.

use std::fmt;
use std::str::FromStr;

use crate::dp::DpTable;
use crate::error::OutbreakError;
use crate::graph::Graph;
use crate::recursive;

/// Which solver computes the infection probability.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Algorithm {
    /// Direct recursion over days; slow, kept as the reference path.
    Recursive,
    /// Bottom-up `(day, state)` table; the fast path.
    Dp,
}

impl FromStr for Algorithm {
    type Err = OutbreakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recursive" => Ok(Algorithm::Recursive),
            "dp" => Ok(Algorithm::Dp),
            _ => Err(OutbreakError::UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Recursive => write!(f, "recursive"),
            Algorithm::Dp => write!(f, "dp"),
        }
    }
}

/// Full-infection probability for every initial vertex.
///
/// The DP path builds a single table and reads all answers out of it;
/// the recursive path recomputes from scratch per vertex.
pub fn compute_all(graph: &Graph, algorithm: Algorithm, days: u32, rate: f64) -> Vec<f64> {
    match algorithm {
        Algorithm::Recursive => (0..graph.size())
            .map(|v| recursive::probability(graph, v, days, rate))
            .collect(),
        Algorithm::Dp => {
            let table = DpTable::build(graph, days, rate);
            (0..graph.size()).map(|v| table.probability_from(v)).collect()
        }
    }
}

/// Full-infection probability starting from vertex 0 only.
pub fn compute_one(graph: &Graph, algorithm: Algorithm, days: u32, rate: f64) -> f64 {
    match algorithm {
        Algorithm::Recursive => recursive::probability(graph, 0, days, rate),
        Algorithm::Dp => DpTable::build(graph, days, rate).probability_from(0),
    }
}
