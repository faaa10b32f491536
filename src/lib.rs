//! # outbreak-rs: Epidemic Spread Probabilities over Small Contact Graphs
//!
//! **`outbreak-rs`** computes the exact probability that an epidemic starting from a single
//! infected vertex infects an entire contact graph within a given number of days.
//!
//! ## The model
//!
//! A contact graph has at most **8 vertices**, so the set of infected vertices --- the
//! infection *state* --- fits in a single byte, one bit per vertex. Each day, every infected
//! vertex independently transmits the infection along each of its contacts with a fixed
//! probability (the *rate*). A susceptible vertex with `k` infected neighbors therefore stays
//! clean with probability `(1 - rate)^k`; collapsing the per-neighbor draws into this closed
//! form is what keeps the daily branching at `2^size` instead of `2^edges`.
//!
//! ## Key Features
//!
//! - **Bitmask States**: States are array-indexable small integers ([`state::State`]), which
//!   makes the whole `2^size` state space directly enumerable and cheap to tabulate.
//! - **Two Solvers**: a deliberately naive recursive solver ([`recursive`]) used as the
//!   correctness reference, and a dynamic-programming solver ([`dp::DpTable`]) that computes
//!   every state's transition list exactly once and fills a `(days + 1) x 2^size` table
//!   bottom-up.
//! - **Catalog Search**: [`search`] streams a catalog of pre-generated graphs (binary-matrix
//!   or graph6 lines, see [`catalog`]) and tracks the graph/start-vertex pair whose
//!   probability lands closest to a target.
//!
//! ## Basic Usage
//!
//! ```rust
//! use outbreak_rs::dp::DpTable;
//! use outbreak_rs::graph::Graph;
//!
//! // Row v lists the vertices that can infect vertex v.
//! let graph: Graph = "011,100,010".parse().unwrap();
//!
//! // Probability of full infection within 4 days at 10% daily rate.
//! let table = DpTable::build(&graph, 4, 0.10);
//! let p = table.probability_from(0);
//! assert!(p > 0.0 && p < 1.0);
//! ```
//!
//! The binary exposes the same functionality as the `compute` and `solve` commands.

pub mod catalog;
pub mod dp;
pub mod error;
pub mod graph;
pub mod recursive;
pub mod search;
pub mod solver;
pub mod state;
pub mod transition;
