//! Catalog search for a target infection probability.

use std::path::Path;
use std::time::{Duration, Instant};

use log::info;

use crate::catalog::Catalog;
use crate::error::OutbreakError;
use crate::graph::Graph;
use crate::solver::{compute_all, Algorithm};

/// Absolute distance from the target within which a candidate qualifies.
pub const TOLERANCE: f64 = 0.00005;

/// How often (in catalog entries) progress is reported.
const PROGRESS_EVERY: usize = 1000;

/// Parameters of one catalog scan.
#[derive(Debug, Copy, Clone)]
pub struct SearchParams {
    pub algorithm: Algorithm,
    pub target: f64,
    pub rate: f64,
    pub days: u32,
}

/// A qualifying candidate.
///
/// The graph is relabeled so that the winning start vertex is vertex 0.
#[derive(Debug, Clone)]
pub struct Solution {
    pub graph: Graph,
    pub probability: f64,
}

/// Scan the catalog at `path` for the graph and start vertex whose
/// full-infection probability is closest to the target.
///
/// Every initial vertex of every catalog entry is evaluated. A
/// candidate replaces the incumbent when its distance to the target is
/// below [`TOLERANCE`] and strictly smaller than the incumbent's.
/// Returns `None` when no candidate comes within tolerance.
pub fn run(path: &Path, params: &SearchParams) -> Result<Option<Solution>, OutbreakError> {
    let total = Catalog::count_entries(path)?;
    info!("scanning {} catalog entries", total);

    let started = Instant::now();
    let mut best: Option<Solution> = None;
    let mut best_distance = f64::INFINITY;
    let mut processed = 0usize;

    for entry in Catalog::open(path)? {
        let graph = entry?;
        let results = compute_all(&graph, params.algorithm, params.days, params.rate);
        for (vertex, &p) in results.iter().enumerate() {
            let distance = (p - params.target).abs();
            if distance < TOLERANCE && distance < best_distance {
                let pivoted = graph.pivot(vertex as u8);
                info!("improved solution: p = {}\n{}", p, pivoted);
                best = Some(Solution {
                    graph: pivoted,
                    probability: p,
                });
                best_distance = distance;
            }
        }

        processed += 1;
        if processed % PROGRESS_EVERY == 0 {
            let eta = eta(started.elapsed(), processed, total);
            match &best {
                Some(b) => info!(
                    "processed {}/{}, best = {}, eta = {:.0?}",
                    processed, total, b.probability, eta
                ),
                None => info!("processed {}/{}, no candidate yet, eta = {:.0?}", processed, total, eta),
            }
        }
    }

    Ok(best)
}

fn eta(elapsed: Duration, processed: usize, total: usize) -> Duration {
    let remaining = total.saturating_sub(processed);
    elapsed.mul_f64(remaining as f64 / processed as f64)
}
