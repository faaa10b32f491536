use std::path::PathBuf;

use clap::{Parser, Subcommand};

use outbreak_rs::graph::Graph;
use outbreak_rs::search::{self, SearchParams};
use outbreak_rs::solver::{compute_all, compute_one, Algorithm};

#[derive(Debug, Parser)]
#[command(author, version, about = "Epidemic spread probabilities over small contact graphs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the full-infection probability for a given graph.
    Compute {
        /// Solver to use: "recursive" or "dp".
        #[arg(long, default_value = "dp")]
        algorithm: String,

        /// Adjacency matrix as comma-separated rows, e.g. "011,100,010"
        /// (row v lists the vertices that can infect vertex v).
        #[arg(long)]
        graph: String,

        /// Daily probability for infection to pass between edges.
        #[arg(long, default_value_t = 0.10)]
        rate: f64,

        /// Number of days to compute.
        #[arg(long)]
        days: u32,

        /// Report every initial vertex instead of vertex 0 only.
        #[arg(long)]
        all: bool,
    },

    /// Search a catalog of graphs for a target probability.
    Solve {
        /// Solver to use: "recursive" or "dp".
        #[arg(long, default_value = "dp")]
        algorithm: String,

        /// Pre-computed list of graphs to solve with.
        #[arg(long)]
        graphs: PathBuf,

        /// Target probability to solve for.
        #[arg(long, default_value_t = 0.70)]
        target: f64,

        /// Daily probability for infection to pass between edges.
        #[arg(long, default_value_t = 0.10)]
        rate: f64,

        /// Number of days to solve for.
        #[arg(long)]
        days: u32,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let cli = Cli::parse();
    match cli.command {
        Command::Compute {
            algorithm,
            graph,
            rate,
            days,
            all,
        } => {
            let algorithm: Algorithm = algorithm.parse()?;
            let graph: Graph = graph.parse()?;
            if all {
                for (v, p) in compute_all(&graph, algorithm, days, rate).iter().enumerate() {
                    println!(
                        "vertex {}: probability of all vertices infected after {} days: {}%",
                        v,
                        days,
                        p * 100.0
                    );
                }
            } else {
                let p = compute_one(&graph, algorithm, days, rate);
                println!(
                    "probability of all vertices infected after {} days: {}%",
                    days,
                    p * 100.0
                );
            }
        }
        Command::Solve {
            algorithm,
            graphs,
            target,
            rate,
            days,
        } => {
            let params = SearchParams {
                algorithm: algorithm.parse()?,
                target,
                rate,
                days,
            };
            match search::run(&graphs, &params)? {
                Some(solution) => {
                    println!("best solution (p = {}):", solution.probability);
                    print!("{}", solution.graph);
                }
                None => println!("no solution within tolerance of target {}", target),
            }
        }
    }

    Ok(())
}
