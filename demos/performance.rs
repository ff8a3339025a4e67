//! Runs the solver over N-Queens boards of increasing size and reports
//! elapsed time and backtrack counts per size. Pure observation: the solver
//! is configured exactly as the puzzle demos configure it.

use std::time::Instant;

use clap::Parser;
use prettytable::{Cell, Row, Table};
use serde::Serialize;

use regula::puzzles::n_queens::build_problem;
use regula::solver::{engine::SolverEngine, semantics::DomainSemantics};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Largest board side to measure, starting from 4.
    #[arg(long, default_value_t = 10)]
    max_n: usize,

    /// Emit the measurements as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Measurement {
    n: usize,
    solved: bool,
    elapsed_ms: f64,
    nodes_visited: u64,
    backtracks: u64,
}

fn measure(n: usize) -> Measurement {
    let (problem, definitions) = build_problem(n);
    let built_constraints: Vec<_> = definitions
        .iter()
        .map(|c| problem.semantics.build_constraint(c))
        .collect();

    let engine = SolverEngine::with_default_heuristics();
    let start = Instant::now();
    let (solution, stats) = engine
        .solve(&built_constraints, &problem)
        .expect("a freshly built board never violates the solver's preconditions");
    let elapsed = start.elapsed();

    Measurement {
        n,
        solved: solution.is_some(),
        elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        nodes_visited: stats.nodes_visited,
        backtracks: stats.backtracks,
    }
}

pub fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let measurements: Vec<Measurement> = (4..=args.max_n).map(measure).collect();

    if args.json {
        match serde_json::to_string_pretty(&measurements) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => eprintln!("Failed to serialize measurements: {}", e),
        }
        return;
    }

    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("N"),
        Cell::new("Solved"),
        Cell::new("Time (ms)"),
        Cell::new("Nodes"),
        Cell::new("Backtracks"),
    ]));
    for m in &measurements {
        table.add_row(Row::new(vec![
            Cell::new(&m.n.to_string()),
            Cell::new(if m.solved { "yes" } else { "no" }),
            Cell::new(&format!("{:.2}", m.elapsed_ms)),
            Cell::new(&m.nodes_visited.to_string()),
            Cell::new(&m.backtracks.to_string()),
        ]));
    }
    println!("N-Queens performance:\n{}", table);
}
