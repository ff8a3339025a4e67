use clap::Parser;

use regula::puzzles::n_queens::{build_problem, columns, render_board};
use regula::solver::{engine::SolverEngine, semantics::DomainSemantics, stats::render_stats_table};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board side; one queen is placed per row.
    #[arg(long, default_value_t = 8)]
    n: usize,
}

pub fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    println!("Solving N-Queens for N={}", args.n);
    let (problem, definitions) = build_problem(args.n);
    let built_constraints: Vec<_> = definitions
        .iter()
        .map(|c| problem.semantics.build_constraint(c))
        .collect();

    let engine = SolverEngine::with_default_heuristics();
    match engine.solve(&built_constraints, &problem) {
        Ok((Some(assignment), stats)) => {
            println!("\nFound a solution:");
            println!("{}", render_board(&columns(args.n, &assignment)));
            println!(
                "\nNodes: {}, backtracks: {}",
                stats.nodes_visited, stats.backtracks
            );
            println!("{}", render_stats_table(&stats, &built_constraints));
        }
        Ok((None, _stats)) => println!("\nNo solution found."),
        Err(e) => eprintln!("An error occurred: {}", e),
    }
}
