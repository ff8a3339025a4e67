use regula::puzzles::map_colouring::{australia, colouring, render_colouring, AUSTRALIA_REGIONS};
use regula::solver::{engine::SolverEngine, semantics::DomainSemantics, stats::render_stats_table};

pub fn main() {
    tracing_subscriber::fmt::init();
    println!("Solving the map colouring problem...");

    let (problem, definitions) = match australia() {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("Failed to build the problem: {}", e);
            std::process::exit(1);
        }
    };
    let built_constraints: Vec<_> = definitions
        .iter()
        .map(|c| problem.semantics.build_constraint(c))
        .collect();

    let engine = SolverEngine::with_default_heuristics();
    match engine.solve(&built_constraints, &problem) {
        Ok((Some(assignment), stats)) => {
            println!("Solution found!");
            println!(
                "{}",
                render_colouring(&colouring(&AUSTRALIA_REGIONS, &assignment))
            );
            println!(
                "\nNodes: {}, backtracks: {}",
                stats.nodes_visited, stats.backtracks
            );
            println!("{}", render_stats_table(&stats, &built_constraints));
        }
        Ok((None, _stats)) => println!("No solution found."),
        Err(e) => eprintln!("An error occurred: {}", e),
    }
}
