use regula::puzzles::sudoku::{build_problem, classic_puzzle, render_grid, solved_grid};
use regula::solver::{engine::SolverEngine, semantics::DomainSemantics, stats::render_stats_table};

pub fn main() {
    tracing_subscriber::fmt::init();

    let puzzle = classic_puzzle();
    println!("Puzzle:\n{}\n", render_grid(&puzzle));

    let (problem, definitions, cells) = match build_problem(&puzzle) {
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
            let solved = solved_grid(&puzzle, &cells, &assignment);
            println!("Solved:\n{}\n", render_grid(&solved));
            println!(
                "Nodes: {}, backtracks: {}",
                stats.nodes_visited, stats.backtracks
            );
            println!("{}", render_stats_table(&stats, &built_constraints));
        }
        Ok((None, _stats)) => println!("No solution found."),
        Err(e) => eprintln!("An error occurred: {}", e),
    }
}
