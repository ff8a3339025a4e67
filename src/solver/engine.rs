use std::collections::HashMap;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    error::Result,
    solver::{
        constraint::Constraint,
        heuristics::{value::ValueOrderingHeuristic, variable::VariableSelectionHeuristic},
        problem::{Assignment, Problem},
        semantics::DomainSemantics,
    },
};

pub type VariableId = u32;
pub type ConstraintId = usize;

/// Counters describing one invocation of [`SolverEngine::solve`].
///
/// A fresh `SearchStats` is created at the start of every `solve` call, so
/// repeated calls never accumulate stale counts. The counters are pure
/// observation; they have no effect on which solution is found.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    /// Number of search nodes entered (one per consistent commitment, plus
    /// the root).
    pub nodes_visited: u64,
    /// Number of tried values that were either immediately inconsistent or
    /// whose subtree exhausted without a solution.
    pub backtracks: u64,
    /// Per-constraint evaluation counters, keyed by the constraint's index in
    /// the slice passed to `solve`.
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PerConstraintStats {
    /// How many times the constraint was evaluated during consistency checks.
    pub checks: u64,
    /// How many of those evaluations returned false.
    pub violations: u64,
    pub time_spent_micros: u64,
}

/// The main engine for solving constraint satisfaction problems.
///
/// The `SolverEngine` takes a problem definition — declared variables, their
/// ordered domains, and a list of constraint predicates — and runs a
/// depth-first chronological backtracking search for a complete assignment
/// satisfying every constraint.
///
/// Which variable is branched on next and in which order its values are
/// tried are pluggable strategies; see
/// [`heuristics`](crate::solver::heuristics). With the default pairing
/// (minimum remaining values and least constraining value) the search is
/// fully deterministic: the same problem yields the same assignment and the
/// same [`SearchStats`] on every run.
pub struct SolverEngine<S: DomainSemantics> {
    variable_heuristic: Box<dyn VariableSelectionHeuristic<S>>,
    value_heuristic: Box<dyn ValueOrderingHeuristic<S>>,
}

impl<S: DomainSemantics> SolverEngine<S> {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic<S>>,
        value_heuristic: Box<dyn ValueOrderingHeuristic<S>>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
        }
    }

    /// Creates an engine with the MRV variable heuristic and the LCV value
    /// heuristic.
    pub fn with_default_heuristics() -> Self {
        use crate::solver::heuristics::{
            value::LeastConstrainingValueHeuristic, variable::MinimumRemainingValuesHeuristic,
        };
        Self::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }

    /// Attempts to solve the given constraint satisfaction problem.
    ///
    /// # Arguments
    ///
    /// * `constraints`: A slice of boxed [`Constraint`] trait objects that
    ///   define the rules of the problem. May be empty (trivially satisfied).
    /// * `problem`: The declared variables, their domains, and the problem's
    ///   semantics.
    ///
    /// # Returns
    ///
    /// * `Ok((Some(assignment), stats))` if a complete, constraint-satisfying
    ///   assignment was found.
    /// * `Ok((None, stats))` if the search space was exhausted without one —
    ///   the problem is unsatisfiable.
    /// * `Err(error)` if the problem violates the solver's preconditions
    ///   (reported before any search step) or a constraint predicate fails.
    pub fn solve(
        &self,
        constraints: &[Box<dyn Constraint<S>>],
        problem: &Problem<S>,
    ) -> Result<(Option<Assignment<S::Value>>, SearchStats)> {
        problem.validate(constraints)?;

        let mut stats = SearchStats::default();
        let found = self.search(constraints, problem, Assignment::new(), &mut stats)?;
        debug!(
            nodes = stats.nodes_visited,
            backtracks = stats.backtracks,
            solved = found.is_some(),
            "search finished"
        );
        Ok((found, stats))
    }

    fn search(
        &self,
        constraints: &[Box<dyn Constraint<S>>],
        problem: &Problem<S>,
        assignment: Assignment<S::Value>,
        stats: &mut SearchStats,
    ) -> Result<Option<Assignment<S::Value>>> {
        stats.nodes_visited += 1;

        // Base case: every commitment on the path was consistency-checked, so
        // a complete assignment is a solution.
        if problem.is_complete(&assignment) {
            return Ok(Some(assignment));
        }

        let Some(variable) = self.variable_heuristic.select_variable(problem, &assignment) else {
            // Unreachable while the assignment is incomplete; treat it as a
            // dead end rather than returning a partial assignment as success.
            return Ok(None);
        };

        let ordered_values =
            self.value_heuristic
                .order_values(variable, problem, &assignment, constraints)?;

        for value in ordered_values {
            trace!(variable, ?value, "trying candidate");
            // The tentative commitment lives in a new persistent map; the
            // parent frame's assignment is untouched, so any exit path below
            // reverts it by construction.
            let candidate = assignment.update(variable, value);

            if self.is_consistent(constraints, &candidate, stats)? {
                if let Some(found) = self.search(constraints, problem, candidate, stats)? {
                    return Ok(Some(found));
                }
            }
            stats.backtracks += 1;
        }

        // Every value for this variable failed; the caller undoes its own
        // commitment and moves on.
        Ok(None)
    }

    fn is_consistent(
        &self,
        constraints: &[Box<dyn Constraint<S>>],
        assignment: &Assignment<S::Value>,
        stats: &mut SearchStats,
    ) -> Result<bool> {
        for (constraint_id, constraint) in constraints.iter().enumerate() {
            let start_time = Instant::now();
            let satisfied = constraint.is_satisfied(assignment)?;
            let elapsed = start_time.elapsed().as_micros() as u64;

            let constraint_stats = stats.constraint_stats.entry(constraint_id).or_default();
            constraint_stats.checks += 1;
            constraint_stats.time_spent_micros += elapsed;
            if !satisfied {
                constraint_stats.violations += 1;
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<S: DomainSemantics> Default for SolverEngine<S> {
    fn default() -> Self {
        Self::with_default_heuristics()
    }
}
