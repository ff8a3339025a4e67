//! Standard heuristics for selecting which variable to branch on next
//! during the search process.

use std::cell::RefCell;

use rand::seq::IteratorRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::solver::{
    engine::VariableId,
    problem::{Assignment, Problem},
    semantics::DomainSemantics,
};

/// A trait for variable-selection heuristics.
///
/// Implementors of this trait define a strategy for choosing which unassigned
/// variable the solver should branch on next. A good heuristic can
/// dramatically improve solver performance.
pub trait VariableSelectionHeuristic<S: DomainSemantics> {
    /// Selects the next variable to be assigned.
    ///
    /// # Returns
    ///
    /// * `Some(VariableId)` of the chosen variable, if any variable is still
    ///   unassigned.
    /// * `None` if the assignment already covers every declared variable.
    fn select_variable(
        &self,
        problem: &Problem<S>,
        assignment: &Assignment<S::Value>,
    ) -> Option<VariableId>;
}

/// A simple heuristic that selects the first unassigned variable in
/// declaration order.
///
/// This provides a basic, deterministic baseline to compare the smarter
/// heuristics against.
pub struct SelectFirstHeuristic;

impl<S: DomainSemantics> VariableSelectionHeuristic<S> for SelectFirstHeuristic {
    fn select_variable(
        &self,
        problem: &Problem<S>,
        assignment: &Assignment<S::Value>,
    ) -> Option<VariableId> {
        problem
            .variables
            .iter()
            .find(|variable| !assignment.contains_key(variable))
            .copied()
    }
}

/// A heuristic that selects the unassigned variable with the Minimum
/// Remaining Values in its domain.
///
/// This is a "fail-first" strategy that prioritizes the most constrained
/// variable, tackling the most difficult parts of the problem early. The
/// domains here are never pruned during search, so "remaining" is the
/// declared domain length. In case of a tie, the variable with the lower
/// [`VariableId`] is chosen; frontends allocate ids in declaration order, so
/// ties resolve to the first-declared variable and results stay reproducible.
pub struct MinimumRemainingValuesHeuristic;

impl<S: DomainSemantics> VariableSelectionHeuristic<S> for MinimumRemainingValuesHeuristic {
    fn select_variable(
        &self,
        problem: &Problem<S>,
        assignment: &Assignment<S::Value>,
    ) -> Option<VariableId> {
        problem
            .variables
            .iter()
            .filter(|variable| !assignment.contains_key(variable))
            .min_by_key(|&&variable| {
                let domain_len = problem
                    .domains
                    .get(&variable)
                    .map(|domain| domain.len())
                    .unwrap_or(0);
                // Primary criterion: domain length (ascending)
                // Secondary criterion: variable id (ascending, for tie-breaking)
                (domain_len, variable)
            })
            .copied()
    }
}

/// A heuristic that selects an unassigned variable at random.
///
/// The generator is seeded so that comparison runs against the deterministic
/// heuristics remain reproducible.
pub struct RandomVariableHeuristic {
    rng: RefCell<ChaCha8Rng>,
}

impl RandomVariableHeuristic {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl<S: DomainSemantics> VariableSelectionHeuristic<S> for RandomVariableHeuristic {
    fn select_variable(
        &self,
        problem: &Problem<S>,
        assignment: &Assignment<S::Value>,
    ) -> Option<VariableId> {
        problem
            .variables
            .iter()
            .filter(|variable| !assignment.contains_key(variable))
            .copied()
            .choose(&mut *self.rng.borrow_mut())
    }
}
