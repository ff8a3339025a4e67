//! Strategies that determine the order in which a variable's candidate
//! values are tried.

use crate::{
    error::Result,
    solver::{
        constraint::Constraint,
        engine::VariableId,
        problem::{Assignment, Problem},
        semantics::DomainSemantics,
    },
};

/// A trait for value-ordering heuristics.
pub trait ValueOrderingHeuristic<S: DomainSemantics> {
    /// Returns the candidate values for `variable` in the order they should
    /// be tried.
    ///
    /// Implementations may consult the current assignment and the problem's
    /// constraints, but must not mutate either; the assignment they receive
    /// reflects exactly the committed path to the current search node.
    fn order_values(
        &self,
        variable: VariableId,
        problem: &Problem<S>,
        assignment: &Assignment<S::Value>,
        constraints: &[Box<dyn Constraint<S>>],
    ) -> Result<Vec<S::Value>>;
}

/// A simple heuristic that returns values in their declared domain order.
pub struct IdentityValueHeuristic;

impl<S: DomainSemantics> ValueOrderingHeuristic<S> for IdentityValueHeuristic {
    fn order_values(
        &self,
        variable: VariableId,
        problem: &Problem<S>,
        _assignment: &Assignment<S::Value>,
        _constraints: &[Box<dyn Constraint<S>>],
    ) -> Result<Vec<S::Value>> {
        Ok(problem
            .domains
            .get(&variable)
            .map(|domain| domain.iter().cloned().collect())
            .unwrap_or_default())
    }
}

/// The Least Constraining Value heuristic: order candidate values ascending
/// by the number of constraints each would violate if committed now.
///
/// The conflict count for a value is computed by tentatively extending the
/// assignment with it and evaluating every constraint against the extension;
/// the extension is discarded afterwards. Every constraint is re-evaluated
/// for every candidate — deliberately so, to keep the per-node cost of the
/// search independent of any incremental bookkeeping. The sort is stable, so
/// equally-conflicting values keep their domain order.
pub struct LeastConstrainingValueHeuristic;

impl<S: DomainSemantics> ValueOrderingHeuristic<S> for LeastConstrainingValueHeuristic {
    fn order_values(
        &self,
        variable: VariableId,
        problem: &Problem<S>,
        assignment: &Assignment<S::Value>,
        constraints: &[Box<dyn Constraint<S>>],
    ) -> Result<Vec<S::Value>> {
        let Some(domain) = problem.domains.get(&variable) else {
            return Ok(Vec::new());
        };

        let mut counted: Vec<(S::Value, usize)> = Vec::with_capacity(domain.len());
        for value in domain.iter() {
            let tentative = assignment.update(variable, value.clone());
            let mut conflicts = 0;
            for constraint in constraints {
                if !constraint.is_satisfied(&tentative)? {
                    conflicts += 1;
                }
            }
            counted.push((value.clone(), conflicts));
        }

        counted.sort_by_key(|(_, conflicts)| *conflicts);
        Ok(counted.into_iter().map(|(value, _)| value).collect())
    }
}
