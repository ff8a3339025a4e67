use std::collections::HashSet;

use crate::{
    error::Result,
    solver::{
        constraint::{Constraint, ConstraintDescriptor},
        engine::VariableId,
        problem::Assignment,
        semantics::DomainSemantics,
    },
};

/// A constraint that ensures all variables in a given set take distinct
/// values.
///
/// This is a common global constraint used in problems like Sudoku and
/// N-Queens. Unassigned variables are skipped, so the constraint holds for
/// any partial assignment with no duplicates among the committed values.
#[derive(Debug, Clone)]
pub struct AllDifferentConstraint<S: DomainSemantics + std::fmt::Debug> {
    pub vars: Vec<VariableId>,
    _phantom: std::marker::PhantomData<S>,
}

impl<S: DomainSemantics + std::fmt::Debug> AllDifferentConstraint<S> {
    /// Creates a new `AllDifferentConstraint` over the given set of variables.
    pub fn new(vars: Vec<VariableId>) -> Self {
        Self {
            vars,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<S: DomainSemantics + std::fmt::Debug> Constraint<S> for AllDifferentConstraint<S> {
    fn variables(&self) -> &[VariableId] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        let vars_str = self
            .vars
            .iter()
            .map(|v| format!("?{}", v))
            .collect::<Vec<_>>()
            .join(", ");
        ConstraintDescriptor {
            name: "AllDifferentConstraint".to_string(),
            description: format!("AllDifferent({})", vars_str),
        }
    }

    fn is_satisfied(&self, assignment: &Assignment<S::Value>) -> Result<bool> {
        let mut seen = HashSet::new();
        for var in &self.vars {
            if let Some(value) = assignment.get(var) {
                if !seen.insert(value) {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::value::StandardValue;

    #[derive(Debug, Clone)]
    struct TestSemantics;

    impl DomainSemantics for TestSemantics {
        type Value = StandardValue;
        type ConstraintDefinition = ();

        fn build_constraint(&self, _definition: &()) -> Box<dyn Constraint<Self>> {
            unimplemented!("not needed for constraint unit tests")
        }
    }

    #[test]
    fn holds_for_partial_assignment_without_duplicates() {
        let constraint = AllDifferentConstraint::<TestSemantics>::new(vec![0, 1, 2]);
        let assignment = Assignment::new()
            .update(0, StandardValue::Int(1))
            .update(2, StandardValue::Int(2));
        assert!(constraint.is_satisfied(&assignment).unwrap());
    }

    #[test]
    fn rejects_duplicate_committed_values() {
        let constraint = AllDifferentConstraint::<TestSemantics>::new(vec![0, 1, 2]);
        let assignment = Assignment::new()
            .update(0, StandardValue::Int(1))
            .update(1, StandardValue::Int(1));
        assert!(!constraint.is_satisfied(&assignment).unwrap());
    }

    #[test]
    fn ignores_values_of_variables_outside_its_scope() {
        let constraint = AllDifferentConstraint::<TestSemantics>::new(vec![0, 1]);
        let assignment = Assignment::new()
            .update(0, StandardValue::Int(1))
            .update(5, StandardValue::Int(1));
        assert!(constraint.is_satisfied(&assignment).unwrap());
    }
}
