use crate::{
    error::Result,
    solver::{
        constraint::{Constraint, ConstraintDescriptor},
        engine::VariableId,
        problem::Assignment,
        semantics::DomainSemantics,
    },
};

/// A binary constraint enforcing `X != Y`.
///
/// While either variable is unassigned the constraint holds vacuously.
#[derive(Debug, Clone)]
pub struct NotEqualConstraint<S: DomainSemantics + std::fmt::Debug> {
    pub vars: [VariableId; 2],
    _phantom: std::marker::PhantomData<S>,
}

impl<S: DomainSemantics + std::fmt::Debug> NotEqualConstraint<S> {
    pub fn new(a: VariableId, b: VariableId) -> Self {
        Self {
            vars: [a, b],
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<S: DomainSemantics + std::fmt::Debug> Constraint<S> for NotEqualConstraint<S> {
    fn variables(&self) -> &[VariableId] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "NotEqualConstraint".to_string(),
            description: format!("?{} != ?{}", self.vars[0], self.vars[1]),
        }
    }

    fn is_satisfied(&self, assignment: &Assignment<S::Value>) -> Result<bool> {
        match (
            assignment.get(&self.vars[0]),
            assignment.get(&self.vars[1]),
        ) {
            (Some(a), Some(b)) => Ok(a != b),
            _ => Ok(true),
        }
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
    fn holds_while_either_side_is_unassigned() {
        let constraint = NotEqualConstraint::<TestSemantics>::new(0, 1);
        let assignment = Assignment::new().update(0, StandardValue::Int(3));
        assert!(constraint.is_satisfied(&Assignment::new()).unwrap());
        assert!(constraint.is_satisfied(&assignment).unwrap());
    }

    #[test]
    fn rejects_equal_committed_values() {
        let constraint = NotEqualConstraint::<TestSemantics>::new(0, 1);
        let assignment = Assignment::new()
            .update(0, StandardValue::Int(3))
            .update(1, StandardValue::Int(3));
        assert!(!constraint.is_satisfied(&assignment).unwrap());
    }

    #[test]
    fn accepts_distinct_committed_values() {
        let constraint = NotEqualConstraint::<TestSemantics>::new(0, 1);
        let assignment = Assignment::new()
            .update(0, StandardValue::Int(3))
            .update(1, StandardValue::Int(4));
        assert!(constraint.is_satisfied(&assignment).unwrap());
    }
}
