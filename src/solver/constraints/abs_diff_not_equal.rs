use std::marker::PhantomData;

use crate::{
    error::Result,
    solver::{
        constraint::{Constraint, ConstraintDescriptor},
        engine::VariableId,
        problem::Assignment,
        semantics::DomainSemantics,
        value::ValueArithmetic,
    },
};

/// A constraint that enforces `abs(X - Y) != C`.
///
/// This constraint is specialized for values that support arithmetic. It is
/// the standard building block for diagonal exclusion in N-Queens, where `C`
/// is the row distance between two queens.
#[derive(Debug, Clone)]
pub struct AbsoluteDifferenceNotEqualConstraint<S: DomainSemantics>
where
    S::Value: ValueArithmetic,
{
    vars: [VariableId; 2],
    c: S::Value,
    _phantom: PhantomData<S>,
}

impl<S: DomainSemantics> AbsoluteDifferenceNotEqualConstraint<S>
where
    S::Value: ValueArithmetic,
{
    pub fn new(x: VariableId, y: VariableId, c: S::Value) -> Self {
        Self {
            vars: [x, y],
            c,
            _phantom: PhantomData,
        }
    }
}

impl<S: DomainSemantics + std::fmt::Debug> Constraint<S> for AbsoluteDifferenceNotEqualConstraint<S>
where
    S::Value: ValueArithmetic,
{
    fn variables(&self) -> &[VariableId] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "AbsDiffNotEqualConstraint".to_string(),
            description: format!("abs(?{} - ?{}) != {:?}", self.vars[0], self.vars[1], self.c),
        }
    }

    fn is_satisfied(&self, assignment: &Assignment<S::Value>) -> Result<bool> {
        match (
            assignment.get(&self.vars[0]),
            assignment.get(&self.vars[1]),
        ) {
            (Some(x), Some(y)) => Ok(x.sub(y).abs() != self.c),
            _ => Ok(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::value::StandardValue;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct TestValue(StandardValue);

    impl ValueArithmetic for TestValue {
        fn add(&self, other: &Self) -> Self {
            Self(self.0.add(&other.0))
        }
        fn sub(&self, other: &Self) -> Self {
            Self(self.0.sub(&other.0))
        }
        fn abs(&self) -> Self {
            Self(self.0.abs())
        }
    }

    #[derive(Debug, Clone)]
    struct TestSemantics;

    impl DomainSemantics for TestSemantics {
        type Value = TestValue;
        type ConstraintDefinition = ();

        fn build_constraint(&self, _definition: &()) -> Box<dyn Constraint<Self>> {
            unimplemented!("not needed for constraint unit tests")
        }
    }

    fn int_val(i: i64) -> TestValue {
        TestValue(StandardValue::Int(i))
    }

    #[test]
    fn rejects_pairs_at_the_forbidden_distance() {
        let constraint =
            AbsoluteDifferenceNotEqualConstraint::<TestSemantics>::new(0, 1, int_val(2));
        let assignment = Assignment::new()
            .update(0, int_val(4))
            .update(1, int_val(6));
        assert!(!constraint.is_satisfied(&assignment).unwrap());

        let assignment = Assignment::new()
            .update(0, int_val(6))
            .update(1, int_val(4));
        assert!(!constraint.is_satisfied(&assignment).unwrap());
    }

    #[test]
    fn accepts_pairs_at_other_distances() {
        let constraint =
            AbsoluteDifferenceNotEqualConstraint::<TestSemantics>::new(0, 1, int_val(2));
        let assignment = Assignment::new()
            .update(0, int_val(4))
            .update(1, int_val(5));
        assert!(constraint.is_satisfied(&assignment).unwrap());
    }

    #[test]
    fn holds_while_either_side_is_unassigned() {
        let constraint =
            AbsoluteDifferenceNotEqualConstraint::<TestSemantics>::new(0, 1, int_val(2));
        let assignment = Assignment::new().update(0, int_val(4));
        assert!(constraint.is_satisfied(&assignment).unwrap());
    }

    #[test]
    fn descriptor_reports_the_actual_constant() {
        let constraint =
            AbsoluteDifferenceNotEqualConstraint::<TestSemantics>::new(10, 20, int_val(5));
        assert_eq!(
            constraint.descriptor().description,
            format!("abs(?10 - ?20) != {:?}", int_val(5))
        );
    }
}
