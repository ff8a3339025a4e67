use crate::{
    error::Result,
    solver::{engine::VariableId, problem::Assignment, semantics::DomainSemantics},
};

/// A human-readable identity for a constraint, used in statistics reports.
#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// A predicate over a (possibly partial) assignment.
///
/// A constraint only ever *reads* the assignment; it must hold for any subset
/// of its variables, treating unassigned variables as unconstrained rather
/// than failing on missing keys. The engine guarantees that whenever a
/// constraint is evaluated, the candidate pair under consideration has
/// already been inserted into the assignment it receives.
pub trait Constraint<S: DomainSemantics>: std::fmt::Debug {
    /// The variables this constraint ranges over.
    fn variables(&self) -> &[VariableId];

    fn descriptor(&self) -> ConstraintDescriptor;

    /// Returns whether the constraint holds for the given partial assignment.
    ///
    /// An `Err` here is a defect in the constraint itself and propagates to
    /// the caller of `solve` unchanged.
    fn is_satisfied(&self, assignment: &Assignment<S::Value>) -> Result<bool>;
}
