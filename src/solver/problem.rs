use std::sync::Arc;

use im::{HashMap, Vector};

use crate::{
    error::{Result, SolverError},
    solver::{constraint::Constraint, engine::VariableId, semantics::DomainSemantics},
};

/// An ordered sequence of candidate values for one variable.
///
/// The order is meaningful: it is the tie-break order for value-ordering
/// heuristics, so two runs over the same domains explore values identically.
pub type Domain<V> = Vector<V>;

/// A map from each variable to its domain of candidate values.
pub type Domains<V> = HashMap<VariableId, Domain<V>>;

/// A map from variables to committed values; partial during search, complete
/// when every declared variable has an entry.
///
/// Assignments are persistent maps: extending one yields a new map and leaves
/// the original untouched. The search relies on this to revert tentative
/// commitments by simply dropping the extended map.
pub type Assignment<V> = HashMap<VariableId, V>;

/// The immutable description of a constraint satisfaction problem.
///
/// A `Problem` holds the declared variables, the domain of candidate values
/// for each, and shared read-only access to the problem's semantics. The
/// search never alters it; all mutable state lives in the [`Assignment`]
/// threaded through the search.
#[derive(Clone, Debug)]
pub struct Problem<S: DomainSemantics> {
    /// The variables of the problem, in declaration order.
    pub variables: Vec<VariableId>,
    /// A map from each variable to its ordered domain.
    pub domains: Domains<S::Value>,
    /// Read-only access to the problem's semantics, shared across the search.
    pub semantics: Arc<S>,
}

impl<S: DomainSemantics> Problem<S> {
    pub fn new(variables: Vec<VariableId>, domains: Domains<S::Value>, semantics: Arc<S>) -> Self {
        Self {
            variables,
            domains,
            semantics,
        }
    }

    /// Checks if every declared variable is assigned.
    pub fn is_complete(&self, assignment: &Assignment<S::Value>) -> bool {
        assignment.len() == self.variables.len()
    }

    /// Verifies the solver's preconditions before any search step runs.
    ///
    /// Rejects a problem with no variables, a variable without a domain
    /// entry, an empty domain, or a constraint ranging over an undeclared
    /// variable.
    pub fn validate(&self, constraints: &[Box<dyn Constraint<S>>]) -> Result<()> {
        if self.variables.is_empty() {
            return Err(SolverError::NoVariables.into());
        }
        for &variable in &self.variables {
            match self.domains.get(&variable) {
                None => return Err(SolverError::MissingDomain(variable).into()),
                Some(domain) if domain.is_empty() => {
                    return Err(SolverError::EmptyDomain(variable).into())
                }
                Some(_) => {}
            }
        }
        for constraint in constraints {
            for &variable in constraint.variables() {
                if !self.domains.contains_key(&variable) {
                    return Err(SolverError::UnknownVariable(variable).into());
                }
            }
        }
        Ok(())
    }
}
