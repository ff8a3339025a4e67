use std::backtrace::Backtrace;

use crate::solver::engine::VariableId;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised before any search step runs.
///
/// A malformed problem is a contract violation on the caller's side and is
/// reported up front rather than discovered mid-search. An unsatisfiable
/// problem is *not* an error — `solve` reports it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("problem declares no variables")]
    NoVariables,
    #[error("variable ?{0} has no entry in the domain map")]
    MissingDomain(VariableId),
    #[error("variable ?{0} has an empty domain")]
    EmptyDomain(VariableId),
    #[error("constraint references undeclared variable ?{0}")]
    UnknownVariable(VariableId),
    #[error("{0}")]
    Custom(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SolverError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<SolverError> for Error {
    fn from(inner: SolverError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
