//! Regula is a generic, reusable backtracking solver for constraint
//! satisfaction problems (CSPs).
//!
//! The engine is problem-agnostic and can be used to model and solve a wide
//! variety of logic puzzles. The core idea is a two-layered architecture: a
//! generic solver backend and a problem-specific frontend.
//!
//! # Core Concepts
//!
//! - **[`DomainSemantics`]**: A trait you implement to define the "what" of
//!   your problem: the variables, values, and constraints.
//! - **[`Constraint`]**: A predicate over a (possibly partial) assignment.
//!   The crate provides a standard library of common constraints like
//!   [`NotEqualConstraint`] and [`AllDifferentConstraint`].
//! - **[`SolverEngine`]**: The backtracking search engine. Which variable to
//!   branch on and in what order to try its values are pluggable
//!   [`heuristics`](crate::solver::heuristics); the defaults are minimum
//!   remaining values and least constraining value, and the search is fully
//!   deterministic.
//!
//! The solver reports how it searched alongside what it found: every call
//! returns [`SearchStats`](crate::solver::engine::SearchStats) with node,
//! backtrack, and per-constraint counters.
//!
//! Frontends for three classic puzzles live in [`puzzles`]: map colouring,
//! Sudoku, and N-Queens.
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Here is a simple example of solving for `?A != ?B` where `?A` can be
//! `Red` or `Blue`, and `?B` can only be `Red`. The solver deduces that `?A`
//! must be `Blue`.
//!
//! ```
//! use std::sync::Arc;
//!
//! use regula::solver::constraint::Constraint;
//! use regula::solver::constraints::not_equal::NotEqualConstraint;
//! use regula::solver::engine::{SolverEngine, VariableId};
//! use regula::solver::problem::Problem;
//! use regula::solver::semantics::DomainSemantics;
//!
//! // 1. Define the problem-specific types
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! pub enum Ink {
//!     Red,
//!     Blue,
//! }
//!
//! #[derive(Debug, Clone)]
//! pub struct MySemantics;
//!
//! // 2. Implement DomainSemantics to bridge the gap
//! impl DomainSemantics for MySemantics {
//!     type Value = Ink;
//!     type ConstraintDefinition = NotEqualConstraint<Self>;
//!     fn build_constraint(&self, def: &Self::ConstraintDefinition) -> Box<dyn Constraint<Self>> {
//!         Box::new(def.clone())
//!     }
//! }
//!
//! // 3. Define the problem instance
//! let a: VariableId = 0;
//! let b: VariableId = 1;
//!
//! let domains = im::hashmap! {
//!     a => im::vector![Ink::Red, Ink::Blue],
//!     b => im::vector![Ink::Red],
//! };
//! let semantics = Arc::new(MySemantics);
//! let problem = Problem::new(vec![a, b], domains, semantics.clone());
//!
//! let definitions = vec![NotEqualConstraint::new(a, b)];
//! let constraints: Vec<_> = definitions
//!     .iter()
//!     .map(|c| semantics.build_constraint(c))
//!     .collect();
//!
//! // 4. Solve!
//! let engine = SolverEngine::with_default_heuristics();
//! let (solution, stats) = engine.solve(&constraints, &problem).unwrap();
//! let assignment = solution.unwrap();
//!
//! assert_eq!(assignment.get(&a), Some(&Ink::Blue));
//! assert_eq!(stats.backtracks, 0);
//! ```
//!
//! [`DomainSemantics`]: crate::solver::semantics::DomainSemantics
//! [`Constraint`]: crate::solver::constraint::Constraint
//! [`NotEqualConstraint`]: crate::solver::constraints::not_equal::NotEqualConstraint
//! [`AllDifferentConstraint`]: crate::solver::constraints::all_different::AllDifferentConstraint
//! [`SolverEngine`]: crate::solver::engine::SolverEngine

pub mod error;
pub mod puzzles;
pub mod solver;
