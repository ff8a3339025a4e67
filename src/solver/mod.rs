pub mod constraint;
pub mod constraints;
pub mod engine;
pub mod heuristics;
pub mod problem;
pub mod semantics;
pub mod stats;
pub mod value;
