//! Map colouring: assign a colour to every region so that no two adjacent
//! regions share one.
//!
//! The frontend owns the mapping between region names and solver variables;
//! each adjacency becomes a [`NotEqualConstraint`] over the two regions'
//! variables.

use std::sync::Arc;

use im::Vector;

use crate::{
    error::{Result, SolverError},
    solver::{
        constraint::Constraint,
        constraints::not_equal::NotEqualConstraint,
        engine::VariableId,
        problem::{Assignment, Domains, Problem},
        semantics::DomainSemantics,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Colour {
    Red,
    Green,
    Blue,
    Yellow,
}

#[derive(Debug, Clone)]
pub struct MapColouringSemantics;

impl DomainSemantics for MapColouringSemantics {
    type Value = Colour;
    type ConstraintDefinition = NotEqualConstraint<Self>;

    fn build_constraint(&self, def: &Self::ConstraintDefinition) -> Box<dyn Constraint<Self>> {
        Box::new(def.clone())
    }
}

/// The mainland regions and Tasmania, as in the classic textbook instance.
pub const AUSTRALIA_REGIONS: [&str; 7] = ["WA", "NT", "SA", "Q", "NSW", "V", "T"];

pub const AUSTRALIA_ADJACENCIES: [(&str, &str); 9] = [
    ("WA", "NT"),
    ("WA", "SA"),
    ("NT", "SA"),
    ("NT", "Q"),
    ("SA", "Q"),
    ("SA", "NSW"),
    ("SA", "V"),
    ("Q", "NSW"),
    ("NSW", "V"),
];

/// Builds a colouring problem from region names, adjacencies, and the
/// available palette.
///
/// Regions become variables in declaration order; every region gets the full
/// palette as its domain. An adjacency naming an unknown region is a
/// configuration error.
pub fn build_problem(
    regions: &[&str],
    adjacencies: &[(&str, &str)],
    colours: &[Colour],
) -> Result<(
    Problem<MapColouringSemantics>,
    Vec<NotEqualConstraint<MapColouringSemantics>>,
)> {
    let palette: Vector<Colour> = colours.iter().cloned().collect();

    let variables: Vec<VariableId> = (0..regions.len() as VariableId).collect();
    let domains: Domains<Colour> = variables
        .iter()
        .map(|&id| (id, palette.clone()))
        .collect();

    let region_id = |name: &str| -> Result<VariableId> {
        regions
            .iter()
            .position(|region| *region == name)
            .map(|index| index as VariableId)
            .ok_or_else(|| SolverError::Custom(format!("unknown region '{}'", name)).into())
    };

    let mut constraints = Vec::with_capacity(adjacencies.len());
    for (a, b) in adjacencies {
        constraints.push(NotEqualConstraint::new(region_id(a)?, region_id(b)?));
    }

    let problem = Problem::new(variables, domains, Arc::new(MapColouringSemantics));
    Ok((problem, constraints))
}

/// The classic seven-region Australia instance with a three-colour palette.
pub fn australia() -> Result<(
    Problem<MapColouringSemantics>,
    Vec<NotEqualConstraint<MapColouringSemantics>>,
)> {
    build_problem(
        &AUSTRALIA_REGIONS,
        &AUSTRALIA_ADJACENCIES,
        &[Colour::Red, Colour::Green, Colour::Blue],
    )
}

/// Translates a solved assignment back into `(region, colour)` pairs, in
/// region declaration order.
pub fn colouring(regions: &[&str], assignment: &Assignment<Colour>) -> Vec<(String, Colour)> {
    regions
        .iter()
        .enumerate()
        .filter_map(|(index, region)| {
            assignment
                .get(&(index as VariableId))
                .map(|colour| (region.to_string(), colour.clone()))
        })
        .collect()
}

pub fn render_colouring(colouring: &[(String, Colour)]) -> String {
    colouring
        .iter()
        .map(|(region, colour)| format!("{}: {:?}", region, colour))
        .collect::<Vec<_>>()
        .join("\n")
}
