//! Sudoku: fill the empty cells of a partially-given grid so that every row,
//! column, and box contains each number exactly once.
//!
//! Only the empty cells become solver variables. The given cells never
//! change; each unit constraint owns a read-only copy of its unit's givens
//! and checks them together with whatever the search has committed so far.

use std::collections::HashSet;
use std::sync::Arc;

use im::Vector;

use crate::{
    error::{Result, SolverError},
    solver::{
        constraint::{Constraint, ConstraintDescriptor},
        engine::VariableId,
        problem::{Assignment, Domains, Problem},
        semantics::DomainSemantics,
    },
};

/// A grid of cell values, row-major; `0` marks an empty cell.
pub type Grid = Vec<Vec<i64>>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SudokuValue {
    Number(i64),
}

#[derive(Debug, Clone)]
pub struct SudokuSemantics;

impl DomainSemantics for SudokuSemantics {
    type Value = SudokuValue;
    type ConstraintDefinition = UnitAllDifferentConstraint;

    fn build_constraint(&self, def: &Self::ConstraintDefinition) -> Box<dyn Constraint<Self>> {
        Box::new(def.clone())
    }
}

/// "No duplicate in one unit" — a row, column, or box.
///
/// Holds the unit's given values alongside the variables for its empty
/// cells, so a partial assignment is checked against both.
#[derive(Debug, Clone)]
pub struct UnitAllDifferentConstraint {
    unit: String,
    vars: Vec<VariableId>,
    fixed: Vec<i64>,
}

impl UnitAllDifferentConstraint {
    pub fn new(unit: String, vars: Vec<VariableId>, fixed: Vec<i64>) -> Self {
        Self { unit, vars, fixed }
    }
}

impl Constraint<SudokuSemantics> for UnitAllDifferentConstraint {
    fn variables(&self) -> &[VariableId] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "UnitAllDifferentConstraint".to_string(),
            description: format!("no duplicate in {}", self.unit),
        }
    }

    fn is_satisfied(&self, assignment: &Assignment<SudokuValue>) -> Result<bool> {
        let mut seen = HashSet::new();
        for given in &self.fixed {
            if !seen.insert(*given) {
                return Ok(false);
            }
        }
        for var in &self.vars {
            if let Some(SudokuValue::Number(number)) = assignment.get(var) {
                if !seen.insert(*number) {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }
}

/// Builds a Sudoku problem from a grid.
///
/// Returns the problem, the unit constraints, and the cell coordinates of
/// each variable (indexed by `VariableId`, row-major declaration order).
/// The grid must be square with a perfect-square side (4, 9, 16, …) and all
/// given values in `1..=size`; anything else is a configuration error.
pub fn build_problem(
    grid: &Grid,
) -> Result<(
    Problem<SudokuSemantics>,
    Vec<UnitAllDifferentConstraint>,
    Vec<(usize, usize)>,
)> {
    let size = grid.len();
    let box_size = (size as f64).sqrt() as usize;
    if size == 0 || box_size * box_size != size {
        return Err(
            SolverError::Custom(format!("grid side {} is not a perfect square", size)).into(),
        );
    }
    for (row_index, row) in grid.iter().enumerate() {
        if row.len() != size {
            return Err(SolverError::Custom(format!(
                "row {} has {} cells, expected {}",
                row_index,
                row.len(),
                size
            ))
            .into());
        }
        for &value in row {
            if value < 0 || value > size as i64 {
                return Err(SolverError::Custom(format!(
                    "cell value {} out of range 0..={}",
                    value, size
                ))
                .into());
            }
        }
    }

    // One variable per empty cell, row-major.
    let mut cells = Vec::new();
    let mut cell_var = vec![vec![None; size]; size];
    for (r, row) in grid.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            if value == 0 {
                cell_var[r][c] = Some(cells.len() as VariableId);
                cells.push((r, c));
            }
        }
    }

    let full_domain: Vector<SudokuValue> =
        (1..=size as i64).map(SudokuValue::Number).collect();
    let variables: Vec<VariableId> = (0..cells.len() as VariableId).collect();
    let domains: Domains<SudokuValue> = variables
        .iter()
        .map(|&id| (id, full_domain.clone()))
        .collect();

    let mut constraints = Vec::new();
    let mut push_unit = |unit: String, members: &[(usize, usize)]| {
        let mut vars = Vec::new();
        let mut fixed = Vec::new();
        for &(r, c) in members {
            match cell_var[r][c] {
                Some(var) => vars.push(var),
                None => fixed.push(grid[r][c]),
            }
        }
        constraints.push(UnitAllDifferentConstraint::new(unit, vars, fixed));
    };

    for r in 0..size {
        let members: Vec<_> = (0..size).map(|c| (r, c)).collect();
        push_unit(format!("row {}", r), &members);
    }
    for c in 0..size {
        let members: Vec<_> = (0..size).map(|r| (r, c)).collect();
        push_unit(format!("column {}", c), &members);
    }
    for br in 0..box_size {
        for bc in 0..box_size {
            let members: Vec<_> = (0..box_size)
                .flat_map(|r| (0..box_size).map(move |c| (br * box_size + r, bc * box_size + c)))
                .collect();
            push_unit(format!("box {},{}", br, bc), &members);
        }
    }

    let problem = Problem::new(variables, domains, Arc::new(SudokuSemantics));
    Ok((problem, constraints, cells))
}

/// Writes a solved assignment back into a copy of the input grid.
///
/// Only cells that were empty in the input change.
pub fn solved_grid(
    grid: &Grid,
    cells: &[(usize, usize)],
    assignment: &Assignment<SudokuValue>,
) -> Grid {
    let mut result = grid.clone();
    for (index, &(r, c)) in cells.iter().enumerate() {
        if let Some(SudokuValue::Number(number)) = assignment.get(&(index as VariableId)) {
            result[r][c] = *number;
        }
    }
    result
}

/// Renders a grid with box rules, `.` for empty cells.
pub fn render_grid(grid: &Grid) -> String {
    let size = grid.len();
    let box_size = (size as f64).sqrt() as usize;
    let mut lines = Vec::new();
    for (r, row) in grid.iter().enumerate() {
        if r % box_size == 0 && r != 0 {
            lines.push("-".repeat(size * 2 + (box_size - 1) * 2));
        }
        let mut line = String::new();
        for (c, &value) in row.iter().enumerate() {
            if c % box_size == 0 && c != 0 {
                line.push_str("| ");
            }
            if value == 0 {
                line.push_str(". ");
            } else {
                line.push_str(&format!("{} ", value));
            }
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// The widely-reprinted 9×9 puzzle used by the demos and tests.
pub fn classic_puzzle() -> Grid {
    vec![
        vec![5, 3, 0, 0, 7, 0, 0, 0, 0],
        vec![6, 0, 0, 1, 9, 5, 0, 0, 0],
        vec![0, 9, 8, 0, 0, 0, 0, 6, 0],
        vec![8, 0, 0, 0, 6, 0, 0, 0, 3],
        vec![4, 0, 0, 8, 0, 3, 0, 0, 1],
        vec![7, 0, 0, 0, 2, 0, 0, 0, 6],
        vec![0, 6, 0, 0, 0, 0, 2, 8, 0],
        vec![0, 0, 0, 4, 1, 9, 0, 0, 5],
        vec![0, 0, 0, 0, 8, 0, 0, 7, 9],
    ]
}

/// The unique completion of [`classic_puzzle`].
pub fn classic_solution() -> Grid {
    vec![
        vec![5, 3, 4, 6, 7, 8, 9, 1, 2],
        vec![6, 7, 2, 1, 9, 5, 3, 4, 8],
        vec![1, 9, 8, 3, 4, 2, 5, 6, 7],
        vec![8, 5, 9, 7, 6, 1, 4, 2, 3],
        vec![4, 2, 6, 8, 5, 3, 7, 9, 1],
        vec![7, 1, 3, 9, 2, 4, 8, 5, 6],
        vec![9, 6, 1, 5, 3, 7, 2, 8, 4],
        vec![2, 8, 7, 4, 1, 9, 6, 3, 5],
        vec![3, 4, 5, 2, 8, 6, 1, 7, 9],
    ]
}
