use prettytable::{Cell, Row, Table};

use crate::solver::{
    constraint::Constraint,
    engine::{ConstraintId, PerConstraintStats, SearchStats},
    semantics::DomainSemantics,
};

/// Renders the per-constraint counters of a search as a text table, most
/// expensive constraint last.
pub fn render_stats_table<S: DomainSemantics>(
    stats: &SearchStats,
    constraints: &[Box<dyn Constraint<S>>],
) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Constraint Type"),
        Cell::new("ID"),
        Cell::new("Description"),
        Cell::new("Checks"),
        Cell::new("Violations"),
        Cell::new("Time / Check (µs)"),
        Cell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&ConstraintId, &PerConstraintStats)> =
        stats.constraint_stats.iter().collect();

    sorted_stats.sort_by_key(|(id, entry)| (entry.time_spent_micros, **id));

    for (constraint_id, constraint_stats) in sorted_stats {
        let descriptor = constraints[*constraint_id].descriptor();
        let avg_time = if constraint_stats.checks > 0 {
            constraint_stats.time_spent_micros as f64 / constraint_stats.checks as f64
        } else {
            0.0
        };

        table.add_row(Row::new(vec![
            Cell::new(&descriptor.name),
            Cell::new(&constraint_id.to_string()),
            Cell::new(&descriptor.description),
            Cell::new(&constraint_stats.checks.to_string()),
            Cell::new(&constraint_stats.violations.to_string()),
            Cell::new(&format!("{:.2}", avg_time)),
            Cell::new(&format!(
                "{:.2}",
                constraint_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{constraints::not_equal::NotEqualConstraint, value::StandardValue};

    #[derive(Debug, Clone)]
    struct TestSemantics;

    impl DomainSemantics for TestSemantics {
        type Value = StandardValue;
        type ConstraintDefinition = ();

        fn build_constraint(&self, _definition: &()) -> Box<dyn Constraint<Self>> {
            unimplemented!("not needed for stats tests")
        }
    }

    #[test]
    fn table_lists_every_checked_constraint() {
        let constraints: Vec<Box<dyn Constraint<TestSemantics>>> =
            vec![Box::new(NotEqualConstraint::new(0, 1))];
        let mut stats = SearchStats::default();
        stats.constraint_stats.insert(
            0,
            PerConstraintStats {
                checks: 4,
                violations: 1,
                time_spent_micros: 12,
            },
        );

        let rendered = render_stats_table(&stats, &constraints);
        assert!(rendered.contains("NotEqualConstraint"));
        assert!(rendered.contains("?0 != ?1"));
    }
}
