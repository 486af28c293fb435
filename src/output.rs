//! Result rendering for the CLI frontend.
//!
//! The solver carries full-precision values; rounding to one decimal
//! place happens here, at the presentation boundary, so repeated solves
//! never compound display rounding.

use std::fmt::Write;

use crate::circuit::Component;
use crate::solver::Aggregates;

const NAME_WIDTH: usize = 8;
const VALUE_WIDTH: usize = 10;

/// Format a single value for display: one decimal place, `-` when
/// unknown.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    }
}

/// Render the solved components, and the computed totals when present,
/// as a fixed-width table.
///
/// `names` gives the display label for each component, in list order;
/// components beyond the names slice fall back to their id.
pub fn render_report(
    names: &[String],
    solved: &[Component],
    aggregates: Option<&Aggregates>,
) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<NAME_WIDTH$}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}",
        "element", "V", "I", "R", "P",
    );

    for (index, component) in solved.iter().enumerate() {
        let label = names
            .get(index)
            .cloned()
            .unwrap_or_else(|| component.id.to_string());
        let values = component.values;
        let _ = writeln!(
            out,
            "{:<NAME_WIDTH$}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}",
            label,
            format_value(values.voltage),
            format_value(values.current),
            format_value(values.resistance),
            format_value(values.power),
        );
    }

    if let Some(aggregates) = aggregates {
        let _ = writeln!(
            out,
            "{:<NAME_WIDTH$}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}",
            "total",
            format_value(Some(aggregates.voltage)),
            format_value(Some(aggregates.current)),
            format_value(Some(aggregates.resistance)),
            format_value(Some(aggregates.power)),
        );
    }

    out
}
