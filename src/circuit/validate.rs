//! Input validation run before any solving.
//!
//! Two checks live here: the structural minimum (a sheet must carry at
//! least one component) and the totals conflict check, which compares a
//! user-supplied circuit-wide value of the topology's shared quantity
//! against every component value of that quantity entered explicitly.
//! All conflicts are collected and surfaced together; a non-empty result
//! must abort the solve before any propagation.

use std::fmt;

use crate::error::{OhmlawError, Result};

use super::{Component, Mode, Quantity, Totals};

/// Maximum difference between a totals value and a component value of
/// the shared quantity before they are reported as conflicting.
pub const TOTALS_TOLERANCE: f64 = 0.01;

/// A contradiction between the totals record and one component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalsConflict {
    /// Zero-based position of the component in the list
    pub index: usize,
    /// The shared quantity being contradicted
    pub quantity: Quantity,
    /// The value entered on the component
    pub component_value: f64,
    /// The value entered in the totals
    pub totals_value: f64,
}

impl fmt::Display for TotalsConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "component {}: {} {} {} does not match the circuit total of {} {}",
            self.index + 1,
            self.quantity,
            self.component_value,
            self.quantity.unit(),
            self.totals_value,
            self.quantity.unit(),
        )
    }
}

/// Check a series circuit's totals against explicit component currents.
pub fn validate_series_totals(components: &[Component], totals: &Totals) -> Vec<TotalsConflict> {
    validate_totals(components, totals, Mode::Series)
}

/// Check a parallel circuit's totals against explicit component voltages.
pub fn validate_parallel_totals(components: &[Component], totals: &Totals) -> Vec<TotalsConflict> {
    validate_totals(components, totals, Mode::Parallel)
}

/// Check totals against explicit component values of the mode's shared
/// quantity. Basic mode has no shared quantity and never conflicts.
pub fn validate_totals(
    components: &[Component],
    totals: &Totals,
    mode: Mode,
) -> Vec<TotalsConflict> {
    let Some(quantity) = mode.shared_quantity() else {
        return Vec::new();
    };
    let Some(expected) = totals.get(quantity) else {
        return Vec::new();
    };

    components
        .iter()
        .enumerate()
        .filter_map(|(index, component)| {
            let value = component.values.get(quantity)?;
            ((value - expected).abs() > TOTALS_TOLERANCE).then_some(TotalsConflict {
                index,
                quantity,
                component_value: value,
                totals_value: expected,
            })
        })
        .collect()
}

/// Validate the structural minimum of a component list.
///
/// A list must retain at least one component. The solver itself
/// tolerates an empty list; this boundary check is for callers that
/// accept user input.
pub fn validate_components(components: &[Component]) -> Result<()> {
    if components.is_empty() {
        return Err(OhmlawError::NoComponents);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{ComponentId, Quantities};

    fn component(index: usize, values: Quantities) -> Component {
        Component::with_values(ComponentId(index), values)
    }

    #[test]
    fn test_series_conflict_detected() {
        let components = vec![component(
            0,
            Quantities {
                current: Some(7.0),
                ..Quantities::empty()
            },
        )];
        let totals = Totals {
            current: Some(5.0),
            ..Totals::empty()
        };

        let conflicts = validate_series_totals(&components, &totals);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].index, 0);
        assert_eq!(conflicts[0].component_value, 7.0);
        assert_eq!(conflicts[0].totals_value, 5.0);
        assert_eq!(conflicts[0].quantity, Quantity::Current);
    }

    #[test]
    fn test_within_tolerance_is_not_a_conflict() {
        let components = vec![component(
            0,
            Quantities {
                current: Some(5.005),
                ..Quantities::empty()
            },
        )];
        let totals = Totals {
            current: Some(5.0),
            ..Totals::empty()
        };
        assert!(validate_series_totals(&components, &totals).is_empty());
    }

    #[test]
    fn test_parallel_checks_voltage() {
        let components = vec![
            component(
                0,
                Quantities {
                    voltage: Some(12.0),
                    ..Quantities::empty()
                },
            ),
            component(
                1,
                Quantities {
                    voltage: Some(9.0),
                    ..Quantities::empty()
                },
            ),
            // No explicit voltage, cannot conflict
            component(
                2,
                Quantities {
                    current: Some(1.0),
                    ..Quantities::empty()
                },
            ),
        ];
        let totals = Totals {
            voltage: Some(12.0),
            ..Totals::empty()
        };

        let conflicts = validate_parallel_totals(&components, &totals);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].index, 1);
    }

    #[test]
    fn test_no_totals_value_no_conflicts() {
        let components = vec![component(
            0,
            Quantities {
                current: Some(7.0),
                ..Quantities::empty()
            },
        )];
        assert!(validate_series_totals(&components, &Totals::empty()).is_empty());
    }

    #[test]
    fn test_conflict_message_names_component() {
        let conflict = TotalsConflict {
            index: 2,
            quantity: Quantity::Current,
            component_value: 7.0,
            totals_value: 5.0,
        };
        let message = conflict.to_string();
        assert!(message.contains("component 3"));
        assert!(message.contains('7'));
        assert!(message.contains('5'));
    }

    #[test]
    fn test_validate_components_rejects_empty() {
        assert!(validate_components(&[]).is_err());
        assert!(validate_components(&[component(0, Quantities::empty())]).is_ok());
    }
}
