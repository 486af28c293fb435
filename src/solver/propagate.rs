//! Fixed-point propagation across a component list.
//!
//! A series or parallel topology forces one quantity to be equal across
//! every component (current for series, voltage for parallel). The
//! engine alternates between broadcasting that shared value to every
//! component missing it and completing each component from its own known
//! fields, until a full pass changes nothing or the pass cap is reached.
//!
//! The engine never fails. A circuit too sparse to pin down the shared
//! quantity, or with components that stay under-determined, terminates
//! with those fields still unset; callers inspect the returned values to
//! see what was resolved.

use crate::circuit::{Component, Mode, Quantity, Totals};

use super::basic::{derive, solve_basic};
use super::MAX_PASSES;

/// Solve a series circuit: shared current, voltages add.
pub fn solve_series(components: &[Component], totals: &Totals) -> Vec<Component> {
    propagate(components, totals, Quantity::Current)
}

/// Solve a parallel circuit: shared voltage, currents add.
pub fn solve_parallel(components: &[Component], totals: &Totals) -> Vec<Component> {
    propagate(components, totals, Quantity::Voltage)
}

/// Solve a component list in the given mode.
///
/// Basic mode completes each component in isolation; series and
/// parallel run the shared-quantity propagation. The caller's list is
/// never mutated, and fields that were set on input are never
/// overwritten.
pub fn solve(components: &[Component], totals: &Totals, mode: Mode) -> Vec<Component> {
    match mode.shared_quantity() {
        None => components
            .iter()
            .map(|c| Component::with_values(c.id, solve_basic(c.values)))
            .collect(),
        Some(shared) => propagate(components, totals, shared),
    }
}

fn propagate(components: &[Component], totals: &Totals, shared: Quantity) -> Vec<Component> {
    let mut resolved: Vec<Component> = components.to_vec();

    // Seed the shared quantity from user-supplied totals, once.
    if let Some(value) = totals.get(shared) {
        broadcast(&mut resolved, shared, value);
    }

    for _pass in 0..MAX_PASSES {
        let mut changed = false;

        // Find the shared value: an already-known component field wins;
        // otherwise any single component whose other fields determine it.
        let discovered = resolved
            .iter()
            .find_map(|c| c.values.get(shared))
            .or_else(|| resolved.iter().find_map(|c| derive(&c.values, shared)));

        if let Some(value) = discovered {
            changed |= broadcast(&mut resolved, shared, value);
        }

        // Complete every component from whatever is now known.
        for component in &mut resolved {
            let filled = solve_basic(component.values);
            if filled.known_count() > component.values.known_count() {
                component.values = filled;
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }

    resolved
}

/// Set `quantity` on every component missing it. Returns true if any
/// component was written.
fn broadcast(components: &mut [Component], quantity: Quantity, value: f64) -> bool {
    let mut changed = false;
    for component in components {
        if component.values.get(quantity).is_none() {
            component.values.set(quantity, value);
            changed = true;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::circuit::{ComponentId, Quantities};
    use crate::solver::{aggregate_parallel, aggregate_series};

    fn with_resistance(index: usize, resistance: f64) -> Component {
        Component::with_values(
            ComponentId(index),
            Quantities {
                resistance: Some(resistance),
                ..Quantities::empty()
            },
        )
    }

    #[test]
    fn test_series_end_to_end() {
        let components = vec![
            with_resistance(0, 10.0),
            with_resistance(1, 20.0),
            with_resistance(2, 30.0),
        ];
        let totals = Totals {
            current: Some(2.0),
            ..Totals::empty()
        };

        let solved = solve_series(&components, &totals);

        let expected_voltages = [20.0, 40.0, 60.0];
        let expected_powers = [40.0, 80.0, 120.0];
        for (i, component) in solved.iter().enumerate() {
            assert_abs_diff_eq!(component.values.voltage.unwrap(), expected_voltages[i]);
            assert_abs_diff_eq!(component.values.current.unwrap(), 2.0);
            assert_abs_diff_eq!(component.values.power.unwrap(), expected_powers[i]);
        }

        let aggregates = aggregate_series(&solved);
        assert_abs_diff_eq!(aggregates.resistance, 60.0);
        assert_abs_diff_eq!(aggregates.voltage, 120.0);
        assert_abs_diff_eq!(aggregates.current, 2.0);
        assert_abs_diff_eq!(aggregates.power, 240.0);
    }

    #[test]
    fn test_parallel_end_to_end() {
        let components = vec![
            with_resistance(0, 10.0),
            with_resistance(1, 20.0),
            with_resistance(2, 20.0),
        ];
        let totals = Totals {
            voltage: Some(20.0),
            ..Totals::empty()
        };

        let solved = solve_parallel(&components, &totals);

        let expected_currents = [2.0, 1.0, 1.0];
        for (i, component) in solved.iter().enumerate() {
            assert_abs_diff_eq!(component.values.voltage.unwrap(), 20.0);
            assert_abs_diff_eq!(component.values.current.unwrap(), expected_currents[i]);
        }

        let aggregates = aggregate_parallel(&solved);
        assert_abs_diff_eq!(aggregates.current, 4.0);
        assert_abs_diff_eq!(aggregates.voltage, 20.0);
        assert_abs_diff_eq!(aggregates.resistance, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_shared_value_discovered_from_a_component() {
        // No totals: the first component determines I = 2, which then
        // resolves the second.
        let components = vec![
            Component::with_values(
                ComponentId(0),
                Quantities {
                    voltage: Some(20.0),
                    resistance: Some(10.0),
                    ..Quantities::empty()
                },
            ),
            with_resistance(1, 5.0),
        ];

        let solved = solve_series(&components, &Totals::empty());
        assert_abs_diff_eq!(solved[1].values.current.unwrap(), 2.0);
        assert_abs_diff_eq!(solved[1].values.voltage.unwrap(), 10.0);
    }

    #[test]
    fn test_idempotent() {
        let components = vec![with_resistance(0, 10.0), with_resistance(1, 20.0)];
        let totals = Totals {
            current: Some(2.0),
            ..Totals::empty()
        };

        let once = solve_series(&components, &totals);
        let twice = solve_series(&once, &totals);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_user_values_never_overwritten() {
        // The entered voltage disagrees with V = I*R; it must survive
        // untouched, with only the unset fields filled.
        let components = vec![Component::with_values(
            ComponentId(0),
            Quantities {
                voltage: Some(5.0),
                resistance: Some(10.0),
                ..Quantities::empty()
            },
        )];
        let totals = Totals {
            current: Some(2.0),
            ..Totals::empty()
        };

        let solved = solve_series(&components, &totals);
        assert_eq!(solved[0].values.voltage, Some(5.0));
        assert_eq!(solved[0].values.current, Some(2.0));
    }

    #[test]
    fn test_under_determined_stays_unset() {
        let components = vec![Component::with_values(
            ComponentId(0),
            Quantities {
                power: Some(100.0),
                ..Quantities::empty()
            },
        )];

        let solved = solve_series(&components, &Totals::empty());
        assert_eq!(solved[0].values.power, Some(100.0));
        assert_eq!(solved[0].values.voltage, None);
        assert_eq!(solved[0].values.current, None);
        assert_eq!(solved[0].values.resistance, None);
    }

    #[test]
    fn test_empty_list_is_tolerated() {
        let solved = solve_series(&[], &Totals::empty());
        assert!(solved.is_empty());
    }

    #[test]
    fn test_caller_list_not_mutated() {
        let components = vec![with_resistance(0, 10.0)];
        let totals = Totals {
            current: Some(2.0),
            ..Totals::empty()
        };

        let _ = solve_series(&components, &totals);
        assert_eq!(components[0].values.voltage, None);
    }

    #[test]
    fn test_basic_mode_solves_components_independently() {
        let components = vec![
            Component::with_values(
                ComponentId(0),
                Quantities {
                    voltage: Some(12.0),
                    power: Some(24.0),
                    ..Quantities::empty()
                },
            ),
            with_resistance(1, 20.0),
        ];

        let solved = solve(&components, &Totals::empty(), Mode::Basic);
        assert_abs_diff_eq!(solved[0].values.current.unwrap(), 2.0);
        // One known is not enough in isolation.
        assert_eq!(solved[1].values.current, None);
    }
}
