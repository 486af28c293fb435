//! Circuit-level summary quantities.
//!
//! Aggregates are computed from whatever the component list currently
//! holds, whether or not propagation fully resolved it. Unknown fields
//! count as zero, so an all-unknown list yields all-zero aggregates.

use crate::circuit::{Component, Quantity};

/// Circuit-wide summary of a (possibly partially solved) list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregates {
    /// Total resistance in ohms
    pub resistance: f64,
    /// Total voltage in volts
    pub voltage: f64,
    /// Total current in amperes
    pub current: f64,
    /// Total power in watts
    pub power: f64,
}

/// Aggregate a series circuit: R, V and P add, I is common.
///
/// The common current is taken from the first component that knows it;
/// post-solve all components carry the same value.
pub fn aggregate_series(components: &[Component]) -> Aggregates {
    Aggregates {
        resistance: sum(components, Quantity::Resistance),
        voltage: sum(components, Quantity::Voltage),
        current: first_known(components, Quantity::Current),
        power: sum(components, Quantity::Power),
    }
}

/// Aggregate a parallel circuit: I and P add, V is common, R combines
/// by reciprocal sum.
pub fn aggregate_parallel(components: &[Component]) -> Aggregates {
    Aggregates {
        resistance: reciprocal_resistance(components),
        voltage: first_known(components, Quantity::Voltage),
        current: sum(components, Quantity::Current),
        power: sum(components, Quantity::Power),
    }
}

fn sum(components: &[Component], quantity: Quantity) -> f64 {
    components
        .iter()
        .filter_map(|c| c.values.get(quantity))
        .sum()
}

fn first_known(components: &[Component], quantity: Quantity) -> f64 {
    components
        .iter()
        .find_map(|c| c.values.get(quantity))
        .unwrap_or(0.0)
}

/// 1 / sum(1/R) over components with a usable resistance. Zero and
/// negative resistances are excluded rather than folded into the sum.
fn reciprocal_resistance(components: &[Component]) -> f64 {
    let reciprocal_sum: f64 = components
        .iter()
        .filter_map(|c| c.values.resistance)
        .filter(|r| *r > 0.0)
        .map(|r| 1.0 / r)
        .sum();

    if reciprocal_sum > 0.0 {
        1.0 / reciprocal_sum
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::circuit::{ComponentId, Quantities};

    fn component(index: usize, values: Quantities) -> Component {
        Component::with_values(ComponentId(index), values)
    }

    #[test]
    fn test_all_unknown_aggregates_to_zero() {
        let components = vec![component(0, Quantities::empty())];
        let series = aggregate_series(&components);
        assert_eq!(series.resistance, 0.0);
        assert_eq!(series.voltage, 0.0);
        assert_eq!(series.current, 0.0);
        assert_eq!(series.power, 0.0);

        let parallel = aggregate_parallel(&components);
        assert_eq!(parallel.resistance, 0.0);
        assert_eq!(parallel.current, 0.0);
    }

    #[test]
    fn test_series_sums_and_common_current() {
        let components = vec![
            component(
                0,
                Quantities {
                    resistance: Some(10.0),
                    voltage: Some(20.0),
                    current: Some(2.0),
                    power: Some(40.0),
                },
            ),
            component(
                1,
                Quantities {
                    resistance: Some(20.0),
                    voltage: Some(40.0),
                    current: Some(2.0),
                    power: Some(80.0),
                },
            ),
        ];

        let aggregates = aggregate_series(&components);
        assert_abs_diff_eq!(aggregates.resistance, 30.0);
        assert_abs_diff_eq!(aggregates.voltage, 60.0);
        assert_abs_diff_eq!(aggregates.current, 2.0);
        assert_abs_diff_eq!(aggregates.power, 120.0);
    }

    #[test]
    fn test_parallel_reciprocal_resistance() {
        let components = vec![
            component(
                0,
                Quantities {
                    resistance: Some(10.0),
                    ..Quantities::empty()
                },
            ),
            component(
                1,
                Quantities {
                    resistance: Some(20.0),
                    ..Quantities::empty()
                },
            ),
            component(
                2,
                Quantities {
                    resistance: Some(20.0),
                    ..Quantities::empty()
                },
            ),
        ];

        // 1/10 + 1/20 + 1/20 = 0.2
        assert_abs_diff_eq!(aggregate_parallel(&components).resistance, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_parallel_skips_unusable_resistances() {
        let components = vec![
            component(
                0,
                Quantities {
                    resistance: Some(0.0),
                    ..Quantities::empty()
                },
            ),
            component(
                1,
                Quantities {
                    resistance: Some(10.0),
                    ..Quantities::empty()
                },
            ),
        ];
        assert_abs_diff_eq!(aggregate_parallel(&components).resistance, 10.0);
    }

    #[test]
    fn test_first_known_takes_first_valid() {
        let components = vec![
            component(0, Quantities::empty()),
            component(
                1,
                Quantities {
                    current: Some(3.0),
                    ..Quantities::empty()
                },
            ),
        ];
        assert_abs_diff_eq!(aggregate_series(&components).current, 3.0);
    }
}
