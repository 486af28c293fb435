//! Single-element solver.
//!
//! Given any two of {V, I, R, P} for one two-terminal element, the
//! remaining two follow from the defining identities:
//!
//! ```text
//! V = I*R        P = V*I
//! P = I^2 * R    P = V^2 / R
//! ```
//!
//! Each missing quantity is tried against a fixed chain of identities,
//! direct pair first, power-based fallbacks after. A candidate whose
//! denominator is zero is skipped and the next one tried. With fewer
//! than two independent knowns the missing fields simply stay unknown;
//! that partial state is valid input for the propagation engine.

use crate::circuit::{Quantities, Quantity};

/// Fill every derivable field of a single element.
///
/// Fields are resolved in the fixed order V, I, R, P, each derivation
/// seeing values filled earlier in the same call. Known fields pass
/// through untouched. Pure function of its input.
pub fn solve_basic(input: Quantities) -> Quantities {
    let mut values = input;
    for quantity in Quantity::ALL {
        if values.get(quantity).is_none() {
            if let Some(value) = derive(&values, quantity) {
                values.set(quantity, value);
            }
        }
    }
    values
}

/// Derive one quantity from the others, if enough of them are known.
///
/// Exposed within the crate so the propagation engine can probe a
/// component for the network's shared quantity without committing the
/// other derived fields.
pub(crate) fn derive(values: &Quantities, quantity: Quantity) -> Option<f64> {
    match quantity {
        Quantity::Voltage => derive_voltage(values),
        Quantity::Current => derive_current(values),
        Quantity::Resistance => derive_resistance(values),
        Quantity::Power => derive_power(values),
    }
}

fn derive_voltage(q: &Quantities) -> Option<f64> {
    match (q.current, q.resistance, q.power) {
        (Some(i), Some(r), _) => Some(i * r),
        (Some(i), _, Some(p)) if i != 0.0 => Some(p / i),
        (_, Some(r), Some(p)) => Some((p * r).sqrt()),
        _ => None,
    }
}

fn derive_current(q: &Quantities) -> Option<f64> {
    match (q.voltage, q.resistance, q.power) {
        (Some(v), Some(r), _) if r != 0.0 => Some(v / r),
        (Some(v), _, Some(p)) if v != 0.0 => Some(p / v),
        (_, Some(r), Some(p)) if r != 0.0 => Some((p / r).sqrt()),
        _ => None,
    }
}

fn derive_resistance(q: &Quantities) -> Option<f64> {
    match (q.voltage, q.current, q.power) {
        (Some(v), Some(i), _) if i != 0.0 => Some(v / i),
        (Some(v), _, Some(p)) if p != 0.0 => Some(v * v / p),
        (_, Some(i), Some(p)) if i != 0.0 => Some(p / (i * i)),
        _ => None,
    }
}

fn derive_power(q: &Quantities) -> Option<f64> {
    match (q.voltage, q.current, q.resistance) {
        (Some(v), Some(i), _) => Some(v * i),
        (_, Some(i), Some(r)) => Some(i * i * r),
        (Some(v), _, Some(r)) if r != 0.0 => Some(v * v / r),
        _ => None,
    }
}
