//! Circuit representation and input validation.
//!
//! This module provides the data model the solver operates on: a list of
//! [`Component`]s, each holding four optional electrical quantities, plus
//! an optional circuit-wide [`Totals`] record, and the validation that
//! runs before a solve is attempted.

mod types;
mod validate;

pub use types::{Component, ComponentId, Mode, Quantities, Quantity, Totals};
pub use validate::{
    validate_components, validate_parallel_totals, validate_series_totals, validate_totals,
    TotalsConflict, TOTALS_TOLERANCE,
};
