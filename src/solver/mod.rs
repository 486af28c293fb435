//! The Ohm's law constraint solver.
//!
//! Solving happens in three stages, leaves first:
//!
//! 1. [`solve_basic`] completes a single element from any two of its
//!    four quantities using the defining identities.
//! 2. [`solve_series`] / [`solve_parallel`] run fixed-point propagation
//!    over a component list: the topology's shared quantity (current in
//!    series, voltage in parallel) is discovered and broadcast, then
//!    every component is completed from its own fields, repeating until
//!    a pass changes nothing.
//! 3. [`aggregate_series`] / [`aggregate_parallel`] summarize the final
//!    list into circuit-wide totals.
//!
//! All stages carry full-precision `f64` values; display rounding is
//! the presentation layer's job.

mod aggregate;
mod basic;
mod propagate;

pub use aggregate::{aggregate_parallel, aggregate_series, Aggregates};
pub use basic::solve_basic;
pub use propagate::{solve, solve_parallel, solve_series};

/// Maximum propagation passes over the component list.
///
/// A safety bound, not a convergence criterion: a handful of components
/// settles in two or three passes, and hitting the cap is not an error.
pub const MAX_PASSES: usize = 50;
