//! # Ohmlaw Core
//!
//! An Ohm's law constraint solver for series and parallel DC circuits.
//!
//! This library provides:
//! - A single-element solver deriving any two of {V, I, R, P} from the
//!   other two
//! - Fixed-point propagation over partially-specified series/parallel
//!   component lists, with circuit-wide totals as optional seeds
//! - Conflict detection between user-supplied totals and explicit
//!   component values
//! - Circuit-level aggregates (sums, shared values, reciprocal
//!   resistance)
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`dsl`] - Parser for the circuit sheet format
//! - [`circuit`] - Component/totals representation and input validation
//! - [`solver`] - Basic solver, propagation engine and aggregates
//! - [`output`] - Result table rendering (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! ohmlaw circuit.ohm
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmCircuitSolver } from 'ohmlaw_core';
//!
//! const solver = new WasmCircuitSolver(sheetText);
//! solver.value(0, 'V');
//! ```
//!
//! ## Solving Method
//!
//! A series or parallel topology pins one quantity to a single value
//! across every component (current in series, voltage in parallel).
//! Each solve:
//!
//! 1. Seeds that shared quantity from the totals record, if supplied
//! 2. Repeats, up to [`solver::MAX_PASSES`] times: discover the shared
//!    value, broadcast it to components missing it, then complete each
//!    component from its own known fields via the Ohm's law identities
//! 3. Stops as soon as a full pass changes nothing
//!
//! User-entered values are never overwritten; an under-determined
//! circuit comes back with the unresolvable fields still unset.

pub mod circuit;
pub mod dsl;
pub mod error;
pub mod solver;

#[cfg(feature = "cli")]
pub mod output;

// Re-export main types for convenience
pub use circuit::{Component, ComponentId, Mode, Quantities, Quantity, Totals};
pub use error::{OhmlawError, Result};
pub use solver::{
    aggregate_parallel, aggregate_series, solve, solve_basic, solve_parallel, solve_series,
    Aggregates,
};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuitSolver;
