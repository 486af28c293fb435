//! WASM bindings for Ohmlaw Core.
//!
//! This module provides JavaScript-friendly bindings for use in web
//! browsers, where the calculator UI lives.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuitSolver } from 'ohmlaw_core';
//!
//! await init();
//!
//! const sheet = `
//!   .series
//!   .totals I=2
//!   E1 R=10
//!   E2 R=20
//! `;
//!
//! const solver = new WasmCircuitSolver(sheet);
//! solver.value(0, 'V');   // 20
//! solver.total('P');      // 120
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{validate_components, validate_totals, Component, Mode, Quantity};
use crate::dsl;
use crate::error::OhmlawError;
use crate::solver::{aggregate_parallel, aggregate_series, solve, Aggregates};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible circuit solver.
///
/// Parses and solves a circuit sheet on construction; the solved values
/// and aggregates are then read through accessor methods.
#[wasm_bindgen]
pub struct WasmCircuitSolver {
    mode: Mode,
    solved: Vec<Component>,
    aggregates: Option<Aggregates>,
}

#[wasm_bindgen]
impl WasmCircuitSolver {
    /// Create a solver from a circuit sheet string.
    ///
    /// # Arguments
    /// * `sheet` - The circuit description in sheet format
    ///
    /// # Returns
    /// A solved `WasmCircuitSolver`, or an error string if the sheet is
    /// invalid or its totals conflict with component values (conflict
    /// messages are joined with newlines).
    #[wasm_bindgen(constructor)]
    pub fn new(sheet: &str) -> Result<WasmCircuitSolver, JsValue> {
        // Parse the sheet
        let ast = dsl::parse(sheet).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mode = ast.mode.ok_or_else(|| {
            JsValue::from_str(&OhmlawError::MissingMode.to_string())
        })?;

        // Validate
        let components = ast.to_components();
        validate_components(&components).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let conflicts = validate_totals(&components, &ast.totals, mode);
        if !conflicts.is_empty() {
            let error =
                OhmlawError::conflicts(conflicts.iter().map(|c| c.to_string()).collect());
            return Err(JsValue::from_str(&error.to_string()));
        }

        // Solve
        let solved = solve(&components, &ast.totals, mode);
        let aggregates = match mode {
            Mode::Basic => None,
            Mode::Series => Some(aggregate_series(&solved)),
            Mode::Parallel => Some(aggregate_parallel(&solved)),
        };

        Ok(WasmCircuitSolver {
            mode,
            solved,
            aggregates,
        })
    }

    /// Number of components in the solved list.
    #[wasm_bindgen(getter)]
    pub fn component_count(&self) -> usize {
        self.solved.len()
    }

    /// The solve mode ("basic", "series" or "parallel").
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.mode.to_string()
    }

    /// Get a solved value for one component.
    ///
    /// # Arguments
    /// * `index` - Zero-based component position
    /// * `quantity` - One of "V", "I", "R", "P" (case-insensitive)
    ///
    /// # Returns
    /// The full-precision value, or `undefined` if it could not be
    /// resolved or the arguments are out of range.
    #[wasm_bindgen]
    pub fn value(&self, index: usize, quantity: &str) -> Option<f64> {
        let quantity = parse_quantity(quantity)?;
        self.solved.get(index)?.values.get(quantity)
    }

    /// Get a circuit-wide aggregate.
    ///
    /// # Arguments
    /// * `quantity` - One of "V", "I", "R", "P" (case-insensitive)
    ///
    /// # Returns
    /// The aggregate value, or `undefined` in basic mode or for an
    /// unknown quantity name.
    #[wasm_bindgen]
    pub fn total(&self, quantity: &str) -> Option<f64> {
        let aggregates = self.aggregates.as_ref()?;
        Some(match parse_quantity(quantity)? {
            Quantity::Voltage => aggregates.voltage,
            Quantity::Current => aggregates.current,
            Quantity::Resistance => aggregates.resistance,
            Quantity::Power => aggregates.power,
        })
    }
}

fn parse_quantity(text: &str) -> Option<Quantity> {
    let mut chars = text.chars();
    let symbol = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Quantity::from_symbol(symbol)
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
