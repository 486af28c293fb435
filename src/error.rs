//! Error types for the Ohmlaw circuit solver.
//!
//! This module provides a unified error type [`OhmlawError`] that covers
//! all error conditions that can occur during sheet parsing and input
//! validation. The solver core itself never fails: under-determined
//! circuits simply come back with fields still unset.

use thiserror::Error;

/// Result type alias using [`OhmlawError`].
pub type Result<T> = std::result::Result<T, OhmlawError>;

/// Unified error type for all Ohmlaw operations.
#[derive(Error, Debug)]
pub enum OhmlawError {
    // ============ Sheet Parsing Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Unknown directive
    #[error("Unknown directive '{directive}' at line {line}")]
    UnknownDirective { directive: String, line: usize },

    /// Unknown electrical quantity in an assignment
    #[error("Unknown quantity '{field}' at line {line} (expected V, I, R or P)")]
    UnknownQuantity { field: String, line: usize },

    /// The same quantity assigned twice on one line
    #[error("Quantity '{field}' assigned twice for '{name}' at line {line}")]
    DuplicateQuantity {
        name: String,
        field: String,
        line: usize,
    },

    // ============ Sheet Structure Errors ============
    /// No solve mode directive in the sheet
    #[error("No solve mode specified (use '.basic', '.series' or '.parallel')")]
    MissingMode,

    /// More than one solve mode directive
    #[error("Solve mode set twice (second directive at line {line})")]
    DuplicateMode { line: usize },

    /// Sheet contains no component lines
    #[error("Sheet has no components")]
    NoComponents,

    // ============ Input Validation Errors ============
    /// User-supplied totals contradict explicit component values.
    /// One message per conflicting component, joined with newlines so a
    /// caller can surface all of them at once.
    #[error("{}", .conflicts.join("\n"))]
    TotalsConflict { conflicts: Vec<String> },

    // ============ I/O Errors ============
    /// Error reading a sheet file
    #[error("Failed to read sheet file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl OhmlawError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create a totals-conflict error from rendered conflict messages
    pub fn conflicts(conflicts: Vec<String>) -> Self {
        Self::TotalsConflict { conflicts }
    }
}
