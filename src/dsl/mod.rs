//! Parser for the circuit sheet format.
//!
//! A sheet is the text-based equivalent of the calculator form: one line
//! per component, each carrying the quantities the user knows, plus
//! directives for the solve mode and the circuit-wide totals. The format
//! is line-oriented and human-editable.
//!
//! # Grammar Overview
//!
//! ```text
//! sheet       = { line }
//! line        = comment | directive | component | empty
//! comment     = ('#' | ';') { any_char }
//! directive   = mode_directive | totals_directive
//! mode_directive   = ".basic" | ".series" | ".parallel"
//! totals_directive = ".totals" { assignment }
//! component   = name { assignment }
//! assignment  = field '=' number
//! field       = 'V' | 'I' | 'R' | 'P'        (case-insensitive)
//!
//! number      = ['-'] digit+ ['.' digit+] [('e'|'E') ['-'|'+'] digit+] [unit_suffix]
//! unit_suffix = 'p' | 'n' | 'u' | 'm' | 'k' | 'M' | 'G'
//! name        = (letter | '_') { letter | digit | '_' }
//! ```
//!
//! # Directives
//!
//! | Directive | Description | Syntax |
//! |-----------|-------------|--------|
//! | .basic | Solve each component in isolation | `.basic` |
//! | .series | Series circuit (shared current) | `.series` |
//! | .parallel | Parallel circuit (shared voltage) | `.parallel` |
//! | .totals | Circuit-wide knowns | `.totals [V=..] [I=..] [R=..] [P=..]` |
//!
//! Exactly one mode directive is required. `.totals` is optional and only
//! meaningful for series/parallel sheets.
//!
//! # Example
//!
//! ```text
//! # three heaters on one feed
//! .series
//! .totals I=2
//! E1 R=10
//! E2 R=20
//! E3 R=30
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::{ComponentDef, SheetAst};
pub use lexer::{parse_value, Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a sheet string into an AST.
pub fn parse(input: &str) -> Result<SheetAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    parser.parse()
}

/// Parse a sheet file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<SheetAst> {
    let content =
        std::fs::read_to_string(path).map_err(|e| crate::error::OhmlawError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
    parse(&content)
}
