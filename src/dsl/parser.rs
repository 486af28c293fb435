//! Parser for the circuit sheet format.

use super::ast::{ComponentDef, SheetAst};
use super::lexer::{parse_value, Lexer, Token, TokenKind};
use crate::circuit::{Mode, Quantities, Quantity};
use crate::error::{OhmlawError, Result};

/// Parser for circuit sheets.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token().unwrap_or(Token {
            kind: TokenKind::Eof,
            text: String::new(),
            line: 1,
            column: 1,
        });
        Self { lexer, current }
    }

    /// Parse an entire sheet.
    pub fn parse(&mut self) -> Result<SheetAst> {
        let mut ast = SheetAst::new();

        while self.current.kind != TokenKind::Eof {
            match self.current.kind {
                TokenKind::Newline => {
                    self.advance()?;
                    continue;
                }
                TokenKind::Directive => self.parse_directive(&mut ast)?,
                TokenKind::Identifier => {
                    let component = self.parse_component()?;
                    ast.components.push(component);
                }
                _ => {
                    return Err(OhmlawError::parse(
                        self.current.line,
                        format!("unexpected token '{}'", self.current.text),
                    ));
                }
            }

            // Each directive and component occupies one line
            if self.current.kind == TokenKind::Newline {
                self.advance()?;
            }
        }

        Ok(ast)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn parse_directive(&mut self, ast: &mut SheetAst) -> Result<()> {
        let directive = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        if directive.eq_ignore_ascii_case(".totals") {
            ast.totals = self.parse_assignments("totals", line)?;
            return Ok(());
        }

        match Mode::from_keyword(directive.trim_start_matches('.')) {
            Some(mode) => {
                if ast.mode.is_some() {
                    return Err(OhmlawError::DuplicateMode { line });
                }
                ast.mode = Some(mode);
            }
            None => {
                return Err(OhmlawError::UnknownDirective { directive, line });
            }
        }

        Ok(())
    }

    fn parse_component(&mut self) -> Result<ComponentDef> {
        let name = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        let values = self.parse_assignments(&name, line)?;

        Ok(ComponentDef { name, values, line })
    }

    /// Parse the `FIELD=value` assignments remaining on the current line.
    fn parse_assignments(&mut self, name: &str, line: usize) -> Result<Quantities> {
        let mut values = Quantities::empty();

        while self.current.kind != TokenKind::Newline && self.current.kind != TokenKind::Eof {
            let field = self.expect(TokenKind::Identifier)?;
            let quantity = single_symbol(&field.text)
                .and_then(Quantity::from_symbol)
                .ok_or_else(|| OhmlawError::UnknownQuantity {
                    field: field.text.clone(),
                    line,
                })?;

            if values.get(quantity).is_some() {
                return Err(OhmlawError::DuplicateQuantity {
                    name: name.to_string(),
                    field: field.text,
                    line,
                });
            }

            self.expect(TokenKind::Equals)?;

            let number = self.expect(TokenKind::Number)?;
            let value = parse_value(&number.text).ok_or_else(|| {
                OhmlawError::parse(line, format!("invalid number '{}'", number.text))
            })?;

            values.set(quantity, value);
        }

        Ok(values)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            let token = self.current.clone();
            self.advance()?;
            Ok(token)
        } else {
            Err(OhmlawError::parse(
                self.current.line,
                format!("expected {:?}, got '{}'", kind, self.current.text),
            ))
        }
    }
}

fn single_symbol(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}
