//! Recursive-descent parser for set expressions.
//!
//! ```text
//! expression := term (('∪' | '∖') term)*
//! term       := factor ('∩' factor)*
//! factor     := atom ("'")*
//! atom       := SET | '(' expression ')'
//! ```
//!
//! Union and difference share the lowest precedence; all binary operators are
//! left-associative; complement is postfix and binds tightest.

use log::debug;

use crate::ast::{BinaryOp, SetExpr};
use crate::error::SyntaxError;
use crate::token::{Token, TokenKind};

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over a token stream produced by
    /// [`tokenize`][crate::token::tokenize].
    ///
    /// The stream is expected to end with [`TokenKind::Eof`]; a missing
    /// terminator is treated as if it were there.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses the whole stream into a single expression.
    pub fn parse(tokens: &'a [Token]) -> Result<SetExpr, SyntaxError> {
        let mut parser = Parser::new(tokens);
        let expr = parser.parse_expression()?;
        match parser.peek() {
            TokenKind::Eof => Ok(expr),
            found => {
                debug!("trailing input at token {}: {}", parser.pos, found);
                Err(SyntaxError::TrailingInput { found })
            }
        }
    }

    fn peek(&self) -> TokenKind {
        self.tokens.get(self.pos).map_or(TokenKind::Eof, |t| t.kind)
    }

    fn advance(&mut self) -> TokenKind {
        let kind = self.peek();
        if kind != TokenKind::Eof {
            self.pos += 1;
        }
        kind
    }

    fn parse_expression(&mut self) -> Result<SetExpr, SyntaxError> {
        let mut node = self.parse_term()?;
        loop {
            let op = match self.peek() {
                TokenKind::Union => BinaryOp::Union,
                TokenKind::Difference => BinaryOp::Difference,
                _ => return Ok(node),
            };
            self.advance();
            let rhs = self.parse_term()?;
            node = SetExpr::binary(op, node, rhs);
        }
    }

    fn parse_term(&mut self) -> Result<SetExpr, SyntaxError> {
        let mut node = self.parse_factor()?;
        while self.peek() == TokenKind::Intersect {
            self.advance();
            let rhs = self.parse_factor()?;
            node = SetExpr::intersect(node, rhs);
        }
        Ok(node)
    }

    fn parse_factor(&mut self) -> Result<SetExpr, SyntaxError> {
        let mut node = self.parse_atom()?;
        while self.peek() == TokenKind::Complement {
            self.advance();
            node = SetExpr::complement(node);
        }
        Ok(node)
    }

    fn parse_atom(&mut self) -> Result<SetExpr, SyntaxError> {
        match self.advance() {
            TokenKind::Set(name) => Ok(SetExpr::set(name)),
            TokenKind::LParen => {
                let inner = self.parse_expression()?;
                match self.advance() {
                    TokenKind::RParen => Ok(inner),
                    found => Err(SyntaxError::ExpectedRParen { found }),
                }
            }
            found => Err(SyntaxError::ExpectedAtom { found }),
        }
    }
}
