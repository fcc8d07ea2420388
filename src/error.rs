//! Error types for tokenizing and parsing set expressions.
//!
//! Evaluation cannot fail, so these are the only errors in the pipeline.

use thiserror::Error;

use crate::token::TokenKind;

/// An unrecognized character found while tokenizing.
///
/// `offset` is the character (not byte) index in the original input, with
/// whitespace counted: in `"A ∪ %"` the `%` is at offset 4, not 2.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected character '{character}' at offset {offset}")]
pub struct LexError {
    pub character: char,
    pub offset: usize,
}

/// A token stream that does not match the expression grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("expected atom, got {found}")]
    ExpectedAtom { found: TokenKind },
    #[error("expected RPAREN, got {found}")]
    ExpectedRParen { found: TokenKind },
    #[error("trailing input: {found}")]
    TrailingInput { found: TokenKind },
}

/// Any failure of [`try_parse`][crate::try_parse].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}
