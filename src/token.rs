//! Tokenizer for set expressions.
//!
//! The alphabet is tiny: the set names `A`, `B`, `C`, `U` and `∅`, the
//! operators `∪`, `∩`, postfix `'`, one of `\`, `∖` or `-` for difference,
//! and parentheses. Whitespace is ignored anywhere.

use std::fmt::{Display, Formatter};

use log::trace;

use crate::error::LexError;

/// Names accepted as set references.
pub const SET_NAMES: [char; 5] = ['A', 'B', 'C', 'U', '∅'];

/// Glyphs that all mean set difference.
pub const DIFFERENCE_GLYPHS: [char; 3] = ['\\', '∖', '-'];

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Set(char),
    Union,
    Intersect,
    Complement,
    Difference,
    LParen,
    RParen,
    Eof,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Set(name) => write!(f, "{}", name),
            TokenKind::Union => write!(f, "∪"),
            TokenKind::Intersect => write!(f, "∩"),
            TokenKind::Complement => write!(f, "'"),
            TokenKind::Difference => write!(f, "∖"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}

/// A token together with its character offset in the input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

impl Token {
    pub const fn new(kind: TokenKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// The set name carried by a `Set` token.
    pub const fn value(&self) -> Option<char> {
        match self.kind {
            TokenKind::Set(name) => Some(name),
            _ => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.kind, self.offset)
    }
}

fn classify(c: char) -> Option<TokenKind> {
    match c {
        _ if SET_NAMES.contains(&c) => Some(TokenKind::Set(c)),
        _ if DIFFERENCE_GLYPHS.contains(&c) => Some(TokenKind::Difference),
        '∪' => Some(TokenKind::Union),
        '∩' => Some(TokenKind::Intersect),
        '\'' => Some(TokenKind::Complement),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        _ => None,
    }
}

/// Splits `input` into tokens, always terminated by [`TokenKind::Eof`].
///
/// Stops at the first unrecognized character; no partial stream is returned.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut end = 0;

    for (offset, c) in input.chars().enumerate() {
        end = offset + 1;
        if c.is_whitespace() {
            continue;
        }
        match classify(c) {
            Some(kind) => tokens.push(Token::new(kind, offset)),
            None => return Err(LexError { character: c, offset }),
        }
    }

    tokens.push(Token::new(TokenKind::Eof, end));
    trace!("tokenize({:?}) -> {} tokens", input, tokens.len());
    Ok(tokens)
}
