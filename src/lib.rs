//! # venn-sets: set expressions over a three-set Venn diagram
//!
//! **`venn-sets`** evaluates small, human-typed set-theory expressions such as
//! `(A∪B)'∩C` to the regions of a three-circle Venn diagram they cover.
//! The result drives region highlighting in a diagram view.
//!
//! ## Regions
//!
//! The diagram has 8 regions, numbered 1 to 8, one per combination of
//! membership in `A`, `B` and `C` (see [`universe`]). A set expression
//! denotes a subset of these regions:
//!
//! - `A` = {1, 4, 5, 7}, `B` = {2, 5, 6, 7}, `C` = {3, 4, 6, 7}
//! - `U` = {1, ..., 8}, `∅` = {}
//!
//! ## Syntax
//!
//! - `∪` union, `∩` intersection, `\` / `∖` / `-` difference
//! - postfix `'` complement (relative to `U`)
//! - parentheses for grouping; whitespace is ignored
//!
//! Complement binds tightest, then intersection, then union and difference
//! (left-associative, same level).
//!
//! ## Basic Usage
//!
//! ```rust
//! use venn_sets::{are_expressions_equivalent, describe_set, parse};
//!
//! let regions = parse("(A ∪ B)'").unwrap();
//! assert_eq!(regions, vec![3, 8]);
//! assert_eq!(describe_set(&regions), "{3, 8}");
//!
//! // Malformed input yields no regions rather than an error.
//! assert_eq!(parse("A ∪"), None);
//!
//! assert!(are_expressions_equivalent("A'∩B'", "(A∪B)'"));
//! ```
//!
//! Callers that need to know *why* an expression was rejected use
//! [`try_parse`], which reports a [`ParseError`].
//!
//! ## Core Components
//!
//! - **[`token`]**: string to token stream.
//! - **[`parser`]**: token stream to [`SetExpr`][ast::SetExpr].
//! - **[`eval`]**: expression to [`RegionSet`][bitset::RegionSet].
//! - **[`regions`]**: region filtering, equivalence and description helpers.

pub mod ast;
pub mod bitset;
pub mod error;
pub mod eval;
pub mod parser;
pub mod regions;
pub mod token;
pub mod universe;

pub use error::{LexError, ParseError, SyntaxError};
pub use regions::{are_expressions_equivalent, describe_set, elements_to_regions};

use crate::ast::SetExpr;
use crate::parser::Parser;
use crate::universe::STANDARD;

/// Tokenizes and parses an expression without evaluating it.
pub fn parse_expr(expression: &str) -> Result<SetExpr, ParseError> {
    let tokens = token::tokenize(expression)?;
    let expr = Parser::parse(&tokens)?;
    Ok(expr)
}

/// Evaluates an expression to its sorted region ids, reporting why it failed
/// otherwise.
pub fn try_parse(expression: &str) -> Result<Vec<u32>, ParseError> {
    let expr = parse_expr(expression)?;
    let regions = STANDARD.eval(&expr).to_vec();
    log::debug!("{} = {:?}", expr, regions);
    Ok(regions)
}

/// Evaluates an expression to its sorted region ids.
///
/// Returns `None` for any lexical or syntax error.
pub fn parse(expression: &str) -> Option<Vec<u32>> {
    match try_parse(expression) {
        Ok(regions) => Some(regions),
        Err(_err) => {
            #[cfg(debug_assertions)]
            log::debug!("failed to parse {:?}: {}", expression, _err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::token::TokenKind;

    #[test]
    fn test_parse_constants() {
        assert_eq!(parse("A"), Some(vec![1, 4, 5, 7]));
        assert_eq!(parse("B"), Some(vec![2, 5, 6, 7]));
        assert_eq!(parse("C"), Some(vec![3, 4, 6, 7]));
        assert_eq!(parse("∅"), Some(vec![]));
        assert_eq!(parse("U"), Some(vec![1, 2, 3, 4, 5, 6, 7, 8]));
    }

    #[test]
    fn test_parse_malformed_is_none() {
        for input in ["A∪", "(A", "A∪∪B", "%", "", "A B", "D"] {
            assert_eq!(parse(input), None, "input {:?}", input);
        }
    }

    #[test]
    fn test_try_parse_errors() {
        assert_eq!(try_parse("%"), Err(ParseError::Lex(LexError { character: '%', offset: 0 })));
        assert_eq!(
            try_parse("A∪"),
            Err(ParseError::Syntax(SyntaxError::ExpectedAtom { found: TokenKind::Eof }))
        );
        assert_eq!(
            try_parse("(A"),
            Err(ParseError::Syntax(SyntaxError::ExpectedRParen { found: TokenKind::Eof }))
        );
        assert_eq!(
            try_parse("A B"),
            Err(ParseError::Syntax(SyntaxError::TrailingInput { found: TokenKind::Set('B') }))
        );
    }

    #[test]
    fn test_whitespace_tolerance() {
        assert_eq!(parse("A ∪ B"), parse("A∪B"));
        assert_eq!(parse("  ( A ∩ B ) ' "), parse("(A∩B)'"));
    }

    #[test]
    fn test_parse_expr_display() {
        let expr = parse_expr("( A ∪ B ) \\ C").unwrap();
        assert_eq!(expr.to_string(), "A∪B∖C");
    }
}
