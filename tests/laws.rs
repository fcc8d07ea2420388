//! Algebraic laws the evaluator must satisfy.
//!
//! Every law is checked over all combinations of the named sets.

use test_log::test;
use venn_sets::{are_expressions_equivalent, parse};

const NAMES: [&str; 5] = ["A", "B", "C", "U", "∅"];

fn assert_same(lhs: &str, rhs: &str) {
    let l = parse(lhs);
    let r = parse(rhs);
    assert!(l.is_some(), "{} failed to parse", lhs);
    assert_eq!(l, r, "{} != {}", lhs, rhs);
}

fn pairs() -> impl Iterator<Item = (&'static str, &'static str)> {
    NAMES.into_iter().flat_map(|x| NAMES.into_iter().map(move |y| (x, y)))
}

fn triples() -> impl Iterator<Item = (&'static str, &'static str, &'static str)> {
    pairs().flat_map(|(x, y)| NAMES.into_iter().map(move |z| (x, y, z)))
}

// ─── Constants ─────────────────────────────────────────────────────────────────

#[test]
fn named_sets() {
    assert_eq!(parse("A"), Some(vec![1, 4, 5, 7]));
    assert_eq!(parse("∅"), Some(vec![]));
    assert_eq!(parse("U"), Some(vec![1, 2, 3, 4, 5, 6, 7, 8]));
}

#[test]
fn results_are_sorted_and_unique() {
    for (x, y, z) in triples() {
        let regions = parse(&format!("({x}∪{y}')∪({z}∩{x})")).unwrap();
        assert!(regions.windows(2).all(|w| w[0] < w[1]), "{:?}", regions);
    }
}

// ─── Complement ────────────────────────────────────────────────────────────────

#[test]
fn double_complement() {
    for x in NAMES {
        assert_same(&format!("{x}''"), x);
    }
}

#[test]
fn complement_partitions_universe() {
    for x in NAMES {
        assert_same(&format!("{x}∪{x}'"), "U");
        assert_same(&format!("{x}∩{x}'"), "∅");
    }
}

#[test]
fn de_morgan() {
    assert_same("(A∪B)'", "A'∩B'");
    assert_same("(A∩B)'", "A'∪B'");
    for (x, y) in pairs() {
        assert_same(&format!("({x}∪{y})'"), &format!("{x}'∩{y}'"));
        assert_same(&format!("({x}∩{y})'"), &format!("{x}'∪{y}'"));
    }
}

// ─── Union and intersection ────────────────────────────────────────────────────

#[test]
fn commutativity() {
    assert_same("A∪B", "B∪A");
    assert_same("A∩B", "B∩A");
    for (x, y) in pairs() {
        assert_same(&format!("{x}∪{y}"), &format!("{y}∪{x}"));
        assert_same(&format!("{x}∩{y}"), &format!("{y}∩{x}"));
    }
}

#[test]
fn associativity() {
    assert_same("(A∪B)∪C", "A∪(B∪C)");
    for (x, y, z) in triples() {
        assert_same(&format!("({x}∪{y})∪{z}"), &format!("{x}∪({y}∪{z})"));
        assert_same(&format!("({x}∩{y})∩{z}"), &format!("{x}∩({y}∩{z})"));
    }
}

#[test]
fn distributivity() {
    for (x, y, z) in triples() {
        assert_same(&format!("{x}∩({y}∪{z})"), &format!("({x}∩{y})∪({x}∩{z})"));
        assert_same(&format!("{x}∪({y}∩{z})"), &format!("({x}∪{y})∩({x}∪{z})"));
    }
}

// ─── Difference ────────────────────────────────────────────────────────────────

#[test]
fn difference_glyphs_agree() {
    assert_same("A\\B", "A∖B");
    assert_same("A-B", "A∖B");
    assert_same("A∖B", "A∩B'");
}

#[test]
fn difference_is_left_associative() {
    assert_same("A∖B∖C", "(A∖B)∖C");
    assert_eq!(parse("A∖(B∖C)"), Some(vec![1, 4, 7]));
    assert_eq!(parse("A∖B∖C"), Some(vec![1]));
}

// ─── Fail-soft boundary ────────────────────────────────────────────────────────

#[test]
fn malformed_input_is_none() {
    for input in ["A∪", "(A", "A∪∪B", "%", "A)", "()", "∪A"] {
        assert_eq!(parse(input), None, "input {:?}", input);
    }
}

#[test]
fn whitespace_is_ignored() {
    assert_same("A ∪ B", "A∪B");
    assert_same(" ( A ∩ B ) '\n", "(A∩B)'");
}

#[test]
fn equivalence() {
    assert!(are_expressions_equivalent("A'∩B'", "(A∪B)'"));
    assert!(!are_expressions_equivalent("A", "B"));
    assert!(!are_expressions_equivalent("A∪", "A∪"));
}

#[test]
fn long_complement_chain() {
    let even = format!("A{}", "'".repeat(64));
    let odd = format!("A{}", "'".repeat(65));
    assert_same(&even, "A");
    assert_same(&odd, "A'");
}
