//! Helpers that sit between evaluated sets and the diagram.

use log::debug;

use crate::universe::STANDARD;

/// Keeps only the values that are regions of the diagram, in input order.
///
/// Anything else is dropped without complaint.
pub fn elements_to_regions(elements: &[u32]) -> Vec<u32> {
    elements.iter().copied().filter(|&e| STANDARD.is_region(e)).collect()
}

/// Returns true iff both expressions parse and denote the same set.
///
/// A malformed expression is never equivalent to anything, itself included.
pub fn are_expressions_equivalent(expr_a: &str, expr_b: &str) -> bool {
    match (crate::try_parse(expr_a), crate::try_parse(expr_b)) {
        (Ok(a), Ok(b)) => a == b,
        (a, b) => {
            debug!("not comparing {:?} and {:?}: {:?} / {:?}", expr_a, expr_b, a.err(), b.err());
            false
        }
    }
}

/// Human-readable listing of a set, e.g. `{1, 4, 5, 7}`.
///
/// Elements are listed in ascending order exactly as given; repeats are kept.
pub fn describe_set(elements: &[u32]) -> String {
    if elements.is_empty() {
        return "Empty set ∅".to_string();
    }
    let mut sorted = elements.to_vec();
    sorted.sort_unstable();
    let items: Vec<String> = sorted.iter().map(|e| e.to_string()).collect();
    format!("{{{}}}", items.join(", "))
}
