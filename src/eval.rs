use crate::ast::{BinaryOp, SetExpr, UnaryOp};
use crate::bitset::RegionSet;
use crate::universe::Universe;

/// Anything that reduces to a set of regions of a [`Universe`].
pub trait Eval {
    fn eval(&self, universe: &Universe) -> RegionSet;
}

impl Universe {
    pub fn eval(&self, value: &impl Eval) -> RegionSet {
        value.eval(self)
    }
}

impl Eval for RegionSet {
    fn eval(&self, _universe: &Universe) -> RegionSet {
        self.clone()
    }
}

impl Eval for SetExpr {
    fn eval(&self, universe: &Universe) -> RegionSet {
        match self {
            SetExpr::SetRef(name) => universe.regions(*name),
            SetExpr::Binary { op, left, right } => {
                let l = left.eval(universe);
                let r = right.eval(universe);
                match op {
                    BinaryOp::Union => l.union(&r),
                    BinaryOp::Intersect => l.intersection(&r),
                    BinaryOp::Difference => l.difference(&r),
                }
            }
            SetExpr::Unary {
                op: UnaryOp::Complement,
                operand,
            } => operand.eval(universe).complement(&universe.universal_set()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::universe::STANDARD;

    fn eval(expr: &SetExpr) -> Vec<u32> {
        STANDARD.eval(expr).to_vec()
    }

    #[test]
    fn test_eval_set_ref() {
        assert_eq!(eval(&SetExpr::set('A')), vec![1, 4, 5, 7]);
        assert_eq!(eval(&SetExpr::set('U')), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(eval(&SetExpr::set('∅')), Vec::<u32>::new());
    }

    #[test]
    fn test_eval_unknown_name_is_empty() {
        assert_eq!(eval(&SetExpr::set('D')), Vec::<u32>::new());
        let expr = SetExpr::union(SetExpr::set('A'), SetExpr::set('Z'));
        assert_eq!(eval(&expr), vec![1, 4, 5, 7]);
    }

    #[test]
    fn test_eval_binary() {
        let a = SetExpr::set('A');
        let b = SetExpr::set('B');
        assert_eq!(eval(&SetExpr::union(a.clone(), b.clone())), vec![1, 2, 4, 5, 6, 7]);
        assert_eq!(eval(&SetExpr::intersect(a.clone(), b.clone())), vec![5, 7]);
        assert_eq!(eval(&SetExpr::difference(a, b)), vec![1, 4]);
    }

    #[test]
    fn test_eval_complement() {
        assert_eq!(eval(&SetExpr::complement(SetExpr::set('A'))), vec![2, 3, 6, 8]);
        assert_eq!(eval(&SetExpr::complement(SetExpr::set('U'))), Vec::<u32>::new());
        assert_eq!(eval(&SetExpr::complement(SetExpr::set('D'))), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_eval_region_set() {
        let set = RegionSet::from(&[3, 1][..]);
        assert_eq!(STANDARD.eval(&set).to_vec(), vec![1, 3]);
    }
}
