use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    Union,
    Intersect,
    Difference,
}

impl BinaryOp {
    /// Binding strength; higher binds tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOp::Union | BinaryOp::Difference => 1,
            BinaryOp::Intersect => 2,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Union => "∪",
            BinaryOp::Intersect => "∩",
            BinaryOp::Difference => "∖",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UnaryOp {
    Complement,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum SetExpr {
    SetRef(char),
    Binary {
        op: BinaryOp,
        left: Box<SetExpr>,
        right: Box<SetExpr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<SetExpr>,
    },
}

impl SetExpr {
    pub fn set(name: char) -> Self {
        SetExpr::SetRef(name)
    }

    pub fn binary(op: BinaryOp, left: Self, right: Self) -> Self {
        SetExpr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn union(left: Self, right: Self) -> Self {
        Self::binary(BinaryOp::Union, left, right)
    }

    pub fn intersect(left: Self, right: Self) -> Self {
        Self::binary(BinaryOp::Intersect, left, right)
    }

    pub fn difference(left: Self, right: Self) -> Self {
        Self::binary(BinaryOp::Difference, left, right)
    }

    /// Wraps `operand` in a complement. Double complements are kept as-is.
    pub fn complement(operand: Self) -> Self {
        SetExpr::Unary {
            op: UnaryOp::Complement,
            operand: Box::new(operand),
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            SetExpr::Binary { op, .. } => op.precedence(),
            SetExpr::SetRef(_) | SetExpr::Unary { .. } => 3,
        }
    }
}

fn write_operand(f: &mut Formatter<'_>, expr: &SetExpr, parens: bool) -> std::fmt::Result {
    if parens {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

/// Renders the expression with as few parentheses as the grammar allows.
impl Display for SetExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SetExpr::SetRef(name) => write!(f, "{}", name),
            SetExpr::Binary { op, left, right } => {
                let prec = op.precedence();
                write_operand(f, left, left.precedence() < prec)?;
                write!(f, "{}", op.symbol())?;
                // Operators are left-associative, so an equal-precedence
                // right operand needs grouping.
                write_operand(f, right, right.precedence() <= prec)
            }
            SetExpr::Unary {
                op: UnaryOp::Complement,
                operand,
            } => {
                write_operand(f, operand, matches!(**operand, SetExpr::Binary { .. }))?;
                write!(f, "'")
            }
        }
    }
}
