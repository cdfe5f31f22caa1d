use super::Expr;

/// Logical AND of one or more expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// Combines `operands` with AND. A single operand is returned as is and
    /// nested ANDs are flattened.
    pub fn and_from_vec(operands: Vec<Expr>) -> Self {
        let mut flat = Vec::with_capacity(operands.len());

        for operand in operands {
            match operand {
                Expr::And(and) => flat.extend(and.operands),
                operand => flat.push(operand),
            }
        }

        if flat.len() == 1 {
            return flat.pop().expect("one operand");
        }

        ExprAnd { operands: flat }.into()
    }

    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::and_from_vec(vec![lhs.into(), rhs.into()])
    }
}

impl From<ExprAnd> for Expr {
    fn from(value: ExprAnd) -> Self {
        Self::And(value)
    }
}
