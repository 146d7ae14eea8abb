use super::token::Operator;

#[derive(Debug, PartialEq, Clone)]
pub(crate) enum ExprKind<'src> {
    Number(f64),
    Str(&'src str),
    Ref(&'src str),
    Unary(Box<Expression<'src>>),
    Binary {
        lhs: Box<Expression<'src>>,
        op: Operator,
        rhs: Box<Expression<'src>>,
    },
}

/// An expression node together with the column of the token that introduced it.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct Expression<'src> {
    pub kind: ExprKind<'src>,
    pub pos: usize,
}

impl<'src> Expression<'src> {
    pub fn new(kind: ExprKind<'src>, pos: usize) -> Box<Self> {
        Box::new(Self { kind, pos })
    }
}
