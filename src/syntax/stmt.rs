use crate::syntax::expr::Expression;

#[derive(Debug, PartialEq, Clone)]
pub(crate) enum Statement<'src> {
    Expr(Box<Expression<'src>>),
    Assignment {
        id: &'src str,
        /// Column of the `=` token.
        pos: usize,
        value: Box<Expression<'src>>,
    },
}
