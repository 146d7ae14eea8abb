use crate::error::{ErrorKind, PResult};

use super::{
    expr::ExprKind,
    token::{Precedence, TokenKind},
    ExprParser, Expression, Operator, Parser,
};

impl<'src> ExprParser<'src> for Parser<'src> {
    fn parse_expr(&mut self) -> PResult<Box<Expression<'src>>> {
        self.parse_expr_with_precedence(1)
    }

    fn parse_expr_with_precedence(
        &mut self,
        min_prec: Precedence,
    ) -> PResult<Box<Expression<'src>>> {
        let mut lhs = self.parse_expr_lhs()?;
        // each binary node in a chain deepens the left spine
        let mut chain = 0;

        while let TokenKind::Op(op) = self.peek().kind {
            let prec = op.precedence();

            if prec < min_prec {
                break;
            }
            let op_token = self.bump();
            self.enter(op_token.pos)?;
            chain += 1;

            let rhs = self.parse_expr_with_precedence(prec + 1)?;

            lhs = Expression::new(ExprKind::Binary { lhs, op, rhs }, op_token.pos);
        }

        self.leave(chain);
        Ok(lhs)
    }

    fn parse_expr_lhs(&mut self) -> PResult<Box<Expression<'src>>> {
        let token = self.bump();
        match token.kind {
            TokenKind::Number(v) => Ok(Expression::new(ExprKind::Number(v), token.pos)),
            TokenKind::Str(s) => Ok(Expression::new(ExprKind::Str(s), token.pos)),
            TokenKind::Id(id) => Ok(Expression::new(ExprKind::Ref(id), token.pos)),
            TokenKind::LParen => {
                self.enter(token.pos)?;
                let expression = self.parse_grouping_expr()?;
                self.leave(1);
                Ok(expression)
            }
            TokenKind::Op(Operator::Minus) => {
                self.enter(token.pos)?;
                let expression = self.parse_unary_expr(token.pos)?;
                self.leave(1);
                Ok(expression)
            }
            _ => Err(ErrorKind::InvalidExpression.at(token.pos)),
        }
    }

    fn parse_grouping_expr(&mut self) -> PResult<Box<Expression<'src>>> {
        let expression = self.parse_expr()?;
        self.expect(TokenKind::RParen, "closing parenthesis")?;
        Ok(expression)
    }

    fn parse_unary_expr(&mut self, pos: usize) -> PResult<Box<Expression<'src>>> {
        let expression = self.parse_expr_lhs()?;
        Ok(Expression::new(ExprKind::Unary(expression), pos))
    }
}
