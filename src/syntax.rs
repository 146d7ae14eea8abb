mod expr;
mod expr_parser;
mod lexer;
mod parser;
pub(crate) mod stmt;
mod token;

pub(crate) use expr::{ExprKind, Expression};
pub(crate) use lexer::lex;
pub(crate) use parser::{parse, Parser};
pub(crate) use token::Operator;

use crate::error::PResult;

pub(crate) trait ExprParser<'src> {
    fn parse_expr(&mut self) -> PResult<Box<Expression<'src>>>;
    fn parse_expr_with_precedence(&mut self, min_prec: u8) -> PResult<Box<Expression<'src>>>;
    fn parse_expr_lhs(&mut self) -> PResult<Box<Expression<'src>>>;
    fn parse_grouping_expr(&mut self) -> PResult<Box<Expression<'src>>>;
    fn parse_unary_expr(&mut self, pos: usize) -> PResult<Box<Expression<'src>>>;
}
