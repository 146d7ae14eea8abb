use super::{env::Environment, value::Value};
use crate::{
    error::{ErrorKind, PResult},
    syntax::{parse, stmt::Statement, ExprKind, Expression, Operator},
};

pub(crate) struct Interpreter {
    global_env: Environment,
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            global_env: Environment::new(),
        }
    }

    /// Evaluates every statement of `src`, pushing one value per statement.
    /// Values of statements that completed before an error stay in `results`.
    pub fn eval(&mut self, src: &str, results: &mut Vec<Value>) -> PResult<()> {
        let statements = parse(src)?;

        for stmt in &statements {
            let value = self.eval_stmt(stmt)?;
            results.push(value);
        }

        Ok(())
    }

    pub fn variable_count(&self) -> usize {
        self.global_env.len()
    }

    fn eval_stmt(&mut self, stmt: &Statement) -> PResult<Value> {
        match stmt {
            Statement::Expr(expr) => self.eval_expr(expr),
            Statement::Assignment { id, pos, value } => {
                if matches!(*id, "true" | "false") {
                    return Err(ErrorKind::ReservedAssignment(id.to_string()).at(*pos));
                }

                let value = self.eval_expr(value)?;
                log::debug!("{id} => {value:?}");
                self.global_env.insert(id, value);

                Ok(Value::Null)
            }
        }
    }

    fn eval_expr(&self, expr: &Expression) -> PResult<Value> {
        match &expr.kind {
            ExprKind::Number(v) => Ok(Value::Number(*v)),
            ExprKind::Str(s) => Ok(Value::Str(s.to_string())),
            ExprKind::Ref(id) => self.eval_ref(id, expr.pos),
            ExprKind::Unary(operand) => match self.eval_expr(operand)? {
                Value::Number(v) => Ok(Value::Number(-v)),
                other => Err(ErrorKind::InvalidNegation(other.kind()).at(expr.pos)),
            },
            ExprKind::Binary { lhs, op, rhs } => {
                let lhs = self.eval_expr(lhs)?;
                let rhs = self.eval_expr(rhs)?;
                Self::eval_binary(lhs, *op, rhs).map_err(|kind| kind.at(expr.pos))
            }
        }
    }

    fn eval_ref(&self, id: &str, pos: usize) -> PResult<Value> {
        match id {
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            _ => match self.global_env.get(id) {
                Some(value) => Ok(value.clone()),
                None => Err(ErrorKind::UnresolvedSymbol(id.to_string()).at(pos)),
            },
        }
    }

    fn eval_binary(lhs: Value, op: Operator, rhs: Value) -> Result<Value, ErrorKind> {
        if lhs.kind() != rhs.kind() {
            return Err(ErrorKind::TypeMismatch(lhs.kind(), rhs.kind()));
        }

        match (op, lhs, rhs) {
            (Operator::EqEq, lhs, rhs) => Ok(Value::Boolean(lhs == rhs)),
            (Operator::NotEq, lhs, rhs) => Ok(Value::Boolean(lhs != rhs)),

            (Operator::Plus, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Operator::Minus, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a - b)),
            (Operator::Mul, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a * b)),
            (Operator::Div, Value::Number(_), Value::Number(b)) if b == 0.0 => {
                Err(ErrorKind::DivisionByZero)
            }
            (Operator::Div, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a / b)),

            (Operator::Plus, Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
            (op, Value::Str(_), Value::Str(_)) => Err(ErrorKind::InvalidStringOp(op.tag())),

            (_, Value::Boolean(_), Value::Boolean(_)) => Err(ErrorKind::BooleanArithmetic),
            (op, lhs, _) => Err(ErrorKind::InvalidOperand(op.tag(), lhs.kind())),
        }
    }
}
