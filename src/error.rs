use crate::runtime::value::ValueKind;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Stage {
    Lexical,
    Syntax,
    Runtime,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub(crate) enum ErrorKind {
    #[error("Unexpected end of line in string")]
    UnterminatedString,
    #[error("Expected number after '.'")]
    MalformedNumber,

    #[error("invalid expression")]
    InvalidExpression,
    #[error("expected {0}")]
    Expected(&'static str),
    #[error("only identifiers can be assigned to")]
    InvalidAssignTarget,
    #[error("expression nested too deeply")]
    TooDeep,

    #[error("cannot assign to reserved word '{0}'")]
    ReservedAssignment(String),
    #[error("unresolved symbol '{0}'")]
    UnresolvedSymbol(String),
    #[error("type mismatch: {0} and {1}")]
    TypeMismatch(ValueKind, ValueKind),
    #[error("cannot apply arithmetic to booleans")]
    BooleanArithmetic,
    #[error("cannot apply '{0}' to {1}")]
    InvalidOperand(char, ValueKind),
    #[error("invalid operation with strings: '{0}'")]
    InvalidStringOp(char),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("unary '-' cannot be applied to {0}")]
    InvalidNegation(ValueKind),
}

impl ErrorKind {
    pub fn stage(&self) -> Stage {
        match self {
            Self::UnterminatedString | Self::MalformedNumber => Stage::Lexical,
            Self::InvalidExpression
            | Self::Expected(_)
            | Self::InvalidAssignTarget
            | Self::TooDeep => Stage::Syntax,
            _ => Stage::Runtime,
        }
    }

    /// Marks this error at a 1-based source column.
    pub fn at(self, pos: usize) -> Error {
        Error { kind: self, pos }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
#[error("{kind}")]
pub(crate) struct Error {
    pub kind: ErrorKind,
    pub pos: usize,
}

pub(crate) type PResult<T> = Result<T, Error>;
