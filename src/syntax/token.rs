#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    Plus,
    Minus,
    Mul,
    Div,

    EqEq,
    NotEq,
}

pub(crate) type Precedence = u8;

impl Operator {
    /// All binary operators are left-associative.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::EqEq | Self::NotEq => 5,
            Self::Plus | Self::Minus => 10,
            Self::Mul | Self::Div => 20,
        }
    }

    /// Single-character tag; `==` and `!=` are tagged `=` and `!`.
    pub fn tag(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::EqEq => '=',
            Self::NotEq => '!',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum TokenKind<'src> {
    Number(f64),
    Str(&'src str),
    Op(Operator),
    Id(&'src str),

    LParen,
    RParen,

    Eq,
    Bang,
    Semicolon,

    Eof,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Token<'src> {
    pub kind: TokenKind<'src>,
    /// 1-based source column of the first character.
    pub pos: usize,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind<'src>, pos: usize) -> Self {
        Self { kind, pos }
    }
}
