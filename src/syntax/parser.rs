use crate::{
    error::{ErrorKind, PResult},
    syntax::{
        lex,
        stmt::Statement,
        token::{Token, TokenKind},
        ExprKind, ExprParser,
    },
};

/// Deepest expression tree the parser builds. Evaluation and drop recurse
/// over the tree, so this also bounds their stack use.
const MAX_DEPTH: usize = 256;

pub(crate) struct Parser<'src> {
    tokens: Vec<Token<'src>>,
    index: usize,
    depth: usize,
}

/// Lexes and parses one line of source into its top-level statements.
pub(crate) fn parse(src: &str) -> PResult<Vec<Statement<'_>>> {
    Parser::new(lex(src)?).parse()
}

impl<'src> Parser<'src> {
    pub fn new(mut tokens: Vec<Token<'src>>) -> Self {
        if !matches!(tokens.last(), Some(t) if t.kind == TokenKind::Eof) {
            let pos = tokens.last().map_or(1, |t| t.pos + 1);
            tokens.push(Token::new(TokenKind::Eof, pos));
        }

        Self {
            tokens,
            index: 0,
            depth: 0,
        }
    }

    pub fn parse(mut self) -> PResult<Vec<Statement<'src>>> {
        let mut statements = vec![];

        loop {
            while self.peek().kind == TokenKind::Semicolon {
                self.eat();
            }
            if self.peek().kind == TokenKind::Eof {
                break;
            }

            let stmt = self.parse_stmt()?;
            log::debug!("{stmt:?}");
            statements.push(*stmt);
        }

        Ok(statements)
    }

    fn parse_stmt(&mut self) -> PResult<Box<Statement<'src>>> {
        let target = self.parse_expr()?;

        if self.peek().kind != TokenKind::Eq {
            return Ok(Box::new(Statement::Expr(target)));
        }
        let eq = self.bump();

        let id = match target.kind {
            ExprKind::Ref(id) => id,
            _ => return Err(ErrorKind::InvalidAssignTarget.at(eq.pos)),
        };
        let value = self.parse_expr()?;

        Ok(Box::new(Statement::Assignment {
            id,
            pos: eq.pos,
            value,
        }))
    }

    #[inline(always)]
    pub(super) fn peek(&self) -> Token<'src> {
        self.tokens[self.index]
    }

    /// Returns the current token and advances, never moving past `Eof`.
    pub(super) fn bump(&mut self) -> Token<'src> {
        let token = self.peek();
        if token.kind != TokenKind::Eof {
            self.index += 1;
        }
        token
    }

    /// Enters one level of nesting, failing at `pos` past `MAX_DEPTH`.
    pub(super) fn enter(&mut self, pos: usize) -> PResult<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ErrorKind::TooDeep.at(pos));
        }
        Ok(())
    }

    pub(super) fn leave(&mut self, levels: usize) {
        self.depth -= levels;
    }

    pub(super) fn eat(&mut self) {
        let _ = self.bump();
    }

    pub(super) fn expect(
        &mut self,
        expected: TokenKind<'src>,
        thing: &'static str,
    ) -> PResult<Token<'src>> {
        let token = self.peek();
        if token.kind == expected {
            self.eat();
            return Ok(token);
        }
        Err(ErrorKind::Expected(thing).at(token.pos))
    }
}
