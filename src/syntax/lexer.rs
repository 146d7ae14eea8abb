use std::{iter::Peekable, str::CharIndices};

use super::token::{Operator, Token, TokenKind};
use crate::error::{ErrorKind, PResult};

pub(crate) struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
    /// Characters consumed so far, which is also the 1-based column of the last one.
    column: usize,
    done: bool,
}

/// Tokenizes a whole line. The last token is always `Eof`.
pub(crate) fn lex(src: &str) -> PResult<Vec<Token<'_>>> {
    Lexer::new(src).collect()
}

impl<'src> Iterator for Lexer<'src> {
    type Item = PResult<Token<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let token = self.next_token();
        match &token {
            Ok(Token {
                kind: TokenKind::Eof,
                ..
            })
            | Err(_) => self.done = true,
            Ok(token) => log::trace!("{:?} at column {}", token.kind, token.pos),
        }
        Some(token)
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
            column: 0,
            done: false,
        }
    }

    fn next_token(&mut self) -> PResult<Token<'src>> {
        loop {
            let (off, c) = match self.next_char() {
                None => return Ok(Token::new(TokenKind::Eof, self.column + 1)),
                Some(next) => next,
            };
            let pos = self.column;

            let kind = match c {
                '+' => TokenKind::Op(Operator::Plus),
                '-' => TokenKind::Op(Operator::Minus),
                '*' => TokenKind::Op(Operator::Mul),
                '/' => TokenKind::Op(Operator::Div),
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                ';' => TokenKind::Semicolon,
                '=' if self.bump_if('=') => TokenKind::Op(Operator::EqEq),
                '=' => TokenKind::Eq,
                '!' if self.bump_if('=') => TokenKind::Op(Operator::NotEq),
                '!' => TokenKind::Bang,
                '"' => self.read_string(off)?,
                c if c.is_ascii_digit() => self.read_number(off, pos)?,
                c if Self::is_id_start(c) => self.read_id(off),
                // whitespace and unknown characters are skipped
                _ => continue,
            };

            return Ok(Token::new(kind, pos));
        }
    }

    fn next_char(&mut self) -> Option<(usize, char)> {
        let next = self.chars.next();
        if next.is_some() {
            self.column += 1;
        }
        next
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.next_char();
    }

    fn bump_if(&mut self, expected: char) -> bool {
        match self.chars.peek() {
            Some(&(_, c)) if c == expected => {
                self.bump();
                true
            }
            _ => false,
        }
    }

    fn slice_until<P>(&mut self, from_off: usize, predicate: P) -> &'src str
    where
        P: Fn(char) -> bool,
    {
        while let Some(&(off, c)) = self.chars.peek() {
            if predicate(c) {
                return &self.src[from_off..off];
            }
            self.bump();
        }
        &self.src[from_off..self.src.len()]
    }

    fn read_number(&mut self, from_off: usize, pos: usize) -> PResult<TokenKind<'src>> {
        let _ = self.slice_until(from_off, |c| !c.is_ascii_digit());

        if self.bump_if('.') {
            match self.chars.peek() {
                Some(&(_, c)) if c.is_ascii_digit() => (),
                _ => return Err(ErrorKind::MalformedNumber.at(self.column + 1)),
            }
        }

        let s = self.slice_until(from_off, |c| !c.is_ascii_digit());
        s.parse::<f64>()
            .map(TokenKind::Number)
            .map_err(|_| ErrorKind::MalformedNumber.at(pos))
    }

    fn read_string(&mut self, from_off: usize) -> PResult<TokenKind<'src>> {
        let start = from_off + 1;

        loop {
            match self.next_char() {
                Some((off, '"')) => return Ok(TokenKind::Str(&self.src[start..off])),
                Some((_, '\n' | '\0')) => {
                    return Err(ErrorKind::UnterminatedString.at(self.column))
                }
                Some(_) => (),
                None => return Err(ErrorKind::UnterminatedString.at(self.column + 1)),
            }
        }
    }

    fn read_id(&mut self, from_off: usize) -> TokenKind<'src> {
        TokenKind::Id(self.slice_until(from_off, |c| !Self::is_id_part(c)))
    }

    fn is_id_start(c: char) -> bool {
        match c {
            c if c >= 'a' && c <= 'z' => true,
            c if c >= 'A' && c <= 'Z' => true,
            '_' => true,
            _ => false,
        }
    }

    fn is_id_part(c: char) -> bool {
        Self::is_id_start(c) || c.is_ascii_digit()
    }
}

#[cfg(test)]
mod test {
    use super::{
        super::token::{Operator, TokenKind},
        lex,
    };
    use crate::error::ErrorKind;

    fn tokenize_str(s: &str) -> Vec<TokenKind> {
        lex(s).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn read_number() {
        let tokens = tokenize_str("48$7 1024 3.25\t9");
        let expected = &[
            TokenKind::Number(48.0),
            TokenKind::Number(7.0),
            TokenKind::Number(1024.0),
            TokenKind::Number(3.25),
            TokenKind::Number(9.0),
            TokenKind::Eof,
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn read_operators() {
        use Operator::*;

        let tokens = tokenize_str("+-*/();= == != !");
        let expected = &[
            TokenKind::Op(Plus),
            TokenKind::Op(Minus),
            TokenKind::Op(Mul),
            TokenKind::Op(Div),
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Semicolon,
            TokenKind::Eq,
            TokenKind::Op(EqEq),
            TokenKind::Op(NotEq),
            TokenKind::Bang,
            TokenKind::Eof,
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn read_id_and_string() {
        let tokens = tokenize_str("_foo1 = \"hello world\" + true");
        let expected = &[
            TokenKind::Id("_foo1"),
            TokenKind::Eq,
            TokenKind::Str("hello world"),
            TokenKind::Op(Operator::Plus),
            TokenKind::Id("true"),
            TokenKind::Eof,
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn positions_are_one_based() {
        let positions: Vec<usize> = lex("x  == 12").unwrap().iter().map(|t| t.pos).collect();
        assert_eq!(positions, vec![1, 4, 7, 9]);
    }

    #[test]
    fn columns_count_characters() {
        let tokens = lex("\"é\" + 1").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.pos).collect();
        assert_eq!(tokens[0].kind, TokenKind::Str("é"));
        assert_eq!(positions, vec![1, 5, 7, 8]);

        let positions: Vec<usize> = lex("ü 1 +").unwrap().iter().map(|t| t.pos).collect();
        assert_eq!(positions, vec![3, 5, 6]);

        let err = lex("\"日本").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnterminatedString);
        assert_eq!(err.pos, 4);
    }

    #[test]
    fn eof_at_empty_line() {
        let tokens = lex("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].pos, 1);
    }

    #[test]
    fn malformed_number() {
        let err = lex("1 + 2.x").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedNumber);
        assert_eq!(err.pos, 7);

        let err = lex("12.").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedNumber);
        assert_eq!(err.pos, 4);
    }

    #[test]
    fn unterminated_string() {
        let err = lex("\"abc").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnterminatedString);
        assert_eq!(err.pos, 5);

        let err = lex("\"ab\ncd\"").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnterminatedString);
        assert_eq!(err.pos, 4);
    }
}
