//! Recursive descent over [`Token`]s:
//!
//! ```text
//! equation := expr ('=' expr)?
//! expr     := term (('+' | '-') term)*
//! term     := unary (('*' | '/') unary | power)*     // juxtaposition multiplies
//! unary    := '-' unary | '+' unary | power
//! power    := primary ('^' number)?
//! primary  := number | 'x' | 'y' | '(' expr ')'
//! ```

use crate::error::ParseError;

use super::{lexer::{Tok, Token}, poly::Poly};

pub struct Parser<'a> {
    tokens: &'a [Token],
    idx: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Parser<'a> {
        Parser { tokens, idx: 0 }
    }

    fn peek(&self) -> Option<Tok> {
        self.tokens.get(self.idx).map(|t| t.tok)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.idx).copied();
        if token.is_some() {
            self.idx += 1;
        }
        token
    }

    fn unexpected(token: Token) -> ParseError {
        ParseError::UnexpectedToken { pos: token.pos, found: token.tok.describe() }
    }

    /// Parse all tokens, returning `lhs − rhs`.
    pub fn equation(&mut self) -> Result<Poly, ParseError> {
        let lhs = self.expr()?;
        let poly = if self.peek() == Some(Tok::Eq) {
            self.idx += 1;
            let rhs = self.expr()?;
            lhs - rhs
        } else {
            lhs
        };
        match self.next() {
            None => Ok(poly),
            Some(token) => Err(Self::unexpected(token)),
        }
    }

    fn expr(&mut self) -> Result<Poly, ParseError> {
        let mut acc = self.term()?;
        loop {
            match self.peek() {
                Some(Tok::Plus) => {
                    self.idx += 1;
                    acc = acc + self.term()?;
                },
                Some(Tok::Minus) => {
                    self.idx += 1;
                    acc = acc - self.term()?;
                },
                _ => return Ok(acc),
            }
        }
    }

    fn term(&mut self) -> Result<Poly, ParseError> {
        let mut acc = self.unary()?;
        loop {
            match self.peek() {
                Some(Tok::Star) => {
                    self.idx += 1;
                    acc = acc.mul(&self.unary()?)?;
                },
                Some(Tok::Slash) => {
                    self.idx += 1;
                    acc = acc.div(&self.unary()?)?;
                },
                Some(Tok::Num(_)) | Some(Tok::X) | Some(Tok::Y) | Some(Tok::LParen) => {
                    acc = acc.mul(&self.power()?)?;
                },
                _ => return Ok(acc),
            }
        }
    }

    fn unary(&mut self) -> Result<Poly, ParseError> {
        match self.peek() {
            Some(Tok::Minus) => {
                self.idx += 1;
                Ok(-self.unary()?)
            },
            Some(Tok::Plus) => {
                self.idx += 1;
                self.unary()
            },
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Poly, ParseError> {
        let base = self.primary()?;
        if self.peek() != Some(Tok::Caret) {
            return Ok(base);
        }
        self.idx += 1;
        match self.next() {
            Some(Token { tok: Tok::Num(n), .. }) => base.pow(n),
            Some(token) => Err(Self::unexpected(token)),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn primary(&mut self) -> Result<Poly, ParseError> {
        let token = self.next().ok_or(ParseError::UnexpectedEnd)?;
        match token.tok {
            Tok::Num(n) => Ok(Poly::constant(n)),
            Tok::X => Ok(Poly::x()),
            Tok::Y => Ok(Poly::y()),
            Tok::LParen => {
                let inner = self.expr()?;
                match self.next() {
                    Some(Token { tok: Tok::RParen, .. }) => Ok(inner),
                    _ => Err(ParseError::UnclosedParen { pos: token.pos }),
                }
            },
            _ => Err(Self::unexpected(token)),
        }
    }
}
