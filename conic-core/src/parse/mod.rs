//! Equation text → coefficients.
//!
//! Input is normalized (whitespace dropped, unicode minus and `²` rewritten, lower-cased), tokenized
//! by [`lexer`], then evaluated by the recursive-descent [`parser`] into a [`Poly`] of degree ≤ 2.
//! An `=` moves the whole right-hand side to the left: `lhs = rhs` becomes `lhs − rhs = 0`.

pub mod lexer;
pub mod parser;
pub mod poly;

use log::debug;

use crate::{coeffs::{Coeffs, LinearCoeffs}, error::ParseError, is_zero::IsZero};

use lexer::{Tok, tokenize};
use parser::Parser;
pub use poly::Poly;

/// Parse `Ax² + Bxy + Cy² + Dx + Ey + F = 0` in any of the usual written forms (`x^2/16 + y^2/9 = 1`,
/// `y^2 = 8x`, `(x-2)^2 + (y+1)^2 = 4`, …).
pub fn parse_general(text: &str) -> Result<Coeffs, ParseError> {
    let poly = parse_poly(text)?;
    let coeffs = Coeffs::from(poly);
    debug!("parse_general({:?}): {:?}", text, coeffs);
    if !coeffs.has_quadratic_terms() {
        return Err(ParseError::NoQuadraticTerms);
    }
    Ok(coeffs)
}

/// Parse `Ax + By + C = 0`.
pub fn parse_linear(text: &str) -> Result<LinearCoeffs, ParseError> {
    let poly = parse_poly(text)?;
    if poly.degree() > 1 {
        return Err(ParseError::NotLinear);
    }
    let Coeffs { d, e, f, .. } = Coeffs::from(poly);
    let line = LinearCoeffs::new(d, e, f);
    debug!("parse_linear({:?}): {:?}", text, line);
    if line.a.is_zero() && line.b.is_zero() {
        return Err(ParseError::NoVariableTerms);
    }
    Ok(line)
}

/// Shared evaluator behind both entry points.
pub fn parse_poly(text: &str) -> Result<Poly, ParseError> {
    let normalized = lexer::normalize(text);
    if normalized.is_empty() {
        return Err(ParseError::Empty);
    }
    let tokens = tokenize(&normalized)?;
    let eqs: Vec<usize> = tokens.iter().enumerate().filter(|(_, t)| t.tok == Tok::Eq).map(|(idx, _)| idx).collect();
    match eqs.as_slice() {
        [] => {},
        [ idx ] => {
            if *idx == 0 || *idx == tokens.len() - 1 {
                return Err(ParseError::EmptySide);
            }
        },
        _ => return Err(ParseError::UnbalancedEquals(eqs.len())),
    }
    Parser::new(&tokens).equation()
}
