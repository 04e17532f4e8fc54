use std::ops::{Add, Neg, Sub};

use crate::{coeffs::Coeffs, error::ParseError};

/// Exponents of x and y for each slot: x², xy, y², x, y, 1.
const MONOMIALS: [ (u8, u8); 6 ] = [ (2, 0), (1, 1), (0, 2), (1, 0), (0, 1), (0, 0) ];

/// Exponent pairs larger than this are not representable.
const MAX_EXPONENT: u32 = 64;

fn slot(px: u8, py: u8) -> Option<usize> {
    MONOMIALS.iter().position(|m| *m == (px, py))
}

/// Polynomial in x and y of total degree ≤ 2, in the slot order of [`Coeffs`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Poly(pub [ f64; 6 ]);

impl Poly {
    pub fn constant(c: f64) -> Poly {
        Poly([ 0., 0., 0., 0., 0., c ])
    }
    pub fn x() -> Poly {
        Poly([ 0., 0., 0., 1., 0., 0. ])
    }
    pub fn y() -> Poly {
        Poly([ 0., 0., 0., 0., 1., 0. ])
    }

    /// Highest total degree with a coefficient that is exactly non-zero.
    pub fn degree(&self) -> u8 {
        self.0.iter().zip(MONOMIALS.iter())
            .filter(|(c, _)| **c != 0.)
            .map(|(_, (px, py))| px + py)
            .max()
            .unwrap_or(0)
    }

    pub fn as_constant(&self) -> Option<f64> {
        if self.degree() == 0 { Some(self.0[5]) } else { None }
    }

    pub fn mul(&self, o: &Poly) -> Result<Poly, ParseError> {
        let mut out = [ 0.; 6 ];
        for (i, l) in self.0.iter().enumerate().filter(|(_, c)| **c != 0.) {
            for (j, r) in o.0.iter().enumerate().filter(|(_, c)| **c != 0.) {
                let (lx, ly) = MONOMIALS[i];
                let (rx, ry) = MONOMIALS[j];
                let idx = slot(lx + rx, ly + ry).ok_or(ParseError::DegreeTooHigh)?;
                out[idx] += l * r;
            }
        }
        Ok(Poly(out))
    }

    pub fn div(&self, o: &Poly) -> Result<Poly, ParseError> {
        let divisor = o.as_constant().ok_or(ParseError::NonConstantDivisor)?;
        if divisor == 0. {
            return Err(ParseError::DivisionByZero);
        }
        Ok(Poly(self.0.map(|c| c / divisor)))
    }

    pub fn pow(&self, n: f64) -> Result<Poly, ParseError> {
        if n.fract() != 0. || n < 0. || n > MAX_EXPONENT as f64 {
            return Err(ParseError::NonIntegerExponent(n.to_string()));
        }
        let n = n as u32;
        if let Some(c) = self.as_constant() {
            return Ok(Poly::constant(c.powi(n as i32)));
        }
        let mut acc = Poly::constant(1.);
        for _ in 0..n {
            acc = acc.mul(self)?;
        }
        Ok(acc)
    }
}

impl Add for Poly {
    type Output = Poly;
    fn add(self, rhs: Poly) -> Poly {
        let mut out = self.0;
        out.iter_mut().zip(rhs.0.iter()).for_each(|(l, r)| *l += r);
        Poly(out)
    }
}

impl Neg for Poly {
    type Output = Poly;
    fn neg(self) -> Poly {
        Poly(self.0.map(|c| -c))
    }
}

impl Sub for Poly {
    type Output = Poly;
    fn sub(self, rhs: Poly) -> Poly {
        self + -rhs
    }
}

impl From<Poly> for Coeffs {
    fn from(p: Poly) -> Coeffs {
        // `+ 0.` folds −0 into 0
        let [ a, b, c, d, e, f ] = p.0.map(|c| c + 0.);
        Coeffs { a, b, c, d, e, f }
    }
}
