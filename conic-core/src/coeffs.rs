use std::fmt::{Display, Formatter, self};

use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{fmt::{general_equation, linear_equation}, is_zero::IsZero, linalg::Eigen2, r2::R2};

/// Ax² + Bxy + Cy² + Dx + Ey + F = 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Tsify)]
pub struct Coeffs {
    #[serde(rename = "A")]
    pub a: f64,
    #[serde(rename = "B")]
    pub b: f64,
    #[serde(rename = "C")]
    pub c: f64,
    #[serde(rename = "D")]
    pub d: f64,
    #[serde(rename = "E")]
    pub e: f64,
    #[serde(rename = "F")]
    pub f: f64,
}

impl Coeffs {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Coeffs {
        Coeffs { a, b, c, d, e, f }
    }

    /// B² − 4AC; invariant under rotation and translation.
    pub fn disc(&self) -> f64 {
        self.b * self.b - 4. * self.a * self.c
    }

    pub fn has_quadratic_terms(&self) -> bool {
        !self.a.is_zero() || !self.b.is_zero() || !self.c.is_zero()
    }

    /// Value of the left-hand side at `p`.
    pub fn eval(&self, p: R2<f64>) -> f64 {
        let Coeffs { a, b, c, d, e, f } = *self;
        let R2 { x, y } = p;
        a * x * x + b * x * y + c * y * y + d * x + e * y + f
    }

    /// (∂F/∂x, ∂F/∂y) at `p`.
    pub fn gradient(&self, p: R2<f64>) -> R2<f64> {
        let Coeffs { a, b, c, d, e, .. } = *self;
        let R2 { x, y } = p;
        R2 {
            x: 2. * a * x + b * y + d,
            y: b * x + 2. * c * y + e,
        }
    }

    /// Both partial derivatives vanish at `p`: no tangent direction is defined there.
    pub fn is_singular_at(&self, p: R2<f64>) -> bool {
        let g = self.gradient(p);
        g.x.is_zero() && g.y.is_zero()
    }

    /// Eigen decomposition of the quadratic part `[[A, B/2], [B/2, C]]`.
    pub fn quadratic_form(&self) -> Eigen2 {
        Eigen2::symmetric(self.a, self.b / 2., self.c)
    }

    /// Coefficients `[K₂, K₁, K₀]` of `F(origin + t·dir)` as a polynomial in `t`.
    pub fn along(&self, origin: R2<f64>, dir: R2<f64>) -> [ f64; 3 ] {
        let Coeffs { a, b, c, d, e, .. } = *self;
        let R2 { x: x0, y: y0 } = origin;
        let R2 { x: dx, y: dy } = dir;
        let k2 = a * dx * dx + b * dx * dy + c * dy * dy;
        let k1 = 2. * a * x0 * dx + b * (x0 * dy + y0 * dx) + 2. * c * y0 * dy + d * dx + e * dy;
        let k0 = self.eval(origin);
        [ k2, k1, k0 ]
    }

    pub fn to_array(&self) -> [ f64; 6 ] {
        [ self.a, self.b, self.c, self.d, self.e, self.f ]
    }
}

impl Display for Coeffs {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", general_equation(&self.to_array()))
    }
}

/// Ax + By + C = 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Tsify)]
pub struct LinearCoeffs {
    #[serde(rename = "A")]
    pub a: f64,
    #[serde(rename = "B")]
    pub b: f64,
    #[serde(rename = "C")]
    pub c: f64,
}

impl LinearCoeffs {
    pub fn new(a: f64, b: f64, c: f64) -> LinearCoeffs {
        LinearCoeffs { a, b, c }
    }
    pub fn eval(&self, p: R2<f64>) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }
}

impl Display for LinearCoeffs {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", linear_equation(self.a, self.b, self.c, 3))
    }
}
