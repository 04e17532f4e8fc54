//! General-form coefficients from a conic's canonical parameters.

use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{coeffs::Coeffs, error::GeometryError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "lowercase")]
pub enum HyperbolaOrientation {
    /// `(x−h)²/a² − (y−k)²/b² = 1`
    Horizontal,
    /// `(y−k)²/a² − (x−h)²/b² = 1`
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "kebab-case")]
pub enum ParabolaOrientation {
    /// `(y−k)² = 4p(x−h)`
    HorizontalRight,
    /// `(y−k)² = −4p(x−h)`
    HorizontalLeft,
    /// `(x−h)² = 4p(y−k)`
    VerticalUp,
    /// `(x−h)² = −4p(y−k)`
    VerticalDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CanonicalForm {
    /// `(x−h)²/a² + (y−k)²/b² = 1`
    Ellipse { h: f64, k: f64, a: f64, b: f64 },
    Hyperbola { h: f64, k: f64, a: f64, b: f64, orientation: HyperbolaOrientation },
    Parabola { h: f64, k: f64, p: f64, orientation: ParabolaOrientation },
}

fn check(name: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value == 0. || !value.is_finite() {
        Err(GeometryError::InvalidParameter { name, value })
    } else {
        Ok(value)
    }
}

fn check_center(h: f64, k: f64) -> Result<(), GeometryError> {
    if !h.is_finite() {
        return Err(GeometryError::InvalidParameter { name: "h", value: h });
    }
    if !k.is_finite() {
        return Err(GeometryError::InvalidParameter { name: "k", value: k });
    }
    Ok(())
}

impl CanonicalForm {
    /// Expand to `Ax² + Bxy + Cy² + Dx + Ey + F = 0`, cleared of denominators.
    pub fn to_coeffs(&self) -> Result<Coeffs, GeometryError> {
        match *self {
            CanonicalForm::Ellipse { h, k, a, b } => {
                check_center(h, k)?;
                let a2 = check("a", a)?.powi(2);
                let b2 = check("b", b)?.powi(2);
                Ok(Coeffs::new(
                    b2, 0., a2,
                    -2. * b2 * h, -2. * a2 * k,
                    b2 * h * h + a2 * k * k - a2 * b2,
                ))
            },
            CanonicalForm::Hyperbola { h, k, a, b, orientation } => {
                check_center(h, k)?;
                let a2 = check("a", a)?.powi(2);
                let b2 = check("b", b)?.powi(2);
                Ok(match orientation {
                    HyperbolaOrientation::Horizontal => Coeffs::new(
                        b2, 0., -a2,
                        -2. * b2 * h, 2. * a2 * k,
                        b2 * h * h - a2 * k * k - a2 * b2,
                    ),
                    HyperbolaOrientation::Vertical => Coeffs::new(
                        -a2, 0., b2,
                        2. * a2 * h, -2. * b2 * k,
                        b2 * k * k - a2 * h * h - a2 * b2,
                    ),
                })
            },
            CanonicalForm::Parabola { h, k, p, orientation } => {
                check_center(h, k)?;
                let p4 = 4. * check("p", p)?;
                Ok(match orientation {
                    ParabolaOrientation::HorizontalRight | ParabolaOrientation::HorizontalLeft => {
                        let p4 = if orientation == ParabolaOrientation::HorizontalLeft { -p4 } else { p4 };
                        Coeffs::new(0., 0., 1., -p4, -2. * k, k * k + p4 * h)
                    },
                    ParabolaOrientation::VerticalUp | ParabolaOrientation::VerticalDown => {
                        let p4 = if orientation == ParabolaOrientation::VerticalDown { -p4 } else { p4 };
                        Coeffs::new(1., 0., 0., -2. * h, -p4, h * h + p4 * k)
                    },
                })
            },
        }
    }
}
