//! How a typed line `Ax + By + C = 0` meets the curve.

use log::debug;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{
    coeffs::{Coeffs, LinearCoeffs},
    error::GeometryError,
    is_zero::{IsZero, EPS},
    quadratic::discriminant,
    r2::R2,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(tag = "kind", content = "points", rename_all = "lowercase")]
pub enum LineContact {
    /// Double root: the line touches the curve
    Tangent(R2<f64>),
    Secant([ R2<f64>; 2 ]),
    /// Parallel to an asymptote or a parabola's axis: one transversal crossing
    Crossing(R2<f64>),
    Miss,
}

pub fn line_contact(coeffs: &Coeffs, line: &LinearCoeffs) -> Result<LineContact, GeometryError> {
    let LinearCoeffs { a, b, c } = *line;
    let n2 = a * a + b * b;
    if a.is_zero() && b.is_zero() {
        return Err(GeometryError::InvalidParameter { name: "line normal", value: n2.sqrt() });
    }
    let foot = R2 { x: a, y: b } * (-c / n2);
    let dir = R2 { x: -b, y: a };
    let at = |t: f64| foot + dir * t;
    let [ k2, k1, k0 ] = coeffs.along(foot, dir);
    let contact = if k2.is_zero() {
        if k1.is_zero() {
            LineContact::Miss
        } else {
            LineContact::Crossing(at(-k0 / k1))
        }
    } else {
        let disc = discriminant(k2, k1, k0);
        let scale = k1 * k1 + (4. * k2 * k0).abs();
        if disc.abs() <= EPS * scale {
            LineContact::Tangent(at(-k1 / (2. * k2)))
        } else if disc > 0. {
            let d = disc.sqrt();
            LineContact::Secant([ at((-k1 + d) / (2. * k2)), at((-k1 - d) / (2. * k2)) ])
        } else {
            LineContact::Miss
        }
    };
    debug!("line_contact {}: K = [{}, {}, {}], {:?}", line, k2, k1, k0, contact);
    Ok(contact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{parse_general, parse_linear};
    use test_log::test;

    fn contact(curve: &str, line: &str) -> Result<LineContact, GeometryError> {
        line_contact(&parse_general(curve).unwrap(), &parse_linear(line).unwrap())
    }

    #[test]
    fn circle() {
        assert_eq!(contact("x^2 + y^2 = 25", "x = 5"), Ok(LineContact::Tangent(R2::new(5., 0.))));
        assert_eq!(contact("x^2 + y^2 = 25", "3x + 4y - 25 = 0"), Ok(LineContact::Tangent(R2::new(3., 4.))));
        assert_eq!(contact("x^2 + y^2 = 25", "x = 6"), Ok(LineContact::Miss));
        match contact("x^2 + y^2 = 25", "y = 0").unwrap() {
            LineContact::Secant([ p0, p1 ]) => {
                assert_relative_eq!(p0, R2::new(-5., 0.));
                assert_relative_eq!(p1, R2::new(5., 0.));
            },
            c => panic!("Expected secant, found {:?}", c),
        }
    }

    #[test]
    fn rotated_ellipse_secant() {
        let coeffs = parse_general("5x^2 - 6xy + 5y^2 - 32 = 0").unwrap();
        match line_contact(&coeffs, &parse_linear("y = x").unwrap()).unwrap() {
            LineContact::Secant(ps) => {
                for p in ps {
                    assert_abs_diff_eq!(coeffs.eval(p), 0., epsilon = 1e-9);
                    assert_relative_eq!(p.norm(), 4., epsilon = 1e-9);
                }
            },
            c => panic!("Expected secant, found {:?}", c),
        }
    }

    #[test]
    fn crossings() {
        assert_eq!(contact("y^2 = 8x", "y = 4"), Ok(LineContact::Crossing(R2::new(2., 4.))));
        // An asymptote of xy = 8 never meets it
        assert_eq!(contact("xy = 8", "x = 0"), Ok(LineContact::Miss));
        assert_eq!(contact("xy = 8", "y = 2"), Ok(LineContact::Crossing(R2::new(4., 2.))));
    }

    #[test]
    fn invalid_line() {
        let coeffs = parse_general("x^2 + y^2 = 25").unwrap();
        assert!(matches!(
            line_contact(&coeffs, &LinearCoeffs::new(0., 0., 1.)),
            Err(GeometryError::InvalidParameter { name: "line normal", .. })
        ));
    }
}
