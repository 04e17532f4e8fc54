use log::debug;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{
    coeffs::{Coeffs, LinearCoeffs},
    config::FractionConfig,
    conic::{Analysis, Conic},
    fmt::linear_equation,
    fraction::simplify_line,
    r2::R2,
};

/// Tangent line `Fx·x + Fy·y + c = 0` at `point`, where `(Fx, Fy)` is the gradient there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
pub struct Tangent {
    #[serde(rename = "Fx")]
    pub fx: f64,
    #[serde(rename = "Fy")]
    pub fy: f64,
    pub c: f64,
    pub point: R2<f64>,
    /// Smallest proportional integer coefficients, when they exist
    pub simplified: Option<[ i64; 3 ]>,
    #[serde(rename = "eqStr")]
    pub eq_str: String,
}

impl Tangent {
    pub fn line(&self) -> LinearCoeffs {
        LinearCoeffs::new(self.fx, self.fy, self.c)
    }
    /// `(−Fy, Fx)`: along the line.
    pub fn direction(&self) -> R2<f64> {
        R2 { x: -self.fy, y: self.fx }
    }
}

pub fn tangent_at(coeffs: &Coeffs, point: R2<f64>) -> Option<Tangent> {
    tangent_at_with(coeffs, point, &FractionConfig::default())
}

/// `None` at a singular point (vanishing gradient), where no tangent direction exists.
pub fn tangent_at_with(coeffs: &Coeffs, point: R2<f64>, config: &FractionConfig) -> Option<Tangent> {
    if coeffs.is_singular_at(point) {
        debug!("tangent_at {}: singular", point);
        return None;
    }
    let R2 { x: fx, y: fy } = coeffs.gradient(point);
    let c = -(fx * point.x + fy * point.y);
    let simplified = simplify_line(fx, fy, c, config);
    let eq_str = match simplified {
        Some([ a, b, c ]) => linear_equation(a as f64, b as f64, c as f64, 0),
        None => decimal_equation(fx, fy, c),
    };
    debug!("tangent_at {}: {}", point, eq_str);
    Some(Tangent { fx, fy, c, point, simplified, eq_str })
}

/// Two-decimal form, with the normal rescaled so its larger component is ±1 when it is smaller.
fn decimal_equation(fx: f64, fy: f64, c: f64) -> String {
    let m = fx.abs().max(fy.abs());
    let k = if m < 1. { m } else { 1. };
    linear_equation(fx / k, fy / k, c / k, 2)
}

/// Where the UI first places its tangent: the parabola's vertex, or the end of a central conic's
/// first semi-axis.
pub fn default_tangent_point(analysis: &Analysis) -> Option<R2<f64>> {
    match &analysis.conic {
        Conic::Parabola(p) => p.vertex.as_ref().map(|v| v.vertex),
        _ => {
            let central = analysis.central()?;
            let axes = central.axes.as_ref()?;
            Some(central.to_world(axes.a, 0.))
        },
    }
}

pub fn default_tangent(analysis: &Analysis) -> Option<Tangent> {
    tangent_at(&analysis.coeffs, default_tangent_point(analysis)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{conic::analyze, parse::parse_general};
    use test_log::test;

    fn coeffs(text: &str) -> Coeffs {
        parse_general(text).unwrap()
    }

    #[test]
    fn vertical_tangent() {
        let tangent = tangent_at(&coeffs("x^2/16 + y^2/9 = 1"), R2::new(4., 0.)).unwrap();
        assert_eq!(tangent.fx, 0.5);
        assert_eq!(tangent.fy, 0.);
        assert_eq!(tangent.c, -2.);
        assert_eq!(tangent.simplified, Some([ 1, 0, -4 ]));
        assert_eq!(tangent.eq_str, "x - 4 = 0");
        assert_eq!(tangent.line().to_string(), "0.5x - 2 = 0");
    }

    #[test]
    fn integer_forms() {
        let tangent = tangent_at(&coeffs("x^2 + y^2 = 25"), R2::new(3., 4.)).unwrap();
        assert_eq!(tangent.simplified, Some([ 3, 4, -25 ]));
        assert_eq!(tangent.eq_str, "3x + 4y - 25 = 0");

        let tangent = tangent_at(&coeffs("xy = 8"), R2::new(2., 4.)).unwrap();
        assert_eq!(tangent.simplified, Some([ 2, 1, -8 ]));
        let [ a, b, c ] = tangent.simplified.unwrap().map(|n| n as f64);
        // Proportional to the real coefficients
        assert_relative_eq!(a * tangent.fy, b * tangent.fx);
        assert_relative_eq!(a * tangent.c, c * tangent.fx);
    }

    #[test]
    fn decimal_fallback() {
        let config = FractionConfig::new(Some(1e-12), Some(1));
        let tangent = tangent_at_with(&coeffs("x^2/16 + y^2/9 = 1"), R2::new(4., 0.), &config).unwrap();
        assert_eq!(tangent.simplified, None);
        assert_eq!(tangent.eq_str, "x - 4 = 0");
    }

    #[test]
    fn near_singular_point() {
        let coeffs = coeffs("(x-1000)^2 - y^2 = 0");
        let point = R2::new(1000. + 2e-7, 2e-7);
        let tangent = tangent_at(&coeffs, point).unwrap();
        assert_eq!(tangent.simplified, Some([ 1, -1, -1000 ]));
        assert_eq!(tangent.eq_str, "x - y - 1000 = 0");

        let config = FractionConfig::new(Some(1e-12), Some(1));
        let tangent = tangent_at_with(&coeffs, point, &config).unwrap();
        assert_eq!(tangent.simplified, None);
        assert_eq!(tangent.eq_str, "x - y - 1000 = 0");
    }

    #[test]
    fn stays_on_curve() {
        let coeffs = coeffs("5x^2 - 6xy + 5y^2 - 32 = 0");
        let analysis = analyze(coeffs);
        let tangent = default_tangent(&analysis).unwrap();
        let p = tangent.point;
        assert_abs_diff_eq!(coeffs.eval(p), 0., epsilon = 1e-9);
        let dir = tangent.direction() / tangent.direction().norm();
        assert_abs_diff_eq!(dir.dot(&coeffs.gradient(p)), 0., epsilon = 1e-9);
        let h = 1e-4;
        assert!(coeffs.eval(p + dir * h).abs() < 1e-6);
        assert!(coeffs.eval(p - dir * h).abs() < 1e-6);
        // Off the line, F changes at first order
        let normal = coeffs.gradient(p) / coeffs.gradient(p).norm();
        assert!(coeffs.eval(p + normal * h).abs() > 1e-4);
    }

    #[test]
    fn defaults() {
        let tangent = default_tangent(&analyze(coeffs("y^2 = 8x"))).unwrap();
        assert_abs_diff_eq!(tangent.point, R2::ORIGIN, epsilon = 1e-12);
        assert_eq!(tangent.simplified, Some([ 1, 0, 0 ]));

        let tangent = default_tangent(&analyze(coeffs("x^2/16 + y^2/9 = 1"))).unwrap();
        assert_relative_eq!(tangent.point, R2::new(4., 0.), epsilon = 1e-9);

        // (x − 1)² = 0 has no vertex
        assert_eq!(default_tangent(&analyze(Coeffs::new(1., 0., 0., -2., 0., 1.))), None);
    }

    #[test]
    fn singular_point() {
        assert_eq!(tangent_at(&coeffs("x^2 + y^2 = 25"), R2::ORIGIN), None);
        assert_eq!(tangent_at(&coeffs("x^2 - y^2 = 0"), R2::ORIGIN), None);
    }

    #[test]
    fn json_keys() {
        let tangent = tangent_at(&coeffs("x^2 + y^2 = 25"), R2::new(3., 4.)).unwrap();
        let json = serde_json::to_value(&tangent).unwrap();
        assert_eq!(json["Fx"], 6.);
        assert_eq!(json["eqStr"], "3x + 4y - 25 = 0");
        assert_eq!(json["simplified"][2], -25);
    }
}
