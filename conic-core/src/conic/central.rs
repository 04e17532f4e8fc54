//! Ellipses, circles and hyperbolas: translate to the center, rotate onto the principal axes.

use log::debug;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{
    coeffs::Coeffs,
    deg::Deg,
    is_zero::{IsZero, EIGEN_EPS, EPS},
    linalg::det2,
    r2::R2,
    transform::canonical_to_world,
};

use super::Kind;

/// Semi-axes and the quantities derived from them; only present when both eigenvalues are usable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct Axes {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub e: Option<f64>,
    pub latus_rectum: Option<f64>,
    pub foci: Option<[ R2<f64>; 2 ]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct Central {
    pub center: R2<f64>,
    /// The linear system for the center was singular; `center` is the origin
    pub center_defaulted: bool,
    /// Value of the form at the center: the constant term after translation
    pub f_prime: f64,
    pub rhs: f64,
    /// Eigenvalues, transverse (or major) axis first
    pub lambda: [ f64; 2 ],
    /// Unit principal directions, matching `lambda`
    pub vecs: [ R2<f64>; 2 ],
    pub a2: Option<f64>,
    pub b2: Option<f64>,
    /// Direction of `vecs[0]`, degrees
    pub angle: f64,
    pub axes: Option<Axes>,
}

impl Central {
    pub fn reduce(coeffs: &Coeffs, kind: Kind) -> Central {
        let Coeffs { a, b, c, d, e, .. } = *coeffs;
        let m = det2(2. * a, b, b, 2. * c);
        let center_defaulted = m.is_zero();
        let center = if center_defaulted {
            R2::ORIGIN
        } else {
            R2 {
                x: det2(-d, b, -e, 2. * c) / m,
                y: det2(2. * a, -d, b, -e) / m,
            }
        };
        let f_prime = coeffs.eval(center);
        let rhs = -f_prime;

        let mut eig = coeffs.quadratic_form();
        let swap = match kind {
            Kind::Hyperbola => eig.vals[0] / rhs < 0.,
            _ => eig.vals[0].abs() > eig.vals[1].abs(),
        };
        if swap {
            eig = eig.swap();
        }
        let semi = |lambda: f64| if lambda.abs() > EIGEN_EPS { Some(rhs / lambda) } else { None };
        let a2 = semi(eig.vals[0]);
        let b2 = semi(eig.vals[1]);
        let angle = eig.vecs[0].y.atan2(eig.vecs[0].x).deg();

        let axes = match (a2, b2) {
            (Some(a2), Some(b2)) => Some(Self::axes(kind, center, &eig.vecs, a2, b2)),
            _ => None,
        };
        debug!("central {}: center {} (defaulted: {}), F' {}, λ {:?}, a² {:?}, b² {:?}, θ {:.3}°", kind, center, center_defaulted, f_prime, eig.vals, a2, b2, angle);
        Central {
            center,
            center_defaulted,
            f_prime,
            rhs,
            lambda: eig.vals,
            vecs: eig.vecs,
            a2,
            b2,
            angle,
            axes,
        }
    }

    fn axes(kind: Kind, center: R2<f64>, vecs: &[ R2<f64>; 2 ], a2: f64, b2: f64) -> Axes {
        let a = a2.abs().sqrt();
        let b = b2.abs().sqrt();
        let c = match kind {
            Kind::Hyperbola => (a * a + b * b).sqrt(),
            _ => (a * a - b * b).abs().sqrt(),
        };
        let (e, latus_rectum) = if a > EPS {
            (Some(c / a), Some(2. * b * b / a))
        } else {
            (None, None)
        };
        let foci = if c.is_zero() {
            None
        } else {
            Some([
                canonical_to_world(center, vecs, c, 0.),
                canonical_to_world(center, vecs, -c, 0.),
            ])
        };
        Axes { a, b, c, e, latus_rectum, foci }
    }

    /// Point `(u, v)` of the principal frame, in world coordinates.
    pub fn to_world(&self, u: f64, v: f64) -> R2<f64> {
        canonical_to_world(self.center, &self.vecs, u, v)
    }
}
