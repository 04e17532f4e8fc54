//! Parabolas: rotate onto the eigenbasis, then complete the square along the non-null direction.

use log::debug;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{coeffs::Coeffs, deg::Deg, is_zero::IsZero, linalg::Eigen2, r2::R2};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct ParabolaVertex {
    pub vertex: R2<f64>,
    pub focus: R2<f64>,
    /// Signed distance from vertex to focus along `axis`
    pub focal_dist: f64,
    /// Direction of `axis`, degrees
    pub angle: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct Parabola {
    pub eigen: Eigen2,
    /// The non-zero eigenvalue
    pub lambda: f64,
    /// Eigenvector of `lambda`
    pub main: R2<f64>,
    /// Eigenvector of the null eigenvalue: the symmetry axis
    pub axis: R2<f64>,
    pub d_prime: f64,
    pub e_prime: f64,
    /// `None` for the degenerate case (a pair of parallel lines, or nothing)
    pub vertex: Option<ParabolaVertex>,
}

impl Parabola {
    pub fn reduce(coeffs: &Coeffs) -> Parabola {
        let Coeffs { d, e, f, .. } = *coeffs;
        let eigen = coeffs.quadratic_form();
        let main_idx = if eigen.vals[0].is_zero() { 1 } else { 0 };
        let lambda = eigen.vals[main_idx];
        let main = eigen.vecs[main_idx];
        let axis = eigen.vecs[1 - main_idx];
        let d_prime = d * main.x + e * main.y;
        let e_prime = d * axis.x + e * axis.y;

        let vertex = if e_prime.is_zero() || lambda.is_zero() {
            None
        } else {
            // λu² + D'u + E'v + F = 0  ⟹  (u − u₀)² = −(E'/λ)(v − v₀)
            let u = -d_prime / (2. * lambda);
            let v = (d_prime * d_prime - 4. * lambda * f) / (4. * lambda * e_prime);
            let focal_dist = -e_prime / (2. * lambda) / 2.;
            let vertex = main * u + axis * v;
            let focus = vertex + axis * focal_dist;
            let angle = axis.y.atan2(axis.x).deg();
            Some(ParabolaVertex { vertex, focus, focal_dist, angle })
        };
        debug!("parabola: λ {}, main {}, axis {}, D' {}, E' {}, vertex {:?}", lambda, main, axis, d_prime, e_prime, vertex);
        Parabola { eigen, lambda, main, axis, d_prime, e_prime, vertex }
    }

    pub fn is_degenerate(&self) -> bool {
        self.vertex.is_none()
    }
}
