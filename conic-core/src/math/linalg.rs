//! Closed-form 2×2 linear algebra: determinants, normalization and the
//! eigen decomposition of a real symmetric matrix.

use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::r2::R2;

use super::is_zero::EPS;

/// Determinant of `[[a, b], [c, d]]`.
pub fn det2(a: f64, b: f64, c: f64, d: f64) -> f64 {
    a * d - b * c
}

/// Unit vector along `v`; a zero vector is returned unchanged.
pub fn normalize(v: R2<f64>) -> R2<f64> {
    let n = v.norm();
    let n = if n == 0. { 1. } else { n };
    v / n
}

/// Eigenpairs of a symmetric 2×2 matrix; `vals[i]` belongs to `vecs[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Tsify)]
pub struct Eigen2 {
    pub vals: [f64; 2],
    pub vecs: [R2<f64>; 2],
}

impl Eigen2 {
    /// Decompose `[[a, b], [b, c]]`. `vals[0] >= vals[1]`, both vectors unit length.
    ///
    /// With `b ≈ 0` the matrix is already diagonal: `vecs[0]` is the coordinate axis whose diagonal
    /// entry equals `vals[0]`, and `vecs[1]` is the other axis (also when `a == c` and the eigenvalues
    /// coincide).
    pub fn symmetric(a: f64, b: f64, c: f64) -> Eigen2 {
        let tr = a + c;
        let det = a * c - b * b;
        let disc = (tr * tr - 4. * det).max(0.).sqrt();
        let l1 = (tr + disc) / 2.;
        let l2 = (tr - disc) / 2.;
        let vecs = if b.abs() > EPS {
            [
                normalize(R2 { x: l1 - c, y: b }),
                normalize(R2 { x: l2 - c, y: b }),
            ]
        } else if (a - l1).abs() > EPS {
            [ R2 { x: 0., y: 1. }, R2 { x: 1., y: 0. } ]
        } else {
            [ R2 { x: 1., y: 0. }, R2 { x: 0., y: 1. } ]
        };
        Eigen2 { vals: [ l1, l2 ], vecs }
    }

    /// Exchange the two eigenpairs.
    pub fn swap(&self) -> Eigen2 {
        Eigen2 {
            vals: [ self.vals[1], self.vals[0] ],
            vecs: [ self.vecs[1], self.vecs[0] ],
        }
    }
}
