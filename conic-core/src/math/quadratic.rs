use approx::{AbsDiffEq, RelativeEq};

use super::is_zero::IsZero;

/// Real solutions of `a2·t² + a1·t + a0 = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    /// `a2 ≈ 0`: the equation is linear
    Single(f64),
    /// `(−a1 + √Δ) / 2a2`, `(−a1 − √Δ) / 2a2`; equal when `Δ == 0`
    Reals([ f64; 2 ]),
    /// `Δ < 0`
    Complex,
    /// `a2 ≈ a1 ≈ 0`: no unknown left to solve for
    Degenerate,
}

use Roots::{Single, Reals, Complex, Degenerate};

impl Roots {
    pub fn reals(&self) -> Vec<f64> {
        match self {
            Single(r) => vec![ *r ],
            Reals(rs) => rs.to_vec(),
            Complex | Degenerate => vec![],
        }
    }
}

impl AbsDiffEq for Roots {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        match (self, other) {
            (Single(r0), Single(r1)) => r0.abs_diff_eq(r1, epsilon),
            (Reals([ l0, l1 ]), Reals([ r0, r1 ])) => l0.abs_diff_eq(r0, epsilon) && l1.abs_diff_eq(r1, epsilon),
            (Complex, Complex) | (Degenerate, Degenerate) => true,
            _ => false,
        }
    }
}

impl RelativeEq for Roots {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        match (self, other) {
            (Single(r0), Single(r1)) => r0.relative_eq(r1, epsilon, max_relative),
            (Reals([ l0, l1 ]), Reals([ r0, r1 ])) => l0.relative_eq(r0, epsilon, max_relative) && l1.relative_eq(r1, epsilon, max_relative),
            (Complex, Complex) | (Degenerate, Degenerate) => true,
            _ => false,
        }
    }
}

pub fn discriminant(a2: f64, a1: f64, a0: f64) -> f64 {
    a1 * a1 - 4. * a2 * a0
}

pub fn quadratic(a2: f64, a1: f64, a0: f64) -> Roots {
    if a2.is_zero() {
        if a1.is_zero() {
            Degenerate
        } else {
            Single(-a0 / a1)
        }
    } else {
        let d = discriminant(a2, a1, a0);
        if d.lt_zero() {
            Complex
        } else {
            let d = d.sqrt();
            Reals([ (-a1 + d) / (2. * a2), (-a1 - d) / (2. * a2) ])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_roots() {
        // (t - 3)(t + 1)
        assert_relative_eq!(quadratic(1., -2., -3.), Reals([ 3., -1. ]));
        // 2(t - 0.5)(t - 2)
        assert_relative_eq!(quadratic(2., -5., 2.), Reals([ 2., 0.5 ]));
    }

    #[test]
    fn double_root() {
        assert_eq!(quadratic(1., -4., 4.), Reals([ 2., 2. ]));
    }

    #[test]
    fn complex() {
        assert_eq!(quadratic(1., 0., 1.), Complex);
        assert!(quadratic(1., 0., 1.).reals().is_empty());
    }

    #[test]
    fn linear() {
        assert_eq!(quadratic(0., 2., -3.), Single(1.5));
        assert_eq!(quadratic(1e-12, 2., -3.), Single(1.5));
        assert_eq!(quadratic(0., 0., 1.), Degenerate);
    }
}
