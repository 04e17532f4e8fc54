use std::{ops::{Mul, Div}, fmt::{Display, Formatter, self}};
use approx::{AbsDiffEq, RelativeEq};

use serde::{Deserialize, Serialize};
use tsify::Tsify;

#[derive(
    Debug, Copy, Clone, PartialEq, Serialize, Deserialize, Tsify,
    derive_more::Add,
    derive_more::Sub,
    derive_more::Neg,
    derive_more::From,
)]
pub struct R2<D> {
    pub x: D,
    pub y: D,
}

impl<D: Display> Display for R2<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

impl R2<f64> {
    pub const ORIGIN: R2<f64> = R2 { x: 0., y: 0. };

    pub fn new(x: f64, y: f64) -> Self {
        R2 { x, y }
    }
    pub fn norm2(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }
    pub fn dot(&self, o: &R2<f64>) -> f64 {
        self.x * o.x + self.y * o.y
    }
    /// Counter-clockwise quarter turn.
    pub fn perp(&self) -> R2<f64> {
        R2 { x: -self.y, y: self.x }
    }
    pub fn distance(&self, o: &R2<f64>) -> f64 {
        (*self - *o).norm()
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<D: Mul<D, Output = D> + Clone> Mul<D> for R2<D> {
    type Output = Self;
    fn mul(self, rhs: D) -> Self::Output {
        R2 {
            x: self.x * rhs.clone(),
            y: self.y * rhs,
        }
    }
}

impl<D: Div<D, Output = D> + Clone> Div<D> for R2<D> {
    type Output = Self;
    fn div(self, rhs: D) -> Self::Output {
        R2 {
            x: self.x / rhs.clone(),
            y: self.y / rhs,
        }
    }
}

impl AbsDiffEq for R2<f64> {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for R2<f64> {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative) && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ops() {
        let p = R2::new(3., 4.);
        let q = R2::from((1., -2.));
        assert_eq!(p + q, R2::new(4., 2.));
        assert_eq!(p - q, R2::new(2., 6.));
        assert_eq!(-q, R2::new(-1., 2.));
        assert_eq!(p * 2., R2::new(6., 8.));
        assert_eq!(p / 2., R2::new(1.5, 2.));
        assert_eq!(p.norm(), 5.);
        assert_eq!(p.dot(&p.perp()), 0.);
        assert_eq!(p.distance(&R2::ORIGIN), 5.);
    }

    #[test]
    fn display() {
        assert_eq!(R2::new(1., -0.5).to_string(), "(1.000, -0.500)");
    }
}
