/// Tolerance for every "≈ 0" decision in the engine.
pub const EPS: f64 = 1e-9;

/// Eigenvalues at or below this magnitude leave the matching semi-axis undefined.
pub const EIGEN_EPS: f64 = 1e-12;

pub trait IsZero {
    /// `|x| < EPS`
    fn is_zero(&self) -> bool;
    fn lt_zero(&self) -> bool;
}

impl IsZero for f64 {
    fn is_zero(&self) -> bool {
        self.abs() < EPS
    }
    fn lt_zero(&self) -> bool {
        *self < 0.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance() {
        assert!(0_f64.is_zero());
        assert!((-0_f64).is_zero());
        assert!(5e-10_f64.is_zero());
        assert!(!1e-9_f64.is_zero());
        assert!(!(-2e-9_f64).is_zero());
        assert!((-2e-9_f64).lt_zero());
    }
}
