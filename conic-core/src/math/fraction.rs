//! Rational approximation of line coefficients, for integer display.

use itertools::Itertools;
use log::debug;

use crate::config::FractionConfig;

/// Numerators past this magnitude are no longer exact in an `f64`.
const MAX_NUMERATOR: f64 = 1e15;

pub fn gcd(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

pub fn lcm(a: i128, b: i128) -> Option<i128> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b).map(i128::abs)
}

/// Smallest-denominator fraction `n / d` within `config.tolerance` of `x`.
pub fn to_fraction(x: f64, config: &FractionConfig) -> Option<(i128, i128)> {
    if !x.is_finite() {
        return None;
    }
    for den in 1..=config.max_denominator {
        let den = den as f64;
        let num = (x * den).round();
        if num.abs() > MAX_NUMERATOR {
            return None;
        }
        if (x - num / den).abs() < config.tolerance {
            return Some((num as i128, den as i128));
        }
    }
    None
}

/// Scale `[a, b, c]` to the smallest proportional integer triple whose first non-zero entry is
/// positive. The tolerance applies after dividing by the largest magnitude.
///
/// `None` if a coefficient has no fraction within tolerance, or `a` and `b` both round to zero.
pub fn simplify_line(a: f64, b: f64, c: f64, config: &FractionConfig) -> Option<[i64; 3]> {
    let scale = a.abs().max(b.abs()).max(c.abs());
    if !(scale > 0.) || !scale.is_finite() {
        return None;
    }
    let fracs = [ a, b, c ].iter().map(|x| to_fraction(*x / scale, config)).collect::<Option<Vec<_>>>()?;
    if fracs[0].0 == 0 && fracs[1].0 == 0 {
        debug!("simplify_line: [{}, {}, {}] loses its direction", a, b, c);
        return None;
    }
    let den = fracs.iter().try_fold(1_i128, |acc, (_, d)| lcm(acc, *d))?;
    let ints = fracs.iter().map(|(n, d)| n.checked_mul(den / d)).collect::<Option<Vec<_>>>()?;
    let g = ints.iter().fold(0, |acc, n| gcd(acc, *n));
    if g == 0 {
        return None;
    }
    let sign = match ints.iter().find(|n| **n != 0) {
        Some(n) if *n < 0 => -1,
        _ => 1,
    };
    let ints = ints.iter().map(|n| i64::try_from(sign * n / g).ok()).collect::<Option<Vec<_>>>()?;
    debug!("simplify_line: [{}, {}, {}] → [{}]", a, b, c, ints.iter().join(", "));
    Some([ ints[0], ints[1], ints[2] ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn gcd_lcm() {
        assert_eq!(gcd(12, -18), 6);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(lcm(4, 6), Some(12));
        assert_eq!(lcm(0, 6), Some(0));
    }

    #[test]
    fn fractions() {
        let config = FractionConfig::default();
        assert_eq!(to_fraction(0.5, &config), Some((1, 2)));
        assert_eq!(to_fraction(-2., &config), Some((-2, 1)));
        assert_eq!(to_fraction(0., &config), Some((0, 1)));
        assert_eq!(to_fraction(1. / 3., &config), Some((1, 3)));
        assert_eq!(to_fraction(-0.0625, &config), Some((-1, 16)));
        assert_eq!(to_fraction(f64::NAN, &config), None);
    }

    #[test]
    fn bounded_search() {
        let config = FractionConfig::new(Some(1e-12), Some(100));
        assert_eq!(to_fraction(std::f64::consts::PI, &config), None);
    }

    #[test]
    fn lines() {
        let config = FractionConfig::default();
        assert_eq!(simplify_line(0.5, 0., -2., &config), Some([ 1, 0, -4 ]));
        assert_eq!(simplify_line(-0.5, 0., 2., &config), Some([ 1, 0, -4 ]));
        assert_eq!(simplify_line(0., -1. / 3., 2. / 3., &config), Some([ 0, 1, -2 ]));
        assert_eq!(simplify_line(6., 9., 12., &config), Some([ 2, 3, 4 ]));
        assert_eq!(simplify_line(0., 0., 0., &config), None);
        assert_eq!(simplify_line(f64::NAN, 1., 0., &config), None);
    }

    #[test]
    fn tiny_gradient() {
        let config = FractionConfig::default();
        // Normal components far below the absolute tolerance keep their ratio to `c`
        assert_eq!(simplify_line(4e-7, -4e-7, -4e-4, &config), Some([ 1, -1, -1000 ]));
        assert_eq!(simplify_line(3e-9, 0., 6e-9, &config), Some([ 1, 0, 2 ]));
        // No representable normal: not a line
        assert_eq!(simplify_line(1e-9, 0., 1., &config), None);
    }

    #[test]
    fn proportional() {
        let config = FractionConfig::default();
        let (a, b, c) = (1.25, -0.375, 7. / 6.);
        let [ ia, ib, ic ] = simplify_line(a, b, c, &config).unwrap();
        let k = ia as f64 / a;
        assert_relative_eq!(ib as f64, b * k, epsilon = 1e-9);
        assert_relative_eq!(ic as f64, c * k, epsilon = 1e-9);
    }
}
