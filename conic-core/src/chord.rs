//! Chords through a focus: intersect the line `focus + t·(probe − focus)` with the curve.

use log::debug;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{
    coeffs::Coeffs,
    conic::Analysis,
    error::GeometryError,
    quadratic::{quadratic, Roots},
    r2::R2,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(tag = "kind", content = "points", rename_all = "lowercase")]
pub enum ChordPoints {
    /// The line meets the curve twice (possibly at the same point, for a tangent)
    Secant([ R2<f64>; 2 ]),
    /// The line is parallel to an asymptote or to a parabola's axis, and crosses the curve once
    Single(R2<f64>),
}

impl ChordPoints {
    pub fn points(&self) -> Vec<R2<f64>> {
        match self {
            ChordPoints::Secant(ps) => ps.to_vec(),
            ChordPoints::Single(p) => vec![ *p ],
        }
    }
    pub fn length(&self) -> f64 {
        match self {
            ChordPoints::Secant([ p0, p1 ]) => p0.distance(p1),
            ChordPoints::Single(_) => 0.,
        }
    }
}

pub fn focal_chord(coeffs: &Coeffs, focus: R2<f64>, probe: R2<f64>) -> Result<ChordPoints, GeometryError> {
    let dir = probe - focus;
    let [ k2, k1, k0 ] = coeffs.along(focus, dir);
    let at = |t: f64| focus + dir * t;
    let roots = quadratic(k2, k1, k0);
    debug!("focal_chord {} → {}: K = [{}, {}, {}], {:?}", focus, probe, k2, k1, k0, roots);
    match roots {
        Roots::Reals([ t1, t2 ]) => Ok(ChordPoints::Secant([ at(t1), at(t2) ])),
        Roots::Single(t) => Ok(ChordPoints::Single(at(t))),
        Roots::Complex | Roots::Degenerate => Err(GeometryError::NoIntersection),
    }
}

/// The focus nearest `probe`.
pub fn closest_focus(analysis: &Analysis, probe: R2<f64>) -> Option<R2<f64>> {
    analysis.foci().into_iter().min_by_key(|f| OrderedFloat(f.distance(&probe)))
}

/// Chord through the focus nearest `probe`, and `probe`.
pub fn focal_chord_from(analysis: &Analysis, probe: R2<f64>) -> Result<ChordPoints, GeometryError> {
    let focus = closest_focus(analysis, probe).ok_or(GeometryError::NoFoci)?;
    focal_chord(&analysis.coeffs, focus, probe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{conic::analyze, parse::parse_general};
    use test_log::test;

    fn analysis(text: &str) -> Analysis {
        analyze(parse_general(text).unwrap())
    }

    fn secant(chord: ChordPoints) -> [ R2<f64>; 2 ] {
        match chord {
            ChordPoints::Secant(ps) => ps,
            chord => panic!("Expected secant, found {:?}", chord),
        }
    }

    #[test]
    fn major_axis() {
        let ellipse = analysis("x^2/16 + y^2/9 = 1");
        let focus = R2::new(7_f64.sqrt(), 0.);
        let [ p0, p1 ] = secant(focal_chord(&ellipse.coeffs, focus, R2::new(4., 0.)).unwrap());
        assert_relative_eq!(p0, R2::new(4., 0.), epsilon = 1e-9);
        assert_relative_eq!(p1, R2::new(-4., 0.), epsilon = 1e-9);
    }

    #[test]
    fn latus_rectum() {
        let ellipse = analysis("x^2/16 + y^2/9 = 1");
        let chord = focal_chord_from(&ellipse, R2::new(7_f64.sqrt(), 1.)).unwrap();
        assert_relative_eq!(chord.length(), 4.5, epsilon = 1e-9);
        for p in chord.points() {
            assert_abs_diff_eq!(ellipse.coeffs.eval(p), 0., epsilon = 1e-9);
        }

        let parabola = analysis("y^2 = 8x");
        let chord = focal_chord_from(&parabola, R2::new(2., 1.)).unwrap();
        let [ p0, p1 ] = secant(chord.clone());
        assert_relative_eq!(p0, R2::new(2., 4.), epsilon = 1e-9);
        assert_relative_eq!(p1, R2::new(2., -4.), epsilon = 1e-9);
        assert_relative_eq!(chord.length(), 8., epsilon = 1e-9);
    }

    #[test]
    fn parallel_to_axis() {
        // Along a parabola's axis, the substituted equation is linear in t
        let parabola = analysis("y^2 = 8x");
        let chord = focal_chord(&parabola.coeffs, R2::new(2., 0.), R2::new(3., 0.)).unwrap();
        assert_eq!(chord, ChordPoints::Single(R2::new(0., 0.)));
        assert_eq!(chord.length(), 0.);

        // Parallel to an asymptote of xy = 8
        let hyperbola = analysis("xy = 8");
        let chord = focal_chord(&hyperbola.coeffs, R2::new(4., 4.), R2::new(5., 4.)).unwrap();
        assert_eq!(chord, ChordPoints::Single(R2::new(2., 4.)));
    }

    #[test]
    fn misses() {
        let circle = analysis("x^2 + y^2 = 25");
        assert_eq!(focal_chord(&circle.coeffs, R2::new(10., 0.), R2::new(10., 1.)), Err(GeometryError::NoIntersection));
        let p = R2::new(1., 1.);
        assert_eq!(focal_chord(&circle.coeffs, p, p), Err(GeometryError::NoIntersection));
        assert_eq!(focal_chord_from(&circle, R2::new(5., 0.)), Err(GeometryError::NoFoci));
    }

    #[test]
    fn nearest_focus() {
        let ellipse = analysis("x^2/16 + y^2/9 = 1");
        let focus = closest_focus(&ellipse, R2::new(-3., 1.)).unwrap();
        assert_relative_eq!(focus, R2::new(-7_f64.sqrt(), 0.), epsilon = 1e-9);
        let hyperbola = analysis("x^2/9 - y^2/16 = 1");
        let focus = closest_focus(&hyperbola, R2::new(4., -3.)).unwrap();
        assert_relative_eq!(focus, R2::new(5., 0.), epsilon = 1e-9);
    }

    #[test]
    fn json() {
        let json = serde_json::to_value(ChordPoints::Single(R2::new(1., 2.))).unwrap();
        assert_eq!(json["kind"], "single");
        assert_eq!(json["points"]["y"], 2.);
    }
}
