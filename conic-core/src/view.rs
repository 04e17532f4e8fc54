//! Plot helpers: how far to zoom out, and the auxiliary lines drawn over the curve.

use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{
    coeffs::Coeffs,
    conic::{Analysis, Conic},
    is_zero::IsZero,
    r2::R2,
    tangent::Tangent,
    transform::{asymptote_segments, directrix_segments, parabola_directrix_segment, Segment},
};

/// Coefficients at or below this magnitude don't affect the plot range.
const RANGE_COEF_MIN: f64 = 1e-6;
/// Viewport half-width before looking at the coefficients.
const RANGE_BASE: f64 = 8.;
const RANGE_MAX: f64 = 100.;
/// Tangent lines run this many viewport widths past each edge.
const TANGENT_OVERSHOOT: f64 = 1.5;

/// Half-width of a square viewport around the origin that shows the interesting part of the curve.
pub fn estimate_range(analysis: &Analysis) -> f64 {
    let mags: Vec<f64> = analysis.coeffs.to_array().iter().map(|c| c.abs()).filter(|c| *c > RANGE_COEF_MIN).collect();
    let mut r = RANGE_BASE;
    if !mags.is_empty() {
        let max = mags.iter().cloned().fold(f64::MIN, f64::max);
        let min = mags.iter().cloned().fold(f64::MAX, f64::min);
        r = (15. / max.powf(0.2) + (1. / min).ln_1p()).clamp(5., 50.);
    }
    match &analysis.conic {
        Conic::Parabola(p) => {
            if let Some(v) = &p.vertex {
                r = r.max(v.vertex.x.abs() * 1.5).max(v.vertex.y.abs() * 1.5).max(5.);
            }
        },
        _ => {
            if let Some(axes) = analysis.central().and_then(|c| c.axes.as_ref()) {
                if axes.a.is_finite() && !axes.a.is_zero() {
                    r = r.max(axes.a * 2.2 + axes.c);
                }
            }
        },
    }
    r.min(RANGE_MAX)
}

/// The tangent line, clipped to the viewport widened by [`TANGENT_OVERSHOOT`] on every side.
pub fn tangent_segment(tangent: &Tangent, x_range: [ f64; 2 ], y_range: [ f64; 2 ]) -> Option<Segment> {
    let Tangent { fx, fy, c, .. } = *tangent;
    let widen = |[ lo, hi ]: [ f64; 2 ]| {
        let extra = (hi - lo) * TANGENT_OVERSHOOT;
        [ lo - extra, hi + extra ]
    };
    if fy.abs() > 1e-6 * fx.abs() {
        let y = |x: f64| (-fx * x - c) / fy;
        let [ x0, x1 ] = widen(x_range);
        Some(Segment::line(R2::new(x0, y(x0)), R2::new(x1, y(x1))))
    } else if fx.abs() > 1e-6 {
        let x = |y: f64| (-fy * y - c) / fx;
        let [ y0, y1 ] = widen(y_range);
        Some(Segment::line(R2::new(x(y0), y0), R2::new(x(y1), y1)))
    } else {
        None
    }
}

fn through(p: R2<f64>, dir: R2<f64>, range: f64) -> Segment {
    Segment::line(p - dir * range, p + dir * range)
}

/// Symmetry axes: major then minor for a central conic, the axis of a parabola.
pub fn axis_segments(analysis: &Analysis, range: f64) -> Vec<Segment> {
    match &analysis.conic {
        Conic::Parabola(p) => p.vertex.iter().map(|v| through(v.vertex, p.axis, range)).collect(),
        _ => match analysis.central() {
            Some(c) => c.vecs.iter().map(|dir| through(c.center, *dir, range)).collect(),
            None => vec![],
        },
    }
}

/// Everything drawn on top of the curve itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    /// Center of a central conic, or vertex of a parabola
    pub center: Option<R2<f64>>,
    pub foci: Vec<R2<f64>>,
    pub directrices: Vec<Segment>,
    pub axes: Vec<Segment>,
    pub asymptotes: Vec<Segment>,
    /// Level of `F` whose contour is the conjugate hyperbola
    pub conjugate_level: Option<f64>,
}

pub fn overlay(analysis: &Analysis, range: f64) -> Overlay {
    let empty = Overlay {
        center: None,
        foci: vec![],
        directrices: vec![],
        axes: vec![],
        asymptotes: vec![],
        conjugate_level: None,
    };
    match &analysis.conic {
        Conic::Parabola(p) => match &p.vertex {
            None => empty,
            Some(v) => Overlay {
                center: Some(v.vertex),
                foci: vec![ v.focus ],
                directrices: parabola_directrix_segment(v.vertex, p.axis, v.focal_dist, range).into_iter().collect(),
                axes: axis_segments(analysis, range),
                ..empty
            },
        },
        Conic::Ellipse(c) | Conic::Circle(c) | Conic::Hyperbola(c) => {
            let mut overlay = Overlay {
                center: Some(c.center),
                foci: analysis.foci(),
                axes: axis_segments(analysis, range),
                ..empty
            };
            if let Some(axes) = &c.axes {
                if axes.c > RANGE_COEF_MIN {
                    overlay.directrices = directrix_segments(c.center, &c.vecs, axes.a, axes.c, range);
                }
                if let Conic::Hyperbola(_) = analysis.conic {
                    overlay.asymptotes = asymptote_segments(c.center, &c.vecs, axes.a, axes.b, range);
                }
            }
            if let Conic::Hyperbola(_) = analysis.conic {
                if !c.f_prime.is_zero() {
                    overlay.conjugate_level = Some(-2. * c.f_prime);
                }
            }
            overlay
        },
    }
}

/// `F(x, y)` sampled on an `n × n` grid over `[−range, range]²`; `z[j][i]` is at `(x[i], y[j])`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
pub struct Grid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
}

pub fn sample_grid(coeffs: &Coeffs, range: f64, n: usize) -> Grid {
    let n = n.max(2);
    let x: Vec<f64> = (0..n).map(|i| -range + 2. * range * i as f64 / (n - 1) as f64).collect();
    let y = x.clone();
    let z = y.iter().map(|yj| x.iter().map(|xi| coeffs.eval(R2::new(*xi, *yj))).collect()).collect();
    Grid { x, y, z }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{conic::analyze, parse::parse_general, tangent::tangent_at};
    use test_log::test;

    fn analysis(text: &str) -> Analysis {
        analyze(parse_general(text).unwrap())
    }

    #[test]
    fn ranges() {
        // |coefs| ∈ {1/16, 1/9, 1}: 15 + ln(17) beats 2.2a + c
        assert_relative_eq!(estimate_range(&analysis("x^2/16 + y^2/9 = 1")), 15. + 17_f64.ln(), epsilon = 1e-9);
        // Large radius: 2.2·50 is capped
        assert_eq!(estimate_range(&analysis("x^2 + y^2 = 2500")), 100.);
        // Large coefficients shrink the view, down to the clamp
        assert_eq!(estimate_range(&analysis("10000x^2 + 10000y^2 - 10000 = 0")), 5.);
        let r = estimate_range(&analysis("y^2 - 8x - 6y + 17 = 0"));
        assert_relative_eq!(r, 15. / 17_f64.powf(0.2) + 2_f64.ln(), epsilon = 1e-9);
        // Distant vertex
        let r = estimate_range(&analysis("(y - 40)^2 = 8(x - 30)"));
        assert_relative_eq!(r, 60., epsilon = 1e-6);
    }

    #[test]
    fn vertical_tangent() {
        let tangent = tangent_at(&parse_general("x^2/16 + y^2/9 = 1").unwrap(), R2::new(4., 0.)).unwrap();
        let segment = tangent_segment(&tangent, [ -10., 10. ], [ -5., 5. ]).unwrap();
        assert_eq!(segment.points, vec![ R2::new(4., -20.), R2::new(4., 20.) ]);
    }

    #[test]
    fn sloped_tangent() {
        let tangent = tangent_at(&parse_general("x^2 + y^2 = 25").unwrap(), R2::new(3., 4.)).unwrap();
        let segment = tangent_segment(&tangent, [ -10., 10. ], [ -10., 10. ]).unwrap();
        assert_eq!(segment.points, vec![ R2::new(-40., 36.25), R2::new(40., -23.75) ]);
    }

    #[test]
    fn axes() {
        let segments = axis_segments(&analysis("x^2/16 + y^2/9 = 1"), 10.);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].points, vec![ R2::new(-10., 0.), R2::new(10., 0.) ]);
        assert_eq!(segments[1].points, vec![ R2::new(0., -10.), R2::new(0., 10.) ]);

        let segments = axis_segments(&analysis("y^2 - 8x - 6y + 17 = 0"), 10.);
        assert_eq!(segments.len(), 1);
        assert_relative_eq!(segments[0].points[0], R2::new(-9., 3.), epsilon = 1e-12);
        assert_relative_eq!(segments[0].points[1], R2::new(11., 3.), epsilon = 1e-12);
    }

    #[test]
    fn overlays() {
        let hyperbola = overlay(&analysis("x^2/9 - y^2/16 = 1"), 20.);
        assert_eq!(hyperbola.center, Some(R2::ORIGIN));
        assert_eq!(hyperbola.foci.len(), 2);
        assert_eq!(hyperbola.directrices.len(), 2);
        assert_eq!(hyperbola.axes.len(), 2);
        assert_eq!(hyperbola.asymptotes.len(), 2);
        assert_relative_eq!(hyperbola.conjugate_level.unwrap(), 2.);
        // Directrices at x = ±a²/c
        assert_relative_eq!(hyperbola.directrices[0].points[0].x, 9. / 5., epsilon = 1e-9);

        let circle = overlay(&analysis("x^2 + y^2 = 25"), 20.);
        assert!(circle.foci.is_empty());
        assert!(circle.directrices.is_empty());
        assert!(circle.asymptotes.is_empty());
        assert_eq!(circle.conjugate_level, None);

        let parabola = overlay(&analysis("y^2 = 8x"), 20.);
        assert_eq!(parabola.directrices.len(), 1);
        assert_eq!(parabola.axes.len(), 1);
        assert_eq!(parabola.foci.len(), 1);

        let degenerate = overlay(&analyze(Coeffs::new(1., 0., 0., -2., 0., 1.)), 20.);
        assert_eq!(degenerate.center, None);
        assert!(degenerate.axes.is_empty());
    }

    #[test]
    fn grid() {
        let grid = sample_grid(&Coeffs::new(1., 0., 1., 0., 0., -1.), 2., 5);
        assert_eq!(grid.x, vec![ -2., -1., 0., 1., 2. ]);
        assert_eq!(grid.z.len(), 5);
        assert_eq!(grid.z[2][2], -1.);
        assert_eq!(grid.z[0][4], 7.);
    }
}
