//! Canonical (u, v) frame → world coordinates, and the auxiliary line segments drawn around a conic.

use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{is_zero::{IsZero, EPS}, r2::R2};

/// Samples per directrix, on each side of the transverse axis.
const DIRECTRIX_HALF_SAMPLES: usize = 50;

/// Polyline in world coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
pub struct Segment {
    pub points: Vec<R2<f64>>,
}

impl Segment {
    pub fn line(p0: R2<f64>, p1: R2<f64>) -> Segment {
        Segment { points: vec![ p0, p1 ] }
    }
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

/// `center + u·axes[0] + v·axes[1]`
pub fn canonical_to_world(center: R2<f64>, axes: &[ R2<f64>; 2 ], u: f64, v: f64) -> R2<f64> {
    center + axes[0] * u + axes[1] * v
}

/// The lines `u = ±a²/c`, sampled over `v ∈ [−range, range]`. Empty unless `a > 0` and `c ≥ ε`.
pub fn directrix_segments(center: R2<f64>, axes: &[ R2<f64>; 2 ], a: f64, c: f64, range: f64) -> Vec<Segment> {
    if !(a > 0.) || c < EPS {
        return vec![];
    }
    let d = a * a / c;
    let step = range / DIRECTRIX_HALF_SAMPLES as f64;
    [ d, -d ].iter().map(|u| {
        let points = (0..=2 * DIRECTRIX_HALF_SAMPLES).map(|i| {
            let v = -range + i as f64 * step;
            canonical_to_world(center, axes, *u, v)
        }).collect();
        Segment { points }
    }).collect()
}

/// The lines `v = ±(b/a)·u`, from `u = −range` to `u = range`. Empty if `a` or `b` is 0.
pub fn asymptote_segments(center: R2<f64>, axes: &[ R2<f64>; 2 ], a: f64, b: f64, range: f64) -> Vec<Segment> {
    if a.is_zero() || b.is_zero() {
        return vec![];
    }
    let slope = b / a;
    [ slope, -slope ].iter().map(|m| {
        Segment::line(
            canonical_to_world(center, axes, -range, -m * range),
            canonical_to_world(center, axes, range, m * range),
        )
    }).collect()
}

/// The line through `vertex − focal_dist·axis`, perpendicular to `axis`, spanning `±range` along it.
pub fn parabola_directrix_segment(vertex: R2<f64>, axis: R2<f64>, focal_dist: f64, range: f64) -> Option<Segment> {
    if focal_dist.is_zero() {
        return None;
    }
    let foot = vertex - axis * focal_dist;
    let along = axis.perp();
    Some(Segment::line(foot - along * range, foot + along * range))
}
