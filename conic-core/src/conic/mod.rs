//! Classification and reduction of a second-degree curve.

pub mod central;
pub mod parabola;


use derive_more::Display;
use log::debug;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{coeffs::Coeffs, is_zero::IsZero, r2::R2};

use central::Central;
use parabola::Parabola;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    #[display(fmt = "ellipse")]
    Ellipse,
    #[display(fmt = "circle")]
    Circle,
    #[display(fmt = "hyperbola")]
    Hyperbola,
    #[display(fmt = "parabola")]
    Parabola,
}

impl Kind {
    /// Classification from the discriminant and the quadratic coefficients alone.
    pub fn classify(coeffs: &Coeffs) -> Kind {
        let disc = coeffs.disc();
        if disc.is_zero() {
            Kind::Parabola
        } else if disc > 0. {
            Kind::Hyperbola
        } else if (coeffs.a - coeffs.c).is_zero() && coeffs.b.is_zero() {
            Kind::Circle
        } else {
            Kind::Ellipse
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Conic {
    Ellipse(Central),
    Circle(Central),
    Hyperbola(Central),
    Parabola(Parabola),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub coeffs: Coeffs,
    pub disc: f64,
    pub conic: Conic,
}

pub fn analyze(coeffs: Coeffs) -> Analysis {
    let disc = coeffs.disc();
    let kind = Kind::classify(&coeffs);
    debug!("analyze {}: Δ = {}, {}", coeffs, disc, kind);
    let conic = match kind {
        Kind::Ellipse => Conic::Ellipse(Central::reduce(&coeffs, kind)),
        Kind::Circle => Conic::Circle(Central::reduce(&coeffs, kind)),
        Kind::Hyperbola => Conic::Hyperbola(Central::reduce(&coeffs, kind)),
        Kind::Parabola => Conic::Parabola(Parabola::reduce(&coeffs)),
    };
    Analysis { coeffs, disc, conic }
}

impl Analysis {
    pub fn kind(&self) -> Kind {
        match self.conic {
            Conic::Ellipse(_) => Kind::Ellipse,
            Conic::Circle(_) => Kind::Circle,
            Conic::Hyperbola(_) => Kind::Hyperbola,
            Conic::Parabola(_) => Kind::Parabola,
        }
    }

    pub fn central(&self) -> Option<&Central> {
        match &self.conic {
            Conic::Ellipse(c) | Conic::Circle(c) | Conic::Hyperbola(c) => Some(c),
            Conic::Parabola(_) => None,
        }
    }

    pub fn parabola(&self) -> Option<&Parabola> {
        match &self.conic {
            Conic::Parabola(p) => Some(p),
            _ => None,
        }
    }

    /// Finite foci: two for a non-circular central conic, one for a parabola, none otherwise.
    pub fn foci(&self) -> Vec<R2<f64>> {
        match &self.conic {
            Conic::Parabola(p) => p.vertex.iter().map(|v| v.focus).collect(),
            _ => self
                .central()
                .and_then(|c| c.axes.as_ref())
                .and_then(|axes| axes.foci)
                .map(|foci| foci.to_vec())
                .unwrap_or_default(),
        }
    }

    /// Center of a central conic, or vertex of a non-degenerate parabola.
    pub fn center_or_vertex(&self) -> Option<R2<f64>> {
        match &self.conic {
            Conic::Parabola(p) => p.vertex.as_ref().map(|v| v.vertex),
            _ => self.central().map(|c| c.center),
        }
    }

    pub fn eccentricity(&self) -> Option<f64> {
        match &self.conic {
            Conic::Parabola(p) => p.vertex.as_ref().map(|_| 1.),
            _ => self.central().and_then(|c| c.axes.as_ref()).and_then(|axes| axes.e),
        }
    }

    /// No vertex (parabola); a semi-axis is undefined, or `F' ≈ 0` (a line pair or a single point).
    pub fn is_degenerate(&self) -> bool {
        match &self.conic {
            Conic::Parabola(p) => p.is_degenerate(),
            _ => self.central().map_or(true, |c| c.axes.is_none() || c.f_prime.is_zero()),
        }
    }

    /// `b / a`: slope of the asymptotes in the principal frame.
    pub fn asymptote_slope(&self) -> Option<f64> {
        match &self.conic {
            Conic::Hyperbola(c) => c.axes.as_ref().filter(|axes| !axes.a.is_zero()).map(|axes| axes.b / axes.a),
            _ => None,
        }
    }
}
