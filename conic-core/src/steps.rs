//! Human-readable derivation of the canonical form, one LaTeX-flavoured line per step.

use crate::{
    conic::{Analysis, Conic, Kind, central::Central, parabola::Parabola},
    fmt::{equation, general_equation, Fmt},
    is_zero::{IsZero, EPS},
};

pub fn steps(analysis: &Analysis) -> Vec<String> {
    let mut steps = vec![
        format!("1. Initial equation: $$ {} $$", general_equation(&analysis.coeffs.to_array())),
        discriminant_step(analysis),
    ];
    match &analysis.conic {
        Conic::Parabola(p) => steps.extend(parabola_steps(p, analysis.coeffs.f)),
        Conic::Ellipse(c) | Conic::Circle(c) | Conic::Hyperbola(c) => steps.extend(central_steps(c, analysis)),
    }
    steps
}

fn discriminant_step(analysis: &Analysis) -> String {
    let disc = analysis.disc;
    let sign = if disc > EPS {
        "> 0"
    } else if disc < -EPS {
        "< 0"
    } else {
        "\\approx 0"
    };
    let kind = analysis.kind();
    let article = if kind == Kind::Ellipse { "an" } else { "a" };
    format!(
        "2. Curve type: invariant $$ \\Delta = B^2 - 4AC = {} $$. Since $$ \\Delta {} $$, the curve is {} {}.",
        disc.s(3), sign, article, kind,
    )
}

fn central_steps(c: &Central, analysis: &Analysis) -> Vec<String> {
    let coeffs = &analysis.coeffs;
    let [ l1, l2 ] = c.lambda;
    let mut steps = vec![
        format!("3. Translation: center $$ (x_0, y_0) = ({}, {}) $$.", c.center.x.s(3), c.center.y.s(3)),
        format!(
            "After translation: $$ {} $$",
            equation(&[ (coeffs.a, "x'^2"), (coeffs.b, "x'y'"), (coeffs.c, "y'^2"), (c.f_prime, "") ], 3),
        ),
        format!(
            "4. Rotation: $$ \\alpha \\approx {}^\\circ $$, in the x''y'' frame: $$ {} $$",
            c.angle.s(3),
            equation(&[ (l1, "(x'')^2"), (l2, "(y'')^2"), (c.f_prime, "") ], 3),
        ),
    ];
    if let Some(axes) = c.axes.as_ref().filter(|axes| !axes.a.is_zero() && !axes.b.is_zero()) {
        let sign = if l1 * l2 < 0. { "-" } else { "+" };
        steps.push(format!(
            "5. Canonical equation: $$ \\frac{{(x'')^2}}{{{}}} {} \\frac{{(y'')^2}}{{{}}} = 1 $$",
            (axes.a * axes.a).s(3), sign, (axes.b * axes.b).s(3),
        ));
    }
    steps
}

fn parabola_steps(p: &Parabola, f: f64) -> Vec<String> {
    let Some(vertex) = &p.vertex else {
        return vec![ "Degenerate parabola: a pair of parallel lines.".to_string() ];
    };
    let mut steps = vec![
        format!("3. Rotation: $$ \\alpha \\approx {}^\\circ $$.", vertex.angle.s(3)),
        format!(
            "In the x'y' frame: $$ {} $$",
            equation(&[ (p.lambda, "(x')^2"), (p.d_prime, "x'"), (p.e_prime, "y'"), (f, "") ], 3),
        ),
        format!("4. Translation to the vertex $$ ({}, {}) $$.", vertex.vertex.x.s(3), vertex.vertex.y.s(3)),
    ];
    let param = -p.e_prime / p.lambda;
    if !param.is_zero() {
        steps.push(format!("5. Canonical equation: $$ (x'')^2 = {}y'' $$", param.s(3)));
    }
    steps
}
