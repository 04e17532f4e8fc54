//! CLI for second-degree plane curves.
//!
//! Provides:
//! - Classification and canonical reduction of an equation
//! - Tangent lines, focal chords and line contacts
//! - The step-by-step derivation and the built-in example library

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use log::warn;
use serde::Serialize;

use conic_core::{
    Analysis, Coeffs, Conic, FractionConfig, LineContact, R2,
    chord::{closest_focus, focal_chord, focal_chord_from},
    fmt::Fmt,
    library::{DEFAULT_EXAMPLES, LIBRARY},
    steps::steps,
    tangent::{default_tangent_point, tangent_at_with},
};

#[derive(Parser)]
#[command(name = "conic")]
#[command(about = "Classify and reduce Ax² + Bxy + Cy² + Dx + Ey + F = 0", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log level: off, error, warn, info, debug, trace (default: $RUST_LOG, else error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify an equation and print its canonical geometry
    Analyze {
        #[arg(allow_hyphen_values = true)]
        equation: String,
    },

    /// Tangent line at a point (default: vertex, or end of the first semi-axis)
    Tangent {
        #[arg(allow_hyphen_values = true)]
        equation: String,

        /// Point of tangency, "x,y"
        #[arg(short, long, value_parser = parse_point, allow_hyphen_values = true)]
        at: Option<R2<f64>>,

        /// Largest error accepted when rounding coefficients to fractions
        #[arg(long)]
        tolerance: Option<f64>,

        /// Largest denominator tried when rounding coefficients to fractions
        #[arg(long)]
        max_denominator: Option<u32>,
    },

    /// Chord through a focus and a probe point
    Chord {
        #[arg(allow_hyphen_values = true)]
        equation: String,

        /// Second point on the chord, "x,y"
        #[arg(short, long, value_parser = parse_point, allow_hyphen_values = true)]
        probe: R2<f64>,

        /// Chord origin, "x,y" (default: the focus nearest the probe)
        #[arg(short, long, value_parser = parse_point, allow_hyphen_values = true)]
        focus: Option<R2<f64>>,
    },

    /// Step-by-step reduction to canonical form
    Steps {
        #[arg(allow_hyphen_values = true)]
        equation: String,
    },

    /// How a line meets the curve
    Line {
        #[arg(allow_hyphen_values = true)]
        equation: String,

        /// Line, e.g. "y = 2x + 1"
        #[arg(allow_hyphen_values = true)]
        line: String,
    },

    /// List the built-in example equations
    Library,
}

fn parse_point(s: &str) -> Result<R2<f64>, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected \"x,y\", found {:?}", s))?;
    let coord = |c: &str| c.trim().parse::<f64>().map_err(|e| format!("{:?}: {}", c, e));
    Ok(R2::new(coord(x)?, coord(y)?))
}

fn parse(equation: &str) -> Result<Coeffs> {
    conic_core::parse_general(equation).with_context(|| format!("parsing {:?}", equation))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn points(ps: &[ R2<f64> ]) -> String {
    ps.iter().map(|p| p.to_string()).join(", ")
}

fn print_analysis(analysis: &Analysis) {
    let degenerate = if analysis.is_degenerate() { " (degenerate)" } else { "" };
    println!("Type: {}{}", analysis.kind(), degenerate);
    println!("Equation: {}", analysis.coeffs);
    println!("Δ = B² − 4AC = {}", analysis.disc.s(3));
    match &analysis.conic {
        Conic::Parabola(p) => {
            if let Some(v) = &p.vertex {
                println!("Vertex: {}", v.vertex);
                println!("Focus: {}", v.focus);
                println!("Focal distance: {}", v.focal_dist.s(3));
                println!("Axis angle: {}°", v.angle.s(3));
            }
        },
        Conic::Ellipse(c) | Conic::Circle(c) | Conic::Hyperbola(c) => {
            let defaulted = if c.center_defaulted { " (defaulted)" } else { "" };
            println!("Center: {}{}", c.center, defaulted);
            println!("Rotation: {}°", c.angle.s(3));
            if let Some(axes) = &c.axes {
                println!("a = {}, b = {}, c = {}", axes.a.s(3), axes.b.s(3), axes.c.s(3));
                if let Some(lr) = axes.latus_rectum {
                    println!("Latus rectum: {}", lr.s(3));
                }
            }
        },
    }
    if let Some(e) = analysis.eccentricity() {
        println!("e = {}", e.s(3));
    }
    let foci = analysis.foci();
    if !foci.is_empty() {
        println!("Foci: {}", points(&foci));
    }
    if let Some(slope) = analysis.asymptote_slope() {
        println!("Asymptote slopes (principal frame): ±{}", slope.s(3));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut logger = env_logger::Builder::from_default_env();
    if let Some(level) = &cli.log_level {
        logger.filter_level(conic_core::parse_log_level(Some(level.as_str()))?);
    }
    logger.init();

    match cli.command {
        Commands::Analyze { equation } => {
            let analysis = conic_core::analyze(parse(&equation)?);
            if cli.json {
                print_json(&analysis)?;
            } else {
                print_analysis(&analysis);
            }
        }
        Commands::Tangent { equation, at, tolerance, max_denominator } => {
            let analysis = conic_core::analyze(parse(&equation)?);
            let point = match at {
                Some(point) => point,
                None => default_tangent_point(&analysis).ok_or_else(|| anyhow!("{} has no default tangent point", analysis.kind()))?,
            };
            let residual = analysis.coeffs.eval(point);
            if residual.abs() > 1e-6 {
                warn!("{} is off the curve: F = {}", point, residual);
            }
            let config = FractionConfig::new(tolerance, max_denominator);
            let tangent = tangent_at_with(&analysis.coeffs, point, &config)
                .ok_or_else(|| anyhow!("singular point {}: no tangent direction", point))?;
            if cli.json {
                print_json(&tangent)?;
            } else {
                println!("Tangent at {}: {}", tangent.point, tangent.eq_str);
            }
        }
        Commands::Chord { equation, probe, focus } => {
            let analysis = conic_core::analyze(parse(&equation)?);
            let chord = match focus {
                Some(focus) => focal_chord(&analysis.coeffs, focus, probe),
                None => focal_chord_from(&analysis, probe),
            }.with_context(|| format!("chord through {}", probe))?;
            if cli.json {
                print_json(&chord)?;
            } else {
                if let Some(focus) = focus.or_else(|| closest_focus(&analysis, probe)) {
                    println!("Through: {}", focus);
                }
                println!("Points: {}", points(&chord.points()));
                println!("Length: {}", chord.length().s(3));
            }
        }
        Commands::Steps { equation } => {
            let steps = steps(&conic_core::analyze(parse(&equation)?));
            if cli.json {
                print_json(&steps)?;
            } else {
                steps.iter().for_each(|step| println!("{}", step));
            }
        }
        Commands::Line { equation, line } => {
            let coeffs = parse(&equation)?;
            let line = conic_core::parse_linear(&line).with_context(|| format!("parsing line {:?}", line))?;
            let contact = conic_core::line_contact(&coeffs, &line)?;
            if cli.json {
                print_json(&contact)?;
            } else {
                match contact {
                    LineContact::Tangent(p) => println!("{} is tangent at {}", line, p),
                    LineContact::Secant(ps) => println!("{} meets the curve at {}", line, points(&ps)),
                    LineContact::Crossing(p) => println!("{} crosses the curve once, at {}", line, p),
                    LineContact::Miss => println!("{} misses the curve", line),
                }
            }
        }
        Commands::Library => {
            if cli.json {
                print_json(&LIBRARY)?;
            } else {
                for category in LIBRARY.iter() {
                    println!("{}:", category.kind);
                    for example in category.equations {
                        println!("  {:<32} {}", example.name, example.eq);
                    }
                }
                println!("defaults:");
                DEFAULT_EXAMPLES.iter().for_each(|eq| println!("  {}", eq));
            }
        }
    }
    Ok(())
}
