#![allow(mixed_script_confusables)]

#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

// Organized modules
pub mod conic;
pub mod geometry;
pub mod math;
pub mod parse;

// Re-exports for shorter paths
pub use geometry::r2;
pub use geometry::transform;

pub use conic::central;
pub use conic::parabola;

pub use math::deg;
pub use math::fraction;
pub use math::is_zero;
pub use math::linalg;
pub use math::quadratic;

// Analysis and presentation helpers
pub mod canonical;
pub mod chord;
pub mod coeffs;
pub mod config;
pub mod error;
pub mod fmt;
pub mod library;
pub mod line;
pub mod steps;
pub mod tangent;
pub mod view;

// Re-export key types for external use
pub use canonical::CanonicalForm;
pub use chord::{ChordPoints, focal_chord, focal_chord_from};
pub use coeffs::{Coeffs, LinearCoeffs};
pub use conic::{Analysis, Conic, Kind, analyze};
pub use config::FractionConfig;
pub use error::{GeometryError, LogLevelError, ParseError};
pub use line::{LineContact, line_contact};
pub use parse::{parse_general, parse_linear};
pub use r2::R2;
pub use tangent::{Tangent, default_tangent, tangent_at};
pub use transform::{Segment, asymptote_segments, canonical_to_world, directrix_segments, parabola_directrix_segment};

/// Parse a log level string into LevelFilter.
pub fn parse_log_level(level: Option<&str>) -> Result<log::LevelFilter, LogLevelError> {
    match level {
        Some("error") => Ok(log::LevelFilter::Error),
        Some("warn") => Ok(log::LevelFilter::Warn),
        Some("info") | Some("") | None => Ok(log::LevelFilter::Info),
        Some("debug") => Ok(log::LevelFilter::Debug),
        Some("trace") => Ok(log::LevelFilter::Trace),
        Some("off") => Ok(log::LevelFilter::Off),
        Some(level) => Err(LogLevelError(level.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_levels() {
        assert_eq!(parse_log_level(None).unwrap(), log::LevelFilter::Info);
        assert_eq!(parse_log_level(Some("")).unwrap(), log::LevelFilter::Info);
        assert_eq!(parse_log_level(Some("debug")).unwrap(), log::LevelFilter::Debug);
        assert!(parse_log_level(Some("loud")).is_err());
    }
}
