//! WASM bindings for the conic analysis engine.
//!
//! Every entry point takes and returns plain JS values (via `serde-wasm-bindgen`); shapes of the
//! values are described by the TypeScript declarations `tsify` generates for the `conic-core` types.
//! Failures surface as thrown `Error`s carrying the core error's message.

use conic_core::{
    Analysis, CanonicalForm, Coeffs, FractionConfig, LinearCoeffs, R2,
    library::{Category, DEFAULT_EXAMPLES, LIBRARY},
    steps::steps as solution_steps,
    tangent::{tangent_at_with, Tangent},
    view,
};
use log::{error, info};
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_console_logger::DEFAULT_LOGGER;

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    Ok(serde_wasm_bindgen::from_value(value)?)
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}

/// Initializes the logging system for WASM.
///
/// Sets up console logging and panic hooks for better error reporting in the browser.
/// Should be called once at application startup.
#[wasm_bindgen]
pub fn init_logs() {
    match log::set_logger(&DEFAULT_LOGGER) {
        Ok(_) => info!("Initialized console.logger"),
        Err(e) => error!("failed to set console.logger: {}", e),
    };
    console_error_panic_hook::set_once();
}

/// Updates the log level filter.
///
/// # Arguments
/// * `level` - Log level string: "off", "error", "warn", "info", "debug", or "trace".
///   Defaults to "info" if empty or null.
#[wasm_bindgen]
pub fn update_log_level(level: JsValue) -> Result<(), JsError> {
    let level: Option<String> = from_js(level)?;
    let level = conic_core::parse_log_level(level.as_deref())?;
    log::set_max_level(level);
    Ok(())
}

/// Parses an equation like `x^2/16 + y^2/9 = 1` into general-form coefficients `{A, B, C, D, E, F}`.
#[wasm_bindgen]
pub fn parse_general(text: &str) -> Result<JsValue, JsError> {
    to_js(&conic_core::parse_general(text)?)
}

/// Parses a line like `y = 2x + 1` into `{A, B, C}` for `Ax + By + C = 0`.
#[wasm_bindgen]
pub fn parse_linear(text: &str) -> Result<JsValue, JsError> {
    to_js(&conic_core::parse_linear(text)?)
}

/// Classifies and reduces a coefficient set.
///
/// # Returns
/// An [`Analysis`]: the coefficients, the discriminant, and the `conic` geometry tagged by `kind`.
#[wasm_bindgen]
pub fn analyze(coeffs: JsValue) -> Result<JsValue, JsError> {
    let coeffs: Coeffs = from_js(coeffs)?;
    to_js(&conic_core::analyze(coeffs))
}

/// [`parse_general`] followed by [`analyze`].
#[wasm_bindgen]
pub fn analyze_equation(text: &str) -> Result<JsValue, JsError> {
    to_js(&conic_core::analyze(conic_core::parse_general(text)?))
}

/// Tangent line at `point`, or `null` at a singular point.
///
/// # Arguments
/// * `coeffs` - `{A, B, C, D, E, F}`.
/// * `point` - `{x, y}`, normally on the curve.
/// * `config` - Optional `{tolerance, maxDenominator}` for the integer form of the line.
#[wasm_bindgen]
pub fn tangent_at(coeffs: JsValue, point: JsValue, config: JsValue) -> Result<JsValue, JsError> {
    let coeffs: Coeffs = from_js(coeffs)?;
    let point: R2<f64> = from_js(point)?;
    let config: Option<FractionConfig> = from_js(config)?;
    to_js(&tangent_at_with(&coeffs, point, &config.unwrap_or_default()))
}

/// Tangent at the parabola's vertex or at the end of the first semi-axis; `null` for degenerate curves.
#[wasm_bindgen]
pub fn default_tangent(analysis: JsValue) -> Result<JsValue, JsError> {
    let analysis: Analysis = from_js(analysis)?;
    to_js(&conic_core::default_tangent(&analysis))
}

/// Intersections of the line through `focus` and `probe` with the curve.
#[wasm_bindgen]
pub fn focal_chord(coeffs: JsValue, focus: JsValue, probe: JsValue) -> Result<JsValue, JsError> {
    let coeffs: Coeffs = from_js(coeffs)?;
    let focus: R2<f64> = from_js(focus)?;
    let probe: R2<f64> = from_js(probe)?;
    to_js(&conic_core::focal_chord(&coeffs, focus, probe)?)
}

/// [`focal_chord`] through whichever focus is nearest `probe`.
#[wasm_bindgen]
pub fn focal_chord_from(analysis: JsValue, probe: JsValue) -> Result<JsValue, JsError> {
    let analysis: Analysis = from_js(analysis)?;
    let probe: R2<f64> = from_js(probe)?;
    to_js(&conic_core::focal_chord_from(&analysis, probe)?)
}

/// Derivation of the canonical form, one LaTeX-flavoured string per step.
#[wasm_bindgen]
pub fn steps(analysis: JsValue) -> Result<JsValue, JsError> {
    let analysis: Analysis = from_js(analysis)?;
    to_js(&solution_steps(&analysis))
}

/// General-form coefficients for a `{kind, h, k, a, b, orientation}` / `{kind, h, k, p, orientation}`.
#[wasm_bindgen]
pub fn from_canonical(form: JsValue) -> Result<JsValue, JsError> {
    let form: CanonicalForm = from_js(form)?;
    to_js(&form.to_coeffs()?)
}

/// Center/vertex, foci, directrices, axes, asymptotes and conjugate-hyperbola level to draw over the curve.
#[wasm_bindgen]
pub fn extras_segments(analysis: JsValue, range: f64) -> Result<JsValue, JsError> {
    let analysis: Analysis = from_js(analysis)?;
    to_js(&view::overlay(&analysis, range))
}

/// Half-width of the default viewport.
#[wasm_bindgen]
pub fn estimate_range(analysis: JsValue) -> Result<f64, JsError> {
    let analysis: Analysis = from_js(analysis)?;
    Ok(view::estimate_range(&analysis))
}

/// The tangent line clipped to (an enlarged) viewport, or `null` if it has no direction.
#[wasm_bindgen]
pub fn tangent_segment(tangent: JsValue, x_range: Vec<f64>, y_range: Vec<f64>) -> Result<JsValue, JsError> {
    let tangent: Tangent = from_js(tangent)?;
    let pair = |r: Vec<f64>| -> Result<[ f64; 2 ], JsError> {
        <[ f64; 2 ]>::try_from(r.as_slice()).map_err(|_| JsError::new(&format!("Expected [min, max], found {} values", r.len())))
    };
    to_js(&view::tangent_segment(&tangent, pair(x_range)?, pair(y_range)?))
}

/// `F(x, y)` on an `n × n` grid over `[−range, range]²`, for contour plotting.
#[wasm_bindgen]
pub fn sample_grid(coeffs: JsValue, range: f64, n: usize) -> Result<JsValue, JsError> {
    let coeffs: Coeffs = from_js(coeffs)?;
    to_js(&view::sample_grid(&coeffs, range, n))
}

/// How the line `{A, B, C}` meets the curve: tangent, secant, crossing or miss.
#[wasm_bindgen]
pub fn line_contact(coeffs: JsValue, line: JsValue) -> Result<JsValue, JsError> {
    let coeffs: Coeffs = from_js(coeffs)?;
    let line: LinearCoeffs = from_js(line)?;
    to_js(&conic_core::line_contact(&coeffs, &line)?)
}

#[derive(Serialize)]
struct Library {
    categories: &'static [ Category ],
    defaults: &'static [ &'static str ],
}

/// Built-in example equations by category, and the default example list.
#[wasm_bindgen]
pub fn library() -> Result<JsValue, JsError> {
    to_js(&Library { categories: &LIBRARY, defaults: &DEFAULT_EXAMPLES })
}
