pub trait Fmt {
    /// Render with at most `n` decimals, dropping trailing zeros.
    fn s(&self, n: usize) -> String;
}

impl Fmt for f64 {
    fn s(&self, n: usize) -> String {
        let rendered = format!("{:.1$}", self, n);
        let rendered = if rendered.contains('.') {
            rendered.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            rendered
        };
        if rendered == "-0" { "0".to_string() } else { rendered }
    }
}

/// `c₁v₁ + c₂v₂ + … = 0`, skipping terms that render as zero and unit coefficients on variables.
pub fn equation(terms: &[(f64, &str)], n: usize) -> String {
    let mut out = String::new();
    for (coef, var) in terms {
        let mag = coef.abs().s(n);
        if mag == "0" {
            continue;
        }
        let neg = *coef < 0.;
        if out.is_empty() {
            if neg {
                out.push('-');
            }
        } else {
            out.push_str(if neg { " - " } else { " + " });
        }
        if var.is_empty() || mag != "1" {
            out.push_str(&mag);
        }
        out.push_str(var);
    }
    if out.is_empty() {
        out.push('0');
    }
    out.push_str(" = 0");
    out
}

pub fn general_equation(coeffs: &[ f64; 6 ]) -> String {
    let vars = [ "x^2", "xy", "y^2", "x", "y", "" ];
    let terms: Vec<(f64, &str)> = coeffs.iter().cloned().zip(vars).collect();
    equation(&terms, 3)
}

pub fn linear_equation(a: f64, b: f64, c: f64, n: usize) -> String {
    equation(&[ (a, "x"), (b, "y"), (c, "") ], n)
}
