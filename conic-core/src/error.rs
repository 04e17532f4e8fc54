#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty equation")]
    Empty,

    #[error("Expected at most one '=', found {0}")]
    UnbalancedEquals(usize),

    #[error("One side of the equation is empty")]
    EmptySide,

    #[error("Unexpected character {ch:?} at position {pos}")]
    UnexpectedChar { pos: usize, ch: char },

    #[error("Unexpected {found:?} at position {pos}")]
    UnexpectedToken { pos: usize, found: String },

    #[error("Unexpected end of equation")]
    UnexpectedEnd,

    #[error("Parenthesis opened at position {pos} is never closed")]
    UnclosedParen { pos: usize },

    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("Exponent must be a small non-negative integer, found {0:?}")]
    NonIntegerExponent(String),

    #[error("Term of degree greater than 2")]
    DegreeTooHigh,

    #[error("Division by an expression containing x or y")]
    NonConstantDivisor,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Equation has no x², xy or y² term")]
    NoQuadraticTerms,

    #[error("Expected a linear equation, found a second-degree term")]
    NotLinear,

    #[error("Linear equation has no x or y term")]
    NoVariableTerms,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("Line does not meet the curve in real points")]
    NoIntersection,

    #[error("Curve has no finite focus")]
    NoFoci,

    #[error("Invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("Invalid log level: {0}")]
pub struct LogLevelError(pub String);
