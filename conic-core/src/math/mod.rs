pub mod deg;
pub mod fraction;
pub mod is_zero;
pub mod linalg;
pub mod quadratic;
