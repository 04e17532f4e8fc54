pub mod r2;
pub mod transform;
