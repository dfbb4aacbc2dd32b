pub mod points;
pub mod rect;
