pub mod draw;
pub mod surface;
