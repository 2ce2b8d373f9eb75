pub mod color;
pub mod draw;
