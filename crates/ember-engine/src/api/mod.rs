pub mod scene;
pub mod types;
