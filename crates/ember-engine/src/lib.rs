pub mod api;
pub mod core;
pub mod canvas;
pub mod bridge;
pub mod input;
pub mod config;

// Re-export key types at crate root for convenience
pub use crate::api::scene::{Scene, SceneConfig, SceneContext};
pub use crate::api::types::SceneEvent;
pub use crate::bridge::frame::FrameBuffer;
pub use crate::bridge::protocol::FrameLayout;
pub use crate::canvas::color::Color;
pub use crate::canvas::draw::{DrawCommand, DrawList};
pub use crate::config::options::RunnerOptions;
pub use crate::core::rng::Rng;
pub use crate::core::time::FixedTimestep;
pub use crate::input::queue::{InputEvent, InputQueue};
