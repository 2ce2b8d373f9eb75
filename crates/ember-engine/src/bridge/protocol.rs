//! Frame buffer layout shared with the JS host.
//! Must stay in sync with the host-side reader.
//!
//! Layout (all values f32, 4 bytes each):
//! ```text
//! [Header: 8 floats]
//! [Commands: max_commands x 10 floats]
//! [Events: max_events x 4 floats]
//! ```
//!
//! Section capacities are written into the header once at init;
//! the host reads them back to compute section offsets.

use crate::api::scene::SceneConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_SURFACE_WIDTH: usize = 2;
pub const HEADER_SURFACE_HEIGHT: usize = 3;
pub const HEADER_MAX_COMMANDS: usize = 4;
pub const HEADER_COMMAND_COUNT: usize = 5;
pub const HEADER_MAX_EVENTS: usize = 6;
pub const HEADER_EVENT_COUNT: usize = 7;

/// Bumped when the buffer layout changes incompatibly.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per draw command record.
pub const COMMAND_FLOATS: usize = 10;

/// Floats per scene event record: kind, a, b, c.
pub const EVENT_FLOATS: usize = 4;

/// Computed sizes and offsets for one frame buffer, in floats
/// unless the name says bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLayout {
    pub max_commands: usize,
    pub max_events: usize,
    pub command_data_floats: usize,
    pub event_data_floats: usize,
    pub command_data_offset: usize,
    pub event_data_offset: usize,
    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl FrameLayout {
    pub fn new(max_commands: usize, max_events: usize) -> Self {
        let command_data_floats = max_commands * COMMAND_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let command_data_offset = HEADER_FLOATS;
        let event_data_offset = command_data_offset + command_data_floats;
        let buffer_total_floats = event_data_offset + event_data_floats;

        FrameLayout {
            max_commands,
            max_events,
            command_data_floats,
            event_data_floats,
            command_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.max_commands, config.max_events)
    }
}
