use crate::api::types::SceneEvent;
use crate::bridge::protocol::{
    FrameLayout, HEADER_COMMAND_COUNT, HEADER_EVENT_COUNT, HEADER_FRAME_COUNTER,
    HEADER_MAX_COMMANDS, HEADER_MAX_EVENTS, HEADER_PROTOCOL_VERSION, HEADER_SURFACE_HEIGHT,
    HEADER_SURFACE_WIDTH, PROTOCOL_VERSION,
};
use crate::canvas::draw::DrawList;

/// The flat f32 buffer the JS host reads each frame.
///
/// Allocated once at init and never reallocated, so the host may cache
/// the pointer into WASM memory for the lifetime of the scene.
pub struct FrameBuffer {
    data: Vec<f32>,
    layout: FrameLayout,
    frame_counter: f32,
}

impl FrameBuffer {
    pub fn new(layout: FrameLayout) -> Self {
        let mut data = vec![0.0; layout.buffer_total_floats];
        data[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        data[HEADER_MAX_COMMANDS] = layout.max_commands as f32;
        data[HEADER_MAX_EVENTS] = layout.max_events as f32;

        FrameBuffer {
            data,
            layout,
            frame_counter: 0.0,
        }
    }

    /// Write one frame: header counts, then the command and event sections.
    /// Records past a section's capacity are dropped.
    pub fn publish(&mut self, canvas: &DrawList, events: &[SceneEvent], width: f32, height: f32) {
        self.frame_counter += 1.0;

        let commands = canvas.commands();
        let command_count = commands.len().min(self.layout.max_commands);
        let event_count = events.len().min(self.layout.max_events);

        self.data[HEADER_FRAME_COUNTER] = self.frame_counter;
        self.data[HEADER_SURFACE_WIDTH] = width;
        self.data[HEADER_SURFACE_HEIGHT] = height;
        self.data[HEADER_COMMAND_COUNT] = command_count as f32;
        self.data[HEADER_EVENT_COUNT] = event_count as f32;

        let src: &[f32] = bytemuck::cast_slice(&commands[..command_count]);
        let start = self.layout.command_data_offset;
        self.data[start..start + src.len()].copy_from_slice(src);

        let src: &[f32] = bytemuck::cast_slice(&events[..event_count]);
        let start = self.layout.event_data_offset;
        self.data[start..start + src.len()].copy_from_slice(src);
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn len_floats(&self) -> usize {
        self.data.len()
    }

    pub fn layout(&self) -> &FrameLayout {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::color::Color;
    use crate::canvas::draw::OP_FILL_DISC;
    use glam::Vec2;

    #[test]
    fn init_writes_version_and_capacities() {
        let buffer = FrameBuffer::new(FrameLayout::new(4, 2));
        let data = &buffer.data;
        assert_eq!(data[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(data[HEADER_MAX_COMMANDS], 4.0);
        assert_eq!(data[HEADER_MAX_EVENTS], 2.0);
        assert_eq!(data[HEADER_FRAME_COUNTER], 0.0);
    }

    #[test]
    fn publish_writes_counts_and_sections() {
        let layout = FrameLayout::new(4, 2);
        let mut buffer = FrameBuffer::new(layout.clone());

        let mut canvas = DrawList::new();
        canvas.fill_disc(Vec2::new(5.0, 6.0), 2.0, Color::rgb(1.0, 1.0, 1.0));
        let events = [SceneEvent::new(1.0, 30.0, 0.0, 0.0)];

        buffer.publish(&canvas, &events, 800.0, 600.0);

        assert_eq!(buffer.data[HEADER_FRAME_COUNTER], 1.0);
        assert_eq!(buffer.data[HEADER_SURFACE_WIDTH], 800.0);
        assert_eq!(buffer.data[HEADER_SURFACE_HEIGHT], 600.0);
        assert_eq!(buffer.data[HEADER_COMMAND_COUNT], 1.0);
        assert_eq!(buffer.data[HEADER_EVENT_COUNT], 1.0);

        let c = layout.command_data_offset;
        assert_eq!(buffer.data[c], OP_FILL_DISC);
        assert_eq!(&buffer.data[c + 1..c + 4], &[5.0, 6.0, 2.0]);

        let e = layout.event_data_offset;
        assert_eq!(&buffer.data[e..e + 2], &[1.0, 30.0]);
    }

    #[test]
    fn publish_truncates_at_capacity() {
        let mut buffer = FrameBuffer::new(FrameLayout::new(2, 1));

        let mut canvas = DrawList::new();
        for i in 0..5 {
            canvas.fill_disc(Vec2::new(i as f32, 0.0), 1.0, Color::BLACK);
        }
        let events = [
            SceneEvent::new(1.0, 0.0, 0.0, 0.0),
            SceneEvent::new(2.0, 0.0, 0.0, 0.0),
        ];

        buffer.publish(&canvas, &events, 100.0, 100.0);

        assert_eq!(buffer.data[HEADER_COMMAND_COUNT], 2.0);
        assert_eq!(buffer.data[HEADER_EVENT_COUNT], 1.0);
        assert_eq!(buffer.len_floats(), buffer.layout().buffer_total_floats);
    }

    #[test]
    fn counter_advances_every_publish() {
        let mut buffer = FrameBuffer::new(FrameLayout::new(1, 1));
        let canvas = DrawList::new();

        buffer.publish(&canvas, &[], 10.0, 10.0);
        buffer.publish(&canvas, &[], 10.0, 10.0);
        assert_eq!(buffer.data[HEADER_FRAME_COUNTER], 2.0);
    }
}
