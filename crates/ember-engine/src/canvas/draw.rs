use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::canvas::color::Color;

/// Command opcodes, stored as the first float of each record.
/// Must match the host-side replay switch.
pub const OP_CLEAR: f32 = 0.0;
pub const OP_FILL_SURFACE: f32 = 1.0;
pub const OP_FILL_RECT: f32 = 2.0;
pub const OP_FILL_DISC: f32 = 3.0;
pub const OP_STROKE_LINE: f32 = 4.0;

/// One drawing command as written to the shared frame buffer.
///
/// Field use per opcode:
/// - `FILL_RECT`: (x, y) origin, (w, h) size
/// - `FILL_DISC`: (x, y) center, w = radius
/// - `STROKE_LINE`: (x, y) start, (w, h) end, stroke = line width
/// - `CLEAR` / `FILL_SURFACE`: geometry fields unused
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct DrawCommand {
    pub op: f32,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub stroke: f32,
    pub color: [f32; 4],
}

impl DrawCommand {
    /// Floats per command. The host indexes the command section with this stride.
    pub const FLOATS: usize = 10;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-frame list of drawing commands, rebuilt by `Scene::paint`.
/// Order is paint order: the host replays front to back.
#[derive(Debug)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(max_commands: usize) -> Self {
        DrawList {
            commands: Vec::with_capacity(max_commands),
        }
    }

    /// Drop all commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Reset the whole surface to transparent.
    pub fn clear_surface(&mut self) {
        self.commands.push(DrawCommand {
            op: OP_CLEAR,
            ..DrawCommand::default()
        });
    }

    /// Flood the whole surface with one color. A translucent color painted
    /// every frame produces the fading-afterimage effect.
    pub fn fill_surface(&mut self, color: Color) {
        self.commands.push(DrawCommand {
            op: OP_FILL_SURFACE,
            color: color.to_array(),
            ..DrawCommand::default()
        });
    }

    pub fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand {
            op: OP_FILL_RECT,
            x: origin.x,
            y: origin.y,
            w: size.x,
            h: size.y,
            stroke: 0.0,
            color: color.to_array(),
        });
    }

    pub fn fill_disc(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand {
            op: OP_FILL_DISC,
            x: center.x,
            y: center.y,
            w: radius,
            h: 0.0,
            stroke: 0.0,
            color: color.to_array(),
        });
    }

    pub fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.commands.push(DrawCommand {
            op: OP_STROKE_LINE,
            x: from.x,
            y: from.y,
            w: to.x,
            h: to.y,
            stroke: width,
            color: color.to_array(),
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}
