use bytemuck::{Pod, Zeroable};

/// An event emitted by a scene for the host to act on
/// (score changes, game over, and the like).
/// Serialized into the frame buffer as 4 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SceneEvent {
    /// Event type identifier. Meanings are scene-specific.
    pub kind: f32,
    /// Event parameters. Unused parameters stay 0.
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl SceneEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        SceneEvent { kind, a, b, c }
    }
}
