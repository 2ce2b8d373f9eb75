use crate::api::types::SceneEvent;
use crate::canvas::draw::DrawList;
use crate::core::rng::Rng;
use crate::input::queue::InputQueue;

/// Configuration a scene hands the runner before init.
/// Host-supplied options may override individual fields.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Surface size assumed until the first resize arrives from the host.
    pub surface_width: f32,
    pub surface_height: f32,
    /// Seed for the scene's deterministic random source.
    pub seed: u64,
    /// Capacity of the command section of the frame buffer.
    pub max_commands: usize,
    /// Capacity of the event section of the frame buffer.
    pub max_events: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            surface_width: 800.0,
            surface_height: 600.0,
            seed: 42,
            max_commands: 8192,
            max_events: 32,
        }
    }
}

/// The contract every scene implements. The runner drives it:
/// `config` once, `init` once, then `frame` + `paint` every animation frame.
pub trait Scene {
    /// Scene configuration. Called once, before `init`.
    fn config(&self) -> SceneConfig {
        SceneConfig::default()
    }

    /// Build initial state: spawn particles, size grids, seed timers.
    fn init(&mut self, ctx: &mut SceneContext);

    /// Advance the simulation by one animation frame.
    /// `dt` is the seconds elapsed since the previous frame.
    fn frame(&mut self, ctx: &mut SceneContext, input: &InputQueue, dt: f32);

    /// Repaint the surface from current state. Runs after `frame`;
    /// must not mutate the simulation.
    fn paint(&self, ctx: &SceneContext, canvas: &mut DrawList);
}

/// Shared state the runner passes into `Scene` calls: surface size,
/// the random source, and the outbound event list for this frame.
pub struct SceneContext {
    /// Current surface width in pixels. Updated by the host on resize.
    pub width: f32,
    /// Current surface height in pixels.
    pub height: f32,
    /// Deterministic random source. All scene randomness draws from here.
    pub rng: Rng,
    /// Events to publish to the host at the end of this frame.
    pub events: Vec<SceneEvent>,
}

impl SceneContext {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        SceneContext {
            width,
            height,
            rng: Rng::new(seed),
            events: Vec::with_capacity(32),
        }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.surface_width, config.surface_height, config.seed)
    }

    pub fn emit_event(&mut self, event: SceneEvent) {
        self.events.push(event);
    }

    pub fn set_surface_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Drop per-frame data before the next `Scene::frame` call.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_tracks_resize() {
        let mut ctx = SceneContext::new(800.0, 600.0, 1);
        ctx.set_surface_size(1024.0, 768.0);
        assert_eq!((ctx.width, ctx.height), (1024.0, 768.0));
    }

    #[test]
    fn events_clear_between_frames() {
        let mut ctx = SceneContext::from_config(&SceneConfig::default());
        ctx.emit_event(SceneEvent::new(1.0, 10.0, 0.0, 0.0));
        assert_eq!(ctx.events.len(), 1);

        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }
}
