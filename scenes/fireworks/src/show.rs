use ember_engine::*;
use glam::Vec2;

use crate::rocket::Firework;

// Automatic launch cadence, in milliseconds
const MIN_LAUNCH_DELAY_MS: f32 = 500.0;
const MAX_LAUNCH_DELAY_MS: f32 = 1000.0;

// Translucent overpaint that fades earlier frames into the night sky
const FADE_ALPHA: f32 = 0.1;

/// Fireworks display: rockets launch on a random cadence or wherever the
/// pointer taps, climb, and burst into gravity-pulled sparks.
pub struct FireworkShow {
    fireworks: Vec<Firework>,
    since_launch_ms: f32,
    next_delay_ms: f32,
}

impl FireworkShow {
    pub fn new() -> Self {
        FireworkShow {
            fireworks: Vec::new(),
            since_launch_ms: 0.0,
            next_delay_ms: MAX_LAUNCH_DELAY_MS,
        }
    }
}

impl Scene for FireworkShow {
    fn init(&mut self, ctx: &mut SceneContext) {
        self.fireworks.clear();
        self.since_launch_ms = 0.0;
        self.next_delay_ms = ctx.rng.range(MIN_LAUNCH_DELAY_MS, MAX_LAUNCH_DELAY_MS);
    }

    fn frame(&mut self, ctx: &mut SceneContext, input: &InputQueue, dt: f32) {
        self.since_launch_ms += dt * 1000.0;

        // Taps launch immediately and leave the automatic cadence alone
        for event in input.iter() {
            if let InputEvent::PointerDown { x, y } = event {
                let rocket = Firework::launch_at(Vec2::new(*x, *y), ctx.height, &mut ctx.rng);
                self.fireworks.push(rocket);
            }
        }

        if self.since_launch_ms > self.next_delay_ms {
            let rocket = Firework::launch_auto(ctx.width, ctx.height, &mut ctx.rng);
            self.fireworks.push(rocket);
            self.since_launch_ms = 0.0;
            self.next_delay_ms = ctx.rng.range(MIN_LAUNCH_DELAY_MS, MAX_LAUNCH_DELAY_MS);
        }

        for firework in &mut self.fireworks {
            firework.step(&mut ctx.rng);
        }
        self.fireworks.retain(|firework| !firework.is_done());
    }

    fn paint(&self, _ctx: &SceneContext, canvas: &mut DrawList) {
        canvas.fill_surface(Color::BLACK.with_alpha(FADE_ALPHA));

        for firework in &self.fireworks {
            firework.paint(canvas);
        }
    }
}
