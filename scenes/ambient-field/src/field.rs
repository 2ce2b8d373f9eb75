use ember_engine::*;
use glam::Vec2;

// Field constants
const PARTICLE_COUNT: usize = 100;
const MIN_RADIUS: f32 = 1.0;
const MAX_RADIUS: f32 = 3.0;
const MAX_SPEED: f32 = 0.5;

// Link line tuning: lines appear under LINK_DISTANCE and get fainter
// with distance
const LINK_DISTANCE: f32 = 100.0;
const LINK_BASE_ALPHA: f32 = 0.2;
const LINK_ALPHA_FALLOFF: f32 = 500.0;
const LINK_WIDTH: f32 = 1.0;

const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);

/// One drifting dot.
struct Particle {
    pos: Vec2,
    vel: Vec2,
    radius: f32,
    color: Color,
}

impl Particle {
    fn spawn(width: f32, height: f32, rng: &mut Rng) -> Self {
        Particle {
            pos: Vec2::new(rng.next_f32() * width, rng.next_f32() * height),
            vel: Vec2::new(
                rng.range(-MAX_SPEED, MAX_SPEED),
                rng.range(-MAX_SPEED, MAX_SPEED),
            ),
            radius: rng.range(MIN_RADIUS, MAX_RADIUS),
            color: if rng.chance(0.5) { CYAN } else { MAGENTA },
        }
    }
}

/// Ambient particle field: dots drift and bounce off the surface edges,
/// linked by translucent lines while they are near each other.
pub struct AmbientField {
    count: usize,
    particles: Vec<Particle>,
}

impl AmbientField {
    pub fn new() -> Self {
        Self::with_count(PARTICLE_COUNT)
    }

    pub fn with_count(count: usize) -> Self {
        AmbientField {
            count,
            particles: Vec::new(),
        }
    }
}

impl Scene for AmbientField {
    fn init(&mut self, ctx: &mut SceneContext) {
        let (width, height) = (ctx.width, ctx.height);
        self.particles = (0..self.count)
            .map(|_| Particle::spawn(width, height, &mut ctx.rng))
            .collect();
    }

    fn frame(&mut self, ctx: &mut SceneContext, _input: &InputQueue, _dt: f32) {
        // Velocities are per animation frame, not per second
        for p in &mut self.particles {
            p.pos += p.vel;

            if p.pos.x > ctx.width || p.pos.x < 0.0 {
                p.vel.x = -p.vel.x;
            }
            if p.pos.y > ctx.height || p.pos.y < 0.0 {
                p.vel.y = -p.vel.y;
            }
        }
    }

    fn paint(&self, _ctx: &SceneContext, canvas: &mut DrawList) {
        canvas.clear_surface();

        for p in &self.particles {
            canvas.fill_disc(p.pos, p.radius, p.color);
        }

        // Link lines paint over the dots
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = &self.particles[i];
                let b = &self.particles[j];
                let distance = a.pos.distance(b.pos);
                if distance < LINK_DISTANCE {
                    let alpha = (LINK_BASE_ALPHA - distance / LINK_ALPHA_FALLOFF).max(0.0);
                    canvas.stroke_line(a.pos, b.pos, LINK_WIDTH, CYAN.with_alpha(alpha));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_engine::canvas::draw::{OP_CLEAR, OP_FILL_DISC, OP_STROKE_LINE};

    fn context() -> SceneContext {
        SceneContext::new(800.0, 600.0, 42)
    }

    #[test]
    fn init_fills_the_surface() {
        let mut ctx = context();
        let mut field = AmbientField::new();
        field.init(&mut ctx);

        assert_eq!(field.particles.len(), PARTICLE_COUNT);
        for p in &field.particles {
            assert!(p.pos.x >= 0.0 && p.pos.x < 800.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 600.0);
            assert!(p.radius >= MIN_RADIUS && p.radius < MAX_RADIUS);
            assert!(p.vel.x.abs() <= MAX_SPEED && p.vel.y.abs() <= MAX_SPEED);
            assert!(p.color == CYAN || p.color == MAGENTA);
        }
    }

    #[test]
    fn edge_crossing_reverses_velocity() {
        let mut ctx = context();
        let mut field = AmbientField::with_count(1);
        field.init(&mut ctx);

        let input = InputQueue::new();
        field.particles[0].pos = Vec2::new(799.8, 300.0);
        field.particles[0].vel = Vec2::new(0.5, 0.0);

        field.frame(&mut ctx, &input, 1.0 / 60.0);
        assert_eq!(field.particles[0].vel.x, -0.5);
        // the flip never clamps: the dot renders out of bounds this frame
        assert!(field.particles[0].pos.x > 800.0);

        // next frame brings it back inside, velocity stays reversed
        field.frame(&mut ctx, &input, 1.0 / 60.0);
        assert!(field.particles[0].pos.x < 800.0);
        assert_eq!(field.particles[0].vel.x, -0.5);
    }

    #[test]
    fn axes_bounce_independently() {
        let mut ctx = context();
        let mut field = AmbientField::with_count(1);
        field.init(&mut ctx);

        let input = InputQueue::new();
        field.particles[0].pos = Vec2::new(400.0, 0.2);
        field.particles[0].vel = Vec2::new(0.3, -0.5);

        field.frame(&mut ctx, &input, 1.0 / 60.0);
        assert_eq!(field.particles[0].vel.x, 0.3);
        assert_eq!(field.particles[0].vel.y, 0.5);
    }

    #[test]
    fn near_particles_get_linked() {
        let mut ctx = context();
        let mut field = AmbientField::with_count(2);
        field.init(&mut ctx);
        field.particles[0].pos = Vec2::new(100.0, 100.0);
        field.particles[1].pos = Vec2::new(150.0, 100.0);

        let mut canvas = DrawList::new();
        field.paint(&ctx, &mut canvas);

        let lines: Vec<_> = canvas
            .commands()
            .iter()
            .filter(|c| c.op == OP_STROKE_LINE)
            .collect();
        assert_eq!(lines.len(), 1);
        // alpha = 0.2 - 50/500
        assert!((lines[0].color[3] - 0.1).abs() < 1e-5);
    }

    #[test]
    fn far_particles_stay_unlinked() {
        let mut ctx = context();
        let mut field = AmbientField::with_count(2);
        field.init(&mut ctx);
        field.particles[0].pos = Vec2::new(100.0, 100.0);
        field.particles[1].pos = Vec2::new(300.0, 100.0);

        let mut canvas = DrawList::new();
        field.paint(&ctx, &mut canvas);

        assert!(canvas.commands().iter().all(|c| c.op != OP_STROKE_LINE));
    }

    #[test]
    fn paint_clears_then_draws_every_dot() {
        let mut ctx = context();
        let mut field = AmbientField::new();
        field.init(&mut ctx);

        let mut canvas = DrawList::new();
        field.paint(&ctx, &mut canvas);

        assert_eq!(canvas.commands()[0].op, OP_CLEAR);
        let discs = canvas
            .commands()
            .iter()
            .filter(|c| c.op == OP_FILL_DISC)
            .count();
        assert_eq!(discs, PARTICLE_COUNT);
    }

    #[test]
    fn resize_keeps_particles_in_place() {
        let mut ctx = context();
        let mut field = AmbientField::new();
        field.init(&mut ctx);

        let before: Vec<Vec2> = field.particles.iter().map(|p| p.pos).collect();
        ctx.set_surface_size(400.0, 300.0);

        let after: Vec<Vec2> = field.particles.iter().map(|p| p.pos).collect();
        assert_eq!(before, after);
    }
}
