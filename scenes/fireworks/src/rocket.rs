use ember_engine::*;
use glam::Vec2;

// Burst tuning. Spark velocities are per animation frame.
const GRAVITY: f32 = 0.05;
const SPARK_MIN_COUNT: u32 = 100;
const SPARK_EXTRA_COUNT: u32 = 50;
const SPARK_SPREAD: f32 = 4.0;
const SPARK_MIN_DECAY: f32 = 0.01;
const SPARK_MAX_DECAY: f32 = 0.025;
const SPARK_MIN_RADIUS: f32 = 1.0;
const SPARK_MAX_RADIUS: f32 = 4.0;

// Ascent tuning
const ASCENT_DIVISOR: f32 = 60.0;
const TRAIL_CHANCE: f32 = 0.3;
const TRAIL_ALPHA: f32 = 0.5;
const TRAIL_RADIUS: f32 = 2.0;
const TRAIL_DECAY: f32 = 0.02;
const ROCKET_RADIUS: f32 = 3.0;
const MIN_TARGET_Y: f32 = 50.0;

/// One burst spark. Lives while its alpha is above zero.
pub(crate) struct Spark {
    pub(crate) pos: Vec2,
    pub(crate) vel: Vec2,
    pub(crate) alpha: f32,
    decay: f32,
    radius: f32,
}

impl Spark {
    fn spawn(origin: Vec2, rng: &mut Rng) -> Self {
        Spark {
            pos: origin,
            vel: Vec2::new(
                rng.range(-SPARK_SPREAD, SPARK_SPREAD),
                rng.range(-SPARK_SPREAD, SPARK_SPREAD),
            ),
            alpha: 1.0,
            decay: rng.range(SPARK_MIN_DECAY, SPARK_MAX_DECAY),
            radius: rng.range(SPARK_MIN_RADIUS, SPARK_MAX_RADIUS),
        }
    }

    fn step(&mut self) {
        self.vel.y += GRAVITY;
        self.pos += self.vel;
        self.alpha -= self.decay;
    }
}

/// A fading dot an ascending rocket left behind.
struct TrailPoint {
    pos: Vec2,
    alpha: f32,
}

/// One rocket: ascends toward its target height, then bursts into sparks.
/// Done once every spark has faded.
pub(crate) struct Firework {
    pub(crate) pos: Vec2,
    pub(crate) target_y: f32,
    pub(crate) ascent: f32,
    pub(crate) color: Color,
    pub(crate) exploded: bool,
    pub(crate) sparks: Vec<Spark>,
    trail: Vec<TrailPoint>,
}

impl Firework {
    /// Launch from a random column at the bottom edge.
    pub(crate) fn launch_auto(width: f32, height: f32, rng: &mut Rng) -> Self {
        let x = rng.next_f32() * width;
        Self::launch(Vec2::new(x, height), height, rng)
    }

    /// Launch from an exact point (pointer taps).
    pub(crate) fn launch_at(pos: Vec2, height: f32, rng: &mut Rng) -> Self {
        Self::launch(pos, height, rng)
    }

    fn launch(pos: Vec2, height: f32, rng: &mut Rng) -> Self {
        let target_y = rng.next_f32() * height * 0.5 + MIN_TARGET_Y;
        // Constant climb speed, sized so the ascent takes about a second
        let ascent = (pos.y - target_y) / ASCENT_DIVISOR;

        Firework {
            pos,
            target_y,
            ascent,
            color: Color::from_hsl(rng.range(0.0, 360.0), 1.0, 0.6),
            exploded: false,
            sparks: Vec::new(),
            trail: Vec::new(),
        }
    }

    /// Advance one animation frame.
    pub(crate) fn step(&mut self, rng: &mut Rng) {
        if !self.exploded {
            self.pos.y -= self.ascent;

            if rng.chance(TRAIL_CHANCE) {
                self.trail.push(TrailPoint {
                    pos: self.pos,
                    alpha: TRAIL_ALPHA,
                });
            }

            if self.pos.y <= self.target_y {
                self.explode(rng);
            }
        } else {
            self.sparks.retain_mut(|spark| {
                spark.step();
                spark.alpha > 0.0
            });
        }

        // The trail keeps fading even after the burst
        self.trail.retain_mut(|point| {
            point.alpha -= TRAIL_DECAY;
            point.alpha > 0.0
        });
    }

    fn explode(&mut self, rng: &mut Rng) {
        self.exploded = true;
        let count = SPARK_MIN_COUNT + rng.next_int(SPARK_EXTRA_COUNT);
        self.sparks = (0..count).map(|_| Spark::spawn(self.pos, rng)).collect();
    }

    pub(crate) fn is_done(&self) -> bool {
        self.exploded && self.sparks.is_empty()
    }

    pub(crate) fn paint(&self, canvas: &mut DrawList) {
        if !self.exploded {
            for point in &self.trail {
                canvas.fill_disc(point.pos, TRAIL_RADIUS, self.color.with_alpha(point.alpha));
            }
            canvas.fill_disc(self.pos, ROCKET_RADIUS, self.color);
        } else {
            for spark in &self.sparks {
                canvas.fill_disc(spark.pos, spark.radius, self.color.with_alpha(spark.alpha));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_launch_starts_at_the_bottom() {
        let mut rng = Rng::new(7);
        let firework = Firework::launch_auto(800.0, 600.0, &mut rng);

        assert_eq!(firework.pos.y, 600.0);
        assert!(firework.pos.x >= 0.0 && firework.pos.x < 800.0);
        assert!(firework.target_y >= MIN_TARGET_Y && firework.target_y < 350.0);
        assert!(firework.ascent > 0.0);
        assert!(!firework.exploded);
    }

    #[test]
    fn rocket_climbs_then_bursts() {
        let mut rng = Rng::new(7);
        let mut firework = Firework::launch_auto(800.0, 600.0, &mut rng);

        let mut steps = 0;
        while !firework.exploded && steps < 10_000 {
            firework.step(&mut rng);
            steps += 1;
        }

        assert!(firework.exploded);
        assert!(firework.pos.y <= firework.target_y);
        let count = firework.sparks.len() as u32;
        assert!((SPARK_MIN_COUNT..SPARK_MIN_COUNT + SPARK_EXTRA_COUNT).contains(&count));

        // fresh sparks all sit inside the spawn distributions
        for spark in &firework.sparks {
            assert_eq!(spark.pos, firework.pos);
            assert!(spark.vel.x.abs() <= SPARK_SPREAD && spark.vel.y.abs() <= SPARK_SPREAD);
            assert_eq!(spark.alpha, 1.0);
            assert!(spark.decay >= SPARK_MIN_DECAY && spark.decay < SPARK_MAX_DECAY);
            assert!(spark.radius >= SPARK_MIN_RADIUS && spark.radius < SPARK_MAX_RADIUS);
        }
    }

    #[test]
    fn tap_above_target_bursts_immediately() {
        let mut rng = Rng::new(3);
        // target_y is at least 50, so a tap above that explodes on the
        // first step
        let mut firework = Firework::launch_at(Vec2::new(400.0, 10.0), 600.0, &mut rng);
        assert!(firework.ascent < 0.0);

        firework.step(&mut rng);
        assert!(firework.exploded);
    }

    #[test]
    fn gravity_pulls_sparks_down() {
        let mut rng = Rng::new(11);
        let mut spark = Spark::spawn(Vec2::new(100.0, 100.0), &mut rng);

        let vy = spark.vel.y;
        spark.step();
        assert!((spark.vel.y - (vy + GRAVITY)).abs() < 1e-6);
        assert!(spark.alpha < 1.0);
    }

    #[test]
    fn burst_fades_to_done() {
        let mut rng = Rng::new(7);
        let mut firework = Firework::launch_auto(800.0, 600.0, &mut rng);

        let mut steps = 0;
        while !firework.is_done() && steps < 100_000 {
            firework.step(&mut rng);
            steps += 1;
            // expired sparks never survive a step
            assert!(firework.sparks.iter().all(|s| s.alpha > 0.0));
        }
        assert!(firework.is_done());
    }

    #[test]
    fn trail_empties_after_the_burst() {
        let mut rng = Rng::new(7);
        let mut firework = Firework::launch_auto(800.0, 600.0, &mut rng);

        let mut steps = 0;
        while !firework.exploded && steps < 10_000 {
            firework.step(&mut rng);
            steps += 1;
        }

        // trail alpha starts at 0.5 and fades 0.02 per frame
        for _ in 0..25 {
            firework.step(&mut rng);
        }
        assert!(firework.trail.is_empty());
    }
}
