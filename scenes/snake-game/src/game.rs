use ember_engine::*;
use glam::Vec2;

use crate::board::{Board, Direction, GamePhase, StepOutcome};

// Simulation tick length in seconds
const TICK_DT: f32 = 0.1;

// Tile sizing: roughly 25 tiles across the short surface side,
// but never smaller than 15px
const MIN_TILE: f32 = 15.0;
const TILE_DIVISOR: f32 = 25.0;

// Host key codes
const KEY_SPACE: u32 = 32;
const KEY_LEFT: u32 = 37;
const KEY_UP: u32 = 38;
const KEY_RIGHT: u32 = 39;
const KEY_DOWN: u32 = 40;
const KEY_A: u32 = 65;
const KEY_D: u32 = 68;
const KEY_S: u32 = 83;
const KEY_W: u32 = 87;

// Scene event kinds (Rust -> host)
const EVENT_SCORE: f32 = 1.0;
const EVENT_GAME_OVER: f32 = 2.0;

// Custom event kinds (host -> Rust)
const CUSTOM_START: u32 = 1;

// Game Boy pea-soup palette
const COLOR_BG: Color = Color::rgb(0.608, 0.737, 0.059); // #9bbc0f
const COLOR_GRID: Color = Color::rgb(0.545, 0.737, 0.059); // #8bbc0f
const COLOR_FOOD: Color = Color::rgb(0.188, 0.384, 0.188); // #306230
const COLOR_BODY: Color = Color::rgb(0.188, 0.384, 0.188); // #306230
const COLOR_HEAD: Color = Color::rgb(0.059, 0.220, 0.059); // #0f380f

const GRID_LINE_WIDTH: f32 = 0.5;

/// Classic snake. The board sits Idle until the host starts a game with
/// the space key or a custom start event; ticks run on a fixed 100ms
/// accumulator regardless of the display rate.
pub struct SnakeGame {
    board: Board,
    timestep: FixedTimestep,
    tile_size: f32,
}

impl SnakeGame {
    pub fn new() -> Self {
        SnakeGame {
            board: Board::new(),
            timestep: FixedTimestep::new(TICK_DT),
            tile_size: MIN_TILE,
        }
    }

    fn tile_for(width: f32, height: f32) -> f32 {
        (width.min(height) / TILE_DIVISOR).floor().max(MIN_TILE)
    }

    /// Playable grid for the current surface. Recomputed every tick so
    /// resizes move the walls immediately.
    fn grid_size(&self, ctx: &SceneContext) -> (i32, i32) {
        let cols = ((ctx.width / self.tile_size).floor() as i32).max(1);
        let rows = ((ctx.height / self.tile_size).floor() as i32).max(1);
        (cols, rows)
    }

    fn start(&mut self, ctx: &mut SceneContext) {
        let (cols, rows) = self.grid_size(ctx);
        self.board.start(cols, rows, &mut ctx.rng);
        self.timestep.reset();
        ctx.emit_event(SceneEvent {
            kind: EVENT_SCORE,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        });
        log::info!("snake: new game on a {}x{} grid", cols, rows);
    }

    fn handle_key(&mut self, ctx: &mut SceneContext, key_code: u32) {
        match key_code {
            KEY_UP | KEY_W => self.board.set_pending(Direction::Up),
            KEY_DOWN | KEY_S => self.board.set_pending(Direction::Down),
            KEY_LEFT | KEY_A => self.board.set_pending(Direction::Left),
            KEY_RIGHT | KEY_D => self.board.set_pending(Direction::Right),
            KEY_SPACE => {
                if self.board.phase != GamePhase::Running {
                    self.start(ctx);
                }
            }
            _ => {}
        }
    }

    fn handle_input(&mut self, ctx: &mut SceneContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::KeyDown { key_code } => self.handle_key(ctx, key_code),
                InputEvent::Custom {
                    kind: CUSTOM_START, ..
                } => self.start(ctx),
                InputEvent::Resized { width, height } => {
                    self.tile_size = Self::tile_for(width, height);
                }
                _ => {}
            }
        }
    }
}

impl Scene for SnakeGame {
    fn config(&self) -> SceneConfig {
        SceneConfig {
            surface_width: 600.0,
            surface_height: 600.0,
            ..SceneConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut SceneContext) {
        self.tile_size = Self::tile_for(ctx.width, ctx.height);
    }

    fn frame(&mut self, ctx: &mut SceneContext, input: &InputQueue, dt: f32) {
        self.handle_input(ctx, input);

        if self.board.phase != GamePhase::Running {
            return;
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            let (cols, rows) = self.grid_size(ctx);
            match self.board.step(cols, rows, &mut ctx.rng) {
                StepOutcome::Ate => {
                    ctx.emit_event(SceneEvent {
                        kind: EVENT_SCORE,
                        a: self.board.score as f32,
                        b: 0.0,
                        c: 0.0,
                    });
                }
                StepOutcome::Died => {
                    ctx.emit_event(SceneEvent {
                        kind: EVENT_GAME_OVER,
                        a: self.board.score as f32,
                        b: 0.0,
                        c: 0.0,
                    });
                    log::info!("snake: game over, score {}", self.board.score);
                    self.timestep.reset();
                    break;
                }
                _ => {}
            }
        }
    }

    fn paint(&self, ctx: &SceneContext, canvas: &mut DrawList) {
        canvas.fill_surface(COLOR_BG);

        let t = self.tile_size;

        let mut x = 0.0;
        while x <= ctx.width {
            canvas.stroke_line(
                Vec2::new(x, 0.0),
                Vec2::new(x, ctx.height),
                GRID_LINE_WIDTH,
                COLOR_GRID,
            );
            x += t;
        }
        let mut y = 0.0;
        while y <= ctx.height {
            canvas.stroke_line(
                Vec2::new(0.0, y),
                Vec2::new(ctx.width, y),
                GRID_LINE_WIDTH,
                COLOR_GRID,
            );
            y += t;
        }

        // Before the first game there is only the empty board
        if self.board.phase == GamePhase::Idle {
            return;
        }

        let food = self.board.food;
        canvas.fill_rect(
            Vec2::new(food.x as f32 * t, food.y as f32 * t),
            Vec2::splat(t),
            COLOR_FOOD,
        );

        for (index, cell) in self.board.snake.iter().enumerate() {
            let color = if index == 0 { COLOR_HEAD } else { COLOR_BODY };
            canvas.fill_rect(
                Vec2::new(cell.x as f32 * t, cell.y as f32 * t),
                Vec2::splat(t),
                color,
            );
        }

        // Eyes on the head, painted in the background color
        if let Some(head) = self.board.snake.first() {
            let origin = Vec2::new(head.x as f32 * t, head.y as f32 * t);
            let offset = (t / 5.0).max(2.0);
            let radius = (t / 10.0).max(2.0);
            canvas.fill_disc(origin + Vec2::new(offset, offset), radius, COLOR_BG);
            canvas.fill_disc(origin + Vec2::new(t - offset, offset), radius, COLOR_BG);
        }
    }
}
