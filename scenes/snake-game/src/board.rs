use ember_engine::Rng;

/// Travel direction of the snake head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Grid-cell delta for one step.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// One grid cell, in tile coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }
}

/// Game state machine phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    Running,
    GameOver,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Idle,
    Moved,
    Ate,
    Died,
}

pub const SCORE_PER_FOOD: u32 = 10;

const START_SNAKE: [Cell; 3] = [
    Cell { x: 5, y: 5 },
    Cell { x: 4, y: 5 },
    Cell { x: 3, y: 5 },
];

/// Pure snake rules on an integer grid. Head is element 0.
/// Timing and rendering live in the scene layer; the board only
/// knows cells.
pub struct Board {
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub direction: Direction,
    pub pending: Direction,
    pub score: u32,
    pub phase: GamePhase,
}

impl Board {
    pub fn new() -> Self {
        Board {
            snake: Vec::new(),
            food: Cell::new(0, 0),
            direction: Direction::Right,
            pending: Direction::Right,
            score: 0,
            phase: GamePhase::Idle,
        }
    }

    /// Reset to the starting position and enter Running.
    pub fn start(&mut self, cols: i32, rows: i32, rng: &mut Rng) {
        self.snake = START_SNAKE.to_vec();
        self.direction = Direction::Right;
        self.pending = Direction::Right;
        self.score = 0;
        self.phase = GamePhase::Running;
        self.spawn_food(cols, rows, rng);
    }

    /// Queue a direction change for the next tick. Ignored while not
    /// running, or when it would reverse the committed direction.
    pub fn set_pending(&mut self, direction: Direction) {
        if self.phase != GamePhase::Running {
            return;
        }
        if direction == self.direction.opposite() {
            return;
        }
        self.pending = direction;
    }

    /// Advance one tick on a cols x rows grid.
    pub fn step(&mut self, cols: i32, rows: i32, rng: &mut Rng) -> StepOutcome {
        if self.phase != GamePhase::Running {
            return StepOutcome::Idle;
        }

        self.direction = self.pending;
        let (dx, dy) = self.direction.offset();
        let head = self.snake[0];
        let next = Cell::new(head.x + dx, head.y + dy);

        if next.x < 0 || next.x >= cols || next.y < 0 || next.y >= rows {
            self.phase = GamePhase::GameOver;
            return StepOutcome::Died;
        }

        // Checked against the whole body before the tail moves, so the
        // current tail cell is lethal too
        if self.snake.contains(&next) {
            self.phase = GamePhase::GameOver;
            return StepOutcome::Died;
        }

        self.snake.insert(0, next);

        if next == self.food {
            self.score += SCORE_PER_FOOD;
            self.spawn_food(cols, rows, rng);
            StepOutcome::Ate
        } else {
            self.snake.pop();
            StepOutcome::Moved
        }
    }

    /// Drop food on a random cell the snake does not cover.
    fn spawn_food(&mut self, cols: i32, rows: i32, rng: &mut Rng) {
        // No free cell left; keep the food where it is
        if self.snake.len() >= (cols * rows) as usize {
            return;
        }

        loop {
            let food = Cell::new(
                rng.next_int(cols as u32) as i32,
                rng.next_int(rows as u32) as i32,
            );
            if !self.snake.contains(&food) {
                self.food = food;
                return;
            }
        }
    }
}
