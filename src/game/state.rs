use super::action::Velocity;
use super::config::GameConfig;
use super::difficulty::Difficulty;

/// One cell of the movement grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The snake: a head driven by velocity and trailing body segments.
///
/// Body segments are ordered nearest-the-head first. The body only ever
/// grows when food is eaten, so `body.len()` doubles as the score.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub head: Cell,
    pub body: Vec<Cell>,
}

impl Snake {
    /// Create a new snake with an empty body at the given head position
    pub fn new(head: Cell) -> Self {
        Self { head, body: Vec::new() }
    }

    /// Advance the snake one tick: each body segment takes its predecessor's
    /// pre-tick position, the segment adjacent to the head takes the head's
    /// pre-tick position, and the head then moves by `velocity`.
    ///
    /// Segments are shifted in reverse insertion order (tail toward head) so
    /// every read sees a pre-tick value.
    pub fn advance(&mut self, velocity: Velocity) {
        for i in (0..self.body.len()).rev() {
            self.body[i] = if i == 0 { self.head } else { self.body[i - 1] };
        }
        self.head.x += velocity.dx;
        self.head.y += velocity.dy;
    }

    /// Append a segment at the given cell. Called when food is eaten, before
    /// the same tick's `advance`; the shift then runs over the extended body,
    /// which leaves the tail visually in place while the snake grows.
    pub fn grow(&mut self, at: Cell) {
        self.body.push(at);
    }

    /// True if the head occupies the same cell as any body segment
    pub fn collides_with_self(&self) -> bool {
        self.body.contains(&self.head)
    }

    /// Current score: one point per body segment
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Collision that ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the board
    Wall,
    /// Head ran into the body
    SelfCollision,
}

/// Phase of the game-state machine.
///
/// Ticks are only processed while `Running`; the UI layer drives the
/// `GameOver -> Running` transition explicitly via `GameEngine::restart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    GameOver,
}

/// Complete game state, owned by the caller and mutated by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub velocity: Velocity,
    pub phase: Phase,
    pub food_consumed: u32,
    pub difficulty: Difficulty,
    pub columns: i32,
    pub rows: i32,
}

impl GameState {
    pub fn new(snake: Snake, food: Cell, config: &GameConfig) -> Self {
        Self {
            snake,
            food,
            velocity: Velocity::ZERO,
            phase: Phase::Running,
            food_consumed: 0,
            difficulty: Difficulty::from_config(config),
            columns: config.columns(),
            rows: config.rows(),
        }
    }

    /// Check if a cell is within the board
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.columns && cell.y >= 0 && cell.y < self.rows
    }

    /// Current score: the number of body segments, which equals the number
    /// of food items consumed this game
    pub fn score(&self) -> u32 {
        self.snake.len() as u32
    }
}
