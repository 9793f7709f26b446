use rand::Rng;
use tracing::{debug, info};

use super::{
    action::{Direction, Velocity},
    config::GameConfig,
    state::{Cell, CollisionType, GameState, Phase, Snake},
};

/// Outcome of one game tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Collision that ended the game, if any
    pub collision: Option<CollisionType>,
    /// Whether the difficulty delay changed; the tick timer must be re-armed
    pub delay_changed: bool,
}

impl StepOutcome {
    fn skipped() -> Self {
        Self {
            ate_food: false,
            collision: None,
            delay_changed: false,
        }
    }
}

/// The game engine: owns the configuration and RNG, mutates caller-owned
/// [`GameState`] one tick at a time.
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Build the initial state: snake at rest in the board center, food in a
    /// random cell, base difficulty.
    pub fn fresh_state(&mut self) -> GameState {
        let head = Cell::new(self.config.columns() / 2, self.config.rows() / 2);
        let food = self.place_food();
        GameState::new(Snake::new(head), food, &self.config)
    }

    /// Execute one tick. Only valid in `Running`; in any other phase the
    /// state is left untouched.
    pub fn step(&mut self, state: &mut GameState) -> StepOutcome {
        if state.phase != Phase::Running {
            return StepOutcome::skipped();
        }

        let mut ate_food = false;
        let mut delay_changed = false;

        // Eat first: the new segment joins the body before this tick's shift.
        if state.snake.head == state.food {
            state.snake.grow(state.food);
            state.food_consumed += 1;
            state.food = self.place_food();
            delay_changed = state.difficulty.on_food_consumed(state.food_consumed);
            ate_food = true;
            debug!(
                food_consumed = state.food_consumed,
                delay_ms = state.difficulty.delay_ms(),
                "food eaten"
            );
        }

        state.snake.advance(state.velocity);

        let collision = if !state.is_in_bounds(state.snake.head) {
            Some(CollisionType::Wall)
        } else if state.snake.collides_with_self() {
            Some(CollisionType::SelfCollision)
        } else {
            None
        };

        if let Some(kind) = collision {
            state.phase = Phase::GameOver;
            info!(score = state.score(), ?kind, "game over");
        }

        StepOutcome {
            ate_food,
            collision,
            delay_changed,
        }
    }

    /// Apply a steering intent. Ignored outside `Running`, and ignored when
    /// it would reverse the snake into its own heading.
    pub fn steer(&self, state: &mut GameState, direction: Direction) {
        if state.phase != Phase::Running {
            return;
        }
        let requested = direction.velocity();
        if !state.velocity.opposes(requested) {
            state.velocity = requested;
        }
    }

    /// Toggle between `Running` and `Paused`. No effect in `GameOver`.
    pub fn toggle_pause(&self, state: &mut GameState) {
        state.phase = match state.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::GameOver => Phase::GameOver,
        };
    }

    /// Reset the state in place for a new game: snake back to center with an
    /// empty body, food relocated, velocity zeroed, counters and difficulty
    /// reset, phase back to `Running`.
    pub fn restart(&mut self, state: &mut GameState) {
        state.snake = Snake::new(Cell::new(self.config.columns() / 2, self.config.rows() / 2));
        state.food = self.place_food();
        state.velocity = Velocity::ZERO;
        state.food_consumed = 0;
        state.difficulty.reset();
        state.phase = Phase::Running;
        info!("game restarted");
    }

    /// Pick a random cell for food. There is deliberately no occupancy
    /// check: food may land under the snake's body.
    fn place_food(&mut self) -> Cell {
        let x = self.rng.gen_range(0..self.config.columns());
        let y = self.rng.gen_range(0..self.config.rows());
        Cell::new(x, y)
    }
}
