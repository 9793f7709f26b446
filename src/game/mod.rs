//! Core game logic: grid model, snake, difficulty curve, and the per-tick
//! state machine. No I/O or rendering dependencies; everything here can be
//! driven programmatically from tests.

pub mod action;
pub mod config;
pub mod difficulty;
pub mod engine;
pub mod state;

pub use action::{Direction, Velocity};
pub use config::GameConfig;
pub use difficulty::Difficulty;
pub use engine::{GameEngine, StepOutcome};
pub use state::{Cell, CollisionType, GameState, Phase, Snake};
