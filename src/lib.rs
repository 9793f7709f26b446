//! Snake Arcade - a grid-based snake game for the terminal
//!
//! This library provides:
//! - Core game logic: movement, growth, collisions, difficulty (game module)
//! - Session bookkeeping and the run leaderboard (session, leaderboard)
//! - TUI rendering and key handling (render, input)
//! - The terminal application loop (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod leaderboard;
pub mod render;
pub mod session;
