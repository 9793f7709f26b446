use std::time::{Duration, Instant};

use tracing::info;

use crate::leaderboard::Leaderboard;

/// Username used when the prompt is left empty or cancelled
pub const DEFAULT_USERNAME: &str = "Guest";

/// Per-process session bookkeeping: the current player's name, the
/// leaderboard, and timing/counters for the header display.
///
/// The session never talks to the terminal itself; the app layer captures
/// usernames and play-again decisions and drives this through explicit
/// calls.
pub struct Session {
    username: String,
    leaderboard: Leaderboard,
    games_played: u32,
    run_started: Instant,
    accumulated: Duration,
    elapsed: Duration,
}

impl Session {
    pub fn new() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            leaderboard: Leaderboard::new(),
            games_played: 0,
            run_started: Instant::now(),
            accumulated: Duration::ZERO,
            elapsed: Duration::ZERO,
        }
    }

    /// Set the player name for the upcoming game, applying the `"Guest"`
    /// default for empty or whitespace-only input.
    pub fn set_username(&mut self, input: &str) {
        let trimmed = input.trim();
        self.username = if trimmed.is_empty() {
            DEFAULT_USERNAME.to_string()
        } else {
            trimmed.to_string()
        };
        info!(username = %self.username, "player named");
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Start the clock for a new game
    pub fn on_game_start(&mut self) {
        self.run_started = Instant::now();
        self.accumulated = Duration::ZERO;
        self.elapsed = Duration::ZERO;
    }

    /// Bank the current running span so paused wall time is not counted
    pub fn on_pause(&mut self) {
        self.accumulated += self.run_started.elapsed();
    }

    /// Resume the clock after a pause
    pub fn on_resume(&mut self) {
        self.run_started = Instant::now();
    }

    /// Refresh the elapsed-time reading (called from the render timer)
    pub fn update_clock(&mut self) {
        self.elapsed = self.accumulated + self.run_started.elapsed();
    }

    /// Record a finished game on the leaderboard
    pub fn on_game_over(&mut self, score: u32) {
        self.games_played += 1;
        self.leaderboard.record(&self.username, score);
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn best_score(&self) -> u32 {
        self.leaderboard.best_score().unwrap_or(0)
    }

    /// Elapsed time of the current game as `MM:SS`
    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
