use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the game board and difficulty curve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in pixels
    pub board_width: u32,
    /// Board height in pixels
    pub board_height: u32,
    /// Side length of one grid tile in pixels
    pub tile_size: u32,

    // Difficulty curve
    /// Tick delay at the start of a game, in milliseconds
    pub base_delay_ms: u64,
    /// Number of food items between speed increases
    pub difficulty_step: u32,
    /// Delay reduction applied per difficulty step, in milliseconds
    pub decrement_ms: u64,
    /// Lower bound on the tick delay, in milliseconds
    pub min_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 600,
            board_height: 600,
            tile_size: 25,
            base_delay_ms: 100,
            difficulty_step: 5,
            decrement_ms: 10,
            min_delay_ms: 50,
        }
    }
}

impl GameConfig {
    /// Create a configuration with custom board dimensions
    pub fn new(board_width: u32, board_height: u32, tile_size: u32) -> Self {
        Self {
            board_width,
            board_height,
            tile_size,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(250, 250, 25)
    }

    /// Number of grid columns
    pub fn columns(&self) -> i32 {
        (self.board_width / self.tile_size) as i32
    }

    /// Number of grid rows
    pub fn rows(&self) -> i32 {
        (self.board_height / self.tile_size) as i32
    }

    /// Reject configurations with no meaningful runtime recovery path.
    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            bail!("tile size must be positive");
        }
        if self.board_width == 0 || self.board_height == 0 {
            bail!("board dimensions must be positive");
        }
        if self.board_width < self.tile_size || self.board_height < self.tile_size {
            bail!(
                "board ({}x{}) is smaller than a single {}px tile",
                self.board_width,
                self.board_height,
                self.tile_size
            );
        }
        if self.difficulty_step == 0 {
            bail!("difficulty step must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.columns(), 24);
        assert_eq!(config.rows(), 24);
        assert_eq!(config.base_delay_ms, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(200, 400, 25);
        assert_eq!(config.columns(), 8);
        assert_eq!(config.rows(), 16);
    }

    #[test]
    fn test_zero_tile_size_rejected() {
        let config = GameConfig::new(600, 600, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_board_rejected() {
        assert!(GameConfig::new(0, 600, 25).validate().is_err());
        assert!(GameConfig::new(600, 0, 25).validate().is_err());
    }

    #[test]
    fn test_board_smaller_than_tile_rejected() {
        assert!(GameConfig::new(10, 600, 25).validate().is_err());
    }
}
