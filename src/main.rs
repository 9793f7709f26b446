use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use snake_arcade::app::App;
use snake_arcade::game::GameConfig;

const LOG_FILE: &str = "snake-arcade.log";

#[derive(Parser)]
#[command(name = "snake-arcade")]
#[command(version, about = "Grid-based snake arcade game with a session leaderboard")]
struct Cli {
    /// Board width in pixels
    #[arg(long, default_value_t = 600)]
    board_width: u32,

    /// Board height in pixels
    #[arg(long, default_value_t = 600)]
    board_height: u32,

    /// Tile size in pixels; the grid is board / tile
    #[arg(long, default_value_t = 25)]
    tile_size: u32,

    /// Starting tick delay in milliseconds
    #[arg(long, default_value_t = 100)]
    base_delay_ms: u64,

    /// Food items between speed-ups
    #[arg(long, default_value_t = 5)]
    difficulty_step: u32,
}

/// The TUI owns the terminal, so diagnostics go to a file; the subscriber
/// is only installed when RUST_LOG asks for it.
fn init_tracing() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        return Ok(());
    }
    let log_file = File::create(LOG_FILE).context("Failed to create log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let cli = Cli::parse();

    let config = GameConfig {
        board_width: cli.board_width,
        board_height: cli.board_height,
        tile_size: cli.tile_size,
        base_delay_ms: cli.base_delay_ms,
        difficulty_step: cli.difficulty_step,
        ..Default::default()
    };

    let mut app = App::new(config)?;
    app.run().await
}
