use std::io::{stderr, Stderr};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::info;

use crate::game::{GameConfig, GameEngine, GameState, Phase};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;
use crate::session::Session;

const RENDER_INTERVAL: Duration = Duration::from_millis(33);
const MAX_USERNAME_LEN: usize = 20;

/// Which screen the terminal is showing. The username prompt and the
/// game-over prompt replace the modal dialogs of a desktop build; both are
/// explicit states the input loop transitions through, so no tick is ever
/// processed while a prompt is up.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Screen {
    EnterUsername { buffer: String },
    Playing,
    GameOver,
}

pub struct App {
    engine: GameEngine,
    state: GameState,
    session: Session,
    renderer: Renderer,
    input_handler: InputHandler,
    screen: Screen,
    should_quit: bool,
    rearm_tick_timer: bool,
}

impl App {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let mut engine = GameEngine::new(config);
        let state = engine.fresh_state();

        Ok(Self {
            engine,
            state,
            session: Session::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            screen: Screen::EnterUsername {
                buffer: String::new(),
            },
            should_quit: false,
            rearm_tick_timer: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_event_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = self.new_tick_timer();
        let mut render_timer = interval_at(Instant::now(), RENDER_INTERVAL);

        loop {
            tokio::select! {
                // Terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game tick; suppressed while a prompt is up or the game is
                // paused or over, which is what stops the tick driver.
                _ = tick_timer.tick(), if self.is_ticking() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    if self.state.phase == Phase::Running && self.screen == Screen::Playing {
                        self.session.update_clock();
                    }
                    terminal.draw(|frame| {
                        match &self.screen {
                            Screen::EnterUsername { buffer } => {
                                self.renderer.render_username_prompt(frame, buffer);
                            }
                            Screen::Playing | Screen::GameOver => {
                                self.renderer.render_game(frame, &self.state, &self.session);
                            }
                        }
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.rearm_tick_timer {
                self.rearm_tick_timer = false;
                tick_timer = self.new_tick_timer();
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn new_tick_timer(&self) -> tokio::time::Interval {
        let delay = self.state.difficulty.delay();
        let mut timer = interval_at(Instant::now() + delay, delay);
        // Ticks suppressed by the guard must not burst when it reopens.
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        timer
    }

    fn is_ticking(&self) -> bool {
        self.screen == Screen::Playing && self.state.phase == Phase::Running
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }
            self.handle_key(key);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match &mut self.screen {
            Screen::EnterUsername { buffer } => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    self.should_quit = true;
                    return;
                }
                match key.code {
                    KeyCode::Enter => {}
                    // Cancelling the prompt falls through to the Guest default.
                    KeyCode::Esc => buffer.clear(),
                    KeyCode::Backspace => {
                        buffer.pop();
                        return;
                    }
                    KeyCode::Char(c) => {
                        if buffer.len() < MAX_USERNAME_LEN {
                            buffer.push(c);
                        }
                        return;
                    }
                    _ => return,
                }
                self.start_game();
            }
            Screen::Playing => match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => self.engine.steer(&mut self.state, direction),
                KeyAction::TogglePause => self.toggle_pause(),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::Confirm | KeyAction::Decline | KeyAction::None => {}
            },
            Screen::GameOver => match self.input_handler.handle_key_event(key) {
                KeyAction::Confirm => self.restart_game(),
                KeyAction::Decline | KeyAction::Quit => self.should_quit = true,
                _ => {}
            },
        }
    }

    /// Confirm the username prompt and begin ticking
    fn start_game(&mut self) {
        if let Screen::EnterUsername { buffer } = &self.screen {
            self.session.set_username(buffer);
        }
        self.session.on_game_start();
        self.screen = Screen::Playing;
        self.rearm_tick_timer = true;
        info!(username = self.session.username(), "game started");
    }

    /// Toggle pause, keeping the tick driver and the session clock in step
    /// with the phase: pausing banks the running time, resuming re-arms the
    /// tick timer so suppressed ticks never replay in a burst.
    fn toggle_pause(&mut self) {
        self.engine.toggle_pause(&mut self.state);
        match self.state.phase {
            Phase::Paused => self.session.on_pause(),
            Phase::Running => {
                self.session.on_resume();
                self.rearm_tick_timer = true;
            }
            Phase::GameOver => {}
        }
    }

    fn update_game(&mut self) {
        let outcome = self.engine.step(&mut self.state);

        if outcome.delay_changed {
            self.rearm_tick_timer = true;
        }

        if outcome.collision.is_some() {
            self.session.on_game_over(self.state.score());
            self.screen = Screen::GameOver;
        }
    }

    /// Player confirmed a rematch: reset the game, then ask for a fresh
    /// username before ticking resumes
    fn restart_game(&mut self) {
        self.engine.restart(&mut self.state);
        self.screen = Screen::EnterUsername {
            buffer: String::new(),
        };
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Velocity};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(GameConfig::small()).unwrap()
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(App::new(GameConfig::new(600, 600, 0)).is_err());
    }

    #[test]
    fn test_starts_on_username_prompt() {
        let app = app();
        assert!(matches!(app.screen, Screen::EnterUsername { .. }));
        assert!(!app.is_ticking());
    }

    #[test]
    fn test_username_entry_flow() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Char('d')));
        app.handle_key(key(KeyCode::Char('x')));
        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.session.username(), "ada");
        assert_eq!(app.screen, Screen::Playing);
        assert!(app.is_ticking());
    }

    #[test]
    fn test_empty_username_defaults_to_guest() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.session.username(), "Guest");
    }

    #[test]
    fn test_cancelled_prompt_defaults_to_guest() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.session.username(), "Guest");
        assert_eq!(app.screen, Screen::Playing);
    }

    #[test]
    fn test_collision_records_score_and_shows_game_over() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));

        // Drive the snake straight into the right wall.
        app.state.snake.head = Cell::new(app.state.columns - 1, 2);
        app.state.food = Cell::new(0, 0);
        app.state.velocity = Velocity::new(1, 0);
        app.update_game();

        assert_eq!(app.screen, Screen::GameOver);
        assert_eq!(app.state.phase, Phase::GameOver);
        assert_eq!(app.session.leaderboard().len(), 1);
        assert!(!app.is_ticking());
    }

    #[test]
    fn test_confirm_restarts_and_reprompts() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.state.phase = Phase::GameOver;
        app.screen = Screen::GameOver;

        app.handle_key(key(KeyCode::Char('y')));

        assert!(matches!(app.screen, Screen::EnterUsername { .. }));
        assert_eq!(app.state.phase, Phase::Running);
        assert_eq!(app.state.score(), 0);
        assert_eq!(app.state.velocity, Velocity::ZERO);
        // Prompt is up, so the tick driver stays stopped despite Running.
        assert!(!app.is_ticking());
    }

    #[test]
    fn test_decline_quits() {
        let mut app = app();
        app.screen = Screen::GameOver;
        app.handle_key(key(KeyCode::Char('n')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_pause_stops_ticking() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        assert!(app.is_ticking());

        app.handle_key(key(KeyCode::Char('p')));
        assert_eq!(app.state.phase, Phase::Paused);
        assert!(!app.is_ticking());

        app.handle_key(key(KeyCode::Char('p')));
        assert!(app.is_ticking());
    }

    #[test]
    fn test_resume_rearms_tick_timer() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.rearm_tick_timer = false;

        app.handle_key(key(KeyCode::Char('p')));
        assert!(!app.rearm_tick_timer);

        app.handle_key(key(KeyCode::Char('p')));
        assert!(app.rearm_tick_timer);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resume_does_not_replay_suppressed_ticks() {
        use futures::FutureExt;

        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.rearm_tick_timer = false;
        let mut tick_timer = app.new_tick_timer();
        tick_timer.tick().await;

        // Pause across many tick periods, then resume.
        app.handle_key(key(KeyCode::Char('p')));
        tokio::time::advance(Duration::from_secs(2)).await;
        app.handle_key(key(KeyCode::Char('p')));

        assert!(app.rearm_tick_timer);
        tick_timer = app.new_tick_timer();

        // The re-armed timer owes no backlog: the next tick is a full
        // delay away, so nothing completes immediately.
        let mut immediate = 0;
        while tick_timer.tick().now_or_never().is_some() {
            immediate += 1;
        }
        assert_eq!(immediate, 0);
    }
}
