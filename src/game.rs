use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::apple::{self, Apple, Placement};
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::events::{FrameSnapshot, GameEvent};
use crate::grid::Grid;
use crate::input::{Direction, GameInput};
use crate::snake::Snake;

/// Current high-level session state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionStatus {
    Running,
    Paused,
    /// Terminal until the session is reset.
    Over,
}

/// Complete mutable state for one game session.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: Snake,
    pub apple: Apple,
    pub score: u32,
    /// Refresh callbacks per logical tick; lowered by each normal apple.
    pub frame_limit: u32,
    pub tick_count: u64,
    pub status: SessionStatus,
    pub(crate) grid: Grid,
    pub(crate) config: GameConfig,
    pub(crate) rng: StdRng,
}

impl GameSession {
    /// Creates a session with an entropy-seeded apple generator.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::from_config(&config)?;
        let snake = Snake::new(grid.start_cell(), grid.cell_size());
        let apple = apple::randomize(&mut rng, grid, &snake, placement_for(&config), false);

        log::info!(
            "session started on a {}x{} grid, frame limit {}",
            grid.width(),
            grid.height(),
            config.start_frame_limit
        );

        Ok(Self {
            snake,
            apple,
            score: 0,
            frame_limit: config.start_frame_limit,
            tick_count: 0,
            status: SessionStatus::Running,
            grid,
            config,
            rng,
        })
    }

    /// Returns the session to its starting values with a fresh apple.
    /// Valid from every state.
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.grid.start_cell(), self.grid.cell_size());
        self.score = 0;
        self.frame_limit = self.config.start_frame_limit;
        self.tick_count = 0;
        self.status = SessionStatus::Running;

        let placement = self.placement();
        self.apple = apple::randomize(&mut self.rng, self.grid, &self.snake, placement, false);

        log::info!("session reset");
    }

    /// Advances simulation by one logical tick and reports what happened.
    ///
    /// Order: drain the pending heading, advance the head, check the
    /// boundary, record the trail, then resolve apples and self collision.
    /// A session that is not running only reports its frame.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if self.status == SessionStatus::Running {
            self.tick_count += 1;
            self.snake.apply_pending_heading();
            self.snake.advance();
            log::trace!("tick {}: head at {:?}", self.tick_count, self.snake.head());

            if !self.check_boundary(&mut events) {
                self.snake.record_trail();
                self.resolve_body_pass(&mut events);
            }
        }

        events.push(GameEvent::Frame(self.snapshot()));
        events
    }

    /// Requests a heading change for the next tick. Ignored unless running.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        self.status == SessionStatus::Running && self.snake.set_heading(direction)
    }

    /// Toggles between running and paused. A finished session stays over.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            SessionStatus::Running => SessionStatus::Paused,
            SessionStatus::Paused => SessionStatus::Running,
            SessionStatus::Over => SessionStatus::Over,
        };
    }

    /// Applies one in-game input event. Confirm and quit belong to the loop.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                let _ = self.request_direction(direction);
            }
            GameInput::Pause => self.toggle_pause(),
            GameInput::Quit | GameInput::Confirm => {}
        }
    }

    /// True whenever ticks no longer mutate the session.
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.status != SessionStatus::Running
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        placement_for(&self.config)
    }

    /// Captures the state the presentation side draws.
    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            body: self.snake.segments().copied().collect(),
            apple: self.apple,
            score: self.score,
            target_length: self.snake.target_length(),
            frame_limit: self.frame_limit,
            status: self.status,
        }
    }
}

fn placement_for(config: &GameConfig) -> Placement {
    if config.apple_avoids_snake {
        Placement::AvoidSnake
    } else {
        Placement::Uniform
    }
}
