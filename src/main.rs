use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use frame_snake::config::{load_config_from_path, load_default_config, GameConfig};
use frame_snake::error::ConfigError;
use frame_snake::game::GameSession;
use frame_snake::game_loop::{GameLoop, LoopControl, RefreshClock};
use frame_snake::presenter::TerminalPresenter;
use frame_snake::renderer;
use frame_snake::terminal_runtime::{install_panic_hook, poll_input, TerminalSession};
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Debug, Parser)]
#[command(version, about = "Classic Snake in the terminal")]
struct Cli {
    /// JSON config file; defaults to the user config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Seed for reproducible apple placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Display refresh callbacks per second.
    #[arg(long = "fps")]
    refresh_rate_hz: Option<u32>,

    /// Write debug logs to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }

    let config = resolve_config(&cli).map_err(invalid_input)?;
    let session = match cli.seed {
        Some(seed) => GameSession::new_with_seed(config, seed),
        None => GameSession::new(config),
    }
    .map_err(invalid_input)?;

    install_panic_hook();
    run(session)
}

fn run(session: GameSession) -> io::Result<()> {
    let grid = session.grid();
    let interval = session.config().refresh_interval();

    let mut terminal_session = TerminalSession::enter()?;
    let mut driver = GameLoop::new(session, TerminalPresenter::new());
    let mut clock = RefreshClock::new(interval, Instant::now());

    loop {
        let remaining = clock.remaining(Instant::now());
        if !remaining.is_zero() {
            if let Some(input) = poll_input(remaining)? {
                if driver.handle_input(input) == LoopControl::Quit {
                    log::info!("quit requested");
                    return Ok(());
                }
            }
            continue;
        }

        clock.advance(Instant::now());
        driver.on_refresh();
        terminal_session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, grid, driver.observer()))?;
    }
}

fn resolve_config(cli: &Cli) -> Result<GameConfig, ConfigError> {
    let mut config = match cli.config.as_deref() {
        Some(path) => load_config_from_path(path)?,
        None => load_default_config()?,
    };

    if let Some(width) = cli.width {
        config.grid_width = width;
    }
    if let Some(height) = cli.height {
        config.grid_height = height;
    }
    if let Some(rate) = cli.refresh_rate_hz {
        config.refresh_rate_hz = rate;
    }

    config.validate()?;
    Ok(config)
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file)
        .map_err(|error| io::Error::new(io::ErrorKind::Other, error))
}

fn invalid_input(error: ConfigError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, error)
}
