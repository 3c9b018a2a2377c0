use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a game configuration cannot be used to start a session.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u16, height: u16 },

    #[error("grid {width}x{height} with cell size {cell_size} is too large")]
    GridTooLarge {
        width: u16,
        height: u16,
        cell_size: u16,
    },

    #[error("cell size must be positive")]
    ZeroCellSize,

    #[error("frame limit must be at least 1")]
    ZeroFrameLimit,

    #[error("minimum frame limit {min} exceeds starting frame limit {start}")]
    FrameLimitFloor { min: u32, start: u32 },

    #[error("bonus chance {0} is outside 0.0..=1.0")]
    BonusChance(f64),

    #[error("refresh rate must be positive")]
    ZeroRefreshRate,
}
