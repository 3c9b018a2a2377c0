use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::Grid;

const APP_DIR_NAME: &str = "frame-snake";
const CONFIG_FILE_NAME: &str = "config.json";

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Default cell edge length in pixel units.
pub const DEFAULT_CELL_SIZE: u16 = 16;

/// Refresh callbacks per logical tick at the start of a session.
pub const DEFAULT_FRAME_LIMIT: u32 = 18;

/// Lowest frame limit the difficulty ramp may reach.
pub const DEFAULT_MIN_FRAME_LIMIT: u32 = 4;

/// Chance that an apple consumption resolves as a bonus.
pub const DEFAULT_BONUS_CHANCE: f64 = 0.1;

/// Score granted by a bonus consumption.
pub const DEFAULT_BONUS_POINTS: u32 = 10;

/// Display refresh callbacks per second.
pub const DEFAULT_REFRESH_RATE_HZ: u32 = 60;

/// Tunable parameters for one game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub cell_size: u16,
    pub start_frame_limit: u32,
    pub min_frame_limit: u32,
    pub bonus_chance: f64,
    pub bonus_points: u32,
    /// Draw apples only on cells the snake does not occupy.
    pub apple_avoids_snake: bool,
    pub refresh_rate_hz: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            start_frame_limit: DEFAULT_FRAME_LIMIT,
            min_frame_limit: DEFAULT_MIN_FRAME_LIMIT,
            bonus_chance: DEFAULT_BONUS_CHANCE,
            bonus_points: DEFAULT_BONUS_POINTS,
            apple_avoids_snake: true,
            refresh_rate_hz: DEFAULT_REFRESH_RATE_HZ,
        }
    }
}

impl GameConfig {
    /// Rejects configurations the simulation has no defined behavior for.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Grid::from_config(self)?;
        if self.start_frame_limit == 0 || self.min_frame_limit == 0 {
            return Err(ConfigError::ZeroFrameLimit);
        }
        if self.min_frame_limit > self.start_frame_limit {
            return Err(ConfigError::FrameLimitFloor {
                min: self.min_frame_limit,
                start: self.start_frame_limit,
            });
        }
        if !(0.0..=1.0).contains(&self.bonus_chance) {
            return Err(ConfigError::BonusChance(self.bonus_chance));
        }
        if self.refresh_rate_hz == 0 {
            return Err(ConfigError::ZeroRefreshRate);
        }
        Ok(())
    }

    /// Wall-clock time between two refresh callbacks.
    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(1) / self.refresh_rate_hz.max(1)
    }
}

/// Returns the platform-correct default config file path.
#[must_use]
pub fn default_config_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    base
}

/// Loads the config file at `path`.
pub fn load_config_from_path(path: &Path) -> Result<GameConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the default config file, falling back to defaults when it does not
/// exist yet.
pub fn load_default_config() -> Result<GameConfig, ConfigError> {
    let path = default_config_path();
    match load_config_from_path(&path) {
        Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            Ok(GameConfig::default())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::{load_config_from_path, GameConfig};
    use crate::error::ConfigError;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.start_frame_limit, 18);
        assert_eq!(config.bonus_points, 10);
    }

    #[test]
    fn zero_dimensions_fail_fast() {
        let config = GameConfig {
            grid_height: 0,
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroDimension {
                width: 20,
                height: 0
            })
        ));
    }

    #[test]
    fn zero_cell_size_fails_fast() {
        let config = GameConfig {
            cell_size: 0,
            ..GameConfig::default()
        };

        assert!(matches!(config.validate(), Err(ConfigError::ZeroCellSize)));
    }

    #[test]
    fn grid_whose_pixel_extent_overflows_is_rejected() {
        let config = GameConfig {
            grid_width: 40_000,
            grid_height: 1,
            cell_size: 60_000,
            apple_avoids_snake: false,
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooLarge {
                width: 40_000,
                height: 1,
                cell_size: 60_000
            })
        ));
    }

    #[test]
    fn floor_above_start_limit_is_rejected() {
        let config = GameConfig {
            start_frame_limit: 5,
            min_frame_limit: 6,
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::FrameLimitFloor { min: 6, start: 5 })
        ));
    }

    #[test]
    fn bonus_chance_must_be_a_probability() {
        let config = GameConfig {
            bonus_chance: 1.5,
            ..GameConfig::default()
        };

        assert!(matches!(config.validate(), Err(ConfigError::BonusChance(_))));
    }

    #[test]
    fn refresh_interval_follows_rate() {
        let config = GameConfig {
            refresh_rate_hz: 50,
            ..GameConfig::default()
        };

        assert_eq!(config.refresh_interval(), Duration::from_millis(20));
    }

    #[test]
    fn partial_config_file_keeps_defaults() {
        let path = unique_test_path("partial");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, r#"{ "grid_width": 12, "apple_avoids_snake": false }"#)
            .expect("test file write should succeed");

        let config = load_config_from_path(&path).expect("partial config should load");

        assert_eq!(config.grid_width, 12);
        assert!(!config.apple_avoids_snake);
        assert_eq!(config.grid_height, 20);
        cleanup_test_path(&path);
    }

    #[test]
    fn malformed_config_file_returns_error() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        assert!(matches!(
            load_config_from_path(&path),
            Err(ConfigError::Json { .. })
        ));
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_config_file_returns_io_error() {
        let path = unique_test_path("missing");

        assert!(matches!(
            load_config_from_path(&path),
            Err(ConfigError::Io { .. })
        ));
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("frame-snake-config-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
