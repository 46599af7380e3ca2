//! Game configuration, loaded from TOML.
//!
//! Every section and field is optional; anything missing falls back to the
//! built-in default.
//!
//! ```toml
//! [play_area]
//! width = 800.0
//! height = 600.0
//!
//! [timing]
//! fps = 60
//!
//! [rules]
//! projectiles_destroy_enemies = true
//! triple_shot_effect = true
//!
//! [storage]
//! high_score_file = "/tmp/best"
//!
//! [logging]
//! enabled = true
//! level = "info"
//! file = "arcade_shooter.log"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::entities::Rules;
use crate::error::{GameError, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "ARCADE_SHOOTER_CONFIG";

/// Picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "arcade_shooter.toml";

pub const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub play_area: PlayAreaConfig,
    pub timing: TimingConfig,
    pub rules: RulesConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayAreaConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Ticks per second the host aims for.
    pub fps: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub projectiles_destroy_enemies: bool,
    pub triple_shot_effect: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Defaults to `$HOME/.arcade_shooter_score`.
    pub high_score_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub level: LogLevel,
    pub file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl Default for PlayAreaConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { fps: 60 }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        let rules = Rules::default();
        Self {
            projectiles_destroy_enemies: rules.projectiles_destroy_enemies,
            triple_shot_effect: rules.triple_shot_effect,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: LogLevel::Info,
            file: PathBuf::from("arcade_shooter.log"),
        }
    }
}

impl RulesConfig {
    pub fn to_rules(&self) -> Rules {
        Rules {
            projectiles_destroy_enemies: self.projectiles_destroy_enemies,
            triple_shot_effect: self.triple_shot_effect,
        }
    }
}

impl StorageConfig {
    /// Resolved best-score file location.
    pub fn high_score_path(&self) -> PathBuf {
        match &self.high_score_file {
            Some(path) => path.clone(),
            None => {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".arcade_shooter_score")
            }
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|source| GameError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).map_err(|source| GameError::ConfigParse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// used if present, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let PlayAreaConfig { width, height } = self.play_area;
        if !(width.is_finite() && width > 0.0) {
            return Err(GameError::InvalidConfig {
                field: "play_area.width",
                reason: format!("must be a positive number, got {width}"),
            });
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(GameError::InvalidConfig {
                field: "play_area.height",
                reason: format!("must be a positive number, got {height}"),
            });
        }
        if self.timing.fps == 0 || self.timing.fps > MAX_FPS {
            return Err(GameError::InvalidConfig {
                field: "timing.fps",
                reason: format!("must be between 1 and {MAX_FPS}, got {}", self.timing.fps),
            });
        }
        Ok(())
    }
}
