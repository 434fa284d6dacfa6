// Difficulty presets and persisted user preferences
// Stored as TOML in the per-user config directory; statistics are never written here

use directories::ProjectDirs;
use log::{LevelFilter, warn};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const APP_NAME: &str = "xtmines";

/// Difficulty presets and custom settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,                    // 9x9, 10 mines
    Intermediate,                // 16x16, 40 mines
    Expert,                      // 30 wide x 16 high, 99 mines
    Custom(usize, usize, usize), // width, height, mines
}

impl Serialize for Difficulty {
    /// Serialize difficulty by name; custom sizes live in their own fields
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D>(deserializer: D) -> Result<Difficulty, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "Beginner" => Ok(Difficulty::Beginner),
            "Intermediate" => Ok(Difficulty::Intermediate),
            "Expert" => Ok(Difficulty::Expert),
            // rebuilt from custom_w/h/n after the whole file is read
            "Custom" => Ok(Difficulty::Custom(0, 0, 0)),
            other => Err(serde::de::Error::custom(format!("unknown difficulty {:?}", other))),
        }
    }
}

impl Difficulty {
    /// Board dimensions as (width, height, mines)
    pub fn params(&self) -> (usize, usize, usize) {
        match self {
            Difficulty::Beginner => (9, 9, 10),
            Difficulty::Intermediate => (16, 16, 40),
            Difficulty::Expert => (30, 16, 99),
            Difficulty::Custom(w, h, n) => (*w, *h, *n),
        }
    }

    /// Display and config-file name
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Expert => "Expert",
            Difficulty::Custom(..) => "Custom",
        }
    }

    /// Menu option (1-based) for this difficulty
    pub fn to_option(&self) -> usize {
        match self {
            Difficulty::Beginner => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Expert => 3,
            Difficulty::Custom(..) => 4,
        }
    }

    /// Preset for a 1-based menu option; 4 and above need custom sizes
    pub fn from_option(option: usize, custom_w: usize, custom_h: usize, custom_n: usize) -> Difficulty {
        match option {
            1 => Difficulty::Beginner,
            2 => Difficulty::Intermediate,
            3 => Difficulty::Expert,
            _ => Difficulty::Custom(custom_w, custom_h, custom_n),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config could not be serialized: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("no usable config directory")]
    NoPath,
}

/// User preferences, persisted as TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Last chosen difficulty
    pub difficulty: Difficulty,

    // Custom board parameters
    pub custom_w: usize,
    pub custom_h: usize,
    pub custom_n: usize,

    pub animations: bool, // false skips every pacing sleep
    pub log_level: String, // error, warn, info, debug, trace or off
}

impl Default for Config {
    fn default() -> Self {
        Config {
            difficulty: Difficulty::Beginner,
            custom_w: 20,
            custom_h: 12,
            custom_n: 30,
            animations: true,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Log level filter; unknown names fall back to info
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or(LevelFilter::Info)
    }

    /// Switch difficulty, remembering custom sizes for the next run
    pub fn set_difficulty(&mut self, d: Difficulty) {
        if let Difficulty::Custom(w, h, n) = d {
            self.custom_w = w;
            self.custom_h = h;
            self.custom_n = n;
        }
        self.difficulty = d;
    }
}

/// Parse a config file body, restoring custom sizes into the difficulty
pub fn parse_config(s: &str) -> Result<Config, ConfigError> {
    let mut cfg: Config = toml::from_str(s)?;
    if matches!(cfg.difficulty, Difficulty::Custom(..)) {
        cfg.difficulty = Difficulty::Custom(cfg.custom_w, cfg.custom_h, cfg.custom_n);
    }
    Ok(cfg)
}

/// Directory holding the config and log files.
/// Uses the platform config directory (e.g. ~/.config/xtmines on Linux),
/// falling back to the current directory.
pub fn config_dir() -> Option<PathBuf> {
    match ProjectDirs::from("com", "xhbl", APP_NAME) {
        Some(proj) => Some(proj.config_dir().to_path_buf()),
        None => env::current_dir().ok(),
    }
}

/// Path of the TOML config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(format!("{}.toml", APP_NAME)))
}

/// Path of the log file
pub fn log_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(format!("{}.log", APP_NAME)))
}

fn read_config() -> Result<Config, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoPath)?;
    let s = fs::read_to_string(path)?;
    parse_config(&s)
}

/// Load configuration from disk, or create and save the defaults.
/// Never fails: problems are logged and the defaults are used.
pub fn load_or_create_config() -> Config {
    let exists = config_path().is_some_and(|p| p.exists());
    if exists {
        match read_config() {
            Ok(cfg) => return cfg,
            Err(e) => warn!("{}; using default settings", e),
        }
    }
    let cfg = Config::default();
    if !exists {
        if let Err(e) = save_config(&cfg) {
            warn!("could not create config file: {}", e);
        }
    }
    cfg
}

/// Save configuration to disk as TOML
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path().ok_or(ConfigError::NoPath)?;
    let s = toml::to_string(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, s)?;
    Ok(())
}
