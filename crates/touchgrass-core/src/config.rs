//! Configuration loading and typed config structures for the game.
//!
//! An optional `touchgrass.yaml` tunes the rules of a session. Every field
//! has a default matching the stock game, so an empty file (or no file at
//! all) yields the standard 16x16 escape with 100 energy and a phone at 12%.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level game configuration.
///
/// Mirrors the structure of `touchgrass.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GameConfig {
    /// Grid dimensions.
    #[serde(default)]
    pub grid: GridConfig,

    /// Starting values and goals for the player.
    #[serde(default)]
    pub player: PlayerConfig,

    /// Per-move costs.
    #[serde(default)]
    pub movement: MovementConfig,

    /// Night window and time-based energy drain.
    #[serde(default)]
    pub clock: ClockConfig,

    /// Command interpreter behavior.
    #[serde(default)]
    pub interpreter: InterpreterConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Grid dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GridConfig {
    /// Number of columns.
    #[serde(default = "default_grid_size")]
    pub width: u32,

    /// Number of rows.
    #[serde(default = "default_grid_size")]
    pub height: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: default_grid_size(),
            height: default_grid_size(),
        }
    }
}

/// Starting values and goals for the player.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerConfig {
    /// Energy ceiling; the player also starts with this much.
    #[serde(default = "default_max_energy")]
    pub max_energy: f64,

    /// Phone battery percentage at session start.
    #[serde(default = "default_starting_phone_charge")]
    pub starting_phone_charge: u32,

    /// Hour of day at session start.
    #[serde(default = "default_starting_time")]
    pub starting_time: f64,

    /// The single item in the starting inventory.
    #[serde(default = "default_starting_item")]
    pub starting_item: String,

    /// Item that wins the game when carried onto the road.
    #[serde(default = "default_win_item")]
    pub win_item: String,

    /// Phone charge below which the phone needs charging.
    #[serde(default = "default_low_charge_threshold")]
    pub low_charge_threshold: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_energy: default_max_energy(),
            starting_phone_charge: default_starting_phone_charge(),
            starting_time: default_starting_time(),
            starting_item: default_starting_item(),
            win_item: default_win_item(),
            low_charge_threshold: default_low_charge_threshold(),
        }
    }
}

/// Costs applied by every successful move.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovementConfig {
    /// Flat energy cost per move.
    #[serde(default = "default_move_energy_cost")]
    pub energy_cost: f64,

    /// Hours that pass per move.
    #[serde(default = "default_hours_per_move")]
    pub hours_per_move: f64,

    /// Probability that a move drains the phone.
    #[serde(default = "default_phone_drain_chance")]
    pub phone_drain_chance: f64,

    /// Phone charge lost when the drain triggers.
    #[serde(default = "default_phone_drain")]
    pub phone_drain: u32,

    /// Below this much energy the interpreter refuses to move.
    #[serde(default = "default_min_energy_to_move")]
    pub min_energy_to_move: f64,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            energy_cost: default_move_energy_cost(),
            hours_per_move: default_hours_per_move(),
            phone_drain_chance: default_phone_drain_chance(),
            phone_drain: default_phone_drain(),
            min_energy_to_move: default_min_energy_to_move(),
        }
    }
}

/// Night window and time-based energy drain.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClockConfig {
    /// Hour at which night begins (inclusive).
    #[serde(default = "default_night_start")]
    pub night_start: f64,

    /// Hour at which night ends (inclusive).
    #[serde(default = "default_night_end")]
    pub night_end: f64,

    /// Energy drained per hour of daytime.
    #[serde(default = "default_day_drain_per_hour")]
    pub day_drain_per_hour: f64,

    /// Factor applied to the drain rate at night.
    #[serde(default = "default_night_drain_multiplier")]
    pub night_drain_multiplier: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            night_start: default_night_start(),
            night_end: default_night_end(),
            day_drain_per_hour: default_day_drain_per_hour(),
            night_drain_multiplier: default_night_drain_multiplier(),
        }
    }
}

impl ClockConfig {
    /// Whether `time_of_day` falls in the night window.
    ///
    /// The window wraps midnight: night is `time >= night_start` or
    /// `time <= night_end`.
    pub fn is_night(&self, time_of_day: f64) -> bool {
        time_of_day >= self.night_start || time_of_day <= self.night_end
    }

    /// Energy drained per hour at `time_of_day`.
    pub fn drain_rate(&self, time_of_day: f64) -> f64 {
        if self.is_night(time_of_day) {
            self.day_drain_per_hour * self.night_drain_multiplier
        } else {
            self.day_drain_per_hour
        }
    }
}

/// Command interpreter behavior.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InterpreterConfig {
    /// Probability that `look` appends a complaint line.
    #[serde(default = "default_flavor_chance")]
    pub flavor_chance: f64,

    /// Report and resolve room events after each move.
    #[serde(default)]
    pub narrate_obstacles: bool,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            flavor_chance: default_flavor_chance(),
            narrate_obstacles: false,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error), used when `RUST_LOG`
    /// is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_grid_size() -> u32 {
    16
}

const fn default_max_energy() -> f64 {
    100.0
}

const fn default_starting_phone_charge() -> u32 {
    12
}

const fn default_starting_time() -> f64 {
    23.0
}

fn default_starting_item() -> String {
    "phone".to_owned()
}

fn default_win_item() -> String {
    "car_keys".to_owned()
}

const fn default_low_charge_threshold() -> u32 {
    20
}

const fn default_move_energy_cost() -> f64 {
    5.0
}

const fn default_hours_per_move() -> f64 {
    0.25
}

const fn default_phone_drain_chance() -> f64 {
    0.1
}

const fn default_phone_drain() -> u32 {
    1
}

const fn default_min_energy_to_move() -> f64 {
    10.0
}

const fn default_night_start() -> f64 {
    22.0
}

const fn default_night_end() -> f64 {
    5.0
}

const fn default_day_drain_per_hour() -> f64 {
    1.0
}

const fn default_night_drain_multiplier() -> f64 {
    2.0
}

const fn default_flavor_chance() -> f64 {
    0.3
}

fn default_log_level() -> String {
    "info".to_owned()
}
