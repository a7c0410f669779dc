use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::sort::SortAlgorithm;
use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Array size prefilled in the size box and used by headless runs
    pub default_size: usize,
    /// Largest array size accepted for any race.
    ///
    /// Every recorded swap keeps a copy of the whole array and the quadratic
    /// sorts make about n²/4 swaps, so memory grows with n³.
    pub max_size: usize,
    /// Seed for the random arrays (None = fresh seed per launch)
    pub seed: Option<u64>,
    /// Algorithms taking part in each race, in panel order
    pub algorithms: Vec<SortAlgorithm>,
    /// Delay between two played-back frames
    pub frame_interval: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_size: 50,
            max_size: 200,
            seed: None,
            algorithms: SortAlgorithm::ALL.to_vec(),
            frame_interval: Duration::from_millis(16),
        }
    }
}

/// TOML representation of the [race] section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlRaceConfig {
    pub default_size: Option<usize>,
    pub max_size: Option<usize>,
    pub seed: Option<u64>,
    pub algorithms: Option<Vec<SortAlgorithm>>,
}

/// TOML representation of the [playback] section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlPlaybackConfig {
    pub frame_interval_ms: Option<u64>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub race: Option<TomlRaceConfig>,
    pub playback: Option<TomlPlaybackConfig>,
}

impl Config {
    /// Load configuration from the data directory, merging with defaults.
    ///
    /// Writes the bundled example on first run. A broken file is logged and
    /// ignored.
    pub fn load() -> Self {
        let config_file = config_path();

        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        if !config_file.exists() {
            return Config::default();
        }

        match Self::load_from(&config_file) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring invalid config file");
                Config::default()
            }
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let toml_config: TomlConfig =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut config = Config::default();
        config.merge(toml_config)?;
        Ok(config)
    }

    fn merge(&mut self, toml_config: TomlConfig) -> Result<(), ConfigError> {
        if let Some(race) = toml_config.race {
            if let Some(max_size) = race.max_size {
                if max_size == 0 {
                    return Err(ConfigError::Invalid {
                        key: "race.max_size",
                        reason: "must be greater than zero".into(),
                    });
                }
                self.max_size = max_size;
            }
            if let Some(default_size) = race.default_size {
                self.default_size = default_size;
            }
            if let Some(seed) = race.seed {
                self.seed = Some(seed);
            }
            if let Some(algorithms) = race.algorithms {
                self.algorithms = dedup_algorithms(algorithms);
                if self.algorithms.is_empty() {
                    return Err(ConfigError::Invalid {
                        key: "race.algorithms",
                        reason: "at least one algorithm is required".into(),
                    });
                }
            }
        }

        if self.default_size == 0 || self.default_size > self.max_size {
            return Err(ConfigError::Invalid {
                key: "race.default_size",
                reason: format!("must be between 1 and {}", self.max_size),
            });
        }

        if let Some(playback) = toml_config.playback {
            if let Some(ms) = playback.frame_interval_ms {
                self.frame_interval = Duration::from_millis(ms.max(1));
            }
        }

        Ok(())
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, "Failed to create config directory");
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the race size. `max_size` still applies when the race starts.
    pub fn with_default_size(mut self, size: usize) -> Self {
        self.default_size = size;
        self
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval.max(Duration::from_millis(1));
        self
    }

    pub fn with_algorithms(mut self, algorithms: Vec<SortAlgorithm>) -> Self {
        let algorithms = dedup_algorithms(algorithms);
        if !algorithms.is_empty() {
            self.algorithms = algorithms;
        }
        self
    }
}

/// Keep the first occurrence of every algorithm.
fn dedup_algorithms(algorithms: Vec<SortAlgorithm>) -> Vec<SortAlgorithm> {
    let mut seen = Vec::with_capacity(algorithms.len());
    for alg in algorithms {
        if !seen.contains(&alg) {
            seen.push(alg);
        }
    }
    seen
}
