use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::application::{DEFAULT_RATE, MAX_RATE, MIN_RATE};
use crate::domain::DEFAULT_DENSITY;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Conway's Game of Life".to_owned(),
            width: 1100,
            height: 720,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Generations per second
    pub rate: u32,
    /// Live-cell probability used by Random
    pub random_density: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rate: DEFAULT_RATE,
            random_density: DEFAULT_DENSITY,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    pub window: WindowConfig,
    pub simulation: SimulationConfig,
}

impl Settings {
    /// Defaults when `path` is `None`, otherwise the parsed file.
    /// Out-of-range values are clamped either way.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(settings.sanitized())
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Clamp every field into its valid range, logging what changed
    pub fn sanitized(mut self) -> Self {
        let rate = self.simulation.rate.clamp(MIN_RATE, MAX_RATE);
        if rate != self.simulation.rate {
            warn!(configured = self.simulation.rate, using = rate, "rate out of range");
            self.simulation.rate = rate;
        }

        let density = self.simulation.random_density;
        if !(0.0..=1.0).contains(&density) {
            let using = if density.is_nan() { DEFAULT_DENSITY } else { density.clamp(0.0, 1.0) };
            warn!(configured = density, using, "random density out of range");
            self.simulation.random_density = using;
        }

        if self.window.width <= 0 || self.window.height <= 0 {
            let defaults = WindowConfig::default();
            warn!(
                width = self.window.width,
                height = self.window.height,
                "window size must be positive, using defaults"
            );
            self.window.width = defaults.width;
            self.window.height = defaults.height;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.simulation.rate, 2);
        assert_eq!(settings.simulation.random_density, 0.2);
        assert_eq!(settings.window, WindowConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings = toml::from_str("[simulation]\nrate = 7\n").unwrap();
        assert_eq!(settings.simulation.rate, 7);
        assert_eq!(settings.simulation.random_density, DEFAULT_DENSITY);
        assert_eq!(settings.window.title, "Conway's Game of Life");
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let settings: Settings = toml::from_str(
            "[simulation]\nrate = 42\nrandom_density = 1.5\n[window]\nwidth = 0\n",
        )
        .unwrap();
        let settings = settings.sanitized();
        assert_eq!(settings.simulation.rate, MAX_RATE);
        assert_eq!(settings.simulation.random_density, 1.0);
        assert_eq!(settings.window.width, WindowConfig::default().width);

        let mut slow = Settings::default();
        slow.simulation.rate = 0;
        assert_eq!(slow.sanitized().simulation.rate, MIN_RATE);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("life_board_{}.toml", std::process::id()));
        fs::write(&path, "[window]\ntitle = \"Life\"\n[simulation]\nrate = 5\n").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(settings.window.title, "Life");
        assert_eq!(settings.simulation.rate, 5);
    }

    #[test]
    fn test_missing_file_is_error() {
        let path = Path::new("/definitely/not/here/life.toml");
        let err = Settings::load(Some(path)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let path = std::env::temp_dir().join(format!("life_board_bad_{}.toml", std::process::id()));
        fs::write(&path, "[simulation\nrate = ").unwrap();

        let err = Settings::load(Some(&path)).unwrap_err();
        let _ = fs::remove_file(&path);

        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
