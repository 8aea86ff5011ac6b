//! Front-end settings, read from a RON file.
//!
//! ```ron
//! (
//!     window: (title: "Breadboard", width: 1000.0, height: 600.0),
//!     wire_colors: [(255, 0, 0), (0, 255, 0), (0, 0, 255)],
//! )
//! ```

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::wire::WireTag;

pub const CONFIG_ENV: &str = "BREADBOARD_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "breadboard.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Breadboard".into(),
            width: 1000.0,
            height: 600.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    /// Share of the window width given to the palette.
    pub palette_fraction: f32,
    pub wire_colors: Vec<(u8, u8, u8)>,
    pub wire_width: f32,
    pub terminal_radius: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            palette_fraction: 0.2,
            wire_colors: vec![(255, 0, 0), (0, 255, 0), (0, 0, 255)],
            wire_width: 3.0,
            terminal_radius: 5.0,
        }
    }
}

impl Config {
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_ron(&text)
    }

    /// Loads the file named by `BREADBOARD_CONFIG`, else `breadboard.ron` in the working
    /// directory, else the defaults.
    pub fn discover() -> Result<Self, ConfigError> {
        if let Some(path) = env::var_os(CONFIG_ENV) {
            let path = PathBuf::from(path);
            log::info!("loading config from {}", path.display());
            return Self::load(&path);
        }

        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            log::info!("loading config from {}", path.display());
            return Self::load(path);
        }

        log::info!("no config file, using defaults");
        Ok(Self::default())
    }

    /// Color for a wire tag. Tags past the end of the list wrap around.
    pub fn wire_color(&self, tag: WireTag) -> (u8, u8, u8) {
        if self.wire_colors.is_empty() {
            return (0, 0, 0);
        }
        self.wire_colors[tag.0 as usize % self.wire_colors.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = Config::from_ron("(wire_width: 4.5, window: (width: 800.0))").unwrap();
        assert_eq!(config.wire_width, 4.5);
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 600.0);
        assert_eq!(config.window.title, "Breadboard");
        assert_eq!(config.wire_colors.len(), 3);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_ron("()").unwrap(), Config::default());
    }

    #[test]
    fn parse_errors_are_reported() {
        let err = Config::from_ron("(wire_width: \"wide\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::load(Path::new("/nonexistent/breadboard.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn wire_colors_wrap() {
        let config = Config::default();
        assert_eq!(config.wire_color(WireTag(1)), (0, 255, 0));
        assert_eq!(config.wire_color(WireTag(3)), (255, 0, 0));

        let config = Config {
            wire_colors: vec![],
            ..Config::default()
        };
        assert_eq!(config.wire_color(WireTag(1)), (0, 0, 0));
    }

    #[test]
    fn round_trips_through_ron() {
        let text = ron::ser::to_string_pretty(&Config::default(), Default::default()).unwrap();
        assert_eq!(Config::from_ron(&text).unwrap(), Config::default());
    }
}
