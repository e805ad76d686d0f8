//! Engine configuration.
//!
//! Every field has a default, so a JSON file only needs to name what it
//! changes:
//!
//! ```json
//! { "rows": 15, "cols": 20, "water_density": 10, "nations": ["american", "italian"] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, EngineError};
use crate::game::{BoardParams, MIN_BOARD_EDGE, Nation};

/// Settings for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Board rows.
    pub rows: u16,
    /// Board columns.
    pub cols: u16,
    /// Strategic tiles to place.
    pub strategic_tiles: u32,
    /// Share of the board to flood with water, in percent.
    pub water_density: u8,
    /// Nations of the first and second side.
    pub nations: [Nation; 2],
    /// Seed for the random source; drawn from entropy when absent.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: 11,
            cols: 11,
            strategic_tiles: 4,
            water_density: 0,
            nations: [Nation::German, Nation::British],
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and
    /// `ConfigError::Invalid` if the result fails [`EngineConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`EngineConfig::from_json`].
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Check that the configuration describes a playable game.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateNation` if both sides share a nation.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.nations[0] == self.nations[1] {
            return Err(EngineError::DuplicateNation(self.nations[0]));
        }
        Ok(())
    }

    /// Board generation parameters, with edges and density clamped.
    #[must_use]
    pub fn board_params(&self) -> BoardParams {
        BoardParams {
            rows: self.rows.max(MIN_BOARD_EDGE),
            cols: self.cols.max(MIN_BOARD_EDGE),
            strategic_tiles: self.strategic_tiles,
            water_density: self.water_density.min(100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.rows, 11);
        assert_eq!(config.cols, 11);
        assert_eq!(config.strategic_tiles, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{ "cols": 20, "seed": 9 }"#).unwrap();
        assert_eq!(config.cols, 20);
        assert_eq!(config.rows, 11);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_duplicate_nations_rejected() {
        let err = EngineConfig::from_json(r#"{ "nations": ["italian", "italian"] }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(EngineError::DuplicateNation(Nation::Italian))
        ));
    }

    #[test]
    fn test_board_params_clamped() {
        let config = EngineConfig {
            rows: 0,
            cols: 1,
            water_density: 250,
            ..EngineConfig::default()
        };
        let params = config.board_params();
        assert_eq!(params.rows, MIN_BOARD_EDGE);
        assert_eq!(params.cols, MIN_BOARD_EDGE);
        assert_eq!(params.water_density, 100);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "strategic_tiles": 7, "water_density": 15 }}"#).unwrap();

        let config = EngineConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.strategic_tiles, 7);
        assert_eq!(config.water_density, 15);

        let missing = EngineConfig::from_json_file(Path::new("/nonexistent/hexfront.json"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }
}
