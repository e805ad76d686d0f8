//! CLI command implementations for Hexfront.

pub(crate) mod board;
pub(crate) mod play;

mod output;
mod render;

use clap::ValueEnum;
use hexfront::game::Nation;
use hexfront::{ConfigError, EngineConfig, EngineError};
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Output format for the `board` and `play` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable map and status.
    Text,
    /// Machine-readable JSON snapshot.
    Json,
}

/// Game setup shared by every command.
///
/// Flags override values loaded from `--config`.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GameOptions {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board rows (default: 11)
    #[arg(long)]
    rows: Option<u16>,

    /// Board columns (default: 11)
    #[arg(long)]
    cols: Option<u16>,

    /// Strategic tiles to place (default: 4)
    #[arg(long)]
    strategic: Option<u32>,

    /// Percentage of the board to flood with water (default: 0)
    #[arg(long)]
    water: Option<u8>,

    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Nation of the first side
    #[arg(long)]
    nation_a: Option<Nation>,

    /// Nation of the second side
    #[arg(long)]
    nation_b: Option<Nation>,
}

impl GameOptions {
    /// Build the engine configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or the result
    /// is not a valid game.
    pub(crate) fn to_config(&self) -> Result<EngineConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_json_file(path)?,
            None => EngineConfig::default(),
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(strategic) = self.strategic {
            config.strategic_tiles = strategic;
        }
        if let Some(water) = self.water {
            config.water_density = water;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(nation) = self.nation_a {
            config.nations[0] = nation;
        }
        if let Some(nation) = self.nation_b {
            config.nations[1] = nation;
        }

        config.validate()?;
        Ok(config)
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<EngineError> for CliError {
    fn from(e: EngineError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> GameOptions {
        GameOptions {
            config: None,
            rows: None,
            cols: None,
            strategic: None,
            water: None,
            seed: None,
            nation_a: None,
            nation_b: None,
        }
    }

    #[test]
    fn test_flags_override_defaults() {
        let opts = GameOptions {
            rows: Some(6),
            water: Some(30),
            seed: Some(5),
            nation_b: Some(Nation::American),
            ..options()
        };
        let config = opts.to_config().unwrap();
        assert_eq!(config.rows, 6);
        assert_eq!(config.cols, 11);
        assert_eq!(config.water_density, 30);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.nations, [Nation::German, Nation::American]);
    }

    #[test]
    fn test_duplicate_nation_flag_rejected() {
        let opts = GameOptions {
            nation_b: Some(Nation::German),
            ..options()
        };
        let err = opts.to_config().unwrap_err();
        assert!(err.to_string().contains("German"));
    }
}
