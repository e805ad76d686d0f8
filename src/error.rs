//! Error types for the game engine.
//!
//! Every failure the engine can report is recoverable: a rejected command
//! leaves the game state untouched.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::game::{Nation, UnitId};

/// Why a target tile or unit cannot take part in an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalTarget {
    /// The unit is already standing on the target tile.
    SameTile,
    /// Water tiles cannot be entered or purchased onto.
    Water,
    /// The unit has been destroyed.
    DeadUnit,
    /// No unit with the given id exists.
    UnknownUnit,
}

impl fmt::Display for IllegalTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalTarget::SameTile => write!(f, "unit is already on that tile"),
            IllegalTarget::Water => write!(f, "water tile"),
            IllegalTarget::DeadUnit => write!(f, "unit is dead"),
            IllegalTarget::UnknownUnit => write!(f, "no such unit"),
        }
    }
}

/// A rejected engine command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Lookup outside the grid bounds.
    #[error("coordinate ({row}, {col}) is outside the board")]
    InvalidCoordinate {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },
    /// The acting faction cannot pay for the action.
    #[error("insufficient resources: need {needed}, have {available}")]
    InsufficientResources {
        /// Cost of the action.
        needed: u32,
        /// Resources the faction currently holds.
        available: u32,
    },
    /// The faction's living strength has reached the purchase cap.
    #[error("strength cap exceeded: faction already fields {strength} strength")]
    StrengthCapExceeded {
        /// Current total living strength.
        strength: u32,
    },
    /// The unit has already moved this turn.
    #[error("unit {0} has already acted this turn")]
    UnitAlreadyActed(UnitId),
    /// The target tile or unit is not valid for this action.
    #[error("illegal target: {0}")]
    IllegalTarget(IllegalTarget),
    /// The calendar has run out.
    #[error("game over: the campaign has ended")]
    GameOver,
    /// Both sides were assigned the same nation.
    #[error("both factions cannot play as {0}")]
    DuplicateNation(Nation),
}

/// Result type for engine commands.
pub type EngineResult<T> = Result<T, EngineError>;

/// Failure while loading an engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid JSON for [`crate::EngineConfig`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configuration parsed but describes an impossible game.
    #[error(transparent)]
    Invalid(#[from] EngineError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InsufficientResources {
            needed: 3,
            available: 2,
        };
        assert_eq!(err.to_string(), "insufficient resources: need 3, have 2");

        let err = EngineError::IllegalTarget(IllegalTarget::Water);
        assert_eq!(err.to_string(), "illegal target: water tile");

        let err = EngineError::DuplicateNation(Nation::German);
        assert!(err.to_string().contains("German"));
    }
}
