//! Player commands and their one-line text form.
//!
//! ```text
//! advance
//! buy <kind|1-5> <a|b> <row> <col>
//! move <unit> <row> <col>
//! select <unit>
//! reset
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::game::{Clock, Faction, HexCoord, MoveOutcome, UnitId, UnitKind};

/// A command issued to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Advance the clock by one half-month turn.
    Advance,
    /// Buy a unit onto a tile.
    Purchase {
        /// Archetype to buy.
        kind: UnitKind,
        /// Buying side.
        faction: Faction,
        /// Tile to place the unit on.
        at: HexCoord,
    },
    /// Move a unit to another tile.
    Move {
        /// Unit to move.
        unit: UnitId,
        /// Destination tile.
        to: HexCoord,
    },
    /// Select a unit.
    Select {
        /// Unit to select.
        unit: UnitId,
    },
    /// Rewind the clock to the opening turn.
    Reset,
}

/// Result of a successfully applied command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The clock advanced; carries the new clock.
    Advanced(Clock),
    /// A unit was bought.
    Purchased(UnitId),
    /// A unit moved, possibly fighting at its destination.
    Moved(MoveOutcome),
    /// A unit was selected.
    Selected(UnitId),
    /// The clock was reset.
    Reset(Clock),
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutcome::Advanced(clock) => write!(f, "advanced to {clock}"),
            CommandOutcome::Purchased(id) => write!(f, "purchased unit {id}"),
            CommandOutcome::Moved(outcome) => {
                write!(
                    f,
                    "moved {} {} -> {} for {}",
                    outcome.unit, outcome.from, outcome.to, outcome.cost
                )?;
                if let Some(report) = &outcome.combat {
                    write!(
                        f,
                        "; combat dealt {} to A and {} to B, {} killed",
                        report.damage.to_a,
                        report.damage.to_b,
                        report.killed.len()
                    )?;
                }
                Ok(())
            }
            CommandOutcome::Selected(id) => write!(f, "selected {id}"),
            CommandOutcome::Reset(clock) => write!(f, "reset to {clock}"),
        }
    }
}

/// Failure to parse a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    /// The line was empty.
    #[error("empty command")]
    Empty,
    /// The first word is not a known command.
    #[error("unknown command: {0}")]
    UnknownVerb(String),
    /// The command got the wrong number of arguments.
    #[error("{verb} expects {expected} argument(s), got {got}")]
    Arity {
        /// Command word.
        verb: &'static str,
        /// Arguments expected.
        expected: usize,
        /// Arguments given.
        got: usize,
    },
    /// An argument could not be parsed.
    #[error("invalid {what}: {value}")]
    InvalidArgument {
        /// Which argument was bad.
        what: &'static str,
        /// The offending text.
        value: String,
    },
}

fn expect_args(
    verb: &'static str,
    args: &[&str],
    expected: usize,
) -> Result<(), ParseCommandError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ParseCommandError::Arity {
            verb,
            expected,
            got: args.len(),
        })
    }
}

fn parse_arg<T: FromStr>(what: &'static str, value: &str) -> Result<T, ParseCommandError> {
    value.parse().map_err(|_| ParseCommandError::InvalidArgument {
        what,
        value: value.to_string(),
    })
}

fn parse_unit_id(value: &str) -> Result<UnitId, ParseCommandError> {
    parse_arg("unit id", value.trim_start_matches('#')).map(UnitId)
}

fn parse_coord(row: &str, col: &str) -> Result<HexCoord, ParseCommandError> {
    Ok(HexCoord::new(parse_arg("row", row)?, parse_arg("column", col)?))
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(ParseCommandError::Empty)?;
        let args: Vec<&str> = words.collect();

        match verb.to_ascii_lowercase().as_str() {
            "advance" | "next" => {
                expect_args("advance", &args, 0)?;
                Ok(Command::Advance)
            }
            "buy" | "purchase" => {
                expect_args("buy", &args, 4)?;
                Ok(Command::Purchase {
                    kind: parse_arg("unit kind", args[0])?,
                    faction: parse_arg("faction", args[1])?,
                    at: parse_coord(args[2], args[3])?,
                })
            }
            "move" => {
                expect_args("move", &args, 3)?;
                Ok(Command::Move {
                    unit: parse_unit_id(args[0])?,
                    to: parse_coord(args[1], args[2])?,
                })
            }
            "select" => {
                expect_args("select", &args, 1)?;
                Ok(Command::Select {
                    unit: parse_unit_id(args[0])?,
                })
            }
            "reset" => {
                expect_args("reset", &args, 0)?;
                Ok(Command::Reset)
            }
            other => Err(ParseCommandError::UnknownVerb(other.to_string())),
        }
    }
}
