//! The two sides of the conflict and their treasuries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Faction {
    /// Starts in the top-left corner.
    A,
    /// Starts in the bottom-right corner.
    B,
}

impl Faction {
    /// Both sides, first faction first.
    pub const BOTH: [Faction; 2] = [Faction::A, Faction::B];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Faction {
        match self {
            Faction::A => Faction::B,
            Faction::B => Faction::A,
        }
    }

    /// Index into per-faction arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Faction::A => 0,
            Faction::B => 1,
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Faction::A => f.write_str("A"),
            Faction::B => f.write_str("B"),
        }
    }
}

impl FromStr for Faction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "1" => Ok(Faction::A),
            "b" | "2" => Ok(Faction::B),
            other => Err(format!("unknown faction: {other}")),
        }
    }
}

/// The nation a side plays as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nation {
    /// Germany.
    German,
    /// Britain.
    British,
    /// Italy.
    Italian,
    /// The United States.
    American,
}

impl Nation {
    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Nation::German => "German",
            Nation::British => "British",
            Nation::Italian => "Italian",
            Nation::American => "American",
        }
    }
}

impl fmt::Display for Nation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Nation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "german" => Ok(Nation::German),
            "british" => Ok(Nation::British),
            "italian" => Ok(Nation::Italian),
            "american" => Ok(Nation::American),
            other => Err(format!("unknown nation: {other}")),
        }
    }
}

/// Per-side economic state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionState {
    /// Nation this side plays as.
    pub nation: Nation,
    /// Resources available to spend.
    pub resources: u32,
}

impl FactionState {
    /// Create a side with an empty treasury.
    #[must_use]
    pub const fn new(nation: Nation) -> Self {
        Self {
            nation,
            resources: 0,
        }
    }

    /// Add income.
    pub fn earn(&mut self, amount: u32) {
        self.resources = self.resources.saturating_add(amount);
    }

    /// Spend resources if the treasury covers `amount`.
    ///
    /// Returns `false` and leaves the treasury unchanged otherwise.
    pub fn spend(&mut self, amount: u32) -> bool {
        match self.resources.checked_sub(amount) {
            Some(left) => {
                self.resources = left;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Faction::A.opponent(), Faction::B);
        assert_eq!(Faction::B.opponent(), Faction::A);
    }

    #[test]
    fn test_parse() {
        assert_eq!("b".parse::<Faction>().unwrap(), Faction::B);
        assert_eq!("Italian".parse::<Nation>().unwrap(), Nation::Italian);
        assert!("french".parse::<Nation>().is_err());
    }

    #[test]
    fn test_spend() {
        let mut state = FactionState::new(Nation::British);
        state.earn(5);
        assert!(state.spend(3));
        assert_eq!(state.resources, 2);
        assert!(!state.spend(3));
        assert_eq!(state.resources, 2);
    }
}
