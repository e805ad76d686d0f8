//! Turn and calendar clock.
//!
//! Each month has two half-month turns. The campaign opens in March 1935
//! and runs for [`MAX_TURNS`] turns. Initiative passes to the other side at
//! every new year.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::Faction;

/// Turns in a full campaign: eleven years of 24 half-month turns.
pub const MAX_TURNS: u32 = 264;

/// Year the campaign opens.
pub const START_YEAR: u16 = 1935;

/// Month the campaign opens (March).
pub const START_MONTH: u8 = 3;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name of a month, 1-based. Out-of-range months yield `"?"`.
#[must_use]
pub fn month_name(month: u8) -> &'static str {
    usize::from(month)
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i))
        .copied()
        .unwrap_or("?")
}

/// Season, derived from the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// March to May.
    Spring,
    /// June to August.
    Summer,
    /// September to November.
    Fall,
    /// December to February.
    Winter,
}

impl Season {
    /// Season of a 1-based month.
    #[must_use]
    pub const fn of_month(month: u8) -> Season {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        };
        f.write_str(name)
    }
}

/// Result of asking the clock to advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The clock moved forward; carries the new state.
    Advanced(Clock),
    /// The campaign is over; nothing changed.
    GameOver,
}

/// Campaign calendar and turn counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    /// Calendar year.
    pub year: u16,
    /// Month, 1-12.
    pub month: u8,
    /// Half-month turn, 1 or 2.
    pub half_slot: u8,
    /// Turns advanced since the start of the campaign.
    pub total_turns: u32,
    /// Side holding the initiative.
    pub initiative: Faction,
}

impl Clock {
    /// A clock at the opening turn with the given initiative holder.
    #[must_use]
    pub const fn new(initiative: Faction) -> Self {
        Self {
            year: START_YEAR,
            month: START_MONTH,
            half_slot: 1,
            total_turns: 0,
            initiative,
        }
    }

    /// A clock at the opening turn with a random initiative holder.
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(random_faction(rng))
    }

    /// Current season.
    #[must_use]
    pub const fn season(&self) -> Season {
        Season::of_month(self.month)
    }

    /// Whether every turn has been played.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.total_turns >= MAX_TURNS
    }

    /// Turns left before the campaign ends.
    #[must_use]
    pub const fn turns_remaining(&self) -> u32 {
        MAX_TURNS.saturating_sub(self.total_turns)
    }

    /// Move to the next half-month turn.
    ///
    /// Once [`MAX_TURNS`] turns have passed this returns
    /// [`TurnOutcome::GameOver`] and leaves the clock untouched.
    pub fn advance(&mut self) -> TurnOutcome {
        if self.is_over() {
            return TurnOutcome::GameOver;
        }

        self.total_turns += 1;
        if self.half_slot == 1 {
            self.half_slot = 2;
        } else {
            self.half_slot = 1;
            self.month += 1;
            if self.month > 12 {
                self.month = 1;
                self.year += 1;
                self.initiative = self.initiative.opponent();
            }
        }

        TurnOutcome::Advanced(*self)
    }

    /// Rewind to the opening turn and re-roll initiative.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::with_rng(rng);
    }

    /// Human-readable turn label, e.g. `1935 March Turn 1, Spring`.
    #[must_use]
    pub fn turn_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} Turn {}, {}",
            self.year,
            month_name(self.month),
            self.half_slot,
            self.season()
        )
    }
}

/// Pick either side with equal probability.
pub fn random_faction<R: Rng + ?Sized>(rng: &mut R) -> Faction {
    if rng.gen_bool(0.5) { Faction::A } else { Faction::B }
}
