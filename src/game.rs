//! Game layer for Hexfront.
//!
//! Implements the rules engine:
//! - Hex grid with plain, strategic and water tiles
//! - Two factions with treasuries and units
//! - Board generation (strategic spacing, lakes, starting corners)
//! - Economy (income, purchases, strength cap)
//! - Turn and calendar clock
//! - Movement cost and tile combat

mod clock;
mod combat;
mod command;
mod economy;
mod faction;
mod hex;
mod invariants;
mod map;
mod mapgen;
mod movement;
mod state;
mod unit;

pub use clock::{
    MAX_TURNS, START_MONTH, START_YEAR, Clock, Season, TurnOutcome, month_name, random_faction,
};
pub use combat::{
    CombatReport, DamageExchange, ForceTotals, damage_exchange, force_totals, is_contested,
    resolve_combat,
};
pub use command::{Command, CommandOutcome, ParseCommandError};
pub use economy::{
    Income, STARTING_RESOURCES, STRENGTH_CAP, check_purchase, collect_resources, purchase,
};
pub use faction::{Faction, FactionState, Nation};
pub use hex::{Cube, HexCoord};
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use map::{Board, Terrain, Tile};
pub use mapgen::{
    BoardParams, MAX_PLACEMENT_ATTEMPTS, MAX_STARTING_STRATEGIC, MIN_BOARD_EDGE,
    MIN_STRATEGIC_SPACING, generate_board,
};
pub use movement::{GROUP_DEPARTURE_PENALTY, check_move, movement_cost};
pub use state::{GameEngine, MoveOutcome};
pub use unit::{ParseUnitKindError, Roster, Unit, UnitId, UnitKind, UnitStats};
