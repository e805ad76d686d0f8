//! Economy: resource income from owned tiles and spending on new units.
//!
//! Each side earns the resource value of every tile it owns (2 for plain,
//! 4 for strategic, 0 for water) whenever resources are collected. Income
//! accumulates; nothing decays.
//!
//! Purchases are gated twice: the treasury must cover the archetype's cost,
//! and the side's total living strength must be below [`STRENGTH_CAP`].

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult, IllegalTarget};
use crate::game::{Board, Faction, FactionState, HexCoord, Roster, UnitId, UnitKind};

/// Purchases are refused once a side fields this much living strength.
pub const STRENGTH_CAP: u32 = 100;

/// One-off grant to each side after the board is generated.
pub const STARTING_RESOURCES: u32 = 10;

/// Income credited to each side by one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Income {
    /// Credited to the first side.
    pub a: u32,
    /// Credited to the second side.
    pub b: u32,
}

impl Income {
    /// Income of one side.
    #[must_use]
    pub const fn of(&self, faction: Faction) -> u32 {
        match faction {
            Faction::A => self.a,
            Faction::B => self.b,
        }
    }
}

/// Credit each side with the yield of the tiles it owns.
pub fn collect_resources(board: &Board, factions: &mut [FactionState; 2]) -> Income {
    let income = Income {
        a: board.income(Faction::A),
        b: board.income(Faction::B),
    };

    for faction in Faction::BOTH {
        factions[faction.index()].earn(income.of(faction));
    }

    debug!(
        a = income.a,
        b = income.b,
        a_total = factions[0].resources,
        b_total = factions[1].resources,
        "collected resources"
    );

    income
}

/// Check whether a side may buy a unit of the given kind.
///
/// # Errors
///
/// Returns `InsufficientResources` if the treasury cannot cover the cost,
/// or `StrengthCapExceeded` if the side is at the strength cap.
pub fn check_purchase(kind: UnitKind, state: &FactionState, strength: u32) -> EngineResult<()> {
    let cost = kind.stats().purchase_cost;
    if state.resources < cost {
        return Err(EngineError::InsufficientResources {
            needed: cost,
            available: state.resources,
        });
    }
    if strength >= STRENGTH_CAP {
        return Err(EngineError::StrengthCapExceeded { strength });
    }
    Ok(())
}

/// Buy a unit and place it on `at`.
///
/// The cost is deducted in the same step the unit is created; on any error
/// neither the treasury nor the board changes. Buying never triggers combat.
///
/// # Errors
///
/// `InvalidCoordinate` for off-board tiles, `IllegalTarget(Water)` for water
/// tiles, and any error from [`check_purchase`].
pub fn purchase(
    board: &mut Board,
    roster: &mut Roster,
    factions: &mut [FactionState; 2],
    kind: UnitKind,
    faction: Faction,
    at: HexCoord,
) -> EngineResult<UnitId> {
    let tile = board.get(at).ok_or(EngineError::InvalidCoordinate {
        row: i32::from(at.row),
        col: i32::from(at.col),
    })?;
    if tile.is_water() {
        return Err(EngineError::IllegalTarget(IllegalTarget::Water));
    }

    let state = &mut factions[faction.index()];
    check_purchase(kind, state, roster.total_strength(faction))?;

    let cost = kind.stats().purchase_cost;
    if !state.spend(cost) {
        return Err(EngineError::InsufficientResources {
            needed: cost,
            available: state.resources,
        });
    }

    let id = roster.spawn(kind, faction, at);
    if let Some(tile) = board.get_mut(at) {
        tile.occupants.push(id);
    }

    info!(%id, %kind, %faction, %at, cost, "purchased unit");
    Ok(id)
}
