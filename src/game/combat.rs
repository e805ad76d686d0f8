//! Combat resolution.
//!
//! Combat is tile-scoped and simultaneous. Each side deals its total
//! strength as damage, capped by the health the other side can absorb, and
//! both outputs are computed from pre-combat totals. Damage spills through
//! the receiving side's units in creation order rather than being spread.
//!
//! Combat never changes tile ownership.

use tracing::info;

use crate::game::{Board, Faction, HexCoord, Roster, UnitId};

/// Summed health and strength of one side's living units on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ForceTotals {
    /// Total current health.
    pub health: u32,
    /// Total strength.
    pub strength: u32,
}

/// Damage each side receives in one exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DamageExchange {
    /// Damage dealt to the first side.
    pub to_a: u32,
    /// Damage dealt to the second side.
    pub to_b: u32,
}

impl DamageExchange {
    /// Damage received by one side.
    #[must_use]
    pub const fn to(&self, faction: Faction) -> u32 {
        match faction {
            Faction::A => self.to_a,
            Faction::B => self.to_b,
        }
    }
}

/// Compute simultaneous damage from pre-combat totals.
///
/// Pure: the same totals always give the same exchange.
#[must_use]
pub fn damage_exchange(a: ForceTotals, b: ForceTotals) -> DamageExchange {
    DamageExchange {
        to_a: b.strength.min(a.health),
        to_b: a.strength.min(b.health),
    }
}

/// Outcome of a combat on one tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatReport {
    /// Tile where the fight happened.
    pub coord: HexCoord,
    /// Pre-combat totals of the first side.
    pub a: ForceTotals,
    /// Pre-combat totals of the second side.
    pub b: ForceTotals,
    /// Damage applied to each side.
    pub damage: DamageExchange,
    /// Units destroyed, in creation order.
    pub killed: Vec<UnitId>,
}

impl CombatReport {
    /// Whether the given unit died in this fight.
    #[must_use]
    pub fn killed_unit(&self, id: UnitId) -> bool {
        self.killed.contains(&id)
    }
}

/// Totals of one side's living units on a tile.
#[must_use]
pub fn force_totals(
    board: &Board,
    roster: &Roster,
    coord: HexCoord,
    faction: Faction,
) -> ForceTotals {
    let Some(tile) = board.get(coord) else {
        return ForceTotals::default();
    };
    tile.occupants
        .iter()
        .filter_map(|id| roster.get(*id))
        .filter(|u| u.faction == faction && u.is_alive())
        .fold(ForceTotals::default(), |acc, u| ForceTotals {
            health: acc.health + u.current_health,
            strength: acc.strength + u.strength(),
        })
}

/// Whether both sides have living units on the tile.
#[must_use]
pub fn is_contested(board: &Board, roster: &Roster, coord: HexCoord) -> bool {
    Faction::BOTH
        .iter()
        .all(|&f| force_totals(board, roster, coord, f).health > 0)
}

/// Resolve combat on a tile if both sides are present.
///
/// Dead units are removed from the roster and from the tile's occupants
/// before this returns. Returns `None` when the tile is not contested.
pub fn resolve_combat(
    board: &mut Board,
    roster: &mut Roster,
    coord: HexCoord,
) -> Option<CombatReport> {
    if !is_contested(board, roster, coord) {
        return None;
    }

    let a = force_totals(board, roster, coord, Faction::A);
    let b = force_totals(board, roster, coord, Faction::B);
    let damage = damage_exchange(a, b);

    let mut occupants = board.get(coord)?.occupants.clone();
    occupants.sort_unstable();

    for faction in Faction::BOTH {
        let mut remaining = damage.to(faction);
        for id in &occupants {
            if remaining == 0 {
                break;
            }
            if let Some(unit) = roster.get_mut(*id)
                && unit.faction == faction
            {
                remaining -= unit.take_damage(remaining);
            }
        }
    }

    let killed: Vec<UnitId> = occupants
        .iter()
        .copied()
        .filter(|id| roster.get(*id).is_some_and(|u| !u.is_alive()))
        .collect();

    for id in &killed {
        roster.remove(*id);
    }
    if let Some(tile) = board.get_mut(coord) {
        tile.occupants.retain(|id| !killed.contains(id));
    }

    info!(
        %coord,
        a_strength = a.strength,
        a_health = a.health,
        b_strength = b.strength,
        b_health = b.health,
        to_a = damage.to_a,
        to_b = damage.to_b,
        killed = killed.len(),
        "resolved combat"
    );

    Some(CombatReport {
        coord,
        a,
        b,
        damage,
        killed,
    })
}
