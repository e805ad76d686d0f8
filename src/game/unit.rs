//! Unit archetypes and the roster of living units.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::game::{Faction, HexCoord};

/// Unique identifier for a unit. Ids are allocated in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fixed combat and cost figures for an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitStats {
    /// Display name.
    pub name: &'static str,
    /// Short map symbol.
    pub symbol: &'static str,
    /// Maximum health.
    pub health: u32,
    /// Damage dealt in combat.
    pub strength: u32,
    /// Resources spent per hex moved.
    pub movement_cost: u32,
    /// Resources spent to buy one.
    pub purchase_cost: u32,
    /// Firing range in hexes, if the unit can fire at range.
    pub range: Option<u32>,
}

/// The five unit archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// Cheap and quick to move.
    LightInfantry,
    /// Twice the punch of light infantry.
    HeavyInfantry,
    /// Fast armor.
    LightMechanical,
    /// The only archetype with two health.
    HeavyMechanical,
    /// Long-range support.
    Artillery,
}

const LIGHT_INFANTRY: UnitStats = UnitStats {
    name: "Light Infantry",
    symbol: "LI",
    health: 1,
    strength: 1,
    movement_cost: 1,
    purchase_cost: 3,
    range: None,
};

const HEAVY_INFANTRY: UnitStats = UnitStats {
    name: "Heavy Infantry",
    symbol: "HI",
    health: 1,
    strength: 2,
    movement_cost: 2,
    purchase_cost: 3,
    range: None,
};

const LIGHT_MECHANICAL: UnitStats = UnitStats {
    name: "Light Mechanical",
    symbol: "LM",
    health: 1,
    strength: 3,
    movement_cost: 2,
    purchase_cost: 3,
    range: None,
};

const HEAVY_MECHANICAL: UnitStats = UnitStats {
    name: "Heavy Mechanical",
    symbol: "HM",
    health: 2,
    strength: 4,
    movement_cost: 3,
    purchase_cost: 3,
    range: None,
};

const ARTILLERY: UnitStats = UnitStats {
    name: "Artillery",
    symbol: "AR",
    health: 1,
    strength: 1,
    movement_cost: 2,
    purchase_cost: 3,
    range: Some(2),
};

impl UnitKind {
    /// All archetypes, in purchase-key order (1-5).
    pub const ALL: [UnitKind; 5] = [
        UnitKind::LightInfantry,
        UnitKind::HeavyInfantry,
        UnitKind::LightMechanical,
        UnitKind::HeavyMechanical,
        UnitKind::Artillery,
    ];

    /// Look up the archetype's fixed stats.
    #[must_use]
    pub const fn stats(self) -> &'static UnitStats {
        match self {
            UnitKind::LightInfantry => &LIGHT_INFANTRY,
            UnitKind::HeavyInfantry => &HEAVY_INFANTRY,
            UnitKind::LightMechanical => &LIGHT_MECHANICAL,
            UnitKind::HeavyMechanical => &HEAVY_MECHANICAL,
            UnitKind::Artillery => &ARTILLERY,
        }
    }

    /// The archetype with the lowest per-hex movement cost.
    ///
    /// Ties go to the earlier archetype in [`UnitKind::ALL`].
    #[must_use]
    pub fn cheapest_mover() -> UnitKind {
        let mut best = UnitKind::ALL[0];
        for kind in UnitKind::ALL {
            if kind.stats().movement_cost < best.stats().movement_cost {
                best = kind;
            }
        }
        best
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stats().name)
    }
}

/// Error returned when a unit kind name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseUnitKindError(pub String);

impl fmt::Display for ParseUnitKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown unit kind: {}", self.0)
    }
}

impl std::error::Error for ParseUnitKindError {}

impl FromStr for UnitKind {
    type Err = ParseUnitKindError;

    /// Accepts the purchase key (`1`-`5`), the map symbol, or the snake_case name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let kind = match lower.as_str() {
            "1" | "li" | "light_infantry" => UnitKind::LightInfantry,
            "2" | "hi" | "heavy_infantry" => UnitKind::HeavyInfantry,
            "3" | "lm" | "light_mechanical" => UnitKind::LightMechanical,
            "4" | "hm" | "heavy_mechanical" => UnitKind::HeavyMechanical,
            "5" | "ar" | "artillery" => UnitKind::Artillery,
            _ => return Err(ParseUnitKindError(s.to_string())),
        };
        Ok(kind)
    }
}

/// A unit on the battlefield.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Unique identifier.
    pub id: UnitId,
    /// Archetype.
    pub kind: UnitKind,
    /// Owning side.
    pub faction: Faction,
    /// Remaining health; the unit is dead at zero.
    pub current_health: u32,
    /// Whether the unit has moved since the last turn advance.
    pub has_acted: bool,
    /// Tile the unit stands on.
    pub location: HexCoord,
}

impl Unit {
    /// Create a fresh unit at full health.
    #[must_use]
    pub fn new(id: UnitId, kind: UnitKind, faction: Faction, location: HexCoord) -> Self {
        Self {
            id,
            kind,
            faction,
            current_health: kind.stats().health,
            has_acted: false,
            location,
        }
    }

    /// Archetype stats for this unit.
    #[must_use]
    pub fn stats(&self) -> &'static UnitStats {
        self.kind.stats()
    }

    /// Combat strength.
    #[must_use]
    pub fn strength(&self) -> u32 {
        self.stats().strength
    }

    /// Maximum health.
    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.stats().health
    }

    /// Whether the unit still has health left.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    /// Whether the unit may still act this turn.
    #[must_use]
    pub fn can_act(&self) -> bool {
        self.is_alive() && !self.has_acted
    }

    /// Subtract up to `amount` health, returning how much was absorbed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let absorbed = amount.min(self.current_health);
        self.current_health -= absorbed;
        absorbed
    }
}

/// All units in play, keyed by id so iteration follows creation order.
#[derive(Debug, Clone)]
pub struct Roster {
    units: BTreeMap<UnitId, Unit>,
    next_id: u32,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            units: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a unit with the next free id.
    ///
    /// The caller is responsible for adding the id to the tile's occupants.
    pub fn spawn(&mut self, kind: UnitKind, faction: Faction, location: HexCoord) -> UnitId {
        let id = UnitId(self.next_id);
        self.next_id += 1;
        self.units.insert(id, Unit::new(id, kind, faction, location));
        id
    }

    /// Remove a unit from play.
    pub fn remove(&mut self, id: UnitId) -> Option<Unit> {
        self.units.remove(&id)
    }

    /// Get a unit by id.
    #[must_use]
    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    /// Get a mutable unit by id.
    #[must_use]
    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(&id)
    }

    /// Iterate all units in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    /// Iterate all units mutably in creation order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Unit> {
        self.units.values_mut()
    }

    /// Units belonging to one side.
    pub fn of_faction(&self, faction: Faction) -> impl Iterator<Item = &Unit> {
        self.iter().filter(move |u| u.faction == faction)
    }

    /// Sum of strength over a side's living units.
    #[must_use]
    pub fn total_strength(&self, faction: Faction) -> u32 {
        self.of_faction(faction)
            .filter(|u| u.is_alive())
            .map(Unit::strength)
            .sum()
    }

    /// Number of units in play.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Ids of units with no health left, in creation order.
    #[must_use]
    pub fn dead_units(&self) -> Vec<UnitId> {
        self.iter().filter(|u| !u.is_alive()).map(|u| u.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_table() {
        let hm = UnitKind::HeavyMechanical.stats();
        assert_eq!(hm.health, 2);
        assert_eq!(hm.strength, 4);
        assert_eq!(hm.movement_cost, 3);
        assert_eq!(UnitKind::Artillery.stats().range, Some(2));
        assert!(UnitKind::ALL.iter().all(|k| k.stats().purchase_cost == 3));
    }

    #[test]
    fn test_cheapest_mover() {
        assert_eq!(UnitKind::cheapest_mover(), UnitKind::LightInfantry);
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("1".parse::<UnitKind>().unwrap(), UnitKind::LightInfantry);
        assert_eq!("HM".parse::<UnitKind>().unwrap(), UnitKind::HeavyMechanical);
        assert_eq!("artillery".parse::<UnitKind>().unwrap(), UnitKind::Artillery);
        assert!("tank".parse::<UnitKind>().is_err());
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut unit = Unit::new(
            UnitId(1),
            UnitKind::HeavyMechanical,
            Faction::A,
            HexCoord::new(0, 0),
        );
        assert_eq!(unit.take_damage(1), 1);
        assert!(unit.is_alive());
        assert_eq!(unit.take_damage(5), 1);
        assert_eq!(unit.current_health, 0);
        assert!(!unit.is_alive());
        assert!(!unit.can_act());
    }

    #[test]
    fn test_roster_ids_monotonic() {
        let mut roster = Roster::new();
        let a = roster.spawn(UnitKind::LightInfantry, Faction::A, HexCoord::new(0, 0));
        let b = roster.spawn(UnitKind::Artillery, Faction::B, HexCoord::new(1, 1));
        assert!(a < b);
        roster.remove(a);
        let c = roster.spawn(UnitKind::LightInfantry, Faction::A, HexCoord::new(0, 0));
        assert!(b < c);
        let order: Vec<_> = roster.iter().map(|u| u.id).collect();
        assert_eq!(order, vec![b, c]);
    }

    #[test]
    fn test_total_strength_counts_living_only() {
        let mut roster = Roster::new();
        roster.spawn(UnitKind::LightMechanical, Faction::A, HexCoord::new(0, 0));
        let dead = roster.spawn(UnitKind::HeavyInfantry, Faction::A, HexCoord::new(0, 0));
        roster.spawn(UnitKind::HeavyMechanical, Faction::B, HexCoord::new(0, 0));
        roster.get_mut(dead).unwrap().take_damage(1);

        assert_eq!(roster.total_strength(Faction::A), 3);
        assert_eq!(roster.total_strength(Faction::B), 4);
        assert_eq!(roster.dead_units(), vec![dead]);
    }
}
