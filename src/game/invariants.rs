//! Game invariants - sanity checks that detect bugs.
//!
//! No sequence of engine commands should ever trigger these. If one does,
//! the engine has a bug.

use rand::Rng;

use crate::game::{GameEngine, MAX_TURNS};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants<R: Rng>(engine: &GameEngine<R>) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut push = |message: String| violations.push(InvariantViolation { message });

    let board = engine.board();
    let roster = engine.roster();

    for tile in board.tiles() {
        if tile.is_water() && tile.owner.is_some() {
            push(format!("Water tile {} is owned by {:?}", tile.coord, tile.owner));
        }
        if tile.is_water() && !tile.occupants.is_empty() {
            push(format!("Water tile {} holds {} units", tile.coord, tile.occupants.len()));
        }

        for id in &tile.occupants {
            match roster.get(*id) {
                None => push(format!("Tile {} lists unknown unit {id}", tile.coord)),
                Some(unit) if unit.location != tile.coord => push(format!(
                    "Unit {id} is listed on {} but located at {}",
                    tile.coord, unit.location
                )),
                Some(_) => {}
            }
        }

        let listed = tile.occupants.len();
        let mut unique = tile.occupants.clone();
        unique.sort_unstable();
        unique.dedup();
        if unique.len() != listed {
            push(format!("Tile {} lists a unit more than once", tile.coord));
        }
    }

    for unit in roster.iter() {
        if !unit.is_alive() {
            push(format!("Dead unit {} is still in play", unit.id));
        }
        if unit.current_health > unit.max_health() {
            push(format!(
                "Unit {} has health {} > max {}",
                unit.id,
                unit.current_health,
                unit.max_health()
            ));
        }
        match board.get(unit.location) {
            None => push(format!("Unit {} is off the board at {}", unit.id, unit.location)),
            Some(tile) if !tile.occupants.contains(&unit.id) => push(format!(
                "Unit {} at {} is missing from the tile's occupants",
                unit.id, unit.location
            )),
            Some(_) => {}
        }
    }

    let clock = engine.clock();
    if !(1..=12).contains(&clock.month) {
        push(format!("Clock month {} out of range", clock.month));
    }
    if !(1..=2).contains(&clock.half_slot) {
        push(format!("Clock half slot {} out of range", clock.half_slot));
    }
    if clock.total_turns > MAX_TURNS {
        push(format!(
            "Clock at turn {} exceeds max {MAX_TURNS}",
            clock.total_turns
        ));
    }

    violations
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants<R: Rng>(engine: &GameEngine<R>) {
    let violations = check_invariants(engine);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants<R: Rng>(_engine: &GameEngine<R>) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::game::{Faction, HexCoord, UnitKind};

    fn engine() -> GameEngine {
        let config = EngineConfig {
            water_density: 20,
            ..EngineConfig::default()
        };
        GameEngine::seeded(config, 11).unwrap()
    }

    #[test]
    fn test_fresh_game_is_clean() {
        let engine = engine();
        let violations = check_invariants(&engine);
        assert!(violations.is_empty(), "{violations:?}");
        assert_invariants(&engine);
    }

    #[test]
    fn test_clean_after_full_campaign() {
        let mut engine = engine();
        for _ in 0..MAX_TURNS + 5 {
            engine.advance_turn();
        }
        assert!(check_invariants(&engine).is_empty());
    }

    #[test]
    fn test_clean_after_play() {
        let mut engine = engine();
        let target = engine.board().corner_of(Faction::B);
        let a_unit = engine.occupants_of(engine.board().corner_of(Faction::A))[0].id;

        for _ in 0..40 {
            let _ = engine.purchase_unit(UnitKind::LightInfantry, Faction::A, HexCoord::new(0, 0));
            let _ = engine.try_move_unit(a_unit, target);
            engine.advance_turn();
            assert!(check_invariants(&engine).is_empty());
        }
    }

    #[test]
    fn test_violation_display() {
        let violation = InvariantViolation {
            message: "broken".to_string(),
        };
        assert_eq!(violation.to_string(), "Invariant violation: broken");
    }
}
