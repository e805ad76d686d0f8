//! Read-only export of a game for renderers.
//!
//! A snapshot is a plain serde value; it can be written as JSON and parsed
//! back, but it is never loaded into a live engine.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::{Clock, Faction, GameEngine, Nation, Season, Tile, Unit, UnitId};

/// Per-side summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionSnapshot {
    /// Which side.
    pub faction: Faction,
    /// Nation the side plays as.
    pub nation: Nation,
    /// Resources on hand.
    pub resources: u32,
    /// Summed strength of living units.
    pub total_strength: u32,
    /// Income per turn from owned tiles.
    pub income: u32,
    /// Tiles owned.
    pub tiles_owned: usize,
    /// Living units.
    pub units: usize,
}

/// Calendar state with derived labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    /// Raw clock fields.
    pub clock: Clock,
    /// Season of the current month.
    pub season: Season,
    /// Human-readable turn label.
    pub label: String,
    /// Whether the campaign has ended.
    pub game_over: bool,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board rows.
    pub rows: u16,
    /// Board columns.
    pub cols: u16,
    /// Campaign clock.
    pub clock: ClockSnapshot,
    /// Both sides, first faction first.
    pub factions: Vec<FactionSnapshot>,
    /// Selected unit, if any.
    pub selected: Option<UnitId>,
    /// All tiles in row-major order.
    pub tiles: Vec<Tile>,
    /// All units in creation order.
    pub units: Vec<Unit>,
}

impl GameSnapshot {
    /// Capture the current state of a game.
    #[must_use]
    pub fn capture<R: Rng>(engine: &GameEngine<R>) -> Self {
        let board = engine.board();
        let clock = *engine.clock();

        let factions = Faction::BOTH
            .iter()
            .map(|&faction| {
                let state = engine.faction(faction);
                FactionSnapshot {
                    faction,
                    nation: state.nation,
                    resources: state.resources,
                    total_strength: engine.total_strength(faction),
                    income: board.income(faction),
                    tiles_owned: board.tiles_owned_by(faction).count(),
                    units: engine.roster().of_faction(faction).count(),
                }
            })
            .collect();

        Self {
            rows: board.rows(),
            cols: board.cols(),
            clock: ClockSnapshot {
                clock,
                season: clock.season(),
                label: clock.turn_string(),
                game_over: clock.is_over(),
            },
            factions,
            selected: engine.selected_unit().map(|u| u.id),
            tiles: board.tiles().to_vec(),
            units: engine.roster().iter().cloned().collect(),
        }
    }

    /// Summary of one side.
    #[must_use]
    pub fn faction(&self, faction: Faction) -> Option<&FactionSnapshot> {
        self.factions.iter().find(|f| f.faction == faction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    #[test]
    fn test_capture_matches_engine() {
        let engine = GameEngine::seeded(EngineConfig::default(), 17).unwrap();
        let snapshot = GameSnapshot::capture(&engine);

        assert_eq!(snapshot.tiles.len(), engine.hex_count());
        assert_eq!(snapshot.units.len(), 2);
        assert_eq!(snapshot.clock.label, "1935 March Turn 1, Spring");
        let a = snapshot.faction(Faction::A).unwrap();
        assert_eq!(a.resources, engine.resources(Faction::A));
        assert_eq!(a.nation, Nation::German);
        assert_eq!(a.units, 1);
    }

    #[test]
    fn test_json_export_parses_back() {
        let engine = GameEngine::seeded(EngineConfig::default(), 23).unwrap();
        let snapshot = GameSnapshot::capture(&engine);

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"label\":\"1935 March Turn 1, Spring\""));
        assert!(json.contains("\"nation\":\"german\""));

        let parsed: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
