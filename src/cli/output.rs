//! Output formatting utilities for CLI.

use hexfront::GameSnapshot;
use hexfront::game::{Faction, GameEngine, MAX_TURNS};
use rand::Rng;
use serde::Serialize;

use super::render::{render_board, render_units};

/// JSON-serializable result of one script line.
#[derive(Debug, Serialize)]
pub(super) struct JsonCommandResult {
    /// Line number in the script (1-based).
    pub(super) line: usize,
    /// The command text.
    pub(super) command: String,
    /// Whether the engine accepted the command.
    pub(super) ok: bool,
    /// Outcome or error message.
    pub(super) message: String,
}

/// JSON-serializable record of a scripted game.
#[derive(Debug, Serialize)]
pub(super) struct JsonPlayResult {
    /// Per-line results, in script order.
    pub(super) commands: Vec<JsonCommandResult>,
    /// State after the last command.
    pub(super) final_state: GameSnapshot,
}

/// Format the per-side status block.
pub(super) fn format_status<R: Rng>(engine: &GameEngine<R>) -> String {
    let mut output = String::new();
    let clock = engine.clock();

    output.push_str(&format!(
        "{}  (turn {}/{MAX_TURNS}, initiative: {})\n",
        clock,
        clock.total_turns,
        engine.initiative()
    ));
    if engine.is_game_over() {
        output.push_str("  The campaign is over.\n");
    }

    for faction in Faction::BOTH {
        let state = engine.faction(faction);
        output.push_str(&format!(
            "  {faction} ({}): resources {}  strength {}  income {}/turn  tiles {}\n",
            state.nation,
            state.resources,
            engine.total_strength(faction),
            engine.board().income(faction),
            engine.board().tiles_owned_by(faction).count()
        ));
    }

    output
}

/// Format the full text view: status, map, and unit list.
pub(super) fn format_text<R: Rng>(engine: &GameEngine<R>, color: bool) -> String {
    let mut output = format_status(engine);
    output.push('\n');
    output.push_str(&render_board(engine, color));
    output.push_str("\nUnits:\n");
    output.push_str(&render_units(engine));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexfront::EngineConfig;

    #[test]
    fn test_format_status() {
        let engine = GameEngine::seeded(EngineConfig::default(), 9).unwrap();
        let text = format_status(&engine);
        assert!(text.starts_with("1935 March Turn 1, Spring  (turn 0/264"));
        assert!(text.contains("A (German)"));
        assert!(text.contains("B (British)"));
    }

    #[test]
    fn test_play_result_json() {
        let engine = GameEngine::seeded(EngineConfig::default(), 9).unwrap();
        let result = JsonPlayResult {
            commands: vec![JsonCommandResult {
                line: 1,
                command: "advance".to_string(),
                ok: true,
                message: "advanced".to_string(),
            }],
            final_state: GameSnapshot::capture(&engine),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"command\":\"advance\""));
        assert!(json.contains("\"final_state\""));
    }
}
