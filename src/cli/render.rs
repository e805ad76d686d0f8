//! ASCII renderer for the hex board, with optional ANSI colors.

use hexfront::game::{Faction, GameEngine, Terrain, Tile};
use rand::Rng;

/// ANSI color codes for the two sides.
const FACTION_COLORS: [&str; 2] = [
    "\x1b[31m", // A: Red
    "\x1b[34m", // B: Blue
];

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const CYAN: &str = "\x1b[36m";

/// Width of one rendered tile, including the separator.
const CELL_WIDTH: usize = 4;

/// Render the board as offset hex rows.
///
/// Output format (odd rows shifted half a cell right):
/// ```text
///     0   1   2   3   4
///  0  A 1 .   .*  .   .
///  1    .   ~~~ .   B*  .
///  2  .   .   .*  .   B 1
///
/// Legend: A/B=owner  .=unowned  *=strategic  ~~~=water  digit=units
/// ```
#[must_use]
pub(super) fn render_board<R: Rng>(engine: &GameEngine<R>, color: bool) -> String {
    let board = engine.board();
    let mut output = String::new();

    output.push_str("    ");
    for col in 0..board.cols() {
        output.push_str(&format!("{col:<CELL_WIDTH$}"));
    }
    output.push('\n');

    for row in 0..board.rows() {
        output.push_str(&format!("{row:>2}  "));
        if row % 2 == 1 {
            output.push_str(&" ".repeat(CELL_WIDTH / 2));
        }
        let start = usize::from(row) * usize::from(board.cols());
        for tile in &board.tiles()[start..start + usize::from(board.cols())] {
            render_tile(&mut output, engine, tile, color);
            output.push(' ');
        }
        output.push('\n');
    }

    output.push_str("\nLegend: A/B=owner  .=unowned  *=strategic  ~~~=water\n");
    output.push_str("        digit=units (+ for 10 or more, ! if contested)\n");
    output
}

/// Render a single tile as three characters.
fn render_tile<R: Rng>(output: &mut String, engine: &GameEngine<R>, tile: &Tile, color: bool) {
    if tile.terrain == Terrain::Water {
        if color {
            output.push_str(&format!("{CYAN}~~~{RESET}"));
        } else {
            output.push_str("~~~");
        }
        return;
    }

    match tile.owner {
        Some(faction) if color => {
            let code = FACTION_COLORS[faction.index()];
            output.push_str(&format!("{code}{BOLD}{faction}{RESET}"));
        }
        Some(faction) => output.push_str(&faction.to_string()),
        None => output.push('.'),
    }

    output.push(if tile.is_strategic() { '*' } else { ' ' });

    let units = engine.occupants_of(tile.coord);
    let mixed = Faction::BOTH
        .iter()
        .all(|&f| units.iter().any(|u| u.faction == f));
    let marker = match units.len() {
        0 => ' ',
        _ if mixed => '!',
        n => u32::try_from(n)
            .ok()
            .and_then(|n| char::from_digit(n, 10))
            .unwrap_or('+'),
    };
    output.push(marker);
}

/// Render the units in play, one per line.
#[must_use]
pub(super) fn render_units<R: Rng>(engine: &GameEngine<R>) -> String {
    let selected = engine.selected_unit().map(|u| u.id);
    let mut output = String::new();
    for unit in engine.roster().iter() {
        let mark = if Some(unit.id) == selected { '>' } else { ' ' };
        output.push_str(&format!(
            "{mark} {:<4} {:<16} [{}] at {:<9} hp {}/{}{}\n",
            unit.id.to_string(),
            unit.kind.to_string(),
            unit.faction,
            unit.location.to_string(),
            unit.current_health,
            unit.max_health(),
            if unit.has_acted { "  (acted)" } else { "" }
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexfront::EngineConfig;

    #[test]
    fn test_render_board_shape() {
        let config = EngineConfig {
            rows: 4,
            cols: 5,
            ..EngineConfig::default()
        };
        let engine = GameEngine::seeded(config, 3).unwrap();
        let text = render_board(&engine, false);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("    0   1"));
        assert!(lines[1].starts_with(" 0  A"));
        assert!(lines[2].starts_with(" 1    "));
        assert!(lines[4].trim_end().ends_with('1'));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_render_colors() {
        let engine = GameEngine::seeded(EngineConfig::default(), 3).unwrap();
        assert!(render_board(&engine, true).contains(FACTION_COLORS[0]));
    }

    #[test]
    fn test_render_units() {
        let engine = GameEngine::seeded(EngineConfig::default(), 3).unwrap();
        let text = render_units(&engine);
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("Light Infantry"));
    }
}
