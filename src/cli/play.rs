//! Play command implementation.

use super::output::{JsonCommandResult, JsonPlayResult, format_text};
use super::{CliError, GameOptions, OutputFormat};
use hexfront::GameSnapshot;
use hexfront::game::{Command, GameEngine};
use rand::Rng;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Execute the play command.
///
/// Rejected game commands are reported and play continues; only I/O and
/// configuration failures end the run.
///
/// # Errors
///
/// Returns an error if the script cannot be read, the configuration is
/// invalid, or output fails.
pub(crate) fn execute(
    game: &GameOptions,
    script: Option<PathBuf>,
    format: OutputFormat,
    color: bool,
) -> Result<(), CliError> {
    let config = game.to_config()?;
    let mut engine = GameEngine::new(config)?;

    let results = match &script {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| CliError::new(format!("Failed to read {}: {e}", path.display())))?;
            run_script(&mut engine, BufReader::new(file))?
        }
        None => run_script(&mut engine, io::stdin().lock())?,
    };

    match format {
        OutputFormat::Text => {
            for result in &results {
                let status = if result.ok { "ok" } else { "error" };
                println!("{:>3}> {}", result.line, result.command);
                println!("     {status}: {}", result.message);
            }
            println!();
            print!("{}", format_text(&engine, color));
        }
        OutputFormat::Json => {
            let play = JsonPlayResult {
                commands: results,
                final_state: GameSnapshot::capture(&engine),
            };
            println!("{}", serde_json::to_string_pretty(&play)?);
        }
    }

    Ok(())
}

/// Apply every command in a script, one per line.
///
/// Blank lines and lines starting with `#` are skipped.
pub(super) fn run_script<R: Rng, B: BufRead>(
    engine: &mut GameEngine<R>,
    reader: B,
) -> io::Result<Vec<JsonCommandResult>> {
    let mut results = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let (ok, message) = match text.parse::<Command>() {
            Ok(command) => match engine.apply(command) {
                Ok(outcome) => (true, outcome.to_string()),
                Err(e) => (false, e.to_string()),
            },
            Err(e) => (false, e.to_string()),
        };

        results.push(JsonCommandResult {
            line: index + 1,
            command: text.to_string(),
            ok,
            message,
        });
    }

    Ok(results)
}
