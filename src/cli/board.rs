//! Board command implementation.

use super::output::format_text;
use super::{CliError, GameOptions, OutputFormat};
use hexfront::{GameEngine, GameSnapshot};

/// Execute the board command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or output fails.
pub(crate) fn execute(
    game: &GameOptions,
    format: OutputFormat,
    color: bool,
) -> Result<(), CliError> {
    let config = game.to_config()?;
    let engine = GameEngine::new(config)?;

    match format {
        OutputFormat::Text => print!("{}", format_text(&engine, color)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&GameSnapshot::capture(&engine))?;
            println!("{json}");
        }
    }

    Ok(())
}
