#![no_main]

//! Full game fuzzer.
//!
//! Feeds an arbitrary command sequence through `GameEngine::apply`:
//! purchases, moves, selections, turn advances and clock resets. The
//! engine must never panic and its invariants must hold after every
//! command, accepted or rejected.

use arbitrary::Arbitrary;
use hexfront::game::{check_invariants, Command, GameEngine, HexCoord, UnitId, UnitKind};
use hexfront::{EngineConfig, Faction};
use libfuzzer_sys::fuzz_target;

/// A fuzzer-generated command.
#[derive(Arbitrary, Debug, Clone)]
enum FuzzCommand {
    Advance,
    Purchase { kind: u8, second_side: bool, row: u8, col: u8 },
    Move { unit: u8, row: u8, col: u8 },
    Select { unit: u8 },
    Reset,
    /// Raw text, exercising the command parser.
    Text(String),
}

/// Structured input for full game fuzzing.
#[derive(Arbitrary, Debug)]
struct GameInput {
    seed: u64,
    rows: u8,
    cols: u8,
    strategic: u8,
    water: u8,
    commands: Vec<FuzzCommand>,
}

fn to_command(cmd: FuzzCommand) -> Option<Command> {
    let command = match cmd {
        FuzzCommand::Advance => Command::Advance,
        FuzzCommand::Purchase { kind, second_side, row, col } => Command::Purchase {
            kind: UnitKind::ALL[usize::from(kind) % UnitKind::ALL.len()],
            faction: if second_side { Faction::B } else { Faction::A },
            at: HexCoord::new(u16::from(row), u16::from(col)),
        },
        FuzzCommand::Move { unit, row, col } => Command::Move {
            unit: UnitId(u32::from(unit)),
            to: HexCoord::new(u16::from(row), u16::from(col)),
        },
        FuzzCommand::Select { unit } => Command::Select {
            unit: UnitId(u32::from(unit)),
        },
        FuzzCommand::Reset => Command::Reset,
        FuzzCommand::Text(text) => return text.parse().ok(),
    };
    Some(command)
}

fuzz_target!(|input: GameInput| {
    let config = EngineConfig {
        rows: u16::from(input.rows % 24),
        cols: u16::from(input.cols % 24),
        strategic_tiles: u32::from(input.strategic % 64),
        water_density: input.water % 101,
        seed: Some(input.seed),
        ..EngineConfig::default()
    };
    let Ok(mut engine) = GameEngine::new(config) else {
        return;
    };

    for cmd in input.commands.into_iter().take(400) {
        let Some(command) = to_command(cmd) else {
            continue;
        };

        let turns_before = engine.clock().total_turns;
        let resources_before = [
            engine.resources(Faction::A),
            engine.resources(Faction::B),
        ];
        let result = engine.apply(command);

        assert!(engine.clock().total_turns >= turns_before || matches!(command, Command::Reset));
        if result.is_err() {
            assert_eq!(
                [engine.resources(Faction::A), engine.resources(Faction::B)],
                resources_before,
                "rejected command {command:?} changed resources"
            );
        }

        let violations = check_invariants(&engine);
        assert!(violations.is_empty(), "Invariants violated after {command:?}: {violations:?}");
    }
});
