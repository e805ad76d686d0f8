#![no_main]

//! Tile combat fuzzer.
//!
//! Stacks arbitrary forces of both sides on one tile, resolves the fight,
//! and checks damage caps, removal of the dead, and engine invariants.

use arbitrary::Arbitrary;
use hexfront::game::{
    check_invariants, force_totals, resolve_combat, Board, Faction, GameEngine, HexCoord, Roster,
    UnitKind,
};
use hexfront::EngineConfig;
use libfuzzer_sys::fuzz_target;

/// Structured input for combat fuzzing.
#[derive(Arbitrary, Debug)]
struct CombatInput {
    /// Unit kinds (index into `UnitKind::ALL`) and sides, in arrival order.
    units: Vec<(u8, bool)>,
    /// Row of the contested tile.
    row: u8,
    /// Column of the contested tile.
    col: u8,
    /// Engine seed for the end-to-end check.
    seed: u64,
}

fuzz_target!(|input: CombatInput| {
    let units: Vec<_> = input.units.into_iter().take(32).collect();
    let Some(mut board) = Board::new(8, 8) else {
        return;
    };
    let at = HexCoord::new(u16::from(input.row % 8), u16::from(input.col % 8));
    let mut roster = Roster::new();

    for (kind, second_side) in &units {
        let kind = UnitKind::ALL[usize::from(*kind) % UnitKind::ALL.len()];
        let faction = if *second_side { Faction::B } else { Faction::A };
        let id = roster.spawn(kind, faction, at);
        if let Some(tile) = board.get_mut(at) {
            tile.occupants.push(id);
        }
    }

    let a = force_totals(&board, &roster, at, Faction::A);
    let b = force_totals(&board, &roster, at, Faction::B);

    match resolve_combat(&mut board, &mut roster, at) {
        Some(report) => {
            assert_eq!(report.a, a);
            assert_eq!(report.b, b);
            assert_eq!(report.damage.to_a, b.strength.min(a.health));
            assert_eq!(report.damage.to_b, a.strength.min(b.health));
            assert!(roster.iter().all(|u| u.is_alive()), "dead unit left in roster");

            let after_a = force_totals(&board, &roster, at, Faction::A);
            let after_b = force_totals(&board, &roster, at, Faction::B);
            assert_eq!(after_a.health, a.health - report.damage.to_a);
            assert_eq!(after_b.health, b.health - report.damage.to_b);
        }
        None => {
            assert!(a.health == 0 || b.health == 0, "contested tile skipped");
            assert_eq!(roster.len(), units.len());
        }
    }

    // The same fight, staged through the engine's own commands.
    let Ok(mut engine) = GameEngine::seeded(EngineConfig::default(), input.seed) else {
        return;
    };
    for (kind, second_side) in &units {
        let kind = UnitKind::ALL[usize::from(*kind) % UnitKind::ALL.len()];
        let faction = if *second_side { Faction::B } else { Faction::A };
        let home = engine.board().corner_of(faction);
        if let Ok(id) = engine.purchase_unit(kind, faction, home) {
            let _ = engine.try_move_unit(id, at);
        }
        let violations = check_invariants(&engine);
        assert!(violations.is_empty(), "Invariants violated: {violations:?}");
    }
});
