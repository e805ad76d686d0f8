//! Multi-turn integration tests for game mechanics.
//!
//! These drive the public engine API through whole scenarios: a full
//! campaign, scripted command sequences, combat on arrival and the
//! water and resource rules for movement.
//!
//! Run with: cargo test --release game_integration

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use hexfront::game::{
    BoardParams, Command, CommandOutcome, MAX_TURNS, Terrain, TurnOutcome, check_invariants,
};
use hexfront::{
    EngineConfig, EngineError, Faction, GameEngine, GameSnapshot, HexCoord, IllegalTarget, UnitKind,
};

fn engine(seed: u64) -> GameEngine {
    GameEngine::seeded(EngineConfig::default(), seed).unwrap()
}

fn run(engine: &mut GameEngine, script: &str) -> Vec<Result<CommandOutcome, EngineError>> {
    script
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| engine.apply(l.parse::<Command>().unwrap()))
        .collect()
}

#[test]
fn test_full_campaign() {
    let mut engine = engine(42);
    let mut last_initiative = engine.initiative();
    let mut flips = 0;

    for turn in 1..=MAX_TURNS {
        match engine.advance_turn() {
            TurnOutcome::Advanced(clock) => assert_eq!(clock.total_turns, turn),
            TurnOutcome::GameOver => panic!("campaign ended early at turn {turn}"),
        }
        if engine.initiative() != last_initiative {
            flips += 1;
            last_initiative = engine.initiative();
        }
    }

    // Eleven new years between March 1935 and March 1946.
    assert_eq!(flips, 11);
    assert_eq!(engine.turn_string(), "1946 March Turn 1, Spring");

    let resources = engine.resources(Faction::A);
    assert_eq!(engine.advance_turn(), TurnOutcome::GameOver);
    assert_eq!(engine.clock().total_turns, MAX_TURNS);
    assert_eq!(engine.resources(Faction::A), resources);
    assert!(check_invariants(&engine).is_empty());
}

#[test]
fn test_income_accumulates_each_turn() {
    let mut engine = engine(7);
    let income_a = engine.board().income(Faction::A);
    let income_b = engine.board().income(Faction::B);
    let start_a = engine.resources(Faction::A);
    let start_b = engine.resources(Faction::B);

    for _ in 0..10 {
        engine.advance_turn();
    }

    assert_eq!(engine.resources(Faction::A), start_a + 10 * income_a);
    assert_eq!(engine.resources(Faction::B), start_b + 10 * income_b);
}

#[test]
fn test_single_strategic_tile_on_small_board() {
    let mut engine = engine(1);
    engine.generate_board(BoardParams {
        rows: 5,
        cols: 5,
        strategic_tiles: 1,
        water_density: 0,
    });
    assert_eq!(engine.board().count_terrain(Terrain::Strategic), 1);
    assert_eq!(engine.hex_count(), 25);
}

#[test]
fn test_starting_holdings_capped() {
    for seed in 0..20 {
        let config = EngineConfig {
            strategic_tiles: 12,
            ..EngineConfig::default()
        };
        let engine = GameEngine::seeded(config, seed).unwrap();
        for faction in Faction::BOTH {
            let held = engine
                .board()
                .tiles_owned_by(faction)
                .filter(|t| t.is_strategic())
                .count();
            assert_eq!(held, 3, "seed {seed} faction {faction}");
        }
    }
}

#[test]
fn test_scripted_skirmish() {
    let mut engine = engine(99);
    let b_corner = engine.board().corner_of(Faction::B);
    assert_eq!(b_corner, HexCoord::new(10, 10));

    // B stacks a second light unit on its corner; A brings three strength
    // in from two hexes away.
    let results = run(
        &mut engine,
        "
        buy 1 b 10 10
        buy lm a 10 8
        advance
        select 3
        ",
    );
    assert!(results.iter().all(Result::is_ok), "{results:?}");
    assert_eq!(engine.tile(b_corner).unwrap().occupants.len(), 2);

    let before = engine.resources(Faction::A);
    let outcome = match engine.apply("move 4 10 10".parse().unwrap()).unwrap() {
        CommandOutcome::Moved(outcome) => outcome,
        other => panic!("unexpected outcome {other:?}"),
    };
    assert_eq!(outcome.cost, 4);
    assert_eq!(engine.resources(Faction::A), before - 4);

    // A deals min(3, 2) = 2, exhausting both defenders in creation order;
    // B deals min(2, 1) = 1 back.
    let report = outcome.combat.unwrap();
    assert_eq!(report.damage.to_b, 2);
    assert_eq!(report.damage.to_a, 1);
    assert_eq!(
        report.killed,
        vec![hexfront::UnitId(2), hexfront::UnitId(3), hexfront::UnitId(4)]
    );

    assert!(engine.tile(b_corner).unwrap().occupants.is_empty());
    assert_eq!(engine.tile(b_corner).unwrap().owner, Some(Faction::B));
    assert!(engine.selected_unit().is_none());
    assert_eq!(engine.total_strength(Faction::B), 0);
    assert!(check_invariants(&engine).is_empty());
}

#[test]
fn test_mixed_tile_stays_peaceful_without_a_move() {
    let mut engine = engine(21);
    let b_corner = engine.board().corner_of(Faction::B);
    let defender = engine.occupants_of(b_corner)[0].id;

    // Buying straight onto an enemy stack does not start a fight.
    let intruder = engine
        .purchase_unit(UnitKind::HeavyMechanical, Faction::A, b_corner)
        .unwrap();
    assert_eq!(engine.tile(b_corner).unwrap().occupants.len(), 2);

    // Neither does the turn passing with both sides on the tile.
    assert!(matches!(engine.advance_turn(), TurnOutcome::Advanced(_)));

    let tile = engine.tile(b_corner).unwrap();
    assert_eq!(tile.occupants, vec![defender, intruder]);
    assert!(engine.unit(defender).unwrap().is_alive());
    assert!(engine.unit(intruder).unwrap().is_alive());
    assert_eq!(engine.unit(defender).unwrap().current_health, 1);
    assert_eq!(
        engine.unit(intruder).unwrap().current_health,
        UnitKind::HeavyMechanical.stats().health
    );
    assert_eq!(tile.owner, Some(Faction::B));
    assert!(check_invariants(&engine).is_empty());
}

#[test]
fn test_move_into_water_always_fails() {
    let config = EngineConfig {
        water_density: 40,
        ..EngineConfig::default()
    };
    let mut engine = GameEngine::seeded(config, 5).unwrap();
    let water = engine
        .board()
        .tiles()
        .iter()
        .find(|t| t.terrain == Terrain::Water)
        .map(|t| t.coord)
        .unwrap();
    let unit = engine.occupants_of(engine.board().corner_of(Faction::A))[0].id;

    for _ in 0..50 {
        engine.advance_turn();
    }
    assert!(engine.resources(Faction::A) > 100);
    assert!(!engine.can_move_unit(unit, water));
    assert!(!engine.move_unit(unit, water));
    assert_eq!(
        engine.try_move_unit(unit, water),
        Err(EngineError::IllegalTarget(IllegalTarget::Water))
    );
}

#[test]
fn test_group_departure_penalty() {
    let mut engine = engine(12);
    let corner = engine.board().corner_of(Faction::A);
    let first = engine.occupants_of(corner)[0].id;
    let target = HexCoord::new(0, 2);

    assert_eq!(engine.movement_cost(first, target), Ok(2));

    let second = engine
        .purchase_unit(UnitKind::LightInfantry, Faction::A, corner)
        .unwrap();
    assert_eq!(engine.movement_cost(first, target), Ok(3));
    assert_eq!(engine.movement_cost(second, target), Ok(3));

    let before = engine.resources(Faction::A);
    assert!(engine.move_unit(second, target));
    assert_eq!(engine.resources(Faction::A), before - 3);

    // Alone again, the first unit pays the base rate.
    assert_eq!(engine.movement_cost(first, target), Ok(2));
}

#[test]
fn test_snapshot_reflects_play() {
    let mut engine = engine(64);
    let corner = engine.board().corner_of(Faction::B);
    engine
        .purchase_unit(UnitKind::Artillery, Faction::B, corner)
        .unwrap();
    engine.advance_turn();

    let snapshot = GameSnapshot::capture(&engine);
    assert_eq!(snapshot.units.len(), 3);
    assert_eq!(snapshot.clock.label, "1935 March Turn 2, Spring");
    let b = snapshot.faction(Faction::B).unwrap();
    assert_eq!(b.units, 2);
    assert_eq!(b.total_strength, 2);
    assert_eq!(b.resources, engine.resources(Faction::B));
}
