//! Board generation: strategic objectives, lakes, and starting positions.
//!
//! Generation never fails. Degenerate requests are clamped: boards are at
//! least 2×2 so the two starting corners differ, and a strategic-tile
//! request larger than the board marks every tile strategic.

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{info, warn};

use crate::game::{Board, Faction, HexCoord, Roster, Terrain, UnitKind};

/// Minimum hex distance between strategic tiles when spacing can be honored.
pub const MIN_STRATEGIC_SPACING: u32 = 2;

/// Sampling attempts before strategic placement gives up on spacing.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

/// Strategic tiles handed to each side at the start.
pub const MAX_STARTING_STRATEGIC: usize = 3;

/// Smallest board edge accepted by the generator.
pub const MIN_BOARD_EDGE: u16 = 2;

/// Roughly one lake seed per this many water tiles.
const TILES_PER_LAKE: usize = 8;

/// Neighbors claimed per lake growth step.
const LAKE_BRANCHING: usize = 2;

/// Inputs to board generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardParams {
    /// Number of rows.
    pub rows: u16,
    /// Number of columns.
    pub cols: u16,
    /// Strategic tiles to place.
    pub strategic_tiles: u32,
    /// Percentage of the board to flood (0-100).
    pub water_density: u8,
}

impl Default for BoardParams {
    fn default() -> Self {
        Self {
            rows: 11,
            cols: 11,
            strategic_tiles: 4,
            water_density: 0,
        }
    }
}

/// Generate a board and the starting units for both sides.
///
/// The returned board has terrain and initial ownership set and the
/// starting units registered as occupants of their corner tiles.
pub fn generate_board<R: Rng + ?Sized>(params: BoardParams, rng: &mut R) -> (Board, Roster) {
    let rows = params.rows.max(MIN_BOARD_EDGE);
    let cols = params.cols.max(MIN_BOARD_EDGE);
    let mut board = Board::at_least(rows, cols);

    let placed = place_strategic_tiles(&mut board, params.strategic_tiles, rng);
    let flooded = if params.water_density > 0 {
        flood_lakes(&mut board, params.water_density.min(100), rng)
    } else {
        0
    };

    assign_starting_corners(&mut board);
    distribute_strategic_tiles(&mut board, rng);
    let roster = spawn_starting_units(&mut board);

    info!(
        rows,
        cols,
        strategic = placed,
        water = flooded,
        "generated board"
    );

    (board, roster)
}

/// Mark `requested` tiles strategic, spacing them apart where possible.
///
/// Returns the number of strategic tiles placed, which always equals
/// `min(requested, hex_count)`.
fn place_strategic_tiles<R: Rng + ?Sized>(board: &mut Board, requested: u32, rng: &mut R) -> usize {
    let total = board.hex_count();
    let wanted = usize::try_from(requested).map_or(total, |n| n.min(total));
    if wanted == 0 {
        return 0;
    }

    let mut placed: Vec<HexCoord> = Vec::with_capacity(wanted);
    let mut attempts = 0;

    while placed.len() < wanted && attempts < MAX_PLACEMENT_ATTEMPTS {
        attempts += 1;
        let Some(candidate) = board.coord_at(rng.gen_range(0..total)) else {
            continue;
        };
        if placed.contains(&candidate) {
            continue;
        }
        if placed
            .iter()
            .all(|p| p.distance(candidate) >= MIN_STRATEGIC_SPACING)
        {
            placed.push(candidate);
        }
    }

    if placed.len() < wanted {
        warn!(
            placed = placed.len(),
            wanted, "strategic spacing exhausted, placing remainder without spacing"
        );
        let mut rest: Vec<HexCoord> = board
            .tiles()
            .iter()
            .map(|t| t.coord)
            .filter(|c| !placed.contains(c))
            .collect();
        rest.shuffle(rng);
        let missing = wanted - placed.len();
        placed.extend(rest.into_iter().take(missing));
    }

    for coord in &placed {
        if let Some(tile) = board.get_mut(*coord) {
            tile.terrain = Terrain::Strategic;
        }
    }

    placed.len()
}

/// Grow lakes until `density` percent of the board is water or no lake can grow.
///
/// Strategic tiles and the two starting corners are never flooded. Returns
/// the number of water tiles created.
fn flood_lakes<R: Rng + ?Sized>(board: &mut Board, density: u8, rng: &mut R) -> usize {
    let target = board.hex_count() * usize::from(density) / 100;
    if target == 0 {
        return 0;
    }

    let corners = board.corners();
    let eligible = |board: &Board, coord: HexCoord| {
        !corners.contains(&coord)
            && board
                .get(coord)
                .is_some_and(|t| t.terrain == Terrain::Plain)
    };

    let candidates: Vec<HexCoord> = board
        .tiles()
        .iter()
        .map(|t| t.coord)
        .filter(|&c| eligible(board, c))
        .collect();

    let seed_count = (target / TILES_PER_LAKE).max(1).min(candidates.len());
    let seeds: Vec<HexCoord> = candidates
        .choose_multiple(rng, seed_count)
        .copied()
        .collect();

    let mut flooded = 0;
    let mut lakes: Vec<VecDeque<HexCoord>> = Vec::with_capacity(seeds.len());
    for seed in seeds {
        if let Some(tile) = board.get_mut(seed) {
            tile.terrain = Terrain::Water;
            flooded += 1;
        }
        lakes.push(VecDeque::from([seed]));
    }

    // Breadth-first growth, one step per lake in turn.
    while flooded < target && lakes.iter().any(|l| !l.is_empty()) {
        for lake in &mut lakes {
            if flooded >= target {
                break;
            }
            let Some(current) = lake.pop_front() else {
                continue;
            };

            let mut open: Vec<HexCoord> = board
                .neighbors(current)
                .into_iter()
                .filter(|&n| eligible(board, n))
                .collect();
            open.shuffle(rng);

            let take = LAKE_BRANCHING.min(target - flooded);
            for next in open.into_iter().take(take) {
                if let Some(tile) = board.get_mut(next) {
                    tile.terrain = Terrain::Water;
                    flooded += 1;
                }
                lake.push_back(next);
            }
        }
    }

    flooded
}

/// Give each side its starting corner.
fn assign_starting_corners(board: &mut Board) {
    for faction in Faction::BOTH {
        let corner = board.corner_of(faction);
        if let Some(tile) = board.get_mut(corner) {
            tile.owner = Some(faction);
        }
    }
}

/// Hand out up to three strategic tiles per side; the rest stay neutral.
///
/// With fewer than six strategic tiles the split is as even as possible,
/// with the first side getting the extra one. A strategic starting corner
/// counts toward its owner's share.
fn distribute_strategic_tiles<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) {
    let corners = board.corners();
    let strategic_total = board.count_terrain(Terrain::Strategic);
    let to_assign = strategic_total.min(MAX_STARTING_STRATEGIC * 2);
    let first_share = to_assign.div_ceil(2).min(MAX_STARTING_STRATEGIC);
    let second_share = (to_assign - first_share).min(MAX_STARTING_STRATEGIC);

    let mut quotas = [first_share, second_share];
    for faction in Faction::BOTH {
        let corner = board.corner_of(faction);
        if board.get(corner).is_some_and(|t| t.is_strategic()) {
            quotas[faction.index()] = quotas[faction.index()].saturating_sub(1);
        }
    }

    let mut pool: Vec<HexCoord> = board
        .tiles()
        .iter()
        .filter(|t| t.is_strategic() && !corners.contains(&t.coord))
        .map(|t| t.coord)
        .collect();
    pool.shuffle(rng);

    let mut pool = pool.into_iter();
    for faction in Faction::BOTH {
        for coord in pool.by_ref().take(quotas[faction.index()]) {
            if let Some(tile) = board.get_mut(coord) {
                tile.owner = Some(faction);
            }
        }
    }
}

/// Put one of the cheapest-moving units on each starting corner.
fn spawn_starting_units(board: &mut Board) -> Roster {
    let mut roster = Roster::new();
    let kind = UnitKind::cheapest_mover();

    for faction in Faction::BOTH {
        let corner = board.corner_of(faction);
        let id = roster.spawn(kind, faction, corner);
        if let Some(tile) = board.get_mut(corner) {
            tile.occupants.push(id);
        }
    }

    roster
}
