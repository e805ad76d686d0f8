//! Movement legality and cost.
//!
//! Moving costs the unit's per-hex movement cost times the hex distance,
//! plus one when the unit leaves a tile it shares with other units.

use tracing::debug;

use crate::error::{EngineError, EngineResult, IllegalTarget};
use crate::game::{Board, FactionState, HexCoord, Unit};

/// Extra cost for leaving a tile that holds more than one unit.
pub const GROUP_DEPARTURE_PENALTY: u32 = 1;

/// Cost for `unit` to move from `from` to `to`.
///
/// `origin_occupants` is the number of units currently on `from`, the mover
/// included.
#[must_use]
pub fn movement_cost(unit: &Unit, from: HexCoord, to: HexCoord, origin_occupants: usize) -> u32 {
    let distance = from.distance(to);
    let base = unit.stats().movement_cost.saturating_mul(distance);
    let penalty = if origin_occupants > 1 {
        GROUP_DEPARTURE_PENALTY
    } else {
        0
    };
    let cost = base.saturating_add(penalty);

    debug!(
        unit = %unit.id,
        %from,
        %to,
        distance,
        penalty,
        cost,
        "movement cost"
    );

    cost
}

/// Validate a move and return its cost.
///
/// # Errors
///
/// `IllegalTarget(DeadUnit)` for a dead unit, `UnitAlreadyActed` if the unit
/// has moved this turn, `InvalidCoordinate` for off-board targets,
/// `IllegalTarget(SameTile)` or `IllegalTarget(Water)` for bad targets, and
/// `InsufficientResources` if the side cannot pay.
pub fn check_move(
    board: &Board,
    unit: &Unit,
    state: &FactionState,
    to: HexCoord,
) -> EngineResult<u32> {
    if !unit.is_alive() {
        return Err(EngineError::IllegalTarget(IllegalTarget::DeadUnit));
    }
    if unit.has_acted {
        return Err(EngineError::UnitAlreadyActed(unit.id));
    }
    let target = board.get(to).ok_or(EngineError::InvalidCoordinate {
        row: i32::from(to.row),
        col: i32::from(to.col),
    })?;
    if to == unit.location {
        return Err(EngineError::IllegalTarget(IllegalTarget::SameTile));
    }
    if !target.terrain.is_passable() {
        return Err(EngineError::IllegalTarget(IllegalTarget::Water));
    }

    let origin_occupants = board.get(unit.location).map_or(1, |t| t.occupants.len());
    let cost = movement_cost(unit, unit.location, to, origin_occupants);
    if state.resources < cost {
        return Err(EngineError::InsufficientResources {
            needed: cost,
            available: state.resources,
        });
    }

    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Faction, Nation, Terrain, UnitId, UnitKind};

    fn unit_at(kind: UnitKind, at: HexCoord) -> Unit {
        Unit::new(UnitId(1), kind, Faction::A, at)
    }

    fn treasury(resources: u32) -> FactionState {
        FactionState {
            nation: Nation::German,
            resources,
        }
    }

    #[test]
    fn test_cost_scales_with_distance() {
        let unit = unit_at(UnitKind::HeavyMechanical, HexCoord::new(0, 0));
        assert_eq!(movement_cost(&unit, HexCoord::new(0, 0), HexCoord::new(0, 2), 1), 6);
    }

    #[test]
    fn test_group_departure_penalty() {
        let unit = unit_at(UnitKind::LightInfantry, HexCoord::new(0, 0));
        let to = HexCoord::new(0, 2);
        assert_eq!(movement_cost(&unit, HexCoord::new(0, 0), to, 1), 2);
        assert_eq!(movement_cost(&unit, HexCoord::new(0, 0), to, 2), 3);
        assert_eq!(movement_cost(&unit, HexCoord::new(0, 0), to, 5), 3);
    }

    #[test]
    fn test_check_move_resources_boundary() {
        let mut board = Board::new(5, 5).unwrap();
        let from = HexCoord::new(0, 0);
        let unit = unit_at(UnitKind::LightInfantry, from);
        board.get_mut(from).unwrap().occupants.push(unit.id);

        assert_eq!(check_move(&board, &unit, &treasury(2), HexCoord::new(0, 2)), Ok(2));

        // A second unit on the origin adds the departure penalty.
        board.get_mut(from).unwrap().occupants.push(UnitId(2));
        assert_eq!(
            check_move(&board, &unit, &treasury(2), HexCoord::new(0, 2)),
            Err(EngineError::InsufficientResources {
                needed: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_check_move_rejections() {
        let mut board = Board::new(5, 5).unwrap();
        board.get_mut(HexCoord::new(1, 1)).unwrap().terrain = Terrain::Water;
        let mut unit = unit_at(UnitKind::LightInfantry, HexCoord::new(0, 0));
        let rich = treasury(1000);

        assert_eq!(
            check_move(&board, &unit, &rich, HexCoord::new(1, 1)),
            Err(EngineError::IllegalTarget(IllegalTarget::Water))
        );
        assert_eq!(
            check_move(&board, &unit, &rich, HexCoord::new(0, 0)),
            Err(EngineError::IllegalTarget(IllegalTarget::SameTile))
        );
        assert_eq!(
            check_move(&board, &unit, &rich, HexCoord::new(7, 0)),
            Err(EngineError::InvalidCoordinate { row: 7, col: 0 })
        );

        unit.has_acted = true;
        assert_eq!(
            check_move(&board, &unit, &rich, HexCoord::new(0, 1)),
            Err(EngineError::UnitAlreadyActed(UnitId(1)))
        );

        unit.current_health = 0;
        assert_eq!(
            check_move(&board, &unit, &rich, HexCoord::new(0, 1)),
            Err(EngineError::IllegalTarget(IllegalTarget::DeadUnit))
        );
    }
}
