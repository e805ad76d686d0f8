//! Game engine: the single owner of board, units, treasuries and clock.
//!
//! Callers drive the engine through its commands and read state back
//! through the accessors or a [`crate::GameSnapshot`]. A rejected command
//! leaves every part of the state untouched.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult, IllegalTarget};
use crate::game::{
    Board, BoardParams, Clock, CombatReport, Command, CommandOutcome, Faction, FactionState,
    HexCoord, Nation, Roster, STARTING_RESOURCES, Tile, TurnOutcome, Unit, UnitId, UnitKind,
    check_move, check_purchase, collect_resources, generate_board, movement_cost, purchase,
    resolve_combat,
};

/// Result of a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Unit that moved.
    pub unit: UnitId,
    /// Tile it left.
    pub from: HexCoord,
    /// Tile it entered.
    pub to: HexCoord,
    /// Resources paid.
    pub cost: u32,
    /// Fight triggered on arrival, if both sides ended up on the tile.
    pub combat: Option<CombatReport>,
}

/// A running game.
///
/// The random source is a type parameter so tests can inject a seeded or
/// scripted generator.
#[derive(Debug, Clone)]
pub struct GameEngine<R: Rng = ChaCha8Rng> {
    config: EngineConfig,
    board: Board,
    roster: Roster,
    factions: [FactionState; 2],
    clock: Clock,
    selected: Option<UnitId>,
    rng: R,
}

impl GameEngine<ChaCha8Rng> {
    /// Start a game from a configuration.
    ///
    /// Uses `config.seed` when set, otherwise draws a seed from entropy and
    /// logs it so the game can be replayed.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateNation` if both sides share a nation.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        let seed = config.seed.unwrap_or_else(|| {
            let seed = rand::random::<u64>();
            info!(seed, "drew random seed");
            seed
        });
        Self::seeded(config, seed)
    }

    /// Start a game with a fixed seed, overriding `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateNation` if both sides share a nation.
    pub fn seeded(config: EngineConfig, seed: u64) -> EngineResult<Self> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Start a game drawing randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateNation` if both sides share a nation.
    pub fn with_rng(config: EngineConfig, mut rng: R) -> EngineResult<Self> {
        config.validate()?;

        let clock = Clock::with_rng(&mut rng);
        let [a, b] = config.nations;
        let mut engine = Self {
            config,
            board: Board::at_least(1, 1),
            roster: Roster::new(),
            factions: [FactionState::new(a), FactionState::new(b)],
            clock,
            selected: None,
            rng,
        };
        engine.generate_board(config.board_params());
        Ok(engine)
    }

    // ==================== Board ====================

    /// Replace the board with a freshly generated one.
    ///
    /// Units are discarded, both treasuries restart from the new board's
    /// income plus the starting grant, and the selection clears. The clock
    /// keeps running.
    pub fn generate_board(&mut self, params: BoardParams) {
        let (board, roster) = generate_board(params, &mut self.rng);
        self.board = board;
        self.roster = roster;
        self.selected = None;

        for state in &mut self.factions {
            state.resources = 0;
        }
        collect_resources(&self.board, &mut self.factions);
        for state in &mut self.factions {
            state.earn(STARTING_RESOURCES);
        }

        info!(
            rows = self.board.rows(),
            cols = self.board.cols(),
            a_resources = self.factions[0].resources,
            b_resources = self.factions[1].resources,
            "new game board"
        );
    }

    /// The board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Configuration the game was started with.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Tile at a coordinate, or `None` off the board.
    #[must_use]
    pub fn tile(&self, coord: HexCoord) -> Option<&Tile> {
        self.board.get(coord)
    }

    /// Total number of hexes.
    #[must_use]
    pub fn hex_count(&self) -> usize {
        self.board.hex_count()
    }

    // ==================== Units ====================

    /// All units in play.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// A unit by id.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.roster.get(id)
    }

    /// Units on a tile, in arrival order. Empty off the board.
    #[must_use]
    pub fn occupants_of(&self, coord: HexCoord) -> Vec<&Unit> {
        self.board
            .get(coord)
            .map(|tile| tile.occupants.iter().filter_map(|id| self.roster.get(*id)).collect())
            .unwrap_or_default()
    }

    // ==================== Factions ====================

    /// Economic state of a side.
    #[must_use]
    pub const fn faction(&self, faction: Faction) -> &FactionState {
        &self.factions[faction.index()]
    }

    /// Resources a side holds.
    #[must_use]
    pub const fn resources(&self, faction: Faction) -> u32 {
        self.factions[faction.index()].resources
    }

    /// Summed strength of a side's living units.
    #[must_use]
    pub fn total_strength(&self, faction: Faction) -> u32 {
        self.roster.total_strength(faction)
    }

    /// Assign nations to both sides.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateNation` if `a == b`; nothing changes.
    pub fn set_nations(&mut self, a: Nation, b: Nation) -> EngineResult<()> {
        if a == b {
            return Err(EngineError::DuplicateNation(a));
        }
        self.factions[0].nation = a;
        self.factions[1].nation = b;
        self.config.nations = [a, b];
        Ok(())
    }

    // ==================== Economy ====================

    /// Whether a side could buy a unit of this kind right now.
    #[must_use]
    pub fn can_purchase(&self, kind: UnitKind, faction: Faction) -> bool {
        !self.clock.is_over()
            && check_purchase(kind, self.faction(faction), self.total_strength(faction)).is_ok()
    }

    /// Buy a unit onto a tile.
    ///
    /// # Errors
    ///
    /// `GameOver` once the campaign has ended, otherwise the errors of
    /// [`crate::game::purchase`].
    pub fn purchase_unit(
        &mut self,
        kind: UnitKind,
        faction: Faction,
        at: HexCoord,
    ) -> EngineResult<UnitId> {
        if self.clock.is_over() {
            return Err(EngineError::GameOver);
        }
        purchase(
            &mut self.board,
            &mut self.roster,
            &mut self.factions,
            kind,
            faction,
            at,
        )
    }

    // ==================== Movement ====================

    fn living_unit(&self, id: UnitId) -> EngineResult<&Unit> {
        self.roster
            .get(id)
            .ok_or(EngineError::IllegalTarget(IllegalTarget::UnknownUnit))
    }

    /// Cost for a unit to move to `to` from where it stands.
    ///
    /// The origin is always the unit's current tile, and the group departure
    /// penalty counts that tile's occupants. Use
    /// [`crate::game::movement_cost`] to price a move from any other tile.
    ///
    /// # Errors
    ///
    /// `IllegalTarget(UnknownUnit)` for a missing unit, `InvalidCoordinate`
    /// for off-board targets.
    pub fn movement_cost(&self, id: UnitId, to: HexCoord) -> EngineResult<u32> {
        let unit = self.living_unit(id)?;
        if !self.board.in_bounds(to) {
            return Err(EngineError::InvalidCoordinate {
                row: i32::from(to.row),
                col: i32::from(to.col),
            });
        }
        let origin_occupants = self.board.get(unit.location).map_or(1, |t| t.occupants.len());
        Ok(movement_cost(unit, unit.location, to, origin_occupants))
    }

    /// Validate a move and return what it would cost.
    ///
    /// # Errors
    ///
    /// `GameOver`, `IllegalTarget(UnknownUnit)`, or any error of
    /// [`crate::game::check_move`].
    pub fn check_move(&self, id: UnitId, to: HexCoord) -> EngineResult<u32> {
        if self.clock.is_over() {
            return Err(EngineError::GameOver);
        }
        let unit = self.living_unit(id)?;
        check_move(&self.board, unit, self.faction(unit.faction), to)
    }

    /// Whether a unit may move to `to` right now.
    #[must_use]
    pub fn can_move_unit(&self, id: UnitId, to: HexCoord) -> bool {
        self.check_move(id, to).is_ok()
    }

    /// Move a unit, resolving combat if it lands among enemies.
    ///
    /// # Errors
    ///
    /// As [`GameEngine::check_move`]; on error nothing changes.
    pub fn try_move_unit(&mut self, id: UnitId, to: HexCoord) -> EngineResult<MoveOutcome> {
        let cost = self.check_move(id, to)?;
        let unit = self.living_unit(id)?;
        let (faction, from) = (unit.faction, unit.location);

        if !self.factions[faction.index()].spend(cost) {
            return Err(EngineError::InsufficientResources {
                needed: cost,
                available: self.resources(faction),
            });
        }

        if let Some(tile) = self.board.get_mut(from) {
            tile.occupants.retain(|&occupant| occupant != id);
        }
        if let Some(tile) = self.board.get_mut(to) {
            tile.occupants.push(id);
        }
        if let Some(unit) = self.roster.get_mut(id) {
            unit.location = to;
            unit.has_acted = true;
        }

        info!(unit = %id, %faction, %from, %to, cost, "moved unit");

        let combat = resolve_combat(&mut self.board, &mut self.roster, to);
        if let (Some(report), Some(selected)) = (&combat, self.selected)
            && report.killed_unit(selected)
        {
            self.clear_selection();
        }

        Ok(MoveOutcome {
            unit: id,
            from,
            to,
            cost,
            combat,
        })
    }

    /// Move a unit, reporting only whether the move happened.
    pub fn move_unit(&mut self, id: UnitId, to: HexCoord) -> bool {
        self.try_move_unit(id, to).is_ok()
    }

    // ==================== Clock ====================

    /// The campaign clock.
    #[must_use]
    pub const fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Human-readable label of the current turn.
    #[must_use]
    pub fn turn_string(&self) -> String {
        self.clock.turn_string()
    }

    /// Side holding the initiative.
    #[must_use]
    pub const fn initiative(&self) -> Faction {
        self.clock.initiative
    }

    /// Whether the campaign has ended.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.clock.is_over()
    }

    /// Advance one half-month turn.
    ///
    /// Every unit may act again and both sides collect income. Returns
    /// [`TurnOutcome::GameOver`] without changing anything once the
    /// campaign is over.
    pub fn advance_turn(&mut self) -> TurnOutcome {
        let outcome = self.clock.advance();
        if let TurnOutcome::Advanced(clock) = outcome {
            for unit in self.roster.iter_mut() {
                unit.has_acted = false;
            }
            let income = collect_resources(&self.board, &mut self.factions);
            info!(
                turn = clock.total_turns,
                date = %clock,
                initiative = %clock.initiative,
                income_a = income.a,
                income_b = income.b,
                "advanced turn"
            );
        }
        outcome
    }

    /// Rewind the clock to the opening turn and re-roll initiative.
    ///
    /// Board, units and treasuries are kept.
    pub fn reset_game(&mut self) {
        self.clock.reset(&mut self.rng);
        info!(initiative = %self.clock.initiative, "reset clock");
    }

    // ==================== Selection ====================

    /// Select a unit.
    ///
    /// # Errors
    ///
    /// `IllegalTarget(UnknownUnit)` if no such unit is in play.
    pub fn select_unit(&mut self, id: UnitId) -> EngineResult<()> {
        self.living_unit(id)?;
        self.selected = Some(id);
        Ok(())
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected unit, if any.
    #[must_use]
    pub fn selected_unit(&self) -> Option<&Unit> {
        self.selected.and_then(|id| self.roster.get(id))
    }

    /// Select the next unit on a tile.
    ///
    /// Picks the unit after the current selection in arrival order, wrapping
    /// to the first. An empty or off-board tile clears the selection and
    /// returns `None`.
    pub fn cycle_selection(&mut self, coord: HexCoord) -> Option<UnitId> {
        let Some((occupants, first)) = self
            .board
            .get(coord)
            .and_then(|tile| Some((&tile.occupants, *tile.occupants.first()?)))
        else {
            self.clear_selection();
            return None;
        };
        let next = self
            .selected
            .and_then(|current| occupants.iter().position(|&id| id == current))
            .and_then(|pos| occupants.get(pos + 1).copied())
            .unwrap_or(first);
        self.selected = Some(next);
        Some(next)
    }

    // ==================== Commands ====================

    /// Apply a command.
    ///
    /// # Errors
    ///
    /// The error of the underlying operation. Advancing past the end of the
    /// campaign yields `GameOver`.
    pub fn apply(&mut self, command: Command) -> EngineResult<CommandOutcome> {
        match command {
            Command::Advance => match self.advance_turn() {
                TurnOutcome::Advanced(clock) => Ok(CommandOutcome::Advanced(clock)),
                TurnOutcome::GameOver => Err(EngineError::GameOver),
            },
            Command::Purchase { kind, faction, at } => {
                self.purchase_unit(kind, faction, at).map(CommandOutcome::Purchased)
            }
            Command::Move { unit, to } => self.try_move_unit(unit, to).map(CommandOutcome::Moved),
            Command::Select { unit } => {
                self.select_unit(unit)?;
                Ok(CommandOutcome::Selected(unit))
            }
            Command::Reset => {
                self.reset_game();
                Ok(CommandOutcome::Reset(self.clock))
            }
        }
    }
}
