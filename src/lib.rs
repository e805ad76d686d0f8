// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Hexfront: a hex-grid strategy game engine.
//!
//! Two factions contest a hexagonal board of resource-producing tiles,
//! buy and move units, and fight when both sides end up on the same tile,
//! over a half-monthly campaign calendar running from March 1935.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Presentation (CLI, renderers)     │
//! ├─────────────────────────────────────┤
//! │   GameEngine: commands + snapshot   │
//! ├─────────────────────────────────────┤
//! │   Rules: board, economy, movement,  │
//! │   combat, clock                     │
//! └─────────────────────────────────────┘
//! ```
//!
//! The engine is deterministic for a given seed. All randomness comes from
//! the generator handed to [`GameEngine::with_rng`].
//!
//! ```
//! use hexfront::{EngineConfig, Faction, GameEngine, HexCoord, UnitKind};
//!
//! let mut engine = GameEngine::seeded(EngineConfig::default(), 7).unwrap();
//! let id = engine
//!     .purchase_unit(UnitKind::LightInfantry, Faction::A, HexCoord::new(0, 0))
//!     .unwrap();
//! assert_eq!(engine.unit(id).unwrap().location, HexCoord::new(0, 0));
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod snapshot;

pub use config::EngineConfig;
pub use error::{ConfigError, EngineError, EngineResult, IllegalTarget};
pub use snapshot::GameSnapshot;

// Re-export key game types at crate root for convenience
pub use game::{
    Board, Clock, Command, CommandOutcome, Faction, GameEngine, HexCoord, MoveOutcome, Nation,
    Terrain, Tile, TurnOutcome, Unit, UnitId, UnitKind,
};
