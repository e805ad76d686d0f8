//! Board and tile types.

use serde::{Deserialize, Serialize};

use crate::game::{Faction, HexCoord, UnitId};

/// Terrain class of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    /// Ordinary land.
    Plain,
    /// High-value objective.
    Strategic,
    /// Impassable water.
    Water,
}

impl Terrain {
    /// Resources a tile of this terrain yields per collection.
    #[must_use]
    pub const fn resource_value(self) -> u32 {
        match self {
            Terrain::Plain => 2,
            Terrain::Strategic => 4,
            Terrain::Water => 0,
        }
    }

    /// Check if units can enter this terrain.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Terrain::Water)
    }
}

/// A single hex on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Position of this tile.
    pub coord: HexCoord,
    /// Terrain class.
    pub terrain: Terrain,
    /// Controlling side, if any.
    pub owner: Option<Faction>,
    /// Units on this tile, in arrival order.
    pub occupants: Vec<UnitId>,
}

impl Tile {
    /// Create an unowned, empty plain tile.
    #[must_use]
    pub const fn plain(coord: HexCoord) -> Self {
        Self {
            coord,
            terrain: Terrain::Plain,
            owner: None,
            occupants: Vec::new(),
        }
    }

    /// Resource yield, derived from terrain.
    #[must_use]
    pub const fn resource_value(&self) -> u32 {
        self.terrain.resource_value()
    }

    /// Whether this tile is a strategic objective.
    #[must_use]
    pub fn is_strategic(&self) -> bool {
        self.terrain == Terrain::Strategic
    }

    /// Whether this tile is water.
    #[must_use]
    pub fn is_water(&self) -> bool {
        self.terrain == Terrain::Water
    }
}

/// The game board: a fixed `rows × cols` grid of hexes.
#[derive(Debug, Clone)]
pub struct Board {
    /// Number of rows.
    rows: u16,
    /// Number of columns.
    cols: u16,
    /// Tiles stored in row-major order.
    tiles: Vec<Tile>,
}

impl Board {
    /// Create a board of plain tiles.
    ///
    /// Returns `None` if rows or cols is zero.
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        Some(Self::at_least(rows, cols))
    }

    /// Create a board of plain tiles, raising each edge to at least one tile.
    #[must_use]
    pub fn at_least(rows: u16, cols: u16) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);

        let tiles = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Tile::plain(HexCoord::new(row, col))))
            .collect();

        Self { rows, cols, tiles }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> u16 {
        self.cols
    }

    /// Total number of hexes.
    #[must_use]
    pub fn hex_count(&self) -> usize {
        self.tiles.len()
    }

    /// All tiles in row-major order.
    #[must_use]
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Check if a coordinate is within the board bounds.
    #[must_use]
    pub const fn in_bounds(&self, coord: HexCoord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Convert a coordinate to an index into the tiles array.
    #[must_use]
    fn index_of(&self, coord: HexCoord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(usize::from(coord.row) * usize::from(self.cols) + usize::from(coord.col))
        } else {
            None
        }
    }

    /// Coordinate of the tile at a row-major index.
    #[must_use]
    pub fn coord_at(&self, index: usize) -> Option<HexCoord> {
        self.tiles.get(index).map(|t| t.coord)
    }

    /// Get the tile at the given coordinate.
    #[must_use]
    pub fn get(&self, coord: HexCoord) -> Option<&Tile> {
        self.index_of(coord).map(|idx| &self.tiles[idx])
    }

    /// Get a mutable reference to the tile at the given coordinate.
    #[must_use]
    pub fn get_mut(&mut self, coord: HexCoord) -> Option<&mut Tile> {
        self.index_of(coord).map(|idx| &mut self.tiles[idx])
    }

    /// In-bounds neighbors of a coordinate.
    #[must_use]
    pub fn neighbors(&self, coord: HexCoord) -> Vec<HexCoord> {
        let (adj, count) = coord.neighbors(self.rows, self.cols);
        adj[..count as usize].to_vec()
    }

    /// The two starting corners: `(0, 0)` and the last tile of the last row.
    #[must_use]
    pub const fn corners(&self) -> [HexCoord; 2] {
        [
            HexCoord::new(0, 0),
            HexCoord::new(self.rows - 1, self.cols - 1),
        ]
    }

    /// The starting corner of a side.
    #[must_use]
    pub const fn corner_of(&self, faction: Faction) -> HexCoord {
        self.corners()[faction.index()]
    }

    /// Get all tiles owned by a side.
    pub fn tiles_owned_by(&self, faction: Faction) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(move |tile| tile.owner == Some(faction))
    }

    /// Sum of resource yield over a side's tiles.
    #[must_use]
    pub fn income(&self, faction: Faction) -> u32 {
        self.tiles_owned_by(faction).map(Tile::resource_value).sum()
    }

    /// Count tiles of the given terrain.
    #[must_use]
    pub fn count_terrain(&self, terrain: Terrain) -> usize {
        self.tiles.iter().filter(|t| t.terrain == terrain).count()
    }
}
