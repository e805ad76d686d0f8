//! Hex coordinates on an odd-row offset grid.
//!
//! Tiles are addressed by `(row, col)`. Odd rows are shifted half a hex to
//! the right, so the neighbor set depends on row parity. Distances are
//! computed in cube coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Neighbor deltas `(drow, dcol)` for tiles on even rows.
const EVEN_ROW_NEIGHBORS: [(i32, i32); 6] = [(0, -1), (0, 1), (-1, -1), (-1, 0), (1, -1), (1, 0)];

/// Neighbor deltas `(drow, dcol)` for tiles on odd rows.
const ODD_ROW_NEIGHBORS: [(i32, i32); 6] = [(0, -1), (0, 1), (-1, 0), (-1, 1), (1, 0), (1, 1)];

/// A tile coordinate in offset form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HexCoord {
    /// Row index (0 = top).
    pub row: u16,
    /// Column index (0 = left).
    pub col: u16,
}

/// Cube form of a hex coordinate. `q + r + s == 0` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cube {
    /// Column axis.
    pub q: i32,
    /// Row axis.
    pub r: i32,
    /// Derived third axis.
    pub s: i32,
}

impl HexCoord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Convert to cube coordinates: `q = col - floor(row / 2)`, `r = row`.
    #[must_use]
    pub fn to_cube(self) -> Cube {
        let r = i32::from(self.row);
        let q = i32::from(self.col) - r.div_euclid(2);
        Cube { q, r, s: -q - r }
    }

    /// Hex distance to another coordinate.
    #[must_use]
    pub fn distance(self, other: HexCoord) -> u32 {
        let a = self.to_cube();
        let b = other.to_cube();
        let sum =
            (a.q - b.q).unsigned_abs() + (a.r - b.r).unsigned_abs() + (a.s - b.s).unsigned_abs();
        sum / 2
    }

    /// Get the in-bounds neighbors on a `rows × cols` grid.
    ///
    /// Returns a fixed-size array and count to avoid heap allocation.
    /// The array contains valid coordinates in indices 0..count.
    #[must_use]
    #[inline]
    pub fn neighbors(&self, rows: u16, cols: u16) -> ([HexCoord; 6], u8) {
        let mut result = [HexCoord::new(0, 0); 6];
        let mut count = 0u8;

        let deltas = if self.row % 2 == 0 {
            &EVEN_ROW_NEIGHBORS
        } else {
            &ODD_ROW_NEIGHBORS
        };

        for &(dr, dc) in deltas {
            let (Ok(row), Ok(col)) = (
                u16::try_from(i32::from(self.row) + dr),
                u16::try_from(i32::from(self.col) + dc),
            ) else {
                continue;
            };
            if row >= rows || col >= cols {
                continue;
            }
            result[count as usize] = HexCoord::new(row, col);
            count += 1;
        }

        (result, count)
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_zero_to_self() {
        let c = HexCoord::new(3, 4);
        assert_eq!(c.distance(c), 0);
    }

    #[test]
    fn test_distance_same_row() {
        assert_eq!(HexCoord::new(2, 0).distance(HexCoord::new(2, 5)), 5);
    }

    #[test]
    fn test_distance_across_rows() {
        // (0,0) -> (2,1): cube (0,0,0) -> (0,2,-2)
        assert_eq!(HexCoord::new(0, 0).distance(HexCoord::new(2, 1)), 2);
        // (0,0) -> (1,0) is adjacent on an odd-row-shifted grid
        assert_eq!(HexCoord::new(0, 0).distance(HexCoord::new(1, 0)), 1);
        // Opposite corners of an 11x11 board
        assert_eq!(HexCoord::new(0, 0).distance(HexCoord::new(10, 10)), 15);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = HexCoord::new(1, 7);
        let b = HexCoord::new(6, 2);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn test_cube_sums_to_zero() {
        for row in 0..6 {
            for col in 0..6 {
                let cube = HexCoord::new(row, col).to_cube();
                assert_eq!(cube.q + cube.r + cube.s, 0);
            }
        }
    }

    #[test]
    fn test_neighbors_interior_even_row() {
        let coord = HexCoord::new(2, 2);
        let (adj, count) = coord.neighbors(10, 10);
        let adj = &adj[..count as usize];
        assert_eq!(count, 6);
        assert!(adj.contains(&HexCoord::new(1, 1)));
        assert!(adj.contains(&HexCoord::new(1, 2)));
        assert!(adj.contains(&HexCoord::new(3, 1)));
        assert!(adj.contains(&HexCoord::new(3, 2)));
    }

    #[test]
    fn test_neighbors_interior_odd_row() {
        let coord = HexCoord::new(3, 2);
        let (adj, count) = coord.neighbors(10, 10);
        let adj = &adj[..count as usize];
        assert_eq!(count, 6);
        assert!(adj.contains(&HexCoord::new(2, 2)));
        assert!(adj.contains(&HexCoord::new(2, 3)));
        assert!(adj.contains(&HexCoord::new(4, 2)));
        assert!(adj.contains(&HexCoord::new(4, 3)));
    }

    #[test]
    fn test_neighbors_are_distance_one() {
        for row in 0..8 {
            for col in 0..8 {
                let coord = HexCoord::new(row, col);
                let (adj, count) = coord.neighbors(8, 8);
                for n in &adj[..count as usize] {
                    assert_eq!(coord.distance(*n), 1, "{coord} -> {n}");
                }
            }
        }
    }

    #[test]
    fn test_neighbors_corner() {
        let (adj, count) = HexCoord::new(0, 0).neighbors(10, 10);
        let adj = &adj[..count as usize];
        assert_eq!(count, 2);
        assert!(adj.contains(&HexCoord::new(0, 1)));
        assert!(adj.contains(&HexCoord::new(1, 0)));
    }
}
