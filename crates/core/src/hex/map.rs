use crate::{hex::VectorTable, CoordError, Direction, MapVector};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::cmp;

/// A position in map space: the single, unbounded (column, row) plane that
/// all movement math happens in. The origin is the top-left hex of tile `AA`,
/// columns grow to the right and rows grow downward. Odd columns are shifted
/// half a hex down relative to even columns.
///
/// Every pair of integers is a valid hex, so there is no validation here. Map
/// coordinates can go negative or beyond the edge of the lettered tiles;
/// they'll just fail to convert back into a
/// [GridCoordinate](crate::GridCoordinate).
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.column", "self.row")]
pub struct MapCoordinate {
    pub column: i32,
    pub row: i32,
}

impl MapCoordinate {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Get the hex one step away in the given direction. The step vector
    /// depends on the parity of this coordinate's column. Fails for
    /// [Direction::Unknown], and with [CoordError::TileOutOfRange] (naming
    /// this coordinate) if the step would leave the `i32` plane.
    pub fn step(self, direction: Direction) -> Result<Self, CoordError> {
        let delta = VectorTable::for_column(self.column).get(direction)?;
        self.translate(delta).ok_or(CoordError::TileOutOfRange {
            column: self.column,
            row: self.row,
        })
    }

    /// Apply a vector to this coordinate, or `None` if either component
    /// overflows
    pub fn translate(self, vector: MapVector) -> Option<Self> {
        Some(Self::new(
            self.column.checked_add(vector.column)?,
            self.row.checked_add(vector.row)?,
        ))
    }

    /// Follow a sequence of moves from this coordinate. The returned list
    /// holds every hex visited, starting with this one, so it always has
    /// `moves.len() + 1` entries.
    pub fn walk(
        self,
        moves: impl IntoIterator<Item = Direction>,
    ) -> Result<Vec<Self>, CoordError> {
        let moves = moves.into_iter();
        let mut path = Vec::with_capacity(moves.size_hint().0 + 1);
        let mut current = self;
        path.push(current);
        for direction in moves {
            current = current.step(direction)?;
            path.push(current);
        }
        Ok(path)
    }

    /// Get an iterator of all the hexes directly adjacent to this one,
    /// clockwise from North. Yields 6 values, except on the very edge of the
    /// `i32` plane where some neighbors can't be represented.
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        let table = VectorTable::for_column(self.column);
        table.iter().filter_map(move |(_, delta)| self.translate(delta))
    }

    /// Number of single-hex steps it takes to get from here to `other`. 0 if
    /// the coordinates are equal, 1 if they are adjacent, etc.
    pub fn distance_to(self, other: Self) -> u64 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        // Cube components reach ~1.5x the i32 range, so work in i64
        let (x1, y1, z1) = self.to_cube();
        let (x2, y2, z2) = other.to_cube();
        cmp::max(
            (x1 - x2).unsigned_abs(),
            cmp::max((y1 - y2).unsigned_abs(), (z1 - z2).unsigned_abs()),
        )
    }

    pub fn is_adjacent(self, other: Self) -> bool {
        self.distance_to(other) == 1
    }

    /// Convert to cube coordinates (x + y + z = 0), where distance math is
    /// trivial. Columns map straight onto `x`; each row is skewed by how far
    /// its column has shifted down relative to column 0.
    fn to_cube(self) -> (i64, i64, i64) {
        let column = i64::from(self.column);
        let x = column;
        let z = i64::from(self.row) - (column - column.rem_euclid(2)) / 2;
        (x, -x - z, z)
    }
}
