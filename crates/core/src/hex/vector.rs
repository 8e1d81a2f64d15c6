//! Direction vectors for moving around the map. See the parent module docs for
//! why there are two tables instead of one.

use crate::{CoordError, Direction};
use derive_more::{Display, Neg};

/// A translation within map space, in (column, row) form. Unlike directions,
/// a vector means nothing on its own: the same direction maps to different
/// vectors depending on the column it starts from.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    Neg,
)]
#[display(fmt = "<{}, {}>", "self.column", "self.row")]
pub struct MapVector {
    pub column: i32,
    pub row: i32,
}

impl MapVector {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }
}

/// A total mapping from each real [Direction] to the vector that moves one
/// hex in that direction. Entries are stored in [Direction::ALL] order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VectorTable([MapVector; 6]);

/// Deltas for a step that starts in an even column
pub const EVEN_COLUMN_DELTA: VectorTable = VectorTable([
    MapVector::new(0, -1),  // N
    MapVector::new(1, -1),  // NE
    MapVector::new(1, 0),   // SE
    MapVector::new(0, 1),   // S
    MapVector::new(-1, 0),  // SW
    MapVector::new(-1, -1), // NW
]);

/// Deltas for a step that starts in an odd column. Odd columns sit half a hex
/// lower than even ones, so every sideways step lands one row further south
/// than it would from an even column.
pub const ODD_COLUMN_DELTA: VectorTable = VectorTable([
    MapVector::new(0, -1), // N
    MapVector::new(1, 0),  // NE
    MapVector::new(1, 1),  // SE
    MapVector::new(0, 1),  // S
    MapVector::new(-1, 1), // SW
    MapVector::new(-1, 0), // NW
]);

impl VectorTable {
    /// Pick the table to use for a step out of the given column. Parity is
    /// floored, so column `-1` is odd.
    pub fn for_column(column: i32) -> &'static Self {
        if column.rem_euclid(2) == 0 {
            &EVEN_COLUMN_DELTA
        } else {
            &ODD_COLUMN_DELTA
        }
    }

    /// Get the delta for a single direction. Fails for
    /// [Direction::Unknown], since there's no way to move that way.
    pub fn get(&self, direction: Direction) -> Result<MapVector, CoordError> {
        direction
            .clockwise_index()
            .map(|index| self.0[index])
            .ok_or(CoordError::InvalidDirection)
    }

    /// Iterate over every (direction, delta) pair in the table, clockwise
    /// from North
    pub fn iter(&self) -> impl Iterator<Item = (Direction, MapVector)> + '_ {
        Direction::ALL.iter().copied().zip(self.0.iter().copied())
    }
}
