use thiserror::Error;

/// Everything that can go wrong while parsing or converting coordinates.
/// Every failure is local to the value being handled, so callers are free to
/// decide whether a bad location invalidates a single report line or a whole
/// run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoordError {
    /// Grid strings are always exactly `"TT CCRR"`: 7 characters with a
    /// space at index 2
    #[error("malformed grid coordinate {0:?}, expected \"TT CCRR\"")]
    MalformedGridString(String),

    /// A tile character that isn't `A-Z` (and isn't part of `##`)
    #[error("invalid tile letter {0:?}, expected A-Z")]
    InvalidTileLetter(char),

    #[error("invalid column {0:?}, expected 01-30")]
    InvalidColumn(String),

    #[error("invalid row {0:?}, expected 01-21")]
    InvalidRow(String),

    #[error("invalid direction code {0:?}")]
    InvalidDirectionCode(String),

    /// Movement was requested with [Direction::Unknown](crate::Direction)
    #[error("cannot move in an unknown direction")]
    InvalidDirection,

    /// The map coordinate lands on a tile that can't be named with a letter
    /// pair, or a step from it would leave the `i32` plane entirely
    #[error("map coordinate ({column}, {row}) is outside the 26x26 tile grid")]
    TileOutOfRange { column: i32, row: i32 },
}
