use crate::{CoordError, MapCoordinate};
use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};
use std::{
    convert::TryFrom,
    fmt::{self, Display},
    str::FromStr,
};

/// The human-facing location notation used in turn reports, e.g. `"AB 1205"`.
///
/// The map is split into a 26x26 grid of tiles (sheets), each
/// [Self::TILE_WIDTH] hexes wide and [Self::TILE_HEIGHT] hexes tall. A tile is
/// named by two letters: the first picks the tile row, the second the tile
/// column. The 4 digits that follow are the 1-based column and row of the hex
/// within that tile.
///
/// Reports that don't know (or don't reveal) their tile use `##` in place of
/// the letters. That sentinel form is kept distinct so it formats back the way
/// it was written, but in map space it's treated as tile `AA`.
///
/// All fields are stored 0-based and are guaranteed to be in range, so every
/// value of this type formats to a valid grid string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridCoordinate {
    tile_row: u8,
    tile_column: u8,
    column: u8,
    row: u8,
    sentinel: bool,
}

impl GridCoordinate {
    /// Number of tiles along each side of the map. One per letter.
    pub const TILES: u8 = 26;
    /// Width of a single tile, in hexes
    pub const TILE_WIDTH: u8 = 30;
    /// Height of a single tile, in hexes
    pub const TILE_HEIGHT: u8 = 21;

    /// The two characters that stand in for the tile letters when the tile is
    /// unspecified
    const SENTINEL_TILE: &'static str = "##";

    /// Construct a coordinate from 0-based components, validating each one.
    pub fn new(
        tile_row: u8,
        tile_column: u8,
        column: u8,
        row: u8,
    ) -> Result<Self, CoordError> {
        if tile_row >= Self::TILES || tile_column >= Self::TILES {
            return Err(CoordError::TileOutOfRange {
                column: i32::from(tile_column) * i32::from(Self::TILE_WIDTH)
                    + i32::from(column),
                row: i32::from(tile_row) * i32::from(Self::TILE_HEIGHT)
                    + i32::from(row),
            });
        }
        Self::check_position(column, row)?;
        Ok(Self {
            tile_row,
            tile_column,
            column,
            row,
            sentinel: false,
        })
    }

    /// Construct a coordinate on the unspecified (`##`) tile, from 0-based
    /// column and row.
    pub fn sentinel(column: u8, row: u8) -> Result<Self, CoordError> {
        Self::check_position(column, row)?;
        Ok(Self {
            tile_row: 0,
            tile_column: 0,
            column,
            row,
            sentinel: true,
        })
    }

    fn check_position(column: u8, row: u8) -> Result<(), CoordError> {
        if column >= Self::TILE_WIDTH {
            Err(CoordError::InvalidColumn(format!(
                "{:02}",
                u16::from(column) + 1
            )))
        } else if row >= Self::TILE_HEIGHT {
            Err(CoordError::InvalidRow(format!("{:02}", u16::from(row) + 1)))
        } else {
            Ok(())
        }
    }

    /// Parse the textual form, `"TT CCRR"`. `TT` is either two uppercase
    /// letters or `##`, `CC` is `01`-`30` and `RR` is `01`-`21`. Anything else
    /// fails, including lowercase letters and missing zero-padding.
    pub fn parse(s: &str) -> Result<Self, CoordError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 7 || chars[2] != ' ' {
            return Err(CoordError::MalformedGridString(s.into()));
        }

        // Hold onto the position errors until the tile has been checked, so
        // a bad tile is always reported first
        let (column_digits, row_digits) = (&chars[3..5], &chars[5..7]);
        let column = parse_number(column_digits, Self::TILE_WIDTH)
            .ok_or_else(|| {
                CoordError::InvalidColumn(column_digits.iter().collect())
            });
        let row = parse_number(row_digits, Self::TILE_HEIGHT).ok_or_else(|| {
            CoordError::InvalidRow(row_digits.iter().collect())
        });

        if chars[..2].iter().collect::<String>() == Self::SENTINEL_TILE {
            Self::sentinel(column?, row?)
        } else {
            let tile_row = parse_tile_letter(chars[0])?;
            let tile_column = parse_tile_letter(chars[1])?;
            Self::new(tile_row, tile_column, column?, row?)
        }
    }

    /// 0-based tile row, i.e. the first tile letter minus `A`
    pub fn tile_row(&self) -> u8 {
        self.tile_row
    }

    /// 0-based tile column, i.e. the second tile letter minus `A`
    pub fn tile_column(&self) -> u8 {
        self.tile_column
    }

    /// 0-based column within the tile
    pub fn column(&self) -> u8 {
        self.column
    }

    /// 0-based row within the tile
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Was this written with `##` instead of tile letters?
    pub fn is_sentinel(&self) -> bool {
        self.sentinel
    }

    /// The tile (sheet) that this coordinate falls on
    pub fn tile_id(&self) -> TileId {
        if self.sentinel {
            TileId::Sentinel
        } else {
            TileId::Letters {
                row: self.tile_row,
                column: self.tile_column,
            }
        }
    }

    /// The two-character tile prefix of the textual form, e.g. `"AZ"` or
    /// `"##"`
    pub fn tile_identifier(&self) -> String {
        self.tile_id().to_string()
    }

    /// Convert to map space. Never fails, since every grid coordinate is
    /// on the map.
    pub fn to_map_coordinate(&self) -> MapCoordinate {
        MapCoordinate::new(
            i32::from(self.tile_column) * i32::from(Self::TILE_WIDTH)
                + i32::from(self.column),
            i32::from(self.tile_row) * i32::from(Self::TILE_HEIGHT)
                + i32::from(self.row),
        )
    }

    /// Convert a map coordinate back into grid notation. Fails if the
    /// coordinate lands outside of the lettered tiles (negative, or past
    /// `ZZ`). The result is never the sentinel form.
    pub fn from_map_coordinate(
        coord: MapCoordinate,
    ) -> Result<Self, CoordError> {
        let width = i32::from(Self::TILE_WIDTH);
        let height = i32::from(Self::TILE_HEIGHT);
        let out_of_range = || CoordError::TileOutOfRange {
            column: coord.column,
            row: coord.row,
        };

        // Floored division/modulo keeps the in-tile position non-negative,
        // so the only thing left to check is the tile index
        let tile_row = u8::try_from(coord.row.div_euclid(height))
            .map_err(|_| out_of_range())?;
        let tile_column = u8::try_from(coord.column.div_euclid(width))
            .map_err(|_| out_of_range())?;
        if tile_row >= Self::TILES || tile_column >= Self::TILES {
            return Err(out_of_range());
        }

        // These casts can't truncate, the remainders are < tile dimensions
        Self::new(
            tile_row,
            tile_column,
            coord.column.rem_euclid(width) as u8,
            coord.row.rem_euclid(height) as u8,
        )
    }
}

/// Parse a 2-digit, 1-based number from `01` up to `max`, returning it 0-based
fn parse_number(digits: &[char], max: u8) -> Option<u8> {
    let mut value: u8 = 0;
    for c in digits {
        value = value * 10 + c.to_digit(10)? as u8;
    }
    if (1..=max).contains(&value) {
        Some(value - 1)
    } else {
        None
    }
}

fn parse_tile_letter(c: char) -> Result<u8, CoordError> {
    if c.is_ascii_uppercase() {
        Ok(c as u8 - b'A')
    } else {
        Err(CoordError::InvalidTileLetter(c))
    }
}

impl Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}{:02}",
            self.tile_id(),
            self.column + 1,
            self.row + 1
        )
    }
}

impl FromStr for GridCoordinate {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<GridCoordinate> for MapCoordinate {
    fn from(grid: GridCoordinate) -> Self {
        grid.to_map_coordinate()
    }
}

impl TryFrom<MapCoordinate> for GridCoordinate {
    type Error = CoordError;

    fn try_from(coord: MapCoordinate) -> Result<Self, Self::Error> {
        Self::from_map_coordinate(coord)
    }
}

// Grid coordinates are always serialized in their textual form, since that's
// what every consumer (and every human) expects to see
impl Serialize for GridCoordinate {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GridCoordinate {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        deserializer.deserialize_str(GridCoordinateVisitor)
    }
}

struct GridCoordinateVisitor;

impl<'de> Visitor<'de> for GridCoordinateVisitor {
    type Value = GridCoordinate;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a grid coordinate string such as \"AB 1205\"")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        GridCoordinate::parse(value).map_err(E::custom)
    }
}

/// Identifies a single tile (sheet) of the map, independent of any position
/// within it. The [Display] form is the two-character prefix of a grid
/// string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileId {
    /// The `##` tile
    Sentinel,
    /// A lettered tile, with 0-based row and column
    Letters { row: u8, column: u8 },
}

impl Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sentinel => f.write_str(GridCoordinate::SENTINEL_TILE),
            Self::Letters { row, column } => {
                write!(f, "{}{}", (b'A' + row) as char, (b'A' + column) as char)
            }
        }
    }
}

impl Serialize for TileId {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
