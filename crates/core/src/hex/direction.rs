use crate::CoordError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The 6 directions in which hexes line up side-to-side, plus a sentinel for
/// movement that a report couldn't pin down. Hexes in our grid are flat-topped,
/// so there is no east or west; moving sideways always means drifting half a
/// hex north or south as well.
///
/// Each direction is written in reports as a short code (`N`, `NE`, ...).
/// [Direction::Unknown] is written as `?`. The [Display] impl and
/// [Direction::parse] convert to and from those codes.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum Direction {
    #[strum(serialize = "?")]
    #[serde(rename = "?")]
    Unknown,
    #[strum(serialize = "N")]
    #[serde(rename = "N")]
    North,
    #[strum(serialize = "NE")]
    #[serde(rename = "NE")]
    NorthEast,
    #[strum(serialize = "SE")]
    #[serde(rename = "SE")]
    SouthEast,
    #[strum(serialize = "S")]
    #[serde(rename = "S")]
    South,
    #[strum(serialize = "SW")]
    #[serde(rename = "SW")]
    SouthWest,
    #[strum(serialize = "NW")]
    #[serde(rename = "NW")]
    NorthWest,
}

impl Direction {
    /// Every real direction, in clockwise order starting at North. Does
    /// **not** include [Direction::Unknown].
    pub const ALL: [Self; 6] = [
        Self::North,
        Self::NorthEast,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::NorthWest,
    ];

    /// Parse a direction from its short code. Codes are case-sensitive, and
    /// `?` is accepted as [Direction::Unknown].
    pub fn parse(code: &str) -> Result<Self, CoordError> {
        code.parse()
            .map_err(|_| CoordError::InvalidDirectionCode(code.into()))
    }

    /// The short code for this direction. Same as the [Display] output, but
    /// without allocating.
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Index of this direction within [Self::ALL], or `None` for
    /// [Direction::Unknown]
    pub fn clockwise_index(self) -> Option<usize> {
        Self::ALL.iter().position(|dir| *dir == self)
    }

    /// Get the direction that points directly opposite this one. Unknown stays
    /// unknown.
    pub fn opposite(self) -> Self {
        match self.clockwise_index() {
            // There are always an even number of directions, so the opposite
            // is exactly half way around the compass
            Some(index) => {
                Self::ALL[(index + Self::ALL.len() / 2) % Self::ALL.len()]
            }
            None => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse() {
        assert_eq!(Direction::parse("?").unwrap(), Direction::Unknown);
        assert_eq!(Direction::parse("N").unwrap(), Direction::North);
        assert_eq!(Direction::parse("NE").unwrap(), Direction::NorthEast);
        assert_eq!(Direction::parse("SE").unwrap(), Direction::SouthEast);
        assert_eq!(Direction::parse("S").unwrap(), Direction::South);
        assert_eq!(Direction::parse("SW").unwrap(), Direction::SouthWest);
        assert_eq!(Direction::parse("NW").unwrap(), Direction::NorthWest);
    }

    #[test]
    fn test_parse_invalid() {
        for code in &["", "E", "W", "n", "ne", "NNE", " N", "N "] {
            assert_eq!(
                Direction::parse(code),
                Err(CoordError::InvalidDirectionCode(code.to_string())),
                "code {:?} should be rejected",
                code
            );
        }
    }

    #[test]
    fn test_format_round_trip() {
        for dir in Direction::iter() {
            assert_eq!(Direction::parse(&dir.to_string()).unwrap(), dir);
            assert_eq!(dir.code(), dir.to_string());
        }
        assert_eq!(Direction::Unknown.to_string(), "?");
        assert_eq!(Direction::NorthWest.to_string(), "NW");
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::South.opposite(), Direction::North);
        assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
        assert_eq!(Direction::SouthWest.opposite(), Direction::NorthEast);
        assert_eq!(Direction::SouthEast.opposite(), Direction::NorthWest);
        assert_eq!(Direction::NorthWest.opposite(), Direction::SouthEast);
        assert_eq!(Direction::Unknown.opposite(), Direction::Unknown);
        for dir in Direction::iter() {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_serde() {
        assert_eq!(
            serde_json::to_string(&Direction::NorthEast).unwrap(),
            "\"NE\""
        );
        assert_eq!(
            serde_json::from_str::<Direction>("\"?\"").unwrap(),
            Direction::Unknown
        );
    }
}
