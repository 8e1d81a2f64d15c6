//! This module holds the hex grid coordinate systems and the math for moving
//! around in them.
//!
//! ## Coordinate Systems
//!
//! There are two different ways to name a hex:
//!
//! ### Grid Coordinates
//!
//! Grid coordinates are what humans type into turn reports, e.g. `"AB 1205"`.
//! The map is cut into a 26x26 set of tiles (sheets), each 30 hexes wide and
//! 21 hexes tall, with no gaps between tiles. The two letters name the tile
//! (row first, then column) and the digits give the 1-based column and row of
//! the hex within the tile. See [GridCoordinate].
//!
//! When a report doesn't know which tile it's on, the letters are replaced
//! with `##`. This is treated as the origin tile (`AA`) for all math, but
//! keeps its own identity so it can be written back out unchanged.
//!
//! ### Map Coordinates
//!
//! Map coordinates are a single unbounded `(column, row)` plane that ignores
//! tiles entirely. The origin `(0, 0)` is the top-left hex of tile `AA`,
//! columns grow to the right and rows grow down. **All arithmetic (movement,
//! distance, adjacency) happens in map space**, and results are converted
//! back to grid notation for display. See [MapCoordinate].
//!
//! Tile `(tr, tc)` covers map rows `[tr*21, tr*21+21)` and map columns
//! `[tc*30, tc*30+30)`, so the conversion is a bijection between lettered
//! grid coordinates and the map coordinates that fall on a lettered tile.
//!
//! ## Hex Layout
//!
//! Hexes are flat-topped and laid out in columns. Every odd column is pushed
//! down by half a hex relative to its even neighbors:
//!
//! ```text
//!  __    __
//! /  \__/  \__
//! \__/  \__/  \
//! /  \__/  \__/
//! \__/  \__/  \
//!  0  1  2  3
//! ```
//!
//! Moving north or south is always a change of one row. The four diagonal
//! directions also change the column, and whether the row changes depends on
//! which way the column is shifted. Moving northeast out of an even column
//! goes up a row; moving northeast out of an odd column stays in the same
//! row. That's why there are two vector tables, [EVEN_COLUMN_DELTA] and
//! [ODD_COLUMN_DELTA], picked by the parity of the starting column. Since a
//! diagonal step always flips column parity, the two tables must be exact
//! mirrors of each other for a step and its opposite to cancel out.

mod direction;
mod grid;
mod map;
mod tile;
mod vector;

pub use self::{direction::*, grid::*, map::*, tile::*, vector::*};
