//! Ottomap is a coordinate engine for plotting hand-typed turn reports onto a
//! hex map. Reports name hexes in a human-friendly grid notation (`"AB 1205"`);
//! this crate converts that notation into a flat map coordinate space, does
//! all movement math there, and converts the results back.
//!
//! ```
//! use ottomap::{Direction, GridCoordinate};
//!
//! let start: GridCoordinate = "AA 3010".parse().unwrap();
//! let next = start.to_map_coordinate().step(Direction::NorthEast).unwrap();
//! let end = GridCoordinate::from_map_coordinate(next).unwrap();
//! assert_eq!(end.to_string(), "AB 0110");
//! ```
//!
//! See the [hex] module for details on the coordinate systems, and [Plotter]
//! for plotting whole reports.

mod config;
mod error;
pub mod hex;
mod report;
mod util;

pub use crate::{
    config::PlotConfig,
    error::CoordError,
    hex::{
        group_by_tile, Direction, GridCoordinate, MapCoordinate, MapVector,
        TileGroups, TileId, VectorTable, EVEN_COLUMN_DELTA, ODD_COLUMN_DELTA,
    },
    report::{Plot, PlotError, Plotter, ReportLine, Track},
};
