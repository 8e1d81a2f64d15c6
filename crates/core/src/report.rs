//! Plotting of report lines: parse a starting location and a list of moves,
//! follow the moves in map space, and hand back the path in grid notation.
//!
//! The line format is deliberately minimal:
//!
//! ```text
//! AB 1205 N-NE-NE SE
//! ## 0101
//! ```
//!
//! A grid coordinate, then any number of direction codes separated by `-`
//! and/or whitespace. Blank lines are skipped.

use crate::{
    group_by_tile, timed, CoordError, Direction, GridCoordinate, PlotConfig,
    TileGroups,
};
use anyhow::Context;
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use log::{debug, info, warn};
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

/// Why a single report line couldn't be plotted
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlotError {
    #[error(transparent)]
    Coord(#[from] CoordError),

    #[error("line has {moves} moves, the limit is {max}")]
    TooManyMoves { moves: usize, max: usize },
}

/// A single parsed report line: where the unit started, and the moves it made
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportLine {
    pub start: GridCoordinate,
    pub moves: Vec<Direction>,
}

impl FromStr for ReportLine {
    type Err = CoordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        // The location has a space in it, so we can't just split on
        // whitespace. It's always the first 7 characters though.
        let split = line
            .char_indices()
            .nth(7)
            .map(|(index, _)| index)
            .unwrap_or_else(|| line.len());
        let (start, rest) = line.split_at(split);
        let start = GridCoordinate::parse(start)?;

        // Anything glued onto the end of the location is a malformed location,
        // not a move
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return Err(CoordError::MalformedGridString(line.into()));
        }

        let moves = rest
            .split(|c: char| c == '-' || c.is_whitespace())
            .filter(|code| !code.is_empty())
            .map(Direction::parse)
            .collect::<Result<_, _>>()?;
        Ok(Self { start, moves })
    }
}

/// The path a unit took, as plotted from one report line
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Track {
    pub start: GridCoordinate,
    pub end: GridCoordinate,
    /// Every hex visited, including the start and end
    pub path: Vec<GridCoordinate>,
}

impl Track {
    /// Number of moves made, which is one less than the number of hexes
    /// visited
    pub fn moves(&self) -> usize {
        self.path.len() - 1
    }
}

/// The result of plotting a full report
#[derive(Clone, Debug, Serialize)]
pub struct Plot {
    /// One track per valid report line, in input order
    pub tracks: Vec<Track>,
    /// Number of invalid lines that were skipped. Always 0 in strict mode.
    pub skipped: usize,
    /// Every distinct hex visited by any track, grouped by tile
    pub tiles: TileGroups,
}

/// Plots reports onto the map. Construct one with a config, then feed it
/// report text.
#[derive(Clone, Debug)]
pub struct Plotter {
    config: PlotConfig,
}

impl Plotter {
    /// Create a new plotter. Returns an error if the config is invalid.
    pub fn new(config: PlotConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid plot config")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Plot a single report line. The start is converted to map space, every
    /// move is applied there, and each visited hex is converted back to grid
    /// notation. Fails if the line can't be parsed, has too many moves, or
    /// wanders off the lettered tiles.
    pub fn plot_line(&self, line: &str) -> Result<Track, PlotError> {
        let ReportLine { start, moves } = line.parse()?;
        if moves.len() > self.config.max_moves {
            return Err(PlotError::TooManyMoves {
                moves: moves.len(),
                max: self.config.max_moves,
            });
        }

        let mut path = start
            .to_map_coordinate()
            .walk(moves)?
            .into_iter()
            .map(GridCoordinate::from_map_coordinate)
            .collect::<Result<Vec<_>, _>>()?;
        // Keep the start exactly as written, so a sentinel stays a sentinel
        path[0] = start;
        let end = path[path.len() - 1];

        debug!("Plotted {} -> {} ({} moves)", start, end, path.len() - 1);
        Ok(Track { start, end, path })
    }

    /// Plot every line of a report. In strict mode the first bad line aborts
    /// with an error naming it; otherwise bad lines are logged and skipped.
    pub fn plot(&self, report: &str) -> anyhow::Result<Plot> {
        let plot = timed!("Plotting report", log::Level::Info, {
            let mut tracks = Vec::new();
            let mut skipped = 0;
            for (index, line) in report.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                match self.plot_line(line) {
                    Ok(track) => tracks.push(track),
                    Err(err) if self.config.strict => {
                        return Err(err).with_context(|| {
                            format!("error on line {}: {:?}", index + 1, line)
                        });
                    }
                    Err(err) => {
                        warn!(
                            "Skipping line {} ({:?}): {}",
                            index + 1,
                            line,
                            err
                        );
                        skipped += 1;
                    }
                }
            }

            let visited: IndexSet<GridCoordinate, FnvBuildHasher> = tracks
                .iter()
                .flat_map(|track| track.path.iter().copied())
                .collect();
            Plot {
                tracks,
                skipped,
                tiles: group_by_tile(visited),
            }
        });

        info!(
            "Plotted {} tracks across {} tiles ({} lines skipped)",
            plot.tracks.len(),
            plot.tiles.len(),
            plot.skipped
        );
        Ok(plot)
    }
}
