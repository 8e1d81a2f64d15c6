use crate::{GridCoordinate, TileId};
use fnv::FnvBuildHasher;
use indexmap::IndexMap;

/// Grid coordinates grouped by the tile they fall on. This is an ORDERED map:
/// tiles appear in the order they were first seen, and coordinates within a
/// tile keep their input order.
pub type TileGroups = IndexMap<TileId, Vec<GridCoordinate>, FnvBuildHasher>;

/// Group a list of coordinates by tile. Duplicate coordinates are kept as-is;
/// dedupe them first if you only care about distinct hexes.
pub fn group_by_tile(
    coords: impl IntoIterator<Item = GridCoordinate>,
) -> TileGroups {
    let mut groups = TileGroups::default();
    for coord in coords {
        groups.entry(coord.tile_id()).or_default().push(coord);
    }
    groups
}
