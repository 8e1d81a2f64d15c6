use ottomap::{CoordError, Direction, GridCoordinate, MapCoordinate};
use proptest::prelude::*;

/// Any valid lettered grid string
fn lettered_grid_string() -> impl Strategy<Value = String> {
    (b'A'..=b'Z', b'A'..=b'Z', 1u8..=30, 1u8..=21).prop_map(
        |(tile_row, tile_column, column, row)| {
            format!(
                "{}{} {:02}{:02}",
                tile_row as char, tile_column as char, column, row
            )
        },
    )
}

/// Any valid grid string, including the `##` sentinel
fn grid_string() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => lettered_grid_string(),
        1 => (1u8..=30, 1u8..=21)
            .prop_map(|(column, row)| format!("## {:02}{:02}", column, row)),
    ]
}

#[test]
fn test_example_vectors() {
    let aa: GridCoordinate = "AA 0101".parse().unwrap();
    assert_eq!(
        (aa.tile_row(), aa.tile_column(), aa.column(), aa.row()),
        (0, 0, 0, 0)
    );

    let zz: GridCoordinate = "ZZ 3021".parse().unwrap();
    assert_eq!(
        (zz.tile_row(), zz.tile_column(), zz.column(), zz.row()),
        (25, 25, 29, 20)
    );
    assert_eq!(zz.to_map_coordinate(), MapCoordinate::new(779, 545));
}

#[test]
fn test_range_rejection() {
    for s in &[
        "AA 0001", "AA 3100", "AA 0100", "AA 0122", "AA0101", "aB 1230",
        "Ab 1230",
    ] {
        assert!(
            GridCoordinate::parse(s).is_err(),
            "{:?} should have been rejected",
            s
        );
    }
    assert!(matches!(
        GridCoordinate::parse("AA0101"),
        Err(CoordError::MalformedGridString(_))
    ));
}

#[test]
fn test_sentinel() {
    let sentinel = GridCoordinate::parse("## 0101").unwrap();
    assert!(sentinel.is_sentinel());
    assert_eq!((sentinel.tile_row(), sentinel.tile_column()), (0, 0));
    assert_eq!(sentinel.to_string(), "## 0101");
    assert_eq!(sentinel.tile_identifier(), "##");
}

#[test]
fn test_parity_dependent_step() {
    assert_eq!(
        MapCoordinate::new(0, 0).step(Direction::NorthEast),
        Ok(MapCoordinate::new(1, -1))
    );
    assert_eq!(
        MapCoordinate::new(1, 0).step(Direction::NorthEast),
        Ok(MapCoordinate::new(2, 0))
    );
}

/// Stepping northeast out of the top-left hex of AA lands above the map
#[test]
fn test_walk_off_map() {
    let start = GridCoordinate::parse("AA 0101").unwrap().to_map_coordinate();
    let path = start.walk(vec![Direction::NorthEast]).unwrap();
    assert_eq!(path, vec![start, MapCoordinate::new(1, -1)]);
    assert_eq!(
        GridCoordinate::from_map_coordinate(path[1]),
        Err(CoordError::TileOutOfRange { column: 1, row: -1 })
    );
}

proptest! {
    #[test]
    fn text_round_trip(s in grid_string()) {
        let grid = GridCoordinate::parse(&s).unwrap();
        prop_assert_eq!(grid.to_string(), s);
    }

    #[test]
    fn coordinate_round_trip(s in lettered_grid_string()) {
        let grid = GridCoordinate::parse(&s).unwrap();
        let map = grid.to_map_coordinate();
        prop_assert_eq!(GridCoordinate::from_map_coordinate(map), Ok(grid));
    }

    #[test]
    fn map_round_trip(column in 0i32..780, row in 0i32..546) {
        let map = MapCoordinate::new(column, row);
        let grid = GridCoordinate::from_map_coordinate(map).unwrap();
        prop_assert_eq!(grid.to_map_coordinate(), map);
    }

    #[test]
    fn step_then_opposite(
        column in -1000i32..1000,
        row in -1000i32..1000,
        index in 0usize..6,
    ) {
        let start = MapCoordinate::new(column, row);
        let direction = Direction::ALL[index];
        let there = start.step(direction).unwrap();
        prop_assert!(start.is_adjacent(there));
        prop_assert_eq!(there.step(direction.opposite()).unwrap(), start);
    }

    #[test]
    fn parse_is_exact(s in "\\PC{0,9}") {
        // Anything that parses must format back to exactly the same string
        if let Ok(grid) = GridCoordinate::parse(&s) {
            prop_assert_eq!(grid.to_string(), s);
        }
    }
}
