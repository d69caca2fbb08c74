//! Run with: `cargo test --test parse_grid_file`

use mazerunner::{
    geometry::Point,
    input::{parse_grid, Error},
    maze::{Cell, Outcome, Traversal},
};

const TELEPORTS: &str = "
10 10
##########
#    T   #
#        #
#        #
#        #
#@       #
#        #
#        #
#    T  $#
##########
";

#[test]
fn test_parse_and_run_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.txt");
    std::fs::write(&path, TELEPORTS.trim_start()).unwrap();

    let grid = parse_grid(&path).unwrap();
    assert_eq!((grid.width(), grid.height()), (10, 10));
    assert_eq!(grid.start(), Some(Point::new(1, 5)));
    assert_eq!(grid.kind_at(Point::new(5, 8)), Cell::Teleporter);

    // south to the floor, east into the lower teleporter, out of the upper one,
    // then east to the wall and down the right-hand side to the goal
    let outcome = Traversal::new(grid).unwrap().run();
    let Outcome::Reached(headings) = &outcome else {
        panic!("expected to reach the goal, got {:?}", outcome);
    };
    assert_eq!(
        headings.iter().map(ToString::to_string).collect::<Vec<_>>(),
        [
            "SOUTH", "SOUTH", "SOUTH", "EAST", "EAST", "EAST", "EAST", "EAST", "EAST", "EAST",
            "SOUTH", "SOUTH", "SOUTH", "SOUTH", "SOUTH", "SOUTH", "SOUTH",
        ]
    );
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_grid(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
