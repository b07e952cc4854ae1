use super::*;
use crate::tests::grid_from_str;

fn kinds_and_anchors(patterns: &[Pattern]) -> Vec<(PatternKind, Pos)> {
    patterns.iter().map(|p| (p.kind, p.anchor())).collect()
}

#[test]
fn test_detect_isolated_block() {
    let grid = grid_from_str(
        "
        ......
        ..OO..
        ..OO..
        ......
        ",
    );
    let patterns = detect_patterns(&grid);
    assert_eq!(1, patterns.len());
    assert_eq!(PatternKind::Block, patterns[0].kind);
    assert_eq!(vec![(1, 2), (1, 3), (2, 2), (2, 3)], patterns[0].cells);
}

#[test]
fn test_detect_block_in_corner() {
    // Border cells outside the grid count as dead.
    let grid = grid_from_str(
        "
        OO.
        OO.
        ...
        ",
    );
    let patterns = detect_patterns(&grid);
    assert_eq!(vec![(PatternKind::Block, (0, 0))], kinds_and_anchors(&patterns));

    let grid = grid_from_str(
        "
        OO
        OO
        ",
    );
    assert_eq!(1, detect_patterns(&grid).len());
}

#[test]
fn test_block_rejected_when_border_contaminated() {
    let grid = grid_from_str(
        "
        .......
        ..OO...
        ..OO...
        ....O..
        ....O..
        ",
    );
    // The diagonal neighbor sits in the block's border.
    assert!(detect_patterns(&grid)
        .iter()
        .all(|p| p.kind != PatternKind::Block));

    let grid = grid_from_str(
        "
        ......
        .OOO..
        .OO...
        ......
        ",
    );
    assert_eq!(Vec::<Pattern>::new(), detect_patterns(&grid));
}

#[test]
fn test_block_rejected_by_zombie_border() {
    let grid = grid_from_str(
        "
        ....
        .OO.
        .OO.
        ...Z
        ",
    );
    assert_eq!(Vec::<Pattern>::new(), detect_patterns(&grid));
}

#[test]
fn test_detect_blinkers() {
    let grid = grid_from_str(
        "
        .......
        .OOO...
        .......
        .....O.
        .....O.
        .....O.
        .......
        ",
    );
    let patterns = detect_patterns(&grid);
    assert_eq!(
        vec![
            (PatternKind::Blinker, (1, 1)),
            (PatternKind::Blinker, (3, 5)),
        ],
        kinds_and_anchors(&patterns),
    );
    assert_eq!(vec![(1, 1), (1, 2), (1, 3)], patterns[0].cells);
    assert_eq!(vec![(3, 5), (4, 5), (5, 5)], patterns[1].cells);
}

#[test]
fn test_blinker_at_edges() {
    let grid = grid_from_str(
        "
        OOO
        ...
        ..O
        ..O
        ..O
        ",
    );
    assert_eq!(
        vec![
            (PatternKind::Blinker, (0, 0)),
            (PatternKind::Blinker, (2, 2)),
        ],
        kinds_and_anchors(&detect_patterns(&grid)),
    );
}

#[test]
fn test_no_partial_motifs() {
    // A line that runs off the edge is too short to be a blinker, and a
    // longer line is not a blinker at all.
    let grid = grid_from_str(
        "
        ...OO
        .....
        OOOO.
        ",
    );
    assert_eq!(Vec::<Pattern>::new(), detect_patterns(&grid));

    // A plus sign contains both blinker phases but neither is isolated.
    let grid = grid_from_str(
        "
        .....
        ..O..
        .OOO.
        ..O..
        .....
        ",
    );
    assert_eq!(Vec::<Pattern>::new(), detect_patterns(&grid));
}

#[test]
fn test_patterns_reported_in_row_major_order() {
    let grid = grid_from_str(
        "
        .....O.
        OO...O.
        OO...O.
        .......
        ..OOO..
        .......
        .OO....
        .OO....
        ",
    );
    let patterns = detect_patterns(&grid);
    assert_eq!(
        vec![
            (PatternKind::Blinker, (0, 5)),
            (PatternKind::Block, (1, 0)),
            (PatternKind::Blinker, (4, 2)),
            (PatternKind::Block, (6, 1)),
        ],
        kinds_and_anchors(&patterns),
    );

    // No cell is claimed twice.
    let all_cells = patterns.iter().flat_map(|p| p.cells.clone()).collect_vec();
    assert_eq!(all_cells.len(), all_cells.iter().unique().count());
}

#[test]
fn test_detect_patterns_idempotent() {
    let grid = grid_from_str(
        "
        OO...
        OO...
        .....
        ..OOO
        ",
    );
    let first = detect_patterns(&grid);
    let second = detect_patterns(&grid);
    assert_eq!(first, second);
    assert_eq!(2, first.len());
}

#[test]
fn test_pattern_kind_names() {
    assert_eq!("block", PatternKind::Block.to_string());
    assert_eq!(Ok(PatternKind::Blinker), "Blinker".parse());
    assert_eq!(
        Err(UnknownPatternKind("glider".to_owned())),
        "glider".parse::<PatternKind>(),
    );
}
