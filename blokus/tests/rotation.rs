//! Shape geometry: the quarter-turn transform and its invariants.

use blokus::{Shape, ShapeCatalog, MAX_EXTENT};

/// Build a single shape through the catalog text format.
fn shape(height: usize, width: usize, rows: &[&str]) -> Shape {
    let mut text = format!("1\n0 {} {}\n", height, width);
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    ShapeCatalog::parse(&text).unwrap().generate(0).unwrap()
}

/// Assert that every border row and column of the shape holds at least one
/// occupied cell.
fn assert_tight(shape: &Shape) {
    let (w, h) = (shape.width() as i32, shape.height() as i32);
    let row_occupied = |y: i32| (0..w).any(|x| shape.occupied(x, y).unwrap());
    let col_occupied = |x: i32| (0..h).any(|y| shape.occupied(x, y).unwrap());
    assert!(row_occupied(0), "empty top row in\n{}", shape);
    assert!(row_occupied(h - 1), "empty bottom row in\n{}", shape);
    assert!(col_occupied(0), "empty left column in\n{}", shape);
    assert!(col_occupied(w - 1), "empty right column in\n{}", shape);
}

#[test]
fn four_turns_restore_every_standard_shape() {
    for (type_id, original) in ShapeCatalog::standard().iter() {
        let turned = original.rotate_90().rotate_90().rotate_90().rotate_90();
        assert_eq!(&turned, original, "type {}", type_id);
    }
}

#[test]
fn rotation_preserves_occupied_count() {
    for (type_id, original) in ShapeCatalog::standard().iter() {
        let mut shape = original.clone();
        for turn in 0..4 {
            shape = shape.rotate_90();
            assert_eq!(
                shape.count_occupied(),
                original.count_occupied(),
                "type {} after {} turns",
                type_id,
                turn + 1
            );
        }
    }
}

#[test]
fn rotation_keeps_borders_tight() {
    for (type_id, original) in ShapeCatalog::standard().iter() {
        let mut shape = original.clone();
        for _ in 0..4 {
            shape = shape.rotate_90();
            assert!(
                shape.height() <= MAX_EXTENT && shape.width() <= MAX_EXTENT,
                "type {} grew past the maximum extent",
                type_id
            );
            assert_tight(&shape);
        }
    }
}

#[test]
fn quarter_turn_of_a_two_by_three() {
    let shape = shape(2, 3, &["oo.", "..o"]);
    let turned = shape.rotate_90();
    assert_eq!(turned.height(), 3);
    assert_eq!(turned.width(), 2);
    assert_eq!(turned.count_occupied(), 3);
    assert_eq!(turned.to_string(), ".o\no.\no.");
}

#[test]
fn display_renders_pattern_rows() {
    let shape = shape(2, 3, &["oo.", "..o"]);
    assert_eq!(shape.to_string(), "oo.\n..o");
}

#[test]
fn empty_pattern_packs_to_a_unit_cell() {
    let shape = shape(2, 2, &["..", ".."]);
    assert_eq!((shape.height(), shape.width()), (1, 1));
    assert_eq!(shape.count_occupied(), 0);
    // Turning the degenerate shape keeps it a unit cell.
    let turned = shape.rotate_90();
    assert_eq!((turned.height(), turned.width()), (1, 1));
    assert_eq!(turned.count_occupied(), 0);
}

#[test]
fn occupied_reports_out_of_range_offsets() {
    let shape = shape(1, 3, &["ooo"]);
    assert!(shape.occupied(2, 0).unwrap());
    let err = shape.occupied(3, 0).unwrap_err();
    assert_eq!((err.x(), err.y()), (3, 0));
    assert_eq!((err.width(), err.height()), (3, 1));
    assert!(shape.occupied(-1, 0).is_err());
    assert!(shape.occupied(0, 1).is_err());
}
