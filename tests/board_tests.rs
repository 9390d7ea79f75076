//! Board tests - settled grid and row compaction

use blockfall::core::Board;
use blockfall::types::{Rgba, BOARD_HEIGHT, BOARD_WIDTH};

/// Mark every cell of a row via overlapping four-cell commits
fn fill_row(board: &mut Board, y: i8, color: Rgba) {
    board.commit(&[(0, y), (1, y), (2, y), (3, y)], color);
    board.commit(&[(3, y), (4, y), (5, y), (6, y)], color);
    board.commit(&[(6, y), (7, y), (8, y), (9, y)], color);
}

fn occupied_count(board: &Board) -> usize {
    board.cells().iter().filter(|cell| cell.is_some()).count()
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(occupied_count(&board), 0);
}

#[test]
fn test_clear_on_empty_board_returns_zero_and_changes_nothing() {
    let mut board = Board::new();
    let before = board.clone();

    let cleared = board.clear_full_rows();

    assert_eq!(cleared.len(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_single_full_row_clears_and_shifts_above_down_by_one() {
    let mut board = Board::new();
    let filler = Rgba::opaque(200, 200, 200);
    let marker_a = Rgba::opaque(10, 20, 30);
    let marker_b = Rgba::opaque(40, 50, 60);

    fill_row(&mut board, 19, filler);
    // Two markers above the full row, in different rows.
    board.commit(&[(2, 18), (3, 18), (2, 17), (3, 17)], marker_a);
    board.commit(&[(7, 16), (8, 16), (7, 15), (8, 15)], marker_b);

    let cleared = board.clear_full_rows();

    assert_eq!(cleared.as_slice(), &[19]);
    assert!(!board.is_row_full(19));
    // Everything above dropped exactly one row, order preserved.
    assert_eq!(board.cell(2, 19), Some(marker_a));
    assert_eq!(board.cell(2, 18), Some(marker_a));
    assert_eq!(board.cell(7, 17), Some(marker_b));
    assert_eq!(board.cell(7, 16), Some(marker_b));
    assert_eq!(board.cell(2, 17), None);
    assert_eq!(board.cell(7, 15), None);
}

#[test]
fn test_bottom_two_rows_clear_together() {
    let mut board = Board::new();
    let filler = Rgba::opaque(120, 120, 120);
    let marker = Rgba::opaque(1, 2, 3);

    fill_row(&mut board, 18, filler);
    fill_row(&mut board, 19, filler);
    board.commit(&[(0, 17), (1, 17), (0, 16), (1, 16)], marker);

    let cleared = board.clear_full_rows();

    assert_eq!(cleared.len(), 2);
    assert_eq!(cleared.as_slice(), &[19, 18]);
    // The content that sat above becomes the new bottom pair.
    assert_eq!(board.cell(0, 19), Some(marker));
    assert_eq!(board.cell(0, 18), Some(marker));
    assert_eq!(occupied_count(&board), 4);
}

#[test]
fn test_separated_full_rows_collapse_preserving_order() {
    let mut board = Board::new();
    let filler = Rgba::opaque(99, 99, 99);
    let top = Rgba::opaque(1, 0, 0);
    let middle = Rgba::opaque(0, 1, 0);
    let bottom = Rgba::opaque(0, 0, 1);

    fill_row(&mut board, 5, filler);
    fill_row(&mut board, 10, filler);
    fill_row(&mut board, 15, filler);
    board.commit(&[(0, 4), (1, 4), (2, 4), (3, 4)], top);
    board.commit(&[(0, 9), (1, 9), (2, 9), (3, 9)], middle);
    board.commit(&[(0, 14), (1, 14), (2, 14), (3, 14)], bottom);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[15, 10, 5]);

    // Each marker drops by the number of full rows below it.
    assert_eq!(board.cell(0, 7), Some(top));
    assert_eq!(board.cell(0, 11), Some(middle));
    assert_eq!(board.cell(0, 15), Some(bottom));
    assert_eq!(occupied_count(&board), 12);
}

#[test]
fn test_all_rows_full_empties_the_board() {
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT as i8 {
        fill_row(&mut board, y, Rgba::opaque(77, 77, 77));
    }

    let cleared = board.clear_full_rows();

    assert_eq!(cleared.len(), BOARD_HEIGHT as usize);
    assert_eq!(occupied_count(&board), 0);
}

#[test]
fn test_no_stale_colors_above_compacted_region() {
    let mut board = Board::new();
    fill_row(&mut board, 19, Rgba::opaque(50, 50, 50));
    board.commit(&[(4, 18), (5, 18), (4, 17), (5, 17)], Rgba::opaque(9, 9, 9));

    board.clear_full_rows();

    // The vacated source rows must not keep their old colors.
    assert_eq!(board.cell(4, 17), None);
    for x in 0..BOARD_WIDTH as i8 {
        assert_eq!(board.cell(x, 16), None);
    }
}

#[test]
fn test_reset_empties_everything() {
    let mut board = Board::new();
    fill_row(&mut board, 12, Rgba::opaque(5, 5, 5));
    fill_row(&mut board, 19, Rgba::opaque(6, 6, 6));

    board.reset();

    assert_eq!(occupied_count(&board), 0);
}
