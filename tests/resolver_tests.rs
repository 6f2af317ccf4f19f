use broadside::{resolve_run, Board, Direction, Orientation, ShipKind, ShipPlacement};

fn single_ship(kind: ShipKind, orientation: Orientation, row: usize, col: usize) -> Board {
    Board::from_layout(&[ShipPlacement::new(kind, orientation, row, col)]).unwrap()
}

fn hit(board: &mut Board, row: usize, col: usize) {
    board.set(row, col, board.get(row, col).mark_hit());
}

#[test]
fn test_direction_steps() {
    assert_eq!(Direction::Up.step(3, 3), Some((2, 3)));
    assert_eq!(Direction::Down.step(3, 3), Some((4, 3)));
    assert_eq!(Direction::Left.step(3, 3), Some((3, 2)));
    assert_eq!(Direction::Right.step(3, 3), Some((3, 4)));

    assert_eq!(Direction::Up.step(0, 3), None);
    assert_eq!(Direction::Down.step(7, 3), None);
    assert_eq!(Direction::Left.step(3, 0), None);
    assert_eq!(Direction::Right.step(3, 7), None);
}

#[test]
fn test_partial_run_is_untouched() {
    let mut board = single_ship(ShipKind::Cruiser, Orientation::Horizontal, 4, 2);
    hit(&mut board, 4, 2);
    hit(&mut board, 4, 3);
    hit(&mut board, 4, 5);
    let before = board.clone();
    assert_eq!(resolve_run(&mut board, 4, 2, Direction::Right), None);
    assert_eq!(board, before);
}

#[test]
fn test_full_run_sinks_every_cell() {
    let mut board = single_ship(ShipKind::Cruiser, Orientation::Horizontal, 4, 2);
    for col in 2..6 {
        hit(&mut board, 4, col);
    }
    assert_eq!(
        resolve_run(&mut board, 4, 2, Direction::Right),
        Some(ShipKind::Cruiser)
    );
    for col in 2..6 {
        assert!(board.get(4, col).is_sunk());
    }
    assert!(!board.get(4, 1).is_sunk());
    assert!(!board.get(4, 6).is_sunk());
}

#[test]
fn test_walk_from_far_end() {
    let mut board = single_ship(ShipKind::Destroyer, Orientation::Vertical, 5, 6);
    for row in 5..8 {
        hit(&mut board, row, 6);
    }
    // starts on the bottom edge and walks up to row 5
    assert_eq!(
        resolve_run(&mut board, 7, 6, Direction::Up),
        Some(ShipKind::Destroyer)
    );
    assert!(board.all_ship_cells_sunk());
}

#[test]
fn test_run_reaching_board_edge() {
    let mut board = single_ship(ShipKind::Carrier, Orientation::Horizontal, 0, 2);
    for col in 2..8 {
        hit(&mut board, 0, col);
    }
    assert_eq!(
        resolve_run(&mut board, 0, 2, Direction::Right),
        Some(ShipKind::Carrier)
    );
    assert!(board.get(0, 7).is_sunk());
}

#[test]
fn test_hit_sea_stops_the_walk() {
    let mut board = single_ship(ShipKind::Corvette, Orientation::Vertical, 2, 1);
    hit(&mut board, 2, 1);
    hit(&mut board, 3, 1);
    hit(&mut board, 4, 1);
    assert_eq!(
        resolve_run(&mut board, 2, 1, Direction::Down),
        Some(ShipKind::Corvette)
    );
    assert!(!board.get(4, 1).is_sunk());
}

#[test]
fn test_start_on_sea_is_a_no_op() {
    let mut board = single_ship(ShipKind::Corvette, Orientation::Vertical, 2, 1);
    let before = board.clone();
    assert_eq!(resolve_run(&mut board, 0, 0, Direction::Right), None);
    assert_eq!(board, before);
}
