use broadside::{
    Board, Cell, CellView, LayoutError, Orientation, ShipKind, ShipPlacement, BOARD_SIZE,
    COMPUTER_FLEET, HUMAN_FLEET, TOTAL_SHIP_CELLS,
};

const SEA: u8 = 0;
const CARRIER: u8 = 1;
const CRUISER: u8 = 2;
const DESTROYER: u8 = 3;
const FRIGATE: u8 = 4;
const CORVETTE: u8 = 5;
const SUBMARINE: u8 = 6;
const END: u8 = 0b0000_1000;
const HORIZONTAL: u8 = 0b0001_0000;

fn legacy_human_grid() -> [[u8; 8]; 8] {
    let ch = CARRIER | HORIZONTAL;
    let rh = CRUISER | HORIZONTAL;
    [
        [SEA; 8],
        [SEA, ch | END, ch, ch, ch, ch, ch | END, SEA],
        [SEA; 8],
        [SEA, SEA, CORVETTE | END, SEA, SEA, SUBMARINE | END, SEA, SEA],
        [DESTROYER | END, SEA, CORVETTE | END, SEA, SEA, SUBMARINE | END, SEA, FRIGATE | END],
        [DESTROYER, SEA, SEA, SEA, SEA, SEA, SEA, FRIGATE],
        [DESTROYER | END, SEA, rh | END, rh, rh, rh | END, SEA, FRIGATE | END],
        [SEA; 8],
    ]
}

fn cells_of(board: &Board) -> Vec<(usize, usize, Cell)> {
    let n = BOARD_SIZE as usize;
    (0..n)
        .flat_map(|r| (0..n).map(move |c| (r, c)))
        .map(|(r, c)| (r, c, board.get(r, c)))
        .collect()
}

#[test]
fn test_fixed_layouts_match_ship_lengths() {
    for board in [Board::new_human_board(), Board::new_computer_board()] {
        let cells = cells_of(&board);
        assert_eq!(
            cells.iter().filter(|(_, _, c)| c.has_ship()).count(),
            TOTAL_SHIP_CELLS
        );
        for kind in ShipKind::ALL {
            let count = cells
                .iter()
                .filter(|(_, _, c)| c.ship_kind() == Some(kind))
                .count();
            assert_eq!(count, kind.length(), "{} cell count", kind);
            let ends = cells
                .iter()
                .filter(|(_, _, c)| c.ship_kind() == Some(kind) && c.is_end())
                .count();
            assert_eq!(ends, 2, "{} end count", kind);
        }
        assert_eq!(board.ship_mask().count_ones(), TOTAL_SHIP_CELLS);
    }
}

#[test]
fn test_fleet_tables_do_not_share_cells() {
    for fleet in [&HUMAN_FLEET, &COMPUTER_FLEET] {
        for (i, a) in fleet.iter().enumerate() {
            for b in fleet.iter().skip(i + 1) {
                assert!(!a.mask().unwrap().intersects(&b.mask().unwrap()));
            }
        }
    }
}

#[test]
fn test_human_layout_matches_legacy_matrix() {
    let legacy = Board::from_raw_grid(legacy_human_grid()).unwrap();
    assert_eq!(legacy, Board::new_human_board());
}

#[test]
fn test_computer_layout_mirrors_human() {
    let human = Board::new_human_board();
    let computer = Board::new_computer_board();
    for row in 0..8 {
        for col in 0..8 {
            assert_eq!(computer.get(row, col), human.get(7 - row, col));
        }
    }
}

#[test]
fn test_layout_rejects_out_of_bounds() {
    let fleet = [ShipPlacement::new(ShipKind::Carrier, Orientation::Horizontal, 0, 3)];
    assert_eq!(
        Board::from_layout(&fleet).unwrap_err(),
        LayoutError::ShipOutOfBounds(ShipKind::Carrier)
    );
}

#[test]
fn test_layout_rejects_overlap() {
    let fleet = [
        ShipPlacement::new(ShipKind::Cruiser, Orientation::Horizontal, 2, 0),
        ShipPlacement::new(ShipKind::Corvette, Orientation::Vertical, 1, 2),
    ];
    assert_eq!(
        Board::from_layout(&fleet).unwrap_err(),
        LayoutError::ShipOverlaps(ShipKind::Corvette)
    );
}

#[test]
fn test_layout_rejects_touching_ships() {
    let fleet = [
        ShipPlacement::new(ShipKind::Cruiser, Orientation::Horizontal, 2, 0),
        ShipPlacement::new(ShipKind::Corvette, Orientation::Vertical, 3, 4),
    ];
    assert_eq!(
        Board::from_layout(&fleet).unwrap_err(),
        LayoutError::ShipsAdjacent(ShipKind::Corvette)
    );
}

#[test]
fn test_raw_grid_rejects_missing_end() {
    let mut grid = legacy_human_grid();
    grid[6][5] = CRUISER | HORIZONTAL;
    assert!(matches!(
        Board::from_raw_grid(grid),
        Err(LayoutError::MalformedRun { .. })
    ));
}

#[test]
fn test_raw_grid_rejects_extra_end() {
    let mut grid = legacy_human_grid();
    grid[1][3] |= END;
    assert!(matches!(
        Board::from_raw_grid(grid),
        Err(LayoutError::MalformedRun { .. })
    ));
}

#[test]
fn test_raw_grid_rejects_wrong_length() {
    let mut grid = legacy_human_grid();
    grid[1][6] = SEA;
    grid[1][5] = CARRIER | HORIZONTAL | END;
    assert_eq!(
        Board::from_raw_grid(grid).unwrap_err(),
        LayoutError::WrongLength {
            kind: ShipKind::Carrier,
            found: 5
        }
    );
}

#[test]
fn test_raw_grid_rejects_ambiguous_code() {
    let mut grid = legacy_human_grid();
    grid[0][0] = 0b0000_0111;
    assert!(matches!(
        Board::from_raw_grid(grid),
        Err(LayoutError::AmbiguousKind { row: 0, col: 0, .. })
    ));
}

#[test]
fn test_raw_grid_rejects_prefired_cells() {
    let mut grid = legacy_human_grid();
    grid[7][7] = 0b1000_0000;
    assert_eq!(
        Board::from_raw_grid(grid).unwrap_err(),
        LayoutError::PreFired { row: 7, col: 7 }
    );
}

#[test]
fn test_describe_and_set() {
    let mut board = Board::new_human_board();
    assert_eq!(
        board.describe(1, 1),
        CellView {
            has_ship: true,
            is_hit: false,
            is_sunk: false
        }
    );
    board.set(1, 1, board.get(1, 1).mark_hit());
    assert!(board.describe(1, 1).is_hit);
    assert!(!board.describe(0, 0).has_ship);
}

#[test]
fn test_all_ship_cells_sunk() {
    let mut board = Board::new_human_board();
    assert!(!board.all_ship_cells_sunk());
    let ships: Vec<_> = cells_of(&board)
        .into_iter()
        .filter(|(_, _, c)| c.has_ship())
        .collect();
    let (last, rest) = ships.split_last().unwrap();
    for &(r, c, cell) in rest {
        board.set(r, c, cell.mark_sunk());
    }
    assert!(!board.all_ship_cells_sunk());
    board.set(last.0, last.1, last.2.mark_sunk());
    assert!(board.all_ship_cells_sunk());
}

#[test]
fn test_empty_board_counts_as_sunk() {
    assert!(Board::empty().all_ship_cells_sunk());
}

#[test]
#[should_panic]
fn test_out_of_range_get_panics() {
    let board = Board::new_human_board();
    board.get(8, 0);
}

#[test]
#[should_panic]
fn test_out_of_range_set_panics() {
    let mut board = Board::empty();
    board.set(0, 8, Cell::SEA);
}

#[test]
fn test_display_marks() {
    let mut board = Board::empty();
    board.set(0, 0, Cell::SEA.mark_hit());
    board.set(0, 1, Cell::ship(ShipKind::Corvette, true, true));
    board.set(0, 2, Cell::ship(ShipKind::Corvette, true, true).mark_hit());
    let first_line = board.to_string().lines().next().unwrap().to_string();
    assert_eq!(first_line, "o S X . . . . . ");
}

#[test]
fn test_total_ship_cells_follows_fleet() {
    let from_kinds: usize = HUMAN_FLEET.iter().map(|p| p.kind.length()).sum();
    assert_eq!(TOTAL_SHIP_CELLS, from_kinds);
    assert_eq!(TOTAL_SHIP_CELLS, 20);
}

#[test]
fn test_masks_match_cells() {
    let mut board = Board::new_human_board();
    board.set(1, 1, board.get(1, 1).mark_hit());
    board.set(0, 0, board.get(0, 0).mark_hit());
    let ships = board.ship_mask();
    let hits = board.hit_mask();
    for row in 0..BOARD_SIZE as usize {
        for col in 0..BOARD_SIZE as usize {
            assert_eq!(ships.get(row, col).unwrap(), board.get(row, col).has_ship());
            assert_eq!(hits.get(row, col).unwrap(), board.get(row, col).is_hit());
        }
    }
    assert_eq!(hits.count_ones(), 2);
    assert!(board.sunk_mask().is_empty());
}
