use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
}

#[test]
fn test_glyphs() {
    assert_eq!(Stone::Black.glyph(), 'X');
    assert_eq!(Stone::White.glyph(), 'O');
    assert_eq!(Cell::Empty.glyph(), '.');
    assert_eq!(Cell::Occupied(Stone::White).glyph(), 'O');
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(15), 7 * 15 + 7);
    assert_eq!(pos.to_index(15), 112);

    let pos2 = Pos::from_index(112, 15);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 15));
    assert!(Pos::is_valid(14, 14, 15));
    assert!(!Pos::is_valid(-1, 0, 15));
    assert!(!Pos::is_valid(0, -1, 15));
    assert!(!Pos::is_valid(15, 0, 15));
    assert!(!Pos::is_valid(0, 15, 15));
}

#[test]
fn test_pos_offset_stops_at_edge() {
    let corner = Pos::new(0, 14);
    assert_eq!(corner.offset((1, -1), 2, 15), Some(Pos::new(2, 12)));
    assert_eq!(corner.offset((0, 1), 1, 15), None);
    assert_eq!(corner.offset((1, 0), -1, 15), None);
}

#[test]
fn test_pos_display_is_one_indexed() {
    assert_eq!(Pos::new(0, 4).to_string(), "(1, 5)");
}

#[test]
fn test_config_bounds() {
    assert_eq!(BoardConfig::default().size(), DEFAULT_BOARD_SIZE);
    assert_eq!(BoardConfig::default().total_cells(), 225);
    assert!(BoardConfig::new(1).is_ok());
    assert!(BoardConfig::new(MAX_BOARD_SIZE).is_ok());
    assert!(BoardConfig::new(0).is_err());
    assert!(BoardConfig::new(MAX_BOARD_SIZE + 1).is_err());
}

#[test]
fn test_board_place_and_count() {
    let mut board = Board::default();
    assert!(board.is_board_empty());
    assert_eq!(board.size(), 15);

    board.place_stone(Pos::new(3, 4), Stone::Black);
    board.place_stone(Pos::new(4, 4), Stone::White);

    assert_eq!(board.get(Pos::new(3, 4)), Cell::Occupied(Stone::Black));
    assert!(board.has_stone(Pos::new(4, 4), Stone::White));
    assert!(board.is_empty(Pos::new(0, 0)));
    assert_eq!(board.stone_count(), 2);
    assert_eq!(
        board.stones().collect::<Vec<_>>(),
        vec![(Pos::new(3, 4), Stone::Black), (Pos::new(4, 4), Stone::White)]
    );
}

#[test]
#[should_panic]
fn test_get_off_board_panics() {
    let board = Board::default();
    board.get(Pos::new(99, 99));
}

#[test]
fn test_board_full() {
    let mut board = Board::new(BoardConfig::new(2).unwrap());
    assert!(!board.is_full());
    for idx in 0..4 {
        board.place_stone(Pos::from_index(idx, 2), Stone::Black);
    }
    assert!(board.is_full());
    assert_eq!(board.pos(1, 1), Some(Pos::new(1, 1)));
    assert_eq!(board.pos(2, 0), None);
}
