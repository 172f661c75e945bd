use sweeper_core::*;

fn fixed(size: Coord2, mines: &[Coord2]) -> Board {
    let layout = MineLayout::from_mine_coords(size, mines).unwrap();
    Board::start(layout.game_config(), layout).unwrap()
}

/// Drives the cursor to `target` with move commands only.
fn walk_to(board: &mut Board, target: Coord2) {
    while board.cursor() != target {
        let (x, y) = board.cursor();
        let command = if x < target.0 {
            Command::MoveRight
        } else if x > target.0 {
            Command::MoveLeft
        } else if y < target.1 {
            Command::MoveDown
        } else {
            Command::MoveUp
        };
        assert_eq!(board.apply(command), ActionOutcome::Changed);
    }
}

fn all_coords(size: Coord2) -> impl Iterator<Item = Coord2> {
    (0..size.1).flat_map(move |y| (0..size.0).map(move |x| (x, y)))
}

#[test]
fn centre_mine_counts_one_everywhere() {
    let mut board = fixed((3, 3), &[(1, 1)]);

    for coords in all_coords(board.size()).filter(|&c| c != (1, 1)) {
        assert_eq!(board.count_neighbour_mines(coords), 1);
    }

    assert_eq!(board.apply(Command::Reveal), ActionOutcome::Changed);
    for coords in all_coords(board.size()).filter(|&c| c != (1, 1)) {
        assert_eq!(board.visibility_at(coords), Visibility::Revealed, "{coords:?}");
        assert_eq!(board.tile_at(coords), Tile::Open(1));
    }
    assert_eq!(board.tile_at((1, 1)), Tile::Hidden);
    assert_eq!(board.hidden_count(), 1);
    assert_eq!(board.state(), GameState::Playing);

    walk_to(&mut board, (1, 1));
    assert_eq!(board.apply(Command::Reveal), ActionOutcome::Lost);
    assert_eq!(board.tile_at((1, 1)), Tile::Exploded);
}

#[test]
fn empty_board_floods_and_wins() {
    let config = GameConfig::new((5, 5), 0).unwrap();
    let mut board = Board::start(config, RandomMineGenerator::new(9)).unwrap();
    walk_to(&mut board, (2, 3));

    assert_eq!(board.apply(Command::Reveal), ActionOutcome::Won);
    assert_eq!(board.state(), GameState::Won);
    for coords in all_coords(board.size()) {
        assert_eq!(board.tile_at(coords), Tile::Open(0));
    }
}

#[test]
fn zero_region_never_crosses_a_flag() {
    // 7x1: flag in the middle splits two empty halves.
    let mut board = fixed((7, 1), &[(6, 0)]);
    walk_to(&mut board, (3, 0));
    board.apply(Command::ToggleFlag);
    walk_to(&mut board, (0, 0));

    assert_eq!(board.apply(Command::Reveal), ActionOutcome::Changed);
    for x in 0..3 {
        assert_eq!(board.visibility_at((x, 0)), Visibility::Revealed);
    }
    assert_eq!(board.visibility_at((3, 0)), Visibility::Flagged);
    for x in 4..7 {
        assert_eq!(board.visibility_at((x, 0)), Visibility::Hidden);
    }
}

#[test]
fn zero_reveal_opens_region_and_border() {
    let mut board = fixed((6, 6), &[(4, 4)]);
    board.set_spread_below(1);
    let set = board.reveal_set((0, 0));

    for &coords in &set {
        // every revealed cell is zero or borders a zero cell of the set
        if board.count_neighbour_mines(coords) > 0 {
            let touches_zero = set.iter().any(|&other| {
                other != coords
                    && other.0.abs_diff(coords.0) <= 1
                    && other.1.abs_diff(coords.1) <= 1
                    && board.count_neighbour_mines(other) == 0
            });
            assert!(touches_zero, "{coords:?} is not on the border of the region");
        }
    }

    // the corner behind the mine is walled off by numbered cells
    for coords in [(4, 4), (5, 4), (4, 5), (5, 5)] {
        assert!(!set.contains(&coords), "{coords:?} should stay closed");
    }
    assert_eq!(set.len(), 36 - 4);
}

#[test]
fn edge_moves_are_noops() {
    let mut board = fixed((3, 2), &[]);
    assert_eq!(board.apply(Command::MoveUp), ActionOutcome::NoChange);
    assert_eq!(board.apply(Command::MoveLeft), ActionOutcome::NoChange);
    walk_to(&mut board, (2, 1));
    let moves = board.move_count();
    assert_eq!(board.apply(Command::MoveRight), ActionOutcome::NoChange);
    assert_eq!(board.apply(Command::MoveDown), ActionOutcome::NoChange);
    assert_eq!(board.move_count(), moves);
    assert_eq!(board.cursor(), (2, 1));
}
