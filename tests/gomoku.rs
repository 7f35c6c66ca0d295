//! Five-in-a-row session tests.

use tabletop::{
    Board, Cell, Direction, GameStatus, Gomoku, GomokuOptions, Line, MAX_BOARD_SIZE, MoveError,
    Placement, Player, Position, SharedGomoku,
};

fn started(options: GomokuOptions) -> Gomoku {
    let mut game = Gomoku::new(options);
    game.new_game();
    game
}

/// Plays `a[0], b[0], a[1], b[1], ...` and returns the result of the last
/// placement. Every earlier placement must continue the game.
fn play(game: &mut Gomoku, a: &[(usize, usize)], b: &[(usize, usize)]) -> Placement {
    let mut moves = Vec::new();
    for i in 0..a.len().max(b.len()) {
        if let Some(&cell) = a.get(i) {
            moves.push((cell, Player::A));
        }
        if let Some(&cell) = b.get(i) {
            moves.push((cell, Player::B));
        }
    }

    let (last, earlier) = moves.split_last().unwrap();
    for &((row, col), player) in earlier {
        let placement = game.place(row, col, player).unwrap();
        assert!(
            matches!(placement, Placement::Continue { .. }),
            "({row}, {col}) ended the game early"
        );
    }
    let ((row, col), player) = *last;
    game.place(row, col, player).unwrap()
}

#[test]
fn exactly_five_in_a_row_wins() {
    let mut game = started(GomokuOptions::default());

    let placement = play(
        &mut game,
        &[(6, 2), (6, 3), (6, 4), (6, 5), (6, 6)],
        &[(0, 0), (0, 2), (0, 4), (12, 12)],
    );

    let line = placement.line().copied().unwrap();
    assert_eq!(line.start, Position::new(6, 2));
    assert_eq!(line.end, Position::new(6, 6));
    assert_eq!(line.len, 5);
    assert_eq!(line.direction, Direction::Horizontal);
    assert_eq!(line.player, Player::A);
    assert_eq!(game.status(), GameStatus::Won(Player::A));
    assert_eq!(game.winning_line(), Some(&line));
    assert_eq!(game.to_move(), None);
}

#[test]
fn run_broken_by_opponent_does_not_win() {
    let mut game = started(GomokuOptions::default());

    let placement = play(
        &mut game,
        &[(6, 2), (6, 3), (6, 5), (6, 6)],
        &[(6, 4), (0, 0), (0, 2)],
    );

    assert_eq!(placement, Placement::Continue { next: Player::B });
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.winning_line(), None);
}

#[test]
fn run_broken_by_empty_cell_does_not_win() {
    let mut game = started(GomokuOptions::default());

    let placement = play(
        &mut game,
        &[(2, 0), (2, 1), (2, 3), (2, 4)],
        &[(9, 9), (9, 7), (9, 5)],
    );

    assert!(!placement.is_win());
}

#[test]
fn longer_run_reports_maximal_endpoints() {
    let mut game = started(GomokuOptions::default());

    let placement = play(
        &mut game,
        &[(3, 0), (3, 1), (3, 2), (3, 4), (3, 5), (3, 6), (3, 3)],
        &[(8, 0), (8, 2), (8, 4), (8, 6), (10, 1), (10, 3)],
    );

    let line = placement.line().copied().unwrap();
    assert_eq!(line.start, Position::new(3, 0));
    assert_eq!(line.end, Position::new(3, 6));
    assert_eq!(line.len, 7);
}

#[test]
fn vertical_and_diagonal_wins() {
    let mut game = started(GomokuOptions::default());
    let placement = play(
        &mut game,
        &[(4, 7), (5, 7), (7, 7), (8, 7), (6, 7)],
        &[(0, 0), (0, 2), (0, 4), (0, 6)],
    );
    let line = placement.line().copied().unwrap();
    assert_eq!(line.direction, Direction::Vertical);
    assert_eq!((line.start, line.end), (Position::new(4, 7), Position::new(8, 7)));

    let mut game = started(GomokuOptions::default());
    let placement = play(
        &mut game,
        &[(8, 8), (9, 9), (10, 10), (11, 11), (12, 12)],
        &[(0, 0), (0, 2), (0, 4), (0, 6)],
    );
    let line = placement.line().copied().unwrap();
    assert_eq!(line.direction, Direction::Diagonal);
    assert_eq!((line.start, line.end), (Position::new(8, 8), Position::new(12, 12)));

    let mut game = started(GomokuOptions::default());
    let placement = play(
        &mut game,
        &[(0, 4), (1, 3), (3, 1), (4, 0), (2, 2)],
        &[(12, 0), (12, 2), (12, 4), (12, 6)],
    );
    let line = placement.line().copied().unwrap();
    assert_eq!(line.direction, Direction::AntiDiagonal);
    assert_eq!((line.start, line.end), (Position::new(0, 4), Position::new(4, 0)));
}

#[test]
fn board_edge_stops_the_scan() {
    let mut game = started(GomokuOptions::default());

    let placement = play(
        &mut game,
        &[(12, 8), (12, 9), (12, 10), (12, 11), (12, 12)],
        &[(0, 0), (0, 2), (0, 4), (0, 6)],
    );

    let line = placement.line().copied().unwrap();
    assert_eq!(line.start, Position::new(12, 8));
    assert_eq!(line.end, Position::new(12, 12));
}

#[test]
fn first_row_game_end_to_end() {
    let mut game = Gomoku::new(GomokuOptions::default());
    assert_eq!(game.status(), GameStatus::NotStarted);

    game.new_game();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.to_move(), Some(Player::A));
    assert_eq!(game.board().empty_cells(), 169);

    assert_eq!(
        game.place(0, 0, Player::A).unwrap(),
        Placement::Continue { next: Player::B }
    );
    assert_eq!(
        game.place(1, 1, Player::B).unwrap(),
        Placement::Continue { next: Player::A }
    );

    let placement = play(
        &mut game,
        &[(0, 1), (0, 2), (0, 3), (0, 4)],
        &[(3, 7), (8, 2), (10, 10)],
    );

    assert_eq!(
        placement,
        Placement::Win(Line {
            player: Player::A,
            direction: Direction::Horizontal,
            start: Position::new(0, 0),
            end: Position::new(0, 4),
            len: 5,
        })
    );
    assert_eq!(game.status(), GameStatus::Won(Player::A));
    assert_eq!(game.status().winner(), Some(Player::A));
    assert_eq!(game.moves().len(), 9);
}

#[test]
fn full_board_without_a_run_is_a_draw() {
    let mut game = started(GomokuOptions::default());

    // Pairs of columns alternate owner, shifted by one pair per row; no line
    // direction sees more than four of one owner in a row.
    let owner = |row: usize, col: usize| {
        if (col + 2 * row) / 2 % 2 == 0 {
            Player::A
        } else {
            Player::B
        }
    };
    let mut a = Vec::new();
    let mut b = Vec::new();
    for row in 0..13 {
        for col in 0..13 {
            match owner(row, col) {
                Player::A => a.push((row, col)),
                Player::B => b.push((row, col)),
            }
        }
    }
    assert_eq!((a.len(), b.len()), (85, 84));

    let placement = play(&mut game, &a, &b);

    assert_eq!(placement, Placement::Draw);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().winner(), None);
    assert!(game.board().is_full());
    assert_eq!(game.place(0, 0, Player::B), Err(MoveError::NotInProgress));
}

#[test]
fn placing_before_a_game_starts_is_rejected() {
    let mut game = Gomoku::new(GomokuOptions::default());

    assert_eq!(game.place(0, 0, Player::A), Err(MoveError::NotInProgress));
    assert_eq!(game.board().get(0, 0), Some(Cell::Empty));
    assert_eq!(game.resign(Player::A), Err(MoveError::NotInProgress));
    assert_eq!(game.status(), GameStatus::NotStarted);
}

#[test]
fn occupied_cell_is_rejected_and_untouched() {
    let mut game = started(GomokuOptions::default());
    game.place(3, 3, Player::A).unwrap();

    assert_eq!(
        game.place(3, 3, Player::B),
        Err(MoveError::Occupied { row: 3, col: 3 })
    );
    assert_eq!(game.board().get(3, 3), Some(Cell::Stone(Player::A)));
    assert_eq!(game.to_move(), Some(Player::B));
    assert_eq!(game.moves().len(), 1);
}

#[test]
fn out_of_turn_and_off_board_are_rejected() {
    let mut game = started(GomokuOptions::default());

    assert_eq!(
        game.place(0, 0, Player::B),
        Err(MoveError::NotYourTurn {
            expected: Player::A
        })
    );
    assert_eq!(
        game.place(13, 0, Player::A),
        Err(MoveError::OutOfBounds { row: 13, col: 0 })
    );
    assert_eq!(game.board().empty_cells(), 169);
    assert!(game.moves().is_empty());
}

#[test]
fn placing_after_a_win_is_rejected() {
    let mut game = started(GomokuOptions::default());
    play(
        &mut game,
        &[(6, 2), (6, 3), (6, 4), (6, 5), (6, 6)],
        &[(0, 0), (0, 2), (0, 4), (12, 12)],
    );

    let before = game.board().clone();
    assert_eq!(game.place(7, 7, Player::B), Err(MoveError::NotInProgress));
    assert_eq!(game.board(), &before);
}

#[test]
fn resignation_credits_the_opponent() {
    let mut game = started(GomokuOptions::default());
    game.place(6, 6, Player::A).unwrap();

    assert_eq!(game.resign(Player::B), Ok(Player::A));
    assert_eq!(game.status(), GameStatus::Resigned(Player::B));
    assert_eq!(game.status().winner(), Some(Player::A));
    assert!(game.status().is_over());
    assert_eq!(game.place(5, 5, Player::B), Err(MoveError::NotInProgress));
    assert_eq!(game.resign(Player::A), Err(MoveError::NotInProgress));

    game.new_game();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.board().get(6, 6), Some(Cell::Empty));
    assert!(game.moves().is_empty());
}

#[test]
fn options_change_board_and_first_player() {
    let options = GomokuOptions::default()
        .with_board_size(7)
        .with_win_length(4)
        .with_first_player(Player::B);
    assert_eq!(options.board_size, 7);
    assert_eq!(options.win_length, 4);
    assert_eq!(options.first_player, Player::B);

    let mut game = started(options);
    assert_eq!(game.board().size(), 7);
    assert_eq!(game.to_move(), Some(Player::B));
    assert_eq!(
        game.place(7, 0, Player::B),
        Err(MoveError::OutOfBounds { row: 7, col: 0 })
    );

    let moves = [
        ((0, 0), Player::B),
        ((6, 6), Player::A),
        ((0, 1), Player::B),
        ((6, 5), Player::A),
        ((0, 2), Player::B),
        ((6, 3), Player::A),
    ];
    for ((row, col), player) in moves {
        game.place(row, col, player).unwrap();
    }
    let placement = game.place(0, 3, Player::B).unwrap();
    assert_eq!(placement.line().map(|l| l.len), Some(4));
    assert_eq!(game.status(), GameStatus::Won(Player::B));

    game.options = game.options.with_board_size(9);
    game.new_game();
    assert_eq!(game.board().size(), 9);
}

#[test]
fn run_through_counts_the_origin_cell() {
    let board = Board::new(5);

    let line = board
        .run_through(2, 2, Player::A, Direction::Horizontal)
        .unwrap();
    assert_eq!(line.len, 1);
    assert_eq!(line.start, line.end);
    assert_eq!(board.run_through(5, 0, Player::A, Direction::Vertical), None);
    assert_eq!(board.find_line(2, 2, Player::A, 1).map(|l| l.direction), Some(Direction::Vertical));
}

#[test]
fn shared_session_serializes_moves_from_threads() {
    let shared = SharedGomoku::new(GomokuOptions::default());
    shared.new_game();

    let place_all = |player: Player, cells: &[(usize, usize)]| {
        for &(row, col) in cells {
            loop {
                match shared.place(row, col, player) {
                    Ok(_) => break,
                    Err(MoveError::NotYourTurn { .. }) => std::thread::yield_now(),
                    Err(err) => panic!("unexpected rejection: {err}"),
                }
            }
        }
    };

    std::thread::scope(|scope| {
        scope.spawn(|| place_all(Player::A, &[(0, 0), (0, 1), (0, 2)]));
        scope.spawn(|| place_all(Player::B, &[(5, 5), (5, 6), (5, 7)]));
    });

    assert_eq!(shared.status(), GameStatus::InProgress);
    assert_eq!(shared.to_move(), Some(Player::A));
    assert_eq!(shared.board().empty_cells(), 163);

    let players: Vec<Player> = shared.with(|game| game.moves().iter().map(|m| m.player).collect());
    assert_eq!(
        players,
        [Player::A, Player::B, Player::A, Player::B, Player::A, Player::B]
    );

    assert_eq!(shared.resign(Player::A), Ok(Player::B));
    let game = shared.into_inner();
    assert_eq!(game.status(), GameStatus::Resigned(Player::A));
}

#[test]
fn win_on_the_last_empty_cell_beats_a_draw() {
    let options = GomokuOptions::default().with_board_size(5);
    let mut game = started(options);

    // Player A completes the top row with the final empty cell.
    let layout = ["AAAA.", "AABBB", "ABBBA", "BABBB", "BAABA"];
    let mut a = Vec::new();
    let mut b = Vec::new();
    for (row, line) in layout.iter().enumerate() {
        for (col, owner) in line.chars().enumerate() {
            match owner {
                'A' => a.push((row, col)),
                'B' => b.push((row, col)),
                _ => {}
            }
        }
    }
    a.push((0, 4));
    assert_eq!((a.len(), b.len()), (13, 12));

    let placement = play(&mut game, &a, &b);

    assert!(game.board().is_full());
    assert!(placement.is_win());
    let line = placement.line().copied().unwrap();
    assert_eq!((line.start, line.end), (Position::new(0, 0), Position::new(0, 4)));
    assert_eq!(game.status(), GameStatus::Won(Player::A));
}

#[test]
fn out_of_range_sizes_are_clamped() {
    assert_eq!(Board::new(usize::MAX).size(), MAX_BOARD_SIZE);
    assert_eq!(Board::new(0).size(), 1);
    assert_eq!(GomokuOptions::default().with_win_length(0).win_length, 1);

    let mut game = started(GomokuOptions::default().with_board_size(usize::MAX));
    assert_eq!(game.board().size(), MAX_BOARD_SIZE);
    game.new_game();
    assert_eq!(game.board().size(), MAX_BOARD_SIZE);
    assert_eq!(
        game.place(MAX_BOARD_SIZE, 0, Player::A),
        Err(MoveError::OutOfBounds {
            row: MAX_BOARD_SIZE,
            col: 0
        })
    );
}
