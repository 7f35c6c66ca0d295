//! Five-in-a-row game session.

use alloc::vec::Vec;

use crate::error::MoveError;
use crate::options::GomokuOptions;

mod board;
mod shared;
pub mod state;

pub use board::{Board, Cell, Direction, Line, MAX_BOARD_SIZE, Player, Position};
pub use shared::SharedGomoku;
pub use state::{GameStatus, Move, Placement};

/// A five-in-a-row game session.
///
/// The session owns the board and the turn order. Every mutation takes
/// `&mut self`; wrap the session in [`SharedGomoku`] to drive it from several
/// threads.
#[derive(Debug, Clone)]
pub struct Gomoku {
    /// Game options.
    pub options: GomokuOptions,
    board: Board,
    status: GameStatus,
    to_move: Player,
    moves: Vec<Move>,
    winning_line: Option<Line>,
}

impl Gomoku {
    /// Creates a session with an empty board. No game is in progress until
    /// [`Gomoku::new_game`] is called.
    ///
    /// # Example
    ///
    /// ```
    /// use tabletop::{GameStatus, Gomoku, GomokuOptions};
    ///
    /// let mut game = Gomoku::new(GomokuOptions::default());
    /// assert_eq!(game.status(), GameStatus::NotStarted);
    /// game.new_game();
    /// assert_eq!(game.status(), GameStatus::InProgress);
    /// ```
    #[must_use]
    pub fn new(options: GomokuOptions) -> Self {
        Self {
            board: Board::new(options.board_size),
            options,
            status: GameStatus::NotStarted,
            to_move: options.first_player,
            moves: Vec::new(),
            winning_line: None,
        }
    }

    /// Clears the board and starts a new game with the configured first
    /// player to move. Allowed from any status.
    pub fn new_game(&mut self) {
        if self.board.size() == Board::clamp_size(self.options.board_size) {
            self.board.clear();
        } else {
            self.board = Board::new(self.options.board_size);
        }
        self.moves.clear();
        self.winning_line = None;
        self.to_move = self.options.first_player;
        self.status = GameStatus::InProgress;
        log::debug!(
            "new {0}x{0} game, {1} to move",
            self.board.size(),
            self.to_move
        );
    }

    /// Places `player`'s piece at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the session untouched, if no game is in
    /// progress, it is not `player`'s turn, the cell is off the board, or the
    /// cell is occupied.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<Placement, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::NotInProgress);
        }

        if player != self.to_move {
            return Err(MoveError::NotYourTurn {
                expected: self.to_move,
            });
        }

        match self.board.get(row, col) {
            None => return Err(MoveError::OutOfBounds { row, col }),
            Some(Cell::Stone(_)) => return Err(MoveError::Occupied { row, col }),
            Some(Cell::Empty) => {}
        }

        self.board.set(row, col, Cell::Stone(player));
        self.moves.push(Move {
            player,
            position: Position::new(row, col),
        });

        if let Some(line) = self
            .board
            .find_line(row, col, player, self.options.win_length)
        {
            self.status = GameStatus::Won(player);
            self.winning_line = Some(line);
            log::debug!(
                "{player} wins with a run of {} from ({}, {}) to ({}, {})",
                line.len,
                line.start.row,
                line.start.col,
                line.end.row,
                line.end.col
            );
            return Ok(Placement::Win(line));
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            log::debug!("board full after {} moves, draw", self.moves.len());
            return Ok(Placement::Draw);
        }

        self.to_move = player.opponent();
        Ok(Placement::Continue {
            next: self.to_move,
        })
    }

    /// Resigns the game for `player`. Returns the opponent, who is credited
    /// the win.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotInProgress`] if no game is in progress.
    pub fn resign(&mut self, player: Player) -> Result<Player, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::NotInProgress);
        }

        self.status = GameStatus::Resigned(player);
        log::debug!("{player} resigns");
        Ok(player.opponent())
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player due to move, or `None` when no game is in progress.
    #[must_use]
    pub fn to_move(&self) -> Option<Player> {
        (self.status == GameStatus::InProgress).then_some(self.to_move)
    }

    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the run that won the game, if the last game was won on the
    /// board.
    #[must_use]
    pub const fn winning_line(&self) -> Option<&Line> {
        self.winning_line.as_ref()
    }

    /// Returns the placements of the current game, oldest first.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
}
