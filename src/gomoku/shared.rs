//! A five-in-a-row session shared between threads.

use crate::error::MoveError;
use crate::options::GomokuOptions;
use crate::sync::Mutex;

use super::{Board, GameStatus, Gomoku, Placement, Player};

/// A [`Gomoku`] session behind one lock, for callers that drive a game from
/// more than one thread.
///
/// Each call holds the lock for the whole operation, so placements from
/// different threads are applied one at a time.
#[derive(Debug)]
pub struct SharedGomoku {
    game: Mutex<Gomoku>,
}

impl SharedGomoku {
    /// Creates a shared session. No game is in progress until
    /// [`SharedGomoku::new_game`] is called.
    #[must_use]
    pub fn new(options: GomokuOptions) -> Self {
        Self {
            game: Mutex::new(Gomoku::new(options)),
        }
    }

    /// Starts a new game. See [`Gomoku::new_game`].
    pub fn new_game(&self) {
        self.game.lock().new_game();
    }

    /// Places a piece. See [`Gomoku::place`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Gomoku::place`].
    pub fn place(&self, row: usize, col: usize, player: Player) -> Result<Placement, MoveError> {
        self.game.lock().place(row, col, player)
    }

    /// Resigns for `player`. See [`Gomoku::resign`].
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotInProgress`] if no game is in progress.
    pub fn resign(&self, player: Player) -> Result<Player, MoveError> {
        self.game.lock().resign(player)
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.game.lock().status()
    }

    /// Returns the player due to move, if a game is in progress.
    #[must_use]
    pub fn to_move(&self) -> Option<Player> {
        self.game.lock().to_move()
    }

    /// Returns a copy of the board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.game.lock().board().clone()
    }

    /// Runs `f` with exclusive access to the session.
    pub fn with<T>(&self, f: impl FnOnce(&mut Gomoku) -> T) -> T {
        f(&mut self.game.lock())
    }

    /// Consumes the wrapper and returns the session.
    pub fn into_inner(self) -> Gomoku {
        self.game.into_inner()
    }
}
