//! Session state types.

use super::board::{Line, Player, Position};

/// Game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// No game has been started yet.
    NotStarted,
    /// Waiting for the player to move.
    InProgress,
    /// The player completed a winning run.
    Won(Player),
    /// The board filled up without a winning run.
    Draw,
    /// The player resigned; the opponent is credited the win.
    Resigned(Player),
}

impl GameStatus {
    /// Returns the winner, if the game ended with one.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::Won(player) => Some(player),
            Self::Resigned(loser) => Some(loser.opponent()),
            Self::NotStarted | Self::InProgress | Self::Draw => None,
        }
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won(_) | Self::Draw | Self::Resigned(_))
    }
}

/// Outcome of an accepted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The game goes on with the given player to move.
    Continue {
        /// The player due to move next.
        next: Player,
    },
    /// The placement completed a winning run.
    Win(Line),
    /// The placement filled the board without winning.
    Draw,
}

impl Placement {
    /// Returns whether the placement won the game.
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Win(_))
    }

    /// Returns the winning run, if any.
    #[must_use]
    pub const fn line(&self) -> Option<&Line> {
        match self {
            Self::Win(line) => Some(line),
            Self::Continue { .. } | Self::Draw => None,
        }
    }
}

/// A placement recorded in the game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Who moved.
    pub player: Player,
    /// Where the piece went.
    pub position: Position,
}
