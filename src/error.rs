//! Error types for deck, hand, and game operations.

use thiserror::Error;

use crate::card::Card;
use crate::gomoku::Player;

/// Errors that can occur while dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Every card in the deck has been dealt.
    #[error("no cards left in the deck")]
    Exhausted,
    /// The requested card has already been dealt.
    #[error("{0} has already been dealt")]
    NotAvailable(Card),
}

/// Errors that can occur when reading or removing cards from a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Position outside the hand.
    #[error("card index {index} out of range for hand of {len}")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
}

/// Errors that can occur when placing a piece or resigning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// No game is in progress.
    #[error("no game in progress")]
    NotInProgress,
    /// The cell lies outside the board.
    #[error("cell ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Row of the rejected placement.
        row: usize,
        /// Column of the rejected placement.
        col: usize,
    },
    /// The cell already holds a piece.
    #[error("cell ({row}, {col}) is already occupied")]
    Occupied {
        /// Row of the rejected placement.
        row: usize,
        /// Column of the rejected placement.
        col: usize,
    },
    /// It is the other player's turn.
    #[error("it is {expected}'s turn")]
    NotYourTurn {
        /// The player who is due to move.
        expected: Player,
    },
}

/// Errors that can occur during a blackjack round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The deck could not supply a card.
    #[error(transparent)]
    Deal(#[from] DealError),
}
