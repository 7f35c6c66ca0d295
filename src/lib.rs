//! Playing-card and five-in-a-row game cores with optional `no_std` support.
//!
//! The crate provides a [`Deck`] dealt without replacement, a [`Hand`] with
//! blackjack scoring, a [`Round`] of blackjack played from a deck, and a
//! [`Gomoku`] session that detects five-in-a-row wins.
//!
//! # Example
//!
//! ```
//! use tabletop::{Gomoku, GomokuOptions, Placement, Player};
//!
//! let mut game = Gomoku::new(GomokuOptions::default());
//! game.new_game();
//! let placement = game.place(6, 6, Player::A).unwrap();
//! assert_eq!(placement, Placement::Continue { next: Player::B });
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod blackjack;
pub mod card;
pub mod deck;
pub mod error;
pub mod gomoku;
pub mod hand;
pub mod options;
pub mod result;
mod sync;

// Re-export main types
pub use blackjack::{Round, RoundState};
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, HandError, MoveError};
pub use gomoku::{
    Board, Cell, Direction, GameStatus, Gomoku, Line, MAX_BOARD_SIZE, Move, Placement, Player,
    Position, SharedGomoku,
};
pub use hand::{Hand, Scoring};
pub use options::{BlackjackOptions, GomokuOptions};
pub use result::{Reason, RoundResult, Winner};
