//! A single blackjack round between one player and the dealer.

use crate::deck::Deck;
use crate::hand::Hand;
use crate::options::BlackjackOptions;
use crate::result::{Reason, RoundResult, Winner};

mod actions;
mod dealer;
pub mod state;

pub use state::RoundState;

/// One round of blackjack played from a [`Deck`].
///
/// The round owns the deck while it is played; take it back with
/// [`Round::into_deck`] to deal the next round from the remaining cards.
///
/// # Example
///
/// ```
/// use tabletop::{BlackjackOptions, Deck, Round, RoundState};
///
/// let mut deck = Deck::new(42);
/// deck.shuffle();
/// let mut round = Round::new(BlackjackOptions::default(), deck);
/// round.deal().unwrap();
/// if round.state() == RoundState::PlayerTurn {
///     round.stand().unwrap();
///     round.dealer_play().unwrap();
/// }
/// assert!(round.result().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    /// Round options.
    pub options: BlackjackOptions,
    deck: Deck,
    player: Hand,
    dealer: Hand,
    state: RoundState,
    result: Option<RoundResult>,
}

impl Round {
    /// Creates a round that will deal from `deck`. Nothing is dealt until
    /// [`Round::deal`].
    #[must_use]
    pub const fn new(options: BlackjackOptions, deck: Deck) -> Self {
        Self {
            options,
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::Waiting,
            result: None,
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the deck being dealt from.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the result once the round is over.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Ends the round and hands back the deck.
    #[must_use]
    pub fn into_deck(self) -> Deck {
        self.deck
    }

    fn finish(&mut self, winner: Winner, reason: Reason) {
        let result = RoundResult {
            winner,
            reason,
            player_value: self.player.blackjack_value(),
            dealer_value: self.dealer.blackjack_value(),
        };
        log::debug!(
            "round over: {winner:?} ({reason:?}), player {} vs dealer {}",
            result.player_value,
            result.dealer_value
        );
        self.result = Some(result);
        self.state = RoundState::RoundOver;
    }
}
