use crate::card::Card;
use crate::error::{ActionError, DealError};
use crate::result::{Reason, Winner};

use super::{Round, RoundState};

const INITIAL_CARDS: usize = 4;
const FIVE_CARDS: usize = 5;

impl Round {
    pub(super) fn ensure_state(&self, expected: RoundState) -> Result<(), ActionError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Deals two cards each to the player and the dealer, alternating and
    /// starting with the player.
    ///
    /// A dealer natural ends the round for the dealer; otherwise a player
    /// natural ends it for the player. Any other deal moves to the player's
    /// turn.
    ///
    /// # Errors
    ///
    /// Returns an error if cards were already dealt or the deck holds fewer
    /// than four cards. Nothing is dealt on error.
    pub fn deal(&mut self) -> Result<(), ActionError> {
        self.ensure_state(RoundState::Waiting)?;

        if self.deck.cards_left() < INITIAL_CARDS {
            return Err(DealError::Exhausted.into());
        }

        for _ in 0..2 {
            let card = self.deck.deal()?;
            self.player.add_card(card);
            let card = self.deck.deal()?;
            self.dealer.add_card(card);
        }

        if self.dealer.is_blackjack() {
            self.finish(Winner::Dealer, Reason::Blackjack);
        } else if self.player.is_blackjack() {
            self.finish(Winner::Player, Reason::Blackjack);
        } else {
            self.state = RoundState::PlayerTurn;
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the round for the dealer. With the five-card rule
    /// enabled, a fifth card that keeps the player at 21 or under ends it for
    /// the player.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_state(RoundState::PlayerTurn)?;

        let card = self.deck.deal()?;
        self.player.add_card(card);

        if self.player.is_bust() {
            self.finish(Winner::Dealer, Reason::Bust);
        } else if self.options.five_card_charlie && self.player.len() == FIVE_CARDS {
            self.finish(Winner::Player, Reason::FiveCards);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand). The dealer plays next.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_state(RoundState::PlayerTurn)?;
        self.state = RoundState::DealerTurn;
        Ok(())
    }
}
