use core::cmp::Ordering;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::{Reason, Winner};

use super::{Round, RoundState};

impl Round {
    /// Dealer plays their hand and the round is settled.
    ///
    /// The dealer draws until the hand reaches
    /// [`BlackjackOptions::dealer_stands_on`](crate::BlackjackOptions::dealer_stands_on).
    /// A dealer bust goes to the player; otherwise the higher total wins and
    /// equal totals follow
    /// [`BlackjackOptions::dealer_wins_ties`](crate::BlackjackOptions::dealer_wins_ties).
    ///
    /// The dealer stops drawing once bust. If the deck runs out first, the
    /// dealer stands on the current hand, so the round always settles.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        self.ensure_state(RoundState::DealerTurn)?;

        let mut drawn_cards = Vec::new();
        while !self.dealer.is_bust()
            && self.dealer.blackjack_value() < self.options.dealer_stands_on
        {
            let Ok(card) = self.deck.deal() else {
                log::debug!(
                    "deck exhausted, dealer stands on {}",
                    self.dealer.blackjack_value()
                );
                break;
            };
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        self.settle();
        Ok(drawn_cards)
    }

    fn settle(&mut self) {
        if self.dealer.is_bust() {
            self.finish(Winner::Player, Reason::Bust);
            return;
        }

        let player = self.player.blackjack_value();
        let dealer = self.dealer.blackjack_value();
        match player.cmp(&dealer) {
            Ordering::Greater => self.finish(Winner::Player, Reason::HigherTotal),
            Ordering::Less => self.finish(Winner::Dealer, Reason::HigherTotal),
            Ordering::Equal if self.options.dealer_wins_ties => {
                self.finish(Winner::Dealer, Reason::Tie);
            }
            Ordering::Equal => self.finish(Winner::Push, Reason::Tie),
        }
    }
}
