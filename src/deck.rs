//! A standard 52-card deck dealt without replacement.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DealError;

/// A deck of the 52 distinct playing cards and a cursor marking how many have
/// been dealt.
///
/// The deck owns a seeded generator so shuffles are reproducible for a given
/// seed.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates an unshuffled deck: suits in [`Suit::ALL`] order, ranks 1 to 13
    /// within each suit.
    ///
    /// The seed is only used by later calls to [`Deck::shuffle`].
    ///
    /// # Example
    ///
    /// ```
    /// use tabletop::{Card, Deck, Suit};
    ///
    /// let mut deck = Deck::new(7);
    /// assert_eq!(deck.deal(), Ok(Card::new(Suit::Hearts, 1)));
    /// assert_eq!(deck.cards_left(), 51);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        Self {
            cards,
            cursor: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Puts every card back and shuffles the full deck with the deck's own
    /// generator.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.cursor = 0;
        log::trace!("deck shuffled");
    }

    /// Puts every card back and shuffles the full deck with `rng`.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.cursor = 0;
        log::trace!("deck shuffled with external generator");
    }

    /// Deals the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Exhausted`] once all 52 cards have been dealt.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        let card = *self.cards.get(self.cursor).ok_or(DealError::Exhausted)?;
        self.cursor += 1;
        log::trace!("dealt {card} ({} left)", self.cards_left());
        Ok(card)
    }

    /// Returns the number of cards not yet dealt.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Returns the cards dealt so far, in deal order.
    #[must_use]
    pub fn dealt(&self) -> &[Card] {
        &self.cards[..self.cursor]
    }

    /// Moves the given undealt cards to the top of the deck, in order, so the
    /// next deals return exactly these cards.
    ///
    /// The deck remains a permutation of the 52 cards. Nothing is moved if
    /// any card is unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotAvailable`] if a card has already been dealt
    /// or is listed twice.
    pub fn arrange_top(&mut self, top: &[Card]) -> Result<(), DealError> {
        let undealt = &self.cards[self.cursor..];
        for (index, card) in top.iter().enumerate() {
            if !undealt.contains(card) || top[..index].contains(card) {
                return Err(DealError::NotAvailable(*card));
            }
        }

        for (offset, card) in top.iter().enumerate() {
            let target = self.cursor + offset;
            if let Some(found) = self.cards[target..].iter().position(|c| c == card) {
                self.cards.swap(target, target + found);
            }
        }
        Ok(())
    }
}
