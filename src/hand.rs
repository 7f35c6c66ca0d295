//! A player's hand and its scoring rules.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::HandError;

/// How a hand is summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Scoring {
    /// Blackjack total: face cards count 10, aces 11 or 1.
    #[default]
    Blackjack,
    /// Plain rank sum: ace 1, jack 11, queen 12, king 13.
    FaceValue,
}

fn blackjack_points(rank: u8) -> u16 {
    match rank {
        1 => 11,
        2..=10 => u16::from(rank),
        11..=13 => 10,
        _ => 0,
    }
}

fn evaluate_blackjack(cards: &[Card]) -> (u16, bool) {
    let mut value: u16 = 0;
    let mut aces: u16 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += blackjack_points(card.rank);
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Cards accumulated by one player over a round, in the order received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the first occurrence of `card`. Returns whether it was held.
    pub fn remove_card(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::IndexOutOfRange`] if `index` is not below
    /// [`Hand::len`].
    pub fn remove_at(&mut self, index: usize) -> Result<Card, HandError> {
        self.check_index(index)?;
        Ok(self.cards.remove(index))
    }

    /// Returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::IndexOutOfRange`] if `index` is not below
    /// [`Hand::len`].
    pub fn card(&self, index: usize) -> Result<Card, HandError> {
        self.check_index(index)?;
        Ok(self.cards[index])
    }

    fn check_index(&self, index: usize) -> Result<(), HandError> {
        if index < self.cards.len() {
            Ok(())
        } else {
            Err(HandError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            })
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Discards every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Sorts by suit, then by rank within each suit.
    pub fn sort_by_suit(&mut self) {
        self.cards.sort_by_key(|c| (c.suit, c.rank));
    }

    /// Sorts by rank, then by suit among equal ranks.
    pub fn sort_by_value(&mut self) {
        self.cards.sort_by_key(|c| (c.rank, c.suit));
    }

    /// Sums the hand under the given scoring rule.
    #[must_use]
    pub fn value(&self, scoring: Scoring) -> u16 {
        match scoring {
            Scoring::Blackjack => self.blackjack_value(),
            Scoring::FaceValue => self.cards.iter().map(|c| u16::from(c.rank)).sum(),
        }
    }

    /// Calculates the blackjack value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1,
    /// downgrading one ace at a time.
    #[must_use]
    pub fn blackjack_value(&self) -> u16 {
        evaluate_blackjack(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_blackjack(&self.cards).1
    }

    /// Returns whether the hand is a natural: two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.blackjack_value() == 21
    }

    /// Returns whether the blackjack value is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.blackjack_value() > 21
    }
}
