//! Round result types for blackjack.

/// Who took the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The player won.
    Player,
    /// The dealer won.
    Dealer,
    /// Equal totals with ties not going to the dealer.
    Push,
}

/// Why the round ended the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// The winner was dealt a natural 21.
    Blackjack,
    /// The loser went over 21.
    Bust,
    /// The player held five cards without going over 21.
    FiveCards,
    /// The winner's total was higher.
    HigherTotal,
    /// Both totals were equal.
    Tie,
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Who took the round.
    pub winner: Winner,
    /// How the round was decided.
    pub reason: Reason,
    /// The player's final blackjack value.
    pub player_value: u16,
    /// The dealer's final blackjack value.
    pub dealer_value: u16,
}
