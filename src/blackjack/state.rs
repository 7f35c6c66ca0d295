//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Cards have not been dealt yet.
    Waiting,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the result is available.
    RoundOver,
}
