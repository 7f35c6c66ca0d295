//! Game configuration options.

use crate::gomoku::Player;

/// Configuration options for a five-in-a-row game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use tabletop::{GomokuOptions, Player};
///
/// let options = GomokuOptions::default()
///     .with_board_size(15)
///     .with_first_player(Player::B);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GomokuOptions {
    /// Number of rows and columns on the square board. Boards are clamped
    /// to `1..=MAX_BOARD_SIZE`.
    pub board_size: usize,
    /// Run length that wins the game. A length of 1 (or 0) makes every
    /// placement a win.
    pub win_length: usize,
    /// Player who moves first in each new game.
    pub first_player: Player,
}

impl Default for GomokuOptions {
    fn default() -> Self {
        Self {
            board_size: 13,
            win_length: 5,
            first_player: Player::A,
        }
    }
}

impl GomokuOptions {
    /// Sets the board size. The board is clamped to `1..=MAX_BOARD_SIZE`
    /// when a game starts.
    ///
    /// # Example
    ///
    /// ```
    /// use tabletop::GomokuOptions;
    ///
    /// let options = GomokuOptions::default().with_board_size(19);
    /// assert_eq!(options.board_size, 19);
    /// ```
    #[must_use]
    pub const fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Sets the winning run length. Zero is raised to 1.
    ///
    /// # Example
    ///
    /// ```
    /// use tabletop::GomokuOptions;
    ///
    /// let options = GomokuOptions::default().with_win_length(4);
    /// assert_eq!(options.win_length, 4);
    /// ```
    #[must_use]
    pub const fn with_win_length(mut self, length: usize) -> Self {
        self.win_length = if length == 0 { 1 } else { length };
        self
    }

    /// Sets the player who moves first.
    ///
    /// # Example
    ///
    /// ```
    /// use tabletop::{GomokuOptions, Player};
    ///
    /// let options = GomokuOptions::default().with_first_player(Player::B);
    /// assert_eq!(options.first_player, Player::B);
    /// ```
    #[must_use]
    pub const fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }
}

/// Configuration options for a blackjack round.
///
/// ```
/// use tabletop::BlackjackOptions;
///
/// let options = BlackjackOptions::default()
///     .with_dealer_stands_on(18)
///     .with_five_card_charlie(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlackjackOptions {
    /// Dealer stops drawing once the hand reaches this value.
    pub dealer_stands_on: u16,
    /// Whether five cards without busting wins for the player.
    pub five_card_charlie: bool,
    /// Whether equal totals go to the dealer. Otherwise they push.
    pub dealer_wins_ties: bool,
}

impl Default for BlackjackOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: 17,
            five_card_charlie: true,
            dealer_wins_ties: true,
        }
    }
}

impl BlackjackOptions {
    /// Sets the value at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use tabletop::BlackjackOptions;
    ///
    /// let options = BlackjackOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u16) -> Self {
        self.dealer_stands_on = value;
        self
    }

    /// Sets whether five cards without busting wins.
    ///
    /// # Example
    ///
    /// ```
    /// use tabletop::BlackjackOptions;
    ///
    /// let options = BlackjackOptions::default().with_five_card_charlie(false);
    /// assert_eq!(options.five_card_charlie, false);
    /// ```
    #[must_use]
    pub const fn with_five_card_charlie(mut self, enabled: bool) -> Self {
        self.five_card_charlie = enabled;
        self
    }

    /// Sets whether ties go to the dealer.
    ///
    /// # Example
    ///
    /// ```
    /// use tabletop::BlackjackOptions;
    ///
    /// let options = BlackjackOptions::default().with_dealer_wins_ties(false);
    /// assert_eq!(options.dealer_wins_ties, false);
    /// ```
    #[must_use]
    pub const fn with_dealer_wins_ties(mut self, enabled: bool) -> Self {
        self.dealer_wins_ties = enabled;
        self
    }
}
