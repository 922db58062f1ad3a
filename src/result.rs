//! Round outcome types for settlement.

use core::fmt;

/// How a round ended, from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player has a natural and the dealer does not.
    PlayerBlackjack,
    /// Player total beats the dealer total.
    PlayerWin,
    /// Dealer total beats the player total, or the dealer has a natural.
    DealerWin,
    /// Tie, including both sides holding a natural.
    Push,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
}

impl Outcome {
    /// Stable snake-case tag for the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlayerBlackjack => "player_blackjack",
            Self::PlayerWin => "player_win",
            Self::DealerWin => "dealer_win",
            Self::Push => "push",
            Self::PlayerBust => "player_bust",
            Self::DealerBust => "dealer_bust",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of settling a round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settlement {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// Net payout per unit bet: positive is a win, negative a loss.
    pub payout: f64,
    /// The player's final total.
    pub player_total: u32,
    /// The dealer's final total.
    pub dealer_total: u32,
}

impl Settlement {
    /// Net amount won or lost for the given bet.
    ///
    /// ```
    /// use bjcore::{Outcome, Settlement};
    ///
    /// let settlement = Settlement {
    ///     outcome: Outcome::PlayerBlackjack,
    ///     payout: 1.5,
    ///     player_total: 21,
    ///     dealer_total: 20,
    /// };
    /// assert_eq!(settlement.net(10.0), 15.0);
    /// ```
    #[must_use]
    pub fn net(&self, bet: f64) -> f64 {
        self.payout * bet
    }

    /// Returns whether the player came out ahead.
    #[must_use]
    pub fn is_player_win(&self) -> bool {
        self.payout > 0.0
    }
}
