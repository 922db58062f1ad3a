//! Table rules.

use crate::error::RulesError;

/// Rules for a blackjack table.
///
/// Use the builder methods to customize rules:
///
/// ```
/// use bjcore::Rules;
///
/// let rules = Rules::default()
///     .with_decks(6)
///     .with_blackjack_pays(1.2)
///     .with_dealer_hits_soft_17(true);
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    /// Whether the dealer hits a soft 17 (H17). Stands on it otherwise (S17).
    pub dealer_hits_soft_17: bool,
    /// Payout multiplier for a player blackjack (1.5 pays 3:2).
    pub blackjack_pays: f64,
    /// Number of decks in the shoe built by the game.
    pub decks: u8,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            dealer_hits_soft_17: false,
            blackjack_pays: 1.5,
            decks: 1,
        }
    }
}

impl Rules {
    /// Dealer stands on soft 17, blackjack pays 3:2.
    #[must_use]
    pub fn s17() -> Self {
        Self::default()
    }

    /// Dealer hits soft 17, blackjack pays 3:2.
    #[must_use]
    pub fn h17() -> Self {
        Self::default().with_dealer_hits_soft_17(true)
    }

    /// Sets whether the dealer hits soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::Rules;
    ///
    /// let rules = Rules::default().with_dealer_hits_soft_17(true);
    /// assert!(rules.dealer_hits_soft_17);
    /// ```
    #[must_use]
    pub const fn with_dealer_hits_soft_17(mut self, hits: bool) -> Self {
        self.dealer_hits_soft_17 = hits;
        self
    }

    /// Sets the blackjack payout multiplier.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::Rules;
    ///
    /// let rules = Rules::default().with_blackjack_pays(1.2);
    /// assert_eq!(rules.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the number of decks. 0 is treated as 1 when the shoe is built.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::Rules;
    ///
    /// let rules = Rules::default().with_decks(6);
    /// assert_eq!(rules.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Checks that the rules describe a playable table.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::InvalidBlackjackPayout`] if the blackjack payout
    /// is negative or not finite.
    pub fn validate(&self) -> Result<(), RulesError> {
        if !self.blackjack_pays.is_finite() || self.blackjack_pays < 0.0 {
            return Err(RulesError::InvalidBlackjackPayout);
        }
        Ok(())
    }
}
