use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::deck::CardSource;
use crate::error::SettleError;
use crate::hand::{Hand, HandValue};
use crate::result::{Outcome, Settlement};
use crate::rules::Rules;

use super::{Game, GameState};

/// Returns whether a dealer holding `value` must draw under `rules`.
///
/// The dealer draws below 17, and on a soft 17 only when the table hits
/// soft 17.
#[must_use]
pub const fn dealer_must_hit(value: HandValue, rules: &Rules) -> bool {
    value.total < 17 || (value.total == 17 && value.soft && rules.dealer_hits_soft_17)
}

/// Decides the outcome of a round from the final hands.
///
/// Checks run in a fixed priority: naturals first, then player bust, then
/// dealer bust, then the totals.
#[must_use]
pub fn settle_hands(player: &Hand, dealer: &Hand, rules: &Rules) -> (Outcome, f64) {
    let player_blackjack = player.is_blackjack();
    let dealer_blackjack = dealer.is_blackjack();

    if player_blackjack && dealer_blackjack {
        return (Outcome::Push, 0.0);
    }
    if player_blackjack {
        return (Outcome::PlayerBlackjack, rules.blackjack_pays);
    }
    if dealer_blackjack {
        return (Outcome::DealerWin, -1.0);
    }

    if player.is_bust() {
        return (Outcome::PlayerBust, -1.0);
    }
    if dealer.is_bust() {
        return (Outcome::DealerBust, 1.0);
    }

    let player_total = player.total();
    let dealer_total = dealer.total();
    if player_total > dealer_total {
        (Outcome::PlayerWin, 1.0)
    } else if player_total < dealer_total {
        (Outcome::DealerWin, -1.0)
    } else {
        (Outcome::Push, 0.0)
    }
}

impl<S: CardSource> Game<S> {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws until reaching 17 or higher. On a soft 17 the dealer
    /// draws only if `dealer_hits_soft_17` is set. Calling this again once
    /// the dealer stands draws nothing.
    ///
    /// Returns the cards drawn by the dealer.
    pub fn dealer_play(&mut self) -> Vec<Card> {
        let mut drawn_cards = Vec::new();

        while dealer_must_hit(self.dealer.value(), &self.rules) {
            let card = self.source.draw();
            self.dealer.add(card);
            drawn_cards.push(card);
        }

        if self.state == GameState::InRound {
            self.state = GameState::RoundOver;
        }

        debug!(
            drawn = drawn_cards.len(),
            dealer = %self.dealer,
            "dealer stands"
        );

        drawn_cards
    }

    /// Settles the round and returns the per-unit payout.
    ///
    /// Settlement does not change the game; calling it twice gives the same
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::NotDealt`] if either hand is empty.
    pub fn settle(&self) -> Result<Settlement, SettleError> {
        if self.player.is_empty() || self.dealer.is_empty() {
            return Err(SettleError::NotDealt);
        }

        let (outcome, payout) = settle_hands(&self.player, &self.dealer, &self.rules);
        debug!(%outcome, payout, "round settled");

        Ok(Settlement {
            outcome,
            payout,
            player_total: self.player.total(),
            dealer_total: self.dealer.total(),
        })
    }
}
