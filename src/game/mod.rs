//! Game engine and round flow.

use tracing::debug;

use crate::card::Card;
use crate::deck::{CardSource, Deck};
use crate::error::{ActionError, SettleError};
use crate::hand::Hand;
use crate::result::Settlement;
use crate::rules::Rules;

mod dealer;
pub mod state;

pub use dealer::{dealer_must_hit, settle_hands};
pub use state::GameState;

/// A single-player blackjack engine.
///
/// The game owns the draw source, the rules, and both hands. It is the only
/// place where dealer play and settlement happen; views read hands through
/// [`Game::player`] and [`Game::dealer`].
///
/// The engine has no internal synchronization. Drive it from one thread.
#[derive(Debug, Clone)]
pub struct Game<S = Deck> {
    /// Cards are drawn from here.
    source: S,
    /// Table rules.
    rules: Rules,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand. The first card is the up card.
    dealer: Hand,
    /// Current round state.
    state: GameState,
}

#[cfg(feature = "std")]
impl Game<Deck> {
    /// Creates a game with a shoe seeded from the operating system.
    ///
    /// The shoe holds `rules.decks` decks.
    #[must_use]
    pub fn new(rules: Rules) -> Self {
        Self::with_source(Deck::new(rules.decks), rules)
    }
}

impl Game<Deck> {
    /// Creates a game with a deterministically seeded shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Game, GameState, Rules};
    ///
    /// let mut game = Game::seeded(Rules::default(), 42);
    /// game.deal_initial();
    /// assert_eq!(game.state(), GameState::InRound);
    /// assert_eq!(game.player().len(), 2);
    /// ```
    #[must_use]
    pub fn seeded(rules: Rules, seed: u64) -> Self {
        Self::with_source(Deck::seeded(rules.decks, seed), rules)
    }
}

impl<S: CardSource> Game<S> {
    /// Creates a game drawing from the given source.
    #[must_use]
    pub const fn with_source(source: S, rules: Rules) -> Self {
        Self {
            source,
            rules,
            player: Hand::new(),
            dealer: Hand::new(),
            state: GameState::NotStarted,
        }
    }

    /// Starts a new round.
    ///
    /// Both hands are reset, then two cards each are dealt alternately:
    /// player, dealer, player, dealer.
    pub fn deal_initial(&mut self) {
        self.player.clear();
        self.dealer.clear();

        for _ in 0..2 {
            self.player.add(self.source.draw());
            self.dealer.add(self.source.draw());
        }

        self.state = GameState::InRound;
        debug!(player = %self.player, dealer_up = ?self.dealer.up_card(), "initial deal");
    }

    /// Draws one card into the player's hand and returns it.
    ///
    /// A hit that busts the player ends the round.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] unless a round is in progress.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.state != GameState::InRound {
            return Err(ActionError::InvalidState);
        }

        let card = self.source.draw();
        self.player.add(card);
        debug!(%card, total = self.player.total(), "player hits");

        if self.player.is_bust() {
            self.state = GameState::RoundOver;
        }

        Ok(card)
    }

    /// Deals, asks `hit` for each player decision, plays the dealer, and
    /// settles.
    ///
    /// `hit` receives the player's hand and the dealer's up card and returns
    /// `true` to take another card. It is not consulted when either side
    /// holds a natural. The dealer does not play when the player busts.
    ///
    /// # Errors
    ///
    /// Propagates [`Game::settle`] errors; after a deal none are expected.
    pub fn play_round<F>(&mut self, mut hit: F) -> Result<Settlement, SettleError>
    where
        F: FnMut(&Hand, Option<&Card>) -> bool,
    {
        self.deal_initial();

        if !self.player.is_blackjack() && !self.dealer.is_blackjack() {
            while !self.player.is_bust() && hit(&self.player, self.dealer.up_card()) {
                if self.hit().is_err() {
                    break;
                }
            }
        }

        if !self.player.is_bust() {
            self.dealer_play();
        }

        self.settle()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the table rules.
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the draw source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the draw source mutably, e.g. to restack it between rounds.
    pub const fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
