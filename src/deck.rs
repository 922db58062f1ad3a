//! Draw sources: the shuffled, self-replenishing shoe and a fixed-order deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Anything the engine can draw cards from.
///
/// Drawing always succeeds; sources replenish themselves rather than run dry.
pub trait CardSource {
    /// Removes and returns the next card.
    fn draw(&mut self) -> Card;
}

/// A shoe of one or more standard decks.
///
/// The shoe is rebuilt and reshuffled before a draw whenever it is empty or
/// fewer than a quarter of its cards remain.
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha8Rng> {
    /// Cards left in the shoe; the next card drawn is the last one.
    cards: Vec<Card>,
    /// Number of 52-card decks in the shoe.
    decks: u8,
    /// Number of times the shoe has been built and shuffled.
    reshuffles: u32,
    /// Random source used for shuffling.
    rng: R,
}

#[cfg(feature = "std")]
impl Deck<ChaCha8Rng> {
    /// Creates a shuffled shoe seeded from the operating system.
    ///
    /// A deck count of 0 is treated as 1.
    #[must_use]
    pub fn new(decks: u8) -> Self {
        Self::with_rng(decks, ChaCha8Rng::from_os_rng())
    }
}

impl Deck<ChaCha8Rng> {
    /// Creates a shuffled shoe with a deterministic seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{CardSource, Deck};
    ///
    /// let mut a = Deck::seeded(1, 7);
    /// let mut b = Deck::seeded(1, 7);
    /// assert_eq!(a.draw(), b.draw());
    /// ```
    #[must_use]
    pub fn seeded(decks: u8, seed: u64) -> Self {
        Self::with_rng(decks, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Deck<R> {
    /// Creates a shuffled shoe using the given random source.
    ///
    /// A deck count of 0 is treated as 1.
    #[must_use]
    pub fn with_rng(decks: u8, rng: R) -> Self {
        let mut deck = Self {
            cards: Vec::new(),
            decks: decks.max(1),
            reshuffles: 0,
            rng,
        };
        deck.reshuffle();
        deck
    }

    /// Rebuilds the full shoe and shuffles it.
    pub fn reshuffle(&mut self) {
        let mut cards = Vec::with_capacity(self.capacity());

        for _ in 0..self.decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }

        cards.shuffle(&mut self.rng);
        self.cards = cards;
        self.reshuffles += 1;
    }

    /// Returns whether the next draw will rebuild the shoe.
    ///
    /// This is the case when the shoe is empty or fewer than 25% of its
    /// cards remain.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.cards.is_empty() || self.cards.len() * 4 < self.capacity()
    }

    /// Returns the number of decks in the shoe.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the size of a freshly built shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns how many times the shoe has been built, including at
    /// construction.
    #[must_use]
    pub const fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    /// Returns the cards remaining, last element drawn next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl<R: Rng> CardSource for Deck<R> {
    fn draw(&mut self) -> Card {
        if self.needs_reshuffle() {
            debug!(
                remaining = self.cards.len(),
                decks = self.decks,
                "penetration reached, reshuffling shoe"
            );
            self.reshuffle();
        }

        // A rebuilt shoe holds at least one full deck.
        debug_assert!(!self.cards.is_empty());
        let Some(card) = self.cards.pop() else {
            self.reshuffle();
            return self.draw();
        };
        trace!(%card, remaining = self.cards.len(), "card drawn");
        card
    }
}

/// A deck that deals a caller-fixed sequence before falling back to a shoe.
///
/// Useful for rigging a round: the first card given is the first card drawn.
///
/// ```
/// use bjcore::{Card, CardSource, Rank, StackedDeck, Suit};
///
/// let mut deck = StackedDeck::new([
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Hearts),
/// ]);
/// assert_eq!(deck.draw().rank, Rank::Ace);
/// assert_eq!(deck.draw().rank, Rank::King);
/// assert_eq!(deck.remaining_stacked(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct StackedDeck<R = ChaCha8Rng> {
    /// Fixed cards in reverse draw order.
    stacked: Vec<Card>,
    /// Shoe used once the fixed cards are exhausted.
    fallback: Deck<R>,
}

impl StackedDeck<ChaCha8Rng> {
    /// Creates a stacked deck backed by a single-deck shoe with seed 0.
    #[must_use]
    pub fn new(draws: impl IntoIterator<Item = Card>) -> Self {
        Self::with_fallback(draws, Deck::seeded(1, 0))
    }
}

impl<R: Rng> StackedDeck<R> {
    /// Creates a stacked deck backed by the given shoe.
    #[must_use]
    pub fn with_fallback(draws: impl IntoIterator<Item = Card>, fallback: Deck<R>) -> Self {
        let mut stacked: Vec<Card> = draws.into_iter().collect();
        stacked.reverse();
        Self { stacked, fallback }
    }

    /// Returns the number of fixed cards not yet drawn.
    #[must_use]
    pub fn remaining_stacked(&self) -> usize {
        self.stacked.len()
    }

    /// Returns the fallback shoe.
    #[must_use]
    pub const fn fallback(&self) -> &Deck<R> {
        &self.fallback
    }
}

impl<R: Rng> CardSource for StackedDeck<R> {
    fn draw(&mut self) -> Card {
        match self.stacked.pop() {
            Some(card) => {
                trace!(%card, remaining = self.stacked.len(), "stacked card drawn");
                card
            }
            None => self.fallback.draw(),
        }
    }
}
