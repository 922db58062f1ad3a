//! Hand representation and value arithmetic.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Best value of a set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandValue {
    /// Highest total not above 21, or the minimal total when every
    /// valuation busts.
    pub total: u32,
    /// Whether an ace is still counted as 11 at `total`.
    pub soft: bool,
}

/// Evaluates a set of cards.
///
/// Every ace starts at 11. While the total is above 21 and an ace is still
/// counted high, one ace is demoted to 1. A hand is soft when at least one
/// ace survives the demotion pass.
///
/// ```
/// use bjcore::{Card, Rank, Suit, hand::evaluate};
///
/// let cards = [
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Nine, Suit::Clubs),
/// ];
/// let value = evaluate(&cards);
/// assert_eq!(value.total, 21);
/// assert!(value.soft);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandValue {
    let mut total: u32 = 0;
    let mut high_aces: u32 = 0;

    for card in cards {
        if card.rank.is_ace() {
            high_aces += 1;
        }
        total += u32::from(card.value());
    }

    while total > 21 && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }

    HandValue {
        total,
        soft: high_aces > 0,
    }
}

/// An ordered collection of cards, in deal order.
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

    /// Creates a hand holding the given cards in order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Adds a card to the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, shown face up for the dealer.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the value of the hand.
    #[must_use]
    pub fn value(&self) -> HandValue {
        evaluate(&self.cards)
    }

    /// Calculates the total of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.value().total
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.value().soft
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > 21
    }

    /// Returns whether the hand is a natural: two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total() == 21
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

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "  ({})", self.total())
    }
}
