//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round at a time: the
//! initial deal, player hits, dealer play under S17 or H17, and settlement
//! into an [`Outcome`] with a per-unit payout. Rendering is left to callers,
//! which read the hands and drive the round.
//!
//! # Example
//!
//! ```
//! use bjcore::{Card, Game, Outcome, Rank, Rules, StackedDeck, Suit};
//!
//! let deck = StackedDeck::new([
//!     Card::new(Rank::Ace, Suit::Clubs),    // player
//!     Card::new(Rank::Ten, Suit::Hearts),   // dealer up
//!     Card::new(Rank::King, Suit::Diamonds), // player
//!     Card::new(Rank::Ten, Suit::Spades),   // dealer hole
//! ]);
//! let mut game = Game::with_source(deck, Rules::default());
//! game.deal_initial();
//!
//! let settlement = game.settle().unwrap();
//! assert_eq!(settlement.outcome, Outcome::PlayerBlackjack);
//! assert_eq!(settlement.payout, 1.5);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;
pub mod rules;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{CardSource, Deck, StackedDeck};
pub use error::{ActionError, ParseCardError, RulesError, SettleError};
pub use game::{Game, GameState, dealer_must_hit, settle_hands};
pub use hand::{Hand, HandValue, evaluate};
pub use result::{Outcome, Settlement};
pub use rules::Rules;
