//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input was empty.
    #[error("card text is empty")]
    Empty,
    /// The rank part was not one of A, 2-10, J, Q, K.
    #[error("invalid card rank")]
    InvalidRank,
    /// The suit part was not a known suit symbol or letter.
    #[error("invalid card suit")]
    InvalidSuit,
}

/// Errors that can occur when validating rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RulesError {
    /// Blackjack payout is negative, infinite, or NaN.
    #[error("blackjack payout must be a finite, non-negative multiplier")]
    InvalidBlackjackPayout,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
}

/// Errors that can occur during settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// No cards have been dealt this round.
    #[error("no cards have been dealt")]
    NotDealt,
}
