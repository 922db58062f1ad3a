//! Game state types.

/// Round lifecycle of a [`Game`](super::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No round has been dealt yet.
    #[default]
    NotStarted,
    /// Cards are dealt and the player may act.
    InRound,
    /// The player busted or the dealer has played; the round can be settled.
    RoundOver,
}
