//! Card types and their textual form.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits, in deck build order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// The suit symbol used in the card's textual form.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '\u{2660}',
            Self::Hearts => '\u{2665}',
            Self::Diamonds => '\u{2666}',
            Self::Clubs => '\u{2663}',
        }
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            '\u{2660}' | 'S' | 's' => Some(Self::Spades),
            '\u{2665}' | 'H' | 'h' => Some(Self::Hearts),
            '\u{2666}' | 'D' | 'd' => Some(Self::Diamonds),
            '\u{2663}' | 'C' | 'c' => Some(Self::Clubs),
            _ => None,
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace, valued 11 or 1.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All thirteen ranks, ace first.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Base blackjack value. Aces count 11 here; hands demote them to 1.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace => 11,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }

    /// Returns whether this is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }

    /// Rank text as printed on the card.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.as_str().eq_ignore_ascii_case(s))
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Base blackjack value of the card.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.as_str(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the textual form produced by `Display`, e.g. `"K♠"` or `"10♥"`.
    /// The ASCII suit letters `S`, `H`, `D` and `C` are accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(suit_char) = s.chars().next_back() else {
            return Err(ParseCardError::Empty);
        };
        let suit = Suit::from_char(suit_char).ok_or(ParseCardError::InvalidSuit)?;
        let rank_text = &s[..s.len() - suit_char.len_utf8()];
        let rank = Rank::parse(rank_text).ok_or(ParseCardError::InvalidRank)?;
        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
