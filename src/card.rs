//! Card types and the reference deck.

extern crate alloc;

use alloc::string::String;
use core::fmt;

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
    /// All suits, in reference deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Single-letter label used in card faces.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted and score as zero.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Numeric value of the card.
    ///
    /// Number cards count their face value and J/Q/K count 10. Aces return
    /// [`ACE_VALUE`]; whether they count 1 or 11 is decided by the hand.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self.rank {
            2..=10 => self.rank,
            11..=13 => 10,
            _ => ACE_VALUE,
        }
    }

    /// Returns whether this card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// Rank + suit label, e.g. `"AS"`, `"10H"`, `"KC"`.
    #[must_use]
    pub fn face(&self) -> String {
        alloc::format!("{self}")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            1 => write!(f, "A")?,
            11 => write!(f, "J")?,
            12 => write!(f, "Q")?,
            13 => write!(f, "K")?,
            rank => write!(f, "{rank}")?,
        }
        write!(f, "{}", self.suit.letter())
    }
}

/// Value reported by an ace before the hand resolves it to 1 or 11.
pub const ACE_VALUE: u8 = 0;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns the fixed 52-card deck every shoe is built from.
///
/// Suits come in [`Suit::ALL`] order, and each suit runs A, 2..10, J, Q, K.
#[must_use]
pub fn reference_deck() -> [Card; DECK_SIZE] {
    core::array::from_fn(|index| Card::new(Suit::ALL[index / 13], (index % 13) as u8 + 1))
}
