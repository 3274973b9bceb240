//! The multi-deck draw pile.

extern crate alloc;

use alloc::vec::Vec;
use rand::Rng;

use crate::card::{Card, DECK_SIZE, reference_deck};
use crate::error::{ConfigError, ShoeError};

/// Cards left to deal, built from one or more copies of the reference deck.
///
/// The top of the shoe is the end of the underlying vector, so drawing is
/// O(1). The shoe never refills itself: when it runs dry, the owner calls
/// [`Shoe::rebuild`] and [`Shoe::shuffle`] before drawing again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
}

impl Shoe {
    /// Builds an unshuffled shoe of `decks` concatenated reference decks.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDeckCount`] if `decks` is zero.
    pub fn new(decks: u8) -> Result<Self, ConfigError> {
        if decks < 1 {
            return Err(ConfigError::InvalidDeckCount);
        }
        Ok(Self {
            cards: Self::create_cards(decks),
            decks,
        })
    }

    /// Creates a shoe holding exactly `cards`, drawn from the back.
    ///
    /// Rebuilding such a shoe restores `decks` full reference decks.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>, decks: u8) -> Self {
        Self { cards, decks }
    }

    fn create_cards(decks: u8) -> Vec<Card> {
        let deck = reference_deck();
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);
        for _ in 0..decks {
            cards.extend_from_slice(&deck);
        }
        cards
    }

    /// Discards whatever is left and restores `decks` full decks in
    /// reference order.
    pub fn rebuild(&mut self) {
        self.cards = Self::create_cards(self.decks);
        log::debug!("rebuilt shoe with {} deck(s)", self.decks);
    }

    /// Shuffles the shoe in place.
    ///
    /// Every position is swapped with a position picked uniformly from the
    /// whole shoe, not just the unvisited tail. Given the same RNG state the
    /// resulting order is always the same.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let len = self.cards.len();
        for index in 0..len {
            let other = rng.random_range(0..len);
            self.cards.swap(index, other);
        }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop().ok_or(ShoeError::Empty)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the configured number of decks.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
