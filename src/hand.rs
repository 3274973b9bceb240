//! Hands, scoring, and the participants holding them.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{ACE_VALUE, Card};

/// Scores a set of cards.
///
/// Aces are added after everything else. All but the last count 1; the
/// last counts 11 if the running total is still 10 or less, otherwise 1.
/// At most one ace is ever worth 11, and the result may exceed 21.
#[must_use]
pub fn score_cards(cards: &[Card]) -> u8 {
    let mut sum: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.value() == ACE_VALUE {
            aces += 1;
        }
        sum = sum.saturating_add(card.value());
    }

    for ace in 1..=aces {
        if ace == aces && sum <= 10 {
            sum += 11;
        } else {
            sum = sum.saturating_add(1);
        }
    }

    sum
}

/// Cards held by one participant, with the score kept up to date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    score: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            score: 0,
        }
    }

    /// Adds a card to the hand and rescores it.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.score = score_cards(&self.cards);
    }

    /// Returns the cards in the hand, in the order received.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.score > 21
    }

    /// Returns whether the hand is a natural 21 on two cards.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score == 21
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
        self.score = 0;
    }
}

/// Which side of the table a participant sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The human player.
    Player,
    /// The automated dealer.
    Dealer,
}

/// A named seat at the table and its hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    role: Role,
    hand: Hand,
}

impl Participant {
    /// Creates a participant with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            hand: Hand::new(),
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the participant's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns whether this is the dealer.
    #[must_use]
    pub const fn is_dealer(&self) -> bool {
        matches!(self.role, Role::Dealer)
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Shorthand for `self.hand().score()`.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.hand.score()
    }

    /// Adds a card to the participant's hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Empties the hand and zeroes the score.
    pub fn reset(&mut self) {
        self.hand.clear();
    }
}
