//! A blackjack game against an automated dealer, with optional `no_std`
//! support.
//!
//! The crate provides a [`Game`] type that owns a multi-deck [`Shoe`] and
//! both seats at the table, and walks each round from the opening deal
//! through the player's turn and the dealer's fixed policy to an outcome.
//! All prompting and display goes through the [`Interaction`] trait, so the
//! game itself never touches a terminal.
//!
//! # Example
//!
//! ```
//! use bjdealer::{Game, GameOptions, RoundPhase};
//!
//! let mut game = Game::new("Ada", GameOptions::default(), 42).unwrap();
//! let mut round = game.deal_initial().unwrap();
//! if round.phase() == RoundPhase::PlayerTurn {
//!     game.stay(&mut round).unwrap();
//!     game.dealer_play(&mut round).unwrap();
//! }
//! assert!(round.outcome().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod interaction;
pub mod options;
pub mod result;
pub mod session;
pub mod shoe;

// Re-export main types
pub use card::{ACE_VALUE, Card, DECK_SIZE, Suit, reference_deck};
pub use error::{ActionError, ConfigError, InputError, SessionError, ShoeError};
pub use game::{DealerAction, Game, RoundContext, RoundPhase, dealer_should_hit};
pub use hand::{Hand, Participant, Role, score_cards};
pub use interaction::{Decision, Interaction};
pub use options::GameOptions;
pub use result::{RoundOutcome, SessionSummary};
pub use shoe::Shoe;
