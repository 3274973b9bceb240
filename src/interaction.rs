//! The boundary between the game and whatever shows it to a person.
//!
//! The game never touches a terminal. It asks an [`Interaction`] for raw
//! answers, parses them itself, and hands back hands and messages to show.

extern crate alloc;

use alloc::string::String;
use core::str::FromStr;

use crate::error::InputError;
use crate::hand::Participant;

/// Shown when the deck count answer is rejected.
pub const INVALID_DECK_COUNT: &str = "Invalid input. Please try again.";

/// Shown when the hit/stay answer is rejected.
pub const INVALID_DECISION: &str = "Invalid entry. Please try again.";

/// Everything the game needs from the outside world.
///
/// Prompt methods return the raw line the person typed; the game decides
/// whether it is valid and asks again if not.
pub trait Interaction {
    /// Asks for the player's name.
    fn prompt_name(&mut self) -> String;

    /// Asks how many decks to play with. Empty means one.
    fn prompt_deck_count(&mut self) -> String;

    /// Asks the player to hit (`h`) or stay (`s`).
    fn prompt_hit_or_stay(&mut self) -> String;

    /// Asks whether to play another round (`y`/`n`).
    fn prompt_play_again(&mut self) -> String;

    /// Shows both hands with names and scores.
    fn render_hands(&mut self, player: &Participant, dealer: &Participant);

    /// Shows a one-line message such as a round result.
    fn announce(&mut self, message: &str);

    /// Short pause before each dealer decision.
    fn pace(&mut self);
}

/// A player's choice on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Stop drawing.
    Stay,
}

impl FromStr for Decision {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_end_matches(['\r', '\n']) {
            "h" | "H" => Ok(Self::Hit),
            "s" | "S" => Ok(Self::Stay),
            _ => Err(InputError::InvalidInput),
        }
    }
}

/// Parses the answer to the play-again prompt.
///
/// # Errors
///
/// Returns [`InputError::InvalidInput`] unless the answer is `y`, `Y`, `n`
/// or `N`.
pub fn parse_play_again(input: &str) -> Result<bool, InputError> {
    match input.trim_end_matches(['\r', '\n']) {
        "y" | "Y" => Ok(true),
        "n" | "N" => Ok(false),
        _ => Err(InputError::InvalidInput),
    }
}
