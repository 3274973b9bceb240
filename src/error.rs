//! Error types for game operations.

use thiserror::Error;

/// Errors raised while configuring a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Deck count is zero, negative, or not a number.
    #[error("deck count must be a positive whole number")]
    InvalidDeckCount,
}

/// Errors raised while reading a player's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The answer matched none of the accepted choices.
    #[error("invalid input")]
    InvalidInput,
}

/// Errors raised by the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left to draw.
    #[error("no cards left in the shoe")]
    Empty,
}

/// Errors that can occur during round transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round phase for this action.
    #[error("invalid round phase for this action")]
    InvalidState,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

impl From<ShoeError> for ActionError {
    fn from(err: ShoeError) -> Self {
        match err {
            ShoeError::Empty => Self::NoCards,
        }
    }
}

/// Errors that end a session early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The game could not be configured.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A round could not be played out.
    #[error(transparent)]
    Action(#[from] ActionError),
}
