//! Game configuration options.

extern crate alloc;

use alloc::string::String;

use crate::error::ConfigError;

/// Name given to a player who leaves the name prompt empty.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjdealer::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_dealer_wins_ties(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks in the shoe. Fixed for the life of a game.
    pub decks: u8,
    /// Whether equal scores below 21 go to the dealer.
    ///
    /// When `false` they are settled as a draw. Two 21s are always a tie.
    pub dealer_wins_ties: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            dealer_wins_ties: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjdealer::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether equal scores below 21 go to the dealer.
    ///
    /// # Example
    ///
    /// ```
    /// use bjdealer::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_wins_ties(false);
    /// assert!(!options.dealer_wins_ties);
    /// ```
    #[must_use]
    pub const fn with_dealer_wins_ties(mut self, dealer_wins: bool) -> Self {
        self.dealer_wins_ties = dealer_wins;
        self
    }
}

/// Parses the answer to the deck count prompt.
///
/// An empty answer means one deck. Anything else must be a plain positive
/// integer: no sign, no leading zeros, no surrounding spaces.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDeckCount`] for any other input, including
/// zero and counts that do not fit in a `u8`.
///
/// # Example
///
/// ```
/// use bjdealer::options::parse_deck_count;
///
/// assert_eq!(parse_deck_count(""), Ok(1));
/// assert_eq!(parse_deck_count("6"), Ok(6));
/// assert!(parse_deck_count("06").is_err());
/// ```
pub fn parse_deck_count(input: &str) -> Result<u8, ConfigError> {
    let input = input.trim_end_matches(['\r', '\n']);
    if input.is_empty() {
        return Ok(1);
    }

    let canonical = input.bytes().all(|b| b.is_ascii_digit()) && !input.starts_with('0');
    if !canonical {
        return Err(ConfigError::InvalidDeckCount);
    }

    match input.parse::<u8>() {
        Ok(decks) if decks >= 1 => Ok(decks),
        _ => Err(ConfigError::InvalidDeckCount),
    }
}

/// Parses the answer to the name prompt, falling back to
/// [`DEFAULT_PLAYER_NAME`].
#[must_use]
pub fn parse_player_name(input: &str) -> String {
    let name = input.trim_end_matches(['\r', '\n']);
    if name.is_empty() {
        String::from(DEFAULT_PLAYER_NAME)
    } else {
        String::from(name)
    }
}
