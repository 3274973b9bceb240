//! Game engine and round flow.

use alloc::string::String;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::{ActionError, ConfigError, ShoeError};
use crate::hand::{Participant, Role};
use crate::options::GameOptions;
use crate::result::RoundOutcome;
use crate::shoe::Shoe;

mod actions;
mod dealer;
mod round;
pub mod state;

pub use dealer::{DealerAction, dealer_should_hit};
pub use state::{RoundContext, RoundPhase};

/// Name shown for the automated dealer.
pub const DEALER_NAME: &str = "Dealer";

/// A blackjack table with one player and one automated dealer.
///
/// The game owns the shoe, both participants, and the random number
/// generator used for every shuffle. Rounds are driven by passing a
/// [`RoundContext`] through [`Game::hit`], [`Game::stay`] and
/// [`Game::dealer_step`], or all at once through [`Game::play_round`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Cards left to deal.
    shoe: Shoe,
    /// The human player.
    player: Participant,
    /// The automated dealer.
    dealer: Participant,
    /// Times the shoe ran dry mid-round.
    reshuffles: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a freshly shuffled shoe.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDeckCount`] if `options.decks` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bjdealer::{Game, GameOptions};
    ///
    /// let game = Game::new("Ada", GameOptions::default().with_decks(2), 42).unwrap();
    /// assert_eq!(game.shoe().len(), 104);
    /// ```
    pub fn new(
        player_name: impl Into<String>,
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut shoe = Shoe::new(options.decks)?;
        shoe.shuffle(&mut rng);
        log::debug!("new game with {} deck(s), seed {seed}", options.decks);

        Ok(Self {
            options,
            shoe,
            player: Participant::new(player_name, Role::Player),
            dealer: Participant::new(DEALER_NAME, Role::Dealer),
            reshuffles: 0,
            rng,
        })
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe mutably, e.g. to stack it for a scripted round.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Participant {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the participant sitting in `role`.
    #[must_use]
    pub const fn participant(&self, role: Role) -> &Participant {
        match role {
            Role::Player => &self.player,
            Role::Dealer => &self.dealer,
        }
    }

    /// Returns how many times the shoe ran dry mid-round and was rebuilt.
    #[must_use]
    pub const fn reshuffles(&self) -> usize {
        self.reshuffles
    }

    /// Rebuilds and reshuffles the shoe.
    fn replenish(&mut self) {
        self.shoe.rebuild();
        self.shoe.shuffle(&mut self.rng);
    }

    /// Draws a card, refilling the shoe first if it has run dry.
    fn draw(&mut self) -> Result<Card, ShoeError> {
        if self.shoe.is_empty() {
            self.replenish();
            self.reshuffles += 1;
            log::debug!("shoe exhausted, reshuffled ({} so far)", self.reshuffles);
        }
        self.shoe.draw()
    }

    /// Deals one card to `role` and rescores their hand.
    fn deal_to(&mut self, role: Role) -> Result<Card, ShoeError> {
        let card = self.draw()?;
        match role {
            Role::Player => self.player.add_card(card),
            Role::Dealer => self.dealer.add_card(card),
        }
        Ok(card)
    }

    /// Deals the opening hands and checks for naturals.
    ///
    /// Cards go player, dealer, player, dealer. If either side now holds 21
    /// the returned round is already resolved; otherwise it waits on the
    /// player's turn.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if either hand still holds
    /// cards from a previous round.
    pub fn deal_initial(&mut self) -> Result<RoundContext, ActionError> {
        if !self.player.hand().is_empty() || !self.dealer.hand().is_empty() {
            return Err(ActionError::InvalidState);
        }

        let mut round = RoundContext::new();
        for role in [Role::Player, Role::Dealer, Role::Player, Role::Dealer] {
            round.set_active(role);
            self.deal_to(role)?;
        }
        round.set_active(Role::Player);

        match (self.player.score() == 21, self.dealer.score() == 21) {
            (true, true) => round.resolve(RoundOutcome::Tie),
            (true, false) => round.resolve(RoundOutcome::PlayerBlackjack),
            (false, true) => round.resolve(RoundOutcome::DealerBlackjack),
            (false, false) => round.enter(RoundPhase::PlayerTurn),
        }

        if let Some(outcome) = round.outcome() {
            log::info!("natural on the deal: {outcome:?}");
        }

        Ok(round)
    }

    /// Starts the next round.
    ///
    /// Clears both hands, replaces the shoe with a freshly shuffled one of
    /// the configured size, and deals the opening hands.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Game::deal_initial`].
    pub fn reset_round(&mut self) -> Result<RoundContext, ActionError> {
        self.player.reset();
        self.dealer.reset();
        self.replenish();
        self.deal_initial()
    }
}
