extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Role;
use crate::result::RoundOutcome;

use super::{Game, RoundContext, RoundPhase};

/// What the dealer did on one step of their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerAction {
    /// The dealer drew this card.
    Hit(Card),
    /// The dealer stopped drawing.
    Stay,
}

/// The fixed dealer policy.
///
/// The dealer keeps drawing while on 16 or less, or while behind the
/// player. It stays once it is above 16 and level with or ahead of the
/// player.
#[must_use]
pub const fn dealer_should_hit(dealer: u8, player: u8) -> bool {
    dealer <= 16 || dealer < player
}

impl Game {
    /// Plays one dealer decision.
    ///
    /// Drawing past 21 resolves the round as [`RoundOutcome::DealerBust`].
    /// Staying settles the round by comparing scores.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not on the dealer's turn or the shoe
    /// cannot produce a card.
    pub fn dealer_step(&mut self, round: &mut RoundContext) -> Result<DealerAction, ActionError> {
        if !matches!(round.phase(), RoundPhase::DealerTurn) {
            return Err(ActionError::InvalidState);
        }

        let player = self.player.score();
        let dealer = self.dealer.score();

        if !dealer_should_hit(dealer, player) {
            let outcome = RoundOutcome::compare(player, dealer, self.options.dealer_wins_ties);
            log::debug!("dealer stays on {dealer} against {player}");
            log::info!("round settled: {outcome:?}");
            round.resolve(outcome);
            return Ok(DealerAction::Stay);
        }

        let card = self.deal_to(Role::Dealer)?;
        log::debug!("dealer draws {card} on {dealer} against {player}");

        if self.dealer.hand().is_bust() {
            log::info!("dealer busted with {}", self.dealer.score());
            round.resolve(RoundOutcome::DealerBust);
        }

        Ok(DealerAction::Hit(card))
    }

    /// Dealer plays their hand to the end.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not on the dealer's turn or the shoe
    /// cannot produce a card.
    pub fn dealer_play(&mut self, round: &mut RoundContext) -> Result<Vec<Card>, ActionError> {
        let mut drawn_cards = Vec::new();

        loop {
            match self.dealer_step(round)? {
                DealerAction::Hit(card) => drawn_cards.push(card),
                DealerAction::Stay => break,
            }
            if round.is_resolved() {
                break;
            }
        }

        Ok(drawn_cards)
    }
}
