use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Role;
use crate::result::RoundOutcome;

use super::{Game, RoundContext, RoundPhase};

impl Game {
    const fn ensure_player_turn(round: &RoundContext) -> Result<(), ActionError> {
        if !matches!(round.phase(), RoundPhase::PlayerTurn) {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 resolves the round as [`RoundOutcome::PlayerBust`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not on the player's turn or the shoe
    /// cannot produce a card.
    pub fn hit(&mut self, round: &mut RoundContext) -> Result<Card, ActionError> {
        Self::ensure_player_turn(round)?;

        let card = self.deal_to(Role::Player)?;
        if self.player.hand().is_bust() {
            log::info!("{} busted with {}", self.player.name(), self.player.score());
            round.resolve(RoundOutcome::PlayerBust);
        }

        Ok(card)
    }

    /// Player action: Stay (hand the turn to the dealer).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not on the player's turn.
    pub fn stay(&mut self, round: &mut RoundContext) -> Result<(), ActionError> {
        Self::ensure_player_turn(round)?;

        round.enter(RoundPhase::DealerTurn);
        round.set_active(Role::Dealer);

        Ok(())
    }
}
