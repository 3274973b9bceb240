use crate::error::ActionError;
use crate::interaction::{Decision, INVALID_DECISION, Interaction};
use crate::result::RoundOutcome;

use super::{DealerAction, Game, RoundContext, RoundPhase};

impl Game {
    /// Plays a dealt round to the end through `io`.
    ///
    /// The table is rendered straight away and again after every card. The
    /// player is asked to hit or stay until they stay or bust; unrecognised
    /// answers are rejected without touching the round. The dealer then
    /// plays, pausing before each decision. The outcome is announced and
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe cannot produce a card, or if `round`
    /// was never dealt.
    pub fn play_round<I: Interaction + ?Sized>(
        &mut self,
        mut round: RoundContext,
        io: &mut I,
    ) -> Result<RoundOutcome, ActionError> {
        io.render_hands(&self.player, &self.dealer);

        while round.phase() == RoundPhase::PlayerTurn {
            match io.prompt_hit_or_stay().parse::<Decision>() {
                Ok(Decision::Hit) => {
                    self.hit(&mut round)?;
                    io.render_hands(&self.player, &self.dealer);
                }
                Ok(Decision::Stay) => self.stay(&mut round)?,
                Err(_) => io.announce(INVALID_DECISION),
            }
        }

        while round.phase() == RoundPhase::DealerTurn {
            io.pace();
            if let DealerAction::Hit(_) = self.dealer_step(&mut round)? {
                io.render_hands(&self.player, &self.dealer);
            }
        }

        let outcome = round.outcome().ok_or(ActionError::InvalidState)?;
        io.announce(&outcome.message(self.player.name()));

        Ok(outcome)
    }
}
