//! Round state types.

use crate::hand::Role;
use crate::result::RoundOutcome;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Dealing the opening two cards each.
    DealingInitial,
    /// Waiting for the player to hit or stay.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the outcome is known.
    Resolved,
}

/// State of the round in progress.
///
/// Created by [`Game::deal_initial`](super::Game::deal_initial) and passed
/// back into every transition until the phase reaches
/// [`RoundPhase::Resolved`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundContext {
    phase: RoundPhase,
    active: Role,
    outcome: Option<RoundOutcome>,
}

impl RoundContext {
    pub(super) const fn new() -> Self {
        Self {
            phase: RoundPhase::DealingInitial,
            active: Role::Player,
            outcome: None,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns whose turn it is.
    #[must_use]
    pub const fn active(&self) -> Role {
        self.active
    }

    /// Returns the outcome once resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self.phase, RoundPhase::Resolved)
    }

    pub(super) const fn set_active(&mut self, active: Role) {
        self.active = active;
    }

    pub(super) const fn enter(&mut self, phase: RoundPhase) {
        self.phase = phase;
    }

    pub(super) const fn resolve(&mut self, outcome: RoundOutcome) {
        self.phase = RoundPhase::Resolved;
        self.outcome = Some(outcome);
    }
}
