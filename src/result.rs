//! Round outcomes.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use crate::hand::Role;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Both participants hold 21.
    Tie,
    /// The player was dealt a natural 21.
    PlayerBlackjack,
    /// The dealer was dealt a natural 21.
    DealerBlackjack,
    /// The player went over 21.
    PlayerBust,
    /// The dealer went over 21.
    DealerBust,
    /// Equal scores below 21, settled as a push.
    Draw,
    /// The dealer finished with the higher (or an equal) score.
    DealerWin,
    /// The player finished with the higher score.
    PlayerWin,
}

impl RoundOutcome {
    /// Settles a round from the two final scores, once neither side busted.
    ///
    /// Two 21s are a [`RoundOutcome::Tie`]. Any other equal pair goes to the
    /// dealer unless `dealer_wins_ties` is off, in which case it is a
    /// [`RoundOutcome::Draw`].
    #[must_use]
    pub const fn compare(player: u8, dealer: u8, dealer_wins_ties: bool) -> Self {
        if player == 21 && dealer == 21 {
            Self::Tie
        } else if dealer == player && !dealer_wins_ties {
            Self::Draw
        } else if dealer >= player {
            Self::DealerWin
        } else {
            Self::PlayerWin
        }
    }

    /// Returns who won, or `None` when nobody did.
    #[must_use]
    pub const fn winner(self) -> Option<Role> {
        match self {
            Self::Tie | Self::Draw => None,
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWin => Some(Role::Player),
            Self::DealerBlackjack | Self::PlayerBust | Self::DealerWin => Some(Role::Dealer),
        }
    }

    /// Returns whether the round ended on the initial deal.
    #[must_use]
    pub const fn is_natural(self) -> bool {
        matches!(
            self,
            Self::Tie | Self::PlayerBlackjack | Self::DealerBlackjack
        )
    }

    /// The line announced to the table when the round ends.
    #[must_use]
    pub fn message(self, player_name: &str) -> String {
        match self {
            Self::Tie => String::from("TIE!"),
            Self::PlayerBlackjack => format!("BLACKJACK! {player_name} wins!"),
            Self::DealerBlackjack => String::from("BLACKJACK! Dealer wins!"),
            Self::PlayerBust => format!("{player_name} busted! Dealer wins!"),
            Self::DealerBust => format!("Dealer busted! {player_name} wins!"),
            Self::Draw => String::from("It's a draw!"),
            Self::DealerWin => String::from("Dealer wins!"),
            Self::PlayerWin => format!("{player_name} wins!"),
        }
    }
}

/// Tally of finished rounds over a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds played to the end.
    pub rounds: usize,
    /// Rounds won by the player.
    pub player_wins: usize,
    /// Rounds won by the dealer.
    pub dealer_wins: usize,
    /// Rounds nobody won.
    pub pushes: usize,
    /// Times the shoe ran dry mid-round and was rebuilt.
    pub reshuffles: usize,
}

impl SessionSummary {
    /// Counts one finished round.
    pub const fn record(&mut self, outcome: RoundOutcome) {
        self.rounds += 1;
        match outcome.winner() {
            Some(Role::Player) => self.player_wins += 1,
            Some(Role::Dealer) => self.dealer_wins += 1,
            None => self.pushes += 1,
        }
    }
}
