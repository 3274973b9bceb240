//! Running a whole session through an [`Interaction`].

use crate::error::SessionError;
use crate::game::Game;
use crate::interaction::{INVALID_DECK_COUNT, Interaction, parse_play_again};
use crate::options::{GameOptions, parse_deck_count, parse_player_name};
use crate::result::SessionSummary;

/// Plays rounds until the player declines another.
///
/// Asks for a name and a deck count first; the deck count answer replaces
/// `options.decks` and is asked again until it parses. Each round after
/// the first starts from a fresh shoe. The session only ends when the
/// player answers "no" to playing again.
///
/// # Errors
///
/// Returns an error only if a round cannot be dealt, which a shoe of at
/// least one deck rules out.
pub fn run<I: Interaction + ?Sized>(
    io: &mut I,
    options: GameOptions,
    seed: u64,
) -> Result<SessionSummary, SessionError> {
    let name = parse_player_name(&io.prompt_name());
    let decks = loop {
        match parse_deck_count(&io.prompt_deck_count()) {
            Ok(decks) => break decks,
            Err(err) => {
                log::debug!("deck count rejected: {err}");
                io.announce(INVALID_DECK_COUNT);
            }
        }
    };

    let mut game = Game::new(name, options.with_decks(decks), seed)?;
    log::info!("session started for {} with {decks} deck(s)", game.player().name());

    let mut summary = SessionSummary::default();
    let mut round = game.deal_initial()?;
    loop {
        let outcome = game.play_round(round, io)?;
        summary.record(outcome);

        if !ask_play_again(io) {
            break;
        }
        round = game.reset_round()?;
    }
    summary.reshuffles = game.reshuffles();

    log::info!(
        "session over after {} round(s): {} won, {} lost, {} pushed",
        summary.rounds,
        summary.player_wins,
        summary.dealer_wins,
        summary.pushes
    );

    Ok(summary)
}

fn ask_play_again<I: Interaction + ?Sized>(io: &mut I) -> bool {
    loop {
        if let Ok(again) = parse_play_again(&io.prompt_play_again()) {
            return again;
        }
    }
}
