//! Card, shoe, hand, and input parsing tests.

use std::collections::HashMap;

use bjdealer::interaction::parse_play_again;
use bjdealer::options::{DEFAULT_PLAYER_NAME, parse_deck_count, parse_player_name};
use bjdealer::{
    ACE_VALUE, Card, ConfigError, DECK_SIZE, Decision, GameOptions, Hand, InputError, Participant,
    Role, Shoe, ShoeError, Suit, reference_deck, score_cards,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn counts(cards: &[Card]) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(*card).or_insert(0) += 1;
    }
    counts
}

#[test]
fn card_faces_and_values() {
    assert_eq!(card(Suit::Spades, 1).face(), "AS");
    assert_eq!(card(Suit::Hearts, 10).face(), "10H");
    assert_eq!(card(Suit::Clubs, 13).face(), "KC");
    assert_eq!(card(Suit::Diamonds, 11).to_string(), "JD");

    assert_eq!(card(Suit::Spades, 1).value(), ACE_VALUE);
    assert!(card(Suit::Spades, 1).is_ace());
    assert_eq!(card(Suit::Hearts, 7).value(), 7);
    assert_eq!(card(Suit::Hearts, 12).value(), 10);
    assert_eq!(card(Suit::Hearts, 13).value(), 10);
}

#[test]
fn reference_deck_layout() {
    let deck = reference_deck();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck[0], card(Suit::Spades, 1));
    assert_eq!(deck[12], card(Suit::Spades, 13));
    assert_eq!(deck[13], card(Suit::Hearts, 1));
    assert_eq!(deck[26], card(Suit::Diamonds, 1));
    assert_eq!(deck[51], card(Suit::Clubs, 13));
    assert_eq!(counts(&deck).len(), DECK_SIZE);
    assert_eq!(deck.iter().filter(|c| c.is_ace()).count(), 4);
}

#[test]
fn shoe_holds_whole_decks() {
    assert_eq!(Shoe::new(0).unwrap_err(), ConfigError::InvalidDeckCount);

    for decks in [1_u8, 2, 6] {
        let shoe = Shoe::new(decks).unwrap();
        assert_eq!(shoe.len(), DECK_SIZE * decks as usize);
        assert_eq!(shoe.decks(), decks);

        let counts = counts(shoe.cards());
        assert_eq!(counts.len(), DECK_SIZE);
        assert!(counts.values().all(|&n| n == decks as usize));
    }
}

#[test]
fn shuffle_is_a_permutation() {
    let original = Shoe::new(3).unwrap();
    let mut shuffled = original.clone();
    shuffled.shuffle(&mut ChaCha8Rng::seed_from_u64(9));

    assert_eq!(shuffled.len(), original.len());
    assert_eq!(counts(shuffled.cards()), counts(original.cards()));
    assert_ne!(shuffled.cards(), original.cards());
}

#[test]
fn shuffle_swaps_across_whole_shoe() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut expected = Shoe::new(1).unwrap().cards().to_vec();
    let len = expected.len();
    let mut replay = rng.clone();
    for index in 0..len {
        let other = replay.random_range(0..len);
        expected.swap(index, other);
    }

    let mut shoe = Shoe::new(1).unwrap();
    shoe.shuffle(&mut rng);
    assert_eq!(shoe.cards(), expected.as_slice());
}

#[test]
fn shuffle_is_deterministic_per_seed() {
    let mut first = Shoe::new(2).unwrap();
    let mut second = Shoe::new(2).unwrap();
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
    assert_eq!(first, second);

    let mut third = Shoe::new(2).unwrap();
    third.shuffle(&mut ChaCha8Rng::seed_from_u64(43));
    assert_ne!(first, third);
}

#[test]
fn draw_takes_from_the_back_until_empty() {
    let mut shoe = Shoe::from_cards(vec![card(Suit::Hearts, 2), card(Suit::Clubs, 9)], 1);
    assert_eq!(shoe.draw(), Ok(card(Suit::Clubs, 9)));
    assert_eq!(shoe.draw(), Ok(card(Suit::Hearts, 2)));
    assert!(shoe.is_empty());
    assert_eq!(shoe.draw(), Err(ShoeError::Empty));
}

#[test]
fn rebuild_refills_an_empty_shoe() {
    let mut shoe = Shoe::from_cards(Vec::new(), 2);
    assert_eq!(shoe.draw(), Err(ShoeError::Empty));

    shoe.rebuild();
    shoe.shuffle(&mut ChaCha8Rng::seed_from_u64(1));
    assert!(shoe.draw().is_ok());
    assert_eq!(shoe.len(), DECK_SIZE * 2 - 1);
}

#[test]
fn score_without_aces_is_the_sum() {
    let cards = [
        card(Suit::Spades, 10),
        card(Suit::Hearts, 9),
        card(Suit::Diamonds, 5),
    ];
    assert_eq!(score_cards(&cards), 24);
    assert_eq!(score_cards(&cards[..2]), 19);
    assert_eq!(score_cards(&[card(Suit::Clubs, 12), card(Suit::Clubs, 4)]), 14);
    assert_eq!(score_cards(&[]), 0);
}

#[test]
fn single_ace_counts_eleven_only_when_it_fits() {
    for first in 2..=13 {
        for second in 2..=13 {
            let others = [card(Suit::Hearts, first), card(Suit::Clubs, second)];
            let sum = others[0].value() + others[1].value();
            let expected = if sum <= 10 { sum + 11 } else { sum + 1 };
            assert_eq!(
                score_cards(&[others[0], card(Suit::Spades, 1), others[1]]),
                expected
            );
        }
    }

    let soft = [card(Suit::Spades, 1), card(Suit::Hearts, 6)];
    assert_eq!(score_cards(&soft), 17);

    let hard = [
        card(Suit::Spades, 1),
        card(Suit::Hearts, 6),
        card(Suit::Clubs, 8),
    ];
    assert_eq!(score_cards(&hard), 15);
}

#[test]
fn only_the_last_ace_can_count_eleven() {
    let pair = [card(Suit::Spades, 1), card(Suit::Hearts, 1)];
    assert_eq!(score_cards(&pair), 12);

    let with_nine = [
        card(Suit::Spades, 1),
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 9),
    ];
    assert_eq!(score_cards(&with_nine), 21);

    let heavy = [
        card(Suit::Spades, 1),
        card(Suit::Hearts, 9),
        card(Suit::Diamonds, 1),
        card(Suit::Clubs, 13),
    ];
    assert_eq!(score_cards(&heavy), 21);

    let four = [
        card(Suit::Spades, 1),
        card(Suit::Hearts, 1),
        card(Suit::Diamonds, 1),
        card(Suit::Clubs, 1),
    ];
    assert_eq!(score_cards(&four), 14);
}

#[test]
fn hand_rescores_on_every_card() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Spades, 1));
    assert_eq!(hand.score(), 11);
    hand.add_card(card(Suit::Spades, 13));
    assert_eq!(hand.score(), 21);
    assert!(hand.is_blackjack());
    assert!(!hand.is_bust());

    hand.add_card(card(Suit::Hearts, 5));
    assert_eq!(hand.score(), 16);
    assert!(!hand.is_blackjack());

    let mut bust = Hand::new();
    bust.add_card(card(Suit::Spades, 10));
    bust.add_card(card(Suit::Hearts, 9));
    bust.add_card(card(Suit::Diamonds, 5));
    assert_eq!(bust.score(), 24);
    assert!(bust.is_bust());

    bust.clear();
    assert!(bust.is_empty());
    assert_eq!(bust.score(), 0);
}

#[test]
fn participant_reset_clears_hand() {
    let mut dealer = Participant::new("Dealer", Role::Dealer);
    assert!(dealer.is_dealer());
    assert!(!Participant::new("Ada", Role::Player).is_dealer());

    dealer.add_card(card(Suit::Clubs, 10));
    dealer.add_card(card(Suit::Clubs, 7));
    assert_eq!(dealer.score(), 17);
    assert_eq!(dealer.hand().len(), 2);

    dealer.reset();
    assert!(dealer.hand().is_empty());
    assert_eq!(dealer.score(), 0);
    assert_eq!(dealer.name(), "Dealer");
}

#[test]
fn deck_count_parsing() {
    assert_eq!(parse_deck_count(""), Ok(1));
    assert_eq!(parse_deck_count("\n"), Ok(1));
    assert_eq!(parse_deck_count("3"), Ok(3));
    assert_eq!(parse_deck_count("8\r\n"), Ok(8));
    assert_eq!(parse_deck_count("255"), Ok(255));

    for bad in ["0", "-1", "+2", "01", " 2", "2 ", "2.5", "abc", "256", "1000"] {
        assert_eq!(
            parse_deck_count(bad),
            Err(ConfigError::InvalidDeckCount),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn player_name_defaults_when_empty() {
    assert_eq!(parse_player_name(""), DEFAULT_PLAYER_NAME);
    assert_eq!(parse_player_name("\n"), DEFAULT_PLAYER_NAME);
    assert_eq!(parse_player_name("Ada\n"), "Ada");
}

#[test]
fn decision_and_play_again_parsing() {
    assert_eq!("h".parse::<Decision>(), Ok(Decision::Hit));
    assert_eq!("H".parse::<Decision>(), Ok(Decision::Hit));
    assert_eq!("s".parse::<Decision>(), Ok(Decision::Stay));
    assert_eq!("S\n".parse::<Decision>(), Ok(Decision::Stay));
    for bad in ["", "hit", "x", " h"] {
        assert_eq!(bad.parse::<Decision>(), Err(InputError::InvalidInput));
    }

    assert_eq!(parse_play_again("y"), Ok(true));
    assert_eq!(parse_play_again("Y"), Ok(true));
    assert_eq!(parse_play_again("n"), Ok(false));
    assert_eq!(parse_play_again("N"), Ok(false));
    assert_eq!(parse_play_again("yes"), Err(InputError::InvalidInput));
}

#[test]
fn options_builder_sets_fields() {
    let defaults = GameOptions::default();
    assert_eq!(defaults.decks, 1);
    assert!(defaults.dealer_wins_ties);

    let options = GameOptions::default()
        .with_decks(4)
        .with_dealer_wins_ties(false);
    assert_eq!(options.decks, 4);
    assert!(!options.dealer_wins_ties);
}
