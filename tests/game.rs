//! Game integration tests.

#![allow(clippy::float_cmp)]

use bjcore::{
    ActionError, Card, CardSource, Game, GameState, Outcome, Rank, Rules, SettleError,
    StackedDeck, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn rigged(draws: &[Card], rules: Rules) -> Game<StackedDeck> {
    Game::with_source(StackedDeck::new(draws.iter().copied()), rules)
}

#[test]
fn deal_alternates_player_and_dealer() {
    let mut game = rigged(
        &[
            card(Rank::Two, Suit::Hearts),   // player
            card(Rank::Three, Suit::Clubs),  // dealer up
            card(Rank::Four, Suit::Spades),  // player
            card(Rank::Five, Suit::Diamonds), // dealer hole
        ],
        Rules::default(),
    );
    assert_eq!(game.state(), GameState::NotStarted);

    game.deal_initial();

    assert_eq!(game.state(), GameState::InRound);
    assert_eq!(
        game.player().cards(),
        &[card(Rank::Two, Suit::Hearts), card(Rank::Four, Suit::Spades)]
    );
    assert_eq!(
        game.dealer().cards(),
        &[card(Rank::Three, Suit::Clubs), card(Rank::Five, Suit::Diamonds)]
    );
    assert_eq!(game.dealer().up_card(), Some(&card(Rank::Three, Suit::Clubs)));
}

#[test]
fn deal_resets_previous_hands() {
    let mut game = Game::seeded(Rules::default(), 3);
    game.deal_initial();
    game.hit().unwrap();
    game.deal_initial();

    assert_eq!(game.player().len(), 2);
    assert_eq!(game.dealer().len(), 2);
    assert_eq!(game.state(), GameState::InRound);
}

#[test]
fn player_blackjack_beats_dealer_twenty() {
    let mut game = rigged(
        &[
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::King, Suit::Diamonds),
            card(Rank::Ten, Suit::Spades),
        ],
        Rules::default(),
    );
    game.deal_initial();

    let settlement = game.settle().unwrap();
    assert_eq!(settlement.outcome, Outcome::PlayerBlackjack);
    assert_eq!(settlement.payout, 1.5);
    assert_eq!(settlement.net(4.0), 6.0);
}

#[test]
fn blackjack_payout_follows_rules() {
    let mut game = rigged(
        &[
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Nine, Suit::Hearts),
            card(Rank::Queen, Suit::Diamonds),
            card(Rank::Ten, Suit::Spades),
        ],
        Rules::default().with_blackjack_pays(1.2),
    );
    game.deal_initial();

    let settlement = game.settle().unwrap();
    assert_eq!(settlement.outcome, Outcome::PlayerBlackjack);
    assert_eq!(settlement.payout, 1.2);
}

#[test]
fn both_naturals_push() {
    let mut game = rigged(
        &[
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Ace, Suit::Hearts),
            card(Rank::King, Suit::Diamonds),
            card(Rank::Queen, Suit::Spades),
        ],
        Rules::default(),
    );
    game.deal_initial();

    let settlement = game.settle().unwrap();
    assert_eq!(settlement.outcome, Outcome::Push);
    assert_eq!(settlement.payout, 0.0);
}

#[test]
fn dealer_natural_beats_player_twenty_one_built_from_three_cards() {
    let mut game = rigged(
        &[
            card(Rank::Seven, Suit::Clubs),  // player
            card(Rank::Ace, Suit::Hearts),   // dealer up
            card(Rank::Seven, Suit::Diamonds), // player
            card(Rank::Jack, Suit::Spades),  // dealer hole
            card(Rank::Seven, Suit::Hearts), // player hit
        ],
        Rules::default(),
    );
    game.deal_initial();
    game.hit().unwrap();
    assert_eq!(game.player().total(), 21);
    assert!(!game.player().is_blackjack());

    let settlement = game.settle().unwrap();
    assert_eq!(settlement.outcome, Outcome::DealerWin);
    assert_eq!(settlement.payout, -1.0);
}

#[test]
fn equal_totals_push_after_dealer_play() {
    let mut game = rigged(
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Nine, Suit::Diamonds),
            card(Rank::Nine, Suit::Spades),
        ],
        Rules::default(),
    );
    game.deal_initial();
    let drawn = game.dealer_play();
    assert!(drawn.is_empty());

    let settlement = game.settle().unwrap();
    assert_eq!(settlement.outcome, Outcome::Push);
    assert_eq!(settlement.payout, 0.0);
    assert_eq!(settlement.player_total, 19);
    assert_eq!(settlement.dealer_total, 19);
}

#[test]
fn player_bust_loses_regardless_of_dealer() {
    let mut game = rigged(
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Nine, Suit::Diamonds),
            card(Rank::Six, Suit::Spades),
            card(Rank::Five, Suit::Hearts), // player hit -> 24
            card(Rank::King, Suit::Clubs),  // dealer would bust on this
        ],
        Rules::default(),
    );
    game.deal_initial();
    game.hit().unwrap();
    assert!(game.player().is_bust());
    assert_eq!(game.state(), GameState::RoundOver);

    let settlement = game.settle().unwrap();
    assert_eq!(settlement.outcome, Outcome::PlayerBust);
    assert_eq!(settlement.payout, -1.0);

    // Playing the dealer out to a bust does not rescue the player.
    game.dealer_play();
    assert!(game.dealer().is_bust());
    assert_eq!(game.settle().unwrap().outcome, Outcome::PlayerBust);
}

#[test]
fn dealer_bust_pays_player() {
    let mut game = rigged(
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Eight, Suit::Diamonds),
            card(Rank::Six, Suit::Spades),
            card(Rank::King, Suit::Clubs), // dealer draw -> 26
        ],
        Rules::default(),
    );
    game.deal_initial();
    let drawn = game.dealer_play();
    assert_eq!(drawn, vec![card(Rank::King, Suit::Clubs)]);
    assert_eq!(game.dealer().total(), 26);

    let settlement = game.settle().unwrap();
    assert_eq!(settlement.outcome, Outcome::DealerBust);
    assert_eq!(settlement.payout, 1.0);
}

#[test]
fn higher_total_wins() {
    let mut game = rigged(
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Queen, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
        ],
        Rules::default(),
    );
    game.deal_initial();
    game.dealer_play();

    let settlement = game.settle().unwrap();
    assert_eq!(settlement.outcome, Outcome::PlayerWin);
    assert_eq!(settlement.payout, 1.0);
    assert!(settlement.is_player_win());
}

#[test]
fn lower_total_loses() {
    let mut game = rigged(
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Six, Suit::Diamonds),
            card(Rank::Eight, Suit::Spades),
        ],
        Rules::default(),
    );
    game.deal_initial();
    game.dealer_play();

    let settlement = game.settle().unwrap();
    assert_eq!(settlement.outcome, Outcome::DealerWin);
    assert_eq!(settlement.payout, -1.0);
}

#[test]
fn dealer_draws_to_seventeen() {
    let mut game = rigged(
        &[
            card(Rank::Ten, Suit::Clubs),   // player
            card(Rank::Six, Suit::Hearts),  // dealer up
            card(Rank::Six, Suit::Diamonds), // player
            card(Rank::Ten, Suit::Spades),  // dealer hole
            card(Rank::Two, Suit::Clubs),   // dealer draw -> 18
            card(Rank::Nine, Suit::Diamonds),
        ],
        Rules::s17(),
    );
    game.deal_initial();
    let drawn = game.dealer_play();

    assert_eq!(drawn.len(), 1);
    assert_eq!(game.dealer().total(), 18);
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.source().remaining_stacked(), 1);
}

#[test]
fn dealer_stands_on_soft_seventeen_under_s17() {
    let mut game = rigged(
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Eight, Suit::Diamonds),
            card(Rank::Six, Suit::Spades),
            card(Rank::Four, Suit::Clubs),
        ],
        Rules::s17(),
    );
    game.deal_initial();
    assert_eq!(game.dealer().total(), 17);
    assert!(game.dealer().is_soft());

    assert!(game.dealer_play().is_empty());
    assert_eq!(game.dealer().total(), 17);
}

#[test]
fn dealer_hits_soft_seventeen_under_h17() {
    let mut game = rigged(
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Eight, Suit::Diamonds),
            card(Rank::Six, Suit::Spades),
            card(Rank::Ten, Suit::Diamonds), // hard 17, stands
            card(Rank::Four, Suit::Clubs),
        ],
        Rules::h17(),
    );
    game.deal_initial();

    let drawn = game.dealer_play();
    assert_eq!(drawn, vec![card(Rank::Ten, Suit::Diamonds)]);
    assert_eq!(game.dealer().total(), 17);
    assert!(!game.dealer().is_soft());
}

#[test]
fn dealer_hits_soft_seventeen_again_after_drawing_to_it() {
    let mut game = rigged(
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Eight, Suit::Diamonds),
            card(Rank::Two, Suit::Spades),   // soft 13
            card(Rank::Four, Suit::Clubs),   // soft 17
            card(Rank::Three, Suit::Hearts), // soft 20
        ],
        Rules::h17(),
    );
    game.deal_initial();

    let drawn = game.dealer_play();
    assert_eq!(drawn.len(), 2);
    assert_eq!(game.dealer().total(), 20);
}

#[test]
fn repeated_dealer_play_is_a_no_op() {
    let mut game = Game::seeded(Rules::default(), 11);
    game.deal_initial();
    game.dealer_play();
    let dealer_cards = game.dealer().cards().to_vec();

    assert!(game.dealer_play().is_empty());
    assert_eq!(game.dealer().cards(), dealer_cards.as_slice());
    assert!(game.dealer().total() >= 17);
}

#[test]
fn settle_is_repeatable() {
    let mut game = Game::seeded(Rules::default(), 5);
    game.deal_initial();
    game.dealer_play();

    assert_eq!(game.settle().unwrap(), game.settle().unwrap());
}

#[test]
fn settle_before_deal_is_rejected() {
    let game = Game::seeded(Rules::default(), 1);
    assert_eq!(game.settle().unwrap_err(), SettleError::NotDealt);
}

#[test]
fn hit_outside_round_is_rejected() {
    let mut game = rigged(
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Queen, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
        ],
        Rules::default(),
    );
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);

    game.deal_initial();
    game.dealer_play();
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn hit_returns_drawn_card() {
    let mut game = rigged(
        &[
            card(Rank::Two, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Three, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
            card(Rank::Four, Suit::Hearts),
        ],
        Rules::default(),
    );
    game.deal_initial();

    let drawn = game.hit().unwrap();
    assert_eq!(drawn, card(Rank::Four, Suit::Hearts));
    assert_eq!(game.player().total(), 9);
    assert_eq!(game.state(), GameState::InRound);
}

#[test]
fn play_round_skips_decisions_on_naturals() {
    let mut game = rigged(
        &[
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Nine, Suit::Diamonds),
            card(Rank::King, Suit::Spades),
        ],
        Rules::default(),
    );
    let mut asked = 0;
    let settlement = game
        .play_round(|_, _| {
            asked += 1;
            true
        })
        .unwrap();

    assert_eq!(asked, 0);
    assert_eq!(settlement.outcome, Outcome::DealerWin);
    assert_eq!(game.dealer().len(), 2);
}

#[test]
fn play_round_stops_asking_after_bust() {
    let mut game = rigged(
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Six, Suit::Hearts),
            card(Rank::Five, Suit::Diamonds),
            card(Rank::Ten, Suit::Spades),
            card(Rank::Nine, Suit::Hearts), // player busts at 24
        ],
        Rules::default(),
    );
    let settlement = game.play_round(|_, _| true).unwrap();

    assert_eq!(settlement.outcome, Outcome::PlayerBust);
    assert_eq!(game.player().len(), 3);
    // The dealer does not play when the player has busted.
    assert_eq!(game.dealer().len(), 2);
}

#[test]
fn play_round_passes_dealer_up_card() {
    let mut game = rigged(
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Six, Suit::Hearts),
            card(Rank::Seven, Suit::Diamonds),
            card(Rank::Ten, Suit::Spades),
            card(Rank::Two, Suit::Clubs), // dealer -> 18
        ],
        Rules::default(),
    );
    let mut seen = Vec::new();
    let settlement = game
        .play_round(|hand, up| {
            seen.push((hand.total(), up.copied()));
            false
        })
        .unwrap();

    assert_eq!(seen, vec![(17, Some(card(Rank::Six, Suit::Hearts)))]);
    assert_eq!(settlement.outcome, Outcome::DealerWin);
}

#[test]
fn seeded_rounds_are_reproducible() {
    fn play(seed: u64) -> Vec<(Outcome, Vec<Card>, Vec<Card>)> {
        let mut game = Game::seeded(Rules::h17(), seed);
        (0..30)
            .map(|_| {
                let settlement = game.play_round(|hand, _| hand.total() < 17).unwrap();
                (
                    settlement.outcome,
                    game.player().cards().to_vec(),
                    game.dealer().cards().to_vec(),
                )
            })
            .collect()
    }

    assert_eq!(play(2024), play(2024));
}

#[test]
fn rigged_round_is_reproducible() {
    let draws = [
        card(Rank::Five, Suit::Clubs),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Four, Suit::Spades),
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Spades),
    ];

    let run = || {
        let mut game = rigged(&draws, Rules::default());
        game.deal_initial();
        game.hit().unwrap();
        game.dealer_play();
        game.settle().unwrap()
    };

    let first = run();
    assert_eq!(first, run());
    // Player 5+6+8 = 19, dealer 9+4+2+3 = 18.
    assert_eq!(first.outcome, Outcome::PlayerWin);
}

#[test]
fn stacked_deck_falls_back_to_shoe() {
    let mut deck = StackedDeck::new([card(Rank::Ace, Suit::Spades)]);
    assert_eq!(deck.draw(), card(Rank::Ace, Suit::Spades));
    assert_eq!(deck.remaining_stacked(), 0);

    let fallback_len = deck.fallback().len();
    deck.draw();
    assert_eq!(deck.fallback().len(), fallback_len - 1);
}
