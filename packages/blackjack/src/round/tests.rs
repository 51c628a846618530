use super::*;
use crate::{HandOutcome, Rank, Suit};

fn c(rank: Rank) -> Card {
    Card::new(rank, Suit::Hearts)
}

/// Deck whose first four draws are player, player, dealer, dealer.
fn deck(player: [Rank; 2], dealer: [Rank; 2], rest: &[Rank]) -> Deck {
    let mut cards = vec![c(player[0]), c(player[1]), c(dealer[0]), c(dealer[1])];
    cards.extend(rest.iter().map(|r| c(*r)));
    Deck::stacked(cards)
}

fn finish_dealer(round: &mut RoundState) -> Settlement {
    while round.dealer_step().unwrap().is_some() {}
    round.settle().unwrap()
}

#[test]
fn test_deal_requires_bet() {
    let result = RoundState::deal(Deck::ordered(), 0);
    assert_eq!(result.err(), Some(GameError::NoBetPlaced));
}

#[test]
fn test_deal_order_player_then_dealer() {
    let (round, events) =
        RoundState::deal(deck([Rank::Seven, Rank::Nine], [Rank::Ten, Rank::Six], &[]), 100).unwrap();

    assert_eq!(round.phase(), GamePhase::PlayerTurn);
    assert_eq!(round.player_hand().cards, vec![c(Rank::Seven), c(Rank::Nine)]);
    assert_eq!(round.dealer_hand().cards, vec![c(Rank::Ten), c(Rank::Six)]);
    assert_eq!(round.player_hand().value(), 16);
    assert!(!round.is_split());
    assert_eq!(round.active_hand(), ActiveHand::Player);
    assert_eq!(events.len(), 4);
    assert_eq!(round.deck_remaining(), 0);
}

#[test]
fn test_player_blackjack_skips_to_dealer() {
    let (round, events) =
        RoundState::deal(deck([Rank::Ace, Rank::King], [Rank::Ten, Rank::Seven], &[]), 100).unwrap();
    assert_eq!(round.phase(), GamePhase::DealerTurn);
    assert!(events.contains(&RoundEvent::Blackjack(ActiveHand::Player)));
}

#[test]
fn test_simultaneous_twenty_one_is_push() {
    let (mut round, _) =
        RoundState::deal(deck([Rank::Ace, Rank::King], [Rank::Queen, Rank::Ace], &[]), 100).unwrap();
    let settlement = finish_dealer(&mut round);
    assert_eq!(settlement.results[0].outcome, HandOutcome::Push);
    assert_eq!(settlement.total_payout(), 100);
}

#[test]
fn test_hit_bust_forces_dealer_turn() {
    let (mut round, _) = RoundState::deal(
        deck([Rank::Seven, Rank::Nine], [Rank::Ten, Rank::Six], &[Rank::King, Rank::Two]),
        100,
    )
    .unwrap();

    let events = round.hit().unwrap();
    assert!(events.contains(&RoundEvent::Bust(ActiveHand::Player)));
    assert_eq!(round.phase(), GamePhase::DealerTurn);
    assert_eq!(round.hit(), Err(GameError::WrongPhase(GamePhase::DealerTurn)));

    // Dealer still plays out: 16 -> 18
    let settlement = finish_dealer(&mut round);
    assert_eq!(round.dealer_hand().value(), 18);
    assert_eq!(settlement.results[0].outcome, HandOutcome::Bust);
    assert_eq!(settlement.total_payout(), 0);
}

#[test]
fn test_stand_and_dealer_busts() {
    let (mut round, _) = RoundState::deal(
        deck([Rank::Ten, Rank::Eight], [Rank::Ten, Rank::Six], &[Rank::Nine]),
        50,
    )
    .unwrap();
    round.stand().unwrap();
    assert_eq!(round.phase(), GamePhase::DealerTurn);

    let settlement = finish_dealer(&mut round);
    assert_eq!(settlement.dealer_value, 25);
    assert_eq!(settlement.results[0].outcome, HandOutcome::Win);
    assert_eq!(settlement.total_payout(), 100);
    assert_eq!(round.phase(), GamePhase::Settled);
}

#[test]
fn test_settle_only_once() {
    let (mut round, _) =
        RoundState::deal(deck([Rank::Ten, Rank::Nine], [Rank::Ten, Rank::Eight], &[]), 100).unwrap();
    round.stand().unwrap();
    finish_dealer(&mut round);
    assert_eq!(round.settle(), Err(GameError::WrongPhase(GamePhase::Settled)));
    assert_eq!(round.dealer_step(), Err(GameError::WrongPhase(GamePhase::Settled)));
}

#[test]
fn test_score_leaves_round_open() {
    let (mut round, _) =
        RoundState::deal(deck([Rank::Ten, Rank::Nine], [Rank::Ten, Rank::Eight], &[]), 100).unwrap();
    round.stand().unwrap();
    assert_eq!(round.dealer_step(), Ok(None));

    let scored = round.score().unwrap();
    assert_eq!(scored.results[0].outcome, HandOutcome::Win);
    assert_eq!(round.phase(), GamePhase::DealerTurn);
    assert_eq!(round.score().unwrap(), scored);
    assert_eq!(round.settle().unwrap(), scored);
    assert_eq!(round.phase(), GamePhase::Settled);
}

#[test]
fn test_settle_waits_for_dealer() {
    let (mut round, _) = RoundState::deal(
        deck([Rank::Ten, Rank::Nine], [Rank::Two, Rank::Three], &[Rank::King, Rank::Five]),
        100,
    )
    .unwrap();
    round.stand().unwrap();
    assert_eq!(round.settle(), Err(GameError::DealerNotFinished));

    let mut dealer_len = round.dealer_hand().len();
    while round.dealer_step().unwrap().is_some() {
        assert!(round.dealer_hand().len() > dealer_len);
        dealer_len = round.dealer_hand().len();
    }
    assert_eq!(round.dealer_hand().value(), 20);
    assert_eq!(round.settle().unwrap().results[0].outcome, HandOutcome::Lose);
}

#[test]
fn test_double_draws_one_card_and_stands() {
    let (mut round, _) = RoundState::deal(
        deck([Rank::Five, Rank::Six], [Rank::Ten, Rank::Seven], &[Rank::Nine, Rank::Two]),
        100,
    )
    .unwrap();
    assert!(round.can_double());
    round.double().unwrap();

    assert_eq!(round.player_hand().len(), 3);
    assert!(round.player_hand().doubled);
    assert_eq!(round.phase(), GamePhase::DealerTurn);
    assert_eq!(round.total_stake(), 200);

    let settlement = finish_dealer(&mut round);
    assert_eq!(settlement.results[0].stake, 200);
    assert_eq!(settlement.results[0].outcome, HandOutcome::Win);
    assert_eq!(settlement.total_payout(), 400);
}

#[test]
fn test_can_split_requires_pair() {
    let (round, _) =
        RoundState::deal(deck([Rank::King, Rank::Queen], [Rank::Ten, Rank::Seven], &[]), 100).unwrap();
    assert!(!round.can_split());

    let (round, _) =
        RoundState::deal(deck([Rank::Eight, Rank::Eight], [Rank::Ten, Rank::Seven], &[]), 100).unwrap();
    assert!(round.can_split());
}

#[test]
fn test_split_rejected_when_ineligible() {
    let (mut round, _) = RoundState::deal(
        deck([Rank::Eight, Rank::Nine], [Rank::Ten, Rank::Seven], &[Rank::Two]),
        100,
    )
    .unwrap();
    assert_eq!(round.split(), Err(GameError::SplitNotAllowed));
    assert_eq!(round.player_hand().len(), 2);
    assert_eq!(round.deck_remaining(), 1);
}

#[test]
fn test_split_plays_both_hands() {
    let (mut round, _) = RoundState::deal(
        deck(
            [Rank::Eight, Rank::Eight],
            [Rank::Ten, Rank::Seven],
            &[Rank::Three, Rank::Ten, Rank::Nine],
        ),
        100,
    )
    .unwrap();

    round.split().unwrap();
    assert!(round.is_split());
    assert_eq!(round.active_hand(), ActiveHand::Player);
    assert_eq!(round.player_hand().cards, vec![c(Rank::Eight), c(Rank::Three)]);
    assert_eq!(round.split_hand().unwrap().cards, vec![c(Rank::Eight), c(Rank::Ten)]);
    assert!(!round.can_split());
    assert_eq!(round.total_stake(), 200);

    // 11 + 9 = 20 on the primary hand, then stand moves to the split hand
    round.hit().unwrap();
    round.stand().unwrap();
    assert_eq!(round.phase(), GamePhase::PlayerTurn);
    assert_eq!(round.active_hand(), ActiveHand::Split);

    round.stand().unwrap();
    assert_eq!(round.phase(), GamePhase::DealerTurn);

    let settlement = finish_dealer(&mut round);
    assert_eq!(settlement.results.len(), 2);
    assert_eq!(settlement.results[0].outcome, HandOutcome::Win);
    assert_eq!(settlement.results[1].outcome, HandOutcome::Win);
    assert_eq!(settlement.total_payout(), 400);
}

#[test]
fn test_split_fresh_twenty_one_stands() {
    let (mut round, _) = RoundState::deal(
        deck([Rank::Ace, Rank::Ace], [Rank::Ten, Rank::Seven], &[Rank::King, Rank::Five]),
        100,
    )
    .unwrap();

    let events = round.split().unwrap();
    assert!(events.contains(&RoundEvent::Blackjack(ActiveHand::Player)));
    assert_eq!(round.active_hand(), ActiveHand::Split);
    assert_eq!(round.phase(), GamePhase::PlayerTurn);
}

#[test]
fn test_double_on_split_hand_only_doubles_that_stake() {
    let (mut round, _) = RoundState::deal(
        deck(
            [Rank::Nine, Rank::Nine],
            [Rank::Ten, Rank::Eight],
            &[Rank::Ten, Rank::Two, Rank::Nine],
        ),
        100,
    )
    .unwrap();
    round.split().unwrap();
    round.stand().unwrap();
    assert_eq!(round.active_stake(), 100);

    round.double().unwrap();
    assert_eq!(round.phase(), GamePhase::DealerTurn);
    assert_eq!(round.total_stake(), 300);

    let settlement = finish_dealer(&mut round);
    // primary 19 vs 18 wins 200, split 9+2+9 = 20 wins 400
    assert_eq!(settlement.results[0].payout, 200);
    assert_eq!(settlement.results[1].stake, 200);
    assert_eq!(settlement.results[1].payout, 400);
}

#[test]
fn test_hit_reports_exhausted_deck() {
    let (mut round, _) =
        RoundState::deal(deck([Rank::Two, Rank::Three], [Rank::Ten, Rank::Seven], &[]), 100).unwrap();
    assert_eq!(round.hit(), Err(GameError::DeckExhausted));
}
