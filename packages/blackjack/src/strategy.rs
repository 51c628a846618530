use crate::hand::{calculate_hand_value, can_split_cards, is_soft_hand};
use crate::{Card, Rank, RoundState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptimalMove {
    Hit,
    Stand,
    Double,
    Split,
}

/// Basic strategy for a single deck, dealer standing on all 17s.
pub fn optimal_move(
    player_cards: &[Card],
    dealer_up_card: &Card,
    can_double: bool,
    can_split: bool,
) -> OptimalMove {
    let player_value = calculate_hand_value(player_cards);
    let dealer_value = dealer_up_card.value();
    let is_soft = is_soft_hand(player_cards);

    if can_split && player_cards.len() == 2 && can_split_cards(&player_cards[0], &player_cards[1]) {
        if let Some(mv) = pair_move(player_cards[0].rank, dealer_value) {
            return mv;
        }
    }

    // Doubling is only worth it on the first two cards
    if can_double && player_cards.len() == 2 {
        let double = if is_soft {
            match player_value {
                19 => dealer_value == 6,
                18 => (2..=6).contains(&dealer_value),
                17 => (3..=6).contains(&dealer_value),
                15 | 16 => (4..=6).contains(&dealer_value),
                13 | 14 => (5..=6).contains(&dealer_value),
                _ => false,
            }
        } else {
            match player_value {
                11 => true,
                10 => dealer_value <= 9,
                9 => (3..=6).contains(&dealer_value),
                _ => false,
            }
        };
        if double {
            return OptimalMove::Double;
        }
    }

    let stand = if is_soft {
        player_value >= 19 || (player_value == 18 && dealer_value < 9)
    } else {
        match player_value {
            17..=u8::MAX => true,
            13..=16 => (2..=6).contains(&dealer_value),
            12 => (4..=6).contains(&dealer_value),
            _ => false,
        }
    };

    if stand {
        OptimalMove::Stand
    } else {
        OptimalMove::Hit
    }
}

fn pair_move(rank: Rank, dealer_value: u8) -> Option<OptimalMove> {
    let split = match rank {
        Rank::Ace | Rank::Eight => true,
        Rank::Nine => !matches!(dealer_value, 7 | 10 | 11),
        Rank::Seven | Rank::Six | Rank::Three | Rank::Two => (2..=7).contains(&dealer_value),
        _ => false,
    };
    split.then_some(OptimalMove::Split)
}

/// Hint for the active hand, judged against the dealer's exposed second card.
/// `can_double` and `can_split` say whether the player can afford those moves.
pub fn hint_for(round: &RoundState, can_double: bool, can_split: bool) -> Option<OptimalMove> {
    if !round.can_act() {
        return None;
    }
    let up_card = round.dealer_hand().cards.get(1)?;
    Some(optimal_move(
        &round.active().cards,
        up_card,
        can_double && round.can_double(),
        can_split && round.can_split(),
    ))
}
