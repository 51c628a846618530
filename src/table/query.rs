use blackjack::{hint_for, ActiveHand, GamePhase, RoundState};

use super::Table;
use crate::msg::{Actions, Snapshot, TableEvent};

/// The hole card shows once the player can no longer act on the primary hand.
fn hole_card_revealed(round: &RoundState) -> bool {
    matches!(round.phase(), GamePhase::DealerTurn | GamePhase::Settled)
        || (round.is_split() && round.active_hand() == ActiveHand::Split)
}

impl Table {
    pub fn phase(&self) -> GamePhase {
        self.round
            .as_ref()
            .map_or(GamePhase::Betting, |round| round.phase())
    }

    pub fn actions(&self) -> Actions {
        let balance = self.bankroll.balance();
        match self.round.as_ref() {
            None => Actions {
                place_bet: self.bankroll.available() > 0,
                deal: self.bankroll.current_bet() > 0,
                ..Actions::default()
            },
            Some(round) => Actions {
                hit: round.can_act(),
                stand: round.can_act(),
                double: round.can_double() && balance >= round.active_stake(),
                split: round.can_split() && balance >= round.bet(),
                new_round: round.phase() == GamePhase::Settled,
                ..Actions::default()
            },
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.frame(Vec::new())
    }

    pub(super) fn frame(&self, events: Vec<TableEvent>) -> Snapshot {
        let mut snapshot = Snapshot {
            phase: self.phase(),
            dealer_hand: Vec::new(),
            player_hand: Vec::new(),
            split_hand: None,
            is_split: false,
            active_hand: ActiveHand::Player,
            dealer_total: None,
            player_total: 0,
            split_total: None,
            balance: self.bankroll.balance(),
            current_bet: self.bankroll.current_bet(),
            actions: self.actions(),
            hint: None,
            results: self
                .settlement
                .as_ref()
                .map(|s| s.results.clone())
                .unwrap_or_default(),
            events,
        };

        let Some(round) = self.round.as_ref() else {
            return snapshot;
        };

        let revealed = hole_card_revealed(round);
        let dealer = round.dealer_hand();
        snapshot.dealer_hand = dealer
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| (revealed || i > 0).then_some(*card))
            .collect();
        snapshot.dealer_total = revealed.then(|| dealer.value());
        snapshot.player_hand = round.player_hand().cards.clone();
        snapshot.player_total = round.player_hand().value();
        snapshot.split_hand = round.split_hand().map(|h| h.cards.clone());
        snapshot.split_total = round.split_hand().map(|h| h.value());
        snapshot.is_split = round.is_split();
        snapshot.active_hand = round.active_hand();
        snapshot.hint = hint_for(round, snapshot.actions.double, snapshot.actions.split);
        snapshot
    }
}
