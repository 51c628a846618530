use crate::{outcome, Card, DealerPolicy, Deck, GameError, Hand, HandResult, Settlement};
use serde::{Deserialize, Serialize};

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Betting,
    PlayerTurn,
    DealerTurn,
    Settled,
}

/// Which player hand actions apply to. The split hand is always played second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveHand {
    Player,
    Split,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    Player,
    Split,
    Dealer,
}

impl From<ActiveHand> for Seat {
    fn from(hand: ActiveHand) -> Self {
        match hand {
            ActiveHand::Player => Seat::Player,
            ActiveHand::Split => Seat::Split,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    CardDealt { seat: Seat, card: Card },
    Blackjack(ActiveHand),
    Bust(ActiveHand),
}

/// One round of play: a fresh deck, the dealer hand and up to two player hands.
///
/// Every stake is `bet`, doubled for a hand that doubled down.
#[derive(Debug, Clone)]
pub struct RoundState {
    deck: Deck,
    dealer_hand: Hand,
    player_hand: Hand,
    split_hand: Option<Hand>,
    active_hand: ActiveHand,
    phase: GamePhase,
    bet: u64,
}

impl RoundState {
    /// Deals player, player, dealer, dealer from the top of `deck`.
    pub fn deal(deck: Deck, bet: u64) -> Result<(Self, Vec<RoundEvent>), GameError> {
        if bet == 0 {
            return Err(GameError::NoBetPlaced);
        }

        let mut round = Self {
            deck,
            dealer_hand: Hand::new(),
            player_hand: Hand::new(),
            split_hand: None,
            active_hand: ActiveHand::Player,
            phase: GamePhase::PlayerTurn,
            bet,
        };

        let mut events = Vec::new();
        for seat in [Seat::Player, Seat::Player, Seat::Dealer, Seat::Dealer] {
            round.draw_to(seat, &mut events)?;
        }

        if round.player_hand.is_blackjack() {
            round.player_hand.stood = true;
            events.push(RoundEvent::Blackjack(ActiveHand::Player));
            round.advance();
        }

        log::debug!(
            "dealt player {} dealer {}, {} cards left",
            round.player_hand.value(),
            round.dealer_hand.value(),
            round.deck.remaining()
        );
        Ok((round, events))
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn active_hand(&self) -> ActiveHand {
        self.active_hand
    }

    pub fn is_split(&self) -> bool {
        self.split_hand.is_some()
    }

    pub fn bet(&self) -> u64 {
        self.bet
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    pub fn split_hand(&self) -> Option<&Hand> {
        self.split_hand.as_ref()
    }

    pub fn hand(&self, slot: ActiveHand) -> Option<&Hand> {
        match slot {
            ActiveHand::Player => Some(&self.player_hand),
            ActiveHand::Split => self.split_hand.as_ref(),
        }
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// The hand currently receiving player actions.
    pub fn active(&self) -> &Hand {
        match (self.active_hand, self.split_hand.as_ref()) {
            (ActiveHand::Split, Some(split)) => split,
            _ => &self.player_hand,
        }
    }

    fn active_mut(&mut self) -> &mut Hand {
        match (self.active_hand, self.split_hand.as_mut()) {
            (ActiveHand::Split, Some(split)) => split,
            _ => &mut self.player_hand,
        }
    }

    pub fn stake_of(&self, hand: &Hand) -> u64 {
        if hand.doubled {
            self.bet.saturating_mul(2)
        } else {
            self.bet
        }
    }

    pub fn active_stake(&self) -> u64 {
        self.stake_of(self.active())
    }

    /// Everything currently wagered across player hands.
    pub fn total_stake(&self) -> u64 {
        let split = self.split_hand.as_ref().map_or(0, |h| self.stake_of(h));
        self.stake_of(&self.player_hand).saturating_add(split)
    }

    pub fn can_act(&self) -> bool {
        self.phase == GamePhase::PlayerTurn
    }

    pub fn can_double(&self) -> bool {
        self.can_act() && !self.active().doubled
    }

    pub fn can_split(&self) -> bool {
        self.can_act()
            && self.split_hand.is_none()
            && self.active_hand == ActiveHand::Player
            && self.player_hand.can_split()
    }

    fn require_phase(&self, expected: GamePhase) -> Result<(), GameError> {
        if self.phase != expected {
            return Err(GameError::WrongPhase(self.phase));
        }
        Ok(())
    }

    fn draw_to(&mut self, seat: Seat, events: &mut Vec<RoundEvent>) -> Result<Card, GameError> {
        let hand = match seat {
            Seat::Player => &mut self.player_hand,
            Seat::Split => match self.split_hand.as_mut() {
                Some(hand) => hand,
                None => return Err(GameError::SplitNotAllowed),
            },
            Seat::Dealer => &mut self.dealer_hand,
        };
        let card = self.deck.draw()?;
        hand.add_card(card);
        events.push(RoundEvent::CardDealt { seat, card });
        Ok(card)
    }

    /// Moves to the split hand or the dealer once the active hand is finished.
    fn advance(&mut self) {
        if self.active_hand == ActiveHand::Player
            && self.player_hand.is_finished()
            && self.split_hand.is_some()
        {
            self.active_hand = ActiveHand::Split;
        }
        if self.active().is_finished() {
            self.phase = GamePhase::DealerTurn;
        }
    }

    fn stand_active(&mut self) {
        self.active_mut().stood = true;
        self.advance();
    }

    fn check_bust(&mut self, events: &mut Vec<RoundEvent>) {
        if self.active().is_busted() {
            events.push(RoundEvent::Bust(self.active_hand));
            self.stand_active();
        }
    }

    /// Draws into the active hand. A bust stands the hand automatically.
    pub fn hit(&mut self) -> Result<Vec<RoundEvent>, GameError> {
        self.require_phase(GamePhase::PlayerTurn)?;
        let mut events = Vec::new();
        self.draw_to(self.active_hand.into(), &mut events)?;
        self.check_bust(&mut events);
        Ok(events)
    }

    pub fn stand(&mut self) -> Result<(), GameError> {
        self.require_phase(GamePhase::PlayerTurn)?;
        self.stand_active();
        Ok(())
    }

    /// Doubles the active hand's stake, draws exactly one card and stands.
    /// Funds are the caller's concern.
    pub fn double(&mut self) -> Result<Vec<RoundEvent>, GameError> {
        self.require_phase(GamePhase::PlayerTurn)?;
        if self.active().doubled {
            return Err(GameError::WrongPhase(self.phase));
        }
        self.active_mut().doubled = true;

        let mut events = Vec::new();
        self.draw_to(self.active_hand.into(), &mut events)?;
        if self.active().is_busted() {
            events.push(RoundEvent::Bust(self.active_hand));
        }
        self.stand_active();
        Ok(events)
    }

    /// Splits a starting pair. Each hand gets one replacement card, the
    /// primary hand first, and a fresh 21 stands at once.
    pub fn split(&mut self) -> Result<Vec<RoundEvent>, GameError> {
        if !self.can_split() {
            return Err(GameError::SplitNotAllowed);
        }
        let second = self.player_hand.cards.pop().ok_or(GameError::SplitNotAllowed)?;
        self.split_hand = Some(Hand::from_cards(vec![second]));

        let mut events = Vec::new();
        self.draw_to(Seat::Player, &mut events)?;
        self.draw_to(Seat::Split, &mut events)?;

        if self.player_hand.is_blackjack() {
            self.player_hand.stood = true;
            events.push(RoundEvent::Blackjack(ActiveHand::Player));
        }
        if let Some(split) = self.split_hand.as_mut() {
            if split.is_blackjack() {
                split.stood = true;
                events.push(RoundEvent::Blackjack(ActiveHand::Split));
            }
        }
        self.advance();
        Ok(events)
    }

    /// One dealer decision. `None` means the dealer stands and the round can settle.
    pub fn dealer_step(&mut self) -> Result<Option<Card>, GameError> {
        self.require_phase(GamePhase::DealerTurn)?;
        DealerPolicy::step(&mut self.dealer_hand, &mut self.deck)
    }

    /// Scores every player hand against the dealer without ending the round.
    pub fn score(&self) -> Result<Settlement, GameError> {
        self.require_phase(GamePhase::DealerTurn)?;
        if DealerPolicy::should_hit(&self.dealer_hand) {
            return Err(GameError::DealerNotFinished);
        }

        let dealer_value = self.dealer_hand.value();
        let mut results = vec![self.result_for(ActiveHand::Player, &self.player_hand, dealer_value)];
        if let Some(split) = self.split_hand.as_ref() {
            results.push(self.result_for(ActiveHand::Split, split, dealer_value));
        }
        Ok(Settlement {
            dealer_value,
            results,
        })
    }

    /// Scores the round and moves it to Settled. Only callable once.
    pub fn settle(&mut self) -> Result<Settlement, GameError> {
        let settlement = self.score()?;
        self.phase = GamePhase::Settled;
        Ok(settlement)
    }

    fn result_for(&self, slot: ActiveHand, hand: &Hand, dealer_value: u8) -> HandResult {
        let value = hand.value();
        let stake = self.stake_of(hand);
        let outcome = outcome(value, dealer_value);
        HandResult {
            hand: slot,
            value,
            outcome,
            stake,
            payout: outcome.payout(stake),
        }
    }
}

#[cfg(test)]
mod tests;
