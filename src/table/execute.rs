use blackjack::{GameError, GamePhase, RoundEvent, RoundState, Seat};

use super::Table;
use crate::error::TableError;
use crate::msg::{BetAmount, Intent, Snapshot, TableEvent};

fn table_events(events: &[RoundEvent]) -> Vec<TableEvent> {
    events
        .iter()
        .map(|event| match event {
            RoundEvent::CardDealt { seat, .. } => TableEvent::CardDealt(*seat),
            RoundEvent::Blackjack(_) => TableEvent::Blackjack,
            RoundEvent::Bust(_) => TableEvent::Bust,
        })
        .collect()
}

impl Table {
    /// Single entry point for intents. Returns the frames to present, in order.
    ///
    /// A rejected intent leaves the table unchanged. The one exception is an
    /// exhausted deck, which aborts the round and refunds the stake before the
    /// error is returned.
    ///
    /// A round left in DealerTurn by a failed balance write is settled again by
    /// whichever intent arrives next, in place of that intent.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Vec<Snapshot>, TableError> {
        if self.phase() == GamePhase::DealerTurn {
            log::info!("retrying settlement, {intent:?} not applied");
            let mut frames = Vec::new();
            let result = self.finish_if_dealer_turn(&mut frames).map(|()| frames);
            if let Err(err) = &result {
                log::warn!("settlement retry failed: {err}");
            }
            return result;
        }

        let result = match intent {
            Intent::PlaceBet(amount) => self.execute_place_bet(amount),
            Intent::Deal => self.execute_deal(),
            Intent::Hit => self.execute_hit(),
            Intent::Stand => self.execute_stand(),
            Intent::Double => self.execute_double(),
            Intent::Split => self.execute_split(),
            Intent::NewRound => self.execute_new_round(),
        };
        if let Err(err) = &result {
            log::warn!("{intent:?} rejected: {err}");
        }
        result
    }

    fn round_ref(&self) -> Result<&RoundState, TableError> {
        self.round.as_ref().ok_or(TableError::NoRound)
    }

    fn round_mut(&mut self) -> Result<&mut RoundState, TableError> {
        self.round.as_mut().ok_or(TableError::NoRound)
    }

    /// Converts a game result, aborting the round if the deck ran out.
    fn guard<T>(&mut self, result: Result<T, GameError>) -> Result<T, TableError> {
        match result {
            Err(GameError::DeckExhausted) => {
                self.abort_round()?;
                Err(GameError::DeckExhausted.into())
            }
            other => other.map_err(TableError::from),
        }
    }

    fn abort_round(&mut self) -> Result<(), TableError> {
        log::error!(
            "deck exhausted, aborting round and refunding {}",
            self.bankroll.current_bet()
        );
        self.round = None;
        self.settlement = None;
        self.bankroll.refund()?;
        Ok(())
    }

    fn require_betting(&self) -> Result<(), TableError> {
        if self.round.is_some() {
            return Err(TableError::RoundInProgress);
        }
        Ok(())
    }

    pub fn execute_place_bet(&mut self, amount: BetAmount) -> Result<Vec<Snapshot>, TableError> {
        self.require_betting()?;
        let amount = match amount {
            BetAmount::Chips(chips) => chips,
            BetAmount::Max => self.config.max_bet.min(self.bankroll.available()),
        };
        self.bankroll.place_bet(amount)?;
        log::info!("bet {amount} placed, balance {}", self.bankroll.balance());
        Ok(vec![self.frame(Vec::new())])
    }

    pub fn execute_deal(&mut self) -> Result<Vec<Snapshot>, TableError> {
        self.require_betting()?;
        let bet = self.bankroll.current_bet();
        if bet == 0 {
            return Err(GameError::NoBetPlaced.into());
        }

        let deck = self.decks.next_deck();
        let dealt = RoundState::deal(deck, bet);
        let (round, events) = self.guard(dealt)?;
        log::info!(
            "dealt for {bet}: player {} vs dealer up card {}",
            round.player_hand().value(),
            round
                .dealer_hand()
                .cards
                .get(1)
                .map(|c| c.to_display())
                .unwrap_or_default()
        );
        self.round = Some(round);
        self.settlement = None;

        let mut frames = vec![self.frame(table_events(&events))];
        self.finish_if_dealer_turn(&mut frames)?;
        Ok(frames)
    }

    pub fn execute_hit(&mut self) -> Result<Vec<Snapshot>, TableError> {
        let hit = self.round_mut()?.hit();
        let events = self.guard(hit)?;
        let mut frames = vec![self.frame(table_events(&events))];
        self.finish_if_dealer_turn(&mut frames)?;
        Ok(frames)
    }

    pub fn execute_stand(&mut self) -> Result<Vec<Snapshot>, TableError> {
        self.round_mut()?.stand()?;
        let mut frames = vec![self.frame(Vec::new())];
        self.finish_if_dealer_turn(&mut frames)?;
        Ok(frames)
    }

    pub fn execute_double(&mut self) -> Result<Vec<Snapshot>, TableError> {
        let round = self.round_ref()?;
        if !round.can_double() {
            return Err(GameError::WrongPhase(round.phase()).into());
        }
        let cost = round.active_stake();
        self.bankroll.raise(cost)?;
        log::info!("doubled, stake now {}", self.bankroll.current_bet());

        let doubled = self.round_mut()?.double();
        let events = self.guard(doubled)?;
        let mut frames = vec![self.frame(table_events(&events))];
        self.finish_if_dealer_turn(&mut frames)?;
        Ok(frames)
    }

    pub fn execute_split(&mut self) -> Result<Vec<Snapshot>, TableError> {
        let round = self.round_ref()?;
        if !round.can_split() {
            return Err(GameError::SplitNotAllowed.into());
        }
        let cost = round.bet();
        self.bankroll.raise(cost)?;
        log::info!("split, stake now {}", self.bankroll.current_bet());

        let split = self.round_mut()?.split();
        let events = self.guard(split)?;
        let mut frames = vec![self.frame(table_events(&events))];
        self.finish_if_dealer_turn(&mut frames)?;
        Ok(frames)
    }

    pub fn execute_new_round(&mut self) -> Result<Vec<Snapshot>, TableError> {
        match self.round.as_ref().map(|r| r.phase()) {
            None => {}
            Some(GamePhase::Settled) => {
                self.round = None;
                self.settlement = None;
            }
            Some(_) => return Err(TableError::RoundInProgress),
        }
        Ok(vec![self.frame(Vec::new())])
    }

    /// Plays the dealer one card per frame, then settles and credits the bankroll.
    fn finish_if_dealer_turn(&mut self, frames: &mut Vec<Snapshot>) -> Result<(), TableError> {
        if self.round_ref()?.phase() != GamePhase::DealerTurn {
            return Ok(());
        }

        loop {
            let step = self.round_mut()?.dealer_step();
            match self.guard(step)? {
                Some(_) => frames.push(self.frame(vec![TableEvent::CardDealt(Seat::Dealer)])),
                None => break,
            }
        }

        let scored = self.round_ref()?.score();
        let settlement = self.guard(scored)?;
        // The round only leaves DealerTurn once the payout is stored.
        self.bankroll.settle(settlement.total_payout())?;
        self.round_mut()?.settle()?;

        let event = match settlement.net() {
            net if net > 0 => TableEvent::Win,
            net if net < 0 => TableEvent::Lose,
            _ => TableEvent::Push,
        };
        log::info!(
            "settled against dealer {}: paid {}, balance {}",
            settlement.dealer_value,
            settlement.total_payout(),
            self.bankroll.balance()
        );
        self.settlement = Some(settlement);
        frames.push(self.frame(vec![event]));
        Ok(())
    }
}
