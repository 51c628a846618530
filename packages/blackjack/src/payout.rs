use crate::ActiveHand;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOutcome {
    Win,
    Lose,
    Push,
    Bust,
}

impl HandOutcome {
    /// Amount returned for a stake: even money on a win, stake back on a push.
    pub fn payout(&self, stake: u64) -> u64 {
        match self {
            HandOutcome::Win => stake.saturating_mul(2),
            HandOutcome::Push => stake,
            HandOutcome::Lose | HandOutcome::Bust => 0,
        }
    }
}

/// Compare a finished player hand against the dealer's final total.
pub fn outcome(hand_value: u8, dealer_value: u8) -> HandOutcome {
    if hand_value > 21 {
        HandOutcome::Bust
    } else if dealer_value > 21 || hand_value > dealer_value {
        HandOutcome::Win
    } else if hand_value < dealer_value {
        HandOutcome::Lose
    } else {
        HandOutcome::Push
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub hand: ActiveHand,
    pub value: u8,
    pub outcome: HandOutcome,
    pub stake: u64,
    pub payout: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub dealer_value: u8,
    pub results: Vec<HandResult>,
}

impl Settlement {
    pub fn total_stake(&self) -> u64 {
        self.results.iter().map(|r| r.stake).sum()
    }

    pub fn total_payout(&self) -> u64 {
        self.results.iter().map(|r| r.payout).sum()
    }

    /// Winnings minus stakes across every hand.
    pub fn net(&self) -> i128 {
        self.total_payout() as i128 - self.total_stake() as i128
    }
}
