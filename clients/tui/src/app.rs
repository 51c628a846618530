use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use blackjack::{ActiveHand, GamePhase, HandOutcome, HandResult};
use blackjack_table::{Intent, Snapshot, Table};

pub struct App {
    pub table: Table,
    pub view: Snapshot,
    pub status: String,
    pub logs: Vec<String>,
    pub log_visible: bool,
    log_buffer: Arc<Mutex<Vec<String>>>,
    pending: VecDeque<Snapshot>,
    frame_delay: Duration,
    last_frame_at: Instant,
}

fn outcome_label(outcome: HandOutcome) -> &'static str {
    match outcome {
        HandOutcome::Win => "Win!",
        HandOutcome::Lose => "Lose!",
        HandOutcome::Push => "Push.",
        HandOutcome::Bust => "Bust!",
    }
}

fn result_line(result: &HandResult) -> String {
    let name = match result.hand {
        ActiveHand::Player => "You",
        ActiveHand::Split => "Split hand",
    };
    format!("{name}: {} {} (+{})", result.value, outcome_label(result.outcome), result.payout)
}

impl App {
    pub fn new(table: Table, log_buffer: Arc<Mutex<Vec<String>>>, frame_delay: Duration) -> App {
        let view = table.snapshot();
        let mut app = App {
            table,
            view,
            status: String::new(),
            logs: vec!["Welcome to the table!".to_string()],
            log_visible: true,
            log_buffer,
            pending: VecDeque::new(),
            frame_delay,
            last_frame_at: Instant::now(),
        };
        app.status = app.status_for_view();
        app
    }

    pub fn sync_logs(&mut self) {
        let messages: Vec<String> = if let Ok(mut buffer) = self.log_buffer.lock() {
            buffer.drain(..).collect()
        } else {
            Vec::new()
        };

        for msg in messages {
            self.add_log(msg);
        }
    }

    pub fn add_log(&mut self, message: String) {
        self.logs.push(message);
        if self.logs.len() > 20 {
            self.logs.remove(0);
        }
    }

    /// True while queued frames are still being shown. Action keys are ignored meanwhile.
    pub fn is_playing_back(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn send(&mut self, intent: Intent) {
        if self.is_playing_back() {
            return;
        }
        match self.table.dispatch(intent) {
            Ok(frames) => {
                self.pending.extend(frames);
                if let Some(first) = self.pending.pop_front() {
                    self.show(first);
                }
            }
            Err(err) => {
                if !err.is_rejection() {
                    self.view = self.table.snapshot();
                }
                self.status = err.to_string();
            }
        }
    }

    /// Advances playback by one frame once the delay has passed.
    pub fn tick(&mut self) {
        if self.last_frame_at.elapsed() < self.frame_delay {
            return;
        }
        if let Some(frame) = self.pending.pop_front() {
            self.show(frame);
        }
    }

    fn show(&mut self, frame: Snapshot) {
        self.view = frame;
        self.status = self.status_for_view();
        self.last_frame_at = Instant::now();
    }

    fn status_for_view(&self) -> String {
        let view = &self.view;
        match view.phase {
            GamePhase::Betting if view.current_bet > 0 => {
                format!("Bet {}. [D] deal, or change it: [1] 100 [2] 500 [3] 1000 [M] max", view.current_bet)
            }
            GamePhase::Betting if view.actions.place_bet => {
                "Place a bet: [1] 100 [2] 500 [3] 1000 [M] max".to_string()
            }
            GamePhase::Betting => "Out of coins.".to_string(),
            GamePhase::PlayerTurn => match view.active_hand {
                ActiveHand::Player if view.is_split => "Playing your first hand".to_string(),
                ActiveHand::Player => "Your move".to_string(),
                ActiveHand::Split => "Playing your split hand".to_string(),
            },
            GamePhase::DealerTurn => "Dealer plays...".to_string(),
            GamePhase::Settled => {
                let dealer = view.dealer_total.unwrap_or_default();
                let results: Vec<String> = view.results.iter().map(result_line).collect();
                format!("Dealer: {dealer}  {}  [N] new round", results.join("  "))
            }
        }
    }
}
