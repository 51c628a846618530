use std::path::PathBuf;

use blackjack_table::config::DEFAULT_MAX_BET;
use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "blackjack", about = "Single-player blackjack against the house")]
pub struct Args {
    /// Where the coin balance is kept between sessions
    #[arg(long, env = "BLACKJACK_STORE", default_value = "blackjack-balance.json")]
    pub store: PathBuf,

    /// Fixed shuffle seed, for reproducible sessions
    #[arg(long, env = "BLACKJACK_SEED")]
    pub seed: Option<u64>,

    #[arg(long, env = "BLACKJACK_MAX_BET", default_value_t = DEFAULT_MAX_BET)]
    pub max_bet: u64,

    /// Delay between frames when the dealer plays out
    #[arg(long, env = "BLACKJACK_FRAME_MS", default_value_t = 450)]
    pub frame_ms: u64,

    #[arg(long, env = "BLACKJACK_LOG_LEVEL", default_value = "info")]
    pub log_level: LevelFilter,
}
