use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    error::Error,
    io::{self, Stdout},
    time::Duration,
};

use blackjack_table::{BetAmount, Intent, JsonFileStore, Table, TableConfig};
use clap::Parser;

mod app;
use app::App;

mod cli;
use cli::Args;

mod tui_logger;
use tui_logger::TuiLogger;

mod ui;

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let (logger, log_buffer) = TuiLogger::new(args.log_level);
    log::set_boxed_logger(Box::new(logger)).map(|()| log::set_max_level(args.log_level))?;

    let config = TableConfig {
        max_bet: args.max_bet,
        ..TableConfig::default()
    };
    let table = Table::with_seed(config, Box::new(JsonFileStore::new(&args.store)), args.seed)?;
    log::info!("balance kept in {}", args.store.display());

    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(table, log_buffer, Duration::from_millis(args.frame_ms));
    let res = run_app(&mut terminal, app);

    // restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}")
    }

    Ok(())
}

fn intent_for(code: KeyCode) -> Option<Intent> {
    let intent = match code {
        KeyCode::Char('1') => Intent::PlaceBet(BetAmount::Chips(100)),
        KeyCode::Char('2') => Intent::PlaceBet(BetAmount::Chips(500)),
        KeyCode::Char('3') => Intent::PlaceBet(BetAmount::Chips(1_000)),
        KeyCode::Char('m') | KeyCode::Char('M') => Intent::PlaceBet(BetAmount::Max),
        KeyCode::Char('d') | KeyCode::Char('D') => Intent::Deal,
        KeyCode::Up | KeyCode::Char('h') => Intent::Hit,
        KeyCode::Down | KeyCode::Char('s') => Intent::Stand,
        KeyCode::Right | KeyCode::Char('x') => Intent::Double,
        KeyCode::Left | KeyCode::Char('p') => Intent::Split,
        KeyCode::Char('n') | KeyCode::Char('N') => Intent::NewRound,
        _ => return None,
    };
    Some(intent)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<(), Box<dyn Error>> {
    loop {
        app.sync_logs();
        app.tick();
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Char('l') | KeyCode::Char('L') => app.log_visible = !app.log_visible,
            KeyCode::Enter => {
                let intent = if app.view.actions.new_round {
                    Intent::NewRound
                } else {
                    Intent::Deal
                };
                app.send(intent);
            }
            code => {
                if let Some(intent) = intent_for(code) {
                    app.send(intent);
                }
            }
        }
    }
}
