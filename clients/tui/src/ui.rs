use blackjack::{ActiveHand, Card, GamePhase, OptimalMove, Suit};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

fn card_span(card: Option<&Card>) -> Span<'static> {
    let Some(card) = card else {
        return Span::styled("?? ", Style::default().fg(Color::White).bg(Color::DarkGray));
    };
    let color = match card.suit {
        Suit::Hearts => Color::Red,
        Suit::Diamonds => Color::Rgb(0xFF, 0xA5, 0x00),
        Suit::Clubs => Color::Magenta,
        Suit::Spades => Color::Black,
    };
    Span::styled(format!("{} ", card.to_display()), Style::default().fg(color).bg(Color::Gray))
}

fn hand_line(label: &str, cards: &[Card], total: u8, active: bool) -> Line<'static> {
    let marker = if active { "> " } else { "  " };
    let mut spans = vec![Span::raw(format!("{marker}{label}: "))];
    spans.extend(cards.iter().map(|c| card_span(Some(c))));
    spans.push(Span::raw(format!(" ({total})")));
    Line::from(spans)
}

fn key_style(key_hint: OptimalMove, hint: Option<OptimalMove>) -> Style {
    if hint == Some(key_hint) {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    }
}

fn action_line(app: &App) -> Line<'static> {
    let view = &app.view;
    if app.is_playing_back() {
        return Line::from(Span::styled("...", Style::default().fg(Color::DarkGray)));
    }
    let mut spans = Vec::new();
    if view.actions.hit {
        spans.push(Span::styled("↑", key_style(OptimalMove::Hit, view.hint)));
        spans.push(Span::raw(" Hit  "));
    }
    if view.actions.stand {
        spans.push(Span::styled("↓", key_style(OptimalMove::Stand, view.hint)));
        spans.push(Span::raw(" Stand  "));
    }
    if view.actions.double {
        spans.push(Span::styled("→", key_style(OptimalMove::Double, view.hint)));
        spans.push(Span::raw(" Double  "));
    }
    if view.actions.split {
        spans.push(Span::styled("←", key_style(OptimalMove::Split, view.hint)));
        spans.push(Span::raw(" Split"));
    }
    Line::from(spans)
}

pub fn draw(f: &mut Frame, app: &App) {
    let view = &app.view;
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Table
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    let title = Paragraph::new(format!(
        "Blackjack    Balance: {}    Bet: {}",
        view.balance, view.current_bet
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, main_chunks[0]);

    let (game_container, log_area) = if app.log_visible {
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_chunks[1]);
        (horizontal[0], Some(horizontal[1]))
    } else {
        (main_chunks[1], None)
    };

    let game_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(game_container);

    // Dealer
    let mut dealer_spans: Vec<Span> = view.dealer_hand.iter().map(|c| card_span(c.as_ref())).collect();
    if let Some(total) = view.dealer_total {
        dealer_spans.push(Span::raw(format!(" ({total})")));
    }
    let dealer_lines = if view.dealer_hand.is_empty() {
        vec![Line::from("Waiting for a bet")]
    } else {
        vec![Line::from(dealer_spans)]
    };
    let dealer = Paragraph::new(dealer_lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Dealer"));
    f.render_widget(dealer, game_area[0]);

    // Player
    let mut player_lines = Vec::new();
    if !view.player_hand.is_empty() {
        let playing = view.phase == GamePhase::PlayerTurn;
        player_lines.push(hand_line(
            "Hand",
            &view.player_hand,
            view.player_total,
            playing && view.is_split && view.active_hand == ActiveHand::Player,
        ));
        if let (Some(split), Some(total)) = (view.split_hand.as_ref(), view.split_total) {
            player_lines.push(hand_line(
                "Split",
                split,
                total,
                playing && view.active_hand == ActiveHand::Split,
            ));
        }
        player_lines.push(Line::from(""));
        player_lines.push(action_line(app));
    }
    let player = Paragraph::new(player_lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("You"));
    f.render_widget(player, game_area[1]);

    if let Some(area) = log_area {
        let height = area.height.saturating_sub(2) as usize;
        let skip = app.logs.len().saturating_sub(height);
        let lines: Vec<Line> = app.logs.iter().skip(skip).map(|l| Line::from(l.as_str())).collect();
        let logs = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Log [L]"));
        f.render_widget(logs, area);
    }

    let status = Paragraph::new(format!("{}    [Q] quit", app.status))
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, main_chunks[2]);
}
