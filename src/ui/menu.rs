//! The game select menu, with the score ledger alongside.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::chrome::render_status_bar;
use crate::games::GameKind;
use crate::ledger::LedgerSnapshot;

const LEDGER_ROWS: usize = 8;

pub fn render_menu(frame: &mut Frame, area: Rect, selected: usize, ledger: &LedgerSnapshot) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Scamper ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightYellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(2)])
        .split(inner);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(v_chunks[0]);

    render_game_list(frame, h_chunks[0], selected);
    render_ledger_panel(frame, h_chunks[1], ledger);

    render_status_bar(
        frame,
        v_chunks[1],
        "Pick a game",
        Color::LightYellow,
        &[("[↑/↓]", "Select"), ("[Enter]", "Play"), ("[Q]", "Quit")],
    );
}

fn render_game_list(frame: &mut Frame, area: Rect, selected: usize) {
    let mut lines: Vec<Line> = vec![Line::from("")];

    for (i, game) in GameKind::ALL.iter().enumerate() {
        let (marker, name_style) = if i == selected {
            (
                "> ",
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(Color::White))
        };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::LightYellow)),
            Span::styled(game.name(), name_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", game.description()),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_ledger_panel(frame: &mut Frame, area: Rect, ledger: &LedgerSnapshot) {
    let block = Block::default()
        .title(" Ledger ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    let ranked = ledger.ranked();
    if ranked.is_empty() {
        lines.push(Line::from(Span::styled(
            "No scores yet",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for (rank, (name, total)) in ranked.iter().take(LEDGER_ROWS).enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>2}. ", rank + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("{:<16}", name), Style::default().fg(Color::White)),
                Span::styled(total.to_string(), Style::default().fg(Color::Cyan)),
            ]));
        }
    }

    if ledger.skipped_lines > 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("({} unreadable entries skipped)", ledger.skipped_lines),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let text = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(text, inner);
}
