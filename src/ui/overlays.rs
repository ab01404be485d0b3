//! Phase overlays: the countdown beats, and the game over / name capture
//! screens.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::chrome::{render_overlay, title_line};
use crate::engine::{Phase, SessionController};
use crate::games::GameKind;

/// Draw the current countdown beat, big and centered on the playfield.
pub fn render_countdown(frame: &mut Frame, area: Rect, label: &str) {
    if area.height < 3 || area.width < 10 {
        return;
    }

    let center_y = area.y + area.height / 2;
    let text = format!("[ {} ]", label);
    let x = area.x + area.width.saturating_sub(text.len() as u16) / 2;

    let line = Paragraph::new(Line::from(Span::styled(
        text.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));

    let prompt_area = Rect::new(x, center_y, text.len() as u16, 1);
    if prompt_area.y < area.y + area.height {
        frame.render_widget(line, prompt_area);
    }
}

/// Full-screen end-of-run overlay. In `GameOver` it shows the result; in
/// `NameCapture` it additionally shows the name prompt with a cursor.
pub fn render_session_end(
    frame: &mut Frame,
    area: Rect,
    controller: &SessionController,
    kind: GameKind,
) {
    let session = controller.session();
    let capturing = controller.phase() == Phase::NameCapture;

    let mut lines = vec![
        title_line(format!(":: {} OVER ::", kind.name().to_uppercase()), Color::Red),
        Line::from(""),
        Line::from(Span::styled(
            format!("Final score: {}", session.score),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if capturing {
        lines.push(Line::from(Span::styled(
            "Enter your name for the ledger:",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(vec![
            Span::styled(
                controller.name_buffer().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::styled("_", Style::default().fg(Color::LightYellow)),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[Enter] Save   [Esc] Menu",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "...",
            Style::default().fg(Color::DarkGray),
        )));
    }

    if let Some((name, total)) = controller.last_committed() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} now has {} on the ledger", name, total),
            Style::default().fg(Color::Cyan),
        )));
    }

    render_overlay(frame, area, Color::Red, lines);
}
