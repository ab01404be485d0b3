//! Playfield rendering.
//!
//! Uses a cell buffer for per-character color control: every entity is
//! stamped into a 2D grid scaled down from playfield units, and the grid
//! is flushed row-by-row as Paragraph widgets with span runs.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::chrome::{create_game_layout, render_info_panel_frame, render_status_bar};
use super::overlays;
use crate::constants::EXPLOSION_TICKS;
use crate::engine::entity::{Body, PlayerForm};
use crate::engine::{GameSession, Phase, SessionController};
use crate::games::GameKind;

const GROUND_CHAR: char = '▓';
const GROUND_SUB: char = '░';

/// Cell in the render buffer with foreground and background colors.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// Per-game glyphs and colors.
struct Theme {
    accent: Color,
    player: char,
    adversary: (char, Color),
    obstacle: (char, Color),
    collectible: (char, Color),
    effect: (char, Color),
    helper: (char, Color),
}

fn theme(kind: GameKind) -> Theme {
    match kind {
        GameKind::HurdleRush => Theme {
            accent: Color::LightYellow,
            player: '█',
            adversary: ('&', Color::LightRed),
            obstacle: ('#', Color::Rgb(120, 100, 80)),
            collectible: ('*', Color::Yellow),
            effect: ('-', Color::White),
            helper: ('o', Color::LightGreen),
        },
        GameKind::MeadowFetch => Theme {
            accent: Color::LightCyan,
            player: '█',
            adversary: ('W', Color::LightRed),
            obstacle: ('#', Color::Rgb(120, 100, 80)),
            collectible: ('*', Color::Yellow),
            effect: ('=', Color::White),
            helper: ('o', Color::LightGreen),
        },
    }
}

/// Render one frame of a session: playfield, status bar, info panel, and
/// any phase overlay.
pub fn render_scene(frame: &mut Frame, area: Rect, controller: &SessionController, kind: GameKind) {
    // Terminal phases replace the scene entirely.
    if matches!(controller.phase(), Phase::GameOver { .. } | Phase::NameCapture) {
        overlays::render_session_end(frame, area, controller, kind);
        return;
    }

    let th = theme(kind);
    let title = format!(" {} ", kind.name());
    let layout = create_game_layout(frame, area, &title, th.accent, 15, 24);

    render_play_field(frame, layout.content, controller, &th);

    if let Some(label) = controller.countdown_label() {
        overlays::render_countdown(frame, layout.content, label);
    }

    render_status_bar_content(frame, layout.status_bar, controller, &th);
    render_info_panel(frame, layout.info_panel, controller, kind, &th);
}

/// Stamp an entity rect into the buffer, clipped to the grid.
fn draw_body(
    buffer: &mut [Vec<Cell>],
    body: &Body,
    x_scale: f64,
    y_scale: f64,
    ch: char,
    fg: Color,
) {
    let width = buffer.first().map(|r| r.len()).unwrap_or(0);
    let height = buffer.len();

    let x0 = (body.left() * x_scale).round() as i32;
    let x1 = ((body.right() * x_scale).round() as i32).max(x0 + 1);
    let y0 = (body.top() * y_scale).round() as i32;
    let y1 = ((body.bottom() * y_scale).round() as i32).max(y0 + 1);

    for row in y0..y1 {
        if row < 0 || row >= height as i32 {
            continue;
        }
        for col in x0..x1 {
            if col >= 0 && col < width as i32 {
                buffer[row as usize][col as usize] = Cell {
                    ch,
                    fg,
                    bg: Color::Reset,
                };
            }
        }
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, controller: &SessionController, th: &Theme) {
    if area.height < 2 || area.width < 10 {
        return;
    }

    let session: &GameSession = controller.session();
    let config = &session.config;

    let render_width = area.width;
    let render_height = area.height;
    let mut buffer: Vec<Vec<Cell>> =
        vec![vec![Cell::default(); render_width as usize]; render_height as usize];

    let x_scale = render_width as f64 / config.playfield_width;
    let y_scale = render_height as f64 / config.playfield_height;

    // ── Ground (bottom two rows for depth) ───────────────────────────
    let ground_row = (render_height - 1) as usize;
    for cell in buffer[ground_row].iter_mut() {
        *cell = Cell {
            ch: GROUND_CHAR,
            fg: Color::Rgb(90, 110, 50),
            bg: Color::Rgb(40, 50, 30),
        };
    }
    if ground_row > 0 {
        for (i, cell) in buffer[ground_row - 1].iter_mut().enumerate() {
            if cell.ch == ' ' && i % 5 == 0 {
                *cell = Cell {
                    ch: GROUND_SUB,
                    fg: Color::Rgb(70, 85, 40),
                    bg: Color::Reset,
                };
            }
        }
    }

    // ── Bowl ─────────────────────────────────────────────────────────
    if let Some(bowl) = config.bowl {
        draw_body(&mut buffer, &bowl, x_scale, y_scale, '░', Color::Cyan);
    }

    // ── Obstacles ────────────────────────────────────────────────────
    let (ch, fg) = th.obstacle;
    for obstacle in &session.obstacles {
        draw_body(&mut buffer, &obstacle.body, x_scale, y_scale, ch, fg);
    }

    // ── Collectibles ─────────────────────────────────────────────────
    let (ch, fg) = th.collectible;
    for collectible in &session.collectibles {
        draw_body(&mut buffer, &collectible.body, x_scale, y_scale, ch, fg);
    }

    // ── Adversaries ──────────────────────────────────────────────────
    let (ch, fg) = th.adversary;
    for adversary in &session.adversaries {
        let fg = if adversary.struck { Color::DarkGray } else { fg };
        draw_body(&mut buffer, &adversary.body, x_scale, y_scale, ch, fg);
    }

    // ── Helpers ──────────────────────────────────────────────────────
    let (ch, fg) = th.helper;
    for helper in &session.helpers {
        draw_body(&mut buffer, &helper.body, x_scale, y_scale, ch, fg);
    }

    // ── Effects ──────────────────────────────────────────────────────
    let (ch, fg) = th.effect;
    for effect in &session.effects {
        let ch = if effect.hit { '+' } else { ch };
        draw_body(&mut buffer, &effect.body, x_scale, y_scale, ch, fg);
    }

    // ── Player ───────────────────────────────────────────────────────
    let player_color = match session.player.form {
        PlayerForm::Normal => th.accent,
        PlayerForm::Transformed => Color::LightMagenta,
    };
    draw_body(
        &mut buffer,
        &session.player.body,
        x_scale,
        y_scale,
        th.player,
        player_color,
    );

    // ── Explosion feedback: ring expanding around the player ─────────
    if let Phase::Exploding { ticks_left } = controller.phase() {
        let progress = 1.0 - ticks_left as f64 / EXPLOSION_TICKS as f64;
        let cx = (session.player.body.center_x() * x_scale).round() as i32;
        let cy = (session.player.body.center_y() * y_scale).round() as i32;
        let radius = 1.0 + progress * 5.0;
        for i in 0..12 {
            let angle = i as f64 * std::f64::consts::TAU / 12.0;
            let col = cx + (angle.cos() * radius * 2.0).round() as i32;
            let row = cy + (angle.sin() * radius).round() as i32;
            if row >= 0
                && (row as usize) < render_height as usize
                && col >= 0
                && (col as usize) < render_width as usize
            {
                buffer[row as usize][col as usize] = Cell {
                    ch: '*',
                    fg: Color::LightRed,
                    bg: Color::Reset,
                };
            }
        }
    }

    // ── Header: lives (left) and score (right) on row 0 ──────────────
    let lives_text = format!("Lives: {}", "♥".repeat(session.lives() as usize));
    for (i, ch) in lives_text.chars().enumerate() {
        if i < render_width as usize {
            buffer[0][i] = Cell {
                ch,
                fg: Color::LightRed,
                bg: Color::Reset,
            };
        }
    }

    let score_text = format!("Score: {}", session.score);
    let score_start = (render_width as usize).saturating_sub(score_text.len() + 1);
    for (i, ch) in score_text.chars().enumerate() {
        let col = score_start + i;
        if col < render_width as usize {
            buffer[0][col] = Cell {
                ch,
                fg: Color::White,
                bg: Color::Reset,
            };
        }
    }

    // ── Render buffer to terminal ────────────────────────────────────
    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let line = Paragraph::new(Line::from(spans));
        let row_area = Rect::new(area.x, area.y + row_idx as u16, render_width, 1);
        if row_area.y < area.y + area.height {
            frame.render_widget(line, row_area);
        }
    }
}

fn render_status_bar_content(
    frame: &mut Frame,
    area: Rect,
    controller: &SessionController,
    th: &Theme,
) {
    match controller.phase() {
        Phase::Countdown { .. } => render_status_bar(
            frame,
            area,
            "Get ready...",
            th.accent,
            &[("[Space]", "Start now"), ("[Esc]", "Menu")],
        ),
        Phase::Exploding { .. } => render_status_bar(frame, area, "Ouch!", Color::LightRed, &[]),
        _ => render_status_bar(
            frame,
            area,
            "Go!",
            th.accent,
            &[
                ("[←/→]", "Move"),
                ("[Space]", "Jump"),
                ("[F]", "Throw"),
                ("[Esc]", "Menu"),
            ],
        ),
    }
}

fn render_info_panel(
    frame: &mut Frame,
    area: Rect,
    controller: &SessionController,
    kind: GameKind,
    th: &Theme,
) {
    let inner = render_info_panel_frame(frame, area);
    let session = controller.session();

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            kind.description(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                session.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Lives: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                session.lives().to_string(),
                Style::default().fg(Color::LightRed),
            ),
        ]),
    ];

    match kind {
        GameKind::HurdleRush => {
            lines.push(Line::from(vec![
                Span::styled("Stomps: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    session.stomps.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]));
        }
        GameKind::MeadowFetch => {
            lines.push(Line::from(vec![
                Span::styled("Bowl: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    session.banked.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Legend:",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::styled(format!(" {} ", th.player), Style::default().fg(th.accent)),
        Span::styled("You", Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(vec![
        Span::styled(
            format!(" {} ", th.adversary.0),
            Style::default().fg(th.adversary.1),
        ),
        Span::styled("Adversary", Style::default().fg(Color::DarkGray)),
    ]));
    match kind {
        GameKind::HurdleRush => {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", th.obstacle.0),
                    Style::default().fg(th.obstacle.1),
                ),
                Span::styled("Hurdle", Style::default().fg(Color::DarkGray)),
            ]));
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", th.helper.0),
                    Style::default().fg(th.helper.1),
                ),
                Span::styled("Helper", Style::default().fg(Color::DarkGray)),
            ]));
        }
        GameKind::MeadowFetch => {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", th.collectible.0),
                    Style::default().fg(th.collectible.1),
                ),
                Span::styled("Treat", Style::default().fg(Color::DarkGray)),
            ]));
            lines.push(Line::from(vec![
                Span::styled(" ░ ", Style::default().fg(Color::Cyan)),
                Span::styled("Bowl", Style::default().fg(Color::DarkGray)),
            ]));
        }
    }

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);
}
