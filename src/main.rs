use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use scamper::constants::{MAX_FRAME_MS, TICK_INTERVAL_MS};
use scamper::input::{text_input, InputFrame};
use scamper::ui;
use scamper::{build_info, GameKind, LedgerSnapshot, Phase, ScoreStore, SessionController};

enum Screen {
    Menu,
    Playing(GameKind),
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "scamper {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Scamper - Terminal arcade games\n");
                println!("Usage: scamper [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'scamper --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Restore terminal even when the loop errored
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut screen = Screen::Menu;
    let mut menu_selected: usize = 0;
    let mut ledger: LedgerSnapshot = load_ledger();
    let mut controller: Option<SessionController> = None;

    let mut input = InputFrame::default();
    let mut rng = rand::thread_rng();
    let mut last_frame = Instant::now();
    let mut accumulated_ms: u64 = 0;

    loop {
        // ── Events ───────────────────────────────────────────────────
        if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match &screen {
                    Screen::Menu => match key.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Up | KeyCode::Char('k') => {
                            menu_selected = menu_selected.saturating_sub(1);
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            menu_selected = (menu_selected + 1).min(GameKind::ALL.len() - 1);
                        }
                        KeyCode::Enter => {
                            let kind = GameKind::ALL[menu_selected];
                            let store = ScoreStore::open_default()?;
                            controller = Some(SessionController::new(kind.config(), store));
                            input = InputFrame::default();
                            accumulated_ms = 0;
                            last_frame = Instant::now();
                            screen = Screen::Playing(kind);
                        }
                        _ => {}
                    },
                    Screen::Playing(_) => {
                        let capturing = controller
                            .as_ref()
                            .map(|c| c.phase() == Phase::NameCapture)
                            .unwrap_or(false);

                        if key.code == KeyCode::Esc {
                            controller = None;
                            ledger = load_ledger();
                            screen = Screen::Menu;
                        } else if capturing {
                            if let (Some(c), Some(intent)) =
                                (controller.as_mut(), text_input(&key))
                            {
                                c.handle_text(intent)?;
                            }
                        } else {
                            input.latch(&key);
                        }
                    }
                }
            }
        }

        // ── Fixed-timestep simulation ────────────────────────────────
        if let (Screen::Playing(_), Some(c)) = (&screen, controller.as_mut()) {
            let elapsed = last_frame.elapsed().as_millis() as u64;
            last_frame = Instant::now();
            accumulated_ms += elapsed.min(MAX_FRAME_MS);

            let mut ticked = false;
            while accumulated_ms >= TICK_INTERVAL_MS {
                c.tick(&input, &mut rng);
                // Jump/throw are one tick each; movement persists via key repeat.
                input.clear_edges();
                accumulated_ms -= TICK_INTERVAL_MS;
                ticked = true;
            }
            // Held keys re-latch next frame via key repeat; a latched frame
            // that no tick consumed yet is kept.
            if ticked {
                input = InputFrame::default();
            }
        } else {
            last_frame = Instant::now();
        }

        // ── Draw ─────────────────────────────────────────────────────
        terminal.draw(|frame| {
            let area = frame.size();
            match (&screen, controller.as_ref()) {
                (Screen::Playing(kind), Some(c)) => ui::scene::render_scene(frame, area, c, *kind),
                _ => ui::menu::render_menu(frame, area, menu_selected, &ledger),
            }
        })?;
    }
}

fn load_ledger() -> LedgerSnapshot {
    ScoreStore::open_default()
        .and_then(|s| s.load())
        .unwrap_or_default()
}
