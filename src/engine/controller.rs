//! Session phase machine. Wraps a `GameSession` and decides, each tick,
//! whether the simulation runs at all.
//!
//! Everything here is tick-counted, never wall-clock: the countdown, the
//! explosion feedback, and the game-over pause are all `ticks_left`
//! decrements, so a suspended terminal cannot fast-forward a phase.

use std::io;

use rand::Rng;

use crate::constants::{
    COUNTDOWN_BEATS, COUNTDOWN_BEAT_TICKS, EXPLOSION_TICKS, GAME_OVER_TICKS, MAX_NAME_LEN,
};
use crate::engine::config::SessionConfig;
use crate::engine::session::{GameSession, TickReport};
use crate::input::{InputFrame, TextInput};
use crate::ledger::ScoreStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pre-run beats ("3", "2", "1", "GO!"). Jump or action skips it.
    Countdown { beat: usize, ticks_left: u64 },
    /// The simulation is live.
    Running,
    /// Collision feedback. The simulation is frozen underneath.
    Exploding { ticks_left: u64 },
    /// Terminal pause before name capture opens.
    GameOver { ticks_left: u64 },
    /// Waiting for the player to type a name for the ledger.
    NameCapture,
}

impl Phase {
    fn countdown() -> Self {
        Phase::Countdown {
            beat: 0,
            ticks_left: COUNTDOWN_BEAT_TICKS,
        }
    }
}

/// Owns one session plus its phase, name buffer, and ledger handle.
#[derive(Debug)]
pub struct SessionController {
    session: GameSession,
    phase: Phase,
    name_buffer: String,
    /// The last (name, new ledger total) commit, for the confirmation line.
    last_committed: Option<(String, u32)>,
    store: ScoreStore,
}

impl SessionController {
    pub fn new(config: SessionConfig, store: ScoreStore) -> Self {
        Self {
            session: GameSession::new(config),
            phase: Phase::countdown(),
            name_buffer: String::new(),
            last_committed: None,
            store,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn name_buffer(&self) -> &str {
        &self.name_buffer
    }

    pub fn last_committed(&self) -> Option<&(String, u32)> {
        self.last_committed.as_ref()
    }

    /// The beat string to display, when counting down.
    pub fn countdown_label(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Countdown { beat, .. } => COUNTDOWN_BEATS.get(beat).copied(),
            _ => None,
        }
    }

    /// Advance one tick. The session itself only steps in `Running`; every
    /// other phase just counts down its own clock.
    pub fn tick(&mut self, input: &InputFrame, rng: &mut impl Rng) -> Option<TickReport> {
        match self.phase {
            Phase::Countdown { beat, ticks_left } => {
                if input.jump || input.action {
                    self.phase = Phase::Running;
                    return None;
                }
                if ticks_left > 1 {
                    self.phase = Phase::Countdown {
                        beat,
                        ticks_left: ticks_left - 1,
                    };
                } else if beat + 1 < COUNTDOWN_BEATS.len() {
                    self.phase = Phase::Countdown {
                        beat: beat + 1,
                        ticks_left: COUNTDOWN_BEAT_TICKS,
                    };
                } else {
                    self.phase = Phase::Running;
                }
                None
            }
            Phase::Running => {
                let report = self.session.tick(input, rng);
                if report.obstacle_hit {
                    self.phase = Phase::Exploding {
                        ticks_left: EXPLOSION_TICKS,
                    };
                }
                Some(report)
            }
            Phase::Exploding { ticks_left } => {
                if ticks_left > 1 {
                    self.phase = Phase::Exploding {
                        ticks_left: ticks_left - 1,
                    };
                } else if self.session.lives() > 0 {
                    self.phase = Phase::countdown();
                } else {
                    self.phase = Phase::GameOver {
                        ticks_left: GAME_OVER_TICKS,
                    };
                }
                None
            }
            Phase::GameOver { ticks_left } => {
                if ticks_left > 1 {
                    self.phase = Phase::GameOver {
                        ticks_left: ticks_left - 1,
                    };
                } else {
                    self.phase = Phase::NameCapture;
                }
                None
            }
            Phase::NameCapture => None,
        }
    }

    /// Feed a text-entry intent to the name capture screen. Confirming a
    /// non-empty name commits the score to the ledger and resets the
    /// session; an empty name is ignored. A no-op outside `NameCapture`.
    pub fn handle_text(&mut self, input: TextInput) -> io::Result<()> {
        if self.phase != Phase::NameCapture {
            return Ok(());
        }
        match input {
            TextInput::Char(c) => {
                if self.name_buffer.chars().count() < MAX_NAME_LEN {
                    self.name_buffer.push(c);
                }
            }
            TextInput::Backspace => {
                self.name_buffer.pop();
            }
            TextInput::Confirm => {
                let name = self.name_buffer.trim().to_string();
                if name.is_empty() {
                    return Ok(());
                }
                let total = self.store.record(&name, self.session.score)?;
                self.last_committed = Some((name, total));
                self.reset();
            }
        }
        Ok(())
    }

    /// Fresh session from the same config, back to the countdown.
    pub fn reset(&mut self) {
        self.session = GameSession::new(self.session.config.clone());
        self.phase = Phase::countdown();
        self.name_buffer.clear();
    }
}
