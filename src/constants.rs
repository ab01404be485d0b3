// Simulation timing constants
pub const TICK_INTERVAL_MS: u64 = 16; // ~60 physics ticks per second

/// Max wall-clock time folded into one frame. Prevents a physics explosion
/// after the terminal was suspended or lagging.
pub const MAX_FRAME_MS: u64 = 100;

// Phase timing (all measured in ticks, never wall-clock sleeps)
pub const COUNTDOWN_BEAT_TICKS: u64 = 60; // ~1s per beat
pub const COUNTDOWN_BEATS: [&str; 4] = ["3", "2", "1", "GO!"];
pub const EXPLOSION_TICKS: u64 = 30; // ~0.5s of collision feedback
pub const GAME_OVER_TICKS: u64 = 60; // pause before name capture opens

// Name capture
pub const MAX_NAME_LEN: usize = 24;

/// Entities heading off the playfield are despawned once fully past this
/// margin, so exits look like exits instead of pop-out.
pub const OFFSCREEN_MARGIN: f64 = 60.0;
