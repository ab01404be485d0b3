//! The shipped games. Each one is a `SessionConfig` preset over the same
//! engine; picking a game in the menu just picks a config.

pub mod hurdles;
pub mod meadow;

use crate::engine::config::{SessionConfig, TuningOverrides};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    /// Side-scrolling hurdle runner with stompable patrollers.
    HurdleRush,
    /// Catch-and-bank game with thieving crossers.
    MeadowFetch,
}

impl GameKind {
    pub const ALL: [GameKind; 2] = [GameKind::HurdleRush, GameKind::MeadowFetch];

    pub fn name(&self) -> &'static str {
        match self {
            GameKind::HurdleRush => hurdles::NAME,
            GameKind::MeadowFetch => meadow::NAME,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GameKind::HurdleRush => hurdles::DESCRIPTION,
            GameKind::MeadowFetch => meadow::DESCRIPTION,
        }
    }

    /// The preset config with any user tuning overrides applied.
    pub fn config(&self) -> SessionConfig {
        let mut config = match self {
            GameKind::HurdleRush => hurdles::config(),
            GameKind::MeadowFetch => meadow::config(),
        };
        TuningOverrides::load().apply(&mut config);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_game_has_distinct_name() {
        let names: Vec<&str> = GameKind::ALL.iter().map(|g| g.name()).collect();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names, deduped);
    }
}
