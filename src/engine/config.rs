//! Session configuration: every tuned constant of the engine in one
//! serializable struct. The two shipped games are presets over this
//! (see `games::hurdles` and `games::meadow`); a handful of game-feel
//! knobs can additionally be overridden from `~/.scamper/tuning.json`.

use crate::engine::entity::Body;
use crate::persistence;
use serde::{Deserialize, Serialize};

/// How adversaries move for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AdversaryBehavior {
    /// Gravity-bound ground patrol around the seed position, hopping
    /// obstacles that come within the jump trigger distance.
    Patrol { range: f64 },
    /// Horizontal traversal, steering toward the nearest live collectible
    /// and retreating when struck by an effect.
    Cross,
}

/// Floor + interval parameters for one spawned entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnTuning {
    pub floor: usize,
    pub interval_ticks: u64,
}

/// Full parameterization of a game session. All speeds are per tick,
/// all distances in playfield units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub playfield_width: f64,
    pub playfield_height: f64,
    /// The y coordinate feet rest on; an entity of height `h` rests with
    /// its top edge at `ground_line - h`.
    pub ground_line: f64,

    pub gravity: f64,
    pub jump_impulse: f64,

    pub player_width: f64,
    pub player_height: f64,
    pub player_start_x: f64,
    pub player_speed: f64,
    pub lives: u32,

    /// Obstacle pool; zero disables obstacles entirely.
    pub obstacle_count: usize,
    pub obstacle_spacing: f64,
    pub obstacle_width: f64,
    pub obstacle_height: f64,
    pub obstacle_y: f64,
    pub scroll_speed: f64,

    pub adversary_behavior: AdversaryBehavior,
    pub adversary_width: f64,
    pub adversary_height: f64,
    pub adversary_speed: f64,
    /// Seed x positions placed at session start (patrol games).
    pub adversary_seeds: Vec<f64>,
    /// Dynamic spawning (crossing games); `None` means seeds only.
    pub adversary_spawn: Option<SpawnTuning>,
    /// Vertical band crossers spawn in (min y, max y).
    pub adversary_cross_band: (f64, f64),

    pub stomp_enabled: bool,
    pub stomp_tolerance: f64,
    pub stomp_reward: u32,
    pub jump_trigger_distance: f64,

    pub collectible_spawn: Option<SpawnTuning>,
    pub collectible_width: f64,
    pub collectible_height: f64,
    pub collectible_fall_speed: f64,
    pub collect_reward: u32,

    pub effects_enabled: bool,
    pub effect_width: f64,
    pub effect_height: f64,
    pub effect_speed: f64,
    pub effect_lifetime_ticks: f64,
    pub effect_reward: u32,

    pub helper_on_stomp: bool,
    pub helper_width: f64,
    pub helper_height: f64,
    pub helper_speed: f64,
    pub helper_lifetime_ticks: f64,

    /// Bank the player deposits collectibles into; crossers steal from it.
    pub bowl: Option<Body>,
}

impl SessionConfig {
    /// Resting top-edge y for a ground entity of the given height.
    pub fn rest_y(&self, height: f64) -> f64 {
        self.ground_line - height
    }
}

/// Optional game-feel overrides loaded from `~/.scamper/tuning.json`.
/// Absent fields keep the preset value; a missing or invalid file means
/// no overrides at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningOverrides {
    pub stomp_tolerance: Option<f64>,
    pub jump_trigger_distance: Option<f64>,
    pub gravity: Option<f64>,
    pub jump_impulse: Option<f64>,
    pub scroll_speed: Option<f64>,
    pub lives: Option<u32>,
}

pub const TUNING_FILE: &str = "tuning.json";

impl TuningOverrides {
    /// Load overrides from the data directory, degrading to defaults.
    pub fn load() -> Self {
        persistence::load_json_or_default(TUNING_FILE)
    }

    pub fn apply(&self, config: &mut SessionConfig) {
        if let Some(v) = self.stomp_tolerance {
            config.stomp_tolerance = v;
        }
        if let Some(v) = self.jump_trigger_distance {
            config.jump_trigger_distance = v;
        }
        if let Some(v) = self.gravity {
            config.gravity = v;
        }
        if let Some(v) = self.jump_impulse {
            config.jump_impulse = v;
        }
        if let Some(v) = self.scroll_speed {
            config.scroll_speed = v;
        }
        if let Some(v) = self.lives {
            config.lives = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games;

    #[test]
    fn test_rest_y() {
        let config = games::hurdles::config();
        assert_eq!(
            config.rest_y(30.0),
            config.ground_line - 30.0,
            "a 30-unit entity rests with its top 30 above the ground line"
        );
    }

    #[test]
    fn test_overrides_apply_only_present_fields() {
        let mut config = games::hurdles::config();
        let original_gravity = config.gravity;

        let overrides = TuningOverrides {
            stomp_tolerance: Some(25.0),
            lives: Some(5),
            ..Default::default()
        };
        overrides.apply(&mut config);

        assert_eq!(config.stomp_tolerance, 25.0);
        assert_eq!(config.lives, 5);
        assert_eq!(config.gravity, original_gravity);
    }

    #[test]
    fn test_default_overrides_change_nothing() {
        let mut config = games::hurdles::config();
        let before = config.clone();
        TuningOverrides::default().apply(&mut config);
        assert_eq!(config, before);
    }

    #[test]
    fn test_overrides_parse_partial_json() {
        let overrides: TuningOverrides =
            serde_json::from_str(r#"{ "stomp_tolerance": 12.5 }"#).expect("partial json parses");
        assert_eq!(overrides.stomp_tolerance, Some(12.5));
        assert_eq!(overrides.lives, None);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = games::meadow::config();
        let json = serde_json::to_string(&config).expect("serializes");
        let back: SessionConfig = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, config);
    }
}
