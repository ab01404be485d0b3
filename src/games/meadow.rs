//! Meadow Fetch: treats rain from the sky. Catch them to score and bank
//! them in the bowl; crossers trot through and steal a banked treat each
//! unless driven off with a thrown bone.

use crate::engine::config::{AdversaryBehavior, SessionConfig, SpawnTuning};
use crate::engine::entity::Body;

pub const NAME: &str = "Meadow Fetch";
pub const DESCRIPTION: &str = "Catch the treats, guard the bowl";

pub fn config() -> SessionConfig {
    SessionConfig {
        playfield_width: 800.0,
        playfield_height: 600.0,
        ground_line: 570.0,

        gravity: 0.8,
        jump_impulse: -15.0,

        player_width: 60.0,
        player_height: 60.0,
        player_start_x: 370.0,
        player_speed: 5.0,
        lives: 3,

        obstacle_count: 0,
        obstacle_spacing: 0.0,
        obstacle_width: 0.0,
        obstacle_height: 0.0,
        obstacle_y: 0.0,
        scroll_speed: 0.0,

        adversary_behavior: AdversaryBehavior::Cross,
        adversary_width: 60.0,
        adversary_height: 60.0,
        adversary_speed: 3.0,
        adversary_seeds: vec![],
        adversary_spawn: Some(SpawnTuning {
            floor: 1,
            interval_ticks: 188,
        }),
        adversary_cross_band: (450.0, 550.0),

        stomp_enabled: false,
        stomp_tolerance: 10.0,
        stomp_reward: 0,
        jump_trigger_distance: 100.0,

        collectible_spawn: Some(SpawnTuning {
            floor: 8,
            interval_ticks: 31,
        }),
        collectible_width: 40.0,
        collectible_height: 20.0,
        collectible_fall_speed: 2.0,
        collect_reward: 1,

        effects_enabled: true,
        effect_width: 50.0,
        effect_height: 12.0,
        effect_speed: 5.0,
        effect_lifetime_ticks: 31.0,
        effect_reward: 2,

        helper_on_stomp: false,
        helper_width: 0.0,
        helper_height: 0.0,
        helper_speed: 0.0,
        helper_lifetime_ticks: 0.0,

        bowl: Some(Body::new(300.0, 480.0, 200.0, 100.0)),
    }
}
