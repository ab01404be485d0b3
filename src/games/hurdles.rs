//! Hurdle Rush: an endless side-scroller. Hurdles stream in from the
//! right; clearing one scores a point, clipping one costs a life. Three
//! patrollers pace the track and can be stomped for a bonus, each stomp
//! recruiting a helper that hunts the rest.

use crate::engine::config::{AdversaryBehavior, SessionConfig};

pub const NAME: &str = "Hurdle Rush";
pub const DESCRIPTION: &str = "Jump the hurdles, stomp the patrollers";

pub fn config() -> SessionConfig {
    SessionConfig {
        playfield_width: 1200.0,
        playfield_height: 600.0,
        ground_line: 570.0,

        gravity: 0.8,
        jump_impulse: -15.0,

        player_width: 30.0,
        player_height: 30.0,
        player_start_x: 100.0,
        player_speed: 10.0,
        lives: 3,

        obstacle_count: 3,
        obstacle_spacing: 300.0,
        obstacle_width: 50.0,
        obstacle_height: 45.0,
        obstacle_y: 520.0,
        scroll_speed: 5.0,

        adversary_behavior: AdversaryBehavior::Patrol { range: 100.0 },
        adversary_width: 30.0,
        adversary_height: 30.0,
        adversary_speed: 3.0,
        adversary_seeds: vec![300.0, 700.0, 1100.0],
        adversary_spawn: None,
        adversary_cross_band: (0.0, 0.0),

        stomp_enabled: true,
        stomp_tolerance: 10.0,
        stomp_reward: 10,
        jump_trigger_distance: 100.0,

        collectible_spawn: None,
        collectible_width: 0.0,
        collectible_height: 0.0,
        collectible_fall_speed: 0.0,
        collect_reward: 0,

        effects_enabled: false,
        effect_width: 0.0,
        effect_height: 0.0,
        effect_speed: 0.0,
        effect_lifetime_ticks: 0.0,
        effect_reward: 0,

        helper_on_stomp: true,
        helper_width: 20.0,
        helper_height: 20.0,
        helper_speed: 4.0,
        helper_lifetime_ticks: 300.0,

        bowl: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hurdle_layout_is_coherent() {
        let c = config();
        // Every hurdle starts off the right edge.
        assert!(c.obstacle_count > 0);
        assert!(c.obstacle_spacing > c.obstacle_width, "hurdles cannot overlap");
        // Hurdles stand on or above the ground line.
        assert!(c.obstacle_y + c.obstacle_height <= c.ground_line);
        // Patrol seeds all fit on the playfield.
        for &seed in &c.adversary_seeds {
            assert!(seed >= 0.0 && seed <= c.playfield_width);
        }
    }

    #[test]
    fn test_jump_clears_a_hurdle() {
        // Peak height of the jump arc must exceed the hurdle height, or the
        // game is unwinnable. Peak = impulse^2 / (2 * gravity).
        let c = config();
        let peak = c.jump_impulse * c.jump_impulse / (2.0 * c.gravity);
        assert!(
            peak > c.obstacle_height,
            "jump peak {peak} must clear hurdle height {}",
            c.obstacle_height
        );
    }

    #[test]
    fn test_stomp_game_has_helpers_and_no_projectiles() {
        let c = config();
        assert!(c.stomp_enabled);
        assert!(c.helper_on_stomp);
        assert!(!c.effects_enabled);
        assert!(c.collectible_spawn.is_none());
        assert!(c.bowl.is_none());
    }
}
