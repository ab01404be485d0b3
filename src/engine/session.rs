//! `GameSession`: the authoritative owner of all entity collections and
//! the fixed-timestep tick pipeline.
//!
//! Tick order (fixed and deterministic): input → player physics →
//! obstacles (recycle + score on wrap) → spawn policies → adversaries
//! (with the obstacle-hop heuristic) → effects → collision resolution →
//! prune → helpers. Entity removal is mark-then-prune: flags are set
//! during the pass and the collections are filtered once at the end,
//! never mutated mid-iteration.

use crate::constants::OFFSCREEN_MARGIN;
use crate::engine::collision;
use crate::engine::config::{AdversaryBehavior, SessionConfig};
use crate::engine::entity::{Adversary, Collectible, Effect, Facing, Helper, Obstacle, Player};
use crate::engine::spawn::SpawnPolicy;
use crate::input::InputFrame;
use rand::Rng;

/// Everything notable that happened in one tick. The controller reads it
/// for phase transitions; the UI reads it for feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Player collided with an obstacle (at most one per tick).
    pub obstacle_hit: bool,
    /// That hit drained the last life.
    pub lives_depleted: bool,
    /// Obstacles recycled past the left edge (each scored +1).
    pub recycled: u32,
    /// Adversaries stomped by the player.
    pub stomps: u32,
    /// Collectibles caught.
    pub collected: u32,
    /// Effects that landed their one hit.
    pub effect_hits: u32,
    /// Adversaries taken out by helpers.
    pub helper_stomps: u32,
    /// Banked collectibles stolen from the bowl.
    pub stolen: u32,
}

/// One run of one game: entity collections, score, and the tick pipeline.
/// Owned by a `SessionController` and replaced wholesale on reset.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: SessionConfig,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub adversaries: Vec<Adversary>,
    pub collectibles: Vec<Collectible>,
    pub effects: Vec<Effect>,
    pub helpers: Vec<Helper>,
    /// Non-negative, monotonically non-decreasing until reset.
    pub score: u32,
    /// Collectibles currently banked in the bowl.
    pub banked: u32,
    /// Lifetime stomp count for the session (display counter).
    pub stomps: u32,
    pub tick_count: u64,
    collectible_spawner: Option<SpawnPolicy>,
    adversary_spawner: Option<SpawnPolicy>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        let player = Player::new(
            config.player_start_x,
            config.rest_y(config.player_height),
            config.player_width,
            config.player_height,
            config.lives,
        );

        let obstacles = (0..config.obstacle_count)
            .map(|i| {
                Obstacle::new(
                    config.playfield_width + i as f64 * config.obstacle_spacing,
                    config.obstacle_y,
                    config.obstacle_width,
                    config.obstacle_height,
                )
            })
            .collect();

        let adversaries = config
            .adversary_seeds
            .iter()
            .map(|&x| {
                Adversary::new(
                    x,
                    config.rest_y(config.adversary_height),
                    config.adversary_width,
                    config.adversary_height,
                    1.0,
                )
            })
            .collect();

        let collectible_spawner = config
            .collectible_spawn
            .map(|t| SpawnPolicy::new(t.floor, t.interval_ticks));
        let adversary_spawner = config
            .adversary_spawn
            .map(|t| SpawnPolicy::new(t.floor, t.interval_ticks));

        Self {
            config,
            player,
            obstacles,
            adversaries,
            collectibles: Vec::new(),
            effects: Vec::new(),
            helpers: Vec::new(),
            score: 0,
            banked: 0,
            stomps: 0,
            tick_count: 0,
            collectible_spawner,
            adversary_spawner,
        }
    }

    pub fn lives(&self) -> u32 {
        self.player.lives
    }

    /// Live (unremoved) adversary count.
    pub fn live_adversaries(&self) -> usize {
        self.adversaries.iter().filter(|a| !a.removed).count()
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self, input: &InputFrame, rng: &mut impl Rng) -> TickReport {
        let mut report = TickReport::default();
        self.tick_count += 1;
        let dt = 1.0;

        // 1. Apply input.
        self.apply_input(input);

        // 2. Player physics.
        let player_rest = self.config.rest_y(self.config.player_height);
        self.player.advance(dt, self.config.gravity, player_rest);

        // 3. Obstacles: scroll, recycle past the left edge, score the wrap.
        for obstacle in &mut self.obstacles {
            obstacle.advance(dt, self.config.scroll_speed);
            if obstacle.past_left_edge() {
                obstacle.recycle(self.config.playfield_width);
                self.score += 1;
                report.recycled += 1;
            }
        }

        // 4. Spawn policies.
        self.run_spawners(rng);

        // 5. Collectibles fall; ones below the playfield are marked missed.
        for collectible in &mut self.collectibles {
            collectible.advance(dt, self.config.playfield_height);
        }

        // 6. Adversaries.
        self.advance_adversaries(dt);

        // 7. Effects (frozen once hit; expiry handled at prune).
        for effect in &mut self.effects {
            effect.advance(dt);
        }

        // 8. Collisions, in the fixed precedence order.
        collision::resolve(self, &mut report);

        // 9. Prune everything marked during this tick.
        self.prune();

        // 10. Helpers chase whatever is still alive.
        self.advance_helpers(dt);

        report
    }

    fn apply_input(&mut self, input: &InputFrame) {
        let max_x = self.config.playfield_width - self.player.body.width;
        if input.left {
            self.player.body.x = (self.player.body.x - self.config.player_speed).max(0.0);
            self.player.facing = Facing::Left;
        }
        if input.right {
            self.player.body.x = (self.player.body.x + self.config.player_speed).min(max_x);
            self.player.facing = Facing::Right;
        }
        if input.jump {
            self.player.jump(self.config.jump_impulse);
        }
        if input.action && self.config.effects_enabled {
            self.fire_effect();
        }
    }

    /// Fire an ephemeral effect from the player toward the nearest live
    /// adversary. No adversary, no effect.
    fn fire_effect(&mut self) {
        let px = self.player.body.center_x();
        let py = self.player.body.center_y();

        let nearest = self
            .adversaries
            .iter()
            .filter(|a| !a.removed)
            .min_by(|a, b| {
                let da = (a.body.center_x() - px).powi(2) + (a.body.center_y() - py).powi(2);
                let db = (b.body.center_x() - px).powi(2) + (b.body.center_y() - py).powi(2);
                da.total_cmp(&db)
            });

        let Some(target) = nearest else {
            return;
        };

        let mut dx = target.body.center_x() - px;
        let mut dy = target.body.center_y() - py;
        if dx.abs() < 1.0 && dy.abs() < 1.0 {
            // Degenerate: fire the way the player is facing.
            dx = match self.player.facing {
                Facing::Left => -1.0,
                Facing::Right => 1.0,
            };
            dy = 0.0;
        } else {
            let len = (dx * dx + dy * dy).sqrt();
            dx /= len;
            dy /= len;
        }

        self.effects.push(Effect::new(
            px - self.config.effect_width / 2.0,
            py - self.config.effect_height / 2.0,
            self.config.effect_width,
            self.config.effect_height,
            dx * self.config.effect_speed,
            dy * self.config.effect_speed,
        ));
    }

    fn run_spawners(&mut self, rng: &mut impl Rng) {
        if let Some(spawner) = &mut self.collectible_spawner {
            let live = self
                .collectibles
                .iter()
                .filter(|c| !c.collected && !c.missed)
                .count();
            if spawner.tick(live) {
                let x = rng.gen_range(0.0..self.config.playfield_width - self.config.collectible_width);
                let y = rng.gen_range(-100.0..0.0);
                self.collectibles.push(Collectible::new(
                    x,
                    y,
                    self.config.collectible_width,
                    self.config.collectible_height,
                    self.config.collectible_fall_speed,
                ));
            }
        }

        if let Some(spawner) = &mut self.adversary_spawner {
            let live = self.adversaries.iter().filter(|a| !a.removed).count();
            if spawner.tick(live) {
                let from_left = rng.gen_bool(0.5);
                let (x, dir) = if from_left {
                    (-self.config.adversary_width, 1.0)
                } else {
                    (self.config.playfield_width, -1.0)
                };
                let (band_min, band_max) = self.config.adversary_cross_band;
                let y = rng.gen_range(band_min..band_max);
                self.adversaries.push(Adversary::new(
                    x,
                    y,
                    self.config.adversary_width,
                    self.config.adversary_height,
                    dir,
                ));
            }
        }
    }

    fn advance_adversaries(&mut self, dt: f64) {
        match self.config.adversary_behavior {
            AdversaryBehavior::Patrol { range } => {
                let rest = self.config.rest_y(self.config.adversary_height);
                let trigger = self.config.jump_trigger_distance;
                let impulse = self.config.jump_impulse;
                let obstacles = &self.obstacles;

                for adversary in &mut self.adversaries {
                    if adversary.removed {
                        continue;
                    }
                    // Hop an obstacle that is ahead within the trigger distance.
                    let should_jump = !adversary.airborne
                        && obstacles.iter().any(|o| {
                            adversary.body.x < o.body.x
                                && (o.body.x - adversary.body.x) < trigger
                        });
                    if should_jump {
                        adversary.jump(impulse);
                    }
                    adversary.advance_patrol(
                        dt,
                        self.config.adversary_speed,
                        range,
                        self.config.gravity,
                        rest,
                    );
                }
            }
            AdversaryBehavior::Cross => {
                let collectibles = &self.collectibles;

                for adversary in &mut self.adversaries {
                    if adversary.removed {
                        continue;
                    }
                    let ax = adversary.body.center_x();
                    let target_x = collectibles
                        .iter()
                        .filter(|c| !c.collected && !c.missed)
                        .map(|c| c.body.center_x())
                        .min_by(|a, b| (a - ax).abs().total_cmp(&(b - ax).abs()));
                    adversary.advance_cross(dt, self.config.adversary_speed, target_x);
                    if adversary.left_playfield(self.config.playfield_width, OFFSCREEN_MARGIN) {
                        adversary.removed = true;
                    }
                }
            }
        }
    }

    /// Drop everything marked during the pass. Obstacles are pooled and
    /// never pruned.
    fn prune(&mut self) {
        self.adversaries.retain(|a| !a.removed);
        self.collectibles.retain(|c| !c.collected && !c.missed);

        let width = self.config.playfield_width;
        let height = self.config.playfield_height;
        let lifetime = self.config.effect_lifetime_ticks;
        self.effects.retain(|e| {
            if e.hit {
                !e.expired(lifetime)
            } else {
                !e.body.is_outside(width, height)
            }
        });

        self.helpers.retain(|h| !h.removed);
    }

    fn advance_helpers(&mut self, dt: f64) {
        let adversaries = &self.adversaries;
        let speed = self.config.helper_speed;
        let lifetime = self.config.helper_lifetime_ticks;
        for helper in &mut self.helpers {
            let hx = helper.body.center_x();
            let target_x = adversaries
                .iter()
                .filter(|a| !a.removed)
                .map(|a| a.body.center_x())
                .min_by(|a, b| (a - hx).abs().total_cmp(&(b - hx).abs()));
            helper.advance(dt, speed, target_x);
            if helper.expired(lifetime) {
                helper.removed = true;
            }
        }
        self.helpers.retain(|h| !h.removed);
    }
}
