//! Simulation entities: axis-aligned bodies, the player, and the dynamic
//! entity kinds (obstacles, adversaries, collectibles, effects, helpers).
//!
//! Coordinates follow the screen convention: y grows downward and `(x, y)`
//! is the top-left corner of an entity's bounding box. "Ground" is a y
//! coordinate that an entity's bottom edge rests on; gravity-bound entities
//! are clamped back to it when integration overshoots.

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box. Doubles as the physical extent of every
/// entity, so collision queries are just `Body` against `Body`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Body {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Standard AABB overlap test. Strict on all four edges, so boxes that
    /// merely share an edge do not count as overlapping.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True once the box lies entirely outside a `width` x `height`
    /// playfield (used to despawn leavers, not to clamp).
    pub fn is_outside(&self, width: f64, height: f64) -> bool {
        self.right() < 0.0 || self.left() > width || self.bottom() < 0.0 || self.top() > height
    }
}

/// Which way the player last moved. Presentation reads it for sprite
/// mirroring; effect firing uses it as a fallback direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

/// Visual/behavioral form of the player. Switches to `Transformed` on the
/// first successful stomp and stays there until the session resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerForm {
    Normal,
    Transformed,
}

/// The player. Created once per session, reset wholesale, never destroyed.
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub vy: f64,
    pub airborne: bool,
    pub lives: u32,
    pub facing: Facing,
    pub form: PlayerForm,
}

impl Player {
    pub fn new(x: f64, rest_y: f64, width: f64, height: f64, lives: u32) -> Self {
        Self {
            body: Body::new(x, rest_y, width, height),
            vy: 0.0,
            airborne: false,
            lives,
            facing: Facing::Right,
            form: PlayerForm::Normal,
        }
    }

    /// Launch upward. A no-op while airborne: there is no double jump.
    pub fn jump(&mut self, impulse: f64) {
        if !self.airborne {
            self.vy = impulse;
            self.airborne = true;
        }
    }

    /// Gravity integration plus ground clamp. The clamp test is strictly
    /// greater-than, so an entity resting exactly on the ground is left
    /// untouched and repeated calls are idempotent at rest.
    pub fn advance(&mut self, dt: f64, gravity: f64, ground_y: f64) {
        self.vy += gravity * dt;
        self.body.y += self.vy * dt;
        if self.body.y > ground_y {
            self.body.y = ground_y;
            self.vy = 0.0;
            self.airborne = false;
        }
    }
}

/// A pooled, recycling obstacle. Scrolls left only; never destroyed.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub body: Body,
}

impl Obstacle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            body: Body::new(x, y, width, height),
        }
    }

    /// Horizontal-only motion: obstacles are not gravity-bound.
    pub fn advance(&mut self, dt: f64, speed: f64) {
        self.body.x -= speed * dt;
    }

    /// Fully past the left boundary, ready to recycle.
    pub fn past_left_edge(&self) -> bool {
        self.body.x < -self.body.width
    }

    /// Teleport back off the right edge. The caller scores the recycle.
    pub fn recycle(&mut self, playfield_width: f64) {
        self.body.x = playfield_width;
    }
}

/// An adversary. Movement is chosen per session: ground patrollers
/// oscillate around their seed position (and hop obstacles), crossers
/// traverse the playfield steering toward collectibles.
#[derive(Debug, Clone)]
pub struct Adversary {
    pub body: Body,
    pub vy: f64,
    pub airborne: bool,
    /// Horizontal direction, +1.0 right / -1.0 left.
    pub dir: f64,
    /// Patrol anchor: the x this adversary oscillates around.
    pub seed_x: f64,
    /// Set when struck by an effect; crossers retreat the way they came.
    pub struck: bool,
    /// A crosser raids the bowl at most once.
    pub stolen: bool,
    /// Mark for end-of-tick pruning (stomped, or left the playfield).
    pub removed: bool,
}

impl Adversary {
    pub fn new(x: f64, y: f64, width: f64, height: f64, dir: f64) -> Self {
        Self {
            body: Body::new(x, y, width, height),
            vy: 0.0,
            airborne: false,
            dir,
            seed_x: x,
            struck: false,
            stolen: false,
            removed: false,
        }
    }

    /// Same guard as the player: grounded hops only.
    pub fn jump(&mut self, impulse: f64) {
        if !self.airborne {
            self.vy = impulse;
            self.airborne = true;
        }
    }

    /// Oscillate around `seed_x`, gravity-bound.
    pub fn advance_patrol(
        &mut self,
        dt: f64,
        speed: f64,
        range: f64,
        gravity: f64,
        ground_y: f64,
    ) {
        self.body.x += self.dir * speed * dt;
        if self.body.x > self.seed_x + range {
            self.dir = -1.0;
        } else if self.body.x < self.seed_x - range {
            self.dir = 1.0;
        }

        self.vy += gravity * dt;
        self.body.y += self.vy * dt;
        if self.body.y > ground_y {
            self.body.y = ground_y;
            self.vy = 0.0;
            self.airborne = false;
        }
    }

    /// Traverse horizontally. Steers toward `target_x` when given one,
    /// unless already retreating from an effect hit.
    pub fn advance_cross(&mut self, dt: f64, speed: f64, target_x: Option<f64>) {
        if !self.struck {
            if let Some(tx) = target_x {
                self.dir = if tx < self.body.center_x() { -1.0 } else { 1.0 };
            }
        }
        self.body.x += self.dir * speed * dt;
    }

    /// React to an effect hit: reverse and flee. Only the first strike has
    /// an effect; the flag also guards double-scoring by the resolver.
    pub fn strike(&mut self) {
        if !self.struck {
            self.struck = true;
            self.dir = -self.dir;
        }
    }

    /// A crosser is gone once fully past the boundary it is heading toward.
    pub fn left_playfield(&self, playfield_width: f64, margin: f64) -> bool {
        (self.dir < 0.0 && self.body.right() < -margin)
            || (self.dir > 0.0 && self.body.left() > playfield_width + margin)
    }
}

/// A falling collectible. Removed when caught or when it drops below the
/// playfield.
#[derive(Debug, Clone)]
pub struct Collectible {
    pub body: Body,
    pub fall_speed: f64,
    pub collected: bool,
    pub missed: bool,
}

impl Collectible {
    pub fn new(x: f64, y: f64, width: f64, height: f64, fall_speed: f64) -> Self {
        Self {
            body: Body::new(x, y, width, height),
            fall_speed,
            collected: false,
            missed: false,
        }
    }

    pub fn advance(&mut self, dt: f64, playfield_height: f64) {
        self.body.y += self.fall_speed * dt;
        if self.body.top() > playfield_height {
            self.missed = true;
        }
    }
}

/// An ephemeral projectile effect. Flies in a straight line until its
/// first hit, then freezes in place and expires after a fixed lifetime.
#[derive(Debug, Clone)]
pub struct Effect {
    pub body: Body,
    /// Velocity components, already scaled by effect speed.
    pub dx: f64,
    pub dy: f64,
    /// Set on first collision; the instance never resolves a second one.
    pub hit: bool,
    /// Ticks since the hit (the expiry timer restarts when the hit lands).
    pub age: f64,
}

impl Effect {
    pub fn new(x: f64, y: f64, width: f64, height: f64, dx: f64, dy: f64) -> Self {
        Self {
            body: Body::new(x, y, width, height),
            dx,
            dy,
            hit: false,
            age: 0.0,
        }
    }

    /// Move while live; once hit, hold position and age toward expiry.
    pub fn advance(&mut self, dt: f64) {
        if self.hit {
            self.age += dt;
        } else {
            self.body.x += self.dx * dt;
            self.body.y += self.dy * dt;
        }
    }

    /// Record the one collision this effect is allowed, restarting its
    /// expiry timer.
    pub fn register_hit(&mut self) {
        self.hit = true;
        self.age = 0.0;
    }

    pub fn expired(&self, lifetime_ticks: f64) -> bool {
        self.hit && self.age >= lifetime_ticks
    }
}

/// An autonomous ally spawned by a stomp. Chases the nearest live
/// adversary horizontally; expires after a fixed lifetime whether or not
/// it ever connects.
#[derive(Debug, Clone)]
pub struct Helper {
    pub body: Body,
    pub age: f64,
    pub removed: bool,
}

impl Helper {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            body: Body::new(x, y, width, height),
            age: 0.0,
            removed: false,
        }
    }

    pub fn advance(&mut self, dt: f64, speed: f64, target_x: Option<f64>) {
        self.age += dt;
        if let Some(tx) = target_x {
            let dx = tx - self.body.center_x();
            if dx.abs() > speed * dt {
                self.body.x += speed * dt * dx.signum();
            } else {
                self.body.x += dx;
            }
        }
    }

    pub fn expired(&self, lifetime_ticks: f64) -> bool {
        self.age >= lifetime_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUND_Y: f64 = 540.0;
    const GRAVITY: f64 = 0.8;
    const JUMP_IMPULSE: f64 = -15.0;

    fn grounded_player() -> Player {
        Player::new(100.0, GROUND_Y, 30.0, 30.0, 3)
    }

    // ── Body / AABB ──

    #[test]
    fn test_body_edges() {
        let b = Body::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.left(), 10.0);
        assert_eq!(b.right(), 40.0);
        assert_eq!(b.top(), 20.0);
        assert_eq!(b.bottom(), 60.0);
        assert_eq!(b.center_x(), 25.0);
        assert_eq!(b.center_y(), 40.0);
    }

    #[test]
    fn test_overlap_basic() {
        let a = Body::new(0.0, 0.0, 10.0, 10.0);
        let b = Body::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_edge_touch_is_not_overlap() {
        let a = Body::new(0.0, 0.0, 10.0, 10.0);
        let right_of = Body::new(10.0, 0.0, 10.0, 10.0);
        let below = Body::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right_of));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_overlap_disjoint() {
        let a = Body::new(0.0, 0.0, 10.0, 10.0);
        let b = Body::new(50.0, 50.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_is_outside() {
        let inside = Body::new(100.0, 100.0, 10.0, 10.0);
        assert!(!inside.is_outside(800.0, 600.0));

        let past_left = Body::new(-20.0, 100.0, 10.0, 10.0);
        assert!(past_left.is_outside(800.0, 600.0));

        let below = Body::new(100.0, 610.0, 10.0, 10.0);
        assert!(below.is_outside(800.0, 600.0));

        // Straddling an edge is still inside.
        let straddling = Body::new(-5.0, 100.0, 10.0, 10.0);
        assert!(!straddling.is_outside(800.0, 600.0));
    }

    // ── Player physics ──

    #[test]
    fn test_ground_clamp_idempotent_at_rest() {
        let mut p = grounded_player();
        for _ in 0..10 {
            p.advance(1.0, GRAVITY, GROUND_Y);
            assert_eq!(p.body.y, GROUND_Y, "resting player must not sink or float");
            assert_eq!(p.vy, 0.0, "resting player must keep zero velocity");
            assert!(!p.airborne);
        }
    }

    #[test]
    fn test_ground_clamp_strict_at_exact_ground() {
        // Exactly at ground with downward velocity: one advance overshoots
        // and the clamp fires, landing the player.
        let mut p = grounded_player();
        p.vy = 5.0;
        p.airborne = true;
        p.advance(1.0, GRAVITY, GROUND_Y);
        assert_eq!(p.body.y, GROUND_Y);
        assert_eq!(p.vy, 0.0);
        assert!(!p.airborne);
    }

    #[test]
    fn test_jump_sets_impulse_and_airborne() {
        let mut p = grounded_player();
        p.jump(JUMP_IMPULSE);
        assert_eq!(p.vy, JUMP_IMPULSE);
        assert!(p.airborne);
    }

    #[test]
    fn test_no_double_jump() {
        let mut p = grounded_player();
        p.jump(JUMP_IMPULSE);
        p.advance(1.0, GRAVITY, GROUND_Y);
        let vy_single = p.vy;

        // Second jump without landing is a no-op.
        p.jump(JUMP_IMPULSE);
        assert_eq!(p.vy, vy_single);
        assert!(p.airborne);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut p = grounded_player();
        p.jump(JUMP_IMPULSE);

        let mut peak = p.body.y;
        for _ in 0..200 {
            p.advance(1.0, GRAVITY, GROUND_Y);
            peak = peak.min(p.body.y);
            if !p.airborne {
                break;
            }
        }

        assert!(peak < GROUND_Y, "player should have risen");
        assert!(!p.airborne, "player should have landed");
        assert_eq!(p.body.y, GROUND_Y);
        assert_eq!(p.vy, 0.0);
    }

    #[test]
    fn test_can_jump_again_after_landing() {
        let mut p = grounded_player();
        p.jump(JUMP_IMPULSE);
        while p.airborne {
            p.advance(1.0, GRAVITY, GROUND_Y);
        }
        p.jump(JUMP_IMPULSE);
        assert_eq!(p.vy, JUMP_IMPULSE);
    }

    // ── Obstacle ──

    #[test]
    fn test_obstacle_scrolls_left() {
        let mut o = Obstacle::new(500.0, 520.0, 50.0, 45.0);
        o.advance(1.0, 5.0);
        assert_eq!(o.body.x, 495.0);
        assert_eq!(o.body.y, 520.0, "obstacles never move vertically");
    }

    #[test]
    fn test_obstacle_recycle_boundary() {
        let mut o = Obstacle::new(-49.9, 520.0, 50.0, 45.0);
        assert!(!o.past_left_edge(), "still partially visible");
        o.body.x = -50.1;
        assert!(o.past_left_edge());
        o.recycle(1200.0);
        assert_eq!(o.body.x, 1200.0);
    }

    // ── Adversary ──

    #[test]
    fn test_patrol_reverses_at_range_bounds() {
        let mut a = Adversary::new(300.0, GROUND_Y, 30.0, 30.0, 1.0);
        // Walk right until the range bound flips direction.
        for _ in 0..60 {
            a.advance_patrol(1.0, 3.0, 100.0, GRAVITY, GROUND_Y);
        }
        assert_eq!(a.dir, -1.0, "should have turned around at +range");
        assert!(a.body.x <= 300.0 + 100.0 + 3.0);
    }

    #[test]
    fn test_patrol_is_gravity_bound() {
        let mut a = Adversary::new(300.0, 400.0, 30.0, 30.0, 1.0);
        a.airborne = true;
        for _ in 0..100 {
            a.advance_patrol(1.0, 3.0, 100.0, GRAVITY, GROUND_Y);
        }
        assert_eq!(a.body.y, GROUND_Y);
        assert!(!a.airborne);
    }

    #[test]
    fn test_adversary_no_double_jump() {
        let mut a = Adversary::new(300.0, GROUND_Y, 30.0, 30.0, 1.0);
        a.jump(JUMP_IMPULSE);
        let vy = a.vy;
        a.jump(JUMP_IMPULSE);
        assert_eq!(a.vy, vy);
    }

    #[test]
    fn test_cross_steers_toward_target() {
        let mut a = Adversary::new(700.0, 500.0, 60.0, 60.0, 1.0);
        a.advance_cross(1.0, 3.0, Some(100.0));
        assert_eq!(a.dir, -1.0);
        assert_eq!(a.body.x, 697.0);
    }

    #[test]
    fn test_strike_reverses_once() {
        let mut a = Adversary::new(100.0, 500.0, 60.0, 60.0, 1.0);
        a.strike();
        assert!(a.struck);
        assert_eq!(a.dir, -1.0);
        // Second strike has no further effect.
        a.strike();
        assert_eq!(a.dir, -1.0);
    }

    #[test]
    fn test_struck_crosser_ignores_steering() {
        let mut a = Adversary::new(100.0, 500.0, 60.0, 60.0, 1.0);
        a.strike();
        a.advance_cross(1.0, 3.0, Some(700.0));
        assert_eq!(a.dir, -1.0, "retreating adversary must not turn back");
    }

    #[test]
    fn test_left_playfield_respects_heading() {
        // Entering from the left: off the left edge but heading right, not gone.
        let entering = Adversary::new(-60.0, 500.0, 60.0, 60.0, 1.0);
        assert!(!entering.left_playfield(800.0, 60.0));

        let mut leaving = Adversary::new(-130.0, 500.0, 60.0, 60.0, -1.0);
        assert!(leaving.left_playfield(800.0, 60.0));
        leaving.dir = 1.0;
        leaving.body.x = 900.0;
        assert!(leaving.left_playfield(800.0, 60.0));
    }

    // ── Collectible ──

    #[test]
    fn test_collectible_falls_and_misses() {
        let mut c = Collectible::new(100.0, 590.0, 40.0, 20.0, 2.0);
        c.advance(1.0, 600.0);
        assert_eq!(c.body.y, 592.0);
        assert!(!c.missed);

        for _ in 0..10 {
            c.advance(1.0, 600.0);
        }
        assert!(c.missed, "collectible below the playfield is missed");
    }

    // ── Effect ──

    #[test]
    fn test_effect_moves_until_hit() {
        let mut e = Effect::new(100.0, 100.0, 50.0, 12.0, 5.0, 0.0);
        e.advance(1.0);
        assert_eq!(e.body.x, 105.0);

        e.register_hit();
        let frozen_x = e.body.x;
        e.advance(1.0);
        assert_eq!(e.body.x, frozen_x, "hit effect must freeze in place");
        assert_eq!(e.age, 1.0);
    }

    #[test]
    fn test_effect_expiry_timer_restarts_on_hit() {
        let mut e = Effect::new(0.0, 0.0, 50.0, 12.0, 5.0, 0.0);
        assert!(!e.expired(31.0), "unhit effect never expires by timer");

        e.register_hit();
        for _ in 0..30 {
            e.advance(1.0);
        }
        assert!(!e.expired(31.0));
        e.advance(1.0);
        assert!(e.expired(31.0));
    }

    // ── Helper ──

    #[test]
    fn test_helper_seeks_target() {
        let mut h = Helper::new(100.0, 540.0, 20.0, 20.0);
        h.advance(1.0, 4.0, Some(300.0));
        assert_eq!(h.body.x, 104.0);
        h.advance(1.0, 4.0, Some(0.0));
        assert_eq!(h.body.x, 100.0);
    }

    #[test]
    fn test_helper_snaps_when_close() {
        let mut h = Helper::new(100.0, 540.0, 20.0, 20.0);
        // Target 2 units away from center: moves exactly there, no overshoot jitter.
        let target = h.body.center_x() + 2.0;
        h.advance(1.0, 4.0, Some(target));
        assert_eq!(h.body.center_x(), target);
    }

    #[test]
    fn test_helper_expires_without_target() {
        let mut h = Helper::new(100.0, 540.0, 20.0, 20.0);
        for _ in 0..300 {
            h.advance(1.0, 4.0, None);
        }
        assert!(h.expired(300.0));
    }
}
