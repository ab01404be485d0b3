//! Collision resolution for one tick, in a fixed precedence order:
//!
//! 1. player × obstacle (life loss, immediate recycle)
//! 2. player × adversary stomp
//! 3. player × collectible
//! 4. effect × adversary
//! 5. helper × adversary
//! 6. adversary × bowl
//!
//! All outcomes are flag marks plus score/report updates; the session
//! prunes marked entities after this pass.

use crate::engine::entity::{Body, Helper, PlayerForm};
use crate::engine::session::{GameSession, TickReport};

/// A stomp is horizontal overlap while the player's bottom edge sits
/// within `tolerance` below the adversary's top edge. A deeper overlap is
/// not a stomp and (per the rules) has no outcome at all.
pub fn is_stomp(player: &Body, adversary: &Body, tolerance: f64) -> bool {
    let horizontal = player.left() < adversary.right() && player.right() > adversary.left();
    horizontal
        && player.bottom() >= adversary.top()
        && player.bottom() <= adversary.top() + tolerance
}

pub(crate) fn resolve(session: &mut GameSession, report: &mut TickReport) {
    let playfield_width = session.config.playfield_width;
    let stomp_reward = session.config.stomp_reward;
    let collect_reward = session.config.collect_reward;
    let effect_reward = session.config.effect_reward;
    let stomp_tolerance = session.config.stomp_tolerance;
    let helper_width = session.config.helper_width;
    let helper_height = session.config.helper_height;

    // 1. Player vs obstacles. At most one hit per tick; the struck
    //    obstacle recycles immediately so the same pass cannot hit twice.
    for obstacle in &mut session.obstacles {
        if session.player.body.overlaps(&obstacle.body) {
            session.player.lives = session.player.lives.saturating_sub(1);
            obstacle.recycle(playfield_width);
            report.obstacle_hit = true;
            if session.player.lives == 0 {
                report.lives_depleted = true;
            }
            break;
        }
    }

    // 2. Player stomps. The removal mark makes each adversary worth at
    //    most one reward, however long the overlap lasts.
    if session.config.stomp_enabled {
        let mut helper_spawns: Vec<(f64, f64)> = Vec::new();
        for adversary in &mut session.adversaries {
            if adversary.removed {
                continue;
            }
            if is_stomp(&session.player.body, &adversary.body, stomp_tolerance) {
                adversary.removed = true;
                session.score += stomp_reward;
                session.stomps += 1;
                session.player.form = PlayerForm::Transformed;
                report.stomps += 1;
                if session.config.helper_on_stomp {
                    helper_spawns.push((
                        adversary.body.x,
                        adversary.body.bottom() - helper_height,
                    ));
                }
            }
        }
        for (x, y) in helper_spawns {
            session
                .helpers
                .push(Helper::new(x, y, helper_width, helper_height));
        }
    }

    // 3. Player vs collectibles.
    for collectible in &mut session.collectibles {
        if collectible.collected || collectible.missed {
            continue;
        }
        if session.player.body.overlaps(&collectible.body) {
            collectible.collected = true;
            session.score += collect_reward;
            session.banked += 1;
            report.collected += 1;
        }
    }

    // 4. Effects vs adversaries. Each effect resolves one collision, ever;
    //    each pass it touches at most one adversary.
    for effect in &mut session.effects {
        if effect.hit {
            continue;
        }
        for adversary in &mut session.adversaries {
            if adversary.removed {
                continue;
            }
            if effect.body.overlaps(&adversary.body) {
                adversary.strike();
                effect.register_hit();
                session.score += effect_reward;
                report.effect_hits += 1;
                break;
            }
        }
    }

    // 5. Helpers vs adversaries. A connecting helper is spent and chains a
    //    replacement at the kill site.
    if session.config.helper_on_stomp {
        let mut chained: Vec<(f64, f64)> = Vec::new();
        for helper in &mut session.helpers {
            if helper.removed {
                continue;
            }
            for adversary in &mut session.adversaries {
                if adversary.removed {
                    continue;
                }
                if helper.body.overlaps(&adversary.body) {
                    adversary.removed = true;
                    helper.removed = true;
                    session.score += stomp_reward;
                    session.stomps += 1;
                    report.helper_stomps += 1;
                    chained.push((adversary.body.x, adversary.body.bottom() - helper_height));
                    break;
                }
            }
        }
        for (x, y) in chained {
            session
                .helpers
                .push(Helper::new(x, y, helper_width, helper_height));
        }
    }

    // 6. Adversaries raiding the bowl. One theft per adversary, and the
    //    bank can never go below zero.
    if let Some(bowl) = session.config.bowl {
        for adversary in &mut session.adversaries {
            if adversary.removed || adversary.stolen || session.banked == 0 {
                continue;
            }
            if adversary.body.overlaps(&bowl) {
                session.banked -= 1;
                adversary.stolen = true;
                report.stolen += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 10.0;

    fn adversary_box() -> Body {
        Body::new(300.0, 540.0, 30.0, 30.0)
    }

    #[test]
    fn test_stomp_within_tolerance_band() {
        let adv = adversary_box();
        // Player bottom exactly on the adversary's top edge.
        let on_top = Body::new(300.0, 510.0, 30.0, 30.0);
        assert!(is_stomp(&on_top, &adv, TOLERANCE));

        // Bottom at top + tolerance, still in.
        let deepest = Body::new(300.0, 520.0, 30.0, 30.0);
        assert!(is_stomp(&deepest, &adv, TOLERANCE));
    }

    #[test]
    fn test_too_deep_is_not_a_stomp() {
        let adv = adversary_box();
        let embedded = Body::new(300.0, 521.0, 30.0, 30.0);
        assert!(!is_stomp(&embedded, &adv, TOLERANCE));

        let fully_inside = Body::new(300.0, 540.0, 30.0, 30.0);
        assert!(!is_stomp(&fully_inside, &adv, TOLERANCE));
    }

    #[test]
    fn test_above_contact_is_not_a_stomp() {
        let adv = adversary_box();
        let hovering = Body::new(300.0, 505.0, 30.0, 30.0);
        assert!(!is_stomp(&hovering, &adv, TOLERANCE));
    }

    #[test]
    fn test_stomp_requires_horizontal_overlap() {
        let adv = adversary_box();
        let beside = Body::new(340.0, 510.0, 30.0, 30.0);
        assert!(!is_stomp(&beside, &adv, TOLERANCE));

        // Edge-to-edge horizontally does not count.
        let touching = Body::new(330.0, 510.0, 30.0, 30.0);
        assert!(!is_stomp(&touching, &adv, TOLERANCE));
    }

    #[test]
    fn test_partial_horizontal_overlap_stomps() {
        let adv = adversary_box();
        let offset = Body::new(285.0, 512.0, 30.0, 30.0);
        assert!(is_stomp(&offset, &adv, TOLERANCE));
    }
}
