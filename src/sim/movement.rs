//! Player kinematics
//!
//! One integration per frame. All constants are per-frame quantities, so the
//! step does not scale with the frame delta.

use super::state::{InputVector, Player};
use crate::GameConfig;

/// Advance the player by one frame.
///
/// Order matters: the grounded check (or gravity) runs first, then a pending
/// jump, then integration. Horizontal moves that would leave the arena are
/// rejected per axis rather than clamped to the wall.
pub fn step(player: &Player, input: InputVector, jump: bool, cfg: &GameConfig) -> Player {
    let mut next = *player;

    // Instant response, no inertia
    next.vel.x = input.x * cfg.move_speed;
    next.vel.z = input.z * cfg.move_speed;

    if next.pos.y > cfg.ground_level {
        next.vel.y -= cfg.gravity;
    } else {
        // Landed (or never left)
        next.pos.y = cfg.ground_level;
        next.vel.y = 0.0;
        next.is_jumping = false;
    }

    if jump && !next.is_jumping {
        next.vel.y = cfg.jump_velocity;
        next.is_jumping = true;
    }

    let new_x = next.pos.x + next.vel.x;
    let new_z = next.pos.z + next.vel.z;
    if new_x.abs() < cfg.arena_half_width {
        next.pos.x = new_x;
    }
    if new_z.abs() < cfg.arena_half_width {
        next.pos.z = new_z;
    }
    next.pos.y += next.vel.y;

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cfg() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn test_velocity_follows_input_instantly() {
        let p = Player::at_origin(0.5);
        let next = step(&p, InputVector { x: 1.0, z: -0.5 }, false, &cfg());
        assert!((next.vel.x - 0.1).abs() < 1e-6);
        assert!((next.vel.z + 0.05).abs() < 1e-6);
        assert!((next.pos.x - 0.1).abs() < 1e-6);

        let stopped = step(&next, InputVector::ZERO, false, &cfg());
        assert_eq!(stopped.vel.x, 0.0);
        assert_eq!(stopped.pos.x, next.pos.x);
    }

    #[test]
    fn test_wall_rejects_instead_of_clamping() {
        let mut p = Player::at_origin(0.5);
        p.pos.x = 13.95;
        let next = step(&p, InputVector { x: 1.0, z: 1.0 }, false, &cfg());
        // 13.95 + 0.1 would cross 14, so x stays put while z moves
        assert_eq!(next.pos.x, 13.95);
        assert!((next.pos.z - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_jump_arc_and_landing() {
        let cfg = cfg();
        let mut p = step(&Player::at_origin(0.5), InputVector::ZERO, true, &cfg);
        assert!(p.is_jumping);
        assert!((p.vel.y - 0.3).abs() < 1e-6);
        assert!(p.pos.y > 0.5);

        let mut last_vy = p.vel.y;
        let mut frames = 0;
        while p.is_jumping {
            p = step(&p, InputVector::ZERO, false, &cfg);
            if p.is_jumping {
                assert!(p.vel.y < last_vy);
                last_vy = p.vel.y;
            }
            frames += 1;
            assert!(frames < 200, "never landed");
        }
        assert_eq!(p.vel.y, 0.0);
        assert_eq!(p.pos.y, 0.5);
    }

    #[test]
    fn test_jump_ignored_mid_air() {
        let cfg = cfg();
        let p = step(&Player::at_origin(0.5), InputVector::ZERO, true, &cfg);
        let p2 = step(&p, InputVector::ZERO, true, &cfg);
        assert!((p2.vel.y - (0.3 - 0.015)).abs() < 1e-6);
    }

    #[test]
    fn test_glide_stops_short_of_wall() {
        let cfg = cfg();
        let mut p = Player::at_origin(0.5);
        for _ in 0..500 {
            p = step(&p, InputVector { x: 1.0, z: 0.0 }, false, &cfg);
        }
        assert!(p.pos.x < 14.0);
        assert!(p.pos.x > 13.8);
    }

    proptest! {
        #[test]
        fn prop_player_stays_inside_arena(
            moves in prop::collection::vec((-1.0f32..=1.0, -1.0f32..=1.0, any::<bool>()), 1..400)
        ) {
            let cfg = cfg();
            let mut p = Player::at_origin(cfg.ground_level);
            for (x, z, jump) in moves {
                p = step(&p, InputVector { x, z }, jump, &cfg);
                prop_assert!(p.pos.x.abs() < cfg.arena_half_width);
                prop_assert!(p.pos.z.abs() < cfg.arena_half_width);
            }
        }
    }
}
