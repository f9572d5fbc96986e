//! Vertical motion of the player.

use super::types::Player;

/// Advance the player one step: gravity changes velocity first, then the
/// new velocity moves the player.
pub fn integrate(player: &mut Player, gravity: f64) {
    player.velocity += gravity;
    player.y += player.velocity;
}

/// Flap impulse. Sets velocity directly (not additive), so a flap during a
/// fast fall is as strong as one from rest. Position is left alone.
pub fn apply_flap(player: &mut Player, jump_velocity: f64) {
    player.velocity = jump_velocity;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(y: f64, velocity: f64) -> Player {
        Player {
            x: 90.0,
            y,
            radius: 14.0,
            velocity,
        }
    }

    #[test]
    fn test_velocity_updates_before_position() {
        let mut player = player_at(320.0, 0.0);
        integrate(&mut player, 0.5);
        assert_eq!(player.velocity, 0.5);
        assert_eq!(player.y, 320.5);

        integrate(&mut player, 0.5);
        assert_eq!(player.velocity, 1.0);
        assert_eq!(player.y, 321.5);
    }

    #[test]
    fn test_gravity_slows_a_rising_player() {
        let mut player = player_at(300.0, -8.0);
        integrate(&mut player, 0.5);
        assert_eq!(player.velocity, -7.5);
        assert_eq!(player.y, 292.5);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut player = player_at(200.0, 12.0);
        apply_flap(&mut player, -8.0);
        assert_eq!(player.velocity, -8.0);
        assert_eq!(player.y, 200.0);

        // Flapping again while rising does not stack
        apply_flap(&mut player, -8.0);
        assert_eq!(player.velocity, -8.0);
    }

    #[test]
    fn test_x_never_changes() {
        let mut player = player_at(320.0, 0.0);
        for _ in 0..10 {
            integrate(&mut player, 0.5);
        }
        apply_flap(&mut player, -8.0);
        assert_eq!(player.x, 90.0);
    }
}
