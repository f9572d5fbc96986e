//! Obstacle generation: when to spawn and where to put the gap.

use super::types::Obstacle;
use crate::config::{GameConfig, SpawnPolicy};
use rand::Rng;

/// Decide whether a new obstacle is due this step.
///
/// `frame` is the step counter after it was incremented for this step, so
/// with an interval of 90 the first obstacle appears on step 90.
pub fn should_spawn(config: &GameConfig, frame: u64, newest: Option<&Obstacle>) -> bool {
    match config.spawn {
        SpawnPolicy::Interval { frames } => frames > 0 && frame % frames == 0,
        SpawnPolicy::Distance { threshold } => match newest {
            None => true,
            Some(obstacle) => obstacle.x < config.field_width - threshold,
        },
    }
}

/// Build an obstacle just past the right edge with a random gap position.
///
/// The top segment height is uniform in `[min_segment, H - min_segment - gap]`
/// so neither segment is shorter than `min_segment`.
pub fn new_obstacle<R: Rng>(config: &GameConfig, rng: &mut R) -> Obstacle {
    let min_top = config.min_segment;
    let max_top = (config.field_height - config.min_segment - config.gap).max(min_top);
    let top = rng.gen_range(min_top..=max_top);

    Obstacle {
        x: config.field_width + config.spawn_offset,
        width: config.obstacle_width,
        top,
        gap: config.gap,
        passed: false,
    }
}

/// Append a new obstacle if one is due. Returns true if one was spawned.
pub fn maybe_spawn<R: Rng>(
    obstacles: &mut Vec<Obstacle>,
    config: &GameConfig,
    frame: u64,
    rng: &mut R,
) -> bool {
    if !should_spawn(config, frame, obstacles.last()) {
        return false;
    }
    let obstacle = new_obstacle(config, rng);
    tracing::debug!(frame, x = obstacle.x, top = obstacle.top, "spawned obstacle");
    obstacles.push(obstacle);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn distance_config(threshold: f64) -> GameConfig {
        GameConfig {
            spawn: SpawnPolicy::Distance { threshold },
            ..Default::default()
        }
    }

    /// Run the generator against a scrolling field and collect the gap
    /// between each new obstacle and the one before it.
    fn spawn_spacings(config: &GameConfig, frames: u64) -> Vec<f64> {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut obstacles: Vec<Obstacle> = Vec::new();
        let mut spacings = Vec::new();

        for frame in 1..=frames {
            let previous_x = obstacles.last().map(|o| o.x);
            if maybe_spawn(&mut obstacles, config, frame, &mut rng) {
                if let (Some(prev), Some(new)) = (previous_x, obstacles.last()) {
                    spacings.push(new.x - prev);
                }
            }
            for obstacle in &mut obstacles {
                obstacle.x -= config.scroll_speed;
            }
            obstacles.retain(|o| o.trailing_edge() > -config.prune_margin);
        }
        spacings
    }

    #[test]
    fn test_interval_policy_cadence() {
        let config = GameConfig::default();
        assert!(!should_spawn(&config, 1, None));
        assert!(!should_spawn(&config, 89, None));
        assert!(should_spawn(&config, 90, None));
        assert!(should_spawn(&config, 180, None));
        assert!(!should_spawn(&config, 181, None));
    }

    #[test]
    fn test_distance_policy_spawns_on_empty_field() {
        let config = distance_config(200.0);
        assert!(should_spawn(&config, 1, None));
    }

    #[test]
    fn test_distance_policy_waits_for_newest() {
        let config = distance_config(200.0);
        let mut obstacle = Obstacle {
            x: 290.0,
            width: 60.0,
            top: 100.0,
            gap: 150.0,
            passed: false,
        };
        // 480 - 200 = 280
        assert!(!should_spawn(&config, 1, Some(&obstacle)));
        obstacle.x = 280.0;
        assert!(!should_spawn(&config, 1, Some(&obstacle)));
        obstacle.x = 279.5;
        assert!(should_spawn(&config, 1, Some(&obstacle)));
    }

    #[test]
    fn test_new_obstacle_placement_bounds() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1000 {
            let obstacle = new_obstacle(&config, &mut rng);
            assert_eq!(obstacle.x, 490.0);
            assert_eq!(obstacle.width, 60.0);
            assert_eq!(obstacle.gap, 150.0);
            assert!(!obstacle.passed);
            assert!(obstacle.top >= 60.0);
            assert!(obstacle.bottom_height(config.field_height) >= 60.0 - 1e-9);
            assert!(obstacle.top + obstacle.gap <= config.field_height);
        }
    }

    #[test]
    fn test_new_obstacle_is_deterministic_for_a_seed() {
        let config = GameConfig::default();
        let mut a = ChaCha8Rng::seed_from_u64(3);
        let mut b = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..20 {
            assert_eq!(new_obstacle(&config, &mut a), new_obstacle(&config, &mut b));
        }
    }

    #[test]
    fn test_gap_positions_vary() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let tops: Vec<f64> = (0..20).map(|_| new_obstacle(&config, &mut rng).top).collect();
        assert!(tops.iter().any(|&t| (t - tops[0]).abs() > 1.0));
    }

    #[test]
    fn test_tight_field_pins_gap() {
        let config = GameConfig {
            field_height: 270.0,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let obstacle = new_obstacle(&config, &mut rng);
        assert_eq!(obstacle.top, 60.0);
    }

    #[test]
    fn test_interval_spacing_exceeds_width() {
        let config = GameConfig::default();
        let spacings = spawn_spacings(&config, 2000);
        assert!(spacings.len() > 10);
        for spacing in spacings {
            assert!((spacing - 225.0).abs() < 1e-9);
            assert!(spacing > config.obstacle_width);
        }
    }

    #[test]
    fn test_distance_spacing_exceeds_width() {
        let config = distance_config(200.0);
        let spacings = spawn_spacings(&config, 2000);
        assert!(spacings.len() > 10);
        for spacing in spacings {
            assert!(spacing >= config.spawn_spacing());
            assert!(spacing > config.obstacle_width);
        }
    }

    #[test]
    fn test_maybe_spawn_appends_at_tail() {
        let config = distance_config(200.0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut obstacles = vec![Obstacle {
            x: 10.0,
            width: 60.0,
            top: 100.0,
            gap: 150.0,
            passed: true,
        }];
        assert!(maybe_spawn(&mut obstacles, &config, 1, &mut rng));
        assert_eq!(obstacles.len(), 2);
        assert!(obstacles[0].passed);
        assert_eq!(obstacles[1].x, 490.0);
    }
}
