//! Game logic for Flappy Bird: input handling, the per-step simulation,
//! scoring and the alive/over lifecycle.

use super::collision::{hits_boundary, hits_obstacle};
use super::physics::{apply_flap, integrate};
use super::spawner::maybe_spawn;
use super::types::{Game, RunStatus};
use rand::Rng;

/// Largest frame delta `tick` will simulate. Longer gaps (a suspended
/// terminal, a debugger stop) are cut short instead of fast-forwarded.
pub const MAX_TICK_DT_MS: u64 = 100;

/// What happened during one simulation step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// A queued flap restarted a finished run.
    pub reset: bool,
    /// A queued flap was applied as a jump.
    pub flapped: bool,
    pub spawned: bool,
    /// Obstacles passed this step.
    pub scored: u32,
    /// The player crashed this step.
    pub crashed: bool,
}

impl Game {
    /// Start the run over. The best score survives.
    pub fn reset(&mut self) {
        self.player.x = self.config.player_x;
        self.player.y = self.config.start_y();
        self.player.velocity = 0.0;
        self.obstacles.clear();
        self.score = 0;
        self.frame = 0;
        self.flap_queued = false;
        self.status = RunStatus::Alive;
        tracing::info!(best = self.best, "run reset");
    }

    /// The flap gesture, applied immediately: a jump while alive, a restart
    /// once the run is over. Never both in one call.
    pub fn trigger_flap(&mut self) {
        match self.status {
            RunStatus::Alive => apply_flap(&mut self.player, self.config.jump_velocity),
            RunStatus::Over => self.reset(),
        }
    }

    /// Buffer a flap for the next step. Presses beyond the first within one
    /// frame are absorbed.
    pub fn queue_flap(&mut self) {
        self.flap_queued = true;
    }

    /// Raise the best score to the current score if needed.
    fn record_best(&mut self) {
        self.best = self.best.max(self.score);
    }
}

/// Run one simulation step.
///
/// A queued flap is consumed first. After that, nothing moves unless the
/// run is alive: physics, spawning, per-obstacle scroll/score/collision,
/// pruning, then the ceiling and floor check.
pub fn step<R: Rng>(game: &mut Game, rng: &mut R) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    if game.flap_queued {
        game.flap_queued = false;
        outcome.reset = game.status == RunStatus::Over;
        outcome.flapped = !outcome.reset;
        game.trigger_flap();
    }

    if game.status != RunStatus::Alive {
        return outcome;
    }

    game.frame += 1;

    integrate(&mut game.player, game.config.gravity);

    outcome.spawned = maybe_spawn(&mut game.obstacles, &game.config, game.frame, rng);

    let player = game.player;
    let field_height = game.config.field_height;
    let mut crashed = false;
    for obstacle in &mut game.obstacles {
        obstacle.x -= game.config.scroll_speed;

        // Trailing edge strictly left of the circle's leftmost point
        if !obstacle.passed && obstacle.trailing_edge() < player.leading_edge() {
            obstacle.passed = true;
            outcome.scored += 1;
        }

        if hits_obstacle(&player, obstacle, field_height) {
            crashed = true;
        }
    }

    if outcome.scored > 0 {
        game.score += outcome.scored;
        game.record_best();
        tracing::debug!(score = game.score, best = game.best, "obstacle passed");
    }

    let prune_at = -game.config.prune_margin;
    game.obstacles.retain(|o| o.trailing_edge() > prune_at);

    if hits_boundary(&player, field_height) {
        crashed = true;
    }

    if crashed {
        game.status = RunStatus::Over;
        outcome.crashed = true;
        tracing::info!(
            score = game.score,
            best = game.best,
            frame = game.frame,
            "run over"
        );
    }

    outcome
}

/// Advance the game by wall-clock time. Called from the frame loop.
///
/// `dt_ms` is milliseconds since the last call. Internally runs one `step`
/// per `frame_ms` (16ms by default). Returns true if any step ran.
pub fn tick<R: Rng>(game: &mut Game, dt_ms: u64, rng: &mut R) -> bool {
    let frame_ms = game.config.frame_ms.max(1);
    let dt_ms = dt_ms.min(MAX_TICK_DT_MS);

    game.accumulated_time_ms += dt_ms;
    let mut stepped = false;

    while game.accumulated_time_ms >= frame_ms {
        game.accumulated_time_ms -= frame_ms;
        let outcome = step(game, rng);
        stepped = true;

        if outcome.crashed {
            // Leftover time is dropped so a restart begins on a fresh frame
            game.accumulated_time_ms = 0;
            break;
        }
    }

    stepped
}
