//! Flappy Bird data structures.

use crate::config::GameConfig;

/// Lifecycle state of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Alive,
    /// Crashed. Only a flap (which resets the run) leaves this state.
    Over,
}

/// Axis-aligned rectangle in world units, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// The player-controlled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Fixed horizontal position of the centre.
    pub x: f64,
    /// Vertical position of the centre. 0 = ceiling.
    pub y: f64,
    pub radius: f64,
    /// Vertical velocity in units/step (positive = downward).
    pub velocity: f64,
}

impl Player {
    /// Leftmost point of the circle, used for scoring.
    pub fn leading_edge(&self) -> f64 {
        self.x - self.radius
    }
}

/// A scrolling pair of top and bottom segments with a gap between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge. Decreases every step.
    pub x: f64,
    pub width: f64,
    /// Height of the top segment.
    pub top: f64,
    /// Height of the opening below the top segment.
    pub gap: f64,
    /// Set once the player has cleared this obstacle.
    pub passed: bool,
}

impl Obstacle {
    pub fn trailing_edge(&self) -> f64 {
        self.x + self.width
    }

    /// Height of the bottom segment for a field of the given height.
    pub fn bottom_height(&self, field_height: f64) -> f64 {
        (field_height - self.top - self.gap).max(0.0)
    }

    pub fn top_rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: 0.0,
            width: self.width,
            height: self.top,
        }
    }

    pub fn bottom_rect(&self, field_height: f64) -> Rect {
        Rect {
            x: self.x,
            y: self.top + self.gap,
            width: self.width,
            height: self.bottom_height(field_height),
        }
    }
}

/// Main game state. Owned by the frame loop and passed by `&mut` into
/// every step; renderers only borrow it.
#[derive(Debug, Clone)]
pub struct Game {
    pub config: GameConfig,
    pub player: Player,
    /// Active obstacles, oldest first.
    pub obstacles: Vec<Obstacle>,
    pub status: RunStatus,

    // Scoring
    /// Obstacles passed in the current run.
    pub score: u32,
    /// Highest score of any run since the process started.
    pub best: u32,

    // Timing
    /// Simulation steps taken in the current run.
    pub frame: u64,
    /// Sub-step time accumulator (milliseconds).
    pub accumulated_time_ms: u64,

    // Input buffer
    /// Flap waiting to be consumed at the start of the next step. At most
    /// one is held; extra presses within a frame are dropped.
    pub flap_queued: bool,
}

impl Game {
    /// Create a new run. The config is assumed to be validated.
    pub fn new(config: GameConfig) -> Self {
        let player = Player {
            x: config.player_x,
            y: config.start_y(),
            radius: config.player_radius,
            velocity: 0.0,
        };
        Self {
            config,
            player,
            obstacles: Vec::new(),
            status: RunStatus::Alive,
            score: 0,
            best: 0,
            frame: 0,
            accumulated_time_ms: 0,
            flap_queued: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.status == RunStatus::Alive
    }
}
