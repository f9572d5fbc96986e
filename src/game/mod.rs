//! Flappy Bird simulation core.
//!
//! A circle falls under gravity and must pass through gaps in scrolling
//! obstacles. Each step integrates physics, spawns and scrolls obstacles,
//! awards points and checks for crashes. Rendering and input live outside
//! this module and only see `&Game` or call `Game::queue_flap`.

pub mod collision;
pub mod logic;
pub mod physics;
pub mod spawner;
pub mod types;

pub use logic::*;
pub use types::*;
