//! Flappy - a terminal Flappy Bird.
//!
//! This crate exposes the simulation core for testing and for other
//! front ends; the `flappy` binary adds the terminal renderer.

pub mod build_info;
pub mod config;
pub mod error;
pub mod game;
pub mod input;

pub use config::{GameConfig, SpawnPolicy};
pub use error::ConfigError;
pub use game::{Game, RunStatus};
