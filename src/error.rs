//! Centralized error types for the game.
//!
//! This module defines all error types used throughout the application,
//! providing a consistent error handling approach.

use bevy_ecs::event::Event;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
/// It is also registered as an ECS event so systems can report problems
/// without unwinding mid-tick.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
