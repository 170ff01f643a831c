//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::Vec2;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the world, in pixels.
pub const WORLD_SIZE: Vec2 = Vec2::new(800.0, 600.0);

/// Motion and population tuning.
pub mod mechanics {
    use std::ops::Range;

    /// Horizontal player speed while a movement key is held, in pixels per tick.
    pub const PLAYER_SPEED: f32 = 8.0;
    /// Gap between the bottom of the player's box and the bottom of the world.
    pub const PLAYER_BOTTOM_INSET: f32 = 10.0;
    /// Upward projectile speed, in pixels per tick.
    pub const PROJECTILE_SPEED: f32 = 10.0;
    /// Integer range a hostile's downward speed is drawn from, in pixels per tick.
    pub const HOSTILE_SPEED_RANGE: Range<i32> = 1..4;
    /// Integer range of the off-screen vertical band hostiles enter from.
    pub const HOSTILE_SPAWN_BAND: Range<i32> = -100..-40;
    /// How far a hostile's box top may pass the bottom edge before it is recycled.
    pub const HOSTILE_BOTTOM_MARGIN: f32 = 10.0;
    /// Number of hostiles kept alive while a session is playing.
    pub const HOSTILE_POPULATION: usize = 8;
}

/// Bounding box extents, per entity kind.
pub mod collider {
    use glam::Vec2;

    pub const PLAYER_SIZE: Vec2 = Vec2::new(50.0, 50.0);
    pub const HOSTILE_SIZE: Vec2 = Vec2::new(50.0, 50.0);
    pub const PROJECTILE_SIZE: Vec2 = Vec2::new(5.0, 15.0);
}

pub mod scoring {
    /// Points awarded for each hostile destroyed by a projectile.
    pub const HOSTILE_DOWN: u32 = 10;
}

pub mod ui {
    use sdl2::pixels::Color;

    pub const WINDOW_TITLE: &str = "Starblast";

    pub const BACKGROUND: Color = Color::RGB(0, 0, 0);
    pub const PLAYER: Color = Color::RGB(0, 255, 0);
    pub const HOSTILE: Color = Color::RGB(255, 0, 0);
    pub const PROJECTILE: Color = Color::RGB(0, 0, 255);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        // 60 FPS = 16.67ms per frame
        let expected_nanos = (1_000_000_000.0 / 60.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_world_size() {
        assert_eq!(WORLD_SIZE.x, 800.0);
        assert_eq!(WORLD_SIZE.y, 600.0);
    }

    #[test]
    fn test_player_fits_inside_world() {
        assert!(collider::PLAYER_SIZE.x < WORLD_SIZE.x);
        assert!(collider::PLAYER_SIZE.y + mechanics::PLAYER_BOTTOM_INSET < WORLD_SIZE.y);
    }

    #[test]
    fn test_player_starts_centered() {
        let start_x = (WORLD_SIZE.x - collider::PLAYER_SIZE.x) / 2.0;
        assert_eq!(start_x, 375.0);
    }

    #[test]
    fn test_hostile_speed_range_is_positive() {
        assert!(mechanics::HOSTILE_SPEED_RANGE.start >= 1);
        assert!(mechanics::HOSTILE_SPEED_RANGE.end > mechanics::HOSTILE_SPEED_RANGE.start);
    }

    #[test]
    fn test_hostile_spawn_band_is_above_world() {
        assert!(mechanics::HOSTILE_SPAWN_BAND.start < mechanics::HOSTILE_SPAWN_BAND.end);
        // The whole band sits above y = 0 with room for the hostile's box.
        assert!((mechanics::HOSTILE_SPAWN_BAND.end as f32) <= 0.0);
        assert!((mechanics::HOSTILE_SPAWN_BAND.start as f32) >= -WORLD_SIZE.y);
    }

    #[test]
    fn test_population_target() {
        assert_eq!(mechanics::HOSTILE_POPULATION, 8);
    }

    #[test]
    fn test_projectile_is_narrower_than_player() {
        assert!(collider::PROJECTILE_SIZE.x < collider::PLAYER_SIZE.x);
    }
}
