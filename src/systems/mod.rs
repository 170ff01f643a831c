//! The systems and components driving each tick of the simulation.

pub mod collision;
pub mod components;
pub mod control;
pub mod hostile;
pub mod input;
pub mod player;
pub mod projectile;
pub mod render;
pub mod score;
pub mod spawn;
pub mod stage;

pub use self::collision::{aabb_overlap, collision_system};
pub use self::components::*;
pub use self::control::{control_system, error_drain_system};
pub use self::hostile::hostile_movement_system;
pub use self::input::{command_for_key, direction_for_key, input_system, HeldKeys};
pub use self::player::{fire_system, player_movement_system};
pub use self::projectile::projectile_movement_system;
pub use self::render::{draw_system, snapshot_system, EntityView, FrameSnapshot};
pub use self::score::score_system;
pub use self::spawn::{hostile_bundle, player_bundle, populate_session, projectile_bundle, respawn_system, HostileParams};
pub use self::stage::{stage_system, GameStage};
