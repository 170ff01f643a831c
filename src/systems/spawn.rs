//! Entity construction and the hostile population controller.

use bevy_ecs::event::EventReader;
use bevy_ecs::system::{Commands, ResMut};
use bevy_ecs::world::World;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::Rng;
use tracing::{debug, info};

use crate::constants::{collider, mechanics, WORLD_SIZE};
use crate::events::HostileDown;
use crate::systems::components::{
    Collider, EntityType, HostileBundle, HostileCollider, PlayerBundle, PlayerCollider, PlayerControlled, Position,
    ProjectileBundle, ProjectileCollider, SessionRng, Velocity,
};

/// Randomized parameters shared by fresh spawns and recycled hostiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostileParams {
    pub position: Vec2,
    pub speed: f32,
}

impl HostileParams {
    /// Draws a spawn position in the off-screen band and an integer fall
    /// speed. Every randomized hostile goes through here, so spawning and
    /// recycling cannot drift apart.
    pub fn random(rng: &mut SmallRng) -> Self {
        let max_x = (WORLD_SIZE.x - collider::HOSTILE_SIZE.x) as i32;
        Self {
            position: Vec2::new(
                rng.random_range(0..max_x) as f32,
                rng.random_range(mechanics::HOSTILE_SPAWN_BAND) as f32,
            ),
            speed: rng.random_range(mechanics::HOSTILE_SPEED_RANGE) as f32,
        }
    }
}

/// Builds the player at its default position: horizontally centered, box
/// bottom inset from the world's bottom edge.
pub fn player_bundle() -> PlayerBundle {
    PlayerBundle {
        player: PlayerControlled,
        entity_type: EntityType::Player,
        position: Position(Vec2::new(
            (WORLD_SIZE.x - collider::PLAYER_SIZE.x) / 2.0,
            WORLD_SIZE.y - mechanics::PLAYER_BOTTOM_INSET - collider::PLAYER_SIZE.y,
        )),
        velocity: Velocity::default(),
        collider: Collider {
            size: collider::PLAYER_SIZE,
        },
        player_collider: PlayerCollider,
    }
}

pub fn hostile_bundle(params: HostileParams) -> HostileBundle {
    HostileBundle {
        entity_type: EntityType::Hostile,
        position: Position(params.position),
        velocity: Velocity(Vec2::new(0.0, params.speed)),
        collider: Collider {
            size: collider::HOSTILE_SIZE,
        },
        hostile_collider: HostileCollider,
    }
}

/// Builds a projectile leaving the top center of the player's box.
pub fn projectile_bundle(player_pos: Vec2) -> ProjectileBundle {
    let size = collider::PROJECTILE_SIZE;
    ProjectileBundle {
        entity_type: EntityType::Projectile,
        position: Position(Vec2::new(
            player_pos.x + (collider::PLAYER_SIZE.x - size.x) / 2.0,
            player_pos.y - size.y,
        )),
        velocity: Velocity(Vec2::new(0.0, -mechanics::PROJECTILE_SPEED)),
        collider: Collider { size },
        projectile_collider: ProjectileCollider,
    }
}

/// Spawns the initial session population: one player and a full band of
/// randomized hostiles.
pub fn populate_session(world: &mut World) {
    let params: Vec<HostileParams> = {
        let mut rng = world.resource_mut::<SessionRng>();
        (0..mechanics::HOSTILE_POPULATION)
            .map(|_| HostileParams::random(&mut rng.0))
            .collect()
    };

    world.spawn(player_bundle());
    for p in params {
        world.spawn(hostile_bundle(p));
    }

    info!(hostiles = mechanics::HOSTILE_POPULATION, "Session populated");
}

/// Replaces every hostile destroyed this tick, keeping the population at
/// its fixed target before the frame is rendered.
pub fn respawn_system(mut commands: Commands, mut hits: EventReader<HostileDown>, mut rng: ResMut<SessionRng>) {
    for hit in hits.read() {
        let params = HostileParams::random(&mut rng.0);
        let entity = commands.spawn(hostile_bundle(params)).id();
        debug!(replaced = ?hit.hostile, entity = ?entity, "Hostile respawned");
    }
}
