use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::Vec2;
use rand::rngs::SmallRng;

/// A tag component for entities that are controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// A tag component denoting the type of entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::EnumIter)]
pub enum EntityType {
    Player,
    Hostile,
    Projectile,
}

/// Top-left corner of an entity's bounding box, in world pixels.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

/// Velocity in pixels per tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub Vec2);

/// Axis-aligned bounding box extent of an entity.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub size: Vec2,
}

/// Marker components for collision filtering
#[derive(Component)]
pub struct PlayerCollider;

#[derive(Component)]
pub struct HostileCollider;

#[derive(Component)]
pub struct ProjectileCollider;

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub entity_type: EntityType,
    pub position: Position,
    pub velocity: Velocity,
    pub collider: Collider,
    pub player_collider: PlayerCollider,
}

#[derive(Bundle)]
pub struct HostileBundle {
    pub entity_type: EntityType,
    pub position: Position,
    pub velocity: Velocity,
    pub collider: Collider,
    pub hostile_collider: HostileCollider,
}

#[derive(Bundle)]
pub struct ProjectileBundle {
    pub entity_type: EntityType,
    pub position: Position,
    pub velocity: Velocity,
    pub collider: Collider,
    pub projectile_collider: ProjectileCollider,
}

#[derive(Resource)]
pub struct GlobalState {
    pub exit: bool,
}

#[derive(Resource)]
pub struct ScoreResource(pub u32);

#[derive(Resource)]
pub struct DeltaTime {
    pub seconds: f32,
    pub ticks: u32,
}

/// Session-owned random source.
///
/// Every randomized draw in the simulation goes through this resource, so
/// seeding it makes a whole session deterministic.
#[derive(Resource)]
pub struct SessionRng(pub SmallRng);
