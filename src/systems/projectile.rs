use bevy_ecs::{
    entity::Entity,
    query::With,
    system::{Commands, Query, Res},
};
use tracing::trace;

use crate::systems::components::{Collider, DeltaTime, Position, ProjectileCollider, Velocity};

/// Advances every projectile one tick and removes the ones that left.
///
/// A projectile is gone once its box bottom passes above the world's top
/// edge; unlike hostiles it is despawned, not recycled.
pub fn projectile_movement_system(
    mut commands: Commands,
    delta_time: Res<DeltaTime>,
    mut projectiles: Query<(Entity, &mut Position, &Velocity, &Collider), With<ProjectileCollider>>,
) {
    for (entity, mut position, velocity, collider) in projectiles.iter_mut() {
        position.0.y += velocity.0.y * delta_time.ticks as f32;

        if position.0.y + collider.size.y < 0.0 {
            trace!(entity = ?entity, "Projectile left through the top");
            commands.entity(entity).despawn();
        }

        assert!(position.0.is_finite(), "projectile position must stay finite: {:?}", position.0);
    }
}
