use bevy_ecs::{
    query::With,
    system::{Query, Res, ResMut},
};
use glam::Vec2;
use tracing::trace;

use crate::constants::{mechanics, WORLD_SIZE};
use crate::systems::components::{DeltaTime, HostileCollider, Position, SessionRng, Velocity};
use crate::systems::spawn::HostileParams;

/// Advances every hostile one tick and recycles the ones that fell out.
///
/// A hostile whose box top passes the bottom margin is reassigned a fresh
/// position in the spawn band and a fresh speed in place, indistinguishable
/// from a new spawn, so falling out never shrinks the population.
pub fn hostile_movement_system(
    delta_time: Res<DeltaTime>,
    mut rng: ResMut<SessionRng>,
    mut hostiles: Query<(&mut Position, &mut Velocity), With<HostileCollider>>,
) {
    for (mut position, mut velocity) in hostiles.iter_mut() {
        position.0.y += velocity.0.y * delta_time.ticks as f32;

        if position.0.y > WORLD_SIZE.y + mechanics::HOSTILE_BOTTOM_MARGIN {
            let params = HostileParams::random(&mut rng.0);
            trace!(x = params.position.x, speed = params.speed, "Hostile recycled into the spawn band");
            position.0 = params.position;
            velocity.0 = Vec2::new(0.0, params.speed);
        }

        assert!(position.0.is_finite(), "hostile position must stay finite: {:?}", position.0);
    }
}
