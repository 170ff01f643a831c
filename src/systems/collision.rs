use bevy_ecs::entity::Entity;
use bevy_ecs::event::EventWriter;
use bevy_ecs::query::With;
use bevy_ecs::system::{Commands, Query};
use glam::Vec2;
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::events::{HostileDown, PlayerStruck};
use crate::systems::components::{Collider, HostileCollider, PlayerCollider, Position, ProjectileCollider};

/// Returns true when two boxes overlap on both axes.
///
/// Intervals are open: boxes that merely touch along an edge or corner do
/// not overlap.
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && b_pos.x < a_pos.x + a_size.x
        && a_pos.y < b_pos.y + b_size.y
        && b_pos.y < a_pos.y + a_size.y
}

/// Detects overlapping entities and raises the tick's combat events.
///
/// Two ordered passes: projectile×hostile first, then player×hostile
/// against the survivors. The order is a fixed policy: a hostile shot down
/// in the same tick it reaches the player counts as a hit, never as a
/// loss. Each projectile is consumed by at most one hostile and each
/// downed hostile consumes exactly one projectile; the player pass stops
/// at its first overlap.
#[allow(clippy::type_complexity)]
pub fn collision_system(
    mut commands: Commands,
    projectiles: Query<(Entity, &Position, &Collider), With<ProjectileCollider>>,
    hostiles: Query<(Entity, &Position, &Collider), With<HostileCollider>>,
    players: Query<(&Position, &Collider), With<PlayerCollider>>,
    mut hits: EventWriter<HostileDown>,
    mut losses: EventWriter<PlayerStruck>,
) {
    let mut downed: SmallVec<[Entity; 8]> = SmallVec::new();

    for (projectile, projectile_pos, projectile_collider) in projectiles.iter() {
        for (hostile, hostile_pos, hostile_collider) in hostiles.iter() {
            if downed.contains(&hostile) {
                continue;
            }
            if aabb_overlap(
                projectile_pos.0,
                projectile_collider.size,
                hostile_pos.0,
                hostile_collider.size,
            ) {
                commands.entity(projectile).despawn();
                commands.entity(hostile).despawn();
                downed.push(hostile);
                hits.write(HostileDown { projectile, hostile });
                debug!(projectile = ?projectile, hostile = ?hostile, "Hostile shot down");
                break;
            }
        }
    }

    if let Ok((player_pos, player_collider)) = players.single() {
        for (hostile, hostile_pos, hostile_collider) in hostiles.iter() {
            if downed.contains(&hostile) {
                continue;
            }
            if aabb_overlap(player_pos.0, player_collider.size, hostile_pos.0, hostile_collider.size) {
                info!(hostile = ?hostile, "Player struck by a hostile");
                losses.write(PlayerStruck { hostile });
                break;
            }
        }
    }
}
