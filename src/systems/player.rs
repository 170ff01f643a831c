use bevy_ecs::{
    event::{EventReader, EventWriter},
    query::With,
    system::{Commands, Query, Res},
};
use tracing::debug;

use crate::constants::{mechanics, WORLD_SIZE};
use crate::error::GameError;
use crate::events::{GameCommand, GameEvent};
use crate::systems::components::{Collider, DeltaTime, PlayerControlled, Position, Velocity};
use crate::systems::spawn;

/// Applies steering commands and advances the player one tick.
///
/// Movement is level-triggered: the input layer re-issues the active
/// direction every tick, so steering falls back to zero whenever no
/// command arrives. After the step the bounding box is clamped to the
/// world's horizontal extent; the vertical position never changes.
pub fn player_movement_system(
    delta_time: Res<DeltaTime>,
    mut events: EventReader<GameEvent>,
    mut players: Query<(&mut Position, &mut Velocity, &Collider), With<PlayerControlled>>,
    mut errors: EventWriter<GameError>,
) {
    let (mut position, mut velocity, collider) = match players.single_mut() {
        Ok(tuple) => tuple,
        Err(e) => {
            errors.write(GameError::InvalidState(format!(
                "No/multiple entities queried for player movement: {e}"
            )));
            return;
        }
    };

    velocity.0.x = 0.0;
    for event in events.read() {
        if let GameEvent::Command(GameCommand::Move(direction)) = event {
            velocity.0.x = direction.sign() * mechanics::PLAYER_SPEED;
        }
    }

    position.0.x += velocity.0.x * delta_time.ticks as f32;
    position.0.x = position.0.x.clamp(0.0, WORLD_SIZE.x - collider.size.x);

    assert!(position.0.is_finite(), "player position must stay finite: {:?}", position.0);
}

/// Spawns one projectile per fire command, leaving the player's muzzle.
pub fn fire_system(
    mut commands: Commands,
    mut events: EventReader<GameEvent>,
    players: Query<&Position, With<PlayerControlled>>,
) {
    for event in events.read() {
        if !matches!(event, GameEvent::Command(GameCommand::Fire)) {
            continue;
        }
        if let Ok(position) = players.single() {
            let entity = commands.spawn(spawn::projectile_bundle(position.0)).id();
            debug!(entity = ?entity, x = position.0.x, "Projectile fired");
        }
    }
}
