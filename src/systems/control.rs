use bevy_ecs::{event::EventReader, system::ResMut};
use tracing::info;

use crate::error::GameError;
use crate::events::{GameCommand, GameEvent};
use crate::systems::components::GlobalState;

/// Handles session-wide commands raised by the input layer.
///
/// Runs in every stage, so quitting stays possible while the game-over
/// screen is waiting for acknowledgment.
pub fn control_system(mut events: EventReader<GameEvent>, mut state: ResMut<GlobalState>) {
    for event in events.read() {
        if let GameEvent::Command(GameCommand::Exit) = event {
            info!("Exit requested. Exiting...");
            state.exit = true;
        }
    }
}

/// Surfaces errors reported by other systems through the tracing pipeline.
pub fn error_drain_system(mut errors: EventReader<GameError>) {
    for error in errors.read() {
        tracing::error!(%error, "Game system reported an error");
    }
}
