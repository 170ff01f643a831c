//! The session lifecycle state machine.

use bevy_ecs::{
    entity::Entity,
    event::EventReader,
    query::With,
    resource::Resource,
    system::{Commands, Query, ResMut},
};
use tracing::info;

use crate::constants::mechanics;
use crate::events::{GameCommand, GameEvent, PlayerStruck};
use crate::systems::components::{EntityType, ScoreResource, SessionRng};
use crate::systems::spawn::{self, HostileParams};

/// A resource to track the overall stage of the game from a high-level perspective.
#[derive(Resource, Debug, PartialEq, Eq, Clone, Copy, strum_macros::Display)]
pub enum GameStage {
    /// The main gameplay loop is active.
    Playing,
    /// A hostile reached the player; the session is frozen until the
    /// player acknowledges the game-over screen.
    GameOver,
}

impl Default for GameStage {
    fn default() -> Self {
        Self::Playing
    }
}

/// Drives the Playing/GameOver transitions and rebuilds the session on
/// restart.
///
/// A loss ends the session the tick it is reported. Acknowledgments are
/// only honored once the game-over screen is already up; any raised up to
/// and including the losing tick are discarded. A restart discards every
/// session entity, zeroes the score, and respawns the player with a full
/// band of freshly randomized hostiles.
pub fn stage_system(
    mut commands: Commands,
    mut stage: ResMut<GameStage>,
    mut score: ResMut<ScoreResource>,
    mut rng: ResMut<SessionRng>,
    mut struck: EventReader<PlayerStruck>,
    mut events: EventReader<GameEvent>,
    entities: Query<Entity, With<EntityType>>,
) {
    let old_stage = *stage;
    let new_stage = match old_stage {
        GameStage::Playing => {
            events.clear();
            if struck.read().next().is_some() {
                GameStage::GameOver
            } else {
                GameStage::Playing
            }
        }
        GameStage::GameOver => {
            struck.clear();
            if events
                .read()
                .any(|event| matches!(event, GameEvent::Command(GameCommand::Acknowledge)))
            {
                GameStage::Playing
            } else {
                GameStage::GameOver
            }
        }
    };

    if old_stage == new_stage {
        return;
    }

    match (old_stage, new_stage) {
        (GameStage::Playing, GameStage::GameOver) => {
            info!(final_score = score.0, "Session over");
        }
        (GameStage::GameOver, GameStage::Playing) => {
            for entity in entities.iter() {
                commands.entity(entity).despawn();
            }
            score.0 = 0;
            commands.spawn(spawn::player_bundle());
            for _ in 0..mechanics::HOSTILE_POPULATION {
                commands.spawn(spawn::hostile_bundle(HostileParams::random(&mut rng.0)));
            }
            info!("Session restarted");
        }
        _ => {}
    }

    *stage = new_stage;
}
