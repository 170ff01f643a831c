use bevy_ecs::{event::EventReader, system::ResMut};
use tracing::trace;

use crate::constants::scoring;
use crate::events::HostileDown;
use crate::systems::components::ScoreResource;

/// Accumulates points for hostiles destroyed by projectiles.
///
/// Nothing else writes the score while a session is playing; a player
/// loss in particular is worth no points.
pub fn score_system(mut score: ResMut<ScoreResource>, mut hits: EventReader<HostileDown>) {
    for _ in hits.read() {
        score.0 += scoring::HOSTILE_DOWN;
        trace!(score = score.0, "Score increased");
    }
}
