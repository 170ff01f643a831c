//! Per-tick output: the frame snapshot handed to the render collaborator,
//! and the SDL system that paints it.

use bevy_ecs::{
    resource::Resource,
    system::{NonSendMut, Query, Res, ResMut},
};
use glam::Vec2;
use sdl2::{rect::Rect, render::Canvas, video::Window};
use thousands::Separable;
use tracing::error;

use crate::constants::ui;
use crate::systems::components::{Collider, EntityType, Position, ScoreResource};
use crate::systems::stage::GameStage;

/// What a single live entity looks like to the render collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityView {
    pub kind: EntityType,
    pub position: Vec2,
    pub size: Vec2,
}

/// Everything the render collaborator needs for one tick.
#[derive(Resource, Debug, Default, Clone)]
pub struct FrameSnapshot {
    pub entities: Vec<EntityView>,
    pub score: u32,
    pub stage: GameStage,
    /// End-of-session banner; present exactly while the game is over.
    pub banner: Option<String>,
}

/// Rebuilds the frame snapshot from the live registry.
pub fn snapshot_system(
    mut snapshot: ResMut<FrameSnapshot>,
    entities: Query<(&EntityType, &Position, &Collider)>,
    score: Res<ScoreResource>,
    stage: Res<GameStage>,
) {
    snapshot.entities.clear();
    snapshot
        .entities
        .extend(entities.iter().map(|(kind, position, collider)| EntityView {
            kind: *kind,
            position: position.0,
            size: collider.size,
        }));
    snapshot.score = score.0;
    snapshot.stage = *stage;
    snapshot.banner = match *stage {
        GameStage::Playing => None,
        GameStage::GameOver => Some(format!(
            "GAME OVER - final score {} - press any key to restart",
            score.0.separate_with_commas()
        )),
    };
}

/// Paints the snapshot onto the SDL canvas.
pub fn draw_system(snapshot: Res<FrameSnapshot>, mut canvas: NonSendMut<Canvas<Window>>) {
    canvas.set_draw_color(ui::BACKGROUND);
    canvas.clear();

    for view in &snapshot.entities {
        canvas.set_draw_color(match view.kind {
            EntityType::Player => ui::PLAYER,
            EntityType::Hostile => ui::HOSTILE,
            EntityType::Projectile => ui::PROJECTILE,
        });
        let rect = Rect::new(
            view.position.x as i32,
            view.position.y as i32,
            view.size.x as u32,
            view.size.y as u32,
        );
        if let Err(e) = canvas.fill_rect(rect) {
            error!("Failed to draw entity: {e}");
        }
    }

    let title = match &snapshot.banner {
        Some(banner) => format!("{} - {}", ui::WINDOW_TITLE, banner),
        None => format!("{} - score {}", ui::WINDOW_TITLE, snapshot.score.separate_with_commas()),
    };
    if canvas.window().title() != title {
        if let Err(e) = canvas.window_mut().set_title(&title) {
            error!("Failed to update window title: {e}");
        }
    }

    canvas.present();
}
