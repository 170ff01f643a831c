//! This module contains the main game logic and state.

use bevy_ecs::event::EventRegistry;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::system::Res;
use bevy_ecs::world::World;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::EventPump;
use tracing::info;

use crate::error::GameError;
use crate::events::{GameEvent, HostileDown, PlayerStruck};
use crate::systems::{
    collision_system, control_system, draw_system, error_drain_system, fire_system, hostile_movement_system, input_system,
    player_movement_system, populate_session, projectile_movement_system, respawn_system, score_system, snapshot_system,
    stage_system, DeltaTime, FrameSnapshot, GameStage, GlobalState, HeldKeys, ScoreResource, SessionRng,
};

/// System sets ordering one tick of the simulation.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GameplaySet {
    /// Systems that poll and translate raw input.
    Input,
    /// Systems that advance the session while it is playing.
    Update,
    /// Systems that react to the tick's events.
    Respond,
    /// Systems that publish the tick's results.
    Output,
}

/// Registers events and resources for a new session.
///
/// The random source is passed in so a caller can seed it; the shell uses
/// OS entropy. Call [`populate_session`] afterwards to spawn the initial
/// entities.
pub fn setup_session(world: &mut World, rng: SmallRng) {
    EventRegistry::register_event::<GameError>(world);
    EventRegistry::register_event::<GameEvent>(world);
    EventRegistry::register_event::<HostileDown>(world);
    EventRegistry::register_event::<PlayerStruck>(world);

    world.insert_resource(GlobalState { exit: false });
    world.insert_resource(ScoreResource(0));
    world.insert_resource(GameStage::default());
    world.insert_resource(DeltaTime { seconds: 0.0, ticks: 0 });
    world.insert_resource(FrameSnapshot::default());
    world.insert_resource(HeldKeys::default());
    world.insert_resource(SessionRng(rng));
}

/// Adds every SDL-free system to the schedule in tick order.
///
/// The shell wraps this with input polling and drawing; tests drive it
/// as-is. Update systems only run while the session is playing, so no
/// entity state is mutated on the game-over screen.
pub fn add_core_systems(schedule: &mut Schedule) {
    schedule
        .add_systems((
            control_system.in_set(GameplaySet::Input),
            (
                fire_system,
                player_movement_system,
                hostile_movement_system,
                projectile_movement_system,
                collision_system,
                score_system,
                respawn_system,
            )
                .chain()
                .in_set(GameplaySet::Update),
            (stage_system, error_drain_system).chain().in_set(GameplaySet::Respond),
            snapshot_system.in_set(GameplaySet::Output),
        ))
        .configure_sets(
            (
                GameplaySet::Input,
                GameplaySet::Update.run_if(|stage: Res<GameStage>| matches!(*stage, GameStage::Playing)),
                GameplaySet::Respond,
                GameplaySet::Output,
            )
                .chain(),
        );
}

/// Core game state manager built on the Bevy ECS architecture.
///
/// Owns a `World` holding the session's entities and resources, and a
/// `Schedule` defining system execution order for one tick. SDL resources
/// are stored as `NonSend` to respect their thread affinity.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    pub fn new(canvas: Canvas<Window>, event_pump: EventPump) -> Game {
        info!("Starting game initialization");

        let mut world = World::default();
        let mut schedule = Schedule::default();

        setup_session(&mut world, SmallRng::from_os_rng());
        populate_session(&mut world);
        add_core_systems(&mut schedule);

        schedule.add_systems((
            input_system.in_set(GameplaySet::Input).before(control_system),
            draw_system.in_set(GameplaySet::Output).after(snapshot_system),
        ));

        world.insert_non_send_resource(event_pump);
        world.insert_non_send_resource(canvas);

        info!("Game initialization completed successfully");
        Game { world, schedule }
    }

    /// Ticks the game state.
    ///
    /// Returns true if the game should exit.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.world.insert_resource(DeltaTime { seconds: dt, ticks: 1 });

        self.schedule.run(&mut self.world);

        let state = self
            .world
            .get_resource::<GlobalState>()
            .expect("GlobalState could not be acquired");

        state.exit
    }
}
