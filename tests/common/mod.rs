#![allow(dead_code)]

use bevy_ecs::entity::Entity;
use bevy_ecs::event::{Event, Events};
use bevy_ecs::schedule::Schedule;
use bevy_ecs::world::World;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use starblast::events::GameEvent;
use starblast::game::{add_core_systems, setup_session};
use starblast::systems::{
    hostile_bundle, player_bundle, populate_session, projectile_bundle, DeltaTime, EntityType, HostileParams, Position,
};

pub const TEST_SEED: u64 = 0x5EED;

/// A world with events and resources registered but no entities spawned.
pub fn create_test_world() -> World {
    let mut world = World::default();
    setup_session(&mut world, SmallRng::seed_from_u64(TEST_SEED));
    world
}

/// A world populated the way a fresh session is: one player and a full
/// band of hostiles, on a deterministic random source.
pub fn create_session_world() -> World {
    let mut world = create_test_world();
    populate_session(&mut world);
    world
}

/// The full per-tick schedule minus the SDL shell systems.
pub fn core_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    add_core_systems(&mut schedule);
    schedule
}

/// Runs one fixed-cadence tick.
pub fn tick(world: &mut World, schedule: &mut Schedule) {
    world.insert_resource(DeltaTime {
        seconds: 1.0 / 60.0,
        ticks: 1,
    });
    schedule.run(world);
}

pub fn send_game_event(world: &mut World, event: GameEvent) {
    world.send_event(event);
}

/// Spawns a hostile with explicit parameters instead of random ones.
pub fn spawn_hostile_at(world: &mut World, position: Vec2, speed: f32) -> Entity {
    world.spawn(hostile_bundle(HostileParams { position, speed })).id()
}

/// Spawns a player at an explicit position instead of the default one.
pub fn spawn_player_at(world: &mut World, position: Vec2) -> Entity {
    let mut bundle = player_bundle();
    bundle.position = Position(position);
    world.spawn(bundle).id()
}

/// Spawns a projectile with its box top-left at an explicit position.
pub fn spawn_projectile_at(world: &mut World, position: Vec2) -> Entity {
    let mut bundle = projectile_bundle(Vec2::ZERO);
    bundle.position = Position(position);
    world.spawn(bundle).id()
}

pub fn count_of_kind(world: &mut World, kind: EntityType) -> usize {
    let mut query = world.query::<&EntityType>();
    query.iter(world).filter(|entity_type| **entity_type == kind).count()
}

pub fn player_position(world: &mut World) -> Vec2 {
    let mut query = world.query::<(&EntityType, &Position)>();
    query
        .iter(world)
        .find(|(kind, _)| **kind == EntityType::Player)
        .map(|(_, position)| position.0)
        .expect("world should contain a player")
}

/// Every event of the given type written since the world was created.
pub fn drain_events<E: Event + Clone>(world: &World) -> Vec<E> {
    let events = world.resource::<Events<E>>();
    events.iter_current_update_events().cloned().collect()
}
