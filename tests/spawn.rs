use bevy_ecs::entity::Entity;
use bevy_ecs::system::RunSystemOnce;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use speculoos::prelude::*;

use starblast::constants::{mechanics, WORLD_SIZE};
use starblast::events::HostileDown;
use starblast::systems::{respawn_system, EntityType, HostileParams, Position, Velocity};

mod common;

#[test]
fn test_hostile_params_stay_in_the_band() {
    let mut rng = SmallRng::seed_from_u64(common::TEST_SEED);

    for _ in 0..200 {
        let params = HostileParams::random(&mut rng);

        assert_that(&params.position.x).is_greater_than_or_equal_to(0.0);
        assert_that(&params.position.x).is_less_than(WORLD_SIZE.x - 50.0);
        assert_that(&params.position.y).is_greater_than_or_equal_to(mechanics::HOSTILE_SPAWN_BAND.start as f32);
        assert_that(&params.position.y).is_less_than(mechanics::HOSTILE_SPAWN_BAND.end as f32);
        assert_that(&params.speed).is_greater_than_or_equal_to(mechanics::HOSTILE_SPEED_RANGE.start as f32);
        assert_that(&params.speed).is_less_than(mechanics::HOSTILE_SPEED_RANGE.end as f32);
        assert_that(&params.speed.fract()).is_equal_to(0.0);
    }
}

#[test]
fn test_hostile_params_deterministic_for_equal_seeds() {
    let mut first = SmallRng::seed_from_u64(42);
    let mut second = SmallRng::seed_from_u64(42);

    for _ in 0..32 {
        assert_that(&HostileParams::random(&mut first)).is_equal_to(HostileParams::random(&mut second));
    }
}

#[test]
fn test_populated_session_counts() {
    let mut world = common::create_session_world();

    assert_that(&common::count_of_kind(&mut world, EntityType::Player)).is_equal_to(1);
    assert_that(&common::count_of_kind(&mut world, EntityType::Hostile)).is_equal_to(mechanics::HOSTILE_POPULATION);
    assert_that(&common::count_of_kind(&mut world, EntityType::Projectile)).is_equal_to(0);
}

#[test]
fn test_populated_hostiles_start_in_the_band() {
    let mut world = common::create_session_world();

    let mut query = world.query::<(&EntityType, &Position, &Velocity)>();
    for (kind, position, velocity) in query.iter(&world) {
        if *kind != EntityType::Hostile {
            continue;
        }
        assert_that(&position.0.y).is_less_than(0.0);
        assert_that(&velocity.0.y).is_greater_than_or_equal_to(1.0);
        assert_that(&velocity.0.y).is_less_than(4.0);
    }
}

#[test]
fn test_respawn_replaces_each_downed_hostile() {
    let mut world = common::create_test_world();
    world.send_event(HostileDown {
        projectile: Entity::from_raw(1),
        hostile: Entity::from_raw(2),
    });
    world.send_event(HostileDown {
        projectile: Entity::from_raw(3),
        hostile: Entity::from_raw(4),
    });

    world
        .run_system_once(respawn_system)
        .expect("System should run successfully");

    assert_that(&common::count_of_kind(&mut world, EntityType::Hostile)).is_equal_to(2);
}

#[test]
fn test_respawned_hostiles_enter_from_the_band() {
    let mut world = common::create_test_world();
    world.send_event(HostileDown {
        projectile: Entity::from_raw(1),
        hostile: Entity::from_raw(2),
    });

    world
        .run_system_once(respawn_system)
        .expect("System should run successfully");

    let mut query = world.query::<(&EntityType, &Position)>();
    let (_, position) = query
        .iter(&world)
        .find(|(kind, _)| **kind == EntityType::Hostile)
        .expect("Respawned hostile should exist");

    assert_that(&position.0.y).is_less_than(0.0);
}

#[test]
fn test_no_events_no_respawns() {
    let mut world = common::create_test_world();

    world
        .run_system_once(respawn_system)
        .expect("System should run successfully");

    assert_that(&common::count_of_kind(&mut world, EntityType::Hostile)).is_equal_to(0);
}
