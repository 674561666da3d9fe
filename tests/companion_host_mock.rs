//! Tests for the companion's use of its host capabilities.
//!
//! A mocked host pins down exactly which calls the controller makes.

use glam::Vec2;
use mockall::mock;
use mockall::predicate::eq;
use sidekick::{
    Clock, CollisionOutcome, CompanionConfig, CompanionController, CompanionState, Cue, CueSink,
    EntityId, EntityTag, Environment, IgnoreReason, MotionSink, SpatialQuery,
};
use test_utils::{shove, unit_config, TEST_DT};

mock! {
    pub Host {}
    impl SpatialQuery for Host {
        fn overlap_circle(&self, center: Vec2, radius: f32, tag: EntityTag) -> Vec<EntityId>;
        fn locate(&self, entity: EntityId) -> Option<Vec2>;
    }
    impl MotionSink for Host {
        fn translate(&mut self, delta: Vec2);
        fn set_facing(&mut self, flipped: bool);
        fn set_draw_order(&mut self, order: i32);
    }
    impl Clock for Host {
        fn delta_time(&self) -> f32;
    }
    impl Environment for Host {
        fn is_gameplay_active(&self) -> bool;
        fn notify_game_over(&mut self);
        fn unit_scale(&self) -> f32;
        fn owner_position(&self) -> Vec2;
    }
    impl CueSink for Host {
        fn emit(&mut self, cue: Cue);
    }
}

fn running_host(unit_scale: f32) -> MockHost {
    let mut host = MockHost::new();
    host.expect_unit_scale().return_const(unit_scale);
    host.expect_is_gameplay_active().return_const(true);
    host.expect_delta_time().return_const(TEST_DT);
    host
}

#[test]
fn queries_use_the_scaled_chase_radius() {
    let mut host = running_host(0.01);
    host.expect_overlap_circle()
        .withf(|center, radius, tag| {
            *center == Vec2::ZERO && (radius - 0.5).abs() < 1e-6 && *tag == EntityTag::Hostile
        })
        .times(1)
        .returning(|_, _, _| Vec::new());
    host.expect_owner_position()
        .return_const(Vec2::new(10.0, 0.0));
    host.expect_set_draw_order()
        .with(eq(0))
        .times(1)
        .return_const(());
    host.expect_translate().never();

    let mut companion =
        CompanionController::seeded(&CompanionConfig::default(), Vec2::ZERO, host, 1)
            .expect("default config is valid");
    assert_eq!(companion.tick(), CompanionState::Follow);
}

#[test]
fn game_over_is_notified_once() {
    let mut host = running_host(1.0);
    host.expect_emit().with(eq(Cue::Hit)).times(1).return_const(());
    host.expect_emit().with(eq(Cue::Death)).times(1).return_const(());
    host.expect_notify_game_over().times(1).return_const(());
    host.expect_translate().never();
    host.expect_set_draw_order().never();

    let config = CompanionConfig {
        max_life: 1,
        hit_displacement: 0.0,
        ..unit_config()
    };
    let mut companion = CompanionController::seeded(&config, Vec2::ZERO, host, 1)
        .expect("test config is valid");

    assert_eq!(
        companion.on_collision(shove(1)),
        CollisionOutcome::Hit {
            by: EntityId(1),
            life: 0
        }
    );
    assert_eq!(companion.state(), CompanionState::Death);
    assert_eq!(
        companion.on_collision(shove(2)),
        CollisionOutcome::Ignored(IgnoreReason::Dead)
    );
    assert_eq!(companion.tick(), CompanionState::Death);
}

#[test]
fn knockback_translates_along_the_contact_normal() {
    let mut host = running_host(1.0);
    host.expect_emit().with(eq(Cue::Hit)).times(1).return_const(());
    host.expect_translate()
        .with(eq(Vec2::new(0.0, 1.25)))
        .times(3)
        .return_const(());
    host.expect_set_draw_order().times(3).return_const(());
    host.expect_overlap_circle().never();

    let mut companion = CompanionController::seeded(&unit_config(), Vec2::ZERO, host, 1)
        .expect("test config is valid");
    companion.on_collision(shove(1));
    assert_eq!(companion.tick(), CompanionState::Hit);
    assert_eq!(companion.tick(), CompanionState::Hit);
    assert_eq!(companion.tick(), CompanionState::Idle);
    assert_eq!(companion.current_life(), 2);
}

#[test]
fn stale_target_is_dropped_after_a_failed_lookup() {
    let mut host = running_host(1.0);
    let mut calls = 0;
    host.expect_overlap_circle()
        .times(2)
        .returning(move |_, _, _| {
            calls += 1;
            if calls == 1 {
                vec![EntityId(5)]
            } else {
                Vec::new()
            }
        });
    host.expect_locate()
        .with(eq(EntityId(5)))
        .times(1)
        .return_const(None::<Vec2>);
    host.expect_set_draw_order().return_const(());
    host.expect_emit().never();
    host.expect_translate().never();

    let mut companion = CompanionController::seeded(&unit_config(), Vec2::ZERO, host, 1)
        .expect("test config is valid");
    assert_eq!(companion.tick(), CompanionState::Chase);
    assert_eq!(companion.target(), Some(EntityId(5)));
    assert_eq!(companion.tick(), CompanionState::Idle);
    assert_eq!(companion.target(), None);
}

#[test]
fn paused_host_only_receives_draw_order() {
    let mut host = MockHost::new();
    host.expect_unit_scale().return_const(1.0_f32);
    host.expect_is_gameplay_active().return_const(false);
    host.expect_set_draw_order().times(2).return_const(());
    host.expect_overlap_circle().never();
    host.expect_delta_time().never();
    host.expect_emit().never();

    let mut companion = CompanionController::seeded(&unit_config(), Vec2::ZERO, host, 1)
        .expect("test config is valid");
    companion.tick();
    companion.tick();
    assert_eq!(
        companion.on_collision(shove(1)),
        CollisionOutcome::Ignored(IgnoreReason::Paused)
    );
}
