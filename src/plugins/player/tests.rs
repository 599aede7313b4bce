use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use super::{CameraPose, Player};
use crate::common::test_utils::{run_system_once, time_with_delta};
use crate::common::tunables::{PlayerTuning, Tunables};
use crate::plugins::input::{InputIntents, MoveIntent};

fn tuning() -> PlayerTuning {
    PlayerTuning::default()
}

fn fresh() -> (Player, CameraPose) {
    let p = Player::new(&tuning(), Vec3::new(0.0, 0.0, 4.0));
    let cam = p.camera_pose();
    (p, cam)
}

fn approx(a: Vec3, b: Vec3) -> bool {
    a.distance(b) < 1e-4
}

#[test]
fn new_player_stands_at_eye_height_facing_north() {
    let (p, cam) = fresh();
    assert_eq!(p.position, Vec3::new(0.0, 2.0, 4.0));
    assert!(p.grounded);
    assert_eq!(p.health, 5);
    assert_eq!(p.max_health, 5);
    assert!(approx(p.forward(), Vec3::NEG_Z));
    assert!(approx(cam.forward(), Vec3::NEG_Z));
}

#[test]
fn pitch_clamps_at_limit_across_repeated_updates() {
    let (mut p, mut cam) = fresh();
    let limit = 89.0_f32.to_radians();

    // Moving the mouse up pitches up (negative dy).
    let up = MoveIntent { look_delta: Vec2::new(0.0, -400.0), ..default() };
    for _ in 0..50 {
        p.update(&mut cam, 0.016, &up, &tuning());
        assert!(p.pitch <= limit);
    }
    assert_eq!(p.pitch, limit);

    let down = MoveIntent { look_delta: Vec2::new(0.0, 400.0), ..default() };
    for _ in 0..50 {
        p.update(&mut cam, 0.016, &down, &tuning());
        assert!(p.pitch >= -limit);
    }
    assert_eq!(p.pitch, -limit);
}

#[test]
fn yaw_is_not_clamped() {
    let (mut p, mut cam) = fresh();
    let turn = MoveIntent { look_delta: Vec2::new(1000.0, 0.0), ..default() };
    for _ in 0..10 {
        p.update(&mut cam, 0.016, &turn, &tuning());
    }
    assert!((p.yaw - (-FRAC_PI_2 + 30.0)).abs() < 1e-3);
}

#[test]
fn walking_forward_moves_along_yaw() {
    let (mut p, mut cam) = fresh();
    let fwd = MoveIntent { forward: true, ..default() };
    p.update(&mut cam, 0.5, &fwd, &tuning());
    assert!(approx(p.position, Vec3::new(0.0, 2.0, 1.5)));
    assert_eq!(cam.position, p.position);
}

#[test]
fn diagonal_movement_is_normalized_and_sprint_doubles_speed() {
    let (mut p, mut cam) = fresh();
    let diag = MoveIntent { forward: true, right: true, sprint: true, ..default() };
    let before = p.position;
    p.update(&mut cam, 0.1, &diag, &tuning());
    let moved = (p.position - before).length();
    assert!((moved - 1.0).abs() < 1e-4, "moved {moved}");
}

#[test]
fn opposing_keys_cancel() {
    let (mut p, mut cam) = fresh();
    let both = MoveIntent { forward: true, back: true, left: true, right: true, ..default() };
    let before = p.position;
    p.update(&mut cam, 0.1, &both, &tuning());
    assert!(approx(p.position, before));
}

#[test]
fn pitch_does_not_tilt_movement() {
    let (mut p, mut cam) = fresh();
    p.pitch = 1.0;
    let fwd = MoveIntent { forward: true, ..default() };
    p.update(&mut cam, 0.2, &fwd, &tuning());
    assert_eq!(p.position.y, 2.0);
    assert!(approx(p.position, Vec3::new(0.0, 2.0, 3.0)));
}

#[test]
fn jump_only_from_the_ground_and_lands_without_bounce() {
    let (mut p, mut cam) = fresh();
    let jump = MoveIntent { jump: true, ..default() };
    let idle = MoveIntent::default();

    p.update(&mut cam, 0.1, &jump, &tuning());
    assert!(!p.grounded);
    // 8 - 20 * 0.1 = 6 u/s, moved 0.6 up.
    assert!((p.velocity_y - 6.0).abs() < 1e-5);
    assert!((p.position.y - 2.6).abs() < 1e-5);

    // A second jump in the air is ignored.
    p.update(&mut cam, 0.1, &jump, &tuning());
    assert!((p.velocity_y - 4.0).abs() < 1e-5);

    for _ in 0..20 {
        p.update(&mut cam, 0.1, &idle, &tuning());
    }
    assert!(p.grounded);
    assert_eq!(p.position.y, 2.0);
    assert_eq!(p.velocity_y, 0.0);
}

#[test]
fn camera_target_follows_yaw_and_pitch() {
    let (mut p, mut cam) = fresh();
    p.yaw = 0.0;
    p.pitch = 0.0;
    p.update(&mut cam, 0.0, &MoveIntent::default(), &tuning());
    assert!(approx(cam.target - cam.position, Vec3::X));

    p.pitch = 45.0_f32.to_radians();
    p.update(&mut cam, 0.0, &MoveIntent::default(), &tuning());
    let h = 45.0_f32.to_radians().cos();
    assert!(approx(cam.target - cam.position, Vec3::new(h, h, 0.0)));
}

#[test]
fn drive_player_reads_intents() {
    let mut world = World::new();
    world.insert_resource(time_with_delta(0.5));
    world.insert_resource(Tunables::default());
    let (p, cam) = fresh();
    world.insert_resource(p);
    world.insert_resource(cam);
    world.insert_resource(InputIntents {
        movement: MoveIntent { forward: true, ..default() },
        ..default()
    });

    run_system_once(&mut world, super::drive_player);

    let p = world.resource::<Player>();
    assert!(approx(p.position, Vec3::new(0.0, 2.0, 1.5)));
    assert_eq!(world.resource::<CameraPose>().position, p.position);
}

#[test]
fn plugin_inserts_player_at_arena_start() {
    let mut app = App::new();
    crate::plugins::core::plugin(&mut app);
    crate::plugins::world::plugin(&mut app);
    super::plugin(&mut app);
    let p = app.world().resource::<Player>();
    assert_eq!(p.position, Vec3::new(0.0, 2.0, 4.0));
}
