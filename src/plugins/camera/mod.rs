//! Camera plugin (render-only).
//!
//! The simulation owns the view as a plain `CameraPose` resource. This plugin
//! only mirrors it onto a single `Camera3d` entity, and captures the cursor
//! for mouse-look while a level is in play.
//!
//! ```text
//! Startup:          spawn MainCamera -> write MainCameraEntity resource
//! PostUpdate:       follow_pose copies CameraPose into the camera Transform
//! OnEnter(Playing): lock + hide the primary window cursor
//! OnExit(Playing):  release it for the menus
//! ```

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};

use crate::common::state::GameState;
use crate::plugins::player::CameraPose;

#[derive(Component)]
pub struct MainCamera;

#[derive(Resource, Debug, Clone, Copy)]
pub struct MainCameraEntity(pub Entity);

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera).add_systems(
        PostUpdate,
        follow_pose
            .before(TransformSystems::Propagate)
            .run_if(resource_changed::<CameraPose>),
    );

    app.add_systems(OnEnter(GameState::Playing), capture_cursor)
        .add_systems(OnExit(GameState::Playing), release_cursor);
}

fn spawn_camera(mut commands: Commands, pose: Res<CameraPose>) {
    let e = commands
        .spawn((
            Name::new("MainCamera"),
            MainCamera,
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                fov: 60f32.to_radians(),
                ..default()
            }),
            pose_transform(&pose),
        ))
        .id();

    commands.insert_resource(MainCameraEntity(e));
}

fn pose_transform(pose: &CameraPose) -> Transform {
    Transform::from_translation(pose.position).looking_at(pose.target, Vec3::Y)
}

fn follow_pose(
    pose: Res<CameraPose>,
    cam_e: Res<MainCameraEntity>,
    mut q_cam: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut tf) = q_cam.get_mut(cam_e.0) else {
        return;
    };
    *tf = pose_transform(&pose);
}

fn set_cursor_captured(cursor: &mut CursorOptions, captured: bool) {
    cursor.grab_mode = if captured {
        CursorGrabMode::Locked
    } else {
        CursorGrabMode::None
    };
    cursor.visible = !captured;
}

fn capture_cursor(mut q: Query<&mut CursorOptions, With<PrimaryWindow>>) {
    if let Ok(mut cursor) = q.single_mut() {
        set_cursor_captured(&mut cursor, true);
    }
}

fn release_cursor(mut q: Query<&mut CursorOptions, With<PrimaryWindow>>) {
    if let Ok(mut cursor) = q.single_mut() {
        set_cursor_captured(&mut cursor, false);
    }
}
