//! Player plugin.
//!
//! Pipeline:
//! - Update (`PlaySet::Player`): apply look + move intents to the `Player`
//!   resource, integrate gravity/jump, and recompute the `CameraPose`.
//!
//! The player is a single resource rather than an entity. The session
//! recreates it wholesale on every level start.
//!
//! Charge/throw fields live here because this struct hosts them, but they
//! are driven by the projectile request/launch systems, not by `update`.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::{PlayerTuning, Tunables};
use crate::plugins::input::{InputIntents, MoveIntent};
use crate::plugins::session::PlaySet;
use crate::plugins::world::Arena;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Player {
    /// Eye position: feet + eye height.
    pub position: Vec3,
    pub velocity_y: f32,
    pub grounded: bool,
    /// Radians. Unclamped.
    pub yaw: f32,
    /// Radians. Clamped to the configured pitch limit.
    pub pitch: f32,

    pub charge_time: f32,
    pub charging: bool,
    pub throw_timer: f32,
    pub throwing: bool,

    pub health: i32,
    pub max_health: i32,
    /// Seconds of red screen flash left. Cosmetic.
    pub damage_flash: f32,
}

/// Where the first-person camera sits and what it looks at.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    /// Unit view direction; falls back to -Z for a degenerate pose.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).try_normalize().unwrap_or(Vec3::NEG_Z)
    }
}

impl Player {
    /// Fresh player standing at `feet`, facing -Z.
    pub fn new(tuning: &PlayerTuning, feet: Vec3) -> Self {
        Self {
            position: feet + Vec3::Y * tuning.eye_height,
            velocity_y: 0.0,
            grounded: true,
            yaw: -FRAC_PI_2,
            pitch: 0.0,
            charge_time: 0.0,
            charging: false,
            throw_timer: 0.0,
            throwing: false,
            health: tuning.max_health,
            max_health: tuning.max_health,
            damage_flash: 0.0,
        }
    }

    /// Planar forward from yaw only.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Planar right, a quarter turn clockwise from forward.
    #[inline]
    pub fn right(&self) -> Vec3 {
        let a = self.yaw + FRAC_PI_2;
        Vec3::new(a.cos(), 0.0, a.sin())
    }

    /// Spherical view direction from yaw and pitch.
    #[inline]
    pub fn look_direction(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(cy * cp, sp, sy * cp)
    }

    pub fn camera_pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            target: self.position + self.look_direction(),
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// One controller step.
    pub fn update(&mut self, camera: &mut CameraPose, dt: f32, intent: &MoveIntent, tuning: &PlayerTuning) {
        // Look.
        let limit = tuning.pitch_limit_deg.to_radians();
        self.yaw += intent.look_delta.x * tuning.mouse_sensitivity;
        self.pitch = (self.pitch - intent.look_delta.y * tuning.mouse_sensitivity).clamp(-limit, limit);

        // Planar move.
        let forward = self.forward();
        let right = self.right();
        let mut dir = Vec3::ZERO;
        if intent.forward {
            dir += forward;
        }
        if intent.back {
            dir -= forward;
        }
        if intent.right {
            dir += right;
        }
        if intent.left {
            dir -= right;
        }
        let dir = dir.normalize_or_zero();

        let speed = if intent.sprint { tuning.sprint_speed } else { tuning.walk_speed };
        self.position += dir * speed * dt;

        // Vertical.
        if intent.jump && self.grounded {
            self.velocity_y = tuning.jump_impulse;
            self.grounded = false;
        }
        self.velocity_y -= tuning.gravity * dt;
        self.position.y += self.velocity_y * dt;

        if self.position.y <= tuning.eye_height {
            self.position.y = tuning.eye_height;
            self.velocity_y = 0.0;
            self.grounded = true;
        }

        *camera = self.camera_pose();
    }
}

pub fn plugin(app: &mut App) {
    let start = app.world().resource::<Arena>().player_start;
    let player = Player::new(&app.world().resource::<Tunables>().player, start);

    app.insert_resource(player.camera_pose())
        .insert_resource(player)
        .add_systems(
            Update,
            drive_player
                .in_set(PlaySet::Player)
                .run_if(in_state(GameState::Playing)),
        );
}

pub fn drive_player(
    time: Res<Time>,
    tunables: Res<Tunables>,
    intents: Res<InputIntents>,
    mut player: ResMut<Player>,
    mut camera: ResMut<CameraPose>,
) {
    player.update(&mut camera, time.delta_secs(), &intents.movement, &tunables.player);
}

#[cfg(test)]
mod tests;
