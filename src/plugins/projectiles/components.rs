use bevy::prelude::*;

use crate::common::tunables::ProjectileTuning;
use crate::plugins::player::CameraPose;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectileState {
    /// Resting in the thrower's hand.
    #[default]
    Idle,
    InFlight,
}

/// The one frisbee in the game.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Projectile {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Cosmetic spin, degrees.
    pub rotation: f32,
    pub state: ProjectileState,
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.0, 0.0),
            velocity: Vec3::ZERO,
            rotation: 0.0,
            state: ProjectileState::Idle,
        }
    }
}

impl Projectile {
    #[inline]
    pub fn in_flight(&self) -> bool {
        self.state == ProjectileState::InFlight
    }

    /// Launch from `from` along `direction`. Speed and upward arc scale with
    /// `charge` (clamped to `[0, 1]`).
    pub fn throw(&mut self, from: Vec3, direction: Vec3, charge: f32, tuning: &ProjectileTuning) {
        let charge = charge.clamp(0.0, 1.0);
        let speed = tuning.min_speed + (tuning.max_speed - tuning.min_speed) * charge;
        let dir = direction.try_normalize().unwrap_or(Vec3::NEG_Z);

        self.position = from;
        self.velocity = dir * speed;
        self.velocity.y += tuning.charge_lift * charge;
        self.state = ProjectileState::InFlight;
    }

    /// Back to Idle with no motion. Idempotent.
    #[inline]
    pub fn reset(&mut self) {
        self.state = ProjectileState::Idle;
        self.velocity = Vec3::ZERO;
        self.rotation = 0.0;
    }
}

/// Where the frisbee rests relative to the first-person camera.
pub fn hand_position(camera: &CameraPose) -> Vec3 {
    let forward = camera.forward();
    let right = forward.cross(Vec3::Y).normalize_or_zero();
    camera.position + right * 0.3 - Vec3::Y * 0.25 + forward * 0.75
}
