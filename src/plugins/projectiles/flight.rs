//! Flight integration and terminal checks.
//!
//! Per frame, in this order:
//! 1. gravity on `velocity.y`
//! 2. drag on the whole velocity
//! 3. `position += velocity * dt`, cosmetic spin
//! 4. terminal checks: ground, then obstacles, then walls
//!
//! Any terminal event resets the projectile to Idle in the same frame.

use bevy::prelude::*;

use crate::common::tunables::{DragModel, ProjectileTuning, Tunables};
use crate::plugins::player::CameraPose;
use crate::plugins::world::{Arena, ObstaclePart};

use super::components::{hand_position, Projectile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEvent {
    Ground,
    Obstacle { index: usize, part: ObstaclePart },
    Wall,
}

/// Velocity multiplier for one frame of air resistance.
#[inline]
pub fn drag_factor(tuning: &ProjectileTuning, dt: f32) -> f32 {
    match tuning.drag_model {
        DragModel::Linear => 1.0 - tuning.drag * dt,
        DragModel::Exponential => (-tuning.drag * dt).exp(),
    }
}

impl Projectile {
    /// Integrate one frame. Returns the terminal event that ended the flight, if any.
    pub fn update(&mut self, arena: &Arena, tuning: &ProjectileTuning, dt: f32) -> Option<TerminalEvent> {
        if !self.in_flight() {
            return None;
        }

        self.velocity.y -= tuning.gravity * dt;
        self.velocity *= drag_factor(tuning, dt);
        self.position += self.velocity * dt;
        self.rotation += tuning.spin_rate * dt;

        let event = self.terminal_event(arena, tuning);
        if event.is_some() {
            self.reset();
        }
        event
    }

    fn terminal_event(&self, arena: &Arena, tuning: &ProjectileTuning) -> Option<TerminalEvent> {
        if self.position.y <= tuning.ground_contact {
            return Some(TerminalEvent::Ground);
        }
        if let Some((index, part)) = arena.obstacle_hit(self.position, tuning.radius) {
            return Some(TerminalEvent::Obstacle { index, part });
        }
        if arena.wall_hit(self.position, tuning.radius) {
            return Some(TerminalEvent::Wall);
        }
        None
    }
}

pub fn fly_projectile(
    time: Res<Time>,
    arena: Res<Arena>,
    tunables: Res<Tunables>,
    mut projectile: ResMut<Projectile>,
) {
    if let Some(event) = projectile.update(&arena, &tunables.projectile, time.delta_secs()) {
        debug!("projectile stopped: {event:?}");
    }
}

/// While Idle the frisbee follows the thrower's hand.
pub fn hold_in_hand(camera: Res<CameraPose>, mut projectile: ResMut<Projectile>) {
    if projectile.in_flight() {
        return;
    }
    projectile.position = hand_position(&camera);
}
