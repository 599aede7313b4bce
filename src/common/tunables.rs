//! Tunable gameplay constants.
//!
//! Grouped per component so each simulation function only borrows the slice
//! of tuning it actually reads.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Default)]
pub struct Tunables {
    pub player: PlayerTuning,
    pub projectile: ProjectileTuning,
    pub actors: ActorTuning,
    pub levels: LevelTable,
}

#[derive(Debug, Clone)]
pub struct PlayerTuning {
    /// Eye height above the feet; also the ground clamp for the eye position.
    pub eye_height: f32,
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub jump_impulse: f32,
    pub gravity: f32,
    /// Radians per pixel of mouse motion.
    pub mouse_sensitivity: f32,
    pub pitch_limit_deg: f32,
    pub collision_radius: f32,
    pub max_health: i32,
    pub max_charge_secs: f32,
    pub throw_anim_secs: f32,
    pub damage_flash_secs: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            eye_height: 2.0,
            walk_speed: 5.0,
            sprint_speed: 10.0,
            jump_impulse: 8.0,
            gravity: 20.0,
            mouse_sensitivity: 0.003,
            pitch_limit_deg: 89.0,
            collision_radius: 0.5,
            max_health: 5,
            max_charge_secs: 1.0,
            throw_anim_secs: 0.3,
            damage_flash_secs: 0.3,
        }
    }
}

/// How air resistance is applied per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragModel {
    /// `v *= 1 - k*dt`. Frame-rate sensitive; matches the shipped feel.
    #[default]
    Linear,
    /// `v *= exp(-k*dt)`. Frame-rate independent.
    Exponential,
}

#[derive(Debug, Clone)]
pub struct ProjectileTuning {
    pub gravity: f32,
    pub drag: f32,
    pub drag_model: DragModel,
    pub radius: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Extra upward velocity at full charge.
    pub charge_lift: f32,
    /// Cosmetic spin, degrees per second.
    pub spin_rate: f32,
    /// Ground contact is `position.y <= ground_contact`.
    pub ground_contact: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            drag: 0.5,
            drag_model: DragModel::Linear,
            radius: 0.15,
            min_speed: 10.0,
            max_speed: 35.0,
            charge_lift: 2.0,
            spin_rate: 720.0,
            ground_contact: 0.1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActorTuning {
    pub speed: f32,
    pub collision_radius: f32,
    pub max_health: i32,
    pub attack_cooldown: f32,
    /// Vertical offset from the actor's feet to its body centre.
    pub body_center_height: f32,
    pub avoid_radius: f32,
    pub avoid_gain: f32,
    /// Distance at which an actor stops steering toward the player.
    pub arrive_epsilon: f32,
    pub walk_cycle_rate: f32,
    /// Hard clamp on |x| and |z|.
    pub bounds: f32,
    /// Spawn samples are drawn from `[-spawn_extent, spawn_extent]^2`.
    pub spawn_extent: f32,
    pub spawn_attempts: u32,
}

impl Default for ActorTuning {
    fn default() -> Self {
        Self {
            speed: 3.0,
            collision_radius: 0.8,
            max_health: 2,
            attack_cooldown: 1.0,
            body_center_height: 1.0,
            avoid_radius: 2.5,
            avoid_gain: 2.0,
            arrive_epsilon: 0.1,
            walk_cycle_rate: 10.0,
            bounds: 48.0,
            spawn_extent: 40.0,
            spawn_attempts: 100,
        }
    }
}

/// Actor count per selectable level (level 1 is index 0).
#[derive(Debug, Clone)]
pub struct LevelTable {
    pub enemy_counts: [usize; 3],
}

impl Default for LevelTable {
    fn default() -> Self {
        Self { enemy_counts: [5, 10, 15] }
    }
}

impl LevelTable {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 3;

    #[inline]
    pub fn enemy_count(&self, level: u8) -> usize {
        let idx = level.clamp(Self::FIRST, Self::LAST) - Self::FIRST;
        self.enemy_counts[idx as usize]
    }
}
