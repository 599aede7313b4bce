//! Enemies plugin: a fixed-capacity pool of actors that chase the player,
//! steer around obstacles, and deal contact damage on a per-actor cooldown.
//!
//! ---------------------------
//! HOW THIS IS DESIGNED
//! ---------------------------
//! The pool is a plain resource of slots, not one entity per actor:
//!
//! 1) Slots are allocated once per level (`ActorPool::spawn`) and never
//!    reallocated. Dead actors keep their slot with `alive = false` and are
//!    skipped by every pass.
//!
//! 2) Iteration order is slot order. `apply_projectile_hit` stops at the
//!    first living actor in range, so slot order decides which actor takes a
//!    hit when several overlap the projectile.
//!
//! 3) `live_count` is a cache, decremented exactly once per death. The
//!    session reads it for the win condition.
//!
//! All operations are synchronous and infallible. Degenerate geometry (an
//! actor standing on the player or on an obstacle centre) is absorbed by
//! epsilon guards instead of normalizing zero vectors.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::common::state::GameState;
use crate::common::tunables::{ActorTuning, Tunables};
use crate::plugins::player::Player;
use crate::plugins::session::PlaySet;
use crate::plugins::world::{planar, Arena};

pub const MAX_ACTORS: usize = 15;

/// Obstacle pushes are skipped closer than this, the direction is undefined.
const PUSH_EPSILON: f32 = 0.01;

// -----------------------------------------------------------------------------
// Data
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    /// Feet position. Y stays at spawn height.
    pub position: Vec3,
    pub health: i32,
    pub alive: bool,
    pub attack_cooldown: f32,
    /// Cosmetic limb-swing phase in `[0, TAU)`.
    pub walk_phase: f32,
}

impl Actor {
    pub fn new(position: Vec3, tuning: &ActorTuning) -> Self {
        Self {
            position,
            health: tuning.max_health,
            alive: true,
            attack_cooldown: 0.0,
            walk_phase: 0.0,
        }
    }

    #[inline]
    pub fn body_center(&self, tuning: &ActorTuning) -> Vec3 {
        self.position + Vec3::Y * tuning.body_center_height
    }
}

/// Result of testing the projectile against the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    None,
    Damaged,
    Killed,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct ActorPool {
    slots: Vec<Actor>,
    live_count: usize,
}

/// RNG used for spawn placement and walk phases.
#[derive(Resource)]
pub struct SpawnRng(pub StdRng);

impl SpawnRng {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

// -----------------------------------------------------------------------------
// Pool operations
// -----------------------------------------------------------------------------

impl ActorPool {
    /// Populate `count` slots (clamped to `MAX_ACTORS`) by rejection sampling.
    ///
    /// A sample that never passes `Arena::is_spawn_valid` within the attempt
    /// budget is kept anyway; level start never fails.
    pub fn spawn(count: usize, arena: &Arena, tuning: &ActorTuning, rng: &mut impl Rng) -> Self {
        if count > MAX_ACTORS {
            warn!("requested {count} actors, pool capacity is {MAX_ACTORS}");
        }
        let count = count.min(MAX_ACTORS);
        let extent = tuning.spawn_extent;

        let mut slots = Vec::with_capacity(MAX_ACTORS);
        for i in 0..count {
            let walk_phase = rng.gen_range(0.0..TAU);

            let mut pos = Vec3::ZERO;
            let mut placed = false;
            for _ in 0..tuning.spawn_attempts {
                pos = Vec3::new(
                    rng.gen_range(-extent..=extent),
                    0.0,
                    rng.gen_range(-extent..=extent),
                );
                if arena.is_spawn_valid(pos, arena.player_start) {
                    placed = true;
                    break;
                }
            }
            if !placed {
                warn!("actor {i}: no valid spawn after {} attempts, using {pos}", tuning.spawn_attempts);
            }

            slots.push(Actor {
                walk_phase,
                ..Actor::new(pos, tuning)
            });
        }

        debug!("spawned {count} actors");
        Self { live_count: count, slots }
    }

    /// Build a pool from explicit actors (scripted setups, tests).
    pub fn with_actors(actors: impl IntoIterator<Item = Actor>) -> Self {
        let slots: Vec<Actor> = actors.into_iter().take(MAX_ACTORS).collect();
        let live_count = slots.iter().filter(|a| a.alive).count();
        Self { slots, live_count }
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.live_count
    }

    #[inline]
    pub fn actors(&self) -> &[Actor] {
        &self.slots
    }

    #[inline]
    pub fn is_cleared(&self) -> bool {
        self.live_count == 0
    }

    /// Seek, avoid, clamp, and tick timers for every living actor.
    pub fn update(&mut self, player_pos: Vec3, arena: &Arena, tuning: &ActorTuning, dt: f32) {
        let target = planar(player_pos);

        for actor in self.slots.iter_mut().filter(|a| a.alive) {
            let mut p = planar(actor.position);

            // Seek.
            let to_player = target - p;
            let dist = to_player.length();
            if dist > tuning.arrive_epsilon {
                p += to_player / dist * tuning.speed * dt;
            }

            // Avoid. Every nearby obstacle pushes independently.
            for obstacle in arena.obstacle_positions() {
                let away = p - obstacle;
                let d = away.length();
                if d < tuning.avoid_radius && d > PUSH_EPSILON {
                    let strength = (tuning.avoid_radius - d) * tuning.avoid_gain;
                    p += away / d * strength * dt;
                }
            }

            let b = tuning.bounds;
            p = p.clamp(Vec2::splat(-b), Vec2::splat(b));

            actor.position.x = p.x;
            actor.position.z = p.y;
            actor.attack_cooldown = (actor.attack_cooldown - dt).max(0.0);
            actor.walk_phase = (actor.walk_phase + tuning.walk_cycle_rate * dt).rem_euclid(TAU);
        }
    }

    /// Single-target hit test: the first living actor in slot order wins.
    pub fn apply_projectile_hit(
        &mut self,
        projectile_pos: Vec3,
        projectile_radius: f32,
        tuning: &ActorTuning,
    ) -> HitOutcome {
        let reach = projectile_radius + tuning.collision_radius;

        let Some(actor) = self
            .slots
            .iter_mut()
            .filter(|a| a.alive)
            .find(|a| a.body_center(tuning).distance(projectile_pos) < reach)
        else {
            return HitOutcome::None;
        };

        actor.health -= 1;
        if actor.health > 0 {
            return HitOutcome::Damaged;
        }

        actor.alive = false;
        self.live_count = self.live_count.saturating_sub(1);
        HitOutcome::Killed
    }

    /// Every living actor in reach with an expired cooldown deals one point
    /// of damage and restarts its own cooldown.
    pub fn apply_player_contact(
        &mut self,
        player_pos: Vec3,
        player_radius: f32,
        tuning: &ActorTuning,
    ) -> u32 {
        let reach = player_radius + tuning.collision_radius;
        let target = planar(player_pos);

        let mut damage = 0;
        for actor in self.slots.iter_mut().filter(|a| a.alive) {
            if planar(actor.position).distance(target) < reach && actor.attack_cooldown <= 0.0 {
                actor.attack_cooldown = tuning.attack_cooldown;
                damage += 1;
            }
        }
        damage
    }
}

// -----------------------------------------------------------------------------
// Plugin wiring
// -----------------------------------------------------------------------------

pub fn plugin(app: &mut App) {
    app.insert_resource(ActorPool::default())
        .insert_resource(SpawnRng::from_entropy())
        .add_systems(
            Update,
            steer_actors
                .in_set(PlaySet::Actors)
                .run_if(in_state(GameState::Playing)),
        );
}

/// Advance the pool toward the player's current pose.
pub fn steer_actors(
    time: Res<Time>,
    tunables: Res<Tunables>,
    arena: Res<Arena>,
    player: Res<Player>,
    mut pool: ResMut<ActorPool>,
) {
    pool.update(player.position, &arena, &tunables.actors, time.delta_secs());
}
