//! Projectiles plugin: the single frisbee, **message-based producer → consumer** throwing.
//!
//! # Data flow
//! ```text
//!   Update schedule (variable dt), only while Playing
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  PlaySet::Throw                                                            │
//!│  (A) Producer: request_throw                                               │
//!│      - reads: InputIntents.primary, CameraPose, Projectile.state           │
//!│      - mutates: Player.charging / Player.charge_time                       │
//!│      - writes: ThrowRequest message on release                             │
//!│                                                                            │
//!│  (B) Consumer: launch_projectile                                           │
//!│      - reads: ThrowRequest messages                                        │
//!│      - mutates: Projectile (Idle -> InFlight), Player.throwing/throw_timer │
//!│      - writes: AudioCue::ThrowFired                                        │
//!├────────────────────────────────────────────────────────────────────────────┤
//!│  PlaySet::Projectile                                                       │
//!│  (C) fly_projectile: integrate, then ground / obstacle / wall checks       │
//!│      - any terminal event: InFlight -> Idle                                │
//!│                                                                            │
//!│  (D) hold_in_hand: Idle frisbee follows the camera                         │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   PlaySet::Collisions (session): projectile vs actors, InFlight -> Idle on hit
//! ```
//!
//! # State machine
//! ```text
//!   Idle --(throw)--> InFlight --(ground | obstacle | wall | actor hit)--> Idle
//! ```
//! `reset` is idempotent; a level restart simply calls it again.

pub mod components;
pub mod flight;
pub mod launch;
pub mod messages;
pub mod request;

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::session::PlaySet;

pub use components::{Projectile, ProjectileState};
pub use flight::TerminalEvent;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Projectile::default())
            .add_message::<messages::ThrowRequest>();

        app.add_systems(
            Update,
            (request::request_throw, launch::launch_projectile)
                .chain()
                .in_set(PlaySet::Throw)
                .run_if(in_state(GameState::Playing)),
        );

        app.add_systems(
            Update,
            (flight::fly_projectile, flight::hold_in_hand)
                .chain()
                .in_set(PlaySet::Projectile)
                .run_if(in_state(GameState::Playing)),
        );
    }
}
