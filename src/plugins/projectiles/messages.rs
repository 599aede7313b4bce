//! Buffered throw requests.
//!
//! The charge logic (producer) only decides *that* a throw happens; the
//! launcher (consumer) is the single writer of `Projectile` state.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct ThrowRequest {
    pub origin: Vec3,
    pub direction: Vec3,
    /// Normalized charge in `[0, 1]`.
    pub charge: f32,
}
