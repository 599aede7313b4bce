//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod audio;
pub mod core;
pub mod enemies;
pub mod input;
pub mod player;
pub mod projectiles;
pub mod session;
pub mod world;

// Render-only
pub mod camera;
pub mod scenery;

/// Register gameplay plugins that work in headless tests.
///
/// `core` and `world` go first: later plugins read `Tunables` and `Arena`
/// while building.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    world::plugin(app);
    session::plugin(app);
    input::plugin(app);
    audio::plugin(app);
    player::plugin(app);
    enemies::plugin(app);
    app.add_plugins(ProjectilesPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
    scenery::plugin(app);
}
