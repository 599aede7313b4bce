//! Core plugin: shared resources and global settings.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

/// Clear colour behind the arena, linear sRGB components.
pub const SKY: Vec3 = Vec3::new(0.53, 0.81, 0.92);

pub fn plugin(app: &mut App) {
    let tunables = Tunables::default();
    debug!(
        "tunables: {} levels, drag model {:?}",
        tunables.levels.enemy_counts.len(),
        tunables.projectile.drag_model
    );

    app.insert_resource(tunables);
    app.insert_resource(ClearColor(Color::srgb(SKY.x, SKY.y, SKY.z)));
}

#[cfg(test)]
mod tests;
