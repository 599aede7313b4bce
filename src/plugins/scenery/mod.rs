//! Scenery plugin (render-only): meshes for the arena, the actors and the
//! frisbee, mirrored from the simulation resources every frame.
//!
//! Nothing here feeds back into the simulation. Level geometry is spawned on
//! `OnEnter(Playing)` and despawned on exit; actor views are a fixed set of
//! `MAX_ACTORS` entities indexed by pool slot.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::core::SKY;
use crate::plugins::enemies::{ActorPool, MAX_ACTORS};
use crate::plugins::player::Player;
use crate::plugins::projectiles::Projectile;
use crate::plugins::world::{Aabb, Arena, OBSTACLE_COUNT};

/// View of pool slot `.0`.
#[derive(Component)]
pub struct ActorView(pub usize);

#[derive(Component)]
pub struct ProjectileView;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Playing), spawn_level_scenery)
        .add_systems(OnExit(GameState::Playing), clear_damage_tint)
        .add_systems(
            PostUpdate,
            (sync_actor_views, sync_projectile_view, flash_on_damage)
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::Playing)),
        );
}

fn box_transform(b: &Aabb) -> Transform {
    Transform::from_translation(b.center())
}

fn spawn_level_scenery(
    mut commands: Commands,
    arena: Res<Arena>,
    tunables: Res<Tunables>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(20.0, 40.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        DespawnOnExit(GameState::Playing),
    ));

    let size = arena.half_extent * 2.0;
    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(size, size))),
        MeshMaterial3d(materials.add(Color::srgb(0.35, 0.6, 0.3))),
        DespawnOnExit(GameState::Playing),
    ));

    let wall_mat = materials.add(Color::srgb(0.55, 0.55, 0.55));
    for wall in arena.walls() {
        commands.spawn((
            Name::new("Wall"),
            Mesh3d(meshes.add(Cuboid::from_size(wall.size()))),
            MeshMaterial3d(wall_mat.clone()),
            box_transform(&wall),
            DespawnOnExit(GameState::Playing),
        ));
    }

    let trunk_mat = materials.add(Color::srgb(0.45, 0.3, 0.15));
    let foliage_mat = materials.add(Color::srgb(0.1, 0.45, 0.1));
    for i in 0..OBSTACLE_COUNT {
        let trunk = arena.obstacle_trunk(i);
        let foliage = arena.obstacle_foliage(i);
        commands.spawn((
            Name::new(format!("Trunk {i}")),
            Mesh3d(meshes.add(Cuboid::from_size(trunk.size()))),
            MeshMaterial3d(trunk_mat.clone()),
            box_transform(&trunk),
            DespawnOnExit(GameState::Playing),
        ));
        commands.spawn((
            Name::new(format!("Foliage {i}")),
            Mesh3d(meshes.add(Cuboid::from_size(foliage.size()))),
            MeshMaterial3d(foliage_mat.clone()),
            box_transform(&foliage),
            DespawnOnExit(GameState::Playing),
        ));
    }

    let height = tunables.actors.body_center_height * 2.0;
    let actor_mesh = meshes.add(Capsule3d::new(tunables.actors.collision_radius * 0.5, height * 0.5));
    let actor_mat = materials.add(Color::srgb(0.8, 0.2, 0.2));
    for slot in 0..MAX_ACTORS {
        commands.spawn((
            Name::new(format!("Actor {slot}")),
            ActorView(slot),
            Mesh3d(actor_mesh.clone()),
            MeshMaterial3d(actor_mat.clone()),
            Transform::default(),
            Visibility::Hidden,
            DespawnOnExit(GameState::Playing),
        ));
    }

    let r = tunables.projectile.radius;
    commands.spawn((
        Name::new("Frisbee"),
        ProjectileView,
        Mesh3d(meshes.add(Cylinder::new(r * 2.0, r * 0.4))),
        MeshMaterial3d(materials.add(Color::srgb(1.0, 0.85, 0.1))),
        Transform::default(),
        DespawnOnExit(GameState::Playing),
    ));
}

fn sync_actor_views(
    pool: Res<ActorPool>,
    tunables: Res<Tunables>,
    mut q: Query<(&ActorView, &mut Transform, &mut Visibility)>,
) {
    let actors = pool.actors();
    for (view, mut tf, mut vis) in &mut q {
        match actors.get(view.0).filter(|a| a.alive) {
            Some(actor) => {
                // Small bob keyed to the walk cycle.
                let bob = actor.walk_phase.sin().abs() * 0.1;
                tf.translation = actor.body_center(&tunables.actors) + Vec3::Y * bob;
                *vis = Visibility::Visible;
            }
            None => *vis = Visibility::Hidden,
        }
    }
}

fn sync_projectile_view(
    projectile: Res<Projectile>,
    mut q: Query<&mut Transform, With<ProjectileView>>,
) {
    let Ok(mut tf) = q.single_mut() else {
        return;
    };
    tf.translation = projectile.position;
    tf.rotation = Quat::from_rotation_y(projectile.rotation.to_radians());
}

/// Tint the sky red while the damage flash is running.
fn flash_on_damage(player: Res<Player>, tunables: Res<Tunables>, mut clear: ResMut<ClearColor>) {
    let t = (player.damage_flash / tunables.player.damage_flash_secs).clamp(0.0, 1.0);
    let c = SKY.lerp(Vec3::new(0.9, 0.1, 0.1), t * 0.6);
    clear.0 = Color::srgb(c.x, c.y, c.z);
}

/// Menus never show a leftover flash.
fn clear_damage_tint(mut clear: ResMut<ClearColor>) {
    clear.0 = Color::srgb(SKY.x, SKY.y, SKY.z);
}

#[cfg(test)]
mod tests;
