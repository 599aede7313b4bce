use bevy::prelude::*;
use crate::plugins::core;
use crate::common::tunables::{DragModel, Tunables};

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
}

#[test]
fn default_tunables_have_expected_values() {
    let t = Tunables::default();
    assert_eq!(t.player.max_health, 5);
    assert_eq!(t.actors.max_health, 2);
    assert_eq!(t.projectile.drag_model, DragModel::Linear);
    assert_eq!(t.levels.enemy_count(1), 5);
    assert_eq!(t.levels.enemy_count(3), 15);
}
