use bevy::prelude::*;

use super::{clear_damage_tint, flash_on_damage};
use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;
use crate::plugins::core::SKY;
use crate::plugins::player::Player;

fn sky() -> Color {
    Color::srgb(SKY.x, SKY.y, SKY.z)
}

#[test]
fn leaving_play_mid_flash_restores_sky() {
    let tunables = Tunables::default();
    let mut player = Player::new(&tunables.player, Vec3::ZERO);
    player.damage_flash = tunables.player.damage_flash_secs;

    let mut world = World::new();
    world.insert_resource(player);
    world.insert_resource(tunables);
    world.insert_resource(ClearColor(sky()));

    run_system_once(&mut world, flash_on_damage);
    assert_ne!(world.resource::<ClearColor>().0, sky());

    run_system_once(&mut world, clear_damage_tint);
    assert_eq!(world.resource::<ClearColor>().0, sky());
}
