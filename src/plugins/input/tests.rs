use bevy::prelude::*;

use super::{gather_input, InputIntents, MoveIntent};
use crate::common::test_utils::run_system_once;

#[test]
fn no_devices_leaves_intents_untouched() {
    let mut world = World::new();
    let preset = InputIntents {
        movement: MoveIntent { forward: true, ..default() },
        ..default()
    };
    world.insert_resource(preset.clone());

    run_system_once(&mut world, gather_input);

    assert_eq!(world.resource::<InputIntents>().movement, preset.movement);
}

#[test]
fn keys_map_to_movement_and_menu() {
    let mut world = World::new();
    world.init_resource::<InputIntents>();

    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::KeyW);
    keys.press(KeyCode::KeyA);
    keys.press(KeyCode::ShiftLeft);
    keys.press(KeyCode::Digit2);
    keys.press(KeyCode::Enter);
    world.insert_resource(keys);

    let mut mouse = ButtonInput::<MouseButton>::default();
    mouse.press(MouseButton::Left);
    world.insert_resource(mouse);

    run_system_once(&mut world, gather_input);

    let i = world.resource::<InputIntents>();
    assert!(i.movement.forward && i.movement.left && i.movement.sprint);
    assert!(!i.movement.back && !i.movement.right && !i.movement.jump);
    assert!(i.movement.is_moving());
    assert_eq!(i.movement.look_delta, Vec2::ZERO);

    assert!(i.primary.pressed && i.primary.held && !i.primary.released);

    assert!(i.menu.any_key);
    assert!(i.menu.confirm);
    assert_eq!(i.menu.pick, Some(2));
    assert!(!i.menu.cancel && !i.menu.previous && !i.menu.next);
}

#[test]
fn escape_and_arrows_are_menu_edges() {
    let mut world = World::new();
    world.init_resource::<InputIntents>();

    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::Escape);
    keys.press(KeyCode::ArrowLeft);
    world.insert_resource(keys);

    run_system_once(&mut world, gather_input);

    let m = world.resource::<InputIntents>().menu;
    assert!(m.cancel);
    assert!(m.previous);
    assert!(!m.next);
}
