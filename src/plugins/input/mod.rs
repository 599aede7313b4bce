//! Input plugin: translate device state into per-frame intents.
//!
//! Everything downstream reads `InputIntents`, never `ButtonInput` directly.
//! That keeps the simulation testable without input devices: headless apps
//! have no `ButtonInput` resources, `gather_input` becomes a no-op, and tests
//! write `InputIntents` themselves.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::plugins::session::FrameSet;

/// Movement and look for the player controller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveIntent {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
    /// Edge: true only on the frame the jump key went down.
    pub jump: bool,
    /// Mouse motion this frame, in pixels.
    pub look_delta: Vec2,
}

impl MoveIntent {
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }
}

/// Press / hold / release of the primary action (charge and throw).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonEdges {
    pub pressed: bool,
    pub held: bool,
    pub released: bool,
}

/// Menu navigation edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuIntent {
    pub any_key: bool,
    pub previous: bool,
    pub next: bool,
    /// Direct level pick (1..=3).
    pub pick: Option<u8>,
    pub confirm: bool,
    pub cancel: bool,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct InputIntents {
    pub movement: MoveIntent,
    pub primary: ButtonEdges,
    pub menu: MenuIntent,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<InputIntents>()
        .add_systems(Update, gather_input.in_set(FrameSet::Input));
}

pub fn gather_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    motion: Option<Res<AccumulatedMouseMotion>>,
    mut intents: ResMut<InputIntents>,
) {
    let Some(keys) = keys else { return; };

    intents.movement = MoveIntent {
        forward: keys.pressed(KeyCode::KeyW),
        back: keys.pressed(KeyCode::KeyS),
        left: keys.pressed(KeyCode::KeyA),
        right: keys.pressed(KeyCode::KeyD),
        sprint: keys.pressed(KeyCode::ShiftLeft),
        jump: keys.just_pressed(KeyCode::Space),
        look_delta: motion.map(|m| m.delta).unwrap_or(Vec2::ZERO),
    };

    intents.primary = match mouse {
        Some(mouse) => ButtonEdges {
            pressed: mouse.just_pressed(MouseButton::Left),
            held: mouse.pressed(MouseButton::Left),
            released: mouse.just_released(MouseButton::Left),
        },
        None => ButtonEdges::default(),
    };

    let pick = if keys.just_pressed(KeyCode::Digit1) {
        Some(1)
    } else if keys.just_pressed(KeyCode::Digit2) {
        Some(2)
    } else if keys.just_pressed(KeyCode::Digit3) {
        Some(3)
    } else {
        None
    };

    intents.menu = MenuIntent {
        any_key: keys.get_just_pressed().next().is_some(),
        previous: keys.any_just_pressed([KeyCode::ArrowUp, KeyCode::ArrowLeft]),
        next: keys.any_just_pressed([KeyCode::ArrowDown, KeyCode::ArrowRight]),
        pick,
        confirm: keys.just_pressed(KeyCode::Enter),
        cancel: keys.any_just_pressed([KeyCode::KeyQ, KeyCode::Escape]),
    };
}

#[cfg(test)]
mod tests;
