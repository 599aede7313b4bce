//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `frisbee_takedown::game::configure_headless` to install gameplay plugins.
//! - no input devices exist; tests drive the game through `InputIntents`.

#![allow(dead_code)]

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use frisbee_takedown::common::state::GameState;
use frisbee_takedown::plugins::input::{InputIntents, MenuIntent};

pub fn app_headless() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    frisbee_takedown::game::configure_headless(&mut app);
    app
}

pub fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

/// Queue a transition and run the frame that applies it.
pub fn enter(app: &mut App, state: GameState) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(state);
    app.update();
}

/// Run one frame with `menu` as this frame's menu input, then clear it.
pub fn press(app: &mut App, menu: MenuIntent) {
    app.world_mut().resource_mut::<InputIntents>().menu = menu;
    app.update();
    app.world_mut().resource_mut::<InputIntents>().menu = MenuIntent::default();
}
