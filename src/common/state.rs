//! Global state machine.
//!
//! ```text
//! Title -> LevelSelect <-> { Playing -> GameOver | Victory } -> LevelSelect
//!                                          Victory -> Playing (next level)
//! ```
//!
//! Only `Playing` drives the simulation; every gameplay system is gated on
//! `in_state(GameState::Playing)`.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Title,
    LevelSelect,
    Playing,
    GameOver,
    Victory,
}
