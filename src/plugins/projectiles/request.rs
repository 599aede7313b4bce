use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::input::{ButtonEdges, InputIntents};
use crate::plugins::player::{CameraPose, Player};

use super::components::Projectile;
use super::messages::ThrowRequest;

/// Advance the charge state machine on the player's charge fields.
///
/// Press starts a fresh charge, hold accumulates up to `max_charge`, release
/// ends the charge and returns the normalized charge to throw with.
pub fn step_charge(player: &mut Player, edges: ButtonEdges, dt: f32, max_charge: f32) -> Option<f32> {
    if edges.pressed {
        player.charging = true;
        player.charge_time = 0.0;
    }

    if player.charging && edges.held {
        player.charge_time = (player.charge_time + dt).min(max_charge);
    }

    if player.charging && edges.released {
        let charge = player.charge_time / max_charge;
        player.charging = false;
        player.charge_time = 0.0;
        return Some(charge);
    }

    None
}

/// Producer: turn primary-button edges into a `ThrowRequest`.
///
/// Charging is only possible with the frisbee in hand and the previous throw
/// animation finished.
pub fn request_throw(
    time: Res<Time>,
    tunables: Res<Tunables>,
    intents: Res<InputIntents>,
    camera: Res<CameraPose>,
    projectile: Res<Projectile>,
    mut player: ResMut<Player>,
    mut writer: MessageWriter<ThrowRequest>,
) {
    if projectile.in_flight() || player.throwing {
        return;
    }

    let max = tunables.player.max_charge_secs;
    let Some(charge) = step_charge(&mut player, intents.primary, time.delta_secs(), max) else {
        return;
    };

    writer.write(ThrowRequest {
        origin: camera.position,
        direction: camera.forward(),
        charge,
    });
}
