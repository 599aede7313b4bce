//! Throw consumer: launch the frisbee and start the throw animation.

use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::audio::AudioCue;
use crate::plugins::player::Player;

use super::components::Projectile;
use super::messages::ThrowRequest;

pub fn launch_projectile(
    tunables: Res<Tunables>,
    mut reader: MessageReader<ThrowRequest>,
    mut projectile: ResMut<Projectile>,
    mut player: ResMut<Player>,
    mut cues: MessageWriter<AudioCue>,
) {
    for req in reader.read() {
        // One frisbee; extra requests in the same frame are dropped.
        if projectile.in_flight() {
            continue;
        }

        projectile.throw(req.origin, req.direction, req.charge, &tunables.projectile);
        player.throwing = true;
        player.throw_timer = tunables.player.throw_anim_secs;

        cues.write(AudioCue::throw(req.charge));
        debug!("throw: charge {:.2}, velocity {}", req.charge, projectile.velocity);
    }
}
