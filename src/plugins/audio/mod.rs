//! Audio cues.
//!
//! The simulation never plays sound. It writes `AudioCue` messages and an
//! external player consumes them. The only playback state the simulation
//! keeps is `FootstepLoop`, so the looped footstep cue is started and stopped
//! on edges instead of every frame.

use bevy::prelude::*;

#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum AudioCue {
    /// Volume scales with throw charge.
    ThrowFired { volume: f32 },
    ActorDamaged,
    ActorKilled,
    PlayerDamaged,
    PlayerDied,
    MusicStart,
    MusicStop,
    FootstepsStart,
    FootstepsStop,
}

impl AudioCue {
    /// `0.3` at zero charge, `1.0` at full charge.
    #[inline]
    pub fn throw(charge: f32) -> Self {
        Self::ThrowFired { volume: 0.3 + 0.7 * charge.clamp(0.0, 1.0) }
    }
}

/// Whether the looped footstep cue is currently playing.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FootstepLoop {
    pub active: bool,
}

impl FootstepLoop {
    /// Start or stop the loop; returns the cue to emit on an edge.
    pub fn set(&mut self, want: bool) -> Option<AudioCue> {
        if want == self.active {
            return None;
        }
        self.active = want;
        Some(if want { AudioCue::FootstepsStart } else { AudioCue::FootstepsStop })
    }
}

pub fn plugin(app: &mut App) {
    app.add_message::<AudioCue>()
        .init_resource::<FootstepLoop>()
        .add_systems(PostUpdate, log_audio_cues);
}

/// Stand-in sink until a sound backend is attached.
fn log_audio_cues(mut cues: MessageReader<AudioCue>) {
    for cue in cues.read() {
        debug!("audio cue: {cue:?}");
    }
}
