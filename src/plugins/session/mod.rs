//! Session plugin: the game-state machine and the per-frame orchestration of
//! the simulation while `Playing`.
//!
//! # Frame order
//! ```text
//!   Update
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  FrameSet::Input   gather_input -> InputIntents                            │
//!│  FrameSet::Menu    title / level select / game over / victory screens      │
//!│  FrameSet::Play    (only while Playing)                                    │
//!│     PlaySet::Player      drive_player, then footstep loop gating           │
//!│     PlaySet::Actors      steer_actors                                      │
//!│     PlaySet::Throw       request_throw -> launch_projectile                │
//!│     PlaySet::Projectile  fly_projectile, hold_in_hand                      │
//!│     PlaySet::Collisions  projectile vs actors, actors vs player            │
//!│     PlaySet::Outcome     damage flash, win / lose, throw animation timer   │
//!└────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Transitions
//! Screens decide with pure functions (`title_transition`, ...) over the
//! frame's `MenuIntent`; the systems only forward the answer to
//! `NextState<GameState>`. Every level start, whether from LevelSelect or from
//! Victory's "next level", goes through `OnEnter(Playing)` and rebuilds the
//! player, projectile and actor pool from scratch.
//!
//! A frame where the last actor dies and the player dies is a Victory; the
//! death cue still plays.

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::{LevelTable, Tunables};
use crate::plugins::audio::{AudioCue, FootstepLoop};
use crate::plugins::enemies::{ActorPool, HitOutcome, SpawnRng};
use crate::plugins::input::{InputIntents, MenuIntent};
use crate::plugins::player::{drive_player, CameraPose, Player};
use crate::plugins::projectiles::Projectile;
use crate::plugins::world::Arena;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Menu,
    Play,
}

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlaySet {
    Player,
    Actors,
    Throw,
    Projectile,
    Collisions,
    Outcome,
}

/// Level selection and progress of the level in play.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// 1-based, always within `LevelTable::FIRST..=LevelTable::LAST`.
    pub selected_level: u8,
    /// Mirror of `ActorPool::live_count`, refreshed after every hit.
    pub enemies_remaining: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            selected_level: LevelTable::FIRST,
            enemies_remaining: 0,
        }
    }
}

impl Session {
    /// Step selection up, wrapping from the first level to the last.
    pub fn select_previous(&mut self) {
        self.selected_level = if self.selected_level <= LevelTable::FIRST {
            LevelTable::LAST
        } else {
            self.selected_level - 1
        };
    }

    /// Step selection down, wrapping from the last level to the first.
    pub fn select_next(&mut self) {
        self.selected_level = if self.selected_level >= LevelTable::LAST {
            LevelTable::FIRST
        } else {
            self.selected_level + 1
        };
    }

    /// Direct pick; out-of-range levels are ignored.
    pub fn pick(&mut self, level: u8) {
        if (LevelTable::FIRST..=LevelTable::LAST).contains(&level) {
            self.selected_level = level;
        }
    }

    /// Move on after a victory. The last level repeats.
    pub fn advance_level(&mut self) {
        self.selected_level = (self.selected_level + 1).min(LevelTable::LAST);
    }
}

// -----------------------------------------------------------------------------
// Transition rules
// -----------------------------------------------------------------------------

pub fn title_transition(menu: &MenuIntent) -> Option<GameState> {
    menu.any_key.then_some(GameState::LevelSelect)
}

/// Navigation applies in order: previous, next, direct pick, then confirm.
pub fn level_select_transition(session: &mut Session, menu: &MenuIntent) -> Option<GameState> {
    if menu.previous {
        session.select_previous();
    }
    if menu.next {
        session.select_next();
    }
    if let Some(level) = menu.pick {
        session.pick(level);
    }
    menu.confirm.then_some(GameState::Playing)
}

pub fn game_over_transition(menu: &MenuIntent) -> Option<GameState> {
    menu.confirm.then_some(GameState::LevelSelect)
}

/// Confirm advances to the next level; cancel returns to LevelSelect and wins
/// over confirm when both arrive in one frame.
pub fn victory_transition(session: &mut Session, menu: &MenuIntent) -> Option<GameState> {
    let mut next = None;
    if menu.confirm {
        session.advance_level();
        next = Some(GameState::Playing);
    }
    if menu.cancel {
        next = Some(GameState::LevelSelect);
    }
    next
}

/// End of level check. Victory takes precedence over GameOver.
pub fn playing_outcome(player_health: i32, cleared: bool) -> Option<GameState> {
    if cleared {
        Some(GameState::Victory)
    } else if player_health <= 0 {
        Some(GameState::GameOver)
    } else {
        None
    }
}

// -----------------------------------------------------------------------------
// Plugin wiring
// -----------------------------------------------------------------------------

pub fn plugin(app: &mut App) {
    app.init_resource::<Session>();

    app.configure_sets(Update, (FrameSet::Input, FrameSet::Menu, FrameSet::Play).chain())
        .configure_sets(
            Update,
            (
                PlaySet::Player,
                PlaySet::Actors,
                PlaySet::Throw,
                PlaySet::Projectile,
                PlaySet::Collisions,
                PlaySet::Outcome,
            )
                .chain()
                .in_set(FrameSet::Play),
        );

    app.add_systems(
        Update,
        (
            title_screen.run_if(in_state(GameState::Title)),
            level_select_screen.run_if(in_state(GameState::LevelSelect)),
            game_over_screen.run_if(in_state(GameState::GameOver)),
            victory_screen.run_if(in_state(GameState::Victory)),
        )
            .in_set(FrameSet::Menu),
    );

    app.add_systems(Startup, start_menu_music)
        .add_systems(OnEnter(GameState::Playing), begin_level)
        .add_systems(OnExit(GameState::Playing), end_level);

    app.add_systems(
        Update,
        update_footsteps
            .after(drive_player)
            .in_set(PlaySet::Player)
            .run_if(in_state(GameState::Playing)),
    );

    app.add_systems(
        Update,
        (resolve_projectile_hits, resolve_player_contact)
            .chain()
            .in_set(PlaySet::Collisions)
            .run_if(in_state(GameState::Playing)),
    );

    app.add_systems(
        Update,
        (tick_damage_flash, check_outcome, tick_throw_animation)
            .chain()
            .in_set(PlaySet::Outcome)
            .run_if(in_state(GameState::Playing)),
    );
}

// -----------------------------------------------------------------------------
// Screens
// -----------------------------------------------------------------------------

fn title_screen(intents: Res<InputIntents>, mut next: ResMut<NextState<GameState>>) {
    if let Some(state) = title_transition(&intents.menu) {
        next.set(state);
    }
}

fn level_select_screen(
    intents: Res<InputIntents>,
    mut session: ResMut<Session>,
    mut next: ResMut<NextState<GameState>>,
) {
    if let Some(state) = level_select_transition(&mut session, &intents.menu) {
        info!("starting level {}", session.selected_level);
        next.set(state);
    }
}

fn game_over_screen(intents: Res<InputIntents>, mut next: ResMut<NextState<GameState>>) {
    if let Some(state) = game_over_transition(&intents.menu) {
        next.set(state);
    }
}

fn victory_screen(
    intents: Res<InputIntents>,
    mut session: ResMut<Session>,
    mut next: ResMut<NextState<GameState>>,
) {
    if let Some(state) = victory_transition(&mut session, &intents.menu) {
        next.set(state);
    }
}

// -----------------------------------------------------------------------------
// Level lifecycle
// -----------------------------------------------------------------------------

/// Music plays from boot so the title and level select are not silent.
fn start_menu_music(mut cues: MessageWriter<AudioCue>) {
    cues.write(AudioCue::MusicStart);
}

/// Rebuild every piece of per-level state for `Session::selected_level`.
#[allow(clippy::too_many_arguments)]
pub fn begin_level(
    tunables: Res<Tunables>,
    arena: Res<Arena>,
    mut rng: ResMut<SpawnRng>,
    mut session: ResMut<Session>,
    mut player: ResMut<Player>,
    mut camera: ResMut<CameraPose>,
    mut projectile: ResMut<Projectile>,
    mut pool: ResMut<ActorPool>,
    mut cues: MessageWriter<AudioCue>,
) {
    *player = Player::new(&tunables.player, arena.player_start);
    *camera = player.camera_pose();
    projectile.reset();

    let count = tunables.levels.enemy_count(session.selected_level);
    *pool = ActorPool::spawn(count, &arena, &tunables.actors, &mut rng.0);
    session.enemies_remaining = pool.live_count();

    cues.write(AudioCue::MusicStart);
    info!(
        "level {} begins with {} actors",
        session.selected_level, session.enemies_remaining
    );
}

fn end_level(mut footsteps: ResMut<FootstepLoop>, mut cues: MessageWriter<AudioCue>) {
    cues.write(AudioCue::MusicStop);
    if let Some(cue) = footsteps.set(false) {
        cues.write(cue);
    }
}

// -----------------------------------------------------------------------------
// Per-frame orchestration
// -----------------------------------------------------------------------------

/// Footsteps loop while the player walks on the ground.
fn update_footsteps(
    intents: Res<InputIntents>,
    player: Res<Player>,
    mut footsteps: ResMut<FootstepLoop>,
    mut cues: MessageWriter<AudioCue>,
) {
    let walking = intents.movement.is_moving() && player.grounded;
    if let Some(cue) = footsteps.set(walking) {
        cues.write(cue);
    }
}

pub fn resolve_projectile_hits(
    tunables: Res<Tunables>,
    mut projectile: ResMut<Projectile>,
    mut pool: ResMut<ActorPool>,
    mut session: ResMut<Session>,
    mut cues: MessageWriter<AudioCue>,
) {
    if !projectile.in_flight() {
        return;
    }

    let cue = match pool.apply_projectile_hit(
        projectile.position,
        tunables.projectile.radius,
        &tunables.actors,
    ) {
        HitOutcome::None => return,
        HitOutcome::Damaged => AudioCue::ActorDamaged,
        HitOutcome::Killed => AudioCue::ActorKilled,
    };

    projectile.reset();
    session.enemies_remaining = pool.live_count();
    cues.write(cue);
    debug!("actor hit: {cue:?}, {} remaining", session.enemies_remaining);
}

pub fn resolve_player_contact(
    tunables: Res<Tunables>,
    mut pool: ResMut<ActorPool>,
    mut player: ResMut<Player>,
    mut cues: MessageWriter<AudioCue>,
) {
    let damage = pool.apply_player_contact(
        player.position,
        tunables.player.collision_radius,
        &tunables.actors,
    );
    if damage == 0 {
        return;
    }

    player.health -= damage as i32;
    player.damage_flash = tunables.player.damage_flash_secs;
    cues.write(AudioCue::PlayerDamaged);
    debug!("player took {damage} damage, health {}", player.health);
}

fn tick_damage_flash(time: Res<Time>, mut player: ResMut<Player>) {
    if player.damage_flash > 0.0 {
        player.damage_flash = (player.damage_flash - time.delta_secs()).max(0.0);
    }
}

pub fn check_outcome(
    player: Res<Player>,
    pool: Res<ActorPool>,
    mut next: ResMut<NextState<GameState>>,
    mut cues: MessageWriter<AudioCue>,
) {
    let Some(state) = playing_outcome(player.health, pool.is_cleared()) else {
        return;
    };

    // The death cue plays even when the same frame also clears the level.
    if !player.is_alive() {
        cues.write(AudioCue::PlayerDied);
    }
    info!("level over: {state:?}");
    next.set(state);
}

fn tick_throw_animation(time: Res<Time>, mut player: ResMut<Player>) {
    if !player.throwing {
        return;
    }
    player.throw_timer = (player.throw_timer - time.delta_secs()).max(0.0);
    if player.throw_timer <= 0.0 {
        player.throwing = false;
    }
}
