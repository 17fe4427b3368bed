//! Dev-tools overlay: periodic combat-state dumps for tuning sessions.
//!
//! Toggled with F3. Logs instead of drawing so it works in headless runs.

use bevy::prelude::*;

use crate::combat::CombatState;
use crate::movement::{MaxMoveSpeed, Player};

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_info: bool,
}

/// Seconds between state dumps while the overlay is on.
const DUMP_INTERVAL: f32 = 0.5;

#[derive(Resource, Debug, Default)]
struct DumpCountdown(f32);

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .init_resource::<DumpCountdown>()
            .add_systems(Update, (toggle_overlay, dump_combat_state).chain());
    }
}

fn toggle_overlay(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        state.show_info = !state.show_info;
        info!(
            "combat overlay {}",
            if state.show_info { "on" } else { "off" }
        );
    }
}

fn dump_combat_state(
    time: Res<Time>,
    debug: Res<DebugState>,
    mut countdown: ResMut<DumpCountdown>,
    fighters: Query<(&CombatState, &MaxMoveSpeed), With<Player>>,
) {
    if !debug.show_info {
        return;
    }
    countdown.0 -= time.delta_secs();
    if countdown.0 > 0.0 {
        return;
    }
    countdown.0 = DUMP_INTERVAL;

    for (state, max_speed) in &fighters {
        info!(
            "combat={} punch={} kick={} guard={} dodge={} advantage={} \
             upper={} sprint={} dmg={} mult={} red={} speed={}",
            state.combat_mode,
            state.punching,
            state.kicking,
            state.guarding,
            state.dodging,
            state.has_recently_dodged,
            state.upper_body_slot,
            state.sprinting,
            state.pending_damage,
            state.damage_multiplier,
            state.damage_reduction,
            max_speed.0,
        );
    }
}
