//! Core: simulation pause.
//!
//! Pausing stops virtual time, which is what every combat timer ticks from,
//! so pending attack/dodge/sprint windows freeze with the simulation.

use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, toggle_pause);
    }
}

fn toggle_pause(keyboard: Res<ButtonInput<KeyCode>>, mut time: ResMut<Time<Virtual>>) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }
    if time.is_paused() {
        time.unpause();
    } else {
        time.pause();
    }
}
