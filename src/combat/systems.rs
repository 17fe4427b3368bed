//! Combat domain: input sampling and the state-machine systems.

use bevy::ecs::message::MessageWriter;
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::animation::{BlendSlot, ClipId, PlayClip, StopClip};
use crate::combat::attacks::MoveKey;
use crate::combat::components::CombatState;
use crate::combat::events::{AttackPerformed, AttackVariant, DodgePerformed};
use crate::combat::resources::{CombatInput, CombatTuning, CursorDelta};
use crate::combat::timers::{ActionTimers, TimerPurpose, apply_expiry};
use crate::movement::Player;

/// Maps raw pixel deltas into the small axis range the classification
/// thresholds are tuned for.
const MOUSE_AXIS_SCALE: f32 = 0.07;

pub(crate) fn read_combat_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut input: ResMut<CombatInput>,
) {
    input.punch = mouse.just_pressed(MouseButton::Left);
    input.kick = mouse.just_pressed(MouseButton::Right);
    input.dodge = keyboard.just_pressed(KeyCode::Space);
    // Guard is a hold, so both edges matter
    input.guard_pressed = keyboard.just_pressed(KeyCode::KeyG);
    input.guard_released = keyboard.just_released(KeyCode::KeyG);
    input.combat_toggle = keyboard.just_pressed(KeyCode::Tab);
}

pub(crate) fn sample_cursor(
    motion: Res<AccumulatedMouseMotion>,
    mut cursor: ResMut<CursorDelta>,
) {
    // Pushing the mouse forward (up on screen) yields negative y, which is
    // what the straight/high-kick thresholds expect.
    cursor.x = motion.delta.x * MOUSE_AXIS_SCALE;
    cursor.y = motion.delta.y * MOUSE_AXIS_SCALE;
}

pub(crate) fn apply_directional_edges(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut fighters: Query<&mut CombatState, With<Player>>,
) {
    let bindings = [
        (KeyCode::KeyW, MoveKey::Forward),
        (KeyCode::KeyS, MoveKey::Back),
        (KeyCode::KeyA, MoveKey::Left),
        (KeyCode::KeyD, MoveKey::Right),
    ];

    for mut state in &mut fighters {
        for (code, key) in bindings {
            if keyboard.just_pressed(code) {
                state.set_direction(key, true);
            }
            if keyboard.just_released(code) {
                state.set_direction(key, false);
            }
        }
    }
}

pub(crate) fn apply_combat_toggle(
    input: Res<CombatInput>,
    mut fighters: Query<&mut CombatState, With<Player>>,
) {
    if !input.combat_toggle {
        return;
    }
    for mut state in &mut fighters {
        state.toggle_combat_mode();
    }
}

pub(crate) fn punch_attacks(
    input: Res<CombatInput>,
    cursor: Res<CursorDelta>,
    tuning: Res<CombatTuning>,
    mut fighters: Query<(Entity, &mut CombatState, &mut ActionTimers), With<Player>>,
    mut clips: MessageWriter<PlayClip>,
    mut attacks: MessageWriter<AttackPerformed>,
) {
    if !input.punch {
        return;
    }
    for (entity, mut state, mut timers) in &mut fighters {
        let Some(variant) = state.try_punch(cursor.y, &tuning) else {
            continue;
        };
        clips.write(PlayClip {
            entity,
            clip: variant.clip(),
            rate: variant.play_rate(),
            slot: None,
        });
        attacks.write(AttackPerformed {
            entity,
            variant: AttackVariant::Punch(variant),
            damage: state.pending_damage,
        });
        // While a dodge or its advantage window is up, the dodge chain owns
        // the lockout clear instead.
        if !state.defers_attack_recovery() {
            timers.arm(TimerPurpose::PunchRecover, tuning.punch_recover);
        }
    }
}

pub(crate) fn kick_attacks(
    input: Res<CombatInput>,
    cursor: Res<CursorDelta>,
    tuning: Res<CombatTuning>,
    mut fighters: Query<(Entity, &mut CombatState, &mut ActionTimers), With<Player>>,
    mut clips: MessageWriter<PlayClip>,
    mut attacks: MessageWriter<AttackPerformed>,
) {
    if !input.kick {
        return;
    }
    for (entity, mut state, mut timers) in &mut fighters {
        let Some(variant) = state.try_kick(cursor.y, &tuning) else {
            continue;
        };
        clips.write(PlayClip {
            entity,
            clip: variant.clip(),
            rate: variant.play_rate(),
            slot: None,
        });
        attacks.write(AttackPerformed {
            entity,
            variant: AttackVariant::Kick(variant),
            damage: state.pending_damage,
        });
        if !state.defers_attack_recovery() {
            timers.arm(TimerPurpose::KickRecover, tuning.kick_recover);
        }
    }
}

pub(crate) fn guard_control(
    input: Res<CombatInput>,
    tuning: Res<CombatTuning>,
    mut fighters: Query<(Entity, &mut CombatState), With<Player>>,
    mut clips: MessageWriter<PlayClip>,
    mut stops: MessageWriter<StopClip>,
) {
    for (entity, mut state) in &mut fighters {
        if input.guard_pressed && state.guard_started(&tuning) {
            clips.write(PlayClip {
                entity,
                clip: ClipId::Guard,
                rate: 1.0,
                slot: Some(BlendSlot::UpperBody),
            });
        }
        if input.guard_released {
            state.guard_stopped();
            stops.write(StopClip {
                entity,
                clip: ClipId::Guard,
            });
        }
    }
}

pub(crate) fn dodge_control(
    input: Res<CombatInput>,
    tuning: Res<CombatTuning>,
    mut fighters: Query<(Entity, &mut CombatState, &mut ActionTimers), With<Player>>,
    mut clips: MessageWriter<PlayClip>,
    mut dodges: MessageWriter<DodgePerformed>,
) {
    if !input.dodge {
        return;
    }
    for (entity, mut state, mut timers) in &mut fighters {
        let Some(side) = state.try_dodge(&tuning) else {
            continue;
        };
        clips.write(PlayClip {
            entity,
            clip: side.clip(),
            rate: 1.0,
            slot: None,
        });
        dodges.write(DodgePerformed { entity, side });
        timers.arm(TimerPurpose::DodgeEnd, tuning.dodge_duration);
    }
}

/// Fast horizontal cursor swipes while idle in combat mode play a pivot
/// montage on the full body, then hand the slot back to the upper body.
pub(crate) fn pivot_control(
    cursor: Res<CursorDelta>,
    tuning: Res<CombatTuning>,
    mut fighters: Query<(Entity, &mut CombatState, &mut ActionTimers), With<Player>>,
    mut clips: MessageWriter<PlayClip>,
) {
    for (entity, mut state, mut timers) in &mut fighters {
        if !state.combat_mode || state.kicking || state.punching {
            continue;
        }
        // One pivot per reset window
        if timers.is_pending(TimerPurpose::PivotReset) {
            continue;
        }
        let clip = if cursor.x > tuning.pivot_threshold {
            ClipId::RightPivot
        } else if cursor.x < -tuning.pivot_threshold {
            ClipId::LeftPivot
        } else {
            continue;
        };
        state.upper_body_slot = false;
        clips.write(PlayClip {
            entity,
            clip,
            rate: 1.4,
            slot: None,
        });
        timers.arm(TimerPurpose::PivotReset, tuning.pivot_reset);
    }
}

/// Drive every pending countdown from simulation time and apply expiries.
/// `Time` here is virtual time, so pausing the game pauses the machine.
pub(crate) fn tick_action_timers(
    time: Res<Time>,
    tuning: Res<CombatTuning>,
    mut fighters: Query<(&mut CombatState, &mut ActionTimers)>,
) {
    let dt = time.delta_secs();
    for (mut state, mut timers) in &mut fighters {
        for purpose in timers.tick(dt) {
            apply_expiry(purpose, &mut state, &mut timers, &tuning);
        }
    }
}
