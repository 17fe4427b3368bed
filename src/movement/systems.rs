//! Movement domain: locomotion input, sprint/run tiers, and the follow
//! camera.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::{ActionTimers, CombatState, CombatTuning, CursorDelta, TimerPurpose};
use crate::movement::components::{
    CameraRig, FollowCamera, JumpState, LocomotionSpeeds, MaxMoveSpeed, MovementParams, Player,
};
use crate::movement::resources::MovementInput;
use crate::replication::SpeedChangeRequest;

/// Downward acceleration, matching the locomotion speed units.
const GRAVITY: f32 = 980.0;

pub(crate) fn read_move_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<MovementInput>,
) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.sprint_pressed = keyboard.just_pressed(KeyCode::ShiftLeft);
    input.sprint_released = keyboard.just_released(KeyCode::ShiftLeft);
    input.toggle_run_pressed = keyboard.just_pressed(KeyCode::KeyR);
    input.jump_pressed = keyboard.just_pressed(KeyCode::Space);
}

/// Launch a jump. Space is the dodge key in combat mode, so it only jumps
/// outside it, and never while already airborne.
pub(crate) fn jump_started(
    state: &CombatState,
    params: &MovementParams,
    jump: &mut JumpState,
) -> bool {
    if state.combat_mode || jump.airborne {
        return false;
    }
    jump.vertical_velocity = params.jump_velocity;
    jump.airborne = true;
    true
}

/// Flip toggle-run; returns the max speed to request.
pub(crate) fn toggle_run_speed(state: &mut CombatState, speeds: &LocomotionSpeeds) -> f32 {
    state.toggle_run = !state.toggle_run;
    if state.toggle_run { speeds.run } else { speeds.walk }
}

/// Sprint press. In combat mode the sprint is only a short pulse so the
/// fighter cannot dash continuously; no speed change is requested. Out of
/// combat it is sustained at full sprint speed until release.
pub(crate) fn sprint_started(
    state: &mut CombatState,
    timers: &mut ActionTimers,
    speeds: &LocomotionSpeeds,
    tuning: &CombatTuning,
) -> Option<f32> {
    state.sprinting = true;
    if state.combat_mode {
        timers.arm(TimerPurpose::SprintPulse, tuning.sprint_pulse);
        None
    } else {
        Some(speeds.sprint)
    }
}

/// Sprint release: fall back to the toggle-run tier.
pub(crate) fn sprint_stopped(state: &mut CombatState, speeds: &LocomotionSpeeds) -> f32 {
    state.sprinting = false;
    if state.toggle_run { speeds.run } else { speeds.walk }
}

pub(crate) fn speed_tier_control(
    input: Res<MovementInput>,
    tuning: Res<CombatTuning>,
    mut fighters: Query<
        (Entity, &mut CombatState, &mut ActionTimers, &LocomotionSpeeds),
        With<Player>,
    >,
    mut requests: MessageWriter<SpeedChangeRequest>,
) {
    for (entity, mut state, mut timers, speeds) in &mut fighters {
        if input.toggle_run_pressed {
            let speed = toggle_run_speed(&mut state, speeds);
            requests.write(SpeedChangeRequest { entity, speed });
        }
        if input.sprint_pressed {
            if let Some(speed) = sprint_started(&mut state, &mut timers, speeds, &tuning) {
                requests.write(SpeedChangeRequest { entity, speed });
            }
        }
        if input.sprint_released {
            let speed = sprint_stopped(&mut state, speeds);
            requests.write(SpeedChangeRequest { entity, speed });
        }
    }
}

pub(crate) fn jump_control(
    input: Res<MovementInput>,
    mut fighters: Query<(&CombatState, &MovementParams, &mut JumpState), With<Player>>,
) {
    if !input.jump_pressed {
        return;
    }
    for (state, params, mut jump) in &mut fighters {
        jump_started(state, params, &mut jump);
    }
}

/// Integrate the jump arc and land back on the ground plane.
pub(crate) fn apply_vertical_motion(
    time: Res<Time>,
    mut fighters: Query<(&mut Transform, &mut JumpState), With<Player>>,
) {
    let dt = time.delta_secs();
    for (mut transform, mut jump) in &mut fighters {
        if !jump.airborne {
            continue;
        }
        transform.translation.y += jump.vertical_velocity * dt;
        jump.vertical_velocity -= GRAVITY * dt;
        if transform.translation.y <= 0.0 {
            transform.translation.y = 0.0;
            jump.vertical_velocity = 0.0;
            jump.airborne = false;
        }
    }
}

/// Move the fighter in the camera-relative plane and turn it toward the
/// direction of travel at the archetype's rotation rate.
pub(crate) fn apply_locomotion(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut fighters: Query<
        (
            &mut Transform,
            &CameraRig,
            &MovementParams,
            &MaxMoveSpeed,
            &JumpState,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    if input.axis == Vec2::ZERO {
        return;
    }

    for (mut transform, rig, params, max_speed, jump) in &mut fighters {
        let rotation = Quat::from_rotation_y(rig.yaw);
        let forward = rotation * Vec3::NEG_Z;
        let right = rotation * Vec3::X;
        let direction = (forward * input.axis.y + right * input.axis.x).normalize_or_zero();
        if direction == Vec3::ZERO {
            continue;
        }

        // Steering authority drops to the air-control fraction mid-jump
        let control = if jump.airborne { params.air_control } else { 1.0 };
        transform.translation += direction * max_speed.0 * control * dt;

        // Orient toward movement, rate-limited
        let target_yaw = f32::atan2(-direction.x, -direction.z);
        let current_yaw = transform.rotation.to_euler(EulerRot::YXZ).0;
        let mut delta = target_yaw - current_yaw;
        while delta > std::f32::consts::PI {
            delta -= std::f32::consts::TAU;
        }
        while delta < -std::f32::consts::PI {
            delta += std::f32::consts::TAU;
        }
        let max_step = params.rotation_rate.to_radians() * dt;
        let step = delta.clamp(-max_step, max_step);
        transform.rotation = Quat::from_rotation_y(current_yaw + step);
    }
}

/// Turn the rig from cursor deltas. The same deltas feed attack
/// classification in the combat domain.
pub(crate) fn rotate_camera_rig(
    time: Res<Time>,
    cursor: Res<CursorDelta>,
    mut rigs: Query<&mut CameraRig, With<Player>>,
) {
    let dt = time.delta_secs();
    for mut rig in &mut rigs {
        rig.yaw -= cursor.x * rig.turn_rate * dt;
        rig.pitch = (rig.pitch - cursor.y * rig.look_up_rate * dt).clamp(-1.2, 1.2);
    }
}

/// Trail the camera behind the fighter on the boom, with bounded lag.
pub(crate) fn follow_camera(
    time: Res<Time>,
    fighters: Query<(&Transform, &CameraRig), (With<Player>, Without<FollowCamera>)>,
    mut cameras: Query<&mut Transform, With<FollowCamera>>,
) {
    let dt = time.delta_secs();
    let Ok((fighter, rig)) = fighters.single() else {
        return;
    };

    let boom = Quat::from_euler(EulerRot::YXZ, rig.yaw, rig.pitch, 0.0) * Vec3::Z;
    let target = fighter.translation + boom * rig.boom_length;

    for mut camera in &mut cameras {
        let blend = (rig.lag_speed * dt).min(1.0);
        let mut position = camera.translation.lerp(target, blend);
        let offset = position - target;
        if offset.length() > rig.lag_max_distance {
            position = target + offset.normalize() * rig.lag_max_distance;
        }
        camera.translation = position;
        camera.look_at(fighter.translation, Vec3::Y);
    }
}
