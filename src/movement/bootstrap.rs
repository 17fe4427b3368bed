//! Movement domain: fighter spawn.

use bevy::prelude::*;

use crate::animation::MontagePlayer;
use crate::combat::{ActionTimers, CombatState};
use crate::movement::components::{
    CameraRig, FollowCamera, JumpState, LocomotionSpeeds, MaxMoveSpeed, MovementParams, Player,
};
use crate::replication::{ReplicationOutbox, ReplicationPayload};

/// Spawn the player fighter with its full combat and locomotion state, and
/// snapshot the speed tiers into the outbox so remote peers learn the
/// archetype constants.
pub(crate) fn spawn_fighter(mut commands: Commands, mut outbox: ResMut<ReplicationOutbox>) {
    let speeds = LocomotionSpeeds::default();

    let entity = commands
        .spawn((
            (
                Player,
                CombatState::default(),
                ActionTimers::default(),
                MontagePlayer::default(),
            ),
            (
                speeds,
                MaxMoveSpeed(speeds.walk),
                CameraRig::default(),
                MovementParams::default(),
                JumpState::default(),
            ),
            Transform::from_xyz(0.0, 0.0, 0.0),
        ))
        .id();

    outbox.push(&ReplicationPayload::SpeedTiers {
        entity_bits: entity.to_bits(),
        speeds,
    });

    commands.spawn((
        FollowCamera,
        Camera3d::default(),
        Transform::from_xyz(0.0, 150.0, 300.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!(
        "Fighter spawned: walk={} run={} sprint={}",
        speeds.walk, speeds.run, speeds.sprint
    );
}
