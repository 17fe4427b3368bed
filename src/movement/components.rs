//! Movement domain: fighter locomotion and camera-rig components.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// The locally-controlled fighter.
#[derive(Component, Debug)]
pub struct Player;

/// Three-tier locomotion speeds, constant per character archetype and
/// replicated from the authority to every client.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocomotionSpeeds {
    pub walk: f32,
    pub run: f32,
    pub sprint: f32,
}

impl Default for LocomotionSpeeds {
    fn default() -> Self {
        Self {
            walk: 150.0,
            run: 300.0,
            sprint: 600.0,
        }
    }
}

/// The max speed currently in effect on this simulation. Written locally for
/// responsiveness and re-applied by the authority through replication.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct MaxMoveSpeed(pub f32);

/// Plain-ownership camera rig configuration: the fighter owns its boom and
/// look rates instead of inheriting an engine camera component.
#[derive(Component, Debug, Clone)]
pub struct CameraRig {
    /// How far the camera trails behind the fighter.
    pub boom_length: f32,
    /// Camera lag interpolation speed.
    pub lag_speed: f32,
    /// The camera never trails further than this from its target point.
    pub lag_max_distance: f32,
    /// Yaw speed per unit of horizontal cursor delta.
    pub turn_rate: f32,
    /// Pitch speed per unit of vertical cursor delta.
    pub look_up_rate: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            boom_length: 300.0,
            lag_speed: 8.0,
            lag_max_distance: 130.0,
            turn_rate: 10.0,
            look_up_rate: 10.0,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

/// Character movement archetype parameters.
#[derive(Component, Debug, Clone)]
pub struct MovementParams {
    /// Yaw rate, degrees per second, when orienting toward movement input.
    pub rotation_rate: f32,
    pub jump_velocity: f32,
    pub air_control: f32,
}

impl Default for MovementParams {
    fn default() -> Self {
        Self {
            rotation_rate: 540.0,
            jump_velocity: 600.0,
            air_control: 0.2,
        }
    }
}

/// Vertical motion state for jumps. The ground plane is y = 0.
#[derive(Component, Debug, Default)]
pub struct JumpState {
    pub vertical_velocity: f32,
    pub airborne: bool,
}

/// Marker for the follow camera driven by the rig.
#[derive(Component, Debug)]
pub struct FollowCamera;
