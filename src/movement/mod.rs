//! Movement domain: locomotion tiers, fighter spawn, and the follow camera.

use bevy::prelude::*;

use resources::MovementInput;

mod bootstrap;
pub mod components;
pub mod resources;
mod systems;


pub use components::{LocomotionSpeeds, MaxMoveSpeed, Player};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(Startup, bootstrap::spawn_fighter)
            .add_systems(
                Update,
                (
                    systems::read_move_input,
                    systems::speed_tier_control,
                    systems::jump_control,
                    systems::apply_locomotion,
                    systems::apply_vertical_motion,
                    (systems::rotate_camera_rig, systems::follow_camera).chain(),
                )
                    .chain(),
            );
    }
}
