//! Movement domain: locomotion input resource.

use bevy::prelude::*;

/// Per-frame locomotion input: the movement axis plus the sprint and
/// toggle-run edges.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub sprint_pressed: bool,
    pub sprint_released: bool,
    pub toggle_run_pressed: bool,
    pub jump_pressed: bool,
}
