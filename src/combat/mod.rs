//! Combat domain: the combat-input state machine.
//!
//! Interprets combined key/mouse state into punch, kick, guard, dodge, and
//! pivot actions, and runs the purpose-keyed timers that close their windows.

use bevy::prelude::*;

pub mod attacks;
pub mod components;
pub mod events;
pub mod resources;
mod systems;
pub mod timers;

#[cfg(test)]
mod tests;

pub use components::CombatState;
pub use events::{AttackPerformed, DodgePerformed};
pub use resources::{CombatInput, CombatTuning, CursorDelta};
pub use timers::{ActionTimers, TimerPurpose};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatTuning>()
            .init_resource::<CombatInput>()
            .init_resource::<CursorDelta>()
            .add_message::<AttackPerformed>()
            .add_message::<DodgePerformed>()
            .add_systems(
                Update,
                (
                    (systems::read_combat_input, systems::sample_cursor),
                    systems::apply_directional_edges,
                    systems::apply_combat_toggle,
                    (
                        systems::punch_attacks,
                        systems::kick_attacks,
                        systems::guard_control,
                        systems::dodge_control,
                        systems::pivot_control,
                    ),
                    systems::tick_action_timers,
                )
                    .chain(),
            );
    }
}
