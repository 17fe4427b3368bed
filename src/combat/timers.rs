//! Combat domain: purpose-keyed one-shot action timers.
//!
//! Each logical purpose holds at most one pending countdown; arming a purpose
//! that is already pending replaces the old countdown (last write wins, no
//! queueing). The timers live on the fighter entity, so despawning the entity
//! drops every pending expiry with it.

use bevy::prelude::*;

use crate::combat::components::CombatState;
use crate::combat::resources::CombatTuning;

/// Every delayed action the combat state machine can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPurpose {
    /// Clears the punch lockout after the punch montage window.
    PunchRecover,
    /// Clears the kick lockout after the kick montage window.
    KickRecover,
    /// Ends the dodge animation window, then hands off to the advantage
    /// window.
    DodgeEnd,
    /// Closes the post-dodge damage-advantage window.
    DodgeAdvantageEnd,
    /// Reverts the brief combat-mode sprint pulse.
    SprintPulse,
    /// Restores the upper-body slot after a pivot montage.
    PivotReset,
}

#[derive(Component, Debug, Default)]
pub struct ActionTimers {
    /// Pending countdowns in arm order. Seconds of simulation time remaining.
    pending: Vec<(TimerPurpose, f32)>,
}

impl ActionTimers {
    /// Schedule `purpose` to fire after `seconds`. Rearming an already
    /// pending purpose restarts its countdown.
    pub fn arm(&mut self, purpose: TimerPurpose, seconds: f32) {
        if let Some(entry) = self.pending.iter_mut().find(|(p, _)| *p == purpose) {
            entry.1 = seconds;
        } else {
            self.pending.push((purpose, seconds));
        }
    }

    pub fn is_pending(&self, purpose: TimerPurpose) -> bool {
        self.pending.iter().any(|(p, _)| *p == purpose)
    }

    pub fn remaining(&self, purpose: TimerPurpose) -> Option<f32> {
        self.pending
            .iter()
            .find(|(p, _)| *p == purpose)
            .map(|(_, r)| *r)
    }

    /// Advance all countdowns by `dt` seconds and return the purposes that
    /// expired, in arm order.
    pub fn tick(&mut self, dt: f32) -> Vec<TimerPurpose> {
        let mut fired = Vec::new();
        for (purpose, remaining) in &mut self.pending {
            *remaining -= dt;
            if *remaining <= 0.0 {
                fired.push(*purpose);
            }
        }
        self.pending.retain(|(_, remaining)| *remaining > 0.0);
        fired
    }
}

/// Apply the state effect of one expired timer. Shared by the tick system and
/// the tests so expiry semantics live in exactly one place.
pub fn apply_expiry(
    purpose: TimerPurpose,
    state: &mut CombatState,
    timers: &mut ActionTimers,
    tuning: &CombatTuning,
) {
    match purpose {
        TimerPurpose::PunchRecover => {
            state.upper_body_slot = true;
            state.punching = false;
            state.left_side_attack = false;
        }
        TimerPurpose::KickRecover => {
            state.upper_body_slot = true;
            state.kicking = false;
            state.left_side_attack = false;
        }
        TimerPurpose::DodgeEnd => {
            state.dodging = false;
            timers.arm(TimerPurpose::DodgeAdvantageEnd, tuning.dodge_advantage);
        }
        TimerPurpose::DodgeAdvantageEnd => {
            state.has_recently_dodged = false;
            state.damage_multiplier = 1.0;
            // The dodge chain owns any attack lockout that deferred its own
            // recover timer while the dodge state was up.
            state.punching = false;
            state.kicking = false;
            state.left_side_attack = false;
            state.upper_body_slot = true;
        }
        TimerPurpose::SprintPulse => {
            state.sprinting = false;
        }
        TimerPurpose::PivotReset => {
            state.upper_body_slot = true;
        }
    }
}
