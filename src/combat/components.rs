//! Combat domain: the per-fighter combat-input state.

use bevy::prelude::*;

use crate::combat::attacks::{DodgeSide, KickVariant, MoveKey, PunchVariant};
use crate::combat::resources::CombatTuning;

/// The full combat-input state for one fighter.
///
/// Mutated only by input handlers and timer expiries, all running on the main
/// schedule, so every transition is observable as a whole between systems.
#[derive(Component, Debug, Clone)]
pub struct CombatState {
    /// Gates whether attack/guard/dodge inputs do anything at all.
    pub combat_mode: bool,

    // Directional intent, one flag per movement key.
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,

    /// Mid-punch lockout: a second punch is absorbed while this holds.
    pub punching: bool,
    /// Mid-kick lockout.
    pub kicking: bool,
    pub guarding: bool,
    pub dodging: bool,
    /// Stays up through the post-dodge advantage window, after `dodging`
    /// has already cleared.
    pub has_recently_dodged: bool,
    /// True while the active attack uses the left arm or leg.
    pub left_side_attack: bool,
    /// Whether montages should blend through the upper-body slot so
    /// locomotion keeps playing underneath.
    pub upper_body_slot: bool,

    pub toggle_run: bool,
    pub sprinting: bool,

    /// Damage committed by the most recent attack; the hit-detection
    /// collaborator reads this on collision.
    pub pending_damage: f32,
    /// 1.0 normally, raised while guarding. Larger means more reduction;
    /// the hit system decides where to divide.
    pub damage_reduction: f32,
    /// 1.0 normally, 2.0 from dodge start until the advantage window closes.
    pub damage_multiplier: f32,
}

impl Default for CombatState {
    fn default() -> Self {
        Self {
            combat_mode: false,
            forward: false,
            back: false,
            left: false,
            right: false,
            punching: false,
            kicking: false,
            guarding: false,
            dodging: false,
            has_recently_dodged: false,
            left_side_attack: false,
            upper_body_slot: true,
            toggle_run: false,
            sprinting: false,
            pending_damage: 0.0,
            damage_reduction: 1.0,
            damage_multiplier: 1.0,
        }
    }
}

impl CombatState {
    /// Press/release edge for a movement key. Any directional edge interrupts
    /// both attack lockouts: a fresh movement input cancels the attack
    /// animation lock.
    pub fn set_direction(&mut self, key: MoveKey, pressed: bool) {
        match key {
            MoveKey::Forward => self.forward = pressed,
            MoveKey::Back => self.back = pressed,
            MoveKey::Left => self.left = pressed,
            MoveKey::Right => self.right = pressed,
        }
        self.kicking = false;
        self.punching = false;
    }

    pub fn toggle_combat_mode(&mut self) {
        self.combat_mode = !self.combat_mode;
    }

    fn can_attack(&self) -> bool {
        self.combat_mode && !self.punching && !self.kicking && !self.dodging
    }

    /// Attempt a punch. Returns the chosen variant when the guard conditions
    /// hold, `None` when the event is absorbed with no further state change.
    pub fn try_punch(&mut self, cursor_y: f32, tuning: &CombatTuning) -> Option<PunchVariant> {
        self.upper_body_slot = true;
        if !self.can_attack() {
            return None;
        }
        let variant = PunchVariant::classify(self, cursor_y, tuning);
        self.punching = true;
        self.left_side_attack = variant.left_sided();
        self.pending_damage = variant.damage();
        Some(variant)
    }

    /// Attempt a kick. Same absorption contract as [`Self::try_punch`].
    pub fn try_kick(&mut self, cursor_y: f32, tuning: &CombatTuning) -> Option<KickVariant> {
        self.upper_body_slot = false;
        if !self.can_attack() {
            return None;
        }
        let variant = KickVariant::classify(self, cursor_y, tuning);
        self.kicking = true;
        self.left_side_attack = variant.left_sided();
        self.pending_damage = variant.damage();
        Some(variant)
    }

    /// Attempt a dodge. On success picks the side from the directional
    /// context and opens the damage-advantage state.
    pub fn try_dodge(&mut self, tuning: &CombatTuning) -> Option<DodgeSide> {
        if !self.combat_mode || self.kicking || self.punching {
            return None;
        }
        let side = DodgeSide::from_direction(self);
        self.upper_body_slot = true;
        self.dodging = true;
        self.has_recently_dodged = true;
        self.damage_multiplier = tuning.dodge_damage_multiplier;
        Some(side)
    }

    /// Raise the guard. Re-entrant calls just set the same values again.
    pub fn guard_started(&mut self, tuning: &CombatTuning) -> bool {
        if self.kicking || !self.combat_mode {
            return false;
        }
        self.damage_reduction = tuning.guard_damage_reduction;
        self.upper_body_slot = true;
        self.guarding = true;
        true
    }

    /// Drop the guard. Total: valid from any state.
    pub fn guard_stopped(&mut self) {
        self.damage_reduction = 1.0;
        self.guarding = false;
    }

    /// Whether the attack lockout clear must wait for the dodge chain to own
    /// it instead of the per-attack recover timer.
    pub fn defers_attack_recovery(&self) -> bool {
        self.dodging || self.has_recently_dodged
    }

    /// What the hit-detection collaborator applies on a landed hit, before
    /// the defender's reduction.
    pub fn scaled_damage(&self) -> f32 {
        self.pending_damage * self.damage_multiplier
    }
}
