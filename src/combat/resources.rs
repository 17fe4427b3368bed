//! Combat domain: tuning and per-frame input resources.

use bevy::prelude::*;

/// All combat timing and threshold tuning.
///
/// The window durations are fixed constants, not derived from montage
/// lengths, and the punch/kick cursor thresholds are intentionally unequal.
#[derive(Resource, Debug, Clone)]
pub struct CombatTuning {
    /// Vertical cursor delta below which a punch becomes a straight.
    pub straight_threshold: f32,
    /// Vertical cursor delta above which a punch becomes an uppercut.
    pub uppercut_threshold: f32,
    /// Vertical cursor delta below which a kick becomes a high kick.
    pub high_kick_threshold: f32,
    /// Horizontal cursor delta magnitude that triggers a pivot montage.
    pub pivot_threshold: f32,

    /// Punch lockout window, seconds.
    pub punch_recover: f32,
    /// Kick lockout window, seconds. Kicks recover slower than punches.
    pub kick_recover: f32,
    /// Dodge animation window, seconds.
    pub dodge_duration: f32,
    /// Post-dodge advantage window, seconds after the dodge window closes.
    pub dodge_advantage: f32,
    /// Combat-mode sprint pulse, seconds.
    pub sprint_pulse: f32,
    /// Upper-body slot restore delay after a pivot, seconds.
    pub pivot_reset: f32,

    /// Damage-reduction factor while guarding.
    pub guard_damage_reduction: f32,
    /// Outgoing damage multiplier during the dodge/advantage windows.
    pub dodge_damage_multiplier: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            straight_threshold: -0.15,
            uppercut_threshold: 0.05,
            high_kick_threshold: -0.05,
            pivot_threshold: 1.0,
            punch_recover: 0.5,
            kick_recover: 1.1,
            dodge_duration: 1.5,
            dodge_advantage: 1.0,
            sprint_pulse: 0.5,
            pivot_reset: 1.0,
            guard_damage_reduction: 3.0,
            dodge_damage_multiplier: 2.0,
        }
    }
}

/// Combat action edges sampled once per frame from mouse and keyboard.
#[derive(Resource, Debug, Default)]
pub struct CombatInput {
    pub punch: bool,
    pub kick: bool,
    pub dodge: bool,
    pub guard_pressed: bool,
    pub guard_released: bool,
    pub combat_toggle: bool,
}

/// Last-sample-wins cursor motion for the current frame. Consumed by camera
/// rotation, pivot selection, and attack classification alike.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct CursorDelta {
    pub x: f32,
    pub y: f32,
}
