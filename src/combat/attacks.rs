//! Combat domain: attack variant classification.
//!
//! The punch and kick rule sets are deliberately asymmetric (thresholds and
//! tie-break order differ between the two hands). That asymmetry is shipped
//! game tuning, not something to normalize.

use crate::animation::ClipId;
use crate::combat::components::CombatState;
use crate::combat::resources::CombatTuning;

/// The four directional movement keys, as semantic directions rather than
/// physical key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Forward,
    Back,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchVariant {
    Jab,
    LeftHook,
    RightHook,
    Straight,
    Uppercut,
}

impl PunchVariant {
    /// Pick the punch for the current directional flags and vertical cursor
    /// motion. First matching rule wins; later rules are unreachable once an
    /// earlier one matches.
    pub fn classify(state: &CombatState, cursor_y: f32, tuning: &CombatTuning) -> Self {
        if state.left {
            PunchVariant::LeftHook
        } else if state.right {
            PunchVariant::RightHook
        } else if cursor_y < tuning.straight_threshold {
            PunchVariant::Straight
        } else if cursor_y > tuning.uppercut_threshold {
            PunchVariant::Uppercut
        } else {
            PunchVariant::Jab
        }
    }

    pub fn damage(self) -> f32 {
        match self {
            PunchVariant::Jab => 5.0,
            PunchVariant::LeftHook | PunchVariant::RightHook => 8.0,
            PunchVariant::Straight => 10.0,
            PunchVariant::Uppercut => 15.0,
        }
    }

    /// Playback rate for the montage. The jab is sped up a little more than
    /// the rest.
    pub fn play_rate(self) -> f32 {
        match self {
            PunchVariant::Jab => 1.5,
            _ => 1.3,
        }
    }

    /// Whether this punch is thrown with the left arm.
    pub fn left_sided(self) -> bool {
        matches!(
            self,
            PunchVariant::Jab | PunchVariant::LeftHook | PunchVariant::Uppercut
        )
    }

    pub fn clip(self) -> ClipId {
        match self {
            PunchVariant::Jab => ClipId::Jab,
            PunchVariant::LeftHook => ClipId::LeftHook,
            PunchVariant::RightHook => ClipId::RightHook,
            PunchVariant::Straight => ClipId::Straight,
            PunchVariant::Uppercut => ClipId::Uppercut,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickVariant {
    LowKick,
    LeftMiddleKick,
    RightMiddleKick,
    HighKick,
}

impl KickVariant {
    /// Kick classification. Mirrors the punch rules in shape but with its own
    /// threshold and no uppercut-style branch.
    pub fn classify(state: &CombatState, cursor_y: f32, tuning: &CombatTuning) -> Self {
        if state.left {
            KickVariant::LeftMiddleKick
        } else if state.right {
            KickVariant::RightMiddleKick
        } else if cursor_y < tuning.high_kick_threshold {
            KickVariant::HighKick
        } else {
            KickVariant::LowKick
        }
    }

    pub fn damage(self) -> f32 {
        match self {
            KickVariant::LowKick => 5.0,
            KickVariant::LeftMiddleKick | KickVariant::RightMiddleKick => 10.0,
            KickVariant::HighKick => 20.0,
        }
    }

    pub fn play_rate(self) -> f32 {
        match self {
            KickVariant::LowKick => 1.5,
            _ => 1.3,
        }
    }

    pub fn left_sided(self) -> bool {
        matches!(self, KickVariant::LeftMiddleKick)
    }

    pub fn clip(self) -> ClipId {
        match self {
            KickVariant::LowKick => ClipId::LowKick,
            KickVariant::LeftMiddleKick => ClipId::LeftMiddleKick,
            KickVariant::RightMiddleKick => ClipId::RightMiddleKick,
            KickVariant::HighKick => ClipId::HighKick,
        }
    }
}

/// Which way an evasive roll goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DodgeSide {
    Left,
    Right,
}

impl DodgeSide {
    /// Moving right (alone or diagonally) or straight forward rolls right;
    /// everything else, including standing still, rolls left.
    pub fn from_direction(state: &CombatState) -> Self {
        if state.right || state.forward {
            DodgeSide::Right
        } else {
            DodgeSide::Left
        }
    }

    pub fn clip(self) -> ClipId {
        match self {
            DodgeSide::Left => ClipId::DodgeLeft,
            DodgeSide::Right => ClipId::DodgeRight,
        }
    }
}
