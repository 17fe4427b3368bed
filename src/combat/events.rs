//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::combat::attacks::{DodgeSide, KickVariant, PunchVariant};

/// Either family of attack, with the resolved variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackVariant {
    Punch(PunchVariant),
    Kick(KickVariant),
}

/// Emitted when an attack input commits (guard conditions held and a variant
/// was chosen). Absorbed inputs emit nothing.
#[derive(Debug)]
pub struct AttackPerformed {
    pub entity: Entity,
    pub variant: AttackVariant,
    pub damage: f32,
}

impl Message for AttackPerformed {}

/// Emitted when a dodge commits.
#[derive(Debug)]
pub struct DodgePerformed {
    pub entity: Entity,
    pub side: DodgeSide,
}

impl Message for DodgePerformed {}
