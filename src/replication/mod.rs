//! Replication of movement speed between the owning client and the
//! authority.
//!
//! Instead of engine reflection macros, the replicated surface is the
//! explicit [`ReplicationPayload`] enum plus serialize/apply functions the
//! networking layer calls. Delivery is fire-and-forget over FIFO queues,
//! in order per sender, with no acknowledgement or retry.

use bevy::ecs::message::Message;
use bevy::prelude::*;
use std::collections::VecDeque;

mod systems;


use serde::{Deserialize, Serialize};

use crate::movement::{LocomotionSpeeds, MaxMoveSpeed};

/// Everything that crosses the replication boundary. One variant per
/// replicated field group; each carries the owning entity's id bits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReplicationPayload {
    /// The max walk speed currently in effect. Trust-the-client: the
    /// authority re-applies whatever value the owner requested.
    MaxSpeed { entity_bits: u64, speed: f32 },
    /// The per-archetype speed tier constants, snapshotted at spawn.
    SpeedTiers {
        entity_bits: u64,
        speeds: LocomotionSpeeds,
    },
}

impl ReplicationPayload {
    pub fn entity_bits(&self) -> u64 {
        match *self {
            ReplicationPayload::MaxSpeed { entity_bits, .. }
            | ReplicationPayload::SpeedTiers { entity_bits, .. } => entity_bits,
        }
    }

    /// Apply this payload to the target fighter's replicated fields.
    /// Apply only: the authority never forwards further.
    pub fn apply(&self, max_speed: &mut MaxMoveSpeed, tiers: &mut LocomotionSpeeds) {
        match *self {
            ReplicationPayload::MaxSpeed { speed, .. } => max_speed.0 = speed,
            ReplicationPayload::SpeedTiers { speeds, .. } => *tiers = speeds,
        }
    }
}

/// A speed change requested by the locally-controlled fighter. Applied
/// immediately on the local simulation for responsiveness, then forwarded
/// to the authority.
#[derive(Debug)]
pub struct SpeedChangeRequest {
    pub entity: Entity,
    pub speed: f32,
}

impl Message for SpeedChangeRequest {}

/// Serialized payloads waiting to cross to the authority, FIFO.
#[derive(Resource, Debug, Default)]
pub struct ReplicationOutbox {
    queue: VecDeque<String>,
}

impl ReplicationOutbox {
    pub fn push(&mut self, payload: &ReplicationPayload) {
        match serde_json::to_string(payload) {
            Ok(raw) => self.queue.push_back(raw),
            Err(e) => warn!("dropping replication payload: {e}"),
        }
    }

    pub fn drain(&mut self) -> impl Iterator<Item = String> + '_ {
        self.queue.drain(..)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Serialized payloads the authority has received, FIFO per sender.
#[derive(Resource, Debug, Default)]
pub struct ReplicationInbox {
    queue: VecDeque<String>,
}

impl ReplicationInbox {
    pub fn push_raw(&mut self, raw: String) {
        self.queue.push_back(raw);
    }

    pub fn pop(&mut self) -> Option<String> {
        self.queue.pop_front()
    }
}

pub struct ReplicationPlugin;

impl Plugin for ReplicationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ReplicationOutbox>()
            .init_resource::<ReplicationInbox>()
            .add_message::<SpeedChangeRequest>()
            .add_systems(
                Update,
                (
                    systems::apply_and_forward_speed,
                    systems::loopback_transport,
                    systems::apply_authority_updates,
                )
                    .chain(),
            );
    }
}
