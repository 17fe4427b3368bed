//! Replication systems: owner-side apply-and-forward, the stand-in
//! transport, and authority-side apply-only.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{LocomotionSpeeds, MaxMoveSpeed};
use crate::replication::{
    ReplicationInbox, ReplicationOutbox, ReplicationPayload, SpeedChangeRequest,
};

/// Owner side: apply the requested speed to the local simulation right away,
/// then serialize it toward the authority.
pub(crate) fn apply_and_forward_speed(
    mut requests: MessageReader<SpeedChangeRequest>,
    mut fighters: Query<&mut MaxMoveSpeed>,
    mut outbox: ResMut<ReplicationOutbox>,
) {
    for request in requests.read() {
        if let Ok(mut max_speed) = fighters.get_mut(request.entity) {
            max_speed.0 = request.speed;
        }
        outbox.push(&ReplicationPayload::MaxSpeed {
            entity_bits: request.entity.to_bits(),
            speed: request.speed,
        });
    }
}

/// Stands in for the wire when client and authority share one process:
/// moves outbox payloads to the inbox, preserving order.
pub(crate) fn loopback_transport(
    mut outbox: ResMut<ReplicationOutbox>,
    mut inbox: ResMut<ReplicationInbox>,
) {
    for raw in outbox.drain() {
        inbox.push_raw(raw);
    }
}

/// Authority side: drain the inbox in FIFO order and apply each payload.
/// Apply only, no forwarding; malformed payloads are logged and dropped.
pub(crate) fn apply_authority_updates(
    mut inbox: ResMut<ReplicationInbox>,
    mut fighters: Query<(&mut MaxMoveSpeed, &mut LocomotionSpeeds)>,
) {
    while let Some(raw) = inbox.pop() {
        let payload: ReplicationPayload = match serde_json::from_str(&raw) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("dropping malformed replication payload: {e}");
                continue;
            }
        };
        // The fighter may already be gone on this peer
        let entity = Entity::from_bits(payload.entity_bits());
        if let Ok((mut max_speed, mut tiers)) = fighters.get_mut(entity) {
            payload.apply(&mut max_speed, &mut tiers);
        }
    }
}
