//! Animation collaborator surface: montage requests and the clip library.
//!
//! The engine's animation runtime owns actual playback. This module resolves
//! requested clip ids through the data-driven library and records what each
//! fighter is playing; a clip with no loaded asset degrades to a silent
//! no-op, matching unassigned montage slots.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Every montage the combat machine can request, keyed for the data-driven
/// asset table in `assets/data/animations.ron`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClipId {
    Jab,
    LeftHook,
    RightHook,
    Straight,
    Uppercut,
    LowKick,
    LeftMiddleKick,
    RightMiddleKick,
    HighKick,
    LeftPivot,
    RightPivot,
    Guard,
    DodgeLeft,
    DodgeRight,
}

/// Optional blend channel for a montage. The upper-body slot lets a stance
/// pose play on top of locomotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendSlot {
    UpperBody,
}

/// One-way request to start a montage. No return value is consumed.
#[derive(Debug)]
pub struct PlayClip {
    pub entity: Entity,
    pub clip: ClipId,
    pub rate: f32,
    pub slot: Option<BlendSlot>,
}

impl Message for PlayClip {}

/// One-way request to stop a montage if it is the one playing.
#[derive(Debug)]
pub struct StopClip {
    pub entity: Entity,
    pub clip: ClipId,
}

impl Message for StopClip {}

/// Clip id to asset handle, filled by the content loader. Ids missing from
/// the table simply never resolve.
#[derive(Resource, Debug, Default)]
pub struct AnimationLibrary {
    pub clips: HashMap<ClipId, Handle<AnimationClip>>,
}

impl AnimationLibrary {
    pub fn get(&self, clip: ClipId) -> Option<&Handle<AnimationClip>> {
        self.clips.get(&clip)
    }
}

/// The montage a fighter is currently playing, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveMontage {
    pub clip: ClipId,
    pub rate: f32,
    pub slot: Option<BlendSlot>,
}

#[derive(Component, Debug, Default)]
pub struct MontagePlayer {
    pub current: Option<ActiveMontage>,
}

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationLibrary>()
            .add_message::<PlayClip>()
            .add_message::<StopClip>()
            .add_systems(Update, (play_requested_clips, stop_requested_clips).chain());
    }
}

fn play_requested_clips(
    library: Res<AnimationLibrary>,
    mut requests: MessageReader<PlayClip>,
    mut players: Query<&mut MontagePlayer>,
) {
    for request in requests.read() {
        // Unassigned clip: absorb the request
        if library.get(request.clip).is_none() {
            debug!("no asset bound for clip {:?}, skipping", request.clip);
            continue;
        }
        let Ok(mut player) = players.get_mut(request.entity) else {
            continue;
        };
        player.current = Some(ActiveMontage {
            clip: request.clip,
            rate: request.rate,
            slot: request.slot,
        });
    }
}

fn stop_requested_clips(
    mut requests: MessageReader<StopClip>,
    mut players: Query<&mut MontagePlayer>,
) {
    for request in requests.read() {
        let Ok(mut player) = players.get_mut(request.entity) else {
            continue;
        };
        if player.current.is_some_and(|active| active.clip == request.clip) {
            player.current = None;
        }
    }
}
