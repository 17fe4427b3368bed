//! Data-driven content: the montage asset table.

use bevy::prelude::*;

pub mod data;
mod loader;

#[cfg(test)]
mod tests;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, loader::load_animation_table);
    }
}
