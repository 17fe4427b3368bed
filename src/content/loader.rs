//! Loader for RON content files at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{ClipDef, DataFile};
use crate::animation::AnimationLibrary;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load a RON file containing a DataFile<T> wrapper.
pub(crate) fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_data_file(&contents).map_err(|message| ContentLoadError {
        file: file_name,
        message,
    })
}

/// Parse a DataFile<T> from RON text. Split out so tests can feed strings.
pub(crate) fn parse_data_file<T>(contents: &str) -> Result<Vec<T>, String>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| format!("Parse error: {}", e))?;
    Ok(data.items)
}

/// Startup system: read the montage table and fill the animation library.
/// A missing or malformed table is logged and leaves the library empty, so
/// every montage request degrades to a no-op.
pub(crate) fn load_animation_table(
    asset_server: Res<AssetServer>,
    mut library: ResMut<AnimationLibrary>,
) {
    let path = Path::new("assets/data/animations.ron");
    let defs: Vec<ClipDef> = match load_data_file(path) {
        Ok(defs) => defs,
        Err(e) => {
            warn!("{e}; continuing without montage assets");
            return;
        }
    };

    for def in &defs {
        library
            .clips
            .insert(def.id, asset_server.load(def.path.clone()));
    }
    info!("Animation table loaded: {} clips", defs.len());
}
