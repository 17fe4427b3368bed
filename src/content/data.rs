//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and exist only
//! for deserialization.

use serde::{Deserialize, Serialize};

use crate::animation::ClipId;

/// Common wrapper for RON files with a schema version and an item list.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

/// One row of the montage table: which asset backs a clip id.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClipDef {
    pub id: ClipId,
    pub path: String,
}
