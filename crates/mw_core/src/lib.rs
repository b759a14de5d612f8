use bevy::prelude::*;

pub mod grid;
pub mod layer;
pub mod noise;
pub mod tile;

pub use grid::{Grid, EMPTY_TILE};
pub use layer::MapLayer;
pub use noise::NoiseField;
pub use tile::TileKind;

/// Core plugin providing foundational types for Mapwright.
pub struct MwCorePlugin;

impl Plugin for MwCorePlugin {
    fn build(&self, _app: &mut App) {
        // Core types are used by other crates; no systems to register here.
    }
}
