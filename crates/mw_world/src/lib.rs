use bevy::prelude::*;

pub mod classify;
pub mod map;
pub mod names;
pub mod params;
pub mod transition;

pub use classify::{classify, LayerAssignment};
pub use map::{place_labels, PlaceLabel, WorldMap, LABEL_STRIDE};
pub use names::{NameGenerator, NameTemplate};
pub use params::MapParams;
pub use transition::{apply_transitions, transition_for};

/// World generation plugin for Mapwright.
/// Owns the parameters each generation pass reads and the process-wide
/// name generator.
pub struct MwWorldPlugin;

impl Plugin for MwWorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapParams>()
            .init_resource::<NameGenerator>();
    }
}
