use bevy::prelude::*;

pub mod strategy;

pub use strategy::{
    BaseElevationField, DetailElevationField, ElevationSample, ElevationSampler, DETAIL_OFFSET,
    DETAIL_SCALE_RATIO,
};

/// Noise plugin for Mapwright.
/// Fields are constructed per generation pass; no systems to register.
pub struct MwNoisePlugin;

impl Plugin for MwNoisePlugin {
    fn build(&self, _app: &mut App) {}
}
