use bevy::prelude::*;

/// Default noise scale for new maps.
pub const DEFAULT_NOISE_SCALE: f64 = 10.0;

/// Lower bound for the noise scale; the sampler contract requires >= 1.
pub const MIN_NOISE_SCALE: f64 = 1.0;

/// Parameters for one map generation pass.
///
/// Owned by the app shell and read by each pass. Regeneration reads a
/// fresh copy of the current values; a finished pass is never mutated.
#[derive(Resource, Debug, Clone)]
pub struct MapParams {
    /// Seed for the elevation fields.
    pub seed: u32,
    /// Sampling scale; larger values stretch terrain features out.
    pub noise_scale: f64,
}

impl Default for MapParams {
    fn default() -> Self {
        Self {
            seed: rand::random(),
            noise_scale: DEFAULT_NOISE_SCALE,
        }
    }
}

impl MapParams {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            noise_scale: DEFAULT_NOISE_SCALE,
        }
    }

    /// Draw a fresh random seed for the next pass.
    pub fn reseed(&mut self) {
        self.seed = rand::random();
    }

    /// Decrease the noise scale by one, clamped to `MIN_NOISE_SCALE`.
    pub fn decrease_scale(&mut self) {
        self.noise_scale = (self.noise_scale - 1.0).max(MIN_NOISE_SCALE);
    }

    /// Increase the noise scale by one.
    pub fn increase_scale(&mut self) {
        self.noise_scale += 1.0;
    }
}
