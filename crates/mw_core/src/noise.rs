/// Trait for seeded coherent-noise fields.
///
/// Implementations are deterministic: for a given seed, sampling the same
/// coordinates always yields the same value. A field is constructed fresh
/// for each generation pass, so reseeding is a construction-time concern
/// rather than a per-call one.
pub trait NoiseField: Send + Sync {
    /// Sample the field at the given tile coordinates.
    ///
    /// Returns a value in the underlying noise function's native range,
    /// taken to be [-1.0, 1.0]; no clamping is performed.
    fn sample(&self, x: f64, y: f64) -> f64;

    /// Returns the name of this field for debugging.
    fn name(&self) -> &'static str {
        "NoiseField"
    }
}
