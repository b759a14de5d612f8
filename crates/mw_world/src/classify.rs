use mw_core::TileKind;
use mw_noise::ElevationSample;

/// Base elevation below this is water; everything else is grass.
pub const WATER_LEVEL: f64 = -0.2;

/// Base elevation above this gets rocky terrain.
pub const ROCK_LEVEL: f64 = 0.1;

/// Base elevation above this, with detail above `HILL_DETAIL_GATE`, gets hills.
pub const HILL_LEVEL: f64 = 0.3;

/// Base elevation above this, with detail above `PEAK_DETAIL_GATE`, gets snow peaks.
pub const PEAK_LEVEL: f64 = 0.5;

/// Detail gate for the hills layer.
pub const HILL_DETAIL_GATE: f64 = 0.0;

/// Detail gate for the peaks layer.
pub const PEAK_DETAIL_GATE: f64 = 0.2;

/// Per-layer tile assignment for one cell.
///
/// The base layer always gets exactly one tile. The upper layers are
/// evaluated independently, so a cell may populate several at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerAssignment {
    pub base: TileKind,
    pub terrain: Option<TileKind>,
    pub hills: Option<TileKind>,
    pub peaks: Option<TileKind>,
}

/// Classify one cell from its elevation sample.
///
/// The elevation thresholds rise with layer height, so the upper layers
/// sit statistically inside the rocky regions. The detail gates keep that
/// nesting loose: a peaks cell is not guaranteed a populated hills cell
/// underneath, which is what breaks up the band edges.
pub fn classify(sample: ElevationSample) -> LayerAssignment {
    let base = if sample.base < WATER_LEVEL {
        TileKind::Water
    } else {
        TileKind::Grass
    };
    let terrain = (sample.base > ROCK_LEVEL).then_some(TileKind::Rock);
    let hills =
        (sample.base > HILL_LEVEL && sample.detail > HILL_DETAIL_GATE).then_some(TileKind::Hill);
    let peaks =
        (sample.base > PEAK_LEVEL && sample.detail > PEAK_DETAIL_GATE).then_some(TileKind::Snow);

    LayerAssignment {
        base,
        terrain,
        hills,
        peaks,
    }
}
