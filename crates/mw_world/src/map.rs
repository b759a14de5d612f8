use mw_core::{Grid, MapLayer, TileKind};
use mw_noise::ElevationSampler;
use rand::Rng;

use crate::classify::classify;
use crate::names::NameGenerator;
use crate::params::MapParams;
use crate::transition::apply_transitions;

/// Name labels are placed on every 5th row and column.
pub const LABEL_STRIDE: i32 = 5;

/// A generated four-layer terrain map.
///
/// All layers share one set of dimensions and composite bottom to top.
/// The grids are written once by `generate` (classification plus the
/// transition overwrites) and read-only afterwards; regeneration builds a
/// fresh map instead of touching an old one.
pub struct WorldMap {
    width: i32,
    height: i32,
    base: Grid,
    terrain: Grid,
    hills: Grid,
    peaks: Grid,
}

impl WorldMap {
    pub(crate) fn empty(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            base: Grid::new(width, height),
            terrain: Grid::new(width, height),
            hills: Grid::new(width, height),
            peaks: Grid::new(width, height),
        }
    }

    /// Run one full generation pass: seed the elevation fields, classify
    /// every cell into the four layers, then resolve layer transitions.
    pub fn generate(params: &MapParams, width: i32, height: i32) -> Self {
        let sampler = ElevationSampler::new(params.seed, params.noise_scale);
        let mut map = Self::empty(width, height);

        for y in 0..height {
            for x in 0..width {
                let assignment = classify(sampler.sample(x, y));
                map.base.set(x, y, assignment.base.index());
                if let Some(tile) = assignment.terrain {
                    map.terrain.set(x, y, tile.index());
                }
                if let Some(tile) = assignment.hills {
                    map.hills.set(x, y, tile.index());
                }
                if let Some(tile) = assignment.peaks {
                    map.peaks.set(x, y, tile.index());
                }
            }
        }

        apply_transitions(&mut map);
        map
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn layer(&self, layer: MapLayer) -> &Grid {
        match layer {
            MapLayer::Base => &self.base,
            MapLayer::Terrain => &self.terrain,
            MapLayer::Hills => &self.hills,
            MapLayer::Peaks => &self.peaks,
        }
    }

    pub(crate) fn layer_mut(&mut self, layer: MapLayer) -> &mut Grid {
        match layer {
            MapLayer::Base => &mut self.base,
            MapLayer::Terrain => &mut self.terrain,
            MapLayer::Hills => &mut self.hills,
            MapLayer::Peaks => &mut self.peaks,
        }
    }

    /// Render one layer to RGBA bytes, one pixel per tile.
    /// Empty cells come out fully transparent so the layers composite.
    pub fn to_layer_image(&self, layer: MapLayer) -> Vec<u8> {
        let grid = self.layer(layer);
        let mut data = Vec::with_capacity((self.width * self.height * 4) as usize);

        for y in 0..self.height {
            for x in 0..self.width {
                let color = TileKind::from_index(grid.tile(x, y))
                    .map(TileKind::color)
                    .unwrap_or([0, 0, 0, 0]);
                data.extend_from_slice(&color);
            }
        }

        data
    }
}

/// A place name anchored to a grass cell.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceLabel {
    pub name: String,
    pub tile_x: i32,
    pub tile_y: i32,
}

impl PlaceLabel {
    /// Pixel-center anchor of the labelled cell.
    pub fn anchor_px(&self, tile_size: f32) -> (f32, f32) {
        (
            self.tile_x as f32 * tile_size + tile_size / 2.0,
            self.tile_y as f32 * tile_size + tile_size / 2.0,
        )
    }
}

/// Name grass cells on a fixed stride across the base layer.
///
/// The stride spaces the labels out; water cells are skipped. The RNG is
/// the caller's own stream, so names stay independent of the terrain seed.
pub fn place_labels(map: &WorldMap, names: &NameGenerator, rng: &mut impl Rng) -> Vec<PlaceLabel> {
    let mut labels = Vec::new();

    for y in (0..map.height()).step_by(LABEL_STRIDE as usize) {
        for x in (0..map.width()).step_by(LABEL_STRIDE as usize) {
            if map.layer(MapLayer::Base).tile(x, y) == TileKind::Grass.index() {
                labels.push(PlaceLabel {
                    name: names.generate(rng),
                    tile_x: x,
                    tile_y: y,
                });
            }
        }
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use mw_core::EMPTY_TILE;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn generation_is_deterministic() {
        let params = MapParams::with_seed(42);
        let first = WorldMap::generate(&params, 20, 15);
        let second = WorldMap::generate(&params, 20, 15);

        for &layer in MapLayer::all() {
            assert_eq!(
                first.layer(layer),
                second.layer(layer),
                "layer {} differs between identical passes",
                layer.name()
            );
        }
    }

    #[test]
    fn layers_share_dimensions() {
        let map = WorldMap::generate(&MapParams::with_seed(7), 12, 9);
        for &layer in MapLayer::all() {
            assert_eq!(map.layer(layer).width(), 12);
            assert_eq!(map.layer(layer).height(), 9);
        }
    }

    #[test]
    fn base_layer_has_full_coverage() {
        let map = WorldMap::generate(&MapParams::with_seed(42), 20, 15);
        let base = map.layer(MapLayer::Base);
        for y in 0..map.height() {
            for x in 0..map.width() {
                let tile = base.tile(x, y);
                assert!(
                    tile == TileKind::Water.index() || tile == TileKind::Grass.index(),
                    "base cell ({}, {}) holds unexpected tile {}",
                    x,
                    y,
                    tile
                );
            }
        }
    }

    #[test]
    fn populated_peaks_sit_on_grass() {
        // A populated peaks cell implies base elevation far above the
        // water line, so the base layer beneath must be grass.
        let map = WorldMap::generate(&MapParams::with_seed(42), 40, 30);
        for y in 0..map.height() {
            for x in 0..map.width() {
                if map.layer(MapLayer::Peaks).is_populated(x, y) {
                    assert_eq!(
                        map.layer(MapLayer::Base).tile(x, y),
                        TileKind::Grass.index(),
                        "peaks cell ({}, {}) over non-grass base",
                        x,
                        y
                    );
                }
            }
        }
    }

    #[test]
    fn layer_image_has_one_pixel_per_tile() {
        let map = WorldMap::generate(&MapParams::with_seed(42), 20, 15);
        for &layer in MapLayer::all() {
            assert_eq!(map.to_layer_image(layer).len(), 20 * 15 * 4);
        }
    }

    #[test]
    fn empty_cells_render_transparent() {
        let map = WorldMap::generate(&MapParams::with_seed(42), 20, 15);
        let peaks = map.layer(MapLayer::Peaks);
        let image = map.to_layer_image(MapLayer::Peaks);

        for y in 0..map.height() {
            for x in 0..map.width() {
                let alpha = image[((y * map.width() + x) * 4 + 3) as usize];
                if peaks.tile(x, y) == EMPTY_TILE {
                    assert_eq!(alpha, 0);
                } else {
                    assert_eq!(alpha, 255);
                }
            }
        }
    }

    #[test]
    fn labels_land_on_strided_grass_cells() {
        let map = WorldMap::generate(&MapParams::with_seed(42), 20, 15);
        let names = NameGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for label in place_labels(&map, &names, &mut rng) {
            assert_eq!(label.tile_x % LABEL_STRIDE, 0);
            assert_eq!(label.tile_y % LABEL_STRIDE, 0);
            assert_eq!(
                map.layer(MapLayer::Base).tile(label.tile_x, label.tile_y),
                TileKind::Grass.index()
            );
            assert!(!label.name.is_empty());
        }
    }

    #[test]
    fn label_anchors_at_pixel_centers() {
        let label = PlaceLabel {
            name: "Portmouth".into(),
            tile_x: 5,
            tile_y: 10,
        };
        assert_eq!(label.anchor_px(64.0), (352.0, 672.0));
    }
}
