use mw_core::{Grid, MapLayer, TileKind};

use crate::map::WorldMap;

/// Layer pairs scanned for boundaries, lower to higher.
const LAYER_PAIRS: [(MapLayer, MapLayer); 3] = [
    (MapLayer::Base, MapLayer::Terrain),
    (MapLayer::Terrain, MapLayer::Hills),
    (MapLayer::Hills, MapLayer::Peaks),
];

const NEIGHBORS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Look up the transition tile for a (lower, upper) tile-index pair.
///
/// Pairs without a rule get no transition and the cell keeps its tile;
/// an empty or unknown index on either side misses the table the same way.
pub fn transition_for(lower: u32, upper: u32) -> Option<u32> {
    let edge = match (TileKind::from_index(lower)?, TileKind::from_index(upper)?) {
        (TileKind::Grass, TileKind::Rock) => TileKind::GrassRockEdge,
        (TileKind::Rock, TileKind::Hill) => TileKind::RockHillEdge,
        (TileKind::Hill, TileKind::Snow) => TileKind::HillSnowEdge,
        _ => return None,
    };
    Some(edge.index())
}

/// Detect whether the upper layer ends at (x, y): some 4-neighbor where
/// the upper layer is empty while the lower layer is populated.
/// Out-of-bounds neighbors read as absent on both layers.
fn at_boundary(lower: &Grid, upper: &Grid, x: i32, y: i32) -> bool {
    NEIGHBORS.iter().any(|&(dx, dy)| {
        let (nx, ny) = (x + dx, y + dy);
        !upper.is_populated(nx, ny) && lower.is_populated(nx, ny)
    })
}

/// Overwrite boundary cells of each upper layer with transition tiles.
///
/// Pairs are processed lower to higher, cells row-major, mutating the map
/// in place. An overwrite never changes whether a cell is populated, so
/// the per-pair passes cannot disturb each other's boundary detection and
/// the result is deterministic.
pub fn apply_transitions(map: &mut WorldMap) {
    for (lower_layer, upper_layer) in LAYER_PAIRS {
        for y in 0..map.height() {
            for x in 0..map.width() {
                if !map.layer(upper_layer).is_populated(x, y) {
                    continue;
                }
                if !at_boundary(map.layer(lower_layer), map.layer(upper_layer), x, y) {
                    continue;
                }

                let lower = map.layer(lower_layer).tile(x, y);
                let upper = map.layer(upper_layer).tile(x, y);
                if let Some(edge) = transition_for(lower, upper) {
                    map.layer_mut(upper_layer).set(x, y, edge);
                }
            }
        }
    }
}
