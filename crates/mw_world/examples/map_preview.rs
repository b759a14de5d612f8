//! Map preview example - generates a map and prints it as glyphs.
//!
//! Run with: cargo run -p mw_world --example map_preview

use mw_core::{MapLayer, TileKind};
use mw_world::{place_labels, MapParams, NameGenerator, WorldMap};

const MAP_WIDTH: i32 = 20;
const MAP_HEIGHT: i32 = 15;

fn main() {
    let params = MapParams::default();
    println!(
        "Generating {}x{} map (seed {}, scale {})...",
        MAP_WIDTH, MAP_HEIGHT, params.seed, params.noise_scale
    );
    let map = WorldMap::generate(&params, MAP_WIDTH, MAP_HEIGHT);

    for y in 0..MAP_HEIGHT {
        let mut row = String::with_capacity(MAP_WIDTH as usize);
        for x in 0..MAP_WIDTH {
            // The uppermost populated layer wins, matching the render order.
            let tile = MapLayer::all()
                .iter()
                .rev()
                .find_map(|&layer| TileKind::from_index(map.layer(layer).tile(x, y)));
            row.push(tile.map(TileKind::glyph).unwrap_or(' '));
        }
        println!("{}", row);
    }

    let names = NameGenerator::new();
    let mut rng = rand::thread_rng();
    let labels = place_labels(&map, &names, &mut rng);
    println!("{} labels:", labels.len());
    for label in labels {
        println!("  ({:2}, {:2}) {}", label.tile_x, label.tile_y, label.name);
    }
}
