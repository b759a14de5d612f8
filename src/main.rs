use bevy::image::{ImageFilterMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy_egui::{egui, EguiContexts, EguiPlugin};
use mw_core::MapLayer;
use mw_world::{place_labels, MapParams, NameGenerator, WorldMap};

const MAP_WIDTH: i32 = 20;
const MAP_HEIGHT: i32 = 15;
const TILE_SIZE: f32 = 64.0;

/// Labels render above every terrain layer.
const LABEL_DEPTH: f32 = 100.0;
const LABEL_FONT_SIZE: f32 = 12.0;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Mapwright".into(),
                resolution: (MAP_WIDTH as f32 * TILE_SIZE, MAP_HEIGHT as f32 * TILE_SIZE).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .add_plugins((
            mw_core::MwCorePlugin,
            mw_noise::MwNoisePlugin,
            mw_world::MwWorldPlugin,
        ))
        .init_resource::<PanelState>()
        .init_resource::<RegenerationRequest>()
        .add_systems(Startup, (setup_camera, spawn_map))
        .add_systems(Update, (keyboard_controls, params_panel, regenerate_map))
        .run();
}

/// Marker component for the per-layer map sprites.
#[derive(Component)]
struct LayerSprite;

/// Marker component for the place-name labels.
#[derive(Component)]
struct LabelText;

/// Resource for signaling that the map should be rebuilt.
#[derive(Resource, Default)]
struct RegenerationRequest {
    pending: bool,
}

/// Resource for tracking UI state in the side panel.
#[derive(Resource, Default)]
struct PanelState {
    /// Seed input as string for editing.
    seed_text: String,
    /// Whether the seed text has been initialized.
    initialized: bool,
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn spawn_map(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    params: Res<MapParams>,
    names: Res<NameGenerator>,
) {
    spawn_map_entities(&mut commands, &mut images, &params, &names);
}

/// Run one generation pass and spawn its sprites and labels.
fn spawn_map_entities(
    commands: &mut Commands,
    images: &mut Assets<Image>,
    params: &MapParams,
    names: &NameGenerator,
) {
    println!(
        "Generating {}x{} map (seed {}, scale {})...",
        MAP_WIDTH, MAP_HEIGHT, params.seed, params.noise_scale
    );
    let map = WorldMap::generate(params, MAP_WIDTH, MAP_HEIGHT);

    let full_size = Vec2::new(MAP_WIDTH as f32 * TILE_SIZE, MAP_HEIGHT as f32 * TILE_SIZE);
    for &layer in MapLayer::all() {
        let image = create_image(MAP_WIDTH, MAP_HEIGHT, map.to_layer_image(layer));
        let handle = images.add(image);

        commands.spawn((
            Sprite {
                image: handle,
                custom_size: Some(full_size),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, layer.z_order()),
            LayerSprite,
        ));
    }

    // Labels draw their own randomness; the name stream is deliberately
    // not tied to the map seed.
    let mut rng = rand::thread_rng();
    let labels = place_labels(&map, names, &mut rng);
    let (half_width, half_height) = (full_size.x / 2.0, full_size.y / 2.0);

    for label in &labels {
        let (px, py) = label.anchor_px(TILE_SIZE);
        commands.spawn((
            Text2d::new(label.name.clone()),
            TextFont {
                font_size: LABEL_FONT_SIZE,
                ..default()
            },
            TextColor(Color::WHITE),
            // Map pixel coords have y down from the top-left corner;
            // world coords have y up from the center.
            Transform::from_xyz(px - half_width, half_height - py, LABEL_DEPTH),
            LabelText,
        ));
    }

    println!("Map ready: {} labels placed.", labels.len());
}

fn create_image(width: i32, height: i32, data: Vec<u8>) -> Image {
    let mut image = Image::new(
        Extent3d {
            width: width as u32,
            height: height as u32,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        default(),
    );

    // Use nearest-neighbor filtering for crisp tiles at 64x magnification
    image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
        mag_filter: ImageFilterMode::Nearest,
        min_filter: ImageFilterMode::Nearest,
        ..default()
    });

    image
}

/// Keyboard bindings: comma and period step the noise scale, R rerolls
/// the seed. Each triggers a full rebuild.
fn keyboard_controls(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut params: ResMut<MapParams>,
    mut panel: ResMut<PanelState>,
    mut regen_request: ResMut<RegenerationRequest>,
) {
    if keyboard.just_pressed(KeyCode::Comma) {
        params.decrease_scale();
        regen_request.pending = true;
    }
    if keyboard.just_pressed(KeyCode::Period) {
        params.increase_scale();
        regen_request.pending = true;
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        params.reseed();
        panel.seed_text = params.seed.to_string();
        regen_request.pending = true;
    }
}

/// Side panel for editing the generation parameters.
fn params_panel(
    mut contexts: EguiContexts,
    mut params: ResMut<MapParams>,
    mut panel: ResMut<PanelState>,
    mut regen_request: ResMut<RegenerationRequest>,
) {
    if !panel.initialized {
        panel.seed_text = params.seed.to_string();
        panel.initialized = true;
    }

    egui::SidePanel::left("map_panel")
        .default_width(180.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Mapwright");
            ui.separator();

            ui.label("Seed:");
            ui.horizontal(|ui| {
                let response = ui.text_edit_singleline(&mut panel.seed_text);
                if response.lost_focus() {
                    if let Ok(new_seed) = panel.seed_text.parse::<u32>() {
                        if new_seed != params.seed {
                            params.seed = new_seed;
                            regen_request.pending = true;
                        }
                    } else {
                        // Reset to current seed on invalid input
                        panel.seed_text = params.seed.to_string();
                    }
                }
                if ui.button("🎲").on_hover_text("Random seed").clicked() {
                    params.reseed();
                    panel.seed_text = params.seed.to_string();
                    regen_request.pending = true;
                }
            });
            ui.add_space(8.0);

            ui.label("Noise scale:");
            if ui
                .add(egui::Slider::new(&mut params.noise_scale, 1.0..=40.0))
                .changed()
            {
                regen_request.pending = true;
            }
            ui.add_space(8.0);

            if ui.button("Regenerate Map").clicked() {
                regen_request.pending = true;
            }
            ui.add_space(16.0);

            ui.separator();
            ui.label(", / . adjust the scale");
            ui.label("R rerolls the seed");
        });
}

/// Tear the current map down and rebuild it when a change is pending.
/// Runs synchronously; rapid repeated requests each complete in full.
fn regenerate_map(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    mut regen_request: ResMut<RegenerationRequest>,
    params: Res<MapParams>,
    names: Res<NameGenerator>,
    existing: Query<Entity, Or<(With<LayerSprite>, With<LabelText>)>>,
) {
    if !regen_request.pending {
        return;
    }
    regen_request.pending = false;

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    spawn_map_entities(&mut commands, &mut images, &params, &names);
}
