//! Headless Void Runner session
//!
//! Runs the game for a fixed stretch of simulated time against the recording
//! backend, with scripted input standing in for the keyboard. Usage:
//!
//! ```text
//! void_runner [config.toml|config.ron]
//! ```

use std::time::Duration;

use void_engine::config::Config;
use void_engine::foundation::logging::{self, LevelFilter};
use void_engine::foundation::math::Vec3;
use void_engine::render::{
    GeometryHandle, LoadedModel, Material, MeshGroup, ModelError, ModelLoader, ProgramHandle, RecordingBackend,
    TextureHandle,
};
use void_runner::{Direction, Game, GameAssets, GameConfig, HookSchedule, ModelSource, ModelSources, SkyboxAsset};

const SIMULATED_SECONDS: u64 = 30;
const STEP: Duration = Duration::from_millis(5);

/// Loader for the placeholder models below
///
/// Reads `v` and `f` records from the OBJ text and `Kd`/`Ks`/`Ns` from the
/// MTL text, and hands out sequential geometry handles instead of uploading.
struct PlaceholderLoader {
    next_handle: u64,
}

impl ModelLoader for PlaceholderLoader {
    fn load_model(&mut self, name: &str, obj_text: &str, mtl_text: &str) -> Result<LoadedModel, ModelError> {
        let failed = |reason: String| ModelError::LoadFailed {
            name: name.to_string(),
            reason,
        };

        let mut positions = Vec::new();
        let mut index_count = 0u32;
        for line in obj_text.lines() {
            let mut fields = line.split_whitespace();
            match fields.next() {
                Some("v") => {
                    for field in fields.take(3) {
                        positions.push(field.parse::<f32>().map_err(|e| failed(e.to_string()))?);
                    }
                }
                Some("f") => {
                    let corners = fields.count() as u32;
                    if corners < 3 {
                        return Err(failed(format!("face with {corners} corners")));
                    }
                    index_count += (corners - 2) * 3;
                }
                _ => {}
            }
        }

        let mut material = Material::new().with_name(name);
        for line in mtl_text.lines() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let parse = |index: usize| fields.get(index).and_then(|field| field.parse::<f32>().ok());
            match fields.first().copied() {
                Some("Kd") => {
                    if let (Some(r), Some(g), Some(b)) = (parse(1), parse(2), parse(3)) {
                        material = material.with_diffuse(Vec3::new(r, g, b));
                    }
                }
                Some("Ks") => {
                    if let (Some(r), Some(g), Some(b)) = (parse(1), parse(2), parse(3)) {
                        material = material.with_specular(Vec3::new(r, g, b));
                    }
                }
                Some("Ns") => {
                    if let Some(shininess) = parse(1) {
                        material = material.with_shininess(shininess);
                    }
                }
                _ => {}
            }
        }

        self.next_handle += 1;
        Ok(LoadedModel::new(
            vec![MeshGroup::new(GeometryHandle(self.next_handle), index_count, material)],
            positions,
        ))
    }
}

/// OBJ text for an axis-aligned cube with half extent `size`
fn cube_obj(size: f32) -> String {
    let mut obj = String::new();
    for corner in 0..8 {
        let sign = |bit: u32| if corner & (1 << bit) == 0 { -size } else { size };
        obj.push_str(&format!("v {} {} {}\n", sign(0), sign(1), sign(2)));
    }
    for face in ["1 2 4 3", "5 7 8 6", "1 5 6 2", "3 4 8 7", "1 3 7 5", "2 6 8 4"] {
        obj.push_str(&format!("f {face}\n"));
    }
    obj
}

fn placeholder_sources() -> ModelSources {
    let rock = "Kd 0.45 0.4 0.35\nNs 8\n";
    ModelSources {
        player: ModelSource::new("ship", cube_obj(60.0), "Kd 0.7 0.7 0.8\nKs 1 1 1\nNs 64\n"),
        asteroids: vec![
            ModelSource::new("asteroid_small", cube_obj(80.0), rock),
            ModelSource::new("asteroid_medium", cube_obj(140.0), rock),
            ModelSource::new("asteroid_large", cube_obj(220.0), rock),
        ],
        bullet: ModelSource::new("bullet", cube_obj(10.0), "Kd 1 0.9 0.2\n"),
        particle: ModelSource::new("particle", cube_obj(4.0), "Kd 1 0.5 0.1\n"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level(LevelFilter::Info);

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading configuration from {}", path);
            GameConfig::load_from_file(&path)?
        }
        None => GameConfig::default(),
    };

    let mut loader = PlaceholderLoader { next_handle: 0 };
    let assets = GameAssets::load(&mut loader, &placeholder_sources(), ProgramHandle(1))?.with_skybox(SkyboxAsset {
        program: ProgramHandle(2),
        geometry: GeometryHandle(1000),
        index_count: 36,
        cubemap: TextureHandle(1),
    });

    let mut schedule = HookSchedule::new(&config.schedule);
    let mut game = Game::new(config, assets)?;
    let mut backend = RecordingBackend::new(1280, 720);

    let script = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];
    let steps = SIMULATED_SECONDS * 1000 / STEP.as_millis() as u64;
    let mut game_overs = 0;
    let mut best_score = 0;

    for step in 0..steps {
        if step % 40 == 0 {
            game.move_player(script[(step / 40) as usize % script.len()]);
        }
        if step % 25 == 0 {
            let was_over = game.is_game_over();
            game.shoot();
            if was_over {
                game_overs += 1;
            }
        }
        best_score = best_score.max(game.score());

        for hook in schedule.advance(STEP) {
            game.run_hook(hook, &mut backend)?;
        }
        // Bound the call log
        if step % 200 == 0 {
            backend.clear_calls();
        }
    }

    let stats = game.stats();
    log::info!(
        "Session over: score {} (best {}), difficulty {:.1}, {} restarts",
        game.score(),
        best_score,
        game.difficulty(),
        game_overs
    );
    log::info!(
        "Live entities: {} asteroids, {} bullets, {} particles",
        stats.asteroids,
        stats.bullets,
        stats.particles
    );
    log::info!("Draw calls in the last frame window: {}", backend.draw_calls());
    Ok(())
}
