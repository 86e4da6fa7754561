//! Game assets
//!
//! Models are parsed and uploaded by an external [`ModelLoader`]; this module
//! turns its output into the shared render data entities are spawned from.

use void_engine::render::{
    GeometryHandle, LoadedModel, MeshGroup, ModelError, ModelLoader, ProgramHandle, TextureHandle,
};

use crate::components::{MaxRadius, RenderInfo};
use crate::GameError;

/// Render data and bounding radius shared by every entity of one model
#[derive(Debug, Clone, PartialEq)]
pub struct ModelAsset {
    /// Per-material mesh groups
    pub render: RenderInfo,
    /// Bounding-sphere radius
    pub radius: MaxRadius,
}

impl ModelAsset {
    /// Create a model asset from already uploaded groups
    pub fn new(groups: Vec<MeshGroup>, radius: MaxRadius) -> Self {
        Self {
            render: RenderInfo::new(groups),
            radius,
        }
    }

    /// Build a model asset from loader output
    pub fn from_loaded(name: &str, model: LoadedModel) -> Result<Self, ModelError> {
        if model.groups.is_empty() {
            return Err(ModelError::Empty(name.to_string()));
        }
        let radius = MaxRadius::from_model(&model);
        Ok(Self::new(model.groups, radius))
    }
}

/// Skybox cube and its cubemap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkyboxAsset {
    /// Skybox shader program
    pub program: ProgramHandle,
    /// Cube geometry
    pub geometry: GeometryHandle,
    /// Cube index count
    pub index_count: u32,
    /// Cubemap texture
    pub cubemap: TextureHandle,
}

/// OBJ and MTL text for one model
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelSource {
    /// Name used in log and error messages
    pub name: String,
    /// Wavefront OBJ text
    pub obj: String,
    /// Wavefront MTL text
    pub mtl: String,
}

impl ModelSource {
    /// Create a model source
    pub fn new(name: impl Into<String>, obj: impl Into<String>, mtl: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            obj: obj.into(),
            mtl: mtl.into(),
        }
    }

    fn load(&self, loader: &mut dyn ModelLoader) -> Result<ModelAsset, ModelError> {
        let model = loader.load_model(&self.name, &self.obj, &self.mtl)?;
        log::debug!(
            "Loaded model '{}': {} groups, radius {:.1}",
            self.name,
            model.groups.len(),
            model.max_radius()
        );
        ModelAsset::from_loaded(&self.name, model)
    }
}

/// Sources of every model the game needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelSources {
    /// The player's ship
    pub player: ModelSource,
    /// Asteroid variants, at least one
    pub asteroids: Vec<ModelSource>,
    /// Bullet
    pub bullet: ModelSource,
    /// Explosion particle
    pub particle: ModelSource,
}

/// Everything the game draws with
#[derive(Debug, Clone, PartialEq)]
pub struct GameAssets {
    /// Main lit shader program
    pub program: ProgramHandle,
    /// The player's ship
    pub player: ModelAsset,
    /// Asteroid variants, picked uniformly per spawn
    pub asteroids: Vec<ModelAsset>,
    /// Bullet
    pub bullet: ModelAsset,
    /// Explosion particle
    pub particle: ModelAsset,
    /// Skybox, skipped when absent
    pub skybox: Option<SkyboxAsset>,
}

impl GameAssets {
    /// Assemble assets from already built models
    pub fn new(
        program: ProgramHandle,
        player: ModelAsset,
        asteroids: Vec<ModelAsset>,
        bullet: ModelAsset,
        particle: ModelAsset,
    ) -> Result<Self, GameError> {
        if asteroids.is_empty() {
            return Err(GameError::MissingAsteroidModels);
        }
        Ok(Self {
            program,
            player,
            asteroids,
            bullet,
            particle,
            skybox: None,
        })
    }

    /// Attach a skybox
    pub fn with_skybox(mut self, skybox: SkyboxAsset) -> Self {
        self.skybox = Some(skybox);
        self
    }

    /// Load every model through the loader
    pub fn load(
        loader: &mut dyn ModelLoader,
        sources: &ModelSources,
        program: ProgramHandle,
    ) -> Result<Self, GameError> {
        if sources.asteroids.is_empty() {
            return Err(GameError::MissingAsteroidModels);
        }

        let player = sources.player.load(loader)?;
        let asteroids = sources
            .asteroids
            .iter()
            .map(|source| source.load(loader))
            .collect::<Result<Vec<_>, _>>()?;
        let bullet = sources.bullet.load(loader)?;
        let particle = sources.particle.load(loader)?;

        log::info!("Loaded {} asteroid variants", asteroids.len());
        Self::new(program, player, asteroids, bullet, particle)
    }
}
