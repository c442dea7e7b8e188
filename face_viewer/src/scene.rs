use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use shading::{
    Camera, Color, Face, Plane, PlaneComponents, RenderingOptions, SceneState, ShadeRequest,
    ShadingError, ShadowInfo, ViewState,
};

use crate::texture;

#[derive(Debug, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub rendering_options: RenderingOptions,
    pub camera: Camera,
    #[serde(default)]
    pub shadow_info: ShadowInfo,
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialDef>,
    pub faces: Vec<FaceDef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialDef {
    Color(Color),
    /// Image file, relative to the scene file. Shaded with its average color.
    Texture(PathBuf),
}

#[derive(Debug, Deserialize)]
pub struct FaceDef {
    pub name: String,
    pub plane: PlaneComponents,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub back_material: Option<String>,
    /// Plane to shade the face at instead of its own, as while dragging it.
    #[serde(default)]
    pub preview_plane: Option<PlaneComponents>,
}

#[derive(Debug, thiserror::Error)]
pub enum FaceError {
    #[error(transparent)]
    Plane(#[from] ShadingError),
    #[error("unknown material {0:?}")]
    UnknownMaterial(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneFace {
    pub name: String,
    pub face: Face,
    pub preview_plane: Option<Plane>,
}

impl SceneFace {
    pub fn request(&self) -> ShadeRequest<'_> {
        ShadeRequest::new(&self.face, self.preview_plane.as_ref())
    }
}

#[derive(Debug)]
pub struct Scene {
    pub state: SceneState,
    pub faces: Vec<SceneFace>,
}

impl SceneFile {
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse scene {}", path.display()))
    }

    // Faces that cannot be built are logged and left out.
    pub fn load(self, base_dir: &Path) -> anyhow::Result<Scene> {
        let mut materials = BTreeMap::new();
        for (name, def) in self.materials {
            let color = match def {
                MaterialDef::Color(color) => color,
                MaterialDef::Texture(path) => texture::average_color(&base_dir.join(path))?,
            };
            tracing::debug!(material = %name, %color, "resolved material");
            materials.insert(name, color);
        }

        let mut faces = Vec::with_capacity(self.faces.len());
        for def in self.faces {
            let name = def.name.clone();
            match build_face(def, &materials) {
                Ok(face) => faces.push(face),
                Err(e) => tracing::warn!(face = %name, "skipping face: {}", e),
            }
        }

        let view = ViewState::new(self.camera, self.shadow_info);

        Ok(Scene {
            state: SceneState::new(self.rendering_options, view),
            faces,
        })
    }
}

fn build_face(def: FaceDef, materials: &BTreeMap<String, Color>) -> Result<SceneFace, FaceError> {
    let lookup = |name: Option<String>| -> Result<Option<Color>, FaceError> {
        name.map(|name| {
            materials
                .get(&name)
                .copied()
                .ok_or(FaceError::UnknownMaterial(name))
        })
        .transpose()
    };

    let plane = Plane::try_from(def.plane)?;
    let preview_plane = def.preview_plane.map(Plane::try_from).transpose()?;
    let face = Face {
        plane,
        material: lookup(def.material)?,
        back_material: lookup(def.back_material)?,
    };

    Ok(SceneFace {
        name: def.name,
        face,
        preview_plane,
    })
}
