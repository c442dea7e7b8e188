use crate::math_prelude::*;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::plane::Plane;
use super::view::ViewState;

// Textured materials are given as the average color of the texture.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    pub plane: Plane,
    #[serde(default)]
    pub material: Option<Color>,
    #[serde(default)]
    pub back_material: Option<Color>,
}

impl Face {
    pub fn new(plane: Plane) -> Self {
        Self {
            plane,
            material: None,
            back_material: None,
        }
    }

    pub fn with_material(mut self, color: Color) -> Self {
        self.material = Some(color);
        self
    }

    pub fn with_back_material(mut self, color: Color) -> Self {
        self.back_material = Some(color);
        self
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingOptions {
    pub face_front_color: Color,
    pub face_back_color: Color,
}

impl Default for RenderingOptions {
    fn default() -> Self {
        Self {
            face_front_color: Color::WHITE,
            face_back_color: Color::new(164, 178, 187),
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneState {
    #[serde(default)]
    pub rendering_options: RenderingOptions,
    pub view: ViewState,
}

impl SceneState {
    pub fn new(rendering_options: RenderingOptions, view: ViewState) -> Self {
        Self {
            rendering_options,
            view,
        }
    }
}

/// `plane` defaults to the face's own plane and `eye` to the scene camera. Pass
/// another plane to preview the face as if it had been moved.
pub fn unshaded_color(
    face: &Face,
    scene: &SceneState,
    plane: Option<&Plane>,
    eye: Option<DVec3>,
) -> Color {
    let plane = plane.unwrap_or(&face.plane);
    let eye = eye.unwrap_or(scene.view.camera.eye);
    let options = &scene.rendering_options;

    if plane.is_behind(eye) {
        face.back_material.unwrap_or(options.face_back_color)
    } else {
        face.material.unwrap_or(options.face_front_color)
    }
}

pub fn view_back_face(face: &Face, eye: DVec3) -> bool {
    face.plane.is_behind(eye)
}
