mod color;
mod error;
mod face;
mod intensity;
mod plane;
mod view;

pub use color::Color;
pub use error::{Result, ShadingError};
pub use face::{unshaded_color, view_back_face, Face, RenderingOptions, SceneState};
pub use intensity::shade_intensity;
pub use plane::{is_behind, normal_of, Plane, PlaneComponents};
pub use view::{Camera, Lighting, ShadowInfo, ViewState};

use rayon::prelude::*;

pub fn shade(color: Color, plane: &Plane, view: &ViewState) -> Color {
    let lighting = view.lighting();
    let intensity = intensity::intensity_with(plane, view, &lighting);
    color.shaded(lighting.shift(intensity))
}

/// `plane` defaults to the face's own plane; pass another one to preview the face
/// as if it had been moved without touching it.
pub fn shaded_face_color(face: &Face, scene: &SceneState, plane: Option<&Plane>) -> Color {
    let plane = plane.unwrap_or(&face.plane);
    let base = unshaded_color(face, scene, Some(plane), None);
    shade(base, plane, &scene.view)
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShadeRequest<'a> {
    pub face: &'a Face,
    pub plane: Option<&'a Plane>,
}

impl<'a> ShadeRequest<'a> {
    pub fn new(face: &'a Face, plane: Option<&'a Plane>) -> Self {
        Self { face, plane }
    }

    pub fn plane(&self) -> &'a Plane {
        self.plane.unwrap_or(&self.face.plane)
    }
}

impl<'a> From<&'a Face> for ShadeRequest<'a> {
    fn from(face: &'a Face) -> Self {
        Self::new(face, None)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ShadedFace {
    pub base: Color,
    pub color: Color,
    pub back: bool,
}

// Results come back in input order.
pub fn shade_faces(requests: &[ShadeRequest<'_>], scene: &SceneState) -> Vec<ShadedFace> {
    let mut shaded = Vec::with_capacity(requests.len());
    requests
        .par_iter()
        .map(|request| {
            let plane = request.plane();
            ShadedFace {
                base: unshaded_color(request.face, scene, Some(plane), None),
                color: shaded_face_color(request.face, scene, Some(plane)),
                back: plane.is_behind(scene.view.camera.eye),
            }
        })
        .collect_into_vec(&mut shaded);
    tracing::debug!(
        faces = requests.len(),
        sun = scene.view.shadow_info.sun_for_shading(),
        "shaded faces"
    );
    shaded
}
