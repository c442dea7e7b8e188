use super::plane::Plane;
use super::view::{Lighting, ViewState};

// 0.0 (darkest) to 1.0 (lightest), for the side of `plane` facing the camera.
pub fn shade_intensity(plane: &Plane, view: &ViewState) -> f64 {
    intensity_with(plane, view, &view.lighting())
}

pub(crate) fn intensity_with(plane: &Plane, view: &ViewState, lighting: &Lighting) -> f64 {
    let mut normal = plane.normal();
    if plane.is_behind(view.camera.eye) {
        normal = -normal;
    }
    let value = normal.normalize_or_zero().dot(lighting.reference());
    lighting.resolve(value)
}
