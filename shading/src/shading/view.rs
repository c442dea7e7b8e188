use crate::math_prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub eye: DVec3,
    pub target: DVec3,
}

impl Camera {
    pub fn new(eye: DVec3, target: DVec3) -> Self {
        Self { eye, target }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DVec3::new(-10.0, -10.0, 10.0), DVec3::ZERO)
    }
}

// `light` and `dark` are percentages.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowInfo {
    pub use_sun_for_all_shading: bool,
    pub display_shadows: bool,
    pub sun_direction: DVec3,
    pub light: f64,
    pub dark: f64,
}

impl ShadowInfo {
    // Displaying shadows turns on sun shading regardless of
    // `use_sun_for_all_shading`.
    pub fn sun_for_shading(&self) -> bool {
        self.use_sun_for_all_shading || self.display_shadows
    }
}

impl Default for ShadowInfo {
    fn default() -> Self {
        Self {
            use_sun_for_all_shading: false,
            display_shadows: false,
            sun_direction: DVec3::Z,
            light: 80.0,
            dark: 45.0,
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub camera: Camera,
    #[serde(default)]
    pub shadow_info: ShadowInfo,
}

impl ViewState {
    pub fn new(camera: Camera, shadow_info: ShadowInfo) -> Self {
        Self {
            camera,
            shadow_info,
        }
    }

    pub fn lighting(&self) -> Lighting {
        let si = &self.shadow_info;
        if si.sun_for_shading() {
            Lighting::Sun {
                direction: si.sun_direction.normalize_or_zero(),
                light: si.light / 100.0,
                dark: si.dark / 100.0,
            }
        } else {
            Lighting::Headlight {
                eye: self.camera.eye,
                target: self.camera.target,
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Lighting {
    Sun { direction: DVec3, light: f64, dark: f64 },
    Headlight { eye: DVec3, target: DVec3 },
}

impl Lighting {
    pub const HEADLIGHT_LIGHT: f64 = 0.81;
    pub const HEADLIGHT_DARK: f64 = 0.20;
    const BASE_SHIFT: f64 = 0.2;

    pub fn reference(&self) -> DVec3 {
        match *self {
            Self::Sun { direction, .. } => direction,
            Self::Headlight { eye, target } => (eye - target).normalize_or_zero(),
        }
    }

    // Sunlight never goes below zero, the headlight is symmetric.
    pub fn resolve(&self, value: f64) -> f64 {
        match self {
            Self::Sun { .. } => value.max(0.0),
            Self::Headlight { .. } => value.abs(),
        }
    }

    pub fn light(&self) -> f64 {
        match *self {
            Self::Sun { light, .. } => light,
            Self::Headlight { .. } => Self::HEADLIGHT_LIGHT,
        }
    }

    pub fn dark(&self) -> f64 {
        match *self {
            Self::Sun { dark, .. } => dark,
            Self::Headlight { .. } => Self::HEADLIGHT_DARK,
        }
    }

    pub fn shift(&self, intensity: f64) -> f64 {
        Self::BASE_SHIFT + self.dark() + intensity * self.light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(use_sun: bool, display_shadows: bool) -> ViewState {
        ViewState::new(
            Camera::new(DVec3::new(0.0, 0.0, 4.0), DVec3::ZERO),
            ShadowInfo {
                use_sun_for_all_shading: use_sun,
                display_shadows,
                sun_direction: DVec3::X,
                light: 100.0,
                dark: 20.0,
            },
        )
    }

    #[test]
    fn shadows_force_sun() {
        assert!(!view(false, false).shadow_info.sun_for_shading());
        assert!(view(true, false).shadow_info.sun_for_shading());
        assert!(view(false, true).shadow_info.sun_for_shading());
    }

    #[test]
    fn lighting_resolution() {
        assert_eq!(
            view(false, true).lighting(),
            Lighting::Sun {
                direction: DVec3::X,
                light: 1.0,
                dark: 0.2
            }
        );
        let headlight = view(false, false).lighting();
        assert_eq!(headlight.reference(), DVec3::Z);
        assert_eq!(headlight.light(), 0.81);
        assert_eq!(headlight.dark(), 0.20);
    }

    #[test]
    fn sun_direction_is_normalized() {
        let mut sunlit = view(true, false);
        sunlit.shadow_info.sun_direction = DVec3::new(0.0, 0.0, 2.0);
        assert_eq!(sunlit.lighting().reference(), DVec3::Z);

        sunlit.shadow_info.sun_direction = DVec3::ZERO;
        assert_eq!(sunlit.lighting().reference(), DVec3::ZERO);
    }

    #[test]
    fn headlight_with_eye_on_target_has_no_direction() {
        let lighting = Lighting::Headlight {
            eye: DVec3::ONE,
            target: DVec3::ONE,
        };
        assert_eq!(lighting.reference(), DVec3::ZERO);
    }

    #[test]
    fn resolve_differs_by_mode() {
        let sun = view(true, false).lighting();
        let headlight = view(false, false).lighting();
        assert_eq!(sun.resolve(-0.6), 0.0);
        assert_eq!(headlight.resolve(-0.6), 0.6);
        assert_eq!(sun.resolve(0.3), 0.3);
    }

    #[test]
    fn shift_formula() {
        assert_eq!(view(false, false).lighting().shift(0.5), 0.805);
        assert_eq!(view(true, false).lighting().shift(1.0), 1.4);
    }
}
