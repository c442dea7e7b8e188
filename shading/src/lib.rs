pub mod shading;
pub use shading::*;

pub mod math_prelude {
    pub use glam::DVec3;
}
