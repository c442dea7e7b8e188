use crate::math_prelude::*;
use serde::{Deserialize, Serialize};

use super::error::{Result, ShadingError};

// Coefficients describe `ax + by + cz = d`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(into = "PlaneComponents")]
pub enum Plane {
    PointNormal { point: DVec3, normal: DVec3 },
    Coefficients { a: f64, b: f64, c: f64, d: f64 },
}

// `[[x, y, z], [nx, ny, nz]]` or `[a, b, c, d]`, unchecked until converted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaneComponents {
    Vectors(Vec<DVec3>),
    Scalars(Vec<f64>),
}

impl Plane {
    pub fn point_normal(point: DVec3, normal: DVec3) -> Self {
        Self::PointNormal { point, normal }
    }

    pub fn coefficients(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::Coefficients { a, b, c, d }
    }

    pub fn normal(&self) -> DVec3 {
        match *self {
            Self::PointNormal { normal, .. } => normal,
            Self::Coefficients { a, b, c, .. } => DVec3::new(a, b, c),
        }
    }

    // A zero normal leaves the point where it is.
    pub fn project(&self, point: DVec3) -> DVec3 {
        let normal = self.normal();
        let length_squared = normal.length_squared();
        if length_squared == 0.0 {
            return point;
        }
        let offset = match *self {
            Self::PointNormal { point: origin, .. } => (point - origin).dot(normal),
            Self::Coefficients { d, .. } => normal.dot(point) - d,
        };
        point - normal * (offset / length_squared)
    }

    /// Points exactly on the plane count as behind.
    pub fn is_behind(&self, point: DVec3) -> bool {
        (point - self.project(point)).dot(self.normal()) <= 0.0
    }
}

pub fn normal_of(plane: &Plane) -> DVec3 {
    plane.normal()
}

pub fn is_behind(plane: &Plane, point: DVec3) -> bool {
    plane.is_behind(point)
}

impl TryFrom<PlaneComponents> for Plane {
    type Error = ShadingError;

    fn try_from(components: PlaneComponents) -> Result<Self> {
        match components {
            PlaneComponents::Vectors(vectors) => match vectors[..] {
                [point, normal] => Ok(Self::point_normal(point, normal)),
                _ => Err(ShadingError::InvalidPlane {
                    components: vectors.len(),
                }),
            },
            PlaneComponents::Scalars(scalars) => match scalars[..] {
                [a, b, c, d] => Ok(Self::coefficients(a, b, c, d)),
                _ => Err(ShadingError::InvalidPlane {
                    components: scalars.len(),
                }),
            },
        }
    }
}

impl From<Plane> for PlaneComponents {
    fn from(plane: Plane) -> Self {
        match plane {
            Plane::PointNormal { point, normal } => Self::Vectors(vec![point, normal]),
            Plane::Coefficients { a, b, c, d } => Self::Scalars(vec![a, b, c, d]),
        }
    }
}

impl<'de> Deserialize<'de> for Plane {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let components = PlaneComponents::deserialize(deserializer)?;
        Plane::try_from(components).map_err(serde::de::Error::custom)
    }
}
