#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShadingError {
    #[error("invalid plane: expected 2 (point, normal) or 4 (a, b, c, d) components, got {components}")]
    InvalidPlane { components: usize },
}

pub type Result<T> = std::result::Result<T, ShadingError>;
