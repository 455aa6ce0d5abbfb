//! Error types for rendering and scene loading.

use thiserror::Error;

/// Errors that can occur when starting a render.
///
/// Numeric edge cases during tracing (missed rays, absorbed rays, exhausted
/// depth) are not errors; they resolve to a color.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid camera configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid material '{name}': {reason}")]
    InvalidMaterial { name: String, reason: String },

    #[error("Sphere {index} references unknown material '{material}'")]
    UnknownMaterial { index: usize, material: String },

    #[error("Invalid sphere {index}: {reason}")]
    InvalidSphere { index: usize, reason: String },

    #[error(transparent)]
    Camera(#[from] RenderError),
}

pub type SceneResult<T> = Result<T, SceneError>;
