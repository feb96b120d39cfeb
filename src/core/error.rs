use thiserror::Error;

/// Failures the front-end can report. None of them are fatal to the scene;
/// each one disables only the feature it belongs to.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("missing DOM element #{0}")]
    MissingElement(&'static str),
    #[error("camera unavailable: {0}")]
    Camera(String),
    #[error("hand landmarker failed to load: {0}")]
    ModelLoad(String),
    #[error("audio playback blocked: {0}")]
    AudioBlocked(String),
    #[error("WebGPU unavailable: {0}")]
    Gpu(String),
}

impl TreeError {
    /// Short text for the gesture status line.
    pub fn status_text(&self) -> String {
        match self {
            TreeError::Camera(_) => "Camera unavailable".to_string(),
            TreeError::ModelLoad(_) => "Hand model failed to load".to_string(),
            other => other.to_string(),
        }
    }
}
