pub mod animation;
pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod keys;
pub mod mesh;
pub mod palette;
pub mod particles;
pub mod scene;
pub mod session;

pub use animation::*;
pub use config::SceneConfig;
pub use error::TreeError;
pub use scene::{GroupKind, TreeScene};

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
