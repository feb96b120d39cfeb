// Rendering, post-processing and audio tuning for the web front-end.

// Camera
pub const CAMERA_Z: f32 = 12.0;
pub const CAMERA_FOV_DEG: f32 = 45.0;

// Tone mapping (Reinhard) exposure applied in the composite pass
pub const EXPOSURE: f32 = 1.5;

// Bloom
pub const BLOOM_STRENGTH: f32 = 1.2;
pub const BLOOM_THRESHOLD: f32 = 0.2;
pub const BLOOM_RADIUS: f32 = 0.6; // blur tap spacing in texels

// Vignette
pub const VIGNETTE_OFFSET: f32 = 0.1;
pub const VIGNETTE_DARKNESS: f32 = 1.1;

// Materials: [roughness, metalness, emissive intensity, unlit mix]
pub const LEAF_MATERIAL: [f32; 4] = [0.4, 0.6, 0.0, 0.0];
pub const ORNAMENT_MATERIAL: [f32; 4] = [0.1, 0.9, 0.2, 0.0];
pub const RIBBON_MATERIAL: [f32; 4] = [0.5, 0.0, 0.8, 0.0];
pub const STAR_MATERIAL: [f32; 4] = [0.5, 0.0, 2.0, 0.0];
pub const SPARKLE_MATERIAL: [f32; 4] = [0.5, 0.0, 1.0, 1.0];

// Star geometry
pub const STAR_CONE_RADIUS: f32 = 0.5;
pub const STAR_CONE_HEIGHT: f32 = 1.5;
pub const STAR_CONE_SEGMENTS: usize = 5;

// Audio
pub const MUSIC_URL: &str =
    "https://cdn.pixabay.com/download/audio/2022/11/22/audio_febc508520.mp3?filename=christmas-magic-126456.mp3";
pub const MASTER_GAIN: f32 = 0.25;
pub const CHIME_GAIN: f32 = 0.35;
pub const CHIME_DURATION_SEC: f64 = 1.2;
pub const REVERB_SECONDS: f32 = 3.0;

// Hand landmarker service
pub const VISION_WASM_ROOT: &str = "https://cdn.jsdelivr.net/npm/@mediapipe/tasks-vision@0.10.0/wasm";
pub const HAND_MODEL_URL: &str =
    "https://storage.googleapis.com/mediapipe-models/hand_landmarker/hand_landmarker/float16/1/hand_landmarker.task";

// Gesture preview overlay
pub const SKELETON_COLOR: &str = "#FF69B4";
pub const SKELETON_LINE_WIDTH: f64 = 3.0;
pub const LANDMARK_COLOR: &str = "#FFFFFF";
pub const LANDMARK_RADIUS: f64 = 3.0;
