use super::constants::{LEAF_COUNT, ORNAMENT_COUNT, RIBBON_COUNT, SPARKLE_COUNT};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Scene construction parameters.
///
/// `seed: None` draws from entropy, so every page load grows a slightly
/// different tree. Tests pass a fixed seed.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub leaves: usize,
    pub ornaments: usize,
    pub ribbon: usize,
    pub sparkles: usize,
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            leaves: LEAF_COUNT,
            ornaments: ORNAMENT_COUNT,
            ribbon: RIBBON_COUNT,
            sparkles: SPARKLE_COUNT,
            seed: None,
        }
    }
}

impl SceneConfig {
    #[allow(dead_code)]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of tree particles (leaves, ornaments and ribbon).
    pub fn particle_count(&self) -> usize {
        self.leaves + self.ornaments + self.ribbon
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        }
    }
}
