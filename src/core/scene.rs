use super::animation::AnimationState;
use super::config::SceneConfig;
use super::geometry;
use super::particles::{
    DualLayoutGroup, GroupInstances, InstanceRaw, LeafMotion, OrnamentMotion, RibbonMotion,
    SparkleMotion, StarMotion,
};

/// Which instanced mesh a group is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Leaves,
    Ornaments,
    Ribbon,
    Star,
    Sparkles,
}

impl GroupKind {
    pub const ALL: [GroupKind; 5] = [
        GroupKind::Leaves,
        GroupKind::Ornaments,
        GroupKind::Ribbon,
        GroupKind::Star,
        GroupKind::Sparkles,
    ];
}

/// All particle groups of the tree, each with its per-frame instance buffer.
pub struct TreeScene {
    pub leaves: GroupInstances<LeafMotion>,
    pub ornaments: GroupInstances<OrnamentMotion>,
    pub ribbon: GroupInstances<RibbonMotion>,
    pub star: GroupInstances<StarMotion>,
    pub sparkles: GroupInstances<SparkleMotion>,
}

impl TreeScene {
    pub fn build(config: &SceneConfig) -> Self {
        let mut rng = config.rng();
        Self {
            leaves: GroupInstances::new(DualLayoutGroup::new(
                geometry::generate_leaves(config.leaves, &mut rng),
                LeafMotion,
            )),
            ornaments: GroupInstances::new(DualLayoutGroup::new(
                geometry::generate_ornaments(config.ornaments, &mut rng),
                OrnamentMotion,
            )),
            ribbon: GroupInstances::new(DualLayoutGroup::new(
                geometry::generate_ribbon(config.ribbon, &mut rng),
                RibbonMotion,
            )),
            star: GroupInstances::new(DualLayoutGroup::new(geometry::generate_star(), StarMotion)),
            sparkles: GroupInstances::new(DualLayoutGroup::new(
                geometry::generate_sparkles(config.sparkles, &mut rng),
                SparkleMotion,
            )),
        }
    }

    pub fn count(&self, kind: GroupKind) -> usize {
        match kind {
            GroupKind::Leaves => self.leaves.group.len(),
            GroupKind::Ornaments => self.ornaments.group.len(),
            GroupKind::Ribbon => self.ribbon.group.len(),
            GroupKind::Star => self.star.group.len(),
            GroupKind::Sparkles => self.sparkles.group.len(),
        }
    }

    /// Rewrite every group's instance buffer for this frame.
    pub fn update(&mut self, state: &AnimationState, elapsed: f32) {
        self.leaves.update(state, elapsed);
        self.ornaments.update(state, elapsed);
        self.ribbon.update(state, elapsed);
        self.star.update(state, elapsed);
        self.sparkles.update(state, elapsed);
    }

    pub fn instances(&self, kind: GroupKind) -> &[InstanceRaw] {
        match kind {
            GroupKind::Leaves => &self.leaves.instances,
            GroupKind::Ornaments => &self.ornaments.instances,
            GroupKind::Ribbon => &self.ribbon.instances,
            GroupKind::Star => &self.star.instances,
            GroupKind::Sparkles => &self.sparkles.instances,
        }
    }
}
