use serde::{Deserialize, Serialize};

use super::hoist::DeploymentMode;
use crate::ecs::ObjectId;
use crate::utils::bit_flags;

bit_flags! {
    pub struct HumanFlags {
        const NEED_RESCUE = 1 << 1;
        /// Base at tush
        const SIT = 1 << 2;
        /// Base at tush, feet forward
        const SIT_DOWN = 1 << 3;
        /// Base at feet
        const SIT_UP = 1 << 4;
        const LYING = 1 << 5;
        /// Awake
        const ALERT = 1 << 6;
        /// Knows of surroundings
        const AWARE = 1 << 7;
        const IN_WATER = 1 << 8;
        const ON_STRETCHER = 1 << 9;
        const RUN = 1 << 10;
        const RUN_TOWARDS = 1 << 11;
        const RUN_AWAY = 1 << 12;
        const PUSHING = 1 << 13;
        /// Held by someone or something
        const GRIPPED = 1 << 14;
        const DIVER_CATCHER = 1 << 15;
    }
}

impl HumanFlags {
    const POSTURE_AND_MOTION: Self = Self::from_bits(
        Self::SIT.bits()
            | Self::SIT_UP.bits()
            | Self::LYING.bits()
            | Self::IN_WATER.bits()
            | Self::ON_STRETCHER.bits()
            | Self::RUN.bits()
            | Self::RUN_TOWARDS.bits()
            | Self::RUN_AWAY.bits()
            | Self::PUSHING.bits()
            | Self::DIVER_CATCHER.bits(),
    );
}

/// Who a human runs towards or away from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterceptTarget {
    #[default]
    None,
    Player,
    Object(ObjectId),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Human {
    pub flags: HumanFlags,
    /// [kg]
    pub mass: f64,
    /// [m]
    pub height: f64,
    pub intercept_target: InterceptTarget,
    /// Distances to the intercept target [m]
    pub intercept_distance_2d: f64,
    pub intercept_distance_3d: f64,
    pub assisting_humans: u32,
    /// Shown to the player when this human boards
    pub enter_message: Option<String>,
}

impl Human {
    /// Stamp the posture for being carried up by the hoist
    pub fn apply_pickup(&mut self, mode: DeploymentMode) {
        self.flags.remove(HumanFlags::NEED_RESCUE | HumanFlags::POSTURE_AND_MOTION);
        self.flags.insert(HumanFlags::GRIPPED);
        self.flags
            .set(HumanFlags::SIT_DOWN, mode == DeploymentMode::Basket);
    }

    /// Drop whatever the human was doing and lie down
    pub fn apply_crash(&mut self) {
        self.flags.remove(
            HumanFlags::GRIPPED
                | HumanFlags::SIT_DOWN
                | HumanFlags::ALERT
                | HumanFlags::AWARE
                | HumanFlags::POSTURE_AND_MOTION,
        );
        self.flags.insert(HumanFlags::LYING);
    }

    pub fn needs_rescue(&self) -> bool {
        self.flags.contains(HumanFlags::NEED_RESCUE)
    }

    pub(crate) fn forget(&mut self, id: ObjectId) {
        if self.intercept_target == InterceptTarget::Object(id) {
            self.intercept_target = InterceptTarget::None;
        }
    }
}
