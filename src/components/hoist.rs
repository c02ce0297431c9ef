use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::spatial::Direction;
use crate::ecs::ObjectId;
use crate::utils::{bit_flags, HOIST_MAX_OCCUPANTS};

bit_flags! {
    /// Deployments a hoist supports
    pub struct HoistDeployments {
        const BASKET = 1 << 0;
        const DIVER = 1 << 1;
        const HOOK = 1 << 2;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeploymentMode {
    #[default]
    Basket,
    Diver,
    Hook,
}

impl DeploymentMode {
    pub fn as_flag(self) -> HoistDeployments {
        match self {
            DeploymentMode::Basket => HoistDeployments::BASKET,
            DeploymentMode::Diver => HoistDeployments::DIVER,
            DeploymentMode::Hook => HoistDeployments::HOOK,
        }
    }
}

/// Rescue hoist mounted on an aircraft
#[derive(Debug, Clone, Default)]
pub struct Hoist {
    /// Offset from the aircraft center [m]
    pub offset: Vector3<f64>,
    /// World position of the basket [m]
    pub position: Vector3<f64>,
    pub direction: Direction,
    /// Rope extension, retracted at or below 0 [m]
    pub rope_current: f64,
    pub rope_max: f64,
    /// [m/s]
    pub rope_rate: f64,
    pub on_ground: bool,
    pub deployments: HoistDeployments,
    pub deployment: DeploymentMode,
    /// Cylindrical contact area of the basket [m]
    pub contact_radius: f64,
    pub contact_z_min: f64,
    pub contact_z_max: f64,
    /// Load capacity [kg]
    pub capacity: f64,
    occupants: Vec<ObjectId>,
    /// Total mass of the occupants [kg]
    pub occupants_mass: f64,
}

impl Hoist {
    pub fn occupants(&self) -> &[ObjectId] {
        &self.occupants
    }

    pub fn is_full(&self) -> bool {
        self.occupants.len() >= HOIST_MAX_OCCUPANTS
    }

    /// Add an occupant and its mass, refused when the hoist is full
    pub fn add_occupant(&mut self, human: ObjectId, mass: f64) -> bool {
        if self.is_full() {
            return false;
        }
        self.occupants.push(human);
        self.occupants_mass += mass;
        true
    }

    /// Empty the hoist, returning the former occupants
    pub fn take_occupants(&mut self) -> Vec<ObjectId> {
        self.occupants_mass = 0.0;
        std::mem::take(&mut self.occupants)
    }

    /// Fully retract and empty the hoist
    pub fn reset(&mut self) -> Vec<ObjectId> {
        self.rope_current = 0.0;
        self.on_ground = false;
        self.take_occupants()
    }

    pub(crate) fn forget(&mut self, id: ObjectId) {
        self.occupants.retain(|occupant| *occupant != id);
    }
}
