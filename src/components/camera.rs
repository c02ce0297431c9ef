use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::ecs::ObjectId;

/// Where the scene camera looks from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraRef {
    #[default]
    Cockpit,
    Spot,
    Tower,
    Map,
    Hoist,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraState {
    pub reference: CameraRef,
    pub target: Option<ObjectId>,
    /// World position of the tower camera [m]
    pub tower_position: Vector3<f64>,
}

impl CameraState {
    pub fn is_inside(&self) -> bool {
        self.reference == CameraRef::Cockpit
    }

    /// Point the camera at `target` from `reference`
    pub fn view(&mut self, reference: CameraRef, target: ObjectId) {
        self.reference = reference;
        self.target = Some(target);
    }

    /// True if already watching `target` from the tower or spot camera
    pub fn is_watching_from_outside(&self, target: ObjectId) -> bool {
        matches!(self.reference, CameraRef::Tower | CameraRef::Spot) && self.target == Some(target)
    }
}
