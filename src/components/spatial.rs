use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{rotate_bank, rotate_heading, rotate_pitch, sanitize_radians};

/// Orientation of an object in world space [rad]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Direction {
    /// Clockwise from north
    pub heading: f64,
    pub pitch: f64,
    pub bank: f64,
}

impl Direction {
    pub const fn new(heading: f64, pitch: f64, bank: f64) -> Self {
        Self {
            heading,
            pitch,
            bank,
        }
    }

    /// Rotate an offset expressed in this orientation's frame into world axes
    pub fn rotate_to_world(&self, offset: &Vector3<f64>) -> Vector3<f64> {
        let v = rotate_bank(offset, -self.bank);
        let v = rotate_pitch(&v, self.pitch);
        rotate_heading(&v, self.heading)
    }

    /// Per axis sum, each wrapped into `[0, 2π)`
    pub fn compose(&self, offset: &Direction) -> Direction {
        Direction {
            heading: sanitize_radians(self.heading + offset.heading),
            pitch: sanitize_radians(self.pitch + offset.pitch),
            bank: sanitize_radians(self.bank + offset.bank),
        }
    }
}

/// Position and orientation of an object
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    /// World position [m]
    pub position: Vector3<f64>,
    pub direction: Direction,
}
