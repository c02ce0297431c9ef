use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::parts::Color;
use crate::ecs::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SmokeType {
    #[default]
    Smoke,
    Sparks,
    Debris,
}

/// One puff of a smoke trail or one spark
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SmokeUnit {
    /// World position [m]
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    /// Sparks only
    pub color: Color,
    /// [m]
    pub radius: f64,
    /// 0 means hidden and free for reuse
    pub visibility: f64,
}

/// Smoke trail or spark shower
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Smoke {
    pub smoke_type: SmokeType,
    /// Offset from the trail object where units spawn [m]
    pub respawn_offset: Vector3<f64>,
    /// For sparks `radius_max` is how far they fly [m]
    pub radius_start: f64,
    pub radius_max: f64,
    /// [m/s]
    pub radius_rate: f64,
    pub hide_at_max: bool,
    pub delete_when_no_units: bool,
    /// 0 stops respawning [ms]
    pub respawn_interval: u64,
    pub respawn_next: u64,
    pub texture: Option<String>,
    /// Object the trail follows
    pub ref_object: Option<ObjectId>,
    pub units: Vec<SmokeUnit>,
}

impl Smoke {
    pub fn stop_respawn(&mut self) {
        self.respawn_interval = 0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorEmission {
    /// Lit by the scene, e.g. splashes
    #[default]
    None,
    /// Not lit by the scene
    IsLight,
    EmitLight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CenterOffset {
    #[default]
    None,
    Base,
}

/// Frame animated billboard state shared by explosions and fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameAnimation {
    /// [ms]
    pub frame_interval: u64,
    pub next_frame: u64,
    pub current_frame: u32,
    pub repeats: u32,
    /// 0 or less repeats forever
    pub total_repeats: i32,
}

/// Explosion or splash billboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Explosion {
    /// [m]
    pub radius: f64,
    pub color_emission: ColorEmission,
    pub center_offset: CenterOffset,
    pub animation: FrameAnimation,
    pub texture: Option<String>,
    pub texture_ir: Option<String>,
    pub ref_object: Option<ObjectId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fire {
    /// Cylinder centered at the base of the fire [m]
    pub radius: f64,
    pub height: f64,
    pub animation: FrameAnimation,
    pub texture: Option<String>,
    pub texture_ir: Option<String>,
    pub ref_object: Option<ObjectId>,
}
