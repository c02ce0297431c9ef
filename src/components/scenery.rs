use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::spatial::Direction;
use crate::ecs::ObjectId;
use crate::resources::{VisualModelHandle, VisualModelOwner, VisualModelRegistry};
use crate::utils::bit_flags;

/// Height map grid carried by a ground object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Heightfield {
    /// Translation from the object center [m]
    pub translation: Vector3<f64>,
    pub grid_points_x: usize,
    pub grid_points_y: usize,
    /// Grid spacing [m]
    pub grid_x_spacing: f64,
    pub grid_y_spacing: f64,
    pub grid_z_spacing: f64,
    /// Row major heights, `grid_points_x * grid_points_y` values [m]
    pub heights: Vec<f64>,
}

impl Heightfield {
    pub fn x_len(&self) -> f64 {
        self.grid_points_x as f64 * self.grid_x_spacing
    }

    pub fn y_len(&self) -> f64 {
        self.grid_points_y as f64 * self.grid_y_spacing
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ground {
    /// Elevation above local MSL [m]
    pub elevation: f64,
    /// cos(-heading)
    pub cos_heading: f64,
    /// sin(-heading)
    pub sin_heading: f64,
    pub heightfield: Option<Heightfield>,
}

impl Ground {
    pub fn update_heading(&mut self, heading: f64) {
        let (s, c) = (-heading).sin_cos();
        self.sin_heading = s;
        self.cos_heading = c;
    }
}

bit_flags! {
    pub struct RunwayFlags {
        const THRESHOLDS = 1 << 0;
        const BORDERS = 1 << 1;
        const TOUCH_DOWN_MARKERS = 1 << 2;
        const MIDWAY_MARKERS = 1 << 3;
        const NORTH_GLIDE_SLOPE = 1 << 4;
        const SOUTH_GLIDE_SLOPE = 1 << 5;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunwaySurface {
    #[default]
    Paved,
    Gravel,
    Concrete,
    Grooved,
}

#[derive(Debug, Default)]
pub struct Runway {
    pub flags: RunwayFlags,
    /// [m]
    pub length: f64,
    pub width: f64,
    pub surface: RunwaySurface,
    pub north_label: Option<String>,
    pub south_label: Option<String>,
    pub dashes: u32,
    /// 0 for no edge lights [m]
    pub edge_light_spacing: f64,
    pub north_displaced_threshold: f64,
    pub south_displaced_threshold: f64,
    pub north_label_visual_model: Option<VisualModelHandle>,
    pub south_label_visual_model: Option<VisualModelHandle>,
    pub threshold_visual_model: Option<VisualModelHandle>,
    pub touch_down_marker_visual_model: Option<VisualModelHandle>,
    pub midway_marker_visual_model: Option<VisualModelHandle>,
    pub north_displaced_threshold_visual_model: Option<VisualModelHandle>,
    pub south_displaced_threshold_visual_model: Option<VisualModelHandle>,
}

impl VisualModelOwner for Runway {
    fn release_visual_models(&mut self, registry: &mut VisualModelRegistry) {
        for slot in [
            &mut self.north_label_visual_model,
            &mut self.south_label_visual_model,
            &mut self.threshold_visual_model,
            &mut self.touch_down_marker_visual_model,
            &mut self.midway_marker_visual_model,
            &mut self.north_displaced_threshold_visual_model,
            &mut self.south_displaced_threshold_visual_model,
        ] {
            registry.release_slot(slot);
        }
    }
}

bit_flags! {
    pub struct HelipadFlags {
        const LABEL = 1 << 1;
        const EDGE_LIGHTING = 1 << 2;
        const FUEL = 1 << 3;
        const REPAIR = 1 << 4;
        /// Passengers can be dropped off
        const DROPOFF = 1 << 5;
        const REF_OBJECT = 1 << 6;
        const FOLLOW_REF_OBJECT = 1 << 7;
        const RESTART_POINT = 1 << 8;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HelipadStyle {
    #[default]
    GroundPaved,
    GroundBare,
    /// Roof top
    Building,
    /// On a vehicle or vessel
    Vehicle,
}

#[derive(Debug, Default)]
pub struct Helipad {
    pub flags: HelipadFlags,
    pub style: HelipadStyle,
    /// Landable area [m]
    pub length: f64,
    pub width: f64,
    /// Depth below the surrounding surface [m]
    pub recession: f64,
    pub label: Option<String>,
    pub label_visual_model: Option<VisualModelHandle>,
    pub light_spacing: f64,
    /// Object this helipad follows
    pub ref_object: Option<ObjectId>,
    /// Applied before `ref_direction`
    pub ref_offset: Vector3<f64>,
    pub ref_direction: Direction,
}

impl VisualModelOwner for Helipad {
    fn release_visual_models(&mut self, registry: &mut VisualModelRegistry) {
        registry.release_slot(&mut self.label_visual_model);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChemicalType {
    #[default]
    Water,
    FireRetardant,
}

/// One puff of water or fire retardant
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChemicalSpray {
    pub chemical: ChemicalType,
    /// Object that released the spray
    pub owner: Option<ObjectId>,
    pub texture: Option<String>,
}

bit_flags! {
    pub struct FuelTankFlags {
        const ON_GROUND = 1 << 0;
    }
}

/// Fuel tank dropped from an aircraft
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FuelTank {
    pub flags: FuelTankFlags,
    /// [m/s]
    pub speed: f64,
    pub velocity_z_max: f64,
    pub velocity: Vector3<f64>,
    pub belly_to_center_height: f64,
    /// Aircraft it fell from
    pub ref_object: Option<ObjectId>,
    /// [kg]
    pub dry_mass: f64,
    pub fuel: f64,
    pub fuel_max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PremodeledType {
    #[default]
    Building,
    ControlTower,
    Hangar,
    PowerTransmissionTower,
    Tower,
    RadioTower,
}

/// Structure drawn from a built in model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Premodeled {
    pub premodeled_type: PremodeledType,
    /// [m]
    pub width: f64,
    pub length: f64,
    pub height: f64,
}
