use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::spatial::Direction;
use crate::resources::{VisualModelHandle, VisualModelOwner, VisualModelRegistry};
use crate::utils::bit_flags;

/// Slot list of sub objects owned by a single object.
///
/// New entries reuse the first empty slot, so indices stay stable while
/// other entries are removed.
#[derive(Debug)]
pub struct PartList<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for PartList<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> PartList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: T) -> usize {
        match self.slots.iter().position(Option::is_none) {
            Some(index) => {
                self.slots[index] = Some(item);
                index
            }
            None => {
                self.slots.push(Some(item));
                self.slots.len() - 1
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().flatten()
    }

    /// Remove every entry and reset the list
    pub fn take_all(&mut self) -> Vec<T> {
        std::mem::take(&mut self.slots).into_iter().flatten().collect()
    }
}

impl<T: VisualModelOwner> PartList<T> {
    /// Release the visual models of every entry, then empty the list
    pub fn delete_all(&mut self, registry: &mut VisualModelRegistry) {
        for mut item in self.take_all() {
            item.release_visual_models(registry);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartType {
    AileronLeft,
    AileronRight,
    RudderTop,
    RudderBottom,
    Elevator,
    /// Forward elevator
    Cannard,
    AileronElevatorLeft,
    AileronElevatorRight,
    Flap,
    AirBrake,
    Door,
    DoorRescue,
    Canopy,
    LandingGear,
}

bit_flags! {
    /// Door and landing gear flags share bits 3 and up
    pub struct PartFlags {
        /// Opened or extended
        const STATE = 1 << 0;
        const HIDE_MIN = 1 << 1;
        const HIDE_MAX = 1 << 2;
        const DOOR_FIXED = 1 << 3;
        const DOOR_LOCKED = 1 << 4;
        const DOOR_STAY_OPEN = 1 << 5;
        /// Always down
        const GEAR_FIXED = 1 << 3;
        const GEAR_DAMAGED = 1 << 4;
        const GEAR_MISSING = 1 << 5;
        const GEAR_SKI = 1 << 6;
        /// Can land on water
        const GEAR_FLOATS = 1 << 7;
    }
}

/// Animated part such as a door, control surface or landing gear
#[derive(Debug)]
pub struct ObjectPart {
    pub part_type: PartType,
    pub flags: PartFlags,
    /// Offsets from the object center at the animation limits [m]
    pub pos_min: Vector3<f64>,
    pub pos_center: Vector3<f64>,
    pub pos_max: Vector3<f64>,
    pub dir_min: Direction,
    pub dir_center: Direction,
    pub dir_max: Direction,
    pub anim_pos: u16,
    pub anim_rate: u16,
    pub temperature: f64,
    pub visual_model: Option<VisualModelHandle>,
    pub visual_model_ir: Option<VisualModelHandle>,
}

impl ObjectPart {
    pub fn new(part_type: PartType) -> Self {
        Self {
            part_type,
            flags: PartFlags::empty(),
            pos_min: Vector3::zeros(),
            pos_center: Vector3::zeros(),
            pos_max: Vector3::zeros(),
            dir_min: Direction::default(),
            dir_center: Direction::default(),
            dir_max: Direction::default(),
            anim_pos: 0,
            anim_rate: 0,
            temperature: crate::utils::DEFAULT_TEMPERATURE,
            visual_model: None,
            visual_model_ir: None,
        }
    }

    pub fn with_flags(mut self, flags: PartFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_positions(mut self, min: Vector3<f64>, center: Vector3<f64>, max: Vector3<f64>) -> Self {
        self.pos_min = min;
        self.pos_center = center;
        self.pos_max = max;
        self
    }
}

impl VisualModelOwner for ObjectPart {
    fn release_visual_models(&mut self, registry: &mut VisualModelRegistry) {
        registry.release_slot(&mut self.visual_model);
        registry.release_slot(&mut self.visual_model_ir);
    }
}

bit_flags! {
    pub struct RotorFlags {
        const SPINS = 1 << 0;
        const CAN_PITCH = 1 << 1;
        /// Pitched forward, airplane style
        const PITCH_STATE = 1 << 2;
        const NO_PITCH_LANDED = 1 << 3;
        const FOLLOW_CONTROLS = 1 << 5;
        const BLUR_WHEN_FAST = 1 << 8;
        const BLUR_ALWAYS = 1 << 9;
    }
}

#[derive(Debug)]
pub struct Rotor {
    pub flags: RotorFlags,
    pub position: Vector3<f64>,
    pub direction: Direction,
    pub radius: f64,
    pub blades_offset: f64,
    pub total_blades: u32,
    pub anim_pos: u16,
    pub pitch_anim_pos: u16,
    pub rotor_wash_anim_pos: u16,
    pub blade_blur_texture: Option<String>,
    pub wash_texture: Option<String>,
    pub control_coeff_pitch: f64,
    pub control_coeff_bank: f64,
    pub blades_blur_color: Color,
    pub visual_model: Option<VisualModelHandle>,
    pub visual_model_ir: Option<VisualModelHandle>,
}

impl Default for Rotor {
    fn default() -> Self {
        Self {
            flags: RotorFlags::empty(),
            position: Vector3::zeros(),
            // Pointing straight up
            direction: Direction::new(0.0, 0.5 * PI, 0.0),
            radius: 0.0,
            blades_offset: 0.0,
            total_blades: 0,
            anim_pos: 0,
            pitch_anim_pos: 0,
            rotor_wash_anim_pos: 0,
            blade_blur_texture: None,
            wash_texture: None,
            control_coeff_pitch: 0.0,
            control_coeff_bank: 0.0,
            blades_blur_color: Color::default(),
            visual_model: None,
            visual_model_ir: None,
        }
    }
}

impl VisualModelOwner for Rotor {
    fn release_visual_models(&mut self, registry: &mut VisualModelRegistry) {
        registry.release_slot(&mut self.visual_model);
        registry.release_slot(&mut self.visual_model_ir);
    }
}

bit_flags! {
    pub struct ExternalFuelTankFlags {
        /// Cannot be dropped
        const FIXED = 1 << 0;
        /// Not yet jettisoned
        const ONBOARD = 1 << 1;
    }
}

#[derive(Debug)]
pub struct ExternalFuelTank {
    pub flags: ExternalFuelTankFlags,
    pub offset: Vector3<f64>,
    pub radius: f64,
    pub belly_to_center_height: f64,
    /// Masses [kg]
    pub dry_mass: f64,
    pub fuel: f64,
    pub fuel_max: f64,
    pub temperature: f64,
    pub visual_model: Option<VisualModelHandle>,
    pub visual_model_ir: Option<VisualModelHandle>,
}

impl Default for ExternalFuelTank {
    fn default() -> Self {
        Self {
            flags: ExternalFuelTankFlags::ONBOARD,
            offset: Vector3::zeros(),
            radius: 0.0,
            belly_to_center_height: 0.0,
            dry_mass: 0.0,
            fuel: 0.0,
            fuel_max: 0.0,
            temperature: crate::utils::DEFAULT_TEMPERATURE,
            visual_model: None,
            visual_model_ir: None,
        }
    }
}

impl ExternalFuelTank {
    pub fn is_onboard(&self) -> bool {
        self.flags.contains(ExternalFuelTankFlags::ONBOARD)
    }

    pub fn total_mass(&self) -> f64 {
        self.dry_mass + self.fuel
    }
}

impl VisualModelOwner for ExternalFuelTank {
    fn release_visual_models(&mut self, registry: &mut VisualModelRegistry) {
        registry.release_slot(&mut self.visual_model);
        registry.release_slot(&mut self.visual_model_ir);
    }
}

bit_flags! {
    pub struct LightFlags {
        const ON = 1 << 0;
        const STROBE = 1 << 1;
        const ATTENUATE = 1 << 2;
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Light {
    pub flags: LightFlags,
    pub position: Vector3<f64>,
    pub direction: Direction,
    /// Size in pixels
    pub radius: u32,
    pub color: Color,
    pub attenuate_color: Color,
    /// Strobe timers [ms]
    pub next_on: u64,
    pub interval_on: u64,
    pub next_off: u64,
    pub interval_off: u64,
    pub interval_delay_on: u64,
}

impl Light {
    pub fn turn_off(&mut self) {
        self.flags
            .remove(LightFlags::ON | LightFlags::ATTENUATE | LightFlags::STROBE);
    }
}
