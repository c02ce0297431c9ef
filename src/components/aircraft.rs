use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::hoist::Hoist;
use super::parts::{ExternalFuelTank, ObjectPart, PartFlags, PartList, PartType, Rotor};
use crate::resources::{
    FdmId, SoundPlayId, SoundServer, VisualModelHandle, VisualModelOwner, VisualModelRegistry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlightModelType {
    #[default]
    Helicopter,
    Airplane,
    /// Moved directly by the user, no dynamics
    Slew,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AirWorthyState {
    #[default]
    NotFlyable,
    OutOfControl,
    Flyable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Off,
    Init,
    On,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LandingGearState {
    #[default]
    None,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrakesState {
    #[default]
    None,
    Off,
    On,
    Locked,
}

impl BrakesState {
    pub fn is_engaged(self) -> bool {
        matches!(self, BrakesState::On | BrakesState::Locked)
    }
}

/// Waypoint an aircraft's autopilot flies towards
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Intercept {
    pub flags: u32,
    pub position: Vector3<f64>,
    /// [m]
    pub radius: f64,
    /// [0, 1]
    pub urgency: f64,
    pub name: Option<String>,
}

/// Active sound plays owned by an aircraft
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineSounds {
    pub engine_inside: Option<SoundPlayId>,
    pub engine_outside: Option<SoundPlayId>,
    pub stall: Option<SoundPlayId>,
    pub overspeed: Option<SoundPlayId>,
}

impl EngineSounds {
    pub fn stop_all(&mut self, server: &mut dyn SoundServer) {
        for play in [
            self.engine_inside.take(),
            self.engine_outside.take(),
            self.stall.take(),
            self.overspeed.take(),
        ]
        .into_iter()
        .flatten()
        {
            server.stop(play);
        }
    }
}

#[derive(Debug, Default)]
pub struct Aircraft {
    pub flight_model_type: FlightModelType,
    /// Restored when leaving slew mode
    pub last_flight_model_type: FlightModelType,
    pub fdm: Option<FdmId>,
    pub air_worthy_state: AirWorthyState,
    pub engine_state: EngineState,
    /// World velocity [m/s]
    pub velocity: Vector3<f64>,
    /// Speed at which structural damage starts [m/s]
    pub overspeed_expected: f64,
    /// Speed at which the structure fails [m/s]
    pub overspeed: f64,
    /// [m]
    pub belly_height: f64,
    pub gear_height: f64,
    /// [kg]
    pub fuel: f64,
    pub fuel_max: f64,
    pub dry_mass: f64,
    pub crew: u32,
    pub passengers: u32,
    pub passengers_max: u32,
    /// [kg]
    pub passengers_mass: f64,
    pub passengers_leave_pending: u32,
    pub passengers_drop_pending: u32,
    pub parts: PartList<ObjectPart>,
    pub rotors: PartList<Rotor>,
    pub external_fuel_tanks: PartList<ExternalFuelTank>,
    pub sounds: EngineSounds,
    pub cockpit_visual_model: Option<VisualModelHandle>,
    pub landed: bool,
    pub on_water: bool,
    pub landing_gear_state: LandingGearState,
    pub air_brakes_state: BrakesState,
    pub wheel_brakes_state: BrakesState,
    pub hoist: Option<Hoist>,
    pub intercepts: Vec<Intercept>,
    pub current_intercept: usize,
}

impl Aircraft {
    /// Append a waypoint, radius clamped to be non negative and urgency to `[0, 1]`
    pub fn add_intercept(
        &mut self,
        flags: u32,
        position: Vector3<f64>,
        radius: f64,
        urgency: f64,
        name: Option<&str>,
    ) -> usize {
        self.intercepts.push(Intercept {
            flags,
            position,
            radius: radius.max(0.0),
            urgency: urgency.clamp(0.0, 1.0),
            name: name.map(str::to_owned),
        });
        self.intercepts.len() - 1
    }

    /// The `skip + 1`-th part of the given type
    pub fn part(&self, part_type: PartType, skip: usize) -> Option<&ObjectPart> {
        self.parts
            .iter()
            .filter(|part| part.part_type == part_type)
            .nth(skip)
    }

    pub fn landing_gear(&self) -> impl Iterator<Item = &ObjectPart> {
        self.parts
            .iter()
            .filter(|part| part.part_type == PartType::LandingGear)
    }

    /// True if any landing gear can land on water
    pub fn has_floats(&self) -> bool {
        self.landing_gear()
            .any(|gear| gear.flags.contains(PartFlags::GEAR_FLOATS))
    }

    /// Fuel left in the aircraft and its attached external tanks [kg]
    pub fn fuel_remaining(&self) -> f64 {
        self.fuel.max(0.0)
            + self
                .external_fuel_tanks
                .iter()
                .filter(|tank| tank.is_onboard())
                .map(ExternalFuelTank::total_mass)
                .sum::<f64>()
    }

    pub fn has_passenger_room(&self) -> bool {
        self.passengers < self.passengers_max
    }

    pub fn is_slew(&self) -> bool {
        self.flight_model_type == FlightModelType::Slew
    }
}

impl VisualModelOwner for Aircraft {
    fn release_visual_models(&mut self, registry: &mut VisualModelRegistry) {
        registry.release_slot(&mut self.cockpit_visual_model);
        self.parts.delete_all(registry);
        self.rotors.delete_all(registry);
        self.external_fuel_tanks.delete_all(registry);
    }
}
