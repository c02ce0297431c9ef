use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::aircraft::Aircraft;
use super::contact::{ContactBounds, ContactShape};
use super::effects::{Explosion, Fire, Smoke};
use super::human::Human;
use super::parts::{Light, PartList};
use super::scenery::{ChemicalSpray, FuelTank, Ground, Helipad, Premodeled, Runway};
use super::spatial::Direction;
use crate::ecs::ObjectId;
use crate::resources::{
    FdmId, SoundSourceList, VisualModelHandle, VisualModelOwner, VisualModelRegistry,
};

/// Object type tag, numbered as in scene files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    Garbage = 0,
    Static = 1,
    Automobile = 2,
    Watercraft = 3,
    Aircraft = 4,
    Ground = 6,
    Runway = 7,
    Helipad = 8,
    Human = 9,
    Smoke = 10,
    Fire = 11,
    Explosion = 12,
    ChemicalSpray = 13,
    FuelTank = 14,
    Premodeled = 20,
}

impl ObjectType {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        let object_type = match code {
            0 => ObjectType::Garbage,
            1 => ObjectType::Static,
            2 => ObjectType::Automobile,
            3 => ObjectType::Watercraft,
            4 => ObjectType::Aircraft,
            6 => ObjectType::Ground,
            7 => ObjectType::Runway,
            8 => ObjectType::Helipad,
            9 => ObjectType::Human,
            10 => ObjectType::Smoke,
            11 => ObjectType::Fire,
            12 => ObjectType::Explosion,
            13 => ObjectType::ChemicalSpray,
            14 => ObjectType::FuelTank,
            20 => ObjectType::Premodeled,
            _ => return None,
        };
        Some(object_type)
    }
}

/// Type specific payload, one variant per instantiable object type
#[derive(Debug)]
pub enum ObjectKind {
    Static,
    Automobile,
    Watercraft,
    Aircraft(Box<Aircraft>),
    Ground(Ground),
    Runway(Runway),
    Helipad(Helipad),
    Human(Human),
    Smoke(Smoke),
    Fire(Fire),
    Explosion(Explosion),
    ChemicalSpray(ChemicalSpray),
    FuelTank(FuelTank),
    Premodeled(Premodeled),
}

impl ObjectKind {
    /// Empty payload for a type, `None` for garbage
    pub fn from_type(object_type: ObjectType) -> Option<Self> {
        let kind = match object_type {
            ObjectType::Garbage => return None,
            ObjectType::Static => ObjectKind::Static,
            ObjectType::Automobile => ObjectKind::Automobile,
            ObjectType::Watercraft => ObjectKind::Watercraft,
            ObjectType::Aircraft => ObjectKind::Aircraft(Box::default()),
            ObjectType::Ground => ObjectKind::Ground(Ground::default()),
            ObjectType::Runway => ObjectKind::Runway(Runway::default()),
            ObjectType::Helipad => ObjectKind::Helipad(Helipad::default()),
            ObjectType::Human => ObjectKind::Human(Human::default()),
            ObjectType::Smoke => ObjectKind::Smoke(Smoke::default()),
            ObjectType::Fire => ObjectKind::Fire(Fire::default()),
            ObjectType::Explosion => ObjectKind::Explosion(Explosion::default()),
            ObjectType::ChemicalSpray => ObjectKind::ChemicalSpray(ChemicalSpray::default()),
            ObjectType::FuelTank => ObjectKind::FuelTank(FuelTank::default()),
            ObjectType::Premodeled => ObjectKind::Premodeled(Premodeled::default()),
        };
        Some(kind)
    }

    pub fn object_type(&self) -> ObjectType {
        match self {
            ObjectKind::Static => ObjectType::Static,
            ObjectKind::Automobile => ObjectType::Automobile,
            ObjectKind::Watercraft => ObjectType::Watercraft,
            ObjectKind::Aircraft(_) => ObjectType::Aircraft,
            ObjectKind::Ground(_) => ObjectType::Ground,
            ObjectKind::Runway(_) => ObjectType::Runway,
            ObjectKind::Helipad(_) => ObjectType::Helipad,
            ObjectKind::Human(_) => ObjectType::Human,
            ObjectKind::Smoke(_) => ObjectType::Smoke,
            ObjectKind::Fire(_) => ObjectType::Fire,
            ObjectKind::Explosion(_) => ObjectType::Explosion,
            ObjectKind::ChemicalSpray(_) => ObjectType::ChemicalSpray,
            ObjectKind::FuelTank(_) => ObjectType::FuelTank,
            ObjectKind::Premodeled(_) => ObjectType::Premodeled,
        }
    }
}

/// The seven standard renderings of an object
#[derive(Debug, Default)]
pub struct StandardVisualModels {
    pub day: Option<VisualModelHandle>,
    pub night: Option<VisualModelHandle>,
    pub dusk: Option<VisualModelHandle>,
    pub dawn: Option<VisualModelHandle>,
    pub far: Option<VisualModelHandle>,
    pub ir: Option<VisualModelHandle>,
    pub shadow: Option<VisualModelHandle>,
}

impl VisualModelOwner for StandardVisualModels {
    fn release_visual_models(&mut self, registry: &mut VisualModelRegistry) {
        for slot in [
            &mut self.day,
            &mut self.night,
            &mut self.dusk,
            &mut self.dawn,
            &mut self.far,
            &mut self.ir,
            &mut self.shadow,
        ] {
            registry.release_slot(slot);
        }
    }
}

/// A scene object
#[derive(Debug)]
pub struct Object {
    kind: ObjectKind,
    pub name: Option<String>,
    /// World position [m]
    pub position: Vector3<f64>,
    pub direction: Direction,
    /// Visual range cutoffs [m]
    pub range: f64,
    pub range_far: f64,
    /// Ground elevation under the object, above MSL [m]
    pub ground_elevation_msl: f64,
    pub hit_points: f64,
    pub hit_points_max: f64,
    /// IR temperature [0, 1]
    pub temperature: f64,
    /// [ms]
    pub birth_time_ms: u64,
    /// [s]
    pub birth_time_sec: f64,
    /// Absolute time the object is deleted at, 0 for never [ms]
    pub life_span: u64,
    pub contact_bounds: Option<ContactBounds>,
    pub lights: PartList<Light>,
    pub sound_sources: SoundSourceList,
    pub visual_models: StandardVisualModels,
}

macro_rules! payload_accessors {
    ($($variant:ident => $get:ident, $get_mut:ident: $payload:ty;)*) => {
        $(
            pub fn $get(&self) -> Option<&$payload> {
                match &self.kind {
                    ObjectKind::$variant(payload) => Some(payload),
                    _ => None,
                }
            }

            pub fn $get_mut(&mut self) -> Option<&mut $payload> {
                match &mut self.kind {
                    ObjectKind::$variant(payload) => Some(payload),
                    _ => None,
                }
            }
        )*
    };
}

impl Object {
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            kind,
            name: None,
            position: Vector3::zeros(),
            direction: Direction::default(),
            range: 0.0,
            range_far: 0.0,
            ground_elevation_msl: 0.0,
            hit_points: 0.0,
            hit_points_max: 0.0,
            temperature: crate::utils::DEFAULT_TEMPERATURE,
            birth_time_ms: 0,
            birth_time_sec: 0.0,
            life_span: 0,
            contact_bounds: None,
            lights: PartList::new(),
            sound_sources: SoundSourceList::new(),
            visual_models: StandardVisualModels::default(),
        }
    }

    #[inline]
    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    #[inline]
    pub fn object_type(&self) -> ObjectType {
        self.kind.object_type()
    }

    payload_accessors! {
        Ground => ground, ground_mut: Ground;
        Runway => runway, runway_mut: Runway;
        Helipad => helipad, helipad_mut: Helipad;
        Human => human, human_mut: Human;
        Smoke => smoke, smoke_mut: Smoke;
        Fire => fire, fire_mut: Fire;
        Explosion => explosion, explosion_mut: Explosion;
        ChemicalSpray => chemical_spray, chemical_spray_mut: ChemicalSpray;
        FuelTank => fuel_tank, fuel_tank_mut: FuelTank;
        Premodeled => premodeled, premodeled_mut: Premodeled;
    }

    pub fn aircraft(&self) -> Option<&Aircraft> {
        match &self.kind {
            ObjectKind::Aircraft(aircraft) => Some(&**aircraft),
            _ => None,
        }
    }

    pub fn aircraft_mut(&mut self) -> Option<&mut Aircraft> {
        match &mut self.kind {
            ObjectKind::Aircraft(aircraft) => Some(&mut **aircraft),
            _ => None,
        }
    }

    /// Display name, falling back to the object number
    pub fn display_name(&self, id: ObjectId) -> String {
        self.name.clone().unwrap_or_else(|| id.to_string())
    }

    /// FDM model mirroring this object
    pub fn fdm(&self) -> Option<FdmId> {
        self.aircraft().and_then(|aircraft| aircraft.fdm)
    }

    /// Object this one is attached to or follows
    pub fn ref_object(&self) -> Option<ObjectId> {
        match &self.kind {
            ObjectKind::Smoke(smoke) => smoke.ref_object,
            ObjectKind::Fire(fire) => fire.ref_object,
            ObjectKind::Explosion(explosion) => explosion.ref_object,
            ObjectKind::FuelTank(tank) => tank.ref_object,
            ObjectKind::Helipad(helipad) => helipad.ref_object,
            ObjectKind::ChemicalSpray(spray) => spray.owner,
            _ => None,
        }
    }

    /// Unset every by-handle reference to `id`
    pub fn clear_references_to(&mut self, id: ObjectId) {
        fn clear(slot: &mut Option<ObjectId>, id: ObjectId) {
            if *slot == Some(id) {
                *slot = None;
            }
        }

        match &mut self.kind {
            ObjectKind::Smoke(smoke) => clear(&mut smoke.ref_object, id),
            ObjectKind::Fire(fire) => clear(&mut fire.ref_object, id),
            ObjectKind::Explosion(explosion) => clear(&mut explosion.ref_object, id),
            ObjectKind::FuelTank(tank) => clear(&mut tank.ref_object, id),
            ObjectKind::Helipad(helipad) => clear(&mut helipad.ref_object, id),
            ObjectKind::ChemicalSpray(spray) => clear(&mut spray.owner, id),
            ObjectKind::Human(human) => human.forget(id),
            ObjectKind::Aircraft(aircraft) => {
                if let Some(hoist) = aircraft.hoist.as_mut() {
                    hoist.forget(id);
                }
            }
            _ => {}
        }
    }

    /// Recompute heading dependent trig after the heading changed
    pub fn update_heading_trig(&mut self) {
        let heading = self.direction.heading;
        if let ObjectKind::Ground(ground) = &mut self.kind {
            ground.update_heading(heading);
        }
        if let Some(ContactBounds {
            shape: ContactShape::Rectangular(rect),
            ..
        }) = self.contact_bounds.as_mut()
        {
            rect.update_heading(heading);
        }
    }

    /// True once a mortal object's life span has passed
    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.life_span > 0 && self.life_span <= now_ms
    }
}

impl VisualModelOwner for Object {
    fn release_visual_models(&mut self, registry: &mut VisualModelRegistry) {
        match &mut self.kind {
            ObjectKind::Aircraft(aircraft) => aircraft.release_visual_models(registry),
            ObjectKind::Runway(runway) => runway.release_visual_models(registry),
            ObjectKind::Helipad(helipad) => helipad.release_visual_models(registry),
            _ => {}
        }
        self.visual_models.release_visual_models(registry);
    }
}
