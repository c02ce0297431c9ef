use bevy::prelude::*;

use super::scene::Scene;
use crate::ecs::ObjectId;

/// Result of a ground hit check below an object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroundContact {
    pub got_hit: bool,
    pub over_water: bool,
}

/// Scene queries answered by the renderer
pub trait GroundQuery: Send + Sync {
    fn ground_hit_check(&mut self, scene: &Scene, object: ObjectId) -> GroundContact;

    /// Objects the given object is resting on or over
    fn hit_list(&mut self, scene: &Scene, object: ObjectId) -> Vec<ObjectId>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundPlayId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct PlayRequest {
    pub filename: String,
    pub volume_left: f64,
    pub volume_right: f64,
    pub sample_rate_coeff: f64,
    pub options: u32,
}

pub trait SoundServer: Send + Sync {
    fn play(&mut self, request: PlayRequest) -> Option<SoundPlayId>;
    fn stop(&mut self, play: SoundPlayId);
}

/// One-way notifications to the mission layer
pub trait MissionLayer: Send + Sync {
    fn destroy_notify(&mut self, object: ObjectId);
    fn land_notify(&mut self, object: ObjectId, hit_list: &[ObjectId]);
    fn hoist_in_notify(&mut self, object: ObjectId, count: usize);
    fn passengers_enter_notify(&mut self, object: ObjectId, count: usize);
}

/// Flat dry ground everywhere
#[derive(Debug, Default)]
pub struct NullGround;

impl GroundQuery for NullGround {
    fn ground_hit_check(&mut self, _scene: &Scene, _object: ObjectId) -> GroundContact {
        GroundContact {
            got_hit: true,
            over_water: false,
        }
    }

    fn hit_list(&mut self, _scene: &Scene, _object: ObjectId) -> Vec<ObjectId> {
        Vec::new()
    }
}

#[derive(Debug, Default)]
pub struct NullSound;

impl SoundServer for NullSound {
    fn play(&mut self, _request: PlayRequest) -> Option<SoundPlayId> {
        None
    }

    fn stop(&mut self, _play: SoundPlayId) {}
}

#[derive(Debug, Default)]
pub struct NullMission;

impl MissionLayer for NullMission {
    fn destroy_notify(&mut self, _object: ObjectId) {}
    fn land_notify(&mut self, _object: ObjectId, _hit_list: &[ObjectId]) {}
    fn hoist_in_notify(&mut self, _object: ObjectId, _count: usize) {}
    fn passengers_enter_notify(&mut self, _object: ObjectId, _count: usize) {}
}

/// External collaborators the core calls into
#[derive(Resource)]
pub struct SimServices {
    pub ground: Box<dyn GroundQuery>,
    pub sound: Box<dyn SoundServer>,
    pub mission: Box<dyn MissionLayer>,
}

impl Default for SimServices {
    fn default() -> Self {
        Self {
            ground: Box::new(NullGround),
            sound: Box::new(NullSound),
            mission: Box::new(NullMission),
        }
    }
}

impl SimServices {
    pub fn with_ground(mut self, ground: impl GroundQuery + 'static) -> Self {
        self.ground = Box::new(ground);
        self
    }

    pub fn with_sound(mut self, sound: impl SoundServer + 'static) -> Self {
        self.sound = Box::new(sound);
        self
    }

    pub fn with_mission(mut self, mission: impl MissionLayer + 'static) -> Self {
        self.mission = Box::new(mission);
        self
    }
}
