use std::sync::{Arc, Mutex};

use sar_core::{
    ecs::ObjectId,
    resources::{
        GroundContact, GroundQuery, MissionLayer, PlayRequest, Scene, SoundPlayId, SoundServer,
    },
};

/// Sound server that remembers every play request
#[derive(Clone, Default)]
pub struct RecordingSound {
    pub played: Arc<Mutex<Vec<PlayRequest>>>,
}

impl RecordingSound {
    pub fn filenames(&self) -> Vec<String> {
        self.played
            .lock()
            .map(|played| played.iter().map(|r| r.filename.clone()).collect())
            .unwrap_or_default()
    }
}

impl SoundServer for RecordingSound {
    fn play(&mut self, request: PlayRequest) -> Option<SoundPlayId> {
        let mut played = self.played.lock().ok()?;
        played.push(request);
        Some(SoundPlayId(played.len() as u64))
    }

    fn stop(&mut self, _play: SoundPlayId) {}
}

#[derive(Debug, Clone, PartialEq)]
pub enum MissionCall {
    Destroy(ObjectId),
    Land(ObjectId, Vec<ObjectId>),
    HoistIn(ObjectId, usize),
    PassengersEnter(ObjectId, usize),
}

/// Mission layer that remembers every notification
#[derive(Clone, Default)]
pub struct RecordingMission {
    pub calls: Arc<Mutex<Vec<MissionCall>>>,
}

impl RecordingMission {
    pub fn calls(&self) -> Vec<MissionCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: MissionCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl MissionLayer for RecordingMission {
    fn destroy_notify(&mut self, object: ObjectId) {
        self.record(MissionCall::Destroy(object));
    }

    fn land_notify(&mut self, object: ObjectId, hit_list: &[ObjectId]) {
        self.record(MissionCall::Land(object, hit_list.to_vec()));
    }

    fn hoist_in_notify(&mut self, object: ObjectId, count: usize) {
        self.record(MissionCall::HoistIn(object, count));
    }

    fn passengers_enter_notify(&mut self, object: ObjectId, count: usize) {
        self.record(MissionCall::PassengersEnter(object, count));
    }
}

/// Ground that is all land or all water, with a fixed hit list
#[derive(Clone, Default)]
pub struct ScriptedGround {
    pub over_water: bool,
    pub hit_list: Vec<ObjectId>,
}

impl GroundQuery for ScriptedGround {
    fn ground_hit_check(&mut self, _scene: &Scene, _object: ObjectId) -> GroundContact {
        GroundContact {
            got_hit: true,
            over_water: self.over_water,
        }
    }

    fn hit_list(&mut self, _scene: &Scene, _object: ObjectId) -> Vec<ObjectId> {
        self.hit_list.clone()
    }
}
