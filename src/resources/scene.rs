use bevy::prelude::*;
use nalgebra::Vector3;

use super::config::CoreConfig;
use super::fdm::FdmRealm;
use super::sound::SoundSourceList;
use super::time::SimContext;
use super::visual_model::VisualModelRegistry;
use crate::components::{CameraState, Object};
use crate::ecs::{ObjectId, ObjectStore};

/// Everything the simulation core owns for one loaded scene
#[derive(Resource, Default)]
pub struct Scene {
    pub objects: ObjectStore,
    pub visual_models: VisualModelRegistry,
    pub fdm: FdmRealm,
    /// Scene wide sounds such as crashes and splashes
    pub sound_sources: SoundSourceList,
    pub ground_objects: Vec<ObjectId>,
    pub humans_need_rescue: Vec<ObjectId>,
    pub player: Option<ObjectId>,
    pub player_has_crashed: bool,
    pub camera: CameraState,
    /// Listener position [m]
    pub ear_position: Vector3<f64>,
    /// Messages for the player, oldest first
    pub messages: Vec<String>,
    /// When the newest timed message leaves the screen [ms], 0 when none is up
    pub message_display_until: u64,
    /// Lines of the centered banner, empty when hidden
    pub banner: Vec<String>,
    pub config: CoreConfig,
}

impl Scene {
    pub fn new(config: CoreConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    #[inline]
    pub fn is_player(&self, id: ObjectId) -> bool {
        self.player == Some(id)
    }

    #[inline]
    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id)
    }

    #[inline]
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.get_mut(id)
    }

    pub fn add_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Post a message that stays on screen for `message_display_ms`
    pub fn show_message(&mut self, ctx: &SimContext, message: impl Into<String>) {
        self.messages.push(message.into());
        self.message_display_until = ctx.after(self.config.message_display_ms);
    }

    #[inline]
    pub fn is_showing_message(&self, now_ms: u64) -> bool {
        self.message_display_until > now_ms
    }

    pub fn banner_clear(&mut self) {
        self.banner.clear();
    }

    pub fn banner_append(&mut self, line: impl Into<String>) {
        self.banner.push(line.into());
    }

    /// Drop scene level references to a deleted object
    pub(crate) fn forget(&mut self, id: ObjectId) {
        if self.player == Some(id) {
            self.player = None;
        }
        if self.camera.target == Some(id) {
            self.camera.target = None;
        }
        self.ground_objects.retain(|ground| *ground != id);
        self.humans_need_rescue.retain(|human| *human != id);
    }
}
