use bevy::log::debug;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::services::{PlayRequest, SoundServer};
use crate::components::Direction;

/// A named sound an object or the scene can play
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoundSource {
    pub name: String,
    pub filename: Option<String>,
    pub filename_far: Option<String>,
    /// Maximum audible range [m], 0 for unlimited
    pub range: f64,
    /// Beyond this range the far sound is used [m]
    pub range_far: f64,
    /// Offset from the owner's center [m]
    pub position: Vector3<f64>,
    /// Directional cutoff [rad], 0 for all directions
    pub cutoff: f64,
    pub direction: Direction,
    /// Highest sample rate the source may be raised to [Hz]
    pub sample_rate_limit: u32,
}

impl SoundSource {
    pub fn new(name: impl Into<String>, filename: Option<&str>, filename_far: Option<&str>) -> Self {
        Self {
            name: name.into(),
            filename: filename.map(str::to_owned),
            filename_far: filename_far.map(str::to_owned),
            ..Default::default()
        }
    }

    pub fn with_range(mut self, range: f64, range_far: f64) -> Self {
        self.range = range;
        self.range_far = range_far;
        self
    }

    pub fn with_offset(mut self, position: Vector3<f64>) -> Self {
        self.position = position;
        self
    }

    pub fn with_cutoff(mut self, cutoff: f64, direction: Direction) -> Self {
        self.cutoff = cutoff;
        self.direction = direction;
        self
    }

    pub fn with_sample_rate_limit(mut self, limit: u32) -> Self {
        self.sample_rate_limit = limit;
        self
    }
}

/// Flat list of sound sources looked up by name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoundSourceList {
    sources: Vec<SoundSource>,
}

impl SoundSourceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, source: SoundSource) -> usize {
        self.sources.push(source);
        self.sources.len() - 1
    }

    /// Index of the first source called `name`
    pub fn match_name(&self, name: &str) -> Option<usize> {
        self.sources.iter().position(|source| source.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&SoundSource> {
        self.sources.get(index)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn clear(&mut self) {
        self.sources.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &SoundSource> {
        self.sources.iter()
    }

    /// Play the source called `name` once, attenuated by its distance to the ear.
    ///
    /// The source offset is rotated into world space by the owner's orientation.
    /// Returns true if a play request was sent.
    pub fn play(
        &self,
        server: &mut dyn SoundServer,
        name: &str,
        owner_position: &Vector3<f64>,
        owner_direction: &Direction,
        ear_position: &Vector3<f64>,
    ) -> bool {
        let Some(source) = self.match_name(name).and_then(|i| self.get(i)) else {
            return false;
        };
        let Some(filename) = source.filename.as_deref() else {
            return false;
        };

        let world_position = owner_position + owner_direction.rotate_to_world(&source.position);
        let distance = (world_position - ear_position).norm();

        let volume = if source.range > 0.0 {
            if distance >= source.range {
                return false;
            }
            (1.0 - distance / source.range).max(0.0)
        } else {
            1.0
        };

        debug!("Playing sound {} at volume {:.2}", name, volume);
        server
            .play(PlayRequest {
                filename: filename.to_owned(),
                volume_left: volume,
                volume_right: volume,
                sample_rate_coeff: 1.0,
                options: 0,
            })
            .is_some()
    }
}
